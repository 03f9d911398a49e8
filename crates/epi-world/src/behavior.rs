//! The `Behavior` trait: the per-agent decision algorithm.

use crate::Body;

/// Pluggable agent "brain".
///
/// The grid calls [`decide_and_act`][Self::decide_and_act] once per turn for
/// every agent that is not stuck.  The [`Body`] handle gives read access to
/// the whole world and mutable access to the acting agent (movement, facing,
/// its RNG) plus the world-level actions a strategy may take.
///
/// Implementations own their per-agent memory (current target, work list)
/// directly; every agent gets its own boxed instance.
///
/// # Example
///
/// ```rust,ignore
/// struct WalkEast;
///
/// impl Behavior for WalkEast {
///     fn decide_and_act(&mut self, body: &mut Body<'_>) {
///         body.move_in(Direction::East);
///     }
///
///     fn label(&self) -> &'static str { "walk-east" }
/// }
/// ```
pub trait Behavior: Send + 'static {
    /// Take zero or more actions for this turn.  By convention at most one
    /// of them is a movement.
    fn decide_and_act(&mut self, body: &mut Body<'_>);

    /// Short role label, used by renderers to pick a glyph and by output
    /// writers.
    fn label(&self) -> &'static str;
}
