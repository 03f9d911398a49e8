//! Partitioner strategy: wall off one grid row.

use epi_core::Coordinates;
use epi_world::{Behavior, Body};
use tracing::debug;

use crate::util::{greedy_step, random_move};

/// Works through every cell of one horizontal row in random order: walks
/// until Manhattan-adjacent to the chosen cell, tries to build a wall there,
/// and drops the cell from its list whether or not the wall went up.  With
/// the list exhausted it wanders for the rest of the run.
///
/// Steps are purely greedy, so a partitioner that starts on its own row only
/// ever moves along it.  Once it has walled a row cell on one side, any later
/// target beyond that wall leaves it pushing into the wall and the row stays
/// unfinished.  Completing the row requires starting off it.
#[derive(Debug)]
pub struct Partitioner {
    row:     i32,
    targets: Vec<Coordinates>,
    current: Option<Coordinates>,
}

impl Partitioner {
    /// Targets `(0, row) .. (width - 1, row)`.
    pub fn new(width: u32, row: u32) -> Self {
        let row = row as i32;
        let targets = (0..width as i32).map(|x| Coordinates::new(x, row)).collect();
        Self { row, targets, current: None }
    }

    pub fn row(&self) -> i32 {
        self.row
    }

    /// Cells not yet attempted.
    pub fn remaining(&self) -> &[Coordinates] {
        &self.targets
    }

    pub fn current(&self) -> Option<Coordinates> {
        self.current
    }
}

impl Behavior for Partitioner {
    fn decide_and_act(&mut self, body: &mut Body<'_>) {
        if self.targets.is_empty() {
            random_move(body);
            return;
        }
        let Some(here) = body.location() else { return };

        if self.current.is_none_or(|c| c == here) {
            self.current = body.rng().choose(&self.targets).copied();
        }
        let Some(target) = self.current else { return };

        if here.manhattan(target) == 1 {
            let built = body.add_wall(target);
            self.targets.retain(|&c| c != target);
            self.current = None;
            debug!(builder = %body.id(), %target, built, remaining = self.targets.len(), "partition cell attempted");
        } else if let Some(direction) = greedy_step(here, target, 0) {
            body.move_in(direction);
        }
    }

    fn label(&self) -> &'static str {
        "partitioner"
    }
}
