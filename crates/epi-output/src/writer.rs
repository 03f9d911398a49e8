//! The `OutputWriter` trait implemented by all backend writers.

use crate::{OutputResult, RoundSummaryRow, RunRecordRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// Errors surfaced during a run are stored by the observer and retrieved
/// with [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// The `turn` the next run record should carry: the last recorded turn
    /// plus one, or 1 when nothing has been recorded yet.
    fn next_turn(&mut self) -> OutputResult<u64>;

    /// Write one end-of-round summary.
    fn write_round_summary(&mut self, row: &RoundSummaryRow) -> OutputResult<()>;

    /// Append one completed run to the persistent run log.
    fn write_run_record(&mut self, row: &RunRecordRow) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
