//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use epi_core::Round;
use epi_sim::SimObserver;
use epi_world::Grid;

use crate::row::{RoundSummaryRow, RunRecordRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes round summaries and the final run record to
/// any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:          W,
    turn:            u64,
    round_summaries: bool,
    last_error:      Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`.  The run's turn number is read
    /// from the writer once, here.
    pub fn new(mut writer: W, round_summaries: bool) -> OutputResult<Self> {
        let turn = writer.next_turn()?;
        Ok(Self { writer, turn, round_summaries, last_error: None })
    }

    /// The turn number the run record will carry.
    pub fn turn(&self) -> u64 {
        self.turn
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_round_end(&mut self, round: Round, grid: &Grid) {
        if !self.round_summaries {
            return;
        }
        let row = RoundSummaryRow::from_grid(round, grid);
        let result = self.writer.write_round_summary(&row);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _rounds: Round, grid: &Grid) {
        let population = u32::try_from(grid.agent_count()).unwrap_or(u32::MAX);
        let row = RunRecordRow::from_stats(self.turn, grid.stats(), population);
        let result = self.writer.write_run_record(&row);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
