//! CSV output backend.
//!
//! Two files in the configured output directory:
//! - the run log (default `simulation_data.csv`), appended to by every run
//! - `round_summaries.csv`, rewritten by each run that records summaries

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use csv::{Reader, Writer, WriterBuilder};
use tracing::info;

use crate::row::{ROUND_SUMMARY_HEADER, RUN_RECORD_HEADER};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult, RoundSummaryRow, RunRecordRow};

/// Append-only run log plus an optional per-round summary file.
pub struct CsvRunLog {
    run_log:   PathBuf,
    summaries: PathBuf,
    /// Opened on the first summary row.
    summary_writer: Option<Writer<File>>,
    finished:  bool,
}

impl CsvRunLog {
    /// Use `dir/run_log` as the run log, creating `dir` if needed.  No file
    /// is touched until the first write.
    pub fn new(dir: &Path, run_log: &str) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;
        Ok(Self {
            run_log:        dir.join(run_log),
            summaries:      dir.join("round_summaries.csv"),
            summary_writer: None,
            finished:       false,
        })
    }

    pub fn run_log_path(&self) -> &Path {
        &self.run_log
    }

    pub fn summaries_path(&self) -> &Path {
        &self.summaries
    }
}

impl OutputWriter for CsvRunLog {
    fn next_turn(&mut self) -> OutputResult<u64> {
        if !self.run_log.exists() {
            return Ok(1);
        }
        let mut reader = Reader::from_path(&self.run_log)?;
        let mut last = None;
        for record in reader.records() {
            last = Some(record?);
        }
        let Some(record) = last else {
            return Ok(1);
        };
        let field = record.get(0).unwrap_or_default();
        let turn: u64 = field.trim().parse().map_err(|_| OutputError::Malformed {
            path:   self.run_log.clone(),
            reason: format!("last turn {field:?} is not a number"),
        })?;
        Ok(turn + 1)
    }

    fn write_round_summary(&mut self, row: &RoundSummaryRow) -> OutputResult<()> {
        let writer = match &mut self.summary_writer {
            Some(w) => w,
            slot => {
                let mut w = Writer::from_path(&self.summaries)?;
                w.write_record(ROUND_SUMMARY_HEADER)?;
                slot.insert(w)
            }
        };
        writer.write_record(&row.to_record())?;
        Ok(())
    }

    fn write_run_record(&mut self, row: &RunRecordRow) -> OutputResult<()> {
        let is_new = std::fs::metadata(&self.run_log).map(|m| m.len() == 0).unwrap_or(true);
        let file = OpenOptions::new().create(true).append(true).open(&self.run_log)?;
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        if is_new {
            writer.write_record(RUN_RECORD_HEADER)?;
        }
        writer.write_record(&row.to_record())?;
        writer.flush()?;
        info!(turn = row.turn, path = %self.run_log.display(), "run recorded");
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        if let Some(w) = &mut self.summary_writer {
            w.flush()?;
        }
        Ok(())
    }
}
