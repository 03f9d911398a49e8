//! `epi-output`: run log and round summary writers.
//!
//! Two backends are provided:
//!
//! | Feature   | Backend | Files created                                        |
//! |-----------|---------|------------------------------------------------------|
//! | *(none)*  | CSV     | run log (`simulation_data.csv`), `round_summaries.csv` |
//! | `sqlite`  | SQLite  | `runs.db`                                            |
//!
//! Both implement [`OutputWriter`] and are driven by [`SimOutputObserver`],
//! which implements `epi_sim::SimObserver`.  The run log is append-only:
//! each completed run adds one [`RunRecordRow`] numbered one past the last.
//!
//! # Usage
//!
//! ```rust,ignore
//! use epi_output::{CsvRunLog, SimOutputObserver};
//!
//! let log = CsvRunLog::new(&config.output.directory, &config.output.run_log)?;
//! let mut obs = SimOutputObserver::new(log, config.output.round_summaries)?;
//! sim.run(&mut obs);
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvRunLog;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{RoundSummaryRow, RunRecordRow, ROUND_SUMMARY_HEADER, RUN_RECORD_HEADER};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRunLog;
