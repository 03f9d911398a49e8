//! SQLite output backend (feature `sqlite`).
//!
//! A single `runs.db` file in the output directory with two tables:
//! `run_records` (one row per run, keyed by `turn`) and `round_summaries`
//! (keyed by `turn` and `round`).

use std::path::Path;

use rusqlite::{Connection, OptionalExtension};
use tracing::info;

use crate::writer::OutputWriter;
use crate::{OutputResult, RoundSummaryRow, RunRecordRow};

/// Writes run records and round summaries to an SQLite database.
pub struct SqliteRunLog {
    conn:     Connection,
    /// Turn of the run in progress; tags its round summaries.
    turn:     u64,
    finished: bool,
}

impl SqliteRunLog {
    /// Open (or create) `runs.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;
        let conn = Connection::open(dir.join("runs.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS run_records (
                 turn             INTEGER PRIMARY KEY,
                 dead             INTEGER NOT NULL,
                 infected         INTEGER NOT NULL,
                 recovered        INTEGER NOT NULL,
                 vaccinated       INTEGER NOT NULL,
                 cured            INTEGER NOT NULL,
                 total_population INTEGER NOT NULL,
                 mortality_rate   REAL    NOT NULL,
                 infection_rate   REAL    NOT NULL,
                 recovery_rate    REAL    NOT NULL,
                 vaccination_rate REAL    NOT NULL,
                 cured_rate       REAL    NOT NULL,
                 male             INTEGER NOT NULL,
                 female           INTEGER NOT NULL,
                 smoker           INTEGER NOT NULL,
                 non_smoker       INTEGER NOT NULL,
                 pre_existing     INTEGER NOT NULL,
                 none             INTEGER NOT NULL,
                 active           INTEGER NOT NULL,
                 sedentary        INTEGER NOT NULL,
                 moderate         INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS round_summaries (
                 turn        INTEGER NOT NULL,
                 round       INTEGER NOT NULL,
                 susceptible INTEGER NOT NULL,
                 infected    INTEGER NOT NULL,
                 sick        INTEGER NOT NULL,
                 recovered   INTEGER NOT NULL,
                 dead        INTEGER NOT NULL,
                 walls       INTEGER NOT NULL,
                 PRIMARY KEY (turn, round)
             );",
        )?;

        let mut log = Self { conn, turn: 0, finished: false };
        log.turn = log.next_turn()?;
        Ok(log)
    }
}

impl OutputWriter for SqliteRunLog {
    fn next_turn(&mut self) -> OutputResult<u64> {
        let last: Option<i64> = self
            .conn
            .query_row("SELECT MAX(turn) FROM run_records", [], |r| r.get(0))
            .optional()?
            .flatten();
        Ok(last.map_or(1, |t| t as u64 + 1))
    }

    fn write_round_summary(&mut self, row: &RoundSummaryRow) -> OutputResult<()> {
        let mut stmt = self.conn.prepare_cached(
            "INSERT INTO round_summaries \
             (turn, round, susceptible, infected, sick, recovered, dead, walls) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        )?;
        stmt.execute(rusqlite::params![
            self.turn as i64,
            row.round as i64,
            row.susceptible,
            row.infected,
            row.sick,
            row.recovered,
            row.dead,
            row.walls,
        ])?;
        Ok(())
    }

    fn write_run_record(&mut self, row: &RunRecordRow) -> OutputResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute(
            "INSERT INTO run_records \
             (turn, dead, infected, recovered, vaccinated, cured, total_population, \
              mortality_rate, infection_rate, recovery_rate, vaccination_rate, cured_rate, \
              male, female, smoker, non_smoker, pre_existing, none, active, sedentary, moderate) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, \
                     ?13, ?14, ?15, ?16, ?17, ?18, ?19, ?20, ?21)",
            rusqlite::params![
                row.turn as i64,
                row.dead,
                row.infected,
                row.recovered,
                row.vaccinated,
                row.cured,
                row.total_population,
                row.mortality_rate,
                row.infection_rate,
                row.recovery_rate,
                row.vaccination_rate,
                row.cured_rate,
                row.male,
                row.female,
                row.smoker,
                row.non_smoker,
                row.pre_existing,
                row.no_pre_existing,
                row.active,
                row.sedentary,
                row.moderate,
            ],
        )?;
        tx.commit()?;
        self.turn = row.turn + 1;
        info!(turn = row.turn, "run recorded");
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
