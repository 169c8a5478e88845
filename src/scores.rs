//! Persistent top-10 leaderboard.
//!
//! Stored as plain text, one entry per line:
//!
//! ```text
//! 1. |alice|16-10-2026|21:04:55|42|HARD
//! 2. |bob|15-10-2026|09:12:03|17|NORMAL
//! ```
//!
//! Every update reads the whole file, merges the new entry, and rewrites it
//! from scratch.  There is no locking; one game process owns the file.

use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};

use crate::entities::GameResult;
use crate::error::ScoreError;

pub const MAX_ENTRIES: usize = 10;

const DATE_FORMAT: &str = "%d-%m-%Y";
const TIME_FORMAT: &str = "%H:%M:%S";

// ── Entry ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreEntry {
    pub name: String,
    /// `DD-MM-YYYY`
    pub date: String,
    /// `HH:MM:SS`
    pub time: String,
    pub score: u32,
    pub mode: String,
}

impl ScoreEntry {
    pub fn new(result: &GameResult, at: NaiveDateTime) -> Self {
        ScoreEntry {
            name: sanitize(&result.name),
            date: at.format(DATE_FORMAT).to_string(),
            time: at.format(TIME_FORMAT).to_string(),
            score: result.score,
            mode: result.mode.name().to_string(),
        }
    }

    pub fn now(result: &GameResult) -> Self {
        Self::new(result, Local::now().naive_local())
    }

    /// Parse one stored line.  The leading rank column is ignored because
    /// ranks are recomputed on every rewrite.
    pub fn parse(line: &str, line_no: usize) -> Result<Self, ScoreError> {
        let corrupted = |reason: &str| ScoreError::CorruptedLine {
            line: line_no,
            reason: reason.to_string(),
        };

        let fields: Vec<&str> = line.trim_end_matches(['\r', '\n']).split('|').collect();
        if fields.len() != 6 {
            return Err(corrupted("expected 6 '|'-separated fields"));
        }
        let score = fields[4]
            .trim()
            .parse::<u32>()
            .map_err(|e| corrupted(&format!("bad score '{}': {}", fields[4], e)))?;

        Ok(ScoreEntry {
            name: fields[1].to_string(),
            date: fields[2].to_string(),
            time: fields[3].to_string(),
            score,
            mode: fields[5].to_string(),
        })
    }

    pub fn format(&self, rank: usize) -> String {
        format!(
            "{}. |{}|{}|{}|{}|{}",
            rank, self.name, self.date, self.time, self.score, self.mode
        )
    }
}

/// Keep names from breaking the line format.
fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '|' => '/',
            '\n' | '\r' => ' ',
            other => other,
        })
        .collect()
}

// ── Ranking ───────────────────────────────────────────────────────────────────

/// Append `entry`, order by score (highest first, earlier entries win ties),
/// and drop everything past `MAX_ENTRIES`.
///
/// Also returns the 0-based index the new entry landed on, or `None` if it
/// was cut off.
pub fn rank(mut entries: Vec<ScoreEntry>, entry: ScoreEntry) -> (Vec<ScoreEntry>, Option<usize>) {
    // Every older entry with an equal or higher score stays ahead of it.
    let position = entries.iter().filter(|e| e.score >= entry.score).count();
    entries.push(entry);
    // sort_by is stable, which keeps insertion order among equal scores
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries.truncate(MAX_ENTRIES);
    (entries, (position < MAX_ENTRIES).then_some(position))
}

// ── Board ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct ScoreBoard {
    path: PathBuf,
}

impl ScoreBoard {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ScoreBoard { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw file contents, or `None` if no game has been saved yet.
    pub fn raw(&self) -> Result<Option<String>, ScoreError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// All readable entries in file order.  Corrupt lines are skipped.
    pub fn entries(&self) -> Result<Vec<ScoreEntry>, ScoreError> {
        let Some(contents) = self.raw()? else {
            return Ok(Vec::new());
        };

        let mut entries = Vec::new();
        for (i, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match ScoreEntry::parse(line, i + 1) {
                Ok(entry) => entries.push(entry),
                Err(e) => tracing::warn!(path = %self.path.display(), "skipping entry: {}", e),
            }
        }
        Ok(entries)
    }

    /// Merge `entry` into the board and rewrite the file.
    ///
    /// Returns the 1-based rank the entry landed on, or `None` if it did not
    /// make the top ten.
    pub fn record(&self, entry: ScoreEntry) -> Result<Option<usize>, ScoreError> {
        let name = entry.name.clone();
        let score = entry.score;
        let (ranked, position) = rank(self.entries()?, entry);

        self.write_all(&ranked)?;
        tracing::info!(
            path = %self.path.display(),
            name = %name,
            score,
            rank = ?position.map(|p| p + 1),
            "leaderboard updated"
        );
        Ok(position.map(|p| p + 1))
    }

    fn write_all(&self, entries: &[ScoreEntry]) -> Result<(), ScoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut writer = BufWriter::new(File::create(&self.path)?);
        for (i, entry) in entries.iter().enumerate() {
            writeln!(writer, "{}", entry.format(i + 1))?;
        }
        writer.flush()?;
        Ok(())
    }
}
