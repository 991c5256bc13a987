//! Append-only log of callsigns missing from the flight table.
//!
//! The read-check-append cycle runs under a lock so concurrent requests
//! cannot record the same callsign twice. The backing file is only ever
//! opened create+append, never truncated.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::types::Result;

/// Persisted set of callsigns with `contains` and `record` semantics.
pub trait UnseenLog: Send + Sync {
    /// True if the callsign was recorded previously.
    fn has(&self, callsign: &str) -> Result<bool>;

    /// Record the callsign unless already present.
    ///
    /// Returns true only when a new entry was written.
    fn record_if_absent(&self, callsign: &str) -> Result<bool>;
}

// ---------------------------------------------------------------------------
// File-backed log
// ---------------------------------------------------------------------------

/// One callsign per line in a flat text file.
pub struct FileUnseenLog {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileUnseenLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileUnseenLog {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All recorded callsigns in file order. Blank lines are skipped.
    pub fn entries(&self) -> Result<Vec<String>> {
        let _guard = self.lock.lock().unwrap();
        self.read_entries()
    }

    fn read_entries(&self) -> Result<Vec<String>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let file = File::open(&self.path)?;
        let mut entries = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line?;
            let line = line.trim();
            if !line.is_empty() {
                entries.push(line.to_string());
            }
        }
        Ok(entries)
    }
}

impl UnseenLog for FileUnseenLog {
    fn has(&self, callsign: &str) -> Result<bool> {
        let _guard = self.lock.lock().unwrap();
        Ok(self.read_entries()?.iter().any(|e| e == callsign))
    }

    fn record_if_absent(&self, callsign: &str) -> Result<bool> {
        let _guard = self.lock.lock().unwrap();
        if self.read_entries()?.iter().any(|e| e == callsign) {
            return Ok(false);
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{callsign}")?;
        Ok(true)
    }
}

// ---------------------------------------------------------------------------
// In-memory log
// ---------------------------------------------------------------------------

/// Order-preserving in-memory log for tests and ephemeral runs.
#[derive(Default)]
pub struct MemoryUnseenLog {
    entries: Mutex<Vec<String>>,
}

impl MemoryUnseenLog {
    pub fn new() -> Self {
        MemoryUnseenLog::default()
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().unwrap().clone()
    }
}

impl UnseenLog for MemoryUnseenLog {
    fn has(&self, callsign: &str) -> Result<bool> {
        Ok(self.entries.lock().unwrap().iter().any(|e| e == callsign))
    }

    fn record_if_absent(&self, callsign: &str) -> Result<bool> {
        let mut entries = self.entries.lock().unwrap();
        if entries.iter().any(|e| e == callsign) {
            return Ok(false);
        }
        entries.push(callsign.to_string());
        Ok(true)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
