//! Session persistence for the response working set.
//!
//! The store is injected into the application so a partially completed
//! assessment survives a restart. The file-backed implementation writes the
//! working set as a JSON array after every answered question; the in-memory
//! implementation backs unit tests.

use crate::domain::ResponseSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Default session file, created next to wherever the binary is run.
pub const DEFAULT_SESSION_FILE: &str = "csmaturity-session.json";

/// Default target for the plain-text summary export.
pub const DEFAULT_SUMMARY_FILE: &str = "csmaturity-summary.txt";

pub trait ResponseStore {
    /// Returns the persisted working set, or `None` when no session exists.
    fn load(&self) -> Result<Option<ResponseSet>, String>;
    fn save(&mut self, responses: &ResponseSet) -> Result<(), String>;
    /// Forgets the session entirely, as on retake or after delivery.
    fn clear(&mut self) -> Result<(), String>;
}

pub struct FileResponseStore {
    path: PathBuf,
}

impl FileResponseStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }
}

impl Default for FileResponseStore {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_FILE)
    }
}

impl ResponseStore for FileResponseStore {
    fn load(&self) -> Result<Option<ResponseSet>, String> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(|e| e.to_string())?;
        match serde_json::from_str::<ResponseSet>(&content) {
            Ok(responses) => Ok(Some(responses)),
            Err(e) => Err(format!("Invalid session file - {}", e)),
        }
    }

    fn save(&mut self, responses: &ResponseSet) -> Result<(), String> {
        match serde_json::to_string_pretty(responses) {
            Ok(json) => fs::write(&self.path, json).map_err(|e| e.to_string()),
            Err(e) => Err(format!("Serialization failed: {}", e)),
        }
    }

    fn clear(&mut self) -> Result<(), String> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.to_string()),
        }
    }
}

/// Keeps the working set in memory only. Used by tests and anywhere
/// persistence is deliberately disabled.
#[derive(Debug, Default)]
pub struct MemoryResponseStore {
    responses: Option<ResponseSet>,
}

impl MemoryResponseStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_responses(responses: ResponseSet) -> Self {
        Self { responses: Some(responses) }
    }
}

impl ResponseStore for MemoryResponseStore {
    fn load(&self) -> Result<Option<ResponseSet>, String> {
        Ok(self.responses.clone())
    }

    fn save(&mut self, responses: &ResponseSet) -> Result<(), String> {
        self.responses = Some(responses.clone());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), String> {
        self.responses = None;
        Ok(())
    }
}

/// Writes the plain-text results summary to a local file.
pub struct SummaryExporter;

impl SummaryExporter {
    pub fn export(summary: &str, filename: &str) -> Result<String, String> {
        match fs::write(filename, summary) {
            Ok(()) => Ok(filename.to_string()),
            Err(e) => Err(e.to_string()),
        }
    }
}
