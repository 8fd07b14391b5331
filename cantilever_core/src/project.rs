//! # Analysis Files
//!
//! [`AnalysisFile`] groups any number of cantilever runs under one header
//! and serializes to `.cbm` files as human-readable JSON.
//!
//! ```text
//! AnalysisFile
//! ├── meta: FileMetadata (schema version, engineer, job id, timestamps)
//! └── runs: HashMap<Uuid, CantileverInput>
//! ```
//!
//! Only inputs are stored. Results are recomputed on demand with
//! [`AnalysisFile::analyze_run`], so a file never holds stale output.
//!
//! ## Example
//!
//! ```rust
//! use cantilever_core::calculations::CantileverInput;
//! use cantilever_core::project::AnalysisFile;
//!
//! let mut file = AnalysisFile::new("Jane Engineer", "26-042");
//! let id = file.add_run(CantileverInput::default());
//!
//! let result = file.analyze_run(&id).unwrap().unwrap();
//! assert_eq!(result.axis.len(), 300);
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::analysis::{analyze, CantileverInput, CantileverResult};
use crate::errors::CalcResult;

/// Current schema version for .cbm files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// File extension for analysis files
pub const FILE_EXTENSION: &str = "cbm";

/// Root container written to `.cbm` files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisFile {
    /// Header (schema version, engineer, job)
    pub meta: FileMetadata,

    /// Cantilever runs keyed by UUID
    pub runs: HashMap<Uuid, CantileverInput>,
}

/// Header stored at the top of every analysis file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileMetadata {
    /// Schema version, checked on load
    pub version: String,

    /// Responsible engineer
    pub engineer: String,

    /// Job number
    pub job_id: String,

    pub created: DateTime<Utc>,

    pub modified: DateTime<Utc>,
}

impl AnalysisFile {
    /// Create an empty file stamped with the current schema version.
    pub fn new(engineer: impl Into<String>, job_id: impl Into<String>) -> Self {
        let now = Utc::now();
        AnalysisFile {
            meta: FileMetadata {
                version: SCHEMA_VERSION.to_string(),
                engineer: engineer.into(),
                job_id: job_id.into(),
                created: now,
                modified: now,
            },
            runs: HashMap::new(),
        }
    }

    /// Add a run and return its new id.
    pub fn add_run(&mut self, input: CantileverInput) -> Uuid {
        let id = Uuid::new_v4();
        self.runs.insert(id, input);
        self.touch();
        id
    }

    /// Remove a run, returning it if it existed.
    pub fn remove_run(&mut self, id: &Uuid) -> Option<CantileverInput> {
        let removed = self.runs.remove(id);
        if removed.is_some() {
            self.touch();
        }
        removed
    }

    pub fn get_run(&self, id: &Uuid) -> Option<&CantileverInput> {
        self.runs.get(id)
    }

    /// Find a run by its label
    pub fn find_by_label(&self, label: &str) -> Option<(Uuid, &CantileverInput)> {
        self.runs
            .iter()
            .find(|(_, input)| input.label == label)
            .map(|(id, input)| (*id, input))
    }

    /// Analyze one stored run.
    ///
    /// `None` if no run has this id; otherwise the analysis outcome.
    pub fn analyze_run(&self, id: &Uuid) -> Option<CalcResult<CantileverResult>> {
        self.runs.get(id).map(analyze)
    }

    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }
}

impl Default for AnalysisFile {
    fn default() -> Self {
        AnalysisFile::new("", "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LoadCase;

    #[test]
    fn test_new_file() {
        let file = AnalysisFile::new("Test Engineer", "26-001");
        assert_eq!(file.meta.version, SCHEMA_VERSION);
        assert_eq!(file.meta.engineer, "Test Engineer");
        assert_eq!(file.meta.created, file.meta.modified);
        assert_eq!(file.run_count(), 0);
    }

    #[test]
    fn test_add_and_remove_run() {
        let mut file = AnalysisFile::default();
        let id = file.add_run(CantileverInput::default());
        assert_eq!(file.run_count(), 1);
        assert!(file.meta.modified >= file.meta.created);

        assert!(file.remove_run(&id).is_some());
        assert!(file.remove_run(&id).is_none());
        assert_eq!(file.run_count(), 0);
    }

    #[test]
    fn test_find_by_label() {
        let mut file = AnalysisFile::default();
        let id = file.add_run(CantileverInput {
            label: "C-2".to_string(),
            ..CantileverInput::default()
        });
        let (found, input) = file.find_by_label("C-2").unwrap();
        assert_eq!(found, id);
        assert_eq!(input.label, "C-2");
        assert!(file.find_by_label("C-9").is_none());
    }

    #[test]
    fn test_analyze_run() {
        let mut file = AnalysisFile::default();
        let good = file.add_run(CantileverInput::default());
        let bad = file.add_run(CantileverInput {
            load: LoadCase::new(1000.0, 5.0),
            ..CantileverInput::default()
        });

        assert!(file.analyze_run(&good).unwrap().is_ok());
        assert!(file.analyze_run(&bad).unwrap().is_err());
        assert!(file.analyze_run(&Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_json_layout() {
        let mut file = AnalysisFile::new("E", "J");
        file.add_run(CantileverInput::default());
        let json = serde_json::to_string_pretty(&file).unwrap();
        assert!(json.contains("\"meta\""));
        assert!(json.contains("\"runs\""));
        assert!(json.contains("\"version\": \"0.1.0\""));

        let back: AnalysisFile = serde_json::from_str(&json).unwrap();
        assert_eq!(back.run_count(), 1);
    }
}
