//! JSON state file — the client-local durable copy of the aggregate.
//!
//! One blob under a fixed file name. Writes go through a temp file and an
//! atomic rename; reads tolerate a missing or corrupt file and fall back to
//! the empty aggregate (logged, never surfaced to the dispatch path).

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::errors::AppError;
use crate::models::ResumeData;

/// Fixed storage key for the aggregate blob.
pub const STATE_FILE_NAME: &str = "resume_builder_data.json";

#[derive(Debug, Clone)]
pub struct StateFile {
    path: PathBuf,
}

impl StateFile {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(STATE_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the persisted aggregate. Missing file or malformed JSON both
    /// yield the empty initial aggregate; the latter is logged.
    pub fn load(&self) -> ResumeData {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return ResumeData::initial();
            }
            Err(err) => {
                warn!("failed to read state file {}: {err}", self.path.display());
                return ResumeData::initial();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(data) => data,
            Err(err) => {
                warn!(
                    "state file {} is malformed, starting empty: {err}",
                    self.path.display()
                );
                ResumeData::initial()
            }
        }
    }

    /// Serializes the full aggregate. Temp file + rename so a crash mid-write
    /// never leaves a torn blob behind.
    pub fn save(&self, data: &ResumeData) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = self.path.with_extension("json.tmp");
        let serialized = serde_json::to_string_pretty(data)?;
        fs::write(&tmp_path, serialized)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TemplateId;

    #[test]
    fn test_missing_file_loads_initial_state() {
        let dir = tempfile::tempdir().unwrap();
        let file = StateFile::new(dir.path());
        assert_eq!(file.load(), ResumeData::initial());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let file = StateFile::new(dir.path());

        let mut data = ResumeData::initial();
        data.personal_info.full_name = "Jane Q. Public".to_string();
        data.summary = "Engineer.".to_string();
        data.selected_template = TemplateId::Compact;

        file.save(&data).unwrap();
        assert_eq!(file.load(), data);
    }

    #[test]
    fn test_corrupt_file_falls_back_to_initial() {
        let dir = tempfile::tempdir().unwrap();
        let file = StateFile::new(dir.path());
        fs::write(file.path(), "{not json at all").unwrap();
        assert_eq!(file.load(), ResumeData::initial());
    }

    #[test]
    fn test_save_overwrites_previous_blob() {
        let dir = tempfile::tempdir().unwrap();
        let file = StateFile::new(dir.path());

        let mut first = ResumeData::initial();
        first.summary = "first".to_string();
        file.save(&first).unwrap();

        let mut second = ResumeData::initial();
        second.summary = "second".to_string();
        file.save(&second).unwrap();

        assert_eq!(file.load(), second);
    }

    #[test]
    fn test_save_creates_missing_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested").join("deeper");
        let file = StateFile::new(&nested);
        file.save(&ResumeData::initial()).unwrap();
        assert!(file.path().exists());
    }
}
