//! File boundary: writing the generated document and loading answer files.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::record::AnswerRecord;

/// Write the rendered document in one scoped open/write/close. No retry,
/// no atomic-rename dance; a failure leaves prior file content unspecified
/// and is reported by the caller.
pub fn write_readme(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)
        .with_context(|| format!("Failed to write {}", path.display()))
}

/// Load a saved answer record from a JSON file. Unknown fields are
/// tolerated; missing fields fall back to the defaults record.
pub fn load_answers(path: &Path) -> Result<AnswerRecord> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read answers file: {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse answers file: {}", path.display()))
}

/// Save an answer record as pretty JSON, for re-use with `--answers`.
pub fn save_answers(path: &Path, record: &AnswerRecord) -> Result<()> {
    let json = serde_json::to_string_pretty(record).context("Failed to serialize answers")?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write answers file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_readme() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("README.md");

        write_readme(&path, "# Hello\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "# Hello\n");
    }

    #[test]
    fn test_write_readme_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("README.md");

        write_readme(&path, "old").unwrap();
        write_readme(&path, "new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_write_readme_reports_path_on_failure() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing-dir").join("README.md");

        let err = write_readme(&path, "x").unwrap_err();
        assert!(err.to_string().contains("Failed to write"));
    }

    #[test]
    fn test_answers_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("answers.json");

        let mut record = AnswerRecord::default();
        record.project_name = "Foo".to_string();

        save_answers(&path, &record).unwrap();
        let loaded = load_answers(&path).unwrap();
        assert_eq!(loaded, record);
    }

    #[test]
    fn test_load_answers_rejects_bad_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("answers.json");
        fs::write(&path, "{not json").unwrap();

        let err = load_answers(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse answers file"));
    }
}
