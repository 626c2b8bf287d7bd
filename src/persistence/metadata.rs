use super::error::Result;
use super::files::{read_json, write_json};
use crate::domain::SortMode;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// UI preferences stored in meta.json
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppMetadata {
    #[serde(default)]
    pub sort_mode: SortMode,
    /// Project the task commands act on when none is named
    #[serde(default)]
    pub current_project: Option<String>,
}

/// Load app metadata from meta.json file
pub fn load_metadata<P: AsRef<Path>>(path: P) -> Result<AppMetadata> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(AppMetadata::default());
    }

    read_json(path)
}

/// Save app metadata to meta.json file
pub fn save_metadata<P: AsRef<Path>>(path: P, metadata: &AppMetadata) -> Result<()> {
    write_json(path, metadata)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_load_nonexistent_metadata() {
        let temp_dir = tempdir().unwrap();
        let meta_path = temp_dir.path().join("meta.json");

        let metadata = load_metadata(&meta_path).unwrap();
        assert_eq!(metadata.sort_mode, SortMode::Status);
        assert!(metadata.current_project.is_none());
    }

    #[test]
    fn test_save_and_load_metadata() {
        let temp_dir = tempdir().unwrap();
        let meta_path = temp_dir.path().join("meta.json");

        let metadata = AppMetadata {
            sort_mode: SortMode::Oldest,
            current_project: Some("aB3xYz9QwErT".to_string()),
        };

        save_metadata(&meta_path, &metadata).unwrap();

        let loaded = load_metadata(&meta_path).unwrap();
        assert_eq!(loaded, metadata);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let temp_dir = tempdir().unwrap();
        let meta_path = temp_dir.path().join("meta.json");
        std::fs::write(&meta_path, "{}").unwrap();

        let loaded = load_metadata(&meta_path).unwrap();
        assert_eq!(loaded, AppMetadata::default());
    }
}
