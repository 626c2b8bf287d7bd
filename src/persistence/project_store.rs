use super::error::{Result, StoreError};
use super::files::{
    ensure_dir, list_json_files, project_file, projects_dir, read_json, remove_dir_if_exists,
    remove_file_if_exists, task_file, tasks_dir, validate_id, write_json,
};
use crate::domain::{generate_project_id, Project, Task};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Project records, one <id>.json per project under projects/
pub struct ProjectStore {
    root: PathBuf,
}

impl ProjectStore {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    /// Every readable project record. Files that are not JSON or lack an
    /// id or name are skipped. No particular order.
    pub fn list_all(&self) -> Result<Vec<Project>> {
        let mut projects = Vec::new();

        for path in list_json_files(&projects_dir(&self.root))? {
            match read_json::<Project, _>(&path) {
                Ok(project) => projects.push(project),
                Err(e) => warn!(error = %e, "Skipping unreadable project file"),
            }
        }

        debug!(count = projects.len(), "Listed projects");
        Ok(projects)
    }

    pub fn get(&self, id: &str) -> Result<Project> {
        let path = project_file(&self.root, validate_id(id)?);
        if !path.exists() {
            return Err(StoreError::ProjectNotFound(id.to_string()));
        }
        read_json(&path)
    }

    /// Create a project with a fresh id, an empty task folder and the
    /// "Project Created" seed task. Names need not be unique.
    pub fn create(&self, name: &str) -> Result<Project> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyName);
        }

        ensure_dir(&projects_dir(&self.root))?;
        let mut id = generate_project_id();
        while project_file(&self.root, &id).exists() {
            id = generate_project_id();
        }

        ensure_dir(&tasks_dir(&self.root, &id))?;
        let seed = Task::seed();
        write_json(task_file(&self.root, &id, &seed.id), &seed)?;

        let project = Project::new(id, name.to_string());
        write_json(project_file(&self.root, &project.id), &project)?;

        info!(project = %project.id, name = %project.name, "Created project");
        Ok(project)
    }

    /// Remove the project record and all of its tasks. Deleting a project
    /// that does not exist is not an error.
    pub fn delete(&self, id: &str) -> Result<()> {
        validate_id(id)?;

        let removed_record = remove_file_if_exists(&project_file(&self.root, id))?;
        let removed_tasks = remove_dir_if_exists(&tasks_dir(&self.root, id))?;

        if removed_record || removed_tasks {
            info!(project = %id, "Deleted project");
        } else {
            debug!(project = %id, "Project already absent");
        }
        Ok(())
    }

    /// Rewrite only the favourite flag; other fields in the record are kept as-is
    pub fn set_favourite(&self, id: &str, favourite: bool) -> Result<Project> {
        let path = project_file(&self.root, validate_id(id)?);
        if !path.exists() {
            return Err(StoreError::ProjectNotFound(id.to_string()));
        }

        let mut record: Map<String, Value> = read_json(&path)?;
        record.insert("favourite".to_string(), Value::Bool(favourite));
        write_json(&path, &record)?;

        info!(project = %id, favourite, "Updated favourite");
        serde_json::from_value(Value::Object(record)).map_err(|e| StoreError::json(&path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TaskStatus;
    use crate::persistence::TaskStore;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_create_writes_record_and_seed_task() {
        let temp_dir = tempdir().unwrap();
        let store = ProjectStore::new(temp_dir.path());

        let project = store.create("  Groceries ").unwrap();
        assert_eq!(project.name, "Groceries");
        assert_eq!(project.id.len(), 12);
        assert!(!project.favourite);

        assert_eq!(store.get(&project.id).unwrap(), project);

        let tasks = TaskStore::new(temp_dir.path()).list_for_project(&project.id).unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].text, "Project Created");
        assert_eq!(tasks[0].status, TaskStatus::Done);
    }

    #[test]
    fn test_create_rejects_empty_name() {
        let temp_dir = tempdir().unwrap();
        let store = ProjectStore::new(temp_dir.path());

        assert!(matches!(store.create("   "), Err(StoreError::EmptyName)));
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_names_get_distinct_ids() {
        let temp_dir = tempdir().unwrap();
        let store = ProjectStore::new(temp_dir.path());

        let first = store.create("Work").unwrap();
        let second = store.create("Work").unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(store.list_all().unwrap().len(), 2);
    }

    #[test]
    fn test_list_skips_incomplete_records() {
        let temp_dir = tempdir().unwrap();
        let store = ProjectStore::new(temp_dir.path());
        let dir = projects_dir(temp_dir.path());
        fs::create_dir_all(&dir).unwrap();

        fs::write(dir.join("good.json"), r#"{"id": "good", "name": "Good"}"#).unwrap();
        fs::write(dir.join("noname.json"), r#"{"id": "noname"}"#).unwrap();
        fs::write(dir.join("noid.json"), r#"{"name": "No id"}"#).unwrap();
        fs::write(dir.join("garbage.json"), "not json at all").unwrap();
        fs::write(dir.join("readme.txt"), "ignored").unwrap();

        let projects = store.list_all().unwrap();
        assert_eq!(projects, vec![Project::new("good".to_string(), "Good".to_string())]);
    }

    #[test]
    fn test_list_missing_directory_is_empty() {
        let temp_dir = tempdir().unwrap();
        let store = ProjectStore::new(temp_dir.path());
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_delete_removes_record_and_tasks() {
        let temp_dir = tempdir().unwrap();
        let store = ProjectStore::new(temp_dir.path());
        let tasks = TaskStore::new(temp_dir.path());

        let keep = store.create("Keep").unwrap();
        let doomed = store.create("Doomed").unwrap();
        tasks.add(&doomed.id, "first").unwrap();
        tasks.add(&doomed.id, "second").unwrap();

        store.delete(&doomed.id).unwrap();

        assert!(!project_file(temp_dir.path(), &doomed.id).exists());
        assert!(!tasks_dir(temp_dir.path(), &doomed.id).exists());
        let remaining: Vec<String> = store.list_all().unwrap().into_iter().map(|p| p.id).collect();
        assert_eq!(remaining, vec![keep.id]);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let temp_dir = tempdir().unwrap();
        let store = ProjectStore::new(temp_dir.path());

        let project = store.create("Once").unwrap();
        store.delete(&project.id).unwrap();
        store.delete(&project.id).unwrap();
        store.delete("neverexisted").unwrap();
    }

    #[test]
    fn test_delete_rejects_path_like_ids() {
        let temp_dir = tempdir().unwrap();
        let store = ProjectStore::new(temp_dir.path());
        assert!(matches!(store.delete("../x"), Err(StoreError::InvalidId(_))));
    }

    #[test]
    fn test_set_favourite_round_trip() {
        let temp_dir = tempdir().unwrap();
        let store = ProjectStore::new(temp_dir.path());

        let project = store.create("Starred").unwrap();
        let updated = store.set_favourite(&project.id, true).unwrap();
        assert!(updated.favourite);
        assert!(store.get(&project.id).unwrap().favourite);

        store.set_favourite(&project.id, false).unwrap();
        assert!(!store.get(&project.id).unwrap().favourite);
    }

    #[test]
    fn test_set_favourite_keeps_unknown_fields() {
        let temp_dir = tempdir().unwrap();
        let store = ProjectStore::new(temp_dir.path());
        let dir = projects_dir(temp_dir.path());
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("legacy.json"),
            r#"{"id": "legacy", "name": "Legacy", "colour": "teal"}"#,
        )
        .unwrap();

        store.set_favourite("legacy", true).unwrap();

        let raw: Value = read_json(dir.join("legacy.json")).unwrap();
        assert_eq!(raw["colour"], "teal");
        assert_eq!(raw["favourite"], true);
    }

    #[test]
    fn test_set_favourite_missing_project() {
        let temp_dir = tempdir().unwrap();
        let store = ProjectStore::new(temp_dir.path());
        assert!(matches!(
            store.set_favourite("nothere", true),
            Err(StoreError::ProjectNotFound(_))
        ));
    }
}
