use super::error::{Result, StoreError};
use super::files::{
    list_json_files, project_file, read_json, remove_file_if_exists, task_file, tasks_dir,
    validate_id, write_json,
};
use crate::domain::{next_order, Task, TaskStatus};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;
use tracing::{debug, info, warn};

/// Task file as found on disk; older files may lack order or created
#[derive(Debug, Deserialize)]
struct TaskRecord {
    id: String,
    #[serde(default)]
    text: String,
    #[serde(default)]
    status: TaskStatus,
    order: Option<i64>,
    created: Option<f64>,
}

/// Tasks, one <task id>.json per task under tasks/<project id>/
pub struct TaskStore {
    root: PathBuf,
}

impl TaskStore {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    /// Every readable task of a project, in file name order. Corrupt files
    /// are skipped. A missing `order` becomes the file's position in the
    /// listing and a missing `created` comes from the file's timestamps.
    pub fn list_for_project(&self, project_id: &str) -> Result<Vec<Task>> {
        let dir = tasks_dir(&self.root, validate_id(project_id)?);
        let mut tasks = Vec::new();

        for (index, path) in list_json_files(&dir)?.into_iter().enumerate() {
            match load_task(&path, index as i64) {
                Ok(task) => tasks.push(task),
                Err(e) => warn!(project = %project_id, error = %e, "Skipping unreadable task file"),
            }
        }

        debug!(project = %project_id, count = tasks.len(), "Listed tasks");
        Ok(tasks)
    }

    pub fn get(&self, project_id: &str, task_id: &str) -> Result<Task> {
        let path = self.task_path(project_id, task_id)?;
        if !path.exists() {
            return Err(StoreError::TaskNotFound(task_id.to_string()));
        }

        // Same fallback order as list_for_project: the file's listing position
        let index = list_json_files(&tasks_dir(&self.root, project_id))?
            .iter()
            .position(|p| *p == path)
            .unwrap_or(0);
        load_task(&path, index as i64)
    }

    /// Append a pending task after the highest existing order. Blank text is
    /// ignored and returns `None`.
    pub fn add(&self, project_id: &str, text: &str) -> Result<Option<Task>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        self.require_project(project_id)?;

        let existing = self.list_for_project(project_id)?;
        let task = Task::new(text.to_string(), next_order(&existing));
        write_json(task_file(&self.root, project_id, &task.id), &task)?;

        info!(project = %project_id, task = %task.id, order = task.order, "Added task");
        Ok(Some(task))
    }

    /// Replace a task's text. Blank text is ignored and returns `None`.
    pub fn edit(&self, project_id: &str, task_id: &str, new_text: &str) -> Result<Option<Task>> {
        let new_text = new_text.trim();
        if new_text.is_empty() {
            return Ok(None);
        }

        let mut task = self.get(project_id, task_id)?;
        task.text = new_text.to_string();
        self.save(project_id, &task)?;

        info!(project = %project_id, task = %task_id, "Edited task");
        Ok(Some(task))
    }

    pub fn set_status(&self, project_id: &str, task_id: &str, status: TaskStatus) -> Result<Task> {
        let mut task = self.get(project_id, task_id)?;
        task.status = status;
        self.save(project_id, &task)?;

        info!(project = %project_id, task = %task_id, status = %status, "Changed task status");
        Ok(task)
    }

    /// Remove a task file. A task whose file is already gone is not an error.
    pub fn delete(&self, project_id: &str, task_id: &str) -> Result<()> {
        let path = self.task_path(project_id, task_id)?;
        if remove_file_if_exists(&path)? {
            info!(project = %project_id, task = %task_id, "Deleted task");
        } else {
            debug!(project = %project_id, task = %task_id, "Task file already absent");
        }
        Ok(())
    }

    /// Sort a project's tasks by text (ignoring case, ties keep their
    /// current order), renumber `order` to match and save every task
    pub fn sort_by_text_and_persist(&self, project_id: &str) -> Result<Vec<Task>> {
        let mut tasks = self.list_for_project(project_id)?;
        tasks.sort_by_cached_key(|t| t.text.to_lowercase());

        for (index, task) in tasks.iter_mut().enumerate() {
            task.order = index as i64;
            self.save(project_id, task)?;
        }

        info!(project = %project_id, count = tasks.len(), "Reordered tasks by text");
        Ok(tasks)
    }

    fn save(&self, project_id: &str, task: &Task) -> Result<()> {
        write_json(self.task_path(project_id, &task.id)?, task)
    }

    fn task_path(&self, project_id: &str, task_id: &str) -> Result<PathBuf> {
        Ok(task_file(&self.root, validate_id(project_id)?, validate_id(task_id)?))
    }

    fn require_project(&self, project_id: &str) -> Result<()> {
        if project_file(&self.root, validate_id(project_id)?).is_file() {
            Ok(())
        } else {
            Err(StoreError::ProjectNotFound(project_id.to_string()))
        }
    }
}

/// Read a task file, filling in fields older files may lack
fn load_task(path: &Path, fallback_order: i64) -> Result<Task> {
    let record: TaskRecord = read_json(path)?;

    Ok(Task {
        id: record.id,
        text: record.text,
        status: record.status,
        order: record.order.unwrap_or(fallback_order),
        created: record.created.unwrap_or_else(|| file_timestamp(path)),
    })
}

/// Creation time of a file (modification time where creation is not
/// recorded) in seconds since the epoch, 0 if neither is available
fn file_timestamp(path: &Path) -> f64 {
    fs::metadata(path)
        .and_then(|meta| meta.created().or_else(|_| meta.modified()))
        .ok()
        .and_then(|time| time.duration_since(UNIX_EPOCH).ok())
        .map_or(0.0, |d| d.as_secs_f64())
}
