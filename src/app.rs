use crate::domain::{
    display_order, select_after_delete, sort_tasks, ColorSet, Project, SortMode, Task, TaskStatus,
    ThemeCatalog, ThemeParam,
};
use crate::persistence::{
    load_metadata, meta_file, save_metadata, AppMetadata, ProjectStore, TaskStore, ThemeStore,
};
use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Front-end state: the stores for one data directory plus the persisted
/// UI preferences (current project, sort mode)
pub struct App {
    pub root: PathBuf,
    pub projects: ProjectStore,
    pub tasks: TaskStore,
    pub themes: ThemeStore,
    pub metadata: AppMetadata,
}

impl App {
    pub fn open(root: &Path) -> Result<Self> {
        std::fs::create_dir_all(root)
            .with_context(|| format!("Failed to create directory: {}", root.display()))?;

        let metadata = match load_metadata(meta_file(root)) {
            Ok(metadata) => metadata,
            Err(e) => {
                warn!(error = %e, "Ignoring unreadable meta.json");
                AppMetadata::default()
            }
        };

        Ok(Self {
            root: root.to_path_buf(),
            projects: ProjectStore::new(root),
            tasks: TaskStore::new(root),
            themes: ThemeStore::new(root),
            metadata,
        })
    }

    /// Persist UI preferences; best effort
    pub fn save_metadata(&self) {
        if let Err(e) = save_metadata(meta_file(&self.root), &self.metadata) {
            warn!(error = %e, "Failed to save meta.json");
        }
    }

    /// All projects in display order (favourites first, then by name)
    pub fn project_list(&self) -> Result<Vec<Project>> {
        Ok(display_order(&self.projects.list_all()?))
    }

    /// Find a project by exact id, else by a unique case-insensitive name
    pub fn find_project(&self, reference: &str) -> Result<Project> {
        let projects = self.projects.list_all()?;

        if let Some(project) = projects.iter().find(|p| p.id == reference) {
            return Ok(project.clone());
        }

        let matches: Vec<&Project> = projects
            .iter()
            .filter(|p| p.name.eq_ignore_ascii_case(reference))
            .collect();
        match matches.as_slice() {
            [project] => Ok((*project).clone()),
            [] => bail!("No project matches '{}'", reference),
            _ => bail!("Several projects are named '{}'; use the id instead", reference),
        }
    }

    /// The named project, or the current one when none is given
    pub fn target_project(&self, reference: Option<&str>) -> Result<Project> {
        match reference {
            Some(reference) => self.find_project(reference),
            None => {
                let id = self
                    .metadata
                    .current_project
                    .as_deref()
                    .context("No project selected; run `checklist open <project>` or pass --project")?;
                self.projects
                    .get(id)
                    .with_context(|| format!("Current project {} is gone", id))
            }
        }
    }

    pub fn create_project(&mut self, name: &str) -> Result<Project> {
        let project = self.projects.create(name)?;
        self.metadata.current_project = Some(project.id.clone());
        self.save_metadata();
        Ok(project)
    }

    /// Delete a project. If it was the current one, selection moves to its
    /// neighbour in display order; the new selection is returned.
    pub fn delete_project(&mut self, id: &str) -> Result<Option<String>> {
        let ordered = self.project_list()?;
        let next = select_after_delete(&ordered, id);

        self.projects.delete(id)?;

        if self.metadata.current_project.as_deref() == Some(id) {
            self.metadata.current_project = next;
            self.save_metadata();
        }
        Ok(self.metadata.current_project.clone())
    }

    pub fn open_project(&mut self, id: &str) {
        self.metadata.current_project = Some(id.to_string());
        self.save_metadata();
    }

    pub fn set_sort_mode(&mut self, mode: SortMode) {
        if self.metadata.sort_mode != mode {
            self.metadata.sort_mode = mode;
            self.save_metadata();
        }
    }

    /// A project's tasks in the requested (or remembered) display order
    pub fn sorted_tasks(&self, project_id: &str, mode: Option<SortMode>) -> Result<Vec<Task>> {
        let tasks = self.tasks.list_for_project(project_id)?;
        Ok(sort_tasks(&tasks, mode.unwrap_or(self.metadata.sort_mode)))
    }

    /// Find a task by its 1-based position in the current display order or
    /// by a unique id prefix. `#N` is always a position; a bare number that
    /// is not a valid position is tried as an id prefix.
    pub fn find_task(&self, project_id: &str, reference: &str) -> Result<Task> {
        let tasks = self.sorted_tasks(project_id, None)?;

        let (explicit, number) = match reference.strip_prefix('#') {
            Some(rest) => (true, rest),
            None => (false, reference),
        };
        if let Ok(position) = number.parse::<usize>() {
            let found = position.checked_sub(1).and_then(|i| tasks.get(i));
            match found {
                Some(task) => return Ok(task.clone()),
                None if explicit => bail!("No task at position {}", position),
                None => {}
            }
        }

        let matches: Vec<&Task> = tasks.iter().filter(|t| t.id.starts_with(reference)).collect();
        match matches.as_slice() {
            [task] => Ok((*task).clone()),
            [] => bail!("No task matches '{}'", reference),
            _ => bail!("Task id prefix '{}' is ambiguous", reference),
        }
    }

    pub fn set_task_status(&self, project_id: &str, reference: &str, status: TaskStatus) -> Result<Task> {
        let task = self.find_task(project_id, reference)?;
        Ok(self.tasks.set_status(project_id, &task.id, status)?)
    }

    pub fn theme_catalog(&self) -> ThemeCatalog {
        self.themes.load()
    }

    /// Colours of the theme to render with
    pub fn active_colors(&self) -> ColorSet {
        let catalog = self.theme_catalog();
        catalog.resolve(&catalog.current_name())
    }

    /// Switch to a theme and remember the choice
    pub fn apply_theme(&self, name: &str) -> Result<ColorSet> {
        let catalog = self.theme_catalog();
        if !catalog.names().iter().any(|n| n == name) {
            bail!("Unknown theme '{}'", name);
        }
        self.themes.set_last_theme(name);
        Ok(catalog.resolve(name))
    }

    /// Save a theme built from `base` (or the active theme) with `PARAM=#hex`
    /// overrides applied, and make it the active theme
    pub fn save_theme(&self, name: &str, base: Option<&str>, assignments: &[String]) -> Result<ColorSet> {
        let catalog = self.theme_catalog();
        let mut colors = match base {
            Some(base) => catalog.resolve(base),
            None => catalog.resolve(&catalog.current_name()),
        };

        for assignment in assignments {
            let (param, value) = parse_assignment(assignment)?;
            colors.set(param, value);
        }

        self.themes.save(name, &colors)?;
        self.themes.set_last_theme(name.trim());
        Ok(colors)
    }
}

/// Split `UIBackground=#ffffff` into its parameter and value
fn parse_assignment(assignment: &str) -> Result<(ThemeParam, String)> {
    let (key, value) = assignment
        .split_once('=')
        .with_context(|| format!("Expected PARAM=#hex, got '{}'", assignment))?;
    let param = key.trim().parse::<ThemeParam>().map_err(anyhow::Error::msg)?;
    Ok((param, value.trim().to_string()))
}
