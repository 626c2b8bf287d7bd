use super::error::{Result, StoreError};
use super::files::{read_file, themes_file, write_json};
use crate::domain::{ColorSet, ThemeCatalog};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Key in the theme file that records the last applied theme
pub const LAST_THEME_KEY: &str = "last_theme";

/// Named colour themes kept in a single themes.json
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    pub fn new(root: &Path) -> Self {
        Self {
            path: themes_file(root),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every theme and the last-used marker. Never fails: a missing or
    /// malformed file is an empty catalogue, and entries that do not decode
    /// are skipped.
    pub fn load(&self) -> ThemeCatalog {
        let mut catalog = ThemeCatalog::default();

        for (key, value) in self.read_document() {
            if key == LAST_THEME_KEY {
                if let Value::String(name) = value {
                    catalog.last_theme = Some(name);
                }
                continue;
            }

            match serde_json::from_value::<ColorSet>(value) {
                Ok(colors) => {
                    catalog.themes.insert(key, colors);
                }
                Err(e) => warn!(theme = %key, error = %e, "Skipping unreadable theme"),
            }
        }

        debug!(
            path = %self.path().display(),
            themes = catalog.themes.len(),
            last_theme = ?catalog.last_theme,
            "Loaded theme catalogue"
        );
        catalog
    }

    /// Validate and store a theme under `name`, replacing any theme of the
    /// same name. Other themes and the last-used marker are kept.
    pub fn save(&self, name: &str, colors: &ColorSet) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyName);
        }
        if name == LAST_THEME_KEY {
            return Err(StoreError::ReservedName(name.to_string()));
        }
        if let Some((param, value)) = colors.first_invalid() {
            return Err(StoreError::InvalidColor {
                param,
                value: value.to_string(),
            });
        }

        let value = serde_json::to_value(colors).map_err(|e| StoreError::json(&self.path, e))?;
        let mut document = self.read_document();
        document.insert(name.to_string(), value);
        write_json(&self.path, &document)?;

        info!(theme = %name, "Saved theme");
        Ok(())
    }

    /// Remember `name` as the last applied theme. Best effort: failures are
    /// logged and otherwise ignored.
    pub fn set_last_theme(&self, name: &str) {
        let mut document = self.read_document();
        document.insert(LAST_THEME_KEY.to_string(), Value::String(name.to_string()));

        if let Err(e) = write_json(&self.path, &document) {
            warn!(theme = %name, error = %e, "Failed to persist last theme");
        }
    }

    /// Top-level object of the theme file, or an empty one if the file is
    /// missing or not a JSON object
    fn read_document(&self) -> Map<String, Value> {
        let content = match read_file(&self.path) {
            Ok(content) => content,
            Err(e) => {
                warn!(error = %e, "Failed to read theme file");
                return Map::new();
            }
        };
        if content.trim().is_empty() {
            return Map::new();
        }

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(map)) => map,
            Ok(_) => {
                warn!(path = %self.path.display(), "Theme file is not a JSON object");
                Map::new()
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Theme file is not valid JSON");
                Map::new()
            }
        }
    }
}
