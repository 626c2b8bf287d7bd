use super::enums::TaskStatus;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Name of the palette used when nothing else matches
pub const DEFAULT_THEME: &str = "Light";

/// The nine colour slots every theme defines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeParam {
    UiBackground,
    FontColor,
    TabBackground,
    TabFontColor,
    ButtonBackground,
    ButtonFontColor,
    PendingBackground,
    WipBackground,
    DoneBackground,
}

impl ThemeParam {
    /// Key used in the theme file
    pub fn key(&self) -> &'static str {
        match self {
            Self::UiBackground => "UIBackground",
            Self::FontColor => "FontColor",
            Self::TabBackground => "TabBackground",
            Self::TabFontColor => "TabFontColor",
            Self::ButtonBackground => "ButtonBackground",
            Self::ButtonFontColor => "ButtonFontColor",
            Self::PendingBackground => "PendingBackground",
            Self::WipBackground => "WIPBackground",
            Self::DoneBackground => "DoneBackground",
        }
    }

    /// Human readable description of the slot
    pub fn description(&self) -> &'static str {
        match self {
            Self::UiBackground => "Main background",
            Self::FontColor => "Main font color",
            Self::TabBackground => "Sidebar/tab background",
            Self::TabFontColor => "Sidebar/tab font color",
            Self::ButtonBackground => "Button background",
            Self::ButtonFontColor => "Button font color",
            Self::PendingBackground => "Pending status background",
            Self::WipBackground => "WIP status background",
            Self::DoneBackground => "Done status background",
        }
    }

    pub fn all() -> &'static [ThemeParam] {
        &[
            ThemeParam::UiBackground,
            ThemeParam::FontColor,
            ThemeParam::TabBackground,
            ThemeParam::TabFontColor,
            ThemeParam::ButtonBackground,
            ThemeParam::ButtonFontColor,
            ThemeParam::PendingBackground,
            ThemeParam::WipBackground,
            ThemeParam::DoneBackground,
        ]
    }

    /// Background slot for a task status
    pub fn for_status(status: TaskStatus) -> Self {
        match status {
            TaskStatus::Pending => Self::PendingBackground,
            TaskStatus::Wip => Self::WipBackground,
            TaskStatus::Done => Self::DoneBackground,
        }
    }
}

impl fmt::Display for ThemeParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ThemeParam {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeParam::all()
            .iter()
            .copied()
            .find(|p| p.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown theme parameter '{}'", s))
    }
}

/// Colour values for every [`ThemeParam`]. Slots missing from a stored theme
/// take the built-in Light value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorSet {
    #[serde(rename = "UIBackground")]
    pub ui_background: String,
    #[serde(rename = "FontColor")]
    pub font_color: String,
    #[serde(rename = "TabBackground")]
    pub tab_background: String,
    #[serde(rename = "TabFontColor")]
    pub tab_font_color: String,
    #[serde(rename = "ButtonBackground")]
    pub button_background: String,
    #[serde(rename = "ButtonFontColor")]
    pub button_font_color: String,
    #[serde(rename = "PendingBackground")]
    pub pending_background: String,
    #[serde(rename = "WIPBackground")]
    pub wip_background: String,
    #[serde(rename = "DoneBackground")]
    pub done_background: String,
}

impl Default for ColorSet {
    fn default() -> Self {
        Self::light()
    }
}

impl ColorSet {
    pub fn light() -> Self {
        Self {
            ui_background: "#ffffff".to_string(),
            font_color: "#222222".to_string(),
            tab_background: "#e0e0e0".to_string(),
            tab_font_color: "#222222".to_string(),
            button_background: "#f5f5f5".to_string(),
            button_font_color: "#222222".to_string(),
            pending_background: "#e53935".to_string(),
            wip_background: "#fbc02d".to_string(),
            done_background: "#43a047".to_string(),
        }
    }

    pub fn dark() -> Self {
        Self {
            ui_background: "#1e1e1e".to_string(),
            font_color: "#e0e0e0".to_string(),
            tab_background: "#2d2d2d".to_string(),
            tab_font_color: "#e0e0e0".to_string(),
            button_background: "#3c3c3c".to_string(),
            button_font_color: "#e0e0e0".to_string(),
            pending_background: "#c62828".to_string(),
            wip_background: "#f9a825".to_string(),
            done_background: "#2e7d32".to_string(),
        }
    }

    pub fn get(&self, param: ThemeParam) -> &str {
        match param {
            ThemeParam::UiBackground => &self.ui_background,
            ThemeParam::FontColor => &self.font_color,
            ThemeParam::TabBackground => &self.tab_background,
            ThemeParam::TabFontColor => &self.tab_font_color,
            ThemeParam::ButtonBackground => &self.button_background,
            ThemeParam::ButtonFontColor => &self.button_font_color,
            ThemeParam::PendingBackground => &self.pending_background,
            ThemeParam::WipBackground => &self.wip_background,
            ThemeParam::DoneBackground => &self.done_background,
        }
    }

    pub fn set(&mut self, param: ThemeParam, value: impl Into<String>) {
        let slot = match param {
            ThemeParam::UiBackground => &mut self.ui_background,
            ThemeParam::FontColor => &mut self.font_color,
            ThemeParam::TabBackground => &mut self.tab_background,
            ThemeParam::TabFontColor => &mut self.tab_font_color,
            ThemeParam::ButtonBackground => &mut self.button_background,
            ThemeParam::ButtonFontColor => &mut self.button_font_color,
            ThemeParam::PendingBackground => &mut self.pending_background,
            ThemeParam::WipBackground => &mut self.wip_background,
            ThemeParam::DoneBackground => &mut self.done_background,
        };
        *slot = value.into();
    }

    /// First slot whose value is not a well-formed hex colour
    pub fn first_invalid(&self) -> Option<(ThemeParam, &str)> {
        ThemeParam::all()
            .iter()
            .map(|&p| (p, self.get(p)))
            .find(|(_, value)| !is_hex_color(value))
    }
}

/// `#` followed by exactly 3 or 6 hex digits
pub fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(digits) => {
            (digits.len() == 3 || digits.len() == 6)
                && digits.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

/// Palettes available even when the theme file is empty
pub fn builtin_theme(name: &str) -> Option<ColorSet> {
    match name {
        "Light" => Some(ColorSet::light()),
        "Dark" => Some(ColorSet::dark()),
        _ => None,
    }
}

/// Everything the theme file holds: named themes in file order plus the
/// name of the last applied one
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThemeCatalog {
    pub themes: IndexMap<String, ColorSet>,
    pub last_theme: Option<String>,
}

impl ThemeCatalog {
    /// Selectable theme names; the built-in pair when nothing is stored
    pub fn names(&self) -> Vec<String> {
        if self.themes.is_empty() {
            vec!["Light".to_string(), "Dark".to_string()]
        } else {
            self.themes.keys().cloned().collect()
        }
    }

    /// Theme to apply on startup: the last one used if it still exists,
    /// otherwise the first selectable name
    pub fn current_name(&self) -> String {
        let names = self.names();
        match &self.last_theme {
            Some(last) if names.contains(last) => last.clone(),
            _ => names.into_iter().next().unwrap_or_else(|| DEFAULT_THEME.to_string()),
        }
    }

    /// Colours for `name`, falling back to the stored Light theme and then
    /// the built-in Light palette
    pub fn resolve(&self, name: &str) -> ColorSet {
        if let Some(colors) = self.themes.get(name) {
            return colors.clone();
        }
        if let Some(colors) = builtin_theme(name) {
            return colors;
        }
        self.themes
            .get(DEFAULT_THEME)
            .cloned()
            .unwrap_or_else(ColorSet::light)
    }
}
