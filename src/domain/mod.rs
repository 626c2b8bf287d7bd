pub mod contrast;
pub mod enums;
pub mod project;
pub mod task;
pub mod theme;
pub mod views;

pub use contrast::{contrasting_font_color, parse_hex_rgb, status_colors};
pub use enums::{SortMode, TaskStatus};
pub use project::{generate_project_id, Project};
pub use task::{next_order, Task};
pub use theme::{ColorSet, ThemeCatalog, ThemeParam};
pub use views::{display_order, select_after_delete, sort_tasks, status_badge, wrap_with_marker, WRAP_MARKER};
