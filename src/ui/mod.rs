pub mod project_list;
pub mod styles;
pub mod task_list;
pub mod theme_list;

pub use project_list::render_project_list;
pub use task_list::render_task_list;
pub use theme_list::{render_contrast, render_theme, render_theme_list};

/// Used when stdout is not a terminal
const DEFAULT_WIDTH: usize = 80;

/// Current terminal width in columns
pub fn terminal_width() -> usize {
    crossterm::terminal::size()
        .map(|(columns, _)| columns as usize)
        .ok()
        .filter(|&columns| columns > 0)
        .unwrap_or(DEFAULT_WIDTH)
}

/// Print rendered lines to stdout
pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}
