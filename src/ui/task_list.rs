use crate::domain::{status_badge, wrap_with_marker, ColorSet, Project, SortMode, Task, WRAP_MARKER};
use crate::ui::styles::{current_style, hint_style, status_style};
use unicode_width::UnicodeWidthStr;

/// Narrowest text column we will wrap to
const MIN_TEXT_WIDTH: usize = 10;

/// Render a project's tasks (already sorted) as numbered rows with coloured
/// status badges. Long text wraps to `width` with a continuation marker.
pub fn render_task_list(
    project: &Project,
    tasks: &[Task],
    colors: &ColorSet,
    sort_mode: SortMode,
    width: usize,
) -> Vec<String> {
    let mut lines = vec![format!(
        "{}  {}",
        current_style().apply(format!("Project: {}", project.name)),
        hint_style().apply(format!("(sorted by {})", sort_mode.name()))
    )];

    if tasks.is_empty() {
        lines.push(format!("{}", hint_style().apply("  No tasks")));
        return lines;
    }

    let badge_width = tasks
        .iter()
        .map(|t| status_badge(t.status).width())
        .max()
        .unwrap_or(0);
    let number_width = tasks.len().to_string().len();
    // "NN. " + badge + " "
    let prefix_width = number_width + 2 + badge_width + 2;
    let text_width = width.saturating_sub(prefix_width).max(MIN_TEXT_WIDTH);

    for (index, task) in tasks.iter().enumerate() {
        let badge = format!(" {:<width$} ", status_badge(task.status), width = badge_width);
        let badge = status_style(colors, task.status).apply(badge);

        let wrapped = wrap_with_marker(&task.text, text_width, WRAP_MARKER);
        let mut rows = wrapped.iter();
        if let Some(first) = rows.next() {
            lines.push(format!(
                "{:>number_width$}. {}{}",
                index + 1,
                badge,
                first,
                number_width = number_width
            ));
        }
        for row in rows {
            lines.push(format!("{}{}", " ".repeat(prefix_width), row));
        }
    }

    lines
}
