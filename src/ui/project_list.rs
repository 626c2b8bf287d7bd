use crate::domain::Project;
use crate::ui::styles::{current_style, favourite_style, hint_style};

/// One line per project, already in display order. Favourites get a star,
/// the current project a leading arrow.
pub fn render_project_list(projects: &[Project], current: Option<&str>) -> Vec<String> {
    if projects.is_empty() {
        return vec![format!(
            "{}",
            hint_style().apply("No projects yet. Create one with `checklist new <name>`.")
        )];
    }

    projects
        .iter()
        .map(|project| {
            let is_current = current == Some(project.id.as_str());
            let pointer = if is_current { "▸" } else { " " };
            let star = if project.favourite {
                format!("{}", favourite_style().apply("★"))
            } else {
                " ".to_string()
            };
            let name = if is_current {
                format!("{}", current_style().apply(project.name.as_str()))
            } else {
                project.name.clone()
            };

            format!("{} {} {}  {}", pointer, star, name, hint_style().apply(project.id.as_str()))
        })
        .collect()
}
