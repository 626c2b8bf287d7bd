use crate::domain::{contrasting_font_color, ColorSet, TaskStatus, ThemeCatalog, ThemeParam};
use crate::ui::styles::{current_style, hex_to_color, status_style, swatch_style};
use crossterm::style::ContentStyle;

/// Theme names with the active one highlighted
pub fn render_theme_list(catalog: &ThemeCatalog) -> Vec<String> {
    let current = catalog.current_name();
    catalog
        .names()
        .into_iter()
        .map(|name| {
            if name == current {
                format!("▸ {}", current_style().apply(name))
            } else {
                format!("  {}", name)
            }
        })
        .collect()
}

/// Every parameter of a theme with a swatch, followed by a preview of the
/// three status badges
pub fn render_theme(name: &str, colors: &ColorSet) -> Vec<String> {
    let mut lines = vec![format!("{}", current_style().apply(format!("Theme: {}", name)))];

    let key_width = ThemeParam::all().iter().map(|p| p.key().len()).max().unwrap_or(0);
    for &param in ThemeParam::all() {
        let value = colors.get(param);
        lines.push(format!(
            "  {:<key_width$}  {}  {:<7}  {}",
            param.key(),
            swatch_style(value).apply("   "),
            value,
            param.description(),
            key_width = key_width
        ));
    }

    let preview: Vec<String> = TaskStatus::all()
        .iter()
        .map(|&status| format!("{}", status_style(colors, status).apply(format!(" {} task ", status))))
        .collect();
    lines.push(format!("  Preview: {}", preview.join(" ")));
    lines
}

/// Sample of `hex` with the font colour picked for it
pub fn render_contrast(hex: &str) -> String {
    let font = contrasting_font_color(hex);
    let style = ContentStyle {
        foreground_color: hex_to_color(font),
        background_color: hex_to_color(hex),
        ..ContentStyle::default()
    };
    format!("{}  {}", font, style.apply(" Sample text "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_list_highlights_current() {
        let mut catalog = ThemeCatalog::default();
        catalog.themes.insert("Paper".to_string(), ColorSet::light());
        catalog.themes.insert("Ink".to_string(), ColorSet::dark());
        catalog.last_theme = Some("Ink".to_string());

        let lines = render_theme_list(&catalog);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("  Paper"));
        assert!(lines[1].starts_with('▸'));
    }

    #[test]
    fn test_render_theme_lists_all_params() {
        let lines = render_theme("Light", &ColorSet::light());
        // Title, nine parameters, preview
        assert_eq!(lines.len(), 11);
        assert!(lines[1].contains("UIBackground"));
        assert!(lines[9].contains("DoneBackground"));
        assert!(lines[10].contains("WIP task"));
    }

    #[test]
    fn test_render_contrast() {
        assert!(render_contrast("#ffffff").starts_with("#000000"));
        assert!(render_contrast("#000").starts_with("#ffffff"));
    }
}
