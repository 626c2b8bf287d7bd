use crate::domain::{parse_hex_rgb, status_colors, ColorSet, TaskStatus};
use crossterm::style::{Attribute, Color, ContentStyle};

/// Terminal colour for a theme hex value
pub fn hex_to_color(hex: &str) -> Option<Color> {
    parse_hex_rgb(hex).map(|(r, g, b)| Color::Rgb { r, g, b })
}

/// Status badge: theme background with a contrasting foreground
pub fn status_style(colors: &ColorSet, status: TaskStatus) -> ContentStyle {
    let (background, foreground) = status_colors(colors, status);
    ContentStyle {
        foreground_color: hex_to_color(foreground),
        background_color: hex_to_color(background),
        ..ContentStyle::default()
    }
}

/// Solid block showing a colour
pub fn swatch_style(hex: &str) -> ContentStyle {
    ContentStyle {
        background_color: hex_to_color(hex),
        ..ContentStyle::default()
    }
}

/// Favourite project marker
pub fn favourite_style() -> ContentStyle {
    let mut style = ContentStyle::new();
    style.foreground_color = Some(Color::Yellow);
    style.attributes.set(Attribute::Bold);
    style
}

/// The selected project or theme
pub fn current_style() -> ContentStyle {
    let mut style = ContentStyle::new();
    style.attributes.set(Attribute::Bold);
    style
}

/// Ids and other secondary text
pub fn hint_style() -> ContentStyle {
    ContentStyle {
        foreground_color: Some(Color::DarkGrey),
        ..ContentStyle::default()
    }
}
