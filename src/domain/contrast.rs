use super::enums::TaskStatus;
use super::theme::{ColorSet, ThemeParam};

pub const BLACK: &str = "#000000";
pub const WHITE: &str = "#ffffff";

/// Parse `#RGB` or `#RRGGBB` into its components
pub fn parse_hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.trim_start_matches('#');
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => return None,
    };

    let r = u8::from_str_radix(&expanded[0..2], 16).ok()?;
    let g = u8::from_str_radix(&expanded[2..4], 16).ok()?;
    let b = u8::from_str_radix(&expanded[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Perceived brightness of a colour in 0.0..=1.0
pub fn luminance(r: u8, g: u8, b: u8) -> f64 {
    (0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64) / 255.0
}

/// Black or white, whichever reads better on `bg_hex`. Unparseable input gets black.
pub fn contrasting_font_color(bg_hex: &str) -> &'static str {
    match parse_hex_rgb(bg_hex) {
        Some((r, g, b)) if luminance(r, g, b) <= 0.5 => WHITE,
        _ => BLACK,
    }
}

/// Background and foreground for a status badge under `colors`
pub fn status_colors(colors: &ColorSet, status: TaskStatus) -> (&str, &'static str) {
    let background = colors.get(ThemeParam::for_status(status));
    (background, contrasting_font_color(background))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extremes() {
        assert_eq!(contrasting_font_color("#ffffff"), BLACK);
        assert_eq!(contrasting_font_color("#000000"), WHITE);
    }

    #[test]
    fn test_saturated_red_gets_white() {
        assert_eq!(contrasting_font_color("#e53935"), WHITE);
    }

    #[test]
    fn test_yellow_gets_black() {
        assert_eq!(contrasting_font_color("#fbc02d"), BLACK);
    }

    #[test]
    fn test_short_form_matches_long_form() {
        for (short, long) in [("#fff", "#ffffff"), ("#123", "#112233"), ("#9c9", "#99cc99")] {
            assert_eq!(contrasting_font_color(short), contrasting_font_color(long));
            assert_eq!(parse_hex_rgb(short), parse_hex_rgb(long));
        }
    }

    #[test]
    fn test_unparseable_defaults_to_black() {
        assert_eq!(contrasting_font_color(""), BLACK);
        assert_eq!(contrasting_font_color("#"), BLACK);
        assert_eq!(contrasting_font_color("#12345"), BLACK);
        assert_eq!(contrasting_font_color("#zzzzzz"), BLACK);
        assert_eq!(contrasting_font_color("#+1+1+1"), BLACK);
        assert_eq!(contrasting_font_color("#ééé"), BLACK);
    }

    #[test]
    fn test_middle_grey_boundary() {
        // 0x80 sits just above half brightness
        assert_eq!(contrasting_font_color("#808080"), BLACK);
        assert_eq!(contrasting_font_color("#7f7f7f"), WHITE);
    }

    #[test]
    fn test_status_colors() {
        let colors = ColorSet::light();
        assert_eq!(status_colors(&colors, TaskStatus::Pending), ("#e53935", WHITE));
        assert_eq!(status_colors(&colors, TaskStatus::Wip), ("#fbc02d", BLACK));
    }
}
