use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

/// Resolved styles for the screen.
///
/// Kept deliberately small: one accent color drives the focused and
/// selected styles, done tasks render green with strike-through.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub accent: Color,
    pub selection_style: Style,
    pub done_style: Style,
    pub dimmed_style: Style,
    pub base_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new("Cyan")
    }
}

impl Theme {
    pub fn new(accent_color_str: &str) -> Self {
        Self::from_color(parse_color(accent_color_str))
    }

    #[must_use]
    pub fn from_color(accent: Color) -> Self {
        Self {
            accent,
            selection_style: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            done_style: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::CROSSED_OUT),
            dimmed_style: Style::default().fg(Color::DarkGray),
            base_style: Style::default().fg(Color::Reset),
        }
    }
}

fn parse_color(s: &str) -> Color {
    if let Ok(c) = Color::from_str(s) {
        return c;
    }

    if s.starts_with('#')
        && let Some((r, g, b)) = parse_hex_color(s)
    {
        return Color::Rgb(r, g, b);
    }

    match s.to_lowercase().as_str() {
        "orange" => Color::Indexed(208),
        "purple" => Color::Indexed(93),
        "pink" => Color::Indexed(205),
        _ => Color::Cyan,
    }
}

fn parse_hex_color(s: &str) -> Option<(u8, u8, u8)> {
    let hex = s.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_color() {
        let theme = Theme::new("Yellow");
        assert_eq!(theme.accent, Color::Yellow);
    }

    #[test]
    fn test_hex_color() {
        let theme = Theme::new("#1db863");
        assert_eq!(theme.accent, Color::Rgb(0x1d, 0xb8, 0x63));
    }

    #[test]
    fn test_unknown_color_falls_back() {
        let theme = Theme::new("not-a-color");
        assert_eq!(theme.accent, Color::Cyan);
    }

    #[test]
    fn test_extended_names() {
        assert_eq!(Theme::new("orange").accent, Color::Indexed(208));
    }
}
