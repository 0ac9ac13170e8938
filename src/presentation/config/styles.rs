use std::collections::HashMap;

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de::Deserializer, Deserialize};

/// Named styles of the page strip, keyed by element name
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<String, Style>);

impl Styles {
    /// Style for `key`, or the terminal default when it is not configured
    pub fn get_or_default(&self, key: &str) -> Style {
        self.get(key).copied().unwrap_or_default()
    }
}

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, String>::deserialize(deserializer)?;

        let styles = parsed_map
            .into_iter()
            .map(|(key, style)| (key, parse_style(&style)))
            .collect();

        Ok(Styles(styles))
    }
}

/// Parses `"bold orange on white"` style strings.
///
/// Colors accept the ratatui names plus `colorN`, `grayN` and `rgbRGB` with
/// each channel in `0..=5` (the xterm 256-color cube).
pub fn parse_style(line: &str) -> Style {
    let (foreground, background) =
        line.split_at(line.to_lowercase().find("on ").unwrap_or(line.len()));
    let foreground = process_color_string(foreground);
    let background = process_color_string(&background.replace("on ", ""));

    let mut style = Style::default();
    if let Some(fg) = parse_color(&foreground.0) {
        style = style.fg(fg);
    }
    if let Some(bg) = parse_color(&background.0) {
        style = style.bg(bg);
    }
    style = style.add_modifier(foreground.1 | background.1);
    style
}

fn process_color_string(color_str: &str) -> (String, Modifier) {
    let color = color_str
        .replace("grey", "gray")
        .replace("bright ", "")
        .replace("bold ", "")
        .replace("underline ", "")
        .replace("inverse ", "")
        .replace("dim ", "");

    let mut modifiers = Modifier::empty();
    if color_str.contains("underline") {
        modifiers |= Modifier::UNDERLINED;
    }
    if color_str.contains("bold") {
        modifiers |= Modifier::BOLD;
    }
    if color_str.contains("inverse") {
        modifiers |= Modifier::REVERSED;
    }
    if color_str.contains("dim") {
        modifiers |= Modifier::DIM;
    }

    (color, modifiers)
}

fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Some(c) = s.strip_prefix("color").and_then(|n| n.parse::<u8>().ok()) {
        return Some(Color::Indexed(c));
    }
    if let Some(c) = s.strip_prefix("gray").and_then(|n| n.parse::<u8>().ok()) {
        return Some(Color::Indexed(232u8.saturating_add(c)));
    }
    if let Some(rgb) = s.strip_prefix("rgb") {
        let digits: Vec<u8> = rgb
            .chars()
            .map(|c| c.to_digit(10).map(|d| d as u8))
            .collect::<Option<_>>()?;
        return match digits.as_slice() {
            [red, green, blue] if *red <= 5 && *green <= 5 && *blue <= 5 => {
                Some(Color::Indexed(16 + red * 36 + green * 6 + blue))
            }
            _ => None,
        };
    }
    if s == "orange" {
        // rgb520 in the 256-color cube
        return Some(Color::Indexed(208));
    }
    s.parse::<Color>().ok()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("red", Some(Color::Red))]
    #[case("color33", Some(Color::Indexed(33)))]
    #[case("gray10", Some(Color::Indexed(242)))]
    #[case("rgb520", Some(Color::Indexed(208)))]
    #[case("orange", Some(Color::Indexed(208)))]
    #[case("rgb999", None)]
    #[case("", None)]
    #[case("darkgray", Some(Color::DarkGray))]
    fn test_parse_color(#[case] raw: &str, #[case] expected: Option<Color>) {
        assert_eq!(parse_color(raw), expected);
    }

    #[test]
    fn test_parse_style_with_background_and_modifiers() {
        let style = parse_style("bold orange on white");
        assert_eq!(style.fg, Some(Color::Indexed(208)));
        assert_eq!(style.bg, Some(Color::White));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_parse_style_dim() {
        let style = parse_style("dim gray");
        assert_eq!(style.fg, Some(Color::Gray));
        assert!(style.add_modifier.contains(Modifier::DIM));
    }

    #[test]
    fn test_missing_style_is_default() {
        assert_eq!(Styles::default().get_or_default("tab"), Style::default());
    }
}
