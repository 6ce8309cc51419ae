use colored::*;

use crate::models::Location;

/// Shorten to at most `max_len` characters, marking the cut with "...".
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

/// Opacity as a whole percentage. Out-of-range values are shown as they are.
pub fn format_opacity(opacity: f64) -> String {
    format!("{:.0}%", opacity * 100.0)
}

pub fn format_toggle(enabled: bool) -> ColoredString {
    if enabled {
        "on".green().bold()
    } else {
        "off".dimmed()
    }
}

pub fn format_location(location: Option<&Location>) -> String {
    match location {
        Some(location) => location.to_string(),
        None => "Not set".to_string(),
    }
}

/// Center `text` in a field `width` characters wide.
pub fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_is_char_safe() {
        assert_eq!(truncate("Muslim World League", 10), "Muslim ...");
        assert_eq!(truncate("Öğle", 10), "Öğle");
        assert_eq!(truncate("Diyanet İşleri", 9), "Diyane...");
        assert_eq!(truncate("abcdef", 2), "ab");
    }

    #[test]
    fn test_format_opacity_keeps_out_of_range_values() {
        assert_eq!(format_opacity(0.85), "85%");
        assert_eq!(format_opacity(1.5), "150%");
    }

    #[test]
    fn test_center() {
        assert_eq!(center("ab", 6), "  ab  ");
        assert_eq!(center("abc", 6), " abc  ");
        assert_eq!(center("toolong", 3), "toolong");
    }
}
