//! Text helpers shared by the terminal reports

/// Horizontal bar of `width` cells, filled in proportion to `value / max_value`
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate to `max_len` characters, ending with an ellipsis when cut
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(5.0, 10.0, 4), "██░░");
        assert_eq!(format_bar(20.0, 10.0, 3), "███");
        assert_eq!(format_bar(0.0, 10.0, 2), "░░");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Groceries", 20), "Groceries");
        assert_eq!(truncate("Weekly groceries run", 10), "Weekly ...");
        assert_eq!(truncate("Café au lait", 7), "Café...");
        assert_eq!(truncate("abcdef", 2), "..");
    }
}
