//! Shared helper functions for CLI commands.

/// Truncate a string for display, appending an ellipsis (UTF-8 safe).
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", cut)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate("doc.txt", 50), "doc.txt");
    }

    #[test]
    fn test_truncate_long_string() {
        assert_eq!(truncate("abcdefgh", 5), "abcd…");
    }

    #[test]
    fn test_truncate_multibyte_safe() {
        assert_eq!(truncate("бюджетные_документы", 8), "бюджетн…");
    }
}
