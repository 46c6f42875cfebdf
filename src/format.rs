//! Chat markup formatting helpers.
//!
//! Only the fragment of platform markup the descriptor layer needs:
//! bolding the "Optional"/"Required" markers inside type descriptions.

/// Wrap a string in double asterisks so chat clients render it bold.
///
/// Empty input yields an empty string rather than bare markup.
///
/// # Example
///
/// ```
/// use cordite::format::bold;
///
/// assert_eq!(bold("Required"), "**Required**");
/// assert_eq!(bold(""), "");
/// ```
pub fn bold(text: &str) -> String {
    if text.is_empty() {
        String::new()
    } else {
        format!("**{text}**")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_wraps_text() {
        assert_eq!(bold("Bold test"), "**Bold test**");
    }

    #[test]
    fn test_bold_empty_input() {
        assert_eq!(bold(""), "");
    }
}
