//! Utilities for sanitizing untrusted text before it is sent to users.
//!
//! Resolver error causes are produced by the network and may carry control
//! characters or arbitrarily long dumps. Replies are sent as plain text, so no
//! markup escaping is needed, only cleanup and truncation.

use crate::config::MAX_ERROR_MESSAGE_LENGTH;

/// Sanitizes an error message by removing control characters.
///
/// Control characters (0x00-0x1F, except newline/tab/carriage return) and DEL
/// are removed; everything else, including non-ASCII text, is kept.
///
/// # Arguments
///
/// * `message` - The error message to sanitize
///
/// # Returns
///
/// A sanitized version of the message with control characters removed.
pub fn sanitize_error_message(message: &str) -> String {
    message
        .chars()
        .filter(|c| {
            let code = *c as u32;
            (code >= 0x20 && code != 0x7F) // Printable ASCII starts at 0x20 (space)
                || code == 0x09 // Tab
                || code == 0x0A // Newline
                || code == 0x0D // Carriage return
        })
        .collect()
}

/// Sanitizes and truncates an error message to `MAX_ERROR_MESSAGE_LENGTH` characters.
///
/// Truncation counts characters, not bytes, so multi-byte text is never split.
/// A truncated message ends with a note giving the original length.
pub fn sanitize_and_truncate_error_message(message: &str) -> String {
    let sanitized = sanitize_error_message(message);
    let char_count = sanitized.chars().count();

    if char_count > MAX_ERROR_MESSAGE_LENGTH {
        // Leave room for the truncation note
        let keep = MAX_ERROR_MESSAGE_LENGTH.saturating_sub(50);
        let truncated: String = sanitized.chars().take(keep).collect();
        format!(
            "{}... (truncated, original length: {} chars)",
            truncated, char_count
        )
    } else {
        sanitized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_error_message_removes_control_chars() {
        let input = "Error\x00message\x01with\x02control\x03chars\x7f";
        let output = sanitize_error_message(input);
        assert_eq!(output, "Errormessagewithcontrolchars");
    }

    #[test]
    fn test_sanitize_error_message_preserves_newlines_and_tabs() {
        let input = "Error\nmessage\twith\r\nwhitespace";
        let output = sanitize_error_message(input);
        assert_eq!(output, input);
    }

    #[test]
    fn test_sanitize_error_message_preserves_unicode() {
        let input = "Error message with unicode: 测试 🚀";
        let output = sanitize_error_message(input);
        assert_eq!(output, input);
    }

    #[test]
    fn test_sanitize_error_message_empty_string() {
        assert_eq!(sanitize_error_message(""), "");
    }

    #[test]
    fn test_truncate_short_message_unchanged() {
        let input = "no route to host";
        assert_eq!(sanitize_and_truncate_error_message(input), input);
    }

    #[test]
    fn test_truncate_long_message() {
        let input = "x".repeat(MAX_ERROR_MESSAGE_LENGTH + 100);
        let output = sanitize_and_truncate_error_message(&input);
        assert!(output.chars().count() <= MAX_ERROR_MESSAGE_LENGTH);
        assert!(output.contains("truncated, original length"));
    }

    #[test]
    fn test_truncate_multibyte_does_not_panic() {
        let input = "测".repeat(MAX_ERROR_MESSAGE_LENGTH * 2);
        let output = sanitize_and_truncate_error_message(&input);
        assert!(output.starts_with('测'));
        assert!(output.ends_with("chars)"));
    }
}
