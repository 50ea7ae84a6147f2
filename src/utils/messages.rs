/// Pure functions for formatting error and success messages (Discord-agnostic)

/// Format a validation error message with emoji
pub fn format_error(message: &str) -> String {
    format!("❌ {}", message)
}

/// Format a success message with emoji
pub fn format_success(message: &str) -> String {
    format!("✅ {}", message)
}

/// Format an info message with emoji
pub fn format_info(message: &str) -> String {
    format!("ℹ️ {}", message)
}

/// Build a storage error message (generic, doesn't expose internals)
pub fn build_storage_error() -> String {
    format_error("Could not reach the configuration store. Please try again later.")
}

/// Confirmation shown after a reminder channel was saved
pub fn build_channel_set_message(channel_id: &str, language: &str) -> String {
    let language_info = if language.is_empty() {
        "random (ID/JP/KR)"
    } else {
        language
    };

    format!(
        "{}\n📍 Channel: <#{}>\n🌐 Language: {}\n💾 Saved, this setting survives bot restarts.",
        format_success("Reminder channel configured!"),
        channel_id,
        language_info
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error() {
        assert_eq!(format_error("Something failed"), "❌ Something failed");
    }

    #[test]
    fn test_format_success() {
        assert_eq!(format_success("It worked"), "✅ It worked");
    }

    #[test]
    fn test_format_info() {
        assert_eq!(format_info("Good to know"), "ℹ️ Good to know");
    }

    #[test]
    fn test_build_storage_error() {
        let result = build_storage_error();
        assert!(result.starts_with("❌"));
        assert!(result.contains("configuration store"));
    }

    #[test]
    fn test_build_channel_set_message() {
        let result = build_channel_set_message("42", "ID");
        assert!(result.contains("<#42>"));
        assert!(result.contains("ID"));
        assert!(result.contains("survives bot restarts"));

        assert!(build_channel_set_message("42", "").contains("random (ID/JP/KR)"));
    }
}
