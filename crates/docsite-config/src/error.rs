//! Configuration error type.

/// Field name used when the raw input could not be deserialized at all.
pub const INPUT_FIELD: &str = "<input>";

/// Configuration error.
///
/// Carries the offending field as a camelCase path into the raw input
/// (e.g. `themeConfig.navbar.items[1].href`) and a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Configuration error in {field}: {message}")]
pub struct ConfigError {
    field: String,
    message: String,
}

impl ConfigError {
    /// Create an error for `field`.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Error for a required field that is absent.
    pub fn missing(field: impl Into<String>) -> Self {
        Self::new(field, "is required")
    }

    /// Error for a value that could not be converted to or from the raw records.
    pub fn serde(err: &serde_json::Error) -> Self {
        Self::new(INPUT_FIELD, err.to_string())
    }

    /// Path of the offending field.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Error message without the field path.
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_field_and_message() {
        let err = ConfigError::new("i18n.defaultLocale", "must be listed in i18n.locales");
        assert_eq!(
            err.to_string(),
            "Configuration error in i18n.defaultLocale: must be listed in i18n.locales"
        );
        assert_eq!(err.field(), "i18n.defaultLocale");
        assert_eq!(err.message(), "must be listed in i18n.locales");
    }

    #[test]
    fn test_missing() {
        let err = ConfigError::missing("title");
        assert_eq!(err.field(), "title");
        assert_eq!(err.message(), "is required");
    }

    #[test]
    fn test_serde_uses_input_field() {
        let err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err = ConfigError::serde(&err);
        assert_eq!(err.field(), INPUT_FIELD);
        assert!(!err.message().is_empty());
    }
}
