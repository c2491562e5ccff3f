//! Field-level validation rules shared by the site and sidebar loaders.

use std::str::FromStr;

use crate::ConfigError;

/// Require a string field to be non-empty.
pub fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::new(field, "cannot be empty"));
    }
    Ok(())
}

/// Take a required string field, rejecting absent or empty values.
pub fn required(value: Option<String>, field: &str) -> Result<String, ConfigError> {
    let value = value.ok_or_else(|| ConfigError::missing(field))?;
    require_non_empty(&value, field)?;
    Ok(value)
}

/// Take an optional string field, rejecting empty values when present.
pub fn optional(value: Option<String>, field: &str) -> Result<Option<String>, ConfigError> {
    if let Some(ref value) = value {
        require_non_empty(value, field)?;
    }
    Ok(value)
}

/// Require an absolute URL with an `http` or `https` scheme and a host.
pub fn require_http_url(value: &str, field: &str) -> Result<(), ConfigError> {
    let parsed = url::Url::parse(value)
        .map_err(|e| ConfigError::new(field, format!("invalid URL `{value}`: {e}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::new(
            field,
            format!(
                "scheme '{}' not supported, must be http or https",
                parsed.scheme()
            ),
        ));
    }
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(ConfigError::new(field, "URL must have a host"));
    }
    Ok(())
}

/// Require an absolute URL of any scheme (`https:`, `mailto:`, `pathname:` ...).
pub fn require_absolute_url(value: &str, field: &str) -> Result<(), ConfigError> {
    url::Url::parse(value)
        .map(|_| ())
        .map_err(|e| ConfigError::new(field, format!("must be an absolute URL, got `{value}`: {e}")))
}

/// Require a base path that starts and ends with `/`.
pub fn require_base_url(value: &str, field: &str) -> Result<(), ConfigError> {
    if !value.starts_with('/') || !value.ends_with('/') {
        return Err(ConfigError::new(
            field,
            format!("must start and end with '/', got `{value}`"),
        ));
    }
    Ok(())
}

/// Require an internal route (`/docs/intro`).
pub fn require_route(value: &str, field: &str) -> Result<(), ConfigError> {
    if !value.starts_with('/') {
        return Err(ConfigError::new(
            field,
            format!("internal route must start with '/', got `{value}`"),
        ));
    }
    Ok(())
}

/// Parse an enumerated field, falling back to `default` when absent.
pub fn parse_or<T>(value: Option<&str>, default: T, field: &str) -> Result<T, ConfigError>
where
    T: FromStr<Err = String>,
{
    match value {
        Some(value) => value.parse().map_err(|e| ConfigError::new(field, e)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_missing() {
        let err = required(None, "title").unwrap_err();
        assert_eq!(err.field(), "title");
        assert!(err.message().contains("required"));
    }

    #[test]
    fn test_required_empty() {
        let err = required(Some(String::new()), "tagline").unwrap_err();
        assert_eq!(err.field(), "tagline");
        assert!(err.message().contains("empty"));
    }

    #[test]
    fn test_optional_accepts_absent() {
        assert_eq!(optional(None, "favicon").unwrap(), None);
    }

    #[test]
    fn test_optional_rejects_empty() {
        assert!(optional(Some(String::new()), "favicon").is_err());
    }

    #[test]
    fn test_require_http_url() {
        assert!(require_http_url("https://docs.example.com", "url").is_ok());
        assert!(require_http_url("http://localhost:3000", "url").is_ok());

        let err = require_http_url("docs.example.com", "url").unwrap_err();
        assert!(err.message().contains("invalid URL"));

        let err = require_http_url("ftp://docs.example.com", "url").unwrap_err();
        assert!(err.message().contains("http or https"));
    }

    #[test]
    fn test_require_absolute_url() {
        assert!(require_absolute_url("https://github.com/org/repo", "href").is_ok());
        assert!(require_absolute_url("mailto:team@example.com", "href").is_ok());
        assert!(require_absolute_url("/docs/intro", "href").is_err());
    }

    #[test]
    fn test_require_base_url() {
        assert!(require_base_url("/", "baseUrl").is_ok());
        assert!(require_base_url("/project/", "baseUrl").is_ok());
        assert!(require_base_url("project/", "baseUrl").is_err());
        assert!(require_base_url("/project", "baseUrl").is_err());
        assert!(require_base_url("", "baseUrl").is_err());
    }

    #[test]
    fn test_require_route() {
        assert!(require_route("/docs/intro", "to").is_ok());
        assert!(require_route("docs/intro", "to").is_err());
    }
}
