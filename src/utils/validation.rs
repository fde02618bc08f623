use crate::utils::error::{Result, SwapiError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(SwapiError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(SwapiError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(SwapiError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// The film identifier is appended verbatim, so the base must already end in a path separator.
pub fn validate_trailing_slash(field_name: &str, url_str: &str) -> Result<()> {
    if !url_str.ends_with('/') {
        return Err(SwapiError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL must end with '/'".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("base_url", "https://example.com/api/films/").is_ok());
        assert!(validate_url("base_url", "http://127.0.0.1:8080/").is_ok());
        assert!(validate_url("base_url", "").is_err());
        assert!(validate_url("base_url", "invalid-url").is_err());
        assert!(validate_url("base_url", "ftp://example.com/").is_err());
    }

    #[test]
    fn test_validate_trailing_slash() {
        assert!(validate_trailing_slash("base_url", "https://example.com/api/films/").is_ok());
        let err = validate_trailing_slash("base_url", "https://example.com/api/films").unwrap_err();
        assert!(err.to_string().contains("must end with '/'"));
    }
}
