use crate::utils::error::{GateError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(GateError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(GateError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(GateError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(GateError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(GateError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Artifact names are joined onto the content root, so they must stay inside it.
pub fn validate_file_name(field_name: &str, name: &str) -> Result<()> {
    validate_path(field_name, name)?;

    if name.contains('/') || name.contains('\\') || name == "." || name == ".." {
        return Err(GateError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Must be a plain file name without directory components".to_string(),
        });
    }

    Ok(())
}

pub fn validate_header_name(field_name: &str, name: &str) -> Result<()> {
    validate_non_empty_string(field_name, name)?;

    if axum::http::HeaderName::from_bytes(name.as_bytes()).is_err() {
        return Err(GateError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Not a valid HTTP header name".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(GateError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| GateError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GateError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(GateError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("identity.auth_base_url", "https://example.com").is_ok());
        assert!(validate_url("identity.auth_base_url", "http://127.0.0.1:8080").is_ok());
        assert!(validate_url("identity.auth_base_url", "").is_err());
        assert!(validate_url("identity.auth_base_url", "invalid-url").is_err());
        assert!(validate_url("identity.auth_base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_file_name() {
        assert!(validate_file_name("content.allowed_file", "static.html").is_ok());
        assert!(validate_file_name("content.allowed_file", "").is_err());
        assert!(validate_file_name("content.allowed_file", "../secret.html").is_err());
        assert!(validate_file_name("content.allowed_file", "..").is_err());
    }

    #[test]
    fn test_validate_header_name() {
        assert!(validate_header_name("identity.header_name", "X-MS-CLIENT-PRINCIPAL-NAME").is_ok());
        assert!(validate_header_name("identity.header_name", "bad header").is_err());
        assert!(validate_header_name("identity.header_name", " ").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("identity.timeout_seconds", 5, 1, 60).is_ok());
        assert!(validate_range("identity.timeout_seconds", 0, 1, 60).is_err());
        assert!(validate_range("identity.timeout_seconds", 61, 1, 60).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("contoso.com".to_string());
        let absent: Option<String> = None;
        assert!(validate_required_field("gate.expected_domain", &present).is_ok());
        assert!(matches!(
            validate_required_field("gate.expected_domain", &absent),
            Err(GateError::MissingConfigError { .. })
        ));
    }
}
