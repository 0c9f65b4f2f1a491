use crate::domain::model::FieldError;
use crate::utils::error::{ContactError, Result};
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

pub const MIN_MESSAGE_CHARS: usize = 10;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

static UNRESOLVED_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{[^}]+\}").expect("placeholder pattern compiles"));

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// 驗證寄件者信箱
pub fn validate_sender_email(value: &str) -> std::result::Result<(), FieldError> {
    if is_valid_email(value) {
        Ok(())
    } else {
        Err(FieldError::InvalidEmail)
    }
}

/// 驗證訊息內容 (以字元計算長度)
pub fn validate_message(value: &str) -> std::result::Result<(), FieldError> {
    if value.chars().count() < MIN_MESSAGE_CHARS {
        Err(FieldError::MessageTooShort)
    } else {
        Ok(())
    }
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ContactError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ContactError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ContactError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ContactError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 確認 ${VAR} 已被環境變數取代
pub fn validate_resolved(field_name: &str, value: &str) -> Result<()> {
    if let Some(placeholder) = UNRESOLVED_PLACEHOLDER.find(value) {
        return Err(ContactError::ConfigValidationError {
            field: field_name.to_string(),
            message: format!(
                "Environment variable placeholder {} was not resolved",
                placeholder.as_str()
            ),
        });
    }
    Ok(())
}

pub fn validate_recipient(field_name: &str, value: &str) -> Result<()> {
    if !is_valid_email(value) {
        return Err(ContactError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Recipient must be a valid email address".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(ContactError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_email_pattern() {
        assert!(validate_sender_email("a@b.com").is_ok());
        assert!(validate_sender_email("First.Last+tag@Example.CO.UK").is_ok());

        for bad in ["", "not-an-email", "a@b", "a b@c.com", "@b.com", "a@@b.com", "a@b.c om"] {
            assert_eq!(
                validate_sender_email(bad),
                Err(FieldError::InvalidEmail),
                "expected {:?} to be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_message_length() {
        assert_eq!(validate_message(""), Err(FieldError::MessageTooShort));
        assert_eq!(validate_message("123456789"), Err(FieldError::MessageTooShort));
        assert!(validate_message("1234567890").is_ok());
        // 9 個中文字元，位元組數超過 10 仍不足
        assert_eq!(validate_message("你好你好你好你好你"), Err(FieldError::MessageTooShort));
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url(
            "provider.endpoint",
            "https://api.emailjs.com/api/v1.0/email/send"
        )
        .is_ok());
        assert!(validate_url("provider.endpoint", "http://localhost:8080/send").is_ok());
        assert!(validate_url("provider.endpoint", "").is_err());
        assert!(validate_url("provider.endpoint", "invalid-url").is_err());
        assert!(validate_url("provider.endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_resolved() {
        assert!(validate_resolved("provider.service_id", "service_abc").is_ok());
        assert!(matches!(
            validate_resolved("provider.service_id", "${EMAILJS_SERVICE_ID}"),
            Err(ContactError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("provider.timeout_seconds", 5, 1).is_ok());
        assert!(validate_positive_number("provider.timeout_seconds", 0, 1).is_err());
    }
}
