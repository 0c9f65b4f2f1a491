use crate::domain::model::FieldError;
use thiserror::Error;

/// 郵件服務商呼叫失敗
#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("Email provider unreachable: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Email provider rejected the message (HTTP {status}): {body}")]
    Rejected { status: u16, body: String },
}

#[derive(Error, Debug)]
pub enum ContactError {
    #[error("Validation error: {0}")]
    Validation(FieldError),

    #[error("Delivery failed: {0}")]
    Delivery(#[from] DeliveryError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid rating {value}: must be between 0 and 5")]
    InvalidRating { value: u8 },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

impl From<FieldError> for ContactError {
    fn from(err: FieldError) -> Self {
        ContactError::Validation(err)
    }
}

impl ContactError {
    /// 給使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            ContactError::Validation(field) => field.inline_message().to_string(),
            ContactError::Delivery(_) => {
                "Something went wrong while sending your message".to_string()
            }
            ContactError::InvalidRating { value } => {
                format!("Rating {} is not a valid star count", value)
            }
            ContactError::IoError(_) => "Failed to read the configuration file".to_string(),
            ContactError::MissingConfigError { .. }
            | ContactError::InvalidConfigValueError { .. }
            | ContactError::ConfigValidationError { .. } => {
                format!("Contact form is not configured correctly: {}", self)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ContactError::Validation(FieldError::InvalidEmail) => {
                "Enter an address like your.email@example.com"
            }
            ContactError::Validation(FieldError::MessageTooShort) => {
                "Write at least 10 characters"
            }
            ContactError::Delivery(_) => "Please try again or email directly.",
            ContactError::InvalidRating { .. } => "Pick between 1 and 5 stars, or leave it unrated",
            ContactError::IoError(_) => "Check file permissions and the config path",
            _ => "Check the [provider] and [contact] sections of the config file",
        }
    }

    /// CLI 結束代碼
    pub fn exit_code(&self) -> i32 {
        match self {
            ContactError::Validation(_) | ContactError::InvalidRating { .. } => 2,
            ContactError::Delivery(_) => 3,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, ContactError>;
