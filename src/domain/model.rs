use crate::utils::error::ContactError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 聯絡目的，決定主旨與預設提示文字
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Purpose {
    #[default]
    General,
    Opportunities,
    Collaboration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurposeConfig {
    pub title: &'static str,
    pub placeholder: &'static str,
    pub subject: &'static str,
}

impl Purpose {
    pub const ALL: [Purpose; 3] = [
        Purpose::General,
        Purpose::Opportunities,
        Purpose::Collaboration,
    ];

    pub fn config(self) -> PurposeConfig {
        match self {
            Purpose::Opportunities => PurposeConfig {
                title: "Career Opportunities",
                placeholder: "Hi! I have an exciting opportunity that might interest you...",
                subject: "Career Opportunity Inquiry",
            },
            Purpose::Collaboration => PurposeConfig {
                title: "Let's Collaborate",
                placeholder: "Hello! I'd love to collaborate with you on...",
                subject: "Collaboration Proposal",
            },
            Purpose::General => PurposeConfig {
                title: "Get In Touch",
                placeholder: "Hi! I would like to discuss...",
                subject: "General Inquiry",
            },
        }
    }

    pub fn subject(self) -> &'static str {
        self.config().subject
    }

    /// 由聯絡卡片上的按鈕文字推導目的
    pub fn from_action_label(label: &str) -> Self {
        if label.contains("Opportunities") {
            Purpose::Opportunities
        } else if label.contains("Collaborate") {
            Purpose::Collaboration
        } else {
            Purpose::General
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Purpose::General => "general",
            Purpose::Opportunities => "opportunities",
            Purpose::Collaboration => "collaboration",
        }
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Purpose {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "general" => Ok(Purpose::General),
            "opportunities" => Ok(Purpose::Opportunities),
            "collaboration" => Ok(Purpose::Collaboration),
            other => Err(ContactError::InvalidConfigValueError {
                field: "purpose".to_string(),
                value: other.to_string(),
                reason: "Expected one of: general, opportunities, collaboration".to_string(),
            }),
        }
    }
}

/// 星等評分，0 代表未評分
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Rating(u8);

impl Rating {
    pub const UNRATED: Rating = Rating(0);
    pub const MAX: u8 = 5;

    /// Star choice from the fixed five-element picker.
    pub fn stars(n: u8) -> Option<Rating> {
        (1..=Self::MAX).contains(&n).then_some(Rating(n))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_rated(self) -> bool {
        self.0 > 0
    }
}

impl TryFrom<u8> for Rating {
    type Error = ContactError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value <= Self::MAX {
            Ok(Rating(value))
        } else {
            Err(ContactError::InvalidRating { value })
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 表單欄位驗證錯誤
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldError {
    InvalidEmail,
    MessageTooShort,
}

impl FieldError {
    pub fn code(self) -> &'static str {
        match self {
            FieldError::InvalidEmail => "invalid-email",
            FieldError::MessageTooShort => "message-too-short",
        }
    }

    /// 表單上的欄位標籤
    pub fn field_label(self) -> &'static str {
        match self {
            FieldError::InvalidEmail => "Your Email",
            FieldError::MessageTooShort => "Message",
        }
    }

    pub fn inline_message(self) -> &'static str {
        match self {
            FieldError::InvalidEmail => "Invalid email address",
            FieldError::MessageTooShort => "Message must be at least 10 characters",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A validated form snapshot, ready for dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub sender_email: String,
    pub message: String,
    pub rating: Rating,
    pub purpose: Purpose,
}

impl ContactSubmission {
    pub fn to_email_params(&self) -> EmailParams {
        EmailParams {
            from_email: self.sender_email.clone(),
            message: self.message.clone(),
            rating: self.rating.to_string(),
            subject: self.purpose.subject().to_string(),
        }
    }
}

/// Template parameters as the email provider template consumes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailParams {
    pub from_email: String,
    pub message: String,
    pub rating: String,
    pub subject: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: &'static str,
    pub description: &'static str,
}

impl Notification {
    pub fn sent() -> Self {
        Self {
            kind: NotificationKind::Success,
            title: "Message sent successfully",
            description: "Thank you for reaching out. I'll get back to you soon!",
        }
    }

    pub fn failed() -> Self {
        Self {
            kind: NotificationKind::Failure,
            title: "Something went wrong",
            description: "Please try again or email directly.",
        }
    }
}

/// 聯絡區塊的卡片
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactOption {
    pub title: &'static str,
    pub description: &'static str,
    pub action: &'static str,
}

impl ContactOption {
    pub fn purpose(&self) -> Purpose {
        Purpose::from_action_label(self.action)
    }
}

pub const CONTACT_OPTIONS: [ContactOption; 3] = [
    ContactOption {
        title: "Exciting Opportunities",
        description: "Open to full-time positions and exciting career opportunities",
        action: "View Opportunities",
    },
    ContactOption {
        title: "Collaborations",
        description: "Let's work together on innovative projects and solutions",
        action: "Let's Collaborate",
    },
    ContactOption {
        title: "Freelance Work",
        description: "Available for freelance projects and consulting work",
        action: "Hire Me",
    },
];
