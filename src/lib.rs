pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{
    console::{ConsoleModal, ConsoleNotifier},
    emailjs::EmailJsSender,
};
pub use crate::config::{ContactConfig, ProviderConfig};
pub use crate::core::{
    flow::{ContactFlow, FlowState, SubmitOutcome},
    form::ContactForm,
};
pub use crate::domain::model::{FieldError, Notification, NotificationKind, Purpose, Rating};
pub use crate::utils::error::{ContactError, DeliveryError, Result};
