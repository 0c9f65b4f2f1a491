pub mod flow;
pub mod form;

pub use crate::domain::model::{ContactSubmission, EmailParams, Notification, Purpose, Rating};
pub use crate::domain::ports::{EmailSender, ModalHandle, Notifier};
pub use crate::utils::error::Result;
