use crate::domain::model::{EmailParams, Notification};
use crate::utils::error::DeliveryError;
use async_trait::async_trait;

/// Transactional email provider. One call per accepted submission.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, params: &EmailParams) -> std::result::Result<(), DeliveryError>;
}

/// Toast/banner surface; rendering and timing belong to the implementation.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// 對話框關閉信號
pub trait ModalHandle: Send + Sync {
    fn close(&self);
}
