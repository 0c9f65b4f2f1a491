use crate::core::form::ContactForm;
use crate::domain::model::{Notification, NotificationKind};
use crate::domain::ports::{ModalHandle, Notifier};

/// 終端機通知
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Success => {
                tracing::info!("{}", notification.title);
                println!("✅ {}", notification.title);
                println!("   {}", notification.description);
            }
            NotificationKind::Failure => {
                tracing::warn!("{}", notification.title);
                eprintln!("❌ {}", notification.title);
                eprintln!("💡 {}", notification.description);
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleModal;

impl ModalHandle for ConsoleModal {
    fn close(&self) {
        tracing::debug!("Contact dialog closed");
    }
}

/// 欄位下方的錯誤文字，每個欄位一行；訊息為空時附上提示文字
pub fn field_error_lines(form: &ContactForm) -> Vec<String> {
    let mut lines: Vec<String> = form
        .field_errors()
        .into_iter()
        .map(|error| format!("{}: {}", error.field_label(), error.inline_message()))
        .collect();

    if let Some(hint) = form.message_hint() {
        lines.push(format!("Message placeholder: {}", hint));
    }
    lines
}
