use crate::core::form::ContactForm;
use crate::domain::model::{Notification, Purpose, PurposeConfig, Rating};
use crate::domain::ports::{EmailSender, ModalHandle, Notifier};
use crate::utils::error::{ContactError, Result};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::Instrument;

/// Validation runs synchronously inside `submit` under the flow lock, so the only
/// observable states are idle and waiting on the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Idle,
    InFlight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Delivered. The success notification fired; if the modal that sent it is still
    /// open, its form was cleared and the modal asked to close.
    Sent,
    /// Dropped without a network call: a send is already in flight or no modal is open.
    Ignored,
}

#[derive(Debug)]
struct FlowInner {
    state: FlowState,
    session: u64,
    form: Option<ContactForm>,
}

/// 聯絡表單送出流程
///
/// Cloning yields another handle to the same form session, so a UI event loop can hand
/// copies to callbacks. The inner lock is never held across an `.await`.
///
/// The in-flight flag belongs to the flow, not to a modal session: closing or reopening
/// the modal does not cancel an outstanding send, and no new send starts until it resolves.
pub struct ContactFlow<E, N, M> {
    sender: Arc<E>,
    notifier: Arc<N>,
    modal: Arc<M>,
    recipient: Arc<str>,
    inner: Arc<Mutex<FlowInner>>,
}

impl<E, N, M> Clone for ContactFlow<E, N, M> {
    fn clone(&self) -> Self {
        Self {
            sender: Arc::clone(&self.sender),
            notifier: Arc::clone(&self.notifier),
            modal: Arc::clone(&self.modal),
            recipient: Arc::clone(&self.recipient),
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E, N, M> ContactFlow<E, N, M>
where
    E: EmailSender,
    N: Notifier,
    M: ModalHandle,
{
    pub fn new(sender: E, notifier: N, modal: M, recipient: impl Into<String>) -> Self {
        Self {
            sender: Arc::new(sender),
            notifier: Arc::new(notifier),
            modal: Arc::new(modal),
            recipient: Arc::from(recipient.into()),
            inner: Arc::new(Mutex::new(FlowInner {
                state: FlowState::Idle,
                session: 0,
                form: None,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, FlowInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn with_form(&self, f: impl FnOnce(&mut ContactForm)) {
        if let Some(form) = self.lock().form.as_mut() {
            f(form);
        }
    }

    /// 開啟新的表單期間，所有欄位回到預設值
    pub fn open(&self, purpose: Purpose) {
        let mut inner = self.lock();
        inner.session += 1;
        inner.form = Some(ContactForm::new(purpose));
        tracing::debug!(
            "Contact form opened (purpose: {}, session: {})",
            purpose,
            inner.session
        );
    }

    /// Ends the session and clears its fields. A send still in flight keeps running and
    /// still reports its result through the notifier.
    pub fn close(&self) {
        let mut inner = self.lock();
        if inner.form.take().is_some() {
            inner.session += 1;
            tracing::debug!("Contact form closed");
        }
    }

    pub fn is_open(&self) -> bool {
        self.lock().form.is_some()
    }

    pub fn state(&self) -> FlowState {
        self.lock().state
    }

    /// 送出按鈕是否停用
    pub fn is_submitting(&self) -> bool {
        self.state() == FlowState::InFlight
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn purpose_config(&self) -> Option<PurposeConfig> {
        self.lock().form.as_ref().map(|form| form.purpose().config())
    }

    /// Snapshot of the open form, if any.
    pub fn form(&self) -> Option<ContactForm> {
        self.lock().form.clone()
    }

    pub fn set_sender_email(&self, value: impl Into<String>) {
        let value = value.into();
        self.with_form(|form| form.set_sender_email(value));
    }

    pub fn set_message(&self, value: impl Into<String>) {
        let value = value.into();
        self.with_form(|form| form.set_message(value));
    }

    pub fn set_rating(&self, rating: Rating) {
        self.with_form(|form| form.set_rating(rating));
    }

    pub fn hover_rating(&self, rating: Option<Rating>) {
        self.with_form(|form| form.hover_rating(rating));
    }

    pub async fn submit(&self) -> Result<SubmitOutcome> {
        let (session, submission) = {
            let mut inner = self.lock();
            if inner.state == FlowState::InFlight {
                tracing::debug!("Submission already in flight, ignoring");
                return Ok(SubmitOutcome::Ignored);
            }

            let Some(validated) = inner.form.as_ref().map(ContactForm::validate) else {
                tracing::debug!("Submit without an open contact form, ignoring");
                return Ok(SubmitOutcome::Ignored);
            };

            match validated {
                Ok(submission) => {
                    inner.state = FlowState::InFlight;
                    (inner.session, submission)
                }
                Err(field) => {
                    tracing::debug!("Contact form validation failed: {}", field);
                    return Err(ContactError::Validation(field));
                }
            }
        };

        let mut guard = InFlightGuard {
            inner: Arc::clone(&self.inner),
            armed: true,
        };

        let params = submission.to_email_params();
        let span = tracing::info_span!("contact_submit", purpose = %submission.purpose, session);
        tracing::info!(parent: &span, "📨 Sending contact message ({})", params.subject);
        tracing::debug!(parent: &span, "Email params: {:?}", params);

        let result = self.sender.send(&params).instrument(span.clone()).await;
        guard.armed = false;

        let mut inner = self.lock();
        inner.state = FlowState::Idle;
        let same_session = inner.session == session;

        match result {
            Ok(()) => {
                if same_session {
                    if let Some(form) = inner.form.as_mut() {
                        form.reset();
                    }
                }
                drop(inner);

                tracing::info!(parent: &span, "✅ Contact message delivered");
                self.notifier.notify(Notification::sent());
                if same_session {
                    self.modal.close();
                } else {
                    tracing::debug!(parent: &span, "Modal already closed, form left untouched");
                }
                Ok(SubmitOutcome::Sent)
            }
            Err(e) => {
                drop(inner);

                tracing::warn!(parent: &span, "❌ Contact message delivery failed: {}", e);
                self.notifier.notify(Notification::failed());
                Err(ContactError::Delivery(e))
            }
        }
    }
}

/// Puts the flow back to idle if a submit future is dropped mid-send.
struct InFlightGuard {
    inner: Arc<Mutex<FlowInner>>,
    armed: bool,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        if self.armed {
            let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
            inner.state = FlowState::Idle;
        }
    }
}
