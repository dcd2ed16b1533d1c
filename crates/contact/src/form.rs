use std::{fmt, sync::Arc, time::Duration};

use tokio::{sync::watch, task::JoinHandle};
use vitrine_shared::{Error, Result};

use crate::{Field, FormFields, Phase, SubmissionStatus, SubmissionTransport};

/// How long an outcome stays on screen unless configured otherwise.
pub const STATUS_RESET_DELAY: Duration = Duration::from_secs(5);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactFormConfig {
    /// Delay between a submission outcome and the return to idle.
    pub status_reset: Duration,
}

impl Default for ContactFormConfig {
    fn default() -> Self {
        Self {
            status_reset: STATUS_RESET_DELAY,
        }
    }
}

/// Snapshot handed to the presentation layer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub fields: FormFields,
    pub phase: Phase,
}

impl FormState {
    pub fn status(&self) -> SubmissionStatus {
        self.phase.status()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }
}

/// Contact form controller.
///
/// Transitions run `idle -> submitting -> success | error -> idle`. Submissions are only
/// accepted from `idle`. Work scheduled by [`ContactForm::submit`] belongs to the controller:
/// dropping it behaves like [`ContactForm::cancel`], so subscribers see a final `idle`
/// snapshot before the channel closes.
pub struct ContactForm {
    state: Arc<watch::Sender<FormState>>,
    transport: Arc<dyn SubmissionTransport>,
    config: ContactFormConfig,
    pending: Option<JoinHandle<()>>,
}

impl ContactForm {
    pub fn new(transport: Arc<dyn SubmissionTransport>, config: ContactFormConfig) -> Self {
        let (state, _) = watch::channel(FormState::default());

        Self {
            state: Arc::new(state),
            transport,
            config,
            pending: None,
        }
    }

    pub fn state(&self) -> FormState {
        self.state.borrow().clone()
    }

    pub fn fields(&self) -> FormFields {
        self.state.borrow().fields.clone()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.state.borrow().status()
    }

    pub fn is_submitting(&self) -> bool {
        self.state.borrow().is_submitting()
    }

    /// Read-only feed of every state change.
    pub fn subscribe(&self) -> watch::Receiver<FormState> {
        self.state.subscribe()
    }

    pub fn update_field(&mut self, field: Field, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        let mut result = Ok(());

        self.state.send_if_modified(|state| {
            result = state.fields.set(field, value);
            result.is_ok()
        });

        result
    }

    /// Starts delivering the current fields and returns without waiting.
    ///
    /// Required fields are checked by the input surface before this is called. Must run
    /// inside a Tokio runtime.
    pub fn submit(&mut self) -> Result<()> {
        let mut fields = None;

        self.state.send_if_modified(|state| {
            if state.phase != Phase::Idle {
                return false;
            }

            state.phase = Phase::Submitting;
            fields = Some(state.fields.clone());
            true
        });

        let Some(fields) = fields else {
            return Err(Error::Busy);
        };

        tracing::info!(subject = ?fields.subject, "submitting contact form");

        let task = tokio::spawn(deliver(
            Arc::clone(&self.state),
            Arc::clone(&self.transport),
            fields,
            self.config.status_reset,
        ));

        if let Some(previous) = self.pending.replace(task) {
            previous.abort();
        }

        Ok(())
    }

    /// Waits until no submission is in flight and returns the resulting status.
    pub async fn settled(&self) -> SubmissionStatus {
        let mut rx = self.state.subscribe();
        let status = match rx.wait_for(|state| !state.is_submitting()).await {
            Ok(state) => state.status(),
            Err(_) => self.status(),
        };

        status
    }

    /// Aborts scheduled transitions and returns to idle. Fields are kept.
    pub fn cancel(&mut self) {
        if let Some(task) = self.pending.take() {
            task.abort();
        }

        let cancelled = self.state.send_if_modified(|state| {
            if state.phase == Phase::Idle {
                return false;
            }

            state.phase = Phase::Idle;
            true
        });

        if cancelled {
            tracing::debug!("contact form transitions cancelled");
        }
    }
}

impl Drop for ContactForm {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl fmt::Debug for ContactForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactForm")
            .field("state", &*self.state.borrow())
            .field("config", &self.config)
            .field("pending", &self.pending.is_some())
            .finish_non_exhaustive()
    }
}

async fn deliver(
    state: Arc<watch::Sender<FormState>>,
    transport: Arc<dyn SubmissionTransport>,
    fields: FormFields,
    status_reset: Duration,
) {
    match transport.submit(fields).await {
        Ok(ack) => {
            tracing::info!(reference = %ack.reference, "contact form delivered");
            state.send_modify(|state| {
                state.phase = Phase::Success;
                state.fields = FormFields::default();
            });
        }
        Err(err) => {
            tracing::warn!(error = %err, "contact form delivery failed");
            state.send_modify(|state| state.phase = Phase::Error);
        }
    }

    tokio::time::sleep(status_reset).await;
    state.send_modify(|state| state.phase = Phase::Idle);
}
