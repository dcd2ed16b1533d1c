use std::time::Duration;

use async_trait::async_trait;
use ulid::Ulid;

use crate::FormFields;

/// Latency of [`SimulatedTransport`] unless configured otherwise.
pub const SIMULATED_LATENCY: Duration = Duration::from_millis(1500);

/// Receipt for a delivered contact request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ack {
    pub reference: String,
}

impl Ack {
    pub fn new() -> Self {
        Self {
            reference: Ulid::new().to_string(),
        }
    }
}

impl Default for Ack {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
#[error("submission failed: {0}")]
pub struct SubmissionFailed(#[from] pub anyhow::Error);

impl SubmissionFailed {
    pub fn msg(message: impl std::fmt::Display + Send + Sync + 'static) -> Self {
        Self(anyhow::anyhow!("{message}"))
    }
}

/// Delivers a contact request to whoever answers it.
#[async_trait]
pub trait SubmissionTransport: Send + Sync {
    async fn submit(&self, fields: FormFields) -> Result<Ack, SubmissionFailed>;
}

/// Stand-in transport: waits a fixed latency, then acknowledges.
#[derive(Clone, Debug)]
pub struct SimulatedTransport {
    latency: Duration,
}

impl SimulatedTransport {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self::new(SIMULATED_LATENCY)
    }
}

#[async_trait]
impl SubmissionTransport for SimulatedTransport {
    async fn submit(&self, fields: FormFields) -> Result<Ack, SubmissionFailed> {
        tokio::time::sleep(self.latency).await;

        let ack = Ack::new();
        tracing::debug!(
            reference = %ack.reference,
            subject = ?fields.subject,
            "simulated contact delivery"
        );

        Ok(ack)
    }
}
