#![allow(dead_code)]

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use vitrine_contact::{
    Ack, ContactForm, ContactFormConfig, Field, FormFields, SubmissionFailed, SubmissionTransport,
};

pub const LATENCY: Duration = Duration::from_millis(1500);
pub const RESET: Duration = Duration::from_secs(5);
pub const MARGIN: Duration = Duration::from_millis(100);

/// Transport with scripted latency and outcome that records what it delivered.
#[derive(Clone, Default)]
pub struct FakeTransport {
    pub latency: Duration,
    pub fail: bool,
    pub delivered: Arc<Mutex<Vec<FormFields>>>,
}

impl FakeTransport {
    pub fn succeeding() -> Self {
        Self {
            latency: LATENCY,
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            latency: LATENCY,
            fail: true,
            ..Default::default()
        }
    }

    pub fn delivered(&self) -> Vec<FormFields> {
        self.delivered.lock().unwrap().clone()
    }
}

#[async_trait]
impl SubmissionTransport for FakeTransport {
    async fn submit(&self, fields: FormFields) -> Result<Ack, SubmissionFailed> {
        tokio::time::sleep(self.latency).await;

        if self.fail {
            return Err(SubmissionFailed::msg("relay unavailable"));
        }

        self.delivered.lock().unwrap().push(fields);

        Ok(Ack::new())
    }
}

pub fn form(transport: &FakeTransport) -> ContactForm {
    ContactForm::new(
        Arc::new(transport.clone()),
        ContactFormConfig {
            status_reset: RESET,
        },
    )
}

pub fn fill_ana(form: &mut ContactForm) -> anyhow::Result<()> {
    form.update_field(Field::Name, "Ana")?;
    form.update_field(Field::Email, "ana@example.com")?;
    form.update_field(Field::Phone, "")?;
    form.update_field(Field::Subject, "website")?;
    form.update_field(Field::Message, "Preciso de um site.")?;

    Ok(())
}
