use std::sync::Arc;

use axum::{Router, response::IntoResponse, routing::get};
use vitrine_contact::{ContactForm, ContactFormConfig, SimulatedTransport, SubmissionTransport};

use crate::template::{NotFoundTemplate, Template};

mod about;
mod contact;
mod health;
mod index;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub transport: Arc<dyn SubmissionTransport>,
}

impl AppState {
    /// State backed by the simulated transport.
    pub fn new(config: crate::config::Config) -> Self {
        let transport = SimulatedTransport::new(config.contact.simulated_latency());

        Self::with_transport(config, Arc::new(transport))
    }

    pub fn with_transport(
        config: crate::config::Config,
        transport: Arc<dyn SubmissionTransport>,
    ) -> Self {
        Self { config, transport }
    }

    /// Fresh controller for one form instance.
    pub fn contact_form(&self) -> ContactForm {
        ContactForm::new(
            Arc::clone(&self.transport),
            ContactFormConfig {
                status_reset: self.config.contact.status_reset(),
            },
        )
    }
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    template.render_with_status(
        axum::http::StatusCode::NOT_FOUND,
        NotFoundTemplate {
            page: template.page(""),
        },
    )
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/", get(index::page))
        .route("/about", get(about::page))
        .route("/contact", get(contact::page).post(contact::action))
        .fallback(fallback)
        .nest_service("/static", crate::assets::AssetsService::new())
        .with_state(app_state)
}
