use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use strum::VariantArray;
use validator::Validate;
use vitrine_contact::{
    EMAIL_MAX_LEN, Field, MESSAGE_MAX_LEN, NAME_MAX_LEN, PHONE_MAX_LEN, Subject, SubmissionStatus,
};

use crate::{
    routes::AppState,
    template::{Page, Template, filters},
};

const FAQ: [&str; 5] = ["timeline", "pricing", "maintenance", "hosting", "remote"];

pub struct SubjectOption {
    pub value: &'static str,
    pub label: String,
}

pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(askama::Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate<'a> {
    pub page: Page<'a>,
    pub subjects: Vec<SubjectOption>,
    pub faq: Vec<Faq>,
    pub whatsapp_link: String,
    pub name_max_len: usize,
    pub email_max_len: usize,
    pub phone_max_len: usize,
    pub message_max_len: usize,
}

pub async fn page(template: Template) -> impl IntoResponse {
    let subjects = Subject::VARIANTS
        .iter()
        .map(|subject| SubjectOption {
            value: subject.as_ref(),
            label: template.t(&format!("subject.{subject}")),
        })
        .collect();

    let faq = FAQ
        .into_iter()
        .map(|key| Faq {
            question: template.t(&format!("contact.faq.{key}.question")),
            answer: template.t(&format!("contact.faq.{key}.answer")),
        })
        .collect();

    let whatsapp_link = whatsapp_link(&template);

    template.render(ContactTemplate {
        page: template.page("contact"),
        subjects,
        faq,
        whatsapp_link,
        name_max_len: NAME_MAX_LEN,
        email_max_len: EMAIL_MAX_LEN,
        phone_max_len: PHONE_MAX_LEN,
        message_max_len: MESSAGE_MAX_LEN,
    })
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct ActionInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ActionInput {
    fn entries(&self) -> [(Field, &str); 5] {
        [
            (Field::Name, self.name.as_str()),
            (Field::Email, self.email.as_str()),
            (Field::Phone, self.phone.as_str()),
            (Field::Subject, self.subject.as_str()),
            (Field::Message, self.message.as_str()),
        ]
    }
}

#[derive(askama::Template)]
#[template(path = "partials/contact-status.html")]
pub struct ContactStatusTemplate<'a> {
    pub status: SubmissionStatus,
    pub reset_after_ms: u64,
    pub email: &'a str,
    pub mailto_link: String,
    pub whatsapp_link: String,
}

impl ContactStatusTemplate<'_> {
    pub fn is_success(&self) -> bool {
        self.status == SubmissionStatus::Success
    }
}

pub async fn action(
    template: Template,
    State(app_state): State<AppState>,
    Form(input): Form<ActionInput>,
) -> Response {
    let mut form = app_state.contact_form();

    for (field, value) in input.entries() {
        crate::try_response!(form.update_field(field, value), template);
    }

    crate::try_response!(form.fields().validate(), template);
    crate::try_response!(form.submit(), template);

    let status = form.settled().await;
    let http_status = match status {
        SubmissionStatus::Success => StatusCode::OK,
        SubmissionStatus::Error | SubmissionStatus::Idle => StatusCode::BAD_GATEWAY,
    };

    let contact = &template.config().contact;

    template.render_with_status(
        http_status,
        ContactStatusTemplate {
            status,
            reset_after_ms: contact.status_reset_ms,
            email: &contact.email,
            mailto_link: contact.mailto_link(),
            whatsapp_link: whatsapp_link(&template),
        },
    )
}

fn whatsapp_link(template: &Template) -> String {
    template
        .config()
        .contact
        .whatsapp_link(&template.t("contact.whatsapp_greeting"))
}
