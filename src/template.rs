use axum::{
    RequestPartsExt,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use std::{collections::HashMap, convert::Infallible};
use time::OffsetDateTime;

use crate::{
    config::{Config, ContactConfig, SiteConfig},
    language::UserLanguage,
};

pub(crate) mod filters {
    #[askama::filter_fn]
    pub fn t(value: &str, values: &dyn askama::Values) -> askama::Result<String> {
        let lang = askama::get_value::<String>(values, "lang")?;

        Ok(rust_i18n::t!(value, locale = lang).to_string())
    }
}

/// Layout data shared by every full page.
pub struct Page<'a> {
    pub lang: &'a str,
    pub current: &'static str,
    pub site: &'a SiteConfig,
    pub contact: &'a ContactConfig,
    pub year: i32,
}

pub struct Template {
    pub lang: String,
    config: Config,
}

impl Template {
    pub fn new(lang: impl Into<String>, config: Config) -> Self {
        Self {
            lang: lang.into(),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn t(&self, key: &str) -> String {
        rust_i18n::t!(key, locale = &self.lang).to_string()
    }

    pub fn page(&self, current: &'static str) -> Page<'_> {
        Page {
            lang: &self.lang,
            current,
            site: &self.config.site,
            contact: &self.config.contact,
            year: OffsetDateTime::now_utc().year(),
        }
    }

    fn render_with_values<T: askama::Template>(
        &self,
        template: T,
    ) -> Result<String, askama::Error> {
        let mut values: HashMap<&str, Box<dyn std::any::Any>> = HashMap::new();
        values.insert("lang", Box::new(self.lang.to_owned()));

        template.render_with_values(&values)
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        match self.render_with_values(template) {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!("{err}");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to render template. Error: {err}"),
                )
                    .into_response()
            }
        }
    }

    pub fn render_with_status<T: askama::Template>(
        &self,
        status: StatusCode,
        template: T,
    ) -> Response {
        let mut response = self.render(template);
        if response.status().is_success() {
            *response.status_mut() = status;
        }

        response
    }
}

impl FromRequestParts<crate::routes::AppState> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &crate::routes::AppState,
    ) -> Result<Self, Self::Rejection> {
        let Ok(user_language) = parts.extract::<UserLanguage>().await;
        let lang = user_language.negotiate(&state.config.site.default_language);

        Ok(Template::new(lang, state.config.clone()))
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate<'a> {
    pub page: Page<'a>,
}

#[derive(askama::Template)]
#[template(path = "partials/toast-error.html")]
pub struct ToastErrorTemplate<'a> {
    pub message: &'a str,
    pub description: Option<&'a str>,
}

/// Renders a domain error as an error toast.
pub fn error_response(template: &Template, err: vitrine_shared::Error) -> Response {
    use vitrine_shared::Error;

    let (status, message, description) = match &err {
        Error::Validate(_) => {
            let fields = err
                .invalid_fields()
                .iter()
                .map(|field| template.t(&format!("contact.form.{field}")))
                .collect::<Vec<_>>()
                .join(", ");

            (
                StatusCode::UNPROCESSABLE_ENTITY,
                template.t("contact.status.invalid"),
                Some(fields),
            )
        }
        Error::InvalidSubject(_) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            template.t("contact.status.invalid_subject"),
            None,
        ),
        Error::Busy => (StatusCode::CONFLICT, template.t("contact.status.busy"), None),
    };

    template.render_with_status(
        status,
        ToastErrorTemplate {
            message: &message,
            description: description.as_deref(),
        },
    )
}

#[macro_export]
macro_rules! try_response {
    // Result<T, E> where E: Into<vitrine_shared::Error>
    ($result:expr, $template:expr) => {
        match $result {
            Ok(r) => r,
            Err(err) => {
                return $crate::template::error_response(&$template, err.into());
            }
        }
    };
}
