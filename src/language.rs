use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Query},
    http::{header::ACCEPT_LANGUAGE, request::Parts},
};
use serde::Deserialize;

pub const SUPPORTED_LANGUAGES: &[&str] = &["pt", "en"];

pub fn is_supported(lang: &str) -> bool {
    SUPPORTED_LANGUAGES.contains(&lang)
}

/// Languages requested by the visitor, most preferred first.
///
/// A `?lang=` query parameter wins over the `Accept-Language` header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserLanguage(Vec<String>);

impl UserLanguage {
    pub fn from_header(value: &str) -> Self {
        let mut ranges = value
            .split(',')
            .filter_map(|range| {
                let mut parts = range.trim().split(';');
                let tag = parts.next()?.trim();
                if tag.is_empty() || tag == "*" {
                    return None;
                }

                let quality = parts
                    .find_map(|p| p.trim().strip_prefix("q="))
                    .and_then(|q| q.parse::<f32>().ok())
                    .unwrap_or(1.0);

                (quality > 0.0).then(|| (tag.to_lowercase(), quality))
            })
            .collect::<Vec<_>>();

        ranges.sort_by(|a, b| b.1.total_cmp(&a.1));

        Self(ranges.into_iter().map(|(tag, _)| tag).collect())
    }

    /// First supported language by primary subtag, `default` otherwise.
    pub fn negotiate(&self, default: &str) -> String {
        self.0
            .iter()
            .map(|tag| tag.split_once('-').map_or(tag.as_str(), |(primary, _)| primary))
            .find(|primary| is_supported(primary))
            .unwrap_or(default)
            .to_owned()
    }
}

#[derive(Deserialize)]
struct LangQuery {
    lang: Option<String>,
}

impl<S: Send + Sync> FromRequestParts<S> for UserLanguage {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let mut languages = parts
            .headers
            .get(ACCEPT_LANGUAGE)
            .and_then(|v| v.to_str().ok())
            .map(Self::from_header)
            .unwrap_or_default();

        if let Ok(Query(LangQuery { lang: Some(lang) })) =
            Query::<LangQuery>::from_request_parts(parts, state).await
        {
            languages.0.insert(0, lang.to_lowercase());
        }

        Ok(languages)
    }
}
