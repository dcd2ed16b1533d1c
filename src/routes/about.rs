use axum::response::IntoResponse;

use crate::template::{Page, Template, filters};

const STATS: [(&str, &str); 4] = [
    ("150+", "projects"),
    ("8", "years"),
    ("98%", "satisfaction"),
    ("24h", "response"),
];

const VALUES: [(&str, &str); 4] = [
    ("sparkles", "quality"),
    ("eye", "transparency"),
    ("handshake", "partnership"),
    ("chart", "results"),
];

const STEPS: [(&str, &str); 4] = [
    ("01", "discovery"),
    ("02", "design"),
    ("03", "build"),
    ("04", "launch"),
];

pub struct Stat {
    pub value: &'static str,
    pub label: String,
}

pub struct Card {
    pub icon: &'static str,
    pub title: String,
    pub body: String,
}

#[derive(askama::Template)]
#[template(path = "about.html")]
pub struct AboutTemplate<'a> {
    pub page: Page<'a>,
    pub stats: Vec<Stat>,
    pub values: Vec<Card>,
    pub steps: Vec<Card>,
}

pub async fn page(template: Template) -> impl IntoResponse {
    let stats = STATS
        .into_iter()
        .map(|(value, key)| Stat {
            value,
            label: template.t(&format!("about.stats.{key}")),
        })
        .collect();

    let values = VALUES
        .into_iter()
        .map(|(icon, key)| Card {
            icon,
            title: template.t(&format!("about.values.{key}.title")),
            body: template.t(&format!("about.values.{key}.body")),
        })
        .collect();

    let steps = STEPS
        .into_iter()
        .map(|(icon, key)| Card {
            icon,
            title: template.t(&format!("about.process.{key}.title")),
            body: template.t(&format!("about.process.{key}.body")),
        })
        .collect();

    template.render(AboutTemplate {
        page: template.page("about"),
        stats,
        values,
        steps,
    })
}
