use std::str::FromStr;

use axum::{extract::Query, http::StatusCode, response::Response};
use jexla_contact::{ContactSubmission, Field, Notice};
use serde::Deserialize;
use strum::VariantArray;
use time::OffsetDateTime;

use crate::{
    config::SiteConfig,
    content::{self, Metric, Pillar, Promoter, Sector, SocialLink},
    shell::{Section, Shell},
    template::{NotFoundTemplate, Template, filters},
};

/// One rendered input of the contact form.
pub struct FieldView {
    pub name: String,
    pub input_type: &'static str,
    pub placeholder: &'static str,
    pub multiline: bool,
    pub max_length: usize,
    pub value: String,
}

impl FieldView {
    pub fn all(record: &ContactSubmission) -> Vec<Self> {
        Field::VARIANTS
            .iter()
            .map(|field| Self {
                name: field.to_string(),
                input_type: field.input_type(),
                placeholder: field.placeholder(),
                multiline: field.is_multiline(),
                max_length: field.max_length(),
                value: record.get(*field).to_owned(),
            })
            .collect()
    }
}

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub site: &'a SiteConfig,
    pub shell: Shell,
    pub sections: &'static [Section],
    pub expansion: &'static str,
    pub hero: &'static str,
    pub about: &'static str,
    pub sectors_intro: &'static str,
    pub metrics: &'static [Metric],
    pub pillars: &'static [Pillar],
    pub promoters: &'static [Promoter],
    pub sectors: &'static [Sector],
    pub social_links: &'static [SocialLink],
    pub fields: Vec<FieldView>,
    pub notice: Option<Notice>,
    pub year: i32,
}

impl<'a> IndexTemplate<'a> {
    pub fn new(site: &'a SiteConfig, shell: Shell) -> Self {
        Self {
            site,
            shell,
            sections: Section::VARIANTS,
            expansion: content::EXPANSION,
            hero: content::HERO,
            about: content::ABOUT,
            sectors_intro: content::SECTORS_INTRO,
            metrics: &content::METRICS,
            pillars: &content::PILLARS,
            promoters: &content::PROMOTERS,
            sectors: &content::SECTORS,
            social_links: &content::SOCIAL_LINKS,
            fields: FieldView::all(&ContactSubmission::default()),
            notice: None,
            year: OffsetDateTime::now_utc().year(),
        }
    }

    pub fn form(mut self, record: &ContactSubmission, notice: Option<Notice>) -> Self {
        self.fields = FieldView::all(record);
        self.notice = notice;
        self
    }

    fn section_class(&self, anchor: &str) -> &'static str {
        match Section::from_str(anchor) {
            Ok(section) => self.shell.section_class(section),
            Err(_) => "fade-in-section",
        }
    }

    fn scroll_target(&self) -> &'static str {
        self.shell
            .scroll_target()
            .map(|section| section.anchor())
            .unwrap_or_default()
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub menu: Option<String>,
    pub goto: Option<String>,
}

pub async fn page(template: Template, Query(query): Query<PageQuery>) -> Response {
    let mut shell = Shell::new();

    if query.menu.as_deref() == Some("open") {
        shell.open_menu();
    }

    if let Some(anchor) = query.goto.as_deref().filter(|anchor| !anchor.is_empty()) {
        let Ok(section) = Section::from_str(anchor) else {
            return template.render_status(
                StatusCode::NOT_FOUND,
                NotFoundTemplate {
                    site: template.site(),
                },
            );
        };

        shell.navigate(section);
    }

    template.render(IndexTemplate::new(template.site(), shell))
}
