use axum::{
    extract::{Form, State},
    http::HeaderMap,
    response::Response,
};
use jexla_contact::{ContactForm, Notice};

use crate::{
    routes::{AppState, index::IndexTemplate},
    shell::{Section, Shell},
    template::{Template, ToastErrorTemplate, ToastSuccessTemplate},
};

/// Set by `app.js` when it wants only the notification back.
pub const FRAGMENT_HEADER: &str = "x-requested-with";

/// POST /contact
///
/// Each request gets its own form, filled from the posted inputs in order.
/// Inputs the form does not know are ignored.
pub async fn action(
    template: Template,
    State(app_state): State<AppState>,
    headers: HeaderMap,
    Form(inputs): Form<Vec<(String, String)>>,
) -> Response {
    let form = ContactForm::new().with_timeout(app_state.config.api.timeout());

    for (name, value) in inputs {
        if let Err(err) = form.update(&name, value) {
            tracing::debug!("{err}");
        }
    }

    let outcome = form.submit(app_state.contact_client.as_ref()).await;
    let notice = outcome.notice().unwrap_or(Notice::Failure);

    if headers.contains_key(FRAGMENT_HEADER) {
        return match notice {
            Notice::Success => template.render(ToastSuccessTemplate {
                message: notice.message(),
            }),
            Notice::Failure | Notice::Invalid => template.render(ToastErrorTemplate {
                message: notice.message(),
            }),
        };
    }

    let mut shell = Shell::new();
    shell.navigate(Section::Contact);

    template.render(
        IndexTemplate::new(template.site(), shell).form(&form.snapshot(), Some(notice)),
    )
}
