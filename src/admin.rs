//! HTTP handlers for the admin pages.
//!
//! Every handler sits behind [`require_manage_options`]. Failures never
//! reach the client as errors: create failures redirect back to the form
//! with an `error` code, read failures render the empty/not-found state.

use crate::db::Database;
use crate::error::CreateError;
use crate::html::{self, AddPageContext, NONCE_FIELD};
use crate::menu::{admin_path, ADD_SLUG, MENU_SLUG};
use crate::options::{build_source_plugin_options, build_target_language_options, SOURCE_LOCALE};
use crate::security::CurrentUser;
use crate::server::AppState;
use axum::extract::rejection::{FormRejection, QueryRejection};
use axum::extract::{Query, Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;
use tracing::{debug, error, info, warn};

/// Nonce action of the create form.
pub const CREATE_ACTION: &str = "i18nly_create_translation";

/// Submitted create form.
#[derive(Debug, Default, Deserialize)]
pub struct CreateForm {
    #[serde(default)]
    pub source_slug: String,
    #[serde(default)]
    pub target_language: String,
    #[serde(default, rename = "_i18nly_nonce")]
    pub nonce: String,
}

/// A create request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTranslation {
    pub source_slug: String,
    pub target_language: String,
}

impl CreateForm {
    /// Both fields are required and the target must differ from the source locale.
    pub fn validate(&self) -> Result<NewTranslation, CreateError> {
        let source_slug = self.source_slug.trim();
        let target_language = self.target_language.trim();

        if source_slug.is_empty() || target_language.is_empty() || target_language == SOURCE_LOCALE {
            return Err(CreateError::Validation);
        }

        Ok(NewTranslation {
            source_slug: source_slug.to_string(),
            target_language: target_language.to_string(),
        })
    }
}

/// Validate the form and insert the record. Invalid input never reaches the store.
pub async fn create_from_form(db: &Database, form: &CreateForm) -> Result<i64, CreateError> {
    let new = form.validate()?;

    db.create_translation(&new.source_slug, &new.target_language)
        .await
        .map_err(CreateError::InsertFailed)
}

#[derive(Debug, Default, Deserialize)]
pub struct AddPageQuery {
    pub error: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ViewQuery {
    pub translation_id: Option<String>,
}

// ==================== Access Control ====================

/// Renders an empty page unless the request carries the capability the
/// menu registers for the requested page.
pub async fn require_manage_options(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let user = CurrentUser::from_headers(request.headers(), &state.config.admin_token);
    let capability = state.menu.capability_for(request.uri().path());

    if !user.can(capability) {
        debug!("Denied {} {}: missing {}", request.method(), request.uri().path(), capability);
        return Html(String::new()).into_response();
    }

    next.run(request).await
}

// ==================== Pages ====================

pub async fn root() -> Redirect {
    Redirect::to(&admin_path(MENU_SLUG))
}

/// GET listing page
pub async fn list_page(State(state): State<AppState>) -> Html<String> {
    let records = state.db.list_translations().await.unwrap_or_else(|e| {
        error!("Failed to list translations: {}", e);
        Vec::new()
    });

    Html(html::render_list_page(state.strings, &state.menu, &records))
}

/// GET create form. An unreadable query string shows the error notice.
pub async fn add_page(
    State(state): State<AppState>,
    query: Result<Query<AddPageQuery>, QueryRejection>,
) -> Html<String> {
    let show_error = match query {
        Ok(Query(query)) => query.error.is_some_and(|code| !code.is_empty()),
        Err(rejection) => {
            warn!("Unreadable create form query: {}", rejection);
            true
        }
    };

    let plugins = build_source_plugin_options(state.catalog.installed_plugins());
    let locales = build_target_language_options(
        state.catalog.installed_locales(),
        state.catalog.available_translations(),
        SOURCE_LOCALE,
    );
    let nonce = state.nonces.create(CREATE_ACTION);

    let ctx = AddPageContext {
        plugins: &plugins,
        locales: &locales,
        nonce: &nonce,
        show_error,
    };

    Html(html::render_add_page(state.strings, &state.menu, &ctx))
}

/// POST create form. An unreadable body counts as a validation failure.
pub async fn create_translation(
    State(state): State<AppState>,
    form: Result<Form<CreateForm>, FormRejection>,
) -> Response {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            warn!("Unreadable create request: {}", rejection);
            return redirect_with_error(&CreateError::Validation);
        }
    };

    if !state.nonces.verify(&form.nonce, CREATE_ACTION) {
        warn!("Rejected create request: invalid {}", NONCE_FIELD);
        return (StatusCode::FORBIDDEN, Html(state.strings.nonce_expired.to_string())).into_response();
    }

    match create_from_form(&state.db, &form).await {
        Ok(id) => {
            info!(
                "Created translation {}: {} -> {}",
                id,
                form.source_slug.trim(),
                form.target_language.trim()
            );
            Redirect::to(&html::view_url(id)).into_response()
        }
        Err(e) => {
            match &e {
                CreateError::Validation => warn!("Create request failed validation"),
                CreateError::InsertFailed(source) => error!("Failed to create translation: {}", source),
            }
            redirect_with_error(&e)
        }
    }
}

fn redirect_with_error(e: &CreateError) -> Response {
    Redirect::to(&format!("{}?error={}", admin_path(ADD_SLUG), e.code())).into_response()
}

/// GET detail page. An unreadable query string renders not-found.
pub async fn view_page(
    State(state): State<AppState>,
    query: Result<Query<ViewQuery>, QueryRejection>,
) -> Html<String> {
    let id = match query {
        Ok(Query(query)) => parse_translation_id(query.translation_id.as_deref()),
        Err(rejection) => {
            warn!("Unreadable detail query: {}", rejection);
            0
        }
    };

    let record = match state.db.get_translation(id).await {
        Ok(record) => record,
        Err(e) => {
            error!("Failed to read translation {}: {}", id, e);
            None
        }
    };

    Html(html::render_view_page(state.strings, &state.menu, record.as_ref()))
}

/// Missing or malformed ids map to 0, which is never found.
fn parse_translation_id(raw: Option<&str>) -> i64 {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .filter(|id| *id > 0)
        .unwrap_or(0)
}
