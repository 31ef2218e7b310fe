//! Route handlers
//!
//! Each handler runs one use case and turns its outcome into a response.

use super::pages::{self, AddFormView, EditFormView};
use super::AppState;
use crate::application::{
    index as resolve_index, random_title, view_entry, AddEntryService, AddOutcome,
    EditEntryService, EditOutcome, EntryView, IndexOutcome,
};
use crate::domain::{AddEntryForm, EditEntryForm, FormErrors};
use crate::error::WikiError;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;

type HandlerResult = Result<Response, WikiError>;

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

fn redirect_to_entry(title: &str) -> Response {
    Redirect::to(&pages::entry_url(title)).into_response()
}

pub async fn index(State(state): State<AppState>, Query(params): Query<SearchParams>) -> HandlerResult {
    match resolve_index(state.store.as_ref(), params.q.as_deref())? {
        IndexOutcome::List { heading, titles } => {
            Ok(Html(pages::index_page(&state.site_name, heading.label(), &titles)).into_response())
        }
        IndexOutcome::ShowEntry(title) => {
            tracing::debug!("Search resolved to entry page for {}", title);
            Ok(redirect_to_entry(&title))
        }
    }
}

pub async fn entry(State(state): State<AppState>, Path(title): Path<String>) -> HandlerResult {
    let html = match view_entry(state.store.as_ref(), &title)? {
        EntryView::Found { title, html } => pages::entry_page(&state.site_name, &title, &html),
        EntryView::Missing { title } => {
            tracing::debug!("No entry stored for {}", title);
            pages::missing_entry_page(&state.site_name, &title)
        }
    };
    Ok(Html(html).into_response())
}

pub async fn add_form(State(state): State<AppState>) -> Html<String> {
    Html(pages::add_page(&state.site_name, AddFormView::default()))
}

fn add_form_response(
    state: &AppState,
    form: &AddEntryForm,
    errors: Option<&FormErrors>,
    error: Option<&str>,
) -> Response {
    Html(pages::add_page(
        &state.site_name,
        AddFormView {
            title: &form.title,
            content: &form.content,
            errors,
            error,
        },
    ))
    .into_response()
}

pub async fn add_submit(
    State(state): State<AppState>,
    Form(form): Form<AddEntryForm>,
) -> HandlerResult {
    let service = AddEntryService::new(state.store.as_ref(), state.max_title_len);

    Ok(match service.execute(&form)? {
        AddOutcome::Created { title, .. } => redirect_to_entry(&title),
        AddOutcome::Invalid(errors) => add_form_response(&state, &form, Some(&errors), None),
        AddOutcome::Collision { title } => {
            let error = format!(
                "Title = {}. Encyclopedia entry already exists for this title.",
                title
            );
            add_form_response(&state, &form, None, Some(&error))
        }
        AddOutcome::StorageFailed { title } => {
            add_form_response(&state, &form, None, Some(&save_failed_message(&title)))
        }
    })
}

fn save_failed_message(title: &str) -> String {
    format!(
        "Title = {}. Something went wrong during the saving of the Encyclopedia entry.",
        title
    )
}

pub async fn edit_form(State(state): State<AppState>, Path(title): Path<String>) -> HandlerResult {
    let form = EditEntryService::new(state.store.as_ref()).load(&title)?;
    Ok(Html(pages::edit_page(
        &state.site_name,
        EditFormView {
            title: &title,
            content: &form.content,
            errors: None,
            error: None,
        },
    ))
    .into_response())
}

fn edit_form_response(
    state: &AppState,
    title: &str,
    form: &EditEntryForm,
    errors: Option<&FormErrors>,
    error: Option<&str>,
) -> Response {
    Html(pages::edit_page(
        &state.site_name,
        EditFormView {
            title,
            content: &form.content,
            errors,
            error,
        },
    ))
    .into_response()
}

pub async fn edit_submit(
    State(state): State<AppState>,
    Path(title): Path<String>,
    Form(form): Form<EditEntryForm>,
) -> Response {
    match EditEntryService::new(state.store.as_ref()).execute(&title, &form) {
        EditOutcome::Saved { .. } => redirect_to_entry(&title),
        EditOutcome::Invalid(errors) => {
            edit_form_response(&state, &title, &form, Some(&errors), None)
        }
        EditOutcome::StorageFailed => {
            let error = save_failed_message(&title);
            edit_form_response(&state, &title, &form, None, Some(&error))
        }
    }
}

pub async fn random(State(state): State<AppState>) -> HandlerResult {
    let picked = {
        let mut rng = rand::thread_rng();
        random_title(state.store.as_ref(), &mut rng)?
    };

    Ok(match picked {
        Some(title) => redirect_to_entry(&title),
        None => {
            tracing::info!("Random entry requested but the wiki is empty");
            Redirect::to("/").into_response()
        }
    })
}

pub async fn not_found(State(state): State<AppState>) -> Response {
    (StatusCode::NOT_FOUND, Html(pages::not_found_page(&state.site_name))).into_response()
}

impl IntoResponse for WikiError {
    fn into_response(self) -> Response {
        tracing::error!("Request failed: {}", self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(pages::server_error_page()),
        )
            .into_response()
    }
}
