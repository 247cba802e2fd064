use axum::{
    extract::{Form, Multipart, Path, State},
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::IntoResponse,
    routing::{get, patch, post},
    Router,
};
use bytes::Bytes;
use maud::Markup;
use serde::Deserialize;
use ulid::Ulid;

use crate::{
    extractors::{IsHtmx, Locale},
    models::{QuestionField, SubmissionFile},
    names,
    rejections::{AppError, ResultExt},
    utils, views,
    views::rubric as rubric_views,
    AppState,
};

const FORM_GONE: AppError = AppError::NotFound("rubric form not found, reload the page");

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/autograder", get(autograder_page))
        .route("/rubric/{id}/questions", post(add_question))
        .route(
            "/rubric/{id}/questions/{index}",
            axum::routing::delete(remove_question),
        )
        .route(
            "/rubric/{id}/questions/{index}/{field}",
            patch(update_question_field),
        )
        .route("/rubric/{id}/submission", post(select_submission_file))
        .route("/rubric/{id}/submit", post(submit))
        .route("/rubric/{id}/rubric.docx", get(download_rubric))
        .route("/rubric/{id}/export", get(export_response))
}

fn panel(state: &AppState, id: Ulid, locale: &str) -> Result<Markup, AppError> {
    state
        .rubric
        .with_form(id, |form| rubric_views::panel(id, form, locale))
        .ok_or(FORM_GONE)
}

async fn autograder_page(
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    Locale(locale): Locale,
) -> Result<Markup, AppError> {
    let id = state.rubric.open_form();
    let body = state
        .rubric
        .with_form(id, |form| rubric_views::rubric_page(id, form, &locale))
        .ok_or(FORM_GONE)?;

    Ok(views::render(
        is_htmx,
        "Autograder",
        body,
        &locale,
        names::AUTOGRADER_URL,
    ))
}

async fn add_question(
    State(state): State<AppState>,
    Locale(locale): Locale,
    Path(id): Path<Ulid>,
) -> Result<Markup, AppError> {
    state
        .rubric
        .with_form(id, |form| form.add_question())
        .ok_or(FORM_GONE)?;
    panel(&state, id, &locale)
}

async fn remove_question(
    State(state): State<AppState>,
    Locale(locale): Locale,
    Path((id, index)): Path<(Ulid, usize)>,
) -> Result<Markup, AppError> {
    state
        .rubric
        .with_form(id, |form| form.remove_question(index))
        .ok_or(FORM_GONE)?;
    panel(&state, id, &locale)
}

#[derive(Deserialize)]
struct FieldValue {
    #[serde(default)]
    value: String,
}

async fn update_question_field(
    State(state): State<AppState>,
    Locale(locale): Locale,
    Path((id, index, field)): Path<(Ulid, usize, QuestionField)>,
    Form(body): Form<FieldValue>,
) -> Result<Markup, AppError> {
    state
        .rubric
        .with_form(id, |form| {
            form.update_question_field(index, field, &body.value)
                .reject_input("invalid question type")?;
            form.questions()
                .get(index)
                .map(|q| rubric_views::question_card(id, index, q, &locale))
                .ok_or(AppError::NotFound("question not found"))
        })
        .ok_or(FORM_GONE)?
}

async fn select_submission_file(
    State(state): State<AppState>,
    Locale(locale): Locale,
    Path(id): Path<Ulid>,
    mut multipart: Multipart,
) -> Result<Markup, AppError> {
    let mut file = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .reject_input("failed to read multipart field")?
    {
        if field.name() != Some(names::SUBMISSION_PART) {
            continue;
        }
        let file_name = field.file_name().unwrap_or("submission").to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes: Bytes = field.bytes().await.reject_input("failed to read file data")?;
        file = Some(SubmissionFile {
            file_name,
            content_type,
            bytes,
        });
    }

    let file = file.ok_or(AppError::Input("missing submission field"))?;
    tracing::debug!(
        "form {id} selected '{}' ({} bytes)",
        file.file_name,
        file.bytes.len()
    );

    state
        .rubric
        .with_form(id, |form| {
            form.select_submission_file(file);
            rubric_views::submission_status(form, &locale)
        })
        .ok_or(FORM_GONE)
}

async fn submit(
    State(state): State<AppState>,
    Locale(locale): Locale,
    Path(id): Path<Ulid>,
) -> Result<Markup, AppError> {
    let outcome = state.rubric.submit(id).await.ok_or(FORM_GONE)?;
    tracing::info!("form {id} submit finished: {outcome:?}");
    panel(&state, id, &locale)
}

fn docx_download(file_name: &str, bytes: Bytes) -> impl IntoResponse {
    (
        [
            (CONTENT_TYPE, names::DOCX_MEDIA_TYPE.to_string()),
            (CONTENT_DISPOSITION, utils::attachment(file_name)),
        ],
        bytes,
    )
}

async fn download_rubric(
    State(state): State<AppState>,
    Path(id): Path<Ulid>,
) -> Result<impl IntoResponse, AppError> {
    let doc = state
        .rubric
        .with_form(id, |form| form.generated().cloned())
        .ok_or(FORM_GONE)?
        .ok_or(AppError::NotFound("no rubric has been generated yet"))?;

    Ok(docx_download(&doc.file_name, doc.bytes))
}

async fn export_response(
    State(state): State<AppState>,
    Path(id): Path<Ulid>,
) -> Result<impl IntoResponse, AppError> {
    let bytes = state
        .rubric
        .with_form(id, |form| form.export_response_document())
        .ok_or(FORM_GONE)?
        .ok_or(AppError::NotFound("no grading response to export"))?
        .reject("could not build response document")?;

    Ok(docx_download(names::EXPORT_FILE_NAME, bytes))
}
