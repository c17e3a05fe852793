//! Axum route handlers for the session flow. Each handler resolves the
//! session, applies exactly one controller action, and renders the updated
//! state view.

use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::analysis::catalog::AnalysisOption;
use crate::errors::AppError;
use crate::extract::extract_resume_text;
use crate::session::{Session, Step};
use crate::state::AppState;

/// Download filename offered for the analysis text.
pub const DOWNLOAD_FILENAME: &str = "jobfit_analysis.txt";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct JobDescriptionRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct SelectOptionRequest {
    pub option: AnalysisOption,
    pub custom_query: Option<String>,
}

/// Read-only projection of a session, safe to serialize (the audio artifact
/// itself stays server-side; clients fetch it from the audio endpoint).
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub session_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub step: Step,
    pub step_number: u8,
    pub resume_loaded: bool,
    pub job_description: String,
    pub analysis_option: Option<AnalysisOption>,
    pub custom_query: String,
    pub analysis_result: Option<String>,
    pub audio_available: bool,
    /// Derived from the `match_ats` result text, when it declares a verdict.
    pub ats_friendly: Option<bool>,
}

impl SessionView {
    pub fn from_session(session: &Session) -> Self {
        let state = &session.state;
        Self {
            session_id: session.id,
            created_at: session.created_at,
            step: state.step,
            step_number: state.step.number(),
            resume_loaded: state.resume_text.is_some(),
            job_description: state.job_description.clone(),
            analysis_option: state.analysis_option,
            custom_query: state.custom_query.clone(),
            analysis_result: state.analysis_result.clone(),
            audio_available: state.audio.is_some(),
            ats_friendly: ats_friendliness(state.analysis_option, state.analysis_result.as_deref()),
        }
    }
}

/// The ATS check prompt instructs the model to state "ATS-Friendly: Yes" or
/// "ATS-Friendly: No"; surface that verdict when present.
fn ats_friendliness(option: Option<AnalysisOption>, result: Option<&str>) -> Option<bool> {
    if option != Some(AnalysisOption::MatchAts) {
        return None;
    }
    let text = result?;
    if text.contains("ATS-Friendly: Yes") {
        Some(true)
    } else if text.contains("ATS-Friendly: No") {
        Some(false)
    } else {
        None
    }
}

async fn resolve_session(state: &AppState, id: Uuid) -> Result<Arc<Mutex<Session>>, AppError> {
    state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions
///
/// Creates a fresh session at the upload step.
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionView>) {
    let session = state.sessions.create().await;
    let session = session.lock().await;
    (StatusCode::CREATED, Json(SessionView::from_session(&session)))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let session = resolve_session(&state, id).await?;
    let session = session.lock().await;
    Ok(Json(SessionView::from_session(&session)))
}

/// POST /api/v1/sessions/:id/resume
///
/// Multipart PDF upload. Extraction failure leaves the session's resume text
/// unset; the user re-uploads.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<SessionView>, AppError> {
    let session = resolve_session(&state, id).await?;

    let mut data: Option<Bytes> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart upload: {e}")))?
    {
        if field.name() == Some("resume") || field.file_name().is_some() {
            data = Some(
                field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?,
            );
            break;
        }
    }
    let data =
        data.ok_or_else(|| AppError::Validation("A 'resume' file field is required.".to_string()))?;

    let text = extract_resume_text(&data)?;

    let mut session = session.lock().await;
    session.set_resume_text(text);
    Ok(Json(SessionView::from_session(&session)))
}

/// PUT /api/v1/sessions/:id/job-description
pub async fn handle_set_job_description(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<JobDescriptionRequest>,
) -> Result<Json<SessionView>, AppError> {
    let session = resolve_session(&state, id).await?;
    let mut session = session.lock().await;
    session.set_job_description(request.text);
    Ok(Json(SessionView::from_session(&session)))
}

/// POST /api/v1/sessions/:id/continue
pub async fn handle_continue(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let session = resolve_session(&state, id).await?;
    let mut session = session.lock().await;
    session.continue_to_options()?;
    Ok(Json(SessionView::from_session(&session)))
}

/// POST /api/v1/sessions/:id/option
pub async fn handle_select_option(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SelectOptionRequest>,
) -> Result<Json<SessionView>, AppError> {
    let session = resolve_session(&state, id).await?;
    let mut session = session.lock().await;
    session.select_option(request.option, request.custom_query);
    Ok(Json(SessionView::from_session(&session)))
}

/// POST /api/v1/sessions/:id/analyze
///
/// The options→results transition. The session lock is held for the duration
/// of the model call, so a session processes one action at a time.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let session = resolve_session(&state, id).await?;
    let mut session = session.lock().await;
    session
        .run_analysis(state.llm.as_ref(), state.tts.as_ref())
        .await?;
    Ok(Json(SessionView::from_session(&session)))
}

/// POST /api/v1/sessions/:id/back
pub async fn handle_back(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let session = resolve_session(&state, id).await?;
    let mut session = session.lock().await;
    session.back()?;
    Ok(Json(SessionView::from_session(&session)))
}

/// POST /api/v1/sessions/:id/restart
///
/// "Start New Analysis": keeps the uploaded documents, clears everything else.
pub async fn handle_restart(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let session = resolve_session(&state, id).await?;
    let mut session = session.lock().await;
    session.start_new_analysis()?;
    Ok(Json(SessionView::from_session(&session)))
}

/// GET /api/v1/sessions/:id/download
///
/// The analysis text as a `text/plain` attachment, byte-identical to the
/// stored result.
pub async fn handle_download(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    let session = resolve_session(&state, id).await?;
    let session = session.lock().await;
    let result = session
        .state
        .analysis_result
        .clone()
        .ok_or_else(|| AppError::NotFound("No analysis results found.".to_string()))?;

    let headers = [
        (header::CONTENT_TYPE, "text/plain".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{DOWNLOAD_FILENAME}\""),
        ),
    ];
    Ok((headers, result).into_response())
}

/// GET /api/v1/sessions/:id/audio
pub async fn handle_audio(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    let session = resolve_session(&state, id).await?;
    let session = session.lock().await;
    let artifact = session
        .state
        .audio
        .as_ref()
        .ok_or_else(|| AppError::NotFound("No audio clip for this session.".to_string()))?;

    let bytes = tokio::fs::read(artifact.path())
        .await
        .map_err(|e| AppError::Internal(e.into()))?;

    Ok(([(header::CONTENT_TYPE, "audio/mpeg")], bytes).into_response())
}

/// DELETE /api/v1/sessions/:id
///
/// Session teardown. Releases any held audio artifact eagerly.
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let removed = state
        .sessions
        .remove(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;

    let mut session = removed.lock().await;
    if let Some(audio) = session.state.audio.take() {
        audio.release();
    }
    Ok(StatusCode::NO_CONTENT)
}
