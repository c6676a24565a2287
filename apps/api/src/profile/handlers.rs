use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use aws_sdk_s3::primitives::ByteStream;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::auth::Viewer;
use crate::errors::AppError;
use crate::models::user::{ResumeRef, UserProfile};
use crate::profile::editor::EditSession;
use crate::profile::patch::FieldChange;
use crate::profile::upload::{staging_key, validate_resume, MAX_RESUME_BYTES};
use crate::profile::viewer::{load_profile_view, ProfileView};
use crate::state::AppState;

/// Request body cap for the upload route: the resume limit plus
/// multipart envelope overhead.
pub const MAX_UPLOAD_BODY_BYTES: usize = MAX_RESUME_BYTES + 64 * 1024;

/// Edit form sections in display order; the sidebar renders and scrolls
/// between these.
const FORM_SECTIONS: &[(&str, &str)] = &[
    ("profile-information", "Profile Information"),
    ("contact-information", "Contact Information"),
    ("resume", "Resume"),
    ("education", "Education"),
    ("work-experience", "Work Experience"),
    ("skills", "Skills"),
    ("additional-sections", "Additional Sections"),
];

#[derive(Debug, Serialize)]
pub struct FormSection {
    pub id: &'static str,
    pub label: &'static str,
}

pub fn form_sections() -> Vec<FormSection> {
    FORM_SECTIONS
        .iter()
        .map(|&(id, label)| FormSection { id, label })
        .collect()
}

#[derive(Debug, Serialize)]
pub struct EditFormResponse {
    pub profile: UserProfile,
    pub sections: Vec<FormSection>,
}

/// The ordered field changes a form session accumulated before hitting
/// save.
#[derive(Debug, Deserialize)]
pub struct SaveProfileRequest {
    pub changes: Vec<FieldChange>,
}

/// GET /api/v1/profiles/:id
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Viewer(viewer): Viewer,
) -> Result<Json<ProfileView>, AppError> {
    let view = load_profile_view(state.store.as_ref(), &id, viewer.as_deref()).await?;
    Ok(Json(view))
}

/// GET /api/v1/profiles/:id/edit
pub async fn handle_edit_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Viewer(viewer): Viewer,
) -> Result<Json<EditFormResponse>, AppError> {
    let viewer = viewer.ok_or(AppError::NotAuthorized)?;
    let session = EditSession::load(state.store.as_ref(), &id, &viewer).await?;
    Ok(Json(EditFormResponse {
        profile: session.working().clone(),
        sections: form_sections(),
    }))
}

/// PUT /api/v1/profiles/:id
pub async fn handle_save_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Viewer(viewer): Viewer,
    Json(req): Json<SaveProfileRequest>,
) -> Result<Json<UserProfile>, AppError> {
    let viewer = viewer.ok_or(AppError::NotAuthorized)?;
    let mut session = EditSession::load(state.store.as_ref(), &id, &viewer).await?;
    for change in req.changes {
        session.apply(change);
    }
    let committed = session.save(state.store.as_ref()).await?;
    Ok(Json(committed))
}

/// POST /api/v1/profiles/:id/resume
///
/// Stages a resume document and returns a pending reference. The client
/// folds it into the working copy as an ordinary `resume` field change;
/// nothing touches the profile record here.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Viewer(viewer): Viewer,
    mut multipart: Multipart,
) -> Result<Json<ResumeRef>, AppError> {
    let viewer = viewer.ok_or(AppError::NotAuthorized)?;
    if viewer != id {
        return Err(AppError::NotAuthorized);
    }
    state
        .store
        .get_user(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Profile {id} not found")))?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidRequest(format!("malformed multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let content_type = field.content_type().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::InvalidRequest(format!("unreadable file field: {e}")))?;
        validate_resume(&content_type, data.len())?;

        let upload_id = Uuid::new_v4();
        let key = staging_key(&id, upload_id, &content_type);
        state
            .s3
            .put_object()
            .bucket(&state.config.s3_bucket)
            .key(&key)
            .body(ByteStream::from(data))
            .content_type(&content_type)
            .send()
            .await
            .map_err(|e| AppError::S3(format!("resume staging failed: {e}")))?;

        info!("Staged resume s3://{}/{key} for user {id}", state.config.s3_bucket);
        return Ok(Json(ResumeRef::Pending {
            upload_id,
            url: format!("s3://{}/{key}", state.config.s3_bucket),
        }));
    }

    Err(AppError::InvalidRequest("missing 'file' field".to_string()))
}
