use uuid::Uuid;

use crate::errors::AppError;

/// Inclusive upload ceiling: a payload of exactly 5 MiB is accepted.
pub const MAX_RESUME_BYTES: usize = 5 * 1024 * 1024;

const PDF: &str = "application/pdf";
const DOC: &str = "application/msword";
const DOCX: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

pub const ALLOWED_RESUME_TYPES: &[&str] = &[PDF, DOC, DOCX];

/// Checks a resume payload before it is staged. Size first, then media
/// type, matching the order the upload form reported failures in.
pub fn validate_resume(content_type: &str, size: usize) -> Result<(), AppError> {
    if size > MAX_RESUME_BYTES {
        return Err(AppError::FileTooLarge(size));
    }
    if !ALLOWED_RESUME_TYPES.contains(&content_type) {
        return Err(AppError::UnsupportedFileType(content_type.to_string()));
    }
    Ok(())
}

/// Object key for a staged (not yet committed) resume upload.
pub fn staging_key(user_id: &str, upload_id: Uuid, content_type: &str) -> String {
    let ext = match content_type {
        PDF => "pdf",
        DOC => "doc",
        _ => "docx",
    };
    format!("resumes/{user_id}/{upload_id}.{ext}")
}
