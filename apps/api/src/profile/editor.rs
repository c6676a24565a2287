#![allow(dead_code)]

use chrono::{DateTime, Duration, Utc};
use tracing::info;

use crate::errors::AppError;
use crate::models::user::{ResumeRef, UserProfile};
use crate::profile::patch::{apply_field_change, FieldChange};
use crate::store::ProfileStore;

/// One profile edit in progress: the canonical record as loaded, plus a
/// working shadow copy that accumulates field changes. Nothing is
/// visible to other readers until `save` commits the working copy in one
/// write.
#[derive(Debug)]
pub struct EditSession {
    canonical: UserProfile,
    working: UserProfile,
}

impl EditSession {
    /// Opens an edit session. Only the profile's owner may edit; the
    /// ownership check runs before the store is consulted.
    pub async fn load(
        store: &dyn ProfileStore,
        record_id: &str,
        viewer_id: &str,
    ) -> Result<Self, AppError> {
        if record_id.trim().is_empty() {
            return Err(AppError::InvalidRequest("profile id is required".to_string()));
        }
        if viewer_id != record_id {
            return Err(AppError::NotAuthorized);
        }
        let profile = store
            .get_user(record_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Profile {record_id} not found")))?;

        Ok(Self {
            working: profile.clone(),
            canonical: profile,
        })
    }

    /// Folds one field change into the working copy. No store contact.
    pub fn apply(&mut self, change: FieldChange) {
        self.working = apply_field_change(&self.working, change);
    }

    pub fn working(&self) -> &UserProfile {
        &self.working
    }

    pub fn canonical(&self) -> &UserProfile {
        &self.canonical
    }

    /// Commits the working copy. Tenure entries are normalized and a
    /// staged resume upload becomes a stored document, then the record
    /// gets a fresh `updatedAt` and replaces the stored one. On a write
    /// failure both copies are left untouched so the caller can retry.
    pub async fn save(&mut self, store: &dyn ProfileStore) -> Result<UserProfile, AppError> {
        let mut committed = self.working.clone();
        normalize_tenure(&mut committed);
        committed.resume = match committed.resume.take() {
            Some(ResumeRef::Pending { url, .. }) => Some(ResumeRef::Stored { url }),
            other => other,
        };
        committed.updated_at = next_updated_at(self.canonical.updated_at);

        store
            .update_user(&committed.id, committed.clone())
            .await
            .map_err(|e| AppError::WriteFailed(e.to_string()))?;

        info!("Committed profile {} at {}", committed.id, committed.updated_at);
        self.canonical = committed.clone();
        self.working = committed.clone();
        Ok(committed)
    }

    /// Discards the working copy. Never writes.
    pub fn cancel(self) -> UserProfile {
        self.canonical
    }
}

/// `current` wins over a lingering end date on education and work
/// entries.
fn normalize_tenure(profile: &mut UserProfile) {
    for edu in &mut profile.education {
        if edu.current {
            edu.end_date = None;
        }
    }
    for exp in &mut profile.experience {
        if exp.current {
            exp.end_date = None;
        }
    }
}

/// Commit stamp, strictly greater than the prior one even if the clock
/// has not advanced past it.
fn next_updated_at(prior: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > prior {
        now
    } else {
        prior + Duration::microseconds(1)
    }
}
