pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::recommendation::{Recommendation, RecommendationStatus};
use crate::models::user::UserProfile;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("corrupt record: {0}")]
    Corrupt(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Record store behind the profile workflows. Handlers and the edit
/// session only ever see this trait, so tests inject an in-memory fake.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn get_user(&self, id: &str) -> Result<Option<UserProfile>, StoreError>;

    /// Replaces the stored record wholesale. Last write wins; there is
    /// no version check.
    async fn update_user(&self, id: &str, profile: UserProfile) -> Result<(), StoreError>;

    /// Recommendations about `subject_id` with the given status, oldest
    /// first.
    async fn list_recommendations(
        &self,
        subject_id: &str,
        status: RecommendationStatus,
    ) -> Result<Vec<Recommendation>, StoreError>;
}
