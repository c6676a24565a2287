use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::models::recommendation::{Recommendation, RecommendationStatus};
use crate::models::user::UserProfile;
use crate::store::{ProfileStore, StoreError};

/// PostgreSQL-backed record store. Each profile is one row holding the
/// whole record as a JSONB document; the `updated_at` column mirrors the
/// document's stamp for indexing.
pub struct PgProfileStore {
    pool: PgPool,
}

impl PgProfileStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct RecommendationRow {
    id: Uuid,
    author_id: String,
    subject_id: String,
    status: String,
    body: String,
    created_at: DateTime<Utc>,
}

impl RecommendationRow {
    fn into_record(self) -> Result<Recommendation, StoreError> {
        let status = match self.status.as_str() {
            "pending" => RecommendationStatus::Pending,
            "approved" => RecommendationStatus::Approved,
            other => {
                return Err(StoreError::Corrupt(format!(
                    "recommendation {} has unknown status '{other}'",
                    self.id
                )))
            }
        };
        Ok(Recommendation {
            id: self.id,
            author_id: self.author_id,
            subject_id: self.subject_id,
            status,
            body: self.body,
            created_at: self.created_at,
        })
    }
}

#[async_trait]
impl ProfileStore for PgProfileStore {
    async fn get_user(&self, id: &str) -> Result<Option<UserProfile>, StoreError> {
        let doc: Option<serde_json::Value> =
            sqlx::query_scalar("SELECT profile FROM profiles WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        doc.map(|d| {
            serde_json::from_value(d)
                .map_err(|e| StoreError::Corrupt(format!("profile {id}: {e}")))
        })
        .transpose()
    }

    async fn update_user(&self, id: &str, profile: UserProfile) -> Result<(), StoreError> {
        let updated_at = profile.updated_at;
        let doc = serde_json::to_value(&profile)
            .map_err(|e| StoreError::Corrupt(format!("profile {id}: {e}")))?;

        sqlx::query(
            r#"
            INSERT INTO profiles (id, profile, updated_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (id) DO UPDATE
                SET profile = EXCLUDED.profile, updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(id)
        .bind(doc)
        .bind(updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_recommendations(
        &self,
        subject_id: &str,
        status: RecommendationStatus,
    ) -> Result<Vec<Recommendation>, StoreError> {
        let rows: Vec<RecommendationRow> = sqlx::query_as(
            r#"
            SELECT id, author_id, subject_id, status, body, created_at
            FROM recommendations
            WHERE subject_id = $1 AND status = $2
            ORDER BY created_at ASC
            "#,
        )
        .bind(subject_id)
        .bind(status.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(RecommendationRow::into_record).collect()
    }
}
