use serde::Serialize;

use crate::errors::AppError;
use crate::models::recommendation::{Recommendation, RecommendationStatus};
use crate::models::user::UserProfile;
use crate::store::ProfileStore;

/// Everything the profile page needs in one response. `is_owner` doubles
/// as the edit-entry signal for the client.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub profile: UserProfile,
    pub is_owner: bool,
    pub recommendations: Vec<Recommendation>,
    pub pending_recommendations: Vec<Recommendation>,
}

/// Loads the read view of a profile. Any viewer may load it; ownership
/// only affects contact redaction and the pending-recommendations slice.
pub async fn load_profile_view(
    store: &dyn ProfileStore,
    record_id: &str,
    viewer: Option<&str>,
) -> Result<ProfileView, AppError> {
    if record_id.trim().is_empty() {
        return Err(AppError::InvalidRequest("profile id is required".to_string()));
    }
    let mut profile = store
        .get_user(record_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Profile {record_id} not found")))?;

    let is_owner = viewer == Some(record_id);
    if !is_owner {
        redact_contact(&mut profile);
    }

    let recommendations = store
        .list_recommendations(record_id, RecommendationStatus::Approved)
        .await?;
    let pending_recommendations = if is_owner {
        store
            .list_recommendations(record_id, RecommendationStatus::Pending)
            .await?
    } else {
        Vec::new()
    };

    Ok(ProfileView {
        profile,
        is_owner,
        recommendations,
        pending_recommendations,
    })
}

/// Contact fields are private unless their visibility flag was toggled
/// on by the owner.
fn redact_contact(profile: &mut UserProfile) {
    if !profile.show_email {
        profile.email = None;
    }
    if !profile.show_phone {
        profile.phone_number = None;
    }
    if !profile.show_location {
        profile.location = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::Availability;
    use crate::store::memory::MemoryStore;
    use chrono::Utc;
    use std::collections::HashSet;
    use uuid::Uuid;

    fn profile_with_contact(id: &str) -> UserProfile {
        UserProfile {
            id: id.to_string(),
            name: "Ann".to_string(),
            title: "Eng".to_string(),
            bio: String::new(),
            current_company: String::new(),
            avatar: None,
            email: Some("ann@example.com".to_string()),
            phone_number: Some("(555) 000-1111".to_string()),
            location: Some("Berlin".to_string()),
            linkedin: None,
            show_email: true,
            show_phone: false,
            show_location: false,
            education: Vec::new(),
            experience: Vec::new(),
            skills: Vec::new(),
            additional_sections: Vec::new(),
            availability: Availability::default(),
            resume: None,
            updated_at: Utc::now(),
        }
    }

    fn recommendation(subject: &str, status: RecommendationStatus, body: &str) -> Recommendation {
        Recommendation {
            id: Uuid::new_v4(),
            author_id: "someone".to_string(),
            subject_id: subject.to_string(),
            status,
            body: body.to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn blank_id_is_invalid() {
        let store = MemoryStore::new();
        let err = load_profile_view(&store, " ", None).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn missing_record_is_not_found() {
        let store = MemoryStore::new();
        let err = load_profile_view(&store, "ghost", Some("ghost"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn anyone_may_load_the_read_view() {
        let store = MemoryStore::new();
        store.insert_user(profile_with_contact("u1"));

        let view = load_profile_view(&store, "u1", Some("u2")).await.unwrap();
        assert!(!view.is_owner);
        assert_eq!(view.profile.name, "Ann");
    }

    #[tokio::test]
    async fn owner_flag_follows_viewer_identity() {
        let store = MemoryStore::new();
        store.insert_user(profile_with_contact("u1"));

        assert!(load_profile_view(&store, "u1", Some("u1")).await.unwrap().is_owner);
        assert!(!load_profile_view(&store, "u1", Some("u2")).await.unwrap().is_owner);
        assert!(!load_profile_view(&store, "u1", None).await.unwrap().is_owner);
    }

    #[tokio::test]
    async fn hidden_contact_fields_are_redacted_for_non_owners() {
        let store = MemoryStore::new();
        store.insert_user(profile_with_contact("u1"));

        let view = load_profile_view(&store, "u1", Some("u2")).await.unwrap();
        // showEmail is on, the others default off.
        assert_eq!(view.profile.email.as_deref(), Some("ann@example.com"));
        assert!(view.profile.phone_number.is_none());
        assert!(view.profile.location.is_none());
    }

    #[tokio::test]
    async fn owner_sees_all_contact_fields() {
        let store = MemoryStore::new();
        store.insert_user(profile_with_contact("u1"));

        let view = load_profile_view(&store, "u1", Some("u1")).await.unwrap();
        assert!(view.profile.email.is_some());
        assert!(view.profile.phone_number.is_some());
        assert!(view.profile.location.is_some());
    }

    #[tokio::test]
    async fn recommendation_slices_are_disjoint_and_cover_the_full_set() {
        let store = MemoryStore::new();
        store.insert_user(profile_with_contact("u1"));
        store.insert_recommendation(recommendation(
            "u1",
            RecommendationStatus::Approved,
            "first",
        ));
        store.insert_recommendation(recommendation(
            "u1",
            RecommendationStatus::Approved,
            "second",
        ));
        store.insert_recommendation(recommendation(
            "u1",
            RecommendationStatus::Pending,
            "third",
        ));
        // Another subject's recommendation must never leak in.
        store.insert_recommendation(recommendation(
            "u2",
            RecommendationStatus::Approved,
            "other subject",
        ));

        let view = load_profile_view(&store, "u1", Some("u1")).await.unwrap();
        assert_eq!(view.recommendations.len(), 2);
        assert_eq!(view.pending_recommendations.len(), 1);

        let approved: HashSet<_> = view.recommendations.iter().map(|r| r.id).collect();
        let pending: HashSet<_> = view.pending_recommendations.iter().map(|r| r.id).collect();
        assert!(approved.is_disjoint(&pending));
        assert_eq!(approved.len() + pending.len(), 3);
    }

    #[tokio::test]
    async fn pending_slice_is_owner_only() {
        let store = MemoryStore::new();
        store.insert_user(profile_with_contact("u1"));
        store.insert_recommendation(recommendation(
            "u1",
            RecommendationStatus::Pending,
            "awaiting approval",
        ));

        let view = load_profile_view(&store, "u1", Some("u2")).await.unwrap();
        assert!(view.pending_recommendations.is_empty());
    }
}
