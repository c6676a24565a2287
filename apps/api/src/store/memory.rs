use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::models::recommendation::{Recommendation, RecommendationStatus};
use crate::models::user::{
    Availability, AvailabilityStatus, Education, Skill, SkillKind, UserProfile, WorkExperience,
    WorkStyle,
};
use crate::store::{ProfileStore, StoreError};

/// In-memory record store. Backs tests and the no-database dev mode.
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<String, UserProfile>>,
    recommendations: RwLock<Vec<Recommendation>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_user(&self, profile: UserProfile) {
        self.users
            .write()
            .expect("user map poisoned")
            .insert(profile.id.clone(), profile);
    }

    pub fn insert_recommendation(&self, rec: Recommendation) {
        self.recommendations
            .write()
            .expect("recommendation list poisoned")
            .push(rec);
    }

    /// Store pre-populated with demo profiles, for running the service
    /// without a database.
    pub fn seeded() -> Self {
        let store = Self::new();

        store.insert_user(UserProfile {
            id: "1".to_string(),
            name: "Sarah Chen".to_string(),
            title: "Senior Product Manager".to_string(),
            bio: "Product leader focused on developer tools and platform teams."
                .to_string(),
            current_company: "Northwind Labs".to_string(),
            avatar: None,
            email: Some("sarah.chen@example.com".to_string()),
            phone_number: Some("(555) 123-4567".to_string()),
            location: Some("San Francisco, CA".to_string()),
            linkedin: Some("https://linkedin.com/in/sarahchen".to_string()),
            show_email: true,
            show_phone: false,
            show_location: true,
            education: vec![Education {
                institution: "UC Berkeley".to_string(),
                degree: "B.S.".to_string(),
                field: "Computer Science".to_string(),
                start_date: NaiveDate::from_ymd_opt(2012, 9, 1).unwrap(),
                end_date: Some(NaiveDate::from_ymd_opt(2016, 5, 15).unwrap()),
                current: false,
            }],
            experience: vec![WorkExperience {
                company: "Northwind Labs".to_string(),
                position: "Senior Product Manager".to_string(),
                start_date: NaiveDate::from_ymd_opt(2021, 3, 1).unwrap(),
                end_date: None,
                current: true,
            }],
            skills: vec![
                Skill {
                    name: "Roadmapping".to_string(),
                    kind: SkillKind::Hard,
                },
                Skill {
                    name: "Stakeholder management".to_string(),
                    kind: SkillKind::Soft,
                },
            ],
            additional_sections: Vec::new(),
            availability: Availability {
                status: AvailabilityStatus::Open,
                is_available: true,
                roles: vec!["Product Manager".to_string()],
                work_styles: vec![WorkStyle::Remote, WorkStyle::Hybrid],
                locations: vec!["San Francisco, CA".to_string()],
            },
            resume: None,
            updated_at: Utc::now(),
        });

        store.insert_user(UserProfile {
            id: "2".to_string(),
            name: "Marcus Webb".to_string(),
            title: "Staff Software Engineer".to_string(),
            bio: String::new(),
            current_company: "Fathom Systems".to_string(),
            avatar: None,
            email: Some("marcus.webb@example.com".to_string()),
            phone_number: None,
            location: Some("Austin, TX".to_string()),
            linkedin: None,
            show_email: false,
            show_phone: false,
            show_location: false,
            education: Vec::new(),
            experience: Vec::new(),
            skills: vec![Skill {
                name: "Rust".to_string(),
                kind: SkillKind::Hard,
            }],
            additional_sections: Vec::new(),
            availability: Availability::default(),
            resume: None,
            updated_at: Utc::now(),
        });

        store.insert_recommendation(Recommendation {
            id: Uuid::new_v4(),
            author_id: "2".to_string(),
            subject_id: "1".to_string(),
            status: RecommendationStatus::Approved,
            body: "Sarah shipped our platform relaunch on time and kept three teams aligned."
                .to_string(),
            created_at: Utc::now(),
        });
        store.insert_recommendation(Recommendation {
            id: Uuid::new_v4(),
            author_id: "1".to_string(),
            subject_id: "2".to_string(),
            status: RecommendationStatus::Pending,
            body: "Marcus is the strongest systems engineer I have worked with.".to_string(),
            created_at: Utc::now(),
        });

        store
    }
}

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn get_user(&self, id: &str) -> Result<Option<UserProfile>, StoreError> {
        let users = self
            .users
            .read()
            .map_err(|_| StoreError::Unavailable("user map lock poisoned".to_string()))?;
        Ok(users.get(id).cloned())
    }

    async fn update_user(&self, id: &str, profile: UserProfile) -> Result<(), StoreError> {
        let mut users = self
            .users
            .write()
            .map_err(|_| StoreError::Unavailable("user map lock poisoned".to_string()))?;
        users.insert(id.to_string(), profile);
        Ok(())
    }

    async fn list_recommendations(
        &self,
        subject_id: &str,
        status: RecommendationStatus,
    ) -> Result<Vec<Recommendation>, StoreError> {
        let recs = self
            .recommendations
            .read()
            .map_err(|_| StoreError::Unavailable("recommendation list lock poisoned".to_string()))?;
        Ok(recs
            .iter()
            .filter(|r| r.subject_id == subject_id && r.status == status)
            .cloned()
            .collect())
    }
}
