use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user's profile record. This is the unit the edit workflow operates
/// on: the whole record is loaded, shadow-copied, patched field by field,
/// and written back in one piece at save time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Immutable once provisioned. Not reachable through the field-change
    /// channel.
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub current_company: String,
    pub avatar: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub location: Option<String>,
    pub linkedin: Option<String>,
    #[serde(default)]
    pub show_email: bool,
    #[serde(default)]
    pub show_phone: bool,
    #[serde(default)]
    pub show_location: bool,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub experience: Vec<WorkExperience>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub additional_sections: Vec<AdditionalSection>,
    #[serde(default)]
    pub availability: Availability,
    pub resume: Option<ResumeRef>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: NaiveDate,
    /// Ignored when `current` is set; cleared at commit time.
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    pub company: String,
    pub position: String,
    pub start_date: NaiveDate,
    /// Ignored when `current` is set; cleared at commit time.
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: SkillKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillKind {
    Soft,
    Hard,
}

/// Free-form labeled profile section (certifications, publications, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdditionalSection {
    pub title: String,
    pub content: String,
}

/// Job-search preferences. Edited as a unit: the form merges sub-field
/// updates into a full object before emitting it through the
/// field-change channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    pub status: AvailabilityStatus,
    pub is_available: bool,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub work_styles: Vec<WorkStyle>,
    #[serde(default)]
    pub locations: Vec<String>,
}

impl Default for Availability {
    fn default() -> Self {
        Self {
            status: AvailabilityStatus::Open,
            is_available: false,
            roles: Vec::new(),
            work_styles: Vec::new(),
            locations: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AvailabilityStatus {
    ActivelyLooking,
    Open,
    CasuallyLooking,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WorkStyle {
    Remote,
    Hybrid,
    InPerson,
}

/// Reference to an uploaded resume document.
///
/// `Pending` points at a freshly staged upload and is only promised to
/// live for the duration of the edit session; committing the profile
/// promotes it to `Stored`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum ResumeRef {
    #[serde(rename_all = "camelCase")]
    Pending { upload_id: Uuid, url: String },
    #[serde(rename_all = "camelCase")]
    Stored { url: String },
}
