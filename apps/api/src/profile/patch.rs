use serde::{Deserialize, Serialize};

use crate::models::user::{
    AdditionalSection, Availability, Education, ResumeRef, Skill, UserProfile, WorkExperience,
};

/// One field-level edit emitted by a form section.
///
/// The variant set is the whitelist of editable fields: `id` and
/// `updatedAt` have no variant, so they cannot be touched through this
/// channel, and a misspelled field name fails deserialization instead of
/// merging silently. Wire shape is `{"field": "...", "value": ...}`.
///
/// Nested objects are replaced wholesale, never deep-merged. Sections
/// editing part of a nested object (availability sub-fields, one
/// education entry) merge into the full object themselves before
/// emitting it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum FieldChange {
    Name(String),
    Title(String),
    Bio(String),
    CurrentCompany(String),
    Avatar(Option<String>),
    Email(Option<String>),
    PhoneNumber(Option<String>),
    Location(Option<String>),
    Linkedin(Option<String>),
    ShowEmail(bool),
    ShowPhone(bool),
    ShowLocation(bool),
    Education(Vec<Education>),
    Experience(Vec<WorkExperience>),
    Skills(Vec<Skill>),
    AdditionalSections(Vec<AdditionalSection>),
    Availability(Availability),
    Resume(Option<ResumeRef>),
}

/// Returns a new record equal to `profile` except the named field
/// replaced by the change's value. Pure merge: the input is untouched
/// and no validation happens here.
pub fn apply_field_change(profile: &UserProfile, change: FieldChange) -> UserProfile {
    let mut next = profile.clone();
    match change {
        FieldChange::Name(v) => next.name = v,
        FieldChange::Title(v) => next.title = v,
        FieldChange::Bio(v) => next.bio = v,
        FieldChange::CurrentCompany(v) => next.current_company = v,
        FieldChange::Avatar(v) => next.avatar = v,
        FieldChange::Email(v) => next.email = v,
        FieldChange::PhoneNumber(v) => next.phone_number = v,
        FieldChange::Location(v) => next.location = v,
        FieldChange::Linkedin(v) => next.linkedin = v,
        FieldChange::ShowEmail(v) => next.show_email = v,
        FieldChange::ShowPhone(v) => next.show_phone = v,
        FieldChange::ShowLocation(v) => next.show_location = v,
        FieldChange::Education(v) => next.education = v,
        FieldChange::Experience(v) => next.experience = v,
        FieldChange::Skills(v) => next.skills = v,
        FieldChange::AdditionalSections(v) => next.additional_sections = v,
        FieldChange::Availability(v) => next.availability = v,
        FieldChange::Resume(v) => next.resume = v,
    }
    next
}
