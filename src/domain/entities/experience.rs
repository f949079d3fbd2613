use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::constants::PRESENT;
use crate::domain::bullets;

/// A server-confirmed work experience as displayed on the profile page.
/// Records in the local collection always carry the id the service assigned,
/// so lookups are by id only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub start_date: String,
    pub end_date: String,
    pub bullets: Vec<String>,
}

impl Experience {
    pub fn is_current(&self) -> bool {
        self.end_date == PRESENT
    }
}

/// Wire shape of an experience as the service returns it. `bullets` holds
/// the stored JSON-array string.
#[derive(Debug, Clone, Deserialize)]
pub struct ExperienceRecord {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub bullets: Option<String>,
}

impl From<ExperienceRecord> for Experience {
    fn from(record: ExperienceRecord) -> Self {
        Experience {
            id: record.id,
            title: record.title,
            company: record.company,
            location: record.location,
            kind: record.kind,
            start_date: record.start_date,
            end_date: record.end_date,
            bullets: bullets::deserialize_from_wire(record.bullets.as_deref()),
        }
    }
}

/// Edit-form state for creating or editing an experience. `id` is absent
/// until the service confirms the create. The "I currently work here"
/// checkbox maps to the `Present` end-date sentinel on save.
#[derive(Debug, Clone, Default, Validate)]
pub struct ExperienceForm {
    pub id: Option<i64>,

    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Company is required"))]
    pub company: String,

    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,

    #[validate(length(min = 1, message = "Experience type is required"))]
    pub kind: String,

    #[validate(length(min = 1, message = "Start date is required"))]
    pub start_date: String,

    pub end_date: String,

    pub current: bool,

    /// One bullet per line; the bullet source for the persisted record.
    #[validate(
        length(min = 1, message = "Description is required"),
        custom(
            function = validate_bullet_source,
            message = "Description needs at least one non-blank line"
        )
    )]
    pub description: String,
}

/// Rejects whitespace-only description text, which would otherwise persist
/// a record with no bullets.
fn validate_bullet_source(description: &str) -> Result<(), ValidationError> {
    if bullets::encode(description).is_empty() {
        return Err(ValidationError::new("bullet_source"));
    }
    Ok(())
}

impl ExperienceForm {
    /// End date as persisted: the `Present` sentinel while the checkbox is
    /// on, the literal date otherwise.
    pub fn resolved_end_date(&self) -> String {
        if self.current {
            PRESENT.to_string()
        } else {
            self.end_date.clone()
        }
    }

    pub fn bullets(&self) -> Vec<String> {
        bullets::encode(&self.description)
    }

    pub fn prepare_for_save(&self) -> ExperiencePayload {
        ExperiencePayload {
            title: self.title.clone(),
            company: self.company.clone(),
            location: self.location.clone(),
            kind: self.kind.clone(),
            start_date: self.start_date.clone(),
            end_date: self.resolved_end_date(),
            bullets_json: bullets::serialize_for_wire(&self.bullets()),
        }
    }
}

impl From<&Experience> for ExperienceForm {
    fn from(experience: &Experience) -> Self {
        let current = experience.is_current();
        ExperienceForm {
            id: Some(experience.id),
            title: experience.title.clone(),
            company: experience.company.clone(),
            location: experience.location.clone(),
            kind: experience.kind.clone(),
            start_date: experience.start_date.clone(),
            // The date field stays blank while the record is ongoing.
            end_date: if current {
                String::new()
            } else {
                experience.end_date.clone()
            },
            current,
            description: bullets::decode(&experience.bullets),
        }
    }
}

/// Multipart payload for experience create and update calls.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperiencePayload {
    pub title: String,
    pub company: String,
    pub location: String,
    pub kind: String,
    pub start_date: String,
    pub end_date: String,
    pub bullets_json: String,
}
