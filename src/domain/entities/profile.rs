use serde::Deserialize;

use crate::entities::experience::{Experience, ExperienceRecord};
use crate::entities::resume::Resume;
use crate::entities::skill::SkillRecord;

/// Aggregate of the three profile sub-resources, already decoded into local
/// types. Owned by the loader until distributed into the components.
#[derive(Debug, Clone, Default)]
pub struct ProfileSnapshot {
    pub skills: Vec<String>,
    pub experiences: Vec<Experience>,
    pub resumes: Vec<Resume>,
}

/// Wire shape of the profile fetch response.
#[derive(Debug, Deserialize)]
pub struct ProfilePayload {
    #[serde(default)]
    pub skills: Vec<SkillRecord>,
    #[serde(default)]
    pub experiences: Vec<ExperienceRecord>,
    #[serde(default)]
    pub resumes: Vec<Resume>,
}

impl From<ProfilePayload> for ProfileSnapshot {
    fn from(payload: ProfilePayload) -> Self {
        ProfileSnapshot {
            skills: payload.skills.into_iter().map(|s| s.skill_name).collect(),
            experiences: payload.experiences.into_iter().map(Experience::from).collect(),
            resumes: payload.resumes,
        }
    }
}
