use crate::entities::skill::SkillsDraft;
use crate::errors::ClientError;
use crate::services::profile::ProfileService;

/// Holds the confirmed skill collection and pushes whole-collection
/// replacements. Individual add/remove edits happen on a `SkillsDraft` and
/// only reach the service through `replace_all`.
pub struct SkillsSynchronizer<S>
where
    S: ProfileService,
{
    service: S,
    skills: Vec<String>,
}

impl<S> SkillsSynchronizer<S>
where
    S: ProfileService,
{
    pub fn new(service: S) -> Self {
        SkillsSynchronizer {
            service,
            skills: Vec::new(),
        }
    }

    /// Confirmed skills, in display order.
    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn restore(&mut self, skills: Vec<String>) {
        self.skills = skills;
    }

    /// Working copy seeded from the confirmed collection.
    pub fn draft(&self) -> SkillsDraft {
        SkillsDraft::new(self.skills.clone())
    }

    /// Sends the complete desired collection; the server overwrites its
    /// stored set. The local collection commits only after confirmation, so
    /// a failed replace keeps the previously displayed skills.
    pub async fn replace_all(
        &mut self,
        user_id: i64,
        skills: Vec<String>,
    ) -> Result<(), ClientError> {
        self.service.replace_skills(user_id, &skills).await?;

        tracing::info!(count = skills.len(), "Skills replaced");
        self.skills = skills;
        Ok(())
    }
}
