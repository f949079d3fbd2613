use validator::Validate;

use crate::entities::experience::{Experience, ExperienceForm};
use crate::errors::ClientError;
use crate::services::profile::ProfileService;

/// Keeps the locally displayed experience list consistent with the remote
/// store. Every mutation is confirm-then-commit: the local collection only
/// changes after the service acknowledges the write, so a failed call never
/// leaves a half-applied record on screen.
pub struct ExperienceReconciler<S>
where
    S: ProfileService,
{
    service: S,
    experiences: Vec<Experience>,
}

impl<S> ExperienceReconciler<S>
where
    S: ProfileService,
{
    pub fn new(service: S) -> Self {
        ExperienceReconciler {
            service,
            experiences: Vec::new(),
        }
    }

    /// Currently displayed records, in display order.
    pub fn experiences(&self) -> &[Experience] {
        &self.experiences
    }

    /// Replaces the whole local list with a server-confirmed snapshot slice.
    pub fn restore(&mut self, experiences: Vec<Experience>) {
        self.experiences = experiences;
    }

    /// Creates a new experience. Required fields are checked before any
    /// network call; on success the confirmed record (now carrying its
    /// server-assigned id) is appended to the end of the list.
    pub async fn create(
        &mut self,
        user_id: i64,
        form: &ExperienceForm,
    ) -> Result<Experience, ClientError> {
        form.validate()?;

        let payload = form.prepare_for_save();
        let created = self.service.create_experience(user_id, &payload).await?;

        tracing::info!(id = created.id, "Experience created");
        self.experiences.push(created.clone());
        Ok(created)
    }

    /// Updates the experience with the given id and replaces the matching
    /// local record; every other record is left untouched. On failure the
    /// previously displayed record remains as it was.
    pub async fn update(
        &mut self,
        id: i64,
        form: &ExperienceForm,
    ) -> Result<Experience, ClientError> {
        form.validate()?;

        let payload = form.prepare_for_save();
        let updated = self.service.update_experience(id, &payload).await?;

        match self.experiences.iter_mut().find(|e| e.id == id) {
            Some(slot) => *slot = updated.clone(),
            None => {
                tracing::warn!(id, "Updated experience missing locally; reload the profile");
                return Err(ClientError::NotFound(format!(
                    "No local experience with id {id}"
                )));
            }
        }

        Ok(updated)
    }

    /// Removes the record locally only after the remote delete succeeds.
    pub async fn delete(&mut self, id: i64) -> Result<(), ClientError> {
        self.service.delete_experience(id).await?;

        self.experiences.retain(|e| e.id != id);
        tracing::info!(id, "Experience deleted");
        Ok(())
    }

    /// Single save path for the edit modal: creates when the form has no id,
    /// updates otherwise.
    pub async fn save(
        &mut self,
        user_id: i64,
        form: &ExperienceForm,
    ) -> Result<Experience, ClientError> {
        match form.id {
            Some(id) => self.update(id, form).await,
            None => self.create(user_id, form).await,
        }
    }
}
