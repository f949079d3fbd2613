use validator::Validate;

use crate::entities::study_set::{NewStudySet, StudyFile, StudySet};
use crate::entities::upload::FileUpload;
use crate::errors::ClientError;
use crate::services::study_sets::StudySetService;

/// Thin wrapper over the study-set endpoints used by the dashboard and the
/// per-set workspace.
pub struct StudySetHandler<S>
where
    S: StudySetService,
{
    service: S,
}

impl<S> StudySetHandler<S>
where
    S: StudySetService,
{
    pub fn new(service: S) -> Self {
        StudySetHandler { service }
    }

    pub async fn create(
        &self,
        user_id: i64,
        new_set: &NewStudySet,
    ) -> Result<StudySet, ClientError> {
        new_set.validate()?;

        let created = self.service.create_study_set(user_id, new_set).await?;
        tracing::info!(id = created.id, "Study set created");
        Ok(created)
    }

    pub async fn study_sets(&self, user_id: i64) -> Result<Vec<StudySet>, ClientError> {
        self.service.study_sets(user_id).await
    }

    pub async fn study_set(&self, set_id: i64) -> Result<StudySet, ClientError> {
        self.service.study_set(set_id).await
    }

    pub async fn upload_file(
        &self,
        study_set_id: i64,
        upload: FileUpload,
    ) -> Result<StudyFile, ClientError> {
        upload.validate()?;

        self.service.upload_study_file(study_set_id, upload).await
    }

    pub async fn study_files(&self, study_set_id: i64) -> Result<Vec<StudyFile>, ClientError> {
        self.service.study_files(study_set_id).await
    }

    pub async fn delete_file(&self, file_id: i64) -> Result<(), ClientError> {
        self.service.delete_study_file(file_id).await
    }
}
