use async_trait::async_trait;
use reqwest::multipart::{Form, Part};

use crate::entities::study_set::{NewStudySet, StudyFile, StudySet};
use crate::entities::upload::FileUpload;
use crate::errors::ClientError;
use crate::services::http_client::HttpClient;

#[async_trait]
pub trait StudySetService: Send + Sync {
    async fn create_study_set(
        &self,
        user_id: i64,
        new_set: &NewStudySet,
    ) -> Result<StudySet, ClientError>;

    async fn study_sets(&self, user_id: i64) -> Result<Vec<StudySet>, ClientError>;

    async fn study_set(&self, set_id: i64) -> Result<StudySet, ClientError>;

    async fn upload_study_file(
        &self,
        study_set_id: i64,
        upload: FileUpload,
    ) -> Result<StudyFile, ClientError>;

    async fn study_files(&self, study_set_id: i64) -> Result<Vec<StudyFile>, ClientError>;

    async fn delete_study_file(&self, file_id: i64) -> Result<(), ClientError>;
}

#[async_trait]
impl StudySetService for HttpClient {
    async fn create_study_set(
        &self,
        user_id: i64,
        new_set: &NewStudySet,
    ) -> Result<StudySet, ClientError> {
        let mut form = Form::new()
            .text("user_id", user_id.to_string())
            .text("title", new_set.title.clone());
        if let Some(description) = &new_set.description {
            form = form.text("description", description.clone());
        }
        self.post_form("studysets", form).await
    }

    async fn study_sets(&self, user_id: i64) -> Result<Vec<StudySet>, ClientError> {
        self.get_json(&format!("studysets/{user_id}")).await
    }

    async fn study_set(&self, set_id: i64) -> Result<StudySet, ClientError> {
        self.get_json(&format!("studysets/{set_id}")).await
    }

    async fn upload_study_file(
        &self,
        study_set_id: i64,
        upload: FileUpload,
    ) -> Result<StudyFile, ClientError> {
        let part = Part::bytes(upload.bytes).file_name(upload.file_name.clone());
        let form = Form::new()
            .text("study_set_id", study_set_id.to_string())
            .part("file", part);
        self.post_form("studyfiles", form).await
    }

    async fn study_files(&self, study_set_id: i64) -> Result<Vec<StudyFile>, ClientError> {
        self.get_json(&format!("studyfiles/{study_set_id}")).await
    }

    async fn delete_study_file(&self, file_id: i64) -> Result<(), ClientError> {
        self.delete(&format!("studyfiles/{file_id}")).await
    }
}
