use async_trait::async_trait;
use reqwest::multipart::{Form, Part};

use crate::entities::experience::{Experience, ExperiencePayload, ExperienceRecord};
use crate::entities::profile::{ProfilePayload, ProfileSnapshot};
use crate::entities::resume::Resume;
use crate::entities::upload::FileUpload;
use crate::errors::ClientError;
use crate::services::http_client::HttpClient;

/// Remote store for the profile's three sub-resources. The use cases only
/// ever talk to this trait, so the transport can be swapped or mocked
/// without touching reconciliation logic.
#[async_trait]
pub trait ProfileService: Send + Sync {
    async fn fetch_profile(&self, user_id: i64) -> Result<ProfileSnapshot, ClientError>;

    async fn create_experience(
        &self,
        user_id: i64,
        payload: &ExperiencePayload,
    ) -> Result<Experience, ClientError>;

    async fn update_experience(
        &self,
        id: i64,
        payload: &ExperiencePayload,
    ) -> Result<Experience, ClientError>;

    async fn delete_experience(&self, id: i64) -> Result<(), ClientError>;

    /// The server fully overwrites its stored set with this collection; the
    /// payload is never diffed.
    async fn replace_skills(&self, user_id: i64, skills: &[String]) -> Result<(), ClientError>;

    async fn upload_resume(&self, user_id: i64, upload: FileUpload) -> Result<Resume, ClientError>;
}

fn experience_form(payload: &ExperiencePayload) -> Form {
    Form::new()
        .text("title", payload.title.clone())
        .text("company", payload.company.clone())
        .text("location", payload.location.clone())
        .text("type", payload.kind.clone())
        .text("start_date", payload.start_date.clone())
        .text("end_date", payload.end_date.clone())
        .text("bullets_json", payload.bullets_json.clone())
}

#[async_trait]
impl ProfileService for HttpClient {
    async fn fetch_profile(&self, user_id: i64) -> Result<ProfileSnapshot, ClientError> {
        let payload: ProfilePayload = self.get_json(&format!("profile/{user_id}")).await?;
        Ok(payload.into())
    }

    async fn create_experience(
        &self,
        user_id: i64,
        payload: &ExperiencePayload,
    ) -> Result<Experience, ClientError> {
        let form = experience_form(payload).text("user_id", user_id.to_string());
        let record: ExperienceRecord = self.post_form("experiences", form).await?;
        Ok(record.into())
    }

    async fn update_experience(
        &self,
        id: i64,
        payload: &ExperiencePayload,
    ) -> Result<Experience, ClientError> {
        let record: ExperienceRecord = self
            .put_form(&format!("experiences/{id}"), experience_form(payload))
            .await?;
        Ok(record.into())
    }

    async fn delete_experience(&self, id: i64) -> Result<(), ClientError> {
        self.delete(&format!("experiences/{id}")).await
    }

    async fn replace_skills(&self, user_id: i64, skills: &[String]) -> Result<(), ClientError> {
        let skills_json =
            serde_json::to_string(skills).unwrap_or_else(|_| "[]".to_string());
        let form = Form::new()
            .text("user_id", user_id.to_string())
            .text("skills_json", skills_json);
        self.post_form_unit("skills/batch", form).await
    }

    async fn upload_resume(&self, user_id: i64, upload: FileUpload) -> Result<Resume, ClientError> {
        let part = Part::bytes(upload.bytes).file_name(upload.file_name.clone());
        let form = Form::new()
            .text("user_id", user_id.to_string())
            .part("file", part);
        self.post_form("resumes", form).await
    }
}
