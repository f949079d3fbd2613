use crate::entities::resume::Resume;
use crate::entities::upload::FileUpload;
use crate::errors::ClientError;
use crate::services::profile::ProfileService;

/// Tracks at most one "current" resume, replaced wholesale on each
/// successful upload. A failed upload keeps the previous record displayed.
pub struct ResumeSlot<S>
where
    S: ProfileService,
{
    service: S,
    current: Option<Resume>,
}

impl<S> ResumeSlot<S>
where
    S: ProfileService,
{
    pub fn new(service: S) -> Self {
        ResumeSlot {
            service,
            current: None,
        }
    }

    pub fn current(&self) -> Option<&Resume> {
        self.current.as_ref()
    }

    pub fn restore(&mut self, resume: Option<Resume>) {
        self.current = resume;
    }

    pub async fn upload(&mut self, user_id: i64, upload: FileUpload) -> Result<Resume, ClientError> {
        upload.validate()?;

        let resume = self.service.upload_resume(user_id, upload).await?;

        tracing::info!(file_name = %resume.file_name, "Resume uploaded");
        self.current = Some(resume.clone());
        Ok(resume)
    }
}
