use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize)]
pub struct StudySet {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StudyFile {
    pub id: i64,
    pub study_set_id: i64,
    pub file_name: String,
    pub file_url: String,
}

#[derive(Debug, Clone, Default, Validate)]
pub struct NewStudySet {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    pub description: Option<String>,
}
