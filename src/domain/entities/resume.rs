use serde::{Deserialize, Serialize};

/// The single "current" resume shown on the profile page. The service may
/// keep history; the client only ever displays the most recent entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resume {
    pub file_name: String,
    pub file_url: String,
    pub uploaded_at: String,
}
