/// Sentinel end date for an experience that is still ongoing.
pub const PRESENT: &str = "Present";

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

/// Upper bound on uploaded files (resumes and study material).
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
