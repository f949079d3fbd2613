pub mod auth;
pub mod http_client;
pub mod profile;
pub mod study_sets;
