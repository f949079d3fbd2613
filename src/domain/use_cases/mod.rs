pub mod auth;
pub mod experience;
pub mod profile;
pub mod resume;
pub mod skills;
pub mod study_sets;
