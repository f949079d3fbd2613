pub mod experience;
pub mod profile;
pub mod resume;
pub mod skill;
pub mod study_set;
pub mod upload;
pub mod user;
