mod domain;
mod infrastructure;
mod interfaces;
pub mod constants;
pub mod errors;
pub mod settings;

pub use domain::{bullets, entities, use_cases};
pub use infrastructure::telemetry;
pub use interfaces::services;

use errors::ClientError;
use services::http_client::HttpClient;
use settings::ClientConfig;
use use_cases::auth::AuthHandler;
use use_cases::profile::ProfileWorkspace;
use use_cases::study_sets::StudySetHandler;

pub type HttpProfileWorkspace = ProfileWorkspace<HttpClient>;

/// Everything a UI needs to drive the client against the live service.
pub struct AppClient {
    pub auth: AuthHandler<HttpClient>,
    pub profile: HttpProfileWorkspace,
    pub study_sets: StudySetHandler<HttpClient>,
}

impl AppClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = HttpClient::new(config)?;

        Ok(AppClient {
            auth: AuthHandler::new(http.clone()),
            profile: ProfileWorkspace::new(http.clone()),
            study_sets: StudySetHandler::new(http),
        })
    }
}
