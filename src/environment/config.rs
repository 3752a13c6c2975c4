use serde::Deserialize;

/// Base URLs of the backing services. Read once at startup; pipelines read
/// them from the environment at call time.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Workflow engine (shift create/end, tasks, notifications).
    pub workflow_service_url: String,
    /// Operational data service (shift lookup, staff details).
    pub operational_data_url: String,
    /// Translation service (form schemas).
    pub translation_service_url: String,
}

impl AppConfig {
    pub fn new(
        workflow_service_url: impl Into<String>,
        operational_data_url: impl Into<String>,
        translation_service_url: impl Into<String>,
    ) -> Self {
        Self {
            workflow_service_url: workflow_service_url.into(),
            operational_data_url: operational_data_url.into(),
            translation_service_url: translation_service_url.into(),
        }
    }

    /// Reads the same variables the hosting shell exposes to the web client.
    pub fn from_env() -> Self {
        Self {
            workflow_service_url: env_or("ENGINE_URI", "http://localhost:8000"),
            operational_data_url: env_or("API_COP_URI", "http://localhost:9001"),
            translation_service_url: env_or("API_FORM_URI", "http://localhost:9002"),
        }
    }
}

fn env_or(name: &str, fallback: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| fallback.to_string())
}
