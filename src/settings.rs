use config::{Config, ConfigError, Environment};
use serde::Deserialize;

pub const BASE_URL: &str = "https://nobile.pro.br/sdm_ws";
pub const COURSE_ENDPOINT: &str = "/curso";
pub const SEMESTER_ENDPOINT: &str = "/semestre";
pub const DISCIPLINE_ENDPOINT: &str = "/disciplina";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub base_url: String,
    pub course_endpoint: String,
    pub semester_endpoint: String,
    pub discipline_endpoint: String,
}

impl Settings {
    /// Built-in defaults overridden by `SDM_*` environment variables,
    /// e.g. `SDM_BASE_URL`.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_environment(Environment::with_prefix("SDM"))
    }

    fn from_environment(env: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("base_url", BASE_URL)?
            .set_default("course_endpoint", COURSE_ENDPOINT)?
            .set_default("semester_endpoint", SEMESTER_ENDPOINT)?
            .set_default("discipline_endpoint", DISCIPLINE_ENDPOINT)?
            .add_source(env)
            .build()?
            .try_deserialize()
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn course_url(&self) -> String {
        format!("{}{}", self.base_url, self.course_endpoint)
    }

    pub fn semester_url(&self, semester_id: i32) -> String {
        format!("{}{}/{}", self.base_url, self.semester_endpoint, semester_id)
    }

    pub fn discipline_url(&self) -> String {
        format!("{}{}", self.base_url, self.discipline_endpoint)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.into(),
            course_endpoint: COURSE_ENDPOINT.into(),
            semester_endpoint: SEMESTER_ENDPOINT.into(),
            discipline_endpoint: DISCIPLINE_ENDPOINT.into(),
        }
    }
}
