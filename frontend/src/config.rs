use log::Level;
use std::str::FromStr;

/// Settings baked in at build time, e.g. `BUDGET_API_BASE_URL=http://localhost:5000 trunk build`.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Prefix for the REST paths; empty means the serving origin.
    pub api_base_url: String,
    pub log_level: Level,
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("BUDGET_API_BASE_URL"),
            option_env!("BUDGET_LOG_LEVEL"),
        )
    }

    pub fn from_values(api_base_url: Option<&str>, log_level: Option<&str>) -> Self {
        Self {
            api_base_url: api_base_url
                .unwrap_or_default()
                .trim()
                .trim_end_matches('/')
                .to_string(),
            log_level: log_level
                .and_then(|level| Level::from_str(level.trim()).ok())
                .unwrap_or(Level::Info),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}
