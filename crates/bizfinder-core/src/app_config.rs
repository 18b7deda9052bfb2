use std::net::SocketAddr;

use crate::records::Coordinates;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Which value wins when a reply entry repeats a field label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldPrecedence {
    /// A later line overwrites an earlier one.
    #[default]
    LastWins,
    /// The first non-empty value is kept.
    FirstWins,
}

impl std::fmt::Display for FieldPrecedence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldPrecedence::LastWins => write!(f, "last"),
            FieldPrecedence::FirstWins => write!(f, "first"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Completion endpoint credential. `None` leaves the app running but
    /// every search fails as unconfigured.
    pub groq_api_key: Option<String>,
    pub llm_base_url: String,
    pub llm_model: String,
    pub llm_timeout_secs: u64,
    pub nominatim_url: String,
    pub arcgis_url: String,
    pub geocoder_user_agent: String,
    pub geocoder_timeout_secs: u64,
    pub geocode_concurrency: usize,
    pub default_center: Coordinates,
    pub field_precedence: FieldPrecedence,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field(
                "groq_api_key",
                &self.groq_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("llm_base_url", &self.llm_base_url)
            .field("llm_model", &self.llm_model)
            .field("llm_timeout_secs", &self.llm_timeout_secs)
            .field("nominatim_url", &self.nominatim_url)
            .field("arcgis_url", &self.arcgis_url)
            .field("geocoder_user_agent", &self.geocoder_user_agent)
            .field("geocoder_timeout_secs", &self.geocoder_timeout_secs)
            .field("geocode_concurrency", &self.geocode_concurrency)
            .field("default_center", &self.default_center)
            .field("field_precedence", &self.field_precedence)
            .finish()
    }
}
