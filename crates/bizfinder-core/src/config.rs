use crate::app_config::{AppConfig, Environment, FieldPrecedence};
use crate::records::Coordinates;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files; useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        or_default(var, default)
            .parse::<SocketAddr>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("BIZFINDER_ENV", "development"))?;
    let bind_addr = parse_addr("BIZFINDER_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("BIZFINDER_LOG_LEVEL", "info");

    // An empty key is as good as no key.
    let groq_api_key = lookup("GROQ_API_KEY")
        .ok()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty());
    let llm_base_url = or_default("BIZFINDER_LLM_BASE_URL", "https://api.groq.com/openai/v1");
    let llm_model = or_default("BIZFINDER_LLM_MODEL", "llama-3.3-70b-versatile");
    let llm_timeout_secs = parse_u64("BIZFINDER_LLM_TIMEOUT_SECS", "60")?;

    let nominatim_url = or_default(
        "BIZFINDER_NOMINATIM_URL",
        "https://nominatim.openstreetmap.org",
    );
    let arcgis_url = or_default(
        "BIZFINDER_ARCGIS_URL",
        "https://geocode.arcgis.com/arcgis/rest/services/World/GeocodeServer",
    );
    let geocoder_user_agent = or_default("BIZFINDER_GEOCODER_USER_AGENT", "LocalBusinessFinder/1.0");
    let geocoder_timeout_secs = parse_u64("BIZFINDER_GEOCODER_TIMEOUT_SECS", "10")?;
    let geocode_concurrency = parse_usize("BIZFINDER_GEOCODE_CONCURRENCY", "1")?;
    if geocode_concurrency == 0 {
        return Err(invalid(
            "BIZFINDER_GEOCODE_CONCURRENCY",
            "must be at least 1".to_string(),
        ));
    }

    let raw_center = or_default("BIZFINDER_DEFAULT_CENTER", "12.9716,77.5946");
    let default_center = Coordinates::parse_pair(&raw_center)
        .filter(Coordinates::is_valid)
        .ok_or_else(|| {
            invalid(
                "BIZFINDER_DEFAULT_CENTER",
                format!("expected \"<lat>,<lng>\" within range, got {raw_center:?}"),
            )
        })?;

    let field_precedence = parse_field_precedence(&or_default("BIZFINDER_FIELD_PRECEDENCE", "last"))?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        groq_api_key,
        llm_base_url,
        llm_model,
        llm_timeout_secs,
        nominatim_url,
        arcgis_url,
        geocoder_user_agent,
        geocoder_timeout_secs,
        geocode_concurrency,
        default_center,
        field_precedence,
    })
}

fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "BIZFINDER_ENV".to_string(),
            reason: format!("unknown environment {other:?}"),
        }),
    }
}

fn parse_field_precedence(s: &str) -> Result<FieldPrecedence, ConfigError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "last" => Ok(FieldPrecedence::LastWins),
        "first" => Ok(FieldPrecedence::FirstWins),
        other => Err(ConfigError::InvalidEnvVar {
            var: "BIZFINDER_FIELD_PRECEDENCE".to_string(),
            reason: format!("expected \"first\" or \"last\", got {other:?}"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
