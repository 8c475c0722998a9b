use crate::app_config::{AppConfig, CatalogSettings, Environment};
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
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can feed a plain `HashMap`.
/// Blank values are treated exactly like unset ones.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let or_default =
        |var: &str, default: &str| -> String { optional(var).unwrap_or_else(|| default.to_string()) };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("STOREFRONT_ENV", "development"))?;

    let bind_addr = or_default("STOREFRONT_BIND_ADDR", "0.0.0.0:3000")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("STOREFRONT_BIND_ADDR", e.to_string()))?;
    let log_level = or_default("STOREFRONT_LOG_LEVEL", "info");

    let catalog = CatalogSettings {
        base_url: optional("WOOCOMMERCE_URL"),
        consumer_key: optional("CONSUMER_KEY"),
        consumer_secret: optional("CONSUMER_SECRET"),
    };
    let slides_url = optional("SLIDES_API_URL");
    let operator_path = optional("STOREFRONT_OPERATOR_PATH").map(PathBuf::from);

    let request_timeout_secs = parse_u64("STOREFRONT_REQUEST_TIMEOUT_SECS", "5")?;
    if request_timeout_secs == 0 {
        return Err(invalid(
            "STOREFRONT_REQUEST_TIMEOUT_SECS",
            "timeout must be at least 1 second".to_string(),
        ));
    }
    let user_agent = or_default("STOREFRONT_USER_AGENT", "storefront/0.1 (catalog-bridge)");

    let default_per_page = parse_u32("STOREFRONT_PER_PAGE", "8")?;
    if !(1..=100).contains(&default_per_page) {
        return Err(invalid(
            "STOREFRONT_PER_PAGE",
            format!("{default_per_page} is outside 1..=100"),
        ));
    }

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        catalog,
        slides_url,
        operator_path,
        request_timeout_secs,
        user_agent,
        default_per_page,
    })
}

fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "STOREFRONT_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
