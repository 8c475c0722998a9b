use std::net::SocketAddr;
use std::path::PathBuf;

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

/// Connection settings for the WooCommerce-compatible catalog API.
///
/// Every field is optional at load time. A catalog request made while any of
/// them is missing fails with a configuration error instead of reaching the
/// network, so a half-configured deployment still boots and renders its
/// degraded pages.
#[derive(Clone, Default)]
pub struct CatalogSettings {
    /// API root, e.g. `https://shop.example.com/wp-json/wc/v3`.
    pub base_url: Option<String>,
    pub consumer_key: Option<String>,
    pub consumer_secret: Option<String>,
}

impl std::fmt::Debug for CatalogSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogSettings")
            .field("base_url", &self.base_url)
            .field(
                "consumer_key",
                &self.consumer_key.as_ref().map(|_| "[redacted]"),
            )
            .field(
                "consumer_secret",
                &self.consumer_secret.as_ref().map(|_| "[redacted]"),
            )
            .finish()
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub catalog: CatalogSettings,
    /// Full URL of the home-page slides endpoint.
    pub slides_url: Option<String>,
    pub operator_path: Option<PathBuf>,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub default_per_page: u32,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("catalog", &self.catalog)
            .field("slides_url", &self.slides_url)
            .field("operator_path", &self.operator_path)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("default_per_page", &self.default_per_page)
            .finish()
    }
}
