pub mod app_config;
pub mod categories;
pub mod config;
pub mod operator;
pub mod products;
pub mod slides;

use thiserror::Error;

pub use app_config::{AppConfig, CatalogSettings, Environment};
pub use categories::{filter_active_categories, Category};
pub use config::{load_app_config, load_app_config_from_env};
pub use operator::{load_operator, load_operator_or_default, BrandColors, HomeRail, OperatorConfig};
pub use products::{CategoryRef, Product, ProductImage, StockStatus};
pub use slides::{category_anchor, Banner, Slide, SlideImage};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read operator file {path}: {source}")]
    OperatorFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse operator file: {0}")]
    OperatorFileParse(#[from] serde_yaml::Error),

    #[error("operator config validation failed: {0}")]
    Validation(String),
}
