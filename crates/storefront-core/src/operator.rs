use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Per-operator storefront settings.
///
/// Display settings are opaque to the fetch layer and are handed to the
/// presentation layer untouched. `active_categories` and `home_rails` decide
/// which catalog slices the home page fetches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorConfig {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub brand_colors: BrandColors,
    #[serde(default)]
    pub active_categories: Option<Vec<u64>>,
    #[serde(default)]
    pub home_rails: Vec<HomeRail>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandColors {
    #[serde(default)]
    pub primary: Option<String>,
    #[serde(default)]
    pub secondary: Option<String>,
}

/// A home-page product rail pinned to one catalog category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeRail {
    pub category_id: u64,
    pub title: String,
}

impl OperatorConfig {
    /// The activated category ids, or `None` when the operator did not scope
    /// the home page.
    #[must_use]
    pub fn active_category_set(&self) -> Option<HashSet<u64>> {
        self.active_categories
            .as_ref()
            .map(|ids| ids.iter().copied().collect())
    }
}

/// Load and validate the operator configuration from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_operator(path: &Path) -> Result<OperatorConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::OperatorFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let operator: OperatorConfig = serde_yaml::from_str(&content)?;
    validate_operator(&operator)?;

    Ok(operator)
}

/// Load the operator file at `path`, or fall back to default storefront
/// settings when no path is configured.
///
/// # Errors
///
/// Same as [`load_operator`].
pub fn load_operator_or_default(path: Option<&Path>) -> Result<OperatorConfig, ConfigError> {
    match path {
        Some(path) => load_operator(path),
        None => Ok(OperatorConfig::default()),
    }
}

fn validate_operator(operator: &OperatorConfig) -> Result<(), ConfigError> {
    if let Some(phone) = &operator.contact_phone {
        let digits: String = phone
            .chars()
            .filter(|c| !matches!(c, '+' | ' ' | '-'))
            .collect();
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::Validation(format!(
                "contact_phone '{phone}' must contain only digits, spaces, '-' or a leading '+'"
            )));
        }
    }

    for (field, color) in [
        ("primary", &operator.brand_colors.primary),
        ("secondary", &operator.brand_colors.secondary),
    ] {
        if let Some(color) = color {
            if !is_hex_color(color) {
                return Err(ConfigError::Validation(format!(
                    "brand_colors.{field} '{color}' must be #rgb or #rrggbb"
                )));
            }
        }
    }

    let mut seen_rails = HashSet::new();
    for rail in &operator.home_rails {
        if rail.title.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "home rail for category {} must have a non-empty title",
                rail.category_id
            )));
        }
        if !seen_rails.insert(rail.category_id) {
            return Err(ConfigError::Validation(format!(
                "duplicate home rail for category {}",
                rail.category_id
            )));
        }
    }

    Ok(())
}

fn is_hex_color(value: &str) -> bool {
    value.strip_prefix('#').is_some_and(|hex| {
        matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
    })
}

#[cfg(test)]
#[path = "operator_test.rs"]
mod tests;
