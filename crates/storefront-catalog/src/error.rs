use thiserror::Error;

/// Generic text shown to shoppers when the catalog cannot be loaded and the
/// upstream gave nothing better to say.
pub const CATALOG_UNAVAILABLE: &str = "could not load catalog";

/// Failure of a catalog request.
///
/// Every catalog operation returns this one type so callers match on a
/// variant instead of probing the payload. An empty product list is a
/// success, never an error.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Required settings are missing or invalid. Raised before any network
    /// call and only fixable by an operator.
    #[error("catalog is not configured: {reason}")]
    Configuration { reason: String },

    /// The catalog answered with a non-success status.
    #[error("catalog responded with HTTP {status_code}: {message}")]
    Remote { status_code: u16, message: String },

    /// No response was received (DNS, connect, timeout, reset).
    #[error("catalog transport failure: {message}")]
    Transport { message: String },

    /// A success response whose body is not the expected JSON shape.
    #[error("could not decode {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

impl CatalogError {
    /// Stable label for logs and metrics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            CatalogError::Configuration { .. } => "configuration",
            CatalogError::Remote { .. } => "remote",
            CatalogError::Transport { .. } => "transport",
            CatalogError::Decode { .. } => "decode",
        }
    }

    /// Upstream HTTP status, when the catalog answered at all.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            CatalogError::Remote { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// Text safe to show to a shopper.
    ///
    /// Remote failures carry the upstream message; everything else renders
    /// as [`CATALOG_UNAVAILABLE`] so configuration details never leak.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            CatalogError::Remote { message, .. } if !message.trim().is_empty() => message.clone(),
            _ => CATALOG_UNAVAILABLE.to_string(),
        }
    }

    pub(crate) fn configuration(reason: impl Into<String>) -> Self {
        CatalogError::Configuration {
            reason: reason.into(),
        }
    }

    pub(crate) fn transport(err: &reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            format!("request timed out: {err}")
        } else {
            err.to_string()
        };
        CatalogError::Transport { message }
    }
}
