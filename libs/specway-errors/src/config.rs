//! Configuration of the response boundary.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::resolver::ResolverErrorPolicy;

/// Errors in the rendering configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid resolver error status: {0}")]
    InvalidResolverStatus(u16),
}

/// Whether the detail of a non-conforming response reaches the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailExposure {
    /// Send the detail as-is.
    #[default]
    Expose,
    /// Keep the detail in the logs only.
    Hide,
}

/// Response boundary configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Detail policy for responses that violate their own contract
    #[serde(default)]
    pub server_error_detail: DetailExposure,

    /// Handling of operations whose handler cannot be resolved
    #[serde(default)]
    pub resolver_error: ResolverErrorPolicy,
}

impl RenderConfig {
    /// Validate the configuration for consistency
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidResolverStatus` if the resolver policy
    /// names an informational code or one outside the 100..=599 range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let ResolverErrorPolicy::Respond(code) = self.resolver_error
            && self.resolver_error.status().is_none()
        {
            return Err(ConfigError::InvalidResolverStatus(code));
        }
        Ok(())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg: RenderConfig = serde_json::from_value(json!({})).unwrap();
        assert_eq!(cfg, RenderConfig::default());
        assert_eq!(cfg.server_error_detail, DetailExposure::Expose);
        assert_eq!(cfg.resolver_error, ResolverErrorPolicy::Strict);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn full_config_parses() {
        let cfg: RenderConfig = serde_json::from_value(json!({
            "server_error_detail": "hide",
            "resolver_error": {"respond": 501}
        }))
        .unwrap();
        assert_eq!(cfg.server_error_detail, DetailExposure::Hide);
        assert_eq!(cfg.resolver_error, ResolverErrorPolicy::Respond(501));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_resolver_status() {
        for code in [42, 101, 600, 999] {
            let cfg = RenderConfig {
                resolver_error: ResolverErrorPolicy::Respond(code),
                ..RenderConfig::default()
            };
            assert_eq!(
                cfg.validate(),
                Err(ConfigError::InvalidResolverStatus(code))
            );
        }
    }
}
