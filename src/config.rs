//! # Spec Configuration Module
//!
//! Environment-driven defaults for the document an [`ApiSpec`](crate::spec::ApiSpec)
//! assembles.
//!
//! ## Environment Variables
//!
//! ### `APISPEC_TITLE`
//!
//! Title written to `info.title`. Default: `API`
//!
//! ### `APISPEC_VERSION`
//!
//! API version written to `info.version`. Default: `1.0.0`
//!
//! ### `APISPEC_OPENAPI_VERSION`
//!
//! OpenAPI version of the document. Versions starting with `2` produce a
//! `swagger: "2.0"` document, anything else an `openapi: <version>` document.
//! Default: `3.0.2`
//!
//! ## Usage
//!
//! ```rust
//! use apispec_webframeworks::config::SpecConfig;
//! use apispec_webframeworks::spec::ApiSpec;
//!
//! let config = SpecConfig::from_env();
//! let spec = ApiSpec::from_config(&config);
//! assert_eq!(spec.openapi_version(), config.openapi_version);
//! ```

use std::env;

const DEFAULT_TITLE: &str = "API";
const DEFAULT_VERSION: &str = "1.0.0";
const DEFAULT_OPENAPI_VERSION: &str = "3.0.2";

/// Spec defaults loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecConfig {
    pub title: String,
    pub version: String,
    pub openapi_version: String,
}

impl SpecConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            title: non_empty_var("APISPEC_TITLE").unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            version: non_empty_var("APISPEC_VERSION")
                .unwrap_or_else(|| DEFAULT_VERSION.to_string()),
            openapi_version: non_empty_var("APISPEC_OPENAPI_VERSION")
                .unwrap_or_else(|| DEFAULT_OPENAPI_VERSION.to_string()),
        }
    }
}

impl Default for SpecConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            version: DEFAULT_VERSION.to_string(),
            openapi_version: DEFAULT_OPENAPI_VERSION.to_string(),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}
