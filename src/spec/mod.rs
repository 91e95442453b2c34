//! # Spec Module
//!
//! The surface the framework plugins plug into.
//!
//! - [`Plugin`] is the single capability every adapter implements. The spec
//!   calls [`Plugin::path_helper`] once per documented route with the
//!   caller's [`PathKwargs`]; the plugin resolves the route, merges docstring
//!   operations into the operations map and returns the OpenAPI path template.
//! - [`ApiSpec`] collects the resulting path items into a document.
//!
//! ## Example
//!
//! ```rust
//! use apispec_webframeworks::flask::{FlaskApp, FlaskPlugin};
//! use apispec_webframeworks::handler::Handler;
//! use apispec_webframeworks::spec::{ApiSpec, PathArgs};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let app = FlaskApp::new("gists");
//! let gist_detail = Handler::builder("gist_detail")
//!     .doc("Gist detail view.\n---\nget:\n  responses:\n    200:\n      description: a gist\n")
//!     .build();
//! app.route("/gists/<gist_id>", None, &gist_detail)?;
//!
//! let mut spec = ApiSpec::new("Gisty", "1.0.0", "3.0.2").plugin(FlaskPlugin::new());
//! spec.path(PathArgs::new().view(&gist_detail).app(&app))?;
//! assert!(spec.paths().contains_key("/gists/{gist_id}"));
//! # Ok(())
//! # }
//! ```

mod document;
mod types;


pub use document::ApiSpec;
pub use types::{AppRef, Operations, PathArgs, PathKwargs};

use crate::error::SpecError;
use serde_yaml::Value;

/// Capability shared by the framework adapters.
pub trait Plugin {
    /// Resolve the route identified by `kwargs`, merge its documentation into
    /// `operations` and return its OpenAPI path template.
    ///
    /// Returning `Ok(None)` leaves the path to other plugins or to the caller.
    ///
    /// # Errors
    ///
    /// Any [`SpecError`]; the route cannot be documented.
    fn path_helper(
        &self,
        _path: Option<&str>,
        _operations: &mut Operations,
        _parameters: &mut Vec<Value>,
        _kwargs: &PathKwargs<'_>,
    ) -> Result<Option<String>, SpecError> {
        Ok(None)
    }
}
