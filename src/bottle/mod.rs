//! # Bottle Module
//!
//! Path helper for Bottle callbacks.
//!
//! [`BottlePlugin`] finds the first route record whose callback is the view
//! (on the supplied [`Bottle`] application, else on [`default_app`]), merges the
//! operations declared in the callback docstring and translates
//! `<name:filter:config>` placeholders to `{name}`.
//!
//! ```rust
//! use apispec_webframeworks::bottle::{Bottle, BottlePlugin};
//! use apispec_webframeworks::handler::Handler;
//! use apispec_webframeworks::spec::{ApiSpec, PathArgs};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let app = Bottle::new();
//! let gist_detail = Handler::builder("gist_detail")
//!     .doc("Gist detail view.\n---\nget:\n  description: a gist\n")
//!     .build();
//! app.route("/gists/<gist_id>", None, &gist_detail)?;
//!
//! let mut spec = ApiSpec::new("Gisty", "1.0.0", "3.0.2").plugin(BottlePlugin::new());
//! spec.path(PathArgs::new().view(&gist_detail).app(&app))?;
//! assert!(spec.paths().contains_key("/gists/{gist_id}"));
//! # Ok(())
//! # }
//! ```

mod app;
mod plugin;


pub use app::{default_app, route, Bottle, Route};
pub use plugin::{bottle_path_to_openapi, BottlePlugin};
