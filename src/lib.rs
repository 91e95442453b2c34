//! # apispec-webframeworks
//!
//! Path helpers that turn web framework routes into OpenAPI path items.
//!
//! ## Overview
//!
//! Each framework module provides a [`Plugin`](spec::Plugin) that, given the
//! framework's own handle on a route, does three things:
//!
//! 1. **Resolve** the route the handler is registered under, failing loudly when
//!    it is missing or ambiguous.
//! 2. **Extract** the YAML block embedded in handler docstrings and merge it into
//!    the operations map, keyed by lower-case HTTP method.
//! 3. **Translate** the framework's placeholder syntax into an OpenAPI path
//!    template such as `/pets/{pet_id}`.
//!
//! ## Architecture
//!
//! - **[`spec`]** - the [`Plugin`](spec::Plugin) trait and the [`ApiSpec`](spec::ApiSpec) document builder
//! - **[`flask`]** - view functions, class-based views and documented blueprints
//! - **[`bottle`]** - callbacks on a Bottle application or the default application
//! - **[`chalice`]** - view functions bound to several methods
//! - **[`tornado`]** - regex urlspecs reversed into path templates
//! - **[`aiohttp`]** - routes on resources with canonical paths
//! - **[`handler`]** - identity-compared handler descriptors shared by all registries
//! - **[`yaml_utils`]** - docstring trimming and YAML extraction
//! - **[`config`]** / **[`logging`]** - environment configuration and `tracing` setup
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
//!     .doc(
//!         "Gist detail view.
//!         ---
//!         x-extension: metadata
//!         get:
//!             responses:
//!                 200:
//!                     schema:
//!                         $ref: '#/definitions/Gist'
//!         ",
//!     )
//!     .params(["gist_id"])
//!     .build();
//! app.route("/gists/<gist_id>", None, &gist_detail)?;
//!
//! let mut spec = ApiSpec::new("Gisty", "1.0.0", "2.0").plugin(FlaskPlugin::new());
//! spec.path(PathArgs::new().view(&gist_detail).app(&app))?;
//!
//! let item = &spec.paths()["/gists/{gist_id}"];
//! assert_eq!(item["x-extension"], "metadata");
//! assert!(item.contains_key("get"));
//! # Ok(())
//! # }
//! ```

pub mod aiohttp;
pub mod bottle;
pub mod chalice;
pub mod config;
pub mod error;
pub mod flask;
pub mod handler;
pub mod logging;
pub mod spec;
pub mod tornado;
pub mod yaml_utils;

pub use error::{RegistryError, SpecError};
pub use spec::{ApiSpec, Operations, PathArgs, PathKwargs, Plugin};
