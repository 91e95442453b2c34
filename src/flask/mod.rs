//! # Flask Module
//!
//! Path helper for Flask view functions, plus the pieces of Flask's registry
//! it reads from.
//!
//! ## Overview
//!
//! - [`FlaskApp`] keeps the endpoint → view function table and the URL rules
//!   bound to each endpoint. [`FlaskApp::app_context`] makes an application the
//!   current one for the thread.
//! - [`MethodView::as_view`] turns a [`HandlerClass`](crate::handler::HandlerClass)
//!   into a view function dispatching on the request method.
//! - [`FlaskPlugin`] resolves a view to its first rule, merges the operations
//!   from the view docstring and, for class-based views, the docstring of each
//!   method the rule allows, then translates `<converter:name>` placeholders.
//! - [`DocumentedBlueprint`] documents its views when registered.
//!
//! ## Example
//!
//! ```rust
//! use apispec_webframeworks::flask::{FlaskApp, FlaskPlugin, MethodView};
//! use apispec_webframeworks::handler::{Handler, HandlerClass};
//! use apispec_webframeworks::spec::{ApiSpec, PathArgs};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let gists = HandlerClass::builder("GistApi")
//!     .doc("Gist API.\n---\nx-extension: metadata\n")
//!     .method("get", Handler::builder("get").doc("Gist view\n---\ndescription: list\n").build())
//!     .method("post", Handler::builder("post").build())
//!     .build();
//! let method_view = MethodView::as_view(&gists, "gists");
//!
//! let app = FlaskApp::new("app");
//! app.add_url_rule("/gists", None, &method_view, None)?;
//!
//! let mut spec = ApiSpec::new("Gisty", "1.0.0", "3.0.2").plugin(FlaskPlugin::new());
//! {
//!     let _ctx = app.app_context();
//!     spec.path(PathArgs::new().view(&method_view))?;
//! }
//! let item = &spec.paths()["/gists"];
//! assert!(item.contains_key("get"));
//! assert!(item.contains_key("post"));
//! assert!(item.contains_key("x-extension"));
//! # Ok(())
//! # }
//! ```

mod app;
mod blueprint;
mod plugin;


pub use app::{current_app, AppContext, FlaskApp, MethodView, Rule};
pub use blueprint::DocumentedBlueprint;
pub use plugin::{flask_path_to_openapi, FlaskPlugin};
