//! # Tornado Module
//!
//! Path helper for Tornado urlspecs.
//!
//! ## Overview
//!
//! A Tornado route is a regex bound to a request handler class. [`UrlSpec`]
//! compiles the regex and reverses it into a `%s` template the way Tornado
//! does for `reverse_url`. [`TornadoPlugin`] then names the template slots after
//! the pattern's named groups (or the parameters of the first documented
//! method) and collects one operation per documented HTTP method.
//!
//! ## Example
//!
//! ```rust
//! use apispec_webframeworks::handler::{Handler, HandlerClass};
//! use apispec_webframeworks::spec::{ApiSpec, PathArgs};
//! use apispec_webframeworks::tornado::{TornadoPlugin, UrlSpec};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let hello = HandlerClass::builder("HelloHandler")
//!     .method(
//!         "get",
//!         Handler::builder("get")
//!             .doc("Get a greeting endpoint.\n---\ndescription: Get a greeting\n")
//!             .build(),
//!     )
//!     .build();
//! let urlspec = UrlSpec::new(r"/hello", &hello)?;
//!
//! let mut spec = ApiSpec::new("Greeter", "1.0.0", "3.0.2").plugin(TornadoPlugin::new());
//! spec.path(PathArgs::new().urlspec(&urlspec))?;
//! assert!(spec.paths()["/hello"].contains_key("get"));
//! # Ok(())
//! # }
//! ```

mod plugin;
mod urlspec;


pub use plugin::{tornado_path_to_openapi, TornadoPlugin};
pub use urlspec::UrlSpec;
