//! # aiohttp Module
//!
//! Path helper for aiohttp routes.
//!
//! Routes live on resources; a resource's canonical path has every
//! `{name:regex}` placeholder reduced to `{name}`, which is already an OpenAPI
//! path template. Routes are documented one by one, skipping the `HEAD` routes
//! `add_get` registers implicitly:
//!
//! ```rust
//! use apispec_webframeworks::aiohttp::{web, AiohttpPlugin, Application};
//! use apispec_webframeworks::handler::Handler;
//! use apispec_webframeworks::spec::{ApiSpec, PathArgs};
//! use http::Method;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let hello = Handler::builder("hello")
//!     .doc("Get a greeting endpoint.\n---\ndescription: Get a greeting\n")
//!     .build();
//! let mut app = Application::new();
//! app.add_routes([web::get("/hello/{name:[a-z]+}", &hello)])?;
//!
//! let mut spec = ApiSpec::new("Greeter", "1.0.0", "3.0.2").plugin(AiohttpPlugin::new());
//! for route in app.router().routes() {
//!     if *route.method() == Method::HEAD {
//!         continue;
//!     }
//!     spec.path(PathArgs::new().route(route))?;
//! }
//! assert!(spec.paths()["/hello/{name}"].contains_key("get"));
//! assert!(!spec.paths()["/hello/{name}"].contains_key("head"));
//! # Ok(())
//! # }
//! ```

mod plugin;
mod router;
pub mod web;


pub use plugin::AiohttpPlugin;
pub use router::{Application, Resource, Route, RouteDef, UrlDispatcher};
