//! Route definition shortcuts for [`Application::add_routes`](super::Application::add_routes).

use super::router::RouteDef;
use crate::error::RegistryError;
use crate::handler::{parse_method, Handler};
use http::Method;

fn def(method: Method, path: &str, handler: &Handler) -> RouteDef {
    RouteDef {
        method,
        path: path.to_string(),
        handler: handler.clone(),
        allow_head: true,
        name: None,
    }
}

/// `GET` route; a `HEAD` route is registered alongside it.
pub fn get(path: &str, handler: &Handler) -> RouteDef {
    def(Method::GET, path, handler)
}

/// `GET` route without the implicit `HEAD` route.
pub fn get_without_head(path: &str, handler: &Handler) -> RouteDef {
    RouteDef {
        allow_head: false,
        ..def(Method::GET, path, handler)
    }
}

pub fn head(path: &str, handler: &Handler) -> RouteDef {
    def(Method::HEAD, path, handler)
}

pub fn post(path: &str, handler: &Handler) -> RouteDef {
    def(Method::POST, path, handler)
}

pub fn put(path: &str, handler: &Handler) -> RouteDef {
    def(Method::PUT, path, handler)
}

pub fn patch(path: &str, handler: &Handler) -> RouteDef {
    def(Method::PATCH, path, handler)
}

pub fn delete(path: &str, handler: &Handler) -> RouteDef {
    def(Method::DELETE, path, handler)
}

/// Route for an arbitrary method.
///
/// # Errors
///
/// [`RegistryError::InvalidMethod`] for a method that is not an HTTP token.
pub fn route(method: &str, path: &str, handler: &Handler) -> Result<RouteDef, RegistryError> {
    Ok(def(parse_method(method)?, path, handler))
}
