use crate::error::RegistryError;
use crate::handler::{parse_method, Handler};
use http::Method;
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;
use tracing::debug;

// `{name}` and `{name:regex}`, one level of braces allowed inside the regex
static ROUTE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{([_a-zA-Z][_a-zA-Z0-9]*)(?::[^{}]*(?:\{[^{}]*\}[^{}]*)*)?\}")
        .expect("aiohttp placeholder regex is valid")
});

/// A path shared by the routes registered on it.
#[derive(Debug)]
pub struct Resource {
    path: String,
    canonical: String,
    name: Option<String>,
}

impl Resource {
    fn new(path: &str, name: Option<&str>) -> Self {
        Self {
            path: path.to_string(),
            canonical: ROUTE_RE.replace_all(path, "{${1}}").into_owned(),
            name: name.map(str::to_string),
        }
    }

    /// Path as registered, placeholder regexes included.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Path with every `{name:regex}` reduced to `{name}`.
    #[must_use]
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// Name given at registration, used for URL reversal.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Whether the resource dynamically matches path parameters.
    #[must_use]
    pub fn is_dynamic(&self) -> bool {
        ROUTE_RE.is_match(&self.path)
    }
}

/// A method and handler registered on a resource.
#[derive(Debug, Clone)]
pub struct Route {
    method: Method,
    handler: Handler,
    resource: Arc<Resource>,
}

impl Route {
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    #[must_use]
    pub fn handler(&self) -> &Handler {
        &self.handler
    }

    #[must_use]
    pub fn resource(&self) -> &Resource {
        &self.resource
    }
}

/// Resources and routes of an application in registration order.
#[derive(Debug, Default)]
pub struct UrlDispatcher {
    resources: Vec<Arc<Resource>>,
    routes: Vec<Route>,
}

impl UrlDispatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `method` on `path`.
    ///
    /// Consecutive registrations on the same path share one resource.
    ///
    /// # Errors
    ///
    /// [`RegistryError::DuplicateMethod`] when the resource already serves
    /// `method`, [`RegistryError::InvalidMethod`] for a method that is not an
    /// HTTP token.
    pub fn add_route(
        &mut self,
        method: &str,
        path: &str,
        handler: &Handler,
    ) -> Result<&Route, RegistryError> {
        self.add_named_route(method, path, handler, None)
    }

    /// Same as [`UrlDispatcher::add_route`], naming the resource.
    ///
    /// A route joins the previous resource only when both path and name match.
    ///
    /// # Errors
    ///
    /// Same as [`UrlDispatcher::add_route`].
    pub fn add_named_route(
        &mut self,
        method: &str,
        path: &str,
        handler: &Handler,
        name: Option<&str>,
    ) -> Result<&Route, RegistryError> {
        let method = parse_method(method)?;
        let resource = self.add_resource(path, name);
        if self
            .routes
            .iter()
            .any(|route| Arc::ptr_eq(&route.resource, &resource) && route.method == method)
        {
            return Err(RegistryError::DuplicateMethod {
                path: path.to_string(),
                method: method.to_string(),
            });
        }

        debug!(method = %method, path = %path, handler = %handler, "aiohttp route added");
        self.routes.push(Route {
            method,
            handler: handler.clone(),
            resource,
        });
        let index = self.routes.len() - 1;
        Ok(&self.routes[index])
    }

    /// Register `GET` and, with `allow_head`, `HEAD` for `path`.
    ///
    /// # Errors
    ///
    /// Same as [`UrlDispatcher::add_route`].
    pub fn add_get(
        &mut self,
        path: &str,
        handler: &Handler,
        allow_head: bool,
    ) -> Result<&Route, RegistryError> {
        if allow_head {
            self.add_route("HEAD", path, handler)?;
        }
        self.add_route("GET", path, handler)
    }

    /// # Errors
    ///
    /// Same as [`UrlDispatcher::add_route`].
    pub fn add_post(&mut self, path: &str, handler: &Handler) -> Result<&Route, RegistryError> {
        self.add_route("POST", path, handler)
    }

    /// # Errors
    ///
    /// Same as [`UrlDispatcher::add_route`].
    pub fn add_put(&mut self, path: &str, handler: &Handler) -> Result<&Route, RegistryError> {
        self.add_route("PUT", path, handler)
    }

    /// # Errors
    ///
    /// Same as [`UrlDispatcher::add_route`].
    pub fn add_patch(&mut self, path: &str, handler: &Handler) -> Result<&Route, RegistryError> {
        self.add_route("PATCH", path, handler)
    }

    /// # Errors
    ///
    /// Same as [`UrlDispatcher::add_route`].
    pub fn add_delete(&mut self, path: &str, handler: &Handler) -> Result<&Route, RegistryError> {
        self.add_route("DELETE", path, handler)
    }

    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn resources(&self) -> impl Iterator<Item = &Resource> {
        self.resources.iter().map(|resource| resource.as_ref())
    }

    fn add_resource(&mut self, path: &str, name: Option<&str>) -> Arc<Resource> {
        if let Some(last) = self.resources.last() {
            if last.name.as_deref() == name && last.path == path {
                return Arc::clone(last);
            }
        }
        let resource = Arc::new(Resource::new(path, name));
        self.resources.push(Arc::clone(&resource));
        resource
    }
}

/// Deferred route registration, built with the functions in [`web`](super::web).
#[derive(Debug, Clone)]
pub struct RouteDef {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) handler: Handler,
    pub(crate) allow_head: bool,
    pub(crate) name: Option<String>,
}

impl RouteDef {
    /// Name the resource the route is registered on.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub(crate) fn register(&self, router: &mut UrlDispatcher) -> Result<(), RegistryError> {
        let name = self.name.as_deref();
        if self.method == Method::GET && self.allow_head {
            router.add_named_route("HEAD", &self.path, &self.handler, name)?;
        }
        router.add_named_route(self.method.as_str(), &self.path, &self.handler, name)?;
        Ok(())
    }
}

/// Application owning a [`UrlDispatcher`].
#[derive(Debug, Default)]
pub struct Application {
    router: UrlDispatcher,
}

impl Application {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn router(&self) -> &UrlDispatcher {
        &self.router
    }

    /// Router for direct registration.
    pub fn router_mut(&mut self) -> &mut UrlDispatcher {
        &mut self.router
    }

    /// Register route definitions in order, stopping at the first error.
    ///
    /// # Errors
    ///
    /// Same as [`UrlDispatcher::add_route`].
    pub fn add_routes(
        &mut self,
        routes: impl IntoIterator<Item = RouteDef>,
    ) -> Result<(), RegistryError> {
        for route in routes {
            route.register(&mut self.router)?;
        }
        Ok(())
    }
}
