use crate::error::RegistryError;
use crate::handler::{parse_method, Handler};
use http::Method;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

static DEFAULT_APP: Lazy<Bottle> = Lazy::new(Bottle::new);

/// One route record: a rule, a single method and the callback serving it.
#[derive(Debug, Clone)]
pub struct Route {
    rule: String,
    method: Method,
    callback: Handler,
}

impl Route {
    /// The rule string, e.g. `/pet/<pet_id:int>`.
    #[must_use]
    pub fn rule(&self) -> &str {
        &self.rule
    }

    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    #[must_use]
    pub fn callback(&self) -> &Handler {
        &self.callback
    }
}

/// Bottle application: an ordered list of route records.
///
/// Clones share the same list.
#[derive(Debug, Clone, Default)]
pub struct Bottle {
    routes: Arc<RwLock<Vec<Route>>>,
}

impl Bottle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `callback` to `path`, one route record per method (`GET` by default).
    ///
    /// # Errors
    ///
    /// [`RegistryError::InvalidMethod`] for a method that is not an HTTP token;
    /// nothing is registered in that case.
    pub fn route(
        &self,
        path: &str,
        methods: Option<&[&str]>,
        callback: &Handler,
    ) -> Result<(), RegistryError> {
        let methods = match methods {
            Some(methods) => methods
                .iter()
                .map(|method| parse_method(method))
                .collect::<Result<Vec<_>, _>>()?,
            None => vec![Method::GET],
        };

        let mut routes = self.routes.write();
        for method in methods {
            debug!(rule = %path, method = %method, callback = %callback, "Bottle route added");
            routes.push(Route {
                rule: path.to_string(),
                method,
                callback: callback.clone(),
            });
        }
        Ok(())
    }

    /// Snapshot of the route records in registration order.
    #[must_use]
    pub fn routes(&self) -> Vec<Route> {
        self.routes.read().clone()
    }

    /// First route whose callback is `view`.
    #[must_use]
    pub fn route_for(&self, view: &Handler) -> Option<Route> {
        self.routes
            .read()
            .iter()
            .find(|route| route.callback() == view)
            .cloned()
    }
}

/// The process-wide default application.
#[must_use]
pub fn default_app() -> Bottle {
    DEFAULT_APP.clone()
}

/// Register a route on the default application.
///
/// # Errors
///
/// Same as [`Bottle::route`].
pub fn route(path: &str, methods: Option<&[&str]>, callback: &Handler) -> Result<(), RegistryError> {
    DEFAULT_APP.route(path, methods, callback)
}
