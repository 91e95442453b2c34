use crate::error::RegistryError;
use crate::handler::{parse_method, Handler};
use http::Method;
use indexmap::IndexMap;
use tracing::debug;

/// View bound to one path and method.
#[derive(Debug, Clone)]
pub struct RouteEntry {
    view_function: Handler,
    method: Method,
    uri_pattern: String,
}

impl RouteEntry {
    #[must_use]
    pub fn view_function(&self) -> &Handler {
        &self.view_function
    }

    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Path with `{name}` placeholders.
    #[must_use]
    pub fn uri_pattern(&self) -> &str {
        &self.uri_pattern
    }
}

/// Chalice application: path → method → route entry.
#[derive(Debug, Clone)]
pub struct Chalice {
    app_name: String,
    routes: IndexMap<String, IndexMap<Method, RouteEntry>>,
}

impl Chalice {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            routes: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Bind `view` to `path` for each method (`GET` by default).
    ///
    /// # Errors
    ///
    /// [`RegistryError::DuplicateMethod`] when a method is already bound under
    /// `path`, [`RegistryError::InvalidMethod`] for a method that is not an
    /// HTTP token. Nothing is registered on error.
    pub fn route(
        &mut self,
        path: &str,
        methods: Option<&[&str]>,
        view: &Handler,
    ) -> Result<(), RegistryError> {
        let methods = match methods {
            Some(methods) => methods
                .iter()
                .map(|method| parse_method(method))
                .collect::<Result<Vec<_>, _>>()?,
            None => vec![Method::GET],
        };

        if let Some(existing) = self.routes.get(path) {
            if let Some(method) = methods.iter().find(|method| existing.contains_key(*method)) {
                return Err(RegistryError::DuplicateMethod {
                    path: path.to_string(),
                    method: method.to_string(),
                });
            }
        }

        let entries = self.routes.entry(path.to_string()).or_default();
        for method in methods {
            debug!(app = %self.app_name, path = %path, method = %method, view = %view, "Chalice route added");
            entries.insert(
                method.clone(),
                RouteEntry {
                    view_function: view.clone(),
                    method,
                    uri_pattern: path.to_string(),
                },
            );
        }
        Ok(())
    }

    /// Route table keyed by path, then method.
    #[must_use]
    pub fn routes(&self) -> &IndexMap<String, IndexMap<Method, RouteEntry>> {
        &self.routes
    }
}
