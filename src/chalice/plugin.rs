use super::app::Chalice;
use crate::error::SpecError;
use crate::handler::{parse_method, Handler};
use crate::spec::{AppRef, Operations, PathKwargs, Plugin};
use crate::yaml_utils::{is_path_key, load_operations_from_docstring};
use http::Method;
use serde_yaml::Value;
use tracing::{debug, warn};

/// Path helper resolving Chalice view functions.
///
/// Reads `view` and the required `app`. Chalice paths already use `{name}`
/// placeholders and are returned as registered.
#[derive(Debug, Default, Clone, Copy)]
pub struct ChalicePlugin;

impl ChalicePlugin {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Path serving `view` for the documented methods, or for every method
    /// when none is documented.
    fn route_for_view(
        app: &Chalice,
        operations: &Operations,
        view: &Handler,
    ) -> Result<String, SpecError> {
        let documented: Vec<Method> = operations
            .keys()
            .filter_map(Value::as_str)
            .filter(|key| is_path_key(key))
            .filter_map(|key| parse_method(key).ok())
            .collect();

        let mut matched: Vec<&str> = Vec::new();
        for entry in app.routes().values().flat_map(|methods| methods.values()) {
            if entry.view_function() != view {
                continue;
            }
            if documented.is_empty() || documented.contains(entry.method()) {
                matched.push(entry.uri_pattern());
            }
        }

        let Some(&route) = matched.first() else {
            warn!(view = %view, app = %app.app_name(), "No Chalice route for view");
            return Err(SpecError::RouteNotFound {
                view: view.to_string(),
            });
        };
        if matched.iter().any(|&path| path != route) {
            warn!(view = %view, app = %app.app_name(), "View bound to several paths");
            return Err(SpecError::MethodMismatch {
                view: view.to_string(),
            });
        }
        Ok(route.to_string())
    }
}

impl Plugin for ChalicePlugin {
    fn path_helper(
        &self,
        _path: Option<&str>,
        operations: &mut Operations,
        _parameters: &mut Vec<Value>,
        kwargs: &PathKwargs<'_>,
    ) -> Result<Option<String>, SpecError> {
        let view = kwargs.view.ok_or(SpecError::MissingArgument {
            plugin: "Chalice",
            argument: "view",
        })?;
        let app = match kwargs.app {
            Some(AppRef::Chalice(app)) => app,
            Some(other) => {
                return Err(SpecError::UnexpectedApplication {
                    expected: "Chalice",
                    found: other.kind(),
                })
            }
            None => {
                return Err(SpecError::MissingArgument {
                    plugin: "Chalice",
                    argument: "app",
                })
            }
        };

        operations.extend(load_operations_from_docstring(
            view.doc().unwrap_or_default(),
        )?);
        let path = Self::route_for_view(app, operations, view)?;
        debug!(view = %view, path = %path, "Chalice view resolved");
        Ok(Some(path))
    }
}
