use super::app::default_app;
use crate::error::SpecError;
use crate::spec::{AppRef, Operations, PathKwargs, Plugin};
use crate::yaml_utils::load_operations_from_docstring;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_yaml::Value;
use tracing::{debug, warn};

// `<name>`, `<name:filter>` and `<name:filter:config>`
static RE_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<([^<>:]+):?[^>]*>").expect("Bottle rule placeholder regex is valid"));

/// Convert a Bottle route rule to an OpenAPI path template.
///
/// ```rust
/// use apispec_webframeworks::bottle::bottle_path_to_openapi;
///
/// assert_eq!(
///     bottle_path_to_openapi("/pet/<pet_id:int>/<shop_id:re:[a-z]+>"),
///     "/pet/{pet_id}/{shop_id}"
/// );
/// ```
#[must_use]
pub fn bottle_path_to_openapi(path: &str) -> String {
    RE_URL.replace_all(path, "{${1}}").into_owned()
}

/// Path helper resolving Bottle callbacks.
///
/// Reads `view` and, optionally, `app`; without `app` the default
/// application is searched.
#[derive(Debug, Default, Clone, Copy)]
pub struct BottlePlugin;

impl BottlePlugin {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Plugin for BottlePlugin {
    fn path_helper(
        &self,
        _path: Option<&str>,
        operations: &mut Operations,
        _parameters: &mut Vec<Value>,
        kwargs: &PathKwargs<'_>,
    ) -> Result<Option<String>, SpecError> {
        let view = kwargs.view.ok_or(SpecError::MissingArgument {
            plugin: "Bottle",
            argument: "view",
        })?;
        let doc = view
            .doc()
            .filter(|doc| !doc.is_empty())
            .ok_or_else(|| SpecError::MissingDocstring {
                view: view.to_string(),
            })?;
        operations.extend(load_operations_from_docstring(doc)?);

        let route = match kwargs.app {
            Some(AppRef::Bottle(app)) => app.route_for(view),
            Some(other) => {
                return Err(SpecError::UnexpectedApplication {
                    expected: "Bottle",
                    found: other.kind(),
                })
            }
            None => default_app().route_for(view),
        };
        let Some(route) = route else {
            warn!(view = %view, "No Bottle route for callback");
            return Err(SpecError::RouteNotFound {
                view: view.to_string(),
            });
        };

        let path = bottle_path_to_openapi(route.rule());
        debug!(view = %view, method = %route.method(), path = %path, "Bottle route resolved");
        Ok(Some(path))
    }
}
