use super::app::{current_app, FlaskApp, Rule};
use crate::error::SpecError;
use crate::handler::{parse_method, Handler};
use crate::spec::{AppRef, Operations, PathKwargs, Plugin};
use crate::yaml_utils::{is_path_key, load_operations_from_docstring, load_yaml_from_docstring};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_yaml::Value;
use tracing::{debug, warn};

// `<name>` and `<converter:name>`, converter arguments included
static RE_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<(?:[^:<>]+:)?([^<>]+)>").expect("Flask rule placeholder regex is valid")
});

/// Convert a Flask URL rule to an OpenAPI path template.
///
/// ```rust
/// use apispec_webframeworks::flask::flask_path_to_openapi;
///
/// assert_eq!(flask_path_to_openapi("/pet/<int:pet_id>"), "/pet/{pet_id}");
/// ```
#[must_use]
pub fn flask_path_to_openapi(path: &str) -> String {
    RE_URL.replace_all(path, "{${1}}").into_owned()
}

/// Path helper resolving Flask view functions.
///
/// Reads `view` and, optionally, `app`; without `app` the application of the
/// innermost active context is used.
#[derive(Debug, Default, Clone, Copy)]
pub struct FlaskPlugin;

impl FlaskPlugin {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn rule_for_view(app: &FlaskApp, view: &Handler) -> Result<Rule, SpecError> {
        let endpoint = app
            .view_functions()
            .into_iter()
            .filter(|(_, func)| func == view)
            .map(|(endpoint, _)| endpoint)
            .last();

        let Some(endpoint) = endpoint else {
            warn!(view = %view, app = %app.name(), "No endpoint for view");
            return Err(SpecError::EndpointNotFound {
                view: view.to_string(),
            });
        };

        app.rules_for_endpoint(&endpoint)
            .into_iter()
            .next()
            .ok_or_else(|| SpecError::EndpointNotFound {
                view: view.to_string(),
            })
    }
}

impl Plugin for FlaskPlugin {
    fn path_helper(
        &self,
        _path: Option<&str>,
        operations: &mut Operations,
        _parameters: &mut Vec<Value>,
        kwargs: &PathKwargs<'_>,
    ) -> Result<Option<String>, SpecError> {
        let view = kwargs.view.ok_or(SpecError::MissingArgument {
            plugin: "Flask",
            argument: "view",
        })?;
        let app = match kwargs.app {
            Some(AppRef::Flask(app)) => app.clone(),
            Some(other) => {
                return Err(SpecError::UnexpectedApplication {
                    expected: "Flask",
                    found: other.kind(),
                })
            }
            None => current_app().ok_or(SpecError::NoApplicationContext)?,
        };

        let rule = Self::rule_for_view(&app, view)?;
        let doc = view
            .doc()
            .filter(|doc| !doc.is_empty())
            .ok_or_else(|| SpecError::MissingDocstring {
                view: view.to_string(),
            })?;
        operations.extend(load_operations_from_docstring(doc)?);

        if let Some(class) = view.view_class() {
            for (name, method) in class.methods().filter(|(name, _)| is_path_key(name)) {
                if !parse_method(name).is_ok_and(|method| rule.allows(&method)) {
                    continue;
                }
                let operation = load_yaml_from_docstring(method.doc().unwrap_or_default())?;
                operations.insert(Value::String(name.to_string()), Value::Mapping(operation));
            }
        }

        let path = flask_path_to_openapi(rule.rule());
        debug!(
            view = %view,
            endpoint = %rule.endpoint(),
            path = %path,
            "Flask view resolved"
        );
        Ok(Some(path))
    }
}
