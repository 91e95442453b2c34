use super::urlspec::{fill_template, UrlSpec};
use crate::error::SpecError;
use crate::handler::{Handler, HandlerClass};
use crate::spec::{Operations, PathKwargs, Plugin};
use crate::yaml_utils::{load_yaml_from_docstring, PATH_KEYS};
use serde_yaml::{Mapping, Value};
use tracing::{debug, warn};

/// Convert a urlspec to an OpenAPI path template.
///
/// Groups are named after the pattern's named groups, else after the
/// parameters of `method`. Trailing `/`, `?` and `*` are dropped from paths
/// with more than one segment.
///
/// # Errors
///
/// [`SpecError::UnreversiblePattern`] if the pattern has no `%s` template and
/// [`SpecError::TemplateArity`] if the names do not fit its slots.
pub fn tornado_path_to_openapi(
    urlspec: &UrlSpec,
    method: Option<&Handler>,
) -> Result<String, SpecError> {
    let template = urlspec
        .path_template()
        .ok_or_else(|| SpecError::UnreversiblePattern {
            pattern: urlspec.regex().as_str().to_string(),
        })?;

    let path = if urlspec.groups() > 0 {
        let names: Vec<&str> = urlspec.group_names().collect();
        let args: Vec<String> = if names.is_empty() {
            method
                .map(Handler::params)
                .unwrap_or_default()
                .iter()
                .map(|param| format!("{{{}}}", param))
                .collect()
        } else {
            names.iter().map(|name| format!("{{{}}}", name)).collect()
        };
        fill_template(template, &args).map_err(|slots| SpecError::TemplateArity {
            template: template.to_string(),
            expected: slots,
            found: args.len(),
        })?
    } else {
        template.to_string()
    };

    if path.matches('/').count() > 1 {
        Ok(path
            .trim_end_matches(|c| matches!(c, '/' | '?' | '*'))
            .to_string())
    } else {
        Ok(path)
    }
}

/// Path helper documenting Tornado urlspecs.
///
/// Reads `urlspec`. Each HTTP method of the handler class documents its own
/// operation; the class docstring contributes extensions.
#[derive(Debug, Default, Clone, Copy)]
pub struct TornadoPlugin;

impl TornadoPlugin {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn operations_from_methods(class: &HandlerClass) -> Result<Vec<(&str, Mapping)>, SpecError> {
        let mut operations = Vec::new();
        for method in PATH_KEYS {
            let Some(handler) = class.method(method) else {
                continue;
            };
            let operation = load_yaml_from_docstring(handler.doc().unwrap_or_default())?;
            if !operation.is_empty() {
                operations.push((method, operation));
            }
        }
        Ok(operations)
    }
}

impl Plugin for TornadoPlugin {
    fn path_helper(
        &self,
        _path: Option<&str>,
        operations: &mut Operations,
        _parameters: &mut Vec<Value>,
        kwargs: &PathKwargs<'_>,
    ) -> Result<Option<String>, SpecError> {
        let urlspec = kwargs.urlspec.ok_or(SpecError::MissingArgument {
            plugin: "Tornado",
            argument: "urlspec",
        })?;
        let class = urlspec.handler_class();

        for (method, operation) in Self::operations_from_methods(class)? {
            operations.insert(Value::String(method.to_string()), Value::Mapping(operation));
        }
        let extensions = load_yaml_from_docstring(class.doc().unwrap_or_default())?;
        if operations.is_empty() && extensions.is_empty() {
            warn!(urlspec = %urlspec, "Handler class documents nothing");
            return Err(SpecError::UrlSpecNotDocumented {
                urlspec: urlspec.to_string(),
            });
        }

        let params_method = operations
            .keys()
            .filter_map(Value::as_str)
            .find_map(|key| class.method(key));
        let path = tornado_path_to_openapi(urlspec, params_method)?;
        operations.extend(extensions);

        debug!(urlspec = %urlspec, path = %path, "Tornado urlspec resolved");
        Ok(Some(path))
    }
}
