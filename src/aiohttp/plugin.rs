use crate::error::SpecError;
use crate::spec::{Operations, PathKwargs, Plugin};
use crate::yaml_utils::load_yaml_from_docstring;
use serde_yaml::Value;
use tracing::debug;

/// Path helper documenting aiohttp routes.
///
/// Reads `route`. The handler docstring's YAML block becomes the operation for
/// the route's method; the path is the resource's canonical form.
#[derive(Debug, Default, Clone, Copy)]
pub struct AiohttpPlugin;

impl AiohttpPlugin {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Plugin for AiohttpPlugin {
    fn path_helper(
        &self,
        _path: Option<&str>,
        operations: &mut Operations,
        _parameters: &mut Vec<Value>,
        kwargs: &PathKwargs<'_>,
    ) -> Result<Option<String>, SpecError> {
        let route = kwargs.route.ok_or(SpecError::MissingArgument {
            plugin: "aiohttp",
            argument: "route",
        })?;

        let operation = load_yaml_from_docstring(route.handler().doc().unwrap_or_default())?;
        operations.insert(
            Value::String(route.method().as_str().to_ascii_lowercase()),
            Value::Mapping(operation),
        );

        let path = route.resource().canonical().to_string();
        debug!(method = %route.method(), handler = %route.handler(), path = %path, "aiohttp route resolved");
        Ok(Some(path))
    }
}
