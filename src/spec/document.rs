use super::types::{Operations, PathArgs};
use super::Plugin;
use crate::config::SpecConfig;
use crate::error::SpecError;
use indexmap::IndexMap;
use serde::Serialize;
use serde_yaml::Value;
use tracing::debug;

#[derive(Serialize)]
struct Info<'a> {
    title: &'a str,
    version: &'a str,
}

#[derive(Serialize)]
struct Document<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    swagger: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    openapi: Option<&'a str>,
    info: Info<'a>,
    paths: &'a IndexMap<String, Operations>,
}

/// Minimal spec document assembled from plugin output.
///
/// Paths keep the order in which they were first documented; documenting a
/// path again updates its item key by key.
pub struct ApiSpec {
    title: String,
    version: String,
    openapi_version: String,
    plugins: Vec<Box<dyn Plugin>>,
    paths: IndexMap<String, Operations>,
}

impl ApiSpec {
    pub fn new(
        title: impl Into<String>,
        version: impl Into<String>,
        openapi_version: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            version: version.into(),
            openapi_version: openapi_version.into(),
            plugins: Vec::new(),
            paths: IndexMap::new(),
        }
    }

    pub fn from_config(config: &SpecConfig) -> Self {
        Self::new(&config.title, &config.version, &config.openapi_version)
    }

    /// Register a plugin; plugins run in registration order.
    #[must_use]
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn openapi_version(&self) -> &str {
        &self.openapi_version
    }

    /// Document one path.
    ///
    /// Every plugin's `path_helper` sees the same operations and parameters;
    /// the last path a plugin returns wins. The resulting operations are then
    /// merged into the path item.
    ///
    /// # Errors
    ///
    /// The first plugin error, or [`SpecError::PathNotSpecified`] when no path
    /// was given and no plugin produced one.
    pub fn path(&mut self, args: PathArgs<'_>) -> Result<&mut Self, SpecError> {
        let PathArgs {
            mut path,
            mut operations,
            summary,
            description,
            mut parameters,
            kwargs,
        } = args;

        for plugin in &self.plugins {
            if let Some(resolved) =
                plugin.path_helper(path.as_deref(), &mut operations, &mut parameters, &kwargs)?
            {
                path = Some(resolved);
            }
        }

        let path = path
            .filter(|p| !p.is_empty())
            .ok_or(SpecError::PathNotSpecified)?;

        debug!(
            path = %path,
            operations = operations.len(),
            parameters = parameters.len(),
            "Path documented"
        );

        let item = self.paths.entry(path).or_default();
        item.extend(operations);
        if let Some(summary) = summary {
            item.insert("summary".into(), Value::String(summary));
        }
        if let Some(description) = description {
            item.insert("description".into(), Value::String(description));
        }
        if !parameters.is_empty() {
            item.insert("parameters".into(), Value::Sequence(parameters));
        }

        Ok(self)
    }

    /// Documented path items keyed by OpenAPI path template.
    #[must_use]
    pub fn paths(&self) -> &IndexMap<String, Operations> {
        &self.paths
    }

    fn document(&self) -> Document<'_> {
        let is_swagger = self.openapi_version.starts_with('2');
        Document {
            swagger: is_swagger.then_some("2.0"),
            openapi: (!is_swagger).then_some(self.openapi_version.as_str()),
            info: Info {
                title: &self.title,
                version: &self.version,
            },
            paths: &self.paths,
        }
    }

    /// Render the document as a YAML value.
    ///
    /// # Errors
    ///
    /// [`SpecError::Yaml`] if a value cannot be represented.
    pub fn to_value(&self) -> Result<Value, SpecError> {
        Ok(serde_yaml::to_value(self.document())?)
    }

    /// # Errors
    ///
    /// [`SpecError::Yaml`] if a value cannot be represented.
    pub fn to_yaml(&self) -> Result<String, SpecError> {
        Ok(serde_yaml::to_string(&self.document())?)
    }

    /// # Errors
    ///
    /// [`SpecError::Json`] for keys JSON cannot express (e.g. `null` keys).
    pub fn to_json(&self) -> Result<String, SpecError> {
        Ok(serde_json::to_string_pretty(&self.document())?)
    }
}

impl std::fmt::Debug for ApiSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiSpec")
            .field("title", &self.title)
            .field("version", &self.version)
            .field("openapi_version", &self.openapi_version)
            .field("plugins", &self.plugins.len())
            .field("paths", &self.paths)
            .finish()
    }
}
