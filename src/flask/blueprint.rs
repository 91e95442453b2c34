use super::app::FlaskApp;
use crate::error::SpecError;
use crate::handler::Handler;
use crate::spec::{ApiSpec, PathArgs};
use indexmap::IndexMap;
use tracing::debug;

#[derive(Debug, Clone)]
struct DeferredRule {
    rule: String,
    endpoint: Option<String>,
    view: Handler,
    methods: Option<Vec<String>>,
}

/// Blueprint that documents the views registered on it.
///
/// Rules are recorded until the blueprint is registered on an application.
/// Registration adds them to the application with endpoints prefixed by the
/// blueprint name, then documents every view recorded as documented.
///
/// ```rust
/// use apispec_webframeworks::flask::{DocumentedBlueprint, FlaskApp, FlaskPlugin};
/// use apispec_webframeworks::handler::Handler;
/// use apispec_webframeworks::spec::ApiSpec;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let gist_detail = Handler::builder("gist_detail")
///     .doc("Gist detail view.\n---\nget:\n  description: a gist\n")
///     .build();
/// let repo_detail = Handler::builder("repo_detail")
///     .doc("Not documented.\n---\nget:\n  description: a repo\n")
///     .build();
///
/// let mut blueprint = DocumentedBlueprint::new("gistapi");
/// blueprint.route("/gists/<gist_id>", None, &gist_detail);
/// blueprint.add_url_rule("/repos/<repo_id>", None, &repo_detail, None, false);
///
/// let app = FlaskApp::new("app");
/// let mut spec = ApiSpec::new("Gisty", "1.0.0", "3.0.2").plugin(FlaskPlugin::new());
/// blueprint.register(&app, &mut spec, None)?;
///
/// assert!(spec.paths().contains_key("/gists/{gist_id}"));
/// assert!(!spec.paths().contains_key("/repos/{repo_id}"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DocumentedBlueprint {
    name: String,
    rules: Vec<DeferredRule>,
    documented_view_functions: IndexMap<String, Vec<Handler>>,
}

impl DocumentedBlueprint {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
            documented_view_functions: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Record a documented rule for `view`.
    pub fn route(&mut self, rule: &str, methods: Option<&[&str]>, view: &Handler) -> &mut Self {
        self.add_url_rule(rule, None, view, methods, true)
    }

    /// Record a rule; with `documented` the view is added to the `ApiSpec` on
    /// registration.
    pub fn add_url_rule(
        &mut self,
        rule: &str,
        endpoint: Option<&str>,
        view: &Handler,
        methods: Option<&[&str]>,
        documented: bool,
    ) -> &mut Self {
        self.rules.push(DeferredRule {
            rule: rule.to_string(),
            endpoint: endpoint.map(str::to_string),
            view: view.clone(),
            methods: methods.map(|methods| methods.iter().map(|m| m.to_string()).collect()),
        });
        if documented {
            self.documented_view_functions
                .entry(rule.to_string())
                .or_default()
                .push(view.clone());
        }
        self
    }

    /// Documented views keyed by the rule they were recorded under.
    pub fn documented_view_functions(&self) -> impl Iterator<Item = (&str, &[Handler])> {
        self.documented_view_functions
            .iter()
            .map(|(rule, views)| (rule.as_str(), views.as_slice()))
    }

    /// Register the recorded rules on `app`, optionally below `url_prefix`,
    /// and document every documented view inside the application's context.
    ///
    /// # Errors
    ///
    /// [`SpecError::Registry`] when a rule cannot be added, otherwise the
    /// first error [`ApiSpec::path`] reports. Rules added before the failure
    /// stay registered.
    pub fn register(
        &self,
        app: &FlaskApp,
        spec: &mut ApiSpec,
        url_prefix: Option<&str>,
    ) -> Result<(), SpecError> {
        for deferred in &self.rules {
            let rule = prefixed_rule(url_prefix, &deferred.rule);
            let endpoint = format!(
                "{}.{}",
                self.name,
                deferred
                    .endpoint
                    .as_deref()
                    .unwrap_or_else(|| deferred.view.name())
            );
            let methods: Option<Vec<&str>> = deferred
                .methods
                .as_ref()
                .map(|methods| methods.iter().map(String::as_str).collect());
            app.add_url_rule(&rule, Some(&endpoint), &deferred.view, methods.as_deref())?;
        }

        let _ctx = app.app_context();
        for (rule, views) in &self.documented_view_functions {
            debug!(blueprint = %self.name, rule = %rule, views = views.len(), "Documenting blueprint rule");
            for view in views {
                spec.path(PathArgs::new().view(view))?;
            }
        }
        Ok(())
    }
}

fn prefixed_rule(url_prefix: Option<&str>, rule: &str) -> String {
    match url_prefix {
        Some(prefix) if rule.is_empty() => prefix.to_string(),
        Some(prefix) => format!(
            "{}/{}",
            prefix.trim_end_matches('/'),
            rule.trim_start_matches('/')
        ),
        None => rule.to_string(),
    }
}
