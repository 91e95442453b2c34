use crate::aiohttp::Route;
use crate::bottle::Bottle;
use crate::chalice::Chalice;
use crate::flask::FlaskApp;
use crate::handler::Handler;
use crate::tornado::UrlSpec;
use serde_yaml::{Mapping, Value};

/// Operations of one path item: lower-case HTTP method (or `x-` extension key)
/// mapped to an operation object.
pub type Operations = Mapping;

/// Application object passed through the `app` keyword argument.
#[derive(Debug, Clone, Copy)]
pub enum AppRef<'a> {
    /// A [`FlaskApp`] handle
    Flask(&'a FlaskApp),
    /// A [`Bottle`] handle
    Bottle(&'a Bottle),
    /// A [`Chalice`] application
    Chalice(&'a Chalice),
}

impl AppRef<'_> {
    /// Framework name, used in error messages.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            AppRef::Flask(_) => "Flask",
            AppRef::Bottle(_) => "Bottle",
            AppRef::Chalice(_) => "Chalice",
        }
    }
}

impl<'a> From<&'a FlaskApp> for AppRef<'a> {
    fn from(app: &'a FlaskApp) -> Self {
        AppRef::Flask(app)
    }
}

impl<'a> From<&'a Bottle> for AppRef<'a> {
    fn from(app: &'a Bottle) -> Self {
        AppRef::Bottle(app)
    }
}

impl<'a> From<&'a Chalice> for AppRef<'a> {
    fn from(app: &'a Chalice) -> Self {
        AppRef::Chalice(app)
    }
}

/// Framework-specific keyword arguments identifying the route to document.
///
/// Each plugin reads the fields it understands: `view` (+ `app`) for Flask,
/// Bottle and Chalice, `route` for aiohttp and `urlspec` for Tornado.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathKwargs<'a> {
    /// View function or callback registered on an application
    pub view: Option<&'a Handler>,
    /// Application to search; Flask and Bottle fall back to the ambient one
    pub app: Option<AppRef<'a>>,
    /// aiohttp route, method included
    pub route: Option<&'a Route>,
    /// Tornado URL spec
    pub urlspec: Option<&'a UrlSpec>,
}

impl<'a> PathKwargs<'a> {
    /// Set `view`.
    pub fn view(mut self, view: &'a Handler) -> Self {
        self.view = Some(view);
        self
    }

    /// Set `app` from any supported application reference.
    pub fn app(mut self, app: impl Into<AppRef<'a>>) -> Self {
        self.app = Some(app.into());
        self
    }

    /// Set `route`.
    pub fn route(mut self, route: &'a Route) -> Self {
        self.route = Some(route);
        self
    }

    /// Set `urlspec`.
    pub fn urlspec(mut self, urlspec: &'a UrlSpec) -> Self {
        self.urlspec = Some(urlspec);
        self
    }
}

/// Arguments of [`ApiSpec::path`](super::ApiSpec::path).
///
/// ```rust,ignore
/// spec.path(PathArgs::new().view(&gist_detail).app(&app))?;
/// ```
#[derive(Debug, Default)]
pub struct PathArgs<'a> {
    /// Explicit path template; plugins may replace it
    pub path: Option<String>,
    /// Caller-documented operations, merged with what plugins extract
    pub operations: Operations,
    /// Path item summary
    pub summary: Option<String>,
    /// Path item description
    pub description: Option<String>,
    /// Path-level parameters
    pub parameters: Vec<Value>,
    /// Framework arguments handed to every plugin
    pub kwargs: PathKwargs<'a>,
}

impl<'a> PathArgs<'a> {
    /// Empty arguments; a plugin or [`PathArgs::path`] must supply the path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Explicit path template.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Operations documented by the caller.
    pub fn operations(mut self, operations: Operations) -> Self {
        self.operations = operations;
        self
    }

    /// Path item summary.
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Path item description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Path-level parameters.
    pub fn parameters(mut self, parameters: Vec<Value>) -> Self {
        self.parameters = parameters;
        self
    }

    /// Shorthand for [`PathKwargs::view`].
    pub fn view(mut self, view: &'a Handler) -> Self {
        self.kwargs = self.kwargs.view(view);
        self
    }

    /// Shorthand for [`PathKwargs::app`].
    pub fn app(mut self, app: impl Into<AppRef<'a>>) -> Self {
        self.kwargs = self.kwargs.app(app);
        self
    }

    /// Shorthand for [`PathKwargs::route`].
    pub fn route(mut self, route: &'a Route) -> Self {
        self.kwargs = self.kwargs.route(route);
        self
    }

    /// Shorthand for [`PathKwargs::urlspec`].
    pub fn urlspec(mut self, urlspec: &'a UrlSpec) -> Self {
        self.kwargs = self.kwargs.urlspec(urlspec);
        self
    }
}
