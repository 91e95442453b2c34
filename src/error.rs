use std::fmt;

/// Error raised while resolving a route or extracting its documentation.
///
/// Every variant is fatal for the route being documented and carries enough
/// context (view, route or urlspec) to locate the misconfiguration.
#[derive(Debug)]
pub enum SpecError {
    /// A plugin was called without the keyword argument it identifies routes by
    MissingArgument {
        /// Plugin that rejected the call
        plugin: &'static str,
        /// Name of the missing argument (`view`, `route`, `urlspec`, `app`)
        argument: &'static str,
    },
    /// The primary handler has no docstring at all
    MissingDocstring {
        /// Handler name
        view: String,
    },
    /// No endpoint in the application's view table maps to the handler
    EndpointNotFound {
        /// Handler name
        view: String,
    },
    /// No route record (or no documented method) is bound to the handler
    RouteNotFound {
        /// Handler name
        view: String,
    },
    /// The handler is bound to several paths through different methods
    MethodMismatch {
        /// Handler name
        view: String,
    },
    /// The `app` argument belongs to another framework
    UnexpectedApplication {
        /// Application type the plugin works with
        expected: &'static str,
        /// Application type that was supplied
        found: &'static str,
    },
    /// No `app` argument and no active application context
    NoApplicationContext,
    /// A urlspec's handler class documents no operation and no extension
    UrlSpecNotDocumented {
        /// Rendered urlspec
        urlspec: String,
    },
    /// A URL pattern with groups is too complex to be turned back into a path
    UnreversiblePattern {
        /// The regex pattern
        pattern: String,
    },
    /// The number of parameter names does not match the template slots
    TemplateArity {
        /// Reversed `%s` template
        template: String,
        /// Number of `%s` slots in the template
        expected: usize,
        /// Number of parameter names available
        found: usize,
    },
    /// No plugin produced a path and none was given
    PathNotSpecified,
    /// The YAML block of a docstring is not a mapping
    DocstringNotMapping {
        /// First line of the trimmed docstring
        summary: String,
    },
    /// The YAML block of a docstring could not be parsed
    Yaml(serde_yaml::Error),
    /// The spec document could not be rendered as JSON
    Json(serde_json::Error),
    /// A route registration made while documenting failed
    Registry(RegistryError),
}

impl fmt::Display for SpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecError::MissingArgument { plugin, argument } => {
                write!(f, "{} path helper requires the `{}` argument", plugin, argument)
            }
            SpecError::MissingDocstring { view } => {
                write!(f, "Expected view {} to have a docstring", view)
            }
            SpecError::EndpointNotFound { view } => {
                write!(f, "Could not find endpoint for view {}", view)
            }
            SpecError::RouteNotFound { view } => {
                write!(f, "Could not find endpoint for route {}", view)
            }
            SpecError::MethodMismatch { view } => {
                write!(f, "Method mismatch for route {}", view)
            }
            SpecError::UnexpectedApplication { expected, found } => {
                write!(f, "Expected a {} application, got a {} application", expected, found)
            }
            SpecError::NoApplicationContext => {
                write!(
                    f,
                    "Working outside of application context: pass `app` or push an application context"
                )
            }
            SpecError::UrlSpecNotDocumented { urlspec } => {
                write!(f, "Could not find endpoint for urlspec {}", urlspec)
            }
            SpecError::UnreversiblePattern { pattern } => {
                write!(f, "Cannot reverse URL pattern {:?} into a path template", pattern)
            }
            SpecError::TemplateArity {
                template,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Path template {:?} has {} placeholder(s) but {} parameter name(s) were found",
                    template, expected, found
                )
            }
            SpecError::PathNotSpecified => write!(f, "Path template is not specified."),
            SpecError::DocstringNotMapping { summary } => {
                write!(f, "YAML section of docstring {:?} is not a mapping", summary)
            }
            SpecError::Yaml(err) => write!(f, "Invalid YAML in docstring: {}", err),
            SpecError::Json(err) => write!(f, "Failed to render spec as JSON: {}", err),
            SpecError::Registry(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for SpecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SpecError::Yaml(err) => Some(err),
            SpecError::Json(err) => Some(err),
            SpecError::Registry(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_yaml::Error> for SpecError {
    fn from(err: serde_yaml::Error) -> Self {
        SpecError::Yaml(err)
    }
}

impl From<serde_json::Error> for SpecError {
    fn from(err: serde_json::Error) -> Self {
        SpecError::Json(err)
    }
}

impl From<RegistryError> for SpecError {
    fn from(err: RegistryError) -> Self {
        SpecError::Registry(err)
    }
}

/// Error raised by the framework registry models while routes are registered.
#[derive(Debug)]
pub enum RegistryError {
    /// An endpoint is already mapped to a different view function
    EndpointOverwrite {
        /// The endpoint name
        endpoint: String,
    },
    /// A path/method pair is already bound to a view
    DuplicateMethod {
        /// Route path
        path: String,
        /// HTTP method
        method: String,
    },
    /// A method name is not a valid HTTP method token
    InvalidMethod {
        /// The rejected method name
        method: String,
    },
    /// A URL pattern is not a valid regular expression
    InvalidPattern {
        /// The offending pattern
        pattern: String,
        /// Compilation error
        source: regex::Error,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::EndpointOverwrite { endpoint } => {
                write!(
                    f,
                    "View function mapping is overwriting an existing endpoint function: {}",
                    endpoint
                )
            }
            RegistryError::DuplicateMethod { path, method } => {
                write!(f, "Duplicate method: '{}' detected for route: '{}'", method, path)
            }
            RegistryError::InvalidMethod { method } => {
                write!(f, "Invalid HTTP method: {:?}", method)
            }
            RegistryError::InvalidPattern { pattern, source } => {
                write!(f, "Invalid URL pattern {:?}: {}", pattern, source)
            }
        }
    }
}

impl std::error::Error for RegistryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RegistryError::InvalidPattern { source, .. } => Some(source),
            _ => None,
        }
    }
}
