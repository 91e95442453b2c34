//! # Handler descriptors
//!
//! Framework registries store references to the callables that serve a route.
//! Resolvers look those references up again when a spec is built, so a handler
//! is an opaque identity: two [`Handler`]s compare equal only when they are
//! clones of the same registration, never because their names or docstrings
//! happen to match.
//!
//! ```rust
//! use apispec_webframeworks::handler::Handler;
//!
//! let hello = Handler::builder("hello")
//!     .doc("Greeting.\n---\nget:\n  description: hi\n")
//!     .build();
//! let alias = hello.clone();
//! let other = Handler::builder("hello").build();
//!
//! assert_eq!(hello, alias);
//! assert_ne!(hello, other);
//! ```

use crate::error::RegistryError;
use http::Method;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// Parse a method name the way the registries store it: upper-cased.
///
/// # Errors
///
/// [`RegistryError::InvalidMethod`] when the name is not an HTTP token.
pub fn parse_method(method: &str) -> Result<Method, RegistryError> {
    Method::from_bytes(method.to_ascii_uppercase().as_bytes()).map_err(|_| {
        RegistryError::InvalidMethod {
            method: method.to_string(),
        }
    })
}

#[derive(Debug)]
struct Callable {
    name: String,
    doc: Option<String>,
    params: Vec<String>,
    view_class: Option<HandlerClass>,
}

/// Identity-compared reference to a registered callable.
#[derive(Clone)]
pub struct Handler(Arc<Callable>);

impl Handler {
    /// Start describing a callable named `name`.
    pub fn builder(name: impl Into<String>) -> HandlerBuilder {
        HandlerBuilder {
            name: name.into(),
            doc: None,
            params: Vec::new(),
            view_class: None,
        }
    }

    /// Name the callable was declared with.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Raw docstring, if any.
    #[must_use]
    pub fn doc(&self) -> Option<&str> {
        self.0.doc.as_deref()
    }

    /// Declared parameter names in signature order, receiver excluded.
    #[must_use]
    pub fn params(&self) -> &[String] {
        &self.0.params
    }

    /// Class a class-based view function dispatches to.
    #[must_use]
    pub fn view_class(&self) -> Option<&HandlerClass> {
        self.0.view_class.as_ref()
    }
}

impl PartialEq for Handler {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Handler {}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<function {} at {:p}>", self.0.name, Arc::as_ptr(&self.0))
    }
}

impl fmt::Display for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<function {}>", self.0.name)
    }
}

/// Builder for [`Handler`].
#[derive(Debug)]
pub struct HandlerBuilder {
    name: String,
    doc: Option<String>,
    params: Vec<String>,
    view_class: Option<HandlerClass>,
}

impl HandlerBuilder {
    /// Attach a docstring.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Declare parameter names, receiver excluded.
    pub fn params<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.params = params.into_iter().map(Into::into).collect();
        self
    }

    /// Mark the callable as the view function of a class-based handler.
    pub fn view_class(mut self, class: HandlerClass) -> Self {
        self.view_class = Some(class);
        self
    }

    /// Finish the description; every call yields a distinct identity.
    #[must_use]
    pub fn build(self) -> Handler {
        Handler(Arc::new(Callable {
            name: self.name,
            doc: self.doc,
            params: self.params,
            view_class: self.view_class,
        }))
    }
}

#[derive(Debug)]
struct Class {
    name: String,
    doc: Option<String>,
    methods: IndexMap<String, Handler>,
}

/// Identity-compared reference to a class-based handler.
///
/// Methods are keyed by lower-case name in declaration order.
#[derive(Clone)]
pub struct HandlerClass(Arc<Class>);

impl HandlerClass {
    /// Start describing a class named `name`.
    pub fn builder(name: impl Into<String>) -> HandlerClassBuilder {
        HandlerClassBuilder {
            name: name.into(),
            doc: None,
            methods: IndexMap::new(),
        }
    }

    /// Class name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Class docstring, if any.
    #[must_use]
    pub fn doc(&self) -> Option<&str> {
        self.0.doc.as_deref()
    }

    /// Method the class itself defines under `name` (case-insensitive).
    #[must_use]
    pub fn method(&self, name: &str) -> Option<&Handler> {
        self.0.methods.get(name.to_ascii_lowercase().as_str())
    }

    /// Defined methods in declaration order.
    pub fn methods(&self) -> impl Iterator<Item = (&str, &Handler)> {
        self.0.methods.iter().map(|(name, handler)| (name.as_str(), handler))
    }
}

impl PartialEq for HandlerClass {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for HandlerClass {}

impl fmt::Debug for HandlerClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<class {}>", self.0.name)
    }
}

impl fmt::Display for HandlerClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.name)
    }
}

/// Builder for [`HandlerClass`].
#[derive(Debug)]
pub struct HandlerClassBuilder {
    name: String,
    doc: Option<String>,
    methods: IndexMap<String, Handler>,
}

impl HandlerClassBuilder {
    /// Attach the class docstring.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Define a method; a later definition with the same name replaces the earlier one.
    pub fn method(mut self, name: &str, handler: Handler) -> Self {
        self.methods.insert(name.to_ascii_lowercase(), handler);
        self
    }

    /// Finish the description; every call yields a distinct identity.
    #[must_use]
    pub fn build(self) -> HandlerClass {
        HandlerClass(Arc::new(Class {
            name: self.name,
            doc: self.doc,
            methods: self.methods,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_not_structure() {
        let a = Handler::builder("view").doc("same").build();
        let b = Handler::builder("view").doc("same").build();
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn test_parse_method_upper_cases() {
        assert_eq!(parse_method("get").ok(), Some(Method::GET));
        assert_eq!(parse_method("Patch").ok(), Some(Method::PATCH));
        assert!(matches!(
            parse_method("not a method"),
            Err(RegistryError::InvalidMethod { .. })
        ));
    }

    #[test]
    fn test_class_methods_are_case_insensitive() {
        let get = Handler::builder("get").build();
        let class = HandlerClass::builder("Api").method("GET", get.clone()).build();
        assert_eq!(class.method("get"), Some(&get));
        assert_eq!(class.method("Get"), Some(&get));
        assert!(class.method("post").is_none());
        let names: Vec<&str> = class.methods().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["get"]);
    }
}
