use crate::error::RegistryError;
use crate::handler::{parse_method, Handler, HandlerClass};
use crate::yaml_utils::is_path_key;
use http::Method;
use indexmap::{IndexMap, IndexSet};
use parking_lot::RwLock;
use std::cell::RefCell;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;
use std::sync::Arc;
use tracing::debug;

thread_local! {
    static APP_CONTEXT: RefCell<Vec<FlaskApp>> = const { RefCell::new(Vec::new()) };
}

/// A URL rule bound to an endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    rule: String,
    endpoint: String,
    methods: IndexSet<Method>,
}

impl Rule {
    /// The rule string, e.g. `/pet/<int:pet_id>`.
    #[must_use]
    pub fn rule(&self) -> &str {
        &self.rule
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Methods the rule accepts, including the implied `HEAD` and `OPTIONS`.
    pub fn methods(&self) -> impl Iterator<Item = &Method> {
        self.methods.iter()
    }

    #[must_use]
    pub fn allows(&self, method: &Method) -> bool {
        self.methods.contains(method)
    }
}

#[derive(Debug, Default)]
struct AppState {
    view_functions: IndexMap<String, Handler>,
    rules: Vec<Rule>,
}

/// Flask application: an endpoint → view function table plus a URL map.
///
/// Clones share the same tables, so a handle captured early sees rules
/// registered later.
#[derive(Clone)]
pub struct FlaskApp {
    name: Arc<str>,
    state: Arc<RwLock<AppState>>,
}

impl FlaskApp {
    pub fn new(name: &str) -> Self {
        Self {
            name: Arc::from(name),
            state: Arc::new(RwLock::new(AppState::default())),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Connect a URL rule to a view function.
    ///
    /// The endpoint defaults to the view's name. Methods default to the HTTP
    /// methods of a class-based view, else `GET`; `GET` implies `HEAD` and
    /// `OPTIONS` is always accepted.
    ///
    /// # Errors
    ///
    /// [`RegistryError::EndpointOverwrite`] if the endpoint already maps to
    /// another view function, [`RegistryError::InvalidMethod`] for a method
    /// that is not an HTTP token.
    pub fn add_url_rule(
        &self,
        rule: &str,
        endpoint: Option<&str>,
        view: &Handler,
        methods: Option<&[&str]>,
    ) -> Result<(), RegistryError> {
        let endpoint = endpoint.unwrap_or_else(|| view.name()).to_string();
        let methods = rule_methods(view, methods)?;

        let mut state = self.state.write();
        if let Some(existing) = state.view_functions.get(&endpoint) {
            if existing != view {
                return Err(RegistryError::EndpointOverwrite { endpoint });
            }
        }

        debug!(app = %self.name, rule = %rule, endpoint = %endpoint, "URL rule added");
        state
            .view_functions
            .insert(endpoint.clone(), view.clone());
        state.rules.push(Rule {
            rule: rule.to_string(),
            endpoint,
            methods,
        });
        Ok(())
    }

    /// Register `view` under `rule` with its name as endpoint.
    ///
    /// # Errors
    ///
    /// Same as [`FlaskApp::add_url_rule`].
    pub fn route(
        &self,
        rule: &str,
        methods: Option<&[&str]>,
        view: &Handler,
    ) -> Result<(), RegistryError> {
        self.add_url_rule(rule, None, view, methods)
    }

    /// Snapshot of the endpoint → view function table in registration order.
    #[must_use]
    pub fn view_functions(&self) -> Vec<(String, Handler)> {
        self.state
            .read()
            .view_functions
            .iter()
            .map(|(endpoint, view)| (endpoint.clone(), view.clone()))
            .collect()
    }

    /// Rules bound to `endpoint` in registration order.
    #[must_use]
    pub fn rules_for_endpoint(&self, endpoint: &str) -> Vec<Rule> {
        self.state
            .read()
            .rules
            .iter()
            .filter(|rule| rule.endpoint == endpoint)
            .cloned()
            .collect()
    }

    /// Make this application the current one for the calling thread until
    /// the returned guard is dropped. Contexts nest; dropping a guard also
    /// pops every context pushed after it.
    #[must_use = "the context is popped as soon as the guard is dropped"]
    pub fn app_context(&self) -> AppContext {
        let depth = APP_CONTEXT.with(|stack| {
            let mut stack = stack.borrow_mut();
            let depth = stack.len();
            stack.push(self.clone());
            depth
        });
        AppContext {
            depth,
            _not_send: PhantomData,
        }
    }
}

impl PartialEq for FlaskApp {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }
}

impl fmt::Debug for FlaskApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        f.debug_struct("FlaskApp")
            .field("name", &self.name)
            .field("endpoints", &state.view_functions.len())
            .field("rules", &state.rules.len())
            .finish()
    }
}

/// Guard returned by [`FlaskApp::app_context`].
#[derive(Debug)]
pub struct AppContext {
    // stack length before this context was pushed
    depth: usize,
    _not_send: PhantomData<Rc<()>>,
}

impl Drop for AppContext {
    fn drop(&mut self) {
        APP_CONTEXT.with(|stack| stack.borrow_mut().truncate(self.depth));
    }
}

/// Innermost application pushed with [`FlaskApp::app_context`] on this thread.
#[must_use]
pub fn current_app() -> Option<FlaskApp> {
    APP_CONTEXT.with(|stack| stack.borrow().last().cloned())
}

/// Class-based view dispatching on the request method.
#[derive(Debug, Clone, Copy)]
pub struct MethodView;

impl MethodView {
    /// Build the view function serving `class` under `name`.
    ///
    /// The function carries the class docstring; its default methods are the
    /// HTTP methods the class defines.
    #[must_use]
    pub fn as_view(class: &HandlerClass, name: &str) -> Handler {
        let builder = Handler::builder(name).view_class(class.clone());
        match class.doc() {
            Some(doc) => builder.doc(doc).build(),
            None => builder.build(),
        }
    }
}

fn rule_methods(
    view: &Handler,
    methods: Option<&[&str]>,
) -> Result<IndexSet<Method>, RegistryError> {
    let mut set = IndexSet::new();
    match (methods, view.view_class()) {
        (Some(methods), _) => {
            for method in methods {
                set.insert(parse_method(method)?);
            }
        }
        (None, Some(class)) => {
            for (name, _) in class.methods().filter(|(name, _)| is_path_key(name)) {
                set.insert(parse_method(name)?);
            }
        }
        (None, None) => {}
    }
    if set.is_empty() {
        set.insert(Method::GET);
    }
    if set.contains(&Method::GET) {
        set.insert(Method::HEAD);
    }
    set.insert(Method::OPTIONS);
    Ok(set)
}
