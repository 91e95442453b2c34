use crate::error::RegistryError;
use crate::handler::HandlerClass;
use regex::Regex;
use std::fmt;

/// A URL pattern bound to a request handler class.
///
/// The pattern is anchored at the end like Tornado does; when the pattern is
/// simple enough it is also reversed into a `%s` template, one slot per group.
#[derive(Debug, Clone)]
pub struct UrlSpec {
    regex: Regex,
    handler_class: HandlerClass,
    name: Option<String>,
    path: Option<String>,
}

impl UrlSpec {
    /// Compile `pattern` for `handler_class`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::InvalidPattern`] if the pattern does not compile.
    pub fn new(pattern: &str, handler_class: &HandlerClass) -> Result<Self, RegistryError> {
        let anchored = if pattern.ends_with('$') {
            pattern.to_string()
        } else {
            format!("{}$", pattern)
        };
        let regex = Regex::new(&anchored).map_err(|source| RegistryError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        let path = reverse_pattern(&regex);
        Ok(Self {
            regex,
            handler_class: handler_class.clone(),
            name: None,
            path,
        })
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Compiled, `$`-anchored pattern.
    #[must_use]
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Number of capture groups.
    #[must_use]
    pub fn groups(&self) -> usize {
        self.regex.captures_len().saturating_sub(1)
    }

    /// Named groups in ascending group order.
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.regex.capture_names().flatten()
    }

    #[must_use]
    pub fn handler_class(&self) -> &HandlerClass {
        &self.handler_class
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Reversed `%s` template, `None` when the pattern cannot be reversed.
    #[must_use]
    pub fn path_template(&self) -> Option<&str> {
        self.path.as_deref()
    }
}

impl fmt::Display for UrlSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "URLSpec({:?}, {}, name={:?})",
            self.regex.as_str(),
            self.handler_class,
            self.name
        )
    }
}

fn reverse_pattern(regex: &Regex) -> Option<String> {
    let mut pattern = regex.as_str();
    pattern = pattern.strip_prefix('^').unwrap_or(pattern);
    pattern = pattern.strip_suffix('$').unwrap_or(pattern);

    let groups = regex.captures_len().saturating_sub(1);
    if groups != pattern.matches('(').count() {
        return None;
    }

    let mut pieces = String::with_capacity(pattern.len());
    for fragment in pattern.split('(') {
        match fragment.find(')') {
            Some(paren_loc) => {
                pieces.push_str("%s");
                pieces.push_str(&unescape(&fragment[paren_loc + 1..])?);
            }
            None => pieces.push_str(&unescape(fragment)?),
        }
    }
    Some(pieces)
}

/// Undo regex escaping; escaped alphanumerics (`\d`, `\w`) have no literal form.
fn unescape(fragment: &str) -> Option<String> {
    let mut out = String::with_capacity(fragment.len());
    let mut chars = fragment.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some(escaped) if escaped.is_alphanumeric() => return None,
            Some(escaped) => out.push(escaped),
            None => out.push('\\'),
        }
    }
    Some(out)
}

/// Fill the `%s` slots of a reversed template in order; `%%` is a literal `%`.
///
/// Returns the number of slots as the error when `args` does not match it.
pub(crate) fn fill_template(template: &str, args: &[String]) -> Result<String, usize> {
    let mut out = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut slots = 0;
    let mut missing = false;
    let mut chars = template.chars().peekable();
    while let Some(ch) = chars.next() {
        match (ch, chars.peek()) {
            ('%', Some('s')) => {
                chars.next();
                slots += 1;
                match args.next() {
                    Some(arg) => out.push_str(arg),
                    None => missing = true,
                }
            }
            ('%', Some('%')) => {
                chars.next();
                out.push('%');
            }
            _ => out.push(ch),
        }
    }
    if missing || args.next().is_some() {
        return Err(slots);
    }
    Ok(out)
}
