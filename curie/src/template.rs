//! URI templates and the `{rel}` placeholder token.
//!
//! A template is an ordinary URI string with the placeholder standing where
//! the compact value goes:
//!
//! ```text
//! http://example.com/rels/{rel}
//! \______________________/\___/
//!           left          token   right = ""
//! ```
//!
//! Only the first occurrence of the token is significant. A template that
//! lacks the token entirely is inert: it neither captures nor fills.

use std::fmt;

/// The substitution token recognized inside every template.
pub const PLACEHOLDER: &str = "{rel}";

/// A URI template holding (at most) one meaningful [`PLACEHOLDER`].
///
/// # Examples
///
/// ```
/// use hal_curie::Template;
///
/// let t = Template::new("http://x.io/{rel}/item");
/// assert_eq!(t.split(), Some(("http://x.io/", "/item")));
/// assert_eq!(t.capture("http://x.io/42/item"), Some("42"));
/// assert_eq!(t.fill("42").as_deref(), Some("http://x.io/42/item"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Template(String);

impl Template {
    /// Wraps a template string. Any string is accepted.
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    /// The raw template text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the template, returning the raw text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns `true` if the template contains the placeholder at least once.
    #[must_use]
    pub fn is_resolvable(&self) -> bool {
        self.0.contains(PLACEHOLDER)
    }

    /// Number of placeholder occurrences in the template.
    #[must_use]
    pub fn placeholder_count(&self) -> usize {
        self.0.matches(PLACEHOLDER).count()
    }

    /// Splits the template around the first placeholder.
    ///
    /// Returns the literal text before and after the token, or `None` if the
    /// template does not contain it.
    #[must_use]
    pub fn split(&self) -> Option<(&str, &str)> {
        let at = self.0.find(PLACEHOLDER)?;
        Some((&self.0[..at], &self.0[at + PLACEHOLDER.len()..]))
    }

    /// Matches `uri` against the template and returns the captured value.
    ///
    /// The match is purely literal: `uri` must start with the left part, end
    /// with the right part, and be long enough that the two do not overlap.
    /// The captured value may be empty.
    #[must_use]
    pub fn capture<'u>(&self, uri: &'u str) -> Option<&'u str> {
        let (left, right) = self.split()?;
        if uri.len() < left.len() + right.len() {
            return None;
        }
        if !uri.starts_with(left) || !uri.ends_with(right) {
            return None;
        }
        // Both offsets sit on char boundaries: they are the ends of
        // matched UTF-8 prefixes/suffixes.
        Some(&uri[left.len()..uri.len() - right.len()])
    }

    /// Substitutes `value` for the first placeholder occurrence.
    ///
    /// Any further occurrences are left untouched. Returns `None` when the
    /// template has no placeholder.
    #[must_use]
    pub fn fill(&self, value: &str) -> Option<String> {
        let (left, right) = self.split()?;
        let mut out = String::with_capacity(left.len() + value.len() + right.len());
        out.push_str(left);
        out.push_str(value);
        out.push_str(right);
        Some(out)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Template {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Template {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for Template {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
