//! Borrowed view of a compact URI (`prefix:reference`).

use std::fmt;

/// Separator between a CURIE's namespace prefix and its reference.
pub const SEPARATOR: char = ':';

/// A CURIE split on its first [`SEPARATOR`].
///
/// Only the first colon is significant; anything after it, further colons
/// included, belongs to the reference.
///
/// # Examples
///
/// ```
/// use hal_curie::Curie;
///
/// let c = Curie::parse("acme:widgets:list").unwrap();
/// assert_eq!(c.prefix(), "acme");
/// assert_eq!(c.reference(), "widgets:list");
/// assert!(Curie::parse("no-colon-here").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Curie<'a> {
    prefix: &'a str,
    reference: &'a str,
}

impl<'a> Curie<'a> {
    /// Builds a CURIE from its parts without further checks.
    #[must_use]
    pub const fn new(prefix: &'a str, reference: &'a str) -> Self {
        Self { prefix, reference }
    }

    /// Splits `input` on its first colon. Returns `None` when there is none.
    #[must_use]
    pub fn parse(input: &'a str) -> Option<Self> {
        let (prefix, reference) = input.split_once(SEPARATOR)?;
        Some(Self { prefix, reference })
    }

    /// The namespace name before the colon.
    #[must_use]
    pub const fn prefix(&self) -> &'a str {
        self.prefix
    }

    /// The captured value after the colon.
    #[must_use]
    pub const fn reference(&self) -> &'a str {
        self.reference
    }
}

impl fmt::Display for Curie<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.prefix, SEPARATOR, self.reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple() {
        assert_eq!(Curie::parse("rel:next"), Some(Curie::new("rel", "next")));
    }

    #[test]
    fn parse_keeps_later_colons_in_reference() {
        let c = Curie::parse("ns:a:b:c");
        assert_eq!(c.map(|c| c.reference()), Some("a:b:c"));
        assert_eq!(c.map(|c| c.prefix()), Some("ns"));
    }

    #[test]
    fn parse_edge_separators() {
        assert_eq!(Curie::parse(":x"), Some(Curie::new("", "x")));
        assert_eq!(Curie::parse("x:"), Some(Curie::new("x", "")));
        assert_eq!(Curie::parse("plain"), None);
        assert_eq!(Curie::parse(""), None);
    }

    #[test]
    fn display_round_trips() {
        for s in ["rel:next", "ns:a:b", "y:", ":z"] {
            assert_eq!(Curie::parse(s).map(|c| c.to_string()).as_deref(), Some(s));
        }
    }
}
