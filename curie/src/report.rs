//! Configuration check: per-namespace results, severity levels, and report
//! aggregation.
//!
//! [`check`] inspects a [`NamespaceConfig`] without building a registry and
//! flags entries that would be rejected, inert, or unreachable.

use std::collections::HashSet;

use crate::config::{NamespaceConfig, NamespaceEntry};
use crate::template::Template;

/// Severity level of a check result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The entry is fine.
    Pass,
    /// The entry loads but will not behave as its author probably expects.
    Warning,
    /// The entry would be rejected when loading.
    Failure,
}

/// Result of checking a single namespace entry.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Namespace name the result refers to.
    pub namespace: String,
    /// Human-readable message describing the outcome.
    pub message: String,
    /// Severity of the result.
    pub severity: Severity,
    /// Optional additional detail lines.
    pub details: Vec<String>,
}

impl CheckResult {
    /// Creates a passing result.
    pub fn pass(namespace: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_severity(namespace, message, Severity::Pass)
    }

    /// Creates a warning result.
    pub fn warn(namespace: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_severity(namespace, message, Severity::Warning)
    }

    /// Creates a failure result.
    pub fn fail(namespace: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_severity(namespace, message, Severity::Failure)
    }

    fn with_severity(
        namespace: impl Into<String>,
        message: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            message: message.into(),
            severity,
            details: Vec::new(),
        }
    }

    /// Attaches a detail line.
    #[must_use]
    pub fn detail(mut self, line: impl Into<String>) -> Self {
        self.details.push(line.into());
        self
    }

    /// Returns true if this result represents a failure.
    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Failure
    }
}

/// Aggregated results for a whole configuration.
#[derive(Debug, Default)]
pub struct CheckReport {
    /// Results in configuration order.
    pub results: Vec<CheckResult>,
}

impl CheckReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a result to this report.
    pub fn push(&mut self, result: CheckResult) {
        self.results.push(result);
    }

    /// Number of results with the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.results.iter().filter(|r| r.severity == severity).count()
    }

    /// Returns the count of failed checks.
    pub fn failure_count(&self) -> usize {
        self.count(Severity::Failure)
    }

    /// Returns true if no check failed.
    pub fn all_passed(&self) -> bool {
        self.failure_count() == 0
    }
}

/// Checks every entry of `config`.
///
/// Failures: empty names, names containing `:`. Warnings: templates
/// without `{rel}`, templates with more than one `{rel}`, repeated names,
/// and templates whose prefix/suffix split is identical to an earlier
/// entry's (compaction always picks the earlier one).
pub fn check(config: &NamespaceConfig) -> CheckReport {
    let mut report = CheckReport::new();
    let mut seen_names: HashSet<&str> = HashSet::new();
    let mut seen_splits: Vec<(&str, Template)> = Vec::new();

    for entry in &config.namespaces {
        report.push(check_entry(entry, &mut seen_names, &mut seen_splits));
    }
    report
}

fn check_entry<'a>(
    entry: &'a NamespaceEntry,
    seen_names: &mut HashSet<&'a str>,
    seen_splits: &mut Vec<(&'a str, Template)>,
) -> CheckResult {
    if let Err(err) = entry.validate() {
        return CheckResult::fail(&entry.name, err.to_string());
    }

    let template = Template::new(entry.template.as_str());
    let mut result = CheckResult::pass(&entry.name, format!("template `{template}`"));
    let mut warnings: Vec<String> = Vec::new();

    if !seen_names.insert(entry.name.as_str()) {
        warnings.push("name repeated; this entry overrides the earlier one".to_owned());
    }

    match template.placeholder_count() {
        0 => warnings.push("no {rel} placeholder; namespace never matches".to_owned()),
        1 => {}
        n => warnings.push(format!(
            "{n} {{rel}} placeholders; only the first is substituted"
        )),
    }

    if let Some(split) = template.split() {
        let shadowed_by = seen_splits
            .iter()
            .find(|(name, earlier)| *name != entry.name && earlier.split() == Some(split))
            .map(|(name, _)| *name);
        if let Some(earlier) = shadowed_by {
            warnings.push(format!(
                "same prefix and suffix as `{earlier}`; compaction always picks `{earlier}`"
            ));
        }
        seen_splits.push((entry.name.as_str(), template.clone()));
    }

    if let Some((first, rest)) = warnings.split_first() {
        result = CheckResult::warn(&entry.name, first.clone());
        for line in rest {
            result = result.detail(line.clone());
        }
    }
    result
}
