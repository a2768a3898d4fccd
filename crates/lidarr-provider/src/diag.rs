//! Operator-facing diagnostics
//!
//! Every failed operation is reduced to a `{summary, detail}` pair. The
//! summary is one of the constants below; the detail comes from one of the
//! two formatters, which are pure functions and safe to call from anywhere.

use lidarr_client::ClientError;
use thiserror::Error;

/// Diagnostic summary for failed API calls
pub const CLIENT_ERROR: &str = "Client Error";
/// Diagnostic summary for failed data source lookups
pub const DATA_SOURCE_ERROR: &str = "Data Source Error";
/// Diagnostic summary for resource state problems
pub const RESOURCE_ERROR: &str = "Resource Error";

/// Standardized error for a data source lookup that matched nothing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("data source not found: no {kind} with {field} '{value}'")]
pub struct NotFoundError {
    /// Resource type that was searched
    pub kind: String,
    /// Field the lookup filtered on
    pub field: String,
    /// Value searched for, reproduced verbatim
    pub value: String,
}

impl NotFoundError {
    /// Build a not-found error for a lookup of `kind` by `field`
    pub fn new(kind: impl Into<String>, field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Render a failed client call as an operator-facing message
///
/// A structured API error gets its raw response body appended under a
/// `Details:` section, present even when the body is empty; any other
/// error renders its display form alone.
pub fn client_error_detail(action: &str, name: &str, err: &ClientError) -> String {
    if let ClientError::Api { message, body, .. } = err {
        format!("Unable to {action} {name}, got error: {message}\nDetails:\n{body}")
    } else {
        format!("Unable to {action} {name}, got error: {err}")
    }
}

/// Render a data source lookup that matched nothing
///
/// The search value is inserted verbatim between literal single quotes;
/// callers are responsible for anything that needs escaping on the
/// surface the message ends up on.
pub fn not_found_detail(kind: &str, field: &str, search: &str) -> String {
    let inner = NotFoundError::new(kind, field, search);
    format!("Unable to find {kind}, got error: {inner}")
}

/// Severity of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The operation failed
    Error,
    /// The operation succeeded with a caveat
    Warning,
}

/// One operator-facing finding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Whether the finding is fatal for the run
    pub severity: Severity,
    /// Short category, one of the constants in this module
    pub summary: String,
    /// Full formatted message
    pub detail: String,
}

/// Append-only collection of diagnostics accumulated across a run
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error diagnostic
    pub fn add_error(&mut self, summary: &str, detail: String) {
        self.entries.push(Diagnostic {
            severity: Severity::Error,
            summary: summary.to_owned(),
            detail,
        });
    }

    /// Record a warning diagnostic
    pub fn add_warning(&mut self, summary: &str, detail: String) {
        self.entries.push(Diagnostic {
            severity: Severity::Warning,
            summary: summary.to_owned(),
            detail,
        });
    }

    /// Whether any error-severity diagnostic was recorded
    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(|d| d.severity == Severity::Error)
    }

    /// Whether nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of recorded diagnostics
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate over recorded diagnostics in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
