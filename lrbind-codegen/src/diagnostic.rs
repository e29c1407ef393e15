//! Diagnostic types for registry lints.
//!
//! Lints report findings that do not make a registry invalid but are worth
//! a second look before its bindings are shipped.

use serde::Serialize;

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A problem that should stop the bindings from being used.
    Error,
    /// A likely mistake that doesn't prevent emission.
    Warning,
    /// Informational note about the registry.
    Info,
}

impl Severity {
    /// Returns true if this is an error severity.
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    /// Returns true if this is a warning severity.
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A diagnostic message produced by a lint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// The severity level of this diagnostic.
    pub severity: Severity,
    /// The lint that produced this diagnostic.
    pub lint: &'static str,
    /// The diagnostic message.
    pub message: String,
    /// The parameter the diagnostic is about, if any.
    pub parameter: Option<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(lint: &'static str, message: impl Into<String>) -> Self {
        Self::with_severity(Severity::Error, lint, message)
    }

    /// Create a new warning diagnostic.
    pub fn warning(lint: &'static str, message: impl Into<String>) -> Self {
        Self::with_severity(Severity::Warning, lint, message)
    }

    /// Create a new info diagnostic.
    pub fn info(lint: &'static str, message: impl Into<String>) -> Self {
        Self::with_severity(Severity::Info, lint, message)
    }

    fn with_severity(severity: Severity, lint: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity,
            lint,
            message: message.into(),
            parameter: None,
        }
    }

    /// Attach the parameter this diagnostic is about.
    pub fn at(mut self, parameter: impl Into<String>) -> Self {
        self.parameter = Some(parameter.into());
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.lint, self.message)?;
        if let Some(parameter) = &self.parameter {
            write!(f, " (at {})", parameter)?;
        }
        Ok(())
    }
}
