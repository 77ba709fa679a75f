//! Configuration error types.

use super::FieldPath;
use owo_colors::{Stream, Style};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::logger::paint;
use crate::utils::plural_s;

// ============================================================================
// ConfigError
// ============================================================================

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Config file parsing error")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported config format `{0}`, expected a .toml or .json file")]
    UnsupportedFormat(PathBuf),

    // NOTE: No #[from] here - we don't want source() which causes duplicate output
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

impl ConfigError {
    /// Kinds of all validation errors, in report order.
    ///
    /// Empty for IO and parse failures.
    pub fn kinds(&self) -> Vec<ConfigErrorKind> {
        match self {
            Self::Diagnostics(diag) => diag.errors().iter().map(|e| e.kind).collect(),
            _ => Vec::new(),
        }
    }

    pub fn has_kind(&self, kind: ConfigErrorKind) -> bool {
        match self {
            Self::Diagnostics(diag) => diag.has_kind(kind),
            _ => false,
        }
    }

    /// Validation diagnostics, if this is a validation failure.
    pub fn diagnostics(&self) -> Option<&ConfigDiagnostics> {
        match self {
            Self::Diagnostics(diag) => Some(diag),
            _ => None,
        }
    }
}

// ============================================================================
// ConfigErrorKind
// ============================================================================

/// What rule a config value broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ConfigErrorKind {
    InvalidBasePath,
    InvalidSidebarKey,
    UnresolvableTarget,
    EmptySidebarGroup,
    MissingSearchCredentials,
    DuplicateRoute,
    DeadLink,
    EmptyLabel,
    InvalidHeadTag,
    InvalidSocialLink,
    InvalidActiveMatch,
}

impl ConfigErrorKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidBasePath => "InvalidBasePath",
            Self::InvalidSidebarKey => "InvalidSidebarKey",
            Self::UnresolvableTarget => "UnresolvableTarget",
            Self::EmptySidebarGroup => "EmptySidebarGroup",
            Self::MissingSearchCredentials => "MissingSearchCredentials",
            Self::DuplicateRoute => "DuplicateRoute",
            Self::DeadLink => "DeadLink",
            Self::EmptyLabel => "EmptyLabel",
            Self::InvalidHeadTag => "InvalidHeadTag",
            Self::InvalidSocialLink => "InvalidSocialLink",
            Self::InvalidActiveMatch => "InvalidActiveMatch",
        }
    }
}

impl fmt::Display for ConfigErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// ConfigDiagnostic
// ============================================================================

/// A single configuration diagnostic
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    /// Rule that was broken
    pub kind: ConfigErrorKind,
    /// Config field path (e.g., `themeConfig.nav[0].link`)
    pub field: FieldPath,
    /// Error description
    pub message: String,
    /// Fix hint (optional)
    pub hint: Option<String>,
}

impl ConfigDiagnostic {
    pub fn new(kind: ConfigErrorKind, field: FieldPath, message: impl Into<String>) -> Self {
        Self {
            kind,
            field,
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Field path in cyan brackets
        let dimmed = Style::new().dimmed();
        writeln!(
            f,
            "{}{}{}",
            paint("[", Stream::Stderr, dimmed),
            paint(self.field.as_str(), Stream::Stderr, Style::new().cyan()),
            paint("]", Stream::Stderr, dimmed)
        )?;
        // Kind and message with red bullet
        write!(
            f,
            "{} {}: {}",
            paint("→", Stream::Stderr, Style::new().red()),
            paint(self.kind.as_str(), Stream::Stderr, Style::new().bold()),
            self.message
        )?;
        // Hint in yellow
        if let Some(hint) = &self.hint {
            write!(f, "\n  {} {}", paint("hint:", Stream::Stderr, Style::new().yellow()), hint)?;
        }
        Ok(())
    }
}

// ============================================================================
// ConfigDiagnostics
// ============================================================================

#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
    /// Non-fatal findings (tolerated duplicates, ignored options).
    warnings: Vec<(FieldPath, String)>,
    /// Informational notes (skipped checks).
    hints: Vec<(FieldPath, String)>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, kind: ConfigErrorKind, field: FieldPath, message: impl Into<String>) {
        self.errors.push(ConfigDiagnostic::new(kind, field, message));
    }

    /// Add an error with a hint.
    pub fn error_with_hint(
        &mut self,
        kind: ConfigErrorKind,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.errors
            .push(ConfigDiagnostic::new(kind, field, message).with_hint(hint));
    }

    /// Add a warning (collected for batch display).
    pub fn warn(&mut self, field: FieldPath, message: impl Into<String>) {
        self.warnings.push((field, message.into()));
    }

    /// Add a hint (collected for batch display).
    pub fn hint(&mut self, field: FieldPath, message: impl Into<String>) {
        self.hints.push((field, message.into()));
    }

    /// Print collected hints and warnings in a grouped format.
    ///
    /// Call this after resolution to display all hints/warnings at once.
    pub fn print_hints_and_warnings(&self) {
        if !self.warnings.is_empty() {
            crate::log!("warning"; "config accepted with {} warning{}:",
                self.warnings.len(), plural_s(self.warnings.len()));
            for (field, message) in &self.warnings {
                eprintln!("- [{}] {}", field.as_str(), message);
            }
        }

        for (field, message) in &self.hints {
            crate::log!("hint"; "[{}] {}", field.as_str(), message);
        }
    }

    /// Turn collected errors into a `ConfigError`, keeping warnings and hints.
    ///
    /// Used between resolution phases: later phases only run on input that
    /// passed the earlier ones.
    pub fn checkpoint(&mut self) -> Result<(), ConfigError> {
        if self.errors.is_empty() {
            return Ok(());
        }
        let errors = std::mem::take(&mut self.errors);
        Err(ConfigError::Diagnostics(Self {
            errors,
            ..Self::default()
        }))
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_kind(&self, kind: ConfigErrorKind) -> bool {
        self.errors.iter().any(|e| e.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    pub fn warnings(&self) -> &[(FieldPath, String)] {
        &self.warnings
    }

    pub fn hints(&self) -> &[(FieldPath, String)] {
        &self.hints
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let alert = Style::new().red().bold();
        let dimmed = Style::new().dimmed();
        writeln!(f, "{}\n", paint("config validation failed:", Stream::Stderr, alert))?;
        for (i, err) in self.errors.iter().enumerate() {
            write!(f, "{err}")?;
            if i + 1 < self.errors.len() {
                writeln!(f, "\n")?;
            }
        }
        if self.errors.len() > 1 {
            write!(
                f,
                "\n\n{} {} {}",
                paint("found", Stream::Stderr, dimmed),
                paint(self.errors.len(), Stream::Stderr, alert),
                paint("errors", Stream::Stderr, dimmed)
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}
