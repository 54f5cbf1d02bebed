//! Unified error types for tfstate-diff.
//!
//! Every error in this module is fatal for a comparison: configuration and
//! integrity problems abort the run rather than being reported as "no diff".
//! Recoverable data-quality findings are logged through `tracing` instead.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for tfstate-diff operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum StateDiffError {
    /// Malformed schema, snapshot or configuration input
    #[error("Failed to parse input: {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseErrorKind,
    },

    /// Schema lookups that cannot be satisfied
    #[error("Schema error: {context}")]
    Schema {
        context: String,
        #[source]
        source: SchemaErrorKind,
    },

    /// Embedded policy documents that cannot be compared structurally
    #[error("Invalid policy document at {address}{path}")]
    Policy {
        address: String,
        path: String,
        #[source]
        source: PolicyErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific parse error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Invalid YAML structure: {0}")]
    InvalidYaml(String),

    #[error("Missing required field: {field} in {context}")]
    MissingField { field: String, context: String },
}

/// Specific schema error kinds
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SchemaErrorKind {
    #[error("schema not found: {address} ({mode} {resource_type} from {provider})")]
    NotFound {
        address: String,
        provider: String,
        resource_type: String,
        mode: String,
    },

    #[error("schema attribute not found: {path}")]
    AttributeNotFound { path: String },

    #[error("set-typed value is not an array: {path}")]
    SetValueNotArray { path: String },
}

/// Specific policy document error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PolicyErrorKind {
    #[error("malformed JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("expected a JSON-encoded string, found {0}")]
    NotAString(&'static str),

    #[error("expected a JSON object, found {0}")]
    NotAnObject(&'static str),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for tfstate-diff operations
pub type Result<T> = std::result::Result<T, StateDiffError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl StateDiffError {
    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseErrorKind) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create a parse error for missing field
    pub fn missing_field(field: impl Into<String>, context: impl Into<String>) -> Self {
        Self::parse(
            "missing required field",
            ParseErrorKind::MissingField {
                field: field.into(),
                context: context.into(),
            },
        )
    }

    /// Create a schema error with context
    pub fn schema(context: impl Into<String>, source: SchemaErrorKind) -> Self {
        Self::Schema {
            context: context.into(),
            source,
        }
    }

    /// Create a policy document error bound to a resource attribute
    pub fn policy(
        address: impl Into<String>,
        path: impl Into<String>,
        source: PolicyErrorKind,
    ) -> Self {
        Self::Policy {
            address: address.into(),
            path: path.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// The schema error kind, if this is a schema error.
    #[must_use]
    pub const fn schema_kind(&self) -> Option<&SchemaErrorKind> {
        match self {
            Self::Schema { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for StateDiffError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for StateDiffError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(
            "JSON deserialization",
            ParseErrorKind::InvalidJson(err.to_string()),
        )
    }
}

impl From<serde_yaml::Error> for StateDiffError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::parse(
            "YAML deserialization",
            ParseErrorKind::InvalidYaml(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// The context string is prepended to the error's existing context,
/// creating a chain that shows the path through the code.
///
/// ```ignore
/// use tfstate_diff::error::ErrorContext;
///
/// let content = std::fs::read_to_string(path).context("reading state file")?;
/// let snapshot = parse_snapshot(&content)
///     .with_context(|| format!("parsing snapshot {}", path.display()))?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<StateDiffError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: StateDiffError, new_ctx: &str) -> StateDiffError {
    match err {
        StateDiffError::Parse {
            context: existing,
            source,
        } => StateDiffError::Parse {
            context: chain_context(new_ctx, &existing),
            source,
        },
        StateDiffError::Schema {
            context: existing,
            source,
        } => StateDiffError::Schema {
            context: chain_context(new_ctx, &existing),
            source,
        },
        StateDiffError::Io {
            path,
            message,
            source,
        } => StateDiffError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        StateDiffError::Config(msg) => StateDiffError::Config(chain_context(new_ctx, &msg)),
        StateDiffError::Validation(msg) => {
            StateDiffError::Validation(chain_context(new_ctx, &msg))
        }
        // Policy errors are already bound to an address and path.
        other @ StateDiffError::Policy { .. } => other,
    }
}

/// Chain two context strings together.
///
/// Returns "`new_context`: `existing_context`", or just the new context when
/// nothing was recorded before.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
