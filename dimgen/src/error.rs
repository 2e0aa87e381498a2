use crate::ast::Span;
use crate::dimension::DimensionError;
use std::fmt;
use std::sync::Arc;

/// Detailed error information with source location
#[derive(Debug, Clone)]
pub struct ErrorDetails {
    pub message: String,
    pub span: Span,
    pub source_id: String,
    pub source_text: Arc<str>,
    pub suggestion: Option<String>,
}

/// Error types for dimgen
#[derive(Debug, Clone)]
pub enum DimgenError {
    /// Malformed `.units` text or dimension expression, with source location
    Parse(Box<ErrorDetails>),

    /// A unit system definition that cannot be generated (mismatched lists,
    /// invalid identifiers, ...). Always detected before any output exists.
    Specification(String),

    /// An operation on dimension vectors that has no defined result
    Dimension(DimensionError),

    /// Input exceeds one of the configured generator limits
    ResourceLimitExceeded {
        limit_name: String,
        limit_value: String,
        actual_value: String,
        suggestion: String,
    },

    /// Failure while persisting generated output
    Io { path: String, message: String },

    /// No unit system with this name is known
    UnknownSystem(String),

    /// Multiple errors collected together
    MultipleErrors(Vec<DimgenError>),
}

impl DimgenError {
    /// Create a parse error with source information
    pub fn parse(
        message: impl Into<String>,
        span: Span,
        source_id: impl Into<String>,
        source_text: Arc<str>,
    ) -> Self {
        Self::Parse(Box::new(ErrorDetails {
            message: message.into(),
            span,
            source_id: source_id.into(),
            source_text,
            suggestion: None,
        }))
    }

    /// Create a parse error with suggestion
    pub fn parse_with_suggestion(
        message: impl Into<String>,
        span: Span,
        source_id: impl Into<String>,
        source_text: Arc<str>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self::Parse(Box::new(ErrorDetails {
            message: message.into(),
            span,
            source_id: source_id.into(),
            source_text,
            suggestion: Some(suggestion.into()),
        }))
    }

    /// Collapse a list of errors: one error stays itself, several are grouped
    pub fn collect(mut errors: Vec<DimgenError>) -> Option<Self> {
        match errors.len() {
            0 => None,
            1 => errors.pop(),
            _ => Some(DimgenError::MultipleErrors(errors)),
        }
    }
}

impl fmt::Display for DimgenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DimgenError::Parse(details) => {
                write!(f, "Parse error: {}", details.message)?;
                if let Some(suggestion) = &details.suggestion {
                    write!(f, " (suggestion: {})", suggestion)?;
                }
                write!(
                    f,
                    " at {}:{}:{}",
                    details.source_id, details.span.line, details.span.col
                )
            }
            DimgenError::Specification(msg) => write!(f, "Specification error: {}", msg),
            DimgenError::Dimension(err) => write!(f, "Dimension error: {}", err),
            DimgenError::ResourceLimitExceeded {
                limit_name,
                limit_value,
                actual_value,
                suggestion,
            } => write!(
                f,
                "Resource limit exceeded: {} (limit: {}, actual: {}). {}",
                limit_name, limit_value, actual_value, suggestion
            ),
            DimgenError::Io { path, message } => write!(f, "I/O error on {}: {}", path, message),
            DimgenError::UnknownSystem(name) => write!(f, "Unknown unit system: {}", name),
            DimgenError::MultipleErrors(errors) => {
                writeln!(f, "Multiple errors:")?;
                for (i, error) in errors.iter().enumerate() {
                    write!(f, "  {}. {}", i + 1, error)?;
                    if i < errors.len() - 1 {
                        writeln!(f)?;
                    }
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for DimgenError {}

impl From<DimensionError> for DimgenError {
    fn from(err: DimensionError) -> Self {
        DimgenError::Dimension(err)
    }
}

impl From<std::fmt::Error> for DimgenError {
    fn from(err: std::fmt::Error) -> Self {
        DimgenError::Io {
            path: "<buffer>".to_string(),
            message: format!("Format error: {}", err),
        }
    }
}
