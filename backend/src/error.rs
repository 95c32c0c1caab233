//! Error types for the recommendation engine and its collaborators.
//!
//! Scoring functions are total and never produce these errors. They are raised
//! only at the edges: target resolution, user-supplied AHP ratios, file-backed
//! stores and configuration loading.

use std::fmt;

/// Result type for engine operations
pub type StargazeResult<T> = Result<T, StargazeError>;

/// Structured context for engine errors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorContext {
    /// The operation being performed (e.g., "resolve_weights", "load_points")
    pub operation: Option<String>,
    /// The entity type involved (e.g., "target", "point", "config")
    pub entity: Option<String>,
    /// The entity identifier if applicable
    pub entity_id: Option<String>,
    /// Additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: Some(operation.into()),
            ..Default::default()
        }
    }

    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    pub fn with_entity_id(mut self, id: impl ToString) -> Self {
        self.entity_id = Some(id.to_string());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(ref op) = self.operation {
            parts.push(format!("operation={}", op));
        }
        if let Some(ref entity) = self.entity {
            parts.push(format!("entity={}", entity));
        }
        if let Some(ref id) = self.entity_id {
            parts.push(format!("id={}", id));
        }
        if let Some(ref details) = self.details {
            parts.push(format!("details={}", details));
        }
        write!(f, "[{}]", parts.join(", "))
    }
}

/// Why a request produced no recommendation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NoRecommendation {
    #[error("unknown celestial object '{0}'")]
    UnknownTarget(String),

    #[error("'{target}' is below the horizon (altitude {altitude:.1}°)")]
    BelowHorizon { target: String, altitude: f64 },

    #[error("no observation point covers azimuth {azimuth:.1}° for '{target}'")]
    NoCoveringPoint { target: String, azimuth: f64 },

    #[error("unknown observation point '{0}'")]
    UnknownPoint(String),
}

/// Error type for engine operations
#[derive(Debug, thiserror::Error)]
pub enum StargazeError {
    /// Nothing to recommend. Callers render this as a regular "no result" outcome.
    #[error("Not found: {0}")]
    NotFound(NoRecommendation),

    /// Malformed caller input, e.g. a zero AHP ratio.
    #[error("Invalid input: {message} {context}")]
    InvalidInput {
        message: String,
        context: ErrorContext,
    },

    /// An external collaborator had no data to offer.
    #[error("Unavailable: {message} {context}")]
    Unavailable {
        message: String,
        context: ErrorContext,
    },

    /// Configuration file could not be read or parsed.
    #[error("Configuration error: {message} {context}")]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    /// Store read/write failure.
    #[error("I/O error: {message} {context}")]
    Io {
        message: String,
        context: ErrorContext,
    },
}

impl StargazeError {
    pub fn invalid_input(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::InvalidInput {
            message: message.into(),
            context,
        }
    }

    pub fn unavailable(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::Unavailable {
            message: message.into(),
            context,
        }
    }

    pub fn configuration(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::Configuration {
            message: message.into(),
            context,
        }
    }

    pub fn io(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::Io {
            message: message.into(),
            context,
        }
    }

    /// Check if this is a "no recommendation" outcome rather than a failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Get the context, if the variant carries one.
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Self::NotFound(_) => None,
            Self::InvalidInput { context, .. }
            | Self::Unavailable { context, .. }
            | Self::Configuration { context, .. }
            | Self::Io { context, .. } => Some(context),
        }
    }
}

impl From<NoRecommendation> for StargazeError {
    fn from(reason: NoRecommendation) -> Self {
        Self::NotFound(reason)
    }
}
