//! Error types for skill dispatch and intent registration

use thiserror::Error;

/// Result alias used throughout the skill domain
pub type SkillResult<T> = Result<T, SkillError>;

/// Errors raised while registering intents or dispatching a request
///
/// Every variant is fatal to the request in flight. Translating an error into
/// a platform-specific failure body is left to the hosting transport.
#[derive(Debug, Error)]
pub enum SkillError {
    /// The request was issued for a different application
    #[error("Invalid application: expected {expected}, got {}", .actual.as_deref().unwrap_or("<none>"))]
    InvalidApplication {
        expected: String,
        actual: Option<String>,
    },

    /// Request type is not one the dispatcher knows how to route
    #[error("Unsupported request type: {0}")]
    UnsupportedRequestType(String),

    /// No registered intent matched and no default intent is set
    #[error("No matching intent for: {0}")]
    NoMatchingIntent(String),

    /// Attempted to register an intent that cannot be addressed by name
    #[error("Invalid intent: {0}")]
    InvalidIntent(String),

    /// An intent handler failed while producing its response
    #[error("Intent handler {intent} failed: {source}")]
    HandlerFailed {
        intent: String,
        #[source]
        source: anyhow::Error,
    },

    /// Request or response could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SkillError {
    /// Create an invalid application error
    pub fn invalid_application(expected: impl Into<String>, actual: Option<&str>) -> Self {
        Self::InvalidApplication {
            expected: expected.into(),
            actual: actual.map(str::to_string),
        }
    }

    /// Create an unsupported request type error
    pub fn unsupported_request_type(request_type: impl Into<String>) -> Self {
        Self::UnsupportedRequestType(request_type.into())
    }

    /// Create a no matching intent error
    pub fn no_matching_intent(intent_name: impl Into<String>) -> Self {
        Self::NoMatchingIntent(intent_name.into())
    }

    /// Create an invalid intent error
    pub fn invalid_intent(msg: impl Into<String>) -> Self {
        Self::InvalidIntent(msg.into())
    }

    /// Wrap a failure reported by an intent handler
    pub fn handler_failed(intent: impl Into<String>, source: anyhow::Error) -> Self {
        Self::HandlerFailed {
            intent: intent.into(),
            source,
        }
    }
}
