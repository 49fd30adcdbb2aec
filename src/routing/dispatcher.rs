//! Request dispatcher
//!
//! Validates the application identity, classifies the request by type and
//! routes it to the launch, intent or session-end path. Each path is a
//! provided method on [`RequestDispatcher`], so an embedding application can
//! override one event type and keep the standard behaviour for the others.

use tracing::{debug, info, warn};

use crate::aggregate::IntentRegistry;
use crate::errors::{SkillError, SkillResult};
use crate::handlers::IntentHandler;
use crate::value_objects::{RequestKind, SkillRequest, SkillResponse};

/// Per-event-type dispatch hooks
pub trait RequestDispatcher: Send + Sync {
    /// Handle a LaunchRequest
    fn on_launch(&self, registry: &IntentRegistry, request: &SkillRequest) -> SkillResult<SkillResponse> {
        dispatch_launch(registry, request)
    }

    /// Handle an IntentRequest
    fn on_intent(&self, registry: &IntentRegistry, request: &SkillRequest) -> SkillResult<SkillResponse> {
        resolve_intent(registry, request)
    }

    /// Handle a SessionEndedRequest
    fn on_session_ended(
        &self,
        _registry: &IntentRegistry,
        _request: &SkillRequest,
    ) -> SkillResult<SkillResponse> {
        Ok(end_session())
    }
}

/// Dispatcher with the standard behaviour for every event type
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardDispatcher;

impl RequestDispatcher for StandardDispatcher {}

/// Validate and route a request
///
/// An empty or absent `application_id` disables the identity check.
pub fn dispatch(
    dispatcher: &dyn RequestDispatcher,
    registry: &IntentRegistry,
    application_id: Option<&str>,
    request: &SkillRequest,
) -> SkillResult<SkillResponse> {
    validate_application(application_id, request)?;

    match request.kind() {
        RequestKind::Launch => {
            info!(request_type = request.request_type(), "Dispatching launch");
            dispatcher.on_launch(registry, request)
        }
        RequestKind::Intent => {
            info!(
                request_type = request.request_type(),
                intent = request.intent_name().unwrap_or_default(),
                "Dispatching intent"
            );
            dispatcher.on_intent(registry, request)
        }
        RequestKind::SessionEnded => {
            info!(
                request_type = request.request_type(),
                reason = request.request.reason.as_deref().unwrap_or_default(),
                "Dispatching session end"
            );
            dispatcher.on_session_ended(registry, request)
        }
        RequestKind::Unsupported(request_type) => {
            warn!(request_type = %request_type, "Unsupported request type");
            Err(SkillError::unsupported_request_type(request_type))
        }
    }
}

/// Reject requests issued for a different application
pub fn validate_application(application_id: Option<&str>, request: &SkillRequest) -> SkillResult<()> {
    let Some(expected) = application_id.filter(|id| !id.is_empty()) else {
        return Ok(());
    };

    let actual = request.application_id();
    if actual != Some(expected) {
        warn!(
            expected = expected,
            actual = actual.unwrap_or_default(),
            "Rejecting request for foreign application"
        );
        return Err(SkillError::invalid_application(expected, actual));
    }
    Ok(())
}

/// Standard launch path: the launch intent, or a neutral acknowledgment
pub fn dispatch_launch(registry: &IntentRegistry, request: &SkillRequest) -> SkillResult<SkillResponse> {
    match registry.launch_intent() {
        Some(handler) => execute_handler(handler.as_ref(), request),
        None => {
            debug!("No launch intent set, acknowledging");
            Ok(SkillResponse::acknowledge())
        }
    }
}

/// Standard intent path: the matching intent, else the default intent
pub fn resolve_intent(registry: &IntentRegistry, request: &SkillRequest) -> SkillResult<SkillResponse> {
    let requested = request.intent_name().unwrap_or_default();

    if let Some(handler) = registry.resolve(requested) {
        debug!(intent = handler.name(), "Matched registered intent");
        return execute_handler(handler.as_ref(), request);
    }

    match registry.default_intent() {
        Some(handler) => {
            debug!(
                requested = requested,
                fallback = handler.name(),
                "No registered intent matched, using default intent"
            );
            execute_handler(handler.as_ref(), request)
        }
        None => {
            warn!(requested = requested, "No registered intent matched and no default intent set");
            Err(SkillError::no_matching_intent(requested))
        }
    }
}

/// Standard session-end response
pub fn end_session() -> SkillResponse {
    SkillResponse::acknowledge()
}

fn execute_handler(handler: &dyn IntentHandler, request: &SkillRequest) -> SkillResult<SkillResponse> {
    handler
        .execute(request)
        .map_err(|e| SkillError::handler_failed(handler.name(), e))
}
