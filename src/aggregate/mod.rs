//! Skill aggregate - the top-level owner of a skill definition
//!
//! A skill holds exactly one intent registry, an optional application
//! identity and the dispatch hooks. It is built once at configuration time
//! and lives for as long as the hosting process serves the skill:
//! - Registry mutation (add/remove intents, default and launch slots)
//! - Request dispatch with application identity validation
//! - Schema and sample utterance export

pub mod registry;
pub mod shared;

pub use registry::IntentRegistry;
pub use shared::SharedSkill;

use std::fmt;
use std::sync::Arc;
use tracing::{debug, info_span};
use uuid::Uuid;

use crate::config::SkillConfig;
use crate::errors::SkillResult;
use crate::handlers::IntentHandler;
use crate::projections;
use crate::routing::{self, IntentMatcher, RequestDispatcher, StandardDispatcher};
use crate::value_objects::{SkillRequest, SkillResponse};

/// Skill aggregate root
pub struct Skill {
    /// Intents known to this skill
    registry: IntentRegistry,

    /// Identity requests must carry; empty or absent disables the check
    application_id: Option<String>,

    /// Per-event-type dispatch hooks
    dispatcher: Box<dyn RequestDispatcher>,
}

impl Skill {
    /// Create a skill with no identity check and standard dispatch
    pub fn new() -> Self {
        Self {
            registry: IntentRegistry::new(),
            application_id: None,
            dispatcher: Box::new(StandardDispatcher),
        }
    }

    /// Create a skill from configuration
    pub fn from_config(config: SkillConfig) -> Self {
        let mut skill = Self::new();
        skill.application_id = config.effective_application_id().map(str::to_string);
        skill
    }

    /// Replace the dispatch hooks
    pub fn with_dispatcher(mut self, dispatcher: impl RequestDispatcher + 'static) -> Self {
        self.dispatcher = Box::new(dispatcher);
        self
    }

    /// Replace the intent-name matching strategy
    pub fn with_matcher(mut self, matcher: impl IntentMatcher + 'static) -> Self {
        self.registry = self.registry.with_matcher(matcher);
        self
    }

    /// Get the configured application identity
    pub fn application_id(&self) -> Option<&str> {
        self.application_id.as_deref()
    }

    /// Set or clear the application identity
    ///
    /// Clearing it, or setting a blank value, disables identity validation
    /// for every request.
    pub fn set_application_id(&mut self, application_id: Option<String>) {
        let application_id = application_id.filter(|id| !id.trim().is_empty());
        debug!(application_id = application_id.as_deref().unwrap_or_default(), "Setting application id");
        self.application_id = application_id;
    }

    /// Register an intent under its name
    pub fn add_intent(&mut self, handler: Arc<dyn IntentHandler>) -> SkillResult<()> {
        self.registry.register(handler)
    }

    /// Remove a registered intent by name
    pub fn remove_intent(&mut self, name: &str) {
        self.registry.unregister(name);
    }

    pub fn set_default_intent(&mut self, handler: Arc<dyn IntentHandler>) {
        self.registry.set_default(handler);
    }

    pub fn clear_default_intent(&mut self) {
        self.registry.clear_default();
    }

    pub fn set_launch_intent(&mut self, handler: Arc<dyn IntentHandler>) {
        self.registry.set_launch(handler);
    }

    pub fn clear_launch_intent(&mut self) {
        self.registry.clear_launch();
    }

    /// Registered intents in registration order
    pub fn intents(&self) -> &[Arc<dyn IntentHandler>] {
        self.registry.intents()
    }

    pub fn default_intent(&self) -> Option<&Arc<dyn IntentHandler>> {
        self.registry.default_intent()
    }

    pub fn launch_intent(&self) -> Option<&Arc<dyn IntentHandler>> {
        self.registry.launch_intent()
    }

    /// Get the intent registry
    pub fn registry(&self) -> &IntentRegistry {
        &self.registry
    }

    /// Validate and dispatch a request
    pub fn execute(&self, request: &SkillRequest) -> SkillResult<SkillResponse> {
        let span = info_span!(
            "skill_dispatch",
            dispatch_id = %Uuid::new_v4(),
            request_id = request.request.request_id.as_deref().unwrap_or_default()
        );
        let _guard = span.enter();

        routing::dispatch(
            self.dispatcher.as_ref(),
            &self.registry,
            self.application_id.as_deref(),
            request,
        )
    }

    /// Deserialize a JSON request, dispatch it and serialize the response
    pub fn handle_json(&self, body: &str) -> SkillResult<String> {
        let request: SkillRequest = serde_json::from_str(body)?;
        let response = self.execute(&request)?;
        Ok(serde_json::to_string(&response)?)
    }

    /// Pretty-printed intent schema document
    pub fn export_schema(&self) -> String {
        projections::intent_schema(&self.registry)
    }

    /// Newline-joined sample utterances
    pub fn export_utterances(&self) -> String {
        projections::sample_utterances(&self.registry)
    }
}

impl Default for Skill {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Skill")
            .field("registry", &self.registry)
            .field("application_id", &self.application_id)
            .finish()
    }
}
