//! Intent handlers
//!
//! An intent handler is the unit of behaviour a skill author supplies per
//! intent. The router only looks at its name; slots and sample utterances are
//! read by the schema projections.

use std::fmt;
use std::sync::Arc;

use crate::value_objects::{SkillRequest, SkillResponse, SlotDeclaration};

/// Behaviour bound to a named intent
pub trait IntentHandler: Send + Sync {
    /// Intent name (case-sensitive)
    fn name(&self) -> &str;

    /// Slots declared on this intent, in declaration order
    fn slots(&self) -> &[SlotDeclaration] {
        &[]
    }

    /// Sample utterance templates, in declaration order
    fn utterances(&self) -> &[String] {
        &[]
    }

    /// Produce a response for a validated request
    fn execute(&self, request: &SkillRequest) -> anyhow::Result<SkillResponse>;
}

type HandlerFn = dyn Fn(&SkillRequest) -> anyhow::Result<SkillResponse> + Send + Sync;

/// Closure-backed intent handler
///
/// ```ignore
/// let hello = Intent::new("Hello")
///     .with_utterance("say hello")
///     .handled_by(|_req| Ok(SkillResponse::tell("Hello there")));
/// ```
#[derive(Clone)]
pub struct Intent {
    name: String,
    slots: Vec<SlotDeclaration>,
    utterances: Vec<String>,
    handler: Option<Arc<HandlerFn>>,
}

impl Intent {
    /// Create an intent with no slots, no utterances and no body
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slots: Vec::new(),
            utterances: Vec::new(),
            handler: None,
        }
    }

    /// Declare a slot
    pub fn with_slot(mut self, name: impl Into<String>, slot_type: impl Into<String>) -> Self {
        self.slots.push(SlotDeclaration::new(name, slot_type));
        self
    }

    /// Add a sample utterance template
    pub fn with_utterance(mut self, utterance: impl Into<String>) -> Self {
        self.utterances.push(utterance.into());
        self
    }

    /// Set the body executed when this intent is dispatched
    pub fn handled_by<F>(mut self, handler: F) -> Self
    where
        F: Fn(&SkillRequest) -> anyhow::Result<SkillResponse> + Send + Sync + 'static,
    {
        self.handler = Some(Arc::new(handler));
        self
    }

    /// Wrap into a shareable handler reference
    pub fn into_handler(self) -> Arc<dyn IntentHandler> {
        Arc::new(self)
    }
}

impl IntentHandler for Intent {
    fn name(&self) -> &str {
        &self.name
    }

    fn slots(&self) -> &[SlotDeclaration] {
        &self.slots
    }

    fn utterances(&self) -> &[String] {
        &self.utterances
    }

    fn execute(&self, request: &SkillRequest) -> anyhow::Result<SkillResponse> {
        match &self.handler {
            Some(handler) => handler(request),
            None => Ok(SkillResponse::acknowledge()),
        }
    }
}

impl fmt::Debug for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Intent")
            .field("name", &self.name)
            .field("slots", &self.slots)
            .field("utterances", &self.utterances)
            .field("has_handler", &self.handler.is_some())
            .finish()
    }
}
