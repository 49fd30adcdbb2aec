//! Intent registry
//!
//! Named intents plus two independent slots: the default intent (used when no
//! named intent matches) and the launch intent (used on session start). Either
//! slot may point at a handler that is not registered by name.

use std::fmt;
use std::sync::Arc;
use tracing::debug;

use crate::errors::{SkillError, SkillResult};
use crate::handlers::IntentHandler;
use crate::routing::{ExactMatch, IntentMatcher};

/// Registry of intent handlers owned by a skill
pub struct IntentRegistry {
    /// Registered handlers in insertion order, names unique
    intents: Vec<Arc<dyn IntentHandler>>,

    /// Handler used when no registered intent matches
    default_intent: Option<Arc<dyn IntentHandler>>,

    /// Handler used on session start
    launch_intent: Option<Arc<dyn IntentHandler>>,

    /// Strategy used to resolve requested intent names
    matcher: Box<dyn IntentMatcher>,
}

impl IntentRegistry {
    /// Create an empty registry with exact name matching
    pub fn new() -> Self {
        Self {
            intents: Vec::new(),
            default_intent: None,
            launch_intent: None,
            matcher: Box::new(ExactMatch::new()),
        }
    }

    /// Replace the name-matching strategy
    pub fn with_matcher(mut self, matcher: impl IntentMatcher + 'static) -> Self {
        self.matcher = Box::new(matcher);
        self
    }

    /// Register a handler, replacing any handler already registered under its name
    pub fn register(&mut self, handler: Arc<dyn IntentHandler>) -> SkillResult<()> {
        if handler.name().trim().is_empty() {
            return Err(SkillError::invalid_intent("intent name must not be blank"));
        }

        match self.position(handler.name()) {
            Some(index) => {
                debug!(intent = handler.name(), "Replacing registered intent");
                self.intents[index] = handler;
            }
            None => {
                debug!(intent = handler.name(), "Registering intent");
                self.intents.push(handler);
            }
        }
        Ok(())
    }

    /// Remove the handler registered under `name`; blank or unknown names are ignored
    pub fn unregister(&mut self, name: &str) {
        if name.trim().is_empty() {
            return;
        }
        if let Some(index) = self.position(name) {
            debug!(intent = name, "Unregistering intent");
            self.intents.remove(index);
        }
    }

    /// Set the default intent
    pub fn set_default(&mut self, handler: Arc<dyn IntentHandler>) {
        debug!(intent = handler.name(), "Setting default intent");
        self.default_intent = Some(handler);
    }

    /// Clear the default intent
    pub fn clear_default(&mut self) {
        self.default_intent = None;
    }

    /// Set the launch intent
    pub fn set_launch(&mut self, handler: Arc<dyn IntentHandler>) {
        debug!(intent = handler.name(), "Setting launch intent");
        self.launch_intent = Some(handler);
    }

    /// Clear the launch intent
    pub fn clear_launch(&mut self) {
        self.launch_intent = None;
    }

    /// Registered handlers in insertion order
    pub fn intents(&self) -> &[Arc<dyn IntentHandler>] {
        &self.intents
    }

    /// Handler registered under exactly `name`
    pub fn get(&self, name: &str) -> Option<&Arc<dyn IntentHandler>> {
        self.position(name).map(|index| &self.intents[index])
    }

    /// First registered handler the matching strategy accepts for `requested`
    pub fn resolve(&self, requested: &str) -> Option<&Arc<dyn IntentHandler>> {
        self.intents
            .iter()
            .find(|handler| self.matcher.matches(handler.name(), requested))
    }

    pub fn default_intent(&self) -> Option<&Arc<dyn IntentHandler>> {
        self.default_intent.as_ref()
    }

    pub fn launch_intent(&self) -> Option<&Arc<dyn IntentHandler>> {
        self.launch_intent.as_ref()
    }

    pub fn len(&self) -> usize {
        self.intents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.intents.iter().position(|handler| handler.name() == name)
    }
}

impl Default for IntentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for IntentRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.intents.iter().map(|h| h.name()).collect();
        f.debug_struct("IntentRegistry")
            .field("intents", &names)
            .field("default_intent", &self.default_intent.as_ref().map(|h| h.name()))
            .field("launch_intent", &self.launch_intent.as_ref().map(|h| h.name()))
            .field("matcher", &self.matcher.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::Intent;
    use crate::routing::CaseInsensitiveMatch;

    #[test]
    fn test_register_and_lookup() {
        let mut registry = IntentRegistry::new();
        registry.register(Intent::new("Hello").into_handler()).unwrap();
        registry.register(Intent::new("Goodbye").into_handler()).unwrap();

        assert_eq!(registry.len(), 2);
        assert!(registry.get("Hello").is_some());
        assert!(registry.get("hello").is_none());
        let names: Vec<&str> = registry.intents().iter().map(|h| h.name()).collect();
        assert_eq!(names, vec!["Hello", "Goodbye"]);
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut registry = IntentRegistry::new();
        let result = registry.register(Intent::new("   ").into_handler());
        assert!(matches!(result, Err(SkillError::InvalidIntent(_))));
        assert!(registry.is_empty());

        let result = registry.register(Intent::new("").into_handler());
        assert!(matches!(result, Err(SkillError::InvalidIntent(_))));
    }

    #[test]
    fn test_last_registration_wins() {
        let mut registry = IntentRegistry::new();
        registry
            .register(Intent::new("Hello").with_utterance("first").into_handler())
            .unwrap();
        registry.register(Intent::new("Other").into_handler()).unwrap();
        registry
            .register(Intent::new("Hello").with_utterance("second").into_handler())
            .unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("Hello").unwrap().utterances(), ["second".to_string()]);
        assert_eq!(registry.intents()[0].name(), "Hello");
    }

    #[test]
    fn test_unregister() {
        let mut registry = IntentRegistry::new();
        registry.register(Intent::new("Hello").into_handler()).unwrap();

        registry.unregister("");
        registry.unregister("  ");
        registry.unregister("Missing");
        assert_eq!(registry.len(), 1);

        registry.unregister("Hello");
        assert!(registry.get("Hello").is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_default_and_launch_are_independent() {
        let mut registry = IntentRegistry::new();
        registry.set_default(Intent::new("Fallback").into_handler());
        registry.set_launch(Intent::new("Welcome").into_handler());

        assert!(registry.is_empty());
        assert_eq!(registry.default_intent().unwrap().name(), "Fallback");
        assert_eq!(registry.launch_intent().unwrap().name(), "Welcome");

        registry.clear_default();
        assert!(registry.default_intent().is_none());
        assert!(registry.launch_intent().is_some());

        registry.clear_launch();
        assert!(registry.launch_intent().is_none());
    }

    #[test]
    fn test_resolve_uses_matcher() {
        let mut exact = IntentRegistry::new();
        exact.register(Intent::new("Hello").into_handler()).unwrap();
        assert!(exact.resolve("HELLO").is_none());

        let mut relaxed = IntentRegistry::new().with_matcher(CaseInsensitiveMatch::new());
        relaxed.register(Intent::new("Hello").into_handler()).unwrap();
        assert_eq!(relaxed.resolve("HELLO").unwrap().name(), "Hello");
    }
}
