//! Configuration projections of the intent registry
//!
//! Read-only views derived from the registry for out-of-band registration
//! with the hosting platform: the intent schema document and the sample
//! utterance list. Neither is on the request path.

use serde_json::{json, Value};

use crate::aggregate::IntentRegistry;

/// Pretty-printed intent schema: `{"intents": [{"intent", "slots"}]}`
///
/// Always well-formed; an empty registry yields an empty `intents` array.
pub fn intent_schema(registry: &IntentRegistry) -> String {
    let intents: Vec<Value> = registry
        .intents()
        .iter()
        .map(|handler| {
            let slots: Vec<Value> = handler
                .slots()
                .iter()
                .map(|slot| json!({ "name": slot.name, "type": slot.slot_type }))
                .collect();
            json!({ "intent": handler.name(), "slots": slots })
        })
        .collect();

    format!("{:#}", json!({ "intents": intents }))
}

/// One `<intent> <utterance>` line per sample utterance, newline-joined
pub fn sample_utterances(registry: &IntentRegistry) -> String {
    registry
        .intents()
        .iter()
        .flat_map(|handler| {
            handler
                .utterances()
                .iter()
                .map(move |utterance| format!("{} {}", handler.name(), utterance))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::Intent;

    #[test]
    fn test_empty_registry_schema() {
        let schema = intent_schema(&IntentRegistry::new());
        let value: Value = serde_json::from_str(&schema).unwrap();
        assert_eq!(value, json!({ "intents": [] }));
    }

    #[test]
    fn test_empty_registry_utterances() {
        assert_eq!(sample_utterances(&IntentRegistry::new()), "");
    }

    #[test]
    fn test_schema_keeps_slot_order() {
        let mut registry = IntentRegistry::new();
        registry
            .register(
                Intent::new("Book")
                    .with_slot("Date", "AMAZON.DATE")
                    .with_slot("City", "AMAZON.US_CITY")
                    .into_handler(),
            )
            .unwrap();
        registry.register(Intent::new("Help").into_handler()).unwrap();

        let schema = intent_schema(&registry);
        assert!(schema.contains('\n'));
        let value: Value = serde_json::from_str(&schema).unwrap();
        assert_eq!(
            value,
            json!({
                "intents": [
                    {
                        "intent": "Book",
                        "slots": [
                            { "name": "Date", "type": "AMAZON.DATE" },
                            { "name": "City", "type": "AMAZON.US_CITY" }
                        ]
                    },
                    { "intent": "Help", "slots": [] }
                ]
            })
        );
    }

    #[test]
    fn test_utterances_follow_registration_order() {
        let mut registry = IntentRegistry::new();
        registry
            .register(
                Intent::new("Hello")
                    .with_utterance("say hello")
                    .with_utterance("greet me")
                    .into_handler(),
            )
            .unwrap();
        registry.register(Intent::new("Silent").into_handler()).unwrap();
        registry
            .register(Intent::new("Bye").with_utterance("goodbye").into_handler())
            .unwrap();

        assert_eq!(
            sample_utterances(&registry),
            "Hello say hello\nHello greet me\nBye goodbye"
        );
    }
}
