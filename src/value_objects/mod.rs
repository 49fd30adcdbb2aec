//! Value objects for the Skill domain
//!
//! These mirror the JSON envelope the spoken-assistant platform sends and
//! expects back. The router only reads the request type, the intent name and
//! the application identity; everything else is carried for handlers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Protocol version stamped on router-synthesized responses
pub const PROTOCOL_VERSION: &str = "1.0";

/// Request type discriminator for session start
pub const LAUNCH_REQUEST: &str = "LaunchRequest";
/// Request type discriminator for a recognized intent
pub const INTENT_REQUEST: &str = "IntentRequest";
/// Request type discriminator for session end
pub const SESSION_ENDED_REQUEST: &str = "SessionEndedRequest";

/// A request delivered to the skill
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SkillRequest {
    /// Envelope version sent by the platform
    #[serde(default = "default_version")]
    pub version: String,
    /// Session the request belongs to (absent on some out-of-session events)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,
    /// Device and system context
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<RequestContext>,
    /// The event itself
    pub request: RequestBody,
}

/// Conversational session information
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Whether this request opened the session
    #[serde(default)]
    pub new: bool,
    pub session_id: String,
    pub application: Application,
    /// Attributes carried over from the previous response
    #[serde(default)]
    pub attributes: HashMap<String, serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Application identity embedded in a request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub application_id: String,
}

/// Platform user identity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

/// Context block sent alongside every request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RequestContext {
    #[serde(rename = "System")]
    pub system: SystemContext,
}

/// System portion of the request context
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SystemContext {
    pub application: Application,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Body of a request: the event type plus type-specific payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RequestBody {
    /// Type discriminator, e.g. `IntentRequest`
    #[serde(rename = "type")]
    pub request_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Recognized intent (IntentRequest only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<RecognizedIntent>,
    /// Why the session ended (SessionEndedRequest only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<serde_json::Value>,
    /// Fields the router does not model
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// A recognized intent and its slot values
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecognizedIntent {
    pub name: String,
    #[serde(default)]
    pub slots: HashMap<String, Slot>,
}

/// A filled (or unfilled) slot on a recognized intent
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Slot {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Classification of a request by its type discriminator
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RequestKind {
    /// Session start
    Launch,
    /// Recognized intent
    Intent,
    /// Session end
    SessionEnded,
    /// Anything else, with the offending discriminator
    Unsupported(String),
}

impl RequestKind {
    /// Classify a type discriminator by exact equality
    pub fn classify(request_type: &str) -> Self {
        match request_type {
            LAUNCH_REQUEST => Self::Launch,
            INTENT_REQUEST => Self::Intent,
            SESSION_ENDED_REQUEST => Self::SessionEnded,
            other => Self::Unsupported(other.to_string()),
        }
    }
}

impl SkillRequest {
    /// Create a bare request of the given type for the given application
    pub fn new(request_type: impl Into<String>, application_id: impl Into<String>) -> Self {
        Self {
            version: default_version(),
            session: Some(Session {
                new: false,
                session_id: String::new(),
                application: Application {
                    application_id: application_id.into(),
                },
                attributes: HashMap::new(),
                user: None,
            }),
            context: None,
            request: RequestBody {
                request_type: request_type.into(),
                request_id: None,
                timestamp: None,
                locale: None,
                intent: None,
                reason: None,
                error: None,
                extra: HashMap::new(),
            },
        }
    }

    /// Create an IntentRequest naming the given intent
    pub fn intent(intent_name: impl Into<String>, application_id: impl Into<String>) -> Self {
        let mut request = Self::new(INTENT_REQUEST, application_id);
        request.request.intent = Some(RecognizedIntent {
            name: intent_name.into(),
            slots: HashMap::new(),
        });
        request
    }

    /// Attach a slot value to the request's intent
    pub fn with_slot(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let Some(intent) = self.request.intent.as_mut() {
            let name = name.into();
            intent.slots.insert(
                name.clone(),
                Slot {
                    name,
                    value: Some(value.into()),
                },
            );
        }
        self
    }

    /// Type discriminator of the request body
    pub fn request_type(&self) -> &str {
        &self.request.request_type
    }

    /// Classified request type
    pub fn kind(&self) -> RequestKind {
        RequestKind::classify(self.request_type())
    }

    /// Name of the recognized intent, if any
    pub fn intent_name(&self) -> Option<&str> {
        self.request.intent.as_ref().map(|i| i.name.as_str())
    }

    /// Application identity: session first, then system context
    pub fn application_id(&self) -> Option<&str> {
        self.session
            .as_ref()
            .map(|s| s.application.application_id.as_str())
            .or_else(|| {
                self.context
                    .as_ref()
                    .map(|c| c.system.application.application_id.as_str())
            })
    }

    /// Value of a named slot on the recognized intent
    pub fn slot_value(&self, name: &str) -> Option<&str> {
        self.request
            .intent
            .as_ref()
            .and_then(|i| i.slots.get(name))
            .and_then(|s| s.value.as_deref())
    }

    /// Session attribute carried from a previous response
    pub fn session_attribute(&self, key: &str) -> Option<&serde_json::Value> {
        self.session.as_ref().and_then(|s| s.attributes.get(key))
    }
}

/// A slot declared on an intent, exported with the intent schema
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct SlotDeclaration {
    pub name: String,
    #[serde(rename = "type")]
    pub slot_type: String,
}

impl SlotDeclaration {
    pub fn new(name: impl Into<String>, slot_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slot_type: slot_type.into(),
        }
    }
}

/// A response returned to the platform
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SkillResponse {
    pub version: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub session_attributes: HashMap<String, serde_json::Value>,
    pub response: ResponseBody,
    /// Envelope fields the router does not model
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Body of a response
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    /// Whether the platform should close the session after this response
    pub should_end_session: bool,
    /// Body fields the router does not model, e.g. `directives`
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Speech returned to the user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum OutputSpeech {
    PlainText { text: String },
    #[serde(rename = "SSML")]
    Ssml { ssml: String },
}

/// Card shown in the companion app
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum Card {
    Simple { title: String, content: String },
}

/// Speech used when the user does not answer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

impl SkillResponse {
    /// Neutral acknowledgment: version 1.0, session left open
    pub fn acknowledge() -> Self {
        Self {
            version: PROTOCOL_VERSION.to_string(),
            session_attributes: HashMap::new(),
            response: ResponseBody::default(),
            extra: HashMap::new(),
        }
    }

    /// Speak the text and end the session
    pub fn tell(text: impl Into<String>) -> Self {
        let mut response = Self::acknowledge();
        response.response.output_speech = Some(OutputSpeech::PlainText { text: text.into() });
        response.response.should_end_session = true;
        response
    }

    /// Speak the text and wait for an answer, reprompting if none comes
    pub fn ask(text: impl Into<String>, reprompt: impl Into<String>) -> Self {
        let mut response = Self::acknowledge();
        response.response.output_speech = Some(OutputSpeech::PlainText { text: text.into() });
        response.response.reprompt = Some(Reprompt {
            output_speech: OutputSpeech::PlainText {
                text: reprompt.into(),
            },
        });
        response
    }

    /// Attach a simple card
    pub fn with_card(mut self, title: impl Into<String>, content: impl Into<String>) -> Self {
        self.response.card = Some(Card::Simple {
            title: title.into(),
            content: content.into(),
        });
        self
    }

    /// Carry an attribute into the next request of this session
    pub fn with_session_attribute(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.session_attributes.insert(key.into(), value);
        self
    }

    /// Attach a body field the router does not model, e.g. `directives`
    pub fn with_body_field(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.response.extra.insert(key.into(), value);
        self
    }

    /// Whether the session should close after this response
    pub fn should_end_session(&self) -> bool {
        self.response.should_end_session
    }
}

fn default_version() -> String {
    PROTOCOL_VERSION.to_string()
}
