//! Skill domain module
//!
//! This domain routes requests from a spoken-assistant platform to the intent
//! handlers a skill author registers. It provides:
//! - An intent registry with independent default and launch intents
//! - Request dispatch with application identity validation
//! - Overridable launch, intent and session-end hooks
//! - Intent schema and sample utterance projections for platform configuration
//!
//! Intent recognition happens upstream; the skill only routes an already
//! classified intent name to its handler.

pub mod aggregate;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod projections;
pub mod routing;
pub mod value_objects;

// Re-export main types
pub use aggregate::{IntentRegistry, SharedSkill, Skill};

pub use config::SkillConfig;

pub use errors::{SkillError, SkillResult};

pub use handlers::{Intent, IntentHandler};

pub use routing::{
    CaseInsensitiveMatch, ExactMatch, IntentMatcher, RequestDispatcher, StandardDispatcher,
};

pub use value_objects::{
    Application, Card, OutputSpeech, RecognizedIntent, Reprompt, RequestBody, RequestContext,
    RequestKind, ResponseBody, Session, SkillRequest, SkillResponse, Slot, SlotDeclaration,
    SystemContext, User, PROTOCOL_VERSION,
};
