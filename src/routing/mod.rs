//! Request routing: dispatch hooks and intent-name matching strategies

pub mod dispatcher;
pub mod strategies;

pub use dispatcher::{
    dispatch, dispatch_launch, end_session, resolve_intent, validate_application,
    RequestDispatcher, StandardDispatcher,
};
pub use strategies::{CaseInsensitiveMatch, ExactMatch, IntentMatcher};
