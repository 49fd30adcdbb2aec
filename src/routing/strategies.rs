//! Intent-name matching strategies

/// Trait for deciding whether a registered intent answers a requested name
pub trait IntentMatcher: Send + Sync {
    /// Whether `registered` should handle a request naming `requested`
    fn matches(&self, registered: &str, requested: &str) -> bool;

    /// Get the name of this strategy
    fn name(&self) -> &str;
}

/// Case-sensitive, byte-exact name equality
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatch;

impl ExactMatch {
    pub fn new() -> Self {
        Self
    }
}

impl IntentMatcher for ExactMatch {
    fn matches(&self, registered: &str, requested: &str) -> bool {
        registered == requested
    }

    fn name(&self) -> &str {
        "exact"
    }
}

/// Name equality ignoring case
#[derive(Debug, Clone, Copy, Default)]
pub struct CaseInsensitiveMatch;

impl CaseInsensitiveMatch {
    pub fn new() -> Self {
        Self
    }
}

impl IntentMatcher for CaseInsensitiveMatch {
    fn matches(&self, registered: &str, requested: &str) -> bool {
        registered.to_lowercase() == requested.to_lowercase()
    }

    fn name(&self) -> &str {
        "case_insensitive"
    }
}
