//! Skill configuration

use serde::{Deserialize, Serialize};

use crate::errors::SkillResult;

/// Settings a skill is constructed from
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SkillConfig {
    /// Application identity requests must carry; `None` disables the check
    #[serde(default)]
    pub application_id: Option<String>,
}

impl SkillConfig {
    /// Configuration enforcing the given application identity
    pub fn with_application_id(application_id: impl Into<String>) -> Self {
        Self {
            application_id: Some(application_id.into()),
        }
    }

    /// Parse configuration from a JSON document
    pub fn from_json(raw: &str) -> SkillResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Configured identity, with blank values treated as unset
    pub fn effective_application_id(&self) -> Option<&str> {
        self.application_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
    }
}
