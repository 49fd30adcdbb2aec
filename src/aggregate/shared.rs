//! Skill shared across tasks
//!
//! Dispatch and exports take the read lock; registry and identity changes
//! take the write lock, so a request never observes a half-applied mutation.

use std::sync::Arc;
use tokio::sync::RwLock;

use super::Skill;
use crate::errors::SkillResult;
use crate::handlers::IntentHandler;
use crate::value_objects::{SkillRequest, SkillResponse};

/// Cloneable handle to a skill behind an async read-write lock
#[derive(Debug, Clone)]
pub struct SharedSkill {
    inner: Arc<RwLock<Skill>>,
}

impl SharedSkill {
    pub fn new(skill: Skill) -> Self {
        Self {
            inner: Arc::new(RwLock::new(skill)),
        }
    }

    /// Dispatch a request under the read lock
    pub async fn execute(&self, request: &SkillRequest) -> SkillResult<SkillResponse> {
        let skill = self.inner.read().await;
        skill.execute(request)
    }

    /// Deserialize, dispatch and serialize under the read lock
    pub async fn handle_json(&self, body: &str) -> SkillResult<String> {
        let skill = self.inner.read().await;
        skill.handle_json(body)
    }

    pub async fn add_intent(&self, handler: Arc<dyn IntentHandler>) -> SkillResult<()> {
        let mut skill = self.inner.write().await;
        skill.add_intent(handler)
    }

    pub async fn remove_intent(&self, name: &str) {
        let mut skill = self.inner.write().await;
        skill.remove_intent(name);
    }

    pub async fn set_default_intent(&self, handler: Arc<dyn IntentHandler>) {
        self.inner.write().await.set_default_intent(handler);
    }

    pub async fn clear_default_intent(&self) {
        self.inner.write().await.clear_default_intent();
    }

    pub async fn set_launch_intent(&self, handler: Arc<dyn IntentHandler>) {
        self.inner.write().await.set_launch_intent(handler);
    }

    pub async fn clear_launch_intent(&self) {
        self.inner.write().await.clear_launch_intent();
    }

    pub async fn set_application_id(&self, application_id: Option<String>) {
        self.inner.write().await.set_application_id(application_id);
    }

    pub async fn export_schema(&self) -> String {
        self.inner.read().await.export_schema()
    }

    pub async fn export_utterances(&self) -> String {
        self.inner.read().await.export_utterances()
    }
}

impl From<Skill> for SharedSkill {
    fn from(skill: Skill) -> Self {
        Self::new(skill)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SkillError;
    use crate::handlers::Intent;

    #[tokio::test]
    async fn test_shared_skill_dispatch_after_mutation() {
        let shared = SharedSkill::new(Skill::new());
        shared
            .add_intent(
                Intent::new("Hello")
                    .handled_by(|_| Ok(SkillResponse::tell("Hi")))
                    .into_handler(),
            )
            .await
            .unwrap();

        let worker = shared.clone();
        let response = tokio::spawn(async move {
            worker.execute(&SkillRequest::intent("Hello", "app")).await
        })
        .await
        .unwrap()
        .unwrap();
        assert_eq!(response, SkillResponse::tell("Hi"));

        shared.remove_intent("Hello").await;
        assert!(shared.execute(&SkillRequest::intent("Hello", "app")).await.is_err());
    }

    #[tokio::test]
    async fn test_shared_skill_clears_default_and_launch() {
        let shared = SharedSkill::new(Skill::new());
        shared
            .set_default_intent(
                Intent::new("Fallback")
                    .handled_by(|_| Ok(SkillResponse::tell("Sorry?")))
                    .into_handler(),
            )
            .await;
        shared
            .set_launch_intent(
                Intent::new("Welcome")
                    .handled_by(|_| Ok(SkillResponse::tell("Welcome")))
                    .into_handler(),
            )
            .await;

        let unknown = SkillRequest::intent("Unknown", "app");
        let launch = SkillRequest::new("LaunchRequest", "app");
        assert_eq!(shared.execute(&unknown).await.unwrap(), SkillResponse::tell("Sorry?"));
        assert_eq!(shared.execute(&launch).await.unwrap(), SkillResponse::tell("Welcome"));

        shared.clear_default_intent().await;
        assert!(matches!(
            shared.execute(&unknown).await,
            Err(SkillError::NoMatchingIntent(ref name)) if name == "Unknown"
        ));

        shared.clear_launch_intent().await;
        assert_eq!(shared.execute(&launch).await.unwrap(), SkillResponse::acknowledge());
    }

    #[test]
    fn test_shared_skill_exports() {
        let mut skill = Skill::new();
        skill
            .add_intent(Intent::new("Hello").with_utterance("say hello").into_handler())
            .unwrap();
        let shared = SharedSkill::from(skill);

        let utterances = tokio_test::block_on(shared.export_utterances());
        assert_eq!(utterances, "Hello say hello");
    }
}
