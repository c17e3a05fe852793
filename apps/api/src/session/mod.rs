//! Session state — one isolated mutable record per user session, held in a
//! registry keyed by session id. Sessions are never shared and never
//! persisted; deleting a session (or dropping the registry) releases any
//! audio artifact it still holds.

pub mod flow;
pub mod handlers;

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::analysis::catalog::AnalysisOption;
use crate::speech::AudioArtifact;

/// Where the user is in the three-step flow. The enum makes out-of-range
/// steps unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Upload,
    Options,
    Results,
}

impl Step {
    /// 1-based position, as shown in the progress indicator.
    pub fn number(self) -> u8 {
        match self {
            Step::Upload => 1,
            Step::Options => 2,
            Step::Results => 3,
        }
    }
}

/// The mutable per-session record. Mutated exclusively through the flow
/// controller methods on [`Session`].
#[derive(Debug)]
pub struct SessionState {
    pub step: Step,
    pub resume_text: Option<String>,
    pub job_description: String,
    pub analysis_option: Option<AnalysisOption>,
    pub custom_query: String,
    pub analysis_result: Option<String>,
    pub audio: Option<AudioArtifact>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            step: Step::Upload,
            resume_text: None,
            job_description: String::new(),
            analysis_option: None,
            custom_query: String::new(),
            analysis_result: None,
            audio: None,
        }
    }
}

/// A session context: identity plus its state. Each session owns its own
/// controller instance — the flow methods in [`flow`] — with no ambient
/// globals.
#[derive(Debug)]
pub struct Session {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub state: SessionState,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            state: SessionState::default(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps session ids to isolated sessions. Handlers clone the per-session
/// `Arc<Mutex<_>>` and drop the registry lock before doing any work, so one
/// session's (possibly slow) collaborator calls never block another's.
#[derive(Clone, Default)]
pub struct SessionRegistry {
    sessions: Arc<RwLock<HashMap<Uuid, Arc<Mutex<Session>>>>>,
}

impl SessionRegistry {
    pub async fn create(&self) -> Arc<Mutex<Session>> {
        let session = Session::new();
        let id = session.id;
        let handle = Arc::new(Mutex::new(session));
        self.sessions.write().await.insert(id, handle.clone());
        handle
    }

    pub async fn get(&self, id: Uuid) -> Option<Arc<Mutex<Session>>> {
        self.sessions.read().await.get(&id).cloned()
    }

    /// Removes a session. Once the last handle is dropped, the session's
    /// audio artifact (if any) is deleted with it.
    pub async fn remove(&self, id: Uuid) -> Option<Arc<Mutex<Session>>> {
        self.sessions.write().await.remove(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_numbers_stay_in_range() {
        for step in [Step::Upload, Step::Options, Step::Results] {
            assert!((1..=3).contains(&step.number()));
        }
        assert_eq!(Step::Upload.number(), 1);
        assert_eq!(Step::Options.number(), 2);
        assert_eq!(Step::Results.number(), 3);
    }

    #[test]
    fn test_new_session_starts_at_upload_with_defaults() {
        let session = Session::new();
        assert_eq!(session.state.step, Step::Upload);
        assert!(session.state.resume_text.is_none());
        assert!(session.state.job_description.is_empty());
        assert!(session.state.analysis_option.is_none());
        assert!(session.state.analysis_result.is_none());
        assert!(session.state.audio.is_none());
    }

    #[tokio::test]
    async fn test_registry_isolates_sessions() {
        let registry = SessionRegistry::default();
        let a = registry.create().await;
        let b = registry.create().await;

        a.lock().await.state.job_description = "backend role".to_string();

        let (a_id, b_id) = (a.lock().await.id, b.lock().await.id);
        assert_ne!(a_id, b_id);
        assert!(b.lock().await.state.job_description.is_empty());

        assert!(registry.get(a_id).await.is_some());
        assert!(registry.remove(a_id).await.is_some());
        assert!(registry.get(a_id).await.is_none());
        assert!(registry.get(b_id).await.is_some());
    }

    #[tokio::test]
    async fn test_unknown_session_id_resolves_to_none() {
        let registry = SessionRegistry::default();
        assert!(registry.get(Uuid::new_v4()).await.is_none());
    }
}
