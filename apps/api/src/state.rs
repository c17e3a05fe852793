use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::AnalysisClient;
use crate::session::SessionRegistry;
use crate::speech::SpeechSynthesizer;

/// Shared application state injected into all route handlers via Axum
/// extractors. The collaborators sit behind trait objects so tests can swap
/// in fakes.
#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn AnalysisClient>,
    pub tts: Arc<dyn SpeechSynthesizer>,
    pub sessions: SessionRegistry,
    /// Runtime configuration, kept alongside the collaborators for handlers
    /// that need it.
    #[allow(dead_code)]
    pub config: Config,
}
