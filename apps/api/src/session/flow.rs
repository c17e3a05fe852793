//! Step Flow Controller — the forward/backward navigation machine over a
//! session. Transitions are gated on input validation; the analyze
//! transition orchestrates the remote model call and speech synthesis.

use tracing::warn;

use crate::analysis::catalog::AnalysisOption;
use crate::errors::AppError;
use crate::llm_client::{AnalysisClient, LlmError};
use crate::session::{Session, Step};
use crate::speech::SpeechSynthesizer;

/// The audio clip covers only the leading portion of the analysis.
pub const SPOKEN_SUMMARY_CHARS: usize = 500;

impl Session {
    /// Stores extracted resume text. Field edits are plain data updates, not
    /// transitions; the guards on `continue_to_options` do the gating.
    pub fn set_resume_text(&mut self, text: String) {
        self.state.resume_text = Some(text);
    }

    pub fn set_job_description(&mut self, text: String) {
        self.state.job_description = text;
    }

    /// Selects an analysis option. A custom query accompanies the selection;
    /// passing `None` leaves any previously entered query in place.
    pub fn select_option(&mut self, option: AnalysisOption, custom_query: Option<String>) {
        self.state.analysis_option = Some(option);
        if let Some(query) = custom_query {
            self.state.custom_query = query;
        }
    }

    /// Upload → Options. Requires extracted resume text and a non-blank job
    /// description.
    pub fn continue_to_options(&mut self) -> Result<(), AppError> {
        if self.state.step != Step::Upload {
            return Err(AppError::Validation(
                "Already past the upload step.".to_string(),
            ));
        }
        let has_resume = self
            .state
            .resume_text
            .as_deref()
            .is_some_and(|t| !t.trim().is_empty());
        if !has_resume {
            return Err(AppError::Validation(
                "Please upload your resume to continue.".to_string(),
            ));
        }
        if self.state.job_description.trim().is_empty() {
            return Err(AppError::Validation(
                "Please paste the job description to continue.".to_string(),
            ));
        }
        self.state.step = Step::Options;
        Ok(())
    }

    /// Options → Upload or Results → Options. Unconditional where defined.
    pub fn back(&mut self) -> Result<(), AppError> {
        match self.state.step {
            Step::Options => {
                self.state.step = Step::Upload;
                Ok(())
            }
            Step::Results => {
                self.state.step = Step::Options;
                Ok(())
            }
            Step::Upload => Err(AppError::Validation(
                "Already at the upload step.".to_string(),
            )),
        }
    }

    /// Options → Results. Resolves the selected prompt, calls the remote
    /// model, and (best-effort) synthesizes a spoken summary. Any model
    /// failure leaves the session in `Options` with no partial result.
    pub async fn run_analysis(
        &mut self,
        llm: &dyn AnalysisClient,
        tts: &dyn SpeechSynthesizer,
    ) -> Result<(), AppError> {
        if self.state.step != Step::Options {
            return Err(AppError::Validation(
                "Analysis can only be run from the options step.".to_string(),
            ));
        }
        let option = self
            .state
            .analysis_option
            .ok_or_else(|| AppError::Validation("Please select an analysis type.".to_string()))?;
        if option == AnalysisOption::Custom && self.state.custom_query.trim().is_empty() {
            return Err(AppError::Validation(
                "Please enter your custom question.".to_string(),
            ));
        }
        let resume_text = self
            .state
            .resume_text
            .as_deref()
            .ok_or_else(|| AppError::Validation("Please upload your resume first.".to_string()))?;

        let prompt = option.prompt(&self.state.custom_query);
        let result = llm
            .generate(prompt.as_str(), resume_text, &self.state.job_description)
            .await
            .map_err(|e| match e {
                LlmError::Blocked { reason } => AppError::ContentBlocked(reason),
                other => AppError::Llm(other.to_string()),
            })?;

        if let Some(previous) = self.state.audio.take() {
            previous.release();
        }

        let summary = spoken_summary(&result);
        if !summary.trim().is_empty() {
            match tts.synthesize(&summary).await {
                Ok(artifact) => self.state.audio = Some(artifact),
                // Non-fatal: the flow continues without an audio clip.
                Err(e) => warn!("Speech synthesis failed: {e}"),
            }
        }

        self.state.analysis_result = Some(result);
        self.state.step = Step::Results;
        Ok(())
    }

    /// Results → Upload ("Start New Analysis"). Clears the analysis
    /// selection and result, releases the audio clip, and keeps the uploaded
    /// documents so the user can run a different analysis immediately.
    pub fn start_new_analysis(&mut self) -> Result<(), AppError> {
        if self.state.step != Step::Results {
            return Err(AppError::Validation(
                "A new analysis can only be started from the results step.".to_string(),
            ));
        }
        if let Some(audio) = self.state.audio.take() {
            audio.release();
        }
        self.state.analysis_option = None;
        self.state.analysis_result = None;
        self.state.custom_query.clear();
        self.state.step = Step::Upload;
        Ok(())
    }
}

/// First `SPOKEN_SUMMARY_CHARS` characters of the analysis, on a character
/// boundary.
fn spoken_summary(text: &str) -> String {
    text.chars().take(SPOKEN_SUMMARY_CHARS).collect()
}
