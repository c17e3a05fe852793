//! Speech synthesis — turns the leading portion of an analysis into an MP3
//! clip via the Google Translate TTS endpoint (the same service the original
//! gTTS library wraps). Synthesis failure never blocks the analysis flow.

use std::io::Write;
use std::path::Path;

use async_trait::async_trait;
use reqwest::Client;
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::warn;

const TRANSLATE_TTS_URL: &str = "https://translate.google.com/translate_tts";
const TTS_LANG: &str = "en";
/// The endpoint rejects long `q` values, so text is synthesized in chunks
/// and the MP3 frames are concatenated.
const CHUNK_MAX_CHARS: usize = 200;

#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("TTS endpoint returned status {0}")]
    Api(u16),

    #[error("failed to write audio file: {0}")]
    Io(#[from] std::io::Error),
}

/// A synthesized speech clip on disk. Ownership is exclusive: dropping the
/// artifact (or replacing it in a session) deletes the underlying file.
#[derive(Debug)]
pub struct AudioArtifact {
    file: NamedTempFile,
}

impl AudioArtifact {
    /// Writes MP3 bytes to a fresh named temp file owned by the artifact.
    pub fn from_mp3_bytes(bytes: &[u8]) -> Result<Self, SpeechError> {
        let mut file = tempfile::Builder::new()
            .prefix("jobfit-audio-")
            .suffix(".mp3")
            .tempfile()?;
        file.write_all(bytes)?;
        file.flush()?;
        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Eagerly deletes the clip. Dropping the artifact has the same effect,
    /// but this surfaces deletion errors instead of swallowing them.
    pub fn release(self) {
        if let Err(e) = self.file.close() {
            warn!("Failed to delete audio artifact: {e}");
        }
    }
}

/// Seam for speech synthesis, so the flow controller can be tested without
/// network access.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, text: &str) -> Result<AudioArtifact, SpeechError>;
}

/// Concrete synthesizer backed by the Translate TTS endpoint.
#[derive(Clone)]
pub struct TranslateTts {
    client: Client,
}

impl TranslateTts {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()?,
        })
    }
}

#[async_trait]
impl SpeechSynthesizer for TranslateTts {
    async fn synthesize(&self, text: &str) -> Result<AudioArtifact, SpeechError> {
        let mut mp3 = Vec::new();

        for chunk in chunk_text(text, CHUNK_MAX_CHARS) {
            let response = self
                .client
                .get(TRANSLATE_TTS_URL)
                .query(&[
                    ("ie", "UTF-8"),
                    ("client", "tw-ob"),
                    ("tl", TTS_LANG),
                    ("q", chunk.as_str()),
                ])
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                return Err(SpeechError::Api(status.as_u16()));
            }

            mp3.extend_from_slice(&response.bytes().await?);
        }

        AudioArtifact::from_mp3_bytes(&mp3)
    }
}

/// Splits text into whitespace-respecting chunks of at most `max_chars`
/// characters. A single word longer than the limit is hard-split on a
/// character boundary.
fn chunk_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0;

    for word in text.split_whitespace() {
        let word_chars = word.chars().count();

        if word_chars > max_chars {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
                current_chars = 0;
            }
            let mut piece = String::new();
            for (i, c) in word.chars().enumerate() {
                if i > 0 && i % max_chars == 0 {
                    chunks.push(std::mem::take(&mut piece));
                }
                piece.push(c);
            }
            if !piece.is_empty() {
                chunks.push(piece);
            }
            continue;
        }

        // +1 for the separating space
        if current_chars > 0 && current_chars + 1 + word_chars > max_chars {
            chunks.push(std::mem::take(&mut current));
            current_chars = 0;
        }
        if current_chars > 0 {
            current.push(' ');
            current_chars += 1;
        }
        current.push_str(word);
        current_chars += word_chars;
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}
