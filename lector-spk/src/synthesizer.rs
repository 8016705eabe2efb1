//! Speech synthesizer adapter: validate text, synthesize, persist audio

use crate::config::SpeechOptions;
use crate::engines::{GoogleTranslateTtsEngine, TtsEngine};
use crate::error::SpeechError;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Adapter between extracted text and a TTS engine.
///
/// Owns the engine; the single operation synthesizes text and writes the
/// resulting audio to disk.
pub struct SpeechSynthesizer {
    engine: Arc<dyn TtsEngine>,
}

impl SpeechSynthesizer {
    /// Create a synthesizer with the default remote engine.
    pub fn new() -> Self {
        Self::with_engine(Arc::new(GoogleTranslateTtsEngine::new()))
    }

    /// Create a synthesizer with an explicit engine.
    pub fn with_engine(engine: Arc<dyn TtsEngine>) -> Self {
        Self { engine }
    }

    /// Synthesize `text` and write the audio to `output_path`, overwriting
    /// any existing file.
    ///
    /// Fails with [`SpeechError::EmptyText`] before touching the engine when
    /// the text is empty or whitespace-only. Engine and write failures are
    /// surfaced unchanged; nothing is retried.
    pub async fn synthesize_to_file(
        &self,
        text: &str,
        output_path: &Path,
        options: &SpeechOptions,
    ) -> Result<(), SpeechError> {
        if text.trim().is_empty() {
            return Err(SpeechError::EmptyText);
        }
        options.validate().map_err(SpeechError::Config)?;

        let audio = self.engine.synthesize(text, options).await?;
        tokio::fs::write(output_path, &audio).await?;

        info!(
            engine = self.engine.name(),
            bytes = audio.len(),
            path = %output_path.display(),
            "saved synthesized audio"
        );
        Ok(())
    }
}

impl Default for SpeechSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}
