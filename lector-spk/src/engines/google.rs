//! Google Translate TTS engine
//!
//! Uses the unauthenticated translate_tts endpoint, which returns MP3 audio
//! for short text. The request is a single blocking round trip: no retry,
//! no timeout, no chunking.

use crate::config::SpeechOptions;
use crate::engines::TtsEngine;
use crate::error::SpeechError;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use tracing::debug;

const DEFAULT_ENDPOINT: &str = "https://translate.google.com/translate_tts";

/// Remote TTS engine backed by the Google Translate speech endpoint.
pub struct GoogleTranslateTtsEngine {
    client: Client,
    endpoint: String,
}

impl GoogleTranslateTtsEngine {
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT.to_string())
    }

    /// Create an engine against a custom endpoint. Used by tests to point
    /// at a local server.
    pub fn with_endpoint(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for GoogleTranslateTtsEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn tts_speed(slow: bool) -> &'static str {
    // The endpoint understands a playback-rate parameter rather than a
    // boolean; 0.24 matches the service's own "slow" preset.
    if slow {
        "0.24"
    } else {
        "1"
    }
}

#[async_trait]
impl TtsEngine for GoogleTranslateTtsEngine {
    async fn synthesize(&self, text: &str, options: &SpeechOptions) -> Result<Bytes, SpeechError> {
        debug!(
            chars = text.len(),
            language = %options.language,
            slow = options.slow,
            "requesting speech synthesis"
        );

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", options.language.as_str()),
                ("ttsspeed", tts_speed(options.slow)),
                ("q", text),
            ])
            .send()
            .await?
            .error_for_status()?;

        let audio = response.bytes().await?;
        if audio.is_empty() {
            return Err(SpeechError::Engine(
                "synthesis service returned no audio".to_string(),
            ));
        }
        Ok(audio)
    }

    fn name(&self) -> &str {
        "google-translate"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_parameter_matches_slow_flag() {
        assert_eq!(tts_speed(true), "0.24");
        assert_eq!(tts_speed(false), "1");
    }

    #[test]
    fn trailing_slash_is_stripped_from_endpoint() {
        let engine = GoogleTranslateTtsEngine::with_endpoint("http://localhost:9/tts/".to_string());
        assert_eq!(engine.endpoint, "http://localhost:9/tts");
    }
}
