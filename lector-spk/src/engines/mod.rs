//! TTS engine implementations

pub mod google;

use crate::config::SpeechOptions;
use crate::error::SpeechError;
use async_trait::async_trait;
use bytes::Bytes;

pub use google::GoogleTranslateTtsEngine;

/// Trait for TTS engines
#[async_trait]
pub trait TtsEngine: Send + Sync {
    /// Synthesize text to speech audio
    async fn synthesize(&self, text: &str, options: &SpeechOptions) -> Result<Bytes, SpeechError>;

    /// Get engine name
    fn name(&self) -> &str;
}
