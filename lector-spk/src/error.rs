//! Error types for lector-spk

use thiserror::Error;

/// Speech synthesis errors
#[derive(Error, Debug)]
pub enum SpeechError {
    /// Input text was empty or whitespace-only. Checked before any engine
    /// call; distinct from failures of the synthesis service itself.
    #[error("no text to convert to audio")]
    EmptyText,

    #[error("configuration error: {0}")]
    Config(String),

    #[error("TTS engine error: {0}")]
    Engine(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
