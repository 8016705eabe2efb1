//! lector-spk: speech synthesis for lector
//!
//! Turns extracted text into an audio file:
//! - `TtsEngine` trait over external synthesis capabilities
//! - Google Translate TTS engine (remote, mp3 output)
//! - `SpeechSynthesizer` adapter that validates input and persists audio

pub mod config;
pub mod engines;
pub mod error;
pub mod synthesizer;

pub use config::SpeechOptions;
pub use engines::TtsEngine;
pub use error::SpeechError;
pub use synthesizer::SpeechSynthesizer;
