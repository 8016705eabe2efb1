//! Configuration for speech synthesis

use serde::{Deserialize, Serialize};

/// Voice settings for one synthesis request.
///
/// Built once from CLI arguments and immutable for the run. The language
/// code is passed through to the synthesis service as-is; an unsupported
/// code surfaces as a synthesis failure, not a local validation error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SpeechOptions {
    /// Language code (e.g. "en", "es")
    pub language: String,

    /// Request slower-paced speech
    pub slow: bool,
}

impl Default for SpeechOptions {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            slow: false,
        }
    }
}

impl SpeechOptions {
    pub fn validate(&self) -> Result<(), String> {
        if self.language.trim().is_empty() {
            return Err("language code must not be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let options = SpeechOptions::default();
        assert_eq!(options.language, "en");
        assert!(!options.slow);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn blank_language_is_rejected() {
        let options = SpeechOptions {
            language: "  ".to_string(),
            slow: false,
        };
        assert!(options.validate().is_err());
    }

    #[test]
    fn unknown_language_codes_pass_local_validation() {
        let options = SpeechOptions {
            language: "zz-ZZ".to_string(),
            slow: true,
        };
        assert!(options.validate().is_ok());
    }
}
