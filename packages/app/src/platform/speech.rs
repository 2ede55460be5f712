//! Speech synthesis capability.

use thiserror::Error;

/// Voice parameters. The rate is deliberately a little slow so young
/// players can follow the letters and words being read aloud.
#[derive(Debug, Clone)]
pub struct SpeechConfig {
    pub language: String,
    pub rate: f32,
    pub pitch: f32,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            language: "en-US".to_string(),
            rate: 0.8,
            pitch: 1.0,
        }
    }
}

#[derive(Debug, Clone, Error)]
pub enum SpeechError {
    #[error("speech synthesis not supported on this platform")]
    NotSupported,
    #[error("speech failed: {0}")]
    SpeakFailed(String),
}

pub trait Speech {
    fn speak(&self, text: &str, config: &SpeechConfig) -> Result<(), SpeechError>;

    fn stop(&self) {}
}

/// Desktop fallback: no native synthesizer is assumed, the utterance is
/// only logged. Speech failures are never allowed to affect the game.
#[derive(Debug, Default)]
pub struct NullSpeech;

impl Speech for NullSpeech {
    fn speak(&self, text: &str, config: &SpeechConfig) -> Result<(), SpeechError> {
        tracing::debug!(%text, language = %config.language, rate = config.rate, "speech not supported, utterance dropped");
        Err(SpeechError::NotSupported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_child_friendly() {
        let config = SpeechConfig::default();
        assert_eq!(config.language, "en-US");
        assert!(config.rate < 1.0);
        assert_eq!(config.pitch, 1.0);
    }

    #[test]
    fn null_speech_reports_not_supported() {
        let err = NullSpeech.speak("Apple", &SpeechConfig::default()).unwrap_err();
        assert!(matches!(err, SpeechError::NotSupported));
    }
}
