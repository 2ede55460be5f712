//! Platform capabilities injected into the scenes.
//!
//! Speech synthesis, fullscreen and cache clearing are narrow traits and
//! small structs so the round and progression logic stays testable without
//! a display or audio device.

pub mod shell;
pub mod speech;

pub use shell::CacheShell;
pub use speech::{NullSpeech, Speech, SpeechConfig, SpeechError};

/// Fullscreen control for the hosting window. The terminal runner has no
/// window, so its implementation just records the request.
pub trait Fullscreen {
    fn set_fullscreen(&self, enabled: bool);
}

#[derive(Debug, Default)]
pub struct NoopFullscreen;

impl Fullscreen for NoopFullscreen {
    fn set_fullscreen(&self, enabled: bool) {
        tracing::debug!(enabled, "fullscreen toggle ignored (no window)");
    }
}
