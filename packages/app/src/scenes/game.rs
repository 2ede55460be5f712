//! Main game scene: the 26-egg board, the unlock gate, and the word popup.
//!
//! Tapping the active egg reveals its letter and speaks it, then a word
//! example for that letter is fetched and shown as a popup with its image.
//! Tapping a locked egg shows a self-dismissing warning; tapping an already
//! broken egg just re-speaks the letter. The runner owns the timers, this
//! controller owns every other piece of state.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::time::sleep;

use alphabet_core::{
    AttemptOutcome, Letter, Milestone, TargetProgression, WordRecord, RETRY_DELAY_MS,
    WARNING_DISMISS_MS,
};

use crate::assets::{AssetError, ImageAssets, LoadedImage};
use crate::client::{LookupError, WordClient};
use crate::platform::{Speech, SpeechConfig};

/// A transient on-screen warning. It dismisses itself after
/// `dismiss_after` unless the player taps it away first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub dismiss_after: Duration,
}

/// What a tap on egg `index` produced.
#[derive(Debug)]
pub enum EggTap {
    /// The active egg broke; the scene should now show the word example.
    Revealed {
        letter: Letter,
        milestone: Option<Milestone>,
        /// True on the tap that breaks the final egg.
        sequence_complete: bool,
    },
    /// A previously broken egg; the letter was re-spoken, nothing changed.
    AlreadyBroken { letter: Letter },
    /// A locked egg; show the warning and leave the board alone.
    Locked { notice: Notice },
}

/// The word example popup: record plus its already-decoded image. The scene
/// keeps the cache key so dismissal can evict exactly this entry.
#[derive(Debug)]
pub struct WordPopup {
    pub record: WordRecord,
    pub image: Arc<LoadedImage>,
    key: String,
}

impl WordPopup {
    pub fn key(&self) -> &str {
        &self.key
    }
}

#[derive(Debug, Error)]
pub enum WordExampleError {
    #[error(transparent)]
    Lookup(#[from] LookupError),
    #[error(transparent)]
    Asset(#[from] AssetError),
}

impl WordExampleError {
    /// The message shown to the player. Kept short and non-technical.
    pub fn player_message(&self) -> String {
        match self {
            WordExampleError::Lookup(LookupError::NotFound) => {
                "No word found for this letter".to_string()
            }
            other => format!("Error loading word data: {other}"),
        }
    }
}

pub struct GameScene<S: Speech> {
    progression: TargetProgression,
    client: WordClient,
    assets: ImageAssets,
    speech: S,
    speech_config: SpeechConfig,
}

impl<S: Speech> GameScene<S> {
    pub fn new(client: WordClient, speech: S) -> Self {
        Self {
            progression: TargetProgression::new(),
            client,
            assets: ImageAssets::new(),
            speech,
            speech_config: SpeechConfig::default(),
        }
    }

    /// 0-based index of the egg that can be broken next, [`TARGET_COUNT`]
    /// once the board is finished.
    pub fn cursor(&self) -> usize {
        self.progression.cursor()
    }

    pub fn is_complete(&self) -> bool {
        self.progression.is_complete()
    }

    /// The letter shown on a broken egg, `None` while it is intact.
    pub fn revealed_letter(&self, index: usize) -> Option<Letter> {
        self.progression.revealed_letter(index)
    }

    /// Handles a tap on egg `index` and speaks the letter when there is one
    /// to speak. Speech failures never affect the board.
    pub fn tap_egg(&mut self, index: usize) -> EggTap {
        match self.progression.attempt(index) {
            AttemptOutcome::Revealed {
                letter,
                milestone,
                sequence_complete,
            } => {
                self.speak(&letter.to_string());
                EggTap::Revealed {
                    letter,
                    milestone,
                    sequence_complete,
                }
            }
            AttemptOutcome::AlreadyCompleted { letter } => {
                self.speak(&letter.to_string());
                EggTap::AlreadyBroken { letter }
            }
            AttemptOutcome::OutOfOrder { active } => {
                let active_letter =
                    Letter::from_index(active).map(|l| l.as_char()).unwrap_or('?');
                EggTap::Locked {
                    notice: Notice {
                        message: format!("Crack the {active_letter} egg first!"),
                        dismiss_after: Duration::from_millis(WARNING_DISMISS_MS),
                    },
                }
            }
        }
    }

    /// Fetches the word example for a revealed letter, loads its image under
    /// a fresh key, and speaks the word. Returns only once the popup is
    /// fully displayable.
    pub async fn show_word_example(
        &mut self,
        letter: Letter,
    ) -> Result<WordPopup, WordExampleError> {
        let record = self.client.get_word(letter).await?;
        let key = self.assets.asset_key(letter);
        let image = self.assets.load(&key, &record.image_url).await?;
        self.speak(&record.word);
        Ok(WordPopup { record, image, key })
    }

    /// Like [`show_word_example`], but on failure reports through
    /// `on_error`, waits the fixed retry delay and tries once more per
    /// failure until a popup comes back.
    ///
    /// [`show_word_example`]: Self::show_word_example
    pub async fn show_word_example_with_retry(
        &mut self,
        letter: Letter,
        mut on_error: impl FnMut(&str),
    ) -> WordPopup {
        loop {
            match self.show_word_example(letter).await {
                Ok(popup) => return popup,
                Err(err) => {
                    tracing::warn!(%letter, error = %err, "word example failed, retrying");
                    on_error(&err.player_message());
                    sleep(Duration::from_millis(RETRY_DELAY_MS)).await;
                }
            }
        }
    }

    /// The popup was closed; its image is dropped so the next reveal of the
    /// same letter can show a different random word.
    pub fn dismiss_popup(&mut self, popup: WordPopup) {
        self.assets.evict(&popup.key);
    }

    /// Restarts the board after the completion celebration.
    pub fn reset(&mut self) {
        self.progression.reset();
        self.assets.clear();
    }

    fn speak(&self, text: &str) {
        if let Err(err) = self.speech.speak(text, &self.speech_config) {
            tracing::debug!(%text, error = %err, "speech skipped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alphabet_core::TARGET_COUNT;
    use std::cell::RefCell;

    /// Records utterances instead of speaking them.
    #[derive(Default)]
    struct RecordingSpeech {
        spoken: RefCell<Vec<String>>,
    }

    impl Speech for RecordingSpeech {
        fn speak(&self, text: &str, _config: &SpeechConfig) -> Result<(), crate::platform::SpeechError> {
            self.spoken.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    fn scene() -> GameScene<RecordingSpeech> {
        GameScene::new(WordClient::new("http://localhost:8080/api"), RecordingSpeech::default())
    }

    #[test]
    fn active_egg_reveals_and_speaks_its_letter() {
        let mut scene = scene();
        match scene.tap_egg(0) {
            EggTap::Revealed {
                letter,
                sequence_complete,
                ..
            } => {
                assert_eq!(letter.as_char(), 'A');
                assert!(!sequence_complete);
            }
            other => panic!("expected reveal, got {other:?}"),
        }
        assert_eq!(scene.speech.spoken.borrow().as_slice(), ["A"]);
        assert_eq!(scene.cursor(), 1);
    }

    #[test]
    fn locked_egg_warns_and_names_the_active_letter() {
        let mut scene = scene();
        scene.tap_egg(0);
        match scene.tap_egg(5) {
            EggTap::Locked { notice } => {
                assert_eq!(notice.message, "Crack the B egg first!");
                assert_eq!(notice.dismiss_after, Duration::from_millis(WARNING_DISMISS_MS));
            }
            other => panic!("expected warning, got {other:?}"),
        }
        // The warning must not speak or advance anything.
        assert_eq!(scene.speech.spoken.borrow().len(), 1);
        assert_eq!(scene.cursor(), 1);
    }

    #[test]
    fn broken_egg_respeaks_without_advancing() {
        let mut scene = scene();
        scene.tap_egg(0);
        match scene.tap_egg(0) {
            EggTap::AlreadyBroken { letter } => assert_eq!(letter.as_char(), 'A'),
            other => panic!("expected already broken, got {other:?}"),
        }
        assert_eq!(scene.speech.spoken.borrow().as_slice(), ["A", "A"]);
        assert_eq!(scene.cursor(), 1);
    }

    #[test]
    fn final_egg_completes_the_sequence() {
        let mut scene = scene();
        for i in 0..TARGET_COUNT - 1 {
            scene.tap_egg(i);
        }
        match scene.tap_egg(TARGET_COUNT - 1) {
            EggTap::Revealed {
                sequence_complete, ..
            } => assert!(sequence_complete),
            other => panic!("expected reveal, got {other:?}"),
        }
        assert!(scene.is_complete());

        scene.reset();
        assert_eq!(scene.cursor(), 0);
        assert!(!scene.is_complete());
    }

    #[test]
    fn not_found_gets_a_friendly_message() {
        let err = WordExampleError::Lookup(LookupError::NotFound);
        assert_eq!(err.player_message(), "No word found for this letter");

        let err: WordExampleError =
            WordExampleError::Lookup(LookupError::HttpStatus(reqwest::StatusCode::BAD_GATEWAY));
        assert!(err.player_message().starts_with("Error loading word data:"));
    }
}
