//! Practice scene: random-letter quiz rounds over the word lookup service.
//!
//! Each round picks a uniformly random letter (repeats allowed), fetches its
//! word and image, then takes guesses from the letter strip. The round state
//! machine and scoring live in the core crate; this controller adds the
//! network, the image cache and speech on top.

use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use tokio::time::sleep;

use alphabet_core::{GuessOutcome, Letter, PracticeRound, RoundPhase, WordRecord, RETRY_DELAY_MS};

use crate::assets::{ImageAssets, LoadedImage};
use crate::client::WordClient;
use crate::platform::{Speech, SpeechConfig};
use crate::scenes::game::WordExampleError;

/// The round currently on screen: the word record plus its decoded image.
#[derive(Debug)]
pub struct ActiveRound {
    pub record: WordRecord,
    pub image: Arc<LoadedImage>,
    key: String,
}

pub struct PracticeScene<S: Speech, R: Rng> {
    round: PracticeRound,
    client: WordClient,
    assets: ImageAssets,
    speech: S,
    speech_config: SpeechConfig,
    rng: R,
    current: Option<ActiveRound>,
}

impl<S: Speech, R: Rng> PracticeScene<S, R> {
    pub fn new(client: WordClient, speech: S, rng: R) -> Self {
        Self {
            round: PracticeRound::new(),
            client,
            assets: ImageAssets::new(),
            speech,
            speech_config: SpeechConfig::default(),
            rng,
            current: None,
        }
    }

    pub fn score(&self) -> u32 {
        self.round.score()
    }

    pub fn phase(&self) -> RoundPhase {
        self.round.phase()
    }

    pub fn current(&self) -> Option<&ActiveRound> {
        self.current.as_ref()
    }

    /// Starts one round: picks a random letter, fetches its word and image,
    /// and opens the round for guesses. On failure the round stays in the
    /// waiting phase and the error is returned for the retry schedule.
    pub async fn start_round(&mut self) -> Result<&ActiveRound, WordExampleError> {
        let letter = Letter::random(&mut self.rng);
        tracing::debug!(%letter, "starting practice round");

        let record = match self.client.get_word(letter).await {
            Ok(record) => record,
            Err(err) => {
                self.round.word_failed();
                return Err(err.into());
            }
        };
        let key = self.assets.asset_key(letter);
        let image = match self.assets.load(&key, &record.image_url).await {
            Ok(image) => image,
            Err(err) => {
                self.round.word_failed();
                return Err(err.into());
            }
        };

        // The previous round's image is no longer reachable from the UI.
        if let Some(previous) = self.current.take() {
            self.assets.evict(&previous.key);
        }

        self.round.word_ready(letter);
        self.current = Some(ActiveRound { record, image, key });
        Ok(self.current.as_ref().expect("round was just stored"))
    }

    /// Like [`start_round`], but each failure reports through `on_error`,
    /// waits the fixed retry delay and rolls a fresh random letter.
    ///
    /// [`start_round`]: Self::start_round
    pub async fn start_round_with_retry(
        &mut self,
        mut on_error: impl FnMut(&str),
    ) -> &ActiveRound {
        loop {
            match self.start_round().await {
                Ok(_) => break,
                Err(err) => {
                    tracing::warn!(error = %err, "practice round failed to start, retrying");
                    on_error(&err.player_message());
                    sleep(Duration::from_millis(RETRY_DELAY_MS)).await;
                }
            }
        }
        self.current.as_ref().expect("retry loop only exits with a round")
    }

    /// A tap on the letter strip. Correct guesses speak the word; the caller
    /// schedules the new-round timer.
    pub fn guess(&mut self, selected: Letter) -> GuessOutcome {
        let outcome = self.round.guess(selected);
        if let GuessOutcome::Correct { .. } = outcome {
            if let Some(active) = &self.current {
                self.speak(&active.record.word);
            }
        }
        outcome
    }

    /// The post-answer timer fired; close out the round so the next
    /// [`start_round`] can run.
    ///
    /// [`start_round`]: Self::start_round
    pub fn finish_round(&mut self) {
        self.round.next_round();
    }

    fn speak(&self, text: &str) {
        if let Err(err) = self.speech.speak(text, &self.speech_config) {
            tracing::debug!(%text, error = %err, "speech skipped");
        }
    }
}
