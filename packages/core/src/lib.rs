//! Core game logic for the alphabet egg game.
//!
//! Everything in this crate is pure and I/O free so the backend and the
//! desktop client can share it, and so the progression and round rules can
//! be tested without a display, audio or network environment:
//!
//! - [`letter`] - the validated `A`-`Z` letter type and random selection
//! - [`progression`] - the sequential unlock gate over 26 targets
//! - [`practice`] - the practice round state machine and score keeping
//! - [`layout`] - responsive layout arithmetic for the 1024x768 base design
//! - [`types`] - the word record shared with the backend wire format

pub mod layout;
pub mod letter;
pub mod practice;
pub mod progression;
pub mod types;

pub use letter::{Letter, LetterParseError, ALPHABET_LEN};
pub use practice::{GuessOutcome, PracticeRound, RoundPhase, NEW_ROUND_DELAY_MS, SCORE_INCREMENT};
pub use progression::{AttemptOutcome, Milestone, TargetProgression, TARGET_COUNT};
pub use types::WordRecord;

/// Fixed delay before a failed word lookup or image load is retried.
pub const RETRY_DELAY_MS: u64 = 3000;

/// Fixed delay after which an out-of-order warning dismisses itself.
pub const WARNING_DISMISS_MS: u64 = 3000;
