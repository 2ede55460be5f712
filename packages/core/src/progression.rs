//! Sequential unlock gate for the main game mode.
//!
//! 26 ordered targets and one cursor. Targets before the cursor are revealed,
//! the target at the cursor is active, targets after it are locked. The
//! cursor only ever moves forward, one step per successful attempt.

use crate::letter::{Letter, ALPHABET_LEN};

/// Number of letter targets in the main game sequence.
pub const TARGET_COUNT: usize = ALPHABET_LEN;

/// Progress celebration fired when the cursor crosses an exact fraction of
/// the sequence. With 26 targets only `Half` can actually occur; the quarter
/// marks are kept because the check is exact-fraction by design.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Milestone {
    Quarter,
    Half,
    ThreeQuarters,
}

/// Result of attempting a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// The active target was completed and the cursor advanced by one.
    Revealed {
        letter: Letter,
        milestone: Option<Milestone>,
        /// True exactly once, on the attempt that completes the sequence.
        sequence_complete: bool,
    },
    /// The target was already completed earlier; informational, no change.
    AlreadyCompleted { letter: Letter },
    /// The target is still locked; the active target must be completed first.
    OutOfOrder { active: usize },
}

#[derive(Debug, Default)]
pub struct TargetProgression {
    cursor: usize,
}

impl TargetProgression {
    pub fn new() -> Self {
        Self { cursor: 0 }
    }

    /// 0-based index of the currently active target. Equal to
    /// [`TARGET_COUNT`] once the sequence is complete.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_complete(&self) -> bool {
        self.cursor >= TARGET_COUNT
    }

    /// The letter revealed by a completed target, if that target is done.
    pub fn revealed_letter(&self, index: usize) -> Option<Letter> {
        if index < self.cursor {
            Letter::from_index(index)
        } else {
            None
        }
    }

    /// Attempts the target at `index`. Only the active target mutates state;
    /// everything else reports without advancing, which makes the gate
    /// idempotent under rapid repeated attempts at a stale index.
    pub fn attempt(&mut self, index: usize) -> AttemptOutcome {
        if index > self.cursor {
            return AttemptOutcome::OutOfOrder {
                active: self.cursor,
            };
        }

        if index < self.cursor {
            let letter =
                Letter::from_index(index).expect("index below cursor is a valid target");
            return AttemptOutcome::AlreadyCompleted { letter };
        }

        match Letter::from_index(index) {
            Some(letter) => {
                self.cursor += 1;
                AttemptOutcome::Revealed {
                    letter,
                    milestone: milestone_at(self.cursor),
                    sequence_complete: self.cursor == TARGET_COUNT,
                }
            }
            // cursor == TARGET_COUNT: the sequence is already finished and
            // there is no target here to attempt.
            None => AttemptOutcome::AlreadyCompleted {
                letter: Letter::from_index(TARGET_COUNT - 1).expect("last letter exists"),
            },
        }
    }

    /// Restarts the sequence, e.g. after the completion celebration.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}

fn milestone_at(cursor: usize) -> Option<Milestone> {
    if cursor * 4 == TARGET_COUNT {
        Some(Milestone::Quarter)
    } else if cursor * 2 == TARGET_COUNT {
        Some(Milestone::Half)
    } else if cursor * 4 == TARGET_COUNT * 3 {
        Some(Milestone::ThreeQuarters)
    } else {
        None
    }
}
