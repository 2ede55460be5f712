//! Practice round state machine.
//!
//! One round: fetch a word for a random letter, show its image, collect
//! guesses. A correct guess scores and schedules exactly one new round after
//! a fixed delay; an incorrect guess just re-prompts. The controller is pure;
//! the owning scene performs the fetch and runs the timer.

use crate::letter::Letter;

/// Points awarded per correct guess.
pub const SCORE_INCREMENT: u32 = 10;

/// Delay between a correct answer and the next round starting.
pub const NEW_ROUND_DELAY_MS: u64 = 1500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// A word for the round's letter is being fetched; guesses are ignored.
    AwaitingWord,
    /// The word image is on screen and guesses are accepted.
    AwaitingAnswer { letter: Letter },
    /// Correct answer given; a single new round is pending on the timer.
    AnswerCorrect { letter: Letter },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Score was incremented; the caller must schedule exactly one new round
    /// after [`NEW_ROUND_DELAY_MS`].
    Correct { score: u32 },
    /// No penalty, no lockout; keep accepting guesses.
    Incorrect,
    /// Not in a guessing phase (word still loading, or round already won).
    NotAccepting,
}

#[derive(Debug)]
pub struct PracticeRound {
    phase: RoundPhase,
    score: u32,
}

impl PracticeRound {
    /// Fresh controller with a zero score, as on every mode restart.
    pub fn new() -> Self {
        Self {
            phase: RoundPhase::AwaitingWord,
            score: 0,
        }
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// The word for `letter` finished loading; start accepting guesses.
    pub fn word_ready(&mut self, letter: Letter) {
        self.phase = RoundPhase::AwaitingAnswer { letter };
    }

    /// A fetch or image load failed; the round goes back to waiting while
    /// the scene schedules its retry.
    pub fn word_failed(&mut self) {
        self.phase = RoundPhase::AwaitingWord;
    }

    pub fn guess(&mut self, selected: Letter) -> GuessOutcome {
        match self.phase {
            RoundPhase::AwaitingAnswer { letter } if selected == letter => {
                self.score += SCORE_INCREMENT;
                self.phase = RoundPhase::AnswerCorrect { letter };
                GuessOutcome::Correct { score: self.score }
            }
            RoundPhase::AwaitingAnswer { .. } => GuessOutcome::Incorrect,
            _ => GuessOutcome::NotAccepting,
        }
    }

    /// The post-answer timer fired; move to the next round. Only valid from
    /// `AnswerCorrect`, so a stray timer cannot skip an unfinished round.
    pub fn next_round(&mut self) {
        if matches!(self.phase, RoundPhase::AnswerCorrect { .. }) {
            self.phase = RoundPhase::AwaitingWord;
        }
    }
}

impl Default for PracticeRound {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::parse(&c.to_string()).unwrap()
    }

    #[test]
    fn correct_guess_scores_once_and_locks_the_round() {
        let mut round = PracticeRound::new();
        round.word_ready(letter('C'));

        assert_eq!(
            round.guess(letter('C')),
            GuessOutcome::Correct { score: SCORE_INCREMENT }
        );
        // A second tap while the new-round timer runs must not score again.
        assert_eq!(round.guess(letter('C')), GuessOutcome::NotAccepting);
        assert_eq!(round.score(), SCORE_INCREMENT);
    }

    #[test]
    fn incorrect_guess_keeps_score_and_phase() {
        let mut round = PracticeRound::new();
        round.word_ready(letter('A'));

        assert_eq!(round.guess(letter('B')), GuessOutcome::Incorrect);
        assert_eq!(round.score(), 0);
        assert_eq!(round.phase(), RoundPhase::AwaitingAnswer { letter: letter('A') });
    }

    #[test]
    fn guesses_before_word_ready_are_ignored() {
        let mut round = PracticeRound::new();
        assert_eq!(round.guess(letter('A')), GuessOutcome::NotAccepting);
        assert_eq!(round.score(), 0);
    }

    #[test]
    fn next_round_only_advances_after_a_win() {
        let mut round = PracticeRound::new();
        round.word_ready(letter('K'));

        // Stray timer before any correct answer: nothing happens.
        round.next_round();
        assert_eq!(round.phase(), RoundPhase::AwaitingAnswer { letter: letter('K') });

        round.guess(letter('K'));
        round.next_round();
        assert_eq!(round.phase(), RoundPhase::AwaitingWord);
        // Score carries across rounds within the session.
        assert_eq!(round.score(), SCORE_INCREMENT);
    }

    #[test]
    fn failed_word_fetch_returns_to_waiting() {
        let mut round = PracticeRound::new();
        round.word_ready(letter('Z'));
        round.word_failed();
        assert_eq!(round.phase(), RoundPhase::AwaitingWord);
    }
}
