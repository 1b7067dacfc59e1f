//! Playing a batch of challenges.
//!
//! # Play State Machine
//!
//! ```text
//! Presented --check--> Checked{correct}
//!                      Checked{incorrect} --try_again--> RetryAllowed --check--> Checked{..}
//!                      Checked{incorrect} --show_answer--> AnswerShown   (no attempts left)
//! Checked{correct} | AnswerShown --next--> Presented (next challenge) | Advanced (last)
//! ```
//!
//! A correct first attempt earns `points_first_attempt`, a correct later
//! attempt `points_later_attempt`.

use super::{Challenge, GameError, GameResult, TermKind};
use crate::GameConfig;

/// Where the current challenge is in the play state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayState {
    /// The player is filling in the guess
    Presented,
    /// The guess was checked
    Checked { correct: bool },
    /// The player may edit the guess and check again
    RetryAllowed,
    /// The correct answer is displayed
    AnswerShown,
    /// The last challenge was left; the game is over
    Advanced,
}

/// A game in progress over one batch of challenges.
#[derive(Debug)]
pub struct GameSession {
    challenges: Vec<Challenge>,
    current: usize,
    state: PlayState,
    attempts: u32,
    // Points earned per challenge
    points: Vec<u32>,
    max_attempts: u32,
    points_first_attempt: u32,
    points_later_attempt: u32,
}

impl GameSession {
    /// Starts a session on the first challenge.
    ///
    /// # Panics
    ///
    /// Panics if `challenges` is empty.
    pub fn new(challenges: Vec<Challenge>, config: &GameConfig) -> Self {
        assert!(!challenges.is_empty(), "a game needs challenges");
        let points = vec![0; challenges.len()];
        GameSession {
            challenges,
            current: 0,
            state: PlayState::Presented,
            attempts: 0,
            points,
            max_attempts: config.max_attempts,
            points_first_attempt: config.points_first_attempt,
            points_later_attempt: config.points_later_attempt,
        }
    }

    pub fn challenges(&self) -> &[Challenge] {
        &self.challenges
    }

    /// 0-based index of the current challenge.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The challenge being played, or `None` once the game is over.
    pub fn current(&self) -> Option<&Challenge> {
        if self.is_finished() {
            None
        } else {
            self.challenges.get(self.current)
        }
    }

    pub fn current_mut(&mut self) -> Option<&mut Challenge> {
        if self.is_finished() {
            None
        } else {
            self.challenges.get_mut(self.current)
        }
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    /// Checks made on the current challenge.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn score(&self) -> u32 {
        self.points.iter().sum()
    }

    /// Points earned on each challenge so far.
    pub fn points(&self) -> &[u32] {
        &self.points
    }

    /// Score when every challenge is answered correctly on the first attempt.
    pub fn perfect_score(&self) -> u32 {
        self.challenges.len() as u32 * self.points_first_attempt
    }

    pub fn is_finished(&self) -> bool {
        self.state == PlayState::Advanced
    }

    /// Can the player check again after an incorrect answer?
    pub fn can_try_again(&self) -> bool {
        self.attempts < self.max_attempts
    }

    fn transition_error(&self, action: &'static str) -> GameError {
        if self.is_finished() {
            GameError::GameFinished
        } else {
            GameError::InvalidTransition {
                action,
                state: self.state,
            }
        }
    }

    /// Edits the current guess. Allowed while Presented or RetryAllowed.
    pub fn set_guess_quantity(
        &mut self,
        kind: TermKind,
        index: usize,
        quantity: u32,
    ) -> GameResult<()> {
        if !matches!(self.state, PlayState::Presented | PlayState::RetryAllowed) {
            return Err(self.transition_error("edit the guess"));
        }
        self.challenges[self.current]
            .guess_mut()
            .set_quantity(kind, index, quantity)
    }

    /// Checks the current guess and awards points if it is correct.
    pub fn check(&mut self) -> GameResult<bool> {
        if !matches!(self.state, PlayState::Presented | PlayState::RetryAllowed) {
            return Err(self.transition_error("check"));
        }
        self.attempts += 1;
        let correct = self.challenges[self.current].is_correct();
        if correct {
            self.points[self.current] = if self.attempts == 1 {
                self.points_first_attempt
            } else {
                self.points_later_attempt
            };
        }
        log::debug!(
            "challenge {}: attempt {} {}",
            self.current,
            self.attempts,
            if correct { "correct" } else { "incorrect" }
        );
        self.state = PlayState::Checked { correct };
        Ok(correct)
    }

    /// Lets the player edit the guess again after an incorrect check.
    pub fn try_again(&mut self) -> GameResult<()> {
        if self.state != (PlayState::Checked { correct: false }) || !self.can_try_again() {
            return Err(self.transition_error("try again"));
        }
        self.state = PlayState::RetryAllowed;
        Ok(())
    }

    /// Reveals the answer once every attempt is used up.
    pub fn show_answer(&mut self) -> GameResult<()> {
        if self.state != (PlayState::Checked { correct: false }) || self.can_try_again() {
            return Err(self.transition_error("show the answer"));
        }
        self.challenges[self.current].show_answer();
        self.state = PlayState::AnswerShown;
        Ok(())
    }

    /// Moves on after a correct answer or a shown answer.
    pub fn next(&mut self) -> GameResult<()> {
        if !matches!(
            self.state,
            PlayState::Checked { correct: true } | PlayState::AnswerShown
        ) {
            return Err(self.transition_error("advance"));
        }
        self.advance();
        Ok(())
    }

    /// Developer control: restarts the current challenge, forfeiting its points.
    pub fn replay_current(&mut self) -> GameResult<()> {
        if self.is_finished() {
            return Err(GameError::GameFinished);
        }
        self.challenges[self.current].reset();
        self.points[self.current] = 0;
        self.attempts = 0;
        self.state = PlayState::Presented;
        Ok(())
    }

    /// Developer control: skips the current challenge without points.
    pub fn skip_current(&mut self) -> GameResult<()> {
        if self.is_finished() {
            return Err(GameError::GameFinished);
        }
        self.points[self.current] = 0;
        self.advance();
        Ok(())
    }

    fn advance(&mut self) {
        self.attempts = 0;
        if self.current + 1 < self.challenges.len() {
            self.current += 1;
            self.state = PlayState::Presented;
        } else {
            log::debug!(
                "game over: score {} of {}",
                self.score(),
                self.perfect_score()
            );
            self.state = PlayState::Advanced;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ReactionId;
    use crate::game::ChallengeVisibility;
    use crate::BoxType;

    // 2H2[4] + O2[1] -> 2H2O[2], leftovers H2[2] O2[0]; After box interactive
    fn water() -> Challenge {
        let mut reaction = ReactionId::MakeWater.reaction();
        reaction.set_reactant_quantity(0, 4);
        reaction.set_reactant_quantity(1, 1);
        Challenge::new(reaction, BoxType::After, ChallengeVisibility::Both, false)
    }

    fn session(n: usize) -> GameSession {
        GameSession::new((0..n).map(|_| water()).collect(), &GameConfig::default())
    }

    fn answer_correctly(s: &mut GameSession) {
        s.set_guess_quantity(TermKind::Product, 0, 2).unwrap();
        s.set_guess_quantity(TermKind::Leftover, 0, 2).unwrap();
        s.set_guess_quantity(TermKind::Leftover, 1, 0).unwrap();
    }

    #[test]
    fn test_first_attempt_scores_two() {
        let mut s = session(2);
        answer_correctly(&mut s);
        assert!(s.check().unwrap());
        assert_eq!(s.state(), PlayState::Checked { correct: true });
        assert_eq!(s.score(), 2);
        s.next().unwrap();
        assert_eq!(s.current_index(), 1);
        assert_eq!(s.state(), PlayState::Presented);
        assert_eq!(s.attempts(), 0);
    }

    #[test]
    fn test_second_attempt_scores_one() {
        let mut s = session(1);
        assert!(!s.check().unwrap());
        s.try_again().unwrap();
        assert_eq!(s.state(), PlayState::RetryAllowed);
        answer_correctly(&mut s);
        assert!(s.check().unwrap());
        assert_eq!(s.score(), 1);
        s.next().unwrap();
        assert!(s.is_finished());
        assert!(s.current().is_none());
        assert_eq!(s.perfect_score(), 2);
    }

    #[test]
    fn test_answer_shown_after_attempts_run_out() {
        let mut s = session(1);
        s.check().unwrap();
        let err = s.show_answer().unwrap_err();
        assert!(matches!(err, GameError::InvalidTransition { .. }));
        s.try_again().unwrap();
        s.check().unwrap();
        let err = s.try_again().unwrap_err();
        assert!(matches!(err, GameError::InvalidTransition { .. }));
        s.show_answer().unwrap();
        assert_eq!(s.state(), PlayState::AnswerShown);
        assert!(s.current().unwrap().is_correct());
        assert_eq!(s.score(), 0);
        s.next().unwrap();
        assert_eq!(s.next(), Err(GameError::GameFinished));
    }

    #[test]
    fn test_guess_locked_after_check() {
        let mut s = session(1);
        s.check().unwrap();
        let err = s.set_guess_quantity(TermKind::Product, 0, 2).unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidTransition {
                action: "edit the guess",
                state: PlayState::Checked { correct: false }
            }
        );
    }

    #[test]
    fn test_cannot_advance_without_answer() {
        let mut s = session(2);
        assert!(matches!(s.next(), Err(GameError::InvalidTransition { .. })));
        s.check().unwrap();
        assert!(matches!(s.next(), Err(GameError::InvalidTransition { .. })));
    }

    #[test]
    fn test_replay_and_skip() {
        let mut s = session(2);
        answer_correctly(&mut s);
        s.check().unwrap();
        assert_eq!(s.score(), 2);

        s.replay_current().unwrap();
        assert_eq!(s.score(), 0);
        assert_eq!(s.state(), PlayState::Presented);
        assert_eq!(s.current().unwrap().guess().products()[0].quantity, 0);

        s.skip_current().unwrap();
        assert_eq!(s.current_index(), 1);
        s.skip_current().unwrap();
        assert!(s.is_finished());
        assert_eq!(s.replay_current(), Err(GameError::GameFinished));
        assert_eq!(s.points(), &[0, 0]);
    }
}
