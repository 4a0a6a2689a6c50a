use std::fmt;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::QuizError;
use crate::model::Question;

//
// ─── SCORE & PROGRESS ──────────────────────────────────────────────────────────
//

/// Correct answers out of the questions in a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.correct, self.total)
    }
}

/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub is_complete: bool,
}

/// Lifecycle of the question-slot at `position`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    /// Waiting for an answer or a timeout.
    Pending,
    /// An answer was recorded; the slot is waiting for `advance`.
    Resolved { correct: bool },
    /// Every question has been consumed.
    Finished,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One run of the quiz over a shuffled, fixed question list.
///
/// Answering and advancing are separate steps so a timeout can move on
/// without evaluating anything.
pub struct QuizSession {
    questions: Vec<Question>,
    position: usize,
    score: usize,
    slot: SlotState,
}

impl QuizSession {
    /// Shuffle `questions` with the thread-local RNG and start a session.
    ///
    /// An empty list is accepted and yields a session that is already finished.
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self::with_rng(questions, &mut rand::rng())
    }

    /// Start a session whose order is fully determined by `seed`.
    #[must_use]
    pub fn with_seed(questions: Vec<Question>, seed: u64) -> Self {
        Self::with_rng(questions, &mut StdRng::seed_from_u64(seed))
    }

    /// Start a session shuffled by the given RNG.
    #[must_use]
    pub fn with_rng<R: Rng + ?Sized>(mut questions: Vec<Question>, rng: &mut R) -> Self {
        questions.as_mut_slice().shuffle(rng);
        let slot = if questions.is_empty() {
            SlotState::Finished
        } else {
            SlotState::Pending
        };

        Self {
            questions,
            position: 0,
            score: 0,
            slot,
        }
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Index of the next unanswered question.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn slot(&self) -> SlotState {
        self.slot
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.position < self.questions.len()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.slot, SlotState::Finished)
    }

    /// The question at `position`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Exhausted` once every question has been consumed.
    pub fn current_question(&self) -> Result<&Question, QuizError> {
        self.questions.get(self.position).ok_or(QuizError::Exhausted)
    }

    /// Evaluate `candidate` against the current question and record the outcome.
    ///
    /// The score goes up by one on a correct answer. The position does not
    /// move; call `advance` for that.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Exhausted` when no question remains, and
    /// `QuizError::AlreadyResolved` when this slot was already answered.
    pub fn submit_answer(&mut self, candidate: &str) -> Result<bool, QuizError> {
        match self.slot {
            SlotState::Finished => return Err(QuizError::Exhausted),
            SlotState::Resolved { .. } => return Err(QuizError::AlreadyResolved),
            SlotState::Pending => {}
        }

        let correct = self.current_question()?.check_answer(candidate);
        if correct {
            self.score += 1;
        }
        self.slot = SlotState::Resolved { correct };
        Ok(correct)
    }

    /// Move to the next question-slot.
    ///
    /// Advancing a `Pending` slot counts it as unanswered.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Exhausted` if there is no current question.
    pub fn advance(&mut self) -> Result<(), QuizError> {
        if !self.has_next() {
            return Err(QuizError::Exhausted);
        }

        self.position += 1;
        self.slot = if self.has_next() {
            SlotState::Pending
        } else {
            SlotState::Finished
        };
        Ok(())
    }

    /// Resolve the current slot as timed out: no evaluation, no score change.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::AlreadyResolved` if an answer was recorded for this
    /// slot, and `QuizError::Exhausted` when no question remains.
    pub fn expire(&mut self) -> Result<(), QuizError> {
        match self.slot {
            SlotState::Pending => self.advance(),
            SlotState::Resolved { .. } => Err(QuizError::AlreadyResolved),
            SlotState::Finished => Err(QuizError::Exhausted),
        }
    }

    #[must_use]
    pub fn final_score(&self) -> Score {
        Score {
            correct: self.score,
            total: self.questions.len(),
        }
    }

    /// Number of slots with a recorded outcome, including a resolved current slot.
    #[must_use]
    pub fn resolved_count(&self) -> usize {
        match self.slot {
            SlotState::Resolved { .. } => self.position + 1,
            SlotState::Pending | SlotState::Finished => self.position,
        }
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            total: self.total(),
            answered: self.resolved_count(),
            remaining: self.questions.len().saturating_sub(self.position),
            is_complete: self.is_finished(),
        }
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("questions_len", &self.questions.len())
            .field("position", &self.position)
            .field("score", &self.score)
            .field("slot", &self.slot)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn build_question(id: usize, answer: &str) -> Question {
        Question::true_false(format!("Question {id}?"), answer).unwrap()
    }

    fn build_questions(n: usize) -> Vec<Question> {
        (0..n)
            .map(|i| build_question(i, if i % 2 == 0 { "True" } else { "False" }))
            .collect()
    }

    fn sorted_prompts(questions: &[Question]) -> Vec<String> {
        let mut prompts: Vec<String> = questions.iter().map(|q| q.prompt().to_string()).collect();
        prompts.sort();
        prompts
    }

    fn answer_correctly(session: &mut QuizSession) -> bool {
        let answer = session.current_question().unwrap().correct_answer().to_string();
        session.submit_answer(&answer).unwrap()
    }

    #[test]
    fn session_is_a_permutation_of_the_input() {
        let input = build_questions(12);
        for seed in 0..20 {
            let session = QuizSession::with_seed(input.clone(), seed);
            assert_eq!(session.total(), input.len());
            assert_eq!(sorted_prompts(session.questions()), sorted_prompts(&input));
        }
    }

    #[test]
    fn same_seed_gives_same_order() {
        let input = build_questions(8);
        let a = QuizSession::with_seed(input.clone(), 42);
        let b = QuizSession::with_seed(input, 42);
        assert_eq!(a.questions(), b.questions());
    }

    #[test]
    fn shuffle_reaches_every_first_position() {
        let input = build_questions(3);
        let mut firsts = std::collections::HashSet::new();
        for seed in 0..200 {
            let session = QuizSession::with_seed(input.clone(), seed);
            firsts.insert(session.questions()[0].prompt().to_string());
        }
        assert_eq!(firsts.len(), 3);
    }

    #[test]
    fn new_session_starts_pending_at_zero() {
        let session = QuizSession::new(build_questions(2));
        assert_eq!(session.position(), 0);
        assert_eq!(session.score(), 0);
        assert_eq!(session.slot(), SlotState::Pending);
        assert!(session.has_next());
    }

    #[test]
    fn has_next_turns_false_after_len_advances_and_stays_false() {
        let mut session = QuizSession::with_seed(build_questions(4), 7);
        for _ in 0..4 {
            assert!(session.has_next());
            session.advance().unwrap();
        }
        assert!(!session.has_next());
        assert_eq!(session.advance(), Err(QuizError::Exhausted));
        assert!(!session.has_next());
        assert_eq!(session.position(), 4);
        assert_eq!(session.slot(), SlotState::Finished);
    }

    #[test]
    fn current_question_fails_loudly_when_exhausted() {
        let mut session = QuizSession::with_seed(build_questions(1), 1);
        session.advance().unwrap();
        assert_eq!(session.current_question().unwrap_err(), QuizError::Exhausted);
        assert_eq!(session.submit_answer("True"), Err(QuizError::Exhausted));
    }

    #[test]
    fn submit_is_case_insensitive_and_scores_once() {
        for candidate in ["true", "TRUE", "True"] {
            let mut session = QuizSession::new(vec![build_question(1, "True")]);
            assert_eq!(session.submit_answer(candidate), Ok(true));
            assert_eq!(session.score(), 1);
            assert_eq!(session.position(), 0);
        }
    }

    #[test]
    fn second_submission_for_same_slot_is_refused() {
        let mut session = QuizSession::new(vec![build_question(1, "True")]);
        assert_eq!(session.submit_answer("True"), Ok(true));
        assert_eq!(
            session.submit_answer("True"),
            Err(QuizError::AlreadyResolved)
        );
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn timeout_advances_without_scoring() {
        let mut session = QuizSession::with_seed(build_questions(3), 3);
        session.expire().unwrap();
        assert_eq!(session.position(), 1);
        assert_eq!(session.score(), 0);
        assert_eq!(session.slot(), SlotState::Pending);
    }

    #[test]
    fn timeout_after_answer_is_refused() {
        let mut session = QuizSession::with_seed(build_questions(2), 3);
        answer_correctly(&mut session);
        assert_eq!(session.expire(), Err(QuizError::AlreadyResolved));
        assert_eq!(session.position(), 0);
    }

    #[test]
    fn score_never_exceeds_resolved_slots_nor_decreases() {
        let mut session = QuizSession::with_seed(build_questions(6), 11);
        let mut last_score = 0;
        let mut step = 0;
        while session.has_next() {
            assert!(session.score() <= session.position());
            if step % 3 == 2 {
                session.expire().unwrap();
            } else {
                answer_correctly(&mut session);
                assert!(session.score() <= session.resolved_count());
                session.advance().unwrap();
            }
            assert!(session.score() >= last_score);
            assert!(session.score() <= session.position());
            last_score = session.score();
            step += 1;
        }
        assert_eq!(session.final_score(), Score { correct: 4, total: 6 });
    }

    #[test]
    fn all_correct_scores_three_of_three() {
        let mut session = QuizSession::new(build_questions(3));
        while session.has_next() {
            assert!(answer_correctly(&mut session));
            session.advance().unwrap();
        }
        assert_eq!(session.final_score(), Score { correct: 3, total: 3 });
        assert!(!session.has_next());
        assert_eq!(session.final_score().to_string(), "3/3");
    }

    #[test]
    fn wrong_then_timeout_scores_zero_of_two() {
        let mut session = QuizSession::new(build_questions(2));
        let wrong = if session.current_question().unwrap().check_answer("True") {
            "False"
        } else {
            "True"
        };
        assert_eq!(session.submit_answer(wrong), Ok(false));
        session.advance().unwrap();
        session.expire().unwrap();

        assert_eq!(session.final_score(), Score { correct: 0, total: 2 });
        assert!(!session.has_next());
    }

    #[test]
    fn empty_session_is_immediately_finished() {
        let mut session = QuizSession::new(Vec::new());
        assert!(!session.has_next());
        assert!(session.is_finished());
        assert_eq!(session.final_score(), Score { correct: 0, total: 0 });
        assert_eq!(session.advance(), Err(QuizError::Exhausted));
        assert_eq!(session.expire(), Err(QuizError::Exhausted));
    }

    #[test]
    fn progress_tracks_resolution() {
        let mut session = QuizSession::with_seed(build_questions(2), 5);
        answer_correctly(&mut session);
        let progress = session.progress();
        assert_eq!(progress.answered, 1);
        assert_eq!(progress.remaining, 2);
        assert!(!progress.is_complete);

        session.advance().unwrap();
        session.expire().unwrap();
        let progress = session.progress();
        assert_eq!(progress.answered, 2);
        assert_eq!(progress.remaining, 0);
        assert!(progress.is_complete);
    }
}
