use std::sync::Arc;

use quiz_core::{Question, QuizSession};

use crate::error::QuizStartError;
use crate::question_bank::build_question_bank;
use crate::source::QuestionSource;

/// Loads questions from a source and starts shuffled quiz sessions.
#[derive(Clone)]
pub struct QuizService {
    source: Arc<dyn QuestionSource>,
    seed: Option<u64>,
}

impl QuizService {
    #[must_use]
    pub fn new(source: Arc<dyn QuestionSource>) -> Self {
        Self { source, seed: None }
    }

    /// Make every session started by this service use the same shuffle.
    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Fetch and validate the question bank.
    ///
    /// # Errors
    ///
    /// Returns `QuizStartError::NoQuestions` when the source yields nothing,
    /// otherwise propagates source and validation failures.
    pub async fn load_questions(&self) -> Result<Vec<Question>, QuizStartError> {
        let records = self.source.fetch().await?;
        let questions = build_question_bank(records)?;
        if questions.is_empty() {
            return Err(QuizStartError::NoQuestions);
        }
        tracing::info!(count = questions.len(), "question bank ready");
        Ok(questions)
    }

    /// Start a new session over `questions`, freshly shuffled.
    #[must_use]
    pub fn start_session(&self, questions: Vec<Question>) -> QuizSession {
        let session = match self.seed {
            Some(seed) => QuizSession::with_seed(questions, seed),
            None => QuizSession::new(questions),
        };
        tracing::debug!(total = session.total(), seeded = self.seed.is_some(), "quiz session started");
        session
    }
}
