use thiserror::Error;

/// Option set shared by every true/false question, in display order.
pub const BOOLEAN_OPTIONS: [&str; 2] = ["True", "False"];

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("a question needs at least 2 options, got {len}")]
    TooFewOptions { len: usize },

    #[error("option {option:?} appears more than once")]
    DuplicateOption { option: String },

    #[error("correct answer {answer:?} is not one of the options")]
    AnswerNotAnOption { answer: String },
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A single quiz question.
///
/// Immutable once built. Construction guarantees the prompt is not blank, the
/// options are unique ignoring case, and the correct answer matches exactly
/// one of them ignoring case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    options: Vec<String>,
    correct_answer: String,
}

impl Question {
    /// Build a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` when the prompt is blank, fewer than two options
    /// are given, two options collide ignoring case, or the correct answer is
    /// not among the options.
    pub fn new(
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_answer: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into();
        let correct_answer = correct_answer.into();

        if prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if options.len() < 2 {
            return Err(QuestionError::TooFewOptions { len: options.len() });
        }

        let folded: Vec<String> = options.iter().map(|o| o.to_lowercase()).collect();
        for (idx, option) in folded.iter().enumerate() {
            if folded[..idx].contains(option) {
                return Err(QuestionError::DuplicateOption {
                    option: options[idx].clone(),
                });
            }
        }

        if !folded.contains(&correct_answer.to_lowercase()) {
            return Err(QuestionError::AnswerNotAnOption {
                answer: correct_answer,
            });
        }

        Ok(Self {
            prompt,
            options,
            correct_answer,
        })
    }

    /// Build a question for the boolean variant, offering `True` and `False`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` when the prompt is blank or the answer is
    /// neither `True` nor `False` (ignoring case).
    pub fn true_false(
        prompt: impl Into<String>,
        correct_answer: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let options = BOOLEAN_OPTIONS.iter().map(|o| (*o).to_string()).collect();
        Self::new(prompt, options, correct_answer)
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    /// Returns true iff `candidate` equals the correct answer, ignoring case.
    #[must_use]
    pub fn check_answer(&self, candidate: &str) -> bool {
        candidate.to_lowercase() == self.correct_answer.to_lowercase()
    }

    /// Options prefixed with a letter, e.g. `A. True`.
    pub fn option_labels(&self) -> impl Iterator<Item = String> + '_ {
        ('A'..='Z')
            .zip(self.options.iter())
            .map(|(letter, option)| format!("{letter}. {option}"))
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
