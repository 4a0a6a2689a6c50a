use thiserror::Error;

/// Precondition violations raised by `QuizSession`.
///
/// These are caller errors, not user-facing outcomes: a timeout is a regular
/// resolution and never shows up here.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("no questions remain in this session")]
    Exhausted,

    #[error("the current question has already been resolved")]
    AlreadyResolved,
}
