use quiz_core::QuizError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Quiz(QuizError),
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Quiz(QuizError::Exhausted) => "The quiz is already over.",
            Self::Quiz(_) => "That question was already answered.",
            Self::Unknown => "Something went wrong. Please try again.",
        }
    }
}

impl From<QuizError> for ViewError {
    fn from(err: QuizError) -> Self {
        Self::Quiz(err)
    }
}
