use std::env;
use std::time::Duration;

use quiz_core::DEFAULT_DURATION_UNITS;

pub const DEFAULT_API_URL: &str = "https://opentdb.com/api.php";
pub const DEFAULT_AMOUNT: u32 = 10;
pub const DEFAULT_FEEDBACK_DELAY: Duration = Duration::from_millis(2000);

/// Question flavour requested from the trivia API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuestionType {
    #[default]
    Boolean,
}

impl QuestionType {
    #[must_use]
    pub fn as_query(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
        }
    }
}

/// Runtime knobs for a quiz run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    pub base_url: String,
    pub amount: u32,
    pub question_type: QuestionType,
    pub timer_secs: u32,
    pub feedback_delay: Duration,
    pub seed: Option<u64>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.into(),
            amount: DEFAULT_AMOUNT,
            question_type: QuestionType::Boolean,
            timer_secs: DEFAULT_DURATION_UNITS,
            feedback_delay: DEFAULT_FEEDBACK_DELAY,
            seed: None,
        }
    }
}

impl QuizConfig {
    /// Defaults overridden by `QUIZ_*` environment variables.
    ///
    /// Values that do not parse are ignored with a warning.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup("QUIZ_API_URL").filter(|v| !v.trim().is_empty()) {
            config.base_url = url.trim().to_string();
        }
        if let Some(amount) = parse_var(&lookup, "QUIZ_AMOUNT") {
            config.amount = amount;
        }
        if let Some(secs) = parse_var(&lookup, "QUIZ_TIMER_SECS") {
            config.timer_secs = secs;
        }
        if let Some(ms) = parse_var::<u64>(&lookup, "QUIZ_FEEDBACK_MS") {
            config.feedback_delay = Duration::from_millis(ms);
        }
        if let Some(seed) = parse_var(&lookup, "QUIZ_SEED") {
            config.seed = Some(seed);
        }

        config
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparsable environment value");
            None
        }
    }
}
