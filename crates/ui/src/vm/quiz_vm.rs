use quiz_core::{CountdownToken, QuizError, QuizSession, Score, TimerController, TimerEvent};

/// Outcome shown on the question card while waiting to move on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Wrong,
    TimedOut,
}

impl Feedback {
    #[must_use]
    pub fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }
}

/// Presentation state for one quiz run.
///
/// Owns the session and its countdown. Every resolution of a question-slot
/// goes through here so that an answer and a timeout can never both land on
/// the same slot: answering cancels the countdown, and expiry closes input.
pub struct QuizVm {
    session: QuizSession,
    timer: TimerController,
    duration: u32,
    time_left: u32,
    feedback: Option<Feedback>,
    round: u64,
}

impl QuizVm {
    #[must_use]
    pub fn new(session: QuizSession, duration: u32) -> Self {
        let timer = TimerController::new()
            .with_on_expire(|| tracing::debug!("question timed out"));
        Self {
            session,
            timer,
            duration,
            time_left: duration,
            feedback: None,
            round: 0,
        }
    }

    /// Show the current question and start its countdown.
    ///
    /// Returns `None` once the quiz is over.
    pub fn begin_question(&mut self) -> Option<CountdownToken> {
        self.feedback = None;
        self.time_left = self.duration;
        if !self.session.has_next() {
            self.timer.cancel();
            return None;
        }
        Some(self.timer.start(self.duration))
    }

    /// Record the user's choice for the current question.
    ///
    /// Returns `Ok(None)` when input is closed (feedback showing or quiz over).
    ///
    /// # Errors
    ///
    /// Propagates engine precondition violations.
    pub fn answer(&mut self, choice: &str) -> Result<Option<Feedback>, QuizError> {
        if !self.accepts_input() {
            return Ok(None);
        }
        self.timer.cancel();

        let correct = self.session.submit_answer(choice)?;
        let feedback = if correct {
            Feedback::Correct
        } else {
            Feedback::Wrong
        };
        tracing::debug!(choice, correct, position = self.session.position(), "answer recorded");
        self.feedback = Some(feedback);
        Ok(Some(feedback))
    }

    /// Feed one elapsed unit into the countdown identified by `token`.
    pub fn tick(&mut self, token: CountdownToken) -> Option<TimerEvent> {
        let event = self.timer.tick(token)?;
        match event {
            TimerEvent::Tick { remaining } => self.time_left = remaining,
            TimerEvent::Expired => {
                self.time_left = 0;
                self.feedback = Some(Feedback::TimedOut);
            }
        }
        Some(event)
    }

    /// Settle the slot whose feedback is showing.
    ///
    /// `round` must be the value of `round()` taken when the feedback started;
    /// a stale round (the quiz was restarted meanwhile) returns `Ok(false)`.
    ///
    /// # Errors
    ///
    /// Propagates engine precondition violations.
    pub fn next_question(&mut self, round: u64) -> Result<bool, QuizError> {
        if round != self.round {
            return Ok(false);
        }
        match self.feedback.take() {
            Some(Feedback::TimedOut) => self.session.expire()?,
            Some(Feedback::Correct | Feedback::Wrong) => self.session.advance()?,
            None => return Ok(false),
        }
        Ok(true)
    }

    /// Throw away the current run and start over with `session`.
    pub fn restart(&mut self, session: QuizSession) {
        self.timer.cancel();
        self.session = session;
        self.feedback = None;
        self.time_left = self.duration;
        self.round = self.round.wrapping_add(1);
    }

    #[must_use]
    pub fn round(&self) -> u64 {
        self.round
    }

    #[must_use]
    pub fn accepts_input(&self) -> bool {
        self.feedback.is_none() && self.session.has_next()
    }

    #[must_use]
    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.session.is_finished()
    }

    #[must_use]
    pub fn prompt_text(&self) -> Option<&str> {
        self.session.current_question().ok().map(|q| q.prompt())
    }

    #[must_use]
    pub fn options(&self) -> Vec<String> {
        self.session
            .current_question()
            .map(|q| q.options().to_vec())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    #[must_use]
    pub fn final_score(&self) -> Score {
        self.session.final_score()
    }

    #[must_use]
    pub fn score_label(&self) -> String {
        format!(
            "Score: {}/{}",
            self.session.score(),
            self.session.resolved_count()
        )
    }

    #[must_use]
    pub fn timer_label(&self) -> String {
        format!("Time: {}s", self.time_left)
    }

    #[must_use]
    pub fn summary_message(&self) -> String {
        format!(
            "You've completed the quiz!\nYour final score: {}",
            self.final_score()
        )
    }
}
