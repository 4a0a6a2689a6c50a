use std::error::Error;
use std::time::Duration;

use quiz_core::{QuizSession, Score, TimerController, TimerEvent};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{Instant, interval_at};

const TICK: Duration = Duration::from_secs(1);

enum Outcome {
    Answered(String),
    TimedOut,
    Closed,
}

/// Map a typed reply onto one of `options`.
///
/// Accepts the option itself (any case), its letter (`a`, `b`, ...) or, when
/// unambiguous, its first letter (`t`, `f`).
fn parse_choice(input: &str, options: &[String]) -> Option<String> {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return None;
    }

    if let Some(option) = options.iter().find(|o| o.to_lowercase() == input) {
        return Some(option.clone());
    }

    let mut chars = input.chars();
    let (Some(first), None) = (chars.next(), chars.next()) else {
        return None;
    };

    if let Some(idx) = ('a'..='z').position(|letter| letter == first) {
        if let Some(option) = options.get(idx) {
            return Some(option.clone());
        }
    }

    let mut initial = options
        .iter()
        .filter(|o| o.to_lowercase().starts_with(first));
    match (initial.next(), initial.next()) {
        (Some(option), None) => Some(option.clone()),
        _ => None,
    }
}

fn print_tick(remaining: u32) {
    if remaining > 0 && (remaining <= 5 || remaining % 5 == 0) {
        println!("  Time: {remaining}s");
    }
}

/// Play `session` on stdin/stdout until it is exhausted or input closes.
///
/// # Errors
///
/// Returns an error when reading stdin fails or the engine rejects a step.
pub async fn run(
    session: &mut QuizSession,
    timer_secs: u32,
    feedback_delay: Duration,
) -> Result<Score, Box<dyn Error>> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut timer = TimerController::new()
        .with_on_tick(print_tick)
        .with_on_expire(|| println!("  Time: 0s"));

    while session.has_next() {
        let question = session.current_question()?.clone();
        println!();
        println!("Score: {}/{}", session.score(), session.position());
        println!("Q{}. {}", session.position() + 1, question.prompt());
        for label in question.option_labels() {
            println!("  {label}");
        }
        println!("  Time: {timer_secs}s");

        let token = timer.start(timer_secs);
        let mut ticker = interval_at(Instant::now() + TICK, TICK);
        let outcome = loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(text) = line? else {
                        timer.cancel();
                        break Outcome::Closed;
                    };
                    match parse_choice(&text, question.options()) {
                        Some(choice) => {
                            timer.cancel();
                            break Outcome::Answered(choice);
                        }
                        None => println!("  Answer with t/f, a/b or the option text."),
                    }
                }
                _ = ticker.tick() => {
                    if let Some(TimerEvent::Expired) = timer.tick(token) {
                        break Outcome::TimedOut;
                    }
                }
            }
        };

        match outcome {
            Outcome::Answered(choice) => {
                let correct = session.submit_answer(&choice)?;
                tracing::debug!(%choice, correct, "console answer");
                if correct {
                    println!("Correct!");
                } else {
                    println!("Wrong, the answer was {}.", question.correct_answer());
                }
                session.advance()?;
            }
            Outcome::TimedOut => {
                tracing::debug!(position = session.position(), "console timeout");
                println!("Out of time, the answer was {}.", question.correct_answer());
                session.expire()?;
            }
            Outcome::Closed => {
                tracing::info!("input closed, leaving the quiz early");
                break;
            }
        }

        if session.has_next() {
            tokio::time::sleep(feedback_delay).await;
        }
    }

    Ok(session.final_score())
}
