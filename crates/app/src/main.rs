mod console;
mod logging;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::Question;
use services::{QuizConfig, QuizService, TriviaClient};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidNumber { flag: &'static str, raw: String },
    InvalidApiUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidNumber { flag, raw } => write!(f, "invalid {flag} value: {raw}"),
            ArgsError::InvalidApiUrl { raw } => write!(f, "invalid --api-url value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn require_number<T: std::str::FromStr>(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<T, ArgsError> {
    let raw = require_value(args, flag)?;
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidNumber { flag, raw })
}

struct DesktopApp {
    quiz_service: Arc<QuizService>,
    questions: Vec<Question>,
    config: QuizConfig,
}

impl UiApp for DesktopApp {
    fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz_service)
    }

    fn questions(&self) -> Vec<Question> {
        self.questions.clone()
    }

    fn config(&self) -> QuizConfig {
        self.config.clone()
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui      [options]");
    eprintln!("  cargo run -p app -- console [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --amount <n>        questions to fetch (default 10)");
    eprintln!("  --timer-secs <n>    seconds per question (default 15)");
    eprintln!("  --feedback-ms <n>   feedback pause in milliseconds (default 2000)");
    eprintln!("  --seed <n>          fixed shuffle seed");
    eprintln!("  --api-url <url>     trivia endpoint (default https://opentdb.com/api.php)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_API_URL, QUIZ_AMOUNT, QUIZ_TIMER_SECS, QUIZ_FEEDBACK_MS, QUIZ_SEED, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Console,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "console" => Some(Self::Console),
            _ => None,
        }
    }
}

/// Apply command-line flags on top of `config`.
fn parse_flags(
    args: &mut impl Iterator<Item = String>,
    mut config: QuizConfig,
) -> Result<QuizConfig, ArgsError> {
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--amount" => config.amount = require_number(args, "--amount")?,
            "--timer-secs" => config.timer_secs = require_number(args, "--timer-secs")?,
            "--feedback-ms" => {
                let ms: u64 = require_number(args, "--feedback-ms")?;
                config.feedback_delay = Duration::from_millis(ms);
            }
            "--seed" => config.seed = Some(require_number(args, "--seed")?),
            "--api-url" => {
                let value = require_value(args, "--api-url")?;
                if value.trim().is_empty() {
                    return Err(ArgsError::InvalidApiUrl { raw: value });
                }
                config.base_url = value.trim().to_string();
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            _ => return Err(ArgsError::UnknownArg(arg)),
        }
    }
    Ok(config)
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // No subcommand means the desktop window.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let config = parse_flags(&mut argv.into_iter(), QuizConfig::from_env()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    tracing::info!(?cmd, amount = config.amount, timer_secs = config.timer_secs, "starting quiz");

    let client = TriviaClient::from_config(&config);
    let quiz_service = Arc::new(QuizService::new(Arc::new(client)).with_seed(config.seed));

    // The desktop launcher drives its own runtime, so this one must be gone before it starts.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let questions = runtime.block_on(quiz_service.load_questions())?;

    match cmd {
        Command::Ui => {
            drop(runtime);
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                quiz_service,
                questions,
                config,
            });
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Quiz")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Console => {
            let mut session = quiz_service.start_session(questions);
            let score = runtime.block_on(console::run(
                &mut session,
                config.timer_secs,
                config.feedback_delay,
            ))?;
            println!();
            println!("You've completed the quiz!");
            println!("Your final score: {score}");
            Ok(())
        }
    }
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        tracing::error!(%err, "quiz aborted");
        eprintln!("{err}");
        std::process::exit(2);
    }
}
