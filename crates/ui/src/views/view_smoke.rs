use quiz_core::Question;
use services::QuizConfig;

use super::test_harness::setup_quiz_harness;

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question() {
    let questions = vec![Question::true_false("Is Ferris a crab?", "True").unwrap()];
    let mut harness = setup_quiz_harness(questions, QuizConfig::default());
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Is Ferris a crab?"), "missing prompt in {html}");
    assert!(html.contains("Time: 15s"), "missing timer in {html}");
    assert!(html.contains("Score: 0/0"), "missing score in {html}");
    assert!(html.contains("True"), "missing True button in {html}");
    assert!(html.contains("False"), "missing False button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_uses_configured_timer() {
    let questions = vec![Question::true_false("Q", "False").unwrap()];
    let config = QuizConfig {
        timer_secs: 30,
        ..QuizConfig::default()
    };
    let mut harness = setup_quiz_harness(questions, config);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Time: 30s"), "missing timer in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_summary_for_empty_bank() {
    let mut harness = setup_quiz_harness(Vec::new(), QuizConfig::default());
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Your final score: 0/0"), "missing summary in {html}");
    assert!(html.contains("Play again"), "missing restart in {html}");
}
