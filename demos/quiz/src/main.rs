//! Scripted run of the quiz demo: two full runs with a restart in between.

use quiz::{Question, QuizAction, QuizReducer, QuizState, Status};
use reflow_runtime::{Store, StoreConfig};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn questions() -> Vec<Question> {
    vec![
        Question::new(
            "Which element of the architecture owns the state?",
            vec!["The reducer", "The store", "The observer"],
            1,
            10,
        ),
        Question::new(
            "What does a reducer return for an unrecognized action?",
            vec!["An error", "The unchanged state", "A default state"],
            1,
            20,
        ),
        Question::new(
            "When are observers notified?",
            vec!["Before the transition", "After each committed dispatch"],
            1,
            30,
        ),
    ]
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .compact()
        .init();

    println!("=== The Reflow Quiz ===\n");

    let store = Arc::new(Store::with_config(
        QuizState::new(questions()),
        QuizReducer,
        (),
        StoreConfig::default().with_name("quiz"),
    ));

    let screen = Arc::clone(&store);
    let subscription = store.subscribe(move || {
        screen.state(|s| match s.status {
            Status::Ready => println!("  {} questions to test your mastery", s.questions.len()),
            Status::Active => {
                if let Some(question) = s.current_question() {
                    println!("  Q{}: {}", s.index + 1, question.prompt);
                }
            }
            Status::Finished => println!(
                "  You scored {} out of {} ({}%) - highscore {}",
                s.points,
                s.max_points(),
                s.score_percentage(),
                s.highscore
            ),
        });
    });

    // First run: answer everything correctly
    store.dispatch(QuizAction::StartQuiz)?;
    for _ in 0..3 {
        store.dispatch(QuizAction::NewAnswer(1))?;
        store.dispatch(QuizAction::NextQuestion)?;
    }
    store.dispatch(QuizAction::Finish)?;

    // Restart keeps the high score
    println!("\nRestarting...");
    store.dispatch(QuizAction::Restart)?;

    // Second run: a worse result; the high score survives
    store.dispatch(QuizAction::StartQuiz)?;
    store.dispatch(QuizAction::NewAnswer(0))?;
    store.dispatch(QuizAction::Finish)?;

    subscription.unsubscribe();
    println!("\n=== Demo Complete ===");
    Ok(())
}
