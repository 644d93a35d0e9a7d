//! Full quiz runs against a live store, plus harness-based reducer tests.

#![allow(clippy::unwrap_used)] // Test code can unwrap

use quiz::{Question, QuizAction, QuizReducer, QuizState, Status};
use reflow_runtime::Store;
use reflow_testing::{ObserverProbe, ReducerTest};

fn questions() -> Vec<Question> {
    vec![
        Question::new("What is 2 + 2?", vec!["3", "4"], 1, 10),
        Question::new("Capital of France?", vec!["Paris", "Lyon"], 0, 20),
    ]
}

#[test]
fn full_run_through_the_store() {
    let store = Store::new(QuizState::new(questions()), QuizReducer, ());
    let probe = ObserverProbe::new();
    let sub = store.subscribe(probe.callback());

    store.dispatch(QuizAction::StartQuiz).unwrap();
    store.dispatch(QuizAction::NewAnswer(1)).unwrap();
    store.dispatch(QuizAction::NextQuestion).unwrap();
    store.dispatch(QuizAction::NewAnswer(0)).unwrap();
    store.dispatch(QuizAction::Finish).unwrap();

    let state = store.snapshot();
    assert_eq!(state.status, Status::Finished);
    assert_eq!(state.points, 30);
    assert_eq!(state.highscore, 30);
    assert_eq!(state.score_percentage(), 100);

    // One notification per dispatch, including identity transitions
    assert_eq!(probe.notifications(), 5);
    sub.unsubscribe();
}

#[test]
fn restart_through_the_store_keeps_highscore() {
    let store = Store::new(QuizState::new(questions()), QuizReducer, ());

    store.dispatch(QuizAction::StartQuiz).unwrap();
    store.dispatch(QuizAction::NewAnswer(1)).unwrap();
    store.dispatch(QuizAction::Finish).unwrap();
    store.dispatch(QuizAction::Restart).unwrap();

    let state = store.snapshot();
    assert_eq!(state.status, Status::Ready);
    assert_eq!(state.points, 0);
    assert_eq!(state.highscore, 10);
}

#[test]
fn reducer_test_harness_reads_like_given_when_then() {
    ReducerTest::new(QuizReducer)
        .with_env(())
        .given_state(QuizState::new(questions()))
        .when_action(QuizAction::StartQuiz)
        .when_action(QuizAction::NewAnswer(1))
        .then_state(|state| {
            assert_eq!(state.status, Status::Active);
            assert_eq!(state.points, 10);
        })
        .run();
}

#[test]
fn finish_before_start_is_identity() {
    ReducerTest::new(QuizReducer)
        .with_env(())
        .given_state(QuizState::new(questions()))
        .when_action(QuizAction::Finish)
        .then_state(|state| {
            assert_eq!(state.status, Status::Ready);
            assert_eq!(state.highscore, 0);
        })
        .run();
}
