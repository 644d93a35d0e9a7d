//! # Quiz Example
//!
//! A quiz state machine on top of Reflow.
//!
//! This example showcases:
//! - A pure state machine (no environment dependencies)
//! - A status-driven action space: actions that do not apply to the
//!   current status are identity transitions
//! - The restart flow: progress is zeroed, the high score survives
//!
//! ## Example
//!
//! ```
//! use quiz::{Question, QuizAction, QuizReducer, QuizState};
//! use reflow_runtime::Store;
//!
//! # fn main() -> Result<(), reflow_runtime::StoreError> {
//! let questions = vec![Question::new("What is 2 + 2?", vec!["3", "4"], 1, 10)];
//! let store = Store::new(QuizState::new(questions), QuizReducer, ());
//!
//! store.dispatch(QuizAction::StartQuiz)?;
//! store.dispatch(QuizAction::NewAnswer(1))?;
//! store.dispatch(QuizAction::Finish)?;
//!
//! assert_eq!(store.state(|s| s.points), 10);
//! # Ok(())
//! # }
//! ```

use reflow_core::Reducer;
use serde::{Deserialize, Serialize};

/// A single quiz question
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// The question text
    pub prompt: String,
    /// Answer options, in display order
    pub options: Vec<String>,
    /// Index into `options` of the correct answer
    pub correct_option: usize,
    /// Points awarded for a correct answer
    pub points: u32,
}

impl Question {
    /// Creates a new question
    #[must_use]
    pub fn new(prompt: &str, options: Vec<&str>, correct_option: usize, points: u32) -> Self {
        Self {
            prompt: prompt.to_string(),
            options: options.into_iter().map(str::to_string).collect(),
            correct_option,
            points,
        }
    }
}

/// Where the quiz currently is in its lifecycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Waiting on the start screen
    #[default]
    Ready,
    /// A question is on screen
    Active,
    /// The finish screen, showing the result
    Finished,
}

/// State of the quiz
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizState {
    /// The fixed question set
    pub questions: Vec<Question>,
    /// Lifecycle status
    pub status: Status,
    /// Index of the question on screen while `Active`
    pub index: usize,
    /// The answer given to the current question, if any
    pub answer: Option<usize>,
    /// Points collected in the current run
    pub points: u32,
    /// Best result over all runs; survives `Restart`
    pub highscore: u32,
}

impl QuizState {
    /// Creates a quiz in the `Ready` status over the given questions
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            ..Self::default()
        }
    }

    /// The question currently on screen, if the quiz is active
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        matches!(self.status, Status::Active)
            .then(|| self.questions.get(self.index))
            .flatten()
    }

    /// The maximum number of points attainable
    #[must_use]
    pub fn max_points(&self) -> u32 {
        self.questions.iter().map(|q| q.points).sum()
    }

    /// Score as a whole percentage of the maximum, rounded up
    #[must_use]
    pub fn score_percentage(&self) -> u32 {
        let max = self.max_points();
        if max == 0 {
            0
        } else {
            (self.points * 100).div_ceil(max)
        }
    }
}

/// Actions driving the quiz
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizAction {
    /// Leave the start screen and show the first question
    StartQuiz,
    /// Answer the current question with the given option index
    NewAnswer(usize),
    /// Advance to the next question; requires an answer to the current one
    NextQuestion,
    /// End the run and record the high score
    Finish,
    /// Back to the start screen; zero progress, keep the high score
    Restart,
}

/// Reducer for the quiz state machine
///
/// Every action is gated on the current status; an action that does not
/// apply is an identity transition.
#[derive(Clone, Copy, Debug, Default)]
pub struct QuizReducer;

impl Reducer for QuizReducer {
    type State = QuizState;
    type Action = QuizAction;
    type Environment = ();

    fn reduce(&self, state: &mut QuizState, action: QuizAction, _env: &()) {
        match (state.status, action) {
            (Status::Ready, QuizAction::StartQuiz) => {
                state.status = Status::Active;
                state.index = 0;
                state.answer = None;
                state.points = 0;
            }

            (Status::Active, QuizAction::NewAnswer(option)) => {
                // One answer per question
                if state.answer.is_some() {
                    return;
                }
                let Some(question) = state.questions.get(state.index) else {
                    return;
                };
                if option == question.correct_option {
                    state.points += question.points;
                }
                state.answer = Some(option);
            }

            (Status::Active, QuizAction::NextQuestion) => {
                if state.answer.is_some() && state.index + 1 < state.questions.len() {
                    state.index += 1;
                    state.answer = None;
                }
            }

            (Status::Active, QuizAction::Finish) => {
                state.status = Status::Finished;
                state.highscore = state.highscore.max(state.points);
            }

            (_, QuizAction::Restart) => {
                state.status = Status::Ready;
                state.index = 0;
                state.answer = None;
                state.points = 0;
            }

            // Anything else does not apply to the current status
            _ => {}
        }
    }
}
