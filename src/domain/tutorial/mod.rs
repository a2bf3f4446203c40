//! Tutorial module - guideline tabs and the comprehension quiz.

mod content;
mod quiz;
mod session;
mod tab;

pub use content::{
    tutorial_content, EditorialProcess, EditorialStep, GuidelineSection, Turnaround,
    TutorialContent,
};
pub use quiz::{
    all_answered, score, QuizAnswers, QuizOption, QuizPhase, QuizQuestion, QuizScore,
    PASS_THRESHOLD,
};
pub use session::{TutorialError, TutorialSession};
pub use tab::TutorialTab;
