//! Tutorial reference content, embedded as YAML and parsed once.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::QuizQuestion;

const TUTORIAL_YAML: &str = include_str!("tutorial.yaml");

static CONTENT: Lazy<TutorialContent> = Lazy::new(|| {
    serde_yaml::from_str(TUTORIAL_YAML).expect("embedded tutorial.yaml must parse")
});

/// A titled bullet list from the content guidelines tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidelineSection {
    pub title: String,
    pub intro: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorialStep {
    pub title: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turnaround {
    pub stage: String,
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorialProcess {
    pub intro: String,
    pub steps: Vec<EditorialStep>,
    pub turnaround: Vec<Turnaround>,
}

/// Everything the tutorial step displays, plus the quiz bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TutorialContent {
    pub guidelines: Vec<GuidelineSection>,
    pub editorial: EditorialProcess,
    pub questions: Vec<QuizQuestion>,
}

/// Shared, immutable tutorial content.
pub fn tutorial_content() -> &'static TutorialContent {
    &CONTENT
}
