//! DTOs for onboarding endpoints.
//!
//! Requests are tagged by `action`; responses embed the full wizard view so
//! the client can re-render after every call.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::application::handlers::onboarding::{ProfileAction, ProfileActionOutcome, TutorialAction};
use crate::domain::checklist::ChecklistTask;
use crate::domain::dashboard::DashboardPreview;
use crate::domain::foundation::{SampleId, Timestamp};
use crate::domain::onboarding::{
    Gate, OnboardingStatus, OnboardingStep, OnboardingWizard, StepOutcome,
};
use crate::domain::profile::{
    ExpertiseArea, FieldErrors, ProfileDraft, ProfileEdit, ProfileFormStage, SocialNetwork,
    StageMove,
};
use crate::domain::tutorial::{
    tutorial_content, EditorialProcess, GuidelineSection, QuizOption, QuizPhase, QuizScore,
    TutorialTab,
};

// ════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/onboarding/:id/profile`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ProfileActionRequest {
    SetFullName { value: String },
    SetEmail { value: String },
    SetBio { value: String },
    SetExpertise { area: ExpertiseArea, selected: bool },
    SetSocialLink { network: SocialNetwork, url: String },
    AttachSample { file_name: String, size_bytes: u64 },
    RemoveSample { sample_id: SampleId },
    NextStage,
    PreviousStage,
}

impl From<ProfileActionRequest> for ProfileAction {
    fn from(req: ProfileActionRequest) -> Self {
        let edit = match req {
            ProfileActionRequest::NextStage => return ProfileAction::NextStage,
            ProfileActionRequest::PreviousStage => return ProfileAction::PreviousStage,
            ProfileActionRequest::SetFullName { value } => ProfileEdit::SetFullName(value),
            ProfileActionRequest::SetEmail { value } => ProfileEdit::SetEmail(value),
            ProfileActionRequest::SetBio { value } => ProfileEdit::SetBio(value),
            ProfileActionRequest::SetExpertise { area, selected } => {
                ProfileEdit::SetExpertise { area, selected }
            }
            ProfileActionRequest::SetSocialLink { network, url } => {
                ProfileEdit::SetSocialLink { network, url }
            }
            ProfileActionRequest::AttachSample {
                file_name,
                size_bytes,
            } => ProfileEdit::AttachSample {
                file_name,
                size_bytes,
            },
            ProfileActionRequest::RemoveSample { sample_id } => ProfileEdit::RemoveSample(sample_id),
        };
        ProfileAction::Edit(edit)
    }
}

/// Body of `POST /api/onboarding/:id/tutorial`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum TutorialActionRequest {
    SelectTab { tab: TutorialTab },
    NextTab,
    PreviousTab,
    StartQuiz,
    Answer { question_id: String, option: String },
    SubmitQuiz,
    RetryQuiz,
    ReviewMaterial,
}

impl From<TutorialActionRequest> for TutorialAction {
    fn from(req: TutorialActionRequest) -> Self {
        match req {
            TutorialActionRequest::SelectTab { tab } => TutorialAction::SelectTab(tab),
            TutorialActionRequest::NextTab => TutorialAction::NextTab,
            TutorialActionRequest::PreviousTab => TutorialAction::PreviousTab,
            TutorialActionRequest::StartQuiz => TutorialAction::StartQuiz,
            TutorialActionRequest::Answer {
                question_id,
                option,
            } => TutorialAction::Answer {
                question_id,
                option,
            },
            TutorialActionRequest::SubmitQuiz => TutorialAction::SubmitQuiz,
            TutorialActionRequest::RetryQuiz => TutorialAction::RetryQuiz,
            TutorialActionRequest::ReviewMaterial => TutorialAction::ReviewMaterial,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Wizard view
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct ExpertiseOption {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileFormView {
    pub stage: ProfileFormStage,
    pub stage_number: u8,
    pub draft: ProfileDraft,
    pub errors: FieldErrors,
    pub valid: bool,
    pub expertise_options: Vec<ExpertiseOption>,
}

/// Quiz question without its answer key.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub id: String,
    pub prompt: String,
    pub options: Vec<QuizOption>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TutorialContentView {
    pub guidelines: Vec<GuidelineSection>,
    pub editorial: EditorialProcess,
    pub questions: Vec<QuestionView>,
}

impl TutorialContentView {
    fn load() -> Self {
        let content = tutorial_content();
        Self {
            guidelines: content.guidelines.clone(),
            editorial: content.editorial.clone(),
            questions: content
                .questions
                .iter()
                .map(|q| QuestionView {
                    id: q.id.clone(),
                    prompt: q.prompt.clone(),
                    options: q.options.clone(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizScoreView {
    pub correct: usize,
    pub total: usize,
    /// Rounded to two decimals.
    pub percentage: f64,
    pub passed: bool,
}

impl From<QuizScore> for QuizScoreView {
    fn from(score: QuizScore) -> Self {
        Self {
            correct: score.correct,
            total: score.total,
            percentage: score.rounded(),
            passed: score.passed(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TutorialView {
    pub active_tab: TutorialTab,
    pub progress: u8,
    pub phase: QuizPhase,
    pub answers: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<QuizScoreView>,
    pub passed: bool,
    /// Present only while the wizard is on the tutorial step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<TutorialContentView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChecklistView {
    pub tasks: Vec<ChecklistTask>,
    pub all_completed: bool,
}

/// Everything the client needs to render the current wizard screen.
#[derive(Debug, Clone, Serialize)]
pub struct WizardResponse {
    pub wizard_id: String,
    pub step: OnboardingStep,
    pub step_label: &'static str,
    pub status: OnboardingStatus,
    pub progress: u8,
    pub profile: ProfileFormView,
    pub tutorial: TutorialView,
    pub checklist: ChecklistView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<DashboardPreview>,
    pub started_at: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<Timestamp>,
}

impl From<&OnboardingWizard> for WizardResponse {
    fn from(wizard: &OnboardingWizard) -> Self {
        let form = wizard.profile_form();
        let tutorial = wizard.tutorial();
        let on_step = |step: OnboardingStep| !wizard.is_complete() && wizard.step() == step;

        Self {
            wizard_id: wizard.id().to_string(),
            step: wizard.step(),
            step_label: wizard.step().label(),
            status: wizard.status(),
            progress: wizard.progress().value(),
            profile: ProfileFormView {
                stage: form.stage(),
                stage_number: form.stage().number(),
                draft: form.draft().clone(),
                errors: form.errors().clone(),
                valid: form.is_valid(),
                expertise_options: ExpertiseArea::all()
                    .iter()
                    .map(|a| ExpertiseOption {
                        id: a.id(),
                        label: a.label(),
                    })
                    .collect(),
            },
            tutorial: TutorialView {
                active_tab: tutorial.active_tab(),
                progress: tutorial.progress().value(),
                phase: tutorial.phase(),
                answers: tutorial_answers(wizard),
                score: tutorial.last_score().map(QuizScoreView::from),
                passed: tutorial.is_passed(),
                content: on_step(OnboardingStep::Tutorial).then(TutorialContentView::load),
            },
            checklist: ChecklistView {
                tasks: wizard.checklist().tasks().to_vec(),
                all_completed: wizard.checklist().all_completed(),
            },
            preview: on_step(OnboardingStep::Preview).then(DashboardPreview::new),
            started_at: wizard.started_at(),
            completed_at: wizard.completed_at(),
        }
    }
}

fn tutorial_answers(wizard: &OnboardingWizard) -> BTreeMap<String, String> {
    let answers = wizard.tutorial().answers();
    tutorial_content()
        .questions
        .iter()
        .filter_map(|q| answers.get(&q.id).map(|a| (q.id.clone(), a.to_string())))
        .collect()
}

// ════════════════════════════════════════════════════════════════════════════
// Action responses
// ════════════════════════════════════════════════════════════════════════════

/// Outcome of a profile action.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProfileResultView {
    Edited { errors: FieldErrors },
    Moved { stage: ProfileFormStage },
    Blocked { errors: FieldErrors },
    AtLastStage,
    Exit,
}

impl From<ProfileActionOutcome> for ProfileResultView {
    fn from(outcome: ProfileActionOutcome) -> Self {
        match outcome {
            ProfileActionOutcome::Edited(errors) => ProfileResultView::Edited { errors },
            ProfileActionOutcome::Stage(StageMove::Moved(stage)) => ProfileResultView::Moved { stage },
            ProfileActionOutcome::Stage(StageMove::Blocked(errors)) => {
                ProfileResultView::Blocked { errors }
            }
            ProfileActionOutcome::Stage(StageMove::AtLastStage) => ProfileResultView::AtLastStage,
            ProfileActionOutcome::Stage(StageMove::Exit) => ProfileResultView::Exit,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileActionResponse {
    pub result: ProfileResultView,
    pub wizard: WizardResponse,
}

#[derive(Debug, Clone, Serialize)]
pub struct TutorialActionResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<QuizScoreView>,
    pub wizard: WizardResponse,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToggleTaskResponse {
    pub task_id: u8,
    pub completed: bool,
    pub wizard: WizardResponse,
}

/// Outcome of `next`, `previous` and `complete`.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum NavigationOutcomeView {
    Moved {
        from: OnboardingStep,
        to: OnboardingStep,
    },
    Blocked {
        gate: &'static str,
        #[serde(skip_serializing_if = "Option::is_none")]
        errors: Option<FieldErrors>,
    },
    Exited,
    Completed,
    AlreadyComplete,
}

impl From<&StepOutcome> for NavigationOutcomeView {
    fn from(outcome: &StepOutcome) -> Self {
        match outcome {
            StepOutcome::Moved { from, to } => NavigationOutcomeView::Moved {
                from: *from,
                to: *to,
            },
            StepOutcome::Blocked(gate) => NavigationOutcomeView::Blocked {
                gate: gate.as_str(),
                errors: match gate {
                    Gate::ProfileInvalid(errors) => Some(errors.clone()),
                    _ => None,
                },
            },
            StepOutcome::Exited => NavigationOutcomeView::Exited,
            StepOutcome::Completed(_) => NavigationOutcomeView::Completed,
            StepOutcome::AlreadyComplete => NavigationOutcomeView::AlreadyComplete,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NavigationResponse {
    #[serde(flatten)]
    pub outcome: NavigationOutcomeView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_to: Option<&'static str>,
    /// Absent after an exit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wizard: Option<WizardResponse>,
}

// ════════════════════════════════════════════════════════════════════════════
// Errors
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl ToString, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self::new("NOT_FOUND", format!("{} not found: {}", resource_type, id))
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::WizardId;
    use crate::domain::profile::SampleLimits;

    #[test]
    fn profile_request_deserializes_tagged_action() {
        let req: ProfileActionRequest = serde_json::from_str(
            r#"{"action":"set_expertise","area":"health","selected":true}"#,
        )
        .unwrap();
        assert_eq!(
            ProfileAction::from(req),
            ProfileAction::Edit(ProfileEdit::SetExpertise {
                area: ExpertiseArea::Health,
                selected: true
            })
        );

        let req: ProfileActionRequest = serde_json::from_str(r#"{"action":"next_stage"}"#).unwrap();
        assert_eq!(ProfileAction::from(req), ProfileAction::NextStage);
    }

    #[test]
    fn tutorial_request_deserializes_answer() {
        let req: TutorialActionRequest = serde_json::from_str(
            r#"{"action":"answer","question_id":"q2","option":"b"}"#,
        )
        .unwrap();
        assert_eq!(
            TutorialAction::from(req),
            TutorialAction::Answer {
                question_id: "q2".into(),
                option: "b".into()
            }
        );
    }

    #[test]
    fn unknown_action_is_rejected() {
        let result: Result<TutorialActionRequest, _> =
            serde_json::from_str(r#"{"action":"skip_quiz"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn wizard_view_on_profile_hides_tutorial_content() {
        let wizard = OnboardingWizard::start(WizardId::new(), SampleLimits::default());
        let json = serde_json::to_value(WizardResponse::from(&wizard)).unwrap();

        assert_eq!(json["step"], "profile");
        assert_eq!(json["progress"], 0);
        assert_eq!(json["profile"]["stage"], "basics");
        assert_eq!(json["profile"]["valid"], false);
        assert_eq!(json["profile"]["expertise_options"].as_array().unwrap().len(), 10);
        assert!(json["tutorial"].get("content").is_none());
        assert!(json.get("preview").is_none());
        assert_eq!(json["checklist"]["tasks"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn question_view_omits_answer_key() {
        let content = serde_json::to_value(TutorialContentView::load()).unwrap();
        let q1 = &content["questions"][0];
        assert_eq!(q1["id"], "q1");
        assert!(q1.get("correct_answer").is_none());
    }

    #[test]
    fn navigation_outcome_serializes_flat() {
        let response = NavigationResponse {
            outcome: NavigationOutcomeView::from(&StepOutcome::Blocked(Gate::QuizNotPassed)),
            redirect_to: None,
            wizard: None,
        };
        let json = serde_json::to_value(response).unwrap();
        assert_eq!(json["outcome"], "blocked");
        assert_eq!(json["gate"], "quiz_not_passed");
        assert!(json.get("errors").is_none());
    }

    #[test]
    fn error_response_not_found_creates_correctly() {
        let error = ErrorResponse::not_found("Wizard", "abc-123");
        assert_eq!(error.code, "NOT_FOUND");
        assert!(error.message.contains("abc-123"));
    }
}
