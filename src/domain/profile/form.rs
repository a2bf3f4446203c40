//! ProfileForm - the three-stage profile setup form.
//!
//! Stages: basics (name, email, bio) → expertise (areas, social links) →
//! samples (writing samples). Advancing a stage validates only that stage's
//! fields; submission validates all of them.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{SampleId, ValidationError};

use super::{
    validate_fields, validate_profile, ExpertiseArea, FieldErrors, ProfileData, ProfileDraft,
    ProfileField, SampleLimits, SocialNetwork, WritingSample,
};

/// Sub-stage of the profile form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProfileFormStage {
    #[default]
    Basics,
    Expertise,
    Samples,
}

impl ProfileFormStage {
    /// Fields checked before leaving this stage.
    pub fn fields(&self) -> &'static [ProfileField] {
        match self {
            ProfileFormStage::Basics => &[
                ProfileField::FullName,
                ProfileField::Email,
                ProfileField::Bio,
            ],
            ProfileFormStage::Expertise => &[ProfileField::Expertise],
            ProfileFormStage::Samples => &[ProfileField::WritingSamples],
        }
    }

    pub fn next(&self) -> Option<Self> {
        match self {
            ProfileFormStage::Basics => Some(ProfileFormStage::Expertise),
            ProfileFormStage::Expertise => Some(ProfileFormStage::Samples),
            ProfileFormStage::Samples => None,
        }
    }

    pub fn previous(&self) -> Option<Self> {
        match self {
            ProfileFormStage::Basics => None,
            ProfileFormStage::Expertise => Some(ProfileFormStage::Basics),
            ProfileFormStage::Samples => Some(ProfileFormStage::Expertise),
        }
    }

    /// 1-based position for "step n of 3" indicators.
    pub fn number(&self) -> u8 {
        match self {
            ProfileFormStage::Basics => 1,
            ProfileFormStage::Expertise => 2,
            ProfileFormStage::Samples => 3,
        }
    }
}

/// A single change to the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileEdit {
    SetFullName(String),
    SetEmail(String),
    SetBio(String),
    SetExpertise { area: ExpertiseArea, selected: bool },
    SetSocialLink { network: SocialNetwork, url: String },
    AttachSample { file_name: String, size_bytes: u64 },
    RemoveSample(SampleId),
}

/// Result of moving between form stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageMove {
    Moved(ProfileFormStage),
    /// Current stage has invalid fields; stage unchanged.
    Blocked(FieldErrors),
    /// Already on the last stage; submission is the next move.
    AtLastStage,
    /// Back from the first stage: the caller decides where to go.
    Exit,
}

/// Profile form state: the draft, the visible stage and live errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileForm {
    draft: ProfileDraft,
    stage: ProfileFormStage,
    errors: FieldErrors,
    limits: SampleLimits,
}

impl ProfileForm {
    /// Creates an empty form at the first stage.
    pub fn new(limits: SampleLimits) -> Self {
        let draft = ProfileDraft::default();
        let errors = validate_profile(&draft);
        Self {
            draft,
            stage: ProfileFormStage::default(),
            errors,
            limits,
        }
    }

    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    pub fn stage(&self) -> ProfileFormStage {
        self.stage
    }

    /// Validation state after the most recent edit.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn limits(&self) -> &SampleLimits {
        &self.limits
    }

    /// Applies an edit and re-runs validation.
    ///
    /// # Errors
    ///
    /// - rejected sample attachments (type, size, blank name)
    /// - `UnknownValue` when removing a sample that is not attached
    pub fn apply(&mut self, edit: ProfileEdit) -> Result<&FieldErrors, ValidationError> {
        match edit {
            ProfileEdit::SetFullName(name) => self.draft.full_name = name,
            ProfileEdit::SetEmail(email) => self.draft.email = email,
            ProfileEdit::SetBio(bio) => self.draft.bio = bio,
            ProfileEdit::SetExpertise { area, selected } => {
                if selected {
                    self.draft.expertise.insert(area);
                } else {
                    self.draft.expertise.remove(&area);
                }
            }
            ProfileEdit::SetSocialLink { network, url } => {
                self.draft.social_links.set(network, &url)
            }
            ProfileEdit::AttachSample {
                file_name,
                size_bytes,
            } => {
                let sample = WritingSample::new(file_name, size_bytes, &self.limits)?;
                self.draft.writing_samples.push(sample);
            }
            ProfileEdit::RemoveSample(id) => {
                let position = self
                    .draft
                    .writing_samples
                    .iter()
                    .position(|s| s.id == id)
                    .ok_or_else(|| {
                        ValidationError::unknown_value(
                            ProfileField::WritingSamples.as_str(),
                            id.to_string(),
                        )
                    })?;
                self.draft.writing_samples.remove(position);
            }
        }

        self.errors = validate_profile(&self.draft);
        Ok(&self.errors)
    }

    /// Moves to the next stage if the current stage's fields are valid.
    pub fn advance_stage(&mut self) -> StageMove {
        let Some(next) = self.stage.next() else {
            return StageMove::AtLastStage;
        };
        let stage_errors = validate_fields(&self.draft, self.stage.fields());
        if !stage_errors.is_empty() {
            return StageMove::Blocked(stage_errors);
        }
        self.stage = next;
        StageMove::Moved(next)
    }

    /// Moves one stage back without validation.
    pub fn back_stage(&mut self) -> StageMove {
        match self.stage.previous() {
            Some(previous) => {
                self.stage = previous;
                StageMove::Moved(previous)
            }
            None => StageMove::Exit,
        }
    }

    /// Finalizes the draft if every field validates. Never mutates the form.
    pub fn submit(&self) -> Result<ProfileData, FieldErrors> {
        let errors = validate_profile(&self.draft);
        if errors.is_empty() {
            Ok(ProfileData::from_valid_draft(&self.draft))
        } else {
            Err(errors)
        }
    }

    /// True when submission would succeed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ProfileForm {
        ProfileForm::new(SampleLimits::default())
    }

    fn fill_basics(form: &mut ProfileForm) {
        form.apply(ProfileEdit::SetFullName("Grace Hopper".into())).unwrap();
        form.apply(ProfileEdit::SetEmail("grace@navy.example.mil".into())).unwrap();
        form.apply(ProfileEdit::SetBio("c".repeat(80))).unwrap();
    }

    #[test]
    fn new_form_starts_on_basics_with_all_errors() {
        let form = form();
        assert_eq!(form.stage(), ProfileFormStage::Basics);
        assert_eq!(form.errors().len(), 5);
        assert!(!form.is_valid());
    }

    #[test]
    fn every_edit_refreshes_errors() {
        let mut form = form();
        let errors = form.apply(ProfileEdit::SetFullName("Al".into())).unwrap();
        assert!(!errors.contains(ProfileField::FullName));
        assert!(errors.contains(ProfileField::Email));
    }

    #[test]
    fn basics_stage_blocks_until_valid() {
        let mut form = form();
        match form.advance_stage() {
            StageMove::Blocked(errors) => {
                assert_eq!(errors.len(), 3);
                assert!(!errors.contains(ProfileField::Expertise));
            }
            other => panic!("expected Blocked, got {:?}", other),
        }
        assert_eq!(form.stage(), ProfileFormStage::Basics);

        fill_basics(&mut form);
        assert_eq!(form.advance_stage(), StageMove::Moved(ProfileFormStage::Expertise));
    }

    #[test]
    fn expertise_stage_requires_one_area() {
        let mut form = form();
        fill_basics(&mut form);
        form.advance_stage();

        assert!(matches!(form.advance_stage(), StageMove::Blocked(_)));
        form.apply(ProfileEdit::SetExpertise {
            area: ExpertiseArea::Finance,
            selected: true,
        })
        .unwrap();
        assert_eq!(form.advance_stage(), StageMove::Moved(ProfileFormStage::Samples));
        assert_eq!(form.advance_stage(), StageMove::AtLastStage);
    }

    #[test]
    fn deselecting_expertise_removes_it() {
        let mut form = form();
        let area = ExpertiseArea::Sports;
        form.apply(ProfileEdit::SetExpertise { area, selected: true }).unwrap();
        form.apply(ProfileEdit::SetExpertise { area, selected: false }).unwrap();
        assert!(form.draft().expertise.is_empty());
    }

    #[test]
    fn back_from_basics_exits() {
        let mut form = form();
        assert_eq!(form.back_stage(), StageMove::Exit);
    }

    #[test]
    fn back_does_not_validate() {
        let mut form = form();
        fill_basics(&mut form);
        form.advance_stage();
        form.apply(ProfileEdit::SetEmail(String::new())).unwrap();
        assert_eq!(form.back_stage(), StageMove::Moved(ProfileFormStage::Basics));
    }

    #[test]
    fn rejected_attachment_leaves_draft_unchanged() {
        let mut form = form();
        let result = form.apply(ProfileEdit::AttachSample {
            file_name: "cv.exe".into(),
            size_bytes: 10,
        });
        assert!(result.is_err());
        assert!(form.draft().writing_samples.is_empty());
    }

    #[test]
    fn samples_can_be_removed_by_id() {
        let mut form = form();
        form.apply(ProfileEdit::AttachSample {
            file_name: "a.pdf".into(),
            size_bytes: 10,
        })
        .unwrap();
        let id = form.draft().writing_samples[0].id;

        let errors = form.apply(ProfileEdit::RemoveSample(id)).unwrap();
        assert!(errors.contains(ProfileField::WritingSamples));
        assert!(form.apply(ProfileEdit::RemoveSample(id)).is_err());
    }

    #[test]
    fn submit_returns_profile_data_when_valid() {
        let mut form = form();
        fill_basics(&mut form);
        form.apply(ProfileEdit::SetExpertise {
            area: ExpertiseArea::Technology,
            selected: true,
        })
        .unwrap();
        form.apply(ProfileEdit::AttachSample {
            file_name: "clip.docx".into(),
            size_bytes: 900,
        })
        .unwrap();
        form.apply(ProfileEdit::SetSocialLink {
            network: SocialNetwork::Website,
            url: "https://grace.example".into(),
        })
        .unwrap();

        let data = form.submit().unwrap();
        assert_eq!(data.full_name, "Grace Hopper");
        assert_eq!(data.writing_samples.len(), 1);
        assert_eq!(data.social_links.website.as_deref(), Some("https://grace.example"));
    }

    #[test]
    fn submit_with_errors_leaves_form_untouched() {
        let mut form = form();
        fill_basics(&mut form);
        let before = form.clone();

        let errors = form.submit().unwrap_err();
        assert!(errors.contains(ProfileField::Expertise));
        assert!(errors.contains(ProfileField::WritingSamples));
        assert_eq!(form, before);
    }
}
