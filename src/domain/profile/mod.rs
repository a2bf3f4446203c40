//! Profile module - writer profile capture and validation.
//!
//! - `ProfileDraft` - editable form contents
//! - `ProfileForm` - staged form with live validation
//! - `validate_profile` - the field rules
//! - `ProfileData` - the finalized profile handed to the step machine

mod draft;
mod expertise;
mod form;
mod sample;
mod validator;

pub use draft::{ProfileData, ProfileDraft, ProfileField, SocialLinks, SocialNetwork};
pub use expertise::ExpertiseArea;
pub use form::{ProfileEdit, ProfileForm, ProfileFormStage, StageMove};
pub use sample::{SampleLimits, WritingSample, DEFAULT_MAX_SAMPLE_BYTES};
pub use validator::{
    check_field, is_valid_email, validate_fields, validate_profile, FieldErrors, MAX_BIO_CHARS,
    MIN_BIO_CHARS, MIN_FULL_NAME_CHARS,
};
