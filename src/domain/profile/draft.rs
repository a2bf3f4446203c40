//! Profile draft (mutable form state) and the finalized ProfileData.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::{ExpertiseArea, WritingSample};

/// Fields of the profile form that carry validation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProfileField {
    FullName,
    Email,
    Bio,
    Expertise,
    WritingSamples,
}

impl ProfileField {
    pub const ALL: [ProfileField; 5] = [
        ProfileField::FullName,
        ProfileField::Email,
        ProfileField::Bio,
        ProfileField::Expertise,
        ProfileField::WritingSamples,
    ];

    /// Wire name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileField::FullName => "fullName",
            ProfileField::Email => "email",
            ProfileField::Bio => "bio",
            ProfileField::Expertise => "expertise",
            ProfileField::WritingSamples => "writingSamples",
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Social network a writer may link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SocialNetwork {
    Twitter,
    Linkedin,
    Website,
}

/// Optional social profile links. Never validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl SocialLinks {
    /// Sets one link; blank input clears it.
    pub fn set(&mut self, network: SocialNetwork, url: &str) {
        let trimmed = url.trim();
        let value = (!trimmed.is_empty()).then(|| trimmed.to_string());
        match network {
            SocialNetwork::Twitter => self.twitter = value,
            SocialNetwork::Linkedin => self.linkedin = value,
            SocialNetwork::Website => self.website = value,
        }
    }

    pub fn get(&self, network: SocialNetwork) -> Option<&str> {
        match network {
            SocialNetwork::Twitter => self.twitter.as_deref(),
            SocialNetwork::Linkedin => self.linkedin.as_deref(),
            SocialNetwork::Website => self.website.as_deref(),
        }
    }
}

/// Profile form contents while the writer is still editing.
///
/// Starts empty. Only the profile form mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDraft {
    pub full_name: String,
    pub email: String,
    pub bio: String,
    pub expertise: BTreeSet<ExpertiseArea>,
    pub writing_samples: Vec<WritingSample>,
    pub social_links: SocialLinks,
}

/// A profile that passed validation on submission.
///
/// Only [`super::validate_profile`]-clean drafts become `ProfileData`; see
/// [`super::ProfileForm::submit`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileData {
    pub full_name: String,
    pub email: String,
    pub bio: String,
    pub expertise: BTreeSet<ExpertiseArea>,
    pub writing_samples: Vec<WritingSample>,
    pub social_links: SocialLinks,
}

impl ProfileData {
    pub(super) fn from_valid_draft(draft: &ProfileDraft) -> Self {
        Self {
            full_name: draft.full_name.clone(),
            email: draft.email.clone(),
            bio: draft.bio.clone(),
            expertise: draft.expertise.clone(),
            writing_samples: draft.writing_samples.clone(),
            social_links: draft.social_links.clone(),
        }
    }
}
