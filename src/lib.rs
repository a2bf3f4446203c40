//! Writer Onboarding - guided onboarding for new contributing writers
//!
//! A four-step wizard (profile, tutorial, dashboard preview, welcome
//! checklist) served over HTTP, plus the placeholder dashboard a writer
//! lands on once onboarding completes.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
