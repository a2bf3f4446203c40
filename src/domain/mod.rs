//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors, events, state machines)
//! - `profile` - Writer profile form and validation rules
//! - `tutorial` - Guideline tabs and the comprehension quiz
//! - `checklist` - Welcome checklist tasks
//! - `onboarding` - The wizard aggregate sequencing the steps
//! - `dashboard` - Placeholder dashboard views

pub mod checklist;
pub mod dashboard;
pub mod foundation;
pub mod onboarding;
pub mod profile;
pub mod tutorial;
