//! Storage adapters.

mod in_memory_wizard_store;

pub use in_memory_wizard_store::{InMemoryWizardStore, Retention};
