//! Adapters - Implementations of port interfaces.
//!
//! - `events` - In-process event bus and subscribers
//! - `http` - axum REST API
//! - `storage` - In-memory wizard store

pub mod events;
pub mod http;
pub mod storage;

pub use events::{CompletionLogger, InMemoryEventBus, COMPLETED_EVENT};
pub use http::{app_router, AppState};
pub use storage::{InMemoryWizardStore, Retention};
