//! Event bus adapters.
//!
//! - `InMemoryEventBus` - In-process publish/subscribe
//! - `CompletionLogger` - Logs completed onboarding profiles

mod completion_logger;
mod in_memory;

pub use completion_logger::{CompletionLogger, COMPLETED_EVENT};
pub use in_memory::InMemoryEventBus;
