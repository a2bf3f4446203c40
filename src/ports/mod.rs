//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `WizardRepository` - Session-local wizard storage
//! - `EventPublisher` - Publishing domain events
//! - `EventSubscriber` / `EventHandler` - Reacting to domain events

mod event_publisher;
mod event_subscriber;
mod wizard_repository;

pub use event_publisher::EventPublisher;
pub use event_subscriber::{EventBus, EventHandler, EventSubscriber};
pub use wizard_repository::WizardRepository;
