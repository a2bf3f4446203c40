//! In-memory wizard store.
//!
//! Holds wizards for the life of the process. Nothing is written to disk.
//! Every write stamps the entry; entries idle past their retention are
//! evicted on the next `save` or by the periodic sweeper.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::config::SessionConfig;
use crate::domain::foundation::{DomainError, ErrorCode, WizardId};
use crate::domain::onboarding::OnboardingWizard;
use crate::ports::WizardRepository;

/// Idle lifetimes for stored wizards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Retention {
    /// Unfinished wizards.
    pub idle: Duration,
    /// Completed wizards, kept long enough to answer repeat completions.
    pub completed: Duration,
}

impl Retention {
    fn ttl_for(&self, wizard: &OnboardingWizard) -> Duration {
        if wizard.is_complete() {
            self.completed
        } else {
            self.idle
        }
    }
}

impl Default for Retention {
    fn default() -> Self {
        Retention::from(&SessionConfig::default())
    }
}

impl From<&SessionConfig> for Retention {
    fn from(config: &SessionConfig) -> Self {
        Self {
            idle: config.idle_ttl(),
            completed: config.completed_ttl(),
        }
    }
}

#[derive(Debug, Clone)]
struct Entry {
    wizard: OnboardingWizard,
    touched: Instant,
}

impl Entry {
    fn new(wizard: &OnboardingWizard) -> Self {
        Self {
            wizard: wizard.clone(),
            touched: Instant::now(),
        }
    }

    fn is_expired(&self, retention: &Retention, now: Instant) -> bool {
        now.saturating_duration_since(self.touched) > retention.ttl_for(&self.wizard)
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryWizardStore {
    wizards: Arc<RwLock<HashMap<WizardId, Entry>>>,
    retention: Retention,
}

impl InMemoryWizardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_retention(retention: Retention) -> Self {
        Self {
            wizards: Arc::default(),
            retention,
        }
    }

    /// Drops every wizard whose retention has lapsed at `now`.
    /// Returns the number evicted.
    pub async fn evict_expired_at(&self, now: Instant) -> usize {
        let mut wizards = self.wizards.write().await;
        evict(&mut wizards, &self.retention, now)
    }

    /// Runs `evict_expired_at` every `period` until the handle is aborted.
    pub fn spawn_sweeper(&self, period: Duration) -> JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            loop {
                ticker.tick().await;
                store.evict_expired_at(Instant::now()).await;
            }
        })
    }
}

fn evict(wizards: &mut HashMap<WizardId, Entry>, retention: &Retention, now: Instant) -> usize {
    let before = wizards.len();
    wizards.retain(|_, entry| !entry.is_expired(retention, now));
    let evicted = before - wizards.len();
    if evicted > 0 {
        debug!(evicted, remaining = wizards.len(), "Evicted idle wizards");
    }
    evicted
}

fn not_found(id: &WizardId) -> DomainError {
    DomainError::new(ErrorCode::WizardNotFound, format!("Wizard not found: {}", id))
        .with_detail("wizard_id", id.to_string())
}

#[async_trait]
impl WizardRepository for InMemoryWizardStore {
    async fn save(&self, wizard: &OnboardingWizard) -> Result<(), DomainError> {
        let mut wizards = self.wizards.write().await;
        evict(&mut wizards, &self.retention, Instant::now());
        if wizards.contains_key(&wizard.id()) {
            return Err(DomainError::new(
                ErrorCode::StorageError,
                format!("Wizard already exists: {}", wizard.id()),
            ));
        }
        wizards.insert(wizard.id(), Entry::new(wizard));
        Ok(())
    }

    async fn update(&self, wizard: &OnboardingWizard) -> Result<(), DomainError> {
        let mut wizards = self.wizards.write().await;
        match wizards.get_mut(&wizard.id()) {
            Some(slot) if !slot.is_expired(&self.retention, Instant::now()) => {
                *slot = Entry::new(wizard);
                Ok(())
            }
            _ => Err(not_found(&wizard.id())),
        }
    }

    async fn find_by_id(&self, id: &WizardId) -> Result<Option<OnboardingWizard>, DomainError> {
        let now = Instant::now();
        Ok(self
            .wizards
            .read()
            .await
            .get(id)
            .filter(|entry| !entry.is_expired(&self.retention, now))
            .map(|entry| entry.wizard.clone()))
    }

    async fn delete(&self, id: &WizardId) -> Result<(), DomainError> {
        self.wizards
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| not_found(id))
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.wizards.read().await.len())
    }
}
