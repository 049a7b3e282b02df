//! Concurrent per-section fetch orchestration.
//!
//! Each section runs as its own task; a slow or failing section never
//! delays another. Results pass through deduplication before they are
//! stored, and a generation counter guards against a superseded task
//! overwriting the state a newer refresh owns.

use super::section_state::SectionState;
use crate::modules::provider::AnimeRecord;
use crate::shared::errors::AppResult;
use crate::shared::utils::dedupe;
use dashmap::DashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

struct SectionEntry {
    tx: watch::Sender<SectionState>,
    generation: u64,
}

impl SectionEntry {
    fn new() -> Self {
        let (tx, _rx) = watch::channel(SectionState::idle());
        Self { tx, generation: 0 }
    }
}

pub struct SectionCoordinator {
    sections: Arc<DashMap<String, SectionEntry>>,
    cancel: CancellationToken,
}

impl SectionCoordinator {
    pub fn new() -> Self {
        Self {
            sections: Arc::new(DashMap::new()),
            cancel: CancellationToken::new(),
        }
    }

    /// Kick off (or refresh) the named section with `plan`, fire-and-forget.
    ///
    /// The section moves to loading immediately. `stagger` delays the plan's
    /// start so sections launched in the same instant don't hit the upstream
    /// rate limit together. A refresh while a fetch is in flight supersedes
    /// it; the older task's result is discarded at commit time.
    pub fn start_section<Fut>(&self, name: &str, stagger: Duration, plan: Fut)
    where
        Fut: Future<Output = AppResult<Vec<AnimeRecord>>> + Send + 'static,
    {
        let generation = {
            let mut entry = self
                .sections
                .entry(name.to_string())
                .or_insert_with(SectionEntry::new);
            entry.generation += 1;
            entry.tx.send_replace(SectionState::loading());
            entry.generation
        };

        let sections = Arc::clone(&self.sections);
        let cancel = self.cancel.clone();
        let name = name.to_string();

        tokio::spawn(async move {
            if !stagger.is_zero() {
                tokio::select! {
                    _ = cancel.cancelled() => return,
                    _ = sleep(stagger) => {}
                }
            }

            let outcome = tokio::select! {
                _ = cancel.cancelled() => return,
                outcome = plan => outcome,
            };

            let next = match outcome {
                Ok(items) => SectionState::success(dedupe(items)),
                Err(error) => {
                    warn!("Section '{}' failed: {}", name, error);
                    SectionState::failed(error)
                }
            };

            if let Some(entry) = sections.get(&name) {
                if entry.generation == generation {
                    entry.tx.send_replace(next);
                } else {
                    debug!("Discarding stale result for section '{}'", name);
                }
            }
        });
    }

    /// Snapshot of a section's current state.
    pub fn state(&self, name: &str) -> Option<SectionState> {
        self.sections.get(name).map(|entry| entry.tx.borrow().clone())
    }

    /// Subscription to a section's state changes. Subscribing to a section
    /// that has not started yet observes it as idle.
    pub fn subscribe(&self, name: &str) -> watch::Receiver<SectionState> {
        self.sections
            .entry(name.to_string())
            .or_insert_with(SectionEntry::new)
            .tx
            .subscribe()
    }

    /// Return a section to idle and invalidate any in-flight fetch for it.
    pub fn reset(&self, name: &str) {
        if let Some(mut entry) = self.sections.get_mut(name) {
            entry.generation += 1;
            entry.tx.send_replace(SectionState::idle());
        }
    }

    /// Stop all in-flight section tasks; state stops updating after this.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }
}

impl Default for SectionCoordinator {
    fn default() -> Self {
        Self::new()
    }
}
