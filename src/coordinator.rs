//! Commit-to-commit transition coordination.
//!
//! The coordinator keeps the creators of the last commit and, for every
//! creator of the new commit, runs one of two paths:
//!
//! - **Optimistic**: the creator sources its previous state itself, so it is
//!   asked for a transition directly.
//! - **Record then apply**: the creator with the same [`IdentityKey`] from the
//!   previous commit records its render data, and the snapshot is moved into
//!   the new creator's `create_transition`. With no predecessor the new
//!   creator is called with `None`.
//!
//! After the pass the new creators replace the retained ones; creators whose
//! key disappeared are dropped together with their component state.

use std::collections::{HashMap, HashSet};

use crate::animation::Transition;
use crate::config::{ErrorPolicy, TransitionsConfig};
use crate::creator::TransitionCreator;
use crate::error::{Result, TransitionError};
use crate::identity::IdentityKey;

/// Transitions produced by one commit.
#[derive(Debug, Default)]
pub struct CommitTransitions {
    /// Commit number, starting at 1.
    pub commit: u64,
    /// Transitions in creator order.
    pub transitions: Vec<(IdentityKey, Transition)>,
    /// Errors that were logged and skipped under [`ErrorPolicy::LogAndSkip`].
    pub skipped: Vec<TransitionError>,
}

impl CommitTransitions {
    /// Transition produced for `key`, if any.
    pub fn get(&self, key: &IdentityKey) -> Option<&Transition> {
        self.transitions
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, transition)| transition)
    }

    /// Whether no transition was produced.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Number of transitions produced.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }
}

/// Drives the transition protocol across consecutive commits of one tree.
pub struct TransitionCoordinator {
    config: TransitionsConfig,
    retained: HashMap<IdentityKey, Box<dyn TransitionCreator>>,
    commit_count: u64,
}

impl TransitionCoordinator {
    /// Coordinator with no previous commit.
    pub fn new(config: TransitionsConfig) -> Self {
        Self {
            config,
            retained: HashMap::new(),
            commit_count: 0,
        }
    }

    /// Configuration this coordinator was built with.
    pub fn config(&self) -> &TransitionsConfig {
        &self.config
    }

    /// Number of commits processed so far.
    pub fn commit_count(&self) -> u64 {
        self.commit_count
    }

    /// Keys of the creators kept from the last commit, sorted.
    pub fn retained_keys(&self) -> Vec<IdentityKey> {
        let mut keys: Vec<IdentityKey> = self.retained.keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Forget the previous commit, e.g. when the tree is replaced wholesale.
    pub fn reset(&mut self) {
        self.retained.clear();
    }

    /// Compute the transitions for a new commit and retain its creators.
    ///
    /// Under [`ErrorPolicy::Abort`] the first protocol violation ends the
    /// pass and the creators of the previous commit stay retained.
    pub fn commit(
        &mut self,
        creators: Vec<Box<dyn TransitionCreator>>,
    ) -> Result<CommitTransitions> {
        let commit = self.commit_count + 1;
        let log_target = self.config.log_target().to_owned();
        let target = log_target.as_str();
        let creators = self.dedupe(creators, target);

        let mut result = CommitTransitions {
            commit,
            ..Default::default()
        };
        let mut current = HashMap::with_capacity(creators.len());
        let mut matched = 0;

        for mut creator in creators {
            let key = creator.identity_key().clone();
            if self.retained.contains_key(&key) {
                matched += 1;
            }
            if self.config.animations_enabled() {
                match self.transition_for(creator.as_mut(), target) {
                    Ok(Some(transition)) => {
                        log::trace!(target: target, "{key}: {}", describe(&transition));
                        result.transitions.push((key.clone(), transition));
                    }
                    Ok(None) => {
                        log::trace!(target: target, "{key}: no transition");
                    }
                    Err(err) => match self.config.error_policy() {
                        ErrorPolicy::Abort => return Err(err),
                        ErrorPolicy::LogAndSkip => {
                            log::error!(target: target, "skipping transition: {err}");
                            result.skipped.push(err);
                        }
                    },
                }
            }
            current.insert(key, creator);
        }

        let unmatched = self.retained.len() - matched;
        self.retained = current;
        self.commit_count = commit;

        log::debug!(
            target: target,
            "commit {}: {} creators, {} transitions, {} skipped, {} removed",
            commit,
            self.retained.len(),
            result.transitions.len(),
            result.skipped.len(),
            unmatched
        );

        Ok(result)
    }

    fn transition_for(
        &self,
        creator: &mut dyn TransitionCreator,
        target: &str,
    ) -> Result<Option<Transition>> {
        if creator.supports_optimistic_transitions() {
            return creator.create_transition(None);
        }

        let previous = match self.retained.get(creator.identity_key()) {
            Some(outgoing) => Some(outgoing.record_render_data()?),
            None => {
                log::trace!(target: target, "{}: no predecessor", creator.identity_key());
                None
            }
        };
        creator.create_transition(previous)
    }

    /// Keep the first creator for each key.
    fn dedupe(
        &self,
        creators: Vec<Box<dyn TransitionCreator>>,
        target: &str,
    ) -> Vec<Box<dyn TransitionCreator>> {
        let mut seen = HashSet::with_capacity(creators.len());
        creators
            .into_iter()
            .filter(|creator| {
                let key = creator.identity_key();
                if seen.insert(key.clone()) {
                    return true;
                }
                if self.config.warn_on_duplicate_keys() {
                    log::warn!(target: target, "duplicate identity key {key}, ignoring creator");
                }
                false
            })
            .collect()
    }
}

/// Comma-separated names of the properties a transition animates.
fn describe(transition: &Transition) -> String {
    transition
        .property_transitions()
        .iter()
        .map(|p| p.property.name())
        .collect::<Vec<_>>()
        .join(",")
}

impl std::fmt::Debug for TransitionCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransitionCoordinator")
            .field("config", &self.config)
            .field("retained", &self.retained.len())
            .field("commit_count", &self.commit_count)
            .finish()
    }
}

impl Default for TransitionCoordinator {
    fn default() -> Self {
        Self::new(TransitionsConfig::default())
    }
}
