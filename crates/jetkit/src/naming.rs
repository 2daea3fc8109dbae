//! Collision-free name allocation.
//!
//! Histograms, canvases and intermediate objects written during an analysis
//! pass all need distinct names inside the same output file. [`NameRegistry`]
//! hands out names that are guaranteed unique for its lifetime; the
//! process-wide default registry behind [`unique_name`] covers the common
//! case of one output namespace per job, while tests and parallel writers
//! can carry their own registry.
//!
//! A claimed name is never released. The registry grows monotonically for as
//! long as it is alive.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use once_cell::sync::Lazy;

/// Candidate used when a caller asks for a name without providing a base.
const FALLBACK_CANDIDATE: &str = "UniqueString_0";

static GLOBAL: Lazy<NameRegistry> = Lazy::new(NameRegistry::new);

/// Claim a name from the process-wide registry.
pub fn unique_name(base: Option<&str>) -> String {
    GLOBAL.claim(base)
}

/// The process-wide registry backing [`unique_name`].
pub fn global_registry() -> &'static NameRegistry {
    &GLOBAL
}

/// A registry of issued names, safe to share across threads.
#[derive(Debug, Default)]
pub struct NameRegistry {
    names: Mutex<HashSet<String>>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim a name built from `base`, never returning a name this registry
    /// has issued or recorded before.
    ///
    /// The candidate starts as `{base}_0`. On collision it is rebuilt as
    /// `{root}_{i}` with an incrementing counter, where `root` is the part of
    /// the previous candidate before its first underscore. A base that itself
    /// contains underscores therefore falls back to its first segment once
    /// its zeroth name is taken: claiming after `a_b_0` exists yields `a_0`,
    /// not `a_b_1`.
    pub fn claim(&self, base: Option<&str>) -> String {
        let mut names = self.lock();
        let mut candidate = match base {
            Some(base) => format!("{base}_0"),
            None => FALLBACK_CANDIDATE.to_string(),
        };
        let mut i: u64 = 0;
        while names.contains(&candidate) {
            let root = match candidate.split_once('_') {
                Some((root, _)) => root.to_string(),
                None => candidate.clone(),
            };
            candidate = format!("{root}_{i}");
            i += 1;
        }
        names.insert(candidate.clone());
        candidate
    }

    /// Record `name` as taken. Returns false if it was already present.
    ///
    /// Lets callers reserve externally chosen names so that [`claim`] will
    /// steer around them.
    ///
    /// [`claim`]: NameRegistry::claim
    pub fn insert_if_absent(&self, name: &str) -> bool {
        self.lock().insert(name.to_string())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lock().contains(name)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashSet<String>> {
        // The set is consistent after every operation, so a poisoned lock
        // still holds usable state.
        self.names.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_claims_with_same_base_are_distinct() {
        let registry = NameRegistry::new();
        let mut seen = HashSet::new();
        for _ in 0..50 {
            let name = registry.claim(Some("hist"));
            assert!(seen.insert(name));
        }
    }

    #[test]
    fn claims_without_base_are_distinct() {
        let registry = NameRegistry::new();
        let first = registry.claim(None);
        let second = registry.claim(None);
        assert_ne!(first, second);
        assert!(!first.is_empty());
        assert!(!second.is_empty());
    }

    #[test]
    fn collision_counter_increments() {
        let registry = NameRegistry::new();
        assert_eq!(registry.claim(Some("h")), "h_0");
        assert_eq!(registry.claim(Some("h")), "h_1");
        assert_eq!(registry.claim(Some("h")), "h_2");
    }

    #[test]
    fn underscored_base_truncates_on_collision() {
        let registry = NameRegistry::new();
        assert_eq!(registry.claim(Some("a_b")), "a_b_0");
        // The rebuild keeps only the segment before the first underscore.
        assert_eq!(registry.claim(Some("a_b")), "a_0");
        assert_eq!(registry.claim(Some("a_b")), "a_1");
    }

    #[test]
    fn claim_steers_around_reserved_names() {
        let registry = NameRegistry::new();
        assert!(registry.insert_if_absent("h_0"));
        assert!(!registry.insert_if_absent("h_0"));
        assert_eq!(registry.claim(Some("h")), "h_1");
    }

    #[test]
    fn registry_counts_issued_names() {
        let registry = NameRegistry::new();
        assert!(registry.is_empty());
        let name = registry.claim(Some("jet"));
        assert!(registry.contains(&name));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn global_helper_is_collision_free() {
        let first = unique_name(Some("global_test_base"));
        let second = unique_name(Some("global_test_base"));
        assert_ne!(first, second);
        assert!(global_registry().contains(&first));
    }
}
