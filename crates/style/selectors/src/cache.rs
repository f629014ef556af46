//! Selector match caching.
//! Spec: Section 3 — Matching is stable unless the tree or attributes change
//!
//! Caching is purely an optimization layered over the pure matching
//! functions; semantics are defined without it. Users must call
//! `invalidate_for_element` whenever an element's id, type, classes,
//! attributes, or pseudo-class states change.

use crate::Selector;
use core::hash::{Hash as _, Hasher as _};
use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;

/// A simple per-element, per-selector match memo table.
#[derive(Debug, Default)]
pub struct MatchCache {
    /// Memoized match results keyed by (element key, selector key).
    store: HashMap<(u64, u64), bool>,
}

impl MatchCache {
    /// Cache a result.
    #[inline]
    pub fn set(&mut self, element_key: u64, selector_key: u64, matched: bool) {
        self.store.insert((element_key, selector_key), matched);
    }

    /// Get a cached result.
    #[inline]
    pub fn get(&self, element_key: u64, selector_key: u64) -> Option<bool> {
        self.store.get(&(element_key, selector_key)).copied()
    }

    /// Invalidate cached results for one element.
    pub fn invalidate_for_element(&mut self, element_key: u64) {
        self.store
            .retain(|&(cached_key, _), _| cached_key != element_key);
    }
}

/// Build a stable structural key for a selector to use with [`MatchCache`].
pub fn calc_selector_key(selector: &Selector) -> u64 {
    let mut hasher = DefaultHasher::new();
    selector.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_selector;

    #[test]
    fn invalidation_is_per_element() {
        let Some(selector) = parse_selector(".warning") else {
            panic!("selector should parse");
        };
        let selector_key = calc_selector_key(&selector);

        let mut cache = MatchCache::default();
        cache.set(1, selector_key, true);
        cache.set(2, selector_key, false);

        cache.invalidate_for_element(1);
        assert_eq!(cache.get(1, selector_key), None);
        assert_eq!(cache.get(2, selector_key), Some(false));
    }

    #[test]
    fn structurally_equal_selectors_share_a_key() {
        let Some(first) = parse_selector("group > .warning") else {
            panic!("selector should parse");
        };
        let Some(second) = parse_selector("group>.warning") else {
            panic!("selector should parse");
        };
        assert_eq!(calc_selector_key(&first), calc_selector_key(&second));
    }
}
