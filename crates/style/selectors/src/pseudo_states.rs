//! Externally-owned pseudo-class state overlays.
//! Spec: Section 9 — Pseudo-classes
//!
//! Transient UI state ("currently hovered", "selected") is not intrinsic to
//! the element tree and must never live in the immutable selector AST. A
//! [`PseudoClassStates`] map is owned by the [`SelectorModel`] implementation
//! instead; its `has_pseudo_class` consults the overlay first and falls back
//! to intrinsic element state.
//!
//! [`SelectorModel`]: crate::SelectorModel

use core::hash::Hash;
use std::collections::{HashMap, HashSet};

/// A mutable mapping from pseudo-class name to the set of elements currently
/// in that state.
#[derive(Clone, Debug)]
pub struct PseudoClassStates<E> {
    /// Per-pseudo-class element sets.
    states: HashMap<String, HashSet<E>>,
}

impl<E> Default for PseudoClassStates<E> {
    fn default() -> Self {
        Self {
            states: HashMap::new(),
        }
    }
}

impl<E: Copy + Eq + Hash> PseudoClassStates<E> {
    /// Create an empty overlay.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Put an element into the given pseudo-class state.
    pub fn insert(&mut self, pseudo_class: &str, element: E) {
        self.states
            .entry(pseudo_class.to_owned())
            .or_default()
            .insert(element);
    }

    /// Take an element out of the given pseudo-class state.
    pub fn remove(&mut self, pseudo_class: &str, element: E) {
        if let Some(elements) = self.states.get_mut(pseudo_class) {
            elements.remove(&element);
            if elements.is_empty() {
                self.states.remove(pseudo_class);
            }
        }
    }

    /// True if the overlay places the element in the given state.
    pub fn contains(&self, pseudo_class: &str, element: E) -> bool {
        self.states
            .get(pseudo_class)
            .is_some_and(|elements| elements.contains(&element))
    }

    /// Drop every element from the given pseudo-class state.
    pub fn clear(&mut self, pseudo_class: &str) {
        self.states.remove(pseudo_class);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_contains_remove_roundtrip() {
        let mut states: PseudoClassStates<u32> = PseudoClassStates::new();
        assert!(!states.contains("hover", 7));

        states.insert("hover", 7);
        assert!(states.contains("hover", 7));
        assert!(!states.contains("hover", 8));
        assert!(!states.contains("focus", 7));

        states.remove("hover", 7);
        assert!(!states.contains("hover", 7));
    }

    #[test]
    fn clear_drops_all_elements_of_one_state() {
        let mut states: PseudoClassStates<u32> = PseudoClassStates::new();
        states.insert("selected", 1);
        states.insert("selected", 2);
        states.insert("hover", 1);

        states.clear("selected");
        assert!(!states.contains("selected", 1));
        assert!(!states.contains("selected", 2));
        assert!(states.contains("hover", 1));
    }
}
