//! Selector specificity calculation.
//! Spec: <https://www.w3.org/TR/selectors-3/#specificity>
//!
//! Specificity is a single integer here rather than the spec's (a, b, c)
//! triple. The weights are an implementation convention; what cascade
//! ordering relies on is the monotonic ordering
//! id > class/attribute/pseudo-class > type > universal.

use crate::{CombinatorSelector, Selector};

/// Weight contributed by an id selector.
pub const ID_WEIGHT: u32 = 100;

/// Weight contributed by a class, attribute, or pseudo-class selector.
pub const CLASS_WEIGHT: u32 = 10;

/// Weight contributed by a type selector. The universal selector weighs 0.
pub const TYPE_WEIGHT: u32 = 1;

impl Selector {
    /// Structural specificity of this selector.
    ///
    /// Combinators sum the specificity of their two operands.
    /// Spec: Section 13 — Calculating a selector's specificity
    pub fn specificity(&self) -> u32 {
        match self {
            Self::Universal => 0,
            Self::Type(_) => TYPE_WEIGHT,
            Self::Id(_) => ID_WEIGHT,
            Self::Class(_)
            | Self::Attribute(_)
            | Self::PseudoClass(_)
            | Self::FunctionPseudoClass { .. } => CLASS_WEIGHT,
            Self::Combinator(CombinatorSelector { first, second, .. }) => {
                first.specificity().saturating_add(second.specificity())
            }
        }
    }
}
