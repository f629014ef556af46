//! Selector matching for styleable element trees.
//! Spec: <https://www.w3.org/TR/selectors-3/>
//!
//! This crate implements the subset of selector semantics needed to style a
//! figure tree (or any other tree-shaped styleable domain):
//! - Universal, type, class, id, attribute, and pseudo-class selectors
//! - Combinators: descendant, child, adjacent sibling, general sibling
//! - Integer specificity for cascade ordering
//! - A permissive parser for the supported subset
//! - A simple match cache that can be invalidated on element changes
//!
//! The engine never inspects elements directly. All tree access goes through
//! the [`SelectorModel`] capability, so the same matcher works over a drawing
//! scene graph, a DOM snapshot, or a test fixture.

#![forbid(unsafe_code)]

mod cache;
mod matcher;
mod parser;
mod pseudo_states;
mod specificity;

pub use cache::{MatchCache, calc_selector_key};
pub use parser::{parse_selector, parse_selector_group};
pub use pseudo_states::PseudoClassStates;
pub use specificity::{CLASS_WEIGHT, ID_WEIGHT, TYPE_WEIGHT};

/// An adapter that abstracts element-tree access for selector matching.
/// Implement this for your styleable document layer.
///
/// Matching is a pure function of the model, the element, and the selector
/// tree; implementations only need to be safe for concurrent reads to make
/// matching safe to call from multiple threads.
///
/// Spec references:
/// - Section 3: Selectors overview and element matching
pub trait SelectorModel {
    /// Opaque element handle. Kept `Copy` so combinators can walk the tree
    /// without borrowing from the model.
    type Element: Copy + Eq;

    /// Unique, stable key for the element.
    /// Spec: Section 3 — used only for caching purposes here.
    fn unique_key(&self, element: Self::Element) -> u64;

    /// Parent element if any.
    /// Spec: Section 11 — Combinators (for tree relationships)
    fn parent(&self, element: Self::Element) -> Option<Self::Element>;

    /// Previous sibling element, if any.
    /// Spec: Section 11 — Sibling combinators
    fn previous_sibling(&self, element: Self::Element) -> Option<Self::Element>;

    /// Type name of the element, if it has one.
    /// Spec: Section 5 — Type selectors
    fn type_name(&self, element: Self::Element) -> Option<&str>;

    /// Returns `Some(id)` if the element has an id, else `None`.
    /// Spec: Section 7 — ID selectors
    fn element_id(&self, element: Self::Element) -> Option<&str>;

    /// True if the element carries the given style class.
    /// Spec: Section 6 — Class selectors
    fn has_style_class(&self, element: Self::Element, class: &str) -> bool;

    /// True if the element is currently in the given pseudo-class state.
    ///
    /// Implementations that layer transient UI state over intrinsic element
    /// state should consult their [`PseudoClassStates`] overlay first and
    /// fall back to the intrinsic state.
    /// Spec: Section 9 — Pseudo-classes
    fn has_pseudo_class(&self, element: Self::Element, pseudo_class: &str) -> bool;

    /// True if the element matches a functional pseudo-class with the given
    /// argument. The default treats the argument as irrelevant and defers to
    /// [`Self::has_pseudo_class`].
    /// Spec: Section 9 — Functional pseudo-classes
    fn matches_function_pseudo_class(
        &self,
        element: Self::Element,
        pseudo_class: &str,
        _argument: &str,
    ) -> bool {
        self.has_pseudo_class(element, pseudo_class)
    }

    /// String-converted value of the named attribute, if the element has a
    /// matching styleable accessor.
    /// Spec: Section 8 — Attribute selectors
    fn attribute_value(&self, element: Self::Element, name: &str) -> Option<String>;
}

/// Attribute value comparison operators.
/// Spec: Section 8 — Attribute selectors
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AttributeOperator {
    /// `[attr]` — the attribute is present, value irrelevant.
    Exists,
    /// `[attr=value]` — exact value match.
    Equals,
    /// `[attr^=value]` — value prefix match.
    StartsWith,
    /// `[attr$=value]` — value suffix match.
    EndsWith,
    /// `[attr*=value]` — substring match.
    Contains,
    /// `[attr~=value]` — whole whitespace-separated word match.
    ContainsWord,
}

/// An attribute selector: name, operator, and expected value.
/// Spec: Section 8
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AttributeSelector {
    /// Attribute name, ASCII lowercase.
    pub name: String,
    /// Comparison operator.
    pub operator: AttributeOperator,
    /// Expected value; empty for [`AttributeOperator::Exists`].
    pub value: String,
}

/// Structural relations between two selectors.
/// Spec: Section 11 — Combinators
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CombinatorKind {
    /// `A B` — the first selector matches some ancestor.
    Descendant,
    /// `A > B` — the first selector matches the parent.
    Child,
    /// `A + B` — the first selector matches the immediate previous sibling.
    AdjacentSibling,
    /// `A ~ B` — the first selector matches some previous sibling.
    GeneralSibling,
}

/// A combinator composing two sub-selectors via a structural relation.
///
/// `first` is always a simple selector after parsing; `second` may itself be
/// another combinator, giving a right-nested chain for `A B > C`.
/// Spec: Section 11
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CombinatorSelector {
    /// The structural relation between the operands.
    pub kind: CombinatorKind,
    /// The left (outer) operand, constrained on the related element.
    pub first: Box<Selector>,
    /// The right (inner) operand, constrained on the element being matched.
    pub second: Box<Selector>,
}

/// A selector: simple selectors plus combinators over them.
///
/// Immutable once constructed. Matching dispatches by variant and has no
/// mutable state, so a selector tree is safe to share across threads.
/// Spec: Sections 5–9, 11
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Selector {
    /// `*` — matches any element.
    /// Spec: Section 5 — Universal selector
    Universal,
    /// `name` — matches elements with the given type name.
    /// Spec: Section 5 — Type selectors
    Type(String),
    /// `#id` — matches the element with the given id.
    /// Spec: Section 7 — ID selectors
    Id(String),
    /// `.class` — matches elements carrying the style class.
    /// Spec: Section 6 — Class selectors
    Class(String),
    /// `[attr...]` — matches on a string-converted attribute value.
    /// Spec: Section 8 — Attribute selectors
    Attribute(AttributeSelector),
    /// `:name` — matches elements in the pseudo-class state.
    /// Spec: Section 9 — Pseudo-classes
    PseudoClass(String),
    /// `:name(argument)` — functional pseudo-class.
    /// Spec: Section 9 — Functional pseudo-classes
    FunctionPseudoClass {
        /// Pseudo-class name, ASCII lowercase.
        name: String,
        /// Raw argument text between the parentheses.
        argument: String,
    },
    /// Two sub-selectors joined by a structural relation.
    /// Spec: Section 11 — Combinators
    Combinator(CombinatorSelector),
}

/// An ordered group of alternative selectors (comma-separated in CSS terms).
///
/// The group matches if any alternative matches; ties between alternatives
/// go to the first in declaration order, not the most specific one. Cascade
/// ordering across rules is the caller's responsibility.
/// Spec: Section 4 — Groups of selectors
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SelectorGroup {
    /// Alternatives in declaration order.
    pub selectors: Vec<Selector>,
}
