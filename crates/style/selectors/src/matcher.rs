//! Selector matching engine.
//! Spec: <https://www.w3.org/TR/selectors-3/>
//!
//! Matching is evaluated right-to-left: a combinator first matches its
//! second (rightmost) selector against the element, then confirms the
//! structural relation by trying its first selector against the related
//! ancestor(s) or sibling(s). The element returned is always the one the
//! rightmost selector matched.

use crate::{
    AttributeOperator, AttributeSelector, CombinatorKind, CombinatorSelector, Selector,
    SelectorGroup, SelectorModel,
};

impl Selector {
    /// Match this selector against an element.
    ///
    /// Returns the matched element (for simple selectors, the element
    /// itself) or `None`. An element lacking a queried id, type, or
    /// attribute is a clean no-match, never an error.
    /// Spec: Section 3 — matching; Sections 5–9, 11 per variant
    pub fn match_element<M: SelectorModel>(
        &self,
        model: &M,
        element: M::Element,
    ) -> Option<M::Element> {
        let matched = match self {
            Self::Universal => true,
            Self::Type(type_name) => model.type_name(element) == Some(type_name.as_str()),
            Self::Id(id_value) => model.element_id(element) == Some(id_value.as_str()),
            Self::Class(class_name) => model.has_style_class(element, class_name),
            Self::Attribute(attribute) => attribute.matches(model, element),
            Self::PseudoClass(pseudo_class) => model.has_pseudo_class(element, pseudo_class),
            Self::FunctionPseudoClass { name, argument } => {
                model.matches_function_pseudo_class(element, name, argument)
            }
            Self::Combinator(combinator) => return combinator.match_element(model, element),
        };
        matched.then_some(element)
    }

    /// Convenience wrapper over [`Self::match_element`].
    pub fn matches<M: SelectorModel>(&self, model: &M, element: M::Element) -> bool {
        self.match_element(model, element).is_some()
    }
}

impl AttributeSelector {
    /// Match the attribute predicate against an element.
    ///
    /// The attribute value is fetched through the model's string conversion
    /// first; an element without a matching accessor never matches.
    /// Spec: Section 8 — Attribute selectors
    pub fn matches<M: SelectorModel>(&self, model: &M, element: M::Element) -> bool {
        let Some(actual) = model.attribute_value(element, &self.name) else {
            return false;
        };
        match self.operator {
            AttributeOperator::Exists => true,
            AttributeOperator::Equals => actual == self.value,
            AttributeOperator::StartsWith => actual.starts_with(&self.value),
            AttributeOperator::EndsWith => actual.ends_with(&self.value),
            AttributeOperator::Contains => actual.contains(&self.value),
            // Whole-word match: "foo bar" contains the word "foo", while
            // "foobar" does not.
            AttributeOperator::ContainsWord => {
                actual.split_whitespace().any(|word| word == self.value)
            }
        }
    }
}

impl CombinatorSelector {
    /// Match a combinator against an element, right-to-left.
    /// Spec: Section 11 — Combinators
    pub fn match_element<M: SelectorModel>(
        &self,
        model: &M,
        element: M::Element,
    ) -> Option<M::Element> {
        let result = self.second.match_element(model, element)?;
        match self.kind {
            CombinatorKind::Descendant => {
                let mut ancestor = model.parent(result);
                while let Some(candidate) = ancestor {
                    if self.first.matches(model, candidate) {
                        return Some(result);
                    }
                    ancestor = model.parent(candidate);
                }
                None
            }
            CombinatorKind::Child => {
                let parent = model.parent(result)?;
                self.first.matches(model, parent).then_some(result)
            }
            CombinatorKind::AdjacentSibling => {
                // Exactly one hop; a match further back is not adjacency.
                let sibling = model.previous_sibling(result)?;
                self.first.matches(model, sibling).then_some(result)
            }
            CombinatorKind::GeneralSibling => {
                let mut sibling = model.previous_sibling(result);
                while let Some(candidate) = sibling {
                    if self.first.matches(model, candidate) {
                        return Some(result);
                    }
                    sibling = model.previous_sibling(candidate);
                }
                None
            }
        }
    }
}

impl SelectorGroup {
    /// True iff at least one alternative matches the element.
    /// Spec: Section 4 — Groups of selectors
    pub fn matches<M: SelectorModel>(&self, model: &M, element: M::Element) -> bool {
        self.selectors
            .iter()
            .any(|alternative| alternative.matches(model, element))
    }

    /// First alternative (in declaration order) that matches, or `None`.
    ///
    /// First-match wins regardless of specificity; the caller reads the
    /// specificity off the returned alternative for cascade ordering.
    /// Spec: Section 4
    pub fn match_first<M: SelectorModel>(
        &self,
        model: &M,
        element: M::Element,
    ) -> Option<&Selector> {
        self.selectors
            .iter()
            .find(|alternative| alternative.matches(model, element))
    }
}
