//! Selector parsing.
//! Spec: <https://www.w3.org/TR/selectors-3/>
//!
//! A permissive byte-cursor parser for the supported subset: type and
//! universal selectors, `.class`, `#id`, attribute selectors with the
//! `=`, `^=`, `$=`, `*=`, `~=` operators (quoted or unquoted values),
//! `:pseudo` and `:pseudo(argument)`, and the four combinators (whitespace
//! implies descendant). Malformed input degrades to the closest parseable
//! selector; the parser never panics.

use crate::{
    AttributeOperator, AttributeSelector, CombinatorKind, CombinatorSelector, Selector,
    SelectorGroup,
};

#[derive(Clone, Debug, PartialEq, Eq)]
/// Internal tokenizer token kinds.
enum Tok {
    /// An explicit combinator token (child/adjacent/general sibling).
    Combinator(CombinatorKind),
    /// Whitespace between two simple selectors, implying descendant.
    DescendantWs,
    /// A simple (non-combinator) selector.
    Simple(Selector),
}

/// Tokenizer over a selector string.
struct SelectorTokenizer {
    /// Underlying owned bytes for the selector.
    input_bytes: Vec<u8>,
    /// Current cursor index into `input_bytes`.
    index: usize,
    /// Whether any token has been produced yet. Leading whitespace does not
    /// imply a descendant combinator.
    produced_any: bool,
}

impl SelectorTokenizer {
    /// Construct a tokenizer from input.
    #[inline]
    fn new(input: &str) -> Self {
        Self {
            input_bytes: input.as_bytes().to_vec(),
            index: 0,
            produced_any: false,
        }
    }

    /// Return the next selector token, if any.
    fn next(&mut self) -> Option<Tok> {
        let saw_whitespace = self.skip_spaces();
        let &current = self.input_bytes.get(self.index)?;
        if saw_whitespace && self.produced_any && !matches!(current, b'>' | b'+' | b'~') {
            // Cursor stays put; the simple selector is produced on the next
            // call, after the implied descendant.
            return Some(Tok::DescendantWs);
        }
        self.produced_any = true;
        match current {
            b'*' => {
                self.index = self.index.saturating_add(1);
                Some(Tok::Simple(Selector::Universal))
            }
            b'.' => Some(self.consume_class()),
            b'#' => Some(self.consume_id()),
            b'[' => Some(self.consume_attribute()),
            b':' => Some(self.consume_pseudo_class()),
            b'>' => {
                self.index = self.index.saturating_add(1);
                Some(Tok::Combinator(CombinatorKind::Child))
            }
            b'+' => {
                self.index = self.index.saturating_add(1);
                Some(Tok::Combinator(CombinatorKind::AdjacentSibling))
            }
            b'~' => {
                self.index = self.index.saturating_add(1);
                Some(Tok::Combinator(CombinatorKind::GeneralSibling))
            }
            _ => Some(Tok::Simple(Selector::Type(self.consume_ident()))),
        }
    }

    /// Skip ASCII whitespace; report whether any was skipped.
    #[inline]
    fn skip_spaces(&mut self) -> bool {
        let start = self.index;
        while matches!(self.input_bytes.get(self.index), Some(byte) if byte.is_ascii_whitespace())
        {
            self.index = self.index.saturating_add(1);
        }
        self.index > start
    }

    /// Consume an identifier of ASCII alphanumerics, '-' and '_', lowercased.
    fn consume_ident(&mut self) -> String {
        let start = self.index;
        while let Some(&byte) = self.input_bytes.get(self.index) {
            if byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_' {
                self.index = self.index.saturating_add(1);
            } else {
                break;
            }
        }
        let slice = self.input_bytes.get(start..self.index).unwrap_or(&[]);
        String::from_utf8_lossy(slice).to_ascii_lowercase()
    }

    /// Parse a class selector following '.'.
    #[inline]
    fn consume_class(&mut self) -> Tok {
        // skip '.'
        self.index = self.index.saturating_add(1);
        Tok::Simple(Selector::Class(self.consume_ident()))
    }

    /// Parse an id selector following '#'.
    #[inline]
    fn consume_id(&mut self) -> Tok {
        // skip '#'
        self.index = self.index.saturating_add(1);
        Tok::Simple(Selector::Id(self.consume_ident()))
    }

    /// Parse a pseudo-class selector following ':', with an optional
    /// parenthesized argument.
    fn consume_pseudo_class(&mut self) -> Tok {
        // skip ':'
        self.index = self.index.saturating_add(1);
        let name = self.consume_ident();
        if self
            .input_bytes
            .get(self.index)
            .is_some_and(|&byte| byte == b'(')
        {
            self.index = self.index.saturating_add(1);
            let argument = self.consume_until(b')');
            return Tok::Simple(Selector::FunctionPseudoClass {
                name,
                argument: argument.trim().to_owned(),
            });
        }
        Tok::Simple(Selector::PseudoClass(name))
    }

    /// Parse an attribute selector prelude, supporting `[name]` and
    /// `[name<op>value]` with quoted or unquoted values.
    fn consume_attribute(&mut self) -> Tok {
        // skip '['
        self.index = self.index.saturating_add(1);
        self.skip_spaces();
        let name = self.consume_ident();
        self.skip_spaces();
        let operator = self.consume_attribute_operator();
        let value = if operator == AttributeOperator::Exists {
            String::new()
        } else {
            self.skip_spaces();
            if let Some(&quote) = self
                .input_bytes
                .get(self.index)
                .filter(|&&byte| byte == b'"' || byte == b'\'')
            {
                self.index = self.index.saturating_add(1);
                self.consume_until(quote)
            } else {
                self.consume_unquoted_value()
            }
        };
        self.skip_spaces();
        if self
            .input_bytes
            .get(self.index)
            .is_some_and(|&byte| byte == b']')
        {
            self.index = self.index.saturating_add(1);
        }
        Tok::Simple(Selector::Attribute(AttributeSelector {
            name,
            operator,
            value,
        }))
    }

    /// Determine the attribute comparison operator at the cursor.
    fn consume_attribute_operator(&mut self) -> AttributeOperator {
        let prefixed = |tokenizer: &mut Self, operator| {
            tokenizer.index = tokenizer.index.saturating_add(2);
            operator
        };
        match self.input_bytes.get(self.index) {
            Some(b'=') => {
                self.index = self.index.saturating_add(1);
                AttributeOperator::Equals
            }
            Some(b'^') if self.peek_equals() => prefixed(self, AttributeOperator::StartsWith),
            Some(b'$') if self.peek_equals() => prefixed(self, AttributeOperator::EndsWith),
            Some(b'*') if self.peek_equals() => prefixed(self, AttributeOperator::Contains),
            Some(b'~') if self.peek_equals() => prefixed(self, AttributeOperator::ContainsWord),
            _ => AttributeOperator::Exists,
        }
    }

    /// True if the byte after the cursor is '='.
    #[inline]
    fn peek_equals(&self) -> bool {
        self.input_bytes
            .get(self.index.saturating_add(1))
            .is_some_and(|&byte| byte == b'=')
    }

    /// Consume an unquoted attribute value until whitespace or ']'.
    fn consume_unquoted_value(&mut self) -> String {
        let start = self.index;
        while let Some(&byte) = self.input_bytes.get(self.index) {
            if byte.is_ascii_whitespace() || byte == b']' {
                break;
            }
            self.index = self.index.saturating_add(1);
        }
        let slice = self.input_bytes.get(start..self.index).unwrap_or(&[]);
        String::from_utf8_lossy(slice).to_string()
    }

    /// Consume bytes until the terminator, consuming the terminator itself.
    fn consume_until(&mut self, terminator: u8) -> String {
        let start = self.index;
        while matches!(self.input_bytes.get(self.index), Some(&byte) if byte != terminator) {
            self.index = self.index.saturating_add(1);
        }
        let slice = self.input_bytes.get(start..self.index).unwrap_or(&[]);
        let out = String::from_utf8_lossy(slice).to_string();
        if self.input_bytes.get(self.index).is_some() {
            self.index = self.index.saturating_add(1);
        }
        out
    }
}

/// Parse a comma-separated selector group.
///
/// Unparseable parts are skipped; an all-whitespace input yields an empty
/// group that matches nothing.
/// Spec: Section 4 — Groups of selectors
pub fn parse_selector_group(input: &str) -> SelectorGroup {
    SelectorGroup {
        selectors: input
            .split(',')
            .filter_map(|part| parse_selector(part.trim()))
            .collect(),
    }
}

/// Parse one selector (no commas) into a right-nested combinator chain.
///
/// Only single simple selectors between combinators are part of the subset;
/// a compound run like `line.warning` permissively keeps the rightmost
/// simple selector of the run.
/// Spec: Sections 5–9, 11
///
/// # Panics
/// Never panics.
pub fn parse_selector(input: &str) -> Option<Selector> {
    let mut tokens = SelectorTokenizer::new(input);
    let mut simples: Vec<Selector> = Vec::new();
    let mut combinators: Vec<CombinatorKind> = Vec::new();
    let mut pending: Option<CombinatorKind> = None;

    while let Some(token) = tokens.next() {
        match token {
            // An explicit combinator overrides the implied descendant.
            Tok::Combinator(kind) => pending = Some(kind),
            Tok::DescendantWs => {
                if pending.is_none() {
                    pending = Some(CombinatorKind::Descendant);
                }
            }
            Tok::Simple(simple) => {
                if simples.is_empty() {
                    pending = None;
                    simples.push(simple);
                } else if let Some(kind) = pending.take() {
                    combinators.push(kind);
                    simples.push(simple);
                } else if let Some(last) = simples.last_mut() {
                    *last = simple;
                }
            }
        }
    }

    // Fold right-to-left so `A B > C` becomes
    // Descendant(A, Child(B, C)).
    let mut selector = simples.pop()?;
    while let Some(simple) = simples.pop() {
        let kind = combinators.pop().unwrap_or(CombinatorKind::Descendant);
        selector = Selector::Combinator(CombinatorSelector {
            kind,
            first: Box::new(simple),
            second: Box::new(selector),
        });
    }
    Some(selector)
}
