//! Simple selectors and the part-ordering state machine.
//!
//! [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
//! "A compound selector is a sequence of simple selectors that are not
//! separated by a combinator."
//!
//! The kata calls that sequence a *simple selector*: it is built one part at
//! a time, and parts must arrive in the order
//! `element#id.class[attr]:pseudo-class::pseudo-element`.

use std::fmt;

use kata_common::warning::warn_once;
use serde::Serialize;
use strum_macros::{Display, EnumString};

use crate::error::SelectorError;
use crate::specificity::Specificity;

/// The kinds of part a simple selector is built from.
///
/// Variants are declared in the order they must appear in a selector, so the
/// derived `Ord` is the phase order used to reject out-of-order parts.
/// Kinds display and parse in kebab case (`pseudo-class`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, Serialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum PartKind {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Rendered verbatim. Example: `div`
    Element,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Example: `#main`
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Example: `.container`
    Class,

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// The value is the whole bracket payload. Example: `[href$=".png"]`
    Attribute,

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Example: `:nth-of-type(even)`
    PseudoClass,

    /// Example: `::before`
    PseudoElement,
}

impl PartKind {
    /// Every kind, in phase order.
    pub const ALL: [Self; 6] = [
        Self::Element,
        Self::Id,
        Self::Class,
        Self::Attribute,
        Self::PseudoClass,
        Self::PseudoElement,
    ];

    /// Whether the kind may occur more than once in one simple selector.
    ///
    /// Element, ID and pseudo-element are singular; everything else repeats.
    #[must_use]
    pub const fn is_repeatable(self) -> bool {
        matches!(self, Self::Class | Self::Attribute | Self::PseudoClass)
    }
}

/// One rendered part of a simple selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectorPart {
    /// What kind of part this is.
    pub kind: PartKind,
    /// The raw value, without its sigil.
    pub value: String,
}

impl fmt::Display for SelectorPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = &self.value;
        match self.kind {
            PartKind::Element => f.write_str(value),
            PartKind::Id => write!(f, "#{value}"),
            PartKind::Class => write!(f, ".{value}"),
            PartKind::Attribute => write!(f, "[{value}]"),
            PartKind::PseudoClass => write!(f, ":{value}"),
            PartKind::PseudoElement => write!(f, "::{value}"),
        }
    }
}

/// A selector with no combinator, built part by part.
///
/// The current phase is the kind of the last appended part; it never moves
/// backwards.
///
/// ```
/// use kata_selector::element;
///
/// # fn main() -> Result<(), kata_selector::SelectorError> {
/// let selector = element("a").attr(r#"href$=".png""#)?.pseudo_class("focus")?;
/// assert_eq!(selector.stringify(), r#"a[href$=".png"]:focus"#);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SimpleSelector {
    parts: Vec<SelectorPart>,
}

impl SimpleSelector {
    /// Create an empty selector (phase `empty`).
    #[must_use]
    pub const fn new() -> Self {
        Self { parts: Vec::new() }
    }

    /// Create a selector whose first part is `kind`.
    ///
    /// A first part can never violate ordering or uniqueness, so this cannot fail.
    #[must_use]
    pub fn starting_with(kind: PartKind, value: impl Into<String>) -> Self {
        let mut selector = Self::new();
        selector.push(kind, value.into());
        selector
    }

    /// The kind of the most recently appended part, or `None` while empty.
    #[must_use]
    pub fn phase(&self) -> Option<PartKind> {
        self.parts.last().map(|part| part.kind)
    }

    /// The parts appended so far, in order.
    #[must_use]
    pub fn parts(&self) -> &[SelectorPart] {
        &self.parts
    }

    /// Whether no part has been appended yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Append a part of any kind in place.
    ///
    /// # Errors
    ///
    /// - [`SelectorError::DuplicatePart`] if `kind` is element, ID or
    ///   pseudo-element and the selector already ends with that kind.
    /// - [`SelectorError::OrderViolation`] if the selector already holds a
    ///   part that must come after `kind`.
    ///
    /// On error the selector is left exactly as it was.
    pub fn append(
        &mut self,
        kind: PartKind,
        value: impl Into<String>,
    ) -> Result<&mut Self, SelectorError> {
        if let Some(phase) = self.phase() {
            if phase == kind && !kind.is_repeatable() {
                return Err(SelectorError::DuplicatePart { kind });
            }
            if phase > kind {
                return Err(SelectorError::OrderViolation { kind, after: phase });
            }
        }
        self.push(kind, value.into());
        Ok(self)
    }

    fn push(&mut self, kind: PartKind, value: String) {
        if value.is_empty() {
            warn_once("Selector", &format!("empty value for {kind} part"));
        }
        self.parts.push(SelectorPart { kind, value });
    }

    fn chain(mut self, kind: PartKind, value: impl Into<String>) -> Result<Self, SelectorError> {
        let _ = self.append(kind, value)?;
        Ok(self)
    }

    /// Append a type selector, rendered verbatim.
    ///
    /// # Errors
    ///
    /// See [`SimpleSelector::append`].
    pub fn element(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.chain(PartKind::Element, value)
    }

    /// Append an ID selector, rendered as `#value`.
    ///
    /// # Errors
    ///
    /// See [`SimpleSelector::append`].
    pub fn id(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.chain(PartKind::Id, value)
    }

    /// Append a class selector, rendered as `.value`.
    ///
    /// # Errors
    ///
    /// See [`SimpleSelector::append`].
    pub fn class(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.chain(PartKind::Class, value)
    }

    /// Append an attribute selector, rendered as `[value]`.
    ///
    /// # Errors
    ///
    /// See [`SimpleSelector::append`].
    pub fn attr(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.chain(PartKind::Attribute, value)
    }

    /// Append a pseudo-class, rendered as `:value`.
    ///
    /// # Errors
    ///
    /// See [`SimpleSelector::append`].
    pub fn pseudo_class(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.chain(PartKind::PseudoClass, value)
    }

    /// Append a pseudo-element, rendered as `::value`.
    ///
    /// # Errors
    ///
    /// See [`SimpleSelector::append`].
    pub fn pseudo_element(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.chain(PartKind::PseudoElement, value)
    }

    /// The parts concatenated with no separators, e.g. `div#id.a.b[attr]:hover::before`.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.to_string()
    }

    /// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        self.parts
            .iter()
            .fold(Specificity::default(), |spec, part| spec + Specificity::of(part.kind))
    }
}

impl fmt::Display for SimpleSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for part in &self.parts {
            write!(f, "{part}")?;
        }
        Ok(())
    }
}
