//! Entry points for building selectors.
//!
//! [`SelectorBuilder`] is a facade only: each part-starting function returns a
//! fresh [`SimpleSelector`] whose first part is already set, and
//! [`SelectorBuilder::combine`] wraps two finished selectors. The free
//! functions below forward to it.

use crate::combined::{CombinedSelector, Combinator, Selector};
use crate::simple::{PartKind, SimpleSelector};

/// Facade for starting and combining selectors.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectorBuilder;

impl SelectorBuilder {
    /// Start a selector with a type selector, e.g. `div`.
    #[must_use]
    pub fn element(value: impl Into<String>) -> SimpleSelector {
        SimpleSelector::starting_with(PartKind::Element, value)
    }

    /// Start a selector with an ID, e.g. `#main`.
    #[must_use]
    pub fn id(value: impl Into<String>) -> SimpleSelector {
        SimpleSelector::starting_with(PartKind::Id, value)
    }

    /// Start a selector with a class, e.g. `.container`.
    #[must_use]
    pub fn class(value: impl Into<String>) -> SimpleSelector {
        SimpleSelector::starting_with(PartKind::Class, value)
    }

    /// Start a selector with an attribute payload, e.g. `href$=".png"`.
    #[must_use]
    pub fn attr(value: impl Into<String>) -> SimpleSelector {
        SimpleSelector::starting_with(PartKind::Attribute, value)
    }

    /// Start a selector with a pseudo-class, e.g. `focus`.
    #[must_use]
    pub fn pseudo_class(value: impl Into<String>) -> SimpleSelector {
        SimpleSelector::starting_with(PartKind::PseudoClass, value)
    }

    /// Start a selector with a pseudo-element, e.g. `before`.
    #[must_use]
    pub fn pseudo_element(value: impl Into<String>) -> SimpleSelector {
        SimpleSelector::starting_with(PartKind::PseudoElement, value)
    }

    /// Join two selectors, simple or combined, with a combinator.
    #[must_use]
    pub fn combine(
        left: impl Into<Selector>,
        combinator: Combinator,
        right: impl Into<Selector>,
    ) -> CombinedSelector {
        CombinedSelector::new(left, combinator, right)
    }
}

/// Shorthand for [`SelectorBuilder::element`].
#[must_use]
pub fn element(value: impl Into<String>) -> SimpleSelector {
    SelectorBuilder::element(value)
}

/// Shorthand for [`SelectorBuilder::id`].
#[must_use]
pub fn id(value: impl Into<String>) -> SimpleSelector {
    SelectorBuilder::id(value)
}

/// Shorthand for [`SelectorBuilder::class`].
#[must_use]
pub fn class(value: impl Into<String>) -> SimpleSelector {
    SelectorBuilder::class(value)
}

/// Shorthand for [`SelectorBuilder::attr`].
#[must_use]
pub fn attr(value: impl Into<String>) -> SimpleSelector {
    SelectorBuilder::attr(value)
}

/// Shorthand for [`SelectorBuilder::pseudo_class`].
#[must_use]
pub fn pseudo_class(value: impl Into<String>) -> SimpleSelector {
    SelectorBuilder::pseudo_class(value)
}

/// Shorthand for [`SelectorBuilder::pseudo_element`].
#[must_use]
pub fn pseudo_element(value: impl Into<String>) -> SimpleSelector {
    SelectorBuilder::pseudo_element(value)
}

/// Shorthand for [`SelectorBuilder::combine`].
#[must_use]
pub fn combine(
    left: impl Into<Selector>,
    combinator: Combinator,
    right: impl Into<Selector>,
) -> CombinedSelector {
    SelectorBuilder::combine(left, combinator, right)
}
