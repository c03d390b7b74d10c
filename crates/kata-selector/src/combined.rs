//! [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
//!
//! "A complex selector is a chain of one or more compound selectors separated
//! by combinators."
//!
//! Here the chain is a binary tree: each [`CombinedSelector`] owns a left and
//! a right [`Selector`], either of which may itself be combined.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use strum_macros::Display;

use crate::error::SelectorError;
use crate::simple::SimpleSelector;
use crate::specificity::Specificity;

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
///
/// `Display` yields the literal symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A descendant combinator is whitespace that separates two compound selectors."
    #[strum(to_string = " ")]
    #[serde(rename = " ")]
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A child combinator is a greater-than sign (>) that separates two compound
    /// selectors."
    #[strum(to_string = ">")]
    #[serde(rename = ">")]
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A next-sibling combinator is a plus sign (+) that separates two compound
    /// selectors."
    #[strum(to_string = "+")]
    #[serde(rename = "+")]
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A subsequent-sibling combinator is a tilde (~) that separates two compound
    /// selectors."
    #[strum(to_string = "~")]
    #[serde(rename = "~")]
    SubsequentSibling,
}

impl FromStr for Combinator {
    type Err = SelectorError;

    /// Parse a combinator from its exact symbol. The descendant space is not trimmed.
    fn from_str(symbol: &str) -> Result<Self, Self::Err> {
        match symbol {
            " " => Ok(Self::Descendant),
            ">" => Ok(Self::Child),
            "+" => Ok(Self::NextSibling),
            "~" => Ok(Self::SubsequentSibling),
            other => Err(SelectorError::UnknownCombinator(other.to_string())),
        }
    }
}

/// Any selector that can be rendered: a simple one or a combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Selector {
    /// A selector with no combinator.
    Simple(SimpleSelector),
    /// Two selectors joined by a combinator.
    Combined(CombinedSelector),
}

impl Selector {
    /// Render the selector as CSS text.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.to_string()
    }

    /// Specificity summed across every simple selector in the tree.
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        match self {
            Self::Simple(simple) => simple.specificity(),
            Self::Combined(combined) => combined.specificity(),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple(simple) => fmt::Display::fmt(simple, f),
            Self::Combined(combined) => fmt::Display::fmt(combined, f),
        }
    }
}

impl From<SimpleSelector> for Selector {
    fn from(simple: SimpleSelector) -> Self {
        Self::Simple(simple)
    }
}

impl From<CombinedSelector> for Selector {
    fn from(combined: CombinedSelector) -> Self {
        Self::Combined(combined)
    }
}

/// Two selectors joined by a combinator. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CombinedSelector {
    left: Box<Selector>,
    combinator: Combinator,
    right: Box<Selector>,
}

impl CombinedSelector {
    /// Join `left` and `right` with `combinator`. Operands are not validated.
    #[must_use]
    pub fn new(
        left: impl Into<Selector>,
        combinator: Combinator,
        right: impl Into<Selector>,
    ) -> Self {
        Self {
            left: Box::new(left.into()),
            combinator,
            right: Box::new(right.into()),
        }
    }

    /// The selector before the combinator.
    #[must_use]
    pub fn left(&self) -> &Selector {
        &self.left
    }

    /// The combinator joining the two sides.
    #[must_use]
    pub const fn combinator(&self) -> Combinator {
        self.combinator
    }

    /// The selector after the combinator.
    #[must_use]
    pub fn right(&self) -> &Selector {
        &self.right
    }

    /// Render as `left <combinator> right`, with one space on each side of
    /// the combinator. A descendant combinator therefore renders as three spaces.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.to_string()
    }

    /// [§ 17](https://www.w3.org/TR/selectors-4/#specificity-rules)
    /// Specificity of both sides summed.
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        self.left.specificity() + self.right.specificity()
    }
}

impl fmt::Display for CombinedSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.combinator, self.right)
    }
}
