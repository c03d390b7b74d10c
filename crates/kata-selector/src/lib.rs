//! CSS selector builder for the kata exercises.
//!
//! # Scope
//!
//! This crate implements:
//! - **Simple selectors** ([§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound))
//!   - Type, ID, class, attribute, pseudo-class and pseudo-element parts
//!   - Part ordering: `element#id.class[attr]:pseudo-class::pseudo-element`
//!   - Element, ID and pseudo-element may occur at most once
//!
//! - **Combined selectors** ([§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators))
//!   - Descendant (` `), child (`>`), next-sibling (`+`), subsequent-sibling (`~`)
//!   - Arbitrary nesting
//!
//! - **Specificity** ([§ 17](https://www.w3.org/TR/selectors-4/#specificity-rules))
//!
//! # Example
//!
//! ```
//! use kata_selector::{Combinator, combine, element};
//!
//! # fn main() -> Result<(), kata_selector::SelectorError> {
//! let selector = combine(
//!     element("div").id("main")?,
//!     Combinator::NextSibling,
//!     element("table").id("data")?,
//! );
//! assert_eq!(selector.stringify(), "div#main + table#data");
//! # Ok(())
//! # }
//! ```

/// The `SelectorBuilder` facade and its free-function shorthands.
pub mod builder;
/// Combinators, combined selectors and the `Selector` tree.
pub mod combined;
/// Errors raised while appending selector parts.
pub mod error;
/// Simple selectors and the part-ordering state machine.
pub mod simple;
/// Specificity per [§ 17](https://www.w3.org/TR/selectors-4/#specificity-rules).
pub mod specificity;

pub use builder::{
    SelectorBuilder, attr, class, combine, element, id, pseudo_class, pseudo_element,
};
pub use combined::{CombinedSelector, Combinator, Selector};
pub use error::SelectorError;
pub use simple::{PartKind, SelectorPart, SimpleSelector};
pub use specificity::Specificity;
