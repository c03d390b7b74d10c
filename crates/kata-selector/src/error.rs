use thiserror::Error;

use crate::simple::PartKind;

/// Errors raised by selector construction.
///
/// Appending a part either succeeds completely or fails with one of these
/// and leaves the selector untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// An element, ID or pseudo-element part was appended a second time.
    #[error(
        "Element, id and pseudo-element should not occur more then one time inside the selector (duplicate {kind})"
    )]
    DuplicatePart {
        /// The kind that was repeated.
        kind: PartKind,
    },

    /// A part was appended after a part that must come later.
    #[error(
        "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element ({kind} after {after})"
    )]
    OrderViolation {
        /// The kind that was appended too late.
        kind: PartKind,
        /// The kind of the last part already in the selector.
        after: PartKind,
    },

    /// A combinator symbol other than ` `, `>`, `+` or `~`.
    #[error("Unknown combinator {0:?}, expected one of \" \", \">\", \"+\", \"~\"")]
    UnknownCombinator(String),
}
