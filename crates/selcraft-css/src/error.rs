use thiserror::Error;

use crate::selector::FragmentKind;

/// Structural errors raised while appending a fragment to a compound selector.
///
/// Either error leaves the selector exactly as it was before the append.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// A second element, id or pseudo-element fragment was appended.
    #[error("{kind} should not occur more than one time inside the selector")]
    DuplicateFragment {
        /// The kind that is already present.
        kind: FragmentKind,
    },

    /// A fragment was appended after a fragment of strictly higher rank.
    #[error(
        "{kind} cannot follow {after}; selector parts must be arranged as \
         element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    OutOfOrder {
        /// The kind being appended.
        kind: FragmentKind,
        /// The highest-ranked kind already present.
        after: FragmentKind,
    },
}
