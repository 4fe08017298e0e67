//! CSS selector building for selcraft.
//!
//! # Scope
//!
//! This crate implements:
//! - **Compound selectors** ([§ 4.2](https://www.w3.org/TR/selectors-4/#compound))
//!   - Type, ID, class, attribute, pseudo-class and pseudo-element fragments
//!   - Ordering and cardinality validation on every append
//!   - Specificity calculation
//!
//! - **Combinators** ([§ 16](https://www.w3.org/TR/selectors-4/#combinators))
//!   - Descendant, child, next-sibling, subsequent-sibling and custom tokens
//!   - Arbitrarily nested combinations
//!
//! - **Shapes** - a rectangle value type and typed JSON helpers
//!
//! # Not Implemented
//!
//! - Selector parsing and matching
//! - Validation of fragment contents (attribute syntax, pseudo-class names)

/// Selector construction errors.
pub mod error;
/// Selector fragments, compound and combined selectors.
pub mod selector;
/// Rectangle factory and JSON helpers.
pub mod shapes;

// Re-exports for convenience
pub use error::SelectorError;
pub use selector::{
    Combinator, CombinedSelector, CompoundSelector, FragmentKind, Render, Selector,
    SelectorBuilder, SelectorFragment, Specificity,
};
pub use shapes::{Rectangle, ShapeError, from_json, to_json};
