//! CSS selector construction
//!
//! Builds compound selectors fragment by fragment, enforcing the ordering
//! and cardinality rules of
//! [Selectors Level 4 § 4.2](https://www.w3.org/TR/selectors-4/#compound),
//! and joins them with combinators into complex selectors.

mod combinator;

use std::fmt;
use std::ops::{Add, AddAssign};

use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString};

use crate::error::SelectorError;

pub use combinator::{Combinator, CombinedSelector, Selector};

/// The six kinds of simple selector a compound selector is built from.
///
/// Variants are declared in rank order, so the derived `Ord` is the
/// syntactic order in which fragments must appear:
/// element < id < class < attribute < pseudo-class < pseudo-element.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, EnumIter, Serialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum FragmentKind {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Examples: `div`, `p`, `span`
    Element,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Examples: `#main`, `#nav-bar`
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Examples: `.highlight`, `.btn`
    Class,

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Examples: `[href]`, `[src$=".png"]`
    #[strum(to_string = "attribute", serialize = "attr")]
    Attribute,

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Examples: `:hover`, `:nth-of-type(2)`
    PseudoClass,

    /// [§ 3.6.1 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Examples: `::before`, `::placeholder`
    PseudoElement,
}

impl FragmentKind {
    /// Position of this kind in the required fragment order (0 to 5).
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Element, id and pseudo-element may appear at most once per compound.
    #[must_use]
    pub const fn is_unique(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }
}

/// A single simple selector, stored without its prefix.
///
/// The value is opaque: `Attribute("href$=\".png\"")` renders as
/// `[href$=".png"]` without any check of the expression inside.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "kebab-case")]
pub enum SelectorFragment {
    /// Rendered as the bare name.
    Element(String),
    /// Rendered as `#name`.
    Id(String),
    /// Rendered as `.name`.
    Class(String),
    /// Rendered as `[expr]`.
    Attribute(String),
    /// Rendered as `:name`.
    PseudoClass(String),
    /// Rendered as `::name`.
    PseudoElement(String),
}

impl SelectorFragment {
    /// Create a fragment of the given kind.
    #[must_use]
    pub fn new(kind: FragmentKind, value: impl Into<String>) -> Self {
        let value = value.into();
        match kind {
            FragmentKind::Element => Self::Element(value),
            FragmentKind::Id => Self::Id(value),
            FragmentKind::Class => Self::Class(value),
            FragmentKind::Attribute => Self::Attribute(value),
            FragmentKind::PseudoClass => Self::PseudoClass(value),
            FragmentKind::PseudoElement => Self::PseudoElement(value),
        }
    }

    /// The kind of this fragment.
    #[must_use]
    pub const fn kind(&self) -> FragmentKind {
        match self {
            Self::Element(_) => FragmentKind::Element,
            Self::Id(_) => FragmentKind::Id,
            Self::Class(_) => FragmentKind::Class,
            Self::Attribute(_) => FragmentKind::Attribute,
            Self::PseudoClass(_) => FragmentKind::PseudoClass,
            Self::PseudoElement(_) => FragmentKind::PseudoElement,
        }
    }

    /// The bare value, without prefix or brackets.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Element(v)
            | Self::Id(v)
            | Self::Class(v)
            | Self::Attribute(v)
            | Self::PseudoClass(v)
            | Self::PseudoElement(v) => v,
        }
    }
}

impl fmt::Display for SelectorFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element(v) => write!(f, "{v}"),
            Self::Id(v) => write!(f, "#{v}"),
            Self::Class(v) => write!(f, ".{v}"),
            Self::Attribute(v) => write!(f, "[{v}]"),
            Self::PseudoClass(v) => write!(f, ":{v}"),
            Self::PseudoElement(v) => write!(f, "::{v}"),
        }
    }
}

/// Anything that can produce its CSS text form.
///
/// `render` always agrees with the `Display` implementation.
pub trait Render: fmt::Display {
    /// The CSS text of this selector.
    fn render(&self) -> String {
        self.to_string()
    }
}

/// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
///
/// (A, B, C) = (ids, classes + attributes + pseudo-classes,
/// types + pseudo-elements), compared lexicographically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
pub struct Specificity(pub u32, pub u32, pub u32);

impl Specificity {
    /// Create a new specificity with (A, B, C) components.
    #[must_use]
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self(a, b, c)
    }
}

impl Add for Specificity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0, self.1 + rhs.1, self.2 + rhs.2)
    }
}

impl AddAssign for Specificity {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl fmt::Display for Specificity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0, self.1, self.2)
    }
}

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// An ordered run of fragments with no combinator between them, such as
/// `div#main.container`. Every append is validated before it is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompoundSelector {
    fragments: Vec<SelectorFragment>,
    /// Highest-ranked kind appended so far. Never decreases.
    #[serde(skip)]
    highest: Option<FragmentKind>,
}

impl CompoundSelector {
    /// An empty compound selector. Renders as the empty string.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fragments: Vec::new(),
            highest: None,
        }
    }

    fn starting_with(fragment: SelectorFragment) -> Self {
        Self {
            highest: Some(fragment.kind()),
            fragments: vec![fragment],
        }
    }

    /// The fragments in append order.
    #[must_use]
    pub fn fragments(&self) -> &[SelectorFragment] {
        &self.fragments
    }

    /// The highest-ranked kind appended so far.
    #[must_use]
    pub const fn highest_kind(&self) -> Option<FragmentKind> {
        self.highest
    }

    /// Number of fragments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// True if no fragment has been appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// True if a fragment of `kind` is present.
    #[must_use]
    pub fn contains(&self, kind: FragmentKind) -> bool {
        self.fragments.iter().any(|fragment| fragment.kind() == kind)
    }

    /// Append a fragment after checking cardinality, then ordering.
    ///
    /// # Errors
    ///
    /// - [`SelectorError::DuplicateFragment`] if the fragment is an element,
    ///   id or pseudo-element and one of that kind is already present.
    /// - [`SelectorError::OutOfOrder`] if a fragment of strictly higher rank
    ///   is already present.
    ///
    /// On error the selector is left unchanged.
    pub fn push(&mut self, fragment: SelectorFragment) -> Result<&mut Self, SelectorError> {
        let kind = fragment.kind();

        if kind.is_unique() && self.contains(kind) {
            return Err(SelectorError::DuplicateFragment { kind });
        }

        if let Some(after) = self.highest.filter(|&highest| highest > kind) {
            return Err(SelectorError::OutOfOrder { kind, after });
        }

        self.highest = Some(kind);
        self.fragments.push(fragment);
        Ok(self)
    }

    /// Append a type selector.
    ///
    /// # Errors
    ///
    /// See [`CompoundSelector::push`].
    pub fn element(&mut self, name: impl Into<String>) -> Result<&mut Self, SelectorError> {
        self.push(SelectorFragment::Element(name.into()))
    }

    /// Append an ID selector.
    ///
    /// # Errors
    ///
    /// See [`CompoundSelector::push`].
    pub fn id(&mut self, name: impl Into<String>) -> Result<&mut Self, SelectorError> {
        self.push(SelectorFragment::Id(name.into()))
    }

    /// Append a class selector.
    ///
    /// # Errors
    ///
    /// See [`CompoundSelector::push`].
    pub fn class(&mut self, name: impl Into<String>) -> Result<&mut Self, SelectorError> {
        self.push(SelectorFragment::Class(name.into()))
    }

    /// Append an attribute selector. `expr` is the text between the brackets.
    ///
    /// # Errors
    ///
    /// See [`CompoundSelector::push`].
    pub fn attr(&mut self, expr: impl Into<String>) -> Result<&mut Self, SelectorError> {
        self.push(SelectorFragment::Attribute(expr.into()))
    }

    /// Append a pseudo-class.
    ///
    /// # Errors
    ///
    /// See [`CompoundSelector::push`].
    pub fn pseudo_class(&mut self, name: impl Into<String>) -> Result<&mut Self, SelectorError> {
        self.push(SelectorFragment::PseudoClass(name.into()))
    }

    /// Append a pseudo-element.
    ///
    /// # Errors
    ///
    /// See [`CompoundSelector::push`].
    pub fn pseudo_element(&mut self, name: impl Into<String>) -> Result<&mut Self, SelectorError> {
        self.push(SelectorFragment::PseudoElement(name.into()))
    }

    /// Specificity of this compound.
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        let mut specificity = Specificity::default();
        for fragment in &self.fragments {
            match fragment.kind() {
                FragmentKind::Id => specificity.0 += 1,
                FragmentKind::Class | FragmentKind::Attribute | FragmentKind::PseudoClass => {
                    specificity.1 += 1;
                }
                FragmentKind::Element | FragmentKind::PseudoElement => specificity.2 += 1,
            }
        }
        specificity
    }
}

impl fmt::Display for CompoundSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fragment in &self.fragments {
            write!(f, "{fragment}")?;
        }
        Ok(())
    }
}

impl Render for CompoundSelector {}

/// Entry points that start a new selector, one per fragment kind, plus
/// [`SelectorBuilder::combine`].
///
/// ```
/// use selcraft_css::{Render, SelectorBuilder};
///
/// let mut link = SelectorBuilder::element("a");
/// let _ = link.attr("href$=\".png\"")?.pseudo_class("focus")?;
/// assert_eq!(link.render(), "a[href$=\".png\"]:focus");
/// # Ok::<(), selcraft_css::SelectorError>(())
/// ```
#[derive(Debug)]
pub struct SelectorBuilder;

impl SelectorBuilder {
    /// Start a selector with a type selector.
    #[must_use]
    pub fn element(name: impl Into<String>) -> CompoundSelector {
        CompoundSelector::starting_with(SelectorFragment::Element(name.into()))
    }

    /// Start a selector with an ID selector.
    #[must_use]
    pub fn id(name: impl Into<String>) -> CompoundSelector {
        CompoundSelector::starting_with(SelectorFragment::Id(name.into()))
    }

    /// Start a selector with a class selector.
    #[must_use]
    pub fn class(name: impl Into<String>) -> CompoundSelector {
        CompoundSelector::starting_with(SelectorFragment::Class(name.into()))
    }

    /// Start a selector with an attribute selector.
    #[must_use]
    pub fn attr(expr: impl Into<String>) -> CompoundSelector {
        CompoundSelector::starting_with(SelectorFragment::Attribute(expr.into()))
    }

    /// Start a selector with a pseudo-class.
    #[must_use]
    pub fn pseudo_class(name: impl Into<String>) -> CompoundSelector {
        CompoundSelector::starting_with(SelectorFragment::PseudoClass(name.into()))
    }

    /// Start a selector with a pseudo-element.
    #[must_use]
    pub fn pseudo_element(name: impl Into<String>) -> CompoundSelector {
        CompoundSelector::starting_with(SelectorFragment::PseudoElement(name.into()))
    }

    /// Join two selectors with a combinator. Neither operand is modified.
    #[must_use]
    pub fn combine(
        left: impl Into<Selector>,
        combinator: impl Into<Combinator>,
        right: impl Into<Selector>,
    ) -> CombinedSelector {
        CombinedSelector::new(left, combinator, right)
    }
}
