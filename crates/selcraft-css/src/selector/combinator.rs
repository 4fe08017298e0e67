use std::fmt;

use serde::Serialize;

use super::{CompoundSelector, Render, Specificity};

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// Whitespace: `A B`.
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// `A > B`.
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// `A + B`.
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// `A ~ B`.
    SubsequentSibling,

    /// Any other caller-supplied token, emitted verbatim.
    Custom(String),
}

impl Combinator {
    /// Map a token to a combinator. Unknown tokens become [`Combinator::Custom`].
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match token {
            " " => Self::Descendant,
            ">" => Self::Child,
            "+" => Self::NextSibling,
            "~" => Self::SubsequentSibling,
            other => Self::Custom(other.to_string()),
        }
    }

    /// The token placed between the two operands.
    #[must_use]
    pub fn token(&self) -> &str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
            Self::Custom(token) => token,
        }
    }

    /// True for the four combinators defined by Selectors Level 4.
    #[must_use]
    pub const fn is_standard(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }
}

impl From<&str> for Combinator {
    fn from(token: &str) -> Self {
        Self::from_token(token)
    }
}

impl From<String> for Combinator {
    fn from(token: String) -> Self {
        Self::from_token(&token)
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Either operand of a combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Selector {
    /// A single compound selector.
    Compound(CompoundSelector),
    /// A previously combined selector.
    Combined(CombinedSelector),
}

impl Selector {
    /// Specificity of the whole selector.
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        match self {
            Self::Compound(compound) => compound.specificity(),
            Self::Combined(combined) => combined.specificity(),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compound(compound) => fmt::Display::fmt(compound, f),
            Self::Combined(combined) => fmt::Display::fmt(combined, f),
        }
    }
}

impl Render for Selector {}

impl From<CompoundSelector> for Selector {
    fn from(compound: CompoundSelector) -> Self {
        Self::Compound(compound)
    }
}

impl From<&CompoundSelector> for Selector {
    fn from(compound: &CompoundSelector) -> Self {
        Self::Compound(compound.clone())
    }
}

impl From<&mut CompoundSelector> for Selector {
    fn from(compound: &mut CompoundSelector) -> Self {
        Self::Compound(compound.clone())
    }
}

impl From<CombinedSelector> for Selector {
    fn from(combined: CombinedSelector) -> Self {
        Self::Combined(combined)
    }
}

impl From<&CombinedSelector> for Selector {
    fn from(combined: &CombinedSelector) -> Self {
        Self::Combined(combined.clone())
    }
}

impl From<&Selector> for Selector {
    fn from(selector: &Selector) -> Self {
        selector.clone()
    }
}

/// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
///
/// Two selectors joined by a combinator. Renders as
/// `left + " " + token + " " + right`, so a descendant combination of
/// `tr` and `td` renders with three spaces: `tr   td`.
///
/// Immutable once built; combining it again embeds it unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CombinedSelector {
    left: Box<Selector>,
    combinator: Combinator,
    right: Box<Selector>,
}

impl CombinedSelector {
    /// Join `left` and `right` with `combinator`.
    #[must_use]
    pub fn new(
        left: impl Into<Selector>,
        combinator: impl Into<Combinator>,
        right: impl Into<Selector>,
    ) -> Self {
        Self {
            left: Box::new(left.into()),
            combinator: combinator.into(),
            right: Box::new(right.into()),
        }
    }

    /// The left operand.
    #[must_use]
    pub fn left(&self) -> &Selector {
        &self.left
    }

    /// The combinator between the operands.
    #[must_use]
    pub const fn combinator(&self) -> &Combinator {
        &self.combinator
    }

    /// The right operand.
    #[must_use]
    pub fn right(&self) -> &Selector {
        &self.right
    }

    /// Component-wise sum of both operands' specificity.
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

impl Render for CombinedSelector {}
