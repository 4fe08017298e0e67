//! Command-line selector terms.
//!
//! Fragments before the first combinator form the first compound selector.
//! Combinators join compounds right-recursively, so `a > b + c` is built as
//! `a > (b + c)`.

use anyhow::{Context, Result, bail};
use selcraft_css::{
    Combinator, CompoundSelector, FragmentKind, Selector, SelectorBuilder, SelectorFragment,
};

/// One parsed command-line term.
#[derive(Debug, PartialEq, Eq)]
enum Term {
    Fragment(SelectorFragment),
    Combinator(Combinator),
}

/// The selector built from a term list, plus anything worth warning about.
#[derive(Debug)]
pub struct BuiltSelector {
    pub selector: Selector,
    pub warnings: Vec<String>,
}

fn parse_term(term: &str) -> Result<Term> {
    match term {
        ">" | "+" | "~" => return Ok(Term::Combinator(Combinator::from_token(term))),
        "desc" => return Ok(Term::Combinator(Combinator::Descendant)),
        _ => {}
    }

    let (kind, value) = term
        .split_once(':')
        .with_context(|| format!("expected 'kind:value' or a combinator, got '{term}'"))?;

    if kind == "comb" {
        if value.is_empty() {
            bail!("empty combinator token in '{term}'");
        }
        return Ok(Term::Combinator(Combinator::from_token(value)));
    }

    let kind: FragmentKind = kind
        .parse()
        .with_context(|| format!("unknown fragment kind '{kind}'"))?;
    Ok(Term::Fragment(SelectorFragment::new(kind, value)))
}

/// Parse and assemble a full selector from its terms.
///
/// # Errors
///
/// Fails on malformed terms or misplaced combinators, and when the
/// compound selector rejects a fragment.
pub fn build_selector(terms: &[String]) -> Result<BuiltSelector> {
    let mut warnings = Vec::new();
    let mut compounds: Vec<CompoundSelector> = Vec::new();
    let mut combinators: Vec<Combinator> = Vec::new();
    let mut current: Option<CompoundSelector> = None;

    for term in terms {
        match parse_term(term)? {
            Term::Fragment(fragment) => {
                if fragment.value().is_empty() {
                    warnings.push(format!("empty {} value in '{term}'", fragment.kind()));
                }
                let _ = current
                    .get_or_insert_with(CompoundSelector::new)
                    .push(fragment)
                    .with_context(|| format!("cannot append '{term}'"))?;
            }
            Term::Combinator(combinator) => {
                let Some(compound) = current.take() else {
                    bail!("combinator '{term}' must follow a selector");
                };
                if !combinator.is_standard() {
                    warnings.push(format!(
                        "non-standard combinator token '{}'",
                        combinator.token()
                    ));
                }
                compounds.push(compound);
                combinators.push(combinator);
            }
        }
    }

    let Some(last) = current else {
        bail!("selector must end with a fragment, not a combinator");
    };

    let mut selector = Selector::from(last);
    while let (Some(left), Some(combinator)) = (compounds.pop(), combinators.pop()) {
        selector = SelectorBuilder::combine(left, combinator, selector).into();
    }

    Ok(BuiltSelector { selector, warnings })
}

#[cfg(test)]
mod tests {
    use super::*;
    use selcraft_css::{Render, SelectorError};

    fn terms(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_single_compound() {
        let built = build_selector(&terms(&[
            "element:a",
            r#"attr:href$=".png""#,
            "pseudo-class:focus",
        ]))
        .unwrap();
        assert_eq!(built.selector.render(), r#"a[href$=".png"]:focus"#);
        assert!(built.warnings.is_empty());
    }

    #[test]
    fn test_combinators_nest_to_the_right() {
        let built =
            build_selector(&terms(&["element:a", ">", "element:b", "desc", "element:c"])).unwrap();
        assert_eq!(built.selector.render(), "a > b   c");

        let Selector::Combined(outer) = &built.selector else {
            panic!("expected a combined selector");
        };
        assert_eq!(outer.combinator(), &Combinator::Child);
        assert!(matches!(outer.right(), Selector::Combined(_)));
    }

    #[test]
    fn test_pseudo_class_value_keeps_colons() {
        let built = build_selector(&terms(&["pseudo-class:not(:first-child)"])).unwrap();
        assert_eq!(built.selector.render(), ":not(:first-child)");
    }

    #[test]
    fn test_custom_combinator_warns() {
        let built = build_selector(&terms(&["element:col", "comb:||", "element:td"])).unwrap();
        assert_eq!(built.selector.render(), "col || td");
        assert_eq!(built.warnings, vec!["non-standard combinator token '||'"]);
    }

    #[test]
    fn test_empty_value_warns() {
        let built = build_selector(&terms(&["class:"])).unwrap();
        assert_eq!(built.warnings, vec!["empty class value in 'class:'"]);
    }

    #[test]
    fn test_out_of_order_is_reported() {
        let err = build_selector(&terms(&["id:x", "element:div"])).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SelectorError>(),
            Some(SelectorError::OutOfOrder { .. })
        ));
    }

    #[test]
    fn test_duplicate_is_reported() {
        let err = build_selector(&terms(&["element:div", "id:main", "element:span"])).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SelectorError>(),
            Some(SelectorError::DuplicateFragment { .. })
        ));
    }

    #[test]
    fn test_malformed_terms() {
        assert!(build_selector(&terms(&["div"])).is_err());
        assert!(build_selector(&terms(&["universal:*"])).is_err());
        assert!(build_selector(&terms(&[">", "element:a"])).is_err());
        assert!(build_selector(&terms(&["element:a", "+"])).is_err());
        assert!(build_selector(&terms(&["element:a", "element:b"])).is_err());
        assert!(build_selector(&terms(&["element:a", "comb:", "element:b"])).is_err());
    }

    #[test]
    fn test_parse_term_kinds() {
        assert_eq!(
            parse_term("attr:disabled").unwrap(),
            Term::Fragment(SelectorFragment::Attribute("disabled".to_string()))
        );
        assert_eq!(
            parse_term("~").unwrap(),
            Term::Combinator(Combinator::SubsequentSibling)
        );
    }
}
