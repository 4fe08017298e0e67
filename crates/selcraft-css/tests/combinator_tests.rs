//! Integration tests for combining selectors.

use selcraft_css::{
    Combinator, CombinedSelector, Render, Selector, SelectorBuilder, SelectorError, Specificity,
    to_json,
};

#[test]
fn test_next_sibling() {
    let a = SelectorBuilder::element("h1");
    let b = SelectorBuilder::element("p");
    let combined = SelectorBuilder::combine(&a, "+", &b);
    assert_eq!(combined.render(), "h1 + p");
    assert_eq!(combined.render(), format!("{} + {}", a.render(), b.render()));
}

#[test]
fn test_child_and_subsequent_sibling() {
    let ul = SelectorBuilder::element("ul");
    let li = SelectorBuilder::element("li");
    assert_eq!(SelectorBuilder::combine(&ul, ">", &li).render(), "ul > li");
    assert_eq!(SelectorBuilder::combine(&ul, "~", &li).render(), "ul ~ li");
}

#[test]
fn test_descendant_renders_three_spaces() -> Result<(), SelectorError> {
    let mut row = SelectorBuilder::element("tr");
    let _ = row.pseudo_class("x")?;
    let mut cell = SelectorBuilder::element("td");
    let _ = cell.pseudo_class("y")?;

    let combined = SelectorBuilder::combine(&row, Combinator::Descendant, &cell);
    assert_eq!(combined.render(), "tr:x   td:y");
    assert_eq!(combined.combinator(), &Combinator::Descendant);
    Ok(())
}

#[test]
fn test_nested_combination() -> Result<(), SelectorError> {
    let mut x = SelectorBuilder::element("div");
    let _ = x.id("main")?.class("container")?.class("draggable")?;
    let mut y = SelectorBuilder::element("table");
    let _ = y.id("data")?;
    let mut z = SelectorBuilder::element("tr");
    let _ = z.pseudo_class("nth-of-type(even)")?;

    let inner = SelectorBuilder::combine(&y, " ", &z);
    let outer = SelectorBuilder::combine(&x, "~", &inner);

    assert_eq!(
        outer.render(),
        format!("{} ~ {}   {}", x.render(), y.render(), z.render())
    );
    assert_eq!(
        outer.render(),
        "div#main.container.draggable ~ table#data   tr:nth-of-type(even)"
    );
    Ok(())
}

#[test]
fn test_deep_nesting_on_both_sides() {
    let a = SelectorBuilder::element("a");
    let b = SelectorBuilder::element("b");
    let c = SelectorBuilder::element("c");
    let d = SelectorBuilder::element("d");

    let left = SelectorBuilder::combine(&a, ">", &b);
    let right = SelectorBuilder::combine(&c, "+", &d);
    let both = SelectorBuilder::combine(&left, "~", &right);
    assert_eq!(both.render(), "a > b ~ c + d");

    let again = SelectorBuilder::combine(&both, ">", SelectorBuilder::class("e"));
    assert_eq!(again.render(), "a > b ~ c + d > .e");
}

#[test]
fn test_custom_token_is_emitted_verbatim() {
    let col = SelectorBuilder::element("col");
    let td = SelectorBuilder::element("td");
    let combined = SelectorBuilder::combine(&col, "||", &td);
    assert_eq!(combined.render(), "col || td");
    assert!(!combined.combinator().is_standard());
}

#[test]
fn test_combination_does_not_touch_operands() -> Result<(), SelectorError> {
    let mut left = SelectorBuilder::element("nav");
    let right = SelectorBuilder::element("a");
    let combined = SelectorBuilder::combine(&left, ">", &right);

    // Later changes to an operand do not leak into the combination
    let _ = left.class("open")?;
    assert_eq!(combined.render(), "nav > a");
    assert_eq!(left.render(), "nav.open");
    Ok(())
}

#[test]
fn test_each_combine_returns_independent_value() {
    let a = SelectorBuilder::element("a");
    let b = SelectorBuilder::element("b");
    let first = SelectorBuilder::combine(&a, "+", &b);
    let second = SelectorBuilder::combine(&b, ">", &a);
    assert_eq!(first.render(), "a + b");
    assert_eq!(second.render(), "b > a");
}

#[test]
fn test_operands_are_accessible() {
    let combined = CombinedSelector::new(
        SelectorBuilder::id("a"),
        Combinator::Child,
        SelectorBuilder::class("b"),
    );
    assert!(matches!(combined.left(), Selector::Compound(c) if c.render() == "#a"));
    assert!(matches!(combined.right(), Selector::Compound(c) if c.render() == ".b"));
}

#[test]
fn test_combinator_tokens() {
    assert_eq!(Combinator::from_token(" "), Combinator::Descendant);
    assert_eq!(Combinator::from_token(">"), Combinator::Child);
    assert_eq!(Combinator::from_token("+"), Combinator::NextSibling);
    assert_eq!(Combinator::from_token("~"), Combinator::SubsequentSibling);
    assert_eq!(
        Combinator::from_token("/deep/"),
        Combinator::Custom("/deep/".to_string())
    );
    assert_eq!(Combinator::SubsequentSibling.token(), "~");
    assert_eq!(Combinator::Custom("||".to_string()).to_string(), "||");
}

#[test]
fn test_combined_specificity_sums_operands() -> Result<(), SelectorError> {
    let mut left = SelectorBuilder::element("ul");
    let _ = left.id("menu")?;
    let mut right = SelectorBuilder::element("li");
    let _ = right.class("active")?;

    let combined = SelectorBuilder::combine(&left, ">", &right);
    assert_eq!(combined.specificity(), Specificity(1, 1, 2));
    Ok(())
}

#[test]
fn test_combined_json_layout() -> Result<(), Box<dyn std::error::Error>> {
    let mut left = SelectorBuilder::element("a");
    let _ = left.class("x")?;
    let inner = SelectorBuilder::combine(&left, "||", SelectorBuilder::id("y"));

    assert_eq!(
        to_json(&inner)?,
        concat!(
            r#"{"left":{"fragments":[{"kind":"element","value":"a"},{"kind":"class","value":"x"}]},"#,
            r#""combinator":{"custom":"||"},"#,
            r#""right":{"fragments":[{"kind":"id","value":"y"}]}}"#,
        )
    );

    // Nested combinations embed untagged; the rank tracker is not serialized
    let mut hover = SelectorBuilder::attr("href");
    let _ = hover.pseudo_class("hover")?;
    let outer = SelectorBuilder::combine(&inner, " ", &hover);
    assert_eq!(
        to_json(&Selector::from(outer))?,
        concat!(
            r#"{"left":{"left":{"fragments":[{"kind":"element","value":"a"},{"kind":"class","value":"x"}]},"#,
            r#""combinator":{"custom":"||"},"#,
            r#""right":{"fragments":[{"kind":"id","value":"y"}]}},"#,
            r#""combinator":"descendant","#,
            r#""right":{"fragments":[{"kind":"attribute","value":"href"},{"kind":"pseudo-class","value":"hover"}]}}"#,
        )
    );
    Ok(())
}
