//! Integration tests for building, combining and rendering selectors.

use kata_common::warning::warned;
use kata_selector::{
    Combinator, PartKind, Selector, SelectorBuilder, SelectorError, SimpleSelector, Specificity,
    attr, class, combine, element, id, pseudo_class, pseudo_element,
};

// Simple Selector Tests
// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)

#[test]
fn test_all_parts_in_order() -> Result<(), SelectorError> {
    let selector = element("a")
        .id("b")?
        .class("c")?
        .attr("d")?
        .pseudo_class("e")?
        .pseudo_element("f")?;
    assert_eq!(selector.stringify(), "a#b.c[d]:e::f");
    Ok(())
}

#[test]
fn test_each_starting_part() {
    assert_eq!(element("div").stringify(), "div");
    assert_eq!(id("main").stringify(), "#main");
    assert_eq!(class("container").stringify(), ".container");
    assert_eq!(attr("href").stringify(), "[href]");
    assert_eq!(pseudo_class("hover").stringify(), ":hover");
    assert_eq!(pseudo_element("before").stringify(), "::before");
}

#[test]
fn test_facade_matches_free_functions() {
    assert_eq!(SelectorBuilder::element("p"), element("p"));
    assert_eq!(SelectorBuilder::pseudo_element("after"), pseudo_element("after"));
}

#[test]
fn test_repeatable_parts_accumulate() -> Result<(), SelectorError> {
    let selector = id("main").class("container")?.class("editable")?;
    assert_eq!(selector.stringify(), "#main.container.editable");

    let selector = element("input")
        .attr("type=text")?
        .attr("required")?
        .pseudo_class("focus")?
        .pseudo_class("hover")?;
    assert_eq!(selector.stringify(), "input[type=text][required]:focus:hover");
    Ok(())
}

#[test]
fn test_attribute_payload_is_wrapped_verbatim() -> Result<(), SelectorError> {
    let selector = element("a").attr(r#"href$=".png""#)?.pseudo_class("focus")?;
    assert_eq!(selector.stringify(), r#"a[href$=".png"]:focus"#);
    Ok(())
}

#[test]
fn test_parts_may_be_skipped() -> Result<(), SelectorError> {
    let selector = element("li").pseudo_class("nth-child(2)")?;
    assert_eq!(selector.stringify(), "li:nth-child(2)");

    let selector = id("nav").pseudo_element("marker")?;
    assert_eq!(selector.stringify(), "#nav::marker");
    Ok(())
}

#[test]
fn test_stringify_is_idempotent() -> Result<(), SelectorError> {
    let selector = element("div").id("id")?.class("a")?.class("b")?;
    assert_eq!(selector.stringify(), selector.stringify());
    assert_eq!(selector.stringify(), "div#id.a.b");
    Ok(())
}

#[test]
fn test_phase_and_parts() -> Result<(), SelectorError> {
    let selector = element("div").class("x")?;
    assert_eq!(selector.phase(), Some(PartKind::Class));
    assert_eq!(selector.parts().len(), 2);
    assert_eq!(selector.parts()[1].value, "x");
    assert!(SimpleSelector::new().is_empty());
    assert_eq!(SimpleSelector::new().stringify(), "");
    Ok(())
}

// Uniqueness Tests

#[test]
fn test_duplicate_element() {
    assert_eq!(
        element("div").element("span"),
        Err(SelectorError::DuplicatePart { kind: PartKind::Element })
    );
}

#[test]
fn test_duplicate_id() {
    assert_eq!(
        id("a").id("b"),
        Err(SelectorError::DuplicatePart { kind: PartKind::Id })
    );
}

#[test]
fn test_duplicate_pseudo_element() {
    assert_eq!(
        pseudo_element("before").pseudo_element("after"),
        Err(SelectorError::DuplicatePart { kind: PartKind::PseudoElement })
    );
}

// Ordering Tests

#[test]
fn test_out_of_order_parts() {
    assert_eq!(
        id("a").element("div"),
        Err(SelectorError::OrderViolation { kind: PartKind::Element, after: PartKind::Id })
    );
    assert_eq!(
        class("a").id("b"),
        Err(SelectorError::OrderViolation { kind: PartKind::Id, after: PartKind::Class })
    );
    assert_eq!(
        attr("href").class("a"),
        Err(SelectorError::OrderViolation { kind: PartKind::Class, after: PartKind::Attribute })
    );
    assert_eq!(
        pseudo_class("hover").attr("href"),
        Err(SelectorError::OrderViolation {
            kind: PartKind::Attribute,
            after: PartKind::PseudoClass,
        })
    );
    assert_eq!(
        pseudo_element("after").pseudo_class("hover"),
        Err(SelectorError::OrderViolation {
            kind: PartKind::PseudoClass,
            after: PartKind::PseudoElement,
        })
    );
}

#[test]
fn test_attr_after_class_succeeds() -> Result<(), SelectorError> {
    assert_eq!(class("a").attr("href")?.stringify(), ".a[href]");
    Ok(())
}

#[test]
fn test_singular_kind_after_later_kind_is_an_order_violation() -> Result<(), SelectorError> {
    // The element is already set, but the phase has moved on to ID.
    let selector = element("div").id("main")?;
    assert_eq!(
        selector.element("span"),
        Err(SelectorError::OrderViolation { kind: PartKind::Element, after: PartKind::Id })
    );
    Ok(())
}

#[test]
fn test_failed_append_leaves_selector_unchanged() -> Result<(), SelectorError> {
    let mut selector = element("div").id("main")?.attr("title")?;
    let before = selector.clone();

    assert!(selector.append(PartKind::Id, "other").is_err());
    assert!(selector.append(PartKind::Class, "late").is_err());
    assert_eq!(selector, before);
    assert_eq!(selector.stringify(), "div#main[title]");

    let _ = selector.append(PartKind::PseudoClass, "hover")?;
    assert_eq!(selector.stringify(), "div#main[title]:hover");
    Ok(())
}

#[test]
fn test_error_messages() {
    let duplicate = SelectorError::DuplicatePart { kind: PartKind::Id };
    assert!(
        duplicate
            .to_string()
            .starts_with("Element, id and pseudo-element should not occur more then one time")
    );

    let order = SelectorError::OrderViolation { kind: PartKind::Class, after: PartKind::Attribute };
    assert!(order.to_string().contains("class after attribute"));
}

#[test]
fn test_empty_value_is_accepted_with_warning() -> Result<(), SelectorError> {
    let selector = element("div").class("")?;
    assert_eq!(selector.stringify(), "div.");
    assert!(warned("Selector", "empty value for class part"));
    Ok(())
}

// Combinator Tests
// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)

#[test]
fn test_combine_two_simple_selectors() -> Result<(), SelectorError> {
    let selector = combine(
        element("div").id("main")?,
        Combinator::NextSibling,
        element("table").id("data")?,
    );
    assert_eq!(selector.stringify(), "div#main + table#data");
    Ok(())
}

#[test]
fn test_each_combinator_renders_with_surrounding_spaces() {
    let render = |combinator| combine(element("a"), combinator, element("b")).stringify();
    assert_eq!(render(Combinator::Descendant), "a   b");
    assert_eq!(render(Combinator::Child), "a > b");
    assert_eq!(render(Combinator::NextSibling), "a + b");
    assert_eq!(render(Combinator::SubsequentSibling), "a ~ b");
}

#[test]
fn test_nested_combine() -> Result<(), SelectorError> {
    let selector = combine(
        element("div").id("main")?.class("container")?.class("draggable")?,
        Combinator::NextSibling,
        combine(
            element("table").id("data")?,
            Combinator::SubsequentSibling,
            combine(
                element("tr").pseudo_class("nth-of-type(even)")?,
                " ".parse()?,
                element("td").pseudo_class("nth-of-type(even)")?,
            ),
        ),
    );
    assert_eq!(
        selector.stringify(),
        "div#main.container.draggable + table#data ~ tr:nth-of-type(even)   td:nth-of-type(even)"
    );
    assert_eq!(selector.stringify(), selector.stringify());
    Ok(())
}

#[test]
fn test_left_nested_combine() -> Result<(), SelectorError> {
    let selector = combine(
        combine(element("ul"), Combinator::Child, element("li")),
        Combinator::Descendant,
        element("a").class("active")?,
    );
    assert_eq!(selector.stringify(), "ul > li   a.active");
    Ok(())
}

#[test]
fn test_combine_accepts_empty_operands() {
    let selector = combine(SimpleSelector::new(), Combinator::Child, SimpleSelector::new());
    assert_eq!(selector.stringify(), " > ");
}

#[test]
fn test_unknown_combinator_symbol() {
    assert_eq!(
        "|".parse::<Combinator>(),
        Err(SelectorError::UnknownCombinator("|".to_string()))
    );
}

#[test]
fn test_selector_enum_renders_both_variants() -> Result<(), SelectorError> {
    let simple: Selector = element("p").class("intro")?.into();
    assert_eq!(simple.stringify(), "p.intro");

    let combined: Selector = combine(element("div"), Combinator::Child, simple).into();
    assert_eq!(combined.to_string(), "div > p.intro");
    Ok(())
}

// Specificity Tests
// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)

#[test]
fn test_simple_specificity() -> Result<(), SelectorError> {
    let selector = element("a")
        .id("b")?
        .class("c")?
        .attr("d")?
        .pseudo_class("e")?
        .pseudo_element("f")?;
    assert_eq!(selector.specificity(), Specificity(1, 3, 2));
    assert_eq!(SimpleSelector::new().specificity(), Specificity(0, 0, 0));
    Ok(())
}

#[test]
fn test_combined_specificity_sums_both_sides() -> Result<(), SelectorError> {
    let selector = combine(
        element("div").id("main")?,
        Combinator::Descendant,
        combine(element("ul"), Combinator::Child, element("li").class("item")?),
    );
    assert_eq!(selector.specificity(), Specificity(1, 1, 3));
    assert_eq!(selector.specificity().to_string(), "(1, 1, 3)");
    Ok(())
}

// Serialization Tests

#[test]
fn test_serialize_simple_selector() -> Result<(), SelectorError> {
    let selector = element("div").class("a")?;
    let json = serde_json::to_value(&selector).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "parts": [
                { "kind": "element", "value": "div" },
                { "kind": "class", "value": "a" }
            ]
        })
    );
    Ok(())
}

#[test]
fn test_serialize_combined_selector() {
    let selector = combine(element("ul"), Combinator::Child, pseudo_class("hover"));
    let json = serde_json::to_value(&selector).unwrap();
    assert_eq!(json["combinator"], ">");
    assert_eq!(json["left"]["simple"]["parts"][0]["value"], "ul");
    assert_eq!(json["right"]["simple"]["parts"][0]["kind"], "pseudo-class");
}
