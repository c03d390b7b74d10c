//! Turning command-line tokens into a selector tree.
//!
//! Tokens are read left to right. `kind:value` tokens are appended to the
//! current simple selector; a combinator token closes it. Combinators nest to
//! the right, so `a > b + c` becomes `combine(a, >, combine(b, +, c))`.

use anyhow::{Context, bail};
use kata_selector::{Combinator, PartKind, Selector, SimpleSelector, combine};

/// Shell-friendly spellings accepted in addition to the combinator symbols.
fn parse_combinator(token: &str) -> Option<Combinator> {
    match token {
        "descendant" => Some(Combinator::Descendant),
        "child" => Some(Combinator::Child),
        "next-sibling" => Some(Combinator::NextSibling),
        "subsequent-sibling" => Some(Combinator::SubsequentSibling),
        symbol => symbol.parse().ok(),
    }
}

fn parse_part(token: &str) -> anyhow::Result<(PartKind, &str)> {
    let Some((kind, value)) = token.split_once(':') else {
        bail!("expected `kind:value` or a combinator, found {token:?}");
    };
    let kind = match kind {
        "attr" => PartKind::Attribute,
        other => other
            .parse()
            .with_context(|| format!("unknown selector part kind {other:?}"))?,
    };
    Ok((kind, value))
}

/// Build a selector from command-line tokens.
pub fn build_selector(tokens: &[String]) -> anyhow::Result<Selector> {
    let mut operands = Vec::new();
    let mut combinators = Vec::new();
    let mut current = SimpleSelector::new();

    for token in tokens {
        if let Some(combinator) = parse_combinator(token) {
            if current.is_empty() {
                bail!("combinator {token:?} must follow a selector part");
            }
            operands.push(std::mem::take(&mut current));
            combinators.push(combinator);
            continue;
        }

        let (kind, value) = parse_part(token)?;
        let _ = current
            .append(kind, value)
            .with_context(|| format!("cannot append {token:?}"))?;
    }

    if current.is_empty() {
        bail!("expected a selector part after the last combinator");
    }

    let selector = operands
        .into_iter()
        .zip(combinators)
        .rev()
        .fold(Selector::from(current), |right, (left, combinator)| {
            combine(left, combinator, right).into()
        });
    Ok(selector)
}
