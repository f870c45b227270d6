use proptest::prelude::*;
use quotient::{
    error::{ErrorKind, LexError},
    evaluate,
    interpreter::lexer::{TokenKind, Tokenizer},
};

const OPERATORS: [char; 4] = ['+', '-', '*', '/'];

/// Expression trees rendered with explicit parentheses around every operation.
#[derive(Debug, Clone)]
enum Node {
    Literal(u32),
    Binary(Box<Node>, char, Box<Node>),
}

impl Node {
    fn render(&self) -> String {
        match self {
            Self::Literal(n) => n.to_string(),
            Self::Binary(left, op, right) => format!("({} {op} {})", left.render(), right.render()),
        }
    }

    /// `None` when some division has a zero divisor.
    fn reference(&self) -> Option<f64> {
        match self {
            Self::Literal(n) => Some(f64::from(*n)),
            Self::Binary(left, op, right) => {
                let left = left.reference()?;
                let right = right.reference()?;
                apply(left, *op, right)
            },
        }
    }
}

fn apply(left: f64, op: char, right: f64) -> Option<f64> {
    match op {
        '+' => Some(left + right),
        '-' => Some(left - right),
        '*' => Some(left * right),
        _ if right == 0.0 => None,
        _ => Some(left / right),
    }
}

fn node() -> impl Strategy<Value = Node> {
    let leaf = (0u32..1000).prop_map(Node::Literal);
    leaf.prop_recursive(5, 64, 2, |inner| {
            (inner.clone(), prop::sample::select(OPERATORS.to_vec()), inner)
                .prop_map(|(left, op, right)| Node::Binary(Box::new(left), op, Box::new(right)))
        })
}

/// A flat chain `n0 op1 n1 op2 n2 ...` without parentheses.
fn chain() -> impl Strategy<Value = (u32, Vec<(char, u32)>)> {
    (0u32..100,
     prop::collection::vec((prop::sample::select(OPERATORS.to_vec()), 0u32..100), 0..12))
}

/// Multiplication and division first, then addition and subtraction, each
/// folded left to right.
fn reference_chain(first: u32, rest: &[(char, u32)]) -> Option<f64> {
    let mut terms = vec![f64::from(first)];
    let mut signs = vec!['+'];
    for &(op, n) in rest {
        let n = f64::from(n);
        if op == '*' || op == '/' {
            let last = terms.pop()?;
            terms.push(apply(last, op, n)?);
        } else {
            terms.push(n);
            signs.push(op);
        }
    }
    let mut iter = terms.into_iter().zip(signs);
    let (mut total, _) = iter.next()?;
    for (term, sign) in iter {
        total = apply(total, sign, term)?;
    }
    Some(total)
}

fn render_chain(first: u32, rest: &[(char, u32)], spacing: &[&str]) -> String {
    let gap = |i: usize| spacing.get(i % spacing.len().max(1)).copied().unwrap_or("");
    let mut out = format!("{}{first}", gap(0));
    for (i, (op, n)) in rest.iter().enumerate() {
        out.push_str(gap(2 * i + 1));
        out.push(*op);
        out.push_str(gap(2 * i + 2));
        out.push_str(&n.to_string());
    }
    out
}

proptest! {
    #[test]
    fn prop_parenthesized_trees_match_reference(tree in node()) {
        let source = tree.render();
        match (tree.reference(), evaluate(&source)) {
            (Some(expected), Ok(actual)) => {
                prop_assert!(expected == actual || (expected.is_nan() && actual.is_nan()),
                             "{source}: expected {expected}, got {actual}");
            },
            (None, Err(e)) => prop_assert_eq!(e.kind(), ErrorKind::DivisionByZero),
            (expected, actual) => prop_assert!(false, "{source}: expected {expected:?}, got {actual:?}"),
        }
    }

    #[test]
    fn prop_chains_respect_precedence_and_associativity((first, rest) in chain()) {
        let source = render_chain(first, &rest, &[" "]);
        match (reference_chain(first, &rest), evaluate(&source)) {
            (Some(expected), Ok(actual)) => prop_assert_eq!(expected, actual, "{}", source),
            (None, Err(e)) => prop_assert_eq!(e.kind(), ErrorKind::DivisionByZero),
            (expected, actual) => prop_assert!(false, "{source}: expected {expected:?}, got {actual:?}"),
        }
    }

    #[test]
    fn prop_whitespace_is_insignificant(
        (first, rest) in chain(),
        spacing in prop::collection::vec(prop::sample::select(vec!["", " ", "  ", "\t", "\n", " \r\n ", "\u{00A0}", "\u{2003}", "\u{3000}"]), 1..8),
    ) {
        let dense = evaluate(&render_chain(first, &rest, &[""])).map_err(|e| e.kind());
        let spaced = evaluate(&render_chain(first, &rest, &spacing)).map_err(|e| e.kind());
        prop_assert_eq!(dense, spaced);
    }

    #[test]
    fn prop_tokens_and_whitespace_reconstruct_source(source in "[0-9+*/() \t\n\u{00A0}\u{3000}@a.-]{0,40}") {
        let mut tokenizer = Tokenizer::new(&source);
        let mut rebuilt = String::new();
        let mut cursor = 0;
        loop {
            match tokenizer.next_token() {
                Ok(token) => {
                    let gap = &source[cursor..token.span.start];
                    prop_assert!(gap.chars().all(char::is_whitespace), "non-whitespace gap {gap:?}");
                    rebuilt.push_str(gap);
                    rebuilt.push_str(&source[token.span.clone()]);
                    cursor = token.span.end;
                    if token.kind == TokenKind::EndOfInput {
                        break;
                    }
                },
                Err(LexError::UnrecognizedCharacter { character, position }) => {
                    let gap = &source[cursor..position];
                    prop_assert!(gap.chars().all(char::is_whitespace));
                    prop_assert!(matches!(character, '@' | 'a' | '.'));
                    prop_assert_eq!(source[position..].chars().next(), Some(character));
                    return Ok(());
                },
                Err(LexError::LiteralTooLarge { literal, position }) => {
                    prop_assert!(literal.len() > 15);
                    prop_assert!(source[position..].starts_with(&literal));
                    return Ok(());
                },
            }
        }
        prop_assert_eq!(rebuilt, source);
    }

    #[test]
    fn prop_end_of_input_is_sticky(source in "[0-9+*/() -]{0,15}", extra in 1usize..10) {
        let mut tokenizer = Tokenizer::new(&source);
        let mut remaining = source.len() + 1;
        while remaining > 0 {
            if tokenizer.next_token().unwrap().kind == TokenKind::EndOfInput {
                break;
            }
            remaining -= 1;
        }
        for _ in 0..extra {
            prop_assert_eq!(tokenizer.next_token().unwrap().kind, TokenKind::EndOfInput);
        }
    }
}
