//! Coercion of filter right-hand sides into typed literals.
//!
//! Order of precedence for a single value:
//!
//! 1. numeric text becomes `Integer` when lossless, otherwise `Float`
//! 2. `true` / `false` (lowercase) become `Boolean`
//! 3. everything else has every apostrophe removed and becomes `String`,
//!    or `Null` when nothing is left

use nom::{
    branch::alt,
    character::complete::{char, digit0, digit1, one_of},
    combinator::{all_consuming, opt, recognize},
    sequence::{pair, tuple},
    IResult,
};

use crate::ast::{FilterOperator, FilterValue, Literal};

/// Coerce a raw value for the given operator.
pub fn coerce_value(raw: &str, operator: FilterOperator) -> FilterValue {
    if operator.takes_list() {
        FilterValue::List(coerce_list(raw))
    } else {
        FilterValue::Single(coerce_literal(raw))
    }
}

/// Coerce a parenthesized, comma separated list. Nested lists are not supported.
pub fn coerce_list(raw: &str) -> Vec<Literal> {
    let inner = raw.trim();
    let inner = inner.strip_prefix('(').unwrap_or(inner);
    let inner = inner.strip_suffix(')').unwrap_or(inner);

    inner.split(',').map(coerce_literal).collect()
}

/// Coerce a single value.
pub fn coerce_literal(raw: &str) -> Literal {
    let text = raw.trim();

    if let Some(number) = coerce_number(text) {
        return number;
    }

    match text {
        "true" => return Literal::Boolean(true),
        "false" => return Literal::Boolean(false),
        _ => {}
    }

    let unquoted: String = text.chars().filter(|&c| c != '\'').collect();
    if unquoted.is_empty() {
        Literal::Null
    } else {
        Literal::String(unquoted)
    }
}

fn coerce_number(text: &str) -> Option<Literal> {
    let (_, lexeme) = all_consuming(parse_numeric)(text).ok()?;

    if let Ok(n) = lexeme.parse::<i64>() {
        return Some(Literal::Integer(n));
    }

    // Text that overflows to infinity is not treated as a number.
    let value: f64 = lexeme.parse().ok().filter(|v: &f64| v.is_finite())?;
    Some(match lossless_integer(value) {
        Some(n) => Literal::Integer(n),
        None => Literal::Float(value),
    })
}

fn lossless_integer(value: f64) -> Option<i64> {
    // i64::MAX as f64 is 2^63, which itself does not fit.
    let fits = value >= i64::MIN as f64 && value < i64::MAX as f64;
    (value.fract() == 0.0 && fits).then_some(value as i64)
}

/// Signed decimal number: `42`, `-42`, `42.5`, `.5`, `5.`, `1e3`, `+2.5E-3`.
fn parse_numeric(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        opt(one_of("+-")),
        alt((
            recognize(pair(digit1, opt(pair(char('.'), digit0)))),
            recognize(pair(char('.'), digit1)),
        )),
        opt(tuple((one_of("eE"), opt(one_of("+-")), digit1))),
    )))(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers() {
        assert_eq!(coerce_literal("42"), Literal::Integer(42));
        assert_eq!(coerce_literal(" -7 "), Literal::Integer(-7));
        assert_eq!(coerce_literal("+3"), Literal::Integer(3));
    }

    #[test]
    fn test_lossless_float_becomes_integer() {
        assert_eq!(coerce_literal("42.0"), Literal::Integer(42));
        assert_eq!(coerce_literal("1e3"), Literal::Integer(1000));
        assert_eq!(coerce_literal("5."), Literal::Integer(5));
    }

    #[test]
    fn test_floats() {
        assert_eq!(coerce_literal("42.42"), Literal::Float(42.42));
        assert_eq!(coerce_literal(".5"), Literal::Float(0.5));
        assert_eq!(coerce_literal("-2.5e-1"), Literal::Float(-0.25));
    }

    #[test]
    fn test_integer_overflow_becomes_float() {
        assert_eq!(
            coerce_literal("9223372036854775808"),
            Literal::Float(9_223_372_036_854_775_808.0)
        );
    }

    #[test]
    fn test_infinite_text_is_a_string() {
        assert_eq!(coerce_literal("1e400"), Literal::String("1e400".into()));
    }

    #[test]
    fn test_not_numeric() {
        assert_eq!(coerce_literal("."), Literal::String(".".into()));
        assert_eq!(coerce_literal("1.2.3"), Literal::String("1.2.3".into()));
        assert_eq!(coerce_literal("12abc"), Literal::String("12abc".into()));
        assert_eq!(coerce_literal("inf"), Literal::String("inf".into()));
    }

    #[test]
    fn test_booleans_are_case_sensitive() {
        assert_eq!(coerce_literal("true"), Literal::Boolean(true));
        assert_eq!(coerce_literal("false"), Literal::Boolean(false));
        assert_eq!(coerce_literal("True"), Literal::String("True".into()));
    }

    #[test]
    fn test_quoted_strings() {
        assert_eq!(coerce_literal("'foo'"), Literal::String("foo".into()));
        assert_eq!(coerce_literal("' foo '"), Literal::String(" foo ".into()));
        assert_eq!(coerce_literal("'42'"), Literal::String("42".into()));
        assert_eq!(coerce_literal("'true'"), Literal::String("true".into()));
    }

    #[test]
    fn test_every_apostrophe_is_removed() {
        assert_eq!(coerce_literal("'O'Brien'"), Literal::String("OBrien".into()));
    }

    #[test]
    fn test_empty_quotes_are_null() {
        assert_eq!(coerce_literal("''"), Literal::Null);
        assert_eq!(coerce_literal("   "), Literal::Null);
    }

    #[test]
    fn test_in_list() {
        assert_eq!(
            coerce_list("('Paris', 'Malaga', 'London')"),
            vec![
                Literal::from("Paris"),
                Literal::from("Malaga"),
                Literal::from("London")
            ]
        );
        assert_eq!(
            coerce_list(" (21, 31.5, true) "),
            vec![Literal::Integer(21), Literal::Float(31.5), Literal::Boolean(true)]
        );
    }

    #[test]
    fn test_in_list_without_parens() {
        assert_eq!(
            coerce_list("1, 2"),
            vec![Literal::Integer(1), Literal::Integer(2)]
        );
    }

    #[test]
    fn test_in_list_keeps_quoted_whitespace() {
        assert_eq!(
            coerce_list("(' Paris', ' Malaga ', 'London ')"),
            vec![
                Literal::from(" Paris"),
                Literal::from(" Malaga "),
                Literal::from("London ")
            ]
        );
    }

    #[test]
    fn test_value_for_operator() {
        assert_eq!(
            coerce_value("20", FilterOperator::GreaterThan),
            FilterValue::Single(Literal::Integer(20))
        );
        assert_eq!(
            coerce_value("(20)", FilterOperator::In),
            FilterValue::List(vec![Literal::Integer(20)])
        );
    }

    #[test]
    fn test_display_roundtrip() {
        let produced = [
            coerce_literal("42"),
            coerce_literal("-0.125"),
            coerce_literal("1e20"),
            coerce_literal("3.141592653589793"),
            coerce_literal("true"),
            coerce_literal("false"),
            coerce_literal("-9223372036854775808"),
        ];
        for lit in produced {
            assert_eq!(coerce_literal(&lit.to_string()), lit);
        }
    }
}
