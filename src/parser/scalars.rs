//! `$top`, `$skip` and `$count` values.

use nom::{
    character::complete::{digit1, one_of},
    combinator::{all_consuming, opt},
    sequence::pair,
    IResult,
};

use crate::error::{QueryError, QueryResult};

/// Parse a non-negative integer. Absent or blank input yields `None`.
pub fn parse_bounded(field: &'static str, raw: Option<&str>) -> QueryResult<Option<u64>> {
    let Some(text) = raw.map(str::trim).filter(|t| !t.is_empty()) else {
        return Ok(None);
    };

    let (_, (sign, digits)) = all_consuming(parse_signed_digits)(text)
        .map_err(|_| QueryError::invalid_type(field, text))?;

    if sign == Some('-') && digits.bytes().any(|b| b != b'0') {
        return Err(QueryError::out_of_range(field, text));
    }

    digits
        .parse::<u64>()
        .map(Some)
        .map_err(|_| QueryError::out_of_range(field, text))
}

/// Parse a tri-state flag: `1`/`true`, `0`/`false`, or nothing.
pub fn parse_tristate(field: &'static str, raw: Option<&str>) -> QueryResult<Option<bool>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some("1" | "true") => Ok(Some(true)),
        Some("0" | "false") => Ok(Some(false)),
        Some(other) => Err(QueryError::invalid_type(field, other)),
    }
}

fn parse_signed_digits(input: &str) -> IResult<&str, (Option<char>, &str)> {
    pair(opt(one_of("+-")), digit1)(input)
}
