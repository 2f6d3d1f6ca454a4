//! Grammars for single `$orderby` and `$filter` sub-clauses.
//!
//! ```text
//! orderby:  <property> [asc|desc]
//! filter:   <property> <op> <value>      op = eq|ne|gt|ge|lt|le|in
//! ```

use nom::{
    branch::alt,
    bytes::complete::{tag, take_till1, take_while, take_while1, take_while_m_n},
    combinator::{peek, rest, verify},
    IResult,
};

use super::literal::coerce_value;
use crate::ast::{FilterClause, FilterOperator, OrderClause};
use crate::error::{ClauseKind, QueryError, QueryResult};

/// Parse one order by sub-clause into a property and direction.
pub fn parse_order_clause(clause: &str) -> QueryResult<OrderClause> {
    let tokens: Vec<&str> = clause.split_whitespace().collect();

    match tokens.as_slice() {
        [property] => Ok(OrderClause::asc(*property)),
        [property, direction] => Ok(OrderClause::new(*property, direction.parse()?)),
        _ => Err(QueryError::shape(ClauseKind::OrderBy, tokens.len(), clause)),
    }
}

/// Parse one filter sub-clause and coerce its value.
pub fn parse_filter_clause(clause: &str) -> QueryResult<FilterClause> {
    let (property, code, raw_value) = match parse_filter_parts(clause) {
        Ok((_, parts)) => parts,
        Err(_) => return Err(QueryError::shape(ClauseKind::Filter, 0, clause)),
    };

    let operator: FilterOperator = code.parse()?;
    let value = coerce_value(raw_value, operator);
    tracing::trace!("Filter clause: {} {} {}", property, operator, value);

    Ok(FilterClause::new(property.trim(), operator, value))
}

/// Split a filter clause into (property, operator code, raw value).
fn parse_filter_parts(input: &str) -> IResult<&str, (&str, &str, &str)> {
    let (input, _) = ws0(input)?;
    let (input, property) = take_till1(char::is_whitespace)(input)?;
    let (input, _) = ws1(input)?;
    let (input, code) = take_while_m_n(2, 2, |c: char| c.is_ascii_alphabetic())(input)?;
    // The operator must end here: `eqx` or `eq5` is not an operator.
    let (input, _) = peek(alt((ws1, tag("("))))(input)?;
    let (input, _) = ws0(input)?;
    let (input, value) = verify(rest, |v: &str| !v.trim().is_empty())(input)?;

    Ok((input, (property, code, value)))
}

fn ws0(input: &str) -> IResult<&str, &str> {
    take_while(char::is_whitespace)(input)
}

fn ws1(input: &str) -> IResult<&str, &str> {
    take_while1(char::is_whitespace)(input)
}
