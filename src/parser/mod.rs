//! Query-string decomposition.
//!
//! # Syntax Overview
//!
//! ```text
//! ?$select=name,age&$count=true&$top=10&$skip=20&$orderby=name desc,age&$filter=age gt 20 and city in ('Paris')
//!  ───┬────────────  ─────┬────  ──┬────  ───┬───  ─────────┬───────────  ──────────────────┬──────────────────
//!     │                   │        │         │              │                              │
//!     │                   │        │         │              │          `and`-joined <property> <op> <value>
//!     │                   │        │         │              └── comma-joined <property> [asc|desc]
//!     │                   │        │         └── rows to skip
//!     │                   │        └── rows to return
//!     │                   └── 1/true/0/false
//!     └── comma-joined properties
//! ```
//!
//! Without prefix mode the keys are written bare (`select=...`).

pub mod clauses;
pub mod keys;
pub mod literal;
pub mod query_string;
pub mod scalars;
pub mod split;

#[cfg(test)]
mod tests;

use crate::ast::QueryDescription;
use crate::config::ParserConfig;
use crate::error::QueryResult;
use clauses::{parse_filter_clause, parse_order_clause};
use keys::QueryKeys;
use query_string::QueryPairs;
use scalars::{parse_bounded, parse_tristate};
use split::{split_conjunction, split_list};

/// Parse a full URL with `$`-prefixed keys.
///
/// Returns `Ok(None)` when the URL carries no query string, or when none of
/// the recognized keys occurs in it.
pub fn parse(url: &str) -> QueryResult<Option<QueryDescription>> {
    parse_with_prefix(url, true)
}

/// Parse a full URL, choosing whether keys carry the `$` prefix.
pub fn parse_with_prefix(url: &str, use_prefix: bool) -> QueryResult<Option<QueryDescription>> {
    match query_string::extract_query(url)? {
        Some(query) => parse_query_string(&query, use_prefix),
        None => {
            tracing::debug!("No query string in '{}'", url);
            Ok(None)
        }
    }
}

/// Parse a full URL using the prefix mode from `config`.
pub fn parse_with_config(
    url: &str,
    config: &ParserConfig,
) -> QueryResult<Option<QueryDescription>> {
    parse_with_prefix(url, config.use_prefix)
}

/// Parse a raw query string (the part after `?`).
pub fn parse_query_string(query: &str, use_prefix: bool) -> QueryResult<Option<QueryDescription>> {
    let pairs = query_string::decode_pairs(query)?;
    let keys = QueryKeys::resolve(use_prefix);

    if !keys.all().iter().any(|key| pairs.contains_key(*key)) {
        tracing::debug!("None of {:?} present in query string", keys.all());
        return Ok(None);
    }

    assemble(&pairs, &keys).map(Some)
}

/// Run every field parser against the decoded pairs.
fn assemble(pairs: &QueryPairs, keys: &QueryKeys) -> QueryResult<QueryDescription> {
    let lookup = |key: &str| pairs.get(key).map(String::as_str);

    let select: Vec<String> = lookup(&keys.select)
        .map(|raw| split_list(raw, ','))
        .unwrap_or_default()
        .into_iter()
        .map(str::to_string)
        .collect();

    let count = parse_tristate(keys::COUNT, lookup(&keys.count))?;
    let top = parse_bounded(keys::TOP, lookup(&keys.top))?;
    let skip = parse_bounded(keys::SKIP, lookup(&keys.skip))?;

    let order_by = lookup(&keys.order_by)
        .map(|raw| split_list(raw, ','))
        .unwrap_or_default()
        .into_iter()
        .map(parse_order_clause)
        .collect::<QueryResult<Vec<_>>>()?;

    let filter = lookup(&keys.filter)
        .map(split_conjunction)
        .unwrap_or_default()
        .into_iter()
        .map(parse_filter_clause)
        .collect::<QueryResult<Vec<_>>>()?;

    tracing::debug!(
        "Parsed query: {} select, {} order by, {} filter clause(s)",
        select.len(),
        order_by.len(),
        filter.len()
    );

    Ok(QueryDescription::new(select, count, top, skip, order_by, filter))
}
