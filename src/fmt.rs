//! Rendering a [`QueryDescription`] back into a query string.

use url::form_urlencoded;

use crate::ast::{FilterClause, OrderClause, OrderDirection, QueryDescription};
use crate::parser::keys::QueryKeys;

/// Trait for converting a description back to query-string text.
pub trait ToQueryString {
    /// Render as an `application/x-www-form-urlencoded` query string,
    /// without the leading `?`.
    fn to_query_string(&self, use_prefix: bool) -> String;
}

impl ToQueryString for QueryDescription {
    fn to_query_string(&self, use_prefix: bool) -> String {
        let keys = QueryKeys::resolve(use_prefix);
        let mut out = form_urlencoded::Serializer::new(String::new());

        if !self.select().is_empty() {
            out.append_pair(&keys.select, &self.select().join(","));
        }
        if let Some(count) = self.count() {
            out.append_pair(&keys.count, if count { "true" } else { "false" });
        }
        if let Some(top) = self.top() {
            out.append_pair(&keys.top, &top.to_string());
        }
        if let Some(skip) = self.skip() {
            out.append_pair(&keys.skip, &skip.to_string());
        }
        if !self.order_by().is_empty() {
            let clauses: Vec<String> = self.order_by().iter().map(render_order).collect();
            out.append_pair(&keys.order_by, &clauses.join(","));
        }
        if !self.filter().is_empty() {
            let clauses: Vec<String> = self.filter().iter().map(render_filter).collect();
            out.append_pair(&keys.filter, &clauses.join(" and "));
        }

        out.finish()
    }
}

fn render_order(clause: &OrderClause) -> String {
    match clause.direction() {
        OrderDirection::Ascending => clause.property().to_string(),
        OrderDirection::Descending => format!("{} desc", clause.property()),
    }
}

fn render_filter(clause: &FilterClause) -> String {
    format!(
        "{} {} {}",
        clause.property(),
        clause.operator(),
        clause.value()
    )
}
