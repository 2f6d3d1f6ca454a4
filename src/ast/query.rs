use serde::{Deserialize, Serialize};

use super::operators::{FilterOperator, OrderDirection};
use super::values::FilterValue;

/// One `$orderby` sub-clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderClause {
    property: String,
    direction: OrderDirection,
}

impl OrderClause {
    pub fn new(property: impl Into<String>, direction: OrderDirection) -> Self {
        Self {
            property: property.into(),
            direction,
        }
    }

    pub fn asc(property: impl Into<String>) -> Self {
        Self::new(property, OrderDirection::Ascending)
    }

    pub fn desc(property: impl Into<String>) -> Self {
        Self::new(property, OrderDirection::Descending)
    }

    /// The property to order on.
    pub fn property(&self) -> &str {
        &self.property
    }

    pub fn direction(&self) -> OrderDirection {
        self.direction
    }
}

/// One `$filter` sub-clause: `<property> <operator> <value>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterClause {
    property: String,
    operator: FilterOperator,
    value: FilterValue,
}

impl FilterClause {
    pub fn new(
        property: impl Into<String>,
        operator: FilterOperator,
        value: impl Into<FilterValue>,
    ) -> Self {
        Self {
            property: property.into(),
            operator,
            value: value.into(),
        }
    }

    /// The property being filtered.
    pub fn property(&self) -> &str {
        &self.property
    }

    pub fn operator(&self) -> FilterOperator {
        self.operator
    }

    /// The coerced right-hand side.
    pub fn value(&self) -> &FilterValue {
        &self.value
    }
}

/// The parsed form of an OData-style query string.
///
/// `count`, `top` and `skip` are tri-state: `None` means the key was not
/// given (or was blank), which is distinct from `Some(false)` / `Some(0)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryDescription {
    select: Vec<String>,
    count: Option<bool>,
    top: Option<u64>,
    skip: Option<u64>,
    order_by: Vec<OrderClause>,
    filter: Vec<FilterClause>,
}

impl QueryDescription {
    pub fn new(
        select: Vec<String>,
        count: Option<bool>,
        top: Option<u64>,
        skip: Option<u64>,
        order_by: Vec<OrderClause>,
        filter: Vec<FilterClause>,
    ) -> Self {
        Self {
            select,
            count,
            top,
            skip,
            order_by,
            filter,
        }
    }

    pub fn with_select<I, S>(mut self, select: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.select = select.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_count(mut self, count: bool) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_top(mut self, top: u64) -> Self {
        self.top = Some(top);
        self
    }

    pub fn with_skip(mut self, skip: u64) -> Self {
        self.skip = Some(skip);
        self
    }

    pub fn with_order_by(mut self, order_by: Vec<OrderClause>) -> Self {
        self.order_by = order_by;
        self
    }

    pub fn with_filter(mut self, filter: Vec<FilterClause>) -> Self {
        self.filter = filter;
        self
    }

    /// Properties to return, in request order.
    pub fn select(&self) -> &[String] {
        &self.select
    }

    /// Whether the total count was requested.
    pub fn count(&self) -> Option<bool> {
        self.count
    }

    pub fn top(&self) -> Option<u64> {
        self.top
    }

    pub fn skip(&self) -> Option<u64> {
        self.skip
    }

    pub fn order_by(&self) -> &[OrderClause] {
        &self.order_by
    }

    /// Filter clauses; all of them must hold (flat conjunction).
    pub fn filter(&self) -> &[FilterClause] {
        &self.filter
    }

    /// True when no field carries a value.
    pub fn is_empty(&self) -> bool {
        self.select.is_empty()
            && self.count.is_none()
            && self.top.is_none()
            && self.skip.is_none()
            && self.order_by.is_empty()
            && self.filter.is_empty()
    }
}
