use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QueryError;

/// Comparison operators accepted in `$filter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOperator {
    /// Equal (eq)
    Equals,
    /// Not equal (ne)
    NotEquals,
    /// Greater than (gt)
    GreaterThan,
    /// Greater than or equal (ge)
    GreaterOrEqual,
    /// Less than (lt)
    LessThan,
    /// Less than or equal (le)
    LessOrEqual,
    /// Membership in a parenthesized list (in)
    In,
}

impl FilterOperator {
    pub const ALL: [FilterOperator; 7] = [
        FilterOperator::Equals,
        FilterOperator::NotEquals,
        FilterOperator::GreaterThan,
        FilterOperator::GreaterOrEqual,
        FilterOperator::LessThan,
        FilterOperator::LessOrEqual,
        FilterOperator::In,
    ];

    /// The two-letter code used in query strings.
    pub fn code(&self) -> &'static str {
        match self {
            FilterOperator::Equals => "eq",
            FilterOperator::NotEquals => "ne",
            FilterOperator::GreaterThan => "gt",
            FilterOperator::GreaterOrEqual => "ge",
            FilterOperator::LessThan => "lt",
            FilterOperator::LessOrEqual => "le",
            FilterOperator::In => "in",
        }
    }

    /// Whether the right-hand side is a list of literals.
    pub fn takes_list(&self) -> bool {
        matches!(self, FilterOperator::In)
    }
}

impl FromStr for FilterOperator {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "eq" => Ok(FilterOperator::Equals),
            "ne" => Ok(FilterOperator::NotEquals),
            "gt" => Ok(FilterOperator::GreaterThan),
            "ge" => Ok(FilterOperator::GreaterOrEqual),
            "lt" => Ok(FilterOperator::LessThan),
            "le" => Ok(FilterOperator::LessOrEqual),
            "in" => Ok(FilterOperator::In),
            _ => Err(QueryError::InvalidOperator(s.to_string())),
        }
    }
}

impl std::fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Sort direction of an `$orderby` clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderDirection {
    #[default]
    Ascending,
    Descending,
}

impl OrderDirection {
    pub fn code(&self) -> &'static str {
        match self {
            OrderDirection::Ascending => "asc",
            OrderDirection::Descending => "desc",
        }
    }
}

impl FromStr for OrderDirection {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(OrderDirection::Ascending)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(OrderDirection::Descending)
        } else {
            Err(QueryError::InvalidDirection(s.to_string()))
        }
    }
}

impl std::fmt::Display for OrderDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
