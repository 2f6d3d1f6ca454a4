//! # odata-query
//!
//! Decomposes an OData-style query string into a typed [`QueryDescription`]
//! so data-access code never has to re-parse `$filter` strings.
//!
//! ## Quick Example
//!
//! ```
//! use odata_query::prelude::*;
//!
//! let query = odata_query::parse(
//!     "https://example.com/api/users?$filter=age gt 20 and city in ('Paris', 'Lyon')&$top=10",
//! )
//! .unwrap()
//! .unwrap();
//!
//! assert_eq!(query.top(), Some(10));
//! assert_eq!(query.filter()[0].operator(), FilterOperator::GreaterThan);
//! assert_eq!(query.filter()[0].value(), &FilterValue::Single(Literal::Integer(20)));
//! ```
//!
//! ## Keys
//!
//! | Key        | Value                              | Field      |
//! |------------|------------------------------------|------------|
//! | `$select`  | `a,b,c`                            | `select`   |
//! | `$count`   | `1` `true` `0` `false`             | `count`    |
//! | `$top`     | non-negative integer               | `top`      |
//! | `$skip`    | non-negative integer               | `skip`     |
//! | `$orderby` | `prop [asc\|desc], ...`            | `order_by` |
//! | `$filter`  | `prop op value and ...`            | `filter`   |
//!
//! Filter operators: `eq ne gt ge lt le in`, matched case-insensitively.

pub mod ast;
pub mod config;
pub mod error;
pub mod fmt;
pub mod parser;

pub use ast::QueryDescription;
pub use parser::{parse, parse_query_string, parse_with_config, parse_with_prefix};

pub mod prelude {
    pub use crate::ast::*;
    pub use crate::config::{Config, OutputFormat, ParserConfig};
    pub use crate::error::*;
    pub use crate::fmt::ToQueryString;
    pub use crate::parser::{parse, parse_query_string, parse_with_config, parse_with_prefix};
}
