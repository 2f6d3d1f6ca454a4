//! Typed description of a decomposed query string.

pub mod operators;
pub mod query;
pub mod values;

pub use self::operators::{FilterOperator, OrderDirection};
pub use self::query::{FilterClause, OrderClause, QueryDescription};
pub use self::values::{FilterValue, Literal};
