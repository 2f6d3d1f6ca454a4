use serde::{Deserialize, Serialize};

/// A typed primitive produced by literal coercion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    String(String),
    Null,
}

impl Literal {
    /// Short type name, as shown by the CLI.
    pub fn type_name(&self) -> &'static str {
        match self {
            Literal::Integer(_) => "integer",
            Literal::Float(_) => "float",
            Literal::Boolean(_) => "boolean",
            Literal::String(_) => "string",
            Literal::Null => "null",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Literal::Null)
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Literal::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Literal::Integer(n) => Some(*n as f64),
            Literal::Float(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Literal::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Literal::String(s) => Some(s),
            _ => None,
        }
    }
}

/// Query-text form: strings are quoted, null is an empty quoted string.
impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Integer(n) => write!(f, "{}", n),
            Literal::Float(n) => write!(f, "{}", n),
            Literal::Boolean(b) => write!(f, "{}", b),
            Literal::String(s) => write!(f, "'{}'", s),
            Literal::Null => write!(f, "''"),
        }
    }
}

impl From<bool> for Literal {
    fn from(b: bool) -> Self {
        Literal::Boolean(b)
    }
}

impl From<i32> for Literal {
    fn from(n: i32) -> Self {
        Literal::Integer(n as i64)
    }
}

impl From<i64> for Literal {
    fn from(n: i64) -> Self {
        Literal::Integer(n)
    }
}

impl From<f64> for Literal {
    fn from(n: f64) -> Self {
        Literal::Float(n)
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Literal::String(s.to_string())
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Literal::String(s)
    }
}

impl<T: Into<Literal>> From<Option<T>> for Literal {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Literal::Null, Into::into)
    }
}

/// Right-hand side of a filter clause.
///
/// `List` only appears together with [`FilterOperator::In`](super::FilterOperator::In).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Single(Literal),
    List(Vec<Literal>),
}

impl FilterValue {
    pub fn as_single(&self) -> Option<&Literal> {
        match self {
            FilterValue::Single(lit) => Some(lit),
            FilterValue::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Literal]> {
        match self {
            FilterValue::Single(_) => None,
            FilterValue::List(items) => Some(items),
        }
    }
}

impl std::fmt::Display for FilterValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterValue::Single(lit) => write!(f, "{}", lit),
            FilterValue::List(items) => {
                write!(f, "(")?;
                for (i, v) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                write!(f, ")")
            }
        }
    }
}

impl From<Literal> for FilterValue {
    fn from(lit: Literal) -> Self {
        FilterValue::Single(lit)
    }
}

impl From<Vec<Literal>> for FilterValue {
    fn from(items: Vec<Literal>) -> Self {
        FilterValue::List(items)
    }
}
