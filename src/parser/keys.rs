//! Resolution of the six recognized key names.

/// Field names used in error messages.
pub const SELECT: &str = "select";
pub const COUNT: &str = "count";
pub const TOP: &str = "top";
pub const SKIP: &str = "skip";
pub const ORDER_BY: &str = "orderby";
pub const FILTER: &str = "filter";

/// The literal key names looked up in the decoded query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryKeys {
    pub select: String,
    pub count: String,
    pub top: String,
    pub skip: String,
    pub order_by: String,
    pub filter: String,
}

impl QueryKeys {
    /// Compute the key names, prefixed with `$` when `use_prefix` is set.
    pub fn resolve(use_prefix: bool) -> Self {
        let key = |name: &str| {
            if use_prefix {
                format!("${}", name)
            } else {
                name.to_string()
            }
        };

        Self {
            select: key(SELECT),
            count: key(COUNT),
            top: key(TOP),
            skip: key(SKIP),
            order_by: key(ORDER_BY),
            filter: key(FILTER),
        }
    }

    pub fn all(&self) -> [&str; 6] {
        [
            &self.select,
            &self.count,
            &self.top,
            &self.skip,
            &self.order_by,
            &self.filter,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixed_keys() {
        let keys = QueryKeys::resolve(true);
        assert_eq!(
            keys.all(),
            ["$select", "$count", "$top", "$skip", "$orderby", "$filter"]
        );
    }

    #[test]
    fn test_bare_keys() {
        let keys = QueryKeys::resolve(false);
        assert_eq!(
            keys.all(),
            ["select", "count", "top", "skip", "orderby", "filter"]
        );
    }
}
