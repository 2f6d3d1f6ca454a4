use super::*;
use crate::ast::*;
use crate::error::QueryError;

// ========================================================================
// Absent vs. empty
// ========================================================================

#[test]
fn test_no_query_string_is_absent() {
    assert_eq!(parse("https://example.com").unwrap(), None);
    assert_eq!(parse("https://example.com/api/user").unwrap(), None);
}

#[test]
fn test_unrecognized_keys_are_absent() {
    assert_eq!(parse("https://example.com/?page=2&sort=name").unwrap(), None);
    assert_eq!(parse("https://example.com/?").unwrap(), None);
}

#[test]
fn test_bare_keys_ignored_in_prefix_mode() {
    assert_eq!(parse("https://example.com/?select=name").unwrap(), None);
    assert_eq!(
        parse_with_prefix("https://example.com/?$select=name", false).unwrap(),
        None
    );
}

#[test]
fn test_blank_key_is_present_but_empty() {
    let query = parse("https://example.com/api/user?$filter=").unwrap();
    assert_eq!(query, Some(QueryDescription::default()));

    let query = parse("https://example.com/api/user?$top=%20").unwrap();
    assert_eq!(query, Some(QueryDescription::default()));
}

// ========================================================================
// Assembly
// ========================================================================

#[test]
fn test_all_fields() {
    let query = parse(
        "https://example.com/api/user?$select=firstName,lastName&$count=true&$top=10&$skip=20\
         &$orderby=id%20desc&$filter=age%20gt%2020",
    )
    .unwrap()
    .unwrap();

    assert_eq!(query.select(), ["firstName", "lastName"]);
    assert_eq!(query.count(), Some(true));
    assert_eq!(query.top(), Some(10));
    assert_eq!(query.skip(), Some(20));
    assert_eq!(query.order_by(), [OrderClause::desc("id")]);
    assert_eq!(
        query.filter(),
        [FilterClause::new("age", FilterOperator::GreaterThan, Literal::Integer(20))]
    );
}

#[test]
fn test_fields_are_independent() {
    let query = parse("https://example.com/?$top=5&$orderby=").unwrap().unwrap();
    assert_eq!(query.top(), Some(5));
    assert_eq!(query.skip(), None);
    assert_eq!(query.count(), None);
    assert!(query.order_by().is_empty());
}

#[test]
fn test_unknown_keys_are_ignored() {
    let query = parse("https://example.com/?$top=5&$expand=orders&page=3")
        .unwrap()
        .unwrap();
    assert_eq!(query, QueryDescription::default().with_top(5));
}

#[test]
fn test_one_bad_clause_fails_everything() {
    let err = parse("https://example.com/?$top=5&$filter=age%20gt%2020%20and%20name").unwrap_err();
    assert!(matches!(err, QueryError::InvalidClauseShape { count: 0, .. }));
}

#[test]
fn test_raw_spaces_in_url() {
    let query = parse("https://example.com/?$filter=name eq 'foo'&$orderby=name desc")
        .unwrap()
        .unwrap();
    assert_eq!(
        query.filter(),
        [FilterClause::new("name", FilterOperator::Equals, Literal::from("foo"))]
    );
    assert_eq!(query.order_by(), [OrderClause::desc("name")]);
}

#[test]
fn test_encoded_prefix() {
    let query = parse("https://example.com/?%24top=3").unwrap().unwrap();
    assert_eq!(query.top(), Some(3));
}

#[test]
fn test_raw_query_string_entry() {
    let query = parse_query_string("select=a,b&count=0", false).unwrap().unwrap();
    assert_eq!(query.select(), ["a", "b"]);
    assert_eq!(query.count(), Some(false));
}

#[test]
fn test_config_prefix_mode() {
    let config = ParserConfig::builder().use_prefix(false).build();
    let query = parse_with_config("https://example.com/?top=1", &config)
        .unwrap()
        .unwrap();
    assert_eq!(query.top(), Some(1));
}

// ========================================================================
// Errors
// ========================================================================

#[test]
fn test_invalid_url() {
    assert!(matches!(parse(""), Err(QueryError::InvalidInput(_))));
    assert!(matches!(parse("example.com"), Err(QueryError::InvalidInput(_))));
}

#[test]
fn test_malformed_encoding() {
    assert!(matches!(
        parse("https://example.com/?$select=%C3%28"),
        Err(QueryError::MalformedInput(_))
    ));
}
