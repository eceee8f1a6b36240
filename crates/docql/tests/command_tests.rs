mod common;

use common::FakeConnection;
use docql::{ConnectionRegistry, Error, Expr, QuerySpec, Value};

#[test]
fn command_binds_first_collection_of_a_sequence() {
    let query = QuerySpec::new()
        .from(vec!["orders", "archive"])
        .union(QuerySpec::new().from("returns"))
        .except("SELECT * FROM `cancelled`");
    let command = query.create_command_with(&FakeConnection::new()).unwrap();
    assert_eq!(command.collection.as_deref(), Some("orders"));
}

#[test]
fn command_binds_single_collection_directly() {
    let query = QuerySpec::new().from("orders");
    let command = query.create_command_with(&FakeConnection::new()).unwrap();
    assert_eq!(command.collection.as_deref(), Some("orders"));
}

#[test]
fn empty_registry_yields_a_configuration_error() {
    let registry: ConnectionRegistry<FakeConnection> = ConnectionRegistry::new();
    let query = QuerySpec::new().from("orders");
    let err = query.create_command(None, &registry).unwrap_err();
    assert!(matches!(err, Error::Configuration(_)));
}

#[test]
fn registered_default_connection_is_used() {
    let registry = ConnectionRegistry::with_default(FakeConnection::new());
    let query = QuerySpec::new().from("orders");
    let command = query.create_command(None, &registry).unwrap();
    assert_eq!(command.collection.as_deref(), Some("orders"));
}

#[test]
fn explicit_connection_overrides_the_registry_default() {
    let registry: ConnectionRegistry<FakeConnection> = ConnectionRegistry::new();
    let conn = FakeConnection::new();
    let query = QuerySpec::new().from("orders");
    // The empty registry would fail; the explicit connection must win.
    assert!(query.create_command(Some(&conn), &registry).is_ok());
}

#[test]
fn command_carries_compiled_text_and_parameters() {
    let query = QuerySpec::new()
        .from("orders")
        .use_keys(vec!["order::1", "order::2"], true)
        .unwrap()
        .use_index("orders_by_status", Some("GSI"))
        .unwrap()
        .filter(Expr::field("status").eq("open"));
    let command = query.create_command_with(&FakeConnection::new()).unwrap();

    assert_eq!(
        command.text,
        "SELECT * FROM `orders` USE PRIMARY KEYS $1 \
         USE INDEX (`orders_by_status` USING GSI) WHERE status = $2"
    );
    assert_eq!(
        command.params,
        vec![
            Value::Array(vec![
                Value::Str("order::1".to_string()),
                Value::Str("order::2".to_string()),
            ]),
            Value::Str("open".to_string()),
        ]
    );
}

#[test]
fn spec_is_reusable_after_command_creation() {
    let conn = FakeConnection::new();
    let query = QuerySpec::new()
        .from(vec!["orders", "archive"])
        .use_index("orders_by_status", None)
        .unwrap()
        .intersect_all("SELECT * FROM `audit`");
    let before = query.clone();

    let first = query.create_command_with(&conn).unwrap();
    assert_eq!(query, before);

    // Extend a clone into a different command; the original is untouched.
    let extended = query.clone().union("SELECT * FROM `extra`");
    let second = extended.create_command_with(&conn).unwrap();
    assert_ne!(first.text, second.text);
    assert_eq!(query, before);
}

#[test]
fn query_without_a_source_creates_no_command() {
    let query = QuerySpec::new().filter(Expr::field("a").eq(1));
    let err = query.create_command_with(&FakeConnection::new()).unwrap_err();
    assert!(matches!(err, Error::Compilation(_)));
}
