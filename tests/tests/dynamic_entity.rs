use pretty_assertions::assert_eq;
use storm::{schema::ModelSchema, stmt::Statement, DynamicEntity, Value};
use tests::{Expectation, MockDriver};

use std::sync::Arc;

fn tag_schema() -> Arc<ModelSchema> {
    Arc::new(
        ModelSchema::builder("Tag")
            .key("id", "id")
            .field("label", "label")
            .unmapped("usage")
            .build()
            .unwrap(),
    )
}

#[tokio::test]
async fn dynamic_entities_are_persisted_through_their_schema() {
    let mock = MockDriver::new();
    mock.expect(Expectation::exec("INSERT INTO tags (id, label) VALUES (?, ?)"));
    mock.expect(Expectation::exec("UPDATE tags SET label = ? WHERE id = ?"));
    mock.expect(Expectation::exec("DELETE FROM tags WHERE id = ?"));

    let tag = DynamicEntity::from_fields(
        tag_schema(),
        vec![Value::I64(3), "rust".into(), Value::I64(99)],
    );

    let mut db = tests::connect(mock.clone()).await;
    db.create(&tag).await.unwrap();
    db.update(&tag).await.unwrap();
    db.delete(&tag).await.unwrap();

    let mut log = mock.log();
    assert_eq!(
        log.pop_statement().unwrap(),
        Statement::new(
            "INSERT INTO tags (id, label) VALUES (?, ?)",
            vec![Value::I64(3), "rust".into()],
        )
    );
    assert_eq!(
        log.pop_statement().unwrap().args(),
        [Value::from("rust"), Value::I64(3)]
    );
    assert_eq!(log.pop_statement().unwrap().args(), [Value::I64(3)]);
    assert!(log.pop().is_none());
}

#[tokio::test]
async fn non_record_values_fail_before_any_io() {
    let mock = MockDriver::new();
    let mut db = tests::connect(mock.clone()).await;

    let tag = DynamicEntity::new(tag_schema(), Value::I64(3));

    let err = db.create(&tag).await.unwrap_err();
    assert!(err.is_invalid_entity_kind());
    assert_eq!(
        err.to_string(),
        "invalid entity kind: `Tag` must be a record, got I64"
    );

    assert!(db.update(&tag).await.unwrap_err().is_invalid_entity_kind());
    assert!(db.delete(&tag).await.unwrap_err().is_invalid_entity_kind());

    assert!(mock.log().is_empty());
}

#[tokio::test]
async fn records_of_the_wrong_width_are_rejected() {
    let mock = MockDriver::new();
    let mut db = tests::connect(mock.clone()).await;

    let tag = DynamicEntity::from_fields(tag_schema(), vec![Value::I64(3)]);

    let err = db.create(&tag).await.unwrap_err();
    assert!(err.is_invalid_entity_kind());
    assert_eq!(
        err.to_string(),
        "invalid entity kind: `Tag` expected 3 fields, got 1"
    );
    assert!(mock.log().is_empty());
}

#[tokio::test]
async fn schemas_without_an_identifier() {
    let mock = MockDriver::new();
    mock.expect(Expectation::exec("INSERT INTO events (kind) VALUES (?)").with_args(["login"]));

    let schema = ModelSchema::builder("Event")
        .field("kind", "kind")
        .build()
        .unwrap();
    let event = DynamicEntity::from_fields(schema, vec!["login".into()]);

    let mut db = tests::connect(mock.clone()).await;
    db.create(&event).await.unwrap();

    assert!(db.update(&event).await.unwrap_err().is_missing_identifier());
    assert!(db.delete(&event).await.unwrap_err().is_missing_identifier());

    assert_eq!(mock.log().len(), 1);
    mock.verify();
}

#[tokio::test]
async fn updates_need_a_column_to_set() {
    let mock = MockDriver::new();
    let mut db = tests::connect(mock.clone()).await;

    let schema = ModelSchema::builder("Follow")
        .key("follower", "follower_id")
        .key("followee", "followee_id")
        .build()
        .unwrap();
    let follow = DynamicEntity::from_fields(schema, vec![Value::I64(1), Value::I64(2)]);

    let err = db.update(&follow).await.unwrap_err();
    assert!(err.is_invalid_statement());
    assert!(mock.log().is_empty());
}

#[test]
fn describe_reports_table_columns_and_keys() {
    let tag = DynamicEntity::from_fields(
        tag_schema(),
        vec![Value::I64(3), "rust".into(), Value::Null],
    );

    let descriptor = storm::describe(&tag).unwrap();
    assert_eq!(descriptor.table, "tags");
    assert_eq!(
        descriptor.key().map(|c| c.column).collect::<Vec<_>>(),
        ["id"]
    );
    assert_eq!(
        descriptor.non_key().map(|c| c.column).collect::<Vec<_>>(),
        ["label"]
    );
}

#[test]
fn invalid_schemas_are_rejected_when_built() {
    let err = ModelSchema::builder("User")
        .field("email", "email")
        .field("backup_email", "email")
        .build()
        .unwrap_err();
    assert!(err.is_invalid_schema());

    let err = ModelSchema::builder("User")
        .key("id", "")
        .build()
        .unwrap_err();
    assert!(err.is_invalid_schema());
}
