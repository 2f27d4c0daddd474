#![cfg(feature = "sqlite")]

use pretty_assertions::assert_eq;
use storm::{driver::Flavor, Db, Value};

#[derive(Debug, Default, Clone, PartialEq, storm::Model)]
struct User {
    #[column("id")]
    id: i64,

    #[column("name")]
    name: String,

    #[column("email")]
    email: Option<String>,
}

#[derive(Debug, Default, PartialEq, storm::Model)]
struct Note {
    #[column("body")]
    body: String,
}

fn user(id: i64, name: &str, email: Option<&str>) -> User {
    User {
        id,
        name: name.to_string(),
        email: email.map(str::to_string),
    }
}

async fn all_users(db: &mut Db) -> Vec<User> {
    let mut users: Vec<User> = vec![];
    db.find(&mut users, "SELECT id, name, email FROM users ORDER BY id", &[])
        .await
        .unwrap();
    users
}

#[tokio::test]
async fn create_update_delete_round_trip() {
    let mut db = tests::sqlite::users_db().await;
    assert_eq!(db.flavor(), Flavor::Sqlite);

    let mut john = user(1, "John Doe", Some("john@example.com"));
    let ada = user(2, "Ada", None);

    assert_eq!(db.create(&john).await.unwrap(), 1);
    assert_eq!(db.create(&ada).await.unwrap(), 1);
    assert_eq!(all_users(&mut db).await, [john.clone(), ada.clone()]);

    john.name = "John Q. Doe".to_string();
    john.email = None;
    assert_eq!(db.update(&john).await.unwrap(), 1);
    assert_eq!(all_users(&mut db).await, [john.clone(), ada.clone()]);

    assert_eq!(db.delete(&ada).await.unwrap(), 1);
    assert_eq!(db.delete(&ada).await.unwrap(), 0);
    assert_eq!(all_users(&mut db).await, [john]);

    db.close().await.unwrap();
}

#[tokio::test]
async fn find_binds_arguments() {
    let mut db = tests::sqlite::users_db().await;

    for (id, name) in [(1, "John Doe"), (2, "Ada"), (3, "Grace")] {
        db.create(&user(id, name, None)).await.unwrap();
    }

    let mut users: Vec<User> = vec![];
    db.find(
        &mut users,
        "SELECT id, name FROM users WHERE id > ?1 ORDER BY id DESC",
        &[Value::I64(1)],
    )
    .await
    .unwrap();

    assert_eq!(users, [user(3, "Grace", None), user(2, "Ada", None)]);
}

#[tokio::test]
async fn find_over_an_empty_table() {
    let mut db = tests::sqlite::users_db().await;
    assert!(all_users(&mut db).await.is_empty());
}

#[tokio::test]
async fn constraint_violations_come_back_as_driver_errors() {
    let mut db = tests::sqlite::users_db().await;
    db.create(&user(1, "John Doe", None)).await.unwrap();

    let err = db.create(&user(1, "Imposter", None)).await.unwrap_err();
    assert!(err.is_driver_operation_failed());
    assert!(err.to_string().contains("UNIQUE constraint failed"), "{err}");

    assert_eq!(all_users(&mut db).await, [user(1, "John Doe", None)]);
}

#[tokio::test]
async fn aliased_columns_must_map_to_fields() {
    let mut db = tests::sqlite::users_db().await;
    db.create(&user(1, "John Doe", Some("john@example.com")))
        .await
        .unwrap();

    let mut users: Vec<User> = vec![];
    let err = db
        .find(&mut users, "SELECT id, email AS contact FROM users", &[])
        .await
        .unwrap_err();
    assert!(err.is_field_not_found());

    // Converted to snake_case before matching field names
    db.find(&mut users, "SELECT id, name AS Name FROM users", &[])
        .await
        .unwrap();
    assert_eq!(users, [user(1, "John Doe", None)]);
}

#[tokio::test]
async fn query_errors_leave_the_destination_alone() {
    let mut db = tests::sqlite::users_db().await;

    let mut users = vec![user(9, "Existing", None)];
    let err = db
        .find(&mut users, "SELECT id FROM no_such_table", &[])
        .await
        .unwrap_err();

    assert!(err.is_driver_operation_failed());
    assert_eq!(users, [user(9, "Existing", None)]);
}

#[tokio::test]
async fn invalid_utf8_text_is_an_error() {
    let mut db = tests::sqlite::users_db().await;

    let mut notes: Vec<Note> = vec![];
    let err = db
        .find(&mut notes, "SELECT CAST(X'FF6869' AS TEXT) AS body", &[])
        .await
        .unwrap_err();

    assert!(err.is_row_iteration(), "{err}");
    assert!(err.to_string().starts_with("row iteration failed after 0 rows"), "{err}");
    assert!(notes.is_empty());
}

#[tokio::test]
async fn connect_by_url() {
    tests::init_tracing();

    let mut db = Db::connect("sqlite::memory:").await.unwrap();
    assert_eq!(db.flavor(), Flavor::Sqlite);

    let mut users: Vec<User> = vec![];
    db.find(&mut users, "SELECT 7 AS id, 'Ada' AS name", &[])
        .await
        .unwrap();
    assert_eq!(users, [user(7, "Ada", None)]);

    db.close().await.unwrap();
}

#[tokio::test]
async fn unsupported_urls_are_rejected() {
    let err = Db::connect("postgresql://localhost/storm").await.unwrap_err();
    assert!(err.is_invalid_connection_url());
}
