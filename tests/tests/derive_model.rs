use pretty_assertions::assert_eq;
use storm::{stmt::ValueRecord, Model, Value};
use storm_core::stmt::SparseRecord;

#[derive(Debug, Default, PartialEq, Model)]
struct User {
    #[column("id")]
    id: i64,

    #[column("name")]
    name: String,

    #[column("email")]
    email: String,
}

#[derive(Debug, Default, PartialEq, Model)]
#[table = "audit_log"]
struct AuditEntry {
    #[key]
    #[column("entry_id")]
    entry: uuid::Uuid,

    #[column("actor")]
    actor: Option<String>,

    #[column("payload")]
    payload: Vec<u8>,

    pending: bool,
}

#[test]
fn table_name_is_the_lowercased_plural_of_the_type() {
    assert_eq!(User::schema().table_name, "users");
    assert_eq!(User::schema().name, "User");

    // Same answer every time
    assert!(std::ptr::eq(User::schema(), User::schema()));
}

#[test]
fn table_attribute_overrides_the_table_name() {
    assert_eq!(AuditEntry::schema().table_name, "audit_log");
}

#[test]
fn mapping_table_lists_fields_in_declaration_order() {
    let schema = AuditEntry::schema();

    let fields = schema
        .fields
        .iter()
        .map(|field| (field.name.as_str(), field.column_name(), field.primary_key))
        .collect::<Vec<_>>();

    assert_eq!(
        fields,
        [
            ("entry", Some("entry_id"), true),
            ("actor", Some("actor"), false),
            ("payload", Some("payload"), false),
            ("pending", None, false),
        ]
    );
    assert_eq!(schema.key_fields(), [0]);
}

#[test]
fn id_field_is_the_identifier_by_convention() {
    assert_eq!(User::schema().key_fields(), [0]);
}

#[test]
fn to_value_yields_a_record_in_field_order() {
    let user = User {
        id: 1,
        name: "John Doe".to_string(),
        email: "john@example.com".to_string(),
    };

    assert_eq!(
        Model::to_value(&user),
        Value::Record(ValueRecord::from_vec(vec![
            Value::I64(1),
            Value::from("John Doe"),
            Value::from("john@example.com"),
        ]))
    );
}

#[test]
fn unmapped_fields_contribute_null_and_load_as_default() {
    let entry = AuditEntry {
        entry: uuid::Uuid::nil(),
        actor: None,
        payload: vec![7],
        pending: true,
    };

    let record = Model::to_value(&entry).into_record().unwrap();
    assert_eq!(record[3], Value::Null);
    assert_eq!(record[1], Value::Null);

    let mut sparse = SparseRecord::new(4);
    sparse.set(0, Value::Uuid(uuid::Uuid::nil()));
    sparse.set(2, Value::Bytes(vec![7]));

    let loaded = AuditEntry::load(sparse).unwrap();
    assert_eq!(
        loaded,
        AuditEntry {
            entry: uuid::Uuid::nil(),
            actor: None,
            payload: vec![7],
            pending: false,
        }
    );
}
