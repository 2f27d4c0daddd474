mod builder;
pub use builder::Builder;

mod field;
pub use field::Field;

mod model;
pub use model::ModelSchema;

mod verify;

/// Derives a table name from a model's type name: the lowercased name plus
/// a trailing `s`. No irregular plurals.
///
/// ```
/// assert_eq!(storm_core::schema::table_name("User"), "users");
/// assert_eq!(storm_core::schema::table_name("LineItem"), "lineitems");
/// ```
pub fn table_name(type_name: &str) -> String {
    let mut name = type_name.to_lowercase();
    name.push('s');
    name
}
