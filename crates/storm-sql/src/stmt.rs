mod assignment;
pub use assignment::Assignment;

mod delete;
pub use delete::Delete;

mod insert;
pub use insert::Insert;

mod update;
pub use update::Update;

pub use storm_core::stmt::Value;

/// A write statement against a single table.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Delete(Delete),
    Insert(Insert),
    Update(Update),
}

