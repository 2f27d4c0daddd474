/// What the serializer needs to know about a database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capability {
    /// Placeholder syntax the database accepts
    pub flavor: Flavor,
}

/// Placeholder syntax for positional statement arguments.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    /// `?` for every argument (MySQL and most generic drivers)
    #[default]
    Generic,

    /// `$1`, `$2`, ...
    Postgresql,

    /// `?1`, `?2`, ...
    Sqlite,
}

impl Capability {
    /// Capabilities of a driver accepting bare `?` placeholders.
    pub const GENERIC: Self = Self {
        flavor: Flavor::Generic,
    };

    /// MySQL capabilities
    pub const MYSQL: Self = Self::GENERIC;

    /// PostgreSQL capabilities
    pub const POSTGRESQL: Self = Self {
        flavor: Flavor::Postgresql,
    };

    /// SQLite capabilities.
    pub const SQLITE: Self = Self {
        flavor: Flavor::Sqlite,
    };
}

impl Default for Capability {
    fn default() -> Self {
        Self::GENERIC
    }
}
