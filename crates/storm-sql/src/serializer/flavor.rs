use super::Serializer;

pub use storm_core::driver::Flavor;

impl Serializer {
    /// `?` placeholders, as accepted by MySQL and most generic drivers.
    pub fn generic() -> Serializer {
        Serializer::new(Flavor::Generic)
    }

    pub fn mysql() -> Serializer {
        Serializer::new(Flavor::Generic)
    }

    pub fn postgresql() -> Serializer {
        Serializer::new(Flavor::Postgresql)
    }

    pub fn sqlite() -> Serializer {
        Serializer::new(Flavor::Sqlite)
    }
}
