use super::Serializer;

/// Placeholder syntax of the target SQL driver.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flavor {
    /// `@name`
    #[default]
    Named,

    /// `$1`, `$2`, ...
    Postgresql,

    /// `?1`, `?2`, ...
    Sqlite,

    /// `?`
    Mysql,
}

impl Serializer {
    pub fn named() -> Serializer {
        Serializer::new(Flavor::Named)
    }

    pub fn postgresql() -> Serializer {
        Serializer::new(Flavor::Postgresql)
    }

    pub fn sqlite() -> Serializer {
        Serializer::new(Flavor::Sqlite)
    }

    pub fn mysql() -> Serializer {
        Serializer::new(Flavor::Mysql)
    }
}
