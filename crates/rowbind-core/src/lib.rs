pub mod casing;
pub use casing::{Casing, Pluralize};

mod entity;
pub use entity::Entity;

mod error;
pub use error::{Error, IntoError};

pub mod schema;
pub use schema::{EntitySchema, FieldSchema, Persistence};

pub mod stmt;

/// A Result type alias that uses Rowbind's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
