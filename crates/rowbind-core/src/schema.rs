//! Static per-type descriptors that drive statement generation.
//!
//! An [`EntitySchema`] is the compile-time replacement for runtime field
//! enumeration: it lists the declared fields of an entity in declaration
//! order, together with naming overrides and eligibility markers.

mod entity;
pub use entity::EntitySchema;

mod field;
pub use field::{FieldSchema, Persistence};
