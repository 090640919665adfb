//! Common imports for test files
//!
//! `use tests::prelude::*;`

pub use crate::entities::*;
pub use crate::init_logging;

pub use rowbind::{
    Casing, EntityExt, Error, Flavor, IdentityParam, Mapper, ParamBag, Pluralize, Sql, Value,
};
