mod entity_ext;
pub use entity_ext::EntityExt;

pub mod mapper;
pub use mapper::{IdentityParam, Mapper, Sql};

pub use rowbind_core::{
    bail, casing, err, schema,
    stmt::{Primitive, Type, Value},
    Casing, Entity, EntitySchema, Error, FieldSchema, IntoError, Persistence, Pluralize, Result,
};

pub use rowbind_macros::Entity;

pub use rowbind_sql::{stmt, Flavor, ParamBag, Params, Serializer, Statement, TypedValue};

#[doc(hidden)]
pub mod codegen_support {
    pub use rowbind_core::{
        stmt::{Primitive, Value},
        Entity, EntitySchema, FieldSchema, Persistence,
    };
    pub use std::option::Option;
}
