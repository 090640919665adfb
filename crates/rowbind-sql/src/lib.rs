pub mod serializer;
pub use serializer::{Flavor, ParamBag, Params, Serializer, TypedValue};

pub mod stmt;
pub use stmt::Statement;
