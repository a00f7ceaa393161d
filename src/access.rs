//! Access layer value model.
//!
//! - **Value**: tagged constants (integer, text, boolean, null) with typed accessors
//! - **DataType**: the declared type of a column
//! - **Tuple**: a positional row of values, aligned to a schema held by the catalog

pub mod tuple;
pub mod value;

pub use tuple::Tuple;
pub use value::{DataType, Value};
