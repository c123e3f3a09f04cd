pub mod builtins;
pub mod error;
pub mod iterator;
pub mod value;

pub use value::Value;
