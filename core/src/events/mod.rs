pub mod classify;
pub mod fields;


pub use classify::{EventKind, classify, kind_name};
pub use fields::{EventFields, FieldMap, FieldValue, field};
