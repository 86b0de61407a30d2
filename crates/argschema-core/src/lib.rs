//! argschema core types and shared utilities.

pub mod descriptor;
pub mod error;
pub mod ids;

pub use descriptor::{FieldDescriptor, RecordDescriptor, ScalarKind, TypeDescriptor};
pub use error::{ArgSchemaError, Result, ValidationIssue};
pub use ids::{ContextName, RecordName};
