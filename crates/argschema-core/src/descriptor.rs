//! Resolved type descriptors.
//!
//! A [`TypeDescriptor`] tree is the output of schema conversion: a
//! host-independent description of the shape a tool's arguments must have.
//! Consumers (argument validators, code generators) walk the tree; nothing in
//! it is a live type.

use crate::ids::RecordName;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Scalar kinds a schema node can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarKind {
    String,
    Number,
    Integer,
    Boolean,
    Null,
    Date,
    DateTime,
    Time,
}

impl ScalarKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarKind::String => "string",
            ScalarKind::Number => "number",
            ScalarKind::Integer => "integer",
            ScalarKind::Boolean => "boolean",
            ScalarKind::Null => "null",
            ScalarKind::Date => "date",
            ScalarKind::DateTime => "date-time",
            ScalarKind::Time => "time",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved type of one schema node.
///
/// Equality is structural, except that literal sets compare regardless of
/// value order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeDescriptor {
    /// Any value; produced for `$ref`, empty nodes and unrecognized types.
    Unknown,
    Scalar { scalar: ScalarKind },
    /// Closed set of allowed string values.
    Literal { values: Vec<String> },
    /// Sequence of `items`; an untyped sequence has `Unknown` items.
    Sequence { items: Box<TypeDescriptor> },
    /// Mapping of string keys to arbitrary values.
    Mapping,
    Record(RecordDescriptor),
    /// Two or more distinct alternatives, never nested.
    Union { members: Vec<TypeDescriptor> },
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (TypeDescriptor::Unknown, TypeDescriptor::Unknown)
            | (TypeDescriptor::Mapping, TypeDescriptor::Mapping) => true,
            (TypeDescriptor::Scalar { scalar: a }, TypeDescriptor::Scalar { scalar: b }) => a == b,
            (TypeDescriptor::Literal { values: a }, TypeDescriptor::Literal { values: b }) => {
                a.iter().all(|value| b.contains(value)) && b.iter().all(|value| a.contains(value))
            }
            (TypeDescriptor::Sequence { items: a }, TypeDescriptor::Sequence { items: b }) => a == b,
            (TypeDescriptor::Record(a), TypeDescriptor::Record(b)) => a == b,
            (TypeDescriptor::Union { members: a }, TypeDescriptor::Union { members: b }) => a == b,
            _ => false,
        }
    }
}

impl Eq for TypeDescriptor {}

impl TypeDescriptor {
    pub fn scalar(kind: ScalarKind) -> Self {
        TypeDescriptor::Scalar { scalar: kind }
    }

    pub fn string() -> Self {
        Self::scalar(ScalarKind::String)
    }

    pub fn null() -> Self {
        Self::scalar(ScalarKind::Null)
    }

    /// Closed set of string values. Repeated values keep their first position.
    pub fn literal<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for value in values.into_iter().map(Into::into) {
            if !unique.contains(&value) {
                unique.push(value);
            }
        }
        TypeDescriptor::Literal { values: unique }
    }

    pub fn sequence_of(items: TypeDescriptor) -> Self {
        TypeDescriptor::Sequence {
            items: Box::new(items),
        }
    }

    pub fn untyped_sequence() -> Self {
        Self::sequence_of(TypeDescriptor::Unknown)
    }

    /// Builds a union from alternatives.
    ///
    /// Member unions are flattened, duplicates dropped keeping the first
    /// occurrence. A single remaining alternative is returned as is; no
    /// alternatives at all resolve to `Unknown`.
    pub fn union_of<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = TypeDescriptor>,
    {
        let mut members: Vec<TypeDescriptor> = Vec::new();
        for alternative in alternatives {
            let flattened = match alternative {
                TypeDescriptor::Union { members } => members,
                other => vec![other],
            };
            for member in flattened {
                if !members.contains(&member) {
                    members.push(member);
                }
            }
        }
        match members.len() {
            0 => TypeDescriptor::Unknown,
            1 => members.remove(0),
            _ => TypeDescriptor::Union { members },
        }
    }

    /// `self | null`.
    pub fn nullable(self) -> Self {
        Self::union_of([self, Self::null()])
    }

    /// Whether `null` is an accepted value.
    pub fn accepts_null(&self) -> bool {
        match self {
            TypeDescriptor::Unknown => true,
            TypeDescriptor::Scalar { scalar } => *scalar == ScalarKind::Null,
            TypeDescriptor::Union { members } => members.iter().any(Self::accepts_null),
            _ => false,
        }
    }

    /// The alternatives other than `null`, collapsed by the union rule.
    pub fn without_null(&self) -> TypeDescriptor {
        match self {
            TypeDescriptor::Union { members } => Self::union_of(
                members
                    .iter()
                    .filter(|member| **member != Self::null())
                    .cloned(),
            ),
            other => other.clone(),
        }
    }

    pub fn as_record(&self) -> Option<&RecordDescriptor> {
        match self {
            TypeDescriptor::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Every record reachable from this descriptor, nested records before
    /// the records that contain them.
    pub fn records(&self) -> Vec<&RecordDescriptor> {
        let mut out = Vec::new();
        self.collect_records(&mut out);
        out
    }

    fn collect_records<'a>(&'a self, out: &mut Vec<&'a RecordDescriptor>) {
        match self {
            TypeDescriptor::Record(record) => {
                for field in &record.fields {
                    field.ty.collect_records(out);
                }
                out.push(record);
            }
            TypeDescriptor::Sequence { items } => items.collect_records(out),
            TypeDescriptor::Union { members } => {
                for member in members {
                    member.collect_records(out);
                }
            }
            TypeDescriptor::Unknown
            | TypeDescriptor::Scalar { .. }
            | TypeDescriptor::Literal { .. }
            | TypeDescriptor::Mapping => {}
        }
    }
}

impl From<RecordDescriptor> for TypeDescriptor {
    fn from(record: RecordDescriptor) -> Self {
        TypeDescriptor::Record(record)
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Unknown => f.write_str("any"),
            TypeDescriptor::Scalar { scalar } => write!(f, "{}", scalar),
            TypeDescriptor::Literal { values } => {
                let rendered = values
                    .iter()
                    .map(|value| Value::String(value.clone()).to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "literal[{}]", rendered)
            }
            TypeDescriptor::Sequence { items } => write!(f, "array<{}>", items),
            TypeDescriptor::Mapping => f.write_str("map<string, any>"),
            TypeDescriptor::Record(record) => write!(f, "{}", record.name),
            TypeDescriptor::Union { members } => {
                let rendered = members
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" | ");
                f.write_str(&rendered)
            }
        }
    }
}

/// A named record built from an object-shaped schema node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDescriptor {
    pub name: RecordName,
    /// Fields in source property order.
    pub fields: Vec<FieldDescriptor>,
}

impl RecordDescriptor {
    pub fn new(name: RecordName, fields: Vec<FieldDescriptor>) -> Self {
        Self { name, fields }
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|field| field.required)
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|field| field.name.as_str()).collect()
    }
}

/// One property of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeDescriptor,
    pub required: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl FieldDescriptor {
    pub fn required(name: impl Into<String>, ty: TypeDescriptor, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty,
            required: true,
            description: description.into(),
        }
    }

    /// An optional field; its type becomes `ty | null`.
    pub fn optional(name: impl Into<String>, ty: TypeDescriptor, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.nullable(),
            required: false,
            description: description.into(),
        }
    }

    /// Value assumed when the field is omitted; required fields have none.
    pub fn default_value(&self) -> Option<Value> {
        (!self.required).then_some(Value::Null)
    }
}
