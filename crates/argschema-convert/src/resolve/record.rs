//! Record builder: named records from flat property sets.

use super::Resolver;
use crate::description::build_field_description;
use crate::naming::field_context;
use argschema_core::{ContextName, FieldDescriptor, RecordDescriptor, RecordName};
use serde_json::{Map, Value};

/// Ordered property schemas borrowed from one or more schema nodes.
#[derive(Debug, Default)]
pub(crate) struct PropertySet<'s> {
    entries: Vec<(&'s str, &'s Value)>,
}

impl<'s> PropertySet<'s> {
    pub(crate) fn from_map(properties: &'s Map<String, Value>) -> Self {
        Self {
            entries: properties
                .iter()
                .map(|(name, schema)| (name.as_str(), schema))
                .collect(),
        }
    }

    /// Inserts or replaces; a replaced property keeps its original position.
    pub(crate) fn overwrite(&mut self, name: &'s str, schema: &'s Value) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = schema,
            None => self.entries.push((name, schema)),
        }
    }

    /// Inserts only when the name is not present yet.
    pub(crate) fn insert_absent(&mut self, name: &'s str, schema: &'s Value) {
        if !self.entries.iter().any(|(existing, _)| *existing == name) {
            self.entries.push((name, schema));
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// String entries of a `required` list; anything else is ignored.
pub(crate) fn required_names(required: Option<&Value>) -> Vec<&str> {
    required
        .and_then(Value::as_array)
        .map(|names| names.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default()
}

impl Resolver<'_> {
    /// Builds a uniquely named record from properties and required names.
    ///
    /// Fields are resolved one level below `depth`. Required names that are
    /// not properties are ignored.
    pub(crate) fn build_record(
        &self,
        context: &ContextName,
        properties: &PropertySet<'_>,
        required: &[&str],
        depth: usize,
    ) -> RecordDescriptor {
        let fields = properties
            .entries
            .iter()
            .map(|(name, schema)| {
                let ty = self.resolve(schema, &field_context(name), depth + 1);
                let description = build_field_description(schema);
                if required.contains(name) {
                    FieldDescriptor::required(*name, ty, description)
                } else {
                    FieldDescriptor::optional(*name, ty, description)
                }
            })
            .collect();

        let name = RecordName::generated(context, &self.suffixes.next_suffix());
        let record = RecordDescriptor::new(name, fields);
        tracing::debug!(
            record = %record.name,
            fields = record.fields.len(),
            required = record.required_fields().count(),
            "Built record"
        );
        record
    }
}
