//! Strongly-typed name wrappers for generated types.
//!
//! These newtypes keep generated record names and the context names they are
//! derived from apart at compile time.

pub use argschema_id::{
    IdConstruction, RandomSuffixSource, RecordSuffix, SUFFIX_LEN, SequenceSuffixSource,
    SuffixSource,
};
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_name_type {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

define_name_type!(
    /// Base name a record is generated under (tool name or title-cased field name).
    ContextName
);
define_name_type!(
    /// Unique name of a generated record, `Generated_<context>_<suffix>`.
    RecordName
);

/// Prefix shared by every generated record name.
pub const GENERATED_PREFIX: &str = "Generated_";

impl ContextName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Context for the items of an array declared under this context.
    pub fn item(&self) -> Self {
        Self(format!("{}Item", self.0))
    }
}

impl RecordName {
    pub fn generated(context: &ContextName, suffix: &RecordSuffix) -> Self {
        Self(format!("{}{}_{}", GENERATED_PREFIX, context, suffix))
    }

    /// Splits a generated name back into its context and suffix.
    pub fn parse_generated(raw: &str) -> Option<(ContextName, RecordSuffix)> {
        let rest = raw.strip_prefix(GENERATED_PREFIX)?;
        let (context, suffix) = rest.rsplit_once('_')?;
        let suffix = RecordSuffix::parse(suffix)?;
        Some((ContextName::new(context), suffix))
    }

    pub fn context(&self) -> Option<ContextName> {
        Self::parse_generated(&self.0).map(|(context, _)| context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_names_round_trip_through_parse() {
        let context = ContextName::new("My_ToolSchema");
        let suffix = RecordSuffix::from_counter(42);
        let name = RecordName::generated(&context, &suffix);
        assert_eq!(name.as_str(), "Generated_My_ToolSchema_0000002a");

        let (parsed_context, parsed_suffix) =
            RecordName::parse_generated(name.as_str()).expect("generated name parses");
        assert_eq!(parsed_context, context);
        assert_eq!(parsed_suffix, suffix);
    }

    #[test]
    fn item_context_appends_item() {
        assert_eq!(ContextName::new("Tags").item().as_str(), "TagsItem");
        assert_eq!(ContextName::new("Tags").item().item().as_str(), "TagsItemItem");
    }

    #[test]
    fn foreign_names_do_not_parse() {
        assert!(RecordName::parse_generated("Expression").is_none());
        assert!(RecordName::parse_generated("Generated_Thing_xyz").is_none());
    }
}
