//! Record-name suffix semantics and enforced constructors.
//!
//! Every generated record name ends in a short hex suffix so that two records
//! built from structurally identical schemas never share an identity. The
//! suffix source is injected into the converter; production code draws from
//! random v4 UUIDs, tests pin exact names with a sequence.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Number of hex characters in a record suffix.
pub const SUFFIX_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdConstruction {
    UuidV4,
    MonotonicCounter,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordSuffix(String);

impl RecordSuffix {
    pub fn from_uuid(id: uuid::Uuid) -> Self {
        let mut hex = id.simple().to_string();
        hex.truncate(SUFFIX_LEN);
        Self(hex)
    }

    pub fn from_counter(counter: u64) -> Self {
        Self(format!("{:08x}", counter & 0xffff_ffff))
    }

    /// Accepts exactly eight lowercase hex characters.
    pub fn parse(raw: &str) -> Option<Self> {
        let valid = raw.len() == SUFFIX_LEN
            && raw
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c));
        valid.then(|| Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RecordSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Source of record-name suffixes.
///
/// Implementations must be safe to call from several conversions running on
/// different threads at once.
pub trait SuffixSource: Send + Sync {
    fn next_suffix(&self) -> RecordSuffix;

    fn construction(&self) -> IdConstruction;
}

/// Suffixes cut from random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSuffixSource;

impl SuffixSource for RandomSuffixSource {
    fn next_suffix(&self) -> RecordSuffix {
        RecordSuffix::from_uuid(uuid::Uuid::new_v4())
    }

    fn construction(&self) -> IdConstruction {
        IdConstruction::UuidV4
    }
}

/// Deterministic suffixes `00000000`, `00000001`, ...
#[derive(Debug, Default)]
pub struct SequenceSuffixSource {
    next: AtomicU64,
}

impl SequenceSuffixSource {
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    pub fn starting_at(start: u64) -> Self {
        Self {
            next: AtomicU64::new(start),
        }
    }
}

impl SuffixSource for SequenceSuffixSource {
    fn next_suffix(&self) -> RecordSuffix {
        RecordSuffix::from_counter(self.next.fetch_add(1, Ordering::Relaxed))
    }

    fn construction(&self) -> IdConstruction {
        IdConstruction::MonotonicCounter
    }
}

impl<T: SuffixSource + ?Sized> SuffixSource for Arc<T> {
    fn next_suffix(&self) -> RecordSuffix {
        (**self).next_suffix()
    }

    fn construction(&self) -> IdConstruction {
        (**self).construction()
    }
}

impl<T: SuffixSource + ?Sized> SuffixSource for Box<T> {
    fn next_suffix(&self) -> RecordSuffix {
        (**self).next_suffix()
    }

    fn construction(&self) -> IdConstruction {
        (**self).construction()
    }
}
