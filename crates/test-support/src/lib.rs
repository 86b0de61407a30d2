//! Shared fixtures for argschema tests.

pub mod common;
pub mod support;

pub use common::*;
