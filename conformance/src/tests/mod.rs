//! Conformance fixtures.

pub mod fixtures;
