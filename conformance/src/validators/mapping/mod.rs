//! Mapping validators: determinism, structure, inferred isolation,
//! classification and SHACL findings.

pub mod classification;
pub mod determinism;
pub mod inferred;
pub mod structure;
pub mod validation;
