//! Validators that map each fixture and check a family of properties.

pub mod mapping;
pub mod view;

use anyhow::{Context, Result};
use quad_diagram::loader::{load_str, DocumentFormat};
use quad_diagram::{map_quads_to_diagram, Diagram, MapOptions, PrefixRegistry, Quad};

use crate::tests::fixtures::Fixture;

/// Parses a fixture's TriG source.
///
/// # Errors
///
/// Returns an error if the fixture does not parse.
pub fn load(fixture: &Fixture) -> Result<Vec<Quad>> {
    load_str(fixture.trig, DocumentFormat::TriG, None)
        .with_context(|| format!("Failed to parse fixture '{}'", fixture.name))
}

/// Maps `quads` with the fixture's synopsis and the standard prefixes.
#[must_use]
pub fn map_fixture(fixture: &Fixture, quads: &[Quad]) -> Diagram {
    let properties = fixture.synopsis();
    let registry = PrefixRegistry::with_standard_prefixes();
    let options = MapOptions {
        available_properties: &properties,
        registry: Some(&registry),
        ..MapOptions::default()
    };
    map_quads_to_diagram(quads, &options)
}

/// Validator id in the `area/check/fixture` form.
pub(crate) fn id(check: &str, fixture: &Fixture) -> String {
    format!("{check}/{}", fixture.name)
}
