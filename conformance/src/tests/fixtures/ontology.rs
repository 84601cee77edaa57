//! Fixture: a schema-level graph.
//!
//! Validates: TBox classification from the whitelist, TBox propagation onto
//! untyped targets and typed restriction blank nodes, and late `rdf:type`
//! declarations picked up by the pre-scan.

/// Classes and properties of a tiny vocabulary.
pub const ONTOLOGY: &str = r#"
@prefix rdf:  <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix owl:  <http://www.w3.org/2002/07/owl#> .
@prefix ex:   <http://example.org/vocab/> .

<urn:vg:data> {
    ex:Agent
        rdfs:label      "Agent" ;
        rdfs:subClassOf ex:Thing ;
        a               owl:Class .

    ex:Person
        a               owl:Class ;
        rdfs:label      "Person" ;
        rdfs:subClassOf ex:Agent ;
        rdfs:subClassOf [
            a owl:Restriction ;
            owl:onProperty ex:knows ;
            owl:someValuesFrom ex:Person
        ] .

    ex:knows
        a               owl:ObjectProperty ;
        rdfs:domain     ex:Person ;
        rdfs:range      ex:Person .

    ex:age
        a               owl:DatatypeProperty ;
        rdfs:domain     ex:Person ;
        rdfs:range      <http://www.w3.org/2001/XMLSchema#integer> .
}
"#;
