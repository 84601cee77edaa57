//! Fixture: a small social graph.
//!
//! Validates: ABox nodes with domain classes, object properties drawn as
//! edges, literal and annotation folding, a relational blank node promoted
//! through its own triples and an empty blank node folded as a value.

/// People and organisations in the data graph.
pub const PEOPLE: &str = r#"
@prefix rdf:  <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix owl:  <http://www.w3.org/2002/07/owl#> .
@prefix xsd:  <http://www.w3.org/2001/XMLSchema#> .
@prefix ex:   <http://example.org/people/> .

<urn:vg:data> {
    ex:alice
        a               owl:NamedIndividual, ex:Person ;
        rdfs:label      "Alice"@en ;
        ex:age          "34"^^xsd:integer ;
        ex:knows        ex:bob, ex:carol ;
        ex:worksFor     ex:acme ;
        ex:address      [ ex:city "Lyon" ; ex:country ex:france ] ;
        ex:tag          [] ;
        ex:homepage     <http://alice.example.org/> .

    ex:bob
        a               ex:Person ;
        rdfs:label      "Bob" ;
        ex:knows        ex:alice ;
        ex:worksFor     ex:acme .

    ex:acme
        a               ex:Organisation ;
        rdfs:label      "ACME" ;
        ex:founded      "1999"^^xsd:gYear .
}
"#;
