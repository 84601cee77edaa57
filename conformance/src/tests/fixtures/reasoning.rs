//! Fixture: data plus reasoner output.
//!
//! Validates: inferred facts fold onto existing nodes only, inferred
//! subjects never become nodes, SHACL validation results attach to their
//! focus nodes, and graphs that are neither data nor inferred are ignored.

/// Data, inferred and unrelated graphs over the same resources.
pub const REASONING: &str = r#"
@prefix rdf:  <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix owl:  <http://www.w3.org/2002/07/owl#> .
@prefix xsd:  <http://www.w3.org/2001/XMLSchema#> .
@prefix sh:   <http://www.w3.org/ns/shacl#> .
@prefix ex:   <http://example.org/reasoning/> .

<urn:vg:data> {
    ex:dana
        a           ex:Employee ;
        rdfs:label  "Dana" ;
        ex:manages  ex:eli ;
        ex:salary   "-10"^^xsd:integer .

    ex:eli
        a           ex:Employee ;
        rdfs:label  "Eli" .
}

<urn:vg:inferred> {
    ex:dana a ex:Person ;
        ex:colleagueOf ex:eli .
    ex:eli ex:managedBy ex:dana .
    ex:ghost ex:manages ex:dana .

    ex:result1
        a                   sh:ValidationResult ;
        sh:focusNode        ex:dana ;
        sh:resultSeverity   sh:Violation ;
        sh:resultMessage    "salary must be non-negative" .

    ex:result2
        a                   sh:ValidationResult ;
        sh:focusNode        ex:eli ;
        sh:resultSeverity   sh:Warning ;
        sh:resultMessage    "no salary recorded" .

    ex:result3
        a                   sh:ValidationResult ;
        sh:focusNode        ex:eli ;
        sh:resultSeverity   sh:Info ;
        sh:resultMessage    "informational" .
}

<urn:vg:ontologies> {
    ex:ignored rdfs:label "never mapped" .
}
"#;
