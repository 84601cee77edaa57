//! Fixture: a hub with a wide fan-out.
//!
//! Validates: parallel-edge spacing between one pair of nodes, connectivity
//! counts, and the collapse leaf rule on a node with one rare relation and
//! many common ones.

/// A hub node, its leaves and one bridging neighbour.
pub const HUB: &str = r#"
@prefix ex: <http://example.org/hub/> .

<urn:vg:data> {
    ex:hub
        ex:owner    ex:root ;
        ex:member   ex:m1, ex:m2, ex:m3, ex:bridge ;
        ex:partOf   ex:root ;
        ex:sponsor  ex:root .

    ex:bridge
        ex:member   ex:outside .

    ex:m1
        ex:member   ex:hub .

    ex:m2
        ex:member   ex:m3 .
}
"#;
