//! Textbook regulatory motifs.

use qgrn::{GrnResult, NetworkDescription, RegulatoryGraph};

/// Two genes repressing each other. `lacI` starts on.
pub fn toggle_switch(weight: f64) -> GrnResult<RegulatoryGraph> {
    Ok(RegulatoryGraph::builder()
        .gene("lacI", 1.0)
        .gene("tetR", 0.0)
        .edge("lacI", "tetR", qgrn::Sign::Repressing, weight)
        .edge("tetR", "lacI", qgrn::Sign::Repressing, weight)
        .build()?)
}

/// Three genes in a repression ring, starting from a graded state.
pub fn repressilator(weight: f64) -> GrnResult<RegulatoryGraph> {
    Ok(RegulatoryGraph::builder()
        .gene("lacI", 1.0)
        .gene("tetR", 0.6)
        .gene("cI", 0.3)
        .edge("lacI", "tetR", qgrn::Sign::Repressing, weight)
        .edge("tetR", "cI", qgrn::Sign::Repressing, weight)
        .edge("cI", "lacI", qgrn::Sign::Repressing, weight)
        .build()?)
}

/// Coherent type-1 feed-forward loop: X → Y, X → Z, Y → Z.
pub fn feed_forward_loop() -> GrnResult<RegulatoryGraph> {
    NetworkDescription::from_yaml(
        r"
genes:
  - { name: X, initial: 0.9 }
  - { name: Y, initial: 0.0 }
  - { name: Z, initial: 0.0 }
edges:
  - { source: X, target: Y, sign: activating, weight: 0.6 }
  - { source: X, target: Z, sign: activating, weight: 0.3 }
  - { source: Y, target: Z, sign: activating, weight: 0.6 }
",
    )?
    .build()
}

/// Look a motif up by name.
pub fn by_name(name: &str) -> Option<GrnResult<RegulatoryGraph>> {
    match name {
        "toggle" | "toggle-switch" => Some(toggle_switch(1.0)),
        "repressilator" => Some(repressilator(1.0)),
        "ffl" | "feed-forward" => Some(feed_forward_loop()),
        _ => None,
    }
}
