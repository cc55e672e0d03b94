//! Encoder properties checked against the exact simulator.

use proptest::prelude::*;
use qgrn_adapter_sim::SimulatorBackend;
use qgrn_encode::{CircuitEncoder, EdgeEncoding, EdgeOrder, EncodeError, EncodingConfig};
use qgrn_hal::{Backend, Distribution};
use qgrn_network::{Gene, RegulatoryEdge, RegulatoryGraph, Sign};

fn marginal(distribution: &Distribution, position: usize) -> f64 {
    distribution
        .iter()
        .filter(|(bits, _)| bits.as_bytes()[position] == b'1')
        .map(|(_, p)| p)
        .sum()
}

fn exact(graph: &RegulatoryGraph, config: EncodingConfig) -> Distribution {
    let encoded = CircuitEncoder::new(config).encode(graph).unwrap();
    SimulatorBackend::new()
        .probabilities(&encoded.circuit, None)
        .unwrap()
}

/// Random graph: `n` genes, a subset of ordered pairs as edges.
fn arb_graph() -> impl Strategy<Value = (Vec<Gene>, Vec<RegulatoryEdge>)> {
    (1usize..6).prop_flat_map(|n| {
        let genes = proptest::collection::vec(0.0f64..=1.0, n);
        let edges = proptest::collection::vec(
            (0..n, 0..n, any::<bool>(), 0.0f64..2.0),
            0..(n * 2),
        );
        (genes, edges).prop_map(|(initials, raw)| {
            let genes: Vec<Gene> = initials
                .iter()
                .enumerate()
                .map(|(i, &p)| Gene::new(format!("g{i}"), p))
                .collect();
            let mut seen = std::collections::BTreeSet::new();
            let edges = raw
                .into_iter()
                .filter(|(s, t, _, _)| s != t && seen.insert((*s, *t)))
                .map(|(s, t, activating, w)| {
                    let sign = if activating {
                        Sign::Activating
                    } else {
                        Sign::Repressing
                    };
                    RegulatoryEdge::new(format!("g{s}"), format!("g{t}"), sign, w)
                })
                .collect();
            (genes, edges)
        })
    })
}

proptest! {
    #[test]
    fn one_qubit_per_gene((genes, edges) in arb_graph(), steps in 1u32..4) {
        let graph = RegulatoryGraph::new(genes, edges).unwrap();
        let encoder = CircuitEncoder::new(EncodingConfig::default().with_steps(steps));
        let encoded = encoder.encode(&graph).unwrap();
        prop_assert_eq!(encoded.circuit.num_qubits(), graph.num_genes());
        prop_assert_eq!(encoded.circuit.num_clbits(), graph.num_genes());
        prop_assert_eq!(encoded.ordering.names(), graph.ordering().names());
    }

    #[test]
    fn encoding_is_deterministic((genes, edges) in arb_graph()) {
        let graph = RegulatoryGraph::new(genes, edges).unwrap();
        let encoder = CircuitEncoder::default();
        prop_assert_eq!(encoder.encode(&graph).unwrap(), encoder.encode(&graph).unwrap());
    }

    #[test]
    fn repression_never_raises_target(
        (genes, edges) in arb_graph(),
        pick in any::<prop::sample::Index>(),
    ) {
        prop_assume!(!edges.is_empty());
        let target = edges[pick.index(edges.len())].clone();
        // Feedback through the target's own outputs can reverse the effect,
        // so the target is kept a sink.
        let edges: Vec<_> = edges
            .into_iter()
            .filter(|e| e.source != target.target)
            .collect();
        let i = edges
            .iter()
            .position(|e| e.source == target.source && e.target == target.target)
            .unwrap();
        let mut activating = edges.clone();
        activating[i].sign = Sign::Activating;
        let mut repressing = edges;
        repressing[i].sign = Sign::Repressing;
        let target = activating[i].target.clone();

        let up = RegulatoryGraph::new(genes.clone(), activating).unwrap();
        let down = RegulatoryGraph::new(genes, repressing).unwrap();
        let position = up.index_of(&target).unwrap();

        let up = marginal(&exact(&up, EncodingConfig::default()), position);
        let down = marginal(&exact(&down, EncodingConfig::default()), position);
        prop_assert!(down <= up + 1e-9, "repressing {down} > activating {up}");
    }

    #[test]
    fn source_major_ignores_gene_order((genes, edges) in arb_graph()) {
        let mut reversed_genes = genes.clone();
        reversed_genes.reverse();
        let forward = RegulatoryGraph::new(genes, edges.clone()).unwrap();
        let reversed = RegulatoryGraph::new(reversed_genes, edges).unwrap();

        let config = EncodingConfig::default().with_order(EdgeOrder::SourceMajor);
        let a = exact(&forward, config.clone());
        let b = exact(&reversed, config);
        for name in forward.ordering().names() {
            let pa = marginal(&a, forward.index_of(name).unwrap());
            let pb = marginal(&b, reversed.index_of(name).unwrap());
            prop_assert!((pa - pb).abs() < 1e-10, "{}: {} vs {}", name, pa, pb);
        }
    }
}

#[test]
fn activation_and_repression_scenario() {
    let build = |sign| {
        RegulatoryGraph::builder()
            .gene("A", 1.0)
            .gene("B", 0.0)
            .edge("A", "B", sign, 1.0)
            .build()
            .unwrap()
    };

    let on = exact(&build(Sign::Activating), EncodingConfig::default());
    assert!(marginal(&on, 1) > 0.5);

    let off = exact(&build(Sign::Repressing), EncodingConfig::default());
    assert!(marginal(&off, 1) < 0.5);
}

#[test]
fn edge_free_graph_keeps_priors() {
    let graph = RegulatoryGraph::builder()
        .gene("A", 0.2)
        .gene("B", 0.5)
        .gene("C", 0.9)
        .build()
        .unwrap();
    let distribution = exact(&graph, EncodingConfig::default());
    for (i, p) in [0.2, 0.5, 0.9].into_iter().enumerate() {
        assert!((marginal(&distribution, i) - p).abs() < 1e-10);
    }
}

#[test]
fn permuting_genes_only_relabels() {
    let forward = RegulatoryGraph::builder()
        .gene("A", 0.7)
        .gene("B", 0.1)
        .gene("C", 0.4)
        .activates("A", "B")
        .represses("B", "C")
        .build()
        .unwrap();
    let reversed = RegulatoryGraph::builder()
        .gene("C", 0.4)
        .gene("B", 0.1)
        .gene("A", 0.7)
        .activates("A", "B")
        .represses("B", "C")
        .build()
        .unwrap();

    let a = exact(&forward, EncodingConfig::default());
    let b = exact(&reversed, EncodingConfig::default());
    for gene in ["A", "B", "C"] {
        let pa = marginal(&a, forward.index_of(gene).unwrap());
        let pb = marginal(&b, reversed.index_of(gene).unwrap());
        assert!((pa - pb).abs() < 1e-10, "{gene}: {pa} vs {pb}");
    }
}

#[test]
fn source_major_order_sorts_edges() {
    let graph = RegulatoryGraph::builder()
        .gene("A", 1.0)
        .gene("B", 0.0)
        .gene("C", 0.0)
        .activates("B", "C")
        .activates("A", "C")
        .activates("A", "B")
        .build()
        .unwrap();

    let controls = |order| {
        let encoded = CircuitEncoder::new(EncodingConfig::default().with_order(order))
            .encode(&graph)
            .unwrap();
        encoded
            .circuit
            .instructions()
            .iter()
            .filter(|inst| inst.is_channel())
            .map(|inst| (inst.qubits[0].0, inst.qubits[1].0))
            .collect::<Vec<_>>()
    };

    assert_eq!(controls(EdgeOrder::Insertion), vec![(1, 2), (0, 2), (0, 1)]);
    assert_eq!(controls(EdgeOrder::SourceMajor), vec![(0, 1), (0, 2), (1, 2)]);
}

#[test]
fn source_major_feedback_loop_ignores_gene_order() {
    let build = |names: [&str; 2]| {
        let mut builder = RegulatoryGraph::builder();
        for name in names {
            builder = builder.gene(name, if name == "A" { 1.0 } else { 0.0 });
        }
        builder
            .activates("A", "B")
            .represses("B", "A")
            .build()
            .unwrap()
    };
    let forward = build(["A", "B"]);
    let reversed = build(["B", "A"]);
    assert!(forward.has_cycle());

    let config = EncodingConfig::default().with_order(EdgeOrder::SourceMajor);
    let a = exact(&forward, config.clone());
    let b = exact(&reversed, config);
    for gene in ["A", "B"] {
        let pa = marginal(&a, forward.index_of(gene).unwrap());
        let pb = marginal(&b, reversed.index_of(gene).unwrap());
        assert!((pa - pb).abs() < 1e-10, "{gene}: {pa} vs {pb}");
    }
}

#[test]
fn cyclic_network_encodes() {
    let graph = RegulatoryGraph::builder()
        .gene("lacI", 1.0)
        .gene("tetR", 0.0)
        .gene("cI", 0.0)
        .represses("lacI", "tetR")
        .represses("tetR", "cI")
        .represses("cI", "lacI")
        .build()
        .unwrap();
    assert!(graph.has_cycle());

    let config = EncodingConfig::default().with_steps(2);
    let distribution = exact(&graph, config);
    assert!((distribution.total() - 1.0).abs() < 1e-9);
}

#[test]
fn rotation_encoding_runs_unitary() {
    let graph = RegulatoryGraph::builder()
        .gene("A", 1.0)
        .gene("B", 0.0)
        .activates("A", "B")
        .build()
        .unwrap();
    let config = EncodingConfig::default().with_encoding(EdgeEncoding::Rotation);
    let distribution = exact(&graph, config);
    // CRy(π) on a fully-on control flips the target.
    assert!((marginal(&distribution, 1) - 1.0).abs() < 1e-10);
}

#[test]
fn rotation_encoding_rejects_repression_scenario() {
    let graph = RegulatoryGraph::builder()
        .gene("A", 1.0)
        .gene("B", 0.0)
        .represses("A", "B")
        .build()
        .unwrap();
    let encoder =
        CircuitEncoder::new(EncodingConfig::default().with_encoding(EdgeEncoding::Rotation));
    let err = encoder.encode(&graph).unwrap_err();
    assert!(matches!(err, EncodeError::RepressionUnsupported { .. }));
    assert!(err.to_string().contains("A -> B"));

    // The same network under the transfer encoding lowers B.
    let distribution = exact(&graph, EncodingConfig::default());
    assert!(marginal(&distribution, 1) < 0.5);
}

#[test]
fn config_from_json_with_defaults() {
    let config: EncodingConfig =
        serde_json::from_str(r#"{"encoding": "rotation", "angle": {"gain": 1.5}}"#).unwrap();
    assert_eq!(config.encoding, EdgeEncoding::Rotation);
    assert_eq!(config.steps, 1);
    assert!(config.angle.clip);
    assert!((config.angle.gain - 1.5).abs() < f64::EPSILON);
}
