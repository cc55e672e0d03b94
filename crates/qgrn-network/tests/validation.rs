//! Validation behaviour of graph construction.

use proptest::prelude::*;
use qgrn_network::{Gene, NetworkError, RegulatoryEdge, RegulatoryGraph, Sign};

#[test]
fn edge_to_unknown_gene_is_rejected() {
    let err = RegulatoryGraph::new(
        vec![Gene::new("A", 1.0), Gene::new("B", 0.0)],
        vec![RegulatoryEdge::activating("A", "C")],
    )
    .unwrap_err();

    assert_eq!(
        err,
        NetworkError::UnknownEdgeEndpoint {
            source_gene: "A".into(),
            target_gene: "C".into(),
            missing: "C".into(),
        }
    );
    assert!(err.to_string().contains("'C'"));
}

#[test]
fn duplicate_gene_is_rejected() {
    let err = RegulatoryGraph::builder()
        .gene("A", 0.1)
        .gene("A", 0.2)
        .build()
        .unwrap_err();
    assert_eq!(err, NetworkError::DuplicateGene { name: "A".into() });
}

#[test]
fn empty_gene_name_is_rejected() {
    let err = RegulatoryGraph::builder().gene("", 0.1).build().unwrap_err();
    assert_eq!(err, NetworkError::EmptyGeneName { position: 0 });
}

#[test]
fn initial_probability_must_be_in_unit_interval() {
    for bad in [-0.1, 1.5, f64::NAN, f64::INFINITY] {
        let err = RegulatoryGraph::builder().gene("A", bad).build().unwrap_err();
        assert!(
            matches!(err, NetworkError::InvalidInitialProbability { ref gene, .. } if gene == "A"),
            "{bad}: {err}"
        );
    }
}

#[test]
fn negative_or_non_finite_weight_is_rejected() {
    for bad in [-1.0, f64::NAN] {
        let err = RegulatoryGraph::builder()
            .gene("A", 0.5)
            .gene("B", 0.5)
            .edge("A", "B", Sign::Activating, bad)
            .build()
            .unwrap_err();
        assert!(matches!(err, NetworkError::InvalidWeight { .. }), "{err}");
    }
}

#[test]
fn duplicate_edge_is_rejected_even_with_other_sign() {
    let err = RegulatoryGraph::builder()
        .gene("A", 0.5)
        .gene("B", 0.5)
        .activates("A", "B")
        .represses("A", "B")
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        NetworkError::DuplicateEdge {
            source_gene: "A".into(),
            target_gene: "B".into(),
        }
    );
}

#[test]
fn opposite_directions_are_distinct_edges() {
    let graph = RegulatoryGraph::builder()
        .gene("A", 0.5)
        .gene("B", 0.5)
        .activates("A", "B")
        .represses("B", "A")
        .build()
        .unwrap();
    assert_eq!(graph.num_edges(), 2);
}

#[test]
fn zero_weight_is_allowed() {
    let graph = RegulatoryGraph::builder()
        .gene("A", 0.5)
        .gene("B", 0.5)
        .edge("A", "B", Sign::Repressing, 0.0)
        .build()
        .unwrap();
    assert_eq!(graph.edges()[0].weight, 0.0);
}

#[test]
fn empty_graph_is_valid() {
    let graph = RegulatoryGraph::new(vec![], vec![]).unwrap();
    assert!(graph.is_empty());
    assert!(!graph.has_cycle());
}

proptest! {
    #[test]
    fn genes_keep_insertion_order(probs in prop::collection::vec(0.0f64..=1.0, 1..12)) {
        let genes: Vec<Gene> = probs
            .iter()
            .enumerate()
            .map(|(i, &p)| Gene::new(format!("g{i}"), p))
            .collect();
        let graph = RegulatoryGraph::new(genes, vec![]).unwrap();

        prop_assert_eq!(graph.num_genes(), probs.len());
        for (i, gene) in graph.genes().iter().enumerate() {
            let name = format!("g{i}");
            prop_assert_eq!(gene.name(), name.as_str());
            prop_assert_eq!(graph.index_of(gene.name()), Some(i));
            prop_assert_eq!(graph.ordering().get(i), Some(gene.name()));
        }
    }
}
