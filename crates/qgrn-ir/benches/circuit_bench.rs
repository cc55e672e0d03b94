//! Benchmarks for qgrn circuit operations
//!
//! Run with: cargo bench -p qgrn-ir

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use qgrn_ir::{Circuit, QubitId, TransferDirection};
use std::f64::consts::PI;

/// Benchmark circuit creation
fn bench_circuit_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("circuit_creation");

    for num_qubits in &[2, 5, 10, 20] {
        group.bench_with_input(
            BenchmarkId::new("with_size", num_qubits),
            num_qubits,
            |b, &n| {
                b.iter(|| Circuit::with_size(black_box("bench"), black_box(n), black_box(n)));
            },
        );
    }

    group.finish();
}

/// Benchmark a ring of regulatory transfers, the shape of a repressilator
fn bench_transfer_ring(c: &mut Criterion) {
    let mut group = c.benchmark_group("transfer_ring");

    for num_qubits in &[3, 5, 10, 20] {
        group.bench_with_input(
            BenchmarkId::new("create", num_qubits),
            num_qubits,
            |b, &n| {
                b.iter(|| {
                    let mut circuit = Circuit::with_size("ring", n, n);
                    for i in 0..n {
                        circuit.ry(PI / 2.0, QubitId(i)).unwrap();
                    }
                    for i in 0..n {
                        circuit
                            .transfer(
                                PI / 3.0,
                                TransferDirection::Relax,
                                QubitId(i),
                                QubitId((i + 1) % n),
                            )
                            .unwrap();
                    }
                    circuit.measure_all().unwrap();
                    black_box(circuit)
                });
            },
        );
    }

    group.finish();
}

/// Benchmark circuit depth calculation
fn bench_circuit_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("circuit_depth");

    for num_qubits in &[5, 10, 20] {
        let mut circuit = Circuit::with_size("bench", *num_qubits, 0);

        for _step in 0..5 {
            for i in 0..*num_qubits - 1 {
                circuit.cry(0.4, QubitId(i), QubitId(i + 1)).unwrap();
            }
            circuit.barrier_all().unwrap();
        }

        group.bench_with_input(
            BenchmarkId::new("depth", num_qubits),
            &circuit,
            |b, circuit| {
                b.iter(|| black_box(circuit.depth()));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_circuit_creation,
    bench_transfer_ring,
    bench_circuit_depth,
);

criterion_main!(benches);
