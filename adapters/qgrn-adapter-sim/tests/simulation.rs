//! End-to-end behaviour of the simulator backend.

use std::f64::consts::PI;

use proptest::prelude::*;
use qgrn_adapter_sim::SimulatorBackend;
use qgrn_hal::{Backend, HalError, NoiseProfile, RunConfig};
use qgrn_ir::{Circuit, NoiseModel, QubitId, TransferDirection};

fn activation(theta: f64, source_p: f64) -> Circuit {
    let mut circuit = Circuit::with_size("activation", 2, 2);
    circuit.ry(2.0 * source_p.sqrt().asin(), QubitId(0)).unwrap();
    circuit
        .transfer(theta, TransferDirection::Excite, QubitId(0), QubitId(1))
        .unwrap();
    circuit.measure_all().unwrap();
    circuit
}

#[test]
fn same_seed_same_counts() {
    let backend = SimulatorBackend::new();
    let circuit = activation(PI / 2.0, 0.6);
    let config = RunConfig::new(500).with_seed(1234);

    let a = backend.run(&circuit, &config).unwrap();
    let b = backend.run(&circuit, &config).unwrap();
    assert_eq!(a.counts, b.counts);
    assert_eq!(a.counts.total_shots(), 500);
}

#[test]
fn trajectories_agree_with_exact_distribution() {
    let backend = SimulatorBackend::new();
    let circuit = activation(PI / 2.0, 0.6);

    let exact = backend.probabilities(&circuit, None).unwrap();
    // Source on with 0.6, transfer fires with sin²(π/4) = 0.5.
    assert!((exact.get("11") - 0.3).abs() < 1e-10);
    assert!((exact.get("10") - 0.3).abs() < 1e-10);
    assert!((exact.get("00") - 0.4).abs() < 1e-10);
    assert_eq!(exact.get("01"), 0.0);

    let shots = 4000;
    let sampled = backend
        .run(&circuit, &RunConfig::new(shots).with_seed(9))
        .unwrap()
        .counts
        .probabilities();
    for bitstring in ["00", "10", "11"] {
        let diff = (sampled.get(bitstring) - exact.get(bitstring)).abs();
        assert!(diff < 0.05, "{bitstring}: {diff}");
    }
}

#[test]
fn noise_changes_outcomes_and_stays_reproducible() {
    let backend = SimulatorBackend::new();
    let mut circuit = Circuit::with_size("idle", 1, 1);
    circuit.x(QubitId(0)).unwrap();
    circuit.measure_all().unwrap();

    let noise = NoiseProfile::new().with_channel(NoiseModel::AmplitudeDamping { gamma: 0.5 });
    let config = RunConfig::new(2000).with_seed(3).with_noise(noise.clone());

    let result = backend.run(&circuit, &config).unwrap();
    let p1 = result.counts.probabilities().get("1");
    assert!((p1 - 0.5).abs() < 0.05, "p1 = {p1}");
    assert_eq!(backend.run(&circuit, &config).unwrap().counts, result.counts);

    let exact = backend.probabilities(&circuit, Some(&noise)).unwrap();
    assert!((exact.get("1") - 0.5).abs() < 1e-10);
}

#[test]
fn readout_error_flips_sampled_bits() {
    let backend = SimulatorBackend::new();
    let mut circuit = Circuit::with_size("zero", 1, 1);
    circuit.measure_all().unwrap();

    let noise = NoiseProfile::new().with_readout_error(1.0);
    let result = backend
        .run(&circuit, &RunConfig::new(50).with_seed(0).with_noise(noise))
        .unwrap();
    assert_eq!(result.counts.get("1"), 50);
}

#[test]
fn invalid_noise_is_rejected_before_running() {
    let backend = SimulatorBackend::new();
    let circuit = activation(1.0, 0.5);
    let noise = NoiseProfile::new().with_gate_error("ctransfer", 2.0);
    let err = backend
        .run(&circuit, &RunConfig::new(10).with_noise(noise))
        .unwrap_err();
    assert!(matches!(err, HalError::InvalidNoise(_)));
    assert!(!err.is_execution_failure());
}

#[test]
fn gate_after_measurement_is_rejected() {
    let backend = SimulatorBackend::new();
    let mut circuit = Circuit::with_size("late", 1, 1);
    circuit.measure_all().unwrap();
    circuit.h(QubitId(0)).unwrap();
    assert!(matches!(
        backend.run(&circuit, &RunConfig::new(10)),
        Err(HalError::InvalidCircuit(_))
    ));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn exact_distribution_sums_to_one(
        angles in prop::collection::vec(0.0f64..PI, 3),
        theta in 0.0f64..PI,
        excite in any::<bool>(),
        damping in 0.0f64..0.3,
    ) {
        let direction = if excite { TransferDirection::Excite } else { TransferDirection::Relax };
        let mut circuit = Circuit::with_size("prop", 3, 3);
        for (i, &a) in angles.iter().enumerate() {
            circuit.ry(a, QubitId(i as u32)).unwrap();
        }
        circuit.transfer(theta, direction, QubitId(0), QubitId(1)).unwrap();
        circuit.transfer(theta, direction, QubitId(1), QubitId(2)).unwrap();
        circuit.decay(theta / 2.0, QubitId(2)).unwrap();
        circuit.measure_all().unwrap();

        let noise = NoiseProfile::new()
            .with_channel(NoiseModel::AmplitudeDamping { gamma: damping });
        let dist = SimulatorBackend::new().probabilities(&circuit, Some(&noise)).unwrap();

        prop_assert!((dist.total() - 1.0).abs() < 1e-9);
        for (_, p) in dist.iter() {
            prop_assert!((-1e-12..=1.0 + 1e-12).contains(&p));
        }
    }
}
