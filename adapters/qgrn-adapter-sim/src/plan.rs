//! Flattening a circuit into the operations a simulation engine applies.

use qgrn_hal::{Distribution, HalError, HalResult, NoiseProfile};
use qgrn_ir::{Circuit, InstructionKind, KrausSet, StandardGate};
use rand::Rng;

/// What an operation does to the state.
#[derive(Debug, Clone)]
pub(crate) enum OpKind {
    /// A unitary gate.
    Unitary(StandardGate),
    /// A non-unitary channel.
    Channel(KrausSet),
}

/// One state-changing operation.
#[derive(Debug, Clone)]
pub(crate) struct Op {
    pub name: String,
    pub kind: OpKind,
    pub qubits: Vec<usize>,
}

/// A validated, flattened circuit.
///
/// Barriers are dropped and measurements become a clbit → qubit map, which
/// is sound because nothing may touch a qubit after it is measured.
#[derive(Debug, Clone)]
pub(crate) struct ExecutionPlan {
    pub num_qubits: usize,
    pub ops: Vec<Op>,
    /// `clbit_sources[c]` is the qubit measured into classical bit `c`.
    clbit_sources: Vec<Option<usize>>,
}

impl ExecutionPlan {
    /// Flatten `circuit`, rejecting operations after measurement and
    /// circuits that measure nothing.
    pub fn from_circuit(circuit: &Circuit) -> HalResult<Self> {
        let num_qubits = circuit.num_qubits();
        let mut measured = vec![false; num_qubits];
        let mut clbit_sources = vec![None; circuit.num_clbits()];
        let mut ops = Vec::with_capacity(circuit.len());

        for inst in circuit.instructions() {
            let qubits: Vec<usize> = inst.qubits.iter().map(|q| q.index()).collect();
            let kind = match &inst.kind {
                InstructionKind::Barrier => continue,
                InstructionKind::Measure => {
                    for (&q, c) in qubits.iter().zip(&inst.clbits) {
                        measured[q] = true;
                        clbit_sources[c.index()] = Some(q);
                    }
                    continue;
                }
                InstructionKind::Gate(gate) => OpKind::Unitary(gate.kind),
                InstructionKind::Transfer(transfer) => OpKind::Channel(transfer.kraus()),
                InstructionKind::Decay(decay) => OpKind::Channel(decay.kraus()),
            };

            if let Some(&q) = qubits.iter().find(|&&q| measured[q]) {
                return Err(HalError::InvalidCircuit(format!(
                    "operation '{}' acts on q{q} after it was measured",
                    inst.name()
                )));
            }
            ops.push(Op {
                name: inst.name().to_string(),
                kind,
                qubits,
            });
        }

        if clbit_sources.iter().all(Option::is_none) {
            return Err(HalError::InvalidCircuit(format!(
                "circuit '{}' has no measurements",
                circuit.name()
            )));
        }

        Ok(Self {
            num_qubits,
            ops,
            clbit_sources,
        })
    }

    /// Whether any operation is a channel.
    pub fn has_channels(&self) -> bool {
        self.ops.iter().any(|op| matches!(op.kind, OpKind::Channel(_)))
    }

    /// Noise channels to apply on each operand after each operation.
    pub fn noise_channels(&self, noise: Option<&NoiseProfile>) -> Vec<Vec<KrausSet>> {
        self.ops
            .iter()
            .map(|op| {
                noise
                    .map(|n| n.channels_after(&op.name).iter().map(|m| m.kraus()).collect())
                    .unwrap_or_default()
            })
            .collect()
    }

    /// Whether shots must be simulated one trajectory at a time.
    pub fn needs_trajectories(&self, noise: Option<&NoiseProfile>) -> bool {
        self.has_channels() || self.noise_channels(noise).iter().any(|c| !c.is_empty())
    }

    /// Classical bits for a basis outcome, before readout error.
    pub fn clbits_of(&self, outcome: usize) -> Vec<bool> {
        self.clbit_sources
            .iter()
            .map(|source| source.is_some_and(|q| (outcome >> q) & 1 == 1))
            .collect()
    }

    /// Flip each measured bit with its qubit's readout error.
    pub fn apply_readout<R: Rng>(&self, bits: &mut [bool], noise: &NoiseProfile, rng: &mut R) {
        for (bit, source) in bits.iter_mut().zip(&self.clbit_sources) {
            if let Some(q) = source {
                let p = noise.readout_error_for(*q);
                if p > 0.0 && rng.r#gen::<f64>() < p {
                    *bit = !*bit;
                }
            }
        }
    }

    /// Exact distribution over classical bitstrings from basis probabilities.
    pub fn distribution(&self, probabilities: &[f64], noise: Option<&NoiseProfile>) -> Distribution {
        let mut dist = Distribution::new();
        for (outcome, &p) in probabilities.iter().enumerate() {
            if p > 0.0 {
                dist.insert(to_bitstring(&self.clbits_of(outcome)), p);
            }
        }

        let Some(noise) = noise.filter(|n| n.has_readout_error()) else {
            return dist;
        };
        for (clbit, source) in self.clbit_sources.iter().enumerate() {
            let Some(q) = source else { continue };
            let e = noise.readout_error_for(*q);
            if e <= 0.0 {
                continue;
            }
            let mut flipped = Distribution::new();
            for (bitstring, p) in dist.iter() {
                flipped.insert(bitstring, p * (1.0 - e));
                flipped.insert(flip_char(bitstring, clbit), p * e);
            }
            dist = flipped;
        }
        dist
    }
}

/// Character `i` is classical bit `i`.
pub(crate) fn to_bitstring(bits: &[bool]) -> String {
    bits.iter().map(|&b| if b { '1' } else { '0' }).collect()
}

fn flip_char(bitstring: &str, position: usize) -> String {
    bitstring
        .chars()
        .enumerate()
        .map(|(i, ch)| match (i == position, ch) {
            (true, '0') => '1',
            (true, _) => '0',
            (false, ch) => ch,
        })
        .collect()
}
