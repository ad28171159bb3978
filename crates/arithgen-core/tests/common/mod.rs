//! Shared helpers for arithmetic integration tests

#![allow(dead_code)]

use arithgen_net::{GateNetwork, NetworkKind, Signal, TruthTable};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;

/// Above this many input bits, operand values are sampled instead of enumerated
pub const EXHAUSTIVE_BITS: usize = 12;

/// Random samples per circuit when not enumerating
pub const SAMPLES: usize = 200;

/// Install a test subscriber once; later calls are no-ops
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn mask(width: usize) -> u64 {
    if width >= 64 {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

/// Value of an LSB-first bit vector
pub fn from_bits(bits: &[bool]) -> u64 {
    bits.iter()
        .enumerate()
        .fold(0, |acc, (i, &bit)| acc | (u64::from(bit) << i))
}

/// LSB-first assignment for operands of the given `(value, width)`
pub fn assignment(operands: &[(u64, usize)]) -> Vec<bool> {
    operands
        .iter()
        .flat_map(|&(value, width)| (0..width).map(move |i| (value >> i) & 1 == 1))
        .collect()
}

/// Operand tuples to check: every combination when small, seeded samples otherwise
pub fn operand_values(widths: &[usize], seed: u64) -> Vec<Vec<u64>> {
    let total: usize = widths.iter().sum();
    if total <= EXHAUSTIVE_BITS {
        (0..(1u64 << total))
            .map(|m| {
                let mut shift = 0;
                widths
                    .iter()
                    .map(|&w| {
                        let value = (m >> shift) & mask(w);
                        shift += w;
                        value
                    })
                    .collect()
            })
            .collect()
    } else {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..SAMPLES)
            .map(|_| widths.iter().map(|&w| rng.gen::<u64>() & mask(w)).collect())
            .collect()
    }
}

/// Evaluate `ntk` with operands applied to its inputs in declaration order
pub fn run(ntk: &GateNetwork, operands: &[(u64, usize)]) -> Vec<bool> {
    ntk.evaluate(&assignment(operands))
        .expect("assignment matches the network inputs")
}

/// Binary operator circuit: inputs `a`, `b` and optional carry-in
pub struct BinaryCircuit {
    pub ntk: GateNetwork,
    pub a: Vec<Signal>,
    pub b: Vec<Signal>,
    pub carry: Signal,
}

impl BinaryCircuit {
    pub fn new(kind: NetworkKind, width: usize, with_carry: bool) -> Self {
        Self::from_network(GateNetwork::new("dut", kind), width, width, with_carry)
    }

    pub fn from_network(mut ntk: GateNetwork, n: usize, m: usize, with_carry: bool) -> Self {
        let a = ntk.add_inputs("a", n);
        let b = ntk.add_inputs("b", m);
        let carry = if with_carry {
            ntk.add_input("cin")
        } else {
            Signal::FALSE
        };
        Self { ntk, a, b, carry }
    }

    /// Mark `a` and `carry` as the outputs
    pub fn finish_in_place(mut self) -> GateNetwork {
        self.ntk.add_outputs("s", &self.a);
        self.ntk.add_output("cout", self.carry);
        self.ntk
    }
}

/// Truth tables of every output
pub fn tables(ntk: &GateNetwork) -> Vec<String> {
    ntk.truth_tables()
        .expect("exhaustive simulation")
        .iter()
        .map(|t| t.to_hex())
        .collect()
}

/// Every output under every input assignment, from exhaustive simulation
///
/// Assignment `m` drives input `i` with bit `i` of `m`, so with inputs
/// declared as `a` then `b`, operand `a` is the low bits of `m`.
pub struct Exhaustive {
    tables: Vec<TruthTable>,
    num_vars: usize,
}

impl Exhaustive {
    pub fn new(ntk: &GateNetwork) -> Self {
        Self {
            tables: ntk.truth_tables().expect("exhaustive simulation"),
            num_vars: ntk.input_count(),
        }
    }

    pub fn assignments(&self) -> Range<usize> {
        0..(1usize << self.num_vars)
    }

    /// Value of `outputs`, LSB first, under assignment `m`
    pub fn value(&self, m: usize, outputs: Range<usize>) -> u64 {
        self.tables[outputs]
            .iter()
            .enumerate()
            .fold(0, |acc, (i, table)| acc | (u64::from(table.bit(m)) << i))
    }
}
