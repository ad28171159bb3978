//! Bit-Parallel Simulation
//!
//! Every node value is a 64-bit word, so one pass over the network evaluates
//! 64 input patterns at once. Exhaustive simulation enumerates all input
//! assignments and collects one [`TruthTable`] per output.

use crate::error::{NetError, Result};
use crate::gate_network::{GateNetwork, GateNode};
use crate::signal::Signal;

/// Largest input count accepted by exhaustive simulation
pub const MAX_EXHAUSTIVE_INPUTS: usize = 20;

/// Standard projection words for the first six variables
const PROJECTIONS: [u64; 6] = [
    0xAAAA_AAAA_AAAA_AAAA,
    0xCCCC_CCCC_CCCC_CCCC,
    0xF0F0_F0F0_F0F0_F0F0,
    0xFF00_FF00_FF00_FF00,
    0xFFFF_0000_FFFF_0000,
    0xFFFF_FFFF_0000_0000,
];

/// Complete truth table of a single-output function
///
/// Bit `m` holds the function value under the assignment where input `i`
/// equals bit `i` of `m`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TruthTable {
    num_vars: usize,
    words: Vec<u64>,
}

impl TruthTable {
    fn from_words(num_vars: usize, mut words: Vec<u64>) -> Self {
        if num_vars < 6 {
            if let Some(first) = words.first_mut() {
                *first &= (1u64 << (1usize << num_vars)) - 1;
            }
        }
        Self { num_vars, words }
    }

    /// Number of variables
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// Number of assignments (`2^num_vars`)
    pub fn num_bits(&self) -> usize {
        1usize << self.num_vars
    }

    /// Function value for assignment `index`
    pub fn bit(&self, index: usize) -> bool {
        debug_assert!(index < self.num_bits());
        (self.words[index / 64] >> (index % 64)) & 1 == 1
    }

    /// Number of satisfying assignments
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Raw words, least significant assignment first
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// Hexadecimal rendering, most significant assignment first
    pub fn to_hex(&self) -> String {
        let digits = (self.num_bits() / 4).max(1);
        (0..digits)
            .rev()
            .map(|d| {
                let bit = d * 4;
                let nibble = (self.words[bit / 64] >> (bit % 64)) & 0xf;
                char::from_digit(nibble as u32, 16).unwrap_or('0')
            })
            .collect()
    }
}

impl std::fmt::Display for TruthTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

fn value_of(values: &[u64], signal: Signal) -> u64 {
    let value = values[signal.node.index()];
    if signal.inverted {
        !value
    } else {
        value
    }
}

/// Word-parallel evaluation of a LUT
fn eval_lut(fanin_values: &[u64], truth_table: u64) -> u64 {
    let mut result = 0u64;
    for minterm in 0..(1usize << fanin_values.len()) {
        if (truth_table >> minterm) & 1 == 0 {
            continue;
        }
        let mut term = u64::MAX;
        for (var, value) in fanin_values.iter().enumerate() {
            term &= if (minterm >> var) & 1 == 1 {
                *value
            } else {
                !*value
            };
        }
        result |= term;
    }
    result
}

impl GateNetwork {
    /// Simulate 64 patterns; `input_words[i]` drives input `i`
    ///
    /// Returns one word per output.
    pub fn simulate(&self, input_words: &[u64]) -> Result<Vec<u64>> {
        if input_words.len() != self.input_count() {
            return Err(NetError::PatternCountMismatch {
                expected: self.input_count(),
                actual: input_words.len(),
            });
        }

        let mut values = vec![0u64; self.node_count()];
        for (id, word) in self.inputs().iter().zip(input_words) {
            values[id.index()] = *word;
        }

        for (id, node) in self.iter_nodes() {
            let value = match node {
                GateNode::Const | GateNode::Input { .. } => continue,
                GateNode::And(a, b) => value_of(&values, *a) & value_of(&values, *b),
                GateNode::Xor(a, b) => value_of(&values, *a) ^ value_of(&values, *b),
                GateNode::Maj(a, b, c) => {
                    let (a, b, c) = (
                        value_of(&values, *a),
                        value_of(&values, *b),
                        value_of(&values, *c),
                    );
                    (a & b) | (a & c) | (b & c)
                }
                GateNode::Xor3(a, b, c) => {
                    value_of(&values, *a) ^ value_of(&values, *b) ^ value_of(&values, *c)
                }
                GateNode::Lut {
                    fanins,
                    truth_table,
                } => {
                    let fanin_values: Vec<u64> =
                        fanins.iter().map(|s| value_of(&values, *s)).collect();
                    eval_lut(&fanin_values, *truth_table)
                }
            };
            values[id.index()] = value;
        }

        Ok(self
            .outputs()
            .iter()
            .map(|(_, s)| value_of(&values, *s))
            .collect())
    }

    /// Simulate several words of patterns per input
    ///
    /// `input_words[i][w]` drives input `i` in word `w`; the result is
    /// indexed the same way by output.
    pub fn simulate_words(&self, input_words: &[Vec<u64>]) -> Result<Vec<Vec<u64>>> {
        if input_words.len() != self.input_count() {
            return Err(NetError::PatternCountMismatch {
                expected: self.input_count(),
                actual: input_words.len(),
            });
        }
        let num_words = input_words.first().map_or(1, Vec::len);
        if let Some((input, words)) = input_words
            .iter()
            .enumerate()
            .find(|(_, words)| words.len() != num_words)
        {
            return Err(NetError::PatternWidthMismatch {
                input,
                expected: num_words,
                actual: words.len(),
            });
        }

        let mut outputs = vec![Vec::with_capacity(num_words); self.output_count()];
        let mut pattern = vec![0u64; self.input_count()];
        for w in 0..num_words {
            for (slot, words) in pattern.iter_mut().zip(input_words) {
                *slot = words[w];
            }
            for (output, value) in outputs.iter_mut().zip(self.simulate(&pattern)?) {
                output.push(value);
            }
        }
        Ok(outputs)
    }

    /// Evaluate a single input assignment
    pub fn evaluate(&self, assignment: &[bool]) -> Result<Vec<bool>> {
        let words: Vec<u64> = assignment.iter().map(|&b| u64::from(b)).collect();
        Ok(self
            .simulate(&words)?
            .into_iter()
            .map(|w| w & 1 == 1)
            .collect())
    }

    /// Truth tables of all outputs over all input assignments
    pub fn truth_tables(&self) -> Result<Vec<TruthTable>> {
        let num_vars = self.input_count();
        if num_vars > MAX_EXHAUSTIVE_INPUTS {
            return Err(NetError::TooManyInputs {
                inputs: num_vars,
                limit: MAX_EXHAUSTIVE_INPUTS,
            });
        }

        let outputs = self.simulate_words(&exhaustive_patterns(num_vars))?;
        Ok(outputs
            .into_iter()
            .map(|words| TruthTable::from_words(num_vars, words))
            .collect())
    }
}

/// Input words enumerating every assignment of `num_vars` inputs
pub fn exhaustive_patterns(num_vars: usize) -> Vec<Vec<u64>> {
    let num_words = if num_vars > 6 {
        1usize << (num_vars - 6)
    } else {
        1
    };
    (0..num_vars)
        .map(|var| {
            (0..num_words)
                .map(|w| {
                    if var < 6 {
                        PROJECTIONS[var]
                    } else if (w >> (var - 6)) & 1 == 1 {
                        u64::MAX
                    } else {
                        0
                    }
                })
                .collect()
        })
        .collect()
}
