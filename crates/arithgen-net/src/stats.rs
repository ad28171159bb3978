//! Network statistics

use crate::gate_network::NetworkKind;
use serde::Serialize;

/// Size and depth summary of a network
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NetworkStats {
    /// Network family
    pub kind: NetworkKind,
    /// Number of primary inputs
    pub input_count: usize,
    /// Number of primary outputs
    pub output_count: usize,
    /// Number of logic gates
    pub gate_count: usize,
    /// AND nodes
    pub and_count: usize,
    /// XOR nodes
    pub xor_count: usize,
    /// Majority nodes
    pub maj_count: usize,
    /// Three-input XOR nodes
    pub xor3_count: usize,
    /// LUT nodes
    pub lut_count: usize,
    /// Longest input-to-output path in gates
    pub depth: u32,
}

impl std::fmt::Display for NetworkStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] i/o = {}/{} gates = {} level = {}",
            self.kind, self.input_count, self.output_count, self.gate_count, self.depth
        )
    }
}
