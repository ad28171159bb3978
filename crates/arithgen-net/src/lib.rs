//! Gate networks for arithmetic generation
//!
//! This crate provides the network side of circuit construction:
//!
//! - [`Network`]: the minimal gate-construction contract generators target
//! - [`Capabilities`]: which primitives a network builds natively
//! - [`GateNetwork`]: a structurally hashed AIG/XAG/MIG/XMG/k-LUT network
//! - Bit-parallel simulation and exhaustive [`TruthTable`]s
//! - [`NetworkStats`] and dangling-node cleanup

pub mod capability;
pub mod error;
pub mod gate_network;
pub mod network;
pub mod signal;
pub mod sim;
pub mod stats;

pub use capability::Capabilities;
pub use error::{NetError, Result};
pub use gate_network::{GateNetwork, GateNode, NetworkKind};
pub use network::{Network, MAX_LUT_FANIN};
pub use signal::{NodeId, Signal};
pub use sim::{exhaustive_patterns, TruthTable, MAX_EXHAUSTIVE_INPUTS};
pub use stats::NetworkStats;
