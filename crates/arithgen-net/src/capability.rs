//! Capability descriptors
//!
//! A network declares which non-trivial primitives it can build natively.
//! Arithmetic generators read this once per construction call and pick the
//! cheapest realization the network supports.

use serde::{Deserialize, Serialize};

/// Primitives a network builds as single nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Capabilities {
    /// Arbitrary k-input lookup-table nodes
    pub lut: bool,
    /// Three-input majority nodes
    pub majority: bool,
    /// Three-input XOR nodes
    pub xor3: bool,
    /// Wide OR reduction
    pub nary_or: bool,
}

impl Capabilities {
    /// Two-input gates only
    pub const fn basic() -> Self {
        Self {
            lut: false,
            majority: false,
            xor3: false,
            nary_or: false,
        }
    }

    /// Enable LUT nodes
    pub const fn with_lut(mut self) -> Self {
        self.lut = true;
        self
    }

    /// Enable majority nodes
    pub const fn with_majority(mut self) -> Self {
        self.majority = true;
        self
    }

    /// Enable three-input XOR nodes
    pub const fn with_xor3(mut self) -> Self {
        self.xor3 = true;
        self
    }

    /// Enable wide OR reduction
    pub const fn with_nary_or(mut self) -> Self {
        self.nary_or = true;
        self
    }

    /// Both majority and three-input XOR are native
    pub fn has_majority_xor3(&self) -> bool {
        self.majority && self.xor3
    }
}
