//! Full-adder and full-subtractor cells
//!
//! The cell is the only place where the network's capabilities change the
//! generated structure. [`CellRealization::resolve`] picks the most
//! specific realization the network supports:
//!
//! 1. [`CellRealization::Lut`]: one LUT per output
//! 2. [`CellRealization::MajorityXor3`]: one majority and one XOR3 node
//! 3. [`CellRealization::TwoInputGates`]: seven two-input gates
//!
//! LUT fanins are ordered `[c, b, a]`, so the carry/borrow-in is truth-table
//! variable 0 and `a` is variable 2.

use crate::error::{ArithError, Result};
use arithgen_net::{Capabilities, Network, Signal};
use serde::{Deserialize, Serialize};

/// Sum and difference: three-input parity
pub const SUM_TRUTH_TABLE: u64 = 0x96;
/// Carry-out: three-input majority
pub const CARRY_TRUTH_TABLE: u64 = 0xe8;
/// Borrow-out of `a - b - c`: majority of `!a`, `b` and `c`
pub const BORROW_TRUTH_TABLE: u64 = 0x8e;

/// How a three-input arithmetic cell is built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CellRealization {
    Lut,
    MajorityXor3,
    TwoInputGates,
}

impl CellRealization {
    /// Most specific realization supported by `caps`
    pub fn resolve(caps: Capabilities) -> Self {
        if caps.lut {
            CellRealization::Lut
        } else if caps.has_majority_xor3() {
            CellRealization::MajorityXor3
        } else {
            CellRealization::TwoInputGates
        }
    }

    /// Use this realization, failing if `caps` cannot build it
    pub fn pin(self, caps: Capabilities) -> Result<Self> {
        let missing = match self {
            CellRealization::Lut if !caps.lut => Some("LUT"),
            CellRealization::MajorityXor3 if !caps.has_majority_xor3() => Some("majority/xor3"),
            _ => None,
        };
        match missing {
            Some(missing) => Err(ArithError::UnsupportedCell {
                cell: self,
                missing,
            }),
            None => Ok(self),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CellRealization::Lut => "lut",
            CellRealization::MajorityXor3 => "majority-xor3",
            CellRealization::TwoInputGates => "two-input-gates",
        }
    }
}

impl std::fmt::Display for CellRealization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Half adder: `(a ^ b, a & b)`
pub fn half_adder<N: Network>(ntk: &mut N, a: Signal, b: Signal) -> (Signal, Signal) {
    let sum = ntk.xor(a, b);
    let carry = ntk.and(a, b);
    (sum, carry)
}

/// Full adder: `(sum, carry)` of `a + b + c`
pub fn full_adder<N: Network>(
    ntk: &mut N,
    cell: CellRealization,
    a: Signal,
    b: Signal,
    c: Signal,
) -> (Signal, Signal) {
    match cell {
        CellRealization::Lut => {
            let fanins = [c, b, a];
            let sum = ntk.lut_node(&fanins, SUM_TRUTH_TABLE);
            let carry = ntk.lut_node(&fanins, CARRY_TRUTH_TABLE);
            (sum, carry)
        }
        CellRealization::MajorityXor3 => {
            let carry = ntk.majority(a, b, c);
            let sum = ntk.xor3(a, b, c);
            (sum, carry)
        }
        CellRealization::TwoInputGates => {
            let both = ntk.and(a, b);
            let neither = ntk.nor(a, b);
            let half = ntk.nor(both, neither);
            let carried = ntk.and(half, c);
            let dropped = ntk.nor(half, c);
            let sum = ntk.nor(carried, dropped);
            let carry = ntk.or(both, carried);
            (sum, carry)
        }
    }
}

/// Full subtractor: `(difference, borrow)` of `a - b - c`
pub fn full_subtractor<N: Network>(
    ntk: &mut N,
    cell: CellRealization,
    a: Signal,
    b: Signal,
    c: Signal,
) -> (Signal, Signal) {
    match cell {
        CellRealization::Lut => {
            let fanins = [c, b, a];
            let difference = ntk.lut_node(&fanins, SUM_TRUTH_TABLE);
            let borrow = ntk.lut_node(&fanins, BORROW_TRUTH_TABLE);
            (difference, borrow)
        }
        CellRealization::MajorityXor3 => {
            let not_a = ntk.not(a);
            let borrow = ntk.majority(not_a, b, c);
            let difference = ntk.xor3(a, b, c);
            (difference, borrow)
        }
        CellRealization::TwoInputGates => {
            let not_a = ntk.not(a);
            let not_b = ntk.not(b);
            let not_c = ntk.not(c);
            let a_only = ntk.and(a, not_c);
            let c_only = ntk.and(not_a, c);
            // a == c
            let same = ntk.nor(a_only, c_only);
            let not_same = ntk.not(same);
            let low = ntk.and(not_b, same);
            let high = ntk.and(b, not_same);
            let difference = ntk.nor(low, high);
            let borrow = ntk.nor(a_only, low);
            (difference, borrow)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arithgen_net::{GateNetwork, NetworkKind};

    /// Truth tables of a 3-input cell with inputs ordered a, b, c
    fn cell_tables(
        kind: NetworkKind,
        build: impl Fn(&mut GateNetwork, Signal, Signal, Signal) -> (Signal, Signal),
    ) -> (u64, u64) {
        let mut ntk = GateNetwork::new("cell", kind);
        let a = ntk.add_input("a");
        let b = ntk.add_input("b");
        let c = ntk.add_input("c");
        let (result, carry) = build(&mut ntk, a, b, c);
        ntk.add_output("r", result);
        ntk.add_output("c", carry);
        let tables = ntk.truth_tables().expect("simulation");
        (tables[0].words()[0], tables[1].words()[0])
    }

    fn reference(f: impl Fn(u64, u64, u64) -> (u64, u64)) -> (u64, u64) {
        let mut result = 0;
        let mut carry = 0;
        for m in 0..8u64 {
            let (r, c) = f(m & 1, (m >> 1) & 1, (m >> 2) & 1);
            result |= r << m;
            carry |= c << m;
        }
        (result, carry)
    }

    #[test]
    fn test_resolve() {
        use NetworkKind::*;
        assert_eq!(CellRealization::resolve(Aig.capabilities()), CellRealization::TwoInputGates);
        assert_eq!(CellRealization::resolve(Mig.capabilities()), CellRealization::TwoInputGates);
        assert_eq!(CellRealization::resolve(Xmg.capabilities()), CellRealization::MajorityXor3);
        assert_eq!(CellRealization::resolve(Klut.capabilities()), CellRealization::Lut);
    }

    #[test]
    fn test_pin() {
        let aig = NetworkKind::Aig.capabilities();
        assert!(CellRealization::TwoInputGates.pin(aig).is_ok());
        assert_eq!(
            CellRealization::Lut.pin(aig),
            Err(ArithError::UnsupportedCell {
                cell: CellRealization::Lut,
                missing: "LUT"
            })
        );
        let xmg = NetworkKind::Xmg.capabilities();
        assert_eq!(
            CellRealization::MajorityXor3.pin(xmg),
            Ok(CellRealization::MajorityXor3)
        );
    }

    #[test]
    fn test_full_adder_all_realizations() {
        let expected = reference(|a, b, c| ((a + b + c) & 1, (a + b + c) >> 1));
        for kind in NetworkKind::ALL {
            let cell = CellRealization::resolve(kind.capabilities());
            let tables = cell_tables(kind, |ntk, a, b, c| full_adder(ntk, cell, a, b, c));
            assert_eq!(tables, expected, "{} / {}", kind, cell);
        }
        // Every realization on a network that can build it natively or not
        for cell in [
            CellRealization::Lut,
            CellRealization::MajorityXor3,
            CellRealization::TwoInputGates,
        ] {
            let tables = cell_tables(NetworkKind::Aig, |ntk, a, b, c| full_adder(ntk, cell, a, b, c));
            assert_eq!(tables, expected, "aig / {}", cell);
        }
    }

    #[test]
    fn test_full_subtractor_all_realizations() {
        let expected = reference(|a, b, c| {
            let borrow = u64::from(a < b + c);
            ((a + 2 * borrow - b - c) & 1, borrow)
        });
        for kind in NetworkKind::ALL {
            let cell = CellRealization::resolve(kind.capabilities());
            let tables = cell_tables(kind, |ntk, a, b, c| full_subtractor(ntk, cell, a, b, c));
            assert_eq!(tables, expected, "{} / {}", kind, cell);
        }
        for cell in [
            CellRealization::Lut,
            CellRealization::MajorityXor3,
            CellRealization::TwoInputGates,
        ] {
            let tables =
                cell_tables(NetworkKind::Xag, |ntk, a, b, c| full_subtractor(ntk, cell, a, b, c));
            assert_eq!(tables, expected, "xag / {}", cell);
        }
    }

    #[test]
    fn test_half_adder() {
        let mut ntk = GateNetwork::new("ha", NetworkKind::Xag);
        let a = ntk.add_input("a");
        let b = ntk.add_input("b");
        let (sum, carry) = half_adder(&mut ntk, a, b);
        ntk.add_output("s", sum);
        ntk.add_output("c", carry);
        let tables = ntk.truth_tables().expect("simulation");
        assert_eq!(tables[0].to_hex(), "6");
        assert_eq!(tables[1].to_hex(), "8");
    }

    #[test]
    fn test_cell_sizes() {
        let mut ntk = GateNetwork::new("lut", NetworkKind::Klut);
        let x = ntk.add_inputs("x", 3);
        full_adder(&mut ntk, CellRealization::Lut, x[0], x[1], x[2]);
        assert_eq!(ntk.gate_count(), 2);

        let mut ntk = GateNetwork::new("xmg", NetworkKind::Xmg);
        let x = ntk.add_inputs("x", 3);
        full_subtractor(&mut ntk, CellRealization::MajorityXor3, x[0], x[1], x[2]);
        assert_eq!(ntk.gate_count(), 2);

        let mut ntk = GateNetwork::new("aig", NetworkKind::Aig);
        let x = ntk.add_inputs("x", 3);
        full_adder(&mut ntk, CellRealization::TwoInputGates, x[0], x[1], x[2]);
        assert_eq!(ntk.gate_count(), 7);
    }
}
