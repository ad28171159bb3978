//! The gate-construction contract
//!
//! Arithmetic generators only ever talk to a network through [`Network`].
//! Required methods cover two-input logic; majority, three-input XOR, LUT
//! nodes and wide OR have decompositions so every network can build them,
//! and [`Network::capabilities`] tells callers which ones are native.

use crate::capability::Capabilities;
use crate::signal::Signal;

/// Maximum LUT fanin supported by single-word truth tables
pub const MAX_LUT_FANIN: usize = 6;

/// Minimal gate-construction interface
pub trait Network {
    /// Primitives this network builds natively
    fn capabilities(&self) -> Capabilities;

    /// Constant signal
    fn constant(&mut self, value: bool) -> Signal {
        Signal::constant(value)
    }

    /// Logical complement
    fn not(&mut self, a: Signal) -> Signal {
        !a
    }

    /// Two-input AND
    fn and(&mut self, a: Signal, b: Signal) -> Signal;

    /// Two-input XOR
    fn xor(&mut self, a: Signal, b: Signal) -> Signal;

    /// Two-input OR: a | b = !(!a & !b)
    fn or(&mut self, a: Signal, b: Signal) -> Signal {
        let nand = self.and(!a, !b);
        !nand
    }

    /// Two-input NOR
    fn nor(&mut self, a: Signal, b: Signal) -> Signal {
        let or = self.or(a, b);
        !or
    }

    /// Buffer
    fn buf(&mut self, a: Signal) -> Signal {
        a
    }

    /// Three-input majority
    fn majority(&mut self, a: Signal, b: Signal, c: Signal) -> Signal {
        majority_from_gates(self, a, b, c)
    }

    /// Three-input XOR
    fn xor3(&mut self, a: Signal, b: Signal, c: Signal) -> Signal {
        xor3_from_gates(self, a, b, c)
    }

    /// LUT node over `fanins`; fanin `i` is truth-table variable `i`
    ///
    /// Networks without native LUTs get a Shannon expansion into
    /// multiplexers.
    fn lut_node(&mut self, fanins: &[Signal], truth_table: u64) -> Signal {
        shannon_expand(self, fanins, truth_table)
    }

    /// OR over all `signals`; false when empty
    ///
    /// Networks with native wide OR override this; the default is a
    /// balanced tree of two-input ORs.
    fn nary_or(&mut self, signals: &[Signal]) -> Signal {
        or_tree(self, signals)
    }
}

/// Balanced tree of two-input ORs
pub fn or_tree<N: Network + ?Sized>(ntk: &mut N, signals: &[Signal]) -> Signal {
    match signals.len() {
        0 => ntk.constant(false),
        1 => signals[0],
        len => {
            let (low, high) = signals.split_at(len / 2);
            let low = or_tree(ntk, low);
            let high = or_tree(ntk, high);
            ntk.or(low, high)
        }
    }
}

/// Majority as (a & b) | (c & (a | b))
pub fn majority_from_gates<N: Network + ?Sized>(
    ntk: &mut N,
    a: Signal,
    b: Signal,
    c: Signal,
) -> Signal {
    let both = ntk.and(a, b);
    let either = ntk.or(a, b);
    let carried = ntk.and(c, either);
    ntk.or(both, carried)
}

/// Three-input XOR as two chained two-input XORs
pub fn xor3_from_gates<N: Network + ?Sized>(
    ntk: &mut N,
    a: Signal,
    b: Signal,
    c: Signal,
) -> Signal {
    let ab = ntk.xor(a, b);
    ntk.xor(ab, c)
}

/// Mask of the meaningful truth-table bits for `num_vars` variables
pub fn truth_table_mask(num_vars: usize) -> u64 {
    if num_vars >= MAX_LUT_FANIN {
        u64::MAX
    } else {
        (1u64 << (1usize << num_vars)) - 1
    }
}

/// Build `truth_table` over `fanins` from AND/OR by cofactoring on the
/// last variable
pub fn shannon_expand<N: Network + ?Sized>(
    ntk: &mut N,
    fanins: &[Signal],
    truth_table: u64,
) -> Signal {
    debug_assert!(fanins.len() <= MAX_LUT_FANIN);
    let num_vars = fanins.len();
    let mask = truth_table_mask(num_vars);
    let table = truth_table & mask;
    if table == 0 {
        return ntk.constant(false);
    }
    if table == mask {
        return ntk.constant(true);
    }

    // Non-constant implies at least one variable
    let half = 1usize << (num_vars - 1);
    let low_mask = (1u64 << half) - 1;
    let negative = table & low_mask;
    let positive = table >> half;
    let select = fanins[num_vars - 1];
    let rest = &fanins[..num_vars - 1];

    if negative == positive {
        return shannon_expand(ntk, rest, negative);
    }
    let when_set = shannon_expand(ntk, rest, positive);
    let when_clear = shannon_expand(ntk, rest, negative);
    let set_term = ntk.and(select, when_set);
    let clear_term = ntk.and(!select, when_clear);
    ntk.or(set_term, clear_term)
}
