//! Parallel-Prefix Carry/Borrow Engine
//!
//! Every prefix adder and subtractor follows the same five steps:
//!
//! 1. Per-bit generate/propagate terms from the operands
//! 2. One [`PgNode`] per bit, with the carry/borrow-in folded into node 0
//! 3. A scan that combines nodes until each one covers `[0, i]`
//! 4. `carry[i + 1] = node[i].generate`
//! 5. `result[i] = (a[i] ^ b[i]) ^ carry[i]`
//!
//! Only step 3 differs between topologies.
//!
//! | Scan             | Rounds            | Combines      |
//! |------------------|-------------------|---------------|
//! | Brent-Kung       | 2 log n - 1       | < 2n          |
//! | Kogge-Stone      | log n             | n log n - n   |
//! | Han-Carlson      | log n + 2         | ~ n log n / 4 |
//! | Carry-lookahead  | 2 log n           | < 2n          |
//!
//! # References
//!
//! - Brent & Kung, "A Regular Layout for Parallel Adders", 1982
//! - Kogge & Stone, "A Parallel Algorithm for the Efficient Solution of a
//!   General Class of Recurrence Equations", 1973
//! - Han & Carlson, "Fast Area-Efficient VLSI Adders", 1987

mod brent_kung;
mod han_carlson;
mod kogge_stone;
mod lookahead;

use crate::strategy::ArithOp;
use arithgen_net::{Network, Signal};
use tracing::trace;

/// Generate/propagate summary of the bit interval `[low, high]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PgNode {
    pub generate: Signal,
    pub propagate: Signal,
    /// Most significant bit covered; equal to the node's index
    pub high: usize,
    /// Least significant bit covered
    pub low: usize,
}

impl PgNode {
    fn leaf(generate: Signal, propagate: Signal, index: usize) -> Self {
        Self {
            generate,
            propagate,
            high: index,
            low: index,
        }
    }

    /// Covers bit 0 and therefore includes the carry/borrow-in
    pub fn is_reduced(&self) -> bool {
        self.low == 0
    }

    /// Extend this node downwards over `lower`, which must end right below it
    pub fn combine<N: Network>(&mut self, ntk: &mut N, lower: &PgNode) {
        debug_assert_eq!(
            lower.high + 1,
            self.low,
            "combining [{}, {}] with non-adjacent [{}, {}]",
            self.low,
            self.high,
            lower.low,
            lower.high
        );
        let carried = ntk.and(self.propagate, lower.generate);
        self.generate = ntk.or(self.generate, carried);
        self.propagate = ntk.and(self.propagate, lower.propagate);
        self.low = lower.low;
    }

    /// Fold the carry/borrow-in into bit 0
    fn absorb_carry<N: Network>(&mut self, ntk: &mut N, carry: Signal) {
        debug_assert_eq!(self.high, 0);
        let carried = ntk.and(self.propagate, carry);
        self.generate = ntk.or(self.generate, carried);
        self.propagate = ntk.constant(false);
    }
}

/// Prefix scan schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Scan {
    BrentKung,
    KoggeStone,
    HanCarlson,
    Lookahead,
}

impl Scan {
    fn run<N: Network>(self, ntk: &mut N, nodes: &mut [PgNode]) {
        match self {
            Scan::BrentKung => brent_kung::scan(ntk, nodes),
            Scan::KoggeStone => kogge_stone::scan(ntk, nodes),
            Scan::HanCarlson => han_carlson::scan(ntk, nodes),
            Scan::Lookahead => lookahead::scan(ntk, nodes),
        }
    }
}

/// Per-bit (generate, propagate) for the operation
fn pg_terms<N: Network>(ntk: &mut N, op: ArithOp, a: Signal, b: Signal) -> (Signal, Signal) {
    match op {
        ArithOp::Add => {
            let generate = ntk.and(a, b);
            let propagate = ntk.xor(a, b);
            (generate, propagate)
        }
        ArithOp::Sub => {
            // Borrow generated when a = 0, b = 1; passed on unless a = 1, b = 0
            let not_a = ntk.not(a);
            let generate = ntk.and(not_a, b);
            let propagate = ntk.or(not_a, b);
            (generate, propagate)
        }
    }
}

/// `a := a (op) b (op) carry` with carry-out written back to `carry`
pub(crate) fn prefix_arith<N: Network>(
    ntk: &mut N,
    op: ArithOp,
    scan: Scan,
    a: &mut [Signal],
    b: &[Signal],
    carry: &mut Signal,
) {
    debug_assert_eq!(a.len(), b.len());
    debug_assert!(!a.is_empty());
    trace!(?scan, ?op, width = a.len(), "prefix scan");

    let mut result_propagate = Vec::with_capacity(a.len());
    let mut nodes = Vec::with_capacity(a.len());
    for (i, (ai, bi)) in a.iter().zip(b).enumerate() {
        let (generate, propagate) = pg_terms(ntk, op, *ai, *bi);
        let half = match op {
            ArithOp::Add => propagate,
            ArithOp::Sub => ntk.xor(*ai, *bi),
        };
        result_propagate.push(half);
        nodes.push(PgNode::leaf(generate, propagate, i));
    }
    nodes[0].absorb_carry(ntk, *carry);

    scan.run(ntk, &mut nodes);
    debug_assert!(nodes.iter().all(PgNode::is_reduced));

    let mut carry_in = *carry;
    for ((bit, half), node) in a.iter_mut().zip(&result_propagate).zip(&nodes) {
        *bit = ntk.xor(*half, carry_in);
        carry_in = node.generate;
    }
    *carry = carry_in;
}

/// One-bit Kogge-Stone addition; `(sum, carry)` of `a + b + c`
pub(crate) fn kogge_stone_cell<N: Network>(
    ntk: &mut N,
    a: Signal,
    b: Signal,
    c: Signal,
) -> (Signal, Signal) {
    let mut sum = [a];
    let mut carry = ntk.buf(c);
    prefix_arith(ntk, ArithOp::Add, Scan::KoggeStone, &mut sum, &[b], &mut carry);
    (sum[0], carry)
}
