//! Adders and subtractors by strategy
//!
//! [`add`] and [`subtract`] overwrite `a` with the result and `carry` with
//! the carry/borrow-out. The lookahead strategies work on operands
//! zero-extended to a power of two strictly wider than the input, so the
//! extra result bit at position `n` is the carry/borrow-out.

use crate::builder::ArithBuilder;
use crate::cell::CellRealization;
use crate::error::Result;
use crate::prefix::{prefix_arith, Scan};
use crate::ripple::{ripple_add, ripple_subtract};
use crate::strategy::{ceil_log2, ArithOp, Strategy};
use crate::words::zero_extend;
use arithgen_net::{Network, Signal};

/// `a := a + b + carry` using `strategy`; `carry := carry-out`
pub fn add<N: Network>(
    ntk: &mut N,
    strategy: Strategy,
    a: &mut [Signal],
    b: &[Signal],
    carry: &mut Signal,
) -> Result<()> {
    ArithBuilder::new(ntk).add(strategy, a, b, carry)
}

/// `a := a - b - borrow` using `strategy`; `borrow := borrow-out`
pub fn subtract<N: Network>(
    ntk: &mut N,
    strategy: Strategy,
    a: &mut [Signal],
    b: &[Signal],
    borrow: &mut Signal,
) -> Result<()> {
    ArithBuilder::new(ntk).subtract(strategy, a, b, borrow)
}

/// One-bit Kogge-Stone adder over a buffered carry-in
pub fn kogge_stone_full_adder<N: Network>(
    ntk: &mut N,
    a: Signal,
    b: Signal,
    c: Signal,
) -> (Signal, Signal) {
    crate::prefix::kogge_stone_cell(ntk, a, b, c)
}

/// Build `op` with an already validated strategy and operands
pub(crate) fn arith_unchecked<N: Network>(
    ntk: &mut N,
    cell: CellRealization,
    op: ArithOp,
    strategy: Strategy,
    a: &mut [Signal],
    b: &[Signal],
    carry: &mut Signal,
) {
    debug_assert!(strategy.supports(op));
    match strategy {
        Strategy::Ripple => match op {
            ArithOp::Add => ripple_add(ntk, cell, a, b, carry),
            ArithOp::Sub => ripple_subtract(ntk, cell, a, b, carry),
        },
        Strategy::CarryLookahead | Strategy::BorrowLookahead => lookahead(ntk, op, a, b, carry),
        Strategy::BrentKung => prefix_arith(ntk, op, Scan::BrentKung, a, b, carry),
        Strategy::KoggeStone => prefix_arith(ntk, op, Scan::KoggeStone, a, b, carry),
        Strategy::HanCarlson => prefix_arith(ntk, op, Scan::HanCarlson, a, b, carry),
    }
}

/// Internal word width of a lookahead circuit over `width`-bit operands
pub(crate) fn lookahead_width(width: usize) -> usize {
    1usize << ceil_log2(width + 1)
}

/// Lookahead over operands padded to `2^ceil(log2(n + 1))` bits
fn lookahead<N: Network>(
    ntk: &mut N,
    op: ArithOp,
    a: &mut [Signal],
    b: &[Signal],
    carry: &mut Signal,
) {
    let width = a.len();
    let padded = lookahead_width(width);
    let mut a_ext = zero_extend(ntk, a, padded);
    let b_ext = zero_extend(ntk, b, padded);

    prefix_arith(ntk, op, Scan::Lookahead, &mut a_ext, &b_ext, carry);

    a.copy_from_slice(&a_ext[..width]);
    *carry = a_ext[width];
}
