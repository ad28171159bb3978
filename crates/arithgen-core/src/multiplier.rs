//! Unsigned Multipliers
//!
//! All multipliers take an `n`-bit and an `m`-bit operand and produce the
//! full `n + m` bit product.
//!
//! - [`systolic_multiplier`]: array of one-bit Kogge-Stone adders
//! - [`carry_ripple_multiplier`]: the same array built from full-adder cells
//! - [`partial_product_multiplier`]: shifted partial-product rows summed
//!   with any adder strategy

use crate::adder::arith_unchecked;
use crate::builder::ArithBuilder;
use crate::cell::{full_adder, CellRealization};
use crate::error::Result;
use crate::prefix::kogge_stone_cell;
use crate::strategy::{ArithOp, Strategy};
use arithgen_net::{Network, Signal};

/// Array multiplier with Kogge-Stone full-adder cells
pub fn systolic_multiplier<N: Network>(
    ntk: &mut N,
    a: &[Signal],
    b: &[Signal],
) -> Result<Vec<Signal>> {
    ArithBuilder::new(ntk).systolic_multiplier(a, b)
}

/// Array multiplier with the network's full-adder cell
pub fn carry_ripple_multiplier<N: Network>(
    ntk: &mut N,
    a: &[Signal],
    b: &[Signal],
) -> Result<Vec<Signal>> {
    ArithBuilder::new(ntk).carry_ripple_multiplier(a, b)
}

/// Partial-product rows accumulated with `adder`
pub fn partial_product_multiplier<N: Network>(
    ntk: &mut N,
    a: &[Signal],
    b: &[Signal],
    adder: Strategy,
) -> Result<Vec<Signal>> {
    ArithBuilder::new(ntk).partial_product_multiplier(a, b, adder)
}

pub(crate) fn systolic<N: Network>(ntk: &mut N, a: &[Signal], b: &[Signal]) -> Vec<Signal> {
    array_multiply(ntk, a, b, kogge_stone_cell)
}

pub(crate) fn carry_ripple<N: Network>(
    ntk: &mut N,
    cell: CellRealization,
    a: &[Signal],
    b: &[Signal],
) -> Vec<Signal> {
    array_multiply(ntk, a, b, |ntk, x, y, z| full_adder(ntk, cell, x, y, z))
}

/// Carry-save array over the `n x m` AND terms
///
/// Row `j` adds `a & b[j]` into the running sums; each column keeps its own
/// carry, and sums move one column down per row. Bit `j` of the product
/// leaves the array at column 0 of row `j`; the last row's sums and carries
/// are merged by a ripple pass into the top `n` bits.
fn array_multiply<N, F>(ntk: &mut N, a: &[Signal], b: &[Signal], mut adder: F) -> Vec<Signal>
where
    N: Network,
    F: FnMut(&mut N, Signal, Signal, Signal) -> (Signal, Signal),
{
    let (n, m) = (a.len(), b.len());
    let zero = ntk.constant(false);
    let mut product = vec![zero; n + m];
    let mut sums = vec![zero; n];
    let mut carries = vec![zero; n];

    for (j, bj) in b.iter().enumerate() {
        for (i, ai) in a.iter().enumerate() {
            let term = ntk.and(*ai, *bj);
            let (sum, carry) = adder(ntk, term, sums[i], carries[i]);
            carries[i] = carry;
            if i == 0 {
                product[j] = sum;
            } else {
                sums[i - 1] = sum;
            }
        }
    }

    let mut carry = zero;
    for i in 0..n {
        let (sum, carry_out) = adder(ntk, carries[i], sums[i], carry);
        product[m + i] = sum;
        carry = carry_out;
    }
    product
}

pub(crate) fn partial_products<N: Network>(
    ntk: &mut N,
    cell: CellRealization,
    a: &[Signal],
    b: &[Signal],
    adder: Strategy,
) -> Vec<Signal> {
    let width = a.len() + b.len();
    let zero = ntk.constant(false);

    let mut rows = Vec::with_capacity(b.len());
    for (shift, bj) in b.iter().enumerate() {
        let mut row = vec![zero; shift];
        for ai in a {
            row.push(ntk.and(*ai, *bj));
        }
        row.resize(width, zero);
        rows.push(row);
    }

    let mut rows = rows.into_iter();
    let mut accumulator = rows.next().unwrap_or_else(|| vec![zero; width]);
    for mut row in rows {
        let mut carry = zero;
        arith_unchecked(
            ntk,
            cell,
            ArithOp::Add,
            adder,
            &mut row,
            &accumulator,
            &mut carry,
        );
        accumulator = row;
    }
    accumulator
}
