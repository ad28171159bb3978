//! Restoring Array Dividers
//!
//! Unsigned `n`-bit by `n`-bit division producing an `n`-bit quotient and
//! an `n`-bit remainder. Each of the `n` steps tries to subtract the
//! divisor shifted by `n - 1 - step` from the running remainder; the
//! quotient bit is the inverted borrow and a word multiplexer restores the
//! remainder when the subtraction underflowed.
//!
//! The divisor is assumed non-zero. Division by zero is not detected and
//! yields an all-ones quotient.
//!
//! # Variants
//!
//! - [`restoring_divider`]: works on a `2n - 1` bit window that narrows by
//!   one bit per step, using ripple-borrow subtractors.
//! - [`restoring_divider_with`]: keeps the remainder `n` bits wide and
//!   uses any subtractor strategy. While the shifted divisor still has
//!   bits above position `n - 1`, an OR over those bits flags the step as
//!   a guaranteed underflow.

use crate::adder::arith_unchecked;
use crate::builder::ArithBuilder;
use crate::cell::CellRealization;
use crate::error::Result;
use crate::ripple::ripple_subtract;
use crate::strategy::{ArithOp, Strategy};
use crate::words::{mux, mux_word, shift_left, zero_extend};
use arithgen_net::{Network, Signal};

/// Quotient and remainder words, LSB first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Division {
    pub quotient: Vec<Signal>,
    pub remainder: Vec<Signal>,
}

/// Restoring divider built from ripple-borrow subtractors
pub fn restoring_divider<N: Network>(
    ntk: &mut N,
    dividend: &[Signal],
    divisor: &[Signal],
) -> Result<Division> {
    ArithBuilder::new(ntk).restoring_divider(dividend, divisor)
}

/// Restoring divider using `subtractor` for every step
pub fn restoring_divider_with<N: Network>(
    ntk: &mut N,
    dividend: &[Signal],
    divisor: &[Signal],
    subtractor: Strategy,
) -> Result<Division> {
    ArithBuilder::new(ntk).restoring_divider_with(dividend, divisor, subtractor)
}

pub(crate) fn restoring<N: Network>(
    ntk: &mut N,
    cell: CellRealization,
    dividend: &[Signal],
    divisor: &[Signal],
) -> Division {
    let width = dividend.len();
    let zero = ntk.constant(false);
    let mut remainder = zero_extend(ntk, dividend, 2 * width - 1);
    let mut shifted = shift_left(ntk, divisor, width - 1);
    let mut quotient = Vec::with_capacity(width);

    for step in 0..width {
        if step > 0 {
            // The remainder never exceeds n bits, so the dropped MSB is zero
            remainder.pop();
            shifted.remove(0);
        }
        let previous = remainder.clone();
        let mut borrow = zero;
        ripple_subtract(ntk, cell, &mut remainder, &shifted, &mut borrow);
        let fits = ntk.not(borrow);
        remainder = mux_word(ntk, fits, &remainder, &previous);
        quotient.push(fits);
    }

    quotient.reverse();
    Division {
        quotient,
        remainder,
    }
}

pub(crate) fn restoring_with<N: Network>(
    ntk: &mut N,
    cell: CellRealization,
    dividend: &[Signal],
    divisor: &[Signal],
    subtractor: Strategy,
) -> Division {
    let width = dividend.len();
    let zero = ntk.constant(false);
    let mut remainder = dividend.to_vec();
    let mut shifted = shift_left(ntk, divisor, width - 1);
    let mut quotient = Vec::with_capacity(width);

    while shifted.len() > width {
        let (low, high) = shifted.split_at(width);
        let overflow = ntk.nary_or(high);

        let previous = remainder.clone();
        let mut borrow = zero;
        arith_unchecked(
            ntk,
            cell,
            ArithOp::Sub,
            subtractor,
            &mut remainder,
            low,
            &mut borrow,
        );

        let no_overflow = ntk.not(overflow);
        let no_borrow = ntk.not(borrow);
        quotient.push(mux(ntk, overflow, no_overflow, no_borrow));

        let restored = mux_word(ntk, borrow, &previous, &remainder);
        remainder = mux_word(ntk, overflow, &previous, &restored);
        shifted.remove(0);
    }

    let previous = remainder.clone();
    let mut borrow = zero;
    arith_unchecked(
        ntk,
        cell,
        ArithOp::Sub,
        subtractor,
        &mut remainder,
        &shifted,
        &mut borrow,
    );
    let fits = ntk.not(borrow);
    remainder = mux_word(ntk, fits, &remainder, &previous);
    quotient.push(fits);

    quotient.reverse();
    Division {
        quotient,
        remainder,
    }
}
