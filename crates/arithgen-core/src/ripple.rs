//! Ripple-carry and ripple-borrow chains
//!
//! One cell per bit, carry threaded from LSB to MSB. Depth and size are
//! both linear in the width.

use crate::builder::ArithBuilder;
use crate::cell::{full_adder, full_subtractor, CellRealization};
use crate::error::Result;
use arithgen_net::{Network, Signal};

/// `a := a + b + carry`, `carry := carry-out`
pub fn carry_ripple_adder<N: Network>(
    ntk: &mut N,
    a: &mut [Signal],
    b: &[Signal],
    carry: &mut Signal,
) -> Result<()> {
    ArithBuilder::new(ntk).carry_ripple_adder(a, b, carry)
}

/// `a := a - b - borrow`, `borrow := borrow-out`
pub fn borrow_ripple_subtractor<N: Network>(
    ntk: &mut N,
    a: &mut [Signal],
    b: &[Signal],
    borrow: &mut Signal,
) -> Result<()> {
    ArithBuilder::new(ntk).borrow_ripple_subtractor(a, b, borrow)
}

/// `a := a + !b + carry`, `carry := carry-out`
///
/// With `carry` set to true this is two's-complement subtraction and the
/// carry-out is the complement of the borrow.
pub fn carry_ripple_subtractor<N: Network>(
    ntk: &mut N,
    a: &mut [Signal],
    b: &[Signal],
    carry: &mut Signal,
) -> Result<()> {
    ArithBuilder::new(ntk).carry_ripple_subtractor(a, b, carry)
}

pub(crate) fn ripple_add<N: Network>(
    ntk: &mut N,
    cell: CellRealization,
    a: &mut [Signal],
    b: &[Signal],
    carry: &mut Signal,
) {
    debug_assert_eq!(a.len(), b.len());
    for (ai, bi) in a.iter_mut().zip(b) {
        let (sum, carry_out) = full_adder(ntk, cell, *ai, *bi, *carry);
        *ai = sum;
        *carry = carry_out;
    }
}

pub(crate) fn ripple_subtract<N: Network>(
    ntk: &mut N,
    cell: CellRealization,
    a: &mut [Signal],
    b: &[Signal],
    borrow: &mut Signal,
) {
    debug_assert_eq!(a.len(), b.len());
    for (ai, bi) in a.iter_mut().zip(b) {
        let (difference, borrow_out) = full_subtractor(ntk, cell, *ai, *bi, *borrow);
        *ai = difference;
        *borrow = borrow_out;
    }
}

pub(crate) fn ripple_complement_add<N: Network>(
    ntk: &mut N,
    cell: CellRealization,
    a: &mut [Signal],
    b: &[Signal],
    carry: &mut Signal,
) {
    debug_assert_eq!(a.len(), b.len());
    for (ai, bi) in a.iter_mut().zip(b) {
        let not_b = ntk.not(*bi);
        let (sum, carry_out) = full_adder(ntk, cell, *ai, not_b, *carry);
        *ai = sum;
        *carry = carry_out;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ArithError;
    use arithgen_net::{GateNetwork, NetworkKind};

    #[test]
    fn test_ripple_adder_size() {
        let mut ntk = GateNetwork::new("rca", NetworkKind::Klut);
        let mut a = ntk.add_inputs("a", 4);
        let b = ntk.add_inputs("b", 4);
        let mut carry = Signal::FALSE;
        carry_ripple_adder(&mut ntk, &mut a, &b, &mut carry).expect("adder");
        // One sum and one carry LUT per bit, the first carry-in is constant
        assert!(ntk.gate_count() <= 8);
        assert!(!carry.is_const());
    }

    #[test]
    fn test_mismatch_leaves_operand_untouched() {
        let mut ntk = GateNetwork::new("rca", NetworkKind::Aig);
        let mut a = ntk.add_inputs("a", 4);
        let b = ntk.add_inputs("b", 3);
        let before = a.clone();
        let mut borrow = Signal::FALSE;

        let result = borrow_ripple_subtractor(&mut ntk, &mut a, &b, &mut borrow);
        assert_eq!(result, Err(ArithError::WidthMismatch { left: 4, right: 3 }));
        assert_eq!(a, before);
        assert_eq!(borrow, Signal::FALSE);
        assert_eq!(ntk.gate_count(), 0);
    }

    #[test]
    fn test_complement_add_subtracts() {
        let mut ntk = GateNetwork::new("crs", NetworkKind::Xmg);
        let mut a = ntk.add_inputs("a", 3);
        let b = ntk.add_inputs("b", 3);
        let mut carry = Signal::TRUE;
        carry_ripple_subtractor(&mut ntk, &mut a, &b, &mut carry).expect("subtractor");
        ntk.add_outputs("d", &a);
        ntk.add_output("c", carry);

        let tables = ntk.truth_tables().expect("simulation");
        for m in 0..64usize {
            let (x, y) = (m & 7, m >> 3);
            let difference = x.wrapping_sub(y) & 7;
            for bit in 0..3 {
                assert_eq!(tables[bit].bit(m), (difference >> bit) & 1 == 1);
            }
            // Carry-out is the inverted borrow
            assert_eq!(tables[3].bit(m), x >= y);
        }
    }
}
