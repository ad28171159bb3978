//! Bit-vector helpers
//!
//! Words are LSB-first slices of signals: index 0 has weight 1.

use arithgen_net::{Network, Signal};

/// Constant word holding the low `width` bits of `value`
pub fn constant_word<N: Network>(ntk: &mut N, value: u64, width: usize) -> Vec<Signal> {
    (0..width)
        .map(|i| ntk.constant(i < 64 && (value >> i) & 1 == 1))
        .collect()
}

/// `word` padded with constant zeros up to `width` bits
pub fn zero_extend<N: Network>(ntk: &mut N, word: &[Signal], width: usize) -> Vec<Signal> {
    let zero = ntk.constant(false);
    let mut extended = word.to_vec();
    if extended.len() < width {
        extended.resize(width, zero);
    }
    extended
}

/// `word` shifted towards the MSB by `amount`, growing by `amount` bits
pub fn shift_left<N: Network>(ntk: &mut N, word: &[Signal], amount: usize) -> Vec<Signal> {
    let zero = ntk.constant(false);
    let mut shifted = vec![zero; amount];
    shifted.extend_from_slice(word);
    shifted
}

/// `cond ? then : otherwise`
pub fn mux<N: Network>(ntk: &mut N, cond: Signal, then: Signal, otherwise: Signal) -> Signal {
    let picked = ntk.and(cond, then);
    let not_cond = ntk.not(cond);
    let other = ntk.and(not_cond, otherwise);
    ntk.or(picked, other)
}

/// Bitwise `cond ? then : otherwise` over equal-width words
pub fn mux_word<N: Network>(
    ntk: &mut N,
    cond: Signal,
    then: &[Signal],
    otherwise: &[Signal],
) -> Vec<Signal> {
    debug_assert_eq!(then.len(), otherwise.len());
    then.iter()
        .zip(otherwise)
        .map(|(t, e)| mux(ntk, cond, *t, *e))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use arithgen_net::{GateNetwork, NetworkKind};

    #[test]
    fn test_constant_word() {
        let mut ntk = GateNetwork::new("w", NetworkKind::Aig);
        let word = constant_word(&mut ntk, 0b1011, 6);
        let bits: Vec<Option<bool>> = word.iter().map(|s| s.const_value()).collect();
        assert_eq!(
            bits,
            vec![Some(true), Some(true), Some(false), Some(true), Some(false), Some(false)]
        );
        assert_eq!(ntk.gate_count(), 0);
    }

    #[test]
    fn test_extend_and_shift() {
        let mut ntk = GateNetwork::new("w", NetworkKind::Aig);
        let a = ntk.add_inputs("a", 3);
        let extended = zero_extend(&mut ntk, &a, 5);
        assert_eq!(&extended[..3], &a[..]);
        assert_eq!(extended[4], Signal::FALSE);
        assert_eq!(zero_extend(&mut ntk, &a, 2), a);

        let shifted = shift_left(&mut ntk, &a, 2);
        assert_eq!(shifted.len(), 5);
        assert_eq!(shifted[0], Signal::FALSE);
        assert_eq!(shifted[2], a[0]);
    }

    #[test]
    fn test_mux_word() {
        let mut ntk = GateNetwork::new("mux", NetworkKind::Aig);
        let sel = ntk.add_input("s");
        let t = ntk.add_inputs("t", 2);
        let e = ntk.add_inputs("e", 2);
        let out = mux_word(&mut ntk, sel, &t, &e);
        ntk.add_outputs("y", &out);

        // s=1, t=01, e=10 -> 01
        let result = ntk
            .evaluate(&[true, true, false, false, true])
            .expect("evaluation");
        assert_eq!(result, vec![true, false]);
        // s=0 -> e
        let result = ntk
            .evaluate(&[false, true, false, false, true])
            .expect("evaluation");
        assert_eq!(result, vec![false, true]);
    }
}
