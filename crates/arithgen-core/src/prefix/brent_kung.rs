//! Brent-Kung scan: a pairing tree followed by an inverse tree

use super::PgNode;
use crate::strategy::ceil_log2;
use arithgen_net::Network;

pub(super) fn scan<N: Network>(ntk: &mut N, nodes: &mut [PgNode]) {
    for round in 0..ceil_log2(nodes.len()) {
        pairing_round(ntk, nodes, round);
    }
    up_sweep(ntk, nodes);
}

/// Combine node `i + 2^round` with node `i` for `i = 2^round - 1`,
/// stepping by `2^(round + 1)`
pub(super) fn pairing_round<N: Network>(ntk: &mut N, nodes: &mut [PgNode], round: u32) {
    let span = 1usize << round;
    let mut i = span - 1;
    while i + span < nodes.len() {
        let lower = nodes[i];
        nodes[i + span].combine(ntk, &lower);
        i += span << 1;
    }
}

/// Close every remaining gap, least significant node first
///
/// A node covering `[low, i]` is completed by node `low - 1`. That node
/// sits below it, so it is already complete when visited in order.
pub(super) fn up_sweep<N: Network>(ntk: &mut N, nodes: &mut [PgNode]) {
    for i in 1..nodes.len() {
        if nodes[i].is_reduced() {
            continue;
        }
        let lower = nodes[nodes[i].low - 1];
        debug_assert!(lower.is_reduced());
        nodes[i].combine(ntk, &lower);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arithgen_net::{GateNetwork, NetworkKind, Signal};

    #[test]
    fn test_pairing_tree_ranges() {
        let mut ntk = GateNetwork::new("bk", NetworkKind::Aig);
        let x = ntk.add_inputs("x", 16);
        let mut nodes: Vec<PgNode> = (0..8).map(|i| PgNode::leaf(x[2 * i], x[2 * i + 1], i)).collect();
        nodes[0].absorb_carry(&mut ntk, Signal::FALSE);

        for round in 0..3 {
            pairing_round(&mut ntk, &mut nodes, round);
        }
        let lows: Vec<usize> = nodes.iter().map(|n| n.low).collect();
        assert_eq!(lows, vec![0, 0, 2, 0, 4, 4, 6, 0]);

        up_sweep(&mut ntk, &mut nodes);
        assert!(nodes.iter().all(PgNode::is_reduced));
    }
}
