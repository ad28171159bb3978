//! Kogge-Stone scan: every node doubles its span each round

use super::PgNode;
use crate::strategy::ceil_log2;
use arithgen_net::Network;

pub(super) fn scan<N: Network>(ntk: &mut N, nodes: &mut [PgNode]) {
    let width = nodes.len();
    for round in 0..ceil_log2(width) {
        let span = 1usize << round;
        // All combines of a round read the previous round's values
        let previous = nodes.to_vec();
        for (i, lower) in previous.iter().enumerate().take(width - span) {
            nodes[i + span].combine(ntk, lower);
        }
    }
}
