//! Han-Carlson scan
//!
//! Two Brent-Kung pairing rounds leave every node `i` with `i % 4 == 3`
//! covering a four-bit block. Kogge-Stone doubling then runs on those
//! nodes only, and the Brent-Kung up-sweep fills in the rest.

use super::brent_kung;
use super::PgNode;
use crate::strategy::ceil_log2;
use arithgen_net::Network;

/// Stride of the nodes that take part in the doubling rounds
const STRIDE: usize = 4;

pub(super) fn scan<N: Network>(ntk: &mut N, nodes: &mut [PgNode]) {
    let width = nodes.len();
    if width <= STRIDE {
        brent_kung::scan(ntk, nodes);
        return;
    }

    let rounds = ceil_log2(width);
    brent_kung::pairing_round(ntk, nodes, 0);
    brent_kung::pairing_round(ntk, nodes, 1);

    for round in 2..rounds {
        let span = 1usize << round;
        let previous = nodes.to_vec();
        let mut i = STRIDE - 1;
        while i + span < width {
            nodes[i + span].combine(ntk, &previous[i]);
            i += STRIDE;
        }
    }

    brent_kung::up_sweep(ntk, nodes);
}
