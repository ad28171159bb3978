//! Recursive carry-lookahead scan
//!
//! The sequence is halved recursively. Block summaries are built bottom-up
//! without reference to any incoming carry; carries are then distributed
//! top-down, each half receiving the reduced node right below it.

use super::PgNode;
use arithgen_net::Network;
use std::collections::HashMap;

/// Summaries of multi-bit blocks keyed by `(start, end)`
type Summaries = HashMap<(usize, usize), PgNode>;

pub(super) fn scan<N: Network>(ntk: &mut N, nodes: &mut [PgNode]) {
    let leaves = nodes.to_vec();
    let mut summaries = Summaries::new();
    summarize(ntk, &leaves, 0, leaves.len(), &mut summaries);
    distribute(ntk, nodes, &leaves, 0, leaves.len(), None, &summaries);
}

fn summary(leaves: &[PgNode], start: usize, end: usize, summaries: &Summaries) -> PgNode {
    if end - start == 1 {
        leaves[start]
    } else {
        summaries[&(start, end)]
    }
}

fn summarize<N: Network>(
    ntk: &mut N,
    leaves: &[PgNode],
    start: usize,
    end: usize,
    summaries: &mut Summaries,
) -> PgNode {
    if end - start == 1 {
        return leaves[start];
    }
    let mid = start + (end - start) / 2;
    let lower = summarize(ntk, leaves, start, mid, summaries);
    let mut block = summarize(ntk, leaves, mid, end, summaries);
    block.combine(ntk, &lower);
    summaries.insert((start, end), block);
    block
}

/// Reduce every node in `[start, end)` given the reduced node `below` it
fn distribute<N: Network>(
    ntk: &mut N,
    nodes: &mut [PgNode],
    leaves: &[PgNode],
    start: usize,
    end: usize,
    below: Option<PgNode>,
    summaries: &Summaries,
) {
    if end - start == 1 {
        if let Some(below) = below {
            nodes[start].combine(ntk, &below);
        }
        return;
    }

    let mid = start + (end - start) / 2;
    let mut carry_into_upper = summary(leaves, start, mid, summaries);
    if let Some(below) = below {
        carry_into_upper.combine(ntk, &below);
    }
    distribute(ntk, nodes, leaves, start, mid, below, summaries);
    distribute(ntk, nodes, leaves, mid, end, Some(carry_into_upper), summaries);
}
