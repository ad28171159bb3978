//! Structurally Hashed Gate Networks
//!
//! [`GateNetwork`] is a single graph type covering the common logic network
//! families. Its [`NetworkKind`] decides which node types are native; every
//! other gate is lowered onto them at construction time.
//!
//! | Kind | Native nodes | Capabilities     |
//! |------|--------------|------------------|
//! | AIG  | AND          | none             |
//! | XAG  | AND, XOR     | none             |
//! | MIG  | MAJ          | majority         |
//! | XMG  | MAJ, XOR3    | majority, xor3   |
//! | KLUT | LUT          | lut, nary_or     |
//!
//! All edges may be complemented. Gates are normalized and looked up in a
//! structural hash table before a new node is created, so building the same
//! function twice yields the same signal.

use crate::capability::Capabilities;
use crate::network::{
    majority_from_gates, or_tree, shannon_expand, truth_table_mask, xor3_from_gates, Network,
    MAX_LUT_FANIN,
};
use crate::signal::{NodeId, Signal};
use crate::stats::NetworkStats;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Logic network family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkKind {
    /// And-inverter graph
    #[default]
    Aig,
    /// Xor-and graph
    Xag,
    /// Majority-inverter graph
    Mig,
    /// Xor-majority graph
    Xmg,
    /// k-input LUT network
    Klut,
}

impl NetworkKind {
    /// Every network kind
    pub const ALL: [NetworkKind; 5] = [
        NetworkKind::Aig,
        NetworkKind::Xag,
        NetworkKind::Mig,
        NetworkKind::Xmg,
        NetworkKind::Klut,
    ];

    /// Natively supported primitives
    pub fn capabilities(self) -> Capabilities {
        match self {
            NetworkKind::Aig | NetworkKind::Xag => Capabilities::basic(),
            NetworkKind::Mig => Capabilities::basic().with_majority(),
            NetworkKind::Xmg => Capabilities::basic().with_majority().with_xor3(),
            NetworkKind::Klut => Capabilities::basic().with_lut().with_nary_or(),
        }
    }

    /// Short lowercase name
    pub fn name(self) -> &'static str {
        match self {
            NetworkKind::Aig => "aig",
            NetworkKind::Xag => "xag",
            NetworkKind::Mig => "mig",
            NetworkKind::Xmg => "xmg",
            NetworkKind::Klut => "klut",
        }
    }
}

impl std::fmt::Display for NetworkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A network node
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GateNode {
    /// Constant false (node 0)
    Const,
    /// Primary input
    Input {
        /// Input name
        name: String,
    },
    /// Two-input AND
    And(Signal, Signal),
    /// Two-input XOR
    Xor(Signal, Signal),
    /// Three-input majority
    Maj(Signal, Signal, Signal),
    /// Three-input XOR
    Xor3(Signal, Signal, Signal),
    /// Lookup table; fanin `i` is truth-table variable `i`
    Lut {
        fanins: Vec<Signal>,
        truth_table: u64,
    },
}

impl GateNode {
    /// Check if this node is a logic gate
    pub fn is_gate(&self) -> bool {
        !matches!(self, GateNode::Const | GateNode::Input { .. })
    }

    /// Check if this is an input node
    pub fn is_input(&self) -> bool {
        matches!(self, GateNode::Input { .. })
    }

    /// Fanin signals in order
    pub fn fanins(&self) -> Vec<Signal> {
        match self {
            GateNode::Const | GateNode::Input { .. } => Vec::new(),
            GateNode::And(a, b) | GateNode::Xor(a, b) => vec![*a, *b],
            GateNode::Maj(a, b, c) | GateNode::Xor3(a, b, c) => vec![*a, *b, *c],
            GateNode::Lut { fanins, .. } => fanins.clone(),
        }
    }

    /// The same gate with every fanin passed through `remap`
    fn map_fanins(&self, mut remap: impl FnMut(Signal) -> Signal) -> GateNode {
        match self {
            GateNode::Const => GateNode::Const,
            GateNode::Input { name } => GateNode::Input { name: name.clone() },
            GateNode::And(a, b) => GateNode::And(remap(*a), remap(*b)),
            GateNode::Xor(a, b) => GateNode::Xor(remap(*a), remap(*b)),
            GateNode::Maj(a, b, c) => GateNode::Maj(remap(*a), remap(*b), remap(*c)),
            GateNode::Xor3(a, b, c) => GateNode::Xor3(remap(*a), remap(*b), remap(*c)),
            GateNode::Lut {
                fanins,
                truth_table,
            } => GateNode::Lut {
                fanins: fanins.iter().map(|s| remap(*s)).collect(),
                truth_table: *truth_table,
            },
        }
    }
}

/// A structurally hashed gate network
#[derive(Debug, Clone)]
pub struct GateNetwork {
    /// Network name
    pub name: String,
    kind: NetworkKind,
    /// All nodes in topological order; node 0 is the constant
    nodes: Vec<GateNode>,
    inputs: Vec<NodeId>,
    outputs: Vec<(String, Signal)>,
    strash_enabled: bool,
    strash_map: HashMap<GateNode, NodeId>,
}

impl GateNetwork {
    /// Create an empty network of the given kind
    pub fn new(name: impl Into<String>, kind: NetworkKind) -> Self {
        Self {
            name: name.into(),
            kind,
            nodes: vec![GateNode::Const],
            inputs: Vec::new(),
            outputs: Vec::new(),
            strash_enabled: true,
            strash_map: HashMap::new(),
        }
    }

    /// Disable structural hashing; trivial-case folding still applies
    pub fn without_structural_hashing(mut self) -> Self {
        self.strash_enabled = false;
        self.strash_map.clear();
        self
    }

    /// Network family
    pub fn kind(&self) -> NetworkKind {
        self.kind
    }

    /// Whether identical gates are shared
    pub fn is_structurally_hashed(&self) -> bool {
        self.strash_enabled
    }

    /// Total nodes, including the constant and inputs
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of logic gates
    pub fn gate_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_gate()).count()
    }

    /// Number of primary inputs
    pub fn input_count(&self) -> usize {
        self.inputs.len()
    }

    /// Number of primary outputs
    pub fn output_count(&self) -> usize {
        self.outputs.len()
    }

    /// Get a node by ID
    pub fn get_node(&self, id: NodeId) -> Option<&GateNode> {
        self.nodes.get(id.index())
    }

    /// Primary inputs in creation order
    pub fn inputs(&self) -> &[NodeId] {
        &self.inputs
    }

    /// Primary outputs in creation order
    pub fn outputs(&self) -> &[(String, Signal)] {
        &self.outputs
    }

    /// Iterate over all nodes in topological order
    pub fn iter_nodes(&self) -> impl Iterator<Item = (NodeId, &GateNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId(i as u32), n))
    }

    /// Add a primary input
    pub fn add_input(&mut self, name: impl Into<String>) -> Signal {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(GateNode::Input { name: name.into() });
        self.inputs.push(id);
        Signal::new(id)
    }

    /// Add `count` inputs named `{prefix}0`, `{prefix}1`, ...
    pub fn add_inputs(&mut self, prefix: &str, count: usize) -> Vec<Signal> {
        (0..count)
            .map(|i| self.add_input(format!("{}{}", prefix, i)))
            .collect()
    }

    /// Add a primary output
    pub fn add_output(&mut self, name: impl Into<String>, signal: Signal) {
        self.outputs.push((name.into(), signal));
    }

    /// Add one output per signal, named `{prefix}0`, `{prefix}1`, ...
    pub fn add_outputs(&mut self, prefix: &str, signals: &[Signal]) {
        for (i, signal) in signals.iter().enumerate() {
            self.add_output(format!("{}{}", prefix, i), *signal);
        }
    }

    /// Insert a gate, reusing an identical one when hashing is enabled
    fn add_gate(&mut self, node: GateNode) -> Signal {
        if self.strash_enabled {
            if let Some(&existing) = self.strash_map.get(&node) {
                return Signal::new(existing);
            }
        }

        let id = NodeId(self.nodes.len() as u32);
        if self.strash_enabled {
            self.strash_map.insert(node.clone(), id);
        }
        self.nodes.push(node);
        Signal::new(id)
    }

    fn create_and(&mut self, a: Signal, b: Signal) -> Signal {
        let (a, b) = ordered(a, b);
        self.add_gate(GateNode::And(a, b))
    }

    /// XOR with complements pulled to the output
    fn create_xor(&mut self, a: Signal, b: Signal) -> Signal {
        let inverted = a.inverted ^ b.inverted;
        let (a, b) = ordered(a.regular(), b.regular());
        self.add_gate(GateNode::Xor(a, b)).invert_if(inverted)
    }

    fn create_maj(&mut self, a: Signal, b: Signal, c: Signal) -> Signal {
        let mut fanins = [a, b, c];
        fanins.sort();
        let [x, y, z] = fanins;

        // maj(x, x, z) = x
        if x == y || x == z {
            return x;
        }
        if y == z {
            return y;
        }
        // maj(x, !x, z) = z
        if x.node == y.node {
            return z;
        }
        if x.node == z.node {
            return y;
        }
        if y.node == z.node {
            return x;
        }

        // Self-duality: keep at most one complemented fanin
        let complemented = fanins.iter().filter(|s| s.inverted).count();
        if complemented >= 2 {
            return self.add_gate(GateNode::Maj(!x, !y, !z)).invert();
        }
        self.add_gate(GateNode::Maj(x, y, z))
    }

    /// XOR3 with complements pulled to the output
    fn create_xor3(&mut self, a: Signal, b: Signal, c: Signal) -> Signal {
        let inverted = a.inverted ^ b.inverted ^ c.inverted;
        let mut fanins = [a.regular(), b.regular(), c.regular()];
        fanins.sort();
        let [x, y, z] = fanins;

        if x == y {
            return z.invert_if(inverted);
        }
        if y == z {
            return x.invert_if(inverted);
        }
        self.add_gate(GateNode::Xor3(x, y, z)).invert_if(inverted)
    }

    fn create_lut(&mut self, fanins: &[Signal], truth_table: u64) -> Signal {
        debug_assert!(fanins.len() <= MAX_LUT_FANIN);
        let mask = truth_table_mask(fanins.len());
        let table = truth_table & mask;
        if table == 0 {
            return Signal::FALSE;
        }
        if table == mask {
            return Signal::TRUE;
        }
        self.add_gate(GateNode::Lut {
            fanins: fanins.to_vec(),
            truth_table: table,
        })
    }

    /// Symmetric LUT: fanin order does not change the function
    fn create_symmetric_lut(&mut self, fanins: &[Signal], truth_table: u64) -> Signal {
        let mut sorted = fanins.to_vec();
        sorted.sort();
        self.create_lut(&sorted, truth_table)
    }

    /// Compute network statistics
    pub fn compute_stats(&self) -> NetworkStats {
        let mut stats = NetworkStats {
            kind: self.kind,
            input_count: self.input_count(),
            output_count: self.output_count(),
            ..NetworkStats::default()
        };

        let mut levels = vec![0u32; self.nodes.len()];
        for (id, node) in self.iter_nodes() {
            match node {
                GateNode::Const | GateNode::Input { .. } => continue,
                GateNode::And(..) => stats.and_count += 1,
                GateNode::Xor(..) => stats.xor_count += 1,
                GateNode::Maj(..) => stats.maj_count += 1,
                GateNode::Xor3(..) => stats.xor3_count += 1,
                GateNode::Lut { .. } => stats.lut_count += 1,
            }
            let fanin_level = node
                .fanins()
                .iter()
                .map(|s| levels[s.node.index()])
                .max()
                .unwrap_or(0);
            levels[id.index()] = fanin_level + 1;
        }

        stats.gate_count = stats.and_count
            + stats.xor_count
            + stats.maj_count
            + stats.xor3_count
            + stats.lut_count;
        stats.depth = self
            .outputs
            .iter()
            .map(|(_, s)| levels[s.node.index()])
            .max()
            .unwrap_or(0);
        stats
    }

    /// Mark nodes in the transitive fanin of the outputs
    fn mark_live(&self) -> Vec<bool> {
        let mut live = vec![false; self.nodes.len()];
        let mut stack: Vec<NodeId> = self.outputs.iter().map(|(_, s)| s.node).collect();

        while let Some(id) = stack.pop() {
            if live[id.index()] {
                continue;
            }
            live[id.index()] = true;
            if let Some(node) = self.nodes.get(id.index()) {
                stack.extend(node.fanins().iter().map(|s| s.node));
            }
        }
        live
    }

    /// Copy of this network without gates that no output depends on
    ///
    /// All primary inputs are kept, in order, so simulation patterns stay
    /// valid across the cleanup.
    pub fn cleanup_dangling(&self) -> GateNetwork {
        let live = self.mark_live();
        let mut cleaned = GateNetwork::new(self.name.clone(), self.kind);
        cleaned.strash_enabled = self.strash_enabled;

        let mut mapping: IndexMap<NodeId, Signal> = IndexMap::new();
        mapping.insert(NodeId::CONST, Signal::FALSE);

        for (id, node) in self.iter_nodes() {
            match node {
                GateNode::Const => {}
                GateNode::Input { name } => {
                    let signal = cleaned.add_input(name.clone());
                    mapping.insert(id, signal);
                }
                gate if live[id.index()] => {
                    let rebuilt = gate.map_fanins(|s| mapping[&s.node].invert_if(s.inverted));
                    let signal = cleaned.add_gate(rebuilt);
                    mapping.insert(id, signal);
                }
                _ => {}
            }
        }

        for (name, signal) in &self.outputs {
            let mapped = mapping[&signal.node].invert_if(signal.inverted);
            cleaned.add_output(name.clone(), mapped);
        }
        cleaned
    }
}

impl Network for GateNetwork {
    fn capabilities(&self) -> Capabilities {
        self.kind.capabilities()
    }

    fn and(&mut self, a: Signal, b: Signal) -> Signal {
        if let Some(folded) = fold_and(a, b) {
            return folded;
        }
        match self.kind {
            NetworkKind::Aig | NetworkKind::Xag => self.create_and(a, b),
            NetworkKind::Mig | NetworkKind::Xmg => self.create_maj(a, b, Signal::FALSE),
            NetworkKind::Klut => self.create_symmetric_lut(&[a, b], 0x8),
        }
    }

    fn xor(&mut self, a: Signal, b: Signal) -> Signal {
        if let Some(folded) = fold_xor(a, b) {
            return folded;
        }
        match self.kind {
            NetworkKind::Xag => self.create_xor(a, b),
            NetworkKind::Xmg => self.create_xor3(Signal::FALSE, a, b),
            NetworkKind::Klut => self.create_symmetric_lut(&[a, b], 0x6),
            NetworkKind::Aig | NetworkKind::Mig => {
                // a ^ b = (a & !b) | (!a & b)
                let left = self.and(a, !b);
                let right = self.and(!a, b);
                self.or(left, right)
            }
        }
    }

    fn majority(&mut self, a: Signal, b: Signal, c: Signal) -> Signal {
        match self.kind {
            NetworkKind::Mig | NetworkKind::Xmg => self.create_maj(a, b, c),
            NetworkKind::Klut => self.create_symmetric_lut(&[a, b, c], 0xe8),
            NetworkKind::Aig | NetworkKind::Xag => majority_from_gates(self, a, b, c),
        }
    }

    fn xor3(&mut self, a: Signal, b: Signal, c: Signal) -> Signal {
        match self.kind {
            NetworkKind::Xmg => self.create_xor3(a, b, c),
            NetworkKind::Klut => self.create_symmetric_lut(&[a, b, c], 0x96),
            _ => xor3_from_gates(self, a, b, c),
        }
    }

    fn lut_node(&mut self, fanins: &[Signal], truth_table: u64) -> Signal {
        match self.kind {
            NetworkKind::Klut => self.create_lut(fanins, truth_table),
            _ => shannon_expand(self, fanins, truth_table),
        }
    }

    fn nary_or(&mut self, signals: &[Signal]) -> Signal {
        if self.kind != NetworkKind::Klut || signals.len() <= 2 {
            return or_tree(self, signals);
        }
        // One OR LUT per group of up to MAX_LUT_FANIN signals, then recurse
        let mut level = Vec::with_capacity(signals.len().div_ceil(MAX_LUT_FANIN));
        for group in signals.chunks(MAX_LUT_FANIN) {
            let signal = match group {
                [single] => *single,
                _ => self.create_symmetric_lut(group, truth_table_mask(group.len()) & !1),
            };
            level.push(signal);
        }
        self.nary_or(&level)
    }
}

fn ordered(a: Signal, b: Signal) -> (Signal, Signal) {
    if a > b {
        (b, a)
    } else {
        (a, b)
    }
}

/// Constant and duplicate operands of an AND
fn fold_and(a: Signal, b: Signal) -> Option<Signal> {
    match (a.const_value(), b.const_value()) {
        (Some(false), _) | (_, Some(false)) => Some(Signal::FALSE),
        (Some(true), _) => Some(b),
        (_, Some(true)) => Some(a),
        _ if a == b => Some(a),
        _ if a.node == b.node => Some(Signal::FALSE),
        _ => None,
    }
}

/// Constant and duplicate operands of an XOR
fn fold_xor(a: Signal, b: Signal) -> Option<Signal> {
    match (a.const_value(), b.const_value()) {
        (Some(value), _) => Some(b.invert_if(value)),
        (_, Some(value)) => Some(a.invert_if(value)),
        _ if a == b => Some(Signal::FALSE),
        _ if a.node == b.node => Some(Signal::TRUE),
        _ => None,
    }
}
