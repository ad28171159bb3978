//! Node handles and complemented-edge signals

use std::fmt;
use std::ops::Not;

/// Unique identifier for a network node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// The constant false node, present in every network
    pub const CONST: NodeId = NodeId(0);

    /// Position of this node in the network's node vector
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A reference to a node output, optionally complemented
///
/// Signals are plain values: copying one never creates logic. Inversion is
/// free and never allocates a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Signal {
    /// The referenced node
    pub node: NodeId,
    /// Whether this reference is complemented
    pub inverted: bool,
}

impl Signal {
    /// Constant false
    pub const FALSE: Signal = Signal {
        node: NodeId::CONST,
        inverted: false,
    };

    /// Constant true (complemented false)
    pub const TRUE: Signal = Signal {
        node: NodeId::CONST,
        inverted: true,
    };

    /// Create a positive signal
    pub fn new(node: NodeId) -> Self {
        Self {
            node,
            inverted: false,
        }
    }

    /// Create a complemented signal
    pub fn complemented(node: NodeId) -> Self {
        Self {
            node,
            inverted: true,
        }
    }

    /// Constant signal for `value`
    pub fn constant(value: bool) -> Self {
        if value {
            Self::TRUE
        } else {
            Self::FALSE
        }
    }

    /// Invert this signal
    pub fn invert(self) -> Self {
        Self {
            node: self.node,
            inverted: !self.inverted,
        }
    }

    /// The same node without complementation
    pub fn regular(self) -> Self {
        Self::new(self.node)
    }

    /// Complement this signal when `condition` holds
    pub fn invert_if(self, condition: bool) -> Self {
        if condition {
            self.invert()
        } else {
            self
        }
    }

    /// Check if this is a constant
    pub fn is_const(&self) -> bool {
        self.node == NodeId::CONST
    }

    /// Get constant value if this is a constant signal
    pub fn const_value(&self) -> Option<bool> {
        if self.is_const() {
            Some(self.inverted)
        } else {
            None
        }
    }
}

impl Not for Signal {
    type Output = Signal;

    fn not(self) -> Signal {
        self.invert()
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.const_value() {
            Some(value) => write!(f, "{}", u8::from(value)),
            None if self.inverted => write!(f, "!n{}", self.node.0),
            None => write!(f, "n{}", self.node.0),
        }
    }
}
