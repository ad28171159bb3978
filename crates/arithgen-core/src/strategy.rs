//! Carry/borrow topology selection
//!
//! # Supported Topologies
//!
//! | Strategy         | Ops      | Depth        | Size       |
//! |------------------|----------|--------------|------------|
//! | Ripple           | add, sub | O(n)         | O(n)       |
//! | CarryLookahead   | add      | O(log n)     | O(n)       |
//! | BorrowLookahead  | sub      | O(log n)     | O(n)       |
//! | BrentKung        | add, sub | 2 log n      | O(n)       |
//! | KoggeStone       | add, sub | log n        | O(n log n) |
//! | HanCarlson       | add, sub | log n + 2    | O(n log n) |

use crate::error::ArithError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Arithmetic operation a strategy is applied to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithOp {
    Add,
    Sub,
}

impl ArithOp {
    pub fn name(self) -> &'static str {
        match self {
            ArithOp::Add => "addition",
            ArithOp::Sub => "subtraction",
        }
    }
}

/// Adder/subtractor topology
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Chain of full-adder/full-subtractor cells
    Ripple,
    /// Recursive carry-lookahead adder
    CarryLookahead,
    /// Recursive borrow-lookahead subtractor
    BorrowLookahead,
    /// Brent-Kung parallel prefix
    BrentKung,
    /// Kogge-Stone parallel prefix
    KoggeStone,
    /// Han-Carlson parallel prefix
    HanCarlson,
}

impl Strategy {
    /// Every strategy tag
    pub const ALL: [Strategy; 6] = [
        Strategy::Ripple,
        Strategy::CarryLookahead,
        Strategy::BorrowLookahead,
        Strategy::BrentKung,
        Strategy::KoggeStone,
        Strategy::HanCarlson,
    ];

    /// Canonical name, accepted by [`FromStr`]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ripple => "ripple",
            Self::CarryLookahead => "carry-lookahead",
            Self::BorrowLookahead => "borrow-lookahead",
            Self::BrentKung => "brent-kung",
            Self::KoggeStone => "kogge-stone",
            Self::HanCarlson => "han-carlson",
        }
    }

    /// Whether this topology can build `op`
    pub fn supports(&self, op: ArithOp) -> bool {
        !matches!(
            (self, op),
            (Self::CarryLookahead, ArithOp::Sub) | (Self::BorrowLookahead, ArithOp::Add)
        )
    }

    /// Strategies that build adders
    pub fn adders() -> impl Iterator<Item = Strategy> {
        Self::ALL.into_iter().filter(|s| s.supports(ArithOp::Add))
    }

    /// Strategies that build subtractors
    pub fn subtractors() -> impl Iterator<Item = Strategy> {
        Self::ALL.into_iter().filter(|s| s.supports(ArithOp::Sub))
    }

    /// Works on operands zero-extended to a power of two
    pub fn is_lookahead(&self) -> bool {
        matches!(self, Self::CarryLookahead | Self::BorrowLookahead)
    }

    /// Estimate depth for given bitwidth (in gate levels)
    pub fn estimate_depth(&self, width: usize) -> usize {
        let levels = ceil_log2(width) as usize;
        match self {
            Self::Ripple => 2 * width,
            Self::CarryLookahead | Self::BorrowLookahead => 4 * levels + 2,
            Self::BrentKung => 4 * levels + 2,
            Self::KoggeStone => 2 * levels + 2,
            Self::HanCarlson => 2 * levels + 4,
        }
    }

    /// Estimate size for given bitwidth (in gates)
    pub fn estimate_size(&self, width: usize) -> usize {
        let levels = ceil_log2(width) as usize;
        match self {
            Self::Ripple => 7 * width,
            Self::CarryLookahead | Self::BorrowLookahead => 9 * width,
            Self::BrentKung => 9 * width,
            Self::KoggeStone => 5 * width + 3 * width * levels,
            Self::HanCarlson => 5 * width + 3 * width * levels / 2,
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ArithError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "ripple" | "rca" | "brs" => Ok(Self::Ripple),
            "carry-lookahead" | "lookahead" | "cla" => Ok(Self::CarryLookahead),
            "borrow-lookahead" | "bls" => Ok(Self::BorrowLookahead),
            "brent-kung" | "bk" => Ok(Self::BrentKung),
            "kogge-stone" | "ks" => Ok(Self::KoggeStone),
            "han-carlson" | "hc" => Ok(Self::HanCarlson),
            _ => Err(ArithError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Smallest `k` with `2^k >= n`; zero for `n <= 1`
pub fn ceil_log2(n: usize) -> u32 {
    if n <= 1 {
        0
    } else {
        usize::BITS - (n - 1).leading_zeros()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ceil_log2() {
        assert_eq!(ceil_log2(0), 0);
        assert_eq!(ceil_log2(1), 0);
        assert_eq!(ceil_log2(2), 1);
        assert_eq!(ceil_log2(3), 2);
        assert_eq!(ceil_log2(4), 2);
        assert_eq!(ceil_log2(5), 3);
        assert_eq!(ceil_log2(64), 6);
        assert_eq!(ceil_log2(65), 7);
    }

    #[test]
    fn test_parse_names() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.name().parse::<Strategy>(), Ok(strategy));
        }
        assert_eq!("Kogge_Stone".parse::<Strategy>(), Ok(Strategy::KoggeStone));
        assert_eq!("BLS".parse::<Strategy>(), Ok(Strategy::BorrowLookahead));
        assert_eq!("BRS".parse::<Strategy>(), Ok(Strategy::Ripple));
        assert_eq!(
            "sklansky".parse::<Strategy>(),
            Err(ArithError::UnknownStrategy("sklansky".to_string()))
        );
    }

    #[test]
    fn test_supported_operations() {
        assert_eq!(Strategy::adders().count(), 5);
        assert_eq!(Strategy::subtractors().count(), 5);
        assert!(!Strategy::CarryLookahead.supports(ArithOp::Sub));
        assert!(!Strategy::BorrowLookahead.supports(ArithOp::Add));
        assert!(Strategy::HanCarlson.supports(ArithOp::Sub));
    }

    #[test]
    fn test_estimates() {
        assert!(Strategy::Ripple.estimate_depth(32) > Strategy::KoggeStone.estimate_depth(32));
        assert!(Strategy::Ripple.estimate_size(32) < Strategy::KoggeStone.estimate_size(32));
        assert!(Strategy::BrentKung.estimate_size(32) < Strategy::KoggeStone.estimate_size(32));
    }
}
