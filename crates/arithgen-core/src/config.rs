//! Generator configuration
//!
//! ```toml
//! max_width = 128
//! cell = "majority-xor3"
//!
//! [divider]
//! kind = "advanced"
//! subtractor = "kogge-stone"
//!
//! [multiplier]
//! kind = "partial-product"
//! adder = "han-carlson"
//! ```

use crate::cell::CellRealization;
use crate::error::{ArithError, Result, DEFAULT_MAX_WIDTH};
use crate::strategy::{ArithOp, Strategy};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Divider construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum DividerAlgorithm {
    /// Narrowing window with ripple-borrow subtractors
    #[default]
    Restoring,
    /// Fixed-width remainder with a pluggable subtractor
    Advanced { subtractor: Strategy },
}

/// Multiplier construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum MultiplierAlgorithm {
    /// Array of full-adder cells
    CarryRipple,
    /// Array of one-bit Kogge-Stone adders
    Systolic,
    /// Partial-product rows summed with a pluggable adder
    PartialProduct { adder: Strategy },
}

impl Default for MultiplierAlgorithm {
    fn default() -> Self {
        MultiplierAlgorithm::PartialProduct {
            adder: Strategy::KoggeStone,
        }
    }
}

/// Arithmetic generator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArithConfig {
    /// Largest operand, product or internal word width accepted, including
    /// the power-of-two padding of lookahead circuits
    pub max_width: usize,
    /// Cell realization to use instead of the best supported one
    pub cell: Option<CellRealization>,
    /// Topology for [`ArithBuilder::add_default`] and
    /// [`ArithBuilder::subtract_default`]
    ///
    /// [`ArithBuilder::add_default`]: crate::ArithBuilder::add_default
    /// [`ArithBuilder::subtract_default`]: crate::ArithBuilder::subtract_default
    pub strategy: Strategy,
    pub divider: DividerAlgorithm,
    pub multiplier: MultiplierAlgorithm,
}

impl Default for ArithConfig {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            cell: None,
            strategy: Strategy::KoggeStone,
            divider: DividerAlgorithm::default(),
            multiplier: MultiplierAlgorithm::default(),
        }
    }
}

impl ArithConfig {
    /// Smallest circuits: ripple everywhere
    pub fn area() -> Self {
        Self {
            strategy: Strategy::Ripple,
            divider: DividerAlgorithm::Restoring,
            multiplier: MultiplierAlgorithm::CarryRipple,
            ..Default::default()
        }
    }

    /// Shallowest circuits: Kogge-Stone everywhere
    pub fn speed() -> Self {
        Self {
            strategy: Strategy::KoggeStone,
            divider: DividerAlgorithm::Advanced {
                subtractor: Strategy::KoggeStone,
            },
            multiplier: MultiplierAlgorithm::PartialProduct {
                adder: Strategy::KoggeStone,
            },
            ..Default::default()
        }
    }

    /// Balance between size and depth
    pub fn balanced() -> Self {
        Self {
            strategy: Strategy::HanCarlson,
            divider: DividerAlgorithm::Advanced {
                subtractor: Strategy::BrentKung,
            },
            multiplier: MultiplierAlgorithm::PartialProduct {
                adder: Strategy::HanCarlson,
            },
            ..Default::default()
        }
    }

    /// Parse a TOML document
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: ArithConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Check limits and strategy slots
    pub fn validate(&self) -> Result<()> {
        if self.max_width == 0 {
            return Err(ArithError::Config("max_width must be positive".to_string()));
        }
        if let DividerAlgorithm::Advanced { subtractor } = self.divider {
            if !subtractor.supports(ArithOp::Sub) {
                return Err(ArithError::UnsupportedStrategy {
                    strategy: subtractor,
                    context: "division",
                });
            }
        }
        if let MultiplierAlgorithm::PartialProduct { adder } = self.multiplier {
            if !adder.supports(ArithOp::Add) {
                return Err(ArithError::UnsupportedStrategy {
                    strategy: adder,
                    context: "multiplication",
                });
            }
        }
        Ok(())
    }
}
