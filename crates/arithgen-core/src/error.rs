//! Error types for arithmetic generation

use crate::cell::CellRealization;
use crate::strategy::Strategy;
use thiserror::Error;

/// Result type for arithmetic generation
pub type Result<T> = std::result::Result<T, ArithError>;

/// Default upper bound on operand and result widths
pub const DEFAULT_MAX_WIDTH: usize = 4096;

/// Errors raised before any node is created
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithError {
    #[error("Operand width mismatch: {left} bits vs {right} bits")]
    WidthMismatch { left: usize, right: usize },

    #[error("Operand '{operand}' is empty")]
    EmptyOperand { operand: &'static str },

    #[error("Width {width} exceeds the limit of {limit} bits")]
    WidthLimit { width: usize, limit: usize },

    #[error("Strategy '{strategy}' is not supported for {context}")]
    UnsupportedStrategy {
        strategy: Strategy,
        context: &'static str,
    },

    #[error("Cell realization '{cell}' needs {missing} support from the network")]
    UnsupportedCell {
        cell: CellRealization,
        missing: &'static str,
    },

    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ArithError {
    /// Malformed operands
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            ArithError::WidthMismatch { .. }
                | ArithError::EmptyOperand { .. }
                | ArithError::WidthLimit { .. }
        )
    }

    /// Requested strategy or cell cannot be built
    pub fn is_configuration_error(&self) -> bool {
        !self.is_shape_error()
    }
}

impl From<toml::de::Error> for ArithError {
    fn from(e: toml::de::Error) -> Self {
        ArithError::Config(e.to_string())
    }
}

impl From<std::io::Error> for ArithError {
    fn from(e: std::io::Error) -> Self {
        ArithError::Config(e.to_string())
    }
}

/// Reject empty operands and operands wider than `limit`
pub(crate) fn check_operand(operand: &'static str, width: usize, limit: usize) -> Result<()> {
    if width == 0 {
        return Err(ArithError::EmptyOperand { operand });
    }
    if width > limit {
        return Err(ArithError::WidthLimit { width, limit });
    }
    Ok(())
}

/// Two operands of equal, non-zero width within `limit`
pub(crate) fn check_equal_widths(left: usize, right: usize, limit: usize) -> Result<()> {
    check_operand("a", left, limit)?;
    check_operand("b", right, limit)?;
    if left != right {
        return Err(ArithError::WidthMismatch { left, right });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_families() {
        let shape = ArithError::WidthMismatch { left: 4, right: 3 };
        assert!(shape.is_shape_error());
        assert!(!shape.is_configuration_error());

        let config = ArithError::UnsupportedStrategy {
            strategy: Strategy::BorrowLookahead,
            context: "addition",
        };
        assert!(config.is_configuration_error());
        assert_eq!(
            config.to_string(),
            "Strategy 'borrow-lookahead' is not supported for addition"
        );
    }

    #[test]
    fn test_check_equal_widths() {
        assert!(check_equal_widths(8, 8, 64).is_ok());
        assert_eq!(
            check_equal_widths(8, 7, 64),
            Err(ArithError::WidthMismatch { left: 8, right: 7 })
        );
        assert_eq!(
            check_equal_widths(0, 0, 64),
            Err(ArithError::EmptyOperand { operand: "a" })
        );
        assert_eq!(
            check_equal_widths(128, 128, 64),
            Err(ArithError::WidthLimit {
                width: 128,
                limit: 64
            })
        );
    }
}
