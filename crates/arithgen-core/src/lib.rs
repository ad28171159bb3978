//! Arithmetic circuit generators
//!
//! Builds adders, subtractors, dividers and multipliers into any
//! [`arithgen_net::Network`]. Words are slices of signals, least
//! significant bit first.
//!
//! # Adders and Subtractors
//!
//! | Strategy          | Add | Sub | Depth        |
//! |-------------------|-----|-----|--------------|
//! | `Ripple`          | yes | yes | n            |
//! | `CarryLookahead`  | yes |     | 2 log n      |
//! | `BorrowLookahead` |     | yes | 2 log n      |
//! | `BrentKung`       | yes | yes | 2 log n - 1  |
//! | `KoggeStone`      | yes | yes | log n        |
//! | `HanCarlson`      | yes | yes | log n + 2    |
//!
//! # Example
//!
//! ```
//! use arithgen_core::{add, Strategy};
//! use arithgen_net::{GateNetwork, NetworkKind, Signal};
//!
//! let mut ntk = GateNetwork::new("adder", NetworkKind::Xag);
//! let mut a = ntk.add_inputs("a", 8);
//! let b = ntk.add_inputs("b", 8);
//! let mut carry = Signal::FALSE;
//! add(&mut ntk, Strategy::KoggeStone, &mut a, &b, &mut carry).unwrap();
//! ntk.add_outputs("s", &a);
//! ntk.add_output("cout", carry);
//! ```

pub mod adder;
pub mod builder;
pub mod cell;
pub mod config;
pub mod divider;
pub mod error;
pub mod multiplier;
mod prefix;
pub mod ripple;
pub mod strategy;
pub mod words;

pub use adder::{add, kogge_stone_full_adder, subtract};
pub use builder::ArithBuilder;
pub use cell::{full_adder, full_subtractor, half_adder, CellRealization};
pub use config::{ArithConfig, DividerAlgorithm, MultiplierAlgorithm};
pub use divider::{restoring_divider, restoring_divider_with, Division};
pub use error::{ArithError, Result, DEFAULT_MAX_WIDTH};
pub use multiplier::{carry_ripple_multiplier, partial_product_multiplier, systolic_multiplier};
pub use ripple::{borrow_ripple_subtractor, carry_ripple_adder, carry_ripple_subtractor};
pub use strategy::{ArithOp, Strategy};
