//! Arithmetic Builder - validated circuit construction on a network
//!
//! Every public generator goes through [`ArithBuilder`]. Operand shapes and
//! strategy choices are checked before the first node is created, so a
//! rejected request leaves the network untouched.

use crate::adder::{arith_unchecked, lookahead_width};
use crate::cell::{self, CellRealization};
use crate::config::{ArithConfig, DividerAlgorithm, MultiplierAlgorithm};
use crate::divider::{restoring, restoring_with, Division};
use crate::error::{check_equal_widths, check_operand, ArithError, Result};
use crate::multiplier::{carry_ripple, partial_products, systolic};
use crate::ripple::{ripple_add, ripple_complement_add, ripple_subtract};
use crate::strategy::{ArithOp, Strategy};
use arithgen_net::{Network, Signal};
use tracing::debug;

/// Builder for arithmetic circuits on a borrowed network
pub struct ArithBuilder<'a, N: Network> {
    /// Target network
    ntk: &'a mut N,

    /// Full-adder/subtractor cell used by ripple chains and arrays
    cell: CellRealization,

    config: ArithConfig,
}

impl<'a, N: Network> ArithBuilder<'a, N> {
    /// Builder with the default configuration and the best cell for `ntk`
    pub fn new(ntk: &'a mut N) -> Self {
        let cell = CellRealization::resolve(ntk.capabilities());
        Self {
            ntk,
            cell,
            config: ArithConfig::default(),
        }
    }

    /// Builder with `config`, pinning its cell realization if one is set
    pub fn with_config(ntk: &'a mut N, config: ArithConfig) -> Result<Self> {
        config.validate()?;
        let caps = ntk.capabilities();
        let cell = match config.cell {
            Some(cell) => cell.pin(caps)?,
            None => CellRealization::resolve(caps),
        };
        Ok(Self { ntk, cell, config })
    }

    pub fn cell(&self) -> CellRealization {
        self.cell
    }

    pub fn config(&self) -> &ArithConfig {
        &self.config
    }

    /// Access the underlying network
    pub fn network(&mut self) -> &mut N {
        self.ntk
    }

    // ========================================================================
    // Cells
    // ========================================================================

    /// `(a ^ b, a & b)`
    pub fn half_adder(&mut self, a: Signal, b: Signal) -> (Signal, Signal) {
        cell::half_adder(self.ntk, a, b)
    }

    /// `(sum, carry)` of `a + b + c`
    pub fn full_adder(&mut self, a: Signal, b: Signal, c: Signal) -> (Signal, Signal) {
        cell::full_adder(self.ntk, self.cell, a, b, c)
    }

    /// `(difference, borrow)` of `a - b - c`
    pub fn full_subtractor(&mut self, a: Signal, b: Signal, c: Signal) -> (Signal, Signal) {
        cell::full_subtractor(self.ntk, self.cell, a, b, c)
    }

    // ========================================================================
    // Ripple chains
    // ========================================================================

    pub fn carry_ripple_adder(
        &mut self,
        a: &mut [Signal],
        b: &[Signal],
        carry: &mut Signal,
    ) -> Result<()> {
        check_equal_widths(a.len(), b.len(), self.config.max_width)?;
        ripple_add(self.ntk, self.cell, a, b, carry);
        Ok(())
    }

    pub fn borrow_ripple_subtractor(
        &mut self,
        a: &mut [Signal],
        b: &[Signal],
        borrow: &mut Signal,
    ) -> Result<()> {
        check_equal_widths(a.len(), b.len(), self.config.max_width)?;
        ripple_subtract(self.ntk, self.cell, a, b, borrow);
        Ok(())
    }

    pub fn carry_ripple_subtractor(
        &mut self,
        a: &mut [Signal],
        b: &[Signal],
        carry: &mut Signal,
    ) -> Result<()> {
        check_equal_widths(a.len(), b.len(), self.config.max_width)?;
        ripple_complement_add(self.ntk, self.cell, a, b, carry);
        Ok(())
    }

    // ========================================================================
    // Strategy dispatch
    // ========================================================================

    /// `a := a + b + carry` with `strategy`
    pub fn add(
        &mut self,
        strategy: Strategy,
        a: &mut [Signal],
        b: &[Signal],
        carry: &mut Signal,
    ) -> Result<()> {
        self.arith(ArithOp::Add, strategy, a, b, carry)
    }

    /// `a := a - b - borrow` with `strategy`
    pub fn subtract(
        &mut self,
        strategy: Strategy,
        a: &mut [Signal],
        b: &[Signal],
        borrow: &mut Signal,
    ) -> Result<()> {
        self.arith(ArithOp::Sub, strategy, a, b, borrow)
    }

    /// `a := a + b + carry` with the configured strategy
    pub fn add_default(
        &mut self,
        a: &mut [Signal],
        b: &[Signal],
        carry: &mut Signal,
    ) -> Result<()> {
        self.arith(ArithOp::Add, self.config.strategy, a, b, carry)
    }

    /// `a := a - b - borrow` with the configured strategy
    pub fn subtract_default(
        &mut self,
        a: &mut [Signal],
        b: &[Signal],
        borrow: &mut Signal,
    ) -> Result<()> {
        self.arith(ArithOp::Sub, self.config.strategy, a, b, borrow)
    }

    fn arith(
        &mut self,
        op: ArithOp,
        strategy: Strategy,
        a: &mut [Signal],
        b: &[Signal],
        carry: &mut Signal,
    ) -> Result<()> {
        check_equal_widths(a.len(), b.len(), self.config.max_width)?;
        require(strategy, op, op.name())?;
        self.check_padding(strategy, a.len())?;
        debug!(
            %strategy,
            op = op.name(),
            width = a.len(),
            cell = %self.cell,
            est_depth = strategy.estimate_depth(a.len()),
            est_size = strategy.estimate_size(a.len()),
            "building"
        );
        arith_unchecked(self.ntk, self.cell, op, strategy, a, b, carry);
        Ok(())
    }

    /// Lookahead strategies build words wider than their operands
    fn check_padding(&self, strategy: Strategy, width: usize) -> Result<()> {
        if strategy.is_lookahead() {
            check_operand("padded", lookahead_width(width), self.config.max_width)?;
        }
        Ok(())
    }

    // ========================================================================
    // Division
    // ========================================================================

    /// Restoring divider with ripple-borrow subtractors
    pub fn restoring_divider(&mut self, dividend: &[Signal], divisor: &[Signal]) -> Result<Division> {
        self.check_division(dividend, divisor)?;
        debug!(width = dividend.len(), "building restoring divider");
        Ok(restoring(self.ntk, self.cell, dividend, divisor))
    }

    /// Restoring divider with a fixed-width remainder and `subtractor`
    pub fn restoring_divider_with(
        &mut self,
        dividend: &[Signal],
        divisor: &[Signal],
        subtractor: Strategy,
    ) -> Result<Division> {
        self.check_division(dividend, divisor)?;
        require(subtractor, ArithOp::Sub, "division")?;
        self.check_padding(subtractor, dividend.len())?;
        debug!(width = dividend.len(), %subtractor, "building restoring divider");
        Ok(restoring_with(
            self.ntk, self.cell, dividend, divisor, subtractor,
        ))
    }

    /// Divider selected by the configuration
    pub fn divide(&mut self, dividend: &[Signal], divisor: &[Signal]) -> Result<Division> {
        match self.config.divider {
            DividerAlgorithm::Restoring => self.restoring_divider(dividend, divisor),
            DividerAlgorithm::Advanced { subtractor } => {
                self.restoring_divider_with(dividend, divisor, subtractor)
            }
        }
    }

    fn check_division(&self, dividend: &[Signal], divisor: &[Signal]) -> Result<()> {
        check_equal_widths(dividend.len(), divisor.len(), self.config.max_width)?;
        // The shifted divisor spans 2n - 1 bits
        check_operand("divisor", 2 * divisor.len() - 1, self.config.max_width)
    }

    // ========================================================================
    // Multiplication
    // ========================================================================

    /// Array multiplier of one-bit Kogge-Stone adders
    pub fn systolic_multiplier(&mut self, a: &[Signal], b: &[Signal]) -> Result<Vec<Signal>> {
        self.check_multiplication(a, b)?;
        debug!(n = a.len(), m = b.len(), "building systolic multiplier");
        Ok(systolic(self.ntk, a, b))
    }

    /// Array multiplier of full-adder cells
    pub fn carry_ripple_multiplier(&mut self, a: &[Signal], b: &[Signal]) -> Result<Vec<Signal>> {
        self.check_multiplication(a, b)?;
        debug!(n = a.len(), m = b.len(), cell = %self.cell, "building carry-ripple multiplier");
        Ok(carry_ripple(self.ntk, self.cell, a, b))
    }

    /// Partial-product rows summed with `adder`
    pub fn partial_product_multiplier(
        &mut self,
        a: &[Signal],
        b: &[Signal],
        adder: Strategy,
    ) -> Result<Vec<Signal>> {
        self.check_multiplication(a, b)?;
        require(adder, ArithOp::Add, "multiplication")?;
        self.check_padding(adder, a.len() + b.len())?;
        debug!(n = a.len(), m = b.len(), %adder, "building partial-product multiplier");
        Ok(partial_products(self.ntk, self.cell, a, b, adder))
    }

    /// Multiplier selected by the configuration
    pub fn multiply(&mut self, a: &[Signal], b: &[Signal]) -> Result<Vec<Signal>> {
        match self.config.multiplier {
            MultiplierAlgorithm::CarryRipple => self.carry_ripple_multiplier(a, b),
            MultiplierAlgorithm::Systolic => self.systolic_multiplier(a, b),
            MultiplierAlgorithm::PartialProduct { adder } => {
                self.partial_product_multiplier(a, b, adder)
            }
        }
    }

    fn check_multiplication(&self, a: &[Signal], b: &[Signal]) -> Result<()> {
        let limit = self.config.max_width;
        check_operand("a", a.len(), limit)?;
        check_operand("b", b.len(), limit)?;
        check_operand("product", a.len() + b.len(), limit)
    }
}

fn require(strategy: Strategy, op: ArithOp, context: &'static str) -> Result<()> {
    if strategy.supports(op) {
        Ok(())
    } else {
        Err(ArithError::UnsupportedStrategy { strategy, context })
    }
}
