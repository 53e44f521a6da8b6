//! # Symbolic Engine Derivatives Module
//!
//! This module extends the expression tree with differentiation, evaluation
//! and function conversion capabilities.
//!
//! ## Key Methods
//!
//! ### Differentiation
//! - `diff()` - Analytical derivative with respect to `x`
//! - `nth_derivative(n)` - Higher-order derivatives
//!
//! ### Function evaluation
//! - `eval(x)` - Direct recursive evaluation at a point
//! - `lambdify1D()` - Convert to an executable Rust closure
//!
//! ### Numerical Analysis
//! - `compare_num1D()` - Validate the analytical derivative against a
//!   central-difference approximation over a linspace
//!
//! ## Interesting Code Features
//!
//! 1. **Unsimplified Derivatives**: every rule returns the literal application
//!    of calculus (differentiating a constant yields an explicit zero node);
//!    tests can therefore assert on the exact structural shape of results
//!
//! 2. **Subtree Reuse**: the product, quotient, power and log rules clone the
//!    original operand subtrees into the derivative tree, which is safe
//!    because nodes are immutable
//!
//! 3. **IEEE Edge-Case Propagation**: `eval` never fails; division by zero and
//!    logs of non-positive numbers flow through as `inf`/`NaN`
//!
//! 4. **Closure Generation**: `lambdify1D` compiles the tree once into nested
//!    closures for repeated numerical evaluation

use crate::symbolic::symbolic_engine::{Expr, Operator};
use crate::symbolic::utils::{linspace, norm, numerical_derivative};
use log::{info, warn};

impl Expr {
    /// DIFFERENTIATION

    /// Computes the analytical derivative of the expression with respect to `x`.
    ///
    /// Implements the standard differentiation rules from calculus:
    /// - Linearity: (f ± g)' = f' ± g'
    /// - Product rule: (f*g)' = f*g' + f'*g
    /// - Quotient rule: (f/g)' = (f'*g - f*g')/(g*g)
    /// - Power rule with chain rule: (u^n)' = n*(u^(n-1)*u')
    /// - Natural log with chain rule: (ln u)' = u'/u
    ///
    /// The result is **not simplified**: differentiating `x + 2` yields
    /// `1 + 0`, not `1`. Original subtrees are cloned into the derivative
    /// where a rule reuses them (e.g. the quotient rule's `g*g`).
    ///
    /// # Returns
    /// New symbolic expression representing the derivative
    ///
    /// # Examples
    /// ```
    /// use symdiff::symbolic::symbolic_engine::Expr;
    /// let f = Expr::Var.pow(2.0); // x^2
    /// let df_dx = f.diff();
    /// assert_eq!(df_dx.eval(3.0), 6.0);
    /// ```
    pub fn diff(&self) -> Expr {
        match self {
            Expr::Var => Expr::Const(1.0),
            Expr::Const(_) => Expr::Const(0.0),
            Expr::BinOp(Operator::Add, lhs, rhs) => Expr::BinOp(
                Operator::Add,
                Box::new(lhs.diff()),
                Box::new(rhs.diff()),
            ),
            Expr::BinOp(Operator::Sub, lhs, rhs) => Expr::BinOp(
                Operator::Sub,
                Box::new(lhs.diff()),
                Box::new(rhs.diff()),
            ),
            // lhs * rhs' + lhs' * rhs, in exactly this order
            Expr::BinOp(Operator::Mul, lhs, rhs) => Expr::BinOp(
                Operator::Add,
                Box::new(Expr::BinOp(
                    Operator::Mul,
                    lhs.clone(),
                    Box::new(rhs.diff()),
                )),
                Box::new(Expr::BinOp(
                    Operator::Mul,
                    Box::new(lhs.diff()),
                    rhs.clone(),
                )),
            ),
            // (lhs' * rhs - lhs * rhs') / (rhs * rhs)
            Expr::BinOp(Operator::Div, lhs, rhs) => Expr::BinOp(
                Operator::Div,
                Box::new(Expr::BinOp(
                    Operator::Sub,
                    Box::new(Expr::BinOp(
                        Operator::Mul,
                        Box::new(lhs.diff()),
                        rhs.clone(),
                    )),
                    Box::new(Expr::BinOp(
                        Operator::Mul,
                        lhs.clone(),
                        Box::new(rhs.diff()),
                    )),
                )),
                Box::new(Expr::BinOp(Operator::Mul, rhs.clone(), rhs.clone())),
            ),
            // n * (u^(n-1) * u'); sound because the exponent is a plain scalar
            Expr::Pow(base, exponent) => Expr::BinOp(
                Operator::Mul,
                Box::new(Expr::Const(*exponent)),
                Box::new(Expr::BinOp(
                    Operator::Mul,
                    Box::new(Expr::Pow(base.clone(), exponent - 1.0)),
                    Box::new(base.diff()),
                )),
            ),
            Expr::Ln(operand) => Expr::BinOp(
                Operator::Div,
                Box::new(operand.diff()),
                operand.clone(),
            ),
        }
    } // end of diff

    /// Computes the nth derivative by repeated differentiation.
    ///
    /// No simplification happens between steps, so the intermediate trees grow
    /// quickly; intended for small `n`.
    ///
    /// # Arguments
    /// * `n` - Order of derivative (0 = the original expression)
    pub fn nth_derivative(&self, n: usize) -> Expr {
        let mut expr = self.clone();
        for _ in 0..n {
            expr = expr.diff();
        }
        expr
    }

    /// DIRECT EXPRESSION EVALUATION

    /// Evaluates the expression at a point by recursive substitution of `x`.
    ///
    /// Arithmetic edge cases never raise: division by zero, logs of
    /// non-positive numbers and negative bases with fractional exponents all
    /// propagate as IEEE `inf`/`NaN` through the usual `f64` operations.
    /// Callers that care about domain validity check the result themselves.
    ///
    /// # Arguments
    /// * `x` - Value substituted for the free variable
    ///
    /// # Returns
    /// Numerical result of the evaluation
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            Expr::Var => x,
            Expr::Const(val) => *val,
            Expr::BinOp(op, lhs, rhs) => {
                let lhs_val = lhs.eval(x);
                let rhs_val = rhs.eval(x);
                op.apply(lhs_val, rhs_val)
            }
            Expr::Pow(base, exponent) => base.eval(x).powf(*exponent),
            Expr::Ln(operand) => operand.eval(x).ln(),
        }
    } // end of eval

    /// LAMBDIFICATION

    /// Converts the expression into an executable Rust closure.
    ///
    /// The resulting closure mirrors the expression tree as nested closures,
    /// built once and callable repeatedly with different inputs; no tree
    /// traversal happens per call. Agrees with `eval` on every input,
    /// including the `inf`/`NaN` edge cases.
    ///
    /// # Returns
    /// Boxed closure that takes an f64 input and returns an f64 output
    ///
    /// # Examples
    /// ```
    /// use symdiff::symbolic::symbolic_engine::Expr;
    /// let f = Expr::Var.pow(2.0); // x^2
    /// let func = f.lambdify1D();
    /// assert_eq!(func(3.0), 9.0);
    /// ```
    pub fn lambdify1D(&self) -> Box<dyn Fn(f64) -> f64> {
        match self {
            Expr::Var => Box::new(|x| x),
            Expr::Const(val) => {
                let val = *val;
                Box::new(move |_| val)
            }
            Expr::BinOp(op, lhs, rhs) => {
                let lhs_fn = lhs.lambdify1D();
                let rhs_fn = rhs.lambdify1D();
                match op {
                    Operator::Add => Box::new(move |x| lhs_fn(x) + rhs_fn(x)),
                    Operator::Sub => Box::new(move |x| lhs_fn(x) - rhs_fn(x)),
                    Operator::Mul => Box::new(move |x| lhs_fn(x) * rhs_fn(x)),
                    Operator::Div => Box::new(move |x| lhs_fn(x) / rhs_fn(x)),
                }
            }
            Expr::Pow(base, exponent) => {
                let base_fn = base.lambdify1D();
                let exponent = *exponent;
                Box::new(move |x| base_fn(x).powf(exponent))
            }
            Expr::Ln(operand) => {
                let operand_fn = operand.lambdify1D();
                Box::new(move |x| operand_fn(x).ln())
            }
        } // end of match
    } // end of lambdify1D

    /// NUMERICAL VALIDATION

    /// Validates the analytical derivative against a numerical approximation.
    ///
    /// Evaluates `diff()` and a central-difference derivative of the original
    /// expression over a linspace, then compares their normalized L2 distance
    /// against `max_norm`.
    ///
    /// # Arguments
    /// * `start` - Domain start value
    /// * `end` - Domain end value
    /// * `num_values` - Number of test points
    /// * `max_norm` - Maximum acceptable norm of the difference
    ///
    /// # Returns
    /// Tuple of (actual_norm, is_within_tolerance)
    pub fn compare_num1D(
        &self,
        start: f64,
        end: f64,
        num_values: usize,
        max_norm: f64,
    ) -> (f64, bool) {
        let analytical_derivative = self.diff();
        let domain = linspace(start, end, num_values);
        let analytical_values: Vec<f64> =
            domain.iter().map(|&x| analytical_derivative.eval(x)).collect();
        let f = self.lambdify1D();
        let step = (1.0 / 1e4) * (end - start) / (num_values as f64 - 1.0);
        let numerical_values = numerical_derivative(f, &domain, step);
        let norm_val = norm(&analytical_values, &numerical_values);

        if norm_val < max_norm {
            info!("derivative check passed: norm = {:.3e}", norm_val);
            (norm_val, true)
        } else {
            warn!(
                "derivative check failed: norm = {:.3e} exceeds {:.3e}",
                norm_val, max_norm
            );
            (norm_val, false)
        }
    } // end of compare_num1D
}
