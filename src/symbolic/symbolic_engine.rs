//! # Symbolic Engine Module
//!
//! This module provides the core expression-tree type for single-variable
//! symbolic mathematics: building immutable trees out of constants, the free
//! variable `x`, the four arithmetic operators, fixed real powers and natural
//! logarithms, and rendering them to the canonical textual form.
//!
//! ## Main Structures and Methods
//!
//! ### `Expr` Enum
//! The core symbolic expression type supporting:
//! - **Variable**: `Var` - the single free variable `x`
//! - **Constants**: `Const(f64)` - numerical constants
//! - **Operations**: `BinOp(Operator, lhs, rhs)` - basic arithmetic
//! - **Powers**: `Pow(operand, exponent)` - fixed real exponent, never a sub-expression
//! - **Logarithms**: `Ln(operand)` - natural log only
//!
//! ### `Operator` Enum
//! The closed set of binary operators {Add, Sub, Mul, Div}. `apply` evaluates
//! an operator on two numbers; the textual symbols `+ - * /` come from the
//! derived `Display`.
//!
//! ## Interesting Code Features
//!
//! 1. **Recursive Expression Tree**: Uses Box<Expr> for nested expressions,
//!    enabling arbitrarily deep structures; trees are immutable after
//!    construction, so transformations always allocate new trees
//!
//! 2. **Operator Overloading**: Implements std::ops traits (Add, Sub, Mul, Div)
//!    for natural mathematical syntax: `x + y * z`
//!
//! 3. **Quirky Parenthesization**: the `Display` impl decides parentheses from
//!    the child's operator tag, not from true precedence; right-hand `Add`
//!    children are never wrapped (see `Display` below)
//!
//! 4. **Unsimplified Results**: no algebraic reduction anywhere; `0 + x` stays
//!    `0 + x`, and derived `PartialEq` compares trees syntactically

use std::fmt;

/// Core symbolic expression enum representing single-variable mathematical
/// expressions as an immutable tree.
///
/// Each variant represents a different kind of mathematical construct, from the
/// free variable and constants to nested operations. The enum uses Box<Expr>
/// for recursive structure, allowing arbitrarily deep expression trees. Nodes
/// are never mutated in place; derivative trees clone the subtrees they reuse.
///
/// # Examples
/// ```
/// use symdiff::symbolic::symbolic_engine::Expr;
/// let f = Expr::Var + Expr::Const(2.0);
/// assert_eq!(f.to_string(), "x + 2.0");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// The single free variable `x`
    Var,
    /// Numerical constant value
    Const(f64),
    /// Binary operation: lhs op rhs
    BinOp(Operator, Box<Expr>, Box<Expr>),
    /// Power with a fixed real exponent: operand ^ exponent.
    /// The exponent is a plain scalar, so it can never depend on `x`.
    Pow(Box<Expr>, f64),
    /// Natural logarithm: ln(operand)
    Ln(Box<Expr>),
}

/// The closed set of binary operators.
///
/// Exhaustive matching on this enum is what guarantees internal consistency:
/// an operator outside the set is unrepresentable, so the "unknown operator"
/// failure class of a dynamically-tagged design cannot occur here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum_macros::Display, strum_macros::EnumIter)]
pub enum Operator {
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Sub,
    #[strum(serialize = "*")]
    Mul,
    #[strum(serialize = "/")]
    Div,
}

impl Operator {
    /// Applies the operator to two numbers under IEEE 754 semantics.
    ///
    /// Division by zero is not checked; it yields `inf`/`NaN` like any other
    /// f64 division.
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Operator::Add => left + right,
            Operator::Sub => left - right,
            Operator::Mul => left * right,
            Operator::Div => left / right,
        }
    }
}

/// Display implementation producing the canonical textual rendering.
///
/// Constants always carry at least one fractional digit (`3.0`, `0.0`), the
/// variable renders as the literal token `x`, and binary operations join their
/// children with ` + `, ` - `, ` * ` or ` / `.
///
/// Parenthesization is decided from the child's operator tag alone:
/// - a left child is wrapped iff it is a binary node with a different operator;
/// - a right child is wrapped iff it is a binary node with a different operator
///   that is not `Add`.
///
/// Right-hand `Add` children are therefore never parenthesized, even under
/// `-` or `/`, so `a - (b + c)` renders as `a - b + c`. Consumers of the
/// rendered text rely on this exact (ambiguous) form; keep it verbatim.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Var => write!(f, "x"),
            Expr::Const(val) => write!(f, "{:?}", val),
            Expr::BinOp(op, lhs, rhs) => {
                let mut lhs_str = lhs.to_string();
                if let Expr::BinOp(lhs_op, _, _) = lhs.as_ref() {
                    if lhs_op != op {
                        lhs_str = format!("({})", lhs_str);
                    }
                }
                let mut rhs_str = rhs.to_string();
                if let Expr::BinOp(rhs_op, _, _) = rhs.as_ref() {
                    if rhs_op != op && *rhs_op != Operator::Add {
                        rhs_str = format!("({})", rhs_str);
                    }
                }
                write!(f, "{} {} {}", lhs_str, op, rhs_str)
            }
            Expr::Pow(base, exponent) => {
                let mut base_str = base.to_string();
                if matches!(base.as_ref(), Expr::BinOp(..)) {
                    base_str = format!("({})", base_str);
                }
                // the space before '^' and the absence of one after it are part
                // of the external format: "x ^2.0"
                write!(f, "{} ^{:?}", base_str, exponent)
            }
            Expr::Ln(operand) => {
                let mut operand_str = operand.to_string();
                if matches!(operand.as_ref(), Expr::BinOp(..)) {
                    operand_str = format!("({})", operand_str);
                }
                // the external format tags natural logs as "Exp[...]"; existing
                // consumers key on that literal
                write!(f, "Exp[{}]", operand_str)
            }
        }
    }
}

impl std::ops::Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Expr::BinOp(Operator::Add, self.boxed(), rhs.boxed())
    }
}

impl std::ops::Sub for Expr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Expr::BinOp(Operator::Sub, self.boxed(), rhs.boxed())
    }
}

impl std::ops::Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Expr::BinOp(Operator::Mul, self.boxed(), rhs.boxed())
    }
}

impl std::ops::Div for Expr {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Expr::BinOp(Operator::Div, self.boxed(), rhs.boxed())
    }
}

impl std::ops::AddAssign for Expr {
    fn add_assign(&mut self, rhs: Self) {
        *self = Expr::BinOp(Operator::Add, Box::new(self.clone()), Box::new(rhs));
    }
}

impl std::ops::SubAssign for Expr {
    fn sub_assign(&mut self, rhs: Self) {
        *self = Expr::BinOp(Operator::Sub, Box::new(self.clone()), Box::new(rhs));
    }
}

impl std::ops::MulAssign for Expr {
    fn mul_assign(&mut self, rhs: Self) {
        *self = Expr::BinOp(Operator::Mul, Box::new(self.clone()), Box::new(rhs));
    }
}

impl std::ops::DivAssign for Expr {
    fn div_assign(&mut self, rhs: Self) {
        *self = Expr::BinOp(Operator::Div, Box::new(self.clone()), Box::new(rhs));
    }
}

impl std::ops::Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Expr::BinOp(Operator::Mul, Box::new(Expr::Const(-1.0)), Box::new(self))
    }
}

impl Expr {
    /// BASIC FEATURES

    /// Moves the expression into a Box, for building nested nodes by hand.
    pub fn boxed(self) -> Box<Expr> {
        Box::new(self)
    }

    /// Raises the expression to a fixed real exponent.
    ///
    /// The exponent is a scalar, not an expression, so the generalized power
    /// rule in `diff` is always applicable.
    ///
    /// # Examples
    /// ```
    /// use symdiff::symbolic::symbolic_engine::Expr;
    /// let f = Expr::Var.pow(2.0);
    /// assert_eq!(f.to_string(), "x ^2.0");
    /// ```
    pub fn pow(self, exponent: f64) -> Expr {
        Expr::Pow(self.boxed(), exponent)
    }

    /// Takes the natural logarithm of the expression.
    pub fn ln(self) -> Expr {
        Expr::Ln(self.boxed())
    }
} // end of impl Expr
