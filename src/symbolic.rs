/// # Symbolic engine
/// a module that
/// 1) represents single-variable mathematical expressions as immutable trees
/// 2) renders a symbolic expression into its canonical string form
/// 3) computes analytical (symbolic) derivatives with respect to `x`
///
/// # Example#
/// ```
/// use symdiff::symbolic::symbolic_engine::Expr;
///
/// // f = x^2 + 2, built by direct construction
/// let f = Expr::Var.pow(2.0) + Expr::Const(2.0);
/// println!("f = {}", f);
/// assert_eq!(f.to_string(), "x ^2.0 + 2.0");
/// // evaluate at a point
/// assert_eq!(f.eval(2.0), 6.0);
/// // differentiate; the result is the literal power rule, unsimplified
/// let df_dx = f.diff();
/// assert_eq!(df_dx.to_string(), "(2.0 * x ^1.0 * 1.0) + 0.0");
/// assert_eq!(df_dx.eval(3.0), 6.0);
/// ```
/// ________________________________________________________________________________________________________________________________
pub mod symbolic_engine;
pub mod symbolic_engine_derivatives;
///____________________________________________________________________________________________________________________________
/// utility functions for numerical derivative checking (linspace, central
/// differences, norms) and logger setup
/// _____________________________________________________________________________________________________________________________
pub mod utils;
