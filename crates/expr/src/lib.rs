//! Expression engine for the roottrace solvers.
//!
//! Parses textual equations in the single variable `x` into an immutable
//! [`Expr`] tree that can be evaluated and symbolically differentiated:
//!
//! ```
//! use roottrace_expr::Expr;
//!
//! let f = Expr::parse("x^2 - 2")?;
//! assert_eq!(f.eval(3.0), 7.0);
//!
//! let df = f.derivative();
//! assert_eq!(df.eval(3.0), 6.0);
//! # Ok::<(), roottrace_expr::ParseError>(())
//! ```
//!
//! # Evaluation contract
//!
//! [`Expr::eval`] is total over `f64`. Domain errors — the log of a negative
//! number, `0/0`, even powers of negative bases with fractional exponents —
//! come back as NaN per IEEE semantics, never as panics or `Result`s. Solvers
//! rely on NaN propagating silently through arithmetic until their own
//! degeneracy checks run.
//!
//! # Supported syntax
//!
//! - The variable `x` and numeric literals (decimal, optional exponent)
//! - The constants `pi` and `e`
//! - Binary `+`, `-`, `*`, `/`, and right-associative `^`
//! - Unary minus
//! - The functions `sin`, `cos`, `tan`, `asin`, `acos`, `atan`, `sinh`,
//!   `cosh`, `tanh`, `exp`, `ln`, `log10`, `sqrt`, and `abs`
//!
//! [`Expr`] implements [`roottrace_core::RealFn`] and
//! [`roottrace_core::Differentiable`], so a parsed expression plugs directly
//! into any solver.

mod derivative;
mod error;
mod expr;
mod parser;
mod token;

pub use error::ParseError;
pub use expr::{Expr, Func};
