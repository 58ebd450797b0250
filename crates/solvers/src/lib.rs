//! Root-finding solvers that record every iteration.
//!
//! This crate provides two classical iterative methods for approximating a
//! root of a real function of one variable:
//!
//! - [`newton_raphson`] — one initial guess, requires the derivative
//! - [`muller`] — three initial guesses, derivative-free
//!
//! Both solvers return a [`Trace`] rather than a single estimate: one record
//! per iteration with every intermediate quantity, plus at most one trailing
//! [halt reason](Trace::halt) when the arithmetic degenerates (NaN
//! propagation, zero derivative, zero divided difference, zero denominator).
//! Degenerate values are always computed and recorded before the halt check
//! runs, so the iteration that produced a NaN is visible in the trace.
//!
//! Each solver has two entry points: a generic `solve` over the
//! [`roottrace_core`] function traits, and a `solve_equation` convenience
//! that parses the equation text with [`roottrace_expr`] and reports a parse
//! failure as a trace holding only the `Invalid equation` halt.
//!
//! ```
//! use roottrace_solvers::{Config, newton_raphson};
//!
//! let trace = newton_raphson::solve_equation("x^2 - 2", 1.0, &Config::default());
//! let last = trace.records().last().unwrap();
//! assert!((last.x - 2.0_f64.sqrt()).abs() < 1e-12);
//! ```
//!
//! Solving is pure: no shared state, no I/O, and a hard iteration cap of
//! [`MAX_ITERATIONS`], so every call terminates and identical inputs produce
//! identical traces.

pub mod muller;
pub mod newton_raphson;

mod config;
mod trace;

pub use config::{Config, MAX_ITERATIONS, MIN_ITERATIONS};
pub use trace::{Entries, Entry, Trace};
