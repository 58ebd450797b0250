//! Core traits for the roottrace solvers.
//!
//! This crate defines the capability interface between root-finding solvers
//! and the functions they iterate on:
//!
//! - [`RealFn`] — a real-valued function of a single real variable
//! - [`Differentiable`] — a function that can produce its own derivative
//! - [`WithDerivative`] — pairs a closure with a caller-supplied derivative
//!
//! Solvers depend only on these traits, so any function provider works: the
//! `roottrace-expr` expression engine, plain closures, or hand-rolled types.

mod function;

pub use function::{Differentiable, RealFn, WithDerivative};
