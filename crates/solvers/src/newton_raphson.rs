//! Newton-Raphson root finding with a full iteration trace.
//!
//! # Algorithm
//!
//! From a single seed `x0`, each iteration evaluates the function and its
//! derivative and follows the tangent line to the next estimate:
//!
//! ```text
//! x = x0 − f(x0) / f'(x0)
//! ```
//!
//! Convergence is quadratic near a simple root, but the method needs the
//! derivative and can diverge from a poor seed. Use [`muller`](crate::muller)
//! when no derivative is available.
//!
//! # Halting
//!
//! The loop runs for the configured iteration count. After each record is
//! appended, degeneracy checks run in a fixed order and the first match ends
//! the solve: `f(x0)` NaN, `f'(x0)` NaN, `f'(x0)` zero, new `x` NaN. The
//! values of the degenerate iteration are computed and recorded before the
//! checks, so the trace always shows what went wrong.

mod halt;
mod record;


pub use halt::Halt;
pub use record::Record;

use roottrace_core::{Differentiable, RealFn};
use roottrace_expr::Expr;

use crate::{Config, Trace};

/// Approximates a root of `f` starting from `x0`.
///
/// Returns one [`Record`] per iteration and, if a degeneracy was detected,
/// a trailing [`Halt`]. The trace is never empty.
pub fn solve(f: &impl Differentiable, x0: f64, config: &Config) -> Trace<Record, Halt> {
    let fprime = f.derivative();
    let mut trace = Trace::new();
    let mut x0 = x0;

    for i in 0..config.iterations() {
        let fx0 = f.eval(x0);
        let fpx0 = fprime.eval(x0);
        let x = x0 - fx0 / fpx0;
        let relative_error = (i > 0).then(|| ((x - x0) / x).abs() * 100.0);

        trace.push(Record {
            iteration: i + 1,
            x0,
            fx0,
            fpx0,
            x,
            relative_error,
        });

        if let Some(reason) = degeneracy(fx0, fpx0, x) {
            trace.halt_with(reason);
            break;
        }

        x0 = x;
    }

    trace
}

/// Parses `equation` and approximates a root starting from `x0`.
///
/// The derivative is obtained symbolically from the parsed expression. A
/// parse failure is reported as a trace holding only [`Halt::InvalidEquation`].
pub fn solve_equation(equation: &str, x0: f64, config: &Config) -> Trace<Record, Halt> {
    match Expr::parse(equation) {
        Ok(f) => solve(&f, x0, config),
        Err(_) => Trace::halted(Halt::InvalidEquation),
    }
}

/// First matching degeneracy, in the fixed check order.
fn degeneracy(fx0: f64, fpx0: f64, x: f64) -> Option<Halt> {
    if fx0.is_nan() {
        Some(Halt::FxNan)
    } else if fpx0.is_nan() {
        Some(Halt::DerivativeNan)
    } else if fpx0 == 0.0 {
        Some(Halt::DerivativeZero)
    } else if x.is_nan() {
        Some(Halt::XNan)
    } else {
        None
    }
}
