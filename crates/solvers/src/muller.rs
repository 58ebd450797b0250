//! Muller's method root finding with a full iteration trace.
//!
//! # Algorithm
//!
//! Muller's method fits a quadratic through a sliding window of three
//! estimates `(x0, x1, x2)` and takes the quadratic's root nearest `x2` as
//! the next estimate:
//!
//! ```text
//! h1 = x1 − x0          h2 = x2 − x1
//! d1 = (f(x1) − f(x0)) / h1
//! d2 = (f(x2) − f(x1)) / h2
//! a  = (d2 − d1) / (h2 + h1)
//! b  = a·h2 + d2
//! c  = f(x2)
//! x  = x2 − 2c / (b ± √(b² − 4ac))
//! ```
//!
//! The denominator takes the sign of `b`, keeping it large in magnitude and
//! avoiding catastrophic cancellation. After each step the window slides:
//! `(x0, x1, x2) ← (x1, x2, x)`.
//!
//! No derivative is needed, and convergence is superlinear (order ≈ 1.84)
//! near a simple root. The radical stays on the real branch: a negative
//! discriminant produces NaN, which is recorded as-is and caught by a NaN
//! check on a later iteration rather than short-circuiting this one.
//!
//! # Halting
//!
//! After each record is appended, degeneracy checks run in a fixed order and
//! the first match ends the solve: `f(x0)` NaN, `f(x1)` NaN, `f(x2)` NaN,
//! `h1` zero, `h2` zero, `h2 + h1` zero, denominator zero. Coincident seeds
//! are not rejected up front; they surface as an `h1`/`h2` halt on the first
//! iteration.

mod halt;
mod record;

#[cfg(test)]
mod tests;

pub use halt::Halt;
pub use record::Record;

use roottrace_core::RealFn;
use roottrace_expr::Expr;

use crate::{Config, Trace};

/// Approximates a root of `f` from the three seeds `(x0, x1, x2)`.
///
/// Returns one [`Record`] per iteration and, if a degeneracy was detected,
/// a trailing [`Halt`]. The trace is never empty.
pub fn solve(f: &impl RealFn, x0: f64, x1: f64, x2: f64, config: &Config) -> Trace<Record, Halt> {
    let mut trace = Trace::new();
    let (mut x0, mut x1, mut x2) = (x0, x1, x2);

    for i in 0..config.iterations() {
        let fx0 = f.eval(x0);
        let fx1 = f.eval(x1);
        let fx2 = f.eval(x2);

        let h1 = x1 - x0;
        let h2 = x2 - x1;
        let d1 = (fx1 - fx0) / h1;
        let d2 = (fx2 - fx1) / h2;
        let a = (d2 - d1) / (h2 + h1);
        let b = a * h2 + d2;
        let c = fx2;

        // Real branch only; a negative discriminant yields NaN here.
        let radical = (b * b - 4.0 * a * c).sqrt();
        let denominator = if b < 0.0 { b - radical } else { b + radical };
        let x = x2 - 2.0 * c / denominator;

        // Compared against the oldest window point, matching the
        // Newton-Raphson convention of comparing against the prior estimate.
        let relative_error = (i > 0).then(|| ((x - x0) / x).abs() * 100.0);

        trace.push(Record {
            iteration: i + 1,
            x0,
            x1,
            x2,
            fx0,
            fx1,
            fx2,
            h1,
            h2,
            d1,
            d2,
            a,
            b,
            c,
            x,
            relative_error,
        });

        (x0, x1, x2) = (x1, x2, x);

        if let Some(reason) = degeneracy(fx0, fx1, fx2, h1, h2, denominator) {
            trace.halt_with(reason);
            break;
        }
    }

    trace
}

/// Parses `equation` and approximates a root from the three seeds.
///
/// A parse failure is reported as a trace holding only
/// [`Halt::InvalidEquation`].
pub fn solve_equation(
    equation: &str,
    x0: f64,
    x1: f64,
    x2: f64,
    config: &Config,
) -> Trace<Record, Halt> {
    match Expr::parse(equation) {
        Ok(f) => solve(&f, x0, x1, x2, config),
        Err(_) => Trace::halted(Halt::InvalidEquation),
    }
}

/// First matching degeneracy, in the fixed check order.
fn degeneracy(fx0: f64, fx1: f64, fx2: f64, h1: f64, h2: f64, denominator: f64) -> Option<Halt> {
    if fx0.is_nan() {
        Some(Halt::Fx0Nan)
    } else if fx1.is_nan() {
        Some(Halt::Fx1Nan)
    } else if fx2.is_nan() {
        Some(Halt::Fx2Nan)
    } else if h1 == 0.0 {
        Some(Halt::H1Zero)
    } else if h2 == 0.0 {
        Some(Halt::H2Zero)
    } else if h2 + h1 == 0.0 {
        Some(Halt::StepSumZero)
    } else if denominator == 0.0 {
        Some(Halt::DenominatorZero)
    } else {
        None
    }
}
