use thiserror::Error;

/// Why a Muller solve stopped before exhausting its iterations.
///
/// The `Display` strings are the exact reasons shown to users alongside the
/// partial trace.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Halt {
    /// The equation text failed to parse. The trace has no records.
    #[error("Invalid equation")]
    InvalidEquation,

    /// `f(x0)` evaluated to NaN.
    #[error("f(x0) is NaN")]
    Fx0Nan,

    /// `f(x1)` evaluated to NaN.
    #[error("f(x1) is NaN")]
    Fx1Nan,

    /// `f(x2)` evaluated to NaN.
    #[error("f(x2) is NaN")]
    Fx2Nan,

    /// The two oldest window points coincide.
    #[error("h1 is 0")]
    H1Zero,

    /// The two newest window points coincide.
    #[error("h2 is 0")]
    H2Zero,

    /// The window's outer points coincide, so the quadratic coefficient
    /// divides by zero.
    #[error("h2 + h1 is 0")]
    StepSumZero,

    /// The quadratic-formula denominator is exactly zero.
    #[error("denominator is 0")]
    DenominatorZero,
}
