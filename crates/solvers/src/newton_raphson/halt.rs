use thiserror::Error;

/// Why a Newton-Raphson solve stopped before exhausting its iterations.
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
    FxNan,

    /// `f'(x0)` evaluated to NaN.
    #[error("f'(x0) is NaN")]
    DerivativeNan,

    /// `f'(x0)` is exactly zero; the update would divide by zero.
    #[error("f'(x0) is 0")]
    DerivativeZero,

    /// The new estimate is NaN.
    #[error("x is NaN")]
    XNan,
}
