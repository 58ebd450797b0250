/// One Muller iteration: the three-point window, the fitted quadratic's
/// coefficients, and the new estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    /// 1-based iteration number.
    pub iteration: usize,

    /// Oldest window point.
    pub x0: f64,

    /// Middle window point.
    pub x1: f64,

    /// Newest window point.
    pub x2: f64,

    /// `f(x0)`.
    pub fx0: f64,

    /// `f(x1)`.
    pub fx1: f64,

    /// `f(x2)`.
    pub fx2: f64,

    /// `x1 − x0`.
    pub h1: f64,

    /// `x2 − x1`.
    pub h2: f64,

    /// Divided difference over `[x0, x1]`.
    pub d1: f64,

    /// Divided difference over `[x1, x2]`.
    pub d2: f64,

    /// Quadratic coefficient `(d2 − d1) / (h2 + h1)`.
    pub a: f64,

    /// Linear coefficient `a·h2 + d2`.
    pub b: f64,

    /// Constant coefficient `f(x2)`.
    pub c: f64,

    /// Estimate leaving the iteration.
    pub x: f64,

    /// `|x − x0| / |x| × 100` against the oldest window point, absent on
    /// the first iteration.
    pub relative_error: Option<f64>,
}
