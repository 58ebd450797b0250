/// One Newton-Raphson iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    /// 1-based iteration number.
    pub iteration: usize,

    /// Estimate entering the iteration.
    pub x0: f64,

    /// `f(x0)`.
    pub fx0: f64,

    /// `f'(x0)`.
    pub fpx0: f64,

    /// Estimate leaving the iteration.
    pub x: f64,

    /// `|x − x0| / |x| × 100`, absent on the first iteration because there
    /// is no prior estimate to compare against.
    pub relative_error: Option<f64>,
}
