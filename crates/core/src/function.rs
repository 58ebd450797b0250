/// A real-valued function of a single real variable.
///
/// Implementations must be total over `f64`: domain errors (log of a negative
/// number, division by zero, …) surface as NaN or ±∞ per IEEE semantics,
/// never as panics. Solvers record whatever value comes back and apply their
/// own degeneracy checks afterward.
pub trait RealFn {
    /// Evaluates the function at `x`.
    fn eval(&self, x: f64) -> f64;
}

/// Blanket implementation for plain closures.
impl<F> RealFn for F
where
    F: Fn(f64) -> f64,
{
    fn eval(&self, x: f64) -> f64 {
        self(x)
    }
}

/// A function that can produce its own first derivative.
///
/// Consumed by solvers that need derivative information, such as
/// Newton-Raphson. The derivative is another [`RealFn`], so a symbolic engine
/// can return a derived expression while a closure-based provider returns a
/// second closure.
pub trait Differentiable: RealFn {
    /// The type of the derivative function.
    type Deriv: RealFn;

    /// Returns the derivative with respect to the function's variable.
    #[must_use]
    fn derivative(&self) -> Self::Deriv;
}

/// Pairs a function with a caller-supplied derivative.
///
/// Lets derivative-requiring solvers run on plain closures when no symbolic
/// engine is involved.
///
/// # Example
///
/// ```
/// use roottrace_core::{Differentiable, RealFn, WithDerivative};
///
/// let f = WithDerivative::new(|x: f64| x * x - 2.0, |x: f64| 2.0 * x);
/// assert_eq!(f.eval(2.0), 2.0);
/// assert_eq!(f.derivative().eval(2.0), 4.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct WithDerivative<F, D> {
    f: F,
    df: D,
}

impl<F, D> WithDerivative<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64 + Clone,
{
    /// Creates a new pair from a function and its derivative.
    pub fn new(f: F, df: D) -> Self {
        Self { f, df }
    }
}

impl<F, D> RealFn for WithDerivative<F, D>
where
    F: Fn(f64) -> f64,
{
    fn eval(&self, x: f64) -> f64 {
        (self.f)(x)
    }
}

impl<F, D> Differentiable for WithDerivative<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64 + Clone,
{
    type Deriv = D;

    fn derivative(&self) -> D {
        self.df.clone()
    }
}
