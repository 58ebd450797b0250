//! Symbolic differentiation with respect to `x`.

use std::f64::consts::LN_10;

use crate::expr::{Expr, Func};

impl Expr {
    /// Returns the symbolic derivative with respect to `x`.
    ///
    /// Total over any parsed expression. Smart constructors fold the obvious
    /// identities (`u + 0`, `u * 1`, constant arithmetic) so derivatives stay
    /// readable, but no full simplification is attempted.
    #[must_use]
    pub fn derivative(&self) -> Expr {
        match self {
            Expr::Num(_) => Expr::Num(0.0),
            Expr::X => Expr::Num(1.0),
            Expr::Neg(u) => neg(u.derivative()),
            Expr::Add(a, b) => add(a.derivative(), b.derivative()),
            Expr::Sub(a, b) => sub(a.derivative(), b.derivative()),
            Expr::Mul(a, b) => add(
                mul(a.derivative(), (**b).clone()),
                mul((**a).clone(), b.derivative()),
            ),
            Expr::Div(a, b) => div(
                sub(
                    mul(a.derivative(), (**b).clone()),
                    mul((**a).clone(), b.derivative()),
                ),
                pow((**b).clone(), Expr::Num(2.0)),
            ),
            Expr::Pow(base, exponent) => power_rule(base, exponent),
            Expr::Call(func, u) => chain_rule(*func, u),
        }
    }
}

/// `(u^v)' = n·u^(n-1)·u'` for a constant exponent, else
/// `u^v · (v'·ln(u) + v·u'/u)`.
fn power_rule(base: &Expr, exponent: &Expr) -> Expr {
    let du = base.derivative();

    if let Expr::Num(n) = exponent {
        return mul(
            mul(Expr::Num(*n), pow(base.clone(), Expr::Num(n - 1.0))),
            du,
        );
    }

    let dv = exponent.derivative();
    mul(
        pow(base.clone(), exponent.clone()),
        add(
            mul(dv, call(Func::Ln, base.clone())),
            mul(exponent.clone(), div(du, base.clone())),
        ),
    )
}

fn chain_rule(func: Func, u: &Expr) -> Expr {
    let du = u.derivative();
    let u = u.clone();

    match func {
        Func::Sin => mul(call(Func::Cos, u), du),
        Func::Cos => neg(mul(call(Func::Sin, u), du)),
        Func::Tan => div(du, pow(call(Func::Cos, u), Expr::Num(2.0))),
        Func::Asin => div(
            du,
            call(Func::Sqrt, sub(Expr::Num(1.0), pow(u, Expr::Num(2.0)))),
        ),
        Func::Acos => neg(div(
            du,
            call(Func::Sqrt, sub(Expr::Num(1.0), pow(u, Expr::Num(2.0)))),
        )),
        Func::Atan => div(du, add(Expr::Num(1.0), pow(u, Expr::Num(2.0)))),
        Func::Sinh => mul(call(Func::Cosh, u), du),
        Func::Cosh => mul(call(Func::Sinh, u), du),
        Func::Tanh => div(du, pow(call(Func::Cosh, u), Expr::Num(2.0))),
        Func::Exp => mul(call(Func::Exp, u), du),
        Func::Ln => div(du, u),
        Func::Log10 => div(du, mul(u, Expr::Num(LN_10))),
        Func::Sqrt => div(du, mul(Expr::Num(2.0), call(Func::Sqrt, u))),
        // |u|' = u·u' / |u|, undefined (NaN) where u is zero.
        Func::Abs => div(mul(u.clone(), du), call(Func::Abs, u)),
    }
}

// Smart constructors. Folding `0 * u` to `0` can hide a NaN that `u` would
// produce, which is fine for derivative cleanup: the solvers only require
// the derivative to be total, not NaN-faithful to the unsimplified tree.

fn add(a: Expr, b: Expr) -> Expr {
    match (a, b) {
        (Expr::Num(x), Expr::Num(y)) => Expr::Num(x + y),
        (Expr::Num(z), b) if z == 0.0 => b,
        (a, Expr::Num(z)) if z == 0.0 => a,
        (a, b) => Expr::Add(Box::new(a), Box::new(b)),
    }
}

fn sub(a: Expr, b: Expr) -> Expr {
    match (a, b) {
        (Expr::Num(x), Expr::Num(y)) => Expr::Num(x - y),
        (a, Expr::Num(z)) if z == 0.0 => a,
        (Expr::Num(z), b) if z == 0.0 => neg(b),
        (a, b) => Expr::Sub(Box::new(a), Box::new(b)),
    }
}

fn mul(a: Expr, b: Expr) -> Expr {
    match (a, b) {
        (Expr::Num(x), Expr::Num(y)) => Expr::Num(x * y),
        (Expr::Num(z), _) | (_, Expr::Num(z)) if z == 0.0 => Expr::Num(0.0),
        (Expr::Num(o), b) if o == 1.0 => b,
        (a, Expr::Num(o)) if o == 1.0 => a,
        (a, b) => Expr::Mul(Box::new(a), Box::new(b)),
    }
}

fn div(a: Expr, b: Expr) -> Expr {
    match (a, b) {
        (a, Expr::Num(o)) if o == 1.0 => a,
        (Expr::Num(z), b) if z == 0.0 && !matches!(b, Expr::Num(n) if n == 0.0) => Expr::Num(0.0),
        (a, b) => Expr::Div(Box::new(a), Box::new(b)),
    }
}

fn pow(base: Expr, exponent: Expr) -> Expr {
    match exponent {
        Expr::Num(o) if o == 1.0 => base,
        exponent => Expr::Pow(Box::new(base), Box::new(exponent)),
    }
}

fn neg(e: Expr) -> Expr {
    match e {
        Expr::Num(v) => Expr::Num(-v),
        Expr::Neg(inner) => *inner,
        e => Expr::Neg(Box::new(e)),
    }
}

fn call(func: Func, arg: Expr) -> Expr {
    Expr::Call(func, Box::new(arg))
}
