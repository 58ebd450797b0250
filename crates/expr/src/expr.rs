use std::fmt;

use roottrace_core::{Differentiable, RealFn};

use crate::error::ParseError;
use crate::parser;

/// An immutable expression tree over the single variable `x`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal. The constants `pi` and `e` fold to this at parse time.
    Num(f64),
    /// The variable `x`.
    X,
    /// Unary negation.
    Neg(Box<Expr>),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    /// `base ^ exponent`, evaluated with `f64::powf`.
    Pow(Box<Expr>, Box<Expr>),
    /// A unary function application such as `sin(x)`.
    Call(Func, Box<Expr>),
}

/// The unary functions the parser recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Func {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Exp,
    Ln,
    Log10,
    Sqrt,
    Abs,
}

impl Func {
    /// Looks up a function by its source-level name.
    pub(crate) fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "sin" => Self::Sin,
            "cos" => Self::Cos,
            "tan" => Self::Tan,
            "asin" => Self::Asin,
            "acos" => Self::Acos,
            "atan" => Self::Atan,
            "sinh" => Self::Sinh,
            "cosh" => Self::Cosh,
            "tanh" => Self::Tanh,
            "exp" => Self::Exp,
            "ln" | "log" => Self::Ln,
            "log10" => Self::Log10,
            "sqrt" => Self::Sqrt,
            "abs" => Self::Abs,
            _ => return None,
        })
    }

    /// Returns the source-level name of the function.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Tanh => "tanh",
            Self::Exp => "exp",
            Self::Ln => "ln",
            Self::Log10 => "log10",
            Self::Sqrt => "sqrt",
            Self::Abs => "abs",
        }
    }

    /// Applies the function to a value.
    ///
    /// Domain errors follow IEEE semantics: `asin(2)`, `ln(-1)`, and
    /// `sqrt(-4)` all return NaN.
    #[must_use]
    pub fn apply(self, v: f64) -> f64 {
        match self {
            Self::Sin => v.sin(),
            Self::Cos => v.cos(),
            Self::Tan => v.tan(),
            Self::Asin => v.asin(),
            Self::Acos => v.acos(),
            Self::Atan => v.atan(),
            Self::Sinh => v.sinh(),
            Self::Cosh => v.cosh(),
            Self::Tanh => v.tanh(),
            Self::Exp => v.exp(),
            Self::Ln => v.ln(),
            Self::Log10 => v.log10(),
            Self::Sqrt => v.sqrt(),
            Self::Abs => v.abs(),
        }
    }
}

impl Expr {
    /// Parses an expression in the variable `x`.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the text is not a syntactically valid
    /// expression. Parsing never panics.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        parser::parse(text)
    }

    /// Evaluates the expression at `x`.
    ///
    /// Total over `f64`: domain errors surface as NaN, never as panics.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            Self::Num(v) => *v,
            Self::X => x,
            Self::Neg(e) => -e.eval(x),
            Self::Add(a, b) => a.eval(x) + b.eval(x),
            Self::Sub(a, b) => a.eval(x) - b.eval(x),
            Self::Mul(a, b) => a.eval(x) * b.eval(x),
            Self::Div(a, b) => a.eval(x) / b.eval(x),
            Self::Pow(a, b) => a.eval(x).powf(b.eval(x)),
            Self::Call(f, e) => f.apply(e.eval(x)),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(v) => write!(f, "{v}"),
            Self::X => write!(f, "x"),
            Self::Neg(e) => write!(f, "-({e})"),
            Self::Add(a, b) => write!(f, "({a} + {b})"),
            Self::Sub(a, b) => write!(f, "({a} - {b})"),
            Self::Mul(a, b) => write!(f, "({a} * {b})"),
            Self::Div(a, b) => write!(f, "({a} / {b})"),
            Self::Pow(a, b) => write!(f, "({a} ^ {b})"),
            Self::Call(func, e) => write!(f, "{}({e})", func.name()),
        }
    }
}

impl RealFn for Expr {
    fn eval(&self, x: f64) -> f64 {
        Expr::eval(self, x)
    }
}

impl Differentiable for Expr {
    type Deriv = Expr;

    fn derivative(&self) -> Expr {
        Expr::derivative(self)
    }
}
