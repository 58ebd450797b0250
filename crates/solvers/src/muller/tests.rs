use approx::assert_relative_eq;

use super::{Halt, solve, solve_equation};
use crate::{Config, Entry, MAX_ITERATIONS};

#[test]
fn converges_to_cbrt2() {
    let trace = solve_equation("x^3 - 2", 0.0, 1.0, 2.0, &Config::new(5));

    assert!(!trace.is_halted());
    assert_eq!(trace.records().len(), 5);

    let records = trace.records();
    assert_relative_eq!(records[0].x, 1.2152504370215302, epsilon = 1e-12);
    assert_relative_eq!(records[4].x, 2.0_f64.cbrt(), epsilon = 1e-12);
    assert!(records[4].relative_error.unwrap() < 1.0);
}

#[test]
fn fits_the_quadratic_through_the_window() {
    // For f(x) = x² − 2 with seeds (0, 1, 2) the interpolant is f itself,
    // so the first step lands on √2 directly.
    let trace = solve_equation("x^2 - 2", 0.0, 1.0, 2.0, &Config::new(1));

    let r = &trace.records()[0];
    assert_relative_eq!(r.h1, 1.0);
    assert_relative_eq!(r.h2, 1.0);
    assert_relative_eq!(r.d1, 1.0);
    assert_relative_eq!(r.d2, 3.0);
    assert_relative_eq!(r.a, 1.0);
    assert_relative_eq!(r.b, 4.0);
    assert_relative_eq!(r.c, 2.0);
    assert_relative_eq!(r.x, 2.0_f64.sqrt(), epsilon = 1e-12);
}

#[test]
fn exact_convergence_halts_on_zero_step_sum() {
    // Landing on the root makes the window points coincide to within one
    // ulp, and the outer gap cancels exactly two iterations later.
    let trace = solve_equation("x^2 - 2", 0.0, 1.0, 2.0, &Config::new(5));

    assert_eq!(trace.records().len(), 4);
    assert_eq!(trace.halt(), Some(&Halt::StepSumZero));
    assert_relative_eq!(trace.records()[0].x, 2.0_f64.sqrt(), epsilon = 1e-12);
    assert!(trace.records()[3].x.is_nan());
}

#[test]
fn coincident_seeds_halt_on_first_iteration() {
    let h1 = solve_equation("x^2 - 2", 1.0, 1.0, 2.0, &Config::new(5));
    assert_eq!(h1.records().len(), 1);
    assert_eq!(h1.halt(), Some(&Halt::H1Zero));

    let h2 = solve_equation("x^2 - 2", 0.0, 1.0, 1.0, &Config::new(5));
    assert_eq!(h2.records().len(), 1);
    assert_eq!(h2.halt(), Some(&Halt::H2Zero));
}

#[test]
fn constant_function_halts_on_zero_denominator() {
    let trace = solve_equation("5", 0.0, 1.0, 2.0, &Config::default());

    assert_eq!(trace.records().len(), 1);
    assert_eq!(trace.halt(), Some(&Halt::DenominatorZero));

    // All coefficients collapse, and the doomed step is still recorded.
    let r = &trace.records()[0];
    assert_relative_eq!(r.a, 0.0);
    assert_relative_eq!(r.b, 0.0);
    assert!(r.x.is_infinite());
}

#[test]
fn nan_seed_evaluation_halts_after_recording() {
    let trace = solve_equation("ln(x)", -1.0, 1.0, 2.0, &Config::default());

    assert_eq!(trace.records().len(), 1);
    assert_eq!(trace.halt(), Some(&Halt::Fx0Nan));
    assert!(trace.records()[0].fx0.is_nan());
}

#[test]
fn negative_discriminant_propagates_nan_before_halting() {
    // x² + 1 has no real root: iteration 1 records a NaN estimate without
    // halting, and iteration 2 catches it when f(NaN) enters the window.
    let trace = solve_equation("x^2 + 1", -1.0, 0.0, 1.0, &Config::default());

    assert_eq!(trace.records().len(), 2);
    assert_eq!(trace.halt(), Some(&Halt::Fx2Nan));
    assert!(trace.records()[0].x.is_nan());
    assert!(trace.records()[1].fx2.is_nan());
}

#[test]
fn invalid_equation_yields_a_lone_halt() {
    let trace = solve_equation("(((", 0.0, 1.0, 2.0, &Config::default());

    assert!(trace.records().is_empty());
    assert_eq!(trace.halt(), Some(&Halt::InvalidEquation));
    assert_eq!(trace.len(), 1);
}

#[test]
fn first_record_has_no_relative_error() {
    let trace = solve_equation("x^3 - 2", 0.0, 1.0, 2.0, &Config::new(3));

    assert_eq!(trace.records()[0].relative_error, None);
    assert!(trace.records()[1..].iter().all(|r| r.relative_error.is_some()));
}

#[test]
fn solves_plain_closures() {
    let f = |x: f64| x * x * x - 2.0;
    let trace = solve(&f, 0.0, 1.0, 2.0, &Config::new(5));

    assert!(!trace.is_halted());
    assert_relative_eq!(trace.records()[4].x, 2.0_f64.cbrt(), epsilon = 1e-12);
}

#[test]
fn iteration_bound_is_clamped() {
    // Wide seeds keep the method from converging exactly within the bound.
    let trace = solve_equation("x^3 - 2", -10.0, 0.0, 10.0, &Config::new(15));

    assert!(!trace.is_halted());
    assert_eq!(trace.records().len(), MAX_ITERATIONS);
    assert_relative_eq!(trace.records()[9].x, 2.0_f64.cbrt(), epsilon = 1e-9);
}

#[test]
fn identical_inputs_give_identical_traces() {
    let config = Config::new(5);
    let first = solve_equation("x^3 - 2", 0.0, 1.0, 2.0, &config);
    let second = solve_equation("x^3 - 2", 0.0, 1.0, 2.0, &config);

    assert_eq!(first, second);
}

#[test]
fn entries_end_with_the_halt() {
    let trace = solve_equation("5", 0.0, 1.0, 2.0, &Config::default());

    let entries: Vec<_> = trace.entries().collect();
    assert_eq!(entries.len(), 2);
    assert!(matches!(entries[0], Entry::Record(_)));
    assert!(matches!(entries[1], Entry::Halt(&Halt::DenominatorZero)));
}

#[test]
fn halt_reasons_render_their_exact_strings() {
    assert_eq!(Halt::InvalidEquation.to_string(), "Invalid equation");
    assert_eq!(Halt::Fx0Nan.to_string(), "f(x0) is NaN");
    assert_eq!(Halt::Fx1Nan.to_string(), "f(x1) is NaN");
    assert_eq!(Halt::Fx2Nan.to_string(), "f(x2) is NaN");
    assert_eq!(Halt::H1Zero.to_string(), "h1 is 0");
    assert_eq!(Halt::H2Zero.to_string(), "h2 is 0");
    assert_eq!(Halt::StepSumZero.to_string(), "h2 + h1 is 0");
    assert_eq!(Halt::DenominatorZero.to_string(), "denominator is 0");
}
