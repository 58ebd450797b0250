//! End-to-end tests through the text-level API, the way a caller driving a
//! result table would use the crate.

use approx::assert_relative_eq;

use roottrace_solvers::{Config, Entry, MAX_ITERATIONS, muller, newton_raphson};

#[test]
fn both_methods_agree_on_the_root() {
    let config = Config::new(5);

    let newton = newton_raphson::solve_equation("x^3 - 2", 1.0, &config);
    let muller = muller::solve_equation("x^3 - 2", 0.0, 1.0, 2.0, &config);

    let newton_x = newton.records().last().unwrap().x;
    let muller_x = muller.records().last().unwrap().x;

    assert_relative_eq!(newton_x, 2.0_f64.cbrt(), epsilon = 1e-6);
    assert_relative_eq!(muller_x, 2.0_f64.cbrt(), epsilon = 1e-6);
}

#[test]
fn malformed_equations_never_panic() {
    let junk = ["", "   ", "(((", "x +", "2 **", "sin", "foo(x)", "1..2", "x@2"];

    for text in junk {
        let newton = newton_raphson::solve_equation(text, 1.0, &Config::default());
        assert_eq!(newton.records().len(), 0);
        assert_eq!(newton.halt().unwrap().to_string(), "Invalid equation");

        let muller = muller::solve_equation(text, 0.0, 1.0, 2.0, &Config::default());
        assert_eq!(muller.records().len(), 0);
        assert_eq!(muller.halt().unwrap().to_string(), "Invalid equation");
    }
}

#[test]
fn traces_render_as_a_uniform_sequence() {
    // A degenerate solve still yields rows for everything that happened.
    let trace = newton_raphson::solve_equation("5", 3.0, &Config::default());

    let mut lines = Vec::new();
    for entry in trace.entries() {
        match entry {
            Entry::Record(r) => lines.push(format!("{} | x = {}", r.iteration, r.x)),
            Entry::Halt(h) => lines.push(h.to_string()),
        }
    }

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1], "f'(x0) is 0");
}

#[test]
fn trace_length_never_exceeds_the_bound_plus_halt() {
    let equations = ["x^2 - 2", "x^3 - 2", "5", "ln(x)", "x^2 + 1", "((("];

    for equation in equations {
        let newton = newton_raphson::solve_equation(equation, -1.0, &Config::new(usize::MAX));
        assert!(newton.len() <= MAX_ITERATIONS + 1);
        assert!(!newton.is_empty());

        let muller = muller::solve_equation(equation, -1.0, 0.0, 1.0, &Config::new(usize::MAX));
        assert!(muller.len() <= MAX_ITERATIONS + 1);
        assert!(!muller.is_empty());
    }
}
