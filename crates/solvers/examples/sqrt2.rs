//! Prints the iteration tables both solvers produce for `x^2 - 2`.

use roottrace_solvers::{Config, Entry, muller, newton_raphson};

fn main() {
    let equation = "x^2 - 2";
    let config = Config::new(5);

    println!("Newton-Raphson, {equation}, x0 = 1:");
    println!(
        "{:>4} {:>12} {:>12} {:>12} {:>12} {:>10}",
        "iter", "x0", "f(x0)", "f'(x0)", "x", "err %"
    );
    for entry in newton_raphson::solve_equation(equation, 1.0, &config).entries() {
        match entry {
            Entry::Record(r) => println!(
                "{:>4} {:>12.8} {:>12.4e} {:>12.8} {:>12.8} {:>10}",
                r.iteration,
                r.x0,
                r.fx0,
                r.fpx0,
                r.x,
                r.relative_error
                    .map_or_else(|| "-".to_string(), |e| format!("{e:.2e}")),
            ),
            Entry::Halt(reason) => println!("  -> {reason}"),
        }
    }

    println!();
    println!("Muller, {equation}, seeds (0, 1, 2):");
    println!(
        "{:>4} {:>12} {:>12} {:>12} {:>12} {:>10}",
        "iter", "x0", "x1", "x2", "x", "err %"
    );
    for entry in muller::solve_equation(equation, 0.0, 1.0, 2.0, &config).entries() {
        match entry {
            Entry::Record(r) => println!(
                "{:>4} {:>12.8} {:>12.8} {:>12.8} {:>12.8} {:>10}",
                r.iteration,
                r.x0,
                r.x1,
                r.x2,
                r.x,
                r.relative_error
                    .map_or_else(|| "-".to_string(), |e| format!("{e:.2e}")),
            ),
            Entry::Halt(reason) => println!("  -> {reason}"),
        }
    }
}
