/// Smallest iteration count a solve will run.
pub const MIN_ITERATIONS: usize = 1;

/// Largest iteration count a solve will run.
pub const MAX_ITERATIONS: usize = 10;

/// Iteration bound for a solve call.
///
/// The solvers run a fixed number of iterations and stop only at the bound
/// or on a degeneracy — there are no convergence tolerances. Requested
/// counts are clamped to `[MIN_ITERATIONS, MAX_ITERATIONS]` rather than
/// rejected, so a `Config` is always valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    iterations: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            iterations: MAX_ITERATIONS,
        }
    }
}

impl Config {
    /// Creates a config, clamping the requested count to the allowed range.
    #[must_use]
    pub fn new(iterations: usize) -> Self {
        Self {
            iterations: iterations.clamp(MIN_ITERATIONS, MAX_ITERATIONS),
        }
    }

    /// Returns the number of iterations a solve will run.
    #[must_use]
    pub fn iterations(&self) -> usize {
        self.iterations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_to_allowed_range() {
        assert_eq!(Config::new(15).iterations(), MAX_ITERATIONS);
        assert_eq!(Config::new(0).iterations(), MIN_ITERATIONS);
        assert_eq!(Config::new(7).iterations(), 7);
    }

    #[test]
    fn default_runs_the_full_bound() {
        assert_eq!(Config::default().iterations(), MAX_ITERATIONS);
    }
}
