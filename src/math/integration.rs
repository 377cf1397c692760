//! Definite integrals by the composite Simpson rule, evaluated in parallel
//! over a worker pool that lives only for the duration of one call.

pub mod partition;
pub mod pool;
pub mod range;
pub mod simpson;


use std::time::Duration;

use crate::error::{InvalidArgument, Result};

pub use pool::{integrate, integrate_with_config, integrate_with_fixed_pool};

/// A real function of one real variable that can be integrated.
///
/// Implementations must be pure: the engine evaluates them from several
/// worker threads at once and never synchronizes around the calls.
pub trait ScalarFunction: Sync {
    /// Evaluates the function at `x`.
    fn evaluate(&self, x: f64) -> f64;
}

impl<F> ScalarFunction for F
where
    F: Fn(f64) -> f64 + Sync,
{
    fn evaluate(&self, x: f64) -> f64 {
        self(x)
    }
}

/// The constant function `f(x) = c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constant(pub f64);

impl ScalarFunction for Constant {
    fn evaluate(&self, _x: f64) -> f64 {
        self.0
    }
}

/// Value of an integral together with the time spent computing it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegrationResult {
    value: f64,
    duration_nanos: u64,
}

impl IntegrationResult {
    pub(crate) fn new(value: f64, duration: Duration) -> Self {
        Self {
            value,
            duration_nanos: u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX),
        }
    }

    /// Result of an empty interval: zero value, zero time.
    pub(crate) fn trivial() -> Self {
        Self {
            value: 0.0,
            duration_nanos: 0,
        }
    }

    /// The signed integral.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Monotonic time spent partitioning, evaluating and aggregating.
    pub fn duration_nanos(&self) -> u64 {
        self.duration_nanos
    }

    /// [`duration_nanos`](Self::duration_nanos) as a `Duration`.
    pub fn duration(&self) -> Duration {
        Duration::from_nanos(self.duration_nanos)
    }
}

/// Tuning knobs for [`integrate_with_config`].
///
/// Neither field affects the computed value beyond floating-point
/// summation order.
#[derive(Debug, Clone)]
pub struct IntegrationConfig {
    /// Normalized subdivision counts below this run on the calling thread.
    pub sequential_threshold: u64,
    /// Worker count for the parallel path; `None` uses every logical CPU.
    pub parallelism: Option<usize>,
}

impl Default for IntegrationConfig {
    fn default() -> Self {
        Self {
            sequential_threshold: 5_000,
            parallelism: None,
        }
    }
}

impl IntegrationConfig {
    /// Resolves the worker count for the parallel path.
    pub fn effective_parallelism(&self) -> Result<usize> {
        match self.parallelism {
            Some(0) => Err(InvalidArgument::NonPositiveParallelism.into()),
            Some(workers) => Ok(workers),
            None => Ok(num_cpus::get().max(1)),
        }
    }
}
