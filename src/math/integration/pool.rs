use std::time::Instant;

use log::{debug, trace};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

use crate::error::{InvalidArgument, Result};
use crate::math::integration::partition::{partition, Chunk};
use crate::math::integration::range::{normalize, Normalized, NormalizedRange};
use crate::math::integration::simpson::{aggregate, partial_sum};
use crate::math::integration::{IntegrationConfig, IntegrationResult, ScalarFunction};

/// Computes ∫ₐᵇ f(x) dx by the composite Simpson rule.
///
/// Small problems run on the calling thread; larger ones are spread over a
/// worker pool created for this call and sized to the machine. `n` is the
/// requested number of subintervals and is rounded up to an even count.
///
/// # Errors
///
/// Returns [`InvalidArgument::NonPositiveSubdivisions`] when `n <= 0`.
///
/// # Examples
///
/// ```
/// use par_simpson::integrate;
///
/// let area = integrate(&|x: f64| x * x, 0.0, 3.0, 10_000).unwrap();
/// assert!((area - 9.0).abs() < 1e-8);
/// ```
pub fn integrate<F>(f: &F, a: f64, b: f64, n: i64) -> Result<f64>
where
    F: ScalarFunction + ?Sized,
{
    integrate_with_config(f, a, b, n, &IntegrationConfig::default())
}

/// [`integrate`] with explicit tuning.
pub fn integrate_with_config<F>(
    f: &F,
    a: f64,
    b: f64,
    n: i64,
    config: &IntegrationConfig,
) -> Result<f64>
where
    F: ScalarFunction + ?Sized,
{
    let normalized = normalize(a, b, n)?;
    let parallelism = config.effective_parallelism()?;
    let range = match normalized {
        Normalized::Empty => return Ok(0.0),
        Normalized::Range(range) => range,
    };

    if range.subdivisions < config.sequential_threshold {
        debug!(
            "sequential simpson: n={} below threshold {}",
            range.subdivisions, config.sequential_threshold
        );
        return evaluate(f, &range, 1);
    }
    evaluate(f, &range, parallelism)
}

/// Computes ∫ₐᵇ f(x) dx on a pool of exactly `parallelism` threads and
/// reports how long it took.
///
/// The pool is created inside this call and every worker is joined before
/// it returns, including when `f` panics, in which case the panic resumes
/// here after teardown. Equal bounds return a zero value and zero duration
/// without evaluating `f`.
///
/// # Errors
///
/// * [`InvalidArgument::NonPositiveSubdivisions`] when `n <= 0`
/// * [`InvalidArgument::NonPositiveParallelism`] when `parallelism == 0`
/// * [`crate::Error::PoolBuild`] when the worker threads cannot be spawned
pub fn integrate_with_fixed_pool<F>(
    f: &F,
    a: f64,
    b: f64,
    n: i64,
    parallelism: usize,
) -> Result<IntegrationResult>
where
    F: ScalarFunction + ?Sized,
{
    let normalized = normalize(a, b, n)?;
    if parallelism == 0 {
        return Err(InvalidArgument::NonPositiveParallelism.into());
    }
    let range = match normalized {
        Normalized::Empty => return Ok(IntegrationResult::trivial()),
        Normalized::Range(range) => range,
    };

    let started = Instant::now();
    let value = evaluate(f, &range, parallelism)?;
    let result = IntegrationResult::new(value, started.elapsed());

    debug!(
        "simpson on {} workers: value={} in {}ns",
        parallelism,
        result.value(),
        result.duration_nanos()
    );
    Ok(result)
}

/// Partition, evaluate and aggregate. A single worker runs inline.
fn evaluate<F>(f: &F, range: &NormalizedRange, parallelism: usize) -> Result<f64>
where
    F: ScalarFunction + ?Sized,
{
    let step = range.step();
    let chunks = partition(range.subdivisions, parallelism);

    let partials: Vec<f64> = if parallelism == 1 {
        chunks
            .iter()
            .map(|chunk| partial_sum(f, chunk, range, step))
            .collect()
    } else {
        dispatch(f, range, step, &chunks, parallelism)?
    };

    Ok(aggregate(&partials, range, step))
}

fn dispatch<F>(
    f: &F,
    range: &NormalizedRange,
    step: f64,
    chunks: &[Chunk],
    parallelism: usize,
) -> Result<Vec<f64>>
where
    F: ScalarFunction + ?Sized,
{
    debug!(
        "dispatching n={} as {} chunks over {} workers",
        range.subdivisions,
        chunks.len(),
        parallelism
    );

    // `build_scoped` joins every worker before returning, and re-raises a
    // worker panic only after the pool has stopped.
    let partials = ThreadPoolBuilder::new()
        .num_threads(parallelism)
        .thread_name(|i| format!("simpson-worker-{i}"))
        .build_scoped(
            |thread| thread.run(),
            |pool| {
                pool.install(|| {
                    chunks
                        .par_iter()
                        .map(|chunk| {
                            let sum = partial_sum(f, chunk, range, step);
                            trace!(
                                "chunk {} [{}, {}] partial sum {}",
                                chunk.index,
                                chunk.start,
                                chunk.end,
                                sum
                            );
                            sum
                        })
                        .collect::<Vec<f64>>()
                })
            },
        )?;

    Ok(partials)
}
