use std::env;

use par_simpson::integrate_with_fixed_pool;

const NANOS_TO_MILLIS: f64 = 1_000_000.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Subdivision count may be overridden by the first argument.
    let n = match env::args().nth(1) {
        Some(arg) => arg.parse::<i64>()?,
        None => 20_000_001,
    };
    let f = |x: f64| (1.0 + x * x) / (1.0 + x * x * x * x);
    let (a, b) = (-500.0, 500.0);

    println!("Parallelism scaling, n = {n}");

    let mut baseline = None;
    for parallelism in [1, 2, 4, 8, 16] {
        let result = integrate_with_fixed_pool(&f, a, b, n, parallelism)?;
        let millis = result.duration_nanos() as f64 / NANOS_TO_MILLIS;
        let base = *baseline.get_or_insert(millis);

        println!(
            "parallelism {parallelism:>2}: {millis:>10.3} ms, speedup {:>5.2}x, value {:.10}",
            base / millis,
            result.value()
        );
    }

    Ok(())
}
