use crate::math::integration::partition::Chunk;
use crate::math::integration::range::NormalizedRange;
use crate::math::integration::ScalarFunction;

/// Composite Simpson weight of node `i` among `subdivisions + 1` nodes.
#[inline]
pub fn weight(i: u64, subdivisions: u64) -> f64 {
    if i == 0 || i == subdivisions {
        1.0
    } else if i % 2 == 1 {
        4.0
    } else {
        2.0
    }
}

/// Weighted sum of `f` over the nodes owned by `chunk`, not yet scaled by `h/3`.
///
/// A chunk owns `[start, end)`; the chunk ending at the last node owns it
/// too, so each node of the grid is evaluated exactly once per call.
pub fn partial_sum<F>(f: &F, chunk: &Chunk, range: &NormalizedRange, step: f64) -> f64
where
    F: ScalarFunction + ?Sized,
{
    let stop = if chunk.end == range.subdivisions {
        chunk.end + 1
    } else {
        chunk.end
    };

    let mut sum = 0.0;
    for i in chunk.start..stop {
        sum += weight(i, range.subdivisions) * f.evaluate(range.node(i, step));
    }
    sum
}

/// Combines partial sums in chunk order and applies the `h/3` scale and sign.
pub fn aggregate(partials: &[f64], range: &NormalizedRange, step: f64) -> f64 {
    let total: f64 = partials.iter().sum();
    total * step / 3.0 * range.sign
}
