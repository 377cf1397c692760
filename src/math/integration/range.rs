use crate::error::{InvalidArgument, Result};

/// An integration interval rewritten so that `origin < end` and the
/// subdivision count is even.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedRange {
    /// Lower bound after any reversal.
    pub origin: f64,
    /// Upper bound after any reversal.
    pub end: f64,
    /// Even number of subintervals.
    pub subdivisions: u64,
    /// `-1.0` when the caller's bounds were reversed.
    pub sign: f64,
}

impl NormalizedRange {
    /// Node spacing, shared by every worker of a call.
    pub fn step(&self) -> f64 {
        (self.end - self.origin) / self.subdivisions as f64
    }

    /// Abscissa of node `i`. The last node is pinned to `end`.
    pub fn node(&self, i: u64, step: f64) -> f64 {
        if i == self.subdivisions {
            self.end
        } else {
            self.origin + i as f64 * step
        }
    }
}

/// Outcome of normalizing the caller's arguments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Normalized {
    /// `a == b`: the integral is zero and nothing needs evaluating.
    Empty,
    Range(NormalizedRange),
}

/// Validates `n` and orients the interval.
///
/// `n` is checked before the bounds are looked at. An odd `n` is promoted to
/// the next even count since Simpson's rule consumes nodes in pairs.
pub fn normalize(a: f64, b: f64, n: i64) -> Result<Normalized> {
    if n <= 0 {
        return Err(InvalidArgument::NonPositiveSubdivisions.into());
    }
    if a == b {
        return Ok(Normalized::Empty);
    }

    let n = n as u64;
    let subdivisions = if n % 2 == 0 { n } else { n + 1 };
    let (origin, end, sign) = if a > b { (b, a, -1.0) } else { (a, b, 1.0) };

    Ok(Normalized::Range(NormalizedRange {
        origin,
        end,
        subdivisions,
        sign,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(a: f64, b: f64, n: i64) -> NormalizedRange {
        match normalize(a, b, n).unwrap() {
            Normalized::Range(range) => range,
            Normalized::Empty => panic!("expected a non-empty range"),
        }
    }

    #[test]
    fn test_rejects_non_positive_n() {
        for n in [0, -1, -100] {
            let err = normalize(0.0, 1.0, n).unwrap_err();
            assert_eq!(
                err.invalid_argument(),
                Some(InvalidArgument::NonPositiveSubdivisions)
            );
        }
    }

    #[test]
    fn test_n_checked_before_bounds() {
        assert!(normalize(2.0, 2.0, 0).is_err());
    }

    #[test]
    fn test_equal_bounds_are_empty() {
        assert_eq!(normalize(3.5, 3.5, 1000).unwrap(), Normalized::Empty);
    }

    #[test]
    fn test_forward_interval() {
        let r = range(0.0, 3.0, 10);
        assert_eq!(r.origin, 0.0);
        assert_eq!(r.end, 3.0);
        assert_eq!(r.subdivisions, 10);
        assert_eq!(r.sign, 1.0);
    }

    #[test]
    fn test_reversed_interval() {
        let r = range(10.0, 0.0, 1000);
        assert_eq!(r.origin, 0.0);
        assert_eq!(r.end, 10.0);
        assert_eq!(r.sign, -1.0);
    }

    #[test]
    fn test_odd_n_promoted() {
        assert_eq!(range(0.0, 1.0, 999).subdivisions, 1000);
        assert_eq!(range(0.0, 1.0, 1).subdivisions, 2);
    }

    #[test]
    fn test_nodes() {
        let r = range(1.0, 2.0, 4);
        let h = r.step();
        assert_eq!(h, 0.25);
        assert_eq!(r.node(0, h), 1.0);
        assert_eq!(r.node(2, h), 1.5);
        assert_eq!(r.node(4, h), 2.0);
    }
}
