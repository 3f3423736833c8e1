use log::trace;
use std::fmt::{Display, Formatter};

/// Latency value, in nanoseconds, marking an incomplete/unrecorded measurement.
/// Samples equal to this value are excluded from all statistics.
pub const INCOMPLETE: i32 = i32::MAX;

/// Fractions at which percentiles are taken, in slot order.
const FRACTIONS: [f64; 8] = [0.0, 0.25, 0.5, 0.75, 0.9, 0.95, 0.99, 1.0];

/// Named positions into the fixed percentile sequence of [`DistributionStats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PercentilePoint {
    Minimum,
    P25,
    Median,
    P75,
    P90,
    P95,
    P99,
    Maximum,
}

impl PercentilePoint {
    /// All points, in ascending fraction order.
    pub const ALL: [PercentilePoint; 8] = [
        Self::Minimum,
        Self::P25,
        Self::Median,
        Self::P75,
        Self::P90,
        Self::P95,
        Self::P99,
        Self::Maximum,
    ];

    /// The fraction at which this point's percentile is taken.
    pub fn fraction(self) -> f64 {
        FRACTIONS[self as usize]
    }
}

/// Summary statistics over a set of latency samples, in nanoseconds.
///
/// Immutable once constructed. The percentile sequence is a fixed-size `Copy`
/// array, so both construction and retrieval hand out independent copies and
/// no external reference can alias internal state.
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionStats {
    count: u64,
    percentiles: [i64; 8],
    mean: f64,
    std_dev: f64,
}

impl DistributionStats {
    /// Building block for [`Self::compute`]. Not input validation: a
    /// non-positive count here is a defect in the computation itself.
    fn new(count: u64, percentiles: [i64; 8], mean: f64, std_dev: f64) -> Self {
        assert!(count > 0);
        Self {
            count,
            percentiles,
            mean,
            std_dev,
        }
    }

    /// The canonical "no data" value: count `0`, every percentile slot `-1`,
    /// mean and standard deviation `0`.
    pub fn empty() -> Self {
        Self {
            count: 0,
            percentiles: [-1; 8],
            mean: 0.0,
            std_dev: 0.0,
        }
    }

    /// Computes distribution statistics over `values`.
    ///
    /// WARNING: this sorts `values` in place. Callers that need the original
    /// order afterward must pass a copy.
    ///
    /// Samples equal to [`INCOMPLETE`] are discarded. An empty input, or one
    /// containing only [`INCOMPLETE`], yields [`Self::empty`].
    pub fn compute(values: &mut [i32]) -> Self {
        if values.is_empty() {
            return Self::empty();
        }
        values.sort_unstable();

        // Incomplete latencies sort to the end; trim them off.
        let mut idx = values.len();
        while idx > 0 && values[idx - 1] == INCOMPLETE {
            idx -= 1;
        }
        if idx < values.len() {
            trace!("discarded {} incomplete latency samples", values.len() - idx);
        }
        let values = &values[..idx];
        if values.is_empty() {
            return Self::empty();
        }
        let n = values.len();

        let sum: f64 = values.iter().map(|&v| v as f64).sum();
        let mean = sum / n as f64;

        let sum_diffs_squared: f64 = values
            .iter()
            .map(|&v| {
                let d = v as f64 - mean;
                d * d
            })
            .sum();
        let std_dev = if n > 1 {
            (sum_diffs_squared / (n - 1) as f64).sqrt()
        } else {
            0.0
        };

        // Nearest-rank selection, not the interpolation NIST recommends:
        // index = floor(p * n), clamped to n - 1 (only reached for p = 1.0).
        // http://www.itl.nist.gov/div898/handbook/prc/section2/prc252.htm
        let mut percentiles = [0_i64; 8];
        for (slot, fraction) in FRACTIONS.iter().enumerate() {
            let mut index = (fraction * n as f64) as usize;
            if index == n {
                index = n - 1;
            }
            percentiles[slot] = values[index] as i64;
        }

        Self::new(n as u64, percentiles, mean, std_dev)
    }

    /// Number of valid (non-incomplete) samples the statistics cover.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Arithmetic mean of the valid samples; `0` when there are none.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Bessel-corrected sample standard deviation (divisor `n - 1`);
    /// `0` when there are fewer than two valid samples.
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// The percentile at the given named point; `-1` when there is no data.
    pub fn percentile(&self, point: PercentilePoint) -> i64 {
        self.percentiles[point as usize]
    }

    pub fn min(&self) -> i64 {
        self.percentile(PercentilePoint::Minimum)
    }

    pub fn p25(&self) -> i64 {
        self.percentile(PercentilePoint::P25)
    }

    pub fn median(&self) -> i64 {
        self.percentile(PercentilePoint::Median)
    }

    pub fn p75(&self) -> i64 {
        self.percentile(PercentilePoint::P75)
    }

    pub fn p90(&self) -> i64 {
        self.percentile(PercentilePoint::P90)
    }

    pub fn p95(&self) -> i64 {
        self.percentile(PercentilePoint::P95)
    }

    pub fn p99(&self) -> i64 {
        self.percentile(PercentilePoint::P99)
    }

    pub fn max(&self) -> i64 {
        self.percentile(PercentilePoint::Maximum)
    }

    /// Independent copy of the full percentile sequence, in slot order.
    pub fn percentiles(&self) -> [i64; 8] {
        self.percentiles
    }
}

impl Display for DistributionStats {
    /// Diagnostic rendering, with times converted from ns to ms.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[min={}, 25th={}, median={}, avg={}, 75th={}, 90th={}, 95th={}, 99th={}, max={}]",
            self.min() as f64 / 1e6,
            self.p25() as f64 / 1e6,
            self.median() as f64 / 1e6,
            self.mean() / 1e6,
            self.p75() as f64 / 1e6,
            self.p90() as f64 / 1e6,
            self.p95() as f64 / 1e6,
            self.p99() as f64 / 1e6,
            self.max() as f64 / 1e6,
        )
    }
}

/// Computes a [`DistributionStats`] from a slice of latency samples.
/// WARNING: this sorts `values` in place; see [`DistributionStats::compute`].
pub fn compute_stats(values: &mut [i32]) -> DistributionStats {
    DistributionStats::compute(values)
}
