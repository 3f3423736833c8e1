//! Summary statistics for latency measurements collected during benchmark
//! runs: min, max, mean, sample standard deviation, and a fixed set of
//! percentiles computed by nearest-rank selection over the sorted samples.
//!
//! The whole crate is one pure computation: [`DistributionStats::compute`]
//! turns a slice of nanosecond samples into an immutable snapshot. Samples
//! equal to [`INCOMPLETE`] mark unrecorded measurements and are excluded.
//! There is no streaming mode; the full sample set is sorted in memory.
#![deny(clippy::unwrap_used)]

mod dist_stats;
pub use dist_stats::*;
