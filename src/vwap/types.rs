//! Aggregation state types

/// Number of hour-of-day buckets per symbol.
pub const HOURS_PER_DAY: usize = 24;

/// One hour-of-day aggregation slot.
///
/// `value` is the exact running volume-weighted mean of every trade folded in
/// so far (within floating-point rounding); `volume` only ever grows.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HourBucket {
    pub value: f64,
    pub volume: u64,
}
