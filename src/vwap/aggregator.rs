//! Incremental per-symbol hourly VWAP state

use super::types::{HourBucket, HOURS_PER_DAY};
use crate::decode::TradeEvent;
use std::collections::HashMap;

const NANOS_PER_HOUR: u64 = 3_600_000_000_000;

/// Map a trade timestamp to its hour-of-day bucket. Timestamps beyond one
/// nominal day wrap mod 24; that is the documented behavior, not a defect.
pub fn hour_index(timestamp_ns: u64) -> usize {
    ((timestamp_ns / NANOS_PER_HOUR) % HOURS_PER_DAY as u64) as usize
}

/// Owns the symbol table for the whole run; mutated only by `update`, read
/// once by the reporter at the end.
#[derive(Debug, Default)]
pub struct VwapAggregator {
    table: HashMap<String, [HourBucket; HOURS_PER_DAY]>,
}

impl VwapAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one trade into its symbol+hour bucket, lazily creating the
    /// symbol's zeroed bucket array on first sight.
    pub fn update(&mut self, trade: &TradeEvent) {
        let hour = hour_index(trade.timestamp_ns);
        let buckets = self
            .table
            .entry(trade.symbol.clone())
            .or_insert_with(|| [HourBucket::default(); HOURS_PER_DAY]);

        let bucket = &mut buckets[hour];
        let v0 = bucket.volume as f64;
        let v1 = bucket.volume + u64::from(trade.shares);
        bucket.value =
            (bucket.value * v0 + trade.price * f64::from(trade.shares)) / v1 as f64;
        bucket.volume = v1;
    }

    /// Per-symbol bucket arrays, in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[HourBucket; HOURS_PER_DAY])> {
        self.table.iter().map(|(sym, buckets)| (sym.as_str(), buckets))
    }

    pub fn symbol_count(&self) -> usize {
        self.table.len()
    }
}
