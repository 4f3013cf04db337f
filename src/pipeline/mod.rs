//! Decode-and-aggregate pipeline
//!
//! One sequential pass: Framer → Decoder → Aggregator. All run state lives
//! in the summary returned to the caller; there is no ambient state.

use crate::decode::{self, Decoded, SkipReason};
use crate::frame::FrameIter;
use crate::vwap::VwapAggregator;
use std::time::Instant;

/// Counters and timing for the finished run.
#[derive(Debug, Default, Clone, Copy)]
pub struct RunStats {
    /// Every frame the framer yielded, regardless of tag
    pub messages_seen: u64,
    /// Frames that decoded to a usable trade and reached the aggregator
    pub trades_aggregated: u64,
    /// Wall-clock duration of the pass, whole seconds
    pub elapsed_secs: u64,
}

/// Final aggregator state plus run statistics.
#[derive(Debug)]
pub struct RunSummary {
    pub vwaps: VwapAggregator,
    pub stats: RunStats,
}

/// Process an entire feed buffer. Truncation ends the frame sequence early;
/// per-frame rejections are counted and skipped. Neither is an error.
pub fn run(bytes: &[u8]) -> RunSummary {
    let started = Instant::now();
    let mut vwaps = VwapAggregator::new();
    let mut stats = RunStats::default();

    for frame in FrameIter::new(bytes) {
        stats.messages_seen += 1;
        match decode::decode(&frame) {
            Decoded::Trade(trade) => {
                vwaps.update(&trade);
                stats.trades_aggregated += 1;
            }
            Decoded::Skipped(SkipReason::UnknownTag) => {}
            Decoded::Skipped(reason) => {
                tracing::debug!(tag = frame.tag, ?reason, "skipped trade frame");
            }
        }
    }

    stats.elapsed_secs = started.elapsed().as_secs();
    tracing::info!(
        messages = stats.messages_seen,
        trades = stats.trades_aggregated,
        symbols = vwaps.symbol_count(),
        "finished pass"
    );

    RunSummary { vwaps, stats }
}
