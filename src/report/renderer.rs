//! Report line rendering

use crate::pipeline::RunStats;
use crate::vwap::VwapAggregator;

/// Render the final report: per symbol (arbitrary order) a header line and
/// one line per hour with volume, a blank separator, then the run summary.
pub fn render(vwaps: &VwapAggregator, stats: &RunStats) -> Vec<String> {
    let mut lines = Vec::new();

    for (symbol, buckets) in vwaps.iter() {
        lines.push(format!("Symbol: {symbol}"));
        for (hour, bucket) in buckets.iter().enumerate() {
            if bucket.volume > 0 {
                lines.push(format!(
                    "Hour {hour}: VWAP = {:.4}, Volume = {}",
                    bucket.value, bucket.volume
                ));
            }
        }
        lines.push(String::new());
    }

    lines.push(format!(
        "Finished processing. Total messages: {}, Total trades processed: {}, Total time: {} seconds",
        stats.messages_seen, stats.trades_aggregated, stats.elapsed_secs
    ));

    lines
}
