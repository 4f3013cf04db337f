//! VWAP aggregator
//!
//! Maintains the running per-symbol, 24-bucket hourly volume-weighted
//! average price over one pass of the feed.

mod aggregator;
mod types;

pub use aggregator::{hour_index, VwapAggregator};
pub use types::{HourBucket, HOURS_PER_DAY};
