//! Trade decoder
//!
//! Interprets trade-bearing frames at fixed byte offsets with big-endian
//! field conversion. Everything else is filtered out by tag.

mod decoder;
pub mod reader;
mod types;

pub use decoder::{decode, MIN_TRADE_BODY, TRADE_TAGS};
pub use types::{Decoded, SkipReason, TradeEvent};
