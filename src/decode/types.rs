//! Trade decode types

/// A decoded trade event, produced once per qualifying frame and folded into
/// the aggregator immediately.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeEvent {
    /// Trading symbol, at most 8 characters, padding trimmed
    pub symbol: String,
    /// Nanoseconds since the feed's reference point (start of day)
    pub timestamp_ns: u64,
    /// Trade price, decoded from the fixed-point wire value
    pub price: f64,
    /// Share quantity, always > 0
    pub shares: u32,
}

/// Outcome of decoding a single frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    /// The frame carried a usable trade
    Trade(TradeEvent),
    /// The frame was skipped; the pipeline moves on to the next frame
    Skipped(SkipReason),
}

/// Why a frame produced no trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Tag does not denote a trade-bearing message
    UnknownTag,
    /// Trade-bearing tag whose body cannot cover the required field extent
    ShortBody,
    /// Decoded share quantity was zero
    ZeroShares,
}
