//! Fixed-offset trade field extraction

use super::reader::{be_u32, be_u64};
use super::types::{Decoded, SkipReason, TradeEvent};
use crate::frame::RawFrame;

/// Message tags whose body encodes a realized trade.
pub const TRADE_TAGS: [u8; 3] = [b'P', b'E', b'C'];

/// Smallest body that covers every trade field (price ends at 32 + 4).
pub const MIN_TRADE_BODY: usize = 36;

const TIMESTAMP_OFFSET: usize = 5;
const SHARES_OFFSET: usize = 20;
const SYMBOL_OFFSET: usize = 24;
const SYMBOL_WIDTH: usize = 8;
const PRICE_OFFSET: usize = 32;

/// Wire prices are fixed-point integers scaled by 10_000.
const PRICE_SCALE: f64 = 10_000.0;

/// Decode one frame. Non-trade tags are rejected without inspecting the body;
/// trade tags are bounds-checked against the required field extent before any
/// field read, independent of the length the framer already validated.
pub fn decode(frame: &RawFrame<'_>) -> Decoded {
    if !TRADE_TAGS.contains(&frame.tag) {
        return Decoded::Skipped(SkipReason::UnknownTag);
    }
    if frame.body.len() < MIN_TRADE_BODY {
        return Decoded::Skipped(SkipReason::ShortBody);
    }

    // The length check above covers every offset below, but each read is
    // still validated; a None here means the extent constants are wrong.
    let (Some(timestamp_ns), Some(shares), Some(price_raw)) = (
        be_u64(frame.body, TIMESTAMP_OFFSET),
        be_u32(frame.body, SHARES_OFFSET),
        be_u32(frame.body, PRICE_OFFSET),
    ) else {
        return Decoded::Skipped(SkipReason::ShortBody);
    };

    if shares == 0 {
        return Decoded::Skipped(SkipReason::ZeroShares);
    }

    let symbol = decode_symbol(&frame.body[SYMBOL_OFFSET..SYMBOL_OFFSET + SYMBOL_WIDTH]);

    Decoded::Trade(TradeEvent {
        symbol,
        timestamp_ns,
        price: f64::from(price_raw) / PRICE_SCALE,
        shares,
    })
}

/// Trim trailing space/NUL padding from the 8-byte symbol field.
fn decode_symbol(raw: &[u8]) -> String {
    let end = raw
        .iter()
        .rposition(|&b| b != b' ' && b != 0)
        .map_or(0, |i| i + 1);
    String::from_utf8_lossy(&raw[..end]).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trade_body(tag: u8, timestamp_ns: u64, shares: u32, symbol: &str, price_raw: u32) -> Vec<u8> {
        let mut body = vec![0u8; 41];
        body[0] = tag;
        body[TIMESTAMP_OFFSET..TIMESTAMP_OFFSET + 8].copy_from_slice(&timestamp_ns.to_be_bytes());
        body[SHARES_OFFSET..SHARES_OFFSET + 4].copy_from_slice(&shares.to_be_bytes());
        let mut sym = [b' '; SYMBOL_WIDTH];
        sym[..symbol.len()].copy_from_slice(symbol.as_bytes());
        body[SYMBOL_OFFSET..SYMBOL_OFFSET + SYMBOL_WIDTH].copy_from_slice(&sym);
        body[PRICE_OFFSET..PRICE_OFFSET + 4].copy_from_slice(&price_raw.to_be_bytes());
        body
    }

    fn frame(body: &[u8]) -> RawFrame<'_> {
        RawFrame {
            tag: body[0],
            body,
        }
    }

    #[test]
    fn test_decode_trade_fields() {
        let body = trade_body(b'P', 1_800_000_000_000, 100, "AAPL", 1_000_000);
        let Decoded::Trade(trade) = decode(&frame(&body)) else {
            panic!("expected a trade");
        };
        assert_eq!(trade.symbol, "AAPL");
        assert_eq!(trade.timestamp_ns, 1_800_000_000_000);
        assert_eq!(trade.shares, 100);
        assert!((trade.price - 100.0).abs() < 1e-12);
    }

    #[test]
    fn test_price_scaling() {
        let body = trade_body(b'E', 0, 1, "X", 12_345);
        let Decoded::Trade(trade) = decode(&frame(&body)) else {
            panic!("expected a trade");
        };
        assert!((trade.price - 1.2345).abs() < 1e-12);
    }

    #[test]
    fn test_all_trade_tags_accepted() {
        for tag in TRADE_TAGS {
            let body = trade_body(tag, 0, 5, "MSFT", 1);
            assert!(matches!(decode(&frame(&body)), Decoded::Trade(_)));
        }
    }

    #[test]
    fn test_unknown_tag_rejected_without_inspection() {
        // Body far too short for a trade, but the tag is checked first
        let body = [b'A', 0, 0];
        assert_eq!(
            decode(&frame(&body)),
            Decoded::Skipped(SkipReason::UnknownTag)
        );
    }

    #[test]
    fn test_short_body_rejected() {
        let full = trade_body(b'P', 0, 10, "AAPL", 1_000);
        let short = &full[..MIN_TRADE_BODY - 1];
        assert_eq!(
            decode(&frame(short)),
            Decoded::Skipped(SkipReason::ShortBody)
        );
    }

    #[test]
    fn test_minimum_body_accepted() {
        let full = trade_body(b'C', 0, 10, "AAPL", 1_000);
        let min = &full[..MIN_TRADE_BODY];
        assert!(matches!(decode(&frame(min)), Decoded::Trade(_)));
    }

    #[test]
    fn test_zero_shares_rejected() {
        let body = trade_body(b'P', 0, 0, "AAPL", 1_000);
        assert_eq!(
            decode(&frame(&body)),
            Decoded::Skipped(SkipReason::ZeroShares)
        );
    }

    #[test]
    fn test_symbol_padding_trimmed() {
        assert_eq!(decode_symbol(b"AAPL    "), "AAPL");
        assert_eq!(decode_symbol(b"AAPL\0\0\0\0"), "AAPL");
        assert_eq!(decode_symbol(b"BRK.A   "), "BRK.A");
        assert_eq!(decode_symbol(b"        "), "");
        assert_eq!(decode_symbol(b"LONGSYMB"), "LONGSYMB");
    }
}
