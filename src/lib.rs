//! itch-vwap: per-symbol hourly VWAP from ITCH-style binary market data
//!
//! This library provides the core components for:
//! - Memory-mapped byte source over the whole input file
//! - Length-prefixed big-endian message framing
//! - Fixed-offset trade decoding with bounds-checked field reads
//! - Incremental per-symbol, 24-bucket hourly VWAP aggregation
//! - Text report rendering with dual file/stdout delivery

pub mod cli;
pub mod config;
pub mod decode;
pub mod frame;
pub mod pipeline;
pub mod report;
pub mod source;
pub mod telemetry;
pub mod vwap;
