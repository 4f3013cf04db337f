//! Reporter
//!
//! Formats final aggregator state and run statistics as text lines and
//! delivers them through a sink.

mod renderer;
mod sink;

pub use renderer::render;
pub use sink::{DualSink, FileSink, ReportSink, SinkError};
