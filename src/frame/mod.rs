//! Message framer
//!
//! Walks the input buffer once, yielding length-prefixed frames. Truncation
//! (a length prefix or declared body extending past the buffer) ends the
//! sequence; it is not an error.

use crate::decode::reader::be_u16;

/// One frame of the wire protocol: a type tag and the declared body bytes.
/// The body begins at the tag, so `body[0] == tag` and field offsets within
/// the frame are taken relative to `body`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawFrame<'a> {
    pub tag: u8,
    pub body: &'a [u8],
}

/// Lazy, finite, single-pass iterator over the frames of a feed buffer.
pub struct FrameIter<'a> {
    buf: &'a [u8],
    offset: usize,
}

impl<'a> FrameIter<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, offset: 0 }
    }
}

impl<'a> Iterator for FrameIter<'a> {
    type Item = RawFrame<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        // None covers both EOF and a truncated 2-byte length prefix
        let declared = be_u16(self.buf, self.offset)? as usize;
        let start = self.offset + 2;

        // A zero-length frame has no tag byte; nothing more can be framed
        if declared == 0 {
            return None;
        }

        let body = self.buf.get(start..start + declared)?;
        self.offset = start + declared;

        Some(RawFrame { tag: body[0], body })
    }
}
