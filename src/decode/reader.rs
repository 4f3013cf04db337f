//! Bounds-checked big-endian field reads
//!
//! Every multi-byte read is validated against the buffer before a value is
//! produced; an out-of-range read yields `None` instead of panicking.

/// Read a big-endian u16 at `at`, if the buffer covers it.
pub fn be_u16(buf: &[u8], at: usize) -> Option<u16> {
    let bytes: [u8; 2] = buf.get(at..at + 2)?.try_into().ok()?;
    Some(u16::from_be_bytes(bytes))
}

/// Read a big-endian u32 at `at`, if the buffer covers it.
pub fn be_u32(buf: &[u8], at: usize) -> Option<u32> {
    let bytes: [u8; 4] = buf.get(at..at + 4)?.try_into().ok()?;
    Some(u32::from_be_bytes(bytes))
}

/// Read a big-endian u64 at `at`, if the buffer covers it.
pub fn be_u64(buf: &[u8], at: usize) -> Option<u64> {
    let bytes: [u8; 8] = buf.get(at..at + 8)?.try_into().ok()?;
    Some(u64::from_be_bytes(bytes))
}
