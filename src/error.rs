//! Errors reported by the decoder and the layout engine.
//!
//! All variants are local and recoverable by the caller. The dot state machine
//! has no error conditions, and degenerate geometry is not an error.

use heapless::String;

/// Maximum number of characters of a rejected segment token kept for reporting.
pub const SEGMENT_TOKEN_LEN: usize = 8;

/// A rejected segment identifier, truncated to [`SEGMENT_TOKEN_LEN`] characters.
pub type SegmentToken = String<SEGMENT_TOKEN_LEN>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DisplayError {
    /// Digit magnitude above 9. Never clamped.
    #[error("each digit supports no higher than 9, but received {0}")]
    OutOfRange(i32),

    /// Segment identifier outside `A..=G` (case-insensitive).
    #[error("segment must be one of 'ABCDEFG', but received {0:?}")]
    InvalidSegment(SegmentToken),

    /// Drawing area with a zero dimension.
    #[error("drawing area must have positive size, but received {width}x{height}")]
    InvalidArea { width: u32, height: u32 },
}

impl DisplayError {
    /// Build an [`DisplayError::InvalidSegment`] from an arbitrary token.
    pub fn invalid_segment(token: &str) -> Self {
        let mut kept = SegmentToken::new();
        for c in token.chars() {
            if kept.push(c).is_err() {
                break;
            }
        }
        Self::InvalidSegment(kept)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DisplayError {
    fn format(
        &self,
        f: defmt::Formatter,
    ) {
        match self {
            Self::OutOfRange(value) => defmt::write!(f, "OutOfRange({=i32})", value),
            Self::InvalidSegment(token) => defmt::write!(f, "InvalidSegment({=str})", token.as_str()),
            Self::InvalidArea { width, height } => defmt::write!(f, "InvalidArea({=u32}x{=u32})", width, height),
        }
    }
}
