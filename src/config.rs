//! Digit widget configuration constants.
//!
//! All defaults are compile-time constants with validation assertions, in the
//! same way as the threshold tables: a misconfigured value fails the build
//! instead of producing a broken glyph at runtime.

// =============================================================================
// Widget Size
// =============================================================================

/// Default digit width in pixels.
pub const DEFAULT_WIDTH: u32 = 16;

/// Default digit height in pixels (2:1 portrait cell).
pub const DEFAULT_HEIGHT: u32 = 32;

const _: () = assert!(DEFAULT_WIDTH > 0 && DEFAULT_HEIGHT > 0);

// =============================================================================
// Decimal Point
// =============================================================================

/// Power of ten a freshly created digit represents.
/// Digits are assumed to be arranged most-significant first.
pub const DEFAULT_POWER_SCALE: i32 = 4;

/// The dot radius is the digit width divided by this value.
pub const DOT_RADIUS_DIVISOR: f32 = 9.0;

/// Dot center sits this many radii above the bottom edge.
pub const DOT_BOTTOM_OFFSET: f32 = 1.5;

const _: () = assert!(DOT_RADIUS_DIVISOR > 2.0 * DOT_BOTTOM_OFFSET);

// =============================================================================
// Segment Shape
// =============================================================================

/// Ratio of segment thickness to segment length.
pub const DEFAULT_SEGMENT_ASPECT: f32 = 0.25;

/// Gap between neighbouring segments in pixels.
pub const DEFAULT_SEGMENT_SPACING: f32 = 1.0;

/// Corner radius of the digit background in pixels.
pub const DEFAULT_CORNER_RADIUS: u32 = 1;

/// Outline width of unlit segments in pixels.
pub const OUTLINE_WIDTH: u32 = 1;

const _: () = assert!(DEFAULT_SEGMENT_ASPECT > 0.0 && DEFAULT_SEGMENT_ASPECT < 1.0);
const _: () = assert!(DEFAULT_SEGMENT_SPACING >= 0.0);

// =============================================================================
// Readout
// =============================================================================

/// Capacity of the text buffer produced by `Readout::format`.
pub const READOUT_TEXT_LEN: usize = 24;
