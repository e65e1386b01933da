//! Default color constants for seven-segment digits.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! - Red: 0-31 (5 bits)
//! - Green: 0-63 (6 bits)
//! - Blue: 0-31 (5 bits)
//!
//! The palette mimics an unlit LCD panel: light gray face, black lit segments
//! and faint "ghost" segments for the unlit positions. Values below are the
//! 8-bit RGB design colors reduced to 5/6/5 bits (`r >> 3`, `g >> 2`, `b >> 3`).

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait - guaranteed optimal values)
// =============================================================================

/// Pure black (0, 0, 0). Lit segments and the decimal point.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31).
pub const WHITE: Rgb565 = Rgb565::WHITE;

// =============================================================================
// Digit Face Colors
// =============================================================================

/// Digit background, RGB888 (223, 223, 223).
pub const FACE_GRAY: Rgb565 = Rgb565::new(27, 55, 27);

/// Unlit segment fill, RGB888 (215, 215, 215). Slightly darker than the face.
pub const GHOST_GRAY: Rgb565 = Rgb565::new(26, 53, 26);

/// Unlit segment outline, RGB888 (191, 191, 191).
pub const OUTLINE_GRAY: Rgb565 = Rgb565::new(23, 47, 23);
