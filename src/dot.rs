//! Decimal point placement and power-of-ten scale.
//!
//! Every digit in a readout carries the exponent of ten it represents. A
//! digit can also stand in for the decimal point itself ("dot mode"), in
//! which case it draws a single dot instead of a numeral.
//!
//! # Walking the point
//!
//! Applying the same move to every digit of a row slides the point by one
//! position while keeping each exponent consistent with its distance from the
//! point. Example with four digits, moving left:
//!
//! | Row          | Scales          |
//! |--------------|-----------------|
//! | `1 2 3 4`    | `3  2  1  0`    |
//! | `1 2 3 .`    | `2  1  0  D`    |
//! | `1 2 . 4`    | `1  0  D -1`    |
//!
//! A digit enters dot mode from scale `0` on a left move and from scale `-1`
//! on a right move, so a left move followed by a right move always restores
//! the previous state.

#[cfg(not(test))]
use micromath::F32Ext;

use crate::config::DEFAULT_POWER_SCALE;

/// Dot mode and power scale of one digit.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DotAnchor {
    is_dot: bool,
    power_scale: i32,
}

impl DotAnchor {
    /// Numeral at the given power of ten.
    pub const fn new(power_scale: i32) -> Self {
        Self {
            is_dot: false,
            power_scale,
        }
    }

    /// Start in (or out of) dot mode.
    pub const fn with_dot(
        mut self,
        is_dot: bool,
    ) -> Self {
        self.is_dot = is_dot;
        self
    }

    /// Whether the digit currently shows the decimal point.
    #[inline]
    pub const fn is_dot_mode(&self) -> bool { self.is_dot }

    /// Exponent of ten this digit represents.
    #[inline]
    pub const fn power_scale(&self) -> i32 { self.power_scale }

    /// Reset the exponent. Leaves dot mode.
    pub fn set_power_scale(
        &mut self,
        power_scale: i32,
    ) {
        self.is_dot = false;
        self.power_scale = power_scale;
    }

    /// Move the decimal point one position to the left.
    pub fn move_dot_left(&mut self) {
        if self.is_dot {
            self.is_dot = false;
            self.power_scale = -1;
        } else if self.power_scale == 0 {
            self.is_dot = true;
        } else {
            self.power_scale -= 1;
        }
        log_trace!("dot left: dot={} scale={}", self.is_dot, self.power_scale);
    }

    /// Move the decimal point one position to the right.
    pub fn move_dot_right(&mut self) {
        if self.is_dot {
            self.is_dot = false;
            self.power_scale = 0;
        } else if self.power_scale == -1 {
            self.is_dot = true;
        } else {
            self.power_scale += 1;
        }
        log_trace!("dot right: dot={} scale={}", self.is_dot, self.power_scale);
    }

    /// `digit * 10^power_scale`, or `None` in dot mode.
    pub fn effective_value(
        &self,
        digit: u8,
    ) -> Option<f32> {
        if self.is_dot {
            return None;
        }
        Some(f32::from(digit) * 10f32.powi(self.power_scale))
    }
}

impl Default for DotAnchor {
    fn default() -> Self { Self::new(DEFAULT_POWER_SCALE) }
}

// =============================================================================
// Unit Tests
// =============================================================================
