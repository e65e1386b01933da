//! Multi-digit readout with a single movable decimal point.
//!
//! [`Readout`] owns a row of `N` digits, most significant first, and is the
//! only place their dot state changes. Moves are applied to every digit at
//! once so the power scales stay consistent with the point position and at
//! most one digit is ever in dot mode.
//!
//! The point may sit on a digit (that digit shows the dot) or just outside
//! the row: right of the last digit (integer display, the initial state) or
//! left of the first digit (`0.xxxx`). Moves beyond those edges are refused.

use core::fmt::Write;

use embedded_graphics::Drawable;
use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::Dimensions;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;
use heapless::String;

use crate::config::READOUT_TEXT_LEN;
use crate::digit::SevenSegmentDigit;
use crate::error::DisplayError;
use crate::segment::DigitValue;
use crate::style::DigitStyle;

/// A row of `N` seven-segment digits sharing one decimal point.
#[derive(Clone, Debug)]
pub struct Readout<const N: usize> {
    bounds: Rectangle,
    digits: [SevenSegmentDigit; N],
}

impl<const N: usize> Readout<N> {
    /// Integer readout filling `bounds`, scales `N-1 ..= 0`.
    pub fn new(
        bounds: Rectangle,
        style: DigitStyle,
    ) -> Self {
        const { assert!(N > 0, "a readout needs at least one digit") };
        // Longest text is "0." followed by every digit
        const { assert!(N + 2 <= READOUT_TEXT_LEN, "readout text would not fit its buffer") };
        let digits = core::array::from_fn(|i| {
            SevenSegmentDigit::new(Point::zero())
                .with_bounds(cell_bounds(bounds, i, N))
                .with_style(style)
                .with_power_scale((N - 1 - i) as i32)
        });
        Self { bounds, digits }
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Resize the row. Every digit gets an equal share of the width.
    pub fn set_bounds(
        &mut self,
        bounds: Rectangle,
    ) {
        self.bounds = bounds;
        for (i, digit) in self.digits.iter_mut().enumerate() {
            digit.set_bounds(cell_bounds(bounds, i, N));
        }
    }

    pub fn set_style(
        &mut self,
        style: DigitStyle,
    ) {
        for digit in &mut self.digits {
            digit.set_style(style);
        }
    }

    // =========================================================================
    // Digits
    // =========================================================================

    #[inline]
    pub fn digits(&self) -> &[SevenSegmentDigit] { &self.digits }

    #[inline]
    pub fn digit(
        &self,
        index: usize,
    ) -> Option<&SevenSegmentDigit> {
        self.digits.get(index)
    }

    /// Set one digit. Returns `Ok(false)` when `index` is past the row.
    pub fn set_digit(
        &mut self,
        index: usize,
        value: i32,
    ) -> Result<bool, DisplayError> {
        match self.digits.get_mut(index) {
            Some(digit) => digit.set_value(value).map(|()| true),
            None => Ok(false),
        }
    }

    /// Assign values left to right. Digits past the end of `values` are
    /// cleared, extra values are ignored.
    ///
    /// All values are checked first: on error nothing changes.
    pub fn set_digits(
        &mut self,
        values: &[i32],
    ) -> Result<(), DisplayError> {
        let mut checked: [Option<DigitValue>; N] = [None; N];
        for (slot, &value) in checked.iter_mut().zip(values) {
            *slot = Some(DigitValue::new(value)?);
        }
        for (digit, value) in self.digits.iter_mut().zip(checked) {
            match value {
                Some(value) => digit.set_digit(value),
                None => digit.clear_value(),
            }
        }
        Ok(())
    }

    /// Step one digit up (9 rolls over to 0). Returns `false` when `index`
    /// is past the row.
    pub fn increment(
        &mut self,
        index: usize,
    ) -> bool {
        let Some(digit) = self.digits.get_mut(index) else {
            return false;
        };
        digit.increment();
        true
    }

    /// Step one digit down (0 rolls over to 9).
    pub fn decrement(
        &mut self,
        index: usize,
    ) -> bool {
        let Some(digit) = self.digits.get_mut(index) else {
            return false;
        };
        digit.decrement();
        true
    }

    // =========================================================================
    // Decimal Point
    // =========================================================================

    /// Index of the digit showing the point, if the point is inside the row.
    pub fn dot_position(&self) -> Option<usize> { self.digits.iter().position(SevenSegmentDigit::is_dot_mode) }

    /// Slide the point one digit to the left.
    ///
    /// Returns `false` (and changes nothing) when the point is already left
    /// of the first digit.
    pub fn move_dot_left(&mut self) -> bool {
        if self.dot_position().is_none() && self.digits[0].power_scale() < 0 {
            return false;
        }
        for digit in &mut self.digits {
            digit.move_dot_left();
        }
        log_debug!("readout dot moved left");
        true
    }

    /// Slide the point one digit to the right.
    ///
    /// Returns `false` (and changes nothing) when the point is already right
    /// of the last digit.
    pub fn move_dot_right(&mut self) -> bool {
        if self.dot_position().is_none() && self.digits[N - 1].power_scale() >= 0 {
            return false;
        }
        for digit in &mut self.digits {
            digit.move_dot_right();
        }
        log_debug!("readout dot moved right");
        true
    }

    /// Sum of the digits' effective values. The dot digit contributes nothing.
    pub fn value(&self) -> f32 { self.digits.iter().filter_map(SevenSegmentDigit::effective_value).sum() }

    /// Text form of the readout, e.g. `"12.4"` or `"0.1234"`.
    pub fn format(&self) -> String<READOUT_TEXT_LEN> {
        let mut text = String::new();
        let has_dot = self.dot_position().is_some();

        if !has_dot {
            let leading = self.digits[0].power_scale();
            if leading < 0 {
                text.push_str("0.").ok();
                for _ in 0..(-leading - 1) {
                    text.push('0').ok();
                }
            }
        }

        for digit in &self.digits {
            if digit.is_dot_mode() {
                text.push('.').ok();
            } else {
                write!(text, "{}", digit.value().get()).ok();
            }
        }

        if !has_dot {
            let trailing = self.digits[N - 1].power_scale();
            for _ in 0..trailing.max(0) {
                text.push('0').ok();
            }
        }
        text
    }
}

/// Bounds of digit `index` out of `count` equal-width cells.
fn cell_bounds(
    bounds: Rectangle,
    index: usize,
    count: usize,
) -> Rectangle {
    let cell_width = bounds.size.width / count as u32;
    Rectangle::new(
        bounds.top_left + Point::new((cell_width * index as u32) as i32, 0),
        Size::new(cell_width, bounds.size.height),
    )
}

impl<const N: usize> Dimensions for Readout<N> {
    fn bounding_box(&self) -> Rectangle { self.bounds }
}

impl<const N: usize> Drawable for Readout<N> {
    type Color = Rgb565;
    type Output = ();

    fn draw<D>(
        &self,
        target: &mut D,
    ) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        for digit in &self.digits {
            digit.draw(target)?;
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
