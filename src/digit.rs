//! Seven-segment digit widget.
//!
//! [`SevenSegmentDigit`] combines the decoder, the layout engine and the dot
//! state machine, and renders through any `DrawTarget<Color = Rgb565>`:
//!
//! 1. Rounded-rectangle face in the background color
//! 2. Dot mode: one filled circle near the bottom edge, nothing else
//! 3. Otherwise: seven segment rectangles, lit ones filled with the high
//!    color, unlit ones filled with the low color and outlined
//!
//! Segment geometry is cached per bounds/shape and dropped whenever either
//! changes.

use embedded_graphics::Drawable;
use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::Dimensions;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::{Point, Primitive, Size};
use embedded_graphics::primitives::{Circle, Rectangle, RoundedRectangle};
#[cfg(not(test))]
use micromath::F32Ext;

use crate::config::{DEFAULT_HEIGHT, DEFAULT_WIDTH, DOT_BOTTOM_OFFSET, DOT_RADIUS_DIVISOR};
use crate::dot::DotAnchor;
use crate::error::DisplayError;
use crate::layout::{LayoutCache, SegmentGeometry};
use crate::segment::{DigitValue, SegmentId, SegmentState};
use crate::style::DigitStyle;

/// A single seven-segment digit.
///
/// The value is optional: a digit that was never set displays `0`.
#[derive(Clone, Debug)]
pub struct SevenSegmentDigit {
    bounds: Rectangle,
    style: DigitStyle,
    value: Option<DigitValue>,
    anchor: DotAnchor,
    cache: LayoutCache,
}

impl SevenSegmentDigit {
    /// Default-sized digit at `top_left`, power scale 4, no value.
    pub fn new(top_left: Point) -> Self {
        Self {
            bounds: Rectangle::new(top_left, Size::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)),
            style: DigitStyle::new(),
            value: None,
            anchor: DotAnchor::default(),
            cache: LayoutCache::new(),
        }
    }

    pub fn with_size(
        mut self,
        size: Size,
    ) -> Self {
        self.set_bounds(Rectangle::new(self.bounds.top_left, size));
        self
    }

    pub fn with_bounds(
        mut self,
        bounds: Rectangle,
    ) -> Self {
        self.set_bounds(bounds);
        self
    }

    pub fn with_style(
        mut self,
        style: DigitStyle,
    ) -> Self {
        self.set_style(style);
        self
    }

    pub fn with_power_scale(
        mut self,
        power_scale: i32,
    ) -> Self {
        self.anchor.set_power_scale(power_scale);
        self
    }

    pub fn with_dot(
        mut self,
        is_dot: bool,
    ) -> Self {
        self.anchor = self.anchor.with_dot(is_dot);
        self
    }

    // =========================================================================
    // Bounds and Style
    // =========================================================================

    /// Move or resize the digit. Drops cached geometry.
    pub fn set_bounds(
        &mut self,
        bounds: Rectangle,
    ) {
        if bounds != self.bounds {
            self.bounds = bounds;
            self.cache.invalidate();
        }
    }

    #[inline]
    pub const fn style(&self) -> &DigitStyle { &self.style }

    /// Replace the style. Drops cached geometry.
    pub fn set_style(
        &mut self,
        style: DigitStyle,
    ) {
        if style.shape != self.style.shape {
            self.cache.invalidate();
        }
        self.style = style;
    }

    /// Segment rectangles for the current bounds and shape.
    pub fn geometry(&self) -> Result<SegmentGeometry, DisplayError> {
        self.cache.get_or_layout(self.bounds, &self.style.shape)
    }

    // =========================================================================
    // Value
    // =========================================================================

    /// Displayed digit (`0` when unset).
    #[inline]
    pub fn value(&self) -> DigitValue { self.value.unwrap_or_default() }

    /// Stored digit, `None` when unset.
    #[inline]
    pub const fn raw_value(&self) -> Option<DigitValue> { self.value }

    /// Set the digit from a signed integer (magnitude is stored).
    ///
    /// Magnitudes above 9 are rejected and leave the digit unchanged.
    pub fn set_value(
        &mut self,
        value: i32,
    ) -> Result<(), DisplayError> {
        self.value = Some(DigitValue::new(value)?);
        Ok(())
    }

    #[inline]
    pub fn set_digit(
        &mut self,
        value: DigitValue,
    ) {
        self.value = Some(value);
    }

    /// Forget the value (displays `0` again).
    #[inline]
    pub fn clear_value(&mut self) { self.value = None; }

    /// Step up, rolling over from 9 to 0.
    pub fn increment(&mut self) { self.value = Some(self.value().wrapping_next()); }

    /// Step down, rolling over from 0 to 9.
    pub fn decrement(&mut self) { self.value = Some(self.value().wrapping_prev()); }

    #[inline]
    pub fn segment_states(&self) -> SegmentState { SegmentState::from(self.value) }

    #[inline]
    pub fn segment_state(
        &self,
        segment: SegmentId,
    ) -> bool {
        self.segment_states().is_lit(segment)
    }

    // =========================================================================
    // Decimal Point
    // =========================================================================

    #[inline]
    pub const fn anchor(&self) -> DotAnchor { self.anchor }

    #[inline]
    pub const fn is_dot_mode(&self) -> bool { self.anchor.is_dot_mode() }

    #[inline]
    pub const fn power_scale(&self) -> i32 { self.anchor.power_scale() }

    /// Reset the power scale (leaves dot mode).
    pub fn set_power_scale(
        &mut self,
        power_scale: i32,
    ) {
        self.anchor.set_power_scale(power_scale);
    }

    pub fn move_dot_left(&mut self) { self.anchor.move_dot_left(); }

    pub fn move_dot_right(&mut self) { self.anchor.move_dot_right(); }

    /// `value * 10^power_scale`, or `None` while showing the dot.
    pub fn effective_value(&self) -> Option<f32> { self.anchor.effective_value(self.value().get()) }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Circle drawn in dot mode: radius `width / 9`, horizontally centered,
    /// center `1.5 * radius` above the bottom pixel row.
    pub fn dot_circle(&self) -> Circle {
        let width = self.bounds.size.width as f32;
        let radius = width / DOT_RADIUS_DIVISOR;
        let center_x = self.bounds.top_left.x as f32 + width / 2.0;
        let bottom = (self.bounds.top_left.y + self.bounds.size.height as i32 - 1) as f32;
        let center_y = bottom - radius * DOT_BOTTOM_OFFSET;
        Circle::with_center(
            Point::new(center_x.round() as i32, center_y.round() as i32),
            (2.0 * radius).round() as u32,
        )
    }

    fn draw_segments<D>(
        &self,
        target: &mut D,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        // Zero-sized bounds have nothing to draw
        let Ok(geometry) = self.geometry() else {
            return Ok(());
        };
        let states = self.segment_states();

        for (segment, rect) in geometry.iter() {
            let rect = rect.to_rectangle();
            if rect.size.width == 0 || rect.size.height == 0 {
                continue;
            }
            rect.into_styled(self.style.segment_style(states.is_lit(segment)))
                .draw(target)?;
        }
        Ok(())
    }
}

impl Dimensions for SevenSegmentDigit {
    fn bounding_box(&self) -> Rectangle { self.bounds }
}

impl Drawable for SevenSegmentDigit {
    type Color = Rgb565;
    type Output = ();

    fn draw<D>(
        &self,
        target: &mut D,
    ) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        let radius = self.style.shape.corner_radius;
        RoundedRectangle::with_equal_corners(self.bounds, Size::new(radius, radius))
            .into_styled(self.style.background_style())
            .draw(target)?;

        if self.anchor.is_dot_mode() {
            self.dot_circle().into_styled(self.style.dot_style()).draw(target)?;
            return Ok(());
        }

        self.draw_segments(target)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::mock_display::MockDisplay;

    use super::*;
    use crate::colors::{BLACK, FACE_GRAY, GHOST_GRAY, OUTLINE_GRAY};
    use crate::layout::ShapeParameters;

    fn render(digit: &SevenSegmentDigit) -> MockDisplay<Rgb565> {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        digit.draw(&mut display).unwrap();
        display
    }

    #[test]
    fn test_new_digit_defaults() {
        let digit = SevenSegmentDigit::new(Point::zero());
        assert_eq!(digit.bounding_box().size, Size::new(16, 32));
        assert_eq!(digit.raw_value(), None);
        assert_eq!(digit.value().get(), 0);
        assert_eq!(digit.power_scale(), 4);
        assert!(!digit.is_dot_mode());
    }

    #[test]
    fn test_unset_digit_shows_zero() {
        let digit = SevenSegmentDigit::new(Point::zero());
        assert!(digit.segment_state(SegmentId::A));
        assert!(!digit.segment_state(SegmentId::G));
    }

    #[test]
    fn test_set_value_stores_magnitude() {
        let mut digit = SevenSegmentDigit::new(Point::zero());
        digit.set_value(-4).unwrap();
        assert_eq!(digit.value().get(), 4);
        assert!(digit.segment_state(SegmentId::F));
    }

    #[test]
    fn test_set_value_rejects_out_of_range() {
        let mut digit = SevenSegmentDigit::new(Point::zero());
        digit.set_value(3).unwrap();
        assert_eq!(digit.set_value(10), Err(DisplayError::OutOfRange(10)));
        assert_eq!(digit.value().get(), 3);
    }

    #[test]
    fn test_increment_decrement_roll_over() {
        let mut digit = SevenSegmentDigit::new(Point::zero());
        digit.decrement();
        assert_eq!(digit.value().get(), 9);
        digit.increment();
        assert_eq!(digit.value().get(), 0);
        digit.increment();
        assert_eq!(digit.value().get(), 1);
    }

    #[test]
    fn test_clear_value() {
        let mut digit = SevenSegmentDigit::new(Point::zero());
        digit.set_value(8).unwrap();
        digit.clear_value();
        assert_eq!(digit.raw_value(), None);
    }

    #[test]
    fn test_effective_value() {
        let mut digit = SevenSegmentDigit::new(Point::zero()).with_power_scale(2);
        digit.set_value(7).unwrap();
        assert_eq!(digit.effective_value(), Some(700.0));
        digit.set_power_scale(0);
        digit.move_dot_left();
        assert_eq!(digit.effective_value(), None);
    }

    #[test]
    fn test_geometry_cached_until_resize() {
        let mut digit = SevenSegmentDigit::new(Point::zero());
        let small = digit.geometry().unwrap();
        assert_eq!(digit.geometry().unwrap(), small);

        digit.set_bounds(Rectangle::new(Point::zero(), Size::new(32, 64)));
        let large = digit.geometry().unwrap();
        assert_ne!(large, small);
        assert!(large.get(SegmentId::A).width > small.get(SegmentId::A).width);
    }

    #[test]
    fn test_geometry_follows_style_change() {
        let mut digit = SevenSegmentDigit::new(Point::zero());
        let thin = digit.geometry().unwrap();
        digit.set_style(DigitStyle::new().with_shape(ShapeParameters::new().with_aspect(0.5)));
        let thick = digit.geometry().unwrap();
        assert!(thick.get(SegmentId::A).height > thin.get(SegmentId::A).height);
    }

    #[test]
    fn test_zero_sized_digit_geometry_is_invalid() {
        let digit = SevenSegmentDigit::new(Point::zero()).with_size(Size::new(16, 0));
        assert_eq!(
            digit.geometry(),
            Err(DisplayError::InvalidArea { width: 16, height: 0 })
        );
    }

    #[test]
    fn test_draw_lit_and_unlit_segments() {
        let mut digit = SevenSegmentDigit::new(Point::zero());
        digit.set_value(1).unwrap();
        let display = render(&digit);

        // Segment B spans x 13..15, y 6..14
        assert_eq!(display.get_pixel(Point::new(13, 10)), Some(BLACK));
        // Segment A is 2px thick: outline only
        assert_eq!(display.get_pixel(Point::new(6, 3)), Some(OUTLINE_GRAY));
        // Face between the top edge and segment A
        assert_eq!(display.get_pixel(Point::new(8, 1)), Some(FACE_GRAY));
    }

    #[test]
    fn test_draw_unlit_fill_inside_outline() {
        let mut digit = SevenSegmentDigit::new(Point::zero()).with_size(Size::new(32, 64));
        digit.set_value(1).unwrap();
        let display = render(&digit);

        // Segment A snaps to x 7..25, y 4..9
        assert_eq!(display.get_pixel(Point::new(15, 4)), Some(OUTLINE_GRAY));
        assert_eq!(display.get_pixel(Point::new(15, 6)), Some(GHOST_GRAY));
    }

    #[test]
    fn test_draw_dot_mode() {
        let mut digit = SevenSegmentDigit::new(Point::zero()).with_dot(true);
        digit.set_value(8).unwrap();
        let display = render(&digit);

        assert_eq!(display.get_pixel(Point::new(8, 28)), Some(BLACK));
        // No segments in dot mode
        assert_eq!(display.get_pixel(Point::new(13, 10)), Some(FACE_GRAY));
    }

    #[test]
    fn test_dot_circle_geometry() {
        let digit = SevenSegmentDigit::new(Point::new(10, 0));
        let circle = digit.dot_circle();
        assert_eq!(circle.diameter, 4);
        assert_eq!(circle.center(), Point::new(18, 28));
    }

    #[test]
    fn test_draw_respects_position() {
        let mut digit = SevenSegmentDigit::new(Point::new(20, 10));
        digit.set_value(1).unwrap();
        let display = render(&digit);
        assert_eq!(display.get_pixel(Point::new(33, 20)), Some(BLACK));
        assert_eq!(display.get_pixel(Point::new(13, 10)), None);
    }

    #[test]
    fn test_draw_degenerate_digit_only_paints_face() {
        let mut digit = SevenSegmentDigit::new(Point::zero()).with_size(Size::new(3, 32));
        digit.set_value(8).unwrap();
        let display = render(&digit);
        assert_eq!(display.get_pixel(Point::new(1, 16)), Some(FACE_GRAY));
    }
}
