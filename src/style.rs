//! Digit appearance.
//!
//! [`DigitStyle`] bundles the shape parameters with the four colors a digit is
//! painted with. It is a plain value passed to the widget, built with `const`
//! builder methods so whole themes can live in `const` items:
//!
//! ```ignore
//! const AMBER: DigitStyle = DigitStyle::new()
//!     .with_background(BLACK)
//!     .with_high_segment(Rgb565::new(31, 40, 0));
//! ```

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::primitives::{PrimitiveStyle, PrimitiveStyleBuilder, StrokeAlignment};

use crate::colors::{BLACK, FACE_GRAY, GHOST_GRAY, OUTLINE_GRAY};
use crate::config::OUTLINE_WIDTH;
use crate::layout::ShapeParameters;

/// Shape and colors of a seven-segment digit.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct DigitStyle {
    /// Segment proportions, corner radius and margins.
    pub shape: ShapeParameters,
    /// Fill of the digit face.
    pub background: Rgb565,
    /// Fill of lit segments and of the decimal point.
    pub high_segment: Rgb565,
    /// Fill of unlit segments.
    pub low_segment: Rgb565,
    /// Outline of unlit segments.
    pub segment_outline: Rgb565,
}

impl DigitStyle {
    /// Light LCD look: gray face, black segments, faint unlit segments.
    pub const fn new() -> Self {
        Self {
            shape: ShapeParameters::new(),
            background: FACE_GRAY,
            high_segment: BLACK,
            low_segment: GHOST_GRAY,
            segment_outline: OUTLINE_GRAY,
        }
    }

    pub const fn with_shape(
        mut self,
        shape: ShapeParameters,
    ) -> Self {
        self.shape = shape;
        self
    }

    pub const fn with_background(
        mut self,
        color: Rgb565,
    ) -> Self {
        self.background = color;
        self
    }

    pub const fn with_high_segment(
        mut self,
        color: Rgb565,
    ) -> Self {
        self.high_segment = color;
        self
    }

    pub const fn with_low_segment(
        mut self,
        color: Rgb565,
    ) -> Self {
        self.low_segment = color;
        self
    }

    pub const fn with_segment_outline(
        mut self,
        color: Rgb565,
    ) -> Self {
        self.segment_outline = color;
        self
    }

    /// Primitive style for a segment. Lit segments have no outline.
    pub fn segment_style(
        &self,
        lit: bool,
    ) -> PrimitiveStyle<Rgb565> {
        if lit {
            PrimitiveStyle::with_fill(self.high_segment)
        } else {
            PrimitiveStyleBuilder::new()
                .fill_color(self.low_segment)
                .stroke_color(self.segment_outline)
                .stroke_width(OUTLINE_WIDTH)
                .stroke_alignment(StrokeAlignment::Inside)
                .build()
        }
    }

    /// Primitive style for the digit face.
    #[inline]
    pub const fn background_style(&self) -> PrimitiveStyle<Rgb565> { PrimitiveStyle::with_fill(self.background) }

    /// Primitive style for the decimal point.
    #[inline]
    pub const fn dot_style(&self) -> PrimitiveStyle<Rgb565> { PrimitiveStyle::with_fill(self.high_segment) }
}

impl Default for DigitStyle {
    fn default() -> Self { Self::new() }
}
