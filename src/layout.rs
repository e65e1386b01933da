//! Segment geometry for a seven-segment glyph.
//!
//! Segments are two shapes: horizontal bars (A, D, G) of `w x h` and vertical
//! bars (B, C, E, F) of `h x w`, where `w` is the long side and
//! `h = aspect * w`. With inset width `W` and spacing `s` the glyph fills the
//! width exactly:
//!
//! ```text
//! W = s + h + s + w + s + h + s   =>   w = (W - 4s) / (1 + 2 * aspect)
//! ```
//!
//! Rows are stacked top to bottom and the whole glyph block is centered
//! vertically in the inset area, so proportions stay constant when the widget
//! is resized. Coordinates stay in `f32` until [`SegmentRect::to_rectangle`]
//! snaps them to the pixel grid for drawing.
//!
//! # Caching
//!
//! [`layout`] is pure. [`LayoutCache`] memoizes the last result keyed on the
//! drawing area and parameters; any change to either is a miss.

use core::cell::Cell;

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;
#[cfg(not(test))]
use micromath::F32Ext;

use crate::config::{DEFAULT_CORNER_RADIUS, DEFAULT_SEGMENT_ASPECT, DEFAULT_SEGMENT_SPACING};
use crate::error::DisplayError;
use crate::segment::SegmentId;

// =============================================================================
// Shape Parameters
// =============================================================================

/// Inset on each side of the drawing area, in pixels.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Margins {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Margins {
    /// Same inset on all four sides.
    pub const fn uniform(margin: u32) -> Self {
        Self {
            top: margin,
            right: margin,
            bottom: margin,
            left: margin,
        }
    }

    /// Total horizontal inset.
    #[inline]
    pub const fn horizontal(&self) -> u32 { self.left + self.right }

    /// Total vertical inset.
    #[inline]
    pub const fn vertical(&self) -> u32 { self.top + self.bottom }
}

/// Read-only shape configuration of a digit.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ShapeParameters {
    /// Ratio of segment thickness to segment length.
    pub segment_aspect: f32,
    /// Gap between segments in pixels.
    pub segment_spacing: f32,
    /// Corner radius of the digit background in pixels.
    pub corner_radius: u32,
    /// Inset of the glyph inside the drawing area.
    pub margins: Margins,
}

impl ShapeParameters {
    /// Default shape: quarter-thickness bars, 1px gaps, no margins.
    pub const fn new() -> Self {
        Self {
            segment_aspect: DEFAULT_SEGMENT_ASPECT,
            segment_spacing: DEFAULT_SEGMENT_SPACING,
            corner_radius: DEFAULT_CORNER_RADIUS,
            margins: Margins::uniform(0),
        }
    }

    pub const fn with_aspect(
        mut self,
        segment_aspect: f32,
    ) -> Self {
        self.segment_aspect = segment_aspect;
        self
    }

    pub const fn with_spacing(
        mut self,
        segment_spacing: f32,
    ) -> Self {
        self.segment_spacing = segment_spacing;
        self
    }

    pub const fn with_corner_radius(
        mut self,
        corner_radius: u32,
    ) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    pub const fn with_margins(
        mut self,
        margins: Margins,
    ) -> Self {
        self.margins = margins;
        self
    }
}

impl Default for ShapeParameters {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Segment Rectangles
// =============================================================================

/// Axis-aligned rectangle in drawing-area coordinates.
#[derive(Clone, Copy, PartialEq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SegmentRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl SegmentRect {
    pub const fn new(
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> Self {
        Self { x, y, width, height }
    }

    /// Right edge (exclusive).
    #[inline]
    pub fn right(&self) -> f32 { self.x + self.width }

    /// Bottom edge (exclusive).
    #[inline]
    pub fn bottom(&self) -> f32 { self.y + self.height }

    /// Whether the rectangle covers no area.
    #[inline]
    pub fn is_empty(&self) -> bool { self.width <= 0.0 || self.height <= 0.0 }

    /// Area shared with `other`. Touching edges share zero area.
    pub fn overlap_area(
        &self,
        other: &Self,
    ) -> f32 {
        let w = self.right().min(other.right()) - self.x.max(other.x);
        let h = self.bottom().min(other.bottom()) - self.y.max(other.y);
        if w > 0.0 && h > 0.0 { w * h } else { 0.0 }
    }

    /// Snap to the pixel grid.
    ///
    /// Edges are rounded independently so neighbouring rectangles keep
    /// their gaps after snapping.
    pub fn to_rectangle(&self) -> Rectangle {
        let left = self.x.round() as i32;
        let top = self.y.round() as i32;
        let right = self.right().round() as i32;
        let bottom = self.bottom().round() as i32;
        Rectangle::new(
            Point::new(left, top),
            Size::new((right - left).max(0) as u32, (bottom - top).max(0) as u32),
        )
    }
}

/// One rectangle per segment.
#[derive(Clone, Copy, PartialEq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SegmentGeometry {
    rects: [SegmentRect; 7],
}

impl SegmentGeometry {
    /// Rectangle of `segment`.
    #[inline]
    pub fn get(
        &self,
        segment: SegmentId,
    ) -> SegmentRect {
        self.rects[segment.index()]
    }

    /// Iterate `(segment, rect)` pairs in `A..=G` order.
    pub fn iter(&self) -> impl Iterator<Item = (SegmentId, SegmentRect)> + '_ {
        SegmentId::ALL.into_iter().map(|segment| (segment, self.get(segment)))
    }

    /// True when the area was too small to fit any segment.
    pub fn is_degenerate(&self) -> bool { self.rects.iter().all(SegmentRect::is_empty) }
}

// =============================================================================
// Layout Engine
// =============================================================================

/// Compute the seven segment rectangles for `area`.
///
/// Returns [`DisplayError::InvalidArea`] for a zero width or height. An area
/// too small for the spacing is not an error: every rectangle comes back
/// zero-sized at the inset origin. Negative or non-finite spacing and a
/// negative aspect are treated the same way.
pub fn layout(
    area: Rectangle,
    params: &ShapeParameters,
) -> Result<SegmentGeometry, DisplayError> {
    if area.size.width == 0 || area.size.height == 0 {
        return Err(DisplayError::InvalidArea {
            width: area.size.width,
            height: area.size.height,
        });
    }

    let margins = params.margins;
    let inner_w = area.size.width as f32 - margins.horizontal() as f32;
    let inner_h = area.size.height as f32 - margins.vertical() as f32;
    let left = area.top_left.x as f32 + margins.left as f32;
    let top = area.top_left.y as f32 + margins.top as f32;

    let s = params.segment_spacing;
    let aspect = params.segment_aspect;
    let w = (inner_w - 4.0 * s) / (1.0 + 2.0 * aspect);
    let h = aspect * w;

    if !(w > 0.0 && w.is_finite()) || h < 0.0 || !(s >= 0.0 && s.is_finite()) {
        log_debug!("degenerate segment layout: inner width {}, spacing {}", inner_w, s);
        return Ok(SegmentGeometry {
            rects: [SegmentRect::new(left, top, 0.0, 0.0); 7],
        });
    }

    // Row tops, relative to the glyph block
    let a_top = s;
    let bf_top = 2.0 * s + h;
    let ce_top = bf_top + w + 2.0 * s + h;
    let d_top = ce_top + w + s;
    let g_top = (a_top + d_top) / 2.0;
    let glyph_bottom = d_top + h + s;

    // Column lefts
    let fe_left = s;
    let adg_left = 2.0 * s + h;
    let bc_left = adg_left + w + s;

    let dv = (inner_h - glyph_bottom) / 2.0;
    let x0 = left;
    let y0 = top + dv;

    let horizontal = |x: f32, y: f32| SegmentRect::new(x0 + x, y0 + y, w, h);
    let vertical = |x: f32, y: f32| SegmentRect::new(x0 + x, y0 + y, h, w);

    Ok(SegmentGeometry {
        rects: [
            horizontal(adg_left, a_top), // A
            vertical(bc_left, bf_top),   // B
            vertical(bc_left, ce_top),   // C
            horizontal(adg_left, d_top), // D
            vertical(fe_left, ce_top),   // E
            vertical(fe_left, bf_top),   // F
            horizontal(adg_left, g_top), // G
        ],
    })
}

// =============================================================================
// Layout Cache
// =============================================================================

#[derive(Clone, Copy, Debug)]
struct CacheEntry {
    area: Rectangle,
    params: ShapeParameters,
    geometry: SegmentGeometry,
}

/// Memoizes the last [`layout`] result.
///
/// Uses a [`Cell`] so widgets can refresh it from `Drawable::draw(&self)`.
#[derive(Default, Debug)]
pub struct LayoutCache {
    entry: Cell<Option<CacheEntry>>,
}

impl LayoutCache {
    pub const fn new() -> Self { Self { entry: Cell::new(None) } }

    /// Cached geometry for `(area, params)`, computing it on a miss.
    ///
    /// Errors are not cached.
    pub fn get_or_layout(
        &self,
        area: Rectangle,
        params: &ShapeParameters,
    ) -> Result<SegmentGeometry, DisplayError> {
        if let Some(entry) = self.entry.get()
            && entry.area == area
            && entry.params == *params
        {
            return Ok(entry.geometry);
        }

        log_trace!("segment layout recomputed for {}x{}", area.size.width, area.size.height);
        let geometry = layout(area, params)?;
        self.entry.set(Some(CacheEntry {
            area,
            params: *params,
            geometry,
        }));
        Ok(geometry)
    }

    /// Whether a result for `(area, params)` is stored.
    pub fn is_cached(
        &self,
        area: Rectangle,
        params: &ShapeParameters,
    ) -> bool {
        self.entry.get().is_some_and(|entry| entry.area == area && entry.params == *params)
    }

    /// Drop the stored result (call on resize notifications).
    pub fn invalidate(&self) { self.entry.set(None); }
}

impl Clone for LayoutCache {
    fn clone(&self) -> Self { Self { entry: Cell::new(self.entry.get()) } }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    fn area(
        width: u32,
        height: u32,
    ) -> Rectangle {
        Rectangle::new(Point::zero(), Size::new(width, height))
    }

    fn assert_rect_eq(
        actual: SegmentRect,
        expected: SegmentRect,
    ) {
        assert!(
            (actual.x - expected.x).abs() < EPSILON
                && (actual.y - expected.y).abs() < EPSILON
                && (actual.width - expected.width).abs() < EPSILON
                && (actual.height - expected.height).abs() < EPSILON,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn test_default_digit_layout() {
        // 16x32, aspect 0.25, spacing 1: w = 8, h = 2, block height 28, dv = 2
        let geometry = layout(area(16, 32), &ShapeParameters::new()).unwrap();
        assert_rect_eq(geometry.get(SegmentId::A), SegmentRect::new(4.0, 3.0, 8.0, 2.0));
        assert_rect_eq(geometry.get(SegmentId::B), SegmentRect::new(13.0, 6.0, 2.0, 8.0));
        assert_rect_eq(geometry.get(SegmentId::C), SegmentRect::new(13.0, 18.0, 2.0, 8.0));
        assert_rect_eq(geometry.get(SegmentId::D), SegmentRect::new(4.0, 27.0, 8.0, 2.0));
        assert_rect_eq(geometry.get(SegmentId::E), SegmentRect::new(1.0, 18.0, 2.0, 8.0));
        assert_rect_eq(geometry.get(SegmentId::F), SegmentRect::new(1.0, 6.0, 2.0, 8.0));
        assert_rect_eq(geometry.get(SegmentId::G), SegmentRect::new(4.0, 15.0, 8.0, 2.0));
    }

    #[test]
    fn test_layout_is_idempotent() {
        let params = ShapeParameters::new().with_aspect(0.3).with_spacing(1.5);
        let first = layout(area(37, 71), &params).unwrap();
        let second = layout(area(37, 71), &params).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_height_is_invalid() {
        assert_eq!(
            layout(area(16, 0), &ShapeParameters::new()),
            Err(DisplayError::InvalidArea { width: 16, height: 0 })
        );
        assert_eq!(
            layout(area(0, 32), &ShapeParameters::new()),
            Err(DisplayError::InvalidArea { width: 0, height: 32 })
        );
    }

    #[test]
    fn test_rects_non_negative_and_disjoint() {
        let params_list = [
            ShapeParameters::new(),
            ShapeParameters::new().with_aspect(0.1).with_spacing(0.0),
            ShapeParameters::new().with_aspect(0.5).with_spacing(3.0),
            ShapeParameters::new().with_margins(Margins::uniform(2)),
        ];
        for params in &params_list {
            for (w, h) in [(16, 32), (10, 10), (40, 30), (64, 128), (7, 50), (5, 5)] {
                let geometry = layout(area(w, h), params).unwrap();
                let rects: Vec<SegmentRect> = geometry.iter().map(|(_, r)| r).collect();
                for (i, a) in rects.iter().enumerate() {
                    assert!(a.width >= 0.0 && a.height >= 0.0, "{a:?} in {w}x{h}");
                    for b in &rects[i + 1..] {
                        assert!(a.overlap_area(b) < EPSILON, "{a:?} overlaps {b:?} in {w}x{h}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_negative_spacing_is_degenerate() {
        for spacing in [-2.0, -0.5, f32::NAN, f32::INFINITY] {
            let params = ShapeParameters::new().with_spacing(spacing);
            let geometry = layout(area(16, 32), &params).unwrap();
            assert!(geometry.is_degenerate(), "spacing {spacing}");
            let rects: Vec<SegmentRect> = geometry.iter().map(|(_, r)| r).collect();
            for (i, a) in rects.iter().enumerate() {
                for b in &rects[i + 1..] {
                    assert!(a.overlap_area(b) < EPSILON, "{a:?} overlaps {b:?} at spacing {spacing}");
                }
            }
        }
    }

    #[test]
    fn test_glyph_fills_inner_width() {
        let geometry = layout(area(40, 80), &ShapeParameters::new()).unwrap();
        let f = geometry.get(SegmentId::F);
        let b = geometry.get(SegmentId::B);
        assert!((f.x - 1.0).abs() < EPSILON);
        assert!((b.right() - 39.0).abs() < EPSILON);
    }

    #[test]
    fn test_glyph_centered_vertically() {
        let geometry = layout(area(16, 60), &ShapeParameters::new()).unwrap();
        let above = geometry.get(SegmentId::A).y - 1.0;
        let below = 60.0 - (geometry.get(SegmentId::D).bottom() + 1.0);
        assert!((above - below).abs() < EPSILON);
    }

    #[test]
    fn test_middle_bar_between_vertical_bars() {
        let geometry = layout(area(24, 48), &ShapeParameters::new()).unwrap();
        let g = geometry.get(SegmentId::G);
        assert!(g.y >= geometry.get(SegmentId::B).bottom());
        assert!(g.bottom() <= geometry.get(SegmentId::C).y);
        let mid_ad = (geometry.get(SegmentId::A).y + geometry.get(SegmentId::D).y) / 2.0;
        assert!((g.y - mid_ad).abs() < EPSILON);
    }

    #[test]
    fn test_proportional_scaling() {
        let params = ShapeParameters::new().with_spacing(0.0);
        let base = layout(area(20, 40), &params).unwrap();
        for k in [2u32, 3, 5] {
            let scaled = layout(area(20 * k, 40 * k), &params).unwrap();
            let k = k as f32;
            for ((_, a), (_, b)) in base.iter().zip(scaled.iter()) {
                assert_rect_eq(b, SegmentRect::new(a.x * k, a.y * k, a.width * k, a.height * k));
            }
        }
    }

    #[test]
    fn test_scaling_with_spacing_is_approximate() {
        let params = ShapeParameters::new();
        let base = layout(area(100, 200), &params).unwrap();
        let scaled = layout(area(200, 400), &params).unwrap();
        for ((_, a), (_, b)) in base.iter().zip(scaled.iter()) {
            assert!((b.width - a.width * 2.0).abs() <= 4.0);
            assert!((b.y - a.y * 2.0).abs() <= 4.0);
        }
    }

    #[test]
    fn test_margins_offset_glyph() {
        let plain = layout(area(16, 32), &ShapeParameters::new()).unwrap();
        let params = ShapeParameters::new().with_margins(Margins {
            top: 3,
            right: 2,
            bottom: 1,
            left: 2,
        });
        let inset = layout(area(20, 36), &params).unwrap();
        for ((_, a), (_, b)) in plain.iter().zip(inset.iter()) {
            assert_rect_eq(b, SegmentRect::new(a.x + 2.0, a.y + 3.0, a.width, a.height));
        }
    }

    #[test]
    fn test_area_origin_is_applied() {
        let plain = layout(area(16, 32), &ShapeParameters::new()).unwrap();
        let moved = layout(Rectangle::new(Point::new(10, 20), Size::new(16, 32)), &ShapeParameters::new()).unwrap();
        for ((_, a), (_, b)) in plain.iter().zip(moved.iter()) {
            assert_rect_eq(b, SegmentRect::new(a.x + 10.0, a.y + 20.0, a.width, a.height));
        }
    }

    #[test]
    fn test_too_small_area_is_degenerate() {
        let geometry = layout(area(3, 32), &ShapeParameters::new()).unwrap();
        assert!(geometry.is_degenerate());
        for (_, rect) in geometry.iter() {
            assert_eq!(rect.width, 0.0);
            assert_eq!(rect.height, 0.0);
        }
    }

    #[test]
    fn test_margins_larger_than_area_are_degenerate() {
        let params = ShapeParameters::new().with_margins(Margins::uniform(10));
        assert!(layout(area(16, 32), &params).unwrap().is_degenerate());
    }

    #[test]
    fn test_to_rectangle_snaps_edges() {
        let rect = SegmentRect::new(1.4, 2.6, 3.2, 1.0).to_rectangle();
        assert_eq!(rect, Rectangle::new(Point::new(1, 3), Size::new(4, 1)));
        assert_eq!(SegmentRect::default().to_rectangle().size, Size::zero());
    }

    #[test]
    fn test_cache_hit_and_miss() {
        let cache = LayoutCache::new();
        let params = ShapeParameters::new();
        assert!(!cache.is_cached(area(16, 32), &params));

        let first = cache.get_or_layout(area(16, 32), &params).unwrap();
        assert!(cache.is_cached(area(16, 32), &params));
        assert_eq!(cache.get_or_layout(area(16, 32), &params).unwrap(), first);

        let resized = cache.get_or_layout(area(32, 64), &params).unwrap();
        assert_ne!(resized, first);
        assert!(!cache.is_cached(area(16, 32), &params));
        assert!(!cache.is_cached(area(32, 64), &params.with_spacing(2.0)));
    }

    #[test]
    fn test_cache_invalidate() {
        let cache = LayoutCache::new();
        let params = ShapeParameters::new();
        cache.get_or_layout(area(16, 32), &params).unwrap();
        cache.invalidate();
        assert!(!cache.is_cached(area(16, 32), &params));
    }

    #[test]
    fn test_cache_does_not_store_errors() {
        let cache = LayoutCache::new();
        let params = ShapeParameters::new();
        cache.get_or_layout(area(16, 32), &params).unwrap();
        assert!(cache.get_or_layout(area(16, 0), &params).is_err());
        assert!(cache.is_cached(area(16, 32), &params));
    }
}
