//! Digit value to segment state decoding.
//!
//! ```text
//!      AAAA
//!     F    B
//!     F    B
//!      GGGG
//!     E    C
//!     E    C
//!      DDDD
//! ```
//!
//! Decoding is a constant table lookup: one 7-bit mask per digit, one bit per
//! [`SegmentId`]. Nothing is cached; the state is recomputed from the value on
//! every query.

use core::str::FromStr;

use crate::error::DisplayError;

// =============================================================================
// Segment Identifiers
// =============================================================================

/// One of the seven bar positions of a seven-segment glyph.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum SegmentId {
    /// Top bar.
    A = 0,
    /// Top-right bar.
    B = 1,
    /// Bottom-right bar.
    C = 2,
    /// Bottom bar.
    D = 3,
    /// Bottom-left bar.
    E = 4,
    /// Top-left bar.
    F = 5,
    /// Middle bar.
    G = 6,
}

impl SegmentId {
    /// All segments in `A..=G` order.
    pub const ALL: [Self; 7] = [Self::A, Self::B, Self::C, Self::D, Self::E, Self::F, Self::G];

    /// Bit of this segment inside a [`SegmentState`] mask.
    #[inline]
    pub const fn mask(self) -> u8 { 1 << self as u8 }

    /// Index of this segment in [`SegmentId::ALL`].
    #[inline]
    pub const fn index(self) -> usize { self as usize }

    /// Whether the segment is drawn as a horizontal bar (A, D, G).
    #[inline]
    pub const fn is_horizontal(self) -> bool { matches!(self, Self::A | Self::D | Self::G) }

    /// Upper-case letter of this segment.
    pub const fn letter(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
            Self::F => 'F',
            Self::G => 'G',
        }
    }
}

impl TryFrom<char> for SegmentId {
    type Error = DisplayError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'A' => Ok(Self::A),
            'B' => Ok(Self::B),
            'C' => Ok(Self::C),
            'D' => Ok(Self::D),
            'E' => Ok(Self::E),
            'F' => Ok(Self::F),
            'G' => Ok(Self::G),
            _ => {
                let mut buf = [0u8; 4];
                Err(DisplayError::invalid_segment(c.encode_utf8(&mut buf)))
            }
        }
    }
}

impl FromStr for SegmentId {
    type Err = DisplayError;

    /// Parse a single-letter segment token, case-insensitive.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c).map_err(|_| DisplayError::invalid_segment(token)),
            _ => Err(DisplayError::invalid_segment(token)),
        }
    }
}

// =============================================================================
// Digit Values
// =============================================================================

/// A single decimal digit, `0..=9`.
///
/// Sign is not represented: construction takes the absolute value.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitValue(u8);

impl DigitValue {
    /// Largest representable digit.
    pub const MAX: u8 = 9;

    /// Build a digit from a signed integer, rejecting magnitudes above 9.
    pub fn new(value: i32) -> Result<Self, DisplayError> {
        let magnitude = value.unsigned_abs();
        if magnitude > Self::MAX as u32 {
            return Err(DisplayError::OutOfRange(value));
        }
        Ok(Self(magnitude as u8))
    }

    /// Numeric value of the digit.
    #[inline]
    pub const fn get(self) -> u8 { self.0 }

    /// Next digit, rolling over from 9 to 0.
    #[inline]
    pub const fn wrapping_next(self) -> Self { Self((self.0 + 1) % 10) }

    /// Previous digit, rolling over from 0 to 9.
    #[inline]
    pub const fn wrapping_prev(self) -> Self { Self((self.0 + 9) % 10) }
}

impl TryFrom<i32> for DigitValue {
    type Error = DisplayError;

    fn try_from(value: i32) -> Result<Self, Self::Error> { Self::new(value) }
}

impl From<DigitValue> for u8 {
    fn from(value: DigitValue) -> Self { value.0 }
}

// =============================================================================
// Segment State
// =============================================================================

/// Lit segments per digit, bit `n` = `SegmentId` with discriminant `n`.
const DIGIT_PATTERNS: [u8; 10] = [
    0b011_1111, // 0: A B C D E F
    0b000_0110, // 1: B C
    0b101_1011, // 2: A B D E G
    0b100_1111, // 3: A B C D G
    0b110_0110, // 4: B C F G
    0b110_1101, // 5: A C D F G
    0b111_1101, // 6: A C D E F G
    0b000_0111, // 7: A B C
    0b111_1111, // 8: all
    0b110_1111, // 9: A B C D F G
];

/// Lit/unlit state of all seven segments for one digit.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SegmentState(u8);

impl SegmentState {
    /// Decode the segment pattern of a digit.
    #[inline]
    pub const fn for_digit(value: DigitValue) -> Self { Self(DIGIT_PATTERNS[value.0 as usize]) }

    /// Whether `segment` is lit.
    #[inline]
    pub const fn is_lit(
        self,
        segment: SegmentId,
    ) -> bool {
        self.0 & segment.mask() != 0
    }

    /// Raw 7-bit mask (bit 0 = A ... bit 6 = G).
    #[inline]
    pub const fn bits(self) -> u8 { self.0 }

    /// Number of lit segments.
    #[inline]
    pub const fn lit_count(self) -> u32 { self.0.count_ones() }

    /// Iterate `(segment, lit)` pairs in `A..=G` order.
    pub fn iter(self) -> impl Iterator<Item = (SegmentId, bool)> {
        SegmentId::ALL.into_iter().map(move |segment| (segment, self.is_lit(segment)))
    }
}

impl From<Option<DigitValue>> for SegmentState {
    /// An absent value decodes as 0.
    fn from(value: Option<DigitValue>) -> Self { Self::for_digit(value.unwrap_or_default()) }
}

// =============================================================================
// Decoder Functions
// =============================================================================

/// Whether `segment` is lit when displaying `value`.
#[inline]
pub const fn segment_state(
    value: DigitValue,
    segment: SegmentId,
) -> bool {
    SegmentState::for_digit(value).is_lit(segment)
}

/// Decode all seven segments of `value`.
#[inline]
pub const fn all_segment_states(value: DigitValue) -> SegmentState { SegmentState::for_digit(value) }

/// Checked decoder over raw inputs.
///
/// Rejects `|value| > 9` with [`DisplayError::OutOfRange`] and any token other
/// than a single letter `A..=G` (either case) with [`DisplayError::InvalidSegment`].
pub fn segment_state_for(
    value: i32,
    segment: &str,
) -> Result<bool, DisplayError> {
    let value = DigitValue::new(value)?;
    let segment: SegmentId = segment.parse()?;
    Ok(segment_state(value, segment))
}

// =============================================================================
// Unit Tests
// =============================================================================
