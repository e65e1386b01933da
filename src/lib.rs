//! Seven-segment digit widgets for `embedded-graphics` displays.
//!
//! This library contains the platform-agnostic digit logic shared between the
//! desktop simulator and embedded targets:
//!
//! - [`segment`]: Digit value to lit/unlit segment decoding
//! - [`layout`]: Segment rectangle geometry and its memoizing cache
//! - [`dot`]: Decimal point / power-of-ten state machine
//! - [`style`]: Shape parameters and colors replacing dynamic style lookup
//! - [`digit`]: The [`SevenSegmentDigit`] widget (renders via `DrawTarget`)
//! - [`readout`]: A row of digits sharing one movable decimal point
//! - [`config`] / [`colors`]: Compile-time defaults
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test --lib
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while embedded builds stay `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

#[macro_use]
mod log;

// Configuration
pub mod colors;
pub mod config;
pub mod style;

// Core logic
pub mod dot;
pub mod error;
pub mod layout;
pub mod segment;

// Widgets
pub mod digit;
pub mod readout;

// Re-export commonly used items
pub use digit::SevenSegmentDigit;
pub use dot::DotAnchor;
pub use error::DisplayError;
pub use layout::{LayoutCache, Margins, SegmentGeometry, SegmentRect, ShapeParameters, layout};
pub use readout::Readout;
pub use segment::{DigitValue, SegmentId, SegmentState, all_segment_states, segment_state, segment_state_for};
pub use style::DigitStyle;
