//! Seven-segment readout simulator for desktop platforms.
//!
//! Shows a six-digit readout in an `embedded-graphics-simulator` window.
//!
//! # Controls
//!
//! | Key | Action |
//! |-----|--------|
//! | Left / Right | Move the decimal point |
//! | Up / Down | Change the selected digit |
//! | Tab | Select the next digit |
//! | Escape | Quit |

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]

use std::fmt::Write;
use std::thread;
use std::time::{Duration, Instant};

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use heapless::String;
use profont::PROFONT_12_POINT;
use segment_display::colors::{BLACK, WHITE};
use segment_display::{DigitStyle, Readout};

// =============================================================================
// Layout
// =============================================================================

const SCREEN_WIDTH: u32 = 320;
const SCREEN_HEIGHT: u32 = 160;

/// Number of digits in the readout.
const DIGITS: usize = 6;

/// Readout area: six 40x80 digits.
const READOUT_BOUNDS: Rectangle = Rectangle::new(Point::new(40, 20), Size::new(240, 80));

/// Gap between the readout and the selection marker.
const MARKER_GAP: i32 = 4;

const LABEL_POS: Point = Point::new(40, 124);

const MARKER_COLOR: Rgb565 = Rgb565::YELLOW;

/// Target frame time (~50 FPS).
const FRAME_TIME: Duration = Duration::from_millis(20);

fn main() {
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Seven Segment Readout", &output_settings);

    display.clear(BLACK).ok();
    window.update(&display);

    let mut readout: Readout<DIGITS> = Readout::new(READOUT_BOUNDS, DigitStyle::new());
    readout.set_digits(&[0, 0, 1, 2, 3, 4]).ok();
    let mut selected = DIGITS - 1;

    loop {
        let frame_start = Instant::now();

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, .. } => match keycode {
                    Keycode::Escape => return,
                    Keycode::Left => {
                        readout.move_dot_left();
                    }
                    Keycode::Right => {
                        readout.move_dot_right();
                    }
                    Keycode::Up => {
                        readout.increment(selected);
                    }
                    Keycode::Down => {
                        readout.decrement(selected);
                    }
                    Keycode::Tab => selected = (selected + 1) % DIGITS,
                    _ => {}
                },
                _ => {}
            }
        }

        display.clear(BLACK).ok();
        readout.draw(&mut display).ok();
        draw_selection_marker(&mut display, &readout, selected);
        draw_value_label(&mut display, &readout);
        window.update(&display);

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_TIME {
            thread::sleep(FRAME_TIME - elapsed);
        }
    }
}

/// Underline the digit that Up/Down act on.
fn draw_selection_marker(
    display: &mut SimulatorDisplay<Rgb565>,
    readout: &Readout<DIGITS>,
    selected: usize,
) {
    let Some(digit) = readout.digit(selected) else {
        return;
    };
    let bounds = digit.bounding_box();
    let y = bounds.top_left.y + bounds.size.height as i32 + MARKER_GAP;
    let start = Point::new(bounds.top_left.x + 2, y);
    let end = Point::new(bounds.top_left.x + bounds.size.width as i32 - 3, y);
    Line::new(start, end)
        .into_styled(PrimitiveStyle::with_stroke(MARKER_COLOR, 2))
        .draw(display)
        .ok();
}

/// Print the readout text and its numeric value.
fn draw_value_label(
    display: &mut SimulatorDisplay<Rgb565>,
    readout: &Readout<DIGITS>,
) {
    let mut label: String<48> = String::new();
    write!(label, "{}  =  {}", readout.format(), readout.value()).ok();
    Text::with_baseline(&label, LABEL_POS, MonoTextStyle::new(&PROFONT_12_POINT, WHITE), Baseline::Top)
        .draw(display)
        .ok();
}
