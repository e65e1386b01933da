//! Crate-internal logging macros.
//!
//! With the `defmt` feature enabled, messages are forwarded to the matching
//! `defmt` level. Without it the macros only borrow their arguments, so host
//! builds and tests need no defmt global logger.
//!
//! # Usage
//!
//! ```ignore
//! log_trace!("dot left: scale {}", scale);
//! log_debug!("layout recomputed for {}x{}", width, height);
//! ```

/// Log a message at Trace level.
macro_rules! log_trace {
    ($s:literal $(, $x:expr)* $(,)?) => {{
        #[cfg(feature = "defmt")]
        ::defmt::trace!($s $(, $x)*);
        #[cfg(not(feature = "defmt"))]
        let _ = ($( & $x ),*);
    }};
}

/// Log a message at Debug level.
macro_rules! log_debug {
    ($s:literal $(, $x:expr)* $(,)?) => {{
        #[cfg(feature = "defmt")]
        ::defmt::debug!($s $(, $x)*);
        #[cfg(not(feature = "defmt"))]
        let _ = ($( & $x ),*);
    }};
}
