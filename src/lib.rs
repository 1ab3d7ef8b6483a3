// src/lib.rs

//! Console (virtual terminal) font transfer negotiation.
//!
//! The Linux kernel grew three mutually-incompatible interfaces for moving
//! console font data in and out: the modern `KDFONTOP` transfer op, the
//! extended `GIO_FONTX`/`PIO_FONTX` pair, and the original fixed-size
//! `GIO_FONT`/`PIO_FONT` pair. Which of them a running kernel actually
//! implements depends on its version and configuration, and the three
//! disagree about size limits, width support, and whether a font height is
//! even a thing.
//!
//! This crate hides that mess behind one uniform surface:
//! [`get_font`](font::get_font), [`get_font_size`](font::get_font_size),
//! [`put_font`](font::put_font), and [`restore_font`](font::restore_font).
//! Each operation walks the mechanisms from most capable to most legacy,
//! stepping silently past the ones the kernel lacks and stopping hard on
//! anything that looks like a real error, so a genuine problem is never
//! misread as a compatibility gap.
//!
//! The caller owns the console descriptor (passed in already open, wrapped
//! in a [`VtConsole`]) and supplies a [`Context`] that collects diagnostics;
//! the crate never terminates the process, so cleanup on the caller's side
//! always gets a chance to run.

pub mod console;
pub mod context;
pub mod font;

pub use console::{FontConsole, FontOpParams, VtConsole};
pub use context::{Context, UnsupportedCodes};
pub use font::{
    charheight, get_font, get_font_size, put_font, restore_font, FontInfo, GetFont,
    DEFAULT_GLYPH_COUNT, GLYPH_SLOT_ROWS,
};
