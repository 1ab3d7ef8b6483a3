// src/font/mod.rs

//! Font transfer negotiation: one uniform get/put surface over three
//! generations of kernel interface.
//!
//! Both [`get_font`] and [`put_font`] walk an ordered mechanism chain,
//! newest first. A mechanism answering with one of the context's
//! unsupported errnos is skipped silently; any other failure terminates
//! the chain immediately, because falling through on a real error would
//! dress a genuine problem up as a compatibility gap.

mod get;
mod height;
mod put;


pub use get::{get_font, get_font_size, GetFont};
pub use height::charheight;
pub use put::put_font;

use crate::console::FontConsole;
use crate::context::Context;
use anyhow::Result;
use nix::errno::Errno;

/// Rows reserved per glyph slot in every font buffer, used or not.
pub const GLYPH_SLOT_ROWS: u32 = 32;

/// Glyph count assumed when the kernel cannot be asked, and the fixed
/// table size of the original legacy transfer.
pub const DEFAULT_GLYPH_COUNT: u32 = 256;

/// Geometry of a font as some mechanism reported it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontInfo {
    /// Number of glyphs in the font. Non-zero on every successful read.
    pub count: u32,
    /// Pixel width of one glyph. The legacy mechanisms can only describe
    /// 8-pixel-wide fonts, so they always report 8.
    pub width: u32,
    /// Pixel rows actually used, at most 32. `None` when the mechanism
    /// leaves the height undefined; assume up to 32.
    pub height: Option<u32>,
}

/// What one mechanism attempt produced. `Err` from the surrounding
/// `Result` is the third state: a hard failure that stops the chain.
pub(crate) enum Attempt<T> {
    /// The kernel accepted this mechanism.
    Done(T),
    /// The kernel lacks this mechanism; try the next one.
    Unsupported,
}

/// Records a kernel rejection through the context and turns it into the
/// hard error that terminates a chain.
pub(crate) fn kernel_error(ctx: &mut Context, what: &str, errno: Errno) -> anyhow::Error {
    ctx.report(format_args!("{}: {}", what, errno));
    anyhow::Error::new(errno).context(what.to_string())
}

/// Restores the kernel's built-in default console font.
pub fn restore_font(ctx: &mut Context, con: &mut impl FontConsole) -> Result<()> {
    if let Err(errno) = con.reset() {
        return Err(kernel_error(ctx, "ioctl(PIO_FONTRESET)", errno));
    }
    Ok(())
}
