// src/console/mod.rs

//! The kernel boundary for console font transfer.
//!
//! Everything the negotiation chain needs from the kernel is collected in
//! the [`FontConsole`] trait, one method per ioctl direction. The real
//! implementation ([`VtConsole`]) issues the ioctls against an already-open
//! console descriptor; [`MockConsole`] replays scripted answers and records
//! every call so the chain can be exercised without a virtual terminal.

pub mod kd;
pub mod mock;
pub mod vt;

#[cfg(test)]
mod tests;

pub use mock::MockConsole;
pub use vt::VtConsole;

use nix::errno::Errno;

/// Geometry triple exchanged with the modern font op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontOpParams {
    /// Glyph width in pixels.
    pub width: u32,
    /// Glyph height in pixels.
    pub height: u32,
    /// Number of glyphs in the table.
    pub count: u32,
}

/// Raw access to the kernel's console font interfaces.
///
/// Each method maps to exactly one ioctl and reports the kernel's answer
/// as a typed [`Errno`] so the caller can tell "interface not present"
/// apart from a real error. No method interprets, retries, or falls back;
/// that is the negotiation chain's job.
pub trait FontConsole {
    /// `KDFONTOP`/`KD_FONT_OP_GET`. `params` carries the requested cell
    /// size and capacity in, the kernel's geometry out. `data` may be
    /// `None` when only the geometry is wanted.
    fn modern_get(&mut self, params: &mut FontOpParams, data: Option<&mut [u8]>)
        -> Result<(), Errno>;

    /// `KDFONTOP`/`KD_FONT_OP_SET` with the exact geometry in `params`.
    fn modern_set(&mut self, params: &FontOpParams, data: &[u8]) -> Result<(), Errno>;

    /// `GIO_FONTX`. `count` carries the caller's capacity in and the
    /// kernel's glyph count out; `height` is filled by the kernel. Width
    /// is not negotiable: this interface only knows 8-pixel-wide fonts.
    fn fontx_get(
        &mut self,
        count: &mut u16,
        height: &mut u16,
        data: Option<&mut [u8]>,
    ) -> Result<(), Errno>;

    /// `PIO_FONTX` with the given glyph count and height.
    fn fontx_set(&mut self, count: u16, height: u16, data: &[u8]) -> Result<(), Errno>;

    /// `GIO_FONT`: reads the fixed 256-slot font table into `data`.
    fn raw_get(&mut self, data: &mut [u8]) -> Result<(), Errno>;

    /// `PIO_FONT`: loads exactly 256 glyph slots from `data`, no geometry.
    fn raw_set(&mut self, data: &[u8]) -> Result<(), Errno>;

    /// `PIO_FONTRESET`: restores the kernel's built-in default font.
    fn reset(&mut self) -> Result<(), Errno>;
}
