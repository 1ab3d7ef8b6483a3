// src/font/get.rs

//! Reading the current console font: three kernel mechanisms, newest
//! first.

use super::{kernel_error, Attempt, FontInfo, DEFAULT_GLYPH_COUNT};
use crate::console::{FontConsole, FontOpParams};
use crate::context::Context;
use anyhow::{bail, Result};
use log::{debug, trace};

/// Outcome of [`get_font`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GetFont {
    /// Some mechanism answered; geometry (and the buffer, when one was
    /// given) is filled in.
    Loaded(FontInfo),
    /// No mechanism exists on this kernel. Nothing was filled in; fall
    /// back to defaults.
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mechanism {
    /// `KDFONTOP`, the only one that can report a width other than 8.
    Modern,
    /// `GIO_FONTX`: 16-bit glyph count, explicit height, width fixed at 8.
    ExtendedLegacy,
    /// `GIO_FONT`: exactly 256 glyphs, width 8, height undefined.
    OriginalLegacy,
}

const CHAIN: [Mechanism; 3] = [
    Mechanism::Modern,
    Mechanism::ExtendedLegacy,
    Mechanism::OriginalLegacy,
];

/// Reads the current console font through the first mechanism this kernel
/// supports.
///
/// `buf` may be `None` when only the geometry is wanted (the original
/// legacy mechanism cannot do that and will refuse). `count` is the
/// caller's capacity hint, handed to mechanisms that validate it; the
/// count actually loaded comes back in the [`FontInfo`].
///
/// Returns [`GetFont::Unavailable`] when every mechanism is missing. Hard
/// failures are reported through `ctx` and returned as errors; no further
/// mechanism is attempted after one.
pub fn get_font(
    ctx: &mut Context,
    con: &mut impl FontConsole,
    mut buf: Option<&mut [u8]>,
    count: u32,
) -> Result<GetFont> {
    for mechanism in CHAIN {
        let outcome = match mechanism {
            Mechanism::Modern => modern(ctx, con, buf.as_deref_mut(), count)?,
            Mechanism::ExtendedLegacy => extended_legacy(ctx, con, buf.as_deref_mut(), count)?,
            Mechanism::OriginalLegacy => original_legacy(ctx, con, buf.as_deref_mut(), count)?,
        };
        match outcome {
            Attempt::Done(info) => return Ok(GetFont::Loaded(info)),
            Attempt::Unsupported => {
                debug!("{:?} font read not supported by this kernel, falling back", mechanism);
            }
        }
    }
    Ok(GetFont::Unavailable)
}

/// Best-effort glyph count of the currently loaded font.
///
/// Never fails: when the kernel cannot be asked, or the read goes wrong in
/// any way, this answers the architectural default of 256. Anything worth
/// telling the user was already reported through `ctx` by the read itself.
pub fn get_font_size(ctx: &mut Context, con: &mut impl FontConsole) -> u32 {
    match get_font(ctx, con, None, 0) {
        Ok(GetFont::Loaded(info)) => info.count,
        Ok(GetFont::Unavailable) | Err(_) => DEFAULT_GLYPH_COUNT,
    }
}

fn modern(
    ctx: &mut Context,
    con: &mut impl FontConsole,
    buf: Option<&mut [u8]>,
    count: u32,
) -> Result<Attempt<FontInfo>> {
    // Ask for the largest cell the interface can describe; the kernel
    // shrinks the geometry to what is actually loaded.
    let mut params = FontOpParams {
        width: 32,
        height: 32,
        count,
    };
    match con.modern_get(&mut params, buf) {
        Ok(()) => {
            trace!(
                "KDFONTOP reported {} glyphs, {}x{}",
                params.count,
                params.width,
                params.height
            );
            Ok(Attempt::Done(FontInfo {
                count: params.count,
                width: params.width,
                height: Some(params.height),
            }))
        }
        Err(errno) if ctx.unsupported_codes().contains(errno) => Ok(Attempt::Unsupported),
        Err(errno) => Err(kernel_error(ctx, "ioctl(KDFONTOP)", errno)),
    }
}

fn extended_legacy(
    ctx: &mut Context,
    con: &mut impl FontConsole,
    buf: Option<&mut [u8]>,
    count: u32,
) -> Result<Attempt<FontInfo>> {
    // A capacity beyond the 16-bit charcount field is a caller defect, not
    // a compatibility gap.
    if count > u32::from(u16::MAX) {
        ctx.report(format_args!(
            "GIO_FONTX: the number of characters in the font cannot be more than {}",
            u16::MAX
        ));
        bail!("GIO_FONTX: requested {} glyphs, limit is {}", count, u16::MAX);
    }

    let mut loaded = count as u16;
    let mut charheight = 0u16;
    match con.fontx_get(&mut loaded, &mut charheight, buf) {
        Ok(()) => Ok(Attempt::Done(FontInfo {
            count: loaded.into(),
            width: 8, // this mechanism cannot describe any other width
            height: Some(charheight.into()),
        })),
        Err(errno) if ctx.unsupported_codes().contains(errno) => Ok(Attempt::Unsupported),
        Err(errno) => Err(kernel_error(ctx, "ioctl(GIO_FONTX)", errno)),
    }
}

fn original_legacy(
    ctx: &mut Context,
    con: &mut impl FontConsole,
    buf: Option<&mut [u8]>,
    count: u32,
) -> Result<Attempt<FontInfo>> {
    if count != DEFAULT_GLYPH_COUNT {
        ctx.report(format_args!(
            "GIO_FONT requires the requested glyph count to be exactly 256"
        ));
        bail!("GIO_FONT: requested {} glyphs (must be 256)", count);
    }

    let Some(data) = buf else {
        ctx.report(format_args!("GIO_FONT needs an output buffer"));
        bail!("GIO_FONT: no output buffer");
    };

    match con.raw_get(data) {
        Ok(()) => Ok(Attempt::Done(FontInfo {
            count: DEFAULT_GLYPH_COUNT,
            width: 8,
            height: None, // undefined here, at most 32
        })),
        Err(errno) if ctx.unsupported_codes().contains(errno) => Ok(Attempt::Unsupported),
        Err(errno) => Err(kernel_error(ctx, "ioctl(GIO_FONT)", errno)),
    }
}
