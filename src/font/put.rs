// src/font/put.rs

//! Installing a console font: the modern op with a padded retry for
//! kernels that only take 256- or 512-slot tables, then the legacy
//! positional ops.

use super::{charheight, kernel_error, Attempt, GLYPH_SLOT_ROWS};
use crate::console::{FontConsole, FontOpParams};
use crate::context::Context;
use anyhow::Result;
use log::{debug, trace};

/// Installs `buf` as the console font through the first mechanism this
/// kernel accepts.
///
/// `buf` holds `count` glyph slots at the fixed 32-row stride for the
/// given width. A `width` of `None` (or 0) defaults to 8; a `height` of
/// `None` (or 0) is inferred from the buffer with [`charheight`].
///
/// Hard failures are reported through `ctx` and returned as errors; the
/// chain stops at the first one.
pub fn put_font(
    ctx: &mut Context,
    con: &mut impl FontConsole,
    buf: &[u8],
    count: u32,
    width: Option<u32>,
    height: Option<u32>,
) -> Result<()> {
    let width = width.filter(|w| *w != 0).unwrap_or(8);
    let height = height
        .filter(|h| *h != 0)
        .unwrap_or_else(|| charheight(buf, count, width));

    if let Attempt::Done(()) = modern(ctx, con, buf, count, width, height)? {
        return Ok(());
    }
    debug!("KDFONTOP set not supported by this kernel, trying PIO_FONTX");

    if let Attempt::Done(()) = extended_legacy(ctx, con, buf, count, width, height)? {
        return Ok(());
    }
    debug!("PIO_FONTX not supported by this kernel, trying PIO_FONT");

    original_legacy(ctx, con, buf, count, width, height)
}

fn modern(
    ctx: &mut Context,
    con: &mut impl FontConsole,
    buf: &[u8],
    count: u32,
    width: u32,
    height: u32,
) -> Result<Attempt<()>> {
    let params = FontOpParams {
        width,
        height,
        count,
    };
    let errno = match con.modern_set(&params, buf) {
        Ok(()) => return Ok(Attempt::Done(())),
        Err(errno) => errno,
    };

    // The legacy mechanisms cannot carry a width other than 8, so for wide
    // fonts there is nothing to fall back to; and an errno outside the
    // unsupported pair is a real error either way.
    if width != 8 || !ctx.unsupported_codes().contains(errno) {
        return Err(kernel_error(ctx, "ioctl(KDFONTOP)", errno));
    }

    // Some kernels only take font tables of exactly 256 or 512 slots and
    // answer anything else with the invalid-argument code. Pad the table
    // up to the next boundary and offer it once more before giving up on
    // this mechanism.
    if errno == ctx.unsupported_codes().invalid_argument && count != 256 && count < 512 {
        let padded = if count > 256 { 512 } else { 256 };
        debug!("KDFONTOP rejected {} glyphs, retrying with {}", count, padded);
        if let Attempt::Done(()) = padded_retry(ctx, con, buf, count, padded, width, height)? {
            return Ok(Attempt::Done(()));
        }
    }

    Ok(Attempt::Unsupported)
}

/// One retry of the modern set with the glyph count rounded up to
/// `padded`. The scratch table lives only for this attempt and is freed on
/// every exit path when it drops.
fn padded_retry(
    ctx: &mut Context,
    con: &mut impl FontConsole,
    buf: &[u8],
    count: u32,
    padded: u32,
    width: u32,
    height: u32,
) -> Result<Attempt<()>> {
    // width == 8 on this path, so a slot is exactly 32 bytes.
    let slot = GLYPH_SLOT_ROWS as usize;
    let table = slot * padded as usize;

    let mut scratch: Vec<u8> = Vec::new();
    if let Err(err) = scratch.try_reserve_exact(table) {
        ctx.report(format_args!(
            "cannot allocate a {} byte font table: {}",
            table, err
        ));
        return Err(anyhow::Error::new(err).context("allocating the padded font table"));
    }
    scratch.resize(table, 0);

    let used = (slot * count as usize).min(buf.len());
    scratch[..used].copy_from_slice(&buf[..used]);

    let params = FontOpParams {
        width,
        height,
        count: padded,
    };
    match con.modern_set(&params, &scratch) {
        Ok(()) => Ok(Attempt::Done(())),
        Err(errno) => {
            trace!("padded KDFONTOP retry failed: {}", errno);
            Ok(Attempt::Unsupported)
        }
    }
}

fn extended_legacy(
    ctx: &mut Context,
    con: &mut impl FontConsole,
    buf: &[u8],
    count: u32,
    width: u32,
    height: u32,
) -> Result<Attempt<()>> {
    match con.fontx_set(count as u16, height as u16, buf) {
        Ok(()) => Ok(Attempt::Done(())),
        Err(errno) if ctx.unsupported_codes().contains(errno) => Ok(Attempt::Unsupported),
        Err(errno) => Err(kernel_error(
            ctx,
            &format!("ioctl(PIO_FONTX): {},{}x{}: failed", count, width, height),
            errno,
        )),
    }
}

fn original_legacy(
    ctx: &mut Context,
    con: &mut impl FontConsole,
    buf: &[u8],
    count: u32,
    width: u32,
    height: u32,
) -> Result<()> {
    // The old interface carries no geometry at all: the kernel loads
    // exactly 256 glyph slots from the buffer, whatever count was asked.
    trace!("PIO_FONT loads exactly 256 glyphs (requested {})", count);
    match con.raw_set(buf) {
        Ok(()) => Ok(()),
        // Last mechanism in the chain; every failure is final.
        Err(errno) => Err(kernel_error(
            ctx,
            &format!("ioctl(PIO_FONT): {},{}x{}: failed", count, width, height),
            errno,
        )),
    }
}
