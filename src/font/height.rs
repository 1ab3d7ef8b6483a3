// src/font/height.rs

use super::GLYPH_SLOT_ROWS;

/// Smallest glyph height that still contains every set pixel in `buf`.
///
/// `buf` holds `count` glyph slots of [`GLYPH_SLOT_ROWS`] rows at
/// `ceil(width / 8)` bytes per row. Candidate heights are tested from 32
/// down to 1; the first height at which any glyph has a bit set in its
/// bottom row is the answer, so the result is the true maximum used row
/// across the whole set. An entirely blank buffer yields 0.
pub fn charheight(buf: &[u8], count: u32, width: u32) -> u32 {
    let bytewidth = ((width + 7) / 8) as usize;
    let slot = GLYPH_SLOT_ROWS as usize;

    for h in (1..=slot).rev() {
        for glyph in 0..count as usize {
            let row = (slot * glyph + h - 1) * bytewidth;
            match buf.get(row..row + bytewidth) {
                Some(bytes) if bytes.iter().any(|&b| b != 0) => return h as u32,
                _ => {}
            }
        }
    }
    0
}
