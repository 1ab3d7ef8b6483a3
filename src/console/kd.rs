// src/console/kd.rs

//! `linux/kd.h` ABI for the console font ioctls: request numbers, the
//! `repr(C)` argument structs, and the modern op's flag word.

use bitflags::bitflags;
use libc::{c_char, c_uchar, c_uint, c_ulong, c_ushort};

pub const GIO_FONT: c_ulong = 0x4B60;
pub const PIO_FONT: c_ulong = 0x4B61;
pub const GIO_FONTX: c_ulong = 0x4B6B;
pub const PIO_FONTX: c_ulong = 0x4B6C;
pub const PIO_FONTRESET: c_ulong = 0x4B6D;
pub const KDFONTOP: c_ulong = 0x4B72;

pub const KD_FONT_OP_SET: c_uint = 0;
pub const KD_FONT_OP_GET: c_uint = 1;

bitflags! {
    /// Flag word of [`ConsoleFontOp`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct KdFontFlags: c_uint {
        /// Do not recalculate the screen layout after loading the font.
        const DONT_RECALC = 1;
    }
}

/// Argument of `KDFONTOP`, `struct console_font_op`.
#[repr(C)]
#[derive(Debug)]
pub struct ConsoleFontOp {
    pub op: c_uint,
    pub flags: c_uint,
    pub width: c_uint,
    pub height: c_uint,
    pub charcount: c_uint,
    pub data: *mut c_uchar,
}

/// Argument of `GIO_FONTX`/`PIO_FONTX`, `struct consolefontdesc`.
#[repr(C)]
#[derive(Debug)]
pub struct ConsoleFontDesc {
    pub charcount: c_ushort,
    pub charheight: c_ushort,
    pub chardata: *mut c_char,
}
