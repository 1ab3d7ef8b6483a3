// src/console/vt.rs

//! ioctl-backed [`FontConsole`] over an already-open console descriptor,
//! using raw `libc` FFI calls checked against `Errno`.

use super::kd::{self, ConsoleFontDesc, ConsoleFontOp, KdFontFlags};
use super::{FontConsole, FontOpParams};
use log::trace;
use nix::errno::Errno;
use std::os::unix::io::{AsRawFd, RawFd};
use std::ptr;

/// Console font access through the kernel's ioctl surface.
///
/// Borrows the descriptor: the caller opened it, the caller closes it, and
/// the caller serializes access to it if several parties share it. One
/// negotiation call assumes exclusive use of the descriptor for its
/// duration and nothing more.
#[derive(Debug, Clone, Copy)]
pub struct VtConsole {
    fd: RawFd,
}

impl VtConsole {
    pub fn new(fd: RawFd) -> Self {
        Self { fd }
    }

    fn ioctl(&self, request: libc::c_ulong, arg: *mut libc::c_void) -> Result<(), Errno> {
        let rc = unsafe { libc::ioctl(self.fd, request, arg) };
        if rc == -1 {
            return Err(Errno::last());
        }
        Ok(())
    }
}

impl AsRawFd for VtConsole {
    fn as_raw_fd(&self) -> RawFd {
        self.fd
    }
}

impl FontConsole for VtConsole {
    fn modern_get(
        &mut self,
        params: &mut FontOpParams,
        data: Option<&mut [u8]>,
    ) -> Result<(), Errno> {
        let mut cfo = ConsoleFontOp {
            op: kd::KD_FONT_OP_GET,
            flags: KdFontFlags::empty().bits(),
            width: params.width,
            height: params.height,
            charcount: params.count,
            data: data.map_or(ptr::null_mut(), |d| d.as_mut_ptr()),
        };
        self.ioctl(kd::KDFONTOP, &mut cfo as *mut _ as *mut libc::c_void)?;
        params.width = cfo.width;
        params.height = cfo.height;
        params.count = cfo.charcount;
        trace!(
            "KDFONTOP get on fd {}: {} glyphs, {}x{}",
            self.fd,
            cfo.charcount,
            cfo.width,
            cfo.height
        );
        Ok(())
    }

    fn modern_set(&mut self, params: &FontOpParams, data: &[u8]) -> Result<(), Errno> {
        // The kernel only reads through `data` for a SET; the struct field
        // is *mut either way.
        let mut cfo = ConsoleFontOp {
            op: kd::KD_FONT_OP_SET,
            flags: KdFontFlags::empty().bits(),
            width: params.width,
            height: params.height,
            charcount: params.count,
            data: data.as_ptr() as *mut _,
        };
        trace!(
            "KDFONTOP set on fd {}: {} glyphs, {}x{}",
            self.fd,
            params.count,
            params.width,
            params.height
        );
        self.ioctl(kd::KDFONTOP, &mut cfo as *mut _ as *mut libc::c_void)
    }

    fn fontx_get(
        &mut self,
        count: &mut u16,
        height: &mut u16,
        data: Option<&mut [u8]>,
    ) -> Result<(), Errno> {
        let mut cfd = ConsoleFontDesc {
            charcount: *count,
            charheight: 0,
            chardata: data.map_or(ptr::null_mut(), |d| d.as_mut_ptr().cast()),
        };
        self.ioctl(kd::GIO_FONTX, &mut cfd as *mut _ as *mut libc::c_void)?;
        *count = cfd.charcount;
        *height = cfd.charheight;
        trace!(
            "GIO_FONTX on fd {}: {} glyphs, height {}",
            self.fd,
            cfd.charcount,
            cfd.charheight
        );
        Ok(())
    }

    fn fontx_set(&mut self, count: u16, height: u16, data: &[u8]) -> Result<(), Errno> {
        let mut cfd = ConsoleFontDesc {
            charcount: count,
            charheight: height,
            chardata: data.as_ptr() as *mut _,
        };
        trace!(
            "PIO_FONTX on fd {}: {} glyphs, height {}",
            self.fd,
            count,
            height
        );
        self.ioctl(kd::PIO_FONTX, &mut cfd as *mut _ as *mut libc::c_void)
    }

    fn raw_get(&mut self, data: &mut [u8]) -> Result<(), Errno> {
        trace!("GIO_FONT on fd {}", self.fd);
        self.ioctl(kd::GIO_FONT, data.as_mut_ptr().cast())
    }

    fn raw_set(&mut self, data: &[u8]) -> Result<(), Errno> {
        trace!("PIO_FONT on fd {}", self.fd);
        self.ioctl(kd::PIO_FONT, data.as_ptr() as *mut _)
    }

    fn reset(&mut self) -> Result<(), Errno> {
        trace!("PIO_FONTRESET on fd {}", self.fd);
        self.ioctl(kd::PIO_FONTRESET, ptr::null_mut())
    }
}
