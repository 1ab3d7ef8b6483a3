// src/console/mock.rs

//! Scripted in-memory kernel for exercising the negotiation chain.
//!
//! Each [`FontConsole`] method pops its next scripted reply; an empty
//! queue answers `ENOSYS`, i.e. "this kernel has no such interface", which
//! makes a freshly constructed mock behave like a kernel with no font
//! support at all. Every call is recorded with its parameters (data
//! included) so tests can assert ordering, call counts, and buffer
//! contents.

use super::{FontConsole, FontOpParams};
use nix::errno::Errno;
use std::collections::VecDeque;

/// One recorded ioctl-level call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ModernGet { count: u32, width: u32, height: u32 },
    ModernSet { count: u32, width: u32, height: u32, data: Vec<u8> },
    FontxGet { count: u16 },
    FontxSet { count: u16, height: u16, data: Vec<u8> },
    RawGet,
    RawSet { data: Vec<u8> },
    Reset,
}

/// Geometry a scripted modern-op get hands back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModernReply {
    pub count: u32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Default)]
pub struct MockConsole {
    modern_get: VecDeque<Result<ModernReply, Errno>>,
    modern_set: VecDeque<Result<(), Errno>>,
    fontx_get: VecDeque<Result<(u16, u16), Errno>>,
    fontx_set: VecDeque<Result<(), Errno>>,
    raw_get: VecDeque<Result<(), Errno>>,
    raw_set: VecDeque<Result<(), Errno>>,
    reset: VecDeque<Result<(), Errno>>,
    calls: Vec<Call>,
}

fn next<T>(queue: &mut VecDeque<Result<T, Errno>>) -> Result<T, Errno> {
    queue.pop_front().unwrap_or(Err(Errno::ENOSYS))
}

impl MockConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the reply for the next modern-op get.
    pub fn on_modern_get(&mut self, reply: Result<ModernReply, Errno>) -> &mut Self {
        self.modern_get.push_back(reply);
        self
    }

    /// Queues the reply for the next modern-op set.
    pub fn on_modern_set(&mut self, reply: Result<(), Errno>) -> &mut Self {
        self.modern_set.push_back(reply);
        self
    }

    /// Queues `(count, height)` for the next `GIO_FONTX`.
    pub fn on_fontx_get(&mut self, reply: Result<(u16, u16), Errno>) -> &mut Self {
        self.fontx_get.push_back(reply);
        self
    }

    pub fn on_fontx_set(&mut self, reply: Result<(), Errno>) -> &mut Self {
        self.fontx_set.push_back(reply);
        self
    }

    pub fn on_raw_get(&mut self, reply: Result<(), Errno>) -> &mut Self {
        self.raw_get.push_back(reply);
        self
    }

    pub fn on_raw_set(&mut self, reply: Result<(), Errno>) -> &mut Self {
        self.raw_set.push_back(reply);
        self
    }

    pub fn on_reset(&mut self, reply: Result<(), Errno>) -> &mut Self {
        self.reset.push_back(reply);
        self
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> &[Call] {
        &self.calls
    }
}

impl FontConsole for MockConsole {
    fn modern_get(
        &mut self,
        params: &mut FontOpParams,
        _data: Option<&mut [u8]>,
    ) -> Result<(), Errno> {
        self.calls.push(Call::ModernGet {
            count: params.count,
            width: params.width,
            height: params.height,
        });
        let reply = next(&mut self.modern_get)?;
        params.count = reply.count;
        params.width = reply.width;
        params.height = reply.height;
        Ok(())
    }

    fn modern_set(&mut self, params: &FontOpParams, data: &[u8]) -> Result<(), Errno> {
        self.calls.push(Call::ModernSet {
            count: params.count,
            width: params.width,
            height: params.height,
            data: data.to_vec(),
        });
        next(&mut self.modern_set)
    }

    fn fontx_get(
        &mut self,
        count: &mut u16,
        height: &mut u16,
        _data: Option<&mut [u8]>,
    ) -> Result<(), Errno> {
        self.calls.push(Call::FontxGet { count: *count });
        let (c, h) = next(&mut self.fontx_get)?;
        *count = c;
        *height = h;
        Ok(())
    }

    fn fontx_set(&mut self, count: u16, height: u16, data: &[u8]) -> Result<(), Errno> {
        self.calls.push(Call::FontxSet {
            count,
            height,
            data: data.to_vec(),
        });
        next(&mut self.fontx_set)
    }

    fn raw_get(&mut self, _data: &mut [u8]) -> Result<(), Errno> {
        self.calls.push(Call::RawGet);
        next(&mut self.raw_get)
    }

    fn raw_set(&mut self, data: &[u8]) -> Result<(), Errno> {
        self.calls.push(Call::RawSet {
            data: data.to_vec(),
        });
        next(&mut self.raw_set)
    }

    fn reset(&mut self) -> Result<(), Errno> {
        self.calls.push(Call::Reset);
        next(&mut self.reset)
    }
}
