// src/context.rs

//! Diagnostic context threaded through every negotiation call.
//!
//! Font negotiation runs against whatever kernel it finds, so most of what
//! can go wrong is only interesting as a human-readable message: which
//! ioctl was attempted, with which parameters, and what the kernel said.
//! The [`Context`] collects those messages through a single `report`
//! capability supplied by the caller; it never aborts and never panics,
//! because the caller may still have cleanup to run after a failure.
//!
//! The context also carries the pair of errno values this kernel uses to
//! say "interface not present" / "interface rejects these parameters".
//! Those are the only two codes that trigger fallback to an older
//! mechanism; everything else is a hard failure.

use nix::errno::Errno;
use std::fmt;

/// The two errno values a kernel reports for a mechanism it does not
/// support. Any other errno from a font ioctl is a real error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsupportedCodes {
    /// "This interface does not exist here" (conventionally `ENOSYS`).
    pub not_implemented: Errno,
    /// "This interface rejects these parameters" (conventionally `EINVAL`).
    /// Also the code that makes the writer's padded retry worth trying.
    pub invalid_argument: Errno,
}

impl UnsupportedCodes {
    /// Whether `errno` means "fall back to an older mechanism".
    pub fn contains(&self, errno: Errno) -> bool {
        errno == self.not_implemented || errno == self.invalid_argument
    }
}

impl Default for UnsupportedCodes {
    fn default() -> Self {
        Self {
            not_implemented: Errno::ENOSYS,
            invalid_argument: Errno::EINVAL,
        }
    }
}

type Sink = Box<dyn FnMut(fmt::Arguments<'_>) + Send>;

/// Opaque diagnostic handle passed by reference into every operation.
///
/// Holds the report sink and the unsupported-errno configuration. This is
/// deliberately an explicit handle rather than ambient global state: the
/// surrounding tool decides where diagnostics go.
pub struct Context {
    sink: Sink,
    unsupported: UnsupportedCodes,
}

impl Context {
    /// A context that forwards diagnostics to `log::error!` and classifies
    /// unsupported mechanisms by the conventional `ENOSYS`/`EINVAL` pair.
    pub fn new() -> Self {
        Self::with_sink(|message| log::error!("{}", message))
    }

    /// A context with a caller-supplied sink for the diagnostics.
    pub fn with_sink(sink: impl FnMut(fmt::Arguments<'_>) + Send + 'static) -> Self {
        Self {
            sink: Box::new(sink),
            unsupported: UnsupportedCodes::default(),
        }
    }

    /// Overrides the errno pair treated as "mechanism not supported".
    /// Kernel flavors that signal a missing interface differently can be
    /// matched without touching the negotiation logic.
    pub fn set_unsupported_codes(&mut self, codes: UnsupportedCodes) {
        self.unsupported = codes;
    }

    pub fn unsupported_codes(&self) -> UnsupportedCodes {
        self.unsupported
    }

    /// Records one formatted diagnostic. Infallible by contract.
    pub fn report(&mut self, message: fmt::Arguments<'_>) {
        (self.sink)(message);
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("unsupported", &self.unsupported)
            .finish_non_exhaustive()
    }
}
