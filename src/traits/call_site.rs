//! Read-only view over a single stack frame supplied by a host.
//!
//! A host (an interpreter, a crash-report decoder, a profiler) owns its own
//! frame representation. [`CallSite`] is the accessor surface this crate
//! consumes: five zero-argument getters, each of which may report the value
//! as absent.
//!
//! # Examples
//!
//! ```
//! use std::borrow::Cow;
//! use stack_rail::traits::CallSite;
//!
//! struct VmFrame {
//!     func: &'static str,
//!     line: u32,
//! }
//!
//! impl CallSite for VmFrame {
//!     fn function_name(&self) -> Option<Cow<'_, str>> {
//!         Some(Cow::Borrowed(self.func))
//!     }
//!     fn method_name(&self) -> Option<Cow<'_, str>> {
//!         None
//!     }
//!     fn file_name(&self) -> Option<Cow<'_, str>> {
//!         Some(Cow::Borrowed("main.js"))
//!     }
//!     fn line_number(&self) -> Option<u32> {
//!         Some(self.line)
//!     }
//!     fn column_number(&self) -> Option<u32> {
//!         None
//!     }
//! }
//!
//! let frame = VmFrame { func: "render", line: 12 };
//! assert_eq!(frame.function_name().as_deref(), Some("render"));
//! ```
use core::panic::Location;

use crate::types::alloc_type::{Arc, Box, Cow};

/// Accessors exposed by one frame descriptor.
///
/// Implementations are read on demand and may return different values over
/// time; nothing in this crate caches what they report.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a stack frame descriptor",
    label = "this type does not implement `CallSite`",
    note = "implement `CallSite` or convert the frame into a `FrameRecord` first"
)]
pub trait CallSite {
    /// Name of the function executing in this frame.
    fn function_name(&self) -> Option<Cow<'_, str>>;

    /// Name of the property through which the function was invoked, if any.
    fn method_name(&self) -> Option<Cow<'_, str>>;

    /// Path or URL of the source containing the frame.
    fn file_name(&self) -> Option<Cow<'_, str>>;

    /// One-based line number.
    fn line_number(&self) -> Option<u32>;

    /// One-based column number.
    fn column_number(&self) -> Option<u32>;
}

/// Type-erased, shareable frame descriptor used at the formatter boundary.
pub type DynCallSite = Arc<dyn CallSite + Send + Sync>;

macro_rules! forward_call_site {
    ($($ty:ty),* $(,)?) => {$(
        impl<T: CallSite + ?Sized> CallSite for $ty {
            #[inline]
            fn function_name(&self) -> Option<Cow<'_, str>> {
                (**self).function_name()
            }

            #[inline]
            fn method_name(&self) -> Option<Cow<'_, str>> {
                (**self).method_name()
            }

            #[inline]
            fn file_name(&self) -> Option<Cow<'_, str>> {
                (**self).file_name()
            }

            #[inline]
            fn line_number(&self) -> Option<u32> {
                (**self).line_number()
            }

            #[inline]
            fn column_number(&self) -> Option<u32> {
                (**self).column_number()
            }
        }
    )*};
}

forward_call_site!(&T, Box<T>, Arc<T>);

impl CallSite for Location<'_> {
    /// Caller locations carry no function name.
    #[inline]
    fn function_name(&self) -> Option<Cow<'_, str>> {
        None
    }

    #[inline]
    fn method_name(&self) -> Option<Cow<'_, str>> {
        None
    }

    #[inline]
    fn file_name(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.file()))
    }

    #[inline]
    fn line_number(&self) -> Option<u32> {
        Some(self.line())
    }

    #[inline]
    fn column_number(&self) -> Option<u32> {
        Some(self.column())
    }
}
