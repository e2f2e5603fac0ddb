//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use stack_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`frame!`], [`frames!`], [`traced!`]
//! - **Functions**: [`capture_top_frame`], [`make_serializer`]
//! - **Types**: [`FrameRecord`], [`FrameSequence`], [`LazyCallList`], [`StackTraceRecord`],
//!   [`TracedError`]
//! - **Traits**: [`CallSite`], [`ResultStackExt`]
//!
//! # Examples
//!
//! ```
//! use stack_rail::prelude::*;
//!
//! fn open(path: &str) -> TracedResult<String, std::io::Error> {
//!     std::fs::read_to_string(path).traced()
//! }
//!
//! let err = open("does-not-exist.txt").unwrap_err();
//! assert!(err.stack().file_path().is_some());
//! ```

// Macros
pub use crate::{frame, frames, traced};

// Capture
pub use crate::capture::{capture_top_frame, make_serializer};

// Core types
pub use crate::types::{FrameRecord, FrameSequence, LazyCallList, StackTraceRecord, TracedError};

#[cfg(feature = "std")]
pub use crate::registry::{CaptureTopFrame, StackFormatterRegistry};

// Traits
pub use crate::traits::{CallSite, ResultStackExt};

/// Result whose error carries the stack captured when it was raised.
pub type TracedResult<T, E> = Result<T, TracedError<E>>;
