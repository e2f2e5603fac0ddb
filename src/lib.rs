//! Structured stack capture for error diagnostics.
//!
//! When an error is raised, the innermost frame is copied into a
//! [`StackTraceRecord`] right away, while the rest of the stack stays behind a
//! [`LazyCallList`] that serializes every frame to JSON only when asked.
//! Hosts hand frames over through the [`CallSite`](traits::CallSite) accessor
//! trait, and unusable input is absorbed into empty results instead of
//! surfacing as a failure.
//!
//! # Examples
//!
//! ## Capturing a host stack
//!
//! ```
//! use stack_rail::{capture_top_frame, FrameRecord, FrameSequence};
//!
//! let frames = FrameSequence::from(vec![
//!     FrameRecord::new("foo", "a.js", 10, 2),
//!     FrameRecord::new("bar", "a.js", 20, 4),
//! ]);
//!
//! let record = capture_top_frame(&"TypeError", &frames);
//! assert_eq!(record.function_name(), Some("foo"));
//!
//! let json: serde_json::Value =
//!     serde_json::from_str(&record.stringify_structured_call_list()).unwrap();
//! assert_eq!(json[1]["functionName"], "bar");
//! ```
//!
//! ## Installing the formatter at startup
//!
//! ```
//! use stack_rail::{FrameRecord, FrameSequence, StackFormatterRegistry, TracedError};
//!
//! let registry = StackFormatterRegistry::with_default();
//!
//! let frames = FrameSequence::from(vec![FrameRecord::new("main", "src/main.rs", 3, 5)]);
//! let err = TracedError::capture(&registry, "boom", frames);
//! assert_eq!(err.stack().file_path(), Some("src/main.rs"));
//! ```
//!
//! ## Malformed input
//!
//! ```
//! use stack_rail::{capture_top_frame, FrameSequence};
//!
//! let frames = FrameSequence::from_json_str(r#""not an array""#);
//! let record = capture_top_frame(&"boom", &frames);
//! assert!(record.is_empty());
//! assert_eq!(record.stringify_structured_call_list(), "[]");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Eager top-frame capture and lazy call-list serialization
pub mod capture;
/// Macros capturing frames at the invocation site
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Single-slot formatter registry (requires `std` feature)
#[cfg(feature = "std")]
pub mod registry;
/// Frame descriptor accessors and `Result` extensions
pub mod traits;
/// Frames, records and the traced error wrapper
pub mod types;

pub use capture::*;
#[cfg(feature = "std")]
pub use registry::{CaptureTopFrame, StackFormatter, StackFormatterRegistry};
pub use traits::{CallSite, DynCallSite, ResultStackExt};
pub use types::{
    FrameRecord, FrameSequence, FrameVec, LazyCallList, StackTraceRecord, TracedError,
};

#[doc(hidden)]
pub mod __private {
    #[cfg(not(feature = "std"))]
    pub use alloc::{string::String, vec};
    #[cfg(feature = "std")]
    pub use std::{string::String, vec};
}
