//! Data types for captured stacks.
//!
//! - [`FrameSequence`]: the host's frames, or an explicit malformed marker
//! - [`FrameRecord`]: owned snapshot of one frame
//! - [`LazyCallList`]: deferred serializer for a whole stack
//! - [`StackTraceRecord`]: top frame fields plus the deferred serializer
//! - [`TracedError`]: an error owning its record
//!
//! # Examples
//!
//! ```
//! use stack_rail::{capture_top_frame, frames, FrameRecord};
//!
//! let stack = frames![
//!     FrameRecord::new("parse", "src/parse.rs", 40, 9),
//!     FrameRecord::new("main", "src/main.rs", 3, 5),
//! ];
//! let record = capture_top_frame(&"bad token", &stack);
//! println!("{}", record);
//! // Output: parse (src/parse.rs:40)
//! ```

pub mod alloc_type;
pub mod frame_record;
pub mod frame_sequence;
pub mod lazy_call_list;
pub mod stack_trace_record;
pub mod traced_error;

pub use frame_record::*;
pub use frame_sequence::*;
pub use lazy_call_list::*;
pub use stack_trace_record::*;
pub use traced_error::*;
