//! Seams between host frames and captured stacks.
//!
//! - [`CallSite`]: accessor interface of one frame descriptor
//! - [`ResultStackExt`]: attaches a captured stack to the error of a `Result`
//!
//! # Examples
//!
//! ```
//! use stack_rail::traits::CallSite;
//! use stack_rail::FrameRecord;
//!
//! let frame = FrameRecord::new("foo", "a.js", 10, 2);
//! assert_eq!(frame.line_number(), Some(10));
//! assert_eq!(frame.method_name(), None);
//! ```

pub mod call_site;
pub mod result_ext;

pub use call_site::{CallSite, DynCallSite};
pub use result_ext::ResultStackExt;
