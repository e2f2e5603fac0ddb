//! Stack capture: eager top frame, lazy full stack.
//!
//! Key pieces:
//! - [`make_serializer`] binds a [`FrameSequence`] to a [`LazyCallList`]
//!   without reading a single frame.
//! - [`capture_top_frame`] reads only the innermost frame right away and
//!   attaches a serializer for the rest.
//!
//! Neither function fails. Malformed or empty input produces the empty
//! result: `"[]"` for the serializer, the default [`StackTraceRecord`] for
//! capture.
//!
//! # Examples
//!
//! ```
//! use stack_rail::{capture_top_frame, FrameRecord, FrameSequence};
//!
//! let frames = FrameSequence::from(vec![
//!     FrameRecord::new("foo", "a.js", 10, 2),
//!     FrameRecord::new("bar", "a.js", 20, 4),
//! ]);
//!
//! let record = capture_top_frame(&"boom", &frames);
//! assert_eq!(record.file_path(), Some("a.js"));
//! assert_eq!(record.line_number(), Some(10));
//! assert_eq!(record.function_name(), Some("foo"));
//! assert_eq!(record.structured_call_list().len(), 2);
//! ```

use crate::traits::CallSite;
use crate::types::alloc_type::Cow;
use crate::types::{FrameRecord, FrameSequence, FrameVec, LazyCallList, StackTraceRecord};

/// Returns a deferred serializer bound to the whole of `frames`.
///
/// The sequence is shared, not copied, and is validated only when the
/// serializer runs. Every run walks the frames again from index 0, so
/// descriptors that change between runs are reported as they are at the
/// time of each run.
///
/// # Examples
///
/// ```
/// use stack_rail::{make_serializer, FrameRecord, FrameSequence};
///
/// assert_eq!(make_serializer(FrameSequence::<FrameRecord>::Malformed).stringify(), "[]");
/// assert_eq!(make_serializer(FrameSequence::<FrameRecord>::from(vec![])).stringify(), "[]");
/// ```
pub fn make_serializer<F>(frames: FrameSequence<F>) -> LazyCallList
where
    F: CallSite + Send + Sync + 'static,
{
    LazyCallList::new(move || collect_frames(&frames))
}

/// Builds the structured stack for an error.
///
/// The top frame's file, line and function are copied immediately; the call
/// list is attached through [`make_serializer`] and covers every frame. The
/// error itself is not inspected.
///
/// A malformed or empty sequence yields [`StackTraceRecord::default`].
pub fn capture_top_frame<E, F>(_error: &E, frames: &FrameSequence<F>) -> StackTraceRecord
where
    E: ?Sized,
    F: CallSite + Send + Sync + 'static,
{
    let Some(top) = frames.top() else {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            malformed = frames.is_malformed(),
            "no top frame to capture, returning default stack record"
        );
        return StackTraceRecord::default();
    };

    StackTraceRecord::new(
        top.file_name().map(Cow::into_owned),
        top.line_number(),
        top.function_name().map(Cow::into_owned),
        Some(make_serializer(frames.clone())),
    )
}

fn collect_frames<F: CallSite>(frames: &FrameSequence<F>) -> FrameVec {
    match frames.as_frames() {
        Some(frames) => frames.iter().map(FrameRecord::from_call_site).collect(),
        None => FrameVec::new(),
    }
}
