//! Deferred serialization of a full call stack.
//!
//! This module provides [`LazyCallList`], a handle that delays walking and
//! encoding every frame of a stack until someone asks for it. Most captured
//! errors are only ever logged by their top frame, so the cost of a deep
//! stack is paid only when the complete list is actually requested.
//!
//! # Examples
//!
//! ```
//! use stack_rail::{make_serializer, FrameRecord, FrameSequence};
//!
//! let frames = FrameSequence::from(vec![FrameRecord::new("main", "src/main.rs", 3, 5)]);
//! let call_list = make_serializer(frames);
//!
//! // Nothing has been read yet; the frames are walked here.
//! let json = call_list.stringify();
//! assert!(json.starts_with(r#"[{"functionName":"main""#));
//! ```
use core::fmt;

use smallvec::SmallVec;

use crate::types::alloc_type::{Arc, String, Vec};
use crate::types::FrameRecord;

/// Inline buffer used while materializing a call list.
///
/// Shallow stacks stay off the heap until the final JSON text is built.
pub type FrameVec = SmallVec<[FrameRecord; 4]>;

const EMPTY_JSON_ARRAY: &str = "[]";

/// A zero-argument generator that produces the frame records of a stack.
///
/// The generator is re-run on every call: results are never cached, so a
/// descriptor that changes between two calls is reported as it is at the
/// time of each call.
///
/// Cloning is cheap and shares the same generator.
#[derive(Clone)]
pub struct LazyCallList {
    generator: Arc<dyn Fn() -> FrameVec + Send + Sync>,
}

impl LazyCallList {
    /// Wraps a generator that yields the frames on demand.
    ///
    /// # Examples
    ///
    /// ```
    /// use stack_rail::{FrameRecord, LazyCallList};
    ///
    /// let call_list = LazyCallList::new(|| {
    ///     [FrameRecord::new("tick", "clock.rs", 1, 1)].into_iter().collect()
    /// });
    /// assert_eq!(call_list.frames().len(), 1);
    /// ```
    #[inline]
    pub fn new<G>(generator: G) -> Self
    where
        G: Fn() -> FrameVec + Send + Sync + 'static,
    {
        Self { generator: Arc::new(generator) }
    }

    /// A call list that always yields no frames.
    #[inline]
    pub fn empty() -> Self {
        Self::new(FrameVec::new)
    }

    /// Materializes the frame records, innermost first.
    pub fn frames(&self) -> Vec<FrameRecord> {
        self.generate().into_vec()
    }

    /// Serializes every frame into a compact JSON array.
    ///
    /// Returns `"[]"` when there are no frames.
    ///
    /// # Examples
    ///
    /// ```
    /// use stack_rail::LazyCallList;
    ///
    /// assert_eq!(LazyCallList::empty().stringify(), "[]");
    /// ```
    pub fn stringify(&self) -> String {
        let frames = self.generate();
        serde_json::to_string(frames.as_slice()).unwrap_or_else(|_| EMPTY_JSON_ARRAY.into())
    }

    /// Like [`stringify`](Self::stringify), with indentation for humans.
    pub fn stringify_pretty(&self) -> String {
        let frames = self.generate();
        serde_json::to_string_pretty(frames.as_slice()).unwrap_or_else(|_| EMPTY_JSON_ARRAY.into())
    }

    /// Alias of [`stringify`](Self::stringify) reading as a plain invocation.
    #[inline]
    pub fn call(&self) -> String {
        self.stringify()
    }

    /// Borrows the call list as an ordinary closure.
    ///
    /// # Examples
    ///
    /// ```
    /// use stack_rail::LazyCallList;
    ///
    /// let empty = LazyCallList::empty();
    /// let thunk = empty.as_fn();
    /// assert_eq!(thunk(), "[]");
    /// ```
    #[inline]
    pub fn as_fn(&self) -> impl Fn() -> String + '_ {
        move || self.stringify()
    }

    fn generate(&self) -> FrameVec {
        let frames = (self.generator)();
        #[cfg(feature = "tracing")]
        tracing::trace!(frame_count = frames.len(), "materialized structured call list");
        frames
    }
}

impl Default for LazyCallList {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for LazyCallList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyCallList").finish_non_exhaustive()
    }
}
