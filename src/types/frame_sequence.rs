//! Ordered, shared list of frame descriptors handed over by a host.
//!
//! Hosts do not always supply a usable list: the value may be absent or of
//! the wrong shape. [`FrameSequence`] keeps that possibility explicit with a
//! [`FrameSequence::Malformed`] variant instead of failing at the boundary,
//! and every consumer in this crate degrades it to an empty result.
use core::fmt;

use serde_json::Value;

use crate::traits::{CallSite, DynCallSite};
use crate::types::alloc_type::{Arc, Cow, Vec};
use crate::types::FrameRecord;

/// Frames of one call stack, index 0 being the innermost (top) frame.
///
/// The frames live behind an [`Arc`]; cloning a sequence shares the same
/// descriptors rather than copying them.
pub enum FrameSequence<F> {
    /// A well-formed, possibly empty, list of frames.
    Frames(Arc<[F]>),
    /// The host supplied something that is not a list of frames.
    Malformed,
}

impl<F> FrameSequence<F> {
    /// Returns the frames, or `None` when the sequence is malformed.
    #[inline]
    pub fn as_frames(&self) -> Option<&[F]> {
        match self {
            Self::Frames(frames) => Some(&frames[..]),
            Self::Malformed => None,
        }
    }

    #[inline]
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed)
    }

    /// Number of frames; zero for malformed input.
    #[inline]
    pub fn len(&self) -> usize {
        self.as_frames().map_or(0, <[F]>::len)
    }

    /// True when there is no frame to read, malformed or not.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The innermost frame, if any.
    #[inline]
    pub fn top(&self) -> Option<&F> {
        self.as_frames().and_then(<[F]>::first)
    }
}

impl<F> FrameSequence<F>
where
    F: CallSite + Send + Sync + 'static,
{
    /// Erases the descriptor type while keeping the original frames shared.
    ///
    /// Each erased frame reads through to the element it stands for, so later
    /// changes observed by the original descriptors stay visible.
    pub fn into_dyn(self) -> FrameSequence<DynCallSite> {
        match self {
            Self::Frames(frames) => {
                let erased: Vec<DynCallSite> = (0..frames.len())
                    .map(|index| {
                        Arc::new(SharedFrame { frames: Arc::clone(&frames), index }) as DynCallSite
                    })
                    .collect();
                FrameSequence::Frames(erased.into())
            },
            Self::Malformed => FrameSequence::Malformed,
        }
    }
}

impl FrameSequence<FrameRecord> {
    /// Interprets an untyped host value as a frame sequence.
    ///
    /// Only an array whose every element decodes as a [`FrameRecord`] is
    /// accepted. Anything else, including an array holding a single
    /// non-frame element, is [`FrameSequence::Malformed`].
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use stack_rail::FrameSequence;
    ///
    /// let frames = FrameSequence::from_json_value(json!([
    ///     { "functionName": "foo", "fileName": "a.js", "lineNumber": 10, "columnNumber": 2 }
    /// ]));
    /// assert_eq!(frames.len(), 1);
    ///
    /// assert!(FrameSequence::from_json_value(json!("not an array")).is_malformed());
    /// assert!(FrameSequence::from_json_value(json!(null)).is_malformed());
    /// ```
    pub fn from_json_value(value: Value) -> Self {
        let Value::Array(items) = value else {
            return Self::Malformed;
        };

        items
            .into_iter()
            .map(serde_json::from_value::<FrameRecord>)
            .collect::<Result<Vec<_>, _>>()
            .map_or(Self::Malformed, Self::from)
    }

    /// Parses JSON text and interprets it with [`from_json_value`](Self::from_json_value).
    ///
    /// Text that is not valid JSON is malformed input as well.
    pub fn from_json_str(text: &str) -> Self {
        serde_json::from_str::<Value>(text).map_or(Self::Malformed, Self::from_json_value)
    }
}

impl<F> Clone for FrameSequence<F> {
    #[inline]
    fn clone(&self) -> Self {
        match self {
            Self::Frames(frames) => Self::Frames(Arc::clone(frames)),
            Self::Malformed => Self::Malformed,
        }
    }
}

impl<F> Default for FrameSequence<F> {
    /// Absent input.
    #[inline]
    fn default() -> Self {
        Self::Malformed
    }
}

impl<F: fmt::Debug> fmt::Debug for FrameSequence<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Frames(frames) => f.debug_tuple("Frames").field(&&frames[..]).finish(),
            Self::Malformed => f.write_str("Malformed"),
        }
    }
}

impl<F> From<Vec<F>> for FrameSequence<F> {
    #[inline]
    fn from(frames: Vec<F>) -> Self {
        Self::Frames(frames.into())
    }
}

impl<F> From<Arc<[F]>> for FrameSequence<F> {
    #[inline]
    fn from(frames: Arc<[F]>) -> Self {
        Self::Frames(frames)
    }
}

impl<F> From<Option<Vec<F>>> for FrameSequence<F> {
    #[inline]
    fn from(frames: Option<Vec<F>>) -> Self {
        frames.map_or(Self::Malformed, Self::from)
    }
}

impl<F> FromIterator<F> for FrameSequence<F> {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        Self::Frames(iter.into_iter().collect())
    }
}

/// One element of an erased sequence, still pointing into the original list.
struct SharedFrame<F> {
    frames: Arc<[F]>,
    index: usize,
}

impl<F: CallSite> SharedFrame<F> {
    #[inline]
    fn frame(&self) -> &F {
        &self.frames[self.index]
    }
}

impl<F: CallSite> CallSite for SharedFrame<F> {
    fn function_name(&self) -> Option<Cow<'_, str>> {
        self.frame().function_name()
    }

    fn method_name(&self) -> Option<Cow<'_, str>> {
        self.frame().method_name()
    }

    fn file_name(&self) -> Option<Cow<'_, str>> {
        self.frame().file_name()
    }

    fn line_number(&self) -> Option<u32> {
        self.frame().line_number()
    }

    fn column_number(&self) -> Option<u32> {
        self.frame().column_number()
    }
}
