//! Error wrapper that owns the stack captured when it was raised.
use core::fmt::{self, Display};
use core::panic::Location;

use crate::capture::capture_top_frame;
use crate::types::alloc_type::Vec;
use crate::types::{FrameSequence, StackTraceRecord};

#[cfg(feature = "std")]
use crate::registry::StackFormatterRegistry;
#[cfg(feature = "std")]
use crate::traits::CallSite;

/// An error together with its [`StackTraceRecord`].
///
/// The record belongs to this error alone and holds no reference back to it.
#[derive(Debug, Clone)]
pub struct TracedError<E> {
    error: E,
    stack: StackTraceRecord,
}

impl<E> TracedError<E> {
    /// Pairs an error with an already captured record.
    #[inline]
    pub fn new(error: E, stack: StackTraceRecord) -> Self {
        Self { error, stack }
    }

    /// Captures the caller's source location as a one-frame stack.
    ///
    /// # Examples
    ///
    /// ```
    /// use stack_rail::TracedError;
    ///
    /// let err = TracedError::here("disk full");
    /// assert!(err.stack().file_path().unwrap().ends_with(".rs"));
    /// assert_eq!(err.stack().function_name(), None);
    /// ```
    #[track_caller]
    pub fn here(error: E) -> Self {
        let mut frames = Vec::with_capacity(1);
        frames.push(Location::caller());
        let stack = capture_top_frame(&error, &FrameSequence::from(frames));
        Self { error, stack }
    }

    /// Runs the formatter installed in `registry` over `frames`.
    ///
    /// When no formatter is installed the error carries the default record.
    #[cfg(feature = "std")]
    pub fn capture<F>(registry: &StackFormatterRegistry, error: E, frames: FrameSequence<F>) -> Self
    where
        E: fmt::Debug,
        F: CallSite + Send + Sync + 'static,
    {
        let stack = registry.format(&error, frames).unwrap_or_default();
        Self { error, stack }
    }

    #[inline]
    pub fn error(&self) -> &E {
        &self.error
    }

    #[inline]
    pub fn stack(&self) -> &StackTraceRecord {
        &self.stack
    }

    /// Discards the stack and returns the wrapped error.
    #[inline]
    pub fn into_inner(self) -> E {
        self.error
    }

    #[inline]
    pub fn into_parts(self) -> (E, StackTraceRecord) {
        (self.error, self.stack)
    }

    /// Maps the wrapped error while keeping the captured stack.
    #[inline]
    pub fn map_error<F, T>(self, f: F) -> TracedError<T>
    where
        F: FnOnce(E) -> T,
    {
        TracedError { error: f(self.error), stack: self.stack }
    }
}

impl<E: Display> Display for TracedError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !f.alternate() || self.stack.is_empty() {
            return Display::fmt(&self.error, f);
        }
        write!(f, "{} at {}", self.error, self.stack)
    }
}

impl<E> core::error::Error for TracedError<E>
where
    E: core::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&self.error)
    }
}
