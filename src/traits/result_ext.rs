//! Extension trait for attaching a captured stack to `Result` errors.
//!
//! # Examples
//!
//! ```
//! use stack_rail::traits::ResultStackExt;
//!
//! fn load() -> Result<String, stack_rail::TracedError<std::io::Error>> {
//!     std::fs::read_to_string("missing.toml").traced()
//! }
//!
//! let err = load().unwrap_err();
//! assert!(err.stack().line_number().is_some());
//! ```

use crate::types::TracedError;

#[cfg(feature = "std")]
use crate::registry::StackFormatterRegistry;
#[cfg(feature = "std")]
use crate::traits::CallSite;
#[cfg(feature = "std")]
use crate::types::FrameSequence;
#[cfg(feature = "std")]
use core::fmt::Debug;

/// Wraps the error of a `Result` into a [`TracedError`].
///
/// Success values pass through untouched and nothing is captured for them.
pub trait ResultStackExt<T, E> {
    /// Records the caller's source location as the error's stack.
    ///
    /// # Examples
    ///
    /// ```
    /// use stack_rail::traits::ResultStackExt;
    ///
    /// let result: Result<(), &str> = Err("denied");
    /// let line = line!() + 1;
    /// let err = result.traced().unwrap_err();
    /// assert_eq!(err.stack().line_number(), Some(line));
    /// ```
    fn traced(self) -> Result<T, TracedError<E>>;

    /// Runs the formatter installed in `registry` over `frames` on error.
    #[cfg(feature = "std")]
    fn traced_with<F>(
        self,
        registry: &StackFormatterRegistry,
        frames: FrameSequence<F>,
    ) -> Result<T, TracedError<E>>
    where
        E: Debug,
        F: CallSite + Send + Sync + 'static;
}

impl<T, E> ResultStackExt<T, E> for Result<T, E> {
    #[inline]
    #[track_caller]
    fn traced(self) -> Result<T, TracedError<E>> {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(TracedError::here(error)),
        }
    }

    #[cfg(feature = "std")]
    #[inline]
    fn traced_with<F>(
        self,
        registry: &StackFormatterRegistry,
        frames: FrameSequence<F>,
    ) -> Result<T, TracedError<E>>
    where
        E: Debug,
        F: CallSite + Send + Sync + 'static,
    {
        self.map_err(|error| TracedError::capture(registry, error, frames))
    }
}
