//! Explicit installation point for the stack formatter.
//!
//! A [`StackFormatterRegistry`] is an ordinary value that an application
//! creates at startup and passes to whatever constructs errors. It holds at
//! most one [`StackFormatter`]; installing a new one replaces the previous
//! one (last writer wins) and hands it back to the caller.
//!
//! # Examples
//!
//! ```
//! use stack_rail::{CaptureTopFrame, FrameRecord, FrameSequence, StackFormatterRegistry};
//!
//! let registry = StackFormatterRegistry::new();
//! assert!(registry.format(&"boom", FrameSequence::<FrameRecord>::Malformed).is_none());
//!
//! registry.install(CaptureTopFrame);
//! let frames = FrameSequence::from(vec![FrameRecord::new("foo", "a.js", 10, 2)]);
//! let record = registry.format(&"boom", frames).unwrap();
//! assert_eq!(record.function_name(), Some("foo"));
//! ```
use core::fmt::{self, Debug};
use std::sync::{PoisonError, RwLock};

use crate::capture::capture_top_frame;
use crate::traits::{CallSite, DynCallSite};
use crate::types::alloc_type::Arc;
use crate::types::{FrameSequence, StackTraceRecord};

/// Turns an error and its frames into a [`StackTraceRecord`].
///
/// Closures with the matching signature implement this trait. Their
/// parameter types must be spelled out so the closure accepts any lifetime:
///
/// ```
/// use std::fmt::Debug;
/// use stack_rail::{DynCallSite, FrameSequence, StackFormatterRegistry, StackTraceRecord};
///
/// let registry = StackFormatterRegistry::new();
/// registry.install(|_: &dyn Debug, _: &FrameSequence<DynCallSite>| StackTraceRecord::default());
/// assert!(registry.is_installed());
/// ```
pub trait StackFormatter: Send + Sync {
    fn format(&self, error: &dyn Debug, frames: &FrameSequence<DynCallSite>) -> StackTraceRecord;
}

impl<H> StackFormatter for H
where
    H: Fn(&dyn Debug, &FrameSequence<DynCallSite>) -> StackTraceRecord + Send + Sync,
{
    #[inline]
    fn format(&self, error: &dyn Debug, frames: &FrameSequence<DynCallSite>) -> StackTraceRecord {
        self(error, frames)
    }
}

/// The stock formatter, delegating to [`capture_top_frame`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaptureTopFrame;

impl StackFormatter for CaptureTopFrame {
    #[inline]
    fn format(&self, error: &dyn Debug, frames: &FrameSequence<DynCallSite>) -> StackTraceRecord {
        capture_top_frame(error, frames)
    }
}

/// Single-slot holder for the active [`StackFormatter`].
#[derive(Default)]
pub struct StackFormatterRegistry {
    slot: RwLock<Option<Arc<dyn StackFormatter>>>,
}

impl StackFormatterRegistry {
    /// Creates a registry with no formatter installed.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with [`CaptureTopFrame`] already installed.
    pub fn with_default() -> Self {
        let registry = Self::new();
        registry.install(CaptureTopFrame);
        registry
    }

    /// Installs `formatter`, returning the one it replaced.
    pub fn install<H>(&self, formatter: H) -> Option<Arc<dyn StackFormatter>>
    where
        H: StackFormatter + 'static,
    {
        self.install_shared(Arc::new(formatter))
    }

    /// Installs an already shared formatter, returning the one it replaced.
    pub fn install_shared(
        &self,
        formatter: Arc<dyn StackFormatter>,
    ) -> Option<Arc<dyn StackFormatter>> {
        let previous = self.slot.write().unwrap_or_else(PoisonError::into_inner).replace(formatter);
        #[cfg(feature = "tracing")]
        tracing::debug!(replaced = previous.is_some(), "stack formatter installed");
        previous
    }

    /// Removes the active formatter, if any.
    pub fn uninstall(&self) -> Option<Arc<dyn StackFormatter>> {
        let previous = self.slot.write().unwrap_or_else(PoisonError::into_inner).take();
        #[cfg(feature = "tracing")]
        tracing::debug!(removed = previous.is_some(), "stack formatter uninstalled");
        previous
    }

    #[inline]
    pub fn is_installed(&self) -> bool {
        self.slot.read().unwrap_or_else(PoisonError::into_inner).is_some()
    }

    /// The active formatter, shared.
    pub fn formatter(&self) -> Option<Arc<dyn StackFormatter>> {
        self.slot.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Runs the active formatter, or returns `None` when nothing is installed.
    ///
    /// The formatter runs outside the registry lock, so it may itself
    /// install or remove formatters.
    pub fn format<F>(&self, error: &dyn Debug, frames: FrameSequence<F>) -> Option<StackTraceRecord>
    where
        F: CallSite + Send + Sync + 'static,
    {
        let formatter = self.formatter()?;
        Some(formatter.format(error, &frames.into_dyn()))
    }
}

impl Debug for StackFormatterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StackFormatterRegistry").field("installed", &self.is_installed()).finish()
    }
}
