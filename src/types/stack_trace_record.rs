//! Structured stack information attached to an error.
use core::fmt::{self, Display};

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::types::alloc_type::{String, Vec};
use crate::types::{FrameRecord, LazyCallList};

/// Top-frame fields of a captured stack plus a deferred serializer for the
/// whole stack.
///
/// The record is built in one step and never changes afterwards. The
/// [`Default`] value is the record produced for unusable input: every field
/// unset and no call list attached.
///
/// # Examples
///
/// ```
/// use stack_rail::{LazyCallList, StackTraceRecord};
///
/// let record = StackTraceRecord::new(
///     Some("a.js".into()),
///     Some(10),
///     Some("foo".into()),
///     Some(LazyCallList::empty()),
/// );
///
/// assert_eq!(record.file_path(), Some("a.js"));
/// assert_eq!(record.line_number(), Some(10));
/// assert_eq!(record.function_name(), Some("foo"));
/// assert_eq!(record.stringify_structured_call_list(), "[]");
/// ```
#[must_use]
#[derive(Debug, Clone, Default)]
pub struct StackTraceRecord {
    file_path: Option<String>,
    line_number: Option<u32>,
    function_name: Option<String>,
    call_list: Option<LazyCallList>,
}

impl StackTraceRecord {
    /// Creates a fully populated record.
    #[inline]
    pub fn new(
        file_path: Option<String>,
        line_number: Option<u32>,
        function_name: Option<String>,
        call_list: Option<LazyCallList>,
    ) -> Self {
        Self { file_path, line_number, function_name, call_list }
    }

    /// File of the top frame.
    #[inline]
    pub fn file_path(&self) -> Option<&str> {
        self.file_path.as_deref()
    }

    /// Line of the top frame.
    #[inline]
    pub fn line_number(&self) -> Option<u32> {
        self.line_number
    }

    /// Function executing in the top frame.
    #[inline]
    pub fn function_name(&self) -> Option<&str> {
        self.function_name.as_deref()
    }

    /// The deferred serializer for the full stack, when one was attached.
    #[inline]
    pub fn call_list(&self) -> Option<&LazyCallList> {
        self.call_list.as_ref()
    }

    /// Serializes the full stack into JSON text.
    ///
    /// Records without a call list yield `"[]"`.
    pub fn stringify_structured_call_list(&self) -> String {
        self.call_list.as_ref().map_or_else(|| "[]".into(), LazyCallList::stringify)
    }

    /// Materializes the full stack as records.
    pub fn structured_call_list(&self) -> Vec<FrameRecord> {
        self.call_list.as_ref().map(LazyCallList::frames).unwrap_or_default()
    }

    /// True for the all-default record.
    pub fn is_empty(&self) -> bool {
        self.file_path.is_none()
            && self.line_number.is_none()
            && self.function_name.is_none()
            && self.call_list.is_none()
    }
}

impl Display for StackTraceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let function = self.function_name().unwrap_or("<anonymous>");
        let file = self.file_path().unwrap_or("<unknown>");
        match self.line_number {
            Some(line) => write!(f, "{} ({}:{})", function, file, line),
            None => write!(f, "{} ({})", function, file),
        }
    }
}

impl Serialize for StackTraceRecord {
    /// Emits the top-frame fields and the full stack under `structuredCallList`.
    ///
    /// The stack is materialized while serializing.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("StackTraceRecord", 4)?;
        state.serialize_field("filePath", &self.file_path)?;
        state.serialize_field("lineNumber", &self.line_number)?;
        state.serialize_field("functionName", &self.function_name)?;
        state.serialize_field("structuredCallList", &self.structured_call_list())?;
        state.end()
    }
}
