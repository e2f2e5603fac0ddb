//! Plain, owned snapshot of one stack frame.
use core::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::traits::CallSite;
use crate::types::alloc_type::{Cow, String};

/// Owned copy of the five accessor values of one frame descriptor.
///
/// Serializes as a JSON object with exactly the keys `functionName`,
/// `methodName`, `fileName`, `lineNumber` and `columnNumber`. Absent values
/// are written as `null` rather than omitted.
///
/// `FrameRecord` is also a [`CallSite`], so decoded call lists can be fed
/// back in as frame descriptors.
///
/// # Examples
///
/// ```
/// use stack_rail::FrameRecord;
///
/// let frame = FrameRecord::new("foo", "a.js", 10, 2);
/// let json = serde_json::to_string(&frame).unwrap();
/// assert_eq!(
///     json,
///     r#"{"functionName":"foo","methodName":null,"fileName":"a.js","lineNumber":10,"columnNumber":2}"#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FrameRecord {
    pub function_name: Option<String>,
    pub method_name: Option<String>,
    pub file_name: Option<String>,
    pub line_number: Option<u32>,
    pub column_number: Option<u32>,
}

impl FrameRecord {
    /// Creates a frame with a function name and full source position.
    #[inline]
    pub fn new<N, P>(function_name: N, file_name: P, line_number: u32, column_number: u32) -> Self
    where
        N: Into<String>,
        P: Into<String>,
    {
        Self {
            function_name: Some(function_name.into()),
            method_name: None,
            file_name: Some(file_name.into()),
            line_number: Some(line_number),
            column_number: Some(column_number),
        }
    }

    /// Sets the method name the function was invoked through.
    #[inline]
    pub fn with_method<M: Into<String>>(mut self, method_name: M) -> Self {
        self.method_name = Some(method_name.into());
        self
    }

    /// Copies every accessor of `site` into a new record.
    pub fn from_call_site<C: CallSite + ?Sized>(site: &C) -> Self {
        Self {
            function_name: site.function_name().map(Cow::into_owned),
            method_name: site.method_name().map(Cow::into_owned),
            file_name: site.file_name().map(Cow::into_owned),
            line_number: site.line_number(),
            column_number: site.column_number(),
        }
    }
}

impl CallSite for FrameRecord {
    #[inline]
    fn function_name(&self) -> Option<Cow<'_, str>> {
        self.function_name.as_deref().map(Cow::Borrowed)
    }

    #[inline]
    fn method_name(&self) -> Option<Cow<'_, str>> {
        self.method_name.as_deref().map(Cow::Borrowed)
    }

    #[inline]
    fn file_name(&self) -> Option<Cow<'_, str>> {
        self.file_name.as_deref().map(Cow::Borrowed)
    }

    #[inline]
    fn line_number(&self) -> Option<u32> {
        self.line_number
    }

    #[inline]
    fn column_number(&self) -> Option<u32> {
        self.column_number
    }
}

impl Display for FrameRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let function = self.function_name.as_deref().unwrap_or("<anonymous>");
        let file = self.file_name.as_deref().unwrap_or("<unknown>");
        write!(f, "{} ({}", function, file)?;
        if let Some(line) = self.line_number {
            write!(f, ":{}", line)?;
            if let Some(column) = self.column_number {
                write!(f, ":{}", column)?;
            }
        }
        f.write_str(")")
    }
}
