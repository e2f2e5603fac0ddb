//! Macros for capturing frames at the invocation site.
//!
//! - [`macro@crate::frame`] - A [`FrameRecord`](crate::types::FrameRecord) for the current
//!   function, file, line and column.
//! - [`macro@crate::frames`] - A [`FrameSequence`](crate::types::FrameSequence) from a list
//!   of frames, innermost first.
//! - [`macro@crate::traced`] - Wraps an error into a [`TracedError`](crate::types::TracedError)
//!   whose stack is the invocation site.
//!
//! # Examples
//!
//! ```
//! use stack_rail::{capture_top_frame, frame, frames};
//!
//! fn load_config() -> stack_rail::StackTraceRecord {
//!     capture_top_frame(&"config missing", &frames![frame!()])
//! }
//!
//! let record = load_config();
//! assert!(record.function_name().unwrap().ends_with("load_config"));
//! ```

/// Builds a [`FrameRecord`](crate::types::FrameRecord) describing the invocation site.
///
/// The function name is the path of the enclosing function as reported by
/// [`core::any::type_name`]; closures show up as `{{closure}}` segments. The
/// method name is always absent.
///
/// # Examples
///
/// ```
/// use stack_rail::frame;
///
/// fn handler() -> stack_rail::FrameRecord {
///     frame!()
/// }
///
/// let frame = handler();
/// assert!(frame.function_name.unwrap().ends_with("::handler"));
/// assert_eq!(frame.method_name, None);
/// assert!(frame.line_number.is_some());
/// ```
#[macro_export]
macro_rules! frame {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        let name = __type_name_of(__here);
        let name = name.strip_suffix("::__here").unwrap_or(name);
        $crate::types::FrameRecord {
            function_name: ::core::option::Option::Some($crate::__private::String::from(name)),
            method_name: ::core::option::Option::None,
            file_name: ::core::option::Option::Some($crate::__private::String::from(file!())),
            line_number: ::core::option::Option::Some(line!()),
            column_number: ::core::option::Option::Some(column!()),
        }
    }};
}

/// Builds a [`FrameSequence`](crate::types::FrameSequence) from frames listed innermost first.
///
/// # Examples
///
/// ```
/// use stack_rail::{frames, FrameRecord};
///
/// let stack = frames![
///     FrameRecord::new("inner", "lib.rs", 2, 1),
///     FrameRecord::new("outer", "lib.rs", 9, 1),
/// ];
/// assert_eq!(stack.len(), 2);
/// assert_eq!(stack.top().unwrap().function_name.as_deref(), Some("inner"));
/// ```
#[macro_export]
macro_rules! frames {
    ($($frame:expr),* $(,)?) => {
        $crate::types::FrameSequence::from($crate::__private::vec![$($frame),*])
    };
}

/// Wraps an error into a [`TracedError`](crate::types::TracedError) captured at the
/// invocation site, enclosing function name included.
///
/// # Examples
///
/// ```
/// use stack_rail::traced;
///
/// fn connect() -> Result<(), stack_rail::TracedError<&'static str>> {
///     Err(traced!("connection refused"))
/// }
///
/// let err = connect().unwrap_err();
/// assert_eq!(err.error(), &"connection refused");
/// assert!(err.stack().function_name().unwrap().ends_with("connect"));
/// ```
#[macro_export]
macro_rules! traced {
    ($error:expr $(,)?) => {{
        let error = $error;
        let stack = $crate::capture::capture_top_frame(&error, &$crate::frames![$crate::frame!()]);
        $crate::types::TracedError::new(error, stack)
    }};
}
