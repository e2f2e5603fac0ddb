use stack_rail::{FrameRecord, FrameSequence, ResultStackExt, StackFormatterRegistry};

#[test]
fn traced_records_call_site_on_error() {
    let result: Result<(), &str> = Err("denied");
    let line = line!() + 1;
    let err = result.traced().unwrap_err();

    assert_eq!(err.error(), &"denied");
    assert_eq!(err.stack().line_number(), Some(line));
    assert!(err.stack().file_path().unwrap().replace('\\', "/").ends_with("tests/traits/result_ext.rs"));
}

#[test]
fn traced_leaves_success_untouched() {
    let result: Result<u8, &str> = Ok(7);

    assert_eq!(result.traced().unwrap(), 7);
}

#[test]
fn traced_with_runs_registry_formatter() {
    let registry = StackFormatterRegistry::with_default();
    let frames = FrameSequence::from(vec![FrameRecord::new("query", "db.rs", 88, 13)]);

    let err = Err::<(), _>("timeout").traced_with(&registry, frames).unwrap_err();
    assert_eq!(err.stack().function_name(), Some("query"));
    assert_eq!(err.stack().line_number(), Some(88));
}

#[test]
fn traced_with_without_formatter_attaches_default_record() {
    let registry = StackFormatterRegistry::new();
    let frames = FrameSequence::from(vec![FrameRecord::new("query", "db.rs", 88, 13)]);

    let err = Err::<(), _>("timeout").traced_with(&registry, frames).unwrap_err();
    assert!(err.stack().is_empty());
}
