use stack_rail::{capture_top_frame, frame, frames, traced, FrameRecord};

#[test]
fn frame_macro_captures_enclosing_function() {
    let expected_line = line!() + 1;
    let frame = frame!();

    let name = frame.function_name.unwrap();
    assert!(name.ends_with("::frame_macro_captures_enclosing_function"), "got {}", name);
    assert_eq!(frame.method_name, None);
    assert!(frame.file_name.unwrap().replace('\\', "/").ends_with("tests/macros/mod.rs"));
    assert_eq!(frame.line_number, Some(expected_line));
    assert!(frame.column_number.is_some());
}

#[test]
fn frame_macro_inside_closure_names_closure() {
    let make = || frame!();
    let name = make().function_name.unwrap();

    assert!(name.contains("frame_macro_inside_closure_names_closure"));
    assert!(name.contains("{{closure}}"));
}

#[test]
fn frames_macro_keeps_order() {
    let stack = frames![
        FrameRecord::new("inner", "lib.rs", 1, 1),
        FrameRecord::new("outer", "lib.rs", 2, 1),
    ];

    let names: Vec<_> =
        stack.as_frames().unwrap().iter().map(|f| f.function_name.clone().unwrap()).collect();
    assert_eq!(names, ["inner", "outer"]);
}

#[test]
fn frames_macro_accepts_empty_list() {
    let stack: stack_rail::FrameSequence<FrameRecord> = frames![];

    assert!(!stack.is_malformed());
    assert!(capture_top_frame(&"boom", &stack).is_empty());
}

#[test]
fn traced_macro_names_enclosing_function() {
    fn open_socket() -> stack_rail::TracedError<&'static str> {
        traced!("refused")
    }

    let err = open_socket();
    assert_eq!(err.error(), &"refused");
    assert!(err.stack().function_name().unwrap().ends_with("open_socket"));
    assert_eq!(err.stack().structured_call_list().len(), 1);
}
