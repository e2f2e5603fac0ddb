use crate::support::{foo_bar_frames, MutableFrame};
use serde_json::{json, Value};
use stack_rail::{capture_top_frame, make_serializer, FrameRecord, FrameSequence};
use std::sync::Arc;

fn parse(text: &str) -> Value {
    serde_json::from_str(text).unwrap()
}

#[test]
fn capture_reads_top_frame_and_serializes_whole_stack() {
    let frames = FrameSequence::from(foo_bar_frames());
    let record = capture_top_frame(&"boom", &frames);

    assert_eq!(record.file_path(), Some("a.js"));
    assert_eq!(record.line_number(), Some(10));
    assert_eq!(record.function_name(), Some("foo"));

    let json = parse(&record.stringify_structured_call_list());
    assert_eq!(
        json,
        json!([
            {
                "functionName": "foo",
                "methodName": null,
                "fileName": "a.js",
                "lineNumber": 10,
                "columnNumber": 2
            },
            {
                "functionName": "bar",
                "methodName": null,
                "fileName": "a.js",
                "lineNumber": 20,
                "columnNumber": 4
            }
        ])
    );
}

#[test]
fn capture_of_non_array_input_returns_default_record() {
    let frames = FrameSequence::from_json_value(json!("not an array"));
    let record = capture_top_frame(&"boom", &frames);

    assert!(record.is_empty());
    assert_eq!(record.file_path(), None);
    assert_eq!(record.line_number(), None);
    assert_eq!(record.function_name(), None);
    assert!(record.call_list().is_none());
    assert_eq!(record.stringify_structured_call_list(), "[]");
}

#[test]
fn capture_of_empty_sequence_matches_malformed_input() {
    let frames = FrameSequence::<FrameRecord>::from(Vec::new());
    let record = capture_top_frame(&"boom", &frames);

    assert!(record.is_empty());
    assert_eq!(record.stringify_structured_call_list(), "[]");
}

#[test]
fn capture_top_frame_is_independent_of_stack_depth() {
    let single = FrameSequence::from(vec![FrameRecord::new("foo", "a.js", 10, 2)]);
    let deep = FrameSequence::from(vec![
        FrameRecord::new("foo", "a.js", 10, 2),
        FrameRecord::new("bar", "b.js", 1, 1),
        FrameRecord::new("baz", "c.js", 2, 2),
    ]);

    for frames in [single, deep] {
        let record = capture_top_frame(&"boom", &frames);
        assert_eq!(record.file_path(), Some("a.js"));
        assert_eq!(record.line_number(), Some(10));
        assert_eq!(record.function_name(), Some("foo"));
        assert_eq!(record.structured_call_list().len(), frames.len());
    }
}

#[test]
fn capture_passes_absent_top_frame_values_through() {
    let frames = FrameSequence::from(vec![FrameRecord::default()]);
    let record = capture_top_frame(&"boom", &frames);

    assert_eq!(record.file_path(), None);
    assert_eq!(record.function_name(), None);
    assert!(record.call_list().is_some());
    assert_eq!(
        parse(&record.stringify_structured_call_list()),
        json!([{
            "functionName": null,
            "methodName": null,
            "fileName": null,
            "lineNumber": null,
            "columnNumber": null
        }])
    );
}

#[test]
fn capture_reads_only_the_top_frame_eagerly() {
    let top = Arc::new(MutableFrame::new(FrameRecord::new("foo", "a.js", 10, 2)));
    let below = Arc::new(MutableFrame::new(FrameRecord::new("bar", "a.js", 20, 4)));
    let frames = FrameSequence::from(vec![Arc::clone(&top), Arc::clone(&below)]);

    let record = capture_top_frame(&"boom", &frames);
    assert_eq!(top.reads(), 3);
    assert_eq!(below.reads(), 0);

    record.stringify_structured_call_list();
    assert_eq!(top.reads(), 8);
    assert_eq!(below.reads(), 5);
}

#[test]
fn serializer_returns_empty_array_for_every_non_array_value() {
    let inputs = [
        json!(null),
        json!(42),
        json!(true),
        json!("not an array"),
        json!({ "functionName": "foo" }),
        json!([1, 2, 3]),
    ];

    for input in inputs {
        let frames = FrameSequence::from_json_value(input.clone());
        assert!(frames.is_malformed(), "expected malformed for {}", input);
        assert_eq!(make_serializer(frames).stringify(), "[]");
    }

    assert_eq!(make_serializer(FrameSequence::<FrameRecord>::Malformed).stringify(), "[]");
    assert_eq!(make_serializer(FrameSequence::from(None::<Vec<FrameRecord>>)).stringify(), "[]");
}

#[test]
fn serializer_of_empty_array_is_empty_json_array() {
    let frames = FrameSequence::from_json_value(json!([]));

    assert!(!frames.is_malformed());
    assert_eq!(make_serializer(frames).stringify(), "[]");
}

#[test]
fn serializer_keeps_order_and_exact_keys() {
    let input: Vec<FrameRecord> = (1..=5)
        .map(|i| FrameRecord::new(format!("f{}", i), "deep.rs", i * 10, i).with_method("call"))
        .collect();
    let json = parse(&make_serializer(FrameSequence::from(input.clone())).stringify());

    let items = json.as_array().unwrap();
    assert_eq!(items.len(), input.len());
    for (item, frame) in items.iter().zip(&input) {
        let object = item.as_object().unwrap();
        let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["columnNumber", "fileName", "functionName", "lineNumber", "methodName"]);
        assert_eq!(&serde_json::from_value::<FrameRecord>(item.clone()).unwrap(), frame);
    }
}

#[test]
fn serializer_does_no_work_until_invoked() {
    let frame = Arc::new(MutableFrame::new(FrameRecord::new("foo", "a.js", 10, 2)));
    let call_list = make_serializer(FrameSequence::from(vec![Arc::clone(&frame)]));

    assert_eq!(frame.reads(), 0);
    call_list.stringify();
    assert_eq!(frame.reads(), 5);
}

#[test]
fn serializer_is_idempotent_and_reads_through() {
    let frame = Arc::new(MutableFrame::new(FrameRecord::new("foo", "a.js", 10, 2)));
    let call_list = make_serializer(FrameSequence::from(vec![Arc::clone(&frame)]));

    let first = call_list.stringify();
    assert_eq!(first, call_list.stringify());

    frame.set_line(99);
    let after = parse(&call_list.stringify());
    assert_eq!(after[0]["lineNumber"], 99);
    assert_ne!(first, call_list.stringify());
}

#[test]
fn serializer_keeps_frames_alive() {
    let call_list = {
        let frames = FrameSequence::from(foo_bar_frames());
        make_serializer(frames)
    };

    assert_eq!(call_list.frames(), foo_bar_frames());
}
