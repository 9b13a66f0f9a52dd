use selfref_containers::{ElementKind, console::Console};
use tempfile::tempdir;

fn run(script: &str, preset: Option<ElementKind>) -> String {
    let mut console = Console::new(script.as_bytes(), Vec::new());
    console.run(preset).unwrap();
    String::from_utf8(console.into_output()).unwrap()
}

fn assert_in_order(output: &str, expected: &[&str]) {
    let mut rest = output;
    for x in expected {
        match rest.find(x) {
            Some(i) => rest = &rest[i + x.len()..],
            None => panic!("'{x}' is missing or out of order in:\n{output}"),
        }
    }
}

#[test]
fn exit_immediately() {
    let output = run("0\n", None);
    assert!(output.contains("Select element type"));
    assert!(!output.contains("Error"));
}

#[test]
fn end_of_input_exits() {
    assert!(run("", None).contains("Select element type"));
    assert!(run("1\n1\n1\n", None).contains("Value: "));
}

#[test]
fn integer_stack() {
    let script = "1\n1\n1 10\n1 20\n3\n4\n2\n4\n2\n2\n4\n0\n0\n0\n";
    let output = run(script, None);
    assert_in_order(
        &output,
        &[
            "Top: 20",
            "20 10",
            "Choice: 10\n",
            "Error: container is empty",
            "Stack is empty",
        ],
    );
}

#[test]
fn stack_sort_and_bad_values() {
    let script = "1\n1\n1 5\n1 abc\n1 3\n1 4\n7\n4\n9\n0\n0\n0\n";
    let output = run(script, None);
    assert_in_order(
        &output,
        &[
            "Error: 'abc' is not a valid int",
            "3 4 5",
            "Unknown command: 9",
        ],
    );
}

#[test]
fn float_queue() {
    let script = "2\n2\n1 2.5\n1 -1\n1 0.25\n3\n4\n5\n4\n2\n2\n2\n2\n3\n0\n0\n0\n";
    let output = run(script, None);
    assert_in_order(
        &output,
        &[
            "Front: 2.5",
            "2.5 -1 0.25",
            "-1 0.25 2.5",
            "Error: container is empty",
            "Error: container is empty",
        ],
    );
}

#[test]
fn string_list() {
    let script = "4\n3\n1\nhello world\n1 bye\n1\nhello world\n4\n2\nbye\n2\nnope\n3\nhello world\n4\n3\nhello world\n0\n0\n0\n";
    let output = run(script, None);
    assert_in_order(
        &output,
        &[
            "hello world bye hello world",
            "Found: bye",
            "Not found",
            "Removed 2 element(s)",
            "Choice: bye\n",
            "Error: element not found",
        ],
    );
}

#[test]
fn string_stack_cannot_be_saved() {
    let script = "1\n1 x\n5 stack.bin\n6 stack.bin\n0\n0\n";
    let output = run(script, Some(ElementKind::Text));
    assert_in_order(
        &output,
        &[
            "Error: a stack of string elements cannot be saved or loaded",
            "Error: a stack of string elements cannot be saved or loaded",
        ],
    );
}

#[test]
fn char_stack_save_and_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("chars.bin");
    let path = path.display();

    let script = format!(
        "1\n1 a\n1 b\n5 {path}\n2\n2\n4\n6 {path}\n4\n6 {path}.missing\n4\n0\n0\n"
    );
    let output = run(&script, Some(ElementKind::Character));
    assert_in_order(
        &output,
        &[
            "Stack is empty",
            "b a",
            "Error: file operation failed",
            "b a",
        ],
    );
}

#[test]
fn containers_are_kept_per_type_session() {
    // back to the type selection and into the same type again starts afresh
    let script = "1\n1\n1 1\n0\n0\n1\n1\n4\n0\n0\n0\n";
    let output = run(script, None);
    assert!(output.contains("Stack is empty"));

    // switching between containers of the same session keeps them
    let script = "1\n1\n1 1\n0\n2\n1 2\n0\n1\n4\n0\n2\n4\n0\n0\n0\n";
    let output = run(script, None);
    assert_in_order(&output, &["Choice: 1\n", "Choice: 2\n"]);
}
