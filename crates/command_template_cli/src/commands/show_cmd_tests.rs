use super::*;
use std::io::Write;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn shows_command_pattern_and_parameters() {
    let file = write_config(
        r#"
[templates.greet]
command = "echo {msg}"
description = "Greets someone"

[templates.greet.parameters.msg]
type = "string"
required = true
"#,
    );

    let output = execute(file.path(), "greet").unwrap();
    assert!(output.contains("command: echo {msg}"));
    assert!(output.contains("description: Greets someone"));
    assert!(output.contains("msg: type=String required=true"));
}

#[test]
fn surfaces_command_not_found_for_unknown_template() {
    let file = write_config(
        r#"
[templates.greet]
command = "echo {msg}"
[templates.greet.parameters.msg]
type = "string"
"#,
    );

    let err = execute(file.path(), "missing").unwrap_err();
    assert!(matches!(
        err,
        Error::Core(command_template_core::Error::CommandNotFound(_))
    ));
}
