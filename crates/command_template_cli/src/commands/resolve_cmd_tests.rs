use super::*;
use std::io::Write;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn resolves_a_valid_command() {
    let file = write_config(
        r#"
[templates.count]
command = "head -n {n} {path}"

[templates.count.parameters.n]
type = "int"
min_value = 1
max_value = 1000

[templates.count.parameters.path]
type = "path"
allowed_paths = ["/var/log/"]
"#,
    );

    let params = vec!["n=10".to_string(), "path=/var/log/app.log".to_string()];
    let output = execute(file.path(), "count", &params).unwrap();
    assert_eq!(output, "head -n 10 /var/log/app.log");
}

#[test]
fn rejects_an_out_of_range_numeric_parameter() {
    let file = write_config(
        r#"
[templates.count]
command = "head -n {n} {path}"

[templates.count.parameters.n]
type = "int"
min_value = 1
max_value = 1000

[templates.count.parameters.path]
type = "path"
allowed_paths = ["/var/log/"]
"#,
    );

    let params = vec!["n=0".to_string(), "path=/var/log/app.log".to_string()];
    let err = execute(file.path(), "count", &params).unwrap_err();
    assert!(matches!(
        err,
        Error::Core(command_template_core::Error::Validation(_))
    ));
}

#[test]
fn surfaces_command_not_found() {
    let file = write_config(
        r#"
[templates.count]
command = "head -n {n}"
[templates.count.parameters.n]
type = "int"
"#,
    );

    let err = execute(file.path(), "missing", &[]).unwrap_err();
    assert!(matches!(
        err,
        Error::Core(command_template_core::Error::CommandNotFound(_))
    ));
}
