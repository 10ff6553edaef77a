use super::*;
use std::collections::BTreeMap;

fn registry_with_list_dir() -> TemplateRegistry {
    let toml = r#"
[templates.list_dir]
command = "ls -la {path}"

[templates.list_dir.parameters.path]
type = "path"
required = true
allowed_paths = ["/tmp/"]
"#;
    TemplateLoader::load_from_str(toml).unwrap()
}

#[test]
fn scenario_1_allowed_path_resolves() {
    let registry = registry_with_list_dir();
    let mut params = BTreeMap::new();
    params.insert(
        "path".to_string(),
        ParamValue::String("/tmp/work".to_string()),
    );

    let resolved = registry.resolve_command("list_dir", &params).unwrap();
    assert_eq!(resolved.command, "ls -la /tmp/work");
}

#[test]
fn scenario_2_disallowed_path_is_security_violation() {
    let registry = registry_with_list_dir();
    let mut params = BTreeMap::new();
    params.insert(
        "path".to_string(),
        ParamValue::String("/etc/passwd".to_string()),
    );

    let err = registry.resolve_command("list_dir", &params).unwrap_err();
    assert!(matches!(err, Error::SecurityViolation(_)));
}

#[test]
fn scenario_3_dot_dot_is_security_violation_regardless_of_allowed_paths() {
    let registry = registry_with_list_dir();
    let mut params = BTreeMap::new();
    params.insert(
        "path".to_string(),
        ParamValue::String("/tmp/../etc".to_string()),
    );

    let err = registry.resolve_command("list_dir", &params).unwrap_err();
    assert!(matches!(err, Error::SecurityViolation(_)));
}

#[test]
fn scenario_4_string_metacharacter_is_security_violation() {
    let toml = r#"
[templates.greet]
command = "echo {msg}"

[templates.greet.parameters.msg]
type = "string"
max_length = 64
"#;
    let registry = TemplateLoader::load_from_str(toml).unwrap();
    let mut params = BTreeMap::new();
    params.insert(
        "msg".to_string(),
        ParamValue::String("hello; rm -rf /".to_string()),
    );

    let err = registry.resolve_command("greet", &params).unwrap_err();
    assert!(matches!(err, Error::SecurityViolation(_)));
}

#[test]
fn scenario_5_numeric_and_path_params_resolve() {
    let toml = r#"
[templates.count]
command = "head -n {n} {path}"

[templates.count.parameters.n]
type = "int"
min_value = 1
max_value = 1000

[templates.count.parameters.path]
type = "path"
allowed_paths = ["/var/log/"]
"#;
    let registry = TemplateLoader::load_from_str(toml).unwrap();
    let mut params = BTreeMap::new();
    params.insert("n".to_string(), ParamValue::Int(10));
    params.insert(
        "path".to_string(),
        ParamValue::String("/var/log/app.log".to_string()),
    );

    let resolved = registry.resolve_command("count", &params).unwrap();
    assert_eq!(resolved.command, "head -n 10 /var/log/app.log");
}

#[test]
fn scenario_6_numeric_below_min_is_validation_error() {
    let toml = r#"
[templates.count]
command = "head -n {n} {path}"

[templates.count.parameters.n]
type = "int"
min_value = 1
max_value = 1000

[templates.count.parameters.path]
type = "path"
allowed_paths = ["/var/log/"]
"#;
    let registry = TemplateLoader::load_from_str(toml).unwrap();
    let mut params = BTreeMap::new();
    params.insert("n".to_string(), ParamValue::Int(0));
    params.insert(
        "path".to_string(),
        ParamValue::String("/var/log/app.log".to_string()),
    );

    let err = registry.resolve_command("count", &params).unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[test]
fn scenario_7_enum_violation_is_validation_error() {
    let toml = r#"
[templates.mode]
command = "svc {state}"

[templates.mode.parameters.state]
type = "enum"
allowed_values = ["on", "off"]
"#;
    let registry = TemplateLoader::load_from_str(toml).unwrap();
    let mut params = BTreeMap::new();
    params.insert(
        "state".to_string(),
        ParamValue::String("restart".to_string()),
    );

    let err = registry.resolve_command("mode", &params).unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[test]
fn scenario_8_backtick_in_pattern_is_configuration_error_at_load_time() {
    let toml = r#"
[templates.bad]
command = "echo `whoami`"
"#;
    let err = TemplateLoader::load_from_str(toml).unwrap_err();
    assert!(matches!(err, Error::Configuration(_)));
}

#[test]
fn unknown_parameter_is_rejected_before_any_coercion() {
    let registry = registry_with_list_dir();
    let mut params = BTreeMap::new();
    params.insert(
        "path".to_string(),
        ParamValue::String("/tmp/work".to_string()),
    );
    params.insert(
        "extra".to_string(),
        ParamValue::String("unused".to_string()),
    );

    let err = registry.resolve_command("list_dir", &params).unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[test]
fn command_not_found_for_missing_template() {
    let registry = registry_with_list_dir();
    let params = BTreeMap::new();
    let err = registry.resolve_command("does_not_exist", &params).unwrap_err();
    assert!(matches!(err, Error::CommandNotFound(_)));
}

#[test]
fn validate_parameters_is_idempotent() {
    let registry = registry_with_list_dir();
    let mut params = BTreeMap::new();
    params.insert(
        "path".to_string(),
        ParamValue::String("/tmp/work".to_string()),
    );

    let once = registry.validate_parameters("list_dir", &params).unwrap();
    let twice = registry.validate_parameters("list_dir", &once).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn list_templates_is_lexicographically_ordered() {
    let toml = r#"
[templates.zeta]
command = "echo {x}"
[templates.zeta.parameters.x]
type = "string"

[templates.alpha]
command = "echo {x}"
[templates.alpha.parameters.x]
type = "string"
"#;
    let registry = TemplateLoader::load_from_str(toml).unwrap();
    let names: Vec<&str> = registry
        .list_templates(None)
        .iter()
        .map(|t| t.name.as_str())
        .collect();
    assert_eq!(names, vec!["alpha", "zeta"]);
}
