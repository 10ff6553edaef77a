use super::*;

#[test]
fn normalize_collapses_dot_segments_and_repeated_separators() {
    assert_eq!(normalize_path_lexically("/tmp//foo/./bar"), "/tmp/foo/bar");
    assert_eq!(normalize_path_lexically("/tmp/work"), "/tmp/work");
}

#[test]
fn prefix_boundary_requires_segment_boundary() {
    assert!(has_prefix_at_boundary("/tmp/work", "/tmp"));
    assert!(has_prefix_at_boundary("/tmp/work", "/tmp/"));
    assert!(has_prefix_at_boundary("/tmp", "/tmp"));
    assert!(!has_prefix_at_boundary("/tmpfoo", "/tmp"));
}

#[test]
fn validate_path_rejects_dot_dot_even_without_allowed_paths() {
    let err = validate_path("path", "/tmp/../etc", &[], &[]).unwrap_err();
    assert!(matches!(err, Error::SecurityViolation(_)));
}

#[test]
fn validate_path_rejects_non_canonical_input() {
    let err = validate_path("path", "/tmp//work", &[], &[]).unwrap_err();
    assert!(matches!(err, Error::SecurityViolation(_)));
}

#[test]
fn validate_path_accepts_allowed_prefix() {
    let allowed = vec!["/tmp/".to_string()];
    let result = validate_path("path", "/tmp/work", &allowed, &[]).unwrap();
    assert_eq!(result, "/tmp/work");
}

#[test]
fn validate_path_rejects_path_outside_allowed_paths() {
    let allowed = vec!["/tmp/".to_string()];
    let err = validate_path("path", "/etc/passwd", &allowed, &[]).unwrap_err();
    assert!(matches!(err, Error::SecurityViolation(_)));
}

#[test]
fn validate_path_rejects_forbidden_prefix() {
    let forbidden = vec!["/etc".to_string()];
    let err = validate_path("path", "/etc/passwd", &[], &forbidden).unwrap_err();
    assert!(matches!(err, Error::SecurityViolation(_)));
}
