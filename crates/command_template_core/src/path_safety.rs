//! Pure, allocation-only path checks for `path`-typed parameters.
//!
//! Nothing here touches the filesystem. Symlink resolution is a runtime
//! concern delegated to the sandbox; this module only reasons about the
//! text of the path.

use crate::errors::{Error, Result};

#[cfg(test)]
#[path = "path_safety_tests.rs"]
mod tests;

/// Collapses `.` segments and repeated separators, without resolving
/// `..` (the caller rejects any `..` outright before this ever runs) and
/// without touching symlinks.
pub fn normalize_path_lexically(path: &str) -> String {
    let is_absolute = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        if segment.is_empty() || segment == "." {
            continue;
        }
        segments.push(segment);
    }
    let joined = segments.join("/");
    if is_absolute {
        format!("/{joined}")
    } else {
        joined
    }
}

/// True if `path` has `prefix` as a string prefix that ends at a path
/// segment boundary: either `prefix` already ends with `/`, or `path`
/// continues right after the prefix with a `/` (or the two are equal).
pub fn has_prefix_at_boundary(path: &str, prefix: &str) -> bool {
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        return true;
    }
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// Validates a raw path parameter value per the policy:
///
/// 1. reject any `..` occurrence outright,
/// 2. normalize lexically,
/// 3. require the normalized form to be byte-equal to the input (the
///    caller must already supply a canonical path),
/// 4. if `allowed_paths` is non-empty, require a boundary-respecting
///    prefix match against at least one entry,
/// 5. if `forbidden_paths` is non-empty, reject a boundary-respecting
///    prefix match against any entry.
///
/// Every failure is a `SecurityViolation`.
pub fn validate_path(
    param_name: &str,
    raw: &str,
    allowed_paths: &[String],
    forbidden_paths: &[String],
) -> Result<String> {
    if raw.contains("..") {
        return Err(Error::SecurityViolation(format!(
            "parameter '{param_name}' contains '..'"
        )));
    }

    let normalized = normalize_path_lexically(raw);
    if normalized != raw {
        return Err(Error::SecurityViolation(format!(
            "parameter '{param_name}' is not a canonical path (expected '{normalized}')"
        )));
    }

    if !allowed_paths.is_empty() && !allowed_paths.iter().any(|p| has_prefix_at_boundary(raw, p)) {
        return Err(Error::SecurityViolation(format!(
            "parameter '{param_name}' is not within an allowed path"
        )));
    }

    if forbidden_paths.iter().any(|p| has_prefix_at_boundary(raw, p)) {
        return Err(Error::SecurityViolation(format!(
            "parameter '{param_name}' is within a forbidden path"
        )));
    }

    Ok(raw.to_string())
}
