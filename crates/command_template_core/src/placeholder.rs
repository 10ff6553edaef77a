//! Placeholder parsing and substitution for command patterns.
//!
//! Placeholder syntax is exactly `{name}`: no conditionals, no filters,
//! no nesting. Braces must balance, and there is currently no escape for
//! a literal brace in a command pattern.

use crate::errors::{Error, Result};
use std::collections::BTreeMap;

#[cfg(test)]
#[path = "placeholder_tests.rs"]
mod tests;

/// Extracts the ordered list of `{name}` placeholders appearing in `command`.
///
/// A name may appear more than once in the list if the pattern repeats a
/// placeholder; callers that enforce "referenced exactly once" do so by
/// inspecting the result, not by this function deduplicating it.
pub fn extract_placeholder_names(command: &str) -> Result<Vec<String>> {
    let mut names = Vec::new();
    let mut chars = command.char_indices().peekable();
    let mut depth = 0usize;
    let mut current = String::new();

    while let Some((_, ch)) = chars.next() {
        match ch {
            '{' => {
                if depth > 0 {
                    return Err(Error::Configuration(
                        "command pattern contains nested '{'".to_string(),
                    ));
                }
                depth = 1;
                current.clear();
            }
            '}' => {
                if depth == 0 {
                    return Err(Error::Configuration(
                        "command pattern contains unmatched '}'".to_string(),
                    ));
                }
                depth = 0;
                if current.is_empty() {
                    return Err(Error::Configuration(
                        "command pattern contains an empty placeholder '{}'".to_string(),
                    ));
                }
                names.push(current.clone());
            }
            _ if depth == 1 => current.push(ch),
            _ => {}
        }
    }

    if depth != 0 {
        return Err(Error::Configuration(
            "command pattern contains an unmatched '{'".to_string(),
        ));
    }

    Ok(names)
}

/// Replaces every `{name}` placeholder with an empty sentinel, so that a
/// structural scan of the pattern for dangerous characters cannot be
/// defeated by characters hiding inside a placeholder's own name.
pub fn strip_placeholders(command: &str) -> String {
    let mut result = String::with_capacity(command.len());
    let mut depth = 0usize;
    for ch in command.chars() {
        match ch {
            '{' => depth = 1,
            '}' => depth = 0,
            _ if depth == 1 => {}
            _ => result.push(ch),
        }
    }
    result
}

/// Substitutes every `{name}` placeholder in `command` with its bound
/// value from `values`. A placeholder with no binding is a `Validation`
/// error; this should be unreachable given a loaded template's
/// invariants, but the resolver does not trust that statically.
pub fn substitute(command: &str, values: &BTreeMap<String, String>) -> Result<String> {
    let mut result = String::with_capacity(command.len());
    let mut depth = 0usize;
    let mut current = String::new();

    for ch in command.chars() {
        match ch {
            '{' => {
                depth = 1;
                current.clear();
            }
            '}' => {
                depth = 0;
                let value = values.get(&current).ok_or_else(|| {
                    Error::Validation(format!("no value bound for placeholder '{current}'"))
                })?;
                result.push_str(value);
            }
            _ if depth == 1 => current.push(ch),
            _ => result.push(ch),
        }
    }

    Ok(result)
}
