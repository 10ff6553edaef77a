//! Template definitions: a command pattern, its declared parameters, and
//! the execution policy forwarded opaquely to the sandbox runtime.

use crate::errors::{Error, Result};
use crate::parameter::{ParameterDefinition, ParameterSpecDto};
use crate::placeholder::{extract_placeholder_names, strip_placeholders};
use serde::Deserialize;
use std::collections::BTreeMap;

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;

/// Characters treated as shell-injection vectors wherever untrusted text
/// could end up inside a command line. Shared by the structural check on
/// a freshly-loaded pattern and the resolver's post-substitution sweep.
///
/// This is the broader eight-character set; the narrower five-character
/// set that appears elsewhere is intentionally not used (see the crate's
/// design notes on Universal Invariant 1).
pub const DANGER_CHARS: &[char] = &['`', '$', ';', '&', '|', '<', '>', '\n', '\r'];

/// Execution constraints forwarded to the out-of-scope sandbox runtime.
/// The core does not interpret any of these fields beyond the load-time
/// checks in [`TemplateDefinition::from_dto`].
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionPolicy {
    pub timeout: u64,
    pub memory_limit: Option<String>,
    pub cpu_limit: Option<f64>,
    pub allow_network: bool,
    pub allow_file_write: bool,
    pub sandbox_image: Option<String>,
    pub permissions: BTreeMap<String, String>,
}

impl Default for ExecutionPolicy {
    fn default() -> Self {
        Self {
            timeout: 30,
            memory_limit: None,
            cpu_limit: None,
            allow_network: false,
            allow_file_write: false,
            sandbox_image: None,
            permissions: BTreeMap::new(),
        }
    }
}

/// A named, parameterized command pattern plus its execution policy.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateDefinition {
    pub name: String,
    pub command: String,
    pub description: Option<String>,
    pub category: String,
    pub parameters: BTreeMap<String, ParameterDefinition>,
    pub policy: ExecutionPolicy,
}

/// Wire shape of one template's TOML table.
#[derive(Debug, Deserialize)]
pub(crate) struct TemplateSpecDto {
    pub command: String,
    pub description: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub parameters: BTreeMap<String, ParameterSpecDto>,
    #[serde(default)]
    pub permissions: BTreeMap<String, String>,
    pub timeout: Option<u64>,
    pub memory_limit: Option<String>,
    pub cpu_limit: Option<f64>,
    #[serde(default)]
    pub allow_network: bool,
    #[serde(default)]
    pub allow_file_write: bool,
    pub sandbox_image: Option<String>,
}

/// Top-level shape of the template configuration document: a single
/// `templates` table mapping name to [`TemplateSpecDto`]. TOML itself
/// rejects duplicate keys within that table at parse time.
#[derive(Debug, Deserialize)]
pub(crate) struct ConfigDocument {
    #[serde(default)]
    pub templates: BTreeMap<String, TemplateSpecDto>,
}

/// Validates that a `memory_limit` string is an integer followed by an
/// optional `k`/`m`/`g` suffix (case-insensitive).
fn validate_memory_limit(name: &str, raw: &str) -> Result<()> {
    let digits_end = raw
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(raw.len());
    let (digits, suffix) = raw.split_at(digits_end);
    if digits.is_empty() {
        return Err(Error::Configuration(format!(
            "template '{name}' has memory_limit '{raw}' with no numeric size"
        )));
    }
    match suffix.to_ascii_lowercase().as_str() {
        "" | "k" | "m" | "g" => Ok(()),
        _ => Err(Error::Configuration(format!(
            "template '{name}' has memory_limit '{raw}' with unrecognized suffix '{suffix}'"
        ))),
    }
}

/// Scans `command`, with placeholders first stripped to an empty
/// sentinel, for the unconditional danger set: the shared
/// [`DANGER_CHARS`], a backslash, the literal substring `../`, and a
/// leading whitespace-delimited token of exactly `sudo` or `su`.
fn scan_command_pattern(name: &str, command: &str) -> Result<()> {
    let stripped = strip_placeholders(command);

    if let Some(c) = stripped.chars().find(|c| DANGER_CHARS.contains(c)) {
        return Err(Error::Configuration(format!(
            "template '{name}' command pattern contains forbidden character '{c}'"
        )));
    }
    if stripped.contains('\\') {
        return Err(Error::Configuration(format!(
            "template '{name}' command pattern contains a backslash"
        )));
    }
    if stripped.contains("../") {
        return Err(Error::Configuration(format!(
            "template '{name}' command pattern contains '../'"
        )));
    }

    let first_token = stripped.split_whitespace().next().unwrap_or("");
    if first_token == "sudo" || first_token == "su" {
        return Err(Error::Configuration(format!(
            "template '{name}' command pattern begins with the privileged command '{first_token}'"
        )));
    }

    Ok(())
}

impl TemplateDefinition {
    /// Builds and validates a template definition from its wire shape.
    ///
    /// Enforces: the command pattern is free of the unconditional danger
    /// set once placeholders are stripped; every placeholder in the
    /// pattern has a matching declared parameter and vice versa, each
    /// referenced exactly once; `timeout` and `cpu_limit` are positive;
    /// `memory_limit` parses as a size literal.
    pub(crate) fn from_dto(name: &str, dto: TemplateSpecDto) -> Result<Self> {
        scan_command_pattern(name, &dto.command)?;

        let placeholder_names = extract_placeholder_names(&dto.command)?;
        let mut placeholder_counts: BTreeMap<&str, usize> = BTreeMap::new();
        for p in &placeholder_names {
            *placeholder_counts.entry(p.as_str()).or_insert(0) += 1;
        }

        for (param_name, count) in &placeholder_counts {
            if !dto.parameters.contains_key(*param_name) {
                return Err(Error::Configuration(format!(
                    "template '{name}' references placeholder '{param_name}' with no matching parameter definition"
                )));
            }
            if *count > 1 {
                return Err(Error::Configuration(format!(
                    "template '{name}' references placeholder '{param_name}' more than once"
                )));
            }
        }
        for param_name in dto.parameters.keys() {
            if !placeholder_counts.contains_key(param_name.as_str()) {
                return Err(Error::Configuration(format!(
                    "template '{name}' declares parameter '{param_name}' that is never referenced in its command pattern"
                )));
            }
        }

        let timeout = dto.timeout.unwrap_or(30);
        if timeout == 0 {
            return Err(Error::Configuration(format!(
                "template '{name}' has timeout 0; must be positive"
            )));
        }
        if let Some(cpu) = dto.cpu_limit {
            if cpu <= 0.0 {
                return Err(Error::Configuration(format!(
                    "template '{name}' has cpu_limit {cpu}; must be positive"
                )));
            }
        }
        if let Some(limit) = &dto.memory_limit {
            validate_memory_limit(name, limit)?;
        }

        let mut parameters = BTreeMap::new();
        for (param_name, param_dto) in dto.parameters {
            let definition = ParameterDefinition::from_dto(&param_name, param_dto)?;
            parameters.insert(param_name, definition);
        }

        Ok(Self {
            name: name.to_string(),
            command: dto.command,
            description: dto.description,
            category: dto.category.unwrap_or_else(|| "general".to_string()),
            parameters,
            policy: ExecutionPolicy {
                timeout,
                memory_limit: dto.memory_limit,
                cpu_limit: dto.cpu_limit,
                allow_network: dto.allow_network,
                allow_file_write: dto.allow_file_write,
                sandbox_image: dto.sandbox_image,
                permissions: dto.permissions,
            },
        })
    }
}
