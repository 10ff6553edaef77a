//! Orchestrates validation and substitution into a vetted command string.

use crate::errors::{Error, Result};
use crate::parameter::ParamValue;
use crate::placeholder::substitute;
use crate::template::{ExecutionPolicy, TemplateDefinition, DANGER_CHARS};
use crate::validator;
use std::collections::BTreeMap;

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;

/// A resolved command line together with the template's forwarded
/// execution policy, returned as an opaque bundle for the runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCommand {
    pub command: String,
    pub policy: ExecutionPolicy,
}

/// Validates `params` against every parameter `template` declares.
///
/// Rejects any name in `params` that the template does not declare
/// before validating anything else, so an unknown parameter can never
/// cause a partially-applied side effect. Declared parameters are
/// validated in lexicographic order for deterministic error reporting.
pub(crate) fn validate_parameters(
    template: &TemplateDefinition,
    params: &BTreeMap<String, ParamValue>,
) -> Result<BTreeMap<String, ParamValue>> {
    let unknown: Vec<&str> = params
        .keys()
        .filter(|name| !template.parameters.contains_key(name.as_str()))
        .map(String::as_str)
        .collect();
    if !unknown.is_empty() {
        return Err(Error::Validation(format!(
            "unknown parameters: {}",
            unknown.join(", ")
        )));
    }

    let mut validated = BTreeMap::new();
    for (name, def) in &template.parameters {
        if let Some(value) = validator::validate(name, params.get(name), def)? {
            validated.insert(name.clone(), value);
        }
    }
    Ok(validated)
}

/// Validates `params`, substitutes the result into the template's
/// command pattern, and runs the defense-in-depth post-substitution
/// danger-character sweep.
pub(crate) fn resolve_command(
    template: &TemplateDefinition,
    params: &BTreeMap<String, ParamValue>,
) -> Result<ResolvedCommand> {
    let validated = validate_parameters(template, params)?;

    let stringified: BTreeMap<String, String> = validated
        .iter()
        .map(|(name, value)| (name.clone(), value.stringify()))
        .collect();

    let command = substitute(&template.command, &stringified)?;

    if let Some(c) = command.chars().find(|c| DANGER_CHARS.contains(c)) {
        return Err(Error::SecurityViolation(format!(
            "resolved command for template '{}' contains forbidden character '{c}'",
            template.name
        )));
    }

    Ok(ResolvedCommand {
        command,
        policy: template.policy.clone(),
    })
}
