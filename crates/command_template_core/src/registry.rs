//! The immutable, process-lifetime mapping from template name to
//! template definition.

use crate::errors::{Error, Result};
use crate::parameter::ParamValue;
use crate::resolver::{self, ResolvedCommand};
use crate::template::TemplateDefinition;
use std::collections::BTreeMap;

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;

/// Constructed once by a [`crate::TemplateLoader`] and never mutated
/// afterwards. Every field is plain owned data, so `TemplateRegistry` is
/// `Send + Sync` by construction and a caller can share it across
/// threads behind an `Arc` without any extra synchronization.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateRegistry {
    templates: BTreeMap<String, TemplateDefinition>,
}

impl TemplateRegistry {
    pub(crate) fn new(templates: BTreeMap<String, TemplateDefinition>) -> Self {
        Self { templates }
    }

    /// Looks up a template by its exact, case-sensitive name.
    pub fn get_template(&self, name: &str) -> Result<&TemplateDefinition> {
        self.templates
            .get(name)
            .ok_or_else(|| Error::CommandNotFound(name.to_string()))
    }

    /// Lists templates in deterministic, lexicographic-by-name order,
    /// optionally filtered to a single category.
    pub fn list_templates(&self, category: Option<&str>) -> Vec<&TemplateDefinition> {
        self.templates
            .values()
            .filter(|t| category.map_or(true, |c| t.category == c))
            .collect()
    }

    /// Validates `params` against the named template's declared
    /// parameters without substituting anything.
    pub fn validate_parameters(
        &self,
        name: &str,
        params: &BTreeMap<String, ParamValue>,
    ) -> Result<BTreeMap<String, ParamValue>> {
        let template = self.get_template(name)?;
        resolver::validate_parameters(template, params)
    }

    /// Validates `params` and resolves the named template into a vetted
    /// command string plus its execution policy.
    pub fn resolve_command(
        &self,
        name: &str,
        params: &BTreeMap<String, ParamValue>,
    ) -> Result<ResolvedCommand> {
        let template = self.get_template(name)?;
        let resolved = resolver::resolve_command(template, params)?;
        tracing::info!(
            template = name,
            command = %resolved.command,
            "resolved command template"
        );
        Ok(resolved)
    }
}
