//! Reads a template configuration document and builds a [`TemplateRegistry`].

use crate::errors::{Error, Result};
use crate::registry::TemplateRegistry;
use crate::template::{ConfigDocument, TemplateDefinition};
use std::collections::BTreeMap;
use std::path::Path;

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;

/// Stateless entry point for building a registry from a TOML document.
///
/// Loading is all-or-nothing: the loader builds a local map and only
/// returns `Ok` once every template has parsed and validated. A
/// partially-built map is dropped on the first error and never observed
/// by a caller.
pub struct TemplateLoader;

impl TemplateLoader {
    /// Parses `source` as a template configuration document and builds a
    /// registry from it. Syntactic errors and any violated load-time
    /// invariant surface as a `Configuration` error naming the offending
    /// template and field.
    pub fn load_from_str(source: &str) -> Result<TemplateRegistry> {
        let document: ConfigDocument = toml::from_str(source)
            .map_err(|e| Error::Configuration(format!("failed to parse template configuration document: {e}")))?;

        let mut templates = BTreeMap::new();
        for (name, dto) in document.templates {
            let definition = TemplateDefinition::from_dto(&name, dto)?;
            templates.insert(name, definition);
        }

        tracing::info!(count = templates.len(), "loaded command templates");
        Ok(TemplateRegistry::new(templates))
    }

    /// Reads the document at `path` and loads it the same way as
    /// [`Self::load_from_str`].
    pub fn load_from_path(path: &Path) -> Result<TemplateRegistry> {
        let source = std::fs::read_to_string(path).map_err(|e| {
            Error::Configuration(format!(
                "failed to read template configuration file '{}': {e}",
                path.display()
            ))
        })?;

        let registry = Self::load_from_str(&source)?;
        tracing::info!(path = %path.display(), "loaded command template configuration file");
        Ok(registry)
    }
}
