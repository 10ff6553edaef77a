//! `command-template resolve` — validate and substitute into a vetted command string.

use crate::errors::Error;
use crate::params::parse_params;
use command_template_core::TemplateLoader;
use std::path::Path;

#[cfg(test)]
#[path = "resolve_cmd_tests.rs"]
mod tests;

pub fn execute(config: &Path, name: &str, raw_params: &[String]) -> Result<String, Error> {
    let registry = TemplateLoader::load_from_path(config)?;
    let params = parse_params(raw_params)?;
    let resolved = registry.resolve_command(name, &params)?;
    Ok(resolved.command)
}
