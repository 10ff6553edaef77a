//! `command-template validate` — check a parameter map without resolving it.

use crate::errors::Error;
use crate::params::parse_params;
use command_template_core::TemplateLoader;
use std::path::Path;

#[cfg(test)]
#[path = "validate_cmd_tests.rs"]
mod tests;

pub fn execute(config: &Path, name: &str, raw_params: &[String]) -> Result<String, Error> {
    let registry = TemplateLoader::load_from_path(config)?;
    let params = parse_params(raw_params)?;
    registry.validate_parameters(name, &params)?;
    Ok(format!("parameters for template '{name}' are valid"))
}
