//! `command-template list` — enumerate the templates in a configuration.

use crate::errors::Error;
use command_template_core::TemplateLoader;
use std::path::Path;

#[cfg(test)]
#[path = "list_cmd_tests.rs"]
mod tests;

pub fn execute(config: &Path, category: Option<&str>) -> Result<String, Error> {
    let registry = TemplateLoader::load_from_path(config)?;
    let templates = registry.list_templates(category);

    if templates.is_empty() {
        return Ok("no templates found".to_string());
    }

    let lines: Vec<String> = templates
        .iter()
        .map(|template| {
            format!(
                "{:<24} {:<16} {}",
                template.name,
                template.category,
                template.description.as_deref().unwrap_or("")
            )
        })
        .collect();

    Ok(lines.join("\n"))
}
