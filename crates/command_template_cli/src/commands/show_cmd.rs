//! `command-template show` — describe one template's pattern, parameters, and policy.

use crate::errors::Error;
use command_template_core::TemplateLoader;
use std::path::Path;

#[cfg(test)]
#[path = "show_cmd_tests.rs"]
mod tests;

pub fn execute(config: &Path, name: &str) -> Result<String, Error> {
    let registry = TemplateLoader::load_from_path(config)?;
    let template = registry.get_template(name)?;

    let mut lines = vec![
        format!("name: {}", template.name),
        format!("command: {}", template.command),
        format!("category: {}", template.category),
    ];
    if let Some(description) = &template.description {
        lines.push(format!("description: {description}"));
    }
    lines.push(format!("timeout: {}s", template.policy.timeout));
    lines.push(format!("allow_network: {}", template.policy.allow_network));
    lines.push(format!(
        "allow_file_write: {}",
        template.policy.allow_file_write
    ));

    lines.push("parameters:".to_string());
    for (param_name, def) in &template.parameters {
        lines.push(format!(
            "  {param_name}: type={:?} required={}",
            def.param_type, def.required
        ));
    }

    Ok(lines.join("\n"))
}
