//! Command template engine core.
//!
//! This crate owns the parts of a secure command-execution surface that
//! never touch I/O or process spawning: parsing a TOML document of
//! command templates, validating caller-supplied parameters against the
//! declared shape for a template, and resolving a validated parameter
//! set into a fully substituted, shell-injection-checked command line.
//!
//! Spawning the resolved command is deliberately out of scope here; see
//! the workspace's CLI crate for that.
//!
//! # Pipeline
//!
//! ```rust
//! use command_template_core::{TemplateLoader, ParamValue};
//! use std::collections::BTreeMap;
//!
//! let toml = r#"
//! [templates.list_dir]
//! command = "ls -la {path}"
//!
//! [templates.list_dir.parameters.path]
//! type = "path"
//! required = true
//! allowed_paths = ["/srv/data"]
//! "#;
//!
//! let registry = TemplateLoader::load_from_str(toml).unwrap();
//!
//! let mut params = BTreeMap::new();
//! params.insert("path".to_string(), ParamValue::String("/srv/data/reports".to_string()));
//!
//! let resolved = registry.resolve_command("list_dir", &params).unwrap();
//! assert_eq!(resolved.command, "ls -la /srv/data/reports");
//! ```

mod errors;
mod loader;
mod parameter;
mod path_safety;
mod placeholder;
mod registry;
mod resolver;
mod template;
mod validator;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

pub use errors::{Error, Result};
pub use loader::TemplateLoader;
pub use parameter::{ParamValue, ParameterDefinition, ParameterType};
pub use registry::TemplateRegistry;
pub use resolver::ResolvedCommand;
pub use template::{ExecutionPolicy, TemplateDefinition};
