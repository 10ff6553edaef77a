//! Parameter definitions: the typed contract a template declares for one
//! of its named placeholders.

use crate::errors::{Error, Result};
use regex::Regex;
use serde::Deserialize;

#[cfg(test)]
#[path = "parameter_tests.rs"]
mod tests;

/// The six value shapes a parameter may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterType {
    String,
    Int,
    Float,
    Bool,
    Path,
    Enum,
}

impl ParameterType {
    fn from_str(name: &str, raw: &str) -> Result<Self> {
        match raw {
            "string" => Ok(Self::String),
            "int" => Ok(Self::Int),
            "float" => Ok(Self::Float),
            "bool" => Ok(Self::Bool),
            "path" => Ok(Self::Path),
            "enum" => Ok(Self::Enum),
            other => Err(Error::Configuration(format!(
                "parameter '{name}' has unknown type '{other}'; expected one of string, int, float, bool, path, enum"
            ))),
        }
    }
}

/// A coerced parameter value. Path values are represented as `String`
/// after validation; there is no separate `Path` variant because by the
/// time a value is safe to hand to callers it is just a vetted string.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl ParamValue {
    /// Renders the value in its canonical textual form, used both for
    /// `string`-type coercion of non-string inputs and for substitution
    /// into a command pattern.
    pub fn stringify(&self) -> String {
        match self {
            ParamValue::String(s) => s.clone(),
            ParamValue::Int(i) => i.to_string(),
            ParamValue::Float(f) => f.to_string(),
            ParamValue::Bool(b) => b.to_string(),
        }
    }
}

/// A regular expression that a string parameter must match in full,
/// compiled once at load time and anchored so that a pattern author's
/// `\d+` cannot accidentally match only a prefix of the input.
#[derive(Debug, Clone)]
pub struct AnchoredPattern {
    source: String,
    regex: Regex,
}

impl AnchoredPattern {
    pub fn compile(source: &str) -> Result<Self> {
        let anchored = format!("^(?:{source})$");
        let regex = Regex::new(&anchored).map_err(|e| {
            Error::Configuration(format!("pattern '{source}' failed to compile: {e}"))
        })?;
        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    pub fn is_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

impl PartialEq for AnchoredPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

/// One formal parameter's validation contract.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterDefinition {
    pub param_type: ParameterType,
    pub required: bool,
    pub default: Option<ParamValue>,
    pub description: Option<String>,
    pub min_length: Option<u64>,
    pub max_length: Option<u64>,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
    pub pattern: Option<AnchoredPattern>,
    pub allowed_values: Vec<ParamValue>,
    pub allowed_paths: Vec<String>,
    pub forbidden_paths: Vec<String>,
}

/// Wire shape of a parameter declaration inside a template's TOML table.
///
/// Deserialized first, then converted and validated by [`ParameterDefinition::from_dto`].
#[derive(Debug, Deserialize)]
pub(crate) struct ParameterSpecDto {
    #[serde(rename = "type")]
    pub type_name: String,
    pub required: Option<bool>,
    pub default: Option<toml::Value>,
    pub description: Option<String>,
    pub min_length: Option<u64>,
    pub max_length: Option<u64>,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
    pub pattern: Option<String>,
    pub allowed_values: Option<Vec<toml::Value>>,
    #[serde(default)]
    pub allowed_paths: Vec<String>,
    #[serde(default)]
    pub forbidden_paths: Vec<String>,
}

/// Converts a raw TOML value into the `ParamValue` shape implied by
/// `param_type`. Used for a parameter's `default` and an `enum`'s
/// `allowed_values` at load time, where the value arrives as untyped TOML.
pub(crate) fn toml_to_param_value(
    param_name: &str,
    param_type: ParameterType,
    value: &toml::Value,
) -> Result<ParamValue> {
    match param_type {
        ParameterType::Int => value
            .as_integer()
            .map(ParamValue::Int)
            .ok_or_else(|| config_type_mismatch(param_name, "int", value)),
        ParameterType::Float => value
            .as_float()
            .map(ParamValue::Float)
            .or_else(|| value.as_integer().map(|i| ParamValue::Float(i as f64)))
            .ok_or_else(|| config_type_mismatch(param_name, "float", value)),
        ParameterType::Bool => value
            .as_bool()
            .map(ParamValue::Bool)
            .ok_or_else(|| config_type_mismatch(param_name, "bool", value)),
        ParameterType::String | ParameterType::Path | ParameterType::Enum => value
            .as_str()
            .map(|s| ParamValue::String(s.to_string()))
            .ok_or_else(|| config_type_mismatch(param_name, "string", value)),
    }
}

fn config_type_mismatch(param_name: &str, expected: &str, found: &toml::Value) -> Error {
    Error::Configuration(format!(
        "parameter '{param_name}' declares type {expected} but its default/allowed_values entry is {found:?}"
    ))
}

impl ParameterDefinition {
    /// Builds and validates a parameter definition from its wire shape,
    /// enforcing the load-time invariants: `enum` needs a non-empty
    /// `allowed_values`, bounds must be ordered, and any `pattern` must
    /// compile.
    pub(crate) fn from_dto(name: &str, dto: ParameterSpecDto) -> Result<Self> {
        let param_type = ParameterType::from_str(name, &dto.type_name)?;

        if let (Some(min), Some(max)) = (dto.min_length, dto.max_length) {
            if min > max {
                return Err(Error::Configuration(format!(
                    "parameter '{name}' has min_length {min} greater than max_length {max}"
                )));
            }
        }
        if let (Some(min), Some(max)) = (dto.min_value, dto.max_value) {
            if min > max {
                return Err(Error::Configuration(format!(
                    "parameter '{name}' has min_value {min} greater than max_value {max}"
                )));
            }
        }

        let pattern = dto
            .pattern
            .as_deref()
            .map(AnchoredPattern::compile)
            .transpose()?;

        let allowed_values = match (&param_type, &dto.allowed_values) {
            (ParameterType::Enum, Some(values)) if !values.is_empty() => values
                .iter()
                .map(|v| toml_to_param_value(name, param_type, v))
                .collect::<Result<Vec<_>>>()?,
            (ParameterType::Enum, _) => {
                return Err(Error::Configuration(format!(
                    "parameter '{name}' is of type enum and must declare a non-empty allowed_values"
                )));
            }
            (_, None) => Vec::new(),
            (_, Some(values)) => values
                .iter()
                .map(|v| toml_to_param_value(name, param_type, v))
                .collect::<Result<Vec<_>>>()?,
        };

        let default = dto
            .default
            .as_ref()
            .map(|v| toml_to_param_value(name, param_type, v))
            .transpose()?;

        Ok(Self {
            param_type,
            required: dto.required.unwrap_or(false),
            default,
            description: dto.description,
            min_length: dto.min_length,
            max_length: dto.max_length,
            min_value: dto.min_value,
            max_value: dto.max_value,
            pattern,
            allowed_values,
            allowed_paths: dto.allowed_paths,
            forbidden_paths: dto.forbidden_paths,
        })
    }
}
