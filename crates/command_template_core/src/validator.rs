//! The parameter validator: `(name, raw value, definition) -> value | error`.

use crate::errors::{Error, Result};
use crate::parameter::{AnchoredPattern, ParamValue, ParameterDefinition, ParameterType};
use crate::path_safety::validate_path;
use crate::template::DANGER_CHARS as STRING_DANGER_CHARS;

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;

/// Validates one raw parameter value against its definition, returning
/// the coerced, constraint-checked value, or `None` when the parameter
/// is absent, optional, and has no default.
///
/// `raw` is `None` when the caller's parameter map has no entry for `name`.
pub fn validate(
    name: &str,
    raw: Option<&ParamValue>,
    def: &ParameterDefinition,
) -> Result<Option<ParamValue>> {
    let value = match raw {
        Some(v) => v.clone(),
        None => match &def.default {
            Some(default) => default.clone(),
            None => {
                if def.required {
                    return Err(Error::Validation(format!(
                        "parameter '{name}' is required"
                    )));
                }
                return Ok(None);
            }
        },
    };

    let coerced = coerce(name, &value, def.param_type)?;

    match def.param_type {
        ParameterType::String => validate_string(name, &coerced, def)?,
        ParameterType::Int | ParameterType::Float => validate_numeric(name, &coerced, def)?,
        ParameterType::Bool => {}
        ParameterType::Path => {
            let path = coerced.stringify();
            let validated = validate_path(name, &path, &def.allowed_paths, &def.forbidden_paths)?;
            return Ok(Some(ParamValue::String(validated)));
        }
        ParameterType::Enum => validate_enum(name, &coerced, def)?,
    }

    Ok(Some(coerced))
}

fn coerce(name: &str, value: &ParamValue, param_type: ParameterType) -> Result<ParamValue> {
    match param_type {
        ParameterType::String | ParameterType::Path | ParameterType::Enum => {
            Ok(ParamValue::String(value.stringify()))
        }
        ParameterType::Int => to_int(name, value).map(ParamValue::Int),
        ParameterType::Float => to_float(name, value).map(ParamValue::Float),
        ParameterType::Bool => Ok(ParamValue::Bool(to_bool(value))),
    }
}

fn to_int(name: &str, value: &ParamValue) -> Result<i64> {
    match value {
        ParamValue::Int(i) => Ok(*i),
        ParamValue::Float(f) if f.fract() == 0.0 => Ok(*f as i64),
        ParamValue::Float(_) => Err(Error::Validation(format!(
            "parameter '{name}' must be an integer, got a fractional number"
        ))),
        ParamValue::String(s) => s.parse::<i64>().map_err(|_| {
            Error::Validation(format!("parameter '{name}' must be an integer, got '{s}'"))
        }),
        ParamValue::Bool(_) => Err(Error::Validation(format!(
            "parameter '{name}' must be an integer, got a boolean"
        ))),
    }
}

fn to_float(name: &str, value: &ParamValue) -> Result<f64> {
    match value {
        ParamValue::Float(f) => Ok(*f),
        ParamValue::Int(i) => Ok(*i as f64),
        ParamValue::String(s) => s.parse::<f64>().map_err(|_| {
            Error::Validation(format!("parameter '{name}' must be a number, got '{s}'"))
        }),
        ParamValue::Bool(_) => Err(Error::Validation(format!(
            "parameter '{name}' must be a number, got a boolean"
        ))),
    }
}

fn to_bool(value: &ParamValue) -> bool {
    match value {
        ParamValue::Bool(b) => *b,
        ParamValue::Int(i) => *i != 0,
        ParamValue::Float(f) => *f != 0.0,
        ParamValue::String(s) => matches!(s.to_lowercase().as_str(), "true" | "1" | "yes" | "on"),
    }
}

fn validate_string(name: &str, value: &ParamValue, def: &ParameterDefinition) -> Result<()> {
    let ParamValue::String(s) = value else {
        unreachable!("string parameters are coerced to ParamValue::String")
    };

    if let Some(min) = def.min_length {
        if (s.chars().count() as u64) < min {
            return Err(Error::Validation(format!(
                "parameter '{name}' must be at least {min} characters long"
            )));
        }
    }
    if let Some(max) = def.max_length {
        if (s.chars().count() as u64) > max {
            return Err(Error::Validation(format!(
                "parameter '{name}' must be at most {max} characters long"
            )));
        }
    }
    if let Some(pattern) = &def.pattern {
        if !pattern.is_match(s) {
            return Err(Error::Validation(format!(
                "parameter '{name}' does not match the required pattern"
            )));
        }
    }

    if let Some(c) = s.chars().find(|c| STRING_DANGER_CHARS.contains(c)) {
        return Err(Error::SecurityViolation(format!(
            "parameter '{name}' contains forbidden character '{c}'"
        )));
    }

    Ok(())
}

fn validate_numeric(name: &str, value: &ParamValue, def: &ParameterDefinition) -> Result<()> {
    let numeric = match value {
        ParamValue::Int(i) => *i as f64,
        ParamValue::Float(f) => *f,
        _ => unreachable!("numeric parameters are coerced to Int or Float"),
    };

    if let Some(min) = def.min_value {
        if numeric < min {
            return Err(Error::Validation(format!(
                "parameter '{name}' must be at least {min}"
            )));
        }
    }
    if let Some(max) = def.max_value {
        if numeric > max {
            return Err(Error::Validation(format!(
                "parameter '{name}' must be at most {max}"
            )));
        }
    }

    Ok(())
}

fn validate_enum(name: &str, value: &ParamValue, def: &ParameterDefinition) -> Result<()> {
    if def.allowed_values.iter().any(|allowed| allowed == value) {
        Ok(())
    } else {
        Err(Error::Validation(format!(
            "parameter '{name}' is not one of the allowed values"
        )))
    }
}
