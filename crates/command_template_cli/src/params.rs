//! Parses `--param KEY=VALUE` command-line arguments into the boundary
//! value type the core validator expects.
//!
//! Every value arrives from argv as text; per the core's design, all
//! coercion (to int, float, bool) happens inside the validator, not
//! here, so every parameter is handed over as a `ParamValue::String`.

use crate::errors::Error;
use command_template_core::ParamValue;
use std::collections::BTreeMap;

#[cfg(test)]
#[path = "params_tests.rs"]
mod tests;

pub fn parse_key_val(raw: &str) -> Result<(String, String), Error> {
    let pos = raw
        .find('=')
        .ok_or_else(|| Error::InvalidParameterArgument(raw.to_string()))?;
    Ok((raw[..pos].to_string(), raw[pos + 1..].to_string()))
}

pub fn parse_params(raw: &[String]) -> Result<BTreeMap<String, ParamValue>, Error> {
    let mut params = BTreeMap::new();
    for entry in raw {
        let (key, value) = parse_key_val(entry)?;
        params.insert(key, ParamValue::String(value));
    }
    Ok(params)
}
