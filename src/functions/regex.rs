use regex::Regex;

use super::Functions;
use crate::value::{Value, WalkError};

pub(super) fn register(functions: &mut Functions) {
    functions.register("regex_replace", builtin_regex_replace);
    functions.register("regex_match", builtin_regex_match);
}

fn compile(pattern: &str) -> Result<Regex, WalkError> {
    Regex::new(pattern).map_err(|e| WalkError::callee(format!("bad pattern: {}", e)))
}

// subject in third position; optional fourth argument caps the number
// of replacements (0 or absent replaces all)
fn builtin_regex_replace(args: &mut [Value]) -> Result<Value, WalkError> {
    let pattern = args.first().map(Value::to_string_value).unwrap_or_default();
    let replacement = args.get(1).map(Value::to_string_value).unwrap_or_default();
    let subject = args.get(2).map(Value::to_string_value).unwrap_or_default();
    let limit = match args.get(3) {
        Some(Value::Nil) | None => 0,
        Some(v) => v.as_int().unwrap_or(0).max(0) as usize,
    };
    let re = compile(&pattern)?;
    let replaced = re.replacen(&subject, limit, replacement.as_str());
    Ok(Value::Str(replaced.into_owned()))
}

fn builtin_regex_match(args: &mut [Value]) -> Result<Value, WalkError> {
    let pattern = args.first().map(Value::to_string_value).unwrap_or_default();
    let subject = args.get(1).map(Value::to_string_value).unwrap_or_default();
    let re = compile(&pattern)?;
    Ok(Value::Bool(re.is_match(&subject)))
}
