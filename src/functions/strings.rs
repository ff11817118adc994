use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

use super::{Functions, format_sprintf};
use crate::value::{Value, WalkError};

pub(super) fn register(functions: &mut Functions) {
    functions.register("trim", builtin_trim);
    functions.register("uc", builtin_uc);
    functions.register("lc", builtin_lc);
    functions.register("tc", builtin_tc);
    functions.register("flip", builtin_flip);
    functions.register("chars", builtin_chars);
    functions.register("ord", builtin_ord);
    functions.register("chr", builtin_chr);
    functions.register("nfc", builtin_nfc);
    functions.register("nfd", builtin_nfd);
    functions.register("sprintf", builtin_sprintf);
    functions.register("str_replace", builtin_str_replace);
    functions.register("split", builtin_split);
}

fn subject(args: &[Value], position: usize) -> String {
    args.get(position).map(Value::to_string_value).unwrap_or_default()
}

fn builtin_trim(args: &mut [Value]) -> Result<Value, WalkError> {
    let val = subject(args, 0);
    let trimmed = match args.get(1) {
        Some(Value::Nil) | None => val.trim().to_string(),
        Some(charset) => {
            let set: Vec<char> = charset.to_string_value().chars().collect();
            val.trim_matches(|c| set.contains(&c)).to_string()
        }
    };
    Ok(Value::Str(trimmed))
}

fn builtin_uc(args: &mut [Value]) -> Result<Value, WalkError> {
    Ok(Value::Str(subject(args, 0).to_uppercase()))
}

fn builtin_lc(args: &mut [Value]) -> Result<Value, WalkError> {
    Ok(Value::Str(subject(args, 0).to_lowercase()))
}

fn builtin_tc(args: &mut [Value]) -> Result<Value, WalkError> {
    let val = subject(args, 0);
    let mut result = String::new();
    let mut capitalize = true;
    for ch in val.chars() {
        if capitalize && ch.is_alphanumeric() {
            for c in ch.to_uppercase() {
                result.push(c);
            }
            capitalize = false;
        } else {
            if ch.is_whitespace() {
                capitalize = true;
            }
            result.push(ch);
        }
    }
    Ok(Value::Str(result))
}

fn builtin_flip(args: &mut [Value]) -> Result<Value, WalkError> {
    let val = subject(args, 0);
    Ok(Value::Str(val.graphemes(true).rev().collect()))
}

fn builtin_chars(args: &mut [Value]) -> Result<Value, WalkError> {
    let val = subject(args, 0);
    Ok(Value::Int(val.graphemes(true).count() as i64))
}

fn builtin_ord(args: &mut [Value]) -> Result<Value, WalkError> {
    match subject(args, 0).chars().next() {
        Some(ch) => Ok(Value::Int(ch as u32 as i64)),
        None => Ok(Value::Nil),
    }
}

fn builtin_chr(args: &mut [Value]) -> Result<Value, WalkError> {
    if let Some(i) = args.first().and_then(Value::as_int)
        && i >= 0
        && let Some(ch) = std::char::from_u32(i as u32)
    {
        return Ok(Value::Str(ch.to_string()));
    }
    Ok(Value::Str(String::new()))
}

fn builtin_nfc(args: &mut [Value]) -> Result<Value, WalkError> {
    Ok(Value::Str(subject(args, 0).nfc().collect()))
}

fn builtin_nfd(args: &mut [Value]) -> Result<Value, WalkError> {
    Ok(Value::Str(subject(args, 0).nfd().collect()))
}

fn builtin_sprintf(args: &mut [Value]) -> Result<Value, WalkError> {
    let fmt = subject(args, 0);
    let rest = args.get(1..).unwrap_or_default();
    Ok(Value::Str(format_sprintf(&fmt, rest)))
}

// subject in third position, like the C-family replace functions
fn builtin_str_replace(args: &mut [Value]) -> Result<Value, WalkError> {
    let search = subject(args, 0);
    let replace = subject(args, 1);
    let val = subject(args, 2);
    if search.is_empty() {
        return Ok(Value::Str(val));
    }
    Ok(Value::Str(val.replace(&search, &replace)))
}

fn builtin_split(args: &mut [Value]) -> Result<Value, WalkError> {
    let separator = subject(args, 0);
    let val = subject(args, 1);
    if separator.is_empty() {
        return Err(WalkError::callee("split: empty separator"));
    }
    let parts = val
        .split(&separator)
        .map(|part| Value::Str(part.to_string()))
        .collect();
    Ok(Value::Array(parts))
}
