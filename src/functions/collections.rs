use super::Functions;
use crate::value::{Value, WalkError};

pub(super) fn register(functions: &mut Functions) {
    functions.register("push", builtin_push);
    functions.register("pop", builtin_pop);
    functions.register("shift", builtin_shift);
    functions.register("unshift", builtin_unshift);
    functions.register("count", builtin_count);
    functions.register("join", builtin_join);
}

fn array_arg<'a>(args: &'a mut [Value], name: &str) -> Result<&'a mut Vec<Value>, WalkError> {
    match args.first_mut() {
        Some(Value::Array(items)) => Ok(items),
        Some(other) => Err(WalkError::callee(format!(
            "{} expects an array, got {}",
            name,
            other.type_name()
        ))),
        None => Err(WalkError::callee(format!("{} expects an array", name))),
    }
}

fn builtin_push(args: &mut [Value]) -> Result<Value, WalkError> {
    let (target, values) = match args.split_first_mut() {
        Some(pair) => pair,
        None => return Err(WalkError::callee("push expects an array")),
    };
    let Value::Array(items) = target else {
        return Err(WalkError::callee(format!(
            "push expects an array, got {}",
            target.type_name()
        )));
    };
    items.extend(values.iter().cloned());
    Ok(Value::Int(items.len() as i64))
}

fn builtin_pop(args: &mut [Value]) -> Result<Value, WalkError> {
    let items = array_arg(args, "pop")?;
    Ok(items.pop().unwrap_or(Value::Nil))
}

fn builtin_shift(args: &mut [Value]) -> Result<Value, WalkError> {
    let items = array_arg(args, "shift")?;
    if items.is_empty() {
        Ok(Value::Nil)
    } else {
        Ok(items.remove(0))
    }
}

fn builtin_unshift(args: &mut [Value]) -> Result<Value, WalkError> {
    let (target, values) = match args.split_first_mut() {
        Some(pair) => pair,
        None => return Err(WalkError::callee("unshift expects an array")),
    };
    let Value::Array(items) = target else {
        return Err(WalkError::callee(format!(
            "unshift expects an array, got {}",
            target.type_name()
        )));
    };
    let mut prefixed: Vec<Value> = values.to_vec();
    prefixed.append(items);
    *items = prefixed;
    Ok(Value::Int(items.len() as i64))
}

fn builtin_count(args: &mut [Value]) -> Result<Value, WalkError> {
    let count = match args.first() {
        Some(Value::Array(items)) => items.len() as i64,
        Some(Value::Nil) | None => 0,
        Some(_) => 1,
    };
    Ok(Value::Int(count))
}

fn builtin_join(args: &mut [Value]) -> Result<Value, WalkError> {
    let separator = args.get(1).map(Value::to_string_value).unwrap_or_default();
    match args.first() {
        Some(Value::Array(items)) => {
            let joined = items
                .iter()
                .map(Value::to_string_value)
                .collect::<Vec<_>>()
                .join(&separator);
            Ok(Value::Str(joined))
        }
        Some(other) => Ok(Value::Str(other.to_string_value())),
        None => Ok(Value::Str(String::new())),
    }
}
