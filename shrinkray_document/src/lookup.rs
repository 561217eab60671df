use serde_json::{Number, Value};

use crate::error::DocumentError;

/// Extends a dotted path with a mapping key: `Data` + `RootChunk` -> `Data.RootChunk`.
#[inline]
pub fn join_key(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

/// Extends a dotted path with a sequence index: `a.bones` + `3` -> `a.bones[3]`.
#[inline]
pub fn join_index(path: &str, index: usize) -> String {
    format!("{path}[{index}]")
}

pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}

/// Descends one mapping level. `path` is the dotted path of `value` itself
/// (empty for the document root) and is only used to build error messages.
pub fn object_field<'a>(
    value: &'a Value,
    path: &str,
    key: &str,
) -> Result<&'a Value, DocumentError> {
    let map = value
        .as_object()
        .ok_or_else(|| DocumentError::NotAMapping(path.to_string()))?;
    map.get(key)
        .ok_or_else(|| DocumentError::MissingKey(join_key(path, key)))
}

pub fn object_field_mut<'a>(
    value: &'a mut Value,
    path: &str,
    key: &str,
) -> Result<&'a mut Value, DocumentError> {
    let map = value
        .as_object_mut()
        .ok_or_else(|| DocumentError::NotAMapping(path.to_string()))?;
    map.get_mut(key)
        .ok_or_else(|| DocumentError::MissingKey(join_key(path, key)))
}

/// Like [`object_field_mut`], but the found value must be a sequence.
pub fn sequence_field_mut<'a>(
    value: &'a mut Value,
    path: &str,
    key: &str,
) -> Result<&'a mut Vec<Value>, DocumentError> {
    let child_path = join_key(path, key);
    match object_field_mut(value, path, key)? {
        Value::Array(items) => Ok(items),
        _ => Err(DocumentError::NotASequence(child_path)),
    }
}

/// Multiplies a numeric leaf in place. Integers widen to `f64`, so a scaled
/// leaf is always stored back as a JSON float.
pub fn scale_in_place(leaf: &mut Value, path: &str, factor: f64) -> Result<(), DocumentError> {
    let Some(current) = leaf.as_f64() else {
        return Err(DocumentError::NotANumber {
            path: path.to_string(),
            found: value_kind(leaf),
        });
    };
    let product = current * factor;
    let number =
        Number::from_f64(product).ok_or_else(|| DocumentError::NonFinite(path.to_string()))?;
    *leaf = Value::Number(number);
    Ok(())
}
