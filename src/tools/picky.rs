// src/tools/picky.rs

use serde_json::Value;
use std::any::{type_name, TypeId};
use thiserror::Error;

/// Raised when a guard receives something that is not a number.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Must input a number (got {found})")]
pub struct TypeError {
    pub found: String,
}

impl TypeError {
    fn new(found: impl Into<String>) -> Self {
        Self {
            found: found.into(),
        }
    }
}

fn is_numeric_type<T: ?Sized + 'static>() -> bool {
    let id = TypeId::of::<T>();
    [
        TypeId::of::<i8>(),
        TypeId::of::<i16>(),
        TypeId::of::<i32>(),
        TypeId::of::<i64>(),
        TypeId::of::<i128>(),
        TypeId::of::<isize>(),
        TypeId::of::<u8>(),
        TypeId::of::<u16>(),
        TypeId::of::<u32>(),
        TypeId::of::<u64>(),
        TypeId::of::<u128>(),
        TypeId::of::<usize>(),
        TypeId::of::<f32>(),
        TypeId::of::<f64>(),
    ]
    .contains(&id)
}

/// Accepts integer and float primitives, rejects everything else.
///
/// `picky(&3)` and `picky(&2.5)` pass; `picky("hey")` returns a [`TypeError`]
/// naming `str`.
pub fn picky<T: ?Sized + 'static>(_value: &T) -> Result<(), TypeError> {
    if is_numeric_type::<T>() {
        Ok(())
    } else {
        Err(TypeError::new(type_name::<T>()))
    }
}

/// Same guard for dynamically typed input. Only JSON numbers pass.
pub fn picky_value(value: &Value) -> Result<f64, TypeError> {
    match value {
        Value::Number(n) => n.as_f64().ok_or_else(|| TypeError::new(n.to_string())),
        Value::Null => Err(TypeError::new("null")),
        Value::Bool(_) => Err(TypeError::new("bool")),
        Value::String(_) => Err(TypeError::new("string")),
        Value::Array(_) => Err(TypeError::new("array")),
        Value::Object(_) => Err(TypeError::new("object")),
    }
}
