use crate::runtime::builtins::{BuiltinValue, NativeFn};
use crate::runtime::error::{RuntimeError, RuntimeResult};
use crate::runtime::iterator::{IteratorValue, RangeIterator, StringIterator, ValueIter};
use std::fmt;

/// The runtime datum handed around by generated code. Exactly one payload
/// per kind; operations never mutate the receiver and always produce a new
/// value (iterator cursors advance through their own handle).
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Nothing,
    Int(i64),
    Float(f64),
    Str(String),
    Range(RangeValue),
    Iterator(IteratorValue),
    Builtin(BuiltinValue),
}

/// Half-open range; `start >= end` is empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangeValue {
    pub start: i64,
    pub end: i64,
}

impl Value {
    /// The shared "no value" sentinel. Built-ins return this in place of a
    /// result.
    pub const NOTHING: Value = Value::Nothing;

    pub fn from_int(value: i64) -> Value {
        Value::Int(value)
    }

    pub fn from_float(value: f64) -> Value {
        Value::Float(value)
    }

    pub fn from_string(value: impl Into<String>) -> Value {
        Value::Str(value.into())
    }

    pub fn from_range(start: i64, end: i64) -> Value {
        Value::Range(RangeValue { start, end })
    }

    pub fn from_iterator(iter: Box<dyn ValueIter>) -> Value {
        Value::Iterator(IteratorValue::new(iter))
    }

    pub fn from_builtin(name: &'static str, func: NativeFn) -> Value {
        Value::Builtin(BuiltinValue::new(name, func))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nothing => "nothing",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Range(_) => "range",
            Value::Iterator(_) => "iterator",
            Value::Builtin(_) => "builtin function",
        }
    }

    pub fn add(&self, other: &Value, loc: &str) -> RuntimeResult<Value> {
        match (self, other) {
            (Value::Int(l), Value::Int(r)) => Ok(Value::Int(l.wrapping_add(*r))),
            (Value::Int(l), Value::Float(r)) => Ok(Value::Float(*l as f64 + r)),
            (Value::Float(l), Value::Int(r)) => Ok(Value::Float(l + *r as f64)),
            (Value::Float(l), Value::Float(r)) => Ok(Value::Float(l + r)),
            (Value::Str(l), Value::Str(r)) => Ok(Value::Str(format!("{l}{r}"))),
            _ => Err(self.type_mismatch("+", other, loc)),
        }
    }

    pub fn sub(&self, other: &Value, loc: &str) -> RuntimeResult<Value> {
        match (self, other) {
            (Value::Int(l), Value::Int(r)) => Ok(Value::Int(l.wrapping_sub(*r))),
            (Value::Int(l), Value::Float(r)) => Ok(Value::Float(*l as f64 - r)),
            (Value::Float(l), Value::Int(r)) => Ok(Value::Float(l - *r as f64)),
            (Value::Float(l), Value::Float(r)) => Ok(Value::Float(l - r)),
            _ => Err(self.type_mismatch("-", other, loc)),
        }
    }

    pub fn mul(&self, other: &Value, loc: &str) -> RuntimeResult<Value> {
        match (self, other) {
            (Value::Int(l), Value::Int(r)) => Ok(Value::Int(l.wrapping_mul(*r))),
            (Value::Int(l), Value::Float(r)) => Ok(Value::Float(*l as f64 * r)),
            (Value::Float(l), Value::Int(r)) => Ok(Value::Float(l * *r as f64)),
            (Value::Float(l), Value::Float(r)) => Ok(Value::Float(l * r)),
            (Value::Str(l), Value::Int(r)) => {
                if *r <= 0 {
                    Ok(Value::Str(String::new()))
                } else {
                    Ok(Value::Str(l.repeat(*r as usize)))
                }
            }
            _ => Err(self.type_mismatch("*", other, loc)),
        }
    }

    pub fn div(&self, other: &Value, loc: &str) -> RuntimeResult<Value> {
        match (self, other) {
            (Value::Int(_), Value::Int(0)) => Err(RuntimeError::DivideByZero {
                loc: loc.to_string(),
            }),
            // wrapping covers i64::MIN / -1, the one nonzero pair plain
            // division cannot represent
            (Value::Int(l), Value::Int(r)) => Ok(Value::Int(l.wrapping_div(*r))),
            (Value::Int(l), Value::Float(r)) => Ok(Value::Float(*l as f64 / r)),
            (Value::Float(l), Value::Int(r)) => Ok(Value::Float(l / *r as f64)),
            (Value::Float(l), Value::Float(r)) => Ok(Value::Float(l / r)),
            _ => Err(self.type_mismatch("/", other, loc)),
        }
    }

    /// Converts an iterable value into a fresh iterator value. The string
    /// iterator copies its source, so the new value is independent of the
    /// receiver.
    pub fn iter(&self, loc: &str) -> RuntimeResult<Value> {
        match self {
            Value::Str(s) => Ok(Value::from_iterator(Box::new(StringIterator::new(s)))),
            Value::Range(r) => Ok(Value::from_iterator(Box::new(RangeIterator::new(
                r.start, r.end,
            )))),
            _ => Err(self.not_iterable(loc)),
        }
    }

    pub fn has_next(&self, loc: &str) -> RuntimeResult<bool> {
        match self {
            Value::Iterator(iter) => Ok(iter.has_next()),
            _ => Err(self.not_iterable(loc)),
        }
    }

    pub fn next(&self, loc: &str) -> RuntimeResult<Value> {
        match self {
            Value::Iterator(iter) => iter.next().ok_or_else(|| RuntimeError::IteratorExhausted {
                loc: loc.to_string(),
            }),
            _ => Err(self.not_iterable(loc)),
        }
    }

    fn type_mismatch(&self, op: &'static str, other: &Value, loc: &str) -> RuntimeError {
        RuntimeError::TypeMismatch {
            op,
            lhs: self.type_name(),
            rhs: other.type_name(),
            loc: loc.to_string(),
        }
    }

    fn not_iterable(&self, loc: &str) -> RuntimeError {
        RuntimeError::NotIterable {
            kind: self.type_name(),
            loc: loc.to_string(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nothing => write!(f, "nothing"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Str(v) => write!(f, "{v}"),
            Value::Range(range) => write!(f, "{}..{}", range.start, range.end),
            Value::Iterator(_) => write!(f, "<iterator>"),
            Value::Builtin(builtin) => write!(f, "<builtin function: {}>", builtin.name()),
        }
    }
}
