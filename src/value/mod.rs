use std::sync::{Arc, Mutex};

use num_traits::ToPrimitive;

mod display;
mod error;

pub use error::{ErrorCode, WalkError};

/// The capability that makes an element a method receiver.
///
/// Dispatch never consults a declared hierarchy: any element wrapped in
/// [`Value::Object`] is invoked by name as a method call, every other
/// variant is passed positionally to a registered free function.
pub trait Receiver: std::fmt::Debug + Send {
    /// Invoke the named method against this object. The receiver is the
    /// implicit subject; `args` arrive exactly as the caller supplied
    /// them. Unknown methods should return the receiver's own error.
    fn call(&mut self, method: &str, args: &[Value]) -> Result<Value, WalkError>;

    fn type_name(&self) -> &str {
        "Object"
    }
}

/// Shared handle to a [`Receiver`]; clones share identity.
pub type SharedReceiver = Arc<Mutex<dyn Receiver>>;

/// A collection key. Index construction yields `Int(0..n)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Int(i64),
    Str(String),
}

impl From<i64> for Key {
    fn from(index: i64) -> Self {
        Key::Int(index)
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Key::Int(index as i64)
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Str(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Str(name)
    }
}

/// A dynamically typed element.
///
/// Object handles have reference semantics: cloning a `Value` clones the
/// handle, so method-call mutations are observed through every clone.
#[derive(Debug, Clone)]
pub enum Value {
    Int(i64),
    Num(f64),
    Str(String),
    Bool(bool),
    Array(Vec<Value>),
    Object(SharedReceiver),
    Nil,
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Num(a), Value::Num(b)) => (a.is_nan() && b.is_nan()) || a == b,
            (Value::Int(a), Value::Num(b)) => (*a as f64) == *b,
            (Value::Num(a), Value::Int(b)) => *a == (*b as f64),
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => Arc::ptr_eq(a, b),
            (Value::Nil, Value::Nil) => true,
            _ => false,
        }
    }
}

impl Value {
    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(items)
    }

    /// Wrap a [`Receiver`] into an element with shared-handle identity.
    pub fn object(receiver: impl Receiver + 'static) -> Self {
        Value::Object(Arc::new(Mutex::new(receiver)))
    }

    /// Structural Receiver/Value classification, decided per element.
    pub fn is_receiver(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            Value::Num(f) => f.to_i64(),
            Value::Str(s) => s.trim().parse::<i64>().ok(),
            Value::Bool(b) => Some(i64::from(*b)),
            _ => None,
        }
    }

    pub fn as_num(&self) -> Option<f64> {
        match self {
            Value::Int(i) => i.to_f64(),
            Value::Num(f) => Some(*f),
            Value::Str(s) => s.trim().parse::<f64>().ok(),
            Value::Bool(b) => Some(f64::from(u8::from(*b))),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "Int",
            Value::Num(_) => "Num",
            Value::Str(_) => "Str",
            Value::Bool(_) => "Bool",
            Value::Array(_) => "Array",
            Value::Object(_) => "Object",
            Value::Nil => "Nil",
        }
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Num(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

// Compile-time assertion that Value is Send + Sync
const _: fn() = || {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Value>();
};

#[cfg(test)]
mod tests {
    use super::{Receiver, Value, WalkError};

    #[derive(Debug)]
    struct Unit;

    impl Receiver for Unit {
        fn call(&mut self, _: &str, _: &[Value]) -> Result<Value, WalkError> {
            Ok(Value::Nil)
        }
    }

    #[test]
    fn numeric_equality_crosses_int_and_num() {
        assert_eq!(Value::Int(3), Value::Num(3.0));
        assert_ne!(Value::Int(3), Value::Num(3.5));
        assert_ne!(Value::Num(f64::NAN), Value::Int(0));
    }

    #[test]
    fn object_equality_is_handle_identity() {
        let a = Value::object(Unit);
        let b = a.clone();
        assert_eq!(a, b);
        assert_ne!(a, Value::object(Unit));
    }

    #[test]
    fn classification_is_structural() {
        assert!(Value::object(Unit).is_receiver());
        assert!(!Value::Str("trim".into()).is_receiver());
        assert!(!Value::Nil.is_receiver());
    }

    #[test]
    fn coercions() {
        assert_eq!(Value::Str(" 42 ".to_string()).as_int(), Some(42));
        assert_eq!(Value::Num(2.0).as_int(), Some(2));
        assert_eq!(Value::Nil.as_int(), None);
        assert_eq!(Value::Bool(true).as_num(), Some(1.0));
    }
}
