//! Loosely typed values for pipelines whose payloads are only known at runtime.
//!
//! Here the shape of what a callback returns cannot be checked by the compiler,
//! so [`DynMaybe::and_then_dyn`] and [`DynMaybe::or_else_dyn`] check it on return
//! and report [`OptionError::CombinatorType`] instead.

use core::fmt;
use std::collections::BTreeMap;

use crate::{
    error::OptionError,
    maybe::Maybe,
    ops::{empty::Emptyable, keyed::Keyed},
};

/// An optional [`Value`] whose extra payload is a list of values
pub type DynMaybe = Maybe<Value, Vec<Value>>;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
    Maybe(Box<DynMaybe>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    Float,
    Str,
    List,
    Map,
    Maybe,
}
impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Str => "string",
            Self::List => "list",
            Self::Map => "map",
            Self::Maybe => "optional value",
        };
        f.write_str(s)
    }
}

impl Value {
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Bool,
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::Str(_) => ValueKind::Str,
            Self::List(_) => ValueKind::List,
            Self::Map(_) => ValueKind::Map,
            Self::Maybe(_) => ValueKind::Maybe,
        }
    }
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Hands the value back if it is not an optional value
    pub fn into_maybe(self) -> Result<DynMaybe, Self> {
        match self {
            Self::Maybe(m) => Ok(*m),
            other => Err(other),
        }
    }

    /// Map entry, or list element under its canonical decimal index
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Self> {
        match self {
            Self::Map(m) => m.get(key),
            Self::List(l) => {
                let idx = key.parse::<usize>().ok().filter(|i| i.to_string() == key)?;
                l.get(idx)
            }
            _ => None,
        }
    }
}

impl DynMaybe {
    pub fn and_then_dyn(
        self,
        f: impl FnOnce(Value, &[Value]) -> Value,
    ) -> Result<Self, OptionError> {
        match self {
            Self::Absent { extra } => Ok(Self::Absent { extra }),
            Self::Present { value, extra } => {
                f(value, &extra)
                    .into_maybe()
                    .map_err(|v| OptionError::CombinatorType {
                        combinator: "and_then",
                        found: v.kind(),
                    })
            }
        }
    }

    pub fn or_else_dyn(self, f: impl FnOnce(&[Value]) -> Value) -> Result<Self, OptionError> {
        match self {
            Self::Absent { extra } => {
                f(&extra)
                    .into_maybe()
                    .map_err(|v| OptionError::CombinatorType {
                        combinator: "or_else",
                        found: v.kind(),
                    })
            }
            present @ Self::Present { .. } => Ok(present),
        }
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Maybe(Box::new(self))
    }
}

impl Maybe<Value> {
    /// Absent for [`Value::Null`], present for anything else
    pub fn from_nullable_value(v: Value) -> Self {
        if v.is_null() {
            return Self::absent();
        }
        Self::present(v)
    }

    /// Like [`Maybe::from_first`], but decides at runtime whether `v` can be iterated.
    ///
    /// Lists yield their first element, maps their first value in key order.
    pub fn from_first_value(v: Value) -> Result<Self, OptionError> {
        match v {
            Value::List(l) => Ok(Self::from_first(l)),
            Value::Map(m) => Ok(Self::from_first(m.into_values())),
            other => Err(OptionError::InputType {
                found: other.kind(),
            }),
        }
    }
}

impl Emptyable for Value {
    fn is_empty_value(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Bool(b) => b.is_empty_value(),
            Self::Int(i) => i.is_empty_value(),
            Self::Float(f) => f.is_empty_value(),
            Self::Str(s) => s.is_empty_value(),
            Self::List(l) => l.is_empty(),
            Self::Map(m) => m.is_empty(),
            Self::Maybe(_) => false,
        }
    }
}

impl Keyed<str> for Value {
    type Value = Value;
    fn get_keyed(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}
impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}
impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}
impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}
impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}
impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}
impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Self::List(value)
    }
}
impl From<BTreeMap<String, Value>> for Value {
    fn from(value: BTreeMap<String, Value>) -> Self {
        Self::Map(value)
    }
}
impl From<DynMaybe> for Value {
    fn from(value: DynMaybe) -> Self {
        value.into_value()
    }
}
impl<V: Into<Value>> From<Option<V>> for Value {
    fn from(value: Option<V>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
