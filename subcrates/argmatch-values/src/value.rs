// Copyright 2015 Axel Rasmussen
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::*;
use std::fmt;
use std::str::FromStr;

/// ValueKind enumerates the scalar types a raw argument value can be coerced
/// into.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ValueKind {
    /// The raw string, unchanged.
    String,
    /// The first character of the raw string.
    Char,
    /// A 32-bit signed integer.
    Int,
    /// A 32-bit unsigned integer.
    UInt,
    /// A 64-bit signed integer.
    Long,
    /// A 64-bit unsigned integer.
    ULong,
    /// A 32-bit floating point number.
    Float,
    /// A 64-bit floating point number.
    Double,
    /// A boolean.
    Bool,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            ValueKind::String => "string",
            ValueKind::Char => "character",
            ValueKind::Int => "integer",
            ValueKind::UInt => "unsigned integer",
            ValueKind::Long => "long integer",
            ValueKind::ULong => "unsigned long integer",
            ValueKind::Float => "float",
            ValueKind::Double => "double",
            ValueKind::Bool => "boolean",
        })
    }
}

/// A Value is a raw argument value after it has been coerced into some
/// particular ValueKind.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// See `ValueKind::String`.
    String(String),
    /// See `ValueKind::Char`.
    Char(char),
    /// See `ValueKind::Int`.
    Int(i32),
    /// See `ValueKind::UInt`.
    UInt(u32),
    /// See `ValueKind::Long`.
    Long(i64),
    /// See `ValueKind::ULong`.
    ULong(u64),
    /// See `ValueKind::Float`.
    Float(f32),
    /// See `ValueKind::Double`.
    Double(f64),
    /// See `ValueKind::Bool`.
    Bool(bool),
}

impl Value {
    /// Returns the ValueKind this Value was coerced into.
    pub fn kind(&self) -> ValueKind {
        match *self {
            Value::String(_) => ValueKind::String,
            Value::Char(_) => ValueKind::Char,
            Value::Int(_) => ValueKind::Int,
            Value::UInt(_) => ValueKind::UInt,
            Value::Long(_) => ValueKind::Long,
            Value::ULong(_) => ValueKind::ULong,
            Value::Float(_) => ValueKind::Float,
            Value::Double(_) => ValueKind::Double,
            Value::Bool(_) => ValueKind::Bool,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Value::String(ref v) => f.write_str(v),
            Value::Char(v) => write!(f, "{}", v),
            Value::Int(v) => write!(f, "{}", v),
            Value::UInt(v) => write!(f, "{}", v),
            Value::Long(v) => write!(f, "{}", v),
            Value::ULong(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Double(v) => write!(f, "{}", v),
            Value::Bool(v) => write!(f, "{}", v),
        }
    }
}

fn conversion_error(raw: &str, kind: ValueKind) -> ValueError {
    ValueError::Conversion {
        value: raw.to_owned(),
        kind: kind,
    }
}

fn parse_number<T: FromStr>(raw: &str, kind: ValueKind) -> ValueResult<T> {
    raw.parse::<T>().map_err(|_| conversion_error(raw, kind))
}

/// Returns true if the given float literal explicitly spells out an infinity,
/// as opposed to a finite literal which is simply too large for the type.
fn is_infinity_literal(raw: &str) -> bool {
    let unsigned = raw.trim_start_matches(|c: char| c == '+' || c == '-');
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

fn parse_float<T: FromStr + Into<f64> + Copy>(raw: &str, kind: ValueKind) -> ValueResult<T> {
    let v: T = parse_number(raw, kind)?;
    let widened: f64 = v.into();
    if widened.is_infinite() && !is_infinity_literal(raw) {
        return Err(conversion_error(raw, kind));
    }
    Ok(v)
}

/// Return the boolean interpretation of a string. "1", "true", "yes" and "y"
/// (the last three case-insensitively) are true; anything else, including
/// the empty string, is false.
fn parse_bool(raw: &str) -> bool {
    raw == "1"
        || raw.eq_ignore_ascii_case("true")
        || raw.eq_ignore_ascii_case("yes")
        || raw.eq_ignore_ascii_case("y")
}

/// Coerce a raw string value into the given ValueKind. This is a pure
/// function; an error is returned if the string is not a valid literal for
/// the requested type (including numeric overflow), or if a character was
/// requested from an empty string. Boolean coercion never fails.
pub fn coerce(raw: &str, kind: ValueKind) -> ValueResult<Value> {
    Ok(match kind {
        ValueKind::String => Value::String(raw.to_owned()),
        ValueKind::Char => Value::Char(
            raw.chars()
                .next()
                .ok_or_else(|| conversion_error(raw, kind))?,
        ),
        ValueKind::Int => Value::Int(parse_number(raw, kind)?),
        ValueKind::UInt => Value::UInt(parse_number(raw, kind)?),
        ValueKind::Long => Value::Long(parse_number(raw, kind)?),
        ValueKind::ULong => Value::ULong(parse_number(raw, kind)?),
        ValueKind::Float => Value::Float(parse_float(raw, kind)?),
        ValueKind::Double => Value::Double(parse_float(raw, kind)?),
        ValueKind::Bool => Value::Bool(parse_bool(raw)),
    })
}
