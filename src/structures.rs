//! Parameter-structure policy
//!
//! A JSON-RPC call has a single `params` slot that is either an ordered
//! sequence or a single object. [`ParameterStructures`] is the closed set of
//! strategies deciding which shape a call's logical parameter list collapses
//! into, and [`ParameterStructures::resolve`] performs that collapse.
//!
//! The set is closed by construction: it is a Rust enum, so no look-alike
//! value can be smuggled in from outside, and [`FromStr`] admits only the
//! three canonical spellings.

use crate::error::{Error, Result};
use crate::types::Params;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Strategy mapping a call's parameters onto the wire `params` slot
///
/// - `Auto`: zero parameters omit `params`; a single object-valued parameter
///   is sent by name; anything else is sent by position.
/// - `ByPosition`: always a sequence, regardless of arity or value shape.
/// - `ByName`: always an object. Only defined for exactly one object-valued
///   parameter; anything else is a contract violation and is rejected.
///
/// Structure ambiguity only exists at arity <= 1, which is why only the 0-
/// and 1-parameter signature variants let callers configure this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterStructures {
    /// Pick the shape from the argument count and value shape
    Auto,
    /// Force sequence encoding
    ByPosition,
    /// Force object encoding; requires exactly one object argument
    ByName,
}

impl ParameterStructures {
    /// Collapse a call's argument list into the wire `params` value.
    ///
    /// Returns `Ok(None)` when `params` should be omitted entirely (only
    /// `Auto` with zero arguments does this).
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameterStructure`] when `ByName` is used with an
    /// argument count other than one, or with a single non-object argument.
    /// This signals a programming error at the call site.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsonrpc_wire::{ParameterStructures, Params};
    /// use serde_json::json;
    ///
    /// // One object argument under Auto goes out by name
    /// let params = ParameterStructures::Auto
    ///     .resolve(vec![json!({"a": 1})])
    ///     .unwrap();
    /// assert!(params.unwrap().is_by_name());
    ///
    /// // An array argument is a value, not a parameter object
    /// let params = ParameterStructures::Auto
    ///     .resolve(vec![json!([1, 2])])
    ///     .unwrap();
    /// assert!(params.unwrap().is_by_position());
    /// ```
    pub fn resolve(self, mut args: Vec<Value>) -> Result<Option<Params>> {
        match self {
            ParameterStructures::Auto => Ok(match args.len() {
                0 => None,
                1 => match args.remove(0) {
                    Value::Object(map) => Some(Params::ByName(map)),
                    single => Some(Params::ByPosition(vec![single])),
                },
                _ => Some(Params::ByPosition(args)),
            }),
            ParameterStructures::ByPosition => Ok(Some(Params::ByPosition(args))),
            ParameterStructures::ByName => {
                if args.len() != 1 {
                    return Err(Error::InvalidParameterStructure(format!(
                        "byName encoding requires exactly one argument, got {}",
                        args.len()
                    )));
                }
                match args.remove(0) {
                    Value::Object(map) => Ok(Some(Params::ByName(map))),
                    other => Err(Error::InvalidParameterStructure(format!(
                        "byName encoding requires an object argument, got {}",
                        json_type_name(&other)
                    ))),
                }
            }
        }
    }
}

impl fmt::Display for ParameterStructures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParameterStructures::Auto => "auto",
            ParameterStructures::ByPosition => "byPosition",
            ParameterStructures::ByName => "byName",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for ParameterStructures {
    type Err = Error;

    /// Parses exactly the canonical spellings; anything else is rejected so
    /// that string look-alikes cannot pass a membership check.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "auto" => Ok(ParameterStructures::Auto),
            "byPosition" => Ok(ParameterStructures::ByPosition),
            "byName" => Ok(ParameterStructures::ByName),
            other => Err(Error::InvalidParameterStructure(format!(
                "unknown parameter structure: {:?}",
                other
            ))),
        }
    }
}

/// Short JSON type name for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
