//! JSON-RPC 2.0 message envelopes
//!
//! This module implements the three wire shapes a JSON-RPC 2.0 conversation
//! is built from:
//!
//! 1. **Request**: a call to a remote method that expects a response
//! 2. **Notification**: a call with no response expected (no `id` field)
//! 3. **Response**: the result of processing a request (success or error)
//!
//! All three carry the protocol-version tag [`JSONRPC_VERSION`]. There is no
//! standalone "message" value on the wire; every message is one of the three
//! variants, and [`Message`] unifies them for generic handling.
//!
//! # Request IDs
//!
//! Request IDs correlate requests with responses. The JSON-RPC spec allows string,
//! number, or null IDs. A null id is legal to put on the wire but degenerate:
//! it makes correlation impossible, so higher layers treat it as an error
//! condition. A request's id is never *absent* -- null, not omission, marks
//! "no id".

use crate::error::ResponseError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Protocol-version tag carried by every message.
pub const JSONRPC_VERSION: &str = "2.0";

/// JSON-RPC 2.0 request ID
///
/// The identifier used to correlate a request with its response. Per the
/// spec an ID can be a string, a number, or null.
///
/// This enum uses `#[serde(untagged)]` to serialize directly as the inner
/// value without a type discriminator, matching the wire format exactly. It
/// implements `Hash` and `Eq` so IDs can key a pending-request map.
///
/// # Examples
///
/// ```rust
/// use jsonrpc_wire::Id;
///
/// let id1: Id = "req-123".into();
/// let id2: Id = 42i64.into();
///
/// assert_eq!(id1.to_string(), "\"req-123\"");
/// assert_eq!(id2.to_string(), "42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    /// String identifier, useful for UUIDs or correlation tokens
    String(String),
    /// Numeric identifier, efficient for sequential request counters
    Number(i64),
    /// Null identifier. Legal on the wire but degenerate: responses carrying
    /// it cannot be correlated (a server answers with null when it could not
    /// read the request's id, e.g. on parse failure).
    Null,
}

impl fmt::Display for Id {
    /// Formats in a JSON-like representation: strings quoted, numbers as-is,
    /// null as "null".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::String(s) => write!(f, "\"{}\"", s),
            Id::Number(n) => write!(f, "{}", n),
            Id::Null => write!(f, "null"),
        }
    }
}

// Convenience conversions so call sites can pass values directly where an
// `Id` is expected.

impl From<String> for Id {
    fn from(s: String) -> Self {
        Id::String(s)
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Id::String(s.to_string())
    }
}

impl From<i64> for Id {
    fn from(n: i64) -> Self {
        Id::Number(n)
    }
}

/// The `params` slot of a request or notification
///
/// The wire format allows exactly two shapes: an ordered sequence of values
/// (by-position) or a single object (by-name). How a call's logical
/// parameter list collapses into one of these is governed by
/// [`ParameterStructures`](crate::structures::ParameterStructures).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Params {
    /// Ordered sequence of parameter values
    ByPosition(Vec<Value>),
    /// Single object of named parameters
    ByName(Map<String, Value>),
}

impl Params {
    /// Returns true for the sequence shape.
    pub fn is_by_position(&self) -> bool {
        matches!(self, Params::ByPosition(_))
    }

    /// Returns true for the object shape.
    pub fn is_by_name(&self) -> bool {
        matches!(self, Params::ByName(_))
    }
}

/// JSON-RPC 2.0 request message
///
/// A request is a call to a remote method that expects a response; the
/// response will carry a matching `id`.
///
/// A request MUST contain `jsonrpc`, `method`, and `id`, and MAY contain
/// `params`. The id is never omitted: a degenerate id-less request carries
/// an explicit null instead.
///
/// # Examples
///
/// ```rust
/// use jsonrpc_wire::{Id, Params, RequestMessage};
/// use serde_json::json;
///
/// let req = RequestMessage::new(
///     "subtract",
///     Some(Params::ByPosition(vec![json!(42), json!(23)])),
///     Id::Number(1),
/// );
/// assert_eq!(req.jsonrpc, "2.0");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestMessage {
    /// Protocol version, always "2.0"
    pub jsonrpc: String,
    /// Name of the remote method to invoke
    pub method: String,
    /// Optional parameters; skipped in JSON when None
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Params>,
    /// Identifier correlating this request with its response
    pub id: Id,
}

impl RequestMessage {
    /// Create a new request; the `jsonrpc` field is set automatically.
    pub fn new(method: impl Into<String>, params: Option<Params>, id: Id) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            method: method.into(),
            params,
            id,
        }
    }
}

/// JSON-RPC 2.0 notification message
///
/// A notification is a call that expects no response, signaled by the
/// complete absence of an `id` field. Presence of an id key -- even a null
/// one -- disqualifies a message from being a notification.
///
/// # Examples
///
/// ```rust
/// use jsonrpc_wire::NotificationMessage;
///
/// let ping = NotificationMessage::new("ping", None);
/// let json = serde_json::to_string(&ping).unwrap();
/// assert!(!json.contains("\"id\""));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationMessage {
    /// Protocol version, always "2.0"
    pub jsonrpc: String,
    /// Name of the method or event being notified
    pub method: String,
    /// Optional parameters or event data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Params>,
}

impl NotificationMessage {
    /// Create a new notification; the `jsonrpc` field is set automatically.
    pub fn new(method: impl Into<String>, params: Option<Params>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            method: method.into(),
            params,
        }
    }
}

/// JSON-RPC 2.0 response message
///
/// Sent after processing a request. Carries **exactly one** of `result`
/// (success, any JSON value including explicit null) or `error` (failure).
/// Mutual exclusion is enforced by construction through the factory methods.
///
/// The `id` matches the originating request, or is null if the server could
/// not determine it.
///
/// # Examples
///
/// ```rust
/// use jsonrpc_wire::{Id, ResponseError, ResponseMessage};
/// use serde_json::json;
///
/// let ok = ResponseMessage::success(json!({"value": 42}), Id::Number(1));
/// assert!(ok.is_success());
///
/// let failed = ResponseMessage::error(
///     ResponseError::method_not_found("unknownMethod"),
///     Id::Number(2),
/// );
/// assert!(failed.is_error());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseMessage {
    /// Protocol version, always "2.0"
    pub jsonrpc: String,
    /// Result of the invocation, present only on success.
    /// Mutually exclusive with `error`. An explicit null result is legal and
    /// distinct from the field being absent.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present_value"
    )]
    pub result: Option<Value>,
    /// Error information, present only on failure.
    /// Mutually exclusive with `result`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ResponseError>,
    /// Identifier of the originating request, null if it couldn't be read
    pub id: Id,
}

/// Deserialize a field as present. `Option<Value>` alone would collapse an
/// explicit JSON null into `None`; this keeps it as `Some(Value::Null)`.
/// Serde only invokes this when the key exists, so absence still yields the
/// `None` default.
fn present_value<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl ResponseMessage {
    /// Create a successful response; `error` is set to None.
    pub fn success(result: Value, id: Id) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            result: Some(result),
            error: None,
            id,
        }
    }

    /// Create an error response; `result` is set to None.
    ///
    /// Use `Id::Null` when the originating request's id couldn't be read.
    pub fn error(error: ResponseError, id: Id) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            result: None,
            error: Some(error),
            id,
        }
    }

    /// Whether the response carries a result.
    pub fn is_success(&self) -> bool {
        self.result.is_some()
    }

    /// Whether the response carries an error.
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Unified enum over the three message shapes
///
/// When receiving messages over the wire you don't know in advance which
/// shape you hold; this enum lets generic handling code match on the
/// variant. Serializes untagged, so it matches the wire format exactly.
///
/// The variant order matters for untagged deserialization: a request also
/// satisfies the notification shape (its id is simply an unknown field), so
/// `Request` must be tried first.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Message {
    /// A request (expects a response)
    Request(RequestMessage),
    /// A notification (no response expected)
    Notification(NotificationMessage),
    /// A response (result of processing a request)
    Response(ResponseMessage),
}

impl Message {
    /// Returns true for the `Request` variant.
    pub fn is_request(&self) -> bool {
        matches!(self, Message::Request(_))
    }

    /// Returns true for the `Notification` variant.
    pub fn is_notification(&self) -> bool {
        matches!(self, Message::Notification(_))
    }

    /// Returns true for the `Response` variant.
    pub fn is_response(&self) -> bool {
        matches!(self, Message::Response(_))
    }

    /// The method name, for requests and notifications.
    pub fn method(&self) -> Option<&str> {
        match self {
            Message::Request(req) => Some(&req.method),
            Message::Notification(notif) => Some(&notif.method),
            Message::Response(_) => None,
        }
    }
}
