//! Codec and classification for JSON-RPC messages
//!
//! Two layers live here:
//!
//! - **Classification predicates**: total functions over an already-decoded
//!   [`serde_json::Value`] of unknown shape that decide which of the three
//!   message kinds a candidate matches. They never panic and never assume
//!   more shape than they check; any mismatch is simply `false`.
//! - **Codec helpers**: string-level encode/decode built on the predicates,
//!   mapping failures onto the reserved error codes (`-32700` for invalid
//!   JSON, `-32600` for a well-formed value that is no known message shape).
//!
//! # Classification Order
//!
//! The predicates are not mutually exclusive for pathological input, so the
//! order they are consulted in matters. [`classify`] applies the
//! conventional order: request first, then notification, then response --
//! request and notification share the method-field test and only the id
//! field's presence tells them apart.
//!
//! # Examples
//!
//! ```rust
//! use jsonrpc_wire::codec;
//! use serde_json::json;
//!
//! let candidate = json!({"jsonrpc": "2.0", "id": 1, "method": "foo", "params": [1, 2]});
//! assert!(codec::is_request_message(&candidate));
//! assert!(!codec::is_notification_message(&candidate));
//! ```

use crate::error::{Error, ResponseError, Result};
use crate::types::{Message, NotificationMessage, RequestMessage, ResponseMessage};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// The three wire shapes a candidate value can classify as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Request: string method and a string-or-number id
    Request,
    /// Notification: string method and no id key at all
    Notification,
    /// Response: a result or error, and an id (null allowed)
    Response,
}

/// Whether the candidate matches the request shape.
///
/// True iff it has a string `method` field and an `id` field whose value is
/// a string or a number. A null id fails this test: null is legal to put on
/// the wire, but a received request is only recognized with a usable id.
pub fn is_request_message(value: &Value) -> bool {
    let Some(object) = value.as_object() else {
        return false;
    };
    object.get("method").is_some_and(Value::is_string)
        && object
            .get("id")
            .is_some_and(|id| id.is_string() || id.is_number())
}

/// Whether the candidate matches the notification shape.
///
/// True iff it has a string `method` field and no `id` key at all. A
/// present-but-null id disqualifies the candidate; only genuine absence of
/// the key marks a notification.
pub fn is_notification_message(value: &Value) -> bool {
    let Some(object) = value.as_object() else {
        return false;
    };
    object.get("method").is_some_and(Value::is_string) && !object.contains_key("id")
}

/// Whether the candidate matches the response shape.
///
/// True iff it carries a `result` key (any value, explicit null included)
/// or a truthy `error`, and an `id` whose value is a string, a number, or
/// explicitly null (null means the server could not correlate the response).
pub fn is_response_message(value: &Value) -> bool {
    let Some(object) = value.as_object() else {
        return false;
    };
    let has_result = object.contains_key("result");
    let has_error = object.get("error").is_some_and(is_truthy);
    let id_ok = object
        .get("id")
        .is_some_and(|id| id.is_string() || id.is_number() || id.is_null());
    (has_result || has_error) && id_ok
}

/// Truthiness of a JSON value: null, false, numeric zero, and the empty
/// string are falsy; arrays and objects (even empty ones) and everything
/// else are truthy. A well-formed error is an object, so a falsy `error`
/// never denotes a real error.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Classify a candidate value in the conventional order.
///
/// Consults the predicates request-first, then notification, then response,
/// and returns `None` when none match. A `None` is not an error of this
/// layer; the surrounding dispatcher reports it as an unrecognized message.
pub fn classify(value: &Value) -> Option<MessageKind> {
    if is_request_message(value) {
        Some(MessageKind::Request)
    } else if is_notification_message(value) {
        Some(MessageKind::Notification)
    } else if is_response_message(value) {
        Some(MessageKind::Response)
    } else {
        None
    }
}

/// Encode any serializable message to a JSON string.
///
/// # Errors
///
/// Returns [`Error::Serialization`] if the message cannot be serialized.
pub fn encode<T: Serialize>(msg: &T) -> Result<String> {
    serde_json::to_string(msg).map_err(|e| Error::Serialization(e.to_string()))
}

/// Decode a JSON string into a classified message.
///
/// Parses the input, classifies it with [`classify`], and deserializes the
/// matched shape.
///
/// # Errors
///
/// - `Error::JsonRpc` with a parse error (-32700) for invalid JSON
/// - `Error::JsonRpc` with an invalid request error (-32600) when the value
///   fails all three predicates, or matches one but cannot be deserialized
///   into the corresponding shape (e.g. a missing `jsonrpc` tag)
///
/// # Examples
///
/// ```rust
/// use jsonrpc_wire::codec;
///
/// let msg = codec::decode(r#"{"jsonrpc":"2.0","method":"test","id":1}"#).unwrap();
/// assert!(msg.is_request());
///
/// let msg = codec::decode(r#"{"jsonrpc":"2.0","method":"notify"}"#).unwrap();
/// assert!(msg.is_notification());
/// ```
pub fn decode(data: &str) -> Result<Message> {
    let value: Value = serde_json::from_str(data).map_err(|e| {
        debug!(error = %e, "message body is not valid JSON");
        Error::JsonRpc(ResponseError::parse_error())
    })?;

    match classify(&value) {
        Some(MessageKind::Request) => Ok(Message::Request(from_classified(value)?)),
        Some(MessageKind::Notification) => Ok(Message::Notification(from_classified(value)?)),
        Some(MessageKind::Response) => Ok(Message::Response(from_classified(value)?)),
        None => {
            debug!("value is not a request, notification, or response");
            Err(Error::JsonRpc(ResponseError::invalid_request(
                "Message is not a request, notification, or response",
            )))
        }
    }
}

/// Deserialize a value that already passed a classification predicate.
fn from_classified<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value)
        .map_err(|e| Error::JsonRpc(ResponseError::invalid_request(e.to_string())))
}

/// Decode a JSON string to a specific type, bypassing classification.
///
/// Use this when you already know exactly which shape to expect.
///
/// # Errors
///
/// Returns [`Error::Serialization`] if the JSON doesn't match the type.
pub fn decode_as<'de, T: serde::Deserialize<'de>>(data: &'de str) -> Result<T> {
    serde_json::from_str(data).map_err(|e| Error::Serialization(e.to_string()))
}

/// Encode a request to JSON. Type-safe wrapper around [`encode`].
pub fn encode_request(req: &RequestMessage) -> Result<String> {
    encode(req)
}

/// Encode a notification to JSON. Type-safe wrapper around [`encode`].
pub fn encode_notification(notif: &NotificationMessage) -> Result<String> {
    encode(notif)
}

/// Encode a response to JSON. Type-safe wrapper around [`encode`].
pub fn encode_response(resp: &ResponseMessage) -> Result<String> {
    encode(resp)
}

/// Decode a JSON string to a request. Use [`decode`] when unsure of the kind.
pub fn decode_request(data: &str) -> Result<RequestMessage> {
    decode_as(data)
}

/// Decode a JSON string to a notification.
pub fn decode_notification(data: &str) -> Result<NotificationMessage> {
    decode_as(data)
}

/// Decode a JSON string to a response.
pub fn decode_response(data: &str) -> Result<ResponseMessage> {
    decode_as(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Id;
    use serde_json::json;

    #[test]
    fn test_request_with_numeric_id() {
        let candidate = json!({"jsonrpc": "2.0", "id": 1, "method": "foo", "params": [1, 2]});
        assert!(is_request_message(&candidate));
        assert!(!is_notification_message(&candidate));
        assert!(!is_response_message(&candidate));
        assert_eq!(classify(&candidate), Some(MessageKind::Request));
    }

    #[test]
    fn test_request_with_string_id() {
        let candidate = json!({"jsonrpc": "2.0", "id": "abc", "method": "foo"});
        assert!(is_request_message(&candidate));
    }

    #[test]
    fn test_notification_has_no_id_key() {
        let candidate = json!({"jsonrpc": "2.0", "method": "foo"});
        assert!(is_notification_message(&candidate));
        assert!(!is_request_message(&candidate));
        assert_eq!(classify(&candidate), Some(MessageKind::Notification));
    }

    #[test]
    fn test_null_id_fails_request_and_notification() {
        // Null id: legal to construct, but recognized as neither a request
        // (no usable id) nor a notification (the key is present).
        let candidate = json!({"jsonrpc": "2.0", "id": null, "method": "foo"});
        assert!(!is_request_message(&candidate));
        assert!(!is_notification_message(&candidate));
        assert!(!is_response_message(&candidate));
        assert_eq!(classify(&candidate), None);
    }

    #[test]
    fn test_response_with_null_result() {
        let candidate = json!({"jsonrpc": "2.0", "id": "abc", "result": null});
        assert!(is_response_message(&candidate));
        assert_eq!(classify(&candidate), Some(MessageKind::Response));
    }

    #[test]
    fn test_response_with_error_and_null_id() {
        let candidate = json!({
            "jsonrpc": "2.0",
            "id": null,
            "error": {"code": -32700, "message": "Parse error"}
        });
        assert!(is_response_message(&candidate));
    }

    #[test]
    fn test_null_error_is_not_a_response() {
        let candidate = json!({"jsonrpc": "2.0", "id": 1, "error": null});
        assert!(!is_response_message(&candidate));
    }

    #[test]
    fn test_falsy_error_is_not_a_response() {
        // false, zero, and the empty string are as meaningless as null in
        // the error slot; none of them make the candidate a response.
        for error in [json!(false), json!(0), json!(0.0), json!("")] {
            let candidate = json!({"jsonrpc": "2.0", "id": 1, "error": error});
            assert!(
                !is_response_message(&candidate),
                "falsy error value must not classify as a response: {:?}",
                candidate
            );
        }

        // A real error object still does, as does any other truthy value.
        let candidate = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "error": {"code": -32700, "message": "Parse error"}
        });
        assert!(is_response_message(&candidate));
        let odd = json!({"jsonrpc": "2.0", "id": 1, "error": "broke"});
        assert!(is_response_message(&odd));
    }

    #[test]
    fn test_predicates_are_total() {
        // Arbitrary shapes must classify as false, never panic.
        for candidate in [
            json!(null),
            json!(42),
            json!("text"),
            json!([1, 2, 3]),
            json!({}),
            json!({"method": 5, "id": 1}),
            json!({"id": 1}),
        ] {
            assert!(!is_request_message(&candidate));
            assert!(!is_notification_message(&candidate));
            assert!(!is_response_message(&candidate));
            assert_eq!(classify(&candidate), None);
        }
    }

    #[test]
    fn test_method_named_request_without_id_is_notification() {
        // Overlap resolution: only the id key separates the two kinds.
        let with_id = json!({"jsonrpc": "2.0", "id": 7, "method": "m"});
        let without_id = json!({"jsonrpc": "2.0", "method": "m"});
        assert_eq!(classify(&with_id), Some(MessageKind::Request));
        assert_eq!(classify(&without_id), Some(MessageKind::Notification));
    }

    #[test]
    fn test_decode_request() {
        let msg = decode(r#"{"jsonrpc":"2.0","method":"test","id":1}"#).unwrap();
        match msg {
            Message::Request(req) => {
                assert_eq!(req.method, "test");
                assert_eq!(req.id, Id::Number(1));
            }
            other => panic!("expected request, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_notification() {
        let msg = decode(r#"{"jsonrpc":"2.0","method":"notify"}"#).unwrap();
        assert!(msg.is_notification());
    }

    #[test]
    fn test_decode_response() {
        let msg = decode(r#"{"jsonrpc":"2.0","result":42,"id":1}"#).unwrap();
        assert!(msg.is_response());
    }

    #[test]
    fn test_decode_invalid_json_is_parse_error() {
        let result = decode("not valid json");
        match result {
            Err(Error::JsonRpc(err)) => assert_eq!(err.code, -32700),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_unclassifiable_is_invalid_request() {
        let result = decode(r#"{"jsonrpc":"2.0","id":null,"method":"foo"}"#);
        match result {
            Err(Error::JsonRpc(err)) => assert_eq!(err.code, -32600),
            other => panic!("expected invalid request, got {:?}", other),
        }
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let req = RequestMessage::new("test_method", None, Id::Number(1));
        let encoded = encode_request(&req).unwrap();
        let decoded = decode_request(&encoded).unwrap();

        assert_eq!(decoded.method, "test_method");
        assert_eq!(decoded.id, Id::Number(1));
        assert_eq!(decoded.jsonrpc, "2.0");
    }

    #[test]
    fn test_encode_decode_error_response() {
        let resp = ResponseMessage::error(
            ResponseError::method_not_found("unknown"),
            Id::Number(99),
        );
        let encoded = encode_response(&resp).unwrap();
        let decoded = decode_response(&encoded).unwrap();

        assert!(decoded.is_error());
        assert_eq!(decoded.id, Id::Number(99));
    }
}
