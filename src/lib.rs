//! Message-level JSON-RPC 2.0 wire contract
//!
//! This crate defines the message layer of a JSON-RPC 2.0 dialect: the wire
//! shapes of requests, responses, and notifications; the reserved error-code
//! taxonomy; a typed-signature mechanism that declares a method's arity and
//! parameter-encoding convention at the call site; and the classification
//! predicates that recognize which of the three shapes an incoming value is.
//!
//! # Modules
//!
//! - **types**: The three message envelopes, `Id`, and the `params` shapes
//! - **error**: Reserved error codes, wire error objects, library errors
//! - **structures**: The auto/byPosition/byName parameter-structure policy
//! - **signature**: `RequestType0..9` / `NotificationType0..9` declarations
//! - **codec**: Classification predicates and string-level encode/decode
//!
//! # Architecture
//!
//! The crate is deliberately transport-free. Sockets, framing, connection
//! lifecycle, and request routing are external collaborators that consume
//! only the message-shape contracts and classification predicates defined
//! here. Every value in this crate is immutable after construction, so
//! declarations and messages can be shared across threads freely.
//!
//! # Example
//!
//! ```rust
//! use jsonrpc_wire::{codec, Id, MessageSignature, RequestMessage, RequestType2};
//! use serde_json::json;
//!
//! // Declare a method: two logical params, an i64 result, no error data.
//! let add: RequestType2<i64, i64, i64, ()> = RequestType2::new("math/add").unwrap();
//!
//! // Collapse call arguments into the wire `params` slot.
//! let params = add.resolve_params(vec![json!(5), json!(3)]).unwrap();
//!
//! // Build and encode the request envelope.
//! let request = RequestMessage::new(add.method(), params, Id::Number(1));
//! let encoded = codec::encode_request(&request).unwrap();
//!
//! // An inbound copy classifies back as a request.
//! let decoded = codec::decode(&encoded).unwrap();
//! assert!(decoded.is_request());
//! ```

pub mod codec;
pub mod error;
pub mod signature;
pub mod structures;
pub mod types;

// Re-export the commonly used surface so consumers can write
// `jsonrpc_wire::RequestType1` instead of spelling out the module path.
pub use codec::MessageKind;
pub use error::{error_codes, Error, ResponseError, Result};
pub use signature::{
    MessageSignature, NotificationType, NotificationType0, NotificationType1, NotificationType2,
    NotificationType3, NotificationType4, NotificationType5, NotificationType6, NotificationType7,
    NotificationType8, NotificationType9, RequestType, RequestType0, RequestType1, RequestType2,
    RequestType3, RequestType4, RequestType5, RequestType6, RequestType7, RequestType8,
    RequestType9,
};
pub use structures::ParameterStructures;
pub use types::{
    Id, Message, NotificationMessage, Params, RequestMessage, ResponseMessage, JSONRPC_VERSION,
};
