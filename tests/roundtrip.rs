//! End-to-end walk through the message layer: declare a signature, resolve
//! its params, build the envelope, encode, decode, classify.

use jsonrpc_wire::{
    codec, error_codes, Id, Message, MessageSignature, NotificationType1, ParameterStructures,
    RequestMessage, RequestType1, RequestType3, ResponseError, ResponseMessage,
};
use serde_json::json;

#[test]
fn request_round_trip_by_position() {
    let concat: RequestType3<String, String, String, String, ()> =
        RequestType3::new("string/concat").unwrap();
    assert_eq!(concat.number_of_params(), 3);

    let params = concat
        .resolve_params(vec![json!("a"), json!("b"), json!("c")])
        .unwrap();
    let request = RequestMessage::new(concat.method(), params, Id::Number(7));

    let encoded = codec::encode_request(&request).unwrap();
    let value: serde_json::Value = serde_json::from_str(&encoded).unwrap();
    assert_eq!(value["params"], json!(["a", "b", "c"]));
    assert!(codec::is_request_message(&value));

    match codec::decode(&encoded).unwrap() {
        Message::Request(decoded) => {
            assert_eq!(decoded.method, "string/concat");
            assert_eq!(decoded.id, Id::Number(7));
        }
        other => panic!("expected request, got {:?}", other),
    }
}

#[test]
fn request_round_trip_by_name() {
    let put: RequestType1<serde_json::Value, bool, ()> =
        RequestType1::with_parameter_structures("store/put", ParameterStructures::ByName).unwrap();

    let params = put
        .resolve_params(vec![json!({"key": "k", "value": 42})])
        .unwrap();
    let request = RequestMessage::new(put.method(), params, Id::String("req-1".into()));

    let encoded = codec::encode_request(&request).unwrap();
    let value: serde_json::Value = serde_json::from_str(&encoded).unwrap();
    assert_eq!(value["params"], json!({"key": "k", "value": 42}));

    assert!(codec::decode(&encoded).unwrap().is_request());
}

#[test]
fn notification_round_trip() {
    let progress: NotificationType1<u64> = NotificationType1::new("work/progress").unwrap();
    let params = progress.resolve_params(vec![json!(80)]).unwrap();

    let notif = jsonrpc_wire::NotificationMessage::new(progress.method(), params);
    let encoded = codec::encode_notification(&notif).unwrap();

    let value: serde_json::Value = serde_json::from_str(&encoded).unwrap();
    assert!(codec::is_notification_message(&value));
    assert!(!codec::is_request_message(&value));

    assert!(codec::decode(&encoded).unwrap().is_notification());
}

#[test]
fn error_response_round_trip() {
    let error = ResponseError::with_data(
        error_codes::CONTENT_MODIFIED,
        "Content modified",
        json!({"uri": "file:///a.txt"}),
    );
    let response = ResponseMessage::error(error, Id::Number(3));

    let encoded = codec::encode_response(&response).unwrap();
    let value: serde_json::Value = serde_json::from_str(&encoded).unwrap();
    assert!(codec::is_response_message(&value));
    assert_eq!(value["error"]["code"], json!(-32801));
    assert_eq!(value["error"]["data"]["uri"], json!("file:///a.txt"));

    match codec::decode(&encoded).unwrap() {
        Message::Response(decoded) => {
            let err = decoded.error.expect("error must survive the round trip");
            assert!(error_codes::is_lsp_reserved(err.code));
        }
        other => panic!("expected response, got {:?}", other),
    }
}

#[test]
fn null_result_stays_a_success() {
    let response = ResponseMessage::success(serde_json::Value::Null, Id::String("abc".into()));
    let encoded = codec::encode_response(&response).unwrap();
    assert!(encoded.contains("\"result\":null"));

    match codec::decode(&encoded).unwrap() {
        Message::Response(decoded) => assert!(decoded.is_success()),
        other => panic!("expected response, got {:?}", other),
    }
}
