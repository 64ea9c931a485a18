//! End-to-end decoding of recorded console events.

use std::sync::Arc;

use console::{ConsoleMessageLocation, ConsoleMessageType};
use protocol::{ConsoleDecoder, DecoderConfig, CONSOLE_API_CALLED, LOG_ENTRY_ADDED};
use serde_json::json;

#[test]
fn test_console_error_with_stack() {
    let decoder = ConsoleDecoder::default();
    let params = json!({
        "type": "error",
        "args": [
            { "type": "string", "value": "boom" },
            { "type": "object", "subtype": "error", "className": "Error",
              "description": "Error: boom\n    at main (app.js:11:5)", "objectId": "-1.2.1" }
        ],
        "executionContextId": 3,
        "timestamp": 1718000000000.0,
        "stackTrace": {
            "callFrames": [
                { "functionName": "main", "scriptId": "21", "url": "app.js",
                  "lineNumber": 10, "columnNumber": 4 }
            ]
        }
    });

    let decoded = decoder.decode_event(CONSOLE_API_CALLED, &params).unwrap().unwrap();
    let message = decoded.message.unwrap();

    assert_eq!(message.message_type(), ConsoleMessageType::Error);
    assert_eq!(message.text(), "boom JSHandle@error");
    assert_eq!(message.args().len(), 2);
    assert_eq!(message.args()[0].object_id(), None);
    assert_eq!(message.args()[1].object_id(), Some("-1.2.1"));
    assert_eq!(
        message.location(),
        ConsoleMessageLocation::new()
            .with_url("app.js")
            .with_line_number(10)
            .with_column_number(4)
    );
    assert!(decoded.objects_to_release.is_empty());
}

#[test]
fn test_every_console_type_decodes() {
    let decoder = ConsoleDecoder::default();
    for message_type in ConsoleMessageType::ALL {
        let params = json!({
            "type": message_type.as_str(),
            "args": [],
            "executionContextId": 1
        });
        let decoded = decoder.decode_event(CONSOLE_API_CALLED, &params).unwrap().unwrap();
        let message = decoded.message.unwrap();
        assert_eq!(message.message_type(), message_type);
        assert!(message.location().is_empty());
    }
}

#[test]
fn test_args_shared_with_lifecycle_owner() {
    let decoder = ConsoleDecoder::default();
    let params = json!({
        "type": "table",
        "args": [
            { "type": "object", "subtype": "array", "objectId": "a" },
            { "type": "object", "objectId": "b" },
            { "type": "object", "objectId": "c" }
        ],
        "executionContextId": 9
    });

    let message = decoder
        .decode_event(CONSOLE_API_CALLED, &params)
        .unwrap()
        .unwrap()
        .message
        .unwrap();

    // The handle-lifecycle side keeps its own references and disposes them.
    let owned: Vec<_> = message.args().to_vec();
    let released: Vec<_> = owned.iter().filter_map(|handle| handle.dispose()).collect();
    assert_eq!(released, vec!["a", "b", "c"]);

    for (stored, held) in message.args().iter().zip(&owned) {
        assert!(Arc::ptr_eq(stored, held));
        assert!(stored.is_disposed());
    }
    assert_eq!(message.args().len(), 3);
}

#[test]
fn test_log_entries() {
    let decoder = ConsoleDecoder::default();

    let network = json!({
        "entry": {
            "source": "network",
            "level": "error",
            "text": "Failed to load resource: the server responded with a status of 404",
            "timestamp": 1.0,
            "url": "https://example.com/favicon.ico"
        }
    });
    let message = decoder
        .decode_event(LOG_ENTRY_ADDED, &network)
        .unwrap()
        .unwrap()
        .message
        .unwrap();
    assert_eq!(message.message_type(), ConsoleMessageType::Error);
    assert_eq!(message.location().url(), Some("https://example.com/favicon.ico"));
    assert_eq!(message.location().line_number(), None);

    let worker = json!({
        "entry": {
            "source": "worker",
            "level": "verbose",
            "text": "worker started",
            "timestamp": 2.0,
            "args": [{ "type": "object", "objectId": "w-1" }]
        }
    });
    let decoded = decoder.decode_event(LOG_ENTRY_ADDED, &worker).unwrap().unwrap();
    assert!(decoded.message.is_none());
    assert_eq!(decoded.objects_to_release, vec!["w-1"]);

    let decoder = ConsoleDecoder::new(DecoderConfig::permissive());
    let decoded = decoder.decode_event(LOG_ENTRY_ADDED, &worker).unwrap().unwrap();
    assert_eq!(decoded.message.unwrap().message_type(), ConsoleMessageType::Verbose);
}

#[test]
fn test_unknown_context_is_dropped() {
    let params = json!({
        "type": "log",
        "args": [{ "type": "string", "value": "from nowhere" }],
        "executionContextId": 0
    });

    let decoded = ConsoleDecoder::default()
        .decode_event(CONSOLE_API_CALLED, &params)
        .unwrap()
        .unwrap();
    assert!(decoded.message.is_none());
    assert!(decoded.objects_to_release.is_empty());
}

#[test]
fn test_unknown_type_is_an_error() {
    let params = json!({ "type": "shout", "args": [], "executionContextId": 1 });
    let err = ConsoleDecoder::default()
        .decode_event(CONSOLE_API_CALLED, &params)
        .unwrap_err();
    assert_eq!(err.to_string(), "Unknown console message type: shout");
}
