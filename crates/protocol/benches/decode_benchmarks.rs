//! Console decoding benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use protocol::{ConsoleDecoder, CONSOLE_API_CALLED, LOG_ENTRY_ADDED};
use serde_json::{json, Value};

fn console_call(arg_count: usize) -> Value {
    let args: Vec<Value> = (0..arg_count)
        .map(|i| {
            if i % 2 == 0 {
                json!({ "type": "string", "value": format!("value {}", i) })
            } else {
                json!({ "type": "object", "objectId": format!("obj-{}", i) })
            }
        })
        .collect();

    json!({
        "type": "log",
        "args": args,
        "executionContextId": 1,
        "timestamp": 0.0,
        "stackTrace": {
            "callFrames": [
                { "functionName": "main", "scriptId": "1", "url": "https://example.com/app.js",
                  "lineNumber": 120, "columnNumber": 8 }
            ]
        }
    })
}

/// Benchmark decoding `Runtime.consoleAPICalled` by argument count.
fn bench_console_api_called(c: &mut Criterion) {
    let decoder = ConsoleDecoder::default();
    let mut group = c.benchmark_group("console_api_called");

    for arg_count in [0, 1, 8, 64] {
        let params = console_call(arg_count);
        group.bench_with_input(BenchmarkId::from_parameter(arg_count), &params, |b, params| {
            b.iter(|| black_box(decoder.decode_event(CONSOLE_API_CALLED, params)))
        });
    }

    group.finish();
}

/// Benchmark decoding `Log.entryAdded`.
fn bench_log_entry_added(c: &mut Criterion) {
    let decoder = ConsoleDecoder::default();
    let params = json!({
        "entry": {
            "source": "network",
            "level": "error",
            "text": "Failed to load resource",
            "timestamp": 0.0,
            "url": "https://example.com/missing.png"
        }
    });

    c.bench_function("log_entry_added", |b| {
        b.iter(|| black_box(decoder.decode_event(LOG_ENTRY_ADDED, &params)))
    });
}

criterion_group!(benches, bench_console_api_called, bench_log_entry_added);
criterion_main!(benches);
