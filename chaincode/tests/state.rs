//! State round-trip tests through the public entry points.

mod common;

use hello_chaincode::{SimpleChaincode, HELLO_WORLD_KEY};
use ledger_shim::{Chaincode, MemStub};

use common::*;

// ── Test: init then read hello_world ──

#[test]
fn test_init_then_read() {
    let cc = SimpleChaincode::new();
    let mut stub = MemStub::new();

    cc.init(&mut stub, "init", &args(&["hi there"])).unwrap();
    let value = cc.query(&stub, "read", &args(&[HELLO_WORLD_KEY])).unwrap();

    assert_eq!(value, b"hi there".to_vec());
}

// ── Test: write/read round trip over varied pairs ──

#[test]
fn test_write_read_round_trip() {
    let cc = SimpleChaincode::new();
    let mut stub = MemStub::new();

    let pairs = [
        ("a", "1"),
        ("with space", "value with spaces"),
        ("unicode-ключ", "значение ✓"),
        ("empty-value", ""),
        ("json", r#"{"nested":[1,2,3]}"#),
    ];
    for (key, value) in pairs {
        cc.invoke(&mut stub, "write", &args(&[key, value])).unwrap();
    }
    for (key, value) in pairs {
        let got = cc.query(&stub, "read", &args(&[key])).unwrap();
        assert_eq!(got, value.as_bytes(), "round trip failed for {key:?}");
    }
}

// ── Test: last write wins ──

#[test]
fn test_last_write_wins() {
    let cc = SimpleChaincode::new();
    let mut stub = MemStub::new();

    cc.invoke(&mut stub, "write", &args(&["a", "1"])).unwrap();
    cc.invoke(&mut stub, "write", &args(&["a", "2"])).unwrap();

    assert_eq!(cc.query(&stub, "read", &args(&["a"])).unwrap(), b"2".to_vec());
    assert_eq!(stub.len(), 1);
}

// ── Test: write can overwrite hello_world ──

#[test]
fn test_write_overwrites_init_value() {
    let cc = SimpleChaincode::new();
    let mut stub = MemStub::new();

    cc.init(&mut stub, "init", &args(&["hi there, I think,"])).unwrap();
    cc.invoke(&mut stub, "write", &args(&[HELLO_WORLD_KEY, "dude, go away"]))
        .unwrap();

    let value = cc.query(&stub, "read", &args(&[HELLO_WORLD_KEY])).unwrap();
    assert_eq!(value, b"dude, go away".to_vec());
}

// ── Test: read returns raw bytes untouched ──

#[test]
fn test_read_returns_raw_bytes() {
    let cc = SimpleChaincode::new();
    let mut stub = MemStub::new();
    stub.insert("bin", vec![0x00, 0xff, 0xfe]);

    let value = cc.query(&stub, "read", &args(&["bin"])).unwrap();
    assert_eq!(value, vec![0x00, 0xff, 0xfe]);
}

// ── Test: each write touches the stub exactly once ──

#[test]
fn test_single_store_operation_per_call() {
    let cc = SimpleChaincode::new();
    let mut stub = RecordingStub::new();

    cc.invoke(&mut stub, "write", &args(&["k", "v"])).unwrap();
    assert_eq!((stub.reads(), stub.writes()), (0, 1));

    cc.query(&stub, "read", &args(&["k"])).unwrap();
    assert_eq!((stub.reads(), stub.writes()), (1, 1));

    cc.init(&mut stub, "init", &args(&["x"])).unwrap();
    assert_eq!((stub.reads(), stub.writes()), (1, 2));
}
