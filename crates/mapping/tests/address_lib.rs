// Path: crates/mapping/tests/address_lib.rs

//! The global `address` constructor as scripts see it.

use tos_mapping::open_libs;
use tos_test_utils::fixtures::{ADDR_20_BYTES, ADDR_A_LOWER, ADDR_A_UPPER};
use tos_test_utils::randomness::TestRng;
use tos_test_utils::{assert_canonical_hex, assert_err, assert_ok};
use tos_types::config::MappingConfig;
use tos_types::error::{ArgumentError, CodecError, MappingError, RuntimeError};
use tos_types::kind::Slot;
use tos_vm_host::{Runtime, Value};

fn runtime() -> Runtime {
    tos_telemetry::init_test_tracing();
    let mut rt = Runtime::new();
    assert_ok!(open_libs(&mut rt, &MappingConfig::default()));
    rt
}

fn address(rt: &Runtime, raw: Value) -> Result<Value, RuntimeError> {
    rt.call_global("address", &[raw])
}

#[test]
fn constructor_canonicalizes_and_types_addresses() {
    let rt = runtime();
    let upper = assert_ok!(address(&rt, Value::from(ADDR_A_UPPER)));
    let lower = assert_ok!(address(&rt, Value::from(ADDR_A_LOWER)));

    assert_eq!(rt.type_of(&upper), "address");
    assert_eq!(rt.tostring(&upper).unwrap(), ADDR_A_LOWER);
    assert_eq!(upper, lower);
    assert_ne!(upper, Value::from(ADDR_A_LOWER));
}

#[test]
fn surrounding_whitespace_is_ignored() {
    let rt = runtime();
    let padded = format!("  {ADDR_A_UPPER}\n");
    let addr = assert_ok!(address(&rt, Value::from(padded)));
    assert_eq!(rt.tostring(&addr).unwrap(), ADDR_A_LOWER);
}

#[test]
fn malformed_strings_raise_codec_errors() {
    let rt = runtime();

    let err = assert_err!(address(&rt, Value::from("0x1234")));
    assert_eq!(
        err,
        RuntimeError::BadArgument {
            position: 1,
            function: "address".into(),
            source: ArgumentError::Mapping(MappingError::Codec {
                slot: Slot::Argument,
                source: CodecError::InvalidLength {
                    kind: "address",
                    expected: 64,
                    got: 4
                },
            }),
        }
    );

    let err = assert_err!(address(&rt, Value::from(ADDR_20_BYTES)));
    assert!(err.to_string().contains("expected address with 64 hex chars"));

    let no_prefix = &ADDR_A_LOWER[2..];
    let err = assert_err!(address(&rt, Value::from(no_prefix)));
    assert!(err.to_string().contains("expected address with 0x prefix"));

    let bad_digit = format!("0x{}", "g".repeat(64));
    let err = assert_err!(address(&rt, Value::from(bad_digit)));
    assert!(err.to_string().contains("invalid address hex string"));
}

#[test]
fn non_string_arguments_are_rejected() {
    let rt = runtime();
    let err = assert_err!(address(&rt, Value::from(1u64)));
    assert_eq!(
        err.to_string(),
        "bad argument #1 to 'address' (string expected, got number)"
    );
    assert!(address(&rt, Value::Bool(true)).is_err());
    assert!(address(&rt, Value::Nil).is_err());
}

#[test]
fn random_mixed_case_inputs_are_canonical() {
    let rt = runtime();
    let mut rng = TestRng::with_default_seed();
    for _ in 0..64 {
        let raw = rng.mixed_case_hex32();
        let addr = assert_ok!(address(&rt, Value::from(raw.as_str())));
        let rendered = rt.tostring(&addr).unwrap();
        assert_canonical_hex!(rendered.as_str());
        assert_eq!(rendered, raw.to_ascii_lowercase());
    }
}

#[test]
fn addresses_work_as_mapping_values() {
    let rt = runtime();
    let m = assert_ok!(rt.call(
        "mapping",
        "new",
        &[Value::from("u256"), Value::from("address")]
    ));
    let a = assert_ok!(address(&rt, Value::from(ADDR_A_UPPER)));
    rt.set_index(&m, Value::from(1u64), a.clone()).unwrap();

    let stored = rt.index(&m, &Value::from(1u64)).unwrap();
    assert_eq!(stored, a);
    assert_eq!(rt.type_of(&stored), "address");
}
