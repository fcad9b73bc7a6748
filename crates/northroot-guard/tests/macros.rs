use northroot_guard::{guard_null, guard_null_or_empty, guard_null_or_white_space, GuardError};

#[test]
fn guard_null_names_parameter_after_expression() {
    let timeout_ms: Option<u64> = None;
    let err = guard_null!(timeout_ms).unwrap_err();
    assert_eq!(err.param_name(), "timeout_ms");
    assert_eq!(err.to_string(), "timeout_ms is null.");

    let timeout_ms = Some(250u64);
    assert_eq!(guard_null!(timeout_ms).unwrap(), 250);
}

#[test]
fn guard_null_accepts_explicit_name() {
    let err = guard_null!(None::<u8>, "retries").unwrap_err();
    assert_eq!(err.param_name(), "retries");
}

#[test]
fn guard_null_or_empty_names_parameter() {
    let path: Option<&str> = Some("");
    let err = guard_null_or_empty!(path).unwrap_err();
    assert!(matches!(err, GuardError::EmptyString { ref param_name } if param_name == "path"));
}

#[test]
fn guard_null_or_white_space_names_parameter() {
    let principal: Option<&str> = Some(" \t");
    let err = guard_null_or_white_space!(principal).unwrap_err();
    assert_eq!(err.to_string(), "principal is an empty or white-space string.");

    let principal = Some("service:ingest");
    assert_eq!(
        guard_null_or_white_space!(principal, "principal_id").unwrap(),
        "service:ingest"
    );
}
