use contact_form::setup_logging;

#[test]
fn test_logging_setup_is_idempotent() {
    // Warm Lambda containers may run setup more than once per process.
    let result = std::panic::catch_unwind(|| {
        setup_logging();
        setup_logging();
    });

    assert!(result.is_ok(), "setup_logging should tolerate repeat calls");
    tracing::info!(check = "logging", "subscriber installed");
}
