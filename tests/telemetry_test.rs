//! Integration tests for logging initialization and span helpers.

use std::collections::HashMap;
use std::io::Write;
use std::sync::{Arc, Mutex};

use envschema_rs::telemetry::{TelemetryConfig, init_logging};
use envschema_rs::{BaseType, FieldRule, Schema, validate_env_from};
use tracing_subscriber::fmt::MakeWriter;

/// Collects formatted log output in memory.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Captured;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` with a debug-level subscriber writing into the returned buffer.
fn capture<T>(f: impl FnOnce() -> T) -> (T, String) {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(captured.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    let out = tracing::subscriber::with_default(subscriber, f);
    (out, captured.text())
}

#[test]
fn logging_initializes() {
    // A subscriber can only be set once per process; a second call reports
    // false instead of panicking.
    let _ = init_logging(TelemetryConfig {
        default_level: "debug".to_string(),
        compact: true,
    });
    assert!(!init_logging(TelemetryConfig::default()));
}

#[test]
fn successful_pass_records_ok_outcome() {
    let schema = Schema::new()
        .field("DB_HOST", BaseType::String)
        .field("DB_PORT", FieldRule::with_default(BaseType::Port, 5432.0));
    let source = HashMap::from([("DB_HOST", "very-private-hostname")]);

    let (result, logs) = capture(|| validate_env_from(&schema, &source));

    assert!(result.is_ok());
    assert!(logs.contains("env.validate"), "{logs}");
    assert!(logs.contains("env.fields=2"), "{logs}");
    assert!(logs.contains("env.outcome") && logs.contains("ok"), "{logs}");
    assert!(logs.contains("environment valid"), "{logs}");
    assert!(logs.contains("DB_HOST") && logs.contains("using default"), "{logs}");
    assert!(!logs.contains("very-private-hostname"), "raw value leaked: {logs}");
}

#[test]
fn failed_pass_records_key_and_reason_without_raw_value() {
    let schema = Schema::new().field("API_PORT", BaseType::Port);
    let source = HashMap::from([("API_PORT", "hunter2-secret")]);

    let (result, logs) = capture(|| validate_env_from(&schema, &source));

    let err = result.unwrap_err();
    assert!(err.to_string().contains("hunter2-secret"));
    assert!(logs.contains("env.outcome") && logs.contains("failed"), "{logs}");
    assert!(logs.contains("environment invalid"), "{logs}");
    assert!(logs.contains("API_PORT"), "{logs}");
    assert!(logs.contains("invalid_port"), "{logs}");
    assert!(!logs.contains("hunter2-secret"), "raw value leaked: {logs}");
}

#[test]
fn missing_variable_is_logged_by_kind() {
    let schema = Schema::new().field("REQUIRED_TOKEN", BaseType::String);
    let source: HashMap<&str, &str> = HashMap::new();

    let (result, logs) = capture(|| validate_env_from(&schema, &source));

    assert!(result.is_err());
    assert!(logs.contains("REQUIRED_TOKEN") && logs.contains("missing"), "{logs}");
}
