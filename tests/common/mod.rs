#![allow(dead_code)]

use apispec_webframeworks::spec::{ApiSpec, Plugin};
use serde_yaml::Value;

/// Document versions every scenario runs against.
pub const OPENAPI_VERSIONS: [&str; 2] = ["2.0", "3.0.0"];

/// One spec per entry of [`OPENAPI_VERSIONS`], each with its own plugin.
pub fn specs<P: Plugin + 'static>(plugin: impl Fn() -> P) -> Vec<ApiSpec> {
    OPENAPI_VERSIONS
        .iter()
        .map(|version| ApiSpec::new("Swagger Petstore", "1.0.0", *version).plugin(plugin()))
        .collect()
}

/// The `paths` object of the rendered document.
pub fn get_paths(spec: &ApiSpec) -> Value {
    let document = spec.to_value().expect("spec renders");
    document.get("paths").cloned().unwrap_or(Value::Null)
}

/// Parse an expected value written as YAML.
pub fn yaml(source: &str) -> Value {
    serde_yaml::from_str(source).expect("expected value is valid YAML")
}

/// Capture `tracing` output in the test writer for the current thread.
pub fn init_test_logging() -> tracing::subscriber::DefaultGuard {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .finish();
    tracing::subscriber::set_default(subscriber)
}
