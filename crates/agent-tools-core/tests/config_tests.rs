//! Configuration loading from disk and thread-safety of public types.

use agent_tools_core::cli::{ExitCode, OutputFormat};
use agent_tools_core::{Error, GeneratorConfig, InvocationContext};
use std::fs;
use tempfile::TempDir;

const fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_public_types_are_send_sync() {
    assert_send_sync::<Error>();
    assert_send_sync::<GeneratorConfig>();
    assert_send_sync::<InvocationContext>();
    assert_send_sync::<OutputFormat>();
    assert_send_sync::<ExitCode>();
}

#[test]
fn test_load_full_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("agent-tools.toml");
    fs::write(
        &path,
        r#"
services_marker = "/api/"
command_file_pattern = "/api/v2/commands"
command_file = "acme/api/v2/commands.proto"
output_file = "generated/acme_tools.ts"
file_header = "Generated for acme. DO NOT EDIT."

[invocation]
client_package = "@acme/client"
client_type = "AcmeClient"
client_namespaces = ["models"]
client_factory = "getAcmeClient"
client_close_method = "close"
tools_export = "acmeTools"
"#,
    )
    .unwrap();

    let config = GeneratorConfig::load(&path).unwrap();

    assert_eq!(config.services_marker, "/api/");
    assert_eq!(config.command_file_pattern, "/api/v2/commands");
    assert_eq!(
        config.command_file.as_deref(),
        Some("acme/api/v2/commands.proto")
    );
    assert_eq!(config.output_file, "generated/acme_tools.ts");
    assert_eq!(config.invocation.client_type, "AcmeClient");
    assert_eq!(config.invocation.client_namespaces, vec!["models"]);
    assert_eq!(config.invocation.tools_export, "acmeTools");

    // untouched keys keep their defaults
    let defaults = InvocationContext::default();
    assert_eq!(config.invocation.schema_package, defaults.schema_package);
    assert_eq!(config.invocation.default_account_id, defaults.default_account_id);
}

#[test]
fn test_load_or_default_prefers_explicit_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "output_file = \"explicit.ts\"\n").unwrap();

    let config = GeneratorConfig::load_or_default(Some(&path)).unwrap();
    assert_eq!(config.output_file, "explicit.ts");
}

#[test]
fn test_load_rejects_invalid_identifier() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[invocation]\nclient_type = \"Acme Client\"\n").unwrap();

    let err = GeneratorConfig::load(&path).unwrap_err();

    assert!(err.is_config_error());
    assert!(err.to_string().contains("invocation.client_type"));
    assert_eq!(ExitCode::for_error(&err), ExitCode::INVALID_INPUT);
}

#[test]
fn test_load_reports_malformed_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "output_file = \n").unwrap();

    let err = GeneratorConfig::load(&path).unwrap_err();
    assert!(err.is_config_error());
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let err = GeneratorConfig::load(&path).unwrap_err();

    assert!(matches!(err, Error::Io { .. }));
    assert_eq!(ExitCode::for_error(&err), ExitCode::ERROR);
}

#[test]
fn test_default_path_location() {
    if let Some(path) = GeneratorConfig::default_path() {
        assert!(path.ends_with("agent-tools/config.toml"));
    }
}
