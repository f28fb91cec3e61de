//! Loading namespace configuration from disk.

use std::fs;

use hal_curie::config::parse_binding;
use hal_curie::report::{check, Severity};
use hal_curie::{ConfigError, NamespaceConfig};

const CONFIG: &str = r#"
[[namespace]]
name = "acme"
template = "https://docs.acme.com/relations/{rel}"

[[namespace]]
name = "item"
template = "https://acme.com/{rel}/item"

[[namespace]]
name = "legacy"
template = "https://acme.com/legacy"
"#;

#[test]
fn load_file_and_resolve() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("curies.toml");
    fs::write(&path, CONFIG).expect("write config");

    let registry = NamespaceConfig::load(&path)
        .and_then(NamespaceConfig::into_registry)
        .expect("load registry");

    assert_eq!(registry.len(), 3);
    assert_eq!(
        registry
            .compact("https://docs.acme.com/relations/widgets")
            .as_deref(),
        Some("acme:widgets")
    );
    assert_eq!(
        registry.expand("item:7").as_deref(),
        Some("https://acme.com/7/item")
    );
    assert_eq!(registry.expand("legacy:x"), None);
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("absent.toml");
    let err = NamespaceConfig::load(&path).expect_err("file is absent");
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn command_line_bindings_override_file() {
    let mut config = NamespaceConfig::from_toml_str(CONFIG).expect("parse");
    config.push(parse_binding("acme=https://acme.dev/rels/{rel}").expect("binding"));
    let registry = config.into_registry().expect("registry");

    assert_eq!(registry.names().next(), Some("acme"));
    assert_eq!(
        registry.expand("acme:next").as_deref(),
        Some("https://acme.dev/rels/next")
    );
}

#[test]
fn check_flags_inert_namespace() {
    let config = NamespaceConfig::from_toml_str(CONFIG).expect("parse");
    let report = check(&config);
    assert_eq!(report.results.len(), 3);
    assert_eq!(report.count(Severity::Pass), 2);
    assert_eq!(report.results[2].namespace, "legacy");
    assert_eq!(report.results[2].severity, Severity::Warning);
    assert!(report.all_passed());
}
