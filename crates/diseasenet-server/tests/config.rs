use std::collections::HashMap;
use std::path::PathBuf;

use diseasenet_core::models::report::ReportFormat;
use diseasenet_server::config::ServerConfig;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn unset_variables_take_defaults() {
    let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.model_path, PathBuf::from("assets/model.json"));
    assert_eq!(config.addr.to_string(), "127.0.0.1:8080");
    assert_eq!(config.report_format, ReportFormat::Pdf);
}

#[test]
fn variables_override_defaults() {
    let config = ServerConfig::from_lookup(lookup(&[
        ("DISEASENET_MODEL", "/srv/model.json"),
        ("DISEASENET_ADDR", "0.0.0.0:9000"),
        ("DISEASENET_REPORT_FORMAT", "DOCX"),
    ]))
    .unwrap();
    assert_eq!(config.model_path, PathBuf::from("/srv/model.json"));
    assert_eq!(config.addr.port(), 9000);
    assert_eq!(config.report_format, ReportFormat::Docx);
}

#[test]
fn invalid_values_are_errors() {
    assert!(ServerConfig::from_lookup(lookup(&[("DISEASENET_ADDR", "localhost")])).is_err());
    assert!(ServerConfig::from_lookup(lookup(&[("DISEASENET_REPORT_FORMAT", "rtf")])).is_err());
}
