use std::fs;
use std::path::Path;
use tempfile::TempDir;
use twinlog::{Config, Error, Logger};

#[test]
fn empty_config_uses_defaults() {
    let config = Config::from_toml("").unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.info.resolved_path(), Path::new("."));
    assert_eq!(config.info.filename_or("fallback.log"), "fallback.log");
    assert!(config.format.auto_newline);
}

#[test]
fn sections_are_parsed() {
    let config = Config::from_toml(
        r#"
[info]
path = "/var/log/app"
filename = "app.log"

[error]
filename = "app.err"

[format]
auto_newline = false
auto_thread_id = true
date_format = "%d/%m/%Y"
"#,
    )
    .unwrap();

    assert_eq!(config.info.resolved_path(), Path::new("/var/log/app"));
    assert_eq!(config.info.filename_or("x"), "app.log");
    assert_eq!(config.error.resolved_path(), Path::new("."));
    assert_eq!(config.error.filename_or("x"), "app.err");
    assert!(!config.format.auto_newline);
    assert!(config.format.auto_thread_id);
    assert_eq!(config.format.date_format, "%d/%m/%Y");
    assert_eq!(config.format.time_format, "%H:%M:%S");
}

#[test]
fn tilde_is_expanded() {
    let config = Config::from_toml("[info]\npath = \"~/logs\"\n").unwrap();
    assert!(!config.info.resolved_path().starts_with("~"));
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let err = Config::from_toml("[format]\nauto_date = \"yes\"\n").unwrap_err();
    assert!(matches!(err, Error::ConfigParse(_)));
}

#[test]
fn missing_file_yields_defaults() {
    let tmp = TempDir::new().unwrap();
    let config = Config::load_from(&tmp.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn logger_from_config_file() {
    let tmp = TempDir::new().unwrap();
    let logs = tmp.path().join("logs");
    let config_path = tmp.path().join("twinlog.toml");
    fs::write(
        &config_path,
        format!(
            "[info]\npath = \"{dir}\"\nfilename = \"i.log\"\n\n[error]\npath = \"{dir}\"\nfilename = \"e.log\"\n\n[format]\nauto_newline = false\n",
            dir = logs.display()
        ),
    )
    .unwrap();

    let config = Config::load_from(&config_path).unwrap();
    let logger = Logger::from_config(&config);
    logger.log("info").unwrap();
    logger.log_error("error").unwrap();

    assert_eq!(fs::read_to_string(logs.join("i.log")).unwrap(), "info");
    assert_eq!(fs::read_to_string(logs.join("e.log")).unwrap(), "error");
}
