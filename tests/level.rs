//! Tests for log level functionality.

use twinlog::Level;

#[test]
fn level_display() {
    assert_eq!(Level::Info.to_string(), "info");
    assert_eq!(Level::Error.to_string(), "error");
}

#[test]
fn level_from_str() {
    assert_eq!("info".parse::<Level>().unwrap(), Level::Info);
    assert_eq!("ERROR".parse::<Level>().unwrap(), Level::Error);
    assert_eq!("err".parse::<Level>().unwrap(), Level::Error);
}

#[test]
fn level_from_str_invalid() {
    assert!("warn".parse::<Level>().is_err());
}

#[test]
fn level_default() {
    assert_eq!(Level::default(), Level::Info);
    assert_eq!(Level::all(), [Level::Info, Level::Error]);
}
