use log::LevelFilter;
use sea_battle::{init_logging, parse_level};

#[test]
fn test_parse_level() {
    assert_eq!(parse_level(None), LevelFilter::Info);
    assert_eq!(parse_level(Some("debug")), LevelFilter::Debug);
    assert_eq!(parse_level(Some(" TRACE ")), LevelFilter::Trace);
    assert_eq!(parse_level(Some("off")), LevelFilter::Off);
    assert_eq!(parse_level(Some("loud")), LevelFilter::Info);
}

#[test]
fn test_init_logging_is_idempotent() {
    let first = init_logging();
    assert_eq!(init_logging(), first);
}
