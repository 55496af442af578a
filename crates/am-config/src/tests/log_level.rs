use crate::LogLevel;

use std::str::FromStr;

use log::LevelFilter;

#[test]
fn test_all_named_levels_parse() {
    let cases = [
        ("off", LevelFilter::Off),
        ("error", LevelFilter::Error),
        ("warn", LevelFilter::Warn),
        ("info", LevelFilter::Info),
        ("debug", LevelFilter::Debug),
        ("trace", LevelFilter::Trace),
    ];

    for (input, expected) in cases {
        assert_eq!(LogLevel::from_str(input).unwrap().0, expected);
    }
}

#[test]
fn test_parse_is_case_insensitive() {
    assert_eq!(LogLevel::from_str("DEBUG").unwrap().0, LevelFilter::Debug);
}

#[test]
fn test_unknown_value_defaults_to_info() {
    assert_eq!(LogLevel::from_str("loud").unwrap().0, LevelFilter::Info);
}
