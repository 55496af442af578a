//! Logger initialization. One test owns the process-global dispatcher.

use crate::logger;

use std::fs;

use am_config::LoggingConfig;

#[test]
fn test_initialize_with_file_target_writes_formatted_lines() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("client.log");

    let config = LoggingConfig {
        file: Some(log_path.clone()),
        ..LoggingConfig::default()
    };

    logger::initialize(&config).unwrap();
    log::info!("logger smoke line");
    log::logger().flush();

    let contents = fs::read_to_string(&log_path).unwrap();
    assert!(contents.contains("logger smoke line"));
    assert!(contents.contains("INFO"));

    // The global dispatcher is already set; a second apply must fail
    // cleanly rather than panic
    assert!(logger::initialize(&config).is_err());
}
