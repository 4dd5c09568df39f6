//! Integration tests for global logging setup: filter parsing and one-time installation

use studykit::logging::{LogConfig, LogFormat};
use studykit::Error;

// Installing a global subscriber is once per process, so every step that
// touches `RUST_LOG` or the global dispatcher lives in this single test.
#[test]
fn test_logging_init_errors() {
    std::env::remove_var("RUST_LOG");

    let bad = LogConfig::info().with_level("studykit=notalevel");
    assert!(matches!(bad.env_filter(), Err(Error::InvalidInput(_))));
    assert!(matches!(bad.init(), Err(Error::InvalidInput(_))));

    let config = LogConfig::warn().with_format(LogFormat::Compact);
    assert!(config.env_filter().is_ok());
    let _ = config.clone().init();

    assert!(matches!(config.init(), Err(Error::LoggingInit(_))));
}
