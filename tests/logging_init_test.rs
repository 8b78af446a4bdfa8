//! Logging setup can only happen once per process, so this file holds a
//! single test.

use app_utils::logging::init_tracing;
use app_utils::{format_size, generate_uuid, Error};

#[test]
fn test_init_tracing_once() {
    init_tracing(2).expect("first subscriber installs");

    // Exercise the instrumented paths with a subscriber present
    assert_eq!(format_size(None::<u64>), "0 B");
    assert_eq!(generate_uuid().len(), 36);

    let second = init_tracing(0);
    assert!(matches!(second, Err(Error::Logging(_))));
}
