//! Unit tests for Engine singleton manager
//!
//! Tests initialization, the ResourceCache singleton, and logging APIs.
//!
//! IMPORTANT: ENGINE_STATE is a global OnceLock shared across all tests.
//! All tests are marked with #[serial] to run sequentially and avoid RwLock poisoning.
//! Other unit tests may log concurrently, so captured entries are filtered
//! by source before asserting on them.

use crate::canvas2d::{Engine, Error};
use crate::canvas2d::log::{Logger, LogEntry, LogSeverity};
use crate::gpu::mock_gpu::MockGpu;
use crate::resource::ResourceCacheConfig;
use std::sync::{Arc, Mutex};
use serial_test::serial;

// ============================================================================
// TEST HELPERS
// ============================================================================

/// Test logger that captures log entries for verification
struct TestLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogger {
    fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: Arc::clone(&entries) }, entries)
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

fn engine_entries(entries: &Arc<Mutex<Vec<LogEntry>>>) -> Vec<LogEntry> {
    entries.lock().unwrap()
        .iter()
        .filter(|e| e.source == "canvas2d::Engine")
        .cloned()
        .collect()
}

/// Reset engine state before each test
fn setup() {
    Engine::reset_for_testing();
    let _ = Engine::initialize();
}

// ============================================================================
// INITIALIZATION AND SHUTDOWN TESTS
// ============================================================================

#[test]
#[serial]
fn test_engine_initialize_idempotent() {
    setup();
    assert!(Engine::initialize().is_ok());
    assert!(Engine::initialize().is_ok());
}

#[test]
#[serial]
fn test_shutdown_clears_resource_cache() {
    setup();

    Engine::create_resource_cache(ResourceCacheConfig::default()).unwrap();
    assert!(Engine::resource_cache().is_ok());

    Engine::shutdown();
    Engine::initialize().unwrap();

    assert!(Engine::resource_cache().is_err());
}

#[test]
#[serial]
fn test_shutdown_idempotent() {
    setup();

    Engine::shutdown();
    Engine::shutdown();

    Engine::initialize().unwrap();
}

#[test]
#[serial]
fn test_reset_for_testing() {
    setup();

    Engine::create_resource_cache(ResourceCacheConfig::default()).unwrap();
    Engine::reset_for_testing();

    assert!(Engine::resource_cache().is_err());
}

// ============================================================================
// RESOURCE CACHE API TESTS
// ============================================================================

#[test]
#[serial]
fn test_create_resource_cache_with_config() {
    setup();

    let config = ResourceCacheConfig { max_count: 4, max_bytes: 1024 };
    Engine::create_resource_cache(config).unwrap();

    let cache = Engine::resource_cache().unwrap();
    assert_eq!(*cache.lock().unwrap().config(), config);
    assert!(cache.lock().unwrap().is_empty());
}

#[test]
#[serial]
fn test_create_resource_cache_twice_fails() {
    setup();

    Engine::create_resource_cache(ResourceCacheConfig::default()).unwrap();
    let result = Engine::create_resource_cache(ResourceCacheConfig::default());

    assert!(matches!(result, Err(Error::InitializationFailed(_))));
}

#[test]
#[serial]
fn test_resource_cache_not_created() {
    setup();

    match Engine::resource_cache() {
        Err(Error::InitializationFailed(msg)) => assert!(msg.contains("not created")),
        other => panic!("expected InitializationFailed, got {:?}", other.map(|_| ())),
    }
}

#[test]
#[serial]
fn test_resource_cache_shared_between_handles() {
    setup();
    Engine::create_resource_cache(ResourceCacheConfig::default()).unwrap();
    let (mut gpu, _calls) = MockGpu::context();

    let key = {
        let cache = Engine::resource_cache().unwrap();
        let mut cache = cache.lock().unwrap();
        cache.find_or_create_stencil_buffer(&mut gpu, 64, 64, 8, 0).unwrap()
    };

    let cache = Engine::resource_cache().unwrap();
    let mut cache = cache.lock().unwrap();
    assert!(cache.contains(key));
    cache.purge_all(&mut gpu);
}

#[test]
#[serial]
fn test_destroy_resource_cache_allows_recreate() {
    setup();

    Engine::create_resource_cache(ResourceCacheConfig::default()).unwrap();
    Engine::destroy_resource_cache().unwrap();
    assert!(Engine::resource_cache().is_err());

    assert!(Engine::create_resource_cache(ResourceCacheConfig::default()).is_ok());
}

#[test]
#[serial]
fn test_outstanding_handle_survives_destroy() {
    setup();
    Engine::create_resource_cache(ResourceCacheConfig::default()).unwrap();
    let handle = Engine::resource_cache().unwrap();

    Engine::destroy_resource_cache().unwrap();

    assert!(handle.lock().unwrap().is_empty());
    assert!(Engine::resource_cache().is_err());
}

// ============================================================================
// LOGGING API TESTS
// ============================================================================

#[test]
#[serial]
fn test_custom_logger_receives_lifecycle_logs() {
    setup();
    let (logger, entries) = TestLogger::new();
    Engine::set_logger(logger);

    Engine::create_resource_cache(ResourceCacheConfig::default()).unwrap();
    Engine::destroy_resource_cache().unwrap();

    Engine::reset_logger();

    let logged = engine_entries(&entries);
    assert_eq!(logged.len(), 2);
    assert!(logged.iter().all(|e| e.severity == LogSeverity::Info));
    assert!(logged[0].message.contains("ResourceCache singleton created"));
    assert!(logged[1].message.contains("ResourceCache singleton destroyed"));
}

#[test]
#[serial]
fn test_errors_are_logged_with_location() {
    setup();
    let (logger, entries) = TestLogger::new();
    Engine::set_logger(logger);

    let _ = Engine::resource_cache();

    Engine::reset_logger();

    let logged = engine_entries(&entries);
    assert_eq!(logged.len(), 1);
    assert_eq!(logged[0].severity, LogSeverity::Error);
    assert!(logged[0].file.is_some());
    assert!(logged[0].line.is_some());
}

#[test]
#[serial]
fn test_log_and_log_detailed() {
    let (logger, entries) = TestLogger::new();
    Engine::set_logger(logger);

    Engine::log(LogSeverity::Warn, "canvas2d::Engine", "plain".to_string());
    Engine::log_detailed(LogSeverity::Error, "canvas2d::Engine", "detailed".to_string(), "file.rs", 7);

    Engine::reset_logger();

    let logged = engine_entries(&entries);
    assert_eq!(logged.len(), 2);
    assert_eq!(logged[0].message, "plain");
    assert!(logged[0].file.is_none());
    assert_eq!(logged[1].file, Some("file.rs"));
    assert_eq!(logged[1].line, Some(7));
}

#[test]
#[serial]
fn test_reset_logger_detaches_custom_logger() {
    let (logger, entries) = TestLogger::new();
    Engine::set_logger(logger);
    Engine::reset_logger();

    Engine::log(LogSeverity::Info, "canvas2d::Engine", "after reset".to_string());

    assert!(engine_entries(&entries).is_empty());
}
