/// Canvas2D GPU core - Singleton manager for shared subsystems
///
/// Holds the process-wide resource cache and the logger. Uses thread-safe
/// static storage with RwLock for safe concurrent access.

use std::sync::{OnceLock, RwLock, Arc, Mutex};
use std::time::SystemTime;
use crate::resource::{ResourceCache, ResourceCacheConfig};
use crate::error::{Result, Error};
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

// ===== INTERNAL STATE =====

/// Global engine state storage
static ENGINE_STATE: OnceLock<EngineState> = OnceLock::new();

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

/// Internal state structure holding all engine singletons
struct EngineState {
    /// Resource cache singleton
    resource_cache: RwLock<Option<Arc<Mutex<ResourceCache>>>>,
}

impl EngineState {
    fn new() -> Self {
        Self {
            resource_cache: RwLock::new(None),
        }
    }
}

fn logger() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger::new())))
}

// ===== PUBLIC API =====

/// Main engine singleton manager
///
/// # Example
///
/// ```no_run
/// use canvas2d_gpu::canvas2d::Engine;
/// use canvas2d_gpu::canvas2d::resource::ResourceCacheConfig;
///
/// Engine::initialize()?;
/// Engine::create_resource_cache(ResourceCacheConfig::default())?;
///
/// let cache = Engine::resource_cache()?;
/// // cache.lock().unwrap().find_or_create_stencil_buffer(&mut gpu, 256, 256, 8, 0)?;
///
/// Engine::shutdown();
/// # Ok::<(), canvas2d_gpu::canvas2d::Error>(())
/// ```
pub struct Engine;

impl Engine {
    /// Log errors before returning them (internal use)
    fn log_and_return_error(error: Error) -> Error {
        match &error {
            Error::InitializationFailed(msg) => {
                crate::engine_error!("canvas2d::Engine", "Initialization failed: {}", msg);
            }
            Error::BackendError(msg) => {
                crate::engine_error!("canvas2d::Engine", "Backend error: {}", msg);
            }
            _ => {
                crate::engine_error!("canvas2d::Engine", "Engine error: {}", error);
            }
        }
        error
    }

    fn state() -> Result<&'static EngineState> {
        ENGINE_STATE.get()
            .ok_or_else(|| Self::log_and_return_error(
                Error::InitializationFailed("Engine not initialized. Call Engine::initialize() first.".to_string())
            ))
    }

    /// Initialize the engine
    ///
    /// Idempotent. Must be called before creating any subsystem.
    pub fn initialize() -> Result<()> {
        ENGINE_STATE.get_or_init(EngineState::new);
        Ok(())
    }

    /// Destroy all singletons
    ///
    /// Cached GPU resources are abandoned, not released: the GPU context
    /// that owns them is not reachable from here. Call
    /// `ResourceCache::purge_all` first to free them.
    pub fn shutdown() {
        if let Some(state) = ENGINE_STATE.get() {
            if let Ok(mut lock) = state.resource_cache.write() {
                if let Some(cache) = lock.take() {
                    if let Ok(mut cache) = cache.lock() {
                        cache.abandon_all();
                    }
                }
            }
            crate::engine_info!("canvas2d::Engine", "Engine shut down");
        }
    }

    // ===== RESOURCE CACHE API =====

    /// Create and register the resource cache singleton
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The engine is not initialized
    /// - A resource cache already exists
    pub fn create_resource_cache(config: ResourceCacheConfig) -> Result<()> {
        let state = Self::state()?;

        let mut lock = state.resource_cache.write()
            .map_err(|_| Self::log_and_return_error(
                Error::BackendError("ResourceCache lock poisoned".to_string())
            ))?;

        if lock.is_some() {
            return Err(Self::log_and_return_error(
                Error::InitializationFailed("ResourceCache already exists. Call Engine::destroy_resource_cache() first.".to_string())
            ));
        }

        *lock = Some(Arc::new(Mutex::new(ResourceCache::new(config))));

        crate::engine_info!("canvas2d::Engine",
            "ResourceCache singleton created (max {} resources, {} bytes)",
            config.max_count, config.max_bytes);

        Ok(())
    }

    /// Get the resource cache singleton
    ///
    /// # Errors
    ///
    /// Returns an error if the engine is not initialized or the cache has
    /// not been created.
    pub fn resource_cache() -> Result<Arc<Mutex<ResourceCache>>> {
        let state = Self::state()?;

        let lock = state.resource_cache.read()
            .map_err(|_| Self::log_and_return_error(
                Error::BackendError("ResourceCache lock poisoned".to_string())
            ))?;

        lock.clone()
            .ok_or_else(|| Self::log_and_return_error(
                Error::InitializationFailed("ResourceCache not created. Call Engine::create_resource_cache() first.".to_string())
            ))
    }

    /// Destroy the resource cache singleton
    ///
    /// Outstanding `Arc` handles stay valid until dropped. Resources still
    /// cached when the last handle goes away are abandoned.
    pub fn destroy_resource_cache() -> Result<()> {
        let state = Self::state()?;

        let mut lock = state.resource_cache.write()
            .map_err(|_| Self::log_and_return_error(
                Error::BackendError("ResourceCache lock poisoned".to_string())
            ))?;

        if let Some(cache) = lock.take() {
            if Arc::strong_count(&cache) == 1 {
                if let Ok(mut cache) = cache.lock() {
                    cache.abandon_all();
                }
            }
        }

        crate::engine_info!("canvas2d::Engine", "ResourceCache singleton destroyed");

        Ok(())
    }

    /// Reset all singletons for testing (only available in test builds)
    #[cfg(test)]
    pub fn reset_for_testing() {
        if let Some(state) = ENGINE_STATE.get() {
            if let Ok(mut lock) = state.resource_cache.write() {
                if let Some(cache) = lock.take() {
                    if let Ok(mut cache) = cache.lock() {
                        cache.abandon_all();
                    }
                }
            }
        }
    }

    // ===== LOGGING API =====

    /// Replace the logger
    ///
    /// # Example
    ///
    /// ```no_run
    /// use canvas2d_gpu::canvas2d::{Engine, log::{Logger, LogEntry}};
    ///
    /// struct FileLogger;
    /// impl Logger for FileLogger {
    ///     fn log(&self, entry: &LogEntry) {
    ///         // Write to file...
    ///     }
    /// }
    ///
    /// Engine::set_logger(FileLogger);
    /// ```
    pub fn set_logger<L: Logger + 'static>(logger_impl: L) {
        if let Ok(mut lock) = logger().write() {
            *lock = Box::new(logger_impl);
        }
    }

    /// Reset logger to `DefaultLogger::new()`
    pub fn reset_logger() {
        if let Ok(mut lock) = logger().write() {
            *lock = Box::new(DefaultLogger::new());
        }
    }

    /// Log without file:line (used by engine_trace! .. engine_warn!)
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        if let Ok(lock) = logger().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: None,
                line: None,
            });
        }
    }

    /// Log with file:line (used by engine_error!)
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        if let Ok(lock) = logger().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: Some(file),
                line: Some(line),
            });
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
