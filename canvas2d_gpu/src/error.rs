//! Error types for the Canvas2D GPU core
//!
//! This module defines the error types used throughout the crate,
//! including GPU backend failures, shader compilation and resource management.

use std::fmt;

/// Result type for Canvas2D GPU operations
pub type Result<T> = std::result::Result<T, Error>;

/// Canvas2D GPU errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Backend-specific error (GL, Vulkan, mock, etc.)
    BackendError(String),

    /// Out of GPU memory
    OutOfMemory,

    /// Invalid resource (stencil buffer, program, shader, etc.)
    InvalidResource(String),

    /// Initialization failed (engine, resource cache, subsystems)
    InitializationFailed(String),

    /// Shader source was rejected by the compiler (carries the compiler log)
    ShaderCompilationFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::OutOfMemory => write!(f, "Out of GPU memory"),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::ShaderCompilationFailed(msg) => write!(f, "Shader compilation failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Log an error and build an `Error::BackendError` from the formatted message
///
/// # Example
///
/// ```no_run
/// # use canvas2d_gpu::engine_err;
/// # let id = 0;
/// let err = engine_err!("canvas2d::ResourceCache", "Stencil buffer {} not found", id);
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::canvas2d::Error::BackendError(message)
    }};
}

/// Log an error and return early with `Err(Error::BackendError(..))`
///
/// # Example
///
/// ```no_run
/// # use canvas2d_gpu::engine_bail;
/// # fn check(samples: u32) -> canvas2d_gpu::canvas2d::Result<()> {
/// engine_bail!("canvas2d::ResourceCache", "Invalid sample count {}", samples);
/// # }
/// ```
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
