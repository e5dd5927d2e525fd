/// GPU module - explicit context object and the backend call interface

// Module declarations
pub mod gpu_interface;
pub mod glsl;
pub mod context;
pub mod stats;

// Re-export everything
pub use gpu_interface::*;
pub use glsl::*;
pub use context::*;
pub use stats::*;

// Mock GPU for tests (no GPU required)
#[cfg(test)]
pub mod mock_gpu;
