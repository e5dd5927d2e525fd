/*!
# Canvas2D GPU core

GPU plumbing for a 2D rendering library.

This crate provides the pieces a GPU-accelerated 2D renderer needs below its
drawing API: a cached stencil buffer resource that remembers which clip it
last rasterized, and a vertex shader builder that declares attributes and
varyings, emits the device-to-NDC position transform, and compiles the
assembled GLSL source.

## Architecture

- **GpuContext**: explicit GPU context wrapping a `GpuInterface` backend
- **ResourceCache**: owns stencil buffers, indexed by scratch key
- **StencilBuffer**: stencil storage plus last-rendered clip state
- **StencilAttachment**: weak reference from a render target to its stencil
- **VertexShaderBuilder**: vertex stage of a GPU program
- **ProgramBuilder**: uniform registration and name mangling

Backends implement `GpuInterface`; every GPU call is synchronous and returns
a `Result`.
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod geometry;
pub mod gpu;
pub mod resource;
pub mod shader;

// Main canvas2d namespace module
pub mod canvas2d {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine singleton
    pub use crate::engine::Engine;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Device-space geometry and clip ids
    pub mod geometry {
        pub use crate::geometry::*;
    }

    // GPU context and backend interface
    pub mod gpu {
        pub use crate::gpu::*;
    }

    // Cached GPU resources
    pub mod resource {
        pub use crate::resource::*;
    }

    // Shader generation
    pub mod shader {
        pub use crate::shader::*;
    }
}

// Re-export math library at crate root
pub use glam;
