//! Resource management module
//!
//! GPU resources shared across draws: scratch keys, the stencil buffer
//! resource, the cache that owns them, and the weak attachment held by
//! render targets.

mod resource_key;
mod gpu_resource;
mod stencil_buffer;
mod resource_cache;
mod stencil_attachment;

pub use resource_key::{ResourceType, ScratchKey};
pub use gpu_resource::{GpuResource, LifeCycle, ResourceHeader, ResourceId};
pub use stencil_buffer::StencilBuffer;
pub use resource_cache::{ResourceCache, ResourceCacheConfig, StencilBufferKey};
pub use stencil_attachment::StencilAttachment;
