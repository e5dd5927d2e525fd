/// Render target side of the stencil relation.
///
/// A render target does not own its stencil buffer. It keeps a weak
/// `StencilBufferKey` into the resource cache, and resolves it on use. When
/// the cache has evicted the buffer the key is stale: resolution returns
/// None, forgets the key, and the caller attaches a fresh buffer.

use crate::error::Result;
use crate::gpu::GpuContext;
use super::resource_cache::{ResourceCache, StencilBufferKey};
use super::stencil_buffer::StencilBuffer;

/// Weak stencil buffer reference held by a render target
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StencilAttachment {
    key: Option<StencilBufferKey>,
}

impl StencilAttachment {
    pub fn new() -> Self {
        Self { key: None }
    }

    /// Whether a key is currently held (it may still be stale)
    pub fn is_attached(&self) -> bool {
        self.key.is_some()
    }

    pub fn key(&self) -> Option<StencilBufferKey> {
        self.key
    }

    /// Attach a cached stencil buffer matching the render target's shape,
    /// reusing a live one when possible.
    pub fn attach(
        &mut self,
        cache: &mut ResourceCache,
        gpu: &mut GpuContext,
        width: u32,
        height: u32,
        bits: u32,
        sample_count: u32,
    ) -> Result<StencilBufferKey> {
        if let Some(key) = self.key {
            if let Some(sb) = cache.get(key) {
                if sb.width() == width && sb.height() == height && sb.num_samples() == sample_count {
                    return Ok(key);
                }
            }
        }

        let key = cache.find_or_create_stencil_buffer(gpu, width, height, bits, sample_count)?;
        self.key = Some(key);
        Ok(key)
    }

    /// Resolve to the buffer, dropping the key if it went stale
    pub fn resolve<'a>(&mut self, cache: &'a ResourceCache) -> Option<&'a StencilBuffer> {
        let key = self.key?;
        let buffer = cache.get(key);
        if buffer.is_none() {
            crate::engine_debug!("canvas2d::StencilAttachment",
                "Stencil buffer {:?} was evicted, detaching", key);
            self.key = None;
        }
        buffer
    }

    /// Mutable resolution, for recording the last rendered clip
    pub fn resolve_mut<'a>(&mut self, cache: &'a mut ResourceCache) -> Option<&'a mut StencilBuffer> {
        let key = self.key?;
        if !cache.contains(key) {
            crate::engine_debug!("canvas2d::StencilAttachment",
                "Stencil buffer {:?} was evicted, detaching", key);
            self.key = None;
            return None;
        }
        cache.get_mut(key)
    }

    /// Forget the buffer. The cache keeps it for other render targets.
    pub fn detach(&mut self) {
        self.key = None;
    }
}

#[cfg(test)]
#[path = "stencil_attachment_tests.rs"]
mod tests;
