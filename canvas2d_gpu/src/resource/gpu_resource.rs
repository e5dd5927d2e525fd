/// Common lifecycle record and capability trait for GPU-backed resources.

use std::sync::atomic::{AtomicU32, Ordering};
use crate::gpu::GpuContext;
use super::resource_key::ScratchKey;

/// How a resource's GPU object is owned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeCycle {
    /// Owned by us and poolable through its scratch key
    Cached,
    /// Owned by us but never reused
    Uncached,
    /// Owned by someone else; never freed by us
    Wrapped,
}

/// Process-unique resource id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceId(pub u32);

static NEXT_RESOURCE_ID: AtomicU32 = AtomicU32::new(1);

impl ResourceId {
    fn next() -> Self {
        ResourceId(NEXT_RESOURCE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// State every GPU resource embeds
#[derive(Debug)]
pub struct ResourceHeader {
    lifecycle: LifeCycle,
    unique_id: ResourceId,
    scratch_key: Option<ScratchKey>,
    released: bool,
}

impl ResourceHeader {
    pub fn new(lifecycle: LifeCycle) -> Self {
        Self {
            lifecycle,
            unique_id: ResourceId::next(),
            scratch_key: None,
            released: false,
        }
    }

    pub fn lifecycle(&self) -> LifeCycle {
        self.lifecycle
    }

    pub fn unique_id(&self) -> ResourceId {
        self.unique_id
    }

    pub fn scratch_key(&self) -> Option<&ScratchKey> {
        self.scratch_key.as_ref()
    }

    /// Attach the scratch key. Only cached resources are keyed, and the
    /// key is fixed once set.
    pub fn set_scratch_key(&mut self, key: ScratchKey) {
        debug_assert_eq!(self.lifecycle, LifeCycle::Cached, "only cached resources get scratch keys");
        debug_assert!(self.scratch_key.is_none(), "scratch key already set");
        self.scratch_key = Some(key);
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Mark released; returns false if it already was
    pub fn mark_released(&mut self) -> bool {
        !std::mem::replace(&mut self.released, true)
    }
}

/// Capability interface of GPU resources held by the resource cache
pub trait GpuResource {
    /// Embedded lifecycle record
    fn header(&self) -> &ResourceHeader;

    /// Approximate GPU memory held, in bytes
    fn gpu_memory_size(&self) -> usize;

    /// Free the GPU object. Idempotent; wrapped resources keep their object.
    fn release(&mut self, gpu: &mut GpuContext);

    fn scratch_key(&self) -> Option<&ScratchKey> {
        self.header().scratch_key()
    }

    fn is_cached(&self) -> bool {
        self.header().lifecycle() == LifeCycle::Cached
    }

    fn unique_id(&self) -> ResourceId {
        self.header().unique_id()
    }
}
