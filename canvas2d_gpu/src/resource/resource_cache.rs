/// Resource cache for stencil buffers.
///
/// Owns every cached stencil buffer in a slot map. Buffers are indexed by
/// scratch key so that render targets with the same shape share them.
/// Render targets hold `StencilBufferKey`s, which go stale (and resolve to
/// nothing) once the buffer is evicted.

use std::collections::BTreeMap;
use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use crate::error::Result;
use crate::gpu::GpuContext;
use super::gpu_resource::{GpuResource, LifeCycle};
use super::resource_key::ScratchKey;
use super::stencil_buffer::StencilBuffer;

// ===== SLOT MAP KEY =====

new_key_type! {
    /// Weak handle to a cached stencil buffer.
    ///
    /// Stays valid until the buffer is evicted; afterwards lookups return None.
    pub struct StencilBufferKey;
}

// ===== CONFIG =====

/// Budget of a resource cache
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceCacheConfig {
    /// Maximum number of resources kept
    pub max_count: usize,
    /// Maximum GPU memory kept, in bytes
    pub max_bytes: usize,
}

impl Default for ResourceCacheConfig {
    fn default() -> Self {
        Self {
            max_count: 2048,
            max_bytes: 96 * 1024 * 1024,
        }
    }
}

// ===== CACHE =====

struct CacheEntry {
    buffer: StencilBuffer,
    /// Recency stamp, larger is more recent
    last_use: u64,
}

/// Stencil buffer cache (one per GPU context)
pub struct ResourceCache {
    config: ResourceCacheConfig,
    entries: SlotMap<StencilBufferKey, CacheEntry>,
    scratch_index: FxHashMap<ScratchKey, Vec<StencilBufferKey>>,
    /// Keys ordered by `last_use`, oldest first
    lru: BTreeMap<u64, StencilBufferKey>,
    total_bytes: usize,
    timestamp: u64,
}

impl ResourceCache {
    /// Create an empty cache with the given budget
    pub fn new(config: ResourceCacheConfig) -> Self {
        Self {
            config,
            entries: SlotMap::with_key(),
            scratch_index: FxHashMap::default(),
            lru: BTreeMap::new(),
            total_bytes: 0,
            timestamp: 0,
        }
    }

    pub fn config(&self) -> &ResourceCacheConfig {
        &self.config
    }

    /// Change the budget. Takes effect on the next purge.
    pub fn set_config(&mut self, config: ResourceCacheConfig) {
        self.config = config;
    }

    /// Number of cached buffers
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// GPU memory held by cached buffers, in bytes
    pub fn total_bytes(&self) -> usize {
        self.total_bytes
    }

    /// Whether the key still refers to a cached buffer
    pub fn contains(&self, key: StencilBufferKey) -> bool {
        self.entries.contains_key(key)
    }

    fn next_timestamp(&mut self) -> u64 {
        self.timestamp += 1;
        self.timestamp
    }

    /// Move `key` to the most recent end of the LRU order
    fn touch(&mut self, key: StencilBufferKey) -> Option<&mut CacheEntry> {
        let stamp = self.next_timestamp();
        let entry = self.entries.get_mut(key)?;
        self.lru.remove(&entry.last_use);
        entry.last_use = stamp;
        self.lru.insert(stamp, key);
        Some(entry)
    }

    /// Take ownership of a buffer
    ///
    /// Cached buffers are indexed by their scratch key.
    pub fn insert(&mut self, buffer: StencilBuffer) -> StencilBufferKey {
        let last_use = self.next_timestamp();
        let scratch_key = buffer.scratch_key().cloned();
        self.total_bytes += buffer.gpu_memory_size();

        let key = self.entries.insert(CacheEntry { buffer, last_use });
        self.lru.insert(last_use, key);
        if let Some(scratch_key) = scratch_key {
            self.scratch_index.entry(scratch_key).or_default().push(key);
        }
        key
    }

    /// Most recently used buffer matching `scratch_key`
    ///
    /// Refreshes the recency of the returned buffer.
    pub fn find_scratch(&mut self, scratch_key: &ScratchKey) -> Option<StencilBufferKey> {
        let candidates = self.scratch_index.get(scratch_key)?;
        let key = candidates
            .iter()
            .copied()
            .max_by_key(|k| self.entries.get(*k).map_or(0, |e| e.last_use))?;

        self.touch(key);
        Some(key)
    }

    /// Find a compatible cached stencil buffer or allocate a new one
    ///
    /// Compatibility is decided by the scratch key (width, height, samples).
    /// A miss allocates a cached buffer with `bits` stencil bits and then
    /// trims the cache to its budget.
    ///
    /// # Errors
    ///
    /// Returns the backend error if allocation fails.
    pub fn find_or_create_stencil_buffer(
        &mut self,
        gpu: &mut GpuContext,
        width: u32,
        height: u32,
        bits: u32,
        sample_count: u32,
    ) -> Result<StencilBufferKey> {
        let scratch_key = StencilBuffer::compute_key(width, height, sample_count);
        if let Some(key) = self.find_scratch(&scratch_key) {
            crate::engine_trace!("canvas2d::ResourceCache",
                "Stencil cache hit for {}x{} ({} samples)", width, height, sample_count);
            return Ok(key);
        }

        crate::engine_debug!("canvas2d::ResourceCache",
            "Stencil cache miss for {}x{} ({} samples)", width, height, sample_count);
        let buffer = StencilBuffer::create(gpu, LifeCycle::Cached, width, height, bits, sample_count)?;
        let key = self.insert(buffer);
        self.purge_to_budget(gpu, Some(key));
        Ok(key)
    }

    /// Get a buffer by key
    pub fn get(&self, key: StencilBufferKey) -> Option<&StencilBuffer> {
        self.entries.get(key).map(|e| &e.buffer)
    }

    /// Get a mutable buffer by key, refreshing its recency
    pub fn get_mut(&mut self, key: StencilBufferKey) -> Option<&mut StencilBuffer> {
        self.touch(key).map(|e| &mut e.buffer)
    }

    /// Remove a buffer and free its GPU object
    ///
    /// Returns false if the key was already stale.
    pub fn evict(&mut self, key: StencilBufferKey, gpu: &mut GpuContext) -> bool {
        let Some(mut entry) = self.entries.remove(key) else {
            return false;
        };
        self.lru.remove(&entry.last_use);

        if let Some(scratch_key) = entry.buffer.scratch_key() {
            if let Some(keys) = self.scratch_index.get_mut(scratch_key) {
                keys.retain(|k| *k != key);
                if keys.is_empty() {
                    self.scratch_index.remove(scratch_key);
                }
            }
        }

        self.total_bytes -= entry.buffer.gpu_memory_size();
        crate::engine_debug!("canvas2d::ResourceCache",
            "Evicting {}x{} stencil buffer {:?}",
            entry.buffer.width(), entry.buffer.height(), entry.buffer.unique_id());
        entry.buffer.release(gpu);
        true
    }

    /// Evict least recently used buffers until the cache fits its budget
    ///
    /// Returns the number of evicted buffers.
    pub fn purge_as_needed(&mut self, gpu: &mut GpuContext) -> usize {
        self.purge_to_budget(gpu, None)
    }

    fn over_budget(&self) -> bool {
        self.entries.len() > self.config.max_count || self.total_bytes > self.config.max_bytes
    }

    fn purge_to_budget(&mut self, gpu: &mut GpuContext, keep: Option<StencilBufferKey>) -> usize {
        let mut evicted = 0;
        while self.over_budget() {
            // `keep` is the newest entry, so this skips at most one key
            let victim = self
                .lru
                .values()
                .copied()
                .find(|k| Some(*k) != keep);

            match victim {
                Some(key) => {
                    self.evict(key, gpu);
                    evicted += 1;
                }
                None => break,
            }
        }
        evicted
    }

    /// Evict everything
    pub fn purge_all(&mut self, gpu: &mut GpuContext) {
        let keys: Vec<StencilBufferKey> = self.entries.keys().collect();
        for key in keys {
            self.evict(key, gpu);
        }
    }

    /// Forget every buffer without GPU calls (the context is lost)
    pub fn abandon_all(&mut self) {
        for (_, mut entry) in self.entries.drain() {
            entry.buffer.abandon();
        }
        self.scratch_index.clear();
        self.lru.clear();
        self.total_bytes = 0;
    }
}

impl Default for ResourceCache {
    fn default() -> Self {
        Self::new(ResourceCacheConfig::default())
    }
}

#[cfg(test)]
#[path = "resource_cache_tests.rs"]
mod tests;
