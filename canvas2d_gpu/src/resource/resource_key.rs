/// Scratch keys - content-derived lookup keys for interchangeable GPU resources.

use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU16, Ordering};
use rustc_hash::FxHasher;

/// Resource category a scratch key belongs to.
///
/// Categories are generated at runtime, one per resource kind, so keys of
/// different kinds never compare equal even when their data words match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceType(u16);

static NEXT_RESOURCE_TYPE: AtomicU16 = AtomicU16::new(1);

impl ResourceType {
    /// Allocate a fresh category
    ///
    /// Call once per resource kind and keep the result in a static.
    pub fn generate() -> Self {
        let value = NEXT_RESOURCE_TYPE.fetch_add(1, Ordering::Relaxed);
        debug_assert!(value != 0, "resource type counter overflowed");
        ResourceType(value)
    }

    pub fn value(&self) -> u16 {
        self.0
    }
}

/// Lookup key for structurally interchangeable resources.
///
/// Holds the category, the shape data words, and a hash of both computed
/// once at build time. Equality compares category and data.
#[derive(Debug, Clone)]
pub struct ScratchKey {
    resource_type: ResourceType,
    hash: u32,
    data: Box<[u32]>,
}

impl ScratchKey {
    /// Build a key from its category and data words
    pub fn new(resource_type: ResourceType, data: &[u32]) -> Self {
        let mut hasher = FxHasher::default();
        resource_type.hash(&mut hasher);
        data.hash(&mut hasher);
        let wide = hasher.finish();

        Self {
            resource_type,
            hash: (wide ^ (wide >> 32)) as u32,
            data: data.into(),
        }
    }

    pub fn resource_type(&self) -> ResourceType {
        self.resource_type
    }

    /// Precomputed hash of category and data
    pub fn hash_value(&self) -> u32 {
        self.hash
    }

    pub fn data(&self) -> &[u32] {
        &self.data
    }
}

impl PartialEq for ScratchKey {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
            && self.resource_type == other.resource_type
            && self.data == other.data
    }
}

impl Eq for ScratchKey {}

impl Hash for ScratchKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.hash);
    }
}

#[cfg(test)]
#[path = "resource_key_tests.rs"]
mod tests;
