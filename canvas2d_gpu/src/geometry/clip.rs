/// Clip stack generation ids.
///
/// A generation id names one version of a clip stack. Two equal ids mean
/// the same clip geometry, so a stencil buffer tagged with an id does not
/// need its clip re-rendered while the id is unchanged.

/// Opaque clip stack version marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClipStackGenId(pub i32);

impl ClipStackGenId {
    /// Never rendered
    pub const INVALID: ClipStackGenId = ClipStackGenId(0);
    /// Clip that rejects everything
    pub const EMPTY: ClipStackGenId = ClipStackGenId(1);
    /// Clip that accepts everything
    pub const WIDE_OPEN: ClipStackGenId = ClipStackGenId(2);
    /// First id handed out by a generator
    pub const FIRST_UNRESERVED: ClipStackGenId = ClipStackGenId(3);

    pub fn is_valid(&self) -> bool {
        *self != Self::INVALID
    }

    /// Whether this is one of the reserved ids
    pub fn is_reserved(&self) -> bool {
        self.0 < Self::FIRST_UNRESERVED.0
    }
}

impl Default for ClipStackGenId {
    fn default() -> Self {
        Self::INVALID
    }
}

/// Hands out distinct generation ids, starting after the reserved range.
///
/// Owned by whoever manages clip stacks for one GPU context.
#[derive(Debug)]
pub struct ClipStackGenIdGenerator {
    next: i32,
}

impl ClipStackGenIdGenerator {
    pub fn new() -> Self {
        Self {
            next: ClipStackGenId::FIRST_UNRESERVED.0,
        }
    }

    /// Next unused id
    pub fn next_id(&mut self) -> ClipStackGenId {
        let id = ClipStackGenId(self.next);
        // Wrap past the reserved ids rather than into them
        self.next = match self.next.checked_add(1) {
            Some(n) => n,
            None => ClipStackGenId::FIRST_UNRESERVED.0,
        };
        id
    }
}

impl Default for ClipStackGenIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "clip_tests.rs"]
mod tests;
