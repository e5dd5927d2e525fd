//! Integer device-space geometry and clip stack identifiers
//!
//! Provides the rectangle and generation id types the stencil clip
//! tracking is expressed in.

mod rect;
mod clip;

pub use rect::IRect;
pub use clip::{ClipStackGenId, ClipStackGenIdGenerator};

// Offsets between clip space and stencil space
pub use glam::IVec2;
