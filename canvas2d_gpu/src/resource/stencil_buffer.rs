/// Stencil buffer resource with last-clip tracking.
///
/// A stencil buffer remembers which clip (generation id, clip-space rect and
/// clip-to-stencil offset) was last rendered into it, so callers can skip
/// re-rendering clip geometry when the same clip is requested again.

use std::sync::OnceLock;
use glam::IVec2;
use crate::error::Result;
use crate::geometry::{ClipStackGenId, IRect};
use crate::gpu::{GpuContext, StencilId};
use super::gpu_resource::{GpuResource, LifeCycle, ResourceHeader};
use super::resource_key::{ResourceType, ScratchKey};

static STENCIL_BUFFER_RESOURCE_TYPE: OnceLock<ResourceType> = OnceLock::new();

/// GPU stencil attachment
#[derive(Debug)]
pub struct StencilBuffer {
    header: ResourceHeader,
    backing: Option<StencilId>,
    width: u32,
    height: u32,
    bits: u32,
    sample_count: u32,
    last_clip_gen_id: ClipStackGenId,
    last_clip_rect: IRect,
    last_clip_offset: IVec2,
}

impl StencilBuffer {
    /// Resource category of all stencil buffer scratch keys
    pub fn resource_type() -> ResourceType {
        *STENCIL_BUFFER_RESOURCE_TYPE.get_or_init(ResourceType::generate)
    }

    /// Scratch key for a stencil buffer of the given shape.
    ///
    /// Width and height share one data word, so both must fit in 16 bits.
    /// Larger shapes are a caller bug; release builds report them and fall
    /// back to a three-word key that cannot collide with packed keys.
    pub fn compute_key(width: u32, height: u32, sample_count: u32) -> ScratchKey {
        let limit = u16::MAX as u32;
        if width > limit || height > limit {
            debug_assert!(false, "stencil size {}x{} exceeds 16 bits", width, height);
            crate::engine_warn!("canvas2d::StencilBuffer",
                "Stencil size {}x{} exceeds 16 bits, using an unpacked key", width, height);
            return ScratchKey::new(Self::resource_type(), &[width, height, sample_count]);
        }
        ScratchKey::new(Self::resource_type(), &[width | (height << 16), sample_count])
    }

    /// Wrap an already allocated stencil object.
    ///
    /// Cached buffers get their scratch key attached immediately so the
    /// cache can index them before first use. Clip tracking starts out as
    /// "never rendered".
    pub fn new(
        lifecycle: LifeCycle,
        backing: Option<StencilId>,
        width: u32,
        height: u32,
        bits: u32,
        sample_count: u32,
    ) -> Self {
        debug_assert!(bits > 0, "stencil buffer needs at least one bit");
        debug_assert!(width > 0 && height > 0, "stencil buffer dimensions must be positive");

        let mut header = ResourceHeader::new(lifecycle);
        if lifecycle == LifeCycle::Cached {
            header.set_scratch_key(Self::compute_key(width, height, sample_count));
        }

        Self {
            header,
            backing,
            width,
            height,
            bits,
            sample_count,
            last_clip_gen_id: ClipStackGenId::INVALID,
            last_clip_rect: IRect::empty(),
            last_clip_offset: IVec2::ZERO,
        }
    }

    /// Allocate stencil storage on the GPU and wrap it
    pub fn create(
        gpu: &mut GpuContext,
        lifecycle: LifeCycle,
        width: u32,
        height: u32,
        bits: u32,
        sample_count: u32,
    ) -> Result<Self> {
        let backing = gpu.create_stencil_buffer(width, height, bits, sample_count)?;
        crate::engine_debug!("canvas2d::StencilBuffer",
            "Allocated {}x{} stencil ({} bits, {} samples) as {:?}",
            width, height, bits, sample_count, backing);
        Ok(Self::new(lifecycle, Some(backing), width, height, bits, sample_count))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn bits(&self) -> u32 {
        self.bits
    }

    pub fn num_samples(&self) -> u32 {
        self.sample_count
    }

    /// GPU object, if not released
    pub fn backing(&self) -> Option<StencilId> {
        if self.header.is_released() {
            None
        } else {
            self.backing
        }
    }

    /// Drop the GPU object without GPU calls (the context is gone)
    pub fn abandon(&mut self) {
        self.header.mark_released();
    }

    pub fn last_clip_gen_id(&self) -> ClipStackGenId {
        self.last_clip_gen_id
    }

    pub fn last_clip_rect(&self) -> IRect {
        self.last_clip_rect
    }

    pub fn last_clip_offset(&self) -> IVec2 {
        self.last_clip_offset
    }

    /// Note the clip that was just rendered into this buffer
    pub fn set_last_clip(&mut self, gen_id: ClipStackGenId, clip_rect: IRect, clip_offset: IVec2) {
        self.last_clip_gen_id = gen_id;
        self.last_clip_rect = clip_rect;
        self.last_clip_offset = clip_offset;
    }

    /// Whether the clip must be rendered into this buffer before use.
    ///
    /// False only when the same clip generation was rendered at the same
    /// offset over a rect that covers `clip_rect`.
    pub fn must_render_clip(&self, gen_id: ClipStackGenId, clip_rect: IRect, clip_offset: IVec2) -> bool {
        self.last_clip_gen_id != gen_id
            || self.last_clip_offset != clip_offset
            || !self.last_clip_rect.contains(&clip_rect)
    }
}

impl GpuResource for StencilBuffer {
    fn header(&self) -> &ResourceHeader {
        &self.header
    }

    fn gpu_memory_size(&self) -> usize {
        let samples = self.sample_count.max(1) as usize;
        (self.width as usize * self.height as usize * self.bits as usize / 8) * samples
    }

    fn release(&mut self, gpu: &mut GpuContext) {
        if !self.header.mark_released() {
            return;
        }
        if self.header.lifecycle() == LifeCycle::Wrapped {
            return;
        }
        if let Some(backing) = self.backing {
            gpu.delete_stencil_buffer(backing);
        }
    }
}

impl Drop for StencilBuffer {
    fn drop(&mut self) {
        if !self.header.is_released()
            && self.backing.is_some()
            && self.header.lifecycle() != LifeCycle::Wrapped
        {
            crate::engine_warn!("canvas2d::StencilBuffer",
                "Stencil buffer {:?} dropped without release, GPU object leaked", self.backing);
        }
    }
}

#[cfg(test)]
#[path = "stencil_buffer_tests.rs"]
mod tests;
