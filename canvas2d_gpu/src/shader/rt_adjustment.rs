/// Render-target adjustment vector.
///
/// The vertex stage converts device pixel coordinates to normalized device
/// coordinates with a single `vec4` uniform `(sx, tx, sy, ty)`:
/// `ndc.x = x * sx + tx`, `ndc.y = y * sy + ty`.

use glam::{Vec2, Vec3, Vec4};
use crate::error::Result;
use crate::gpu::{GpuContext, ProgramId, UniformHandle};

/// Where row zero of the render target lives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceOrigin {
    TopLeft,
    BottomLeft,
}

/// Value of the `rtAdjustment` uniform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RtAdjustment(pub Vec4);

impl RtAdjustment {
    /// Adjustment mapping `[0, width] x [0, height]` onto `[-1, 1]^2`.
    ///
    /// Top-left origins flip y so that device row 0 lands at NDC y = +1.
    pub fn for_render_target(width: u32, height: u32, origin: SurfaceOrigin) -> Self {
        debug_assert!(width > 0 && height > 0, "render target must not be empty");
        let sx = 2.0 / width as f32;
        let sy = 2.0 / height as f32;
        match origin {
            SurfaceOrigin::TopLeft => RtAdjustment(Vec4::new(sx, -1.0, -sy, 1.0)),
            SurfaceOrigin::BottomLeft => RtAdjustment(Vec4::new(sx, -1.0, sy, -1.0)),
        }
    }

    /// CPU evaluation of the vec2 transform the vertex builder emits
    pub fn apply(&self, pos: Vec2) -> Vec4 {
        let rt = self.0;
        Vec4::new(pos.x * rt.x + rt.y, pos.y * rt.z + rt.w, 0.0, 1.0)
    }

    /// CPU evaluation of the homogeneous (vec3) transform
    pub fn apply_homogeneous(&self, pos: Vec3) -> Vec4 {
        let rt = self.0;
        let x = Vec2::new(pos.x, pos.z).dot(Vec2::new(rt.x, rt.y)) / pos.z;
        let y = Vec2::new(pos.y, pos.z).dot(Vec2::new(rt.z, rt.w)) / pos.z;
        Vec4::new(x, y, 0.0, 1.0)
    }

    /// Raw uniform bytes (four native-endian f32)
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(&self.0)
    }

    /// Upload as the value of `uniform` on `program`
    pub fn upload(&self, gpu: &mut GpuContext, program: ProgramId, uniform: UniformHandle) -> Result<()> {
        gpu.set_uniform(program, uniform, self.as_bytes())
    }
}

#[cfg(test)]
#[path = "rt_adjustment_tests.rs"]
mod tests;
