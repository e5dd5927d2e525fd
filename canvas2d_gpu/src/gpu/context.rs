/// GpuContext - one GPU command stream plus its dialect info and stats

use crate::error::{Error, Result};
use super::glsl::ContextInfo;
use super::gpu_interface::{
    GpuInterface, ProgramId, ShaderId, ShaderStage, StencilId, UniformHandle,
};
use super::stats::GpuStats;

/// Explicit GPU context passed to every operation that touches the GPU.
///
/// Wraps a backend `GpuInterface` and records `GpuStats` for the calls it
/// forwards. Not internally synchronized: one context is driven by one
/// thread at a time.
pub struct GpuContext {
    interface: Box<dyn GpuInterface>,
    info: ContextInfo,
    stats: GpuStats,
}

impl GpuContext {
    /// Create a context over a backend
    pub fn new(interface: Box<dyn GpuInterface>, info: ContextInfo) -> Self {
        Self {
            interface,
            info,
            stats: GpuStats::default(),
        }
    }

    /// Dialect information for shader generation
    pub fn info(&self) -> &ContextInfo {
        &self.info
    }

    /// Statistics collected so far
    pub fn stats(&self) -> &GpuStats {
        &self.stats
    }

    /// Mutable statistics (e.g. to reset between frames)
    pub fn stats_mut(&mut self) -> &mut GpuStats {
        &mut self.stats
    }

    /// Direct access to the backend
    pub fn interface_mut(&mut self) -> &mut dyn GpuInterface {
        self.interface.as_mut()
    }

    pub fn create_program(&mut self) -> Result<ProgramId> {
        self.interface.create_program()
    }

    pub fn delete_program(&mut self, program: ProgramId) {
        self.interface.delete_program(program);
    }

    /// Compile a shader and attach it to `program`, recording stats
    ///
    /// Failures are logged with the compiler output and returned.
    pub fn compile_and_attach_shader(
        &mut self,
        program: ProgramId,
        stage: ShaderStage,
        source: &str,
    ) -> Result<ShaderId> {
        self.stats.shader_compilations += 1;
        match self.interface.compile_and_attach_shader(program, stage, source) {
            Ok(shader) => Ok(shader),
            Err(err) => {
                self.stats.shader_compile_failures += 1;
                crate::engine_error!("canvas2d::GpuContext",
                    "{:?} shader compilation failed for program {}: {}\n{}",
                    stage, program.0, err, source);
                Err(match err {
                    Error::ShaderCompilationFailed(log) => Error::ShaderCompilationFailed(log),
                    other => Error::ShaderCompilationFailed(other.to_string()),
                })
            }
        }
    }

    pub fn delete_shader(&mut self, shader: ShaderId) {
        self.interface.delete_shader(shader);
    }

    pub fn bind_attrib_location(&mut self, program: ProgramId, index: u32, name: &str) -> Result<()> {
        self.interface.bind_attrib_location(program, index, name)?;
        self.stats.attrib_bindings += 1;
        Ok(())
    }

    pub fn set_uniform(&mut self, program: ProgramId, uniform: UniformHandle, data: &[u8]) -> Result<()> {
        self.interface.set_uniform(program, uniform, data)
    }

    pub fn create_stencil_buffer(
        &mut self,
        width: u32,
        height: u32,
        bits: u32,
        sample_count: u32,
    ) -> Result<StencilId> {
        let stencil = self.interface.create_stencil_buffer(width, height, bits, sample_count)?;
        self.stats.stencil_buffers_created += 1;
        Ok(stencil)
    }

    pub fn delete_stencil_buffer(&mut self, stencil: StencilId) {
        self.interface.delete_stencil_buffer(stencil);
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
