/// GpuInterface trait - the narrow set of GPU calls this crate issues

use crate::error::Result;

/// Linked (or linking) GPU program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgramId(pub u32);

/// Compiled shader object attached to a program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShaderId(pub u32);

/// Backing GPU storage of a stencil buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StencilId(pub u32);

/// Uniform registered by a program builder
///
/// Index into the builder's uniform table; the backend resolves it to a
/// location when values are uploaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UniformHandle(pub u32);

/// Shader stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    /// Vertex shader
    Vertex,
    /// Fragment shader
    Fragment,
}

/// GPU call interface
///
/// Every GPU call made by the shader builders and the resource cache goes
/// through this trait. Implemented by backends (GL, test mocks); calls are
/// synchronous and report failure through `Result`.
pub trait GpuInterface: Send {
    /// Create an empty program object
    fn create_program(&mut self) -> Result<ProgramId>;

    /// Destroy a program object
    fn delete_program(&mut self, program: ProgramId);

    /// Compile `source` for `stage` and attach it to `program`
    ///
    /// # Errors
    ///
    /// `Error::ShaderCompilationFailed` carrying the compiler log when the
    /// source is rejected. Nothing is attached in that case.
    fn compile_and_attach_shader(
        &mut self,
        program: ProgramId,
        stage: ShaderStage,
        source: &str,
    ) -> Result<ShaderId>;

    /// Destroy a shader object
    fn delete_shader(&mut self, shader: ShaderId);

    /// Bind vertex attribute slot `index` to the attribute called `name`
    fn bind_attrib_location(&mut self, program: ProgramId, index: u32, name: &str) -> Result<()>;

    /// Upload raw uniform data
    fn set_uniform(&mut self, program: ProgramId, uniform: UniformHandle, data: &[u8]) -> Result<()>;

    /// Allocate stencil storage
    fn create_stencil_buffer(
        &mut self,
        width: u32,
        height: u32,
        bits: u32,
        sample_count: u32,
    ) -> Result<StencilId>;

    /// Free stencil storage
    fn delete_stencil_buffer(&mut self, stencil: StencilId);
}
