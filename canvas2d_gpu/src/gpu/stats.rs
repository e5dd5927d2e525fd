/// GPU statistics collected by a GpuContext
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GpuStats {
    /// Shader compilations submitted (successful or not)
    pub shader_compilations: u32,
    /// Shader compilations rejected by the compiler
    pub shader_compile_failures: u32,
    /// Attribute locations bound
    pub attrib_bindings: u32,
    /// Stencil buffers allocated
    pub stencil_buffers_created: u32,
}

impl GpuStats {
    /// Reset all counters to zero
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
