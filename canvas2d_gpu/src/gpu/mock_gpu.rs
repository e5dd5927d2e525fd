/// Mock GPU for unit tests (no GPU required)
///
/// Records every call so tests can assert on the exact GPU traffic issued
/// by the builders and the resource cache.

use std::sync::{Arc, Mutex};
use crate::error::{Error, Result};
use crate::gpu::{
    ContextInfo, GpuContext, GpuInterface, ProgramId, ShaderId, ShaderStage, StencilId,
    UniformHandle,
};

/// One recorded GPU call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    CreateProgram(ProgramId),
    DeleteProgram(ProgramId),
    CompileShader { program: ProgramId, stage: ShaderStage, source: String },
    DeleteShader(ShaderId),
    BindAttribLocation { program: ProgramId, index: u32, name: String },
    SetUniform { program: ProgramId, uniform: UniformHandle, data: Vec<u8> },
    CreateStencilBuffer { id: StencilId, width: u32, height: u32, bits: u32, sample_count: u32 },
    DeleteStencilBuffer(StencilId),
}

/// Shared call log, still readable after the mock is boxed into a context
pub type MockCallLog = Arc<Mutex<Vec<MockCall>>>;

#[derive(Debug)]
pub struct MockGpu {
    calls: MockCallLog,
    next_id: u32,
    /// Reject every shader with this compiler log
    pub compile_error: Option<String>,
    /// Fail stencil allocation with OutOfMemory
    pub fail_stencil_allocation: bool,
}

impl MockGpu {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            next_id: 1,
            compile_error: None,
            fail_stencil_allocation: false,
        }
    }

    /// Handle to the call log
    pub fn calls(&self) -> MockCallLog {
        Arc::clone(&self.calls)
    }

    /// Build a GpuContext over a fresh mock, returning the call log too
    pub fn context() -> (GpuContext, MockCallLog) {
        Self::context_with(Self::new(), ContextInfo::default())
    }

    /// Build a GpuContext over the given mock and dialect
    pub fn context_with(mock: MockGpu, info: ContextInfo) -> (GpuContext, MockCallLog) {
        let calls = mock.calls();
        (GpuContext::new(Box::new(mock), info), calls)
    }

    fn next(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn record(&self, call: MockCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl GpuInterface for MockGpu {
    fn create_program(&mut self) -> Result<ProgramId> {
        let program = ProgramId(self.next());
        self.record(MockCall::CreateProgram(program));
        Ok(program)
    }

    fn delete_program(&mut self, program: ProgramId) {
        self.record(MockCall::DeleteProgram(program));
    }

    fn compile_and_attach_shader(
        &mut self,
        program: ProgramId,
        stage: ShaderStage,
        source: &str,
    ) -> Result<ShaderId> {
        self.record(MockCall::CompileShader {
            program,
            stage,
            source: source.to_string(),
        });
        if let Some(log) = &self.compile_error {
            return Err(Error::ShaderCompilationFailed(log.clone()));
        }
        Ok(ShaderId(self.next()))
    }

    fn delete_shader(&mut self, shader: ShaderId) {
        self.record(MockCall::DeleteShader(shader));
    }

    fn bind_attrib_location(&mut self, program: ProgramId, index: u32, name: &str) -> Result<()> {
        self.record(MockCall::BindAttribLocation {
            program,
            index,
            name: name.to_string(),
        });
        Ok(())
    }

    fn set_uniform(&mut self, program: ProgramId, uniform: UniformHandle, data: &[u8]) -> Result<()> {
        self.record(MockCall::SetUniform {
            program,
            uniform,
            data: data.to_vec(),
        });
        Ok(())
    }

    fn create_stencil_buffer(
        &mut self,
        width: u32,
        height: u32,
        bits: u32,
        sample_count: u32,
    ) -> Result<StencilId> {
        if self.fail_stencil_allocation {
            return Err(Error::OutOfMemory);
        }
        let id = StencilId(self.next());
        self.record(MockCall::CreateStencilBuffer { id, width, height, bits, sample_count });
        Ok(id)
    }

    fn delete_stencil_buffer(&mut self, stencil: StencilId) {
        self.record(MockCall::DeleteStencilBuffer(stencil));
    }
}
