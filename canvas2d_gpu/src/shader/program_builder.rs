/// Program builder collaborator of the stage builders.
///
/// The vertex builder needs four things from the program being built:
/// uniform registration, unique variable names, uniform declarations for
/// its stage, and the primitive processor. `ProgramBuilder` is that
/// interface; `ProgramBuilderState` is a self-contained implementation.

use bitflags::bitflags;
use rustc_hash::FxHashSet;
use crate::gpu::{ContextInfo, UniformHandle};
use super::primitive_processor::PrimitiveProcessor;
use super::shader_var::ShaderVar;
use super::sl_type::{Precision, SlType};

bitflags! {
    /// Shader stages a uniform is declared in
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ShaderVisibility: u32 {
        const VERTEX = 1 << 0;
        const FRAGMENT = 1 << 1;
    }
}

/// Interface the stage builders call back into
pub trait ProgramBuilder {
    /// Register a uniform; returns its handle and generated source name
    fn add_uniform(
        &mut self,
        visibility: ShaderVisibility,
        ty: SlType,
        precision: Precision,
        name: &str,
    ) -> (UniformHandle, String);

    /// Generate a program-unique source name from a prefix and base name
    fn name_variable(&mut self, prefix: Option<char>, name: &str) -> String;

    /// Append `decl;\n` for every uniform visible to `visibility`
    fn append_uniform_decls(&self, visibility: ShaderVisibility, info: &ContextInfo, out: &mut String);

    /// Primitive processor of the program
    fn primitive_processor(&self) -> &dyn PrimitiveProcessor;
}

// ===== NAME MANGLING =====

/// Generates unique identifiers for one program.
///
/// `prefix + name`, with `_Stage{n}` appended while a stage is active, and a
/// numeric suffix whenever the result was already handed out.
#[derive(Debug, Default)]
pub struct NameMangler {
    stage_index: Option<u32>,
    issued: FxHashSet<String>,
}

impl NameMangler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set (or clear) the processor stage names are scoped to
    pub fn set_stage_index(&mut self, stage_index: Option<u32>) {
        self.stage_index = stage_index;
    }

    pub fn stage_index(&self) -> Option<u32> {
        self.stage_index
    }

    pub fn mangle(&mut self, prefix: Option<char>, name: &str) -> String {
        let mut base = match prefix {
            Some(p) => format!("{}{}", p, name),
            None => name.to_string(),
        };
        if let Some(stage) = self.stage_index {
            base.push_str(&format!("_Stage{}", stage));
        }

        let mut candidate = base.clone();
        let mut suffix = 1u32;
        while self.issued.contains(&candidate) {
            candidate = format!("{}_{}", base, suffix);
            suffix += 1;
        }
        self.issued.insert(candidate.clone());
        candidate
    }
}

// ===== PROGRAM BUILDER STATE =====

/// Uniform registered with a program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniformInfo {
    pub var: ShaderVar,
    pub visibility: ShaderVisibility,
}

/// Standalone program builder: uniform table, name mangler and the
/// primitive processor being drawn.
pub struct ProgramBuilderState {
    uniforms: Vec<UniformInfo>,
    mangler: NameMangler,
    primitive_processor: Box<dyn PrimitiveProcessor>,
}

impl ProgramBuilderState {
    pub fn new(primitive_processor: Box<dyn PrimitiveProcessor>) -> Self {
        Self {
            uniforms: Vec::new(),
            mangler: NameMangler::new(),
            primitive_processor,
        }
    }

    pub fn uniforms(&self) -> &[UniformInfo] {
        &self.uniforms
    }

    pub fn uniform(&self, handle: UniformHandle) -> Option<&UniformInfo> {
        self.uniforms.get(handle.0 as usize)
    }

    /// Scope subsequently generated names to a processor stage
    pub fn set_stage_index(&mut self, stage_index: Option<u32>) {
        self.mangler.set_stage_index(stage_index);
    }
}

impl ProgramBuilder for ProgramBuilderState {
    fn add_uniform(
        &mut self,
        visibility: ShaderVisibility,
        ty: SlType,
        precision: Precision,
        name: &str,
    ) -> (UniformHandle, String) {
        debug_assert!(!visibility.is_empty(), "uniform '{}' is visible to no stage", name);

        let generated = self.mangler.mangle(Some('u'), name);
        let handle = UniformHandle(self.uniforms.len() as u32);
        self.uniforms.push(UniformInfo {
            var: ShaderVar::uniform(generated.clone(), ty).with_precision(precision),
            visibility,
        });
        (handle, generated)
    }

    fn name_variable(&mut self, prefix: Option<char>, name: &str) -> String {
        self.mangler.mangle(prefix, name)
    }

    fn append_uniform_decls(&self, visibility: ShaderVisibility, info: &ContextInfo, out: &mut String) {
        for uniform in self.uniforms.iter().filter(|u| u.visibility.intersects(visibility)) {
            uniform.var.append_decl(info, out);
            out.push_str(";\n");
        }
    }

    fn primitive_processor(&self) -> &dyn PrimitiveProcessor {
        self.primitive_processor.as_ref()
    }
}

#[cfg(test)]
#[path = "program_builder_tests.rs"]
mod tests;
