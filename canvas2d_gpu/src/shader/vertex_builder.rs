/// Vertex shader builder.
///
/// Accumulates the vertex stage of a GPU program: attribute inputs, varying
/// outputs and body code. Emits the device-to-NDC position transform, binds
/// attribute slots and finally assembles, compiles and attaches the source.
///
/// Lifecycle: `Fresh -> Declaring -> TransformEmitted -> Assembled`.
/// `Assembled` is terminal.

use rustc_hash::FxHashSet;
use crate::error::Result;
use crate::gpu::{ContextInfo, GpuContext, ProgramId, ShaderId, ShaderStage, UniformHandle};
use super::decl_table::DeclTable;
use super::primitive_processor::PrimitiveProcessor;
use super::program_builder::{ProgramBuilder, ShaderVisibility};
use super::shader_var::ShaderVar;
use super::sl_type::{Precision, SlType, TypeModifier};

/// Base name of the render-target adjustment uniform
pub const RT_ADJUSTMENT_NAME: &str = "rtAdjustment";

/// Where a builder is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BuilderState {
    /// Nothing declared yet
    Fresh,
    /// Inputs, outputs or code have been added
    Declaring,
    /// The position transform has been emitted
    TransformEmitted,
    /// Source compiled and attached; no further edits
    Assembled,
}

/// Builder for the vertex stage of one program
#[derive(Debug)]
pub struct VertexShaderBuilder {
    inputs: DeclTable,
    outputs: DeclTable,
    code: String,
    rt_adjust_name: Option<String>,
    rt_adjust_uniform: Option<UniformHandle>,
    state: BuilderState,
}

impl Default for VertexShaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl VertexShaderBuilder {
    pub fn new() -> Self {
        Self {
            inputs: DeclTable::new(),
            outputs: DeclTable::new(),
            code: String::new(),
            rt_adjust_name: None,
            rt_adjust_uniform: None,
            state: BuilderState::Fresh,
        }
    }

    pub fn state(&self) -> BuilderState {
        self.state
    }

    /// Declared attribute inputs, in declaration order
    pub fn inputs(&self) -> &DeclTable {
        &self.inputs
    }

    /// Declared varying outputs, in declaration order
    pub fn outputs(&self) -> &DeclTable {
        &self.outputs
    }

    /// Body code accumulated so far
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Generated name of the adjustment uniform, once the transform is emitted
    pub fn rt_adjust_name(&self) -> Option<&str> {
        self.rt_adjust_name.as_deref()
    }

    /// Handle of the adjustment uniform, once the transform is emitted
    pub fn rt_adjust_uniform(&self) -> Option<UniformHandle> {
        self.rt_adjust_uniform
    }

    /// Returns false (after reporting) if the builder is already assembled
    fn check_editable(&self, what: &str) -> bool {
        if self.state == BuilderState::Assembled {
            debug_assert!(false, "{} on an assembled vertex shader builder", what);
            crate::engine_error!("canvas2d::VertexShaderBuilder",
                "{} on an assembled vertex shader builder, ignored", what);
            return false;
        }
        true
    }

    fn touch(&mut self) {
        if self.state == BuilderState::Fresh {
            self.state = BuilderState::Declaring;
        }
    }

    /// Append raw statements to the body of `main`
    pub fn code_append(&mut self, code: &str) {
        if !self.check_editable("code_append") {
            return;
        }
        self.touch();
        self.code.push_str(code);
    }

    /// Declare a vertex attribute input.
    ///
    /// Returns false without inserting when an input with the same name is
    /// already declared.
    pub fn add_attribute(&mut self, var: &ShaderVar) -> bool {
        debug_assert_eq!(var.modifier(), TypeModifier::Attribute,
            "'{}' is not an attribute", var.name());
        if !self.check_editable("add_attribute") {
            return false;
        }
        self.touch();
        if self.inputs.push_unique(var.clone()) {
            true
        } else {
            crate::engine_trace!("canvas2d::VertexShaderBuilder",
                "Attribute '{}' already declared", var.name());
            false
        }
    }

    /// Declare a varying output and return its generated source name
    pub fn add_varying(&mut self, program_builder: &mut dyn ProgramBuilder, name: &str, ty: SlType) -> String {
        let generated = program_builder.name_variable(Some('v'), name);
        if !self.check_editable("add_varying") {
            return generated;
        }
        self.touch();
        self.outputs.push(ShaderVar::new(generated.clone(), ty, TypeModifier::VaryingOut));
        generated
    }

    /// Declare every attribute of `primitive_processor`, in order
    pub fn emit_attributes(&mut self, primitive_processor: &dyn PrimitiveProcessor) {
        for attribute in primitive_processor.attributes() {
            self.add_attribute(&attribute.as_shader_var());
        }
    }

    /// Emit `gl_Position` from a device-space position.
    ///
    /// Registers the vertex-visible `vec4` adjustment uniform and writes the
    /// transform for a `vec2` or homogeneous `vec3` position, followed by
    /// `gl_PointSize = 1.0;`. Must be called exactly once.
    pub fn transform_to_normalized_device_space(
        &mut self,
        program_builder: &mut dyn ProgramBuilder,
        pos_var: &ShaderVar,
    ) {
        if self.rt_adjust_name.is_some() {
            debug_assert!(false, "position transform emitted twice");
            crate::engine_error!("canvas2d::VertexShaderBuilder",
                "Position transform emitted twice, ignored");
            return;
        }
        if !self.check_editable("transform_to_normalized_device_space") {
            return;
        }
        let is_homogeneous = match pos_var.ty() {
            SlType::Vec3f => true,
            SlType::Vec2f => false,
            other => {
                debug_assert!(false, "position '{}' must be vec2 or vec3", pos_var.name());
                crate::engine_error!("canvas2d::VertexShaderBuilder",
                    "Position '{}' has unsupported type {}", pos_var.name(), other.glsl_name());
                return;
            }
        };

        let (handle, rt) = program_builder.add_uniform(
            ShaderVisibility::VERTEX,
            SlType::Vec4f,
            Precision::Default,
            RT_ADJUSTMENT_NAME,
        );
        let p = pos_var.name();

        if is_homogeneous {
            self.code.push_str(&format!(
                "gl_Position = vec4(dot({p}.xz, {rt}.xy)/{p}.z, dot({p}.yz, {rt}.zw)/{p}.z, 0, 1);"
            ));
        } else {
            self.code.push_str(&format!(
                "gl_Position = vec4({p}.x * {rt}.x + {rt}.y, {p}.y * {rt}.z + {rt}.w, 0, 1);"
            ));
        }
        self.code.push_str("gl_PointSize = 1.0;");

        self.rt_adjust_name = Some(rt);
        self.rt_adjust_uniform = Some(handle);
        self.state = BuilderState::TransformEmitted;
    }

    /// Bind the primitive processor's attributes to consecutive slots.
    ///
    /// Slots follow declaration order. A repeated name keeps the slot of its
    /// first occurrence and reserves none, matching the deduped input table.
    pub fn bind_vertex_attributes(
        &self,
        program_builder: &dyn ProgramBuilder,
        gpu: &mut GpuContext,
        program: ProgramId,
    ) -> Result<()> {
        let primitive_processor = program_builder.primitive_processor();
        let mut bound: FxHashSet<&str> = FxHashSet::default();
        let mut slot = 0u32;
        for attribute in primitive_processor.attributes() {
            if !bound.insert(attribute.name.as_str()) {
                continue;
            }
            gpu.bind_attrib_location(program, slot, &attribute.name)?;
            slot += 1;
        }
        Ok(())
    }

    /// Full source text: version, uniforms, inputs, outputs, then `main`
    pub fn assemble_source(&self, program_builder: &dyn ProgramBuilder, info: &ContextInfo) -> String {
        let mut source = String::from(info.version_decl());
        program_builder.append_uniform_decls(ShaderVisibility::VERTEX, info, &mut source);
        self.inputs.append_decls(info, &mut source);
        self.outputs.append_decls(info, &mut source);
        source.push_str("void main() {");
        source.push_str(&self.code);
        source.push_str("}\n");
        source
    }

    /// Assemble, compile and attach the vertex shader to `program`.
    ///
    /// On success the new shader is pushed onto `shader_ids` and returned.
    /// On failure `shader_ids` is left untouched and the builder stays
    /// editable.
    pub fn compile_and_attach_shaders(
        &mut self,
        program_builder: &dyn ProgramBuilder,
        gpu: &mut GpuContext,
        program: ProgramId,
        shader_ids: &mut Vec<ShaderId>,
    ) -> Result<ShaderId> {
        if self.state == BuilderState::Assembled {
            debug_assert!(false, "vertex shader compiled twice");
            crate::engine_bail!("canvas2d::VertexShaderBuilder",
                "Vertex shader for program {} already assembled", program.0);
        }
        let info = *gpu.info();
        let source = self.assemble_source(program_builder, &info);
        let shader = gpu.compile_and_attach_shader(program, ShaderStage::Vertex, &source)?;
        shader_ids.push(shader);
        self.state = BuilderState::Assembled;
        crate::engine_debug!("canvas2d::VertexShaderBuilder",
            "Attached vertex shader {} to program {}", shader.0, program.0);
        Ok(shader)
    }
}

#[cfg(test)]
#[path = "vertex_builder_tests.rs"]
mod tests;
