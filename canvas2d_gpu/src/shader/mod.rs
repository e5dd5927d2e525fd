//! Shader generation module
//!
//! Shading-language types and declarations, the program builder interface,
//! and the vertex shader builder that emits the position transform.

mod sl_type;
mod shader_var;
mod decl_table;
mod primitive_processor;
mod program_builder;
mod rt_adjustment;
mod vertex_builder;

pub use sl_type::{Precision, SlType, TypeModifier};
pub use shader_var::ShaderVar;
pub use decl_table::DeclTable;
pub use primitive_processor::{Attribute, GeometryProcessor, PrimitiveProcessor};
pub use program_builder::{
    NameMangler, ProgramBuilder, ProgramBuilderState, ShaderVisibility, UniformInfo,
};
pub use rt_adjustment::{RtAdjustment, SurfaceOrigin};
pub use vertex_builder::{BuilderState, VertexShaderBuilder, RT_ADJUSTMENT_NAME};
