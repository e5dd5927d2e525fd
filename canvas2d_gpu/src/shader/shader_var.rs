/// Named, typed shader variable and its source declaration.

use crate::gpu::ContextInfo;
use super::sl_type::{Precision, SlType, TypeModifier};

/// A shader variable as it appears in generated source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderVar {
    name: String,
    ty: SlType,
    modifier: TypeModifier,
    precision: Precision,
    array_count: Option<u32>,
}

impl ShaderVar {
    pub fn new(name: impl Into<String>, ty: SlType, modifier: TypeModifier) -> Self {
        Self {
            name: name.into(),
            ty,
            modifier,
            precision: Precision::Default,
            array_count: None,
        }
    }

    /// Vertex attribute
    pub fn attribute(name: impl Into<String>, ty: SlType) -> Self {
        Self::new(name, ty, TypeModifier::Attribute)
    }

    /// Uniform
    pub fn uniform(name: impl Into<String>, ty: SlType) -> Self {
        Self::new(name, ty, TypeModifier::Uniform)
    }

    /// Local variable, e.g. a position computed in the body
    pub fn local(name: impl Into<String>, ty: SlType) -> Self {
        Self::new(name, ty, TypeModifier::None)
    }

    pub fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_array_count(mut self, count: u32) -> Self {
        self.array_count = Some(count);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> SlType {
        self.ty
    }

    pub fn modifier(&self) -> TypeModifier {
        self.modifier
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    pub fn array_count(&self) -> Option<u32> {
        self.array_count
    }

    /// Append the declaration, without the trailing `;`
    ///
    /// e.g. `in vec2 inPosition`, `uniform highp vec4 urtAdjustment` (ES),
    /// `attribute vec2 inPosition` (GLSL 1.10).
    pub fn append_decl(&self, info: &ContextInfo, out: &mut String) {
        let keyword = self.modifier.keyword(info.glsl_generation);
        if !keyword.is_empty() {
            out.push_str(keyword);
            out.push(' ');
        }
        if info.uses_precision_qualifiers() {
            out.push_str(self.precision.qualifier());
        }
        out.push_str(self.ty.glsl_name());
        out.push(' ');
        out.push_str(&self.name);
        if let Some(count) = self.array_count {
            out.push_str(&format!("[{}]", count));
        }
    }
}

#[cfg(test)]
#[path = "shader_var_tests.rs"]
mod tests;
