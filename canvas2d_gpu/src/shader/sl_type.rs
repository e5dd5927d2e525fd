/// Shading-language types, precisions and storage modifiers.

use crate::gpu::GlslGeneration;

/// Shading-language data type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlType {
    Float,
    Vec2f,
    Vec3f,
    Vec4f,
    Mat33f,
    Mat44f,
    Sampler2D,
}

impl SlType {
    /// GLSL spelling
    pub fn glsl_name(&self) -> &'static str {
        match self {
            SlType::Float => "float",
            SlType::Vec2f => "vec2",
            SlType::Vec3f => "vec3",
            SlType::Vec4f => "vec4",
            SlType::Mat33f => "mat3",
            SlType::Mat44f => "mat4",
            SlType::Sampler2D => "sampler2D",
        }
    }

    /// Number of float components (0 for samplers)
    pub fn component_count(&self) -> u32 {
        match self {
            SlType::Float => 1,
            SlType::Vec2f => 2,
            SlType::Vec3f => 3,
            SlType::Vec4f => 4,
            SlType::Mat33f => 9,
            SlType::Mat44f => 16,
            SlType::Sampler2D => 0,
        }
    }
}

/// Precision qualifier (only emitted for ES contexts)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Precision {
    /// Use the stage's default precision
    #[default]
    Default,
    Low,
    Medium,
    High,
}

impl Precision {
    /// Qualifier followed by a space, or nothing
    pub fn qualifier(&self) -> &'static str {
        match self {
            Precision::Default => "",
            Precision::Low => "lowp ",
            Precision::Medium => "mediump ",
            Precision::High => "highp ",
        }
    }
}

/// Storage modifier of a shader variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TypeModifier {
    /// Plain local or global
    #[default]
    None,
    /// Per-vertex input
    Attribute,
    /// Interpolated input of a later stage
    VaryingIn,
    /// Interpolated output of the vertex stage
    VaryingOut,
    Uniform,
    /// Stage output (e.g. fragment color)
    Out,
}

impl TypeModifier {
    /// Keyword for the target generation, empty for `None`
    pub fn keyword(&self, generation: GlslGeneration) -> &'static str {
        let in_out = generation.uses_in_out();
        match self {
            TypeModifier::None => "",
            TypeModifier::Attribute => if in_out { "in" } else { "attribute" },
            TypeModifier::VaryingIn => if in_out { "in" } else { "varying" },
            TypeModifier::VaryingOut => if in_out { "out" } else { "varying" },
            TypeModifier::Uniform => "uniform",
            TypeModifier::Out => "out",
        }
    }
}
