/// Vertex attribute layout of the primitive being drawn.

use super::shader_var::ShaderVar;
use super::sl_type::SlType;

/// Vertex attribute declared by a primitive processor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub ty: SlType,
}

impl Attribute {
    pub fn new(name: impl Into<String>, ty: SlType) -> Self {
        Self { name: name.into(), ty }
    }

    /// The attribute as a declarable shader input
    pub fn as_shader_var(&self) -> ShaderVar {
        ShaderVar::attribute(self.name.clone(), self.ty)
    }
}

/// Read-only description of the vertex attributes a primitive consumes.
///
/// Attribute order is binding order: attribute `i` is bound to slot `i`.
pub trait PrimitiveProcessor {
    /// Debug name
    fn name(&self) -> &str;

    /// Declared attributes, in binding order
    fn attributes(&self) -> &[Attribute];

    fn num_attribs(&self) -> usize {
        self.attributes().len()
    }

    fn attrib(&self, index: usize) -> Option<&Attribute> {
        self.attributes().get(index)
    }
}

/// Primitive processor built from an explicit attribute list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeometryProcessor {
    name: String,
    attributes: Vec<Attribute>,
}

impl GeometryProcessor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    /// Builder-style attribute declaration
    pub fn with_attribute(mut self, name: impl Into<String>, ty: SlType) -> Self {
        self.add_attribute(name, ty);
        self
    }

    pub fn add_attribute(&mut self, name: impl Into<String>, ty: SlType) {
        self.attributes.push(Attribute::new(name, ty));
    }
}

impl PrimitiveProcessor for GeometryProcessor {
    fn name(&self) -> &str {
        &self.name
    }

    fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }
}
