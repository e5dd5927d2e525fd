/// Ordered declaration table of shader variables.
///
/// Insertion order is declaration order in the emitted source.

use crate::gpu::ContextInfo;
use super::shader_var::ShaderVar;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclTable {
    vars: Vec<ShaderVar>,
}

impl DeclTable {
    pub fn new() -> Self {
        Self { vars: Vec::new() }
    }

    /// Append unconditionally
    pub fn push(&mut self, var: ShaderVar) {
        self.vars.push(var);
    }

    /// Append unless a variable with the same name exists
    ///
    /// Returns false (and leaves the table unchanged) on a name collision.
    pub fn push_unique(&mut self, var: ShaderVar) -> bool {
        if self.contains_name(var.name()) {
            return false;
        }
        self.vars.push(var);
        true
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    pub fn find(&self, name: &str) -> Option<&ShaderVar> {
        self.vars.iter().find(|v| v.name() == name)
    }

    pub fn get(&self, index: usize) -> Option<&ShaderVar> {
        self.vars.get(index)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShaderVar> {
        self.vars.iter()
    }

    /// Append one `decl;\n` line per variable, in table order
    pub fn append_decls(&self, info: &ContextInfo, out: &mut String) {
        for var in &self.vars {
            var.append_decl(info, out);
            out.push_str(";\n");
        }
    }
}

#[cfg(test)]
#[path = "decl_table_tests.rs"]
mod tests;
