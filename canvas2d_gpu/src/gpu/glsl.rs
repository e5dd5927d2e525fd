/// GLSL dialect configuration of a GPU context.

/// GL flavor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlStandard {
    /// Desktop OpenGL
    Desktop,
    /// OpenGL ES / WebGL
    Es,
}

/// GLSL language generation supported by the context
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum GlslGeneration {
    /// Desktop: 1.10, ES: 1.00
    K110,
    /// Desktop: 1.30
    K130,
    /// Desktop: 1.40
    K140,
    /// Desktop: 1.50
    K150,
    /// Desktop: 3.30
    K330,
    /// ES: 3.10
    K310Es,
}

impl GlslGeneration {
    /// Whether varyings and attributes use the `in`/`out` keywords
    pub fn uses_in_out(&self) -> bool {
        *self != GlslGeneration::K110
    }
}

/// Context information consulted when generating shader source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextInfo {
    /// GLSL generation to target
    pub glsl_generation: GlslGeneration,
    /// Desktop GL or ES
    pub standard: GlStandard,
    /// Request the compatibility profile on 1.50 and later
    pub compatibility_profile: bool,
}

impl Default for ContextInfo {
    fn default() -> Self {
        Self {
            glsl_generation: GlslGeneration::K140,
            standard: GlStandard::Desktop,
            compatibility_profile: false,
        }
    }
}

impl ContextInfo {
    /// Whether declarations carry precision qualifiers
    pub fn uses_precision_qualifiers(&self) -> bool {
        self.standard == GlStandard::Es
    }

    /// `#version` line that opens every shader
    pub fn version_decl(&self) -> &'static str {
        match self.glsl_generation {
            GlslGeneration::K110 => match self.standard {
                GlStandard::Es => "#version 100\n",
                GlStandard::Desktop => "#version 110\n",
            },
            GlslGeneration::K130 => "#version 130\n",
            GlslGeneration::K140 => "#version 140\n",
            GlslGeneration::K150 => {
                if self.compatibility_profile {
                    "#version 150 compatibility\n"
                } else {
                    "#version 150\n"
                }
            }
            GlslGeneration::K330 => {
                if self.compatibility_profile {
                    "#version 330 compatibility\n"
                } else {
                    "#version 330\n"
                }
            }
            GlslGeneration::K310Es => "#version 310 es\n",
        }
    }
}

#[cfg(test)]
#[path = "glsl_tests.rs"]
mod tests;
