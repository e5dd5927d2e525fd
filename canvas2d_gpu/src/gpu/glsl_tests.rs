use super::*;

fn info(glsl_generation: GlslGeneration, standard: GlStandard, compatibility_profile: bool) -> ContextInfo {
    ContextInfo { glsl_generation, standard, compatibility_profile }
}

#[test]
fn test_default_context_info() {
    let info = ContextInfo::default();
    assert_eq!(info.glsl_generation, GlslGeneration::K140);
    assert_eq!(info.standard, GlStandard::Desktop);
    assert_eq!(info.version_decl(), "#version 140\n");
}

#[test]
fn test_version_decl_110() {
    assert_eq!(info(GlslGeneration::K110, GlStandard::Desktop, false).version_decl(), "#version 110\n");
    assert_eq!(info(GlslGeneration::K110, GlStandard::Es, false).version_decl(), "#version 100\n");
}

#[test]
fn test_version_decl_compatibility_profile() {
    assert_eq!(info(GlslGeneration::K150, GlStandard::Desktop, false).version_decl(), "#version 150\n");
    assert_eq!(
        info(GlslGeneration::K150, GlStandard::Desktop, true).version_decl(),
        "#version 150 compatibility\n"
    );
    assert_eq!(
        info(GlslGeneration::K330, GlStandard::Desktop, true).version_decl(),
        "#version 330 compatibility\n"
    );
}

#[test]
fn test_version_decl_es3() {
    assert_eq!(info(GlslGeneration::K310Es, GlStandard::Es, false).version_decl(), "#version 310 es\n");
}

#[test]
fn test_in_out_keywords() {
    assert!(!GlslGeneration::K110.uses_in_out());
    assert!(GlslGeneration::K130.uses_in_out());
    assert!(GlslGeneration::K310Es.uses_in_out());
}

#[test]
fn test_precision_qualifiers_only_on_es() {
    assert!(!ContextInfo::default().uses_precision_qualifiers());
    assert!(info(GlslGeneration::K110, GlStandard::Es, false).uses_precision_qualifiers());
}
