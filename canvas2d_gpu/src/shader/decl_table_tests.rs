use super::*;
use crate::shader::{SlType, TypeModifier};

#[test]
fn test_new_is_empty() {
    let table = DeclTable::new();
    assert!(table.is_empty());
    assert_eq!(table.len(), 0);
}

#[test]
fn test_push_unique_rejects_duplicate_name() {
    let mut table = DeclTable::new();
    assert!(table.push_unique(ShaderVar::attribute("inPosition", SlType::Vec2f)));
    assert!(!table.push_unique(ShaderVar::attribute("inPosition", SlType::Vec3f)));

    assert_eq!(table.len(), 1);
    assert_eq!(table.find("inPosition").unwrap().ty(), SlType::Vec2f);
}

#[test]
fn test_push_allows_duplicates() {
    let mut table = DeclTable::new();
    table.push(ShaderVar::local("t", SlType::Float));
    table.push(ShaderVar::local("t", SlType::Float));
    assert_eq!(table.len(), 2);
}

#[test]
fn test_preserves_insertion_order() {
    let mut table = DeclTable::new();
    table.push(ShaderVar::attribute("b", SlType::Float));
    table.push(ShaderVar::attribute("a", SlType::Float));

    let names: Vec<&str> = table.iter().map(|v| v.name()).collect();
    assert_eq!(names, vec!["b", "a"]);
    assert_eq!(table.get(0).unwrap().name(), "b");
}

#[test]
fn test_append_decls_one_line_per_var() {
    let mut table = DeclTable::new();
    table.push(ShaderVar::attribute("inPosition", SlType::Vec2f));
    table.push(ShaderVar::new("vColor", SlType::Vec4f, TypeModifier::VaryingOut));

    let mut out = String::new();
    table.append_decls(&ContextInfo::default(), &mut out);

    assert_eq!(out, "in vec2 inPosition;\nout vec4 vColor;\n");
}

#[test]
fn test_append_decls_empty_table_emits_nothing() {
    let mut out = String::from("#version 140\n");
    DeclTable::new().append_decls(&ContextInfo::default(), &mut out);
    assert_eq!(out, "#version 140\n");
}
