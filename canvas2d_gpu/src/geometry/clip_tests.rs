use super::*;

#[test]
fn test_default_is_invalid() {
    assert_eq!(ClipStackGenId::default(), ClipStackGenId::INVALID);
    assert!(!ClipStackGenId::default().is_valid());
}

#[test]
fn test_reserved_ids() {
    assert!(ClipStackGenId::INVALID.is_reserved());
    assert!(ClipStackGenId::EMPTY.is_reserved());
    assert!(ClipStackGenId::WIDE_OPEN.is_reserved());
    assert!(!ClipStackGenId::FIRST_UNRESERVED.is_reserved());
    assert!(ClipStackGenId::EMPTY.is_valid());
}

#[test]
fn test_generator_starts_after_reserved() {
    let mut generator = ClipStackGenIdGenerator::new();
    assert_eq!(generator.next_id(), ClipStackGenId::FIRST_UNRESERVED);
}

#[test]
fn test_generator_ids_are_distinct() {
    let mut generator = ClipStackGenIdGenerator::default();
    let a = generator.next_id();
    let b = generator.next_id();
    let c = generator.next_id();

    assert_ne!(a, b);
    assert_ne!(b, c);
    assert!(a < b && b < c);
}

#[test]
fn test_generator_wraps_past_reserved() {
    let mut generator = ClipStackGenIdGenerator { next: i32::MAX };
    assert_eq!(generator.next_id(), ClipStackGenId(i32::MAX));
    assert_eq!(generator.next_id(), ClipStackGenId::FIRST_UNRESERVED);
}
