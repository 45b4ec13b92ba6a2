//! Integration tests for the core error taxonomy

use core_kernel::{CoreError, ErrorKind};

#[test]
fn test_each_kind_maps_distinctly() {
    assert_eq!(CoreError::validation("x").kind(), ErrorKind::Validation);
    assert_eq!(CoreError::conflict("x").kind(), ErrorKind::Conflict);
    assert_eq!(CoreError::invalid_state("x").kind(), ErrorKind::InvalidState);
    assert_eq!(CoreError::not_found("Bed", "BED-1").kind(), ErrorKind::NotFound);
}

#[test]
fn test_messages_are_human_readable_and_distinct() {
    let messages = [
        CoreError::validation("total beds must be at least 1").to_string(),
        CoreError::conflict("bed BED-1 is already occupied").to_string(),
        CoreError::invalid_state("admission already discharged").to_string(),
        CoreError::not_found("Bill", "BILL-404").to_string(),
    ];
    for (i, a) in messages.iter().enumerate() {
        assert!(!a.is_empty());
        for b in messages.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_not_found_names_entity_and_id() {
    let err = CoreError::not_found("Admission", "IPD-77");
    assert!(err.is_not_found());
    let msg = err.to_string();
    assert!(msg.contains("Admission"));
    assert!(msg.contains("IPD-77"));
}

#[test]
fn test_conflict_predicate() {
    assert!(CoreError::conflict("lost the race").is_conflict());
    assert!(!CoreError::validation("nope").is_conflict());
}
