//! End-to-end tests for the attribute-name accessors.
//!
//! Each test builds an input link the way a simulator would populate it,
//! then reads it back through `IdentifierExt`.

use pretty_assertions::assert_eq;
use wm_access::{Error, IdentifierExt, MemoryIdentifier, ValueType};

// ============================================================================
// Helper: an input link describing one aircraft.
// ============================================================================

fn input_link() -> MemoryIdentifier {
    MemoryIdentifier::new("I2")
        .with_string("callsign", "DAL88")
        .with_int("altitude", 31000)
        .with_float("speed", 452.5)
        .with_id(
            "position",
            MemoryIdentifier::new("P1")
                .with_float("lat", 33.64)
                .with_float("lon", -84.43),
        )
        .with_int("altitude", 30000)
}

// ============================================================================
// 1. Every accessor succeeds on its own type
// ============================================================================

#[test]
fn test_matching_types_succeed() {
    let link = input_link();

    assert_eq!(link.find_int("altitude"), Ok(31000));
    assert_eq!(link.find_float("speed"), Ok(452.5));
    assert_eq!(link.find_string("callsign"), Some("DAL88"));

    let position = link.find_id("position").unwrap();
    assert_eq!(position.find_float("lat"), Ok(33.64));
}

// ============================================================================
// 2. Mismatches: error for numbers, None for strings and identifiers
// ============================================================================

#[test]
fn test_int_on_string_is_invalid_type() {
    let link = input_link();
    match link.find_int("callsign") {
        Err(Error::InvalidElementType { expected, element: Some(found) }) => {
            assert_eq!(expected, "int");
            assert_eq!(found.attribute, "callsign");
            assert_eq!(found.value_type, ValueType::String);
        }
        other => panic!("expected InvalidElementType, got {other:?}"),
    }
}

#[test]
fn test_float_on_identifier_is_invalid_type() {
    let link = input_link();
    let err = link.find_float("position").unwrap_err();
    assert_eq!(err.to_string(), "invalid element type: expected float, found ^position P1 (id)");
}

#[test]
fn test_string_and_id_mismatch_are_none() {
    let link = input_link();
    assert_eq!(link.find_string("altitude"), None);
    assert_eq!(link.find_string("position"), None);
    assert!(link.find_id("callsign").is_none());
    assert!(link.find_id("speed").is_none());
}

// ============================================================================
// 3. Missing attributes
// ============================================================================

#[test]
fn test_missing_numbers_are_attribute_not_found() {
    let link = input_link();

    assert_eq!(
        link.find_int("heading"),
        Err(Error::AttributeNotFound {
            attribute: "heading".into(),
            ordinal: 0,
            parent: "I2".into(),
        })
    );
    assert!(matches!(
        link.find_float("heading"),
        Err(Error::AttributeNotFound { .. })
    ));
}

#[test]
fn test_missing_optional_fields_are_none() {
    let link = input_link();
    assert_eq!(link.find_string("heading"), None);
    assert!(link.find_id("heading").is_none());
}

// ============================================================================
// 4. Ordinals among same-named siblings
// ============================================================================

#[test]
fn test_second_ordinal() {
    let link = input_link();
    assert_eq!(link.find_int_nth("altitude", 1), Ok(30000));
    assert!(matches!(
        link.find_int_nth("altitude", 2),
        Err(Error::AttributeNotFound { ordinal: 2, .. })
    ));
    assert_eq!(link.find_string_nth("callsign", 1), None);
}

// ============================================================================
// 5. Errors propagate with `?`
// ============================================================================

fn ground_speed_knots(link: &MemoryIdentifier) -> wm_access::Result<f64> {
    let speed = link.find_float("speed")?;
    let altitude = link.find_int("altitude")?;
    Ok(speed - altitude as f64 / 1000.0)
}

#[test]
fn test_errors_propagate() {
    let link = input_link();
    assert_eq!(ground_speed_knots(&link), Ok(421.5));

    let empty = MemoryIdentifier::new("I9");
    assert!(matches!(
        ground_speed_knots(&empty),
        Err(Error::AttributeNotFound { ref attribute, .. }) if attribute == "speed"
    ));
}
