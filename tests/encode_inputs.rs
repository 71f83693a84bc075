//! Encoder behaviour at the public API boundary.
//!
//! Covers the validation matrix per field kind plus the fixed-width and
//! one-hot-exclusivity invariants, without involving a model artifact.

use rstest::rstest;

use premium_rs::encode::{Encoder, EncodingError};
use premium_rs::input::RawInput;
use premium_rs::schema::fields;

fn complete_input() -> RawInput {
    RawInput::new()
        .with(fields::AGE, 40)
        .with(fields::DEPENDANTS, 2)
        .with(fields::INCOME, 30)
        .with(fields::GENETICAL_RISK, 1)
        .with(fields::INSURANCE_PLAN, "Silver")
        .with(fields::EMPLOYMENT_STATUS, "Freelancer")
        .with(fields::GENDER, "Female")
        .with(fields::MARITAL_STATUS, "Married")
        .with(fields::BMI_CATEGORY, "Overweight")
        .with(fields::SMOKING_STATUS, "Occasional")
        .with(fields::REGION, "Southwest")
        .with(fields::MEDICAL_HISTORY, "Thyroid")
}

#[test]
fn complete_input_encodes_to_schema_width() {
    let encoder = Encoder::v1();
    let vector = encoder.encode(&complete_input()).expect("encode");
    assert_eq!(vector.len(), 18);
}

#[rstest]
#[case("Bronze", 1.0)]
#[case("Silver", 2.0)]
#[case("Gold", 3.0)]
fn insurance_plan_is_ordinal(#[case] plan: &str, #[case] expected: f32) {
    let encoder = Encoder::v1();
    let input = complete_input().with(fields::INSURANCE_PLAN, plan);
    let vector = encoder.encode(&input).expect("encode");
    assert_eq!(vector.as_slice()[3], expected);
}

#[rstest]
#[case("Northeast", [0.0, 0.0, 0.0])]
#[case("Northwest", [1.0, 0.0, 0.0])]
#[case("Southeast", [0.0, 1.0, 0.0])]
#[case("Southwest", [0.0, 0.0, 1.0])]
fn region_one_hot_columns(#[case] region: &str, #[case] expected: [f32; 3]) {
    let encoder = Encoder::v1();
    let input = complete_input().with(fields::REGION, region);
    let vector = encoder.encode(&input).expect("encode");
    assert_eq!(&vector.as_slice()[7..10], &expected);
}

#[rstest]
#[case(fields::AGE, 18, 100)]
#[case(fields::DEPENDANTS, 0, 20)]
#[case(fields::INCOME, 0, 200)]
#[case(fields::GENETICAL_RISK, 0, 5)]
fn numeric_fields_accept_their_bounds(#[case] field: &str, #[case] min: i64, #[case] max: i64) {
    let encoder = Encoder::v1();
    for value in [min, max] {
        let input = complete_input().with(field, value);
        assert!(encoder.encode(&input).is_ok(), "{field}={value} should encode");
    }

    for value in [min - 1, max + 1] {
        let input = complete_input().with(field, value);
        assert!(
            matches!(encoder.encode(&input), Err(EncodingError::OutOfRange { .. })),
            "{field}={value} should be out of range"
        );
    }
}

#[rstest]
#[case(fields::GENDER, "Other")]
#[case(fields::REGION, "Midwest")]
#[case(fields::BMI_CATEGORY, "Athletic")]
#[case(fields::SMOKING_STATUS, "Heavy")]
#[case(fields::INSURANCE_PLAN, "Platinum")]
#[case(fields::MEDICAL_HISTORY, "Unknown Disease")]
fn out_of_enumeration_values_fail(#[case] field: &str, #[case] value: &str) {
    let encoder = Encoder::v1();
    let input = complete_input().with(field, value);
    assert!(matches!(
        encoder.encode(&input),
        Err(EncodingError::UnknownCategory { .. })
    ));
}

#[test]
fn each_one_hot_group_has_at_most_one_active_column() {
    let encoder = Encoder::v1();
    let vector = encoder.encode(&complete_input()).expect("encode");
    let cols = vector.as_slice();

    // (start, end) spans of the one-hot groups in schema order.
    for (start, end) in [(6, 7), (7, 10), (10, 11), (11, 14), (14, 16), (16, 18)] {
        let active: f32 = cols[start..end].iter().sum();
        assert!(active == 0.0 || active == 1.0, "group {start}..{end}: {active}");
    }
}

#[test]
fn field_order_in_the_map_does_not_matter() {
    let encoder = Encoder::v1();

    // Same fields inserted in a different order.
    let original = complete_input();
    let mut pairs: Vec<_> = original.iter().collect();
    pairs.reverse();

    let mut reordered = RawInput::new();
    for (name, value) in pairs {
        reordered.set(name, value.clone());
    }

    assert_eq!(
        encoder.encode(&original).expect("encode"),
        encoder.encode(&reordered).expect("encode"),
    );
}
