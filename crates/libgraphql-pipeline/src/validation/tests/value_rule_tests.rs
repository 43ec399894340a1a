use crate::test_utils::rule_numbers;
use crate::test_utils::validate;

fn first_text(query: &str) -> String {
    validate(query)
        .messages
        .iter()
        .next()
        .map(|msg| msg.text().to_string())
        .unwrap_or_default()
}

#[test]
fn scalar_literals_must_match_their_type() {
    let result = validate("{ user(id: true) { id } }");
    assert_eq!(rule_numbers(&result), vec!["5.6.1"]);
    assert_eq!(
        first_text("{ user(id: true) { id } }"),
        "Expected value of type \"ID!\", found true",
    );

    assert!(validate("{ user(id: \"abc\") { id } }").is_valid);
    assert!(validate("{ user(id: 7) { id } }").is_valid);
    assert_eq!(
        first_text("{ search(term: 12) { ... on Dog { id } } }"),
        "Expected value of type \"String!\", found 12",
    );
    assert_eq!(
        first_text("{ user(id: 1) { friends(first: 1.5) { id } } }"),
        "Expected value of type \"Int\", found 1.5",
    );
}

#[test]
fn int_literals_must_fit_in_32_bits() {
    let result = validate("{ users(filter: { minAge: 3000000000 }) { id } }");
    assert_eq!(rule_numbers(&result), vec!["5.6.1"]);
    assert!(validate("{ users(filter: { minAge: -2147483648 }) { id } }").is_valid);
}

#[test]
fn null_is_rejected_for_non_null_types() {
    let result = validate("{ user(id: null) { id } }");
    assert_eq!(rule_numbers(&result), vec!["5.6.1"]);
    assert_eq!(
        first_text("{ user(id: null) { id } }"),
        "Expected value of type \"ID!\", found null",
    );
    assert!(validate("{ user(id: 1) { friends(first: null) { id } } }").is_valid);
}

#[test]
fn enum_literals_must_name_a_declared_value() {
    assert!(validate("{ users(filter: { minAge: 1, role: ADMIN }) { id } }").is_valid);

    let result = validate("{ users(filter: { minAge: 1, role: OWNER }) { id } }");
    assert_eq!(rule_numbers(&result), vec!["5.6.1"]);

    let result = validate("{ users(filter: { minAge: 1, role: \"ADMIN\" }) { id } }");
    assert_eq!(rule_numbers(&result), vec!["5.6.1"]);
}

#[test]
fn list_items_are_checked_against_the_item_type() {
    assert!(validate("{ users(ids: [1, \"2\"]) { id } }").is_valid);
    assert!(validate("{ users(ids: 1) { id } }").is_valid);

    let result = validate("{ users(ids: [1, null]) { id } }");
    assert_eq!(rule_numbers(&result), vec!["5.6.1"]);
    let message = result.messages.iter().next().unwrap();
    assert_eq!(message.path(), "query/users/ids[1]");

    assert_eq!(
        first_text("{ user(id: [1]) { id } }"),
        "Expected value of type \"ID!\", found a list",
    );
}

#[test]
fn input_objects_are_only_accepted_for_input_object_types() {
    assert_eq!(
        first_text("{ user(id: { value: 1 }) { id } }"),
        "Expected value of type \"ID!\", found an object",
    );
    assert_eq!(
        first_text("{ users(filter: 1) { id } }"),
        "Expected value of type \"UserFilter\", found 1",
    );
}

#[test]
fn input_object_fields_must_be_declared() {
    let result = validate("{ users(filter: { minAge: 1, bogus: [true] }) { id } }");
    assert_eq!(rule_numbers(&result), vec!["5.6.2"]);
    assert_eq!(
        result.messages.iter().next().map(|msg| msg.text()),
        Some("Field \"bogus\" is not defined by type \"UserFilter\""),
    );
}

#[test]
fn input_object_fields_must_be_unique() {
    let result = validate("{ users(filter: { minAge: 1, minAge: 2 }) { id } }");
    assert_eq!(rule_numbers(&result), vec!["5.6.3"]);
    assert_eq!(
        result.messages.iter().next().map(|msg| msg.path()),
        Some("query/users/filter/minAge"),
    );
}

#[test]
fn required_input_object_fields_must_be_supplied() {
    let result = validate("{ users(filter: { nameContains: \"a\" }) { id } }");
    assert_eq!(rule_numbers(&result), vec!["5.6.4"]);
    assert_eq!(
        result.messages.iter().next().map(|msg| msg.text()),
        Some("Field \"UserFilter.minAge\" of required type \"Int!\" was not provided"),
    );

    let result = validate("{ users(filter: { minAge: null }) { id } }");
    assert_eq!(rule_numbers(&result), vec!["5.6.1"]);
}

#[test]
fn injected_directive_defaults_are_valid_values() {
    let result = validate("{ version @cached(scope: \"user\") }");
    assert!(result.is_valid, "{:?}", result.messages);

    let result = validate("{ version @cached(ttl: \"long\") }");
    assert_eq!(rule_numbers(&result), vec!["5.6.1"]);
}
