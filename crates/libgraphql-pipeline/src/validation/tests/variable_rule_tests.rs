use crate::test_utils::rule_numbers;
use crate::test_utils::validate;

#[test]
fn unused_variable_is_reported_once() {
    let result = validate("query Q($x: Int) { version }");
    assert_eq!(rule_numbers(&result), vec!["5.8.4"]);
    let message = result.messages.iter().next().unwrap();
    assert_eq!(message.text(), "Variable \"$x\" is never used in operation \"Q\"");
    assert_eq!(message.path(), "query:Q/$x");
}

#[test]
fn variables_used_only_through_fragments_count_as_used() {
    let result = validate(concat!(
        "query Q($first: Int) { user(id: 1) { ...Friends } }\n",
        "fragment Friends on User { friends(first: $first) { ...Names } }\n",
        "fragment Names on User { name }\n",
    ));
    assert!(result.is_valid, "{:?}", result.messages);
}

#[test]
fn usage_is_tracked_per_operation() {
    let result = validate(concat!(
        "query A($id: ID!) { user(id: $id) { id } }\n",
        "query B($id: ID!) { version }\n",
    ));
    assert_eq!(rule_numbers(&result), vec!["5.8.4"]);
    assert_eq!(result.messages.iter().next().map(|msg| msg.path()), Some("query:B/$id"));
}

#[test]
fn duplicate_variables_are_reported() {
    let result = validate(concat!(
        "query Q($a: Int, $a: Int) {\n",
        "  user(id: 1) { friends(first: $a) { id } }\n",
        "}\n",
    ));
    assert_eq!(rule_numbers(&result), vec!["5.8.1"]);
    assert_eq!(result.messages.iter().next().unwrap().location().column, 18);
}

#[test]
fn variables_must_have_input_types() {
    let result = validate("query Q($u: User) { version }");
    assert_eq!(rule_numbers(&result), vec!["5.8.2", "5.8.4"]);
    assert_eq!(
        result.messages.iter().next().map(|msg| msg.text()),
        Some("Variable \"$u\" cannot be of non-input type \"User\""),
    );

    let result = validate("query Q($f: UserFilter, $r: [Role!]) { users(filter: $f) { role } a: users { id @skip(if: false) } b: version @include(if: true) } ");
    assert_eq!(rule_numbers(&result), vec!["5.8.4"]);

    let result = validate("query Q($z: Zzz) { version }");
    assert_eq!(rule_numbers(&result), vec!["5.8.2", "5.8.4"]);
}

#[test]
fn undefined_variables_are_reported_at_their_usage() {
    let result = validate("query Q { user(id: $missing) { id } }");
    assert_eq!(rule_numbers(&result), vec!["5.8.3"]);
    let message = result.messages.iter().next().unwrap();
    assert_eq!(message.text(), "Variable \"$missing\" is not defined by operation \"Q\"");
    assert_eq!(message.path(), "query:Q/user/id");

    let result = validate(concat!(
        "query Q { user(id: 1) { ...F } }\n",
        "fragment F on User { friends(first: $n) { id } }\n",
    ));
    assert_eq!(rule_numbers(&result), vec!["5.8.3"]);
    assert_eq!(result.messages.iter().next().unwrap().location().line, 2);
}

#[test]
fn nullable_variable_in_non_null_position_is_rejected() {
    let result = validate("query Q($id: ID) { user(id: $id) { id } }");
    assert_eq!(rule_numbers(&result), vec!["5.8.5"]);
    assert_eq!(
        result.messages.iter().next().map(|msg| msg.text()),
        Some("Variable \"$id\" of type \"ID\" used in position expecting type \"ID!\""),
    );

    let result = validate("query Q($id: ID = 1) { user(id: $id) { id } }");
    assert!(result.is_valid, "{:?}", result.messages);

    let result = validate("query Q($id: ID = null) { user(id: $id) { id } }");
    assert_eq!(rule_numbers(&result), vec!["5.8.5"]);
}

#[test]
fn variable_types_must_match_their_usage() {
    let result = validate("query Q($ids: [ID]) { users(ids: $ids) { id } }");
    assert_eq!(rule_numbers(&result), vec!["5.8.5"]);

    let result = validate("query Q($ids: [ID!]!) { users(ids: $ids) { id } }");
    assert!(result.is_valid, "{:?}", result.messages);

    let result = validate("query Q($first: String) { user(id: 1) { friends(first: $first) { id } } }");
    assert_eq!(rule_numbers(&result), vec!["5.8.5"]);

    let result = validate(concat!(
        "query Q($age: Int!, $role: Role) {\n",
        "  users(filter: { minAge: $age, role: $role }) { id }\n",
        "}\n",
    ));
    assert!(result.is_valid, "{:?}", result.messages);
}
