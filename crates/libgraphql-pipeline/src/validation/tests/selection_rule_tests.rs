use crate::test_utils::rule_numbers;
use crate::test_utils::validate;

fn texts(query: &str) -> Vec<String> {
    validate(query)
        .messages
        .iter()
        .map(|msg| msg.text().to_string())
        .collect()
}

#[test]
fn unknown_fields_are_reported_without_their_selections() {
    let result = validate("{ user(id: 1) { id unknownField(x: 1) { nested } } }");
    assert_eq!(rule_numbers(&result), vec!["5.3.1"]);
    assert_eq!(
        texts("{ user(id: 1) { unknownField } }"),
        vec!["Cannot query field \"unknownField\" on type \"User\"".to_string()],
    );
}

#[test]
fn typename_is_selectable_on_every_composite_type() {
    let result = validate("{ __typename search(term: \"a\") { __typename } dog { __typename } }");
    assert!(result.is_valid, "{:?}", result.messages);
}

#[test]
fn same_response_key_for_different_fields_conflicts() {
    let result = validate("{ user(id: 1) { name: id name } }");
    assert_eq!(rule_numbers(&result), vec!["5.3.2"]);
    assert_eq!(result.messages.iter().next().map(|msg| msg.path()), Some("query/user/name"));
}

#[test]
fn same_field_with_different_arguments_conflicts() {
    let result = validate("{ user(id: 1) { id } user(id: 2) { id } }");
    assert_eq!(rule_numbers(&result), vec!["5.3.2"]);

    let result = validate("{ user(id: 1) { id } user(id: 1) { name } }");
    assert!(result.is_valid, "{:?}", result.messages);

    let result = validate("{ first: user(id: 1) { id } second: user(id: 2) { id } }");
    assert!(result.is_valid, "{:?}", result.messages);
}

fn conflict_paths(query: &str) -> Vec<String> {
    validate(query)
        .messages
        .iter()
        .filter(|msg| msg.rule_number() == Some("5.3.2"))
        .map(|msg| msg.path().to_string())
        .collect()
}

#[test]
fn conflicts_through_inline_fragments_are_reported() {
    let query = "{ user(id: 1) { a: name ... on User { a: id } } }";
    assert_eq!(rule_numbers(&validate(query)), vec!["5.3.2"]);
    assert_eq!(conflict_paths(query), vec!["query/user/...on User/a".to_string()]);
    assert_eq!(
        texts(query),
        vec![
            "Fields \"a\" conflict because \"name\" and \"id\" are different fields. \
            Use different aliases on the fields to fetch both if this was intentional"
                .to_string(),
        ],
    );
}

#[test]
fn conflicts_through_fragment_spreads_are_reported_once() {
    let query = concat!(
        "{ user(id: 1) { a: name ...F } }\n",
        "fragment F on User { a: id }\n",
    );
    assert_eq!(rule_numbers(&validate(query)), vec!["5.3.2"]);
    assert_eq!(conflict_paths(query), vec!["fragment:F/a".to_string()]);
}

#[test]
fn conflicts_within_merged_subselections_are_reported() {
    let query = "{ user(id: 1) { a: name } user(id: 1) { a: id } }";
    assert_eq!(rule_numbers(&validate(query)), vec!["5.3.2"]);
    assert_eq!(conflict_paths(query), vec!["query/user/a".to_string()]);

    let query = "{ user(id: 1) { bestFriend { id } } user(id: 1) { bestFriend { id: name } } }";
    assert_eq!(conflict_paths(query), vec!["query/user/bestFriend/id".to_string()]);
}

#[test]
fn compatible_fields_merge_across_fragments() {
    let result = validate(concat!(
        "{ user(id: 1) { name ...F ... on User { name bestFriend { id } } } }\n",
        "fragment F on User { name bestFriend { id name } }\n",
    ));
    assert!(result.is_valid, "{:?}", result.messages);

    let result = validate("{ search(term: \"a\") { ... on User { id } ... on Dog { id } } }");
    assert!(result.is_valid, "{:?}", result.messages);
}

#[test]
fn fields_on_distinct_objects_must_return_the_same_shape() {
    let query = "{ search(term: \"a\") { ... on User { name } ... on Dog { name } } }";
    assert_eq!(rule_numbers(&validate(query)), vec!["5.3.2"]);
    assert_eq!(
        texts(query),
        vec![
            "Fields \"name\" conflict because they return conflicting types \"String\" \
            and \"String!\". Use different aliases on the fields to fetch both if this was \
            intentional"
                .to_string(),
        ],
    );
}

#[test]
fn leaf_fields_must_not_have_selections() {
    let result = validate("{ version { length } }");
    assert_eq!(rule_numbers(&result), vec!["5.3.3"]);
    assert_eq!(
        texts("{ version { length } }"),
        vec![
            "Field \"version\" must not have a selection since type \"String!\" \
            has no subfields".to_string(),
        ],
    );
}

#[test]
fn composite_fields_must_have_selections() {
    let result = validate("{ user(id: 1) }");
    assert_eq!(rule_numbers(&result), vec!["5.3.3"]);

    let result = validate("{ users { bestFriend } }");
    assert_eq!(rule_numbers(&result), vec!["5.3.3"]);
}

#[test]
fn unknown_arguments_are_reported() {
    assert_eq!(
        texts("{ user(id: 1, bogus: { a: 1 }) { id } }"),
        vec!["Unknown argument \"bogus\" on field \"Query.user\"".to_string()],
    );
    assert_eq!(
        texts("{ version @tag(name: \"a\", color: RED) }"),
        vec!["Unknown argument \"color\" on directive \"@tag\"".to_string()],
    );
}

#[test]
fn duplicate_arguments_on_different_fields_do_not_conflict() {
    let result = validate("{ a: user(id: 1) { id } b: user(id: 2) { id } }");
    assert!(result.is_valid, "{:?}", result.messages);

    let result = validate("{ user(id: 1, id: 1) { friends(first: 1, first: 2) { id } } }");
    assert_eq!(rule_numbers(&result), vec!["5.4.2", "5.4.2"]);
}

#[test]
fn required_arguments_must_be_supplied() {
    assert_eq!(
        texts("{ user { id } }"),
        vec![
            "Argument \"id\" of type \"ID!\" is required on field \"Query.user\", \
            but it was not provided".to_string(),
        ],
    );

    let result = validate("{ version @tag }");
    assert_eq!(rule_numbers(&result), vec!["5.4.2.1"]);

    let result = validate("{ search(term: \"a\") { ... on Dog { id } } }");
    assert!(result.is_valid, "{:?}", result.messages);
}

#[test]
fn unknown_directives_are_reported_without_their_arguments() {
    let result = validate("{ version @nope(x: 1) }");
    assert_eq!(rule_numbers(&result), vec!["5.7.1"]);
}

#[test]
fn directives_must_be_used_at_declared_locations() {
    assert_eq!(
        texts("query Q @tag(name: \"a\") { version }"),
        vec!["Directive \"@tag\" may not be used on QUERY".to_string()],
    );

    let result = validate("query Q @cached { version @cached }");
    assert!(result.is_valid, "{:?}", result.messages);

    let result = validate(concat!(
        "query Q($v: Int @skip(if: true)) {\n",
        "  user(id: 1) { friends(first: $v) { id } }\n",
        "}\n",
    ));
    assert_eq!(rule_numbers(&result), vec!["5.7.2"]);
}

#[test]
fn non_repeatable_directives_are_unique_per_location() {
    let result = validate("{ version @cached @cached }");
    assert_eq!(rule_numbers(&result), vec!["5.7.3"]);

    let result = validate("{ version @tag(name: \"a\") @tag(name: \"b\") }");
    assert!(result.is_valid, "{:?}", result.messages);

    let result = validate("{ version @cached user(id: 1) @cached { id } }");
    assert!(result.is_valid, "{:?}", result.messages);
}
