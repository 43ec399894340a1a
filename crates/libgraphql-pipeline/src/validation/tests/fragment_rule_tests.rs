use crate::test_utils::rule_numbers;
use crate::test_utils::validate;

#[test]
fn duplicate_fragment_names_are_reported_on_later_definitions() {
    let result = validate(concat!(
        "{ user(id: 1) { ...F } }\n",
        "fragment F on User { id }\n",
        "fragment F on User { name }\n",
    ));
    assert_eq!(rule_numbers(&result), vec!["5.5.1.1"]);
    let message = result.messages.iter().next().unwrap();
    assert_eq!(message.location().line, 3);
}

#[test]
fn fragments_must_condition_on_known_types() {
    let result = validate("{ user(id: 1) { ... on Nope { id } } }");
    assert_eq!(rule_numbers(&result), vec!["5.5.1.2"]);

    let result = validate(concat!(
        "{ user(id: 1) { ...F } }\n",
        "fragment F on Nope { anything }\n",
    ));
    assert_eq!(rule_numbers(&result), vec!["5.5.1.2"]);
}

#[test]
fn fragments_must_condition_on_composite_types() {
    let result = validate("{ user(id: 1) { ... on Int { id } } }");
    assert_eq!(rule_numbers(&result), vec!["5.5.1.3"]);

    let result = validate(concat!(
        "{ user(id: 1) { ...F } }\n",
        "fragment F on Role { id }\n",
    ));
    assert_eq!(rule_numbers(&result), vec!["5.5.1.3"]);
    assert_eq!(
        result.messages.iter().next().map(|msg| msg.text()),
        Some("Fragment \"F\" cannot condition on non composite type \"Role\""),
    );
}

#[test]
fn unused_fragments_are_reported() {
    let result = validate(concat!(
        "{ version }\n",
        "fragment Unused on User { id ...AlsoUnused }\n",
        "fragment AlsoUnused on User { name }\n",
    ));
    assert_eq!(rule_numbers(&result), vec!["5.5.1.4", "5.5.1.4"]);
}

#[test]
fn spreads_must_target_defined_fragments() {
    let result = validate("{ user(id: 1) { ...Missing } }");
    assert_eq!(rule_numbers(&result), vec!["5.5.2.1"]);
    assert_eq!(
        result.messages.iter().next().map(|msg| msg.path()),
        Some("query/user/...Missing"),
    );
}

#[test]
fn fragment_cycles_are_reported_once() {
    let result = validate(concat!(
        "{ user(id: 1) { ...B } }\n",
        "fragment B on User { bestFriend { ...A } }\n",
        "fragment A on User { ...B }\n",
    ));
    assert_eq!(rule_numbers(&result), vec!["5.5.2.2"]);
    let message = result.messages.iter().next().unwrap();
    assert_eq!(message.path(), "fragment:A");
    assert!(message.text().ends_with("A -> B -> A"), "{}", message.text());
}

#[test]
fn self_spreading_fragment_is_a_cycle() {
    let result = validate(concat!(
        "{ user(id: 1) { ...Loop } }\n",
        "fragment Loop on User { id bestFriend { ...Loop } }\n",
    ));
    assert_eq!(rule_numbers(&result), vec!["5.5.2.2"]);
    assert!(result.messages.iter().next().unwrap().text().ends_with("Loop -> Loop"));
}

#[test]
fn fragment_cycles_do_not_hang_other_rules() {
    let config = crate::PipelineConfig::default().with_max_query_depth(Some(10));
    let result = crate::test_utils::validate_with(
        concat!(
            "subscription ($n: Int) { userAdded { ...A } }\n",
            "fragment A on User { friends(first: $n) { ...B } }\n",
            "fragment B on User { ...A }\n",
        ),
        &config,
    );
    assert_eq!(rule_numbers(&result), vec!["5.5.2.2"]);
}

#[test]
fn repeated_spreads_are_followed_once() {
    let mut query = String::from("{ ...F0 }\n");
    for i in 0..29 {
        query.push_str(&format!("fragment F{i} on Query {{ ...F{next} ...F{next} }}\n", next = i + 1));
    }
    query.push_str("fragment F29 on Query { version }\n");

    let started = std::time::Instant::now();
    let result = validate(&query);
    assert!(result.is_valid, "{:?}", result.messages);

    let config = crate::PipelineConfig::default().with_max_query_depth(Some(10));
    let result = crate::test_utils::validate_with(&query, &config);
    assert!(result.is_valid, "{:?}", result.messages);
    assert!(
        started.elapsed() < std::time::Duration::from_secs(2),
        "validation took {:?}",
        started.elapsed(),
    );
}

#[test]
fn cycles_through_repeated_spreads_are_reported_once() {
    let mut query = String::from("{ ...F0 }\n");
    for i in 0..24 {
        query.push_str(&format!("fragment F{i} on Query {{ ...F{next} ...F{next} }}\n", next = i + 1));
    }
    query.push_str("fragment F24 on Query { version ...F0 ...F0 }\n");

    let result = validate(&query);
    assert_eq!(rule_numbers(&result), vec!["5.5.2.2"]);
    let message = result.messages.iter().next().unwrap();
    assert_eq!(message.path(), "fragment:F0");
    assert!(message.text().ends_with("F23 -> F24 -> F0"), "{}", message.text());
}

#[test]
fn spreads_must_be_possible() {
    let result = validate("{ dog { ... on User { id } } }");
    assert_eq!(rule_numbers(&result), vec!["5.5.2.3"]);
    assert_eq!(
        result.messages.iter().next().map(|msg| msg.text()),
        Some("Fragment cannot be spread here as objects of type \"Dog\" can never be of type \"User\""),
    );

    let result = validate("{ pets { ... on Dog { barks } ... on Cat { meows } ... on User { id } } }");
    assert_eq!(rule_numbers(&result), vec!["5.5.2.3"]);

    let result = validate(concat!(
        "{ search(term: \"a\") { ...PetName } }\n",
        "fragment PetName on Pet { name }\n",
    ));
    assert!(result.is_valid, "{:?}", result.messages);

    let result = validate(concat!(
        "{ dog { ...UserId } }\n",
        "fragment UserId on User { id }\n",
    ));
    assert_eq!(rule_numbers(&result), vec!["5.5.2.3"]);
}
