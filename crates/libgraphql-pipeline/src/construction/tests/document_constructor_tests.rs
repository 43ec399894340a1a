use crate::construction::DocumentConstructor;
use crate::construction::construction_rules;
use crate::document::DocumentPartKind;
use crate::document::PartData;
use crate::document::PartId;
use crate::document::ScalarValueKind;
use crate::schema::OperationKind;
use crate::schema::Schema;
use crate::schema::TypeAnnotation;
use crate::syntax::SourceDocument;
use crate::syntax::SyntaxNodeKind;
use crate::test_utils::construct;
use crate::test_utils::find_part;
use proptest::prelude::*;

#[test]
fn every_syntax_kind_has_construction_rules() {
    for kind in [
        SyntaxNodeKind::Argument,
        SyntaxNodeKind::Directive,
        SyntaxNodeKind::Document,
        SyntaxNodeKind::Field,
        SyntaxNodeKind::FragmentDefinition,
        SyntaxNodeKind::FragmentSpread,
        SyntaxNodeKind::InlineFragment,
        SyntaxNodeKind::ObjectField,
        SyntaxNodeKind::OperationDefinition,
        SyntaxNodeKind::Value,
        SyntaxNodeKind::VariableDefinition,
    ] {
        assert!(!construction_rules().fetch_rules(kind).is_empty(), "{kind:?}");
    }
    assert!(
        construction_rules()
            .fetch_rules(SyntaxNodeKind::NonExecutableDefinition)
            .is_empty(),
    );
    assert_eq!(
        construction_rules().rule_names(SyntaxNodeKind::Directive),
        vec!["DirectiveNodeToPart", "InjectDefaultDirectiveArguments"],
    );
}

#[test]
fn operations_are_typed_with_their_root_type() {
    let doc = construct(concat!(
        "query Q { version }\n",
        "mutation M { rename(id: 1, name: \"x\") { id } }\n",
        "subscription S { userAdded { id } }\n",
    ));
    assert!(doc.messages().is_empty());

    let ops: Vec<_> = doc.operations().iter().map(|id| doc.part(*id)).collect();
    assert_eq!(ops.len(), 3);
    assert_eq!(ops[0].graph_type(), Some("Query"));
    assert_eq!(ops[1].graph_type(), Some("Mutation"));
    assert_eq!(ops[2].graph_type(), Some("Subscription"));
    assert_eq!(ops[2].data(), &PartData::Operation {
        name: Some("S".to_string()),
        operation_kind: OperationKind::Subscription,
    });
}

#[test]
fn fields_are_typed_with_their_return_type() {
    let doc = construct("{ me: user(id: 1) { friends { name } bestFriend { id } } }");

    let user = find_part(&doc, DocumentPartKind::FieldSelection, "user");
    assert_eq!(user.data().response_key(), Some("me"));
    assert_eq!(user.graph_type(), Some("User"));
    assert_eq!(user.type_expression(), Some(&TypeAnnotation::named("User", true)));
    assert_eq!(doc.path(user.id()), "query/me");

    let friends = find_part(&doc, DocumentPartKind::FieldSelection, "friends");
    assert_eq!(friends.graph_type(), Some("User"));
    assert_eq!(friends.type_expression().unwrap().to_string(), "[User!]");

    let name = find_part(&doc, DocumentPartKind::FieldSelection, "name");
    assert_eq!(name.graph_type(), Some("String"));
    assert_eq!(name.parent(), Some(friends.id()));

    let best_friend = find_part(&doc, DocumentPartKind::FieldSelection, "bestFriend");
    assert_eq!(best_friend.type_expression().unwrap().to_string(), "User!");
}

#[test]
fn unknown_fields_have_no_type() {
    let doc = construct("{ nope { deeper } }");
    let nope = find_part(&doc, DocumentPartKind::FieldSelection, "nope");
    assert_eq!(nope.graph_type(), None);
    assert_eq!(nope.type_expression(), None);

    let deeper = find_part(&doc, DocumentPartKind::FieldSelection, "deeper");
    assert_eq!(deeper.graph_type(), None);
}

#[test]
fn fragments_are_typed_and_registered() {
    let doc = construct(concat!(
        "{ pets { ...PetName ... on Dog { barks } ... { name } } }\n",
        "fragment PetName on Pet { name }\n",
    ));

    let fragment = doc.named_fragment("PetName").unwrap();
    assert_eq!(fragment.graph_type(), Some("Pet"));
    assert_eq!(fragment.parent(), Some(PartId::ROOT));
    assert_eq!(doc.path(fragment.id()), "fragment:PetName");

    let pets = find_part(&doc, DocumentPartKind::FieldSelection, "pets");
    let spreads = doc.children_of_kind(pets.id(), DocumentPartKind::FragmentSpread);
    assert_eq!(spreads.len(), 1);
    assert_eq!(doc.part(spreads[0]).name(), Some("PetName"));

    let inlines = doc.children_of_kind(pets.id(), DocumentPartKind::InlineFragment);
    assert_eq!(inlines.len(), 2);
    assert_eq!(doc.part(inlines[0]).graph_type(), Some("Dog"));
    // Without a type condition the enclosing type is inherited.
    assert_eq!(doc.part(inlines[1]).graph_type(), Some("Pet"));

    let barks = find_part(&doc, DocumentPartKind::FieldSelection, "barks");
    assert_eq!(barks.graph_type(), Some("Boolean"));
}

#[test]
fn directives_attach_to_the_part_they_annotate() {
    let doc = construct("query Q($s: Boolean!) @cached(ttl: 5) { version @skip(if: $s) }");

    let op = doc.part(doc.operations()[0]);
    let op_directives = doc.children_of_kind(op.id(), DocumentPartKind::Directive);
    assert_eq!(op_directives.len(), 1);
    assert_eq!(doc.part(op_directives[0]).name(), Some("cached"));

    let version = find_part(&doc, DocumentPartKind::FieldSelection, "version");
    let skip = find_part(&doc, DocumentPartKind::Directive, "skip");
    assert_eq!(skip.parent(), Some(version.id()));
    assert_eq!(doc.path(skip.id()), "query:Q/version/@skip");

    let if_arg = find_part(&doc, DocumentPartKind::InputArgument, "if");
    assert_eq!(if_arg.type_expression(), Some(&TypeAnnotation::named("Boolean", false)));
    let reference = doc.part(doc.children(if_arg.id()).as_slice()[0]);
    assert_eq!(reference.data(), &PartData::VariableReference { name: "s".to_string() });
}

#[test]
fn directive_defaults_are_injected() {
    let doc = construct("{ version @cached(scope: \"user\") }");

    let cached = find_part(&doc, DocumentPartKind::Directive, "cached");
    let args: Vec<_> =
        doc.children_of_kind(cached.id(), DocumentPartKind::InputArgument)
            .iter()
            .map(|id| doc.part(*id))
            .collect();
    assert_eq!(args.len(), 2);

    // Injected arguments are added before the supplied ones are built.
    assert_eq!(args[0].data(), &PartData::InputArgument {
        injected: true,
        name: "ttl".to_string(),
    });
    assert_eq!(args[0].graph_type(), Some("Int"));
    let ttl_value = doc.part(doc.children(args[0].id()).as_slice()[0]);
    assert_eq!(ttl_value.data(), &PartData::ScalarValue {
        kind: ScalarValueKind::Int,
        text: "60".to_string(),
    });

    assert_eq!(args[1].data(), &PartData::InputArgument {
        injected: false,
        name: "scope".to_string(),
    });
}

#[test]
fn supplied_directive_arguments_are_not_injected() {
    let doc = construct("{ version @cached(ttl: 1) }");
    let cached = find_part(&doc, DocumentPartKind::Directive, "cached");
    let args = doc.children_of_kind(cached.id(), DocumentPartKind::InputArgument);
    assert_eq!(args.len(), 1);
    assert_eq!(doc.part(args[0]).data(), &PartData::InputArgument {
        injected: false,
        name: "ttl".to_string(),
    });
}

#[test]
fn input_values_carry_expected_types() {
    let doc = construct(concat!(
        "{ users(ids: [1, \"two\"], filter: { role: ADMIN, minAge: 3 }) { id } }",
    ));

    let ids = find_part(&doc, DocumentPartKind::InputArgument, "ids");
    assert_eq!(ids.type_expression().unwrap().to_string(), "[ID!]");

    let list = doc.part(doc.children(ids.id()).as_slice()[0]);
    assert_eq!(list.kind(), DocumentPartKind::ListValue);
    assert_eq!(list.type_expression().unwrap().to_string(), "[ID!]");

    let items: Vec<_> = list.children().iter().map(|id| doc.part(id)).collect();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].type_expression().unwrap().to_string(), "ID!");
    assert_eq!(items[1].data(), &PartData::ScalarValue {
        kind: ScalarValueKind::String,
        text: "two".to_string(),
    });
    assert_eq!(doc.path(items[1].id()), "query/users/ids[1]");

    let filter = find_part(&doc, DocumentPartKind::InputArgument, "filter");
    let object = doc.part(doc.children(filter.id()).as_slice()[0]);
    assert_eq!(object.kind(), DocumentPartKind::ComplexValue);
    assert_eq!(object.graph_type(), Some("UserFilter"));

    let role = find_part(&doc, DocumentPartKind::InputObjectField, "role");
    assert_eq!(role.type_expression(), Some(&TypeAnnotation::named("Role", true)));
    assert_eq!(doc.path(role.id()), "query/users/filter/role");
    let role_value = doc.part(role.children().as_slice()[0]);
    assert_eq!(role_value.data(), &PartData::ScalarValue {
        kind: ScalarValueKind::Enum,
        text: "ADMIN".to_string(),
    });
    assert_eq!(role_value.graph_type(), Some("Role"));
}

#[test]
fn variables_and_their_defaults_become_parts() {
    let doc = construct("query Q($first: Int = 3, $id: ID!) { user(id: $id) { friends(first: $first) { id } } }");

    let op = doc.operations()[0];
    let vars = doc.children_of_kind(op, DocumentPartKind::Variable);
    assert_eq!(vars.len(), 2);

    let first = doc.part(vars[0]);
    assert_eq!(first.data(), &PartData::Variable {
        has_default: true,
        name: "first".to_string(),
    });
    assert_eq!(first.graph_type(), Some("Int"));
    assert_eq!(doc.path(first.id()), "query:Q/$first");
    let default_value = doc.part(first.children().as_slice()[0]);
    assert_eq!(default_value.type_expression(), Some(&TypeAnnotation::named("Int", true)));

    let id = doc.part(vars[1]);
    assert_eq!(id.type_expression(), Some(&TypeAnnotation::named("ID", false)));
    assert!(id.children().is_empty());
}

#[test]
fn type_system_definitions_are_reported_and_skipped() {
    let doc = construct("type Foo { a: Int }\n{ version }");

    assert_eq!(doc.messages().len(), 1);
    let message = doc.messages().iter().next().unwrap();
    assert_eq!(message.rule_number(), Some("5.1.1"));
    assert_eq!(message.location().line, 1);
    assert_eq!(doc.children(PartId::ROOT).len(), 1);
}

#[test]
fn unsupported_operation_kinds_are_not_descended_into() {
    let schema = Schema::from_sdl("type Query { a: Int }").unwrap();
    let source = SourceDocument::parse("mutation M { a }").unwrap();
    let doc = DocumentConstructor::construct(&schema, &source);

    let op = doc.part(doc.operations()[0]);
    assert_eq!(op.graph_type(), None);
    assert!(op.children().is_empty());
    assert_eq!(doc.messages().len(), 1);
    assert!(doc.messages().has_errors());
    assert_eq!(doc.messages().iter().next().unwrap().path(), "mutation:M");
}

#[test]
fn part_locations_point_at_the_source() {
    let doc = construct("{\n  user(id: 1) {\n    name\n  }\n}");
    let name = find_part(&doc, DocumentPartKind::FieldSelection, "name");
    assert_eq!(name.location().line, 3);
    assert_eq!(name.location().column, 5);

    let id_arg = find_part(&doc, DocumentPartKind::InputArgument, "id");
    assert_eq!(id_arg.location().line, 2);
    assert_eq!(id_arg.location().column, 8);
}

fn selection_set(depth: u32) -> impl Strategy<Value = String> {
    let leaf = prop::sample::select(vec!["id", "name", "role", "__typename"])
        .prop_map(str::to_string);
    leaf.prop_recursive(depth, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 1..4)
                .prop_map(|fields| format!("friends {{ {} }}", fields.join(" "))),
            prop::collection::vec(inner, 1..4)
                .prop_map(|fields| format!("... on User {{ {} }}", fields.join(" "))),
        ]
    })
}

proptest! {
    #[test]
    fn constructed_trees_are_well_formed(
        selections in prop::collection::vec(selection_set(3), 1..4),
    ) {
        let query = format!("{{ user(id: 1) {{ {} }} }}", selections.join(" "));
        let doc = construct(&query);

        for part in doc.parts() {
            match part.parent() {
                None => prop_assert_eq!(part.id(), PartId::ROOT),
                Some(parent) => {
                    let occurrences =
                        doc.children(parent)
                            .iter()
                            .filter(|child| *child == part.id())
                            .count();
                    prop_assert_eq!(occurrences, 1);
                    prop_assert!(!doc.is_ancestor_or_self(part.id(), parent));
                },
            }
        }
        prop_assert_eq!(doc.descendants(PartId::ROOT).len() + 1, doc.len());
    }
}
