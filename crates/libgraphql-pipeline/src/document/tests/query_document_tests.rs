use crate::document::DocumentPart;
use crate::document::DocumentPartKind;
use crate::document::PartData;
use crate::document::PartId;
use crate::document::QueryDocument;
use crate::document::ScalarValueKind;
use crate::loc::SourceLocation;
use crate::schema::OperationKind;
use proptest::prelude::*;

fn loc() -> SourceLocation {
    SourceLocation::start_of_document()
}

fn add(doc: &mut QueryDocument, parent: PartId, data: PartData) -> PartId {
    doc.add_child(parent, DocumentPart::new(parent, data, loc()))
}

fn field(name: &str) -> PartData {
    PartData::FieldSelection {
        alias: None,
        name: name.to_string(),
    }
}

fn query(name: Option<&str>) -> PartData {
    PartData::Operation {
        name: name.map(str::to_string),
        operation_kind: OperationKind::Query,
    }
}

fn int(text: &str) -> PartData {
    PartData::ScalarValue {
        kind: ScalarValueKind::Int,
        text: text.to_string(),
    }
}

#[test]
fn new_document_has_only_a_root() {
    let doc = QueryDocument::new();
    assert_eq!(doc.len(), 1);

    let root = doc.part(PartId::ROOT);
    assert_eq!(root.kind(), DocumentPartKind::Document);
    assert_eq!(root.parent(), None);
    assert!(root.children().is_empty());
    assert_eq!(doc.path(PartId::ROOT), "");
    assert!(doc.operations().is_empty());
}

#[test]
fn children_preserve_insertion_order_and_are_indexed_by_kind() {
    let mut doc = QueryDocument::new();
    let op = add(&mut doc, PartId::ROOT, query(Some("Q")));
    let a = add(&mut doc, op, field("a"));
    let dir = add(&mut doc, op, PartData::Directive { name: "d".to_string() });
    let b = add(&mut doc, op, field("b"));

    let children = doc.children(op);
    assert_eq!(children.as_slice(), &[a, dir, b]);
    assert_eq!(children.of_kind(DocumentPartKind::FieldSelection), &[a, b]);
    assert_eq!(children.of_kind(DocumentPartKind::Directive), &[dir]);
    assert!(children.of_kind(DocumentPartKind::InlineFragment).is_empty());
    assert_eq!(children.first_of_kind(DocumentPartKind::FieldSelection), Some(a));
    assert_eq!(doc.operations(), &[op]);
}

#[test]
#[should_panic(expected = "belongs under")]
fn adding_a_part_under_the_wrong_parent_panics() {
    let mut doc = QueryDocument::new();
    let op = add(&mut doc, PartId::ROOT, query(None));
    let part = DocumentPart::new(PartId::ROOT, field("a"), loc());
    doc.add_child(op, part);
}

#[test]
#[should_panic(expected = "nonexistent parent")]
fn adding_a_part_under_a_missing_parent_panics() {
    let mut doc = QueryDocument::new();
    let missing = PartId(42);
    doc.add_child(missing, DocumentPart::new(missing, field("a"), loc()));
}

#[test]
fn paths_follow_the_parent_chain() {
    let mut doc = QueryDocument::new();
    let op = add(&mut doc, PartId::ROOT, query(Some("GetUser")));
    let var = add(&mut doc, op, PartData::Variable {
        has_default: false,
        name: "id".to_string(),
    });
    let user = add(&mut doc, op, PartData::FieldSelection {
        alias: Some("me".to_string()),
        name: "user".to_string(),
    });
    let arg = add(&mut doc, user, PartData::InputArgument {
        injected: false,
        name: "ids".to_string(),
    });
    let list = add(&mut doc, arg, PartData::ListValue);
    let _first = add(&mut doc, list, int("1"));
    let second = add(&mut doc, list, int("2"));
    let inline = add(&mut doc, user, PartData::InlineFragment {
        type_condition: Some("User".to_string()),
    });
    let spread = add(&mut doc, inline, PartData::FragmentSpread {
        fragment_name: "F".to_string(),
    });
    let dir = add(&mut doc, spread, PartData::Directive {
        name: "skip".to_string(),
    });
    let anon = add(&mut doc, PartId::ROOT, query(None));
    let frag = add(&mut doc, PartId::ROOT, PartData::NamedFragmentDefinition {
        name: "F".to_string(),
        type_condition: "User".to_string(),
    });

    assert_eq!(doc.path(op), "query:GetUser");
    assert_eq!(doc.path(var), "query:GetUser/$id");
    assert_eq!(doc.path(user), "query:GetUser/me");
    assert_eq!(doc.path(arg), "query:GetUser/me/ids");
    assert_eq!(doc.path(list), "query:GetUser/me/ids");
    assert_eq!(doc.path(second), "query:GetUser/me/ids[1]");
    assert_eq!(doc.path(inline), "query:GetUser/me/...on User");
    assert_eq!(doc.path(spread), "query:GetUser/me/...on User/...F");
    assert_eq!(doc.path(dir), "query:GetUser/me/...on User/...F/@skip");
    assert_eq!(doc.path(anon), "query");
    assert_eq!(doc.path(frag), "fragment:F");
}

#[test]
fn named_fragment_index_keeps_the_first_definition() {
    let mut doc = QueryDocument::new();
    let fragment = |name: &str| PartData::NamedFragmentDefinition {
        name: name.to_string(),
        type_condition: "User".to_string(),
    };
    let first = add(&mut doc, PartId::ROOT, fragment("F"));
    let _dupe = add(&mut doc, PartId::ROOT, fragment("F"));
    let other = add(&mut doc, PartId::ROOT, fragment("G"));

    assert_eq!(doc.fragment_definitions().len(), 3);
    assert_eq!(doc.named_fragments().len(), 2);
    assert_eq!(doc.named_fragment("F").map(DocumentPart::id), Some(first));
    assert_eq!(doc.named_fragment("G").map(DocumentPart::id), Some(other));
    assert!(doc.named_fragment("H").is_none());
}

#[test]
fn graph_type_may_be_reassigned_to_the_same_name() {
    let mut doc = QueryDocument::new();
    let op = add(&mut doc, PartId::ROOT, query(None));
    doc.set_graph_type(op, "Query");
    doc.set_graph_type(op, "Query");
    assert_eq!(doc.part(op).graph_type(), Some("Query"));
}

#[test]
#[should_panic(expected = "Attempted to change the graph type")]
fn graph_type_may_not_change() {
    let mut doc = QueryDocument::new();
    let op = add(&mut doc, PartId::ROOT, query(None));
    doc.set_graph_type(op, "Query");
    doc.set_graph_type(op, "Mutation");
}

#[test]
fn descendants_ancestors_and_enclosing() {
    let mut doc = QueryDocument::new();
    let op = add(&mut doc, PartId::ROOT, query(None));
    let a = add(&mut doc, op, field("a"));
    let b = add(&mut doc, a, field("b"));
    let c = add(&mut doc, op, field("c"));

    assert_eq!(doc.descendants(PartId::ROOT), vec![op, a, b, c]);
    assert_eq!(doc.descendants(a), vec![b]);
    assert_eq!(
        doc.ancestors(b).map(DocumentPart::id).collect::<Vec<_>>(),
        vec![a, op, PartId::ROOT],
    );
    assert_eq!(
        doc.enclosing(b, DocumentPartKind::Operation).map(DocumentPart::id),
        Some(op),
    );
    assert!(doc.enclosing(op, DocumentPartKind::FieldSelection).is_none());
    assert!(doc.is_ancestor_or_self(op, b));
    assert!(doc.is_ancestor_or_self(b, b));
    assert!(!doc.is_ancestor_or_self(c, b));
}

/// Builds a tree by attaching each new part under a previously added one.
/// `parent_choices[i]` picks the parent of part `i + 1` (modulo the parts
/// available at that point).
fn build_random_tree(parent_choices: &[usize]) -> QueryDocument {
    let mut doc = QueryDocument::new();
    for (idx, choice) in parent_choices.iter().enumerate() {
        let parent = PartId(choice % (idx + 1));
        add(&mut doc, parent, field(&format!("f{idx}")));
    }
    doc
}

proptest! {
    #[test]
    fn every_part_appears_exactly_once_in_its_parents_children(
        parent_choices in prop::collection::vec(any::<usize>(), 0..64),
    ) {
        let doc = build_random_tree(&parent_choices);
        for part in doc.parts() {
            let Some(parent) = part.parent() else {
                prop_assert_eq!(part.id(), PartId::ROOT);
                continue;
            };
            let occurrences =
                doc.children(parent)
                    .iter()
                    .filter(|child| *child == part.id())
                    .count();
            prop_assert_eq!(occurrences, 1);
            prop_assert!(!doc.descendants(part.id()).contains(&part.id()));
        }
        prop_assert_eq!(doc.descendants(PartId::ROOT).len(), doc.len() - 1);
    }

    #[test]
    fn paths_do_not_change_after_later_insertions(
        before in prop::collection::vec(any::<usize>(), 1..32),
        after in prop::collection::vec(any::<usize>(), 0..32),
    ) {
        let mut doc = build_random_tree(&before);
        let observed: Vec<(PartId, String)> =
            doc.parts()
                .map(|part| (part.id(), doc.path(part.id()).to_string()))
                .collect();

        let existing = doc.len();
        for (idx, choice) in after.iter().enumerate() {
            let parent = PartId(choice % (existing + idx));
            add(&mut doc, parent, field(&format!("g{idx}")));
        }

        for (id, path) in observed {
            prop_assert_eq!(doc.path(id), path.as_str());
        }
    }
}
