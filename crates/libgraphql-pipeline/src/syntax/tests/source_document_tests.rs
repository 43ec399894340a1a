use crate::loc::SourceLocation;
use crate::syntax::SourceDocument;
use crate::syntax::SyntaxError;
use crate::syntax::SyntaxNode;
use crate::syntax::SyntaxNodeKind;

fn kinds(nodes: &[SyntaxNode]) -> Vec<SyntaxNodeKind> {
    nodes.iter().map(SyntaxNode::kind).collect()
}

#[test]
fn parses_a_simple_query() -> Result<(), SyntaxError> {
    let doc = SourceDocument::parse("query Q { a }")?;
    let root = doc.root();
    assert_eq!(root.kind(), SyntaxNodeKind::Document);

    let definitions = root.children();
    assert_eq!(kinds(&definitions), vec![SyntaxNodeKind::OperationDefinition]);
    assert_eq!(kinds(&definitions[0].children()), vec![SyntaxNodeKind::Field]);
    Ok(())
}

#[test]
fn syntax_error_carries_location() {
    let err = SourceDocument::parse("query Q {\n  a(\n}").unwrap_err();
    assert!(!err.message().is_empty());
    assert!(err.location().line >= 2);
}

#[test]
fn empty_document_is_rejected() {
    assert!(SourceDocument::parse("  # only a comment\n").is_err());
}

#[test]
fn field_children_are_arguments_then_directives_then_selections() -> Result<(), SyntaxError> {
    let doc = SourceDocument::parse(
        "{ user(id: 1) @include(if: true) { name ...F ... on User { id } } }",
    )?;
    let operation = doc.root().children().remove(0);
    let user = operation.children().remove(0);
    assert_eq!(kinds(&user.children()), vec![
        SyntaxNodeKind::Argument,
        SyntaxNodeKind::Directive,
        SyntaxNodeKind::Field,
        SyntaxNodeKind::FragmentSpread,
        SyntaxNodeKind::InlineFragment,
    ]);
    Ok(())
}

#[test]
fn operation_children_start_with_variable_definitions() -> Result<(), SyntaxError> {
    let doc = SourceDocument::parse(
        "query Q($a: Int = 1, $b: [String!]) @dir { a }",
    )?;
    let operation = doc.root().children().remove(0);
    let children = operation.children();
    assert_eq!(kinds(&children), vec![
        SyntaxNodeKind::VariableDefinition,
        SyntaxNodeKind::VariableDefinition,
        SyntaxNodeKind::Directive,
        SyntaxNodeKind::Field,
    ]);

    // The default value is the only child of `$a`.
    assert_eq!(kinds(&children[0].children()), vec![SyntaxNodeKind::Value]);
    assert!(children[1].children().is_empty());
    Ok(())
}

#[test]
fn complex_values_expose_nested_children() -> Result<(), SyntaxError> {
    let doc = SourceDocument::parse("{ a(filter: { ids: [1, 2], term: $t }) }")?;
    let field = doc.root().children().remove(0).children().remove(0);
    let argument = field.children().remove(0);
    let object_value = argument.children().remove(0);
    let object_fields = object_value.children();
    assert_eq!(kinds(&object_fields), vec![
        SyntaxNodeKind::ObjectField,
        SyntaxNodeKind::ObjectField,
    ]);

    let list_value = object_fields[0].children().remove(0);
    assert_eq!(kinds(&list_value.children()), vec![
        SyntaxNodeKind::Value,
        SyntaxNodeKind::Value,
    ]);
    Ok(())
}

#[test]
fn type_system_definitions_are_non_executable_leaves() -> Result<(), SyntaxError> {
    let doc = SourceDocument::parse("type Foo { a: Int }\nquery { a }")?;
    let definitions = doc.root().children();
    assert_eq!(kinds(&definitions), vec![
        SyntaxNodeKind::NonExecutableDefinition,
        SyntaxNodeKind::OperationDefinition,
    ]);
    assert!(definitions[0].children().is_empty());
    Ok(())
}

#[test]
fn locations_point_at_first_significant_character() -> Result<(), SyntaxError> {
    let doc = SourceDocument::parse("query {\n  a,\n  # comment\n  b\n}")?;
    let operation = doc.root().children().remove(0);
    let fields = operation.children();

    assert_eq!(doc.location_of(&operation), SourceLocation::new(1, 1, 0));
    assert_eq!(doc.location_of(&fields[0]), SourceLocation::new(2, 3, 10));
    assert_eq!(doc.location_of(&fields[1]).line, 4);
    assert_eq!(doc.location_of(&fields[1]).column, 3);
    Ok(())
}
