use crate::schema::ConstValue;
use crate::schema::DirectiveLocation;
use crate::schema::GraphQLTypeKind;
use crate::schema::OperationKind;
use crate::schema::Schema;
use crate::schema::SchemaLoadError;
use crate::schema::TypeAnnotation;

type Result<T> = std::result::Result<T, SchemaLoadError>;

#[test]
fn builtin_scalars_and_directives_are_always_defined() -> Result<()> {
    let schema = Schema::from_sdl("type Query { a: Int }")?;

    for scalar_name in ["Boolean", "Float", "ID", "Int", "String"] {
        let scalar = schema.find_type(scalar_name).unwrap();
        assert_eq!(scalar.kind(), GraphQLTypeKind::Scalar);
        assert!(scalar.is_leaf());
        assert!(scalar.is_input_type());
    }

    let skip = schema.find_directive("skip").unwrap();
    assert!(skip.is_allowed_at(DirectiveLocation::Field));
    assert!(!skip.is_allowed_at(DirectiveLocation::Query));
    assert!(skip.argument("if").unwrap().is_required());

    let deprecated = schema.find_directive("deprecated").unwrap();
    assert_eq!(
        deprecated.argument("reason").unwrap().default_value(),
        Some(&ConstValue::String("No longer supported".to_string())),
    );
    assert!(!deprecated.is_repeatable());

    Ok(())
}

#[test]
fn root_types_default_to_conventional_names() -> Result<()> {
    let schema = Schema::from_sdl(concat!(
        "type Query { a: Int }\n",
        "type Subscription { b: Int }\n",
    ))?;

    assert_eq!(schema.root_type(OperationKind::Query), Some("Query"));
    assert_eq!(schema.root_type(OperationKind::Mutation), None);
    assert_eq!(
        schema.root_type(OperationKind::Subscription),
        Some("Subscription"),
    );

    Ok(())
}

#[test]
fn schema_definition_overrides_root_type_names() -> Result<()> {
    let schema = Schema::from_sdl(concat!(
        "schema { query: RootQuery mutation: RootMutation }\n",
        "type RootQuery { a: Int }\n",
        "type RootMutation { b: Int }\n",
    ))?;

    assert_eq!(schema.root_type(OperationKind::Query), Some("RootQuery"));
    assert_eq!(schema.root_type(OperationKind::Mutation), Some("RootMutation"));

    Ok(())
}

#[test]
fn missing_query_type_is_an_error() {
    assert_eq!(
        Schema::from_sdl("type Mutation { a: Int }"),
        Err(SchemaLoadError::NoQueryOperationTypeDefined),
    );
}

#[test]
fn undefined_root_type_is_an_error() {
    assert_eq!(
        Schema::from_sdl("schema { query: Nope }"),
        Err(SchemaLoadError::UndefinedRootOperationType {
            operation: "query",
            type_name: "Nope".to_string(),
        }),
    );
}

#[test]
fn duplicate_type_is_an_error() {
    assert_eq!(
        Schema::from_sdl("type Query { a: Int }\ntype Query { b: Int }"),
        Err(SchemaLoadError::DuplicateTypeDefinition("Query".to_string())),
    );
}

#[test]
fn unparseable_sdl_is_an_error() {
    assert!(matches!(
        Schema::from_sdl("type Query {"),
        Err(SchemaLoadError::ParseError(_)),
    ));
}

#[test]
fn fields_carry_types_and_arguments() -> Result<()> {
    let schema = Schema::from_sdl(concat!(
        "type Query {\n",
        "  user(id: ID!, first: Int = 10): User\n",
        "}\n",
        "type User { friends: [User!]! }\n",
    ))?;

    let user_field = schema.find_field("Query", "user").unwrap();
    assert_eq!(user_field.type_annotation(), &TypeAnnotation::named("User", true));
    assert!(user_field.argument("id").unwrap().is_required());

    let first_arg = user_field.argument("first").unwrap();
    assert!(!first_arg.is_required());
    assert_eq!(first_arg.default_value(), Some(&ConstValue::Int(10)));

    let friends_field = schema.find_field("User", "friends").unwrap();
    assert_eq!(friends_field.type_annotation().to_string(), "[User!]!");

    assert!(schema.find_field("User", "nope").is_none());
    assert!(schema.find_field("Nope", "friends").is_none());

    Ok(())
}

#[test]
fn composite_types_have_typename() -> Result<()> {
    let schema = Schema::from_sdl(concat!(
        "type Query { a: Int }\n",
        "interface Node { id: ID! }\n",
        "union Anything = Query\n",
    ))?;

    for type_name in ["Query", "Node", "Anything"] {
        let typename = schema.find_field(type_name, "__typename").unwrap();
        assert_eq!(
            typename.type_annotation(),
            &TypeAnnotation::named("String", false),
        );
    }
    assert!(schema.find_field("Int", "__typename").is_none());

    Ok(())
}

#[test]
fn possible_types_of_abstract_types() -> Result<()> {
    let schema = Schema::from_sdl(concat!(
        "type Query { a: Int }\n",
        "interface Pet { name: String }\n",
        "type Dog implements Pet { name: String }\n",
        "type Cat implements Pet { name: String }\n",
        "type Rock { weight: Int }\n",
        "union Thing = Rock | Dog\n",
    ))?;

    assert_eq!(schema.possible_types("Pet"), vec!["Cat", "Dog"]);
    assert_eq!(schema.possible_types("Thing"), vec!["Dog", "Rock"]);
    assert_eq!(schema.possible_types("Rock"), vec!["Rock"]);
    assert!(schema.possible_types("Int").is_empty());
    assert!(schema.possible_types("Nope").is_empty());

    Ok(())
}

#[test]
fn extensions_apply_regardless_of_order() -> Result<()> {
    let schema = Schema::from_sdl(concat!(
        "extend type Query { b: String }\n",
        "type Query { a: Int }\n",
        "enum Color { RED }\n",
        "extend enum Color { GREEN }\n",
    ))?;

    assert!(schema.find_field("Query", "a").is_some());
    assert!(schema.find_field("Query", "b").is_some());
    assert_eq!(
        schema.find_type("Color").unwrap().enum_values(),
        &["RED".to_string(), "GREEN".to_string()],
    );

    Ok(())
}

#[test]
fn extension_of_undefined_type_is_an_error() {
    assert_eq!(
        Schema::from_sdl("type Query { a: Int }\nextend type Nope { b: Int }"),
        Err(SchemaLoadError::ExtensionOfUndefinedType("Nope".to_string())),
    );
}

#[test]
fn custom_directives_and_input_objects() -> Result<()> {
    let schema = Schema::from_sdl(concat!(
        "type Query { a: Int }\n",
        "input Filter { term: String!, limit: Int = 5 }\n",
        "directive @tag(name: String!) repeatable on FIELD | QUERY\n",
    ))?;

    let tag = schema.find_directive("tag").unwrap();
    assert!(tag.is_repeatable());
    assert_eq!(
        tag.locations(),
        &[DirectiveLocation::Field, DirectiveLocation::Query],
    );

    let filter = schema.find_type("Filter").unwrap();
    assert_eq!(filter.kind(), GraphQLTypeKind::InputObject);
    assert!(!filter.is_composite());
    assert!(filter.input_field("term").unwrap().is_required());
    assert!(!filter.input_field("limit").unwrap().is_required());

    Ok(())
}
