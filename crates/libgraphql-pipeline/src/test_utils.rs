use crate::PipelineConfig;
use crate::construction::DocumentConstructor;
use crate::document::DocumentPart;
use crate::document::DocumentPartKind;
use crate::document::PartId;
use crate::document::QueryDocument;
use crate::schema::Schema;
use crate::syntax::SourceDocument;
use crate::validation::DocumentValidator;
use crate::validation::ValidationResult;
use std::sync::LazyLock;

pub(crate) const TEST_SCHEMA_SDL: &str = r#"
schema {
  query: Query
  mutation: Mutation
  subscription: Subscription
}

type Query {
  dog: Dog
  node(id: ID!): Node
  pets: [Pet]
  search(term: String!, limit: Int = 10): [SearchResult]
  user(id: ID!): User
  users(ids: [ID!], filter: UserFilter): [User!]!
  version: String!
}

type Mutation {
  rename(id: ID!, name: String!): User
}

type Subscription {
  userAdded: User
  userRemoved: ID
}

interface Node {
  id: ID!
}

interface Pet {
  name: String!
}

type User implements Node {
  bestFriend: User!
  friends(first: Int): [User!]
  id: ID!
  name: String
  nickname: String @deprecated(reason: "Use `name`.")
  role: Role
}

type Dog implements Pet & Node {
  barks: Boolean
  id: ID!
  name: String!
}

type Cat implements Pet {
  meows: Boolean
  name: String!
}

union SearchResult = User | Dog

enum Role {
  ADMIN
  MEMBER
}

input UserFilter {
  minAge: Int!
  nameContains: String
  role: Role
}

directive @cached(ttl: Int = 60, scope: String) on FIELD | QUERY
directive @tag(name: String!) repeatable on FIELD
"#;

static TEST_SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    Schema::from_sdl(TEST_SCHEMA_SDL).expect("test schema loads")
});

pub(crate) fn test_schema() -> &'static Schema {
    &TEST_SCHEMA
}

/// Parse and construct `query` against the test schema.
pub(crate) fn construct(query: &str) -> QueryDocument {
    let source = SourceDocument::parse(query).expect("query parses");
    DocumentConstructor::construct(test_schema(), &source)
}

/// The first part of `kind` in document order whose name is `name`.
pub(crate) fn find_part<'a>(
    doc: &'a QueryDocument,
    kind: DocumentPartKind,
    name: &str,
) -> &'a DocumentPart {
    doc.descendants(PartId::ROOT)
        .into_iter()
        .map(|id| doc.part(id))
        .find(|part| part.kind() == kind && part.name() == Some(name))
        .unwrap_or_else(|| panic!("no {kind:?} part named `{name}`"))
}

/// Construct and validate `query` against the test schema with the default
/// configuration.
pub(crate) fn validate(query: &str) -> ValidationResult {
    validate_with(query, &PipelineConfig::default())
}

pub(crate) fn validate_with(query: &str, config: &PipelineConfig) -> ValidationResult {
    DocumentValidator::validate(test_schema(), &construct(query), config)
}

/// The rule numbers cited by `result`'s messages, in order.
pub(crate) fn rule_numbers(result: &ValidationResult) -> Vec<&'static str> {
    result.messages
        .iter()
        .filter_map(|msg| msg.rule_number())
        .collect()
}
