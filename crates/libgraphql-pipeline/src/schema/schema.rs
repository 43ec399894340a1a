use crate::schema::DirectiveDefinition;
use crate::schema::Field;
use crate::schema::GraphQLType;
use crate::schema::GraphQLTypeKind;
use crate::schema::OperationKind;
use crate::schema::SchemaLoadError;
use crate::schema::schema_loader::SchemaLoader;
use std::collections::HashMap;

/// An immutable, fully-loaded GraphQL type system.
///
/// A [`Schema`] is `Send + Sync` and is only ever read once loaded, so a
/// single instance can be shared (typically behind an `Arc`) by any number
/// of concurrently processed documents.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(super) directives: HashMap<String, DirectiveDefinition>,
    pub(super) mutation_type: Option<String>,
    pub(super) query_type: String,
    pub(super) subscription_type: Option<String>,
    pub(super) types: HashMap<String, GraphQLType>,
}
impl Schema {
    /// Load a [`Schema`] from schema definition language text.
    ///
    /// The built-in scalars (`Int`, `Float`, `String`, `Boolean`, `ID`) and
    /// directives (`@skip`, `@include`, `@deprecated`, `@specifiedBy`) are
    /// always defined.
    pub fn from_sdl(sdl: impl AsRef<str>) -> Result<Self, SchemaLoadError> {
        let mut loader = SchemaLoader::new();
        loader.load_sdl(sdl.as_ref())?;
        loader.finish()
    }

    pub fn directives(&self) -> impl Iterator<Item = &DirectiveDefinition> {
        self.directives.values()
    }

    pub fn find_directive(&self, name: &str) -> Option<&DirectiveDefinition> {
        self.directives.get(name)
    }

    /// Look up the field named `field_name` on the type named `type_name`.
    ///
    /// Every composite type (including unions) has the implicit
    /// `__typename` field.
    pub fn find_field(&self, type_name: &str, field_name: &str) -> Option<&Field> {
        self.find_type(type_name)?.field(field_name)
    }

    pub fn find_type(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }

    /// The names of every object type that could be the runtime type of a
    /// value of the composite type named `type_name`, sorted by name.
    pub fn possible_types(&self, type_name: &str) -> Vec<&str> {
        let Some(graphql_type) = self.find_type(type_name) else {
            return vec![];
        };

        let mut possible_types = match graphql_type.kind() {
            GraphQLTypeKind::Object => vec![graphql_type.name()],
            GraphQLTypeKind::Interface =>
                self.types
                    .values()
                    .filter(|t| t.kind() == GraphQLTypeKind::Object)
                    .filter(|t| t.interfaces().iter().any(|i| i == type_name))
                    .map(GraphQLType::name)
                    .collect(),
            GraphQLTypeKind::Union =>
                graphql_type.union_members()
                    .iter()
                    .map(String::as_str)
                    .collect(),
            GraphQLTypeKind::Enum
                | GraphQLTypeKind::InputObject
                | GraphQLTypeKind::Scalar => vec![],
        };
        possible_types.sort_unstable();
        possible_types.dedup();
        possible_types
    }

    /// The name of the root operation type for the given kind of operation,
    /// if the schema supports that kind of operation at all.
    pub fn root_type(&self, kind: OperationKind) -> Option<&str> {
        match kind {
            OperationKind::Mutation => self.mutation_type.as_deref(),
            OperationKind::Query => Some(self.query_type.as_str()),
            OperationKind::Subscription => self.subscription_type.as_deref(),
        }
    }
}
