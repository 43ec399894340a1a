//! A read-only view of a GraphQL type system.
//!
//! The pipelines only ever *look things up* in a schema: a type by name, a
//! field on a type, a directive by name. [`Schema::from_sdl()`] loads one
//! from schema definition language text; it records what the SDL declares
//! and does not validate the type system itself.

mod const_value;
mod directive_definition;
mod graphql_type;
mod operation_kind;
#[allow(clippy::module_inception)]
mod schema;
mod schema_loader;
mod type_annotation;

pub use const_value::ConstValue;
pub use directive_definition::DirectiveDefinition;
pub use directive_definition::DirectiveLocation;
pub use graphql_type::Field;
pub use graphql_type::GraphQLType;
pub use graphql_type::GraphQLTypeKind;
pub use graphql_type::InputValueDefinition;
pub use operation_kind::OperationKind;
pub use schema::Schema;
pub use schema_loader::SchemaLoadError;
pub use type_annotation::TypeAnnotation;

#[cfg(test)]
mod tests;
