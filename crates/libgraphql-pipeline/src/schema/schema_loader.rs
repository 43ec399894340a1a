use crate::schema::ConstValue;
use crate::schema::DirectiveDefinition;
use crate::schema::DirectiveLocation;
use crate::schema::Field;
use crate::schema::GraphQLType;
use crate::schema::GraphQLTypeKind;
use crate::schema::InputValueDefinition;
use crate::schema::Schema;
use crate::schema::TypeAnnotation;
use graphql_parser::schema as ast;
use indexmap::IndexMap;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, SchemaLoadError>;

const BUILTIN_SDL: &str = r#"
scalar Boolean
scalar Float
scalar ID
scalar Int
scalar String

directive @skip(if: Boolean!) on FIELD | FRAGMENT_SPREAD | INLINE_FRAGMENT
directive @include(if: Boolean!) on FIELD | FRAGMENT_SPREAD | INLINE_FRAGMENT
directive @deprecated(
  reason: String = "No longer supported"
) on FIELD_DEFINITION | ARGUMENT_DEFINITION | INPUT_FIELD_DEFINITION | ENUM_VALUE
directive @specifiedBy(url: String!) on SCALAR
"#;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SchemaLoadError {
    #[error("Directive `@{0}` is defined more than once")]
    DuplicateDirectiveDefinition(String),

    #[error("Type `{0}` is defined more than once")]
    DuplicateTypeDefinition(String),

    #[error("Cannot extend type `{0}` because it is not defined")]
    ExtensionOfUndefinedType(String),

    #[error("Cannot extend type `{type_name}` with a {extension_kind} extension")]
    InvalidExtensionKind {
        extension_kind: &'static str,
        type_name: String,
    },

    #[error("No `Query` root operation type is defined")]
    NoQueryOperationTypeDefined,

    #[error("Failed to parse schema: {0}")]
    ParseError(String),

    #[error("The {operation} root operation type `{type_name}` is not defined")]
    UndefinedRootOperationType {
        operation: &'static str,
        type_name: String,
    },
}

/// Accumulates type and directive definitions from one or more SDL strings.
pub(super) struct SchemaLoader {
    directives: HashMap<String, DirectiveDefinition>,
    mutation_type: Option<String>,
    query_type: Option<String>,
    subscription_type: Option<String>,
    types: HashMap<String, GraphQLType>,
}
impl SchemaLoader {
    pub fn new() -> Self {
        let mut loader = Self {
            directives: HashMap::new(),
            mutation_type: None,
            query_type: None,
            subscription_type: None,
            types: HashMap::new(),
        };
        if let Err(err) = loader.load_sdl(BUILTIN_SDL) {
            panic!("Failed to load built-in schema definitions: {err}");
        }
        loader
    }

    pub fn finish(self) -> Result<Schema> {
        let query_type = match self.query_type {
            Some(query_type) => query_type,
            None if self.types.contains_key("Query") => "Query".to_string(),
            None => return Err(SchemaLoadError::NoQueryOperationTypeDefined),
        };
        let mutation_type = self.mutation_type.or_else(|| {
            self.types.contains_key("Mutation").then(|| "Mutation".to_string())
        });
        let subscription_type = self.subscription_type.or_else(|| {
            self.types
                .contains_key("Subscription")
                .then(|| "Subscription".to_string())
        });

        for (operation, type_name) in [
            ("query", Some(&query_type)),
            ("mutation", mutation_type.as_ref()),
            ("subscription", subscription_type.as_ref()),
        ] {
            let Some(type_name) = type_name else {
                continue;
            };
            if !self.types.contains_key(type_name) {
                return Err(SchemaLoadError::UndefinedRootOperationType {
                    operation,
                    type_name: type_name.to_string(),
                });
            }
        }

        tracing::debug!(
            types = self.types.len(),
            directives = self.directives.len(),
            "loaded schema",
        );

        Ok(Schema {
            directives: self.directives,
            mutation_type,
            query_type,
            subscription_type,
            types: self.types,
        })
    }

    pub fn load_sdl(&mut self, sdl: &str) -> Result<()> {
        let ast_doc = graphql_parser::parse_schema::<String>(sdl)
            .map_err(|err| SchemaLoadError::ParseError(err.to_string()))?
            .into_static();

        // Extensions may precede the definitions they extend so they are
        // applied after every definition has been recorded.
        let mut extensions = vec![];
        for def in ast_doc.definitions {
            match def {
                ast::Definition::DirectiveDefinition(directive_def) =>
                    self.load_directive_definition(directive_def)?,
                ast::Definition::SchemaDefinition(schema_def) => {
                    self.query_type = schema_def.query.or(self.query_type.take());
                    self.mutation_type =
                        schema_def.mutation.or(self.mutation_type.take());
                    self.subscription_type =
                        schema_def.subscription.or(self.subscription_type.take());
                },
                ast::Definition::TypeDefinition(type_def) =>
                    self.load_type_definition(type_def)?,
                ast::Definition::TypeExtension(type_ext) =>
                    extensions.push(type_ext),
            }
        }

        for type_ext in extensions {
            self.load_type_extension(type_ext)?;
        }

        Ok(())
    }

    fn load_directive_definition(
        &mut self,
        directive_def: ast::DirectiveDefinition<'static, String>,
    ) -> Result<()> {
        if self.directives.contains_key(&directive_def.name) {
            return Err(SchemaLoadError::DuplicateDirectiveDefinition(
                directive_def.name,
            ));
        }

        let locations =
            directive_def.locations
                .iter()
                .filter_map(|loc| DirectiveLocation::from_name(loc.as_str()))
                .collect();

        self.directives.insert(directive_def.name.clone(), DirectiveDefinition {
            arguments: input_values(&directive_def.arguments),
            locations,
            name: directive_def.name,
            repeatable: directive_def.repeatable,
        });
        Ok(())
    }

    fn load_type_definition(
        &mut self,
        type_def: ast::TypeDefinition<'static, String>,
    ) -> Result<()> {
        let graphql_type = match type_def {
            ast::TypeDefinition::Enum(enum_def) => {
                let mut t = GraphQLType::new(enum_def.name, GraphQLTypeKind::Enum);
                t.enum_values =
                    enum_def.values.into_iter().map(|v| v.name).collect();
                t
            },

            ast::TypeDefinition::InputObject(input_def) => {
                let mut t = GraphQLType::new(
                    input_def.name,
                    GraphQLTypeKind::InputObject,
                );
                t.input_fields = input_values(&input_def.fields);
                t
            },

            ast::TypeDefinition::Interface(iface_def) => {
                let mut t = GraphQLType::new(
                    iface_def.name,
                    GraphQLTypeKind::Interface,
                );
                t.fields = with_typename(fields(&iface_def.fields));
                t
            },

            ast::TypeDefinition::Object(obj_def) => {
                let mut t = GraphQLType::new(obj_def.name, GraphQLTypeKind::Object);
                t.fields = with_typename(fields(&obj_def.fields));
                t.interfaces = obj_def.implements_interfaces;
                t
            },

            ast::TypeDefinition::Scalar(scalar_def) =>
                GraphQLType::new(scalar_def.name, GraphQLTypeKind::Scalar),

            ast::TypeDefinition::Union(union_def) => {
                let mut t = GraphQLType::new(union_def.name, GraphQLTypeKind::Union);
                t.fields = with_typename(IndexMap::new());
                t.union_members = union_def.types;
                t
            },
        };

        if self.types.contains_key(graphql_type.name()) {
            return Err(SchemaLoadError::DuplicateTypeDefinition(
                graphql_type.name().to_string(),
            ));
        }
        self.types.insert(graphql_type.name().to_string(), graphql_type);
        Ok(())
    }

    fn load_type_extension(
        &mut self,
        type_ext: ast::TypeExtension<'static, String>,
    ) -> Result<()> {
        let (type_name, extension_kind) = match &type_ext {
            ast::TypeExtension::Enum(ext) => (&ext.name, GraphQLTypeKind::Enum),
            ast::TypeExtension::InputObject(ext) =>
                (&ext.name, GraphQLTypeKind::InputObject),
            ast::TypeExtension::Interface(ext) =>
                (&ext.name, GraphQLTypeKind::Interface),
            ast::TypeExtension::Object(ext) => (&ext.name, GraphQLTypeKind::Object),
            ast::TypeExtension::Scalar(ext) => (&ext.name, GraphQLTypeKind::Scalar),
            ast::TypeExtension::Union(ext) => (&ext.name, GraphQLTypeKind::Union),
        };

        let Some(graphql_type) = self.types.get_mut(type_name) else {
            return Err(SchemaLoadError::ExtensionOfUndefinedType(
                type_name.clone(),
            ));
        };
        if graphql_type.kind != extension_kind {
            return Err(SchemaLoadError::InvalidExtensionKind {
                extension_kind: match extension_kind {
                    GraphQLTypeKind::Enum => "enum",
                    GraphQLTypeKind::InputObject => "input object",
                    GraphQLTypeKind::Interface => "interface",
                    GraphQLTypeKind::Object => "object",
                    GraphQLTypeKind::Scalar => "scalar",
                    GraphQLTypeKind::Union => "union",
                },
                type_name: type_name.clone(),
            });
        }

        match type_ext {
            ast::TypeExtension::Enum(ext) => graphql_type.enum_values.extend(
                ext.values.into_iter().map(|v| v.name),
            ),
            ast::TypeExtension::InputObject(ext) =>
                graphql_type.input_fields.extend(input_values(&ext.fields)),
            ast::TypeExtension::Interface(ext) =>
                graphql_type.fields.extend(fields(&ext.fields)),
            ast::TypeExtension::Object(ext) => {
                graphql_type.fields.extend(fields(&ext.fields));
                graphql_type.interfaces.extend(ext.implements_interfaces);
            },
            ast::TypeExtension::Scalar(_) => (),
            ast::TypeExtension::Union(ext) =>
                graphql_type.union_members.extend(ext.types),
        }
        Ok(())
    }
}

fn fields(ast_fields: &[ast::Field<'static, String>]) -> IndexMap<String, Field> {
    ast_fields.iter().map(|ast_field| {
        (ast_field.name.clone(), Field {
            arguments: input_values(&ast_field.arguments),
            deprecation_reason: deprecation_reason(&ast_field.directives),
            name: ast_field.name.clone(),
            type_annotation: TypeAnnotation::from_ast(&ast_field.field_type),
        })
    }).collect()
}

/// The reason given by a `@deprecated` directive, defaulting to the
/// reason declared by the built-in directive when none is written.
fn deprecation_reason(directives: &[ast::Directive<'static, String>]) -> Option<String> {
    let deprecated = directives.iter().find(|directive| directive.name == "deprecated")?;
    let reason = deprecated.arguments.iter().find_map(|(name, value)| match value {
        ast::Value::String(reason) if name == "reason" => Some(reason.clone()),
        _ => None,
    });
    Some(reason.unwrap_or_else(|| "No longer supported".to_string()))
}

fn input_values(
    ast_values: &[ast::InputValue<'static, String>],
) -> IndexMap<String, InputValueDefinition> {
    ast_values.iter().map(|ast_value| {
        (ast_value.name.clone(), InputValueDefinition {
            default_value: ast_value.default_value.as_ref().map(ConstValue::from_ast),
            name: ast_value.name.clone(),
            type_annotation: TypeAnnotation::from_ast(&ast_value.value_type),
        })
    }).collect()
}

fn with_typename(mut fields: IndexMap<String, Field>) -> IndexMap<String, Field> {
    fields.insert("__typename".to_string(), Field::new(
        "__typename",
        TypeAnnotation::named("String", false),
    ));
    fields
}
