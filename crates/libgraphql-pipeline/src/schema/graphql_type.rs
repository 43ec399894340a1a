use crate::schema::ConstValue;
use crate::schema::TypeAnnotation;
use indexmap::IndexMap;

/// The six kinds of named type a GraphQL schema can define.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub enum GraphQLTypeKind {
    Enum,
    InputObject,
    Interface,
    Object,
    Scalar,
    Union,
}

/// A named type defined by a schema.
///
/// Only the parts of each type the document pipelines consult are kept:
/// fields of objects and interfaces, members of unions, values of enums and
/// fields of input objects.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphQLType {
    pub(super) enum_values: Vec<String>,
    pub(super) fields: IndexMap<String, Field>,
    pub(super) input_fields: IndexMap<String, InputValueDefinition>,
    pub(super) interfaces: Vec<String>,
    pub(super) kind: GraphQLTypeKind,
    pub(super) name: String,
    pub(super) union_members: Vec<String>,
}
impl GraphQLType {
    pub(super) fn new(name: impl Into<String>, kind: GraphQLTypeKind) -> Self {
        Self {
            enum_values: vec![],
            fields: IndexMap::new(),
            input_fields: IndexMap::new(),
            interfaces: vec![],
            kind,
            name: name.into(),
            union_members: vec![],
        }
    }

    pub fn enum_values(&self) -> &[String] {
        self.enum_values.as_slice()
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.fields
    }

    pub fn input_field(&self, name: &str) -> Option<&InputValueDefinition> {
        self.input_fields.get(name)
    }

    pub fn input_fields(&self) -> &IndexMap<String, InputValueDefinition> {
        &self.input_fields
    }

    pub fn interfaces(&self) -> &[String] {
        self.interfaces.as_slice()
    }

    /// Object, interface and union types may have selection sets.
    pub fn is_composite(&self) -> bool {
        matches!(
            self.kind,
            GraphQLTypeKind::Interface
                | GraphQLTypeKind::Object
                | GraphQLTypeKind::Union,
        )
    }

    /// Scalars, enums and input objects may be used as the types of
    /// variables and arguments.
    pub fn is_input_type(&self) -> bool {
        matches!(
            self.kind,
            GraphQLTypeKind::Enum
                | GraphQLTypeKind::InputObject
                | GraphQLTypeKind::Scalar,
        )
    }

    /// Scalars and enums terminate a selection.
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, GraphQLTypeKind::Enum | GraphQLTypeKind::Scalar)
    }

    pub fn kind(&self) -> GraphQLTypeKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn union_members(&self) -> &[String] {
        self.union_members.as_slice()
    }
}

/// A field defined on an object or interface type.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub(super) arguments: IndexMap<String, InputValueDefinition>,
    pub(super) deprecation_reason: Option<String>,
    pub(super) name: String,
    pub(super) type_annotation: TypeAnnotation,
}
impl Field {
    pub fn new(name: impl Into<String>, type_annotation: TypeAnnotation) -> Self {
        Self {
            arguments: IndexMap::new(),
            deprecation_reason: None,
            name: name.into(),
            type_annotation,
        }
    }

    pub fn argument(&self, name: &str) -> Option<&InputValueDefinition> {
        self.arguments.get(name)
    }

    pub fn arguments(&self) -> &IndexMap<String, InputValueDefinition> {
        &self.arguments
    }

    /// The reason given by a `@deprecated` directive on this field, if the
    /// field is deprecated.
    pub fn deprecation_reason(&self) -> Option<&str> {
        self.deprecation_reason.as_deref()
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecation_reason.is_some()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}

/// A field argument, directive argument or input object field.
#[derive(Clone, Debug, PartialEq)]
pub struct InputValueDefinition {
    pub(super) default_value: Option<ConstValue>,
    pub(super) name: String,
    pub(super) type_annotation: TypeAnnotation,
}
impl InputValueDefinition {
    pub fn default_value(&self) -> Option<&ConstValue> {
        self.default_value.as_ref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// A value must be provided when the type is non-null and there is no
    /// default to fall back on.
    pub fn is_required(&self) -> bool {
        !self.type_annotation.nullable() && self.default_value.is_none()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
