use crate::schema::InputValueDefinition;
use indexmap::IndexMap;

/// Where a directive may be applied.
///
/// See [DirectiveLocations](https://spec.graphql.org/October2021/#DirectiveLocations).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub enum DirectiveLocation {
    // Executable locations
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    Mutation,
    Query,
    Subscription,
    VariableDefinition,

    // Type-system locations
    ArgumentDefinition,
    Enum,
    EnumValue,
    FieldDefinition,
    InputFieldDefinition,
    InputObject,
    Interface,
    Object,
    Scalar,
    Schema,
    Union,
}
impl DirectiveLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Field => "FIELD",
            Self::FragmentDefinition => "FRAGMENT_DEFINITION",
            Self::FragmentSpread => "FRAGMENT_SPREAD",
            Self::InlineFragment => "INLINE_FRAGMENT",
            Self::Mutation => "MUTATION",
            Self::Query => "QUERY",
            Self::Subscription => "SUBSCRIPTION",
            Self::VariableDefinition => "VARIABLE_DEFINITION",
            Self::ArgumentDefinition => "ARGUMENT_DEFINITION",
            Self::Enum => "ENUM",
            Self::EnumValue => "ENUM_VALUE",
            Self::FieldDefinition => "FIELD_DEFINITION",
            Self::InputFieldDefinition => "INPUT_FIELD_DEFINITION",
            Self::InputObject => "INPUT_OBJECT",
            Self::Interface => "INTERFACE",
            Self::Object => "OBJECT",
            Self::Scalar => "SCALAR",
            Self::Schema => "SCHEMA",
            Self::Union => "UNION",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "FIELD" => Self::Field,
            "FRAGMENT_DEFINITION" => Self::FragmentDefinition,
            "FRAGMENT_SPREAD" => Self::FragmentSpread,
            "INLINE_FRAGMENT" => Self::InlineFragment,
            "MUTATION" => Self::Mutation,
            "QUERY" => Self::Query,
            "SUBSCRIPTION" => Self::Subscription,
            "VARIABLE_DEFINITION" => Self::VariableDefinition,
            "ARGUMENT_DEFINITION" => Self::ArgumentDefinition,
            "ENUM" => Self::Enum,
            "ENUM_VALUE" => Self::EnumValue,
            "FIELD_DEFINITION" => Self::FieldDefinition,
            "INPUT_FIELD_DEFINITION" => Self::InputFieldDefinition,
            "INPUT_OBJECT" => Self::InputObject,
            "INTERFACE" => Self::Interface,
            "OBJECT" => Self::Object,
            "SCALAR" => Self::Scalar,
            "SCHEMA" => Self::Schema,
            "UNION" => Self::Union,
            _ => return None,
        })
    }
}
impl std::fmt::Display for DirectiveLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directive declared by a schema (or one of the built-in directives).
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveDefinition {
    pub(super) arguments: IndexMap<String, InputValueDefinition>,
    pub(super) locations: Vec<DirectiveLocation>,
    pub(super) name: String,
    pub(super) repeatable: bool,
}
impl DirectiveDefinition {
    pub fn argument(&self, name: &str) -> Option<&InputValueDefinition> {
        self.arguments.get(name)
    }

    pub fn arguments(&self) -> &IndexMap<String, InputValueDefinition> {
        &self.arguments
    }

    pub fn is_allowed_at(&self, location: DirectiveLocation) -> bool {
        self.locations.contains(&location)
    }

    pub fn is_repeatable(&self) -> bool {
        self.repeatable
    }

    pub fn locations(&self) -> &[DirectiveLocation] {
        self.locations.as_slice()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
