use crate::schema::OperationKind;

/// The kind of a [`DocumentPart`](crate::document::DocumentPart), without
/// its payload. Validation rule packages are keyed by this.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum DocumentPartKind {
    /// The root of every part tree.
    Document,
    Operation,
    Variable,
    FieldSelection,
    FragmentSpread,
    InlineFragment,
    NamedFragmentDefinition,
    Directive,
    InputArgument,
    /// One `name: value` entry of an input object value.
    InputObjectField,
    /// A `$name` used as a value.
    VariableReference,
    ScalarValue,
    ListValue,
    /// An input object value, `{ ... }`.
    ComplexValue,
}
impl DocumentPartKind {
    /// Whether parts of this kind represent an input value.
    pub fn is_value(&self) -> bool {
        matches!(
            self,
            Self::ComplexValue
                | Self::ListValue
                | Self::ScalarValue
                | Self::VariableReference,
        )
    }
}

/// Which literal form a [`PartData::ScalarValue`] was written in.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ScalarValueKind {
    Boolean,
    Enum,
    Float,
    Int,
    Null,
    String,
}

/// The kind-specific payload of a [`DocumentPart`](crate::document::DocumentPart).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PartData {
    Document,

    Operation {
        name: Option<String>,
        operation_kind: OperationKind,
    },

    Variable {
        has_default: bool,
        name: String,
    },

    FieldSelection {
        alias: Option<String>,
        name: String,
    },

    FragmentSpread {
        fragment_name: String,
    },

    InlineFragment {
        type_condition: Option<String>,
    },

    NamedFragmentDefinition {
        name: String,
        type_condition: String,
    },

    Directive {
        name: String,
    },

    InputArgument {
        /// `true` when the argument was not written in the document but was
        /// added from the declared default of a directive argument.
        injected: bool,
        name: String,
    },

    InputObjectField {
        name: String,
    },

    VariableReference {
        name: String,
    },

    ScalarValue {
        kind: ScalarValueKind,
        /// The value as written, except for strings which hold their
        /// decoded contents.
        text: String,
    },

    ListValue,

    ComplexValue,
}
impl PartData {
    pub fn kind(&self) -> DocumentPartKind {
        match self {
            Self::Document => DocumentPartKind::Document,
            Self::Operation { .. } => DocumentPartKind::Operation,
            Self::Variable { .. } => DocumentPartKind::Variable,
            Self::FieldSelection { .. } => DocumentPartKind::FieldSelection,
            Self::FragmentSpread { .. } => DocumentPartKind::FragmentSpread,
            Self::InlineFragment { .. } => DocumentPartKind::InlineFragment,
            Self::NamedFragmentDefinition { .. } =>
                DocumentPartKind::NamedFragmentDefinition,
            Self::Directive { .. } => DocumentPartKind::Directive,
            Self::InputArgument { .. } => DocumentPartKind::InputArgument,
            Self::InputObjectField { .. } => DocumentPartKind::InputObjectField,
            Self::VariableReference { .. } => DocumentPartKind::VariableReference,
            Self::ScalarValue { .. } => DocumentPartKind::ScalarValue,
            Self::ListValue => DocumentPartKind::ListValue,
            Self::ComplexValue => DocumentPartKind::ComplexValue,
        }
    }

    /// The name this part is known by, if it has one.
    ///
    /// For field selections this is the field name (not the alias), for
    /// spreads it is the name of the spread fragment.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Operation { name, .. } => name.as_deref(),
            Self::Variable { name, .. }
                | Self::FieldSelection { name, .. }
                | Self::NamedFragmentDefinition { name, .. }
                | Self::Directive { name }
                | Self::InputArgument { name, .. }
                | Self::InputObjectField { name }
                | Self::VariableReference { name } => Some(name.as_str()),
            Self::FragmentSpread { fragment_name } => Some(fragment_name.as_str()),
            Self::Document
                | Self::InlineFragment { .. }
                | Self::ScalarValue { .. }
                | Self::ListValue
                | Self::ComplexValue => None,
        }
    }

    /// The key a field selection's result is stored under: its alias if it
    /// has one, otherwise its name.
    pub fn response_key(&self) -> Option<&str> {
        match self {
            Self::FieldSelection { alias, name } =>
                Some(alias.as_deref().unwrap_or(name.as_str())),
            _ => None,
        }
    }
}
