use indexmap::IndexMap;

/// A constant GraphQL input value as written in a schema (e.g. an argument's
/// default value).
#[derive(Clone, Debug, PartialEq)]
pub enum ConstValue {
    Boolean(bool),
    Enum(String),
    Float(f64),
    Int(i64),
    List(Vec<ConstValue>),
    Null,
    Object(IndexMap<String, ConstValue>),
    String(String),
}
impl ConstValue {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub(crate) fn from_ast(
        ast_value: &graphql_parser::schema::Value<'static, String>,
    ) -> Self {
        use graphql_parser::schema::Value as AstValue;
        match ast_value {
            AstValue::Boolean(value) => Self::Boolean(*value),
            AstValue::Enum(value) => Self::Enum(value.clone()),
            AstValue::Float(value) => Self::Float(*value),
            AstValue::Int(value) => Self::Int(value.as_i64().unwrap_or_default()),
            AstValue::List(values) =>
                Self::List(values.iter().map(Self::from_ast).collect()),
            AstValue::Null => Self::Null,
            AstValue::Object(entries) => Self::Object(
                entries.iter()
                    .map(|(key, value)| (key.clone(), Self::from_ast(value)))
                    .collect()
            ),
            AstValue::String(value) => Self::String(value.clone()),
            // Variables cannot appear in schema definitions; graphql-parser
            // accepts them syntactically so we degrade them to null.
            AstValue::Variable(_) => Self::Null,
        }
    }
}
impl std::fmt::Display for ConstValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Enum(value) => f.write_str(value),
            Self::Float(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::List(values) => {
                f.write_str("[")?;
                for (idx, value) in values.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                }
                f.write_str("]")
            },
            Self::Null => f.write_str("null"),
            Self::Object(entries) => {
                f.write_str("{")?;
                for (idx, (key, value)) in entries.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            },
            Self::String(value) => write!(f, "{value:?}"),
        }
    }
}
