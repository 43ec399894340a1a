use apollo_parser::cst;

/// The type written for a field, argument, input field or variable, e.g.
/// `[String!]!`.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub enum TypeAnnotation {
    List {
        inner: Box<TypeAnnotation>,
        nullable: bool,
    },
    Named {
        name: String,
        nullable: bool,
    },
}
impl TypeAnnotation {
    pub fn named(name: impl Into<String>, nullable: bool) -> Self {
        Self::Named {
            name: name.into(),
            nullable,
        }
    }

    pub fn list(inner: TypeAnnotation, nullable: bool) -> Self {
        Self::List {
            inner: Box::new(inner),
            nullable,
        }
    }

    /// Indicates if this [`TypeAnnotation`] is [nullable or
    /// non-nullable](https://spec.graphql.org/October2021/#sec-Non-Null).
    pub fn nullable(&self) -> bool {
        match self {
            Self::List { nullable, .. } => *nullable,
            Self::Named { nullable, .. } => *nullable,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List { .. })
    }

    /// Recursively unwrap list wrappers and return the name of the named
    /// type at the core of this annotation.
    pub fn innermost_name(&self) -> &str {
        match self {
            Self::List { inner, .. } => inner.innermost_name(),
            Self::Named { name, .. } => name.as_str(),
        }
    }

    /// The annotation of a single item when this annotation is a list.
    pub fn item_type(&self) -> Option<&TypeAnnotation> {
        match self {
            Self::List { inner, .. } => Some(inner),
            Self::Named { .. } => None,
        }
    }

    /// A copy of this annotation with its outermost non-null wrapper
    /// removed.
    pub fn as_nullable(&self) -> Self {
        match self {
            Self::List { inner, .. } => Self::List {
                inner: inner.clone(),
                nullable: true,
            },
            Self::Named { name, .. } => Self::Named {
                name: name.clone(),
                nullable: true,
            },
        }
    }

    /// Whether a variable declared with this type may be passed somewhere
    /// expecting `location_type`.
    ///
    /// See [AreTypesCompatible()](https://spec.graphql.org/October2021/#AreTypesCompatible()).
    pub fn is_compatible_variable_for(&self, location_type: &TypeAnnotation) -> bool {
        if !location_type.nullable() {
            if self.nullable() {
                return false;
            }
            return self.as_nullable()
                .is_compatible_variable_for(&location_type.as_nullable());
        }

        if !self.nullable() {
            return self.as_nullable().is_compatible_variable_for(location_type);
        }

        match (self, location_type) {
            (Self::List { inner: var_inner, .. }, Self::List { inner: loc_inner, .. })
                => var_inner.is_compatible_variable_for(loc_inner),
            (Self::Named { name: var_name, .. }, Self::Named { name: loc_name, .. })
                => var_name == loc_name,
            _ => false,
        }
    }

    pub(crate) fn from_ast(
        ast_type: &graphql_parser::schema::Type<'static, String>,
    ) -> Self {
        Self::from_ast_impl(ast_type, /* nullable = */ true)
    }

    fn from_ast_impl(
        ast_type: &graphql_parser::schema::Type<'static, String>,
        nullable: bool,
    ) -> Self {
        use graphql_parser::schema::Type as AstType;
        match ast_type {
            AstType::ListType(inner) =>
                Self::list(Self::from_ast_impl(inner, true), nullable),
            AstType::NamedType(name) => Self::named(name.clone(), nullable),
            AstType::NonNullType(inner) => Self::from_ast_impl(inner, false),
        }
    }

    /// Convert a type written in an executable document. Returns `None` if
    /// the syntax tree is missing a piece of the type (which the parser will
    /// already have reported).
    pub(crate) fn from_cst(cst_type: &cst::Type) -> Option<Self> {
        match cst_type {
            cst::Type::NamedType(named) => Some(Self::named(
                named.name()?.text().to_string(),
                true,
            )),

            cst::Type::ListType(list) =>
                Some(Self::list(Self::from_cst(&list.ty()?)?, true)),

            cst::Type::NonNullType(non_null) => {
                if let Some(named) = non_null.named_type() {
                    Some(Self::named(named.name()?.text().to_string(), false))
                } else {
                    let list = non_null.list_type()?;
                    Some(Self::list(Self::from_cst(&list.ty()?)?, false))
                }
            },
        }
    }
}
impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List { inner, nullable } => write!(
                f,
                "[{inner}]{}",
                if *nullable { "" } else { "!" },
            ),

            Self::Named { name, nullable } => write!(
                f,
                "{name}{}",
                if *nullable { "" } else { "!" },
            ),
        }
    }
}
