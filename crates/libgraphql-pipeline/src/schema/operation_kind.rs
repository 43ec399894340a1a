use apollo_parser::cst;

/// The three kinds of GraphQL operation.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub enum OperationKind {
    Mutation,
    Query,
    Subscription,
}
impl OperationKind {
    /// The keyword used for this kind of operation in GraphQL documents.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Mutation => "mutation",
            Self::Query => "query",
            Self::Subscription => "subscription",
        }
    }

    pub(crate) fn from_cst(op_def: &cst::OperationDefinition) -> Self {
        match op_def.operation_type() {
            Some(op_type) if op_type.mutation_token().is_some() =>
                Self::Mutation,
            Some(op_type) if op_type.subscription_token().is_some() =>
                Self::Subscription,
            // The `{ ... }` shorthand is always a query.
            _ => Self::Query,
        }
    }
}
impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}
