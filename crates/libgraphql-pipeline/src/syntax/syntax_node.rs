use apollo_parser::cst;
use apollo_parser::cst::CstNode;

/// The kind of a [`SyntaxNode`], without the node itself. Rule packages for
/// the construction pipeline are keyed by this.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SyntaxNodeKind {
    Argument,
    Directive,
    Document,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    NonExecutableDefinition,
    ObjectField,
    OperationDefinition,
    Value,
    VariableDefinition,
}

/// One node of the executable subset of a parsed GraphQL document.
///
/// Each variant wraps the corresponding `apollo-parser` cst node. Cst nodes
/// are cheap, reference-counted handles so cloning a [`SyntaxNode`] does not
/// copy the underlying tree.
#[derive(Clone, Debug)]
pub enum SyntaxNode {
    Argument(cst::Argument),
    Directive(cst::Directive),
    Document(cst::Document),
    Field(cst::Field),
    FragmentDefinition(cst::FragmentDefinition),
    FragmentSpread(cst::FragmentSpread),
    InlineFragment(cst::InlineFragment),
    /// A type-system definition or extension. These are not allowed within
    /// executable documents and have no children.
    NonExecutableDefinition(cst::Definition),
    ObjectField(cst::ObjectField),
    OperationDefinition(cst::OperationDefinition),
    Value(cst::Value),
    VariableDefinition(cst::VariableDefinition),
}
impl SyntaxNode {
    pub fn kind(&self) -> SyntaxNodeKind {
        match self {
            Self::Argument(_) => SyntaxNodeKind::Argument,
            Self::Directive(_) => SyntaxNodeKind::Directive,
            Self::Document(_) => SyntaxNodeKind::Document,
            Self::Field(_) => SyntaxNodeKind::Field,
            Self::FragmentDefinition(_) => SyntaxNodeKind::FragmentDefinition,
            Self::FragmentSpread(_) => SyntaxNodeKind::FragmentSpread,
            Self::InlineFragment(_) => SyntaxNodeKind::InlineFragment,
            Self::NonExecutableDefinition(_) =>
                SyntaxNodeKind::NonExecutableDefinition,
            Self::ObjectField(_) => SyntaxNodeKind::ObjectField,
            Self::OperationDefinition(_) => SyntaxNodeKind::OperationDefinition,
            Self::Value(_) => SyntaxNodeKind::Value,
            Self::VariableDefinition(_) => SyntaxNodeKind::VariableDefinition,
        }
    }

    /// The child nodes of this node, in source order.
    ///
    /// Selection sets are flattened: the children of an operation, field or
    /// fragment are its variable definitions (operations only), then its
    /// arguments (fields only), then its directives, then its selections.
    pub fn children(&self) -> Vec<SyntaxNode> {
        let mut children = vec![];
        match self {
            Self::Argument(arg) => {
                children.extend(arg.value().map(Self::Value));
            },

            Self::Directive(directive) => {
                push_arguments(&mut children, directive.arguments());
            },

            Self::Document(doc) => {
                for def in doc.definitions() {
                    children.push(match def {
                        cst::Definition::OperationDefinition(op) =>
                            Self::OperationDefinition(op),
                        cst::Definition::FragmentDefinition(frag) =>
                            Self::FragmentDefinition(frag),
                        other => Self::NonExecutableDefinition(other),
                    });
                }
            },

            Self::Field(field) => {
                push_arguments(&mut children, field.arguments());
                push_directives(&mut children, field.directives());
                push_selections(&mut children, field.selection_set());
            },

            Self::FragmentDefinition(frag) => {
                push_directives(&mut children, frag.directives());
                push_selections(&mut children, frag.selection_set());
            },

            Self::FragmentSpread(spread) => {
                push_directives(&mut children, spread.directives());
            },

            Self::InlineFragment(inline) => {
                push_directives(&mut children, inline.directives());
                push_selections(&mut children, inline.selection_set());
            },

            Self::NonExecutableDefinition(_) => (),

            Self::ObjectField(field) => {
                children.extend(field.value().map(Self::Value));
            },

            Self::OperationDefinition(op) => {
                if let Some(var_defs) = op.variable_definitions() {
                    children.extend(
                        var_defs.variable_definitions()
                            .map(Self::VariableDefinition),
                    );
                }
                push_directives(&mut children, op.directives());
                push_selections(&mut children, op.selection_set());
            },

            Self::Value(value) => match value {
                cst::Value::ListValue(list) =>
                    children.extend(list.values().map(Self::Value)),
                cst::Value::ObjectValue(obj) =>
                    children.extend(obj.object_fields().map(Self::ObjectField)),
                cst::Value::Variable(_)
                    | cst::Value::StringValue(_)
                    | cst::Value::FloatValue(_)
                    | cst::Value::IntValue(_)
                    | cst::Value::BooleanValue(_)
                    | cst::Value::NullValue(_)
                    | cst::Value::EnumValue(_) => (),
            },

            Self::VariableDefinition(var_def) => {
                if let Some(default_value) = var_def.default_value() {
                    children.extend(default_value.value().map(Self::Value));
                }
                push_directives(&mut children, var_def.directives());
            },
        }
        children
    }

    pub(crate) fn syntax(&self) -> &apollo_parser::SyntaxNode {
        match self {
            Self::Argument(node) => node.syntax(),
            Self::Directive(node) => node.syntax(),
            Self::Document(node) => node.syntax(),
            Self::Field(node) => node.syntax(),
            Self::FragmentDefinition(node) => node.syntax(),
            Self::FragmentSpread(node) => node.syntax(),
            Self::InlineFragment(node) => node.syntax(),
            Self::NonExecutableDefinition(node) => node.syntax(),
            Self::ObjectField(node) => node.syntax(),
            Self::OperationDefinition(node) => node.syntax(),
            Self::Value(node) => node.syntax(),
            Self::VariableDefinition(node) => node.syntax(),
        }
    }
}

fn push_arguments(
    children: &mut Vec<SyntaxNode>,
    arguments: Option<cst::Arguments>,
) {
    if let Some(arguments) = arguments {
        children.extend(arguments.arguments().map(SyntaxNode::Argument));
    }
}

fn push_directives(
    children: &mut Vec<SyntaxNode>,
    directives: Option<cst::Directives>,
) {
    if let Some(directives) = directives {
        children.extend(directives.directives().map(SyntaxNode::Directive));
    }
}

fn push_selections(
    children: &mut Vec<SyntaxNode>,
    selection_set: Option<cst::SelectionSet>,
) {
    let Some(selection_set) = selection_set else {
        return;
    };
    for selection in selection_set.selections() {
        children.push(match selection {
            cst::Selection::Field(field) => SyntaxNode::Field(field),
            cst::Selection::FragmentSpread(spread) =>
                SyntaxNode::FragmentSpread(spread),
            cst::Selection::InlineFragment(inline) =>
                SyntaxNode::InlineFragment(inline),
        });
    }
}

/// Extract the text of an optional [`cst::Name`].
pub(crate) fn name_text(name: Option<cst::Name>) -> Option<String> {
    name.map(|name| name.text().to_string())
}
