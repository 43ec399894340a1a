use crate::document::DocumentPart;
use crate::document::PartData;
use crate::document::PartId;
use crate::document::QueryDocument;
use crate::rules::Pipeline;
use crate::rules::RuleContext;
use crate::schema::Schema;
use crate::schema::TypeAnnotation;
use crate::syntax::SourceDocument;
use crate::syntax::SyntaxNode;
use crate::syntax::SyntaxNodeKind;

/// Walks the syntax tree of a [`SourceDocument`], building a
/// [`QueryDocument`] along the way.
pub struct ConstructionPipeline;
impl Pipeline for ConstructionPipeline {
    type Kind = SyntaxNodeKind;
    type Node = SyntaxNode;
    type State<'a> = ConstructionState<'a>;

    fn node_kind(_state: &ConstructionState<'_>, node: &SyntaxNode) -> SyntaxNodeKind {
        node.kind()
    }

    fn child_nodes(_state: &ConstructionState<'_>, node: &SyntaxNode) -> Vec<SyntaxNode> {
        node.children()
    }

    fn enter_node(ctx: &mut RuleContext<'_, Self>) {
        ctx.state_mut().part_stack.push(None);
    }

    fn exit_node(ctx: &mut RuleContext<'_, Self>) {
        ctx.state_mut().part_stack.pop();
    }
}

/// The state of one construction walk.
///
/// Alongside the document being built, the state tracks which part (if
/// any) each syntax node on the active chain produced. New parts are
/// attached under the part produced by the nearest enclosing syntax node.
pub struct ConstructionState<'a> {
    document: QueryDocument,
    part_stack: Vec<Option<PartId>>,
    schema: &'a Schema,
    source: &'a SourceDocument,
}
impl<'a> ConstructionState<'a> {
    pub fn new(schema: &'a Schema, source: &'a SourceDocument) -> Self {
        Self {
            document: QueryDocument::new(),
            part_stack: vec![],
            schema,
            source,
        }
    }

    pub fn document(&self) -> &QueryDocument {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut QueryDocument {
        &mut self.document
    }

    pub fn into_document(self) -> QueryDocument {
        self.document
    }

    /// The part new parts for the active syntax node belong under.
    pub fn parent_part(&self) -> PartId {
        let enclosing = self.part_stack.len().saturating_sub(1);
        self.part_stack[..enclosing]
            .iter()
            .rev()
            .find_map(|part| *part)
            .unwrap_or(PartId::ROOT)
    }

    /// The part produced by the active syntax node, if any.
    pub fn active_part(&self) -> Option<PartId> {
        self.part_stack.last().copied().flatten()
    }

    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    pub fn source(&self) -> &'a SourceDocument {
        self.source
    }

    /// Create a part for the active syntax node `node`, attach it under
    /// [`parent_part()`](Self::parent_part) and record it as the part the
    /// active node produced.
    ///
    /// The part's graph type is set to the innermost named type of
    /// `type_expression` when the schema defines that type.
    pub(super) fn attach_part(
        &mut self,
        node: &SyntaxNode,
        data: PartData,
        type_expression: Option<TypeAnnotation>,
    ) -> PartId {
        let graph_type = type_expression.as_ref().and_then(|annot| {
            let name = annot.innermost_name();
            self.schema.find_type(name).map(|_| name.to_string())
        });
        self.attach_part_with_graph_type(node, data, graph_type, type_expression)
    }

    pub(super) fn attach_part_with_graph_type(
        &mut self,
        node: &SyntaxNode,
        data: PartData,
        graph_type: Option<String>,
        type_expression: Option<TypeAnnotation>,
    ) -> PartId {
        let parent = self.parent_part();
        let part =
            DocumentPart::new(parent, data, self.source.location_of(node))
                .with_graph_type(graph_type)
                .with_type_expression(type_expression);
        let id = self.document.add_child(parent, part);
        if let Some(slot) = self.part_stack.last_mut() {
            *slot = Some(id);
        }
        id
    }
}
