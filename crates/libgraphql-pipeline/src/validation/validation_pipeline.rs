use crate::PipelineConfig;
use crate::document::DocumentPart;
use crate::document::DocumentPartKind;
use crate::document::PartId;
use crate::document::QueryDocument;
use crate::messages::Message;
use crate::messages::RuleAnchor;
use crate::rules::Pipeline;
use crate::rules::RuleContext;
use crate::schema::Schema;

/// Walks the parts of a finished [`QueryDocument`].
pub struct ValidationPipeline;
impl Pipeline for ValidationPipeline {
    type Kind = DocumentPartKind;
    type Node = PartId;
    type State<'a> = ValidationState<'a>;

    fn node_kind(state: &ValidationState<'_>, node: &PartId) -> DocumentPartKind {
        state.document.part(*node).kind()
    }

    fn child_nodes(state: &ValidationState<'_>, node: &PartId) -> Vec<PartId> {
        state.document.children(*node).iter().collect()
    }
}

/// Everything a validation walk reads. The walk never modifies any of it.
#[derive(Clone, Copy, Debug)]
pub struct ValidationState<'a> {
    pub config: &'a PipelineConfig,
    pub document: &'a QueryDocument,
    pub schema: &'a Schema,
}

/// The part the context is currently visiting.
pub(super) fn active_part<'a>(ctx: &RuleContext<'a, ValidationPipeline>) -> &'a DocumentPart {
    ctx.state().document.part(*ctx.active())
}

/// Add an [`INVALID_DOCUMENT`](crate::messages::codes::INVALID_DOCUMENT)
/// message located at part `id`.
pub(super) fn report(
    ctx: &mut RuleContext<'_, ValidationPipeline>,
    id: PartId,
    anchor: RuleAnchor,
    text: impl Into<String>,
) {
    let message = located(ctx, id, Message::invalid_document(text).with_rule(anchor));
    ctx.add_message(message);
}

/// Point `message` at the location and path of part `id`.
pub(super) fn located(
    ctx: &RuleContext<'_, ValidationPipeline>,
    id: PartId,
    message: Message,
) -> Message {
    let document = ctx.state().document;
    message
        .at(*document.part(id).location())
        .with_path(document.path(id))
}
