use crate::construction::ConstructionPipeline;
use crate::construction::ConstructionState;
use crate::construction::construction_rules;
use crate::document::QueryDocument;
use crate::rules::RuleContext;
use crate::rules::RuleProcessor;
use crate::schema::Schema;
use crate::syntax::SourceDocument;

/// Runs the construction pipeline.
pub struct DocumentConstructor;
impl DocumentConstructor {
    /// Build the part tree for `source`, resolving types against `schema`.
    ///
    /// Problems found while building (e.g. type system definitions in an
    /// executable document) are recorded in the returned document's
    /// [`messages()`](QueryDocument::messages).
    pub fn construct(schema: &Schema, source: &SourceDocument) -> QueryDocument {
        let state = ConstructionState::new(schema, source);
        let mut ctx = RuleContext::<ConstructionPipeline>::new(state, source.root());
        let succeeded = RuleProcessor::new(construction_rules()).execute(&mut ctx);

        let (state, messages) = ctx.into_parts();
        let mut document = state.into_document();
        tracing::debug!(
            parts = document.len(),
            messages = messages.len(),
            succeeded,
            "constructed query document",
        );
        document.messages_mut().append(messages);
        document
    }
}
