use crate::construction::ConstructionPipeline;
use crate::messages::Message;
use crate::messages::anchors;
use crate::rules::RuleContext;
use crate::rules::RuleStep;
use crate::syntax::SyntaxNodeKind;

/// Reports every type-system definition or extension in the document. No
/// rules are registered for such definitions so they never become parts.
pub(crate) struct ExecutableDefinitionsOnly;
impl RuleStep<ConstructionPipeline> for ExecutableDefinitionsOnly {
    fn name(&self) -> &'static str {
        "ExecutableDefinitionsOnly"
    }

    fn execute(&self, ctx: &mut RuleContext<'_, ConstructionPipeline>) -> bool {
        let source = ctx.state().source();
        let non_executable: Vec<_> =
            ctx.active()
                .children()
                .into_iter()
                .filter(|child| child.kind() == SyntaxNodeKind::NonExecutableDefinition)
                .collect();

        for definition in &non_executable {
            ctx.add_message(
                Message::invalid_document(
                    "Type system definitions and extensions are not allowed in \
                    executable documents",
                )
                .at(source.location_of(definition))
                .with_rule(anchors::EXECUTABLE_DEFINITIONS),
            );
        }
        non_executable.is_empty()
    }
}
