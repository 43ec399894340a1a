use crate::construction::ConstructionPipeline;
use crate::document::PartData;
use crate::rules::RuleContext;
use crate::rules::RuleStep;
use crate::syntax::SyntaxNode;
use crate::syntax::name_text;
use apollo_parser::cst;

fn type_condition_name(type_condition: Option<cst::TypeCondition>) -> Option<String> {
    name_text(type_condition?.named_type()?.name())
}

/// Creates a `FragmentSpread` part. The spread fragment is resolved by
/// name through [`QueryDocument::named_fragment()`](crate::document::QueryDocument::named_fragment)
/// since its definition may appear later in the document.
pub(crate) struct FragmentSpreadToPart;
impl RuleStep<ConstructionPipeline> for FragmentSpreadToPart {
    fn name(&self) -> &'static str {
        "FragmentSpreadToPart"
    }

    fn execute(&self, ctx: &mut RuleContext<'_, ConstructionPipeline>) -> bool {
        let node = ctx.active().clone();
        let SyntaxNode::FragmentSpread(spread) = &node else {
            return true;
        };
        let fragment_name =
            spread.fragment_name()
                .and_then(|frag_name| name_text(frag_name.name()))
                .unwrap_or_default();

        ctx.state_mut().attach_part_with_graph_type(
            &node,
            PartData::FragmentSpread { fragment_name },
            None,
            None,
        );
        true
    }
}

/// Creates an `InlineFragment` part typed with its type condition, or with
/// the enclosing part's type when it has no condition.
pub(crate) struct InlineFragmentToPart;
impl RuleStep<ConstructionPipeline> for InlineFragmentToPart {
    fn name(&self) -> &'static str {
        "InlineFragmentToPart"
    }

    fn execute(&self, ctx: &mut RuleContext<'_, ConstructionPipeline>) -> bool {
        let node = ctx.active().clone();
        let SyntaxNode::InlineFragment(inline) = &node else {
            return true;
        };
        let type_condition = type_condition_name(inline.type_condition());

        let state = ctx.state_mut();
        let graph_type = match &type_condition {
            Some(type_name) =>
                state.schema().find_type(type_name).map(|_| type_name.clone()),
            None =>
                state.document()
                    .part(state.parent_part())
                    .graph_type()
                    .map(str::to_string),
        };

        state.attach_part_with_graph_type(
            &node,
            PartData::InlineFragment { type_condition },
            graph_type,
            None,
        );
        true
    }
}

/// Creates a `NamedFragmentDefinition` part, which also registers it in the
/// document's named-fragment index.
pub(crate) struct FragmentDefinitionToPart;
impl RuleStep<ConstructionPipeline> for FragmentDefinitionToPart {
    fn name(&self) -> &'static str {
        "FragmentDefinitionToPart"
    }

    fn execute(&self, ctx: &mut RuleContext<'_, ConstructionPipeline>) -> bool {
        let node = ctx.active().clone();
        let SyntaxNode::FragmentDefinition(frag_def) = &node else {
            return true;
        };
        let name =
            frag_def.fragment_name()
                .and_then(|frag_name| name_text(frag_name.name()))
                .unwrap_or_default();
        let type_condition =
            type_condition_name(frag_def.type_condition()).unwrap_or_default();

        let state = ctx.state_mut();
        let graph_type =
            state.schema()
                .find_type(&type_condition)
                .map(|_| type_condition.clone());

        state.attach_part_with_graph_type(
            &node,
            PartData::NamedFragmentDefinition {
                name,
                type_condition,
            },
            graph_type,
            None,
        );
        true
    }
}
