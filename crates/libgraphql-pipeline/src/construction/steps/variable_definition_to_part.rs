use crate::construction::ConstructionPipeline;
use crate::document::PartData;
use crate::rules::RuleContext;
use crate::rules::RuleStep;
use crate::schema::TypeAnnotation;
use crate::syntax::SyntaxNode;
use crate::syntax::name_text;

pub(crate) struct VariableDefinitionToPart;
impl RuleStep<ConstructionPipeline> for VariableDefinitionToPart {
    fn name(&self) -> &'static str {
        "VariableDefinitionToPart"
    }

    fn execute(&self, ctx: &mut RuleContext<'_, ConstructionPipeline>) -> bool {
        let node = ctx.active().clone();
        let SyntaxNode::VariableDefinition(var_def) = &node else {
            return true;
        };
        let name =
            var_def.variable()
                .and_then(|var| name_text(var.name()))
                .unwrap_or_default();
        let type_expression = var_def.ty().and_then(|ty| TypeAnnotation::from_cst(&ty));

        ctx.state_mut().attach_part(
            &node,
            PartData::Variable {
                has_default: var_def.default_value().is_some(),
                name,
            },
            type_expression,
        );
        true
    }
}
