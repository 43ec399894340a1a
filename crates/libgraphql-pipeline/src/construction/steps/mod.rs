mod directive_steps;
mod executable_definitions_only;
mod field_node_to_part;
mod fragment_steps;
mod input_value_steps;
mod operation_node_to_part;
mod variable_definition_to_part;

pub(super) use directive_steps::DirectiveNodeToPart;
pub(super) use directive_steps::InjectDefaultDirectiveArguments;
pub(super) use executable_definitions_only::ExecutableDefinitionsOnly;
pub(super) use field_node_to_part::FieldNodeToPart;
pub(super) use fragment_steps::FragmentDefinitionToPart;
pub(super) use fragment_steps::FragmentSpreadToPart;
pub(super) use fragment_steps::InlineFragmentToPart;
pub(super) use input_value_steps::ArgumentNodeToPart;
pub(super) use input_value_steps::ObjectFieldNodeToPart;
pub(super) use input_value_steps::ValueNodeToPart;
pub(super) use operation_node_to_part::OperationNodeToPart;
pub(super) use variable_definition_to_part::VariableDefinitionToPart;
