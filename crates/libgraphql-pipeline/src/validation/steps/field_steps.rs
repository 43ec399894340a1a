use crate::document::DocumentPartKind;
use crate::document::PartId;
use crate::document::QueryDocument;
use crate::messages::Message;
use crate::messages::MessageSeverity;
use crate::messages::anchors;
use crate::messages::codes;
use crate::rules::RuleContext;
use crate::rules::RuleStep;
use crate::schema::Field;
use crate::schema::GraphQLType;
use crate::schema::GraphQLTypeKind;
use crate::schema::Schema;
use crate::schema::TypeAnnotation;
use crate::validation::ValidationPipeline;
use crate::validation::selections::CollectedFields;
use crate::validation::validation_pipeline::active_part;
use crate::validation::validation_pipeline::located;
use crate::validation::validation_pipeline::report;
use crate::validation::values;
use indexmap::IndexMap;
use std::collections::HashSet;

fn field_definition<'a>(ctx: &RuleContext<'a, ValidationPipeline>) -> Option<&'a Field> {
    let state = ctx.state();
    let document: &'a QueryDocument = state.document;
    document.field_definition(state.schema, *ctx.active())
}

fn has_selections(document: &QueryDocument, id: PartId) -> bool {
    document.children(id).iter().any(|child_id| matches!(
        document.part(child_id).kind(),
        DocumentPartKind::FieldSelection
            | DocumentPartKind::FragmentSpread
            | DocumentPartKind::InlineFragment,
    ))
}

/// [5.3.1](https://spec.graphql.org/October2021/#sec-Field-Selections)
///
/// Nothing beneath a field the schema does not define is validated.
pub(crate) struct FieldSelectionsExist;
impl FieldSelectionsExist {
    /// `Some(owner)` when the owning type is known but has no such field.
    fn missing_from<'a>(ctx: &RuleContext<'a, ValidationPipeline>) -> Option<&'a str> {
        let document: &'a QueryDocument = ctx.state().document;
        let owner = document.owner_type(*ctx.active())?;
        match field_definition(ctx) {
            Some(_) => None,
            None => Some(owner),
        }
    }
}
impl RuleStep<ValidationPipeline> for FieldSelectionsExist {
    fn name(&self) -> &'static str {
        "FieldSelectionsExist"
    }

    fn execute(&self, ctx: &mut RuleContext<'_, ValidationPipeline>) -> bool {
        let Some(owner) = Self::missing_from(ctx) else {
            return true;
        };
        let field = active_part(ctx);
        report(
            ctx,
            field.id(),
            anchors::FIELD_SELECTIONS,
            format!(
                "Cannot query field \"{}\" on type \"{owner}\"",
                field.name().unwrap_or_default(),
            ),
        );
        false
    }

    fn should_allow_child_contexts_to_execute(
        &self,
        ctx: &RuleContext<'_, ValidationPipeline>,
    ) -> bool {
        Self::missing_from(ctx).is_none()
    }
}

/// [5.3.2](https://spec.graphql.org/October2021/#sec-Field-Selection-Merging)
///
/// Runs once per selection set owner (operation, field or named fragment)
/// over its collected fields, so fields brought in by inline fragments and
/// spreads are compared too. Fields sharing a response key must select the
/// same field with the same arguments unless their parents are distinct
/// object types. Their return types must agree, and their sub-selections
/// are merged and compared the same way. Each conflicting pair is reported
/// once, at the field written later.
pub(crate) struct FieldSelectionMerging;
impl RuleStep<ValidationPipeline> for FieldSelectionMerging {
    fn name(&self) -> &'static str {
        "FieldSelectionMerging"
    }

    fn should_execute(&self, ctx: &RuleContext<'_, ValidationPipeline>) -> bool {
        has_selections(ctx.state().document, *ctx.active())
    }

    fn execute(&self, ctx: &mut RuleContext<'_, ValidationPipeline>) -> bool {
        let id = *ctx.active();
        let document = ctx.state().document;
        let schema = ctx.state().schema;
        let conflicts =
            ctx.metadata_mut()
                .get_or_default::<FieldMerges>()
                .conflicts_within(document, schema, id);

        let valid = conflicts.is_empty();
        for (field_id, text) in conflicts {
            report(ctx, field_id, anchors::FIELD_SELECTION_MERGING, text);
        }
        valid
    }
}

/// Walk-wide bookkeeping for [`FieldSelectionMerging`].
#[derive(Debug, Default)]
struct FieldMerges {
    collected: CollectedFields,
    /// `(earlier, later, parents_exclusive)` triples already compared.
    compared: HashSet<(PartId, PartId, bool)>,
    reported: HashSet<(PartId, PartId)>,
}
impl FieldMerges {
    fn conflicts_within(
        &mut self,
        document: &QueryDocument,
        schema: &Schema,
        owner: PartId,
    ) -> Vec<(PartId, String)> {
        let mut by_key: IndexMap<&str, Vec<PartId>> = IndexMap::new();
        for field_id in self.collected.of(document, owner) {
            if let Some(key) = document.part(*field_id).data().response_key() {
                by_key.entry(key).or_default().push(*field_id);
            }
        }

        let mut conflicts = vec![];
        for fields in by_key.values() {
            for (index, later) in fields.iter().enumerate() {
                for earlier in &fields[..index] {
                    self.compare(document, schema, *earlier, *later, false, &mut conflicts);
                }
            }
        }
        conflicts
    }

    fn compare(
        &mut self,
        document: &QueryDocument,
        schema: &Schema,
        earlier: PartId,
        later: PartId,
        parents_exclusive: bool,
        conflicts: &mut Vec<(PartId, String)>,
    ) {
        if earlier == later || !self.compared.insert((earlier, later, parents_exclusive)) {
            return;
        }
        let earlier_part = document.part(earlier);
        let later_part = document.part(later);
        let earlier_name = earlier_part.name().unwrap_or_default();
        let later_name = later_part.name().unwrap_or_default();
        let response_key = later_part.data().response_key().unwrap_or(later_name);

        let exclusive = parents_exclusive || parents_are_distinct_objects(
            document.owner_type(earlier),
            document.owner_type(later),
            schema,
        );
        let mut conflict = None;
        if !exclusive && earlier_name != later_name {
            conflict = Some(format!(
                "Fields \"{response_key}\" conflict because \"{earlier_name}\" and \
                \"{later_name}\" are different fields. Use different aliases on the fields \
                to fetch both if this was intentional",
            ));
        } else if !exclusive
            && argument_signature(document, earlier) != argument_signature(document, later) {
            conflict = Some(format!(
                "Fields \"{response_key}\" conflict because they have differing \
                arguments. Use different aliases on the fields to fetch both if \
                this was intentional",
            ));
        } else if let (Some(earlier_def), Some(later_def)) = (
            document.field_definition(schema, earlier),
            document.field_definition(schema, later),
        ) {
            let earlier_type = earlier_def.type_annotation();
            let later_type = later_def.type_annotation();
            if types_conflict(schema, earlier_type, later_type) {
                conflict = Some(format!(
                    "Fields \"{response_key}\" conflict because they return conflicting \
                    types \"{earlier_type}\" and \"{later_type}\". Use different aliases \
                    on the fields to fetch both if this was intentional",
                ));
            }
        }

        if let Some(text) = conflict {
            if self.reported.insert((earlier, later)) {
                conflicts.push((later, text));
            }
            return;
        }

        let earlier_fields = self.collected.of(document, earlier).to_vec();
        let later_fields = self.collected.of(document, later).to_vec();
        for later_field in &later_fields {
            let key = document.part(*later_field).data().response_key();
            for earlier_field in &earlier_fields {
                if document.part(*earlier_field).data().response_key() == key {
                    self.compare(
                        document,
                        schema,
                        *earlier_field,
                        *later_field,
                        exclusive,
                        conflicts,
                    );
                }
            }
        }
    }
}

/// The field's written arguments, rendered and sorted by name.
fn argument_signature(document: &QueryDocument, id: PartId) -> Vec<String> {
    let mut arguments: Vec<String> =
        document.children_of_kind(id, DocumentPartKind::InputArgument)
            .iter()
            .map(|arg_id| values::render_entry(document, *arg_id))
            .collect();
    arguments.sort();
    arguments
}

/// Fields on two different object types can never both be selected for one
/// result object.
fn parents_are_distinct_objects(
    earlier: Option<&str>,
    later: Option<&str>,
    schema: &Schema,
) -> bool {
    let (Some(earlier), Some(later)) = (earlier, later) else {
        return false;
    };
    let is_object = |name: &str| schema.find_type(name)
        .is_some_and(|graphql_type| graphql_type.kind() == GraphQLTypeKind::Object);
    earlier != later && is_object(earlier) && is_object(later)
}

/// Two return types conflict when their list and non-null wrappers differ
/// or when they end in different named types and either one is a leaf.
fn types_conflict(schema: &Schema, earlier: &TypeAnnotation, later: &TypeAnnotation) -> bool {
    let is_leaf = |name: &str| schema.find_type(name).is_some_and(GraphQLType::is_leaf);
    match (earlier, later) {
        (
            TypeAnnotation::List { inner: earlier_inner, nullable: earlier_nullable },
            TypeAnnotation::List { inner: later_inner, nullable: later_nullable },
        ) => earlier_nullable != later_nullable
            || types_conflict(schema, earlier_inner, later_inner),
        (
            TypeAnnotation::Named { name: earlier_name, nullable: earlier_nullable },
            TypeAnnotation::Named { name: later_name, nullable: later_nullable },
        ) => earlier_nullable != later_nullable
            || (earlier_name != later_name && (is_leaf(earlier_name.as_str()) || is_leaf(later_name.as_str()))),
        _ => true,
    }
}

/// [5.3.3](https://spec.graphql.org/October2021/#sec-Leaf-Field-Selections)
///
/// Selections beneath a leaf field are not validated further.
pub(crate) struct LeafFieldSelections;
impl LeafFieldSelections {
    fn selects_into_leaf(ctx: &RuleContext<'_, ValidationPipeline>) -> bool {
        let state = ctx.state();
        let is_leaf =
            field_definition(ctx)
                .and_then(|field_def| {
                    state.schema.find_type(field_def.type_annotation().innermost_name())
                })
                .is_some_and(|graphql_type| graphql_type.is_leaf());
        is_leaf && has_selections(state.document, *ctx.active())
    }
}
impl RuleStep<ValidationPipeline> for LeafFieldSelections {
    fn name(&self) -> &'static str {
        "LeafFieldSelections"
    }

    fn execute(&self, ctx: &mut RuleContext<'_, ValidationPipeline>) -> bool {
        let Some(field_def) = field_definition(ctx) else {
            return true;
        };
        let state = *ctx.state();
        let field_type = field_def.type_annotation();
        let Some(graphql_type) = state.schema.find_type(field_type.innermost_name()) else {
            return true;
        };
        let id = *ctx.active();
        let name = field_def.name();

        let has_selections = has_selections(state.document, id);
        let text =
            if graphql_type.is_leaf() && has_selections {
                format!(
                    "Field \"{name}\" must not have a selection since type \
                    \"{field_type}\" has no subfields",
                )
            } else if graphql_type.is_composite() && !has_selections {
                format!(
                    "Field \"{name}\" of type \"{field_type}\" must have a selection \
                    of subfields",
                )
            } else {
                return true;
            };
        report(ctx, id, anchors::LEAF_FIELD_SELECTIONS, text);
        false
    }

    fn should_allow_child_contexts_to_execute(
        &self,
        ctx: &RuleContext<'_, ValidationPipeline>,
    ) -> bool {
        !Self::selects_into_leaf(ctx)
    }
}

/// Warns about selections of fields the schema marks `@deprecated`.
pub(crate) struct DeprecatedFieldUsage;
impl RuleStep<ValidationPipeline> for DeprecatedFieldUsage {
    fn name(&self) -> &'static str {
        "DeprecatedFieldUsage"
    }

    fn execute(&self, ctx: &mut RuleContext<'_, ValidationPipeline>) -> bool {
        let Some(field_def) = field_definition(ctx) else {
            return true;
        };
        let Some(reason) = field_def.deprecation_reason() else {
            return true;
        };
        let id = *ctx.active();
        let owner = ctx.state().document.owner_type(id).unwrap_or_default();

        let message = located(ctx, id, Message::new(
            MessageSeverity::Warning,
            codes::DEPRECATED_FIELD,
            format!("The field \"{owner}.{}\" is deprecated. {reason}", field_def.name()),
        ));
        ctx.add_message(message);
        true
    }
}
