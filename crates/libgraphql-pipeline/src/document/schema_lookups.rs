use crate::document::PartData;
use crate::document::PartId;
use crate::document::QueryDocument;
use crate::schema::DirectiveDefinition;
use crate::schema::Field;
use crate::schema::InputValueDefinition;
use crate::schema::Schema;
use indexmap::IndexMap;

impl QueryDocument {
    /// The schema type that owns the field selected by `id`: the type of
    /// the enclosing operation, field or fragment.
    pub fn owner_type(&self, id: PartId) -> Option<&str> {
        self.part(self.part(id).parent()?).graph_type()
    }

    /// The schema definition of the field selected by the `FieldSelection`
    /// part `id`.
    pub fn field_definition<'s>(&self, schema: &'s Schema, id: PartId) -> Option<&'s Field> {
        let PartData::FieldSelection { name, .. } = self.part(id).data() else {
            return None;
        };
        schema.find_field(self.owner_type(id)?, name)
    }

    /// The arguments declared for the field or directive `id`.
    pub fn argument_definitions<'s>(
        &self,
        schema: &'s Schema,
        id: PartId,
    ) -> Option<&'s IndexMap<String, InputValueDefinition>> {
        match self.part(id).data() {
            PartData::FieldSelection { .. } =>
                self.field_definition(schema, id).map(Field::arguments),
            PartData::Directive { name } =>
                schema.find_directive(name).map(DirectiveDefinition::arguments),
            _ => None,
        }
    }

    /// The declaration of the `InputArgument` or `InputObjectField` part
    /// `id`.
    pub fn input_value_definition<'s>(
        &self,
        schema: &'s Schema,
        id: PartId,
    ) -> Option<&'s InputValueDefinition> {
        let part = self.part(id);
        match part.data() {
            PartData::InputArgument { name, .. } =>
                self.argument_definitions(schema, part.parent()?)?.get(name),
            PartData::InputObjectField { name } => {
                let object_value = self.part(part.parent()?);
                let type_name = object_value.type_expression()?.innermost_name();
                schema.find_type(type_name)?.input_field(name)
            },
            _ => None,
        }
    }
}
