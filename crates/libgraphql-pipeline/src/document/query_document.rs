use crate::document::DocumentPart;
use crate::document::DocumentPartCollection;
use crate::document::DocumentPartKind;
use crate::document::PartData;
use crate::document::PartId;
use crate::messages::MessageCollection;
use crate::schema::TypeAnnotation;
use indexmap::IndexMap;

/// The structured form of one executable GraphQL document.
///
/// Parts are appended during construction and never removed, so a
/// [`PartId`] stays valid for the lifetime of the document.
#[derive(Clone, Debug)]
pub struct QueryDocument {
    messages: MessageCollection,
    named_fragments: IndexMap<String, PartId>,
    parts: Vec<DocumentPart>,
}
impl QueryDocument {
    /// A document holding only its root part.
    pub fn new() -> Self {
        Self {
            messages: MessageCollection::new(),
            named_fragments: IndexMap::new(),
            parts: vec![DocumentPart::root()],
        }
    }

    /// Attach `part` as the last child of `parent` and return its id.
    ///
    /// Panics if `part` was created for a different parent or if `parent`
    /// does not exist; either indicates a bug in the caller.
    pub fn add_child(&mut self, parent: PartId, mut part: DocumentPart) -> PartId {
        assert_eq!(
            part.parent,
            Some(parent),
            "Attempted to add a {:?} part under {parent} but it belongs under {:?}",
            part.kind(),
            part.parent,
        );
        assert!(
            parent.0 < self.parts.len(),
            "Attempted to add a {:?} part under nonexistent parent {parent}",
            part.kind(),
        );

        let id = PartId(self.parts.len());
        let kind = part.kind();
        part.id = Some(id);

        if let PartData::NamedFragmentDefinition { name, .. } = &part.data {
            // Only the first definition of a name is indexed. Duplicates are
            // still part of the tree so they can be reported.
            self.named_fragments.entry(name.clone()).or_insert(id);
        }

        tracing::trace!(?kind, %id, %parent, "added document part");
        self.parts.push(part);
        self.parts[parent.0].children.push(id, kind);
        id
    }

    /// Every ancestor of `id`, nearest first. Does not include `id` itself.
    pub fn ancestors(&self, id: PartId) -> impl Iterator<Item = &DocumentPart> + '_ {
        std::iter::successors(
            self.part(id).parent.map(|parent_id| self.part(parent_id)),
            |part| part.parent.map(|parent_id| self.part(parent_id)),
        )
    }

    pub fn children(&self, id: PartId) -> &DocumentPartCollection {
        &self.part(id).children
    }

    pub fn children_of_kind(&self, id: PartId, kind: DocumentPartKind) -> &[PartId] {
        self.part(id).children.of_kind(kind)
    }

    /// Every descendant of `id` in depth-first pre-order. Does not include
    /// `id` itself.
    pub fn descendants(&self, id: PartId) -> Vec<PartId> {
        let mut descendants = vec![];
        let mut stack: Vec<PartId> = self.children(id).iter().rev().collect();
        while let Some(next) = stack.pop() {
            descendants.push(next);
            stack.extend(self.children(next).iter().rev());
        }
        descendants
    }

    /// The nearest ancestor of `id` with the given kind.
    pub fn enclosing(&self, id: PartId, kind: DocumentPartKind) -> Option<&DocumentPart> {
        self.ancestors(id).find(|part| part.kind() == kind)
    }

    /// Every `fragment Name on Type { ... }` definition, including ones
    /// whose name is already taken.
    pub fn fragment_definitions(&self) -> &[PartId] {
        self.children_of_kind(PartId::ROOT, DocumentPartKind::NamedFragmentDefinition)
    }

    /// Whether `ancestor` is `id` or one of its ancestors.
    pub fn is_ancestor_or_self(&self, ancestor: PartId, id: PartId) -> bool {
        ancestor == id || self.ancestors(id).any(|part| part.id() == ancestor)
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn messages(&self) -> &MessageCollection {
        &self.messages
    }

    pub(crate) fn messages_mut(&mut self) -> &mut MessageCollection {
        &mut self.messages
    }

    /// The first fragment definition with the given name.
    pub fn named_fragment(&self, name: &str) -> Option<&DocumentPart> {
        self.named_fragments.get(name).map(|id| self.part(*id))
    }

    pub fn named_fragments(&self) -> &IndexMap<String, PartId> {
        &self.named_fragments
    }

    pub fn operations(&self) -> &[PartId] {
        self.children_of_kind(PartId::ROOT, DocumentPartKind::Operation)
    }

    /// Panics if `id` does not belong to this document.
    pub fn part(&self, id: PartId) -> &DocumentPart {
        match self.parts.get(id.0) {
            Some(part) => part,
            None => panic!("No part with id {id} exists in this document"),
        }
    }

    pub fn parts(&self) -> impl Iterator<Item = &DocumentPart> + '_ {
        self.parts.iter()
    }

    /// A human-readable breadcrumb locating `id` within the document, e.g.
    /// `query:GetUser/user/friends[2]`.
    ///
    /// Computed from the parent's path on first access and memoized, so it
    /// never changes once observed.
    pub fn path(&self, id: PartId) -> &str {
        let part = self.part(id);
        part.path.get_or_init(|| self.compute_path(part))
    }

    fn compute_path(&self, part: &DocumentPart) -> String {
        let Some(parent_id) = part.parent else {
            return String::new();
        };
        let parent_path = self.path(parent_id);
        let parent = self.part(parent_id);

        let segment = match &part.data {
            PartData::Document => return String::new(),
            PartData::Operation { name, operation_kind } => match name {
                Some(name) => format!("{operation_kind}:{name}"),
                None => operation_kind.keyword().to_string(),
            },
            PartData::Variable { name, .. } => format!("${name}"),
            PartData::FieldSelection { alias, name } =>
                alias.as_deref().unwrap_or(name.as_str()).to_string(),
            PartData::FragmentSpread { fragment_name } =>
                format!("...{fragment_name}"),
            PartData::InlineFragment { type_condition } => match type_condition {
                Some(type_condition) => format!("...on {type_condition}"),
                None => "...".to_string(),
            },
            PartData::NamedFragmentDefinition { name, .. } =>
                format!("fragment:{name}"),
            PartData::Directive { name } => format!("@{name}"),
            PartData::InputArgument { name, .. }
                | PartData::InputObjectField { name } => name.clone(),
            PartData::VariableReference { .. }
                | PartData::ScalarValue { .. }
                | PartData::ListValue
                | PartData::ComplexValue => {
                if parent.kind() == DocumentPartKind::ListValue {
                    let idx = parent.children.position(part.id()).unwrap_or(0);
                    return format!("{parent_path}[{idx}]");
                }
                return parent_path.to_string();
            },
        };

        if parent_path.is_empty() {
            segment
        } else {
            format!("{parent_path}/{segment}")
        }
    }

    /// Record the schema type `id` resolves to.
    ///
    /// Panics if a different type was already recorded for the part.
    pub fn set_graph_type(&mut self, id: PartId, graph_type: impl Into<String>) {
        let graph_type = graph_type.into();
        let part = &mut self.parts[id.0];
        match &part.graph_type {
            Some(existing) if *existing != graph_type => panic!(
                "Attempted to change the graph type of {:?} part {id} from \
                `{existing}` to `{graph_type}`",
                part.kind(),
            ),
            Some(_) => (),
            None => part.graph_type = Some(graph_type),
        }
    }

    pub fn set_type_expression(&mut self, id: PartId, type_expression: TypeAnnotation) {
        self.parts[id.0].type_expression = Some(type_expression);
    }
}
impl std::default::Default for QueryDocument {
    fn default() -> Self {
        Self::new()
    }
}
