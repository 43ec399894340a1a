use crate::document::DocumentPartCollection;
use crate::document::DocumentPartKind;
use crate::document::PartData;
use crate::loc::SourceLocation;
use crate::schema::TypeAnnotation;
use std::sync::OnceLock;

/// Identifies a [`DocumentPart`] within its
/// [`QueryDocument`](crate::document::QueryDocument).
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct PartId(pub(crate) usize);
impl PartId {
    /// The id of the root part of every document.
    pub const ROOT: PartId = PartId(0);

    pub fn index(&self) -> usize {
        self.0
    }
}
impl std::fmt::Display for PartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One structural element of an executable document.
#[derive(Clone, Debug)]
pub struct DocumentPart {
    pub(super) children: DocumentPartCollection,
    pub(super) data: PartData,
    pub(super) graph_type: Option<String>,
    pub(super) id: Option<PartId>,
    pub(super) location: SourceLocation,
    pub(super) parent: Option<PartId>,
    pub(super) path: OnceLock<String>,
    pub(super) type_expression: Option<TypeAnnotation>,
}
impl DocumentPart {
    /// A new, not yet attached, part that belongs under `parent`. Attach it
    /// with [`QueryDocument::add_child()`](crate::document::QueryDocument::add_child).
    pub fn new(parent: PartId, data: PartData, location: SourceLocation) -> Self {
        Self {
            children: DocumentPartCollection::default(),
            data,
            graph_type: None,
            id: None,
            location,
            parent: Some(parent),
            path: OnceLock::new(),
            type_expression: None,
        }
    }

    pub(super) fn root() -> Self {
        Self {
            children: DocumentPartCollection::default(),
            data: PartData::Document,
            graph_type: None,
            id: Some(PartId::ROOT),
            location: SourceLocation::start_of_document(),
            parent: None,
            path: OnceLock::new(),
            type_expression: None,
        }
    }

    pub fn with_graph_type(mut self, graph_type: Option<String>) -> Self {
        self.graph_type = graph_type;
        self
    }

    pub fn with_type_expression(mut self, type_expression: Option<TypeAnnotation>) -> Self {
        self.type_expression = type_expression;
        self
    }

    pub fn children(&self) -> &DocumentPartCollection {
        &self.children
    }

    pub fn data(&self) -> &PartData {
        &self.data
    }

    /// The name of the schema type this part resolves to, if known.
    pub fn graph_type(&self) -> Option<&str> {
        self.graph_type.as_deref()
    }

    /// This part's id.
    ///
    /// Panics if the part has not been added to a document yet.
    pub fn id(&self) -> PartId {
        match self.id {
            Some(id) => id,
            None => panic!(
                "{:?} part has not been added to a document",
                self.kind(),
            ),
        }
    }

    pub fn kind(&self) -> DocumentPartKind {
        self.data.kind()
    }

    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    pub fn name(&self) -> Option<&str> {
        self.data.name()
    }

    pub fn parent(&self) -> Option<PartId> {
        self.parent
    }

    /// The type this part's value is expected to have (the return type of
    /// a field, the declared type of an argument or variable, etc).
    pub fn type_expression(&self) -> Option<&TypeAnnotation> {
        self.type_expression.as_ref()
    }
}
