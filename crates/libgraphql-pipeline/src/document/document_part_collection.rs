use crate::document::DocumentPartKind;
use crate::document::PartId;
use std::collections::HashMap;

/// The ordered children of one [`DocumentPart`](crate::document::DocumentPart),
/// additionally indexed by [`DocumentPartKind`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DocumentPartCollection {
    all: Vec<PartId>,
    by_kind: HashMap<DocumentPartKind, Vec<PartId>>,
}
impl DocumentPartCollection {
    pub(crate) fn push(&mut self, id: PartId, kind: DocumentPartKind) {
        self.all.push(id);
        self.by_kind.entry(kind).or_default().push(id);
    }

    pub fn as_slice(&self) -> &[PartId] {
        self.all.as_slice()
    }

    pub fn contains(&self, id: PartId) -> bool {
        self.all.contains(&id)
    }

    pub fn first_of_kind(&self, kind: DocumentPartKind) -> Option<PartId> {
        self.of_kind(kind).first().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = PartId> + '_ {
        self.all.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    /// The children of the given kind in insertion order. Empty when there
    /// are none.
    pub fn of_kind(&self, kind: DocumentPartKind) -> &[PartId] {
        self.by_kind
            .get(&kind)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The position of `id` among all children.
    pub fn position(&self, id: PartId) -> Option<usize> {
        self.all.iter().position(|child| *child == id)
    }
}
