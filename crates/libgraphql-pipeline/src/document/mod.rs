//! The document part tree.
//!
//! A [`QueryDocument`] owns every [`DocumentPart`] of one executable GraphQL
//! document in an arena. Parts refer to each other through [`PartId`]s:
//! each part has exactly one parent (only the root has none) and an ordered
//! [`DocumentPartCollection`] of children. Name lookups (fragments by
//! spread name) are non-owning indexes into the same arena.

mod document_part;
mod document_part_collection;
mod part_data;
mod query_document;
mod schema_lookups;

pub use document_part::DocumentPart;
pub use document_part::PartId;
pub use document_part_collection::DocumentPartCollection;
pub use part_data::DocumentPartKind;
pub use part_data::PartData;
pub use part_data::ScalarValueKind;
pub use query_document::QueryDocument;

#[cfg(test)]
mod tests;
