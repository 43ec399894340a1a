//! Rule-driven construction and validation of GraphQL query documents.
//!
//! The crate is organized around three pieces:
//!
//! * the [`document`] part tree: an arena-backed, strongly-typed
//!   representation of a parsed executable document,
//! * the generic [`rules`] engine: stateless [`RuleStep`](rules::RuleStep)s
//!   grouped into immutable [`RulePackage`](rules::RulePackage)s and applied
//!   depth-first by a [`RuleProcessor`](rules::RuleProcessor). The engine
//!   powers both the [`construction`] pipeline (syntax tree -> part tree)
//!   and the [`validation`] pipeline (part tree -> messages), and
//! * the [`execution`] status engine which tracks every resolved field and
//!   list item and propagates nulls according to GraphQL's non-null
//!   semantics.
//!
//! Most callers only need [`QueryDocumentBuilder`], which parses, constructs
//! and validates a document in one step.

mod config;
pub mod construction;
pub mod document;
pub mod execution;
pub mod file_reader;
pub mod loc;
pub mod messages;
mod query_document_builder;
pub mod rules;
pub mod schema;
pub mod syntax;
#[cfg(test)]
mod test_utils;
pub mod validation;

pub use config::PipelineConfig;
pub use query_document_builder::QueryDocumentBuildError;
pub use query_document_builder::QueryDocumentBuilder;
pub use query_document_builder::ValidatedDocument;
