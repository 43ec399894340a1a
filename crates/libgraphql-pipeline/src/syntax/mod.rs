//! Adapter over the lossless `apollo-parser` syntax tree.
//!
//! The construction pipeline only needs three things from a syntax node: its
//! kind, its children and where it sits in the source text. [`SyntaxNode`]
//! provides exactly that over the executable subset of the GraphQL grammar.

mod source_document;
mod syntax_node;

pub use source_document::SourceDocument;
pub use source_document::SyntaxError;
pub use syntax_node::SyntaxNode;
pub use syntax_node::SyntaxNodeKind;
pub(crate) use syntax_node::name_text;

#[cfg(test)]
mod tests;
