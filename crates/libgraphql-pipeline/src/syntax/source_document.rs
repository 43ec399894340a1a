use crate::loc::LineIndex;
use crate::loc::SourceLocation;
use crate::syntax::SyntaxNode;
use apollo_parser::cst;
use std::sync::Arc;

/// A syntax error reported by the parser, carrying the location of the first
/// offending token.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("Syntax error at {location}: {message}")]
pub struct SyntaxError {
    location: SourceLocation,
    message: String,
}
impl SyntaxError {
    pub fn new(message: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            location,
            message: message.into(),
        }
    }

    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

/// A successfully parsed GraphQL document along with the text it was parsed
/// from.
#[derive(Clone, Debug)]
pub struct SourceDocument {
    document: cst::Document,
    line_index: LineIndex,
    source: Arc<str>,
}
impl SourceDocument {
    /// Parse `content` into a [`SourceDocument`].
    ///
    /// Returns the first syntax error the parser reports. A document with no
    /// definitions at all is also rejected: GraphQL requires at least one.
    pub fn parse(content: impl AsRef<str>) -> Result<Self, SyntaxError> {
        let source: Arc<str> = Arc::from(content.as_ref());
        let line_index = LineIndex::new(source.clone());
        let tree = apollo_parser::Parser::new(&source).parse();

        if let Some(err) = tree.errors().next() {
            return Err(SyntaxError::new(
                err.message(),
                line_index.location(err.index()),
            ));
        }

        let document = tree.document();
        if document.definitions().next().is_none() {
            return Err(SyntaxError::new(
                "A GraphQL document must contain at least one definition",
                line_index.significant_location(0),
            ));
        }

        Ok(Self {
            document,
            line_index,
            source,
        })
    }

    pub fn line_index(&self) -> &LineIndex {
        &self.line_index
    }

    /// The [`SourceLocation`] of the first significant character of `node`.
    pub fn location_of(&self, node: &SyntaxNode) -> SourceLocation {
        let start: usize = node.syntax().text_range().start().into();
        self.line_index.significant_location(start)
    }

    pub fn root(&self) -> SyntaxNode {
        SyntaxNode::Document(self.document.clone())
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}
