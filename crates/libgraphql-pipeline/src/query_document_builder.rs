use crate::PipelineConfig;
use crate::construction::DocumentConstructor;
use crate::document::QueryDocument;
use crate::file_reader;
use crate::messages::Message;
use crate::messages::MessageCollection;
use crate::messages::MessageSeverity;
use crate::messages::codes;
use crate::schema::Schema;
use crate::syntax::SourceDocument;
use crate::validation::DocumentValidator;
use crate::validation::ValidationResult;
use std::path::Path;
use thiserror::Error;

type Result<T> = std::result::Result<T, QueryDocumentBuildError>;

/// Parses, constructs and validates query documents against one schema.
#[derive(Clone, Debug)]
pub struct QueryDocumentBuilder<'schema> {
    config: PipelineConfig,
    schema: &'schema Schema,
}
impl<'schema> QueryDocumentBuilder<'schema> {
    pub fn new(schema: &'schema Schema) -> Self {
        Self {
            config: PipelineConfig::default(),
            schema,
        }
    }

    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Construct and validate an already-parsed document.
    pub fn from_ast(&self, source: &SourceDocument) -> ValidatedDocument {
        let document = DocumentConstructor::construct(self.schema, source);
        let validation = DocumentValidator::validate(self.schema, &document, &self.config);
        ValidatedDocument {
            document: Some(document),
            validation,
        }
    }

    pub fn from_file(&self, file_path: impl AsRef<Path>) -> Result<ValidatedDocument> {
        let file_path = file_path.as_ref();
        let content = file_reader::read_content(file_path)?;
        tracing::debug!(file = %file_path.display(), "loaded query document file");
        Ok(self.from_str(content))
    }

    /// Parse `content`, then construct and validate it.
    ///
    /// A syntax error is not an `Err`: it is reported as a single critical
    /// `SYNTAX_ERROR` message and no document is produced.
    pub fn from_str(&self, content: impl AsRef<str>) -> ValidatedDocument {
        match SourceDocument::parse(content) {
            Ok(source) => self.from_ast(&source),
            Err(err) => {
                tracing::debug!(%err, "query document failed to parse");
                let message = Message::new(
                    MessageSeverity::Critical,
                    codes::SYNTAX_ERROR,
                    err.message(),
                ).at(err.location().clone());
                ValidatedDocument {
                    document: None,
                    validation: ValidationResult {
                        is_valid: false,
                        messages: vec![message].into(),
                    },
                }
            },
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum QueryDocumentBuildError {
    #[error("Failure while trying to read a query document file from disk: {0}")]
    QueryDocumentFileReadError(#[from] file_reader::ReadContentError),
}

/// A query document along with the outcome of validating it.
#[derive(Clone, Debug)]
pub struct ValidatedDocument {
    document: Option<QueryDocument>,
    validation: ValidationResult,
}
impl ValidatedDocument {
    /// `None` when the source text could not be parsed.
    pub fn document(&self) -> Option<&QueryDocument> {
        self.document.as_ref()
    }

    pub fn is_valid(&self) -> bool {
        self.validation.is_valid
    }

    pub fn messages(&self) -> &MessageCollection {
        &self.validation.messages
    }

    pub fn validation_result(&self) -> &ValidationResult {
        &self.validation
    }

    pub fn into_parts(self) -> (Option<QueryDocument>, ValidationResult) {
        (self.document, self.validation)
    }
}
