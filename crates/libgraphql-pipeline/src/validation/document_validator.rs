use crate::PipelineConfig;
use crate::document::PartId;
use crate::document::QueryDocument;
use crate::messages::MessageCollection;
use crate::messages::MessageSeverity;
use crate::rules::RuleContext;
use crate::rules::RuleProcessor;
use crate::schema::Schema;
use crate::validation::ValidationPipeline;
use crate::validation::ValidationState;
use crate::validation::validation_rules;

/// The outcome of validating a [`QueryDocument`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,

    /// Messages recorded while the document was constructed, followed by
    /// the messages of the validation walk.
    pub messages: MessageCollection,
}

/// Runs the validation pipeline.
pub struct DocumentValidator;
impl DocumentValidator {
    /// Validate `document` against `schema`.
    ///
    /// The document itself is never modified. Its construction messages are
    /// carried into the result, so a document that could not be fully
    /// constructed is never reported as valid.
    pub fn validate(
        schema: &Schema,
        document: &QueryDocument,
        config: &PipelineConfig,
    ) -> ValidationResult {
        let state = ValidationState {
            config,
            document,
            schema,
        };
        let mut ctx = RuleContext::<ValidationPipeline>::new(state, PartId::ROOT);
        RuleProcessor::new(validation_rules()).execute(&mut ctx);
        let (_, walk_messages) = ctx.into_parts();

        let mut messages = document.messages().clone();
        messages.append(walk_messages);

        let lowest_invalid_severity =
            if config.treat_warnings_as_errors {
                MessageSeverity::Warning
            } else {
                MessageSeverity::Error
            };
        let is_valid = messages.severity().is_none_or(|severity| severity < lowest_invalid_severity);

        tracing::debug!(
            parts = document.len(),
            messages = messages.len(),
            is_valid,
            "validated query document",
        );
        ValidationResult {
            is_valid,
            messages,
        }
    }
}
