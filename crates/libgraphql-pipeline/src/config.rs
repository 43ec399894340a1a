/// Settings that tune how a [`QueryDocumentBuilder`](crate::QueryDocumentBuilder)
/// validates documents.
///
/// Deserializable so that hosts can embed it in their own configuration
/// files; every field has a default.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PipelineConfig {
    /// The deepest chain of nested field selections (fragments expanded)
    /// that an operation may contain. `None` disables the check.
    pub max_query_depth: Option<usize>,

    /// When set, a document producing any
    /// [`Warning`](crate::messages::MessageSeverity::Warning) is invalid.
    pub treat_warnings_as_errors: bool,
}
impl PipelineConfig {
    pub fn with_max_query_depth(mut self, max_query_depth: Option<usize>) -> Self {
        self.max_query_depth = max_query_depth;
        self
    }

    pub fn with_treat_warnings_as_errors(mut self, treat_warnings_as_errors: bool) -> Self {
        self.treat_warnings_as_errors = treat_warnings_as_errors;
        self
    }
}
