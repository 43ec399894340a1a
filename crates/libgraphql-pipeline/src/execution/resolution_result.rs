use crate::messages::MessageCollection;

/// The response data assembled by
/// [`FieldResolutionItem::finalize()`](crate::execution::FieldResolutionItem::finalize),
/// along with every execution error recorded along the way.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ResolutionResult {
    pub data: serde_json::Value,

    #[serde(skip_serializing_if = "MessageCollection::is_empty")]
    pub errors: MessageCollection,
}
