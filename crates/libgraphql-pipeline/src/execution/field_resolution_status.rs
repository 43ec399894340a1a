/// Where a single field or list item is in its resolution.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub enum FieldResolutionStatus {
    /// The resolver has not produced a value yet.
    NotStarted,

    /// The resolver produced a value that has not been classified yet.
    ResultAssigned,

    /// The value is an object or list whose children are still resolving.
    RequiresChildResolution,

    /// Resolution finished. The value may still be `null`.
    Complete,

    /// A non-null child settled with an error, so this item's own value was
    /// discarded and replaced with `null`.
    Invalidated,

    /// The item was never meant to resolve (e.g. `@skip(if: true)`) and is
    /// left out of the response.
    Skipped,

    /// The resolver failed, returned `null` for a non-null type, or never
    /// produced a value before the result was finalized.
    Failed,
}
impl FieldResolutionStatus {
    /// Whether no further transition can happen from this status.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Complete | Self::Failed | Self::Invalidated | Self::Skipped,
        )
    }

    /// Whether the item's value was nulled because of an error.
    pub fn indicates_error(&self) -> bool {
        matches!(self, Self::Failed | Self::Invalidated)
    }
}
