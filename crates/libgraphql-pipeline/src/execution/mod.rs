//! Tracks the resolution of every field and list item while an external
//! executor resolves an operation, and assembles the final response data.
//!
//! Resolution happens concurrently and in any order. Each
//! [`FieldResolutionItem`] moves through the [`FieldResolutionStatus`]
//! state machine on its own; a parent only settles once registration of its
//! children is sealed and every child has settled. When a non-null child
//! settles with an error its parent's value becomes `null`, and that null
//! keeps propagating upward until it reaches a nullable position.

mod field_resolution_item;
mod field_resolution_status;
mod resolution_result;
mod response_key;

pub use field_resolution_item::FieldResolutionItem;
pub use field_resolution_status::FieldResolutionStatus;
pub use resolution_result::ResolutionResult;
pub use response_key::ResponseKey;
