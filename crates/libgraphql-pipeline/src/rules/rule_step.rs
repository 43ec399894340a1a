use crate::rules::Pipeline;
use crate::rules::RuleContext;

/// A single, stateless unit of construction or validation logic.
///
/// For every node a processor visits, each applicable step is asked, in
/// order:
///
/// 1. [`should_execute()`](RuleStep::should_execute): whether the step
///    applies here at all. When `false`, `execute()` is not called.
/// 2. [`execute()`](RuleStep::execute): perform the check or mutation and
///    report whether the node is still valid. Problems are reported by
///    adding messages to the context, never by panicking.
/// 3. [`should_allow_child_contexts_to_execute()`](RuleStep::should_allow_child_contexts_to_execute):
///    always asked, whatever the first two answered. Returning `false`
///    prevents every rule from running against any descendant of the node.
///
/// Steps are shared by every concurrent walk and must not hold mutable
/// state. Per-walk bookkeeping belongs in
/// [`RuleContext::metadata_mut()`].
pub trait RuleStep<P: Pipeline>: Send + Sync {
    /// A short, stable identifier used in logs.
    fn name(&self) -> &'static str;

    fn should_execute(&self, _ctx: &RuleContext<'_, P>) -> bool {
        true
    }

    fn execute(&self, ctx: &mut RuleContext<'_, P>) -> bool;

    fn should_allow_child_contexts_to_execute(&self, _ctx: &RuleContext<'_, P>) -> bool {
        true
    }
}
