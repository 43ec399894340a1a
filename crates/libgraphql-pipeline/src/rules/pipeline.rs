use crate::rules::RuleContext;
use std::fmt::Debug;
use std::hash::Hash;

/// Describes the tree a [`RuleProcessor`](crate::rules::RuleProcessor)
/// walks and the state each walk carries.
pub trait Pipeline: Sized + 'static {
    /// Rule packages are keyed by this.
    type Kind: Copy + Debug + Eq + Hash + Send + Sync + 'static;

    type Node: Clone + Debug;

    /// Whatever a walk reads from and writes to while it runs (e.g. the
    /// document under construction).
    type State<'a>;

    fn node_kind(state: &Self::State<'_>, node: &Self::Node) -> Self::Kind;

    /// The children of `node`, in the order they should be visited.
    ///
    /// Called only after every rule for `node` has run, so children added
    /// by those rules are included.
    fn child_nodes(state: &Self::State<'_>, node: &Self::Node) -> Vec<Self::Node>;

    /// Called when `ctx.active()` becomes the active node, before any rule
    /// runs against it.
    fn enter_node(_ctx: &mut RuleContext<'_, Self>) {}

    /// Called after `ctx.active()` and all of its descendants have been
    /// processed.
    fn exit_node(_ctx: &mut RuleContext<'_, Self>) {}
}
