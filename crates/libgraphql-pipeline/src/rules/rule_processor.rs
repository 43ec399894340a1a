use crate::rules::Pipeline;
use crate::rules::RuleContext;
use crate::rules::RulePackage;

/// Applies a [`RulePackage`] to a tree, depth-first and pre-order.
///
/// Children are visited in the order [`Pipeline::child_nodes()`] returns
/// them and every node is visited at most once.
pub struct RuleProcessor<'p, P: Pipeline> {
    package: &'p RulePackage<P>,
}
impl<'p, P: Pipeline> RuleProcessor<'p, P> {
    pub fn new(package: &'p RulePackage<P>) -> Self {
        Self { package }
    }

    /// Process the context's active node and all of its descendants.
    ///
    /// Returns `true` when every step that executed reported success.
    pub fn execute(&self, ctx: &mut RuleContext<'_, P>) -> bool {
        P::enter_node(ctx);

        let kind = ctx.active_kind();
        let mut all_passed = true;
        let mut descend = true;
        for rule in self.package.fetch_rules(kind) {
            if rule.should_execute(ctx) && !rule.execute(ctx) {
                tracing::trace!(rule = rule.name(), ?kind, "rule step failed");
                all_passed = false;
            }
            if !rule.should_allow_child_contexts_to_execute(ctx) {
                tracing::trace!(rule = rule.name(), ?kind, "rule step vetoed descent");
                descend = false;
            }
        }

        if descend {
            let children = P::child_nodes(ctx.state(), ctx.active());
            for child in children {
                ctx.push(child);
                all_passed &= self.execute(ctx);
                ctx.pop();
            }
        }

        P::exit_node(ctx);
        all_passed
    }
}
