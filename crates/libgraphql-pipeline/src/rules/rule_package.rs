use crate::rules::Pipeline;
use crate::rules::RuleStep;
use std::collections::HashMap;
use std::sync::Arc;

/// An immutable set of [`RuleStep`]s grouped by node kind.
///
/// Nodes whose kind has no group of its own get the default group.
pub struct RulePackage<P: Pipeline> {
    by_kind: HashMap<P::Kind, Vec<Arc<dyn RuleStep<P>>>>,
    default: Vec<Arc<dyn RuleStep<P>>>,
}
impl<P: Pipeline> RulePackage<P> {
    pub fn builder() -> RulePackageBuilder<P> {
        RulePackageBuilder::new()
    }

    /// The steps to run, in order, against a node of the given kind.
    pub fn fetch_rules(&self, kind: P::Kind) -> &[Arc<dyn RuleStep<P>>] {
        self.by_kind
            .get(&kind)
            .map(Vec::as_slice)
            .unwrap_or(self.default.as_slice())
    }

    /// The total number of step registrations in the package.
    pub fn len(&self) -> usize {
        self.default.len() + self.by_kind.values().map(Vec::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The names of the steps registered for `kind`, in order.
    pub fn rule_names(&self, kind: P::Kind) -> Vec<&'static str> {
        self.fetch_rules(kind).iter().map(|rule| rule.name()).collect()
    }
}
impl<P: Pipeline> std::fmt::Debug for RulePackage<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut by_kind: Vec<_> =
            self.by_kind
                .iter()
                .map(|(kind, rules)| {
                    (*kind, rules.iter().map(|r| r.name()).collect::<Vec<_>>())
                })
                .collect();
        by_kind.sort_by_key(|(kind, _)| format!("{kind:?}"));

        f.debug_struct("RulePackage")
            .field("by_kind", &by_kind)
            .field("default", &self.default.iter().map(|r| r.name()).collect::<Vec<_>>())
            .finish()
    }
}

/// Registers [`RuleStep`]s, in order, for a [`RulePackage`].
pub struct RulePackageBuilder<P: Pipeline> {
    by_kind: HashMap<P::Kind, Vec<Arc<dyn RuleStep<P>>>>,
    default: Vec<Arc<dyn RuleStep<P>>>,
}
impl<P: Pipeline> RulePackageBuilder<P> {
    pub fn new() -> Self {
        Self {
            by_kind: HashMap::new(),
            default: vec![],
        }
    }

    /// Append `step` to the group for `kind`.
    pub fn add(mut self, kind: P::Kind, step: impl RuleStep<P> + 'static) -> Self {
        self.by_kind.entry(kind).or_default().push(Arc::new(step));
        self
    }

    /// Append `step` to the group used for kinds without a group of their
    /// own.
    pub fn add_default(mut self, step: impl RuleStep<P> + 'static) -> Self {
        self.default.push(Arc::new(step));
        self
    }

    pub fn build(self) -> RulePackage<P> {
        RulePackage {
            by_kind: self.by_kind,
            default: self.default,
        }
    }
}
impl<P: Pipeline> std::default::Default for RulePackageBuilder<P> {
    fn default() -> Self {
        Self::new()
    }
}
