//! A generic, depth-first rule engine.
//!
//! A [`Pipeline`] describes a kind of tree (its node type, how to get a
//! node's kind and children, and what state a walk carries). A
//! [`RulePackage`] groups stateless [`RuleStep`]s by node kind, and a
//! [`RuleProcessor`] walks a tree applying the matching steps to every node
//! it visits.
//!
//! Rule steps never hold per-run state. Anything a step needs to remember
//! across nodes goes into the [`ContextMetadata`] of the [`RuleContext`] for
//! the current walk, which is discarded when the walk completes. This is
//! what lets a single package be shared by any number of concurrent walks.

mod context_metadata;
mod pipeline;
mod rule_context;
mod rule_package;
mod rule_processor;
mod rule_step;

pub use context_metadata::ContextMetadata;
pub use pipeline::Pipeline;
pub use rule_context::RuleContext;
pub use rule_package::RulePackage;
pub use rule_package::RulePackageBuilder;
pub use rule_processor::RuleProcessor;
pub use rule_step::RuleStep;
