use crate::messages::Message;
use crate::messages::MessageCollection;
use crate::rules::ContextMetadata;
use crate::rules::Pipeline;

/// The cursor a [`RuleProcessor`](crate::rules::RuleProcessor) moves over a
/// tree during one walk.
///
/// Besides the active node, a context carries the chain of nodes leading
/// to it from the root, the walk's state, an append-only message sink and a
/// [`ContextMetadata`] store. A context belongs to exactly one walk and is
/// never shared.
pub struct RuleContext<'a, P: Pipeline> {
    messages: MessageCollection,
    metadata: ContextMetadata,
    stack: Vec<P::Node>,
    state: P::State<'a>,
}
impl<'a, P: Pipeline> RuleContext<'a, P> {
    /// A context whose active node is `root`.
    pub fn new(state: P::State<'a>, root: P::Node) -> Self {
        Self {
            messages: MessageCollection::new(),
            metadata: ContextMetadata::new(),
            stack: vec![root],
            state,
        }
    }

    /// The node currently being processed.
    pub fn active(&self) -> &P::Node {
        match self.stack.last() {
            Some(node) => node,
            None => panic!("RuleContext has no active node; its walk already completed"),
        }
    }

    pub fn active_kind(&self) -> P::Kind {
        P::node_kind(&self.state, self.active())
    }

    pub fn add_message(&mut self, message: Message) {
        self.messages.add(message);
    }

    /// The nodes enclosing the active node, nearest first.
    pub fn ancestors(&self) -> impl Iterator<Item = &P::Node> + '_ {
        self.stack.iter().rev().skip(1)
    }

    /// How many nodes lie between the root and the active node. The root
    /// has depth 0.
    pub fn depth(&self) -> usize {
        self.stack.len().saturating_sub(1)
    }

    pub fn messages(&self) -> &MessageCollection {
        &self.messages
    }

    pub fn metadata(&self) -> &ContextMetadata {
        &self.metadata
    }

    pub fn metadata_mut(&mut self) -> &mut ContextMetadata {
        &mut self.metadata
    }

    /// The node directly enclosing the active node.
    pub fn parent(&self) -> Option<&P::Node> {
        self.ancestors().next()
    }

    pub fn state(&self) -> &P::State<'a> {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut P::State<'a> {
        &mut self.state
    }

    /// Borrow the state and the metadata at the same time.
    pub fn state_and_metadata_mut(&mut self) -> (&mut P::State<'a>, &mut ContextMetadata) {
        (&mut self.state, &mut self.metadata)
    }

    /// Give up the context, returning the walk's state and every message
    /// the walk produced.
    pub fn into_parts(self) -> (P::State<'a>, MessageCollection) {
        (self.state, self.messages)
    }

    pub(super) fn push(&mut self, node: P::Node) {
        self.stack.push(node);
    }

    pub(super) fn pop(&mut self) {
        self.stack.pop();
    }
}
impl<P: Pipeline> std::fmt::Debug for RuleContext<'_, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleContext")
            .field("depth", &self.depth())
            .field("active", &self.stack.last())
            .field("messages", &self.messages.len())
            .finish_non_exhaustive()
    }
}
