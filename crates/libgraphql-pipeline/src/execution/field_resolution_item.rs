use crate::execution::FieldResolutionStatus;
use crate::execution::ResolutionResult;
use crate::execution::ResponseKey;
use crate::messages::Message;
use crate::messages::MessageCollection;
use crate::messages::MessageSeverity;
use crate::messages::codes;
use crate::schema::TypeAnnotation;
use parking_lot::Mutex;
use serde_json::Value;
use std::sync::Arc;
use std::sync::Weak;

/// A handle to one field or list item in the response tree of an
/// operation being executed.
///
/// Handles are cheap to clone and may be sent to whichever thread resolves
/// the item. All clones refer to the same item.
#[derive(Clone)]
pub struct FieldResolutionItem {
    node: Arc<ItemNode>,
}
impl FieldResolutionItem {
    /// The item standing for an operation's root selection set, e.g. the
    /// `Query` object. Children can be added to it immediately.
    ///
    /// The root is nullable: when a non-null root field fails, the whole
    /// `data` entry becomes `null`.
    pub fn root(root_type: impl Into<String>) -> Self {
        let node = ItemNode {
            key: None,
            named_type_is_leaf: false,
            parent: Weak::new(),
            path: String::new(),
            state: Mutex::new(ItemState::new(FieldResolutionStatus::RequiresChildResolution)),
            type_annotation: TypeAnnotation::named(root_type, true),
        };
        Self {
            node: Arc::new(node),
        }
    }

    /// Register a field selected on this item's object value.
    ///
    /// `named_type_is_leaf` tells whether the named type at the core of
    /// `type_annotation` is a scalar or enum.
    ///
    /// Returns `None` when this item already settled (e.g. it failed while
    /// its children were being registered), in which case the field need not
    /// be resolved at all. Panics if this item has no object value yet or
    /// its children were already sealed.
    pub fn add_field(
        &self,
        response_key: impl Into<String>,
        type_annotation: TypeAnnotation,
        named_type_is_leaf: bool,
    ) -> Option<Self> {
        let response_key = response_key.into();
        self.add_child(
            |_| ResponseKey::Field(response_key),
            type_annotation,
            named_type_is_leaf,
        )
    }

    /// Register the next item of this item's list value. Items are indexed
    /// in the order they are added.
    ///
    /// Returns `None` under the same conditions as
    /// [`add_field()`](Self::add_field). Panics if this item is not a list.
    pub fn add_list_item(&self) -> Option<Self> {
        let Some(item_type) = self.node.type_annotation.item_type() else {
            panic!(
                "Attempted to add a list item to `{}`, which has non-list type `{}`",
                self.node.path,
                self.node.type_annotation,
            );
        };
        self.add_child(ResponseKey::Index, item_type.clone(), self.node.named_type_is_leaf)
    }

    fn add_child(
        &self,
        make_key: impl FnOnce(usize) -> ResponseKey,
        type_annotation: TypeAnnotation,
        named_type_is_leaf: bool,
    ) -> Option<Self> {
        let mut state = self.node.state.lock();
        match state.status {
            FieldResolutionStatus::RequiresChildResolution => (),
            status if status.is_terminal() => return None,
            status => panic!(
                "Attempted to add a child to `{}` before it was assigned an object \
                or list value (status: {status:?})",
                self.node.path,
            ),
        }
        assert!(
            !state.sealed,
            "Attempted to add a child to `{}` after its children were sealed",
            self.node.path,
        );

        let key = make_key(state.children.len());
        let path = match (&key, self.node.path.is_empty()) {
            (ResponseKey::Index(_), _) | (ResponseKey::Field(_), true) =>
                format!("{}{key}", self.node.path),
            (ResponseKey::Field(_), false) => format!("{}/{key}", self.node.path),
        };
        let child = Arc::new(ItemNode {
            key: Some(key),
            named_type_is_leaf,
            parent: Arc::downgrade(&self.node),
            path,
            state: Mutex::new(ItemState::new(FieldResolutionStatus::NotStarted)),
            type_annotation,
        });
        state.children.push(child.clone());
        Some(Self { node: child })
    }

    /// Record the value the resolver produced.
    ///
    /// A `null` settles the item right away: as `Complete` when its type is
    /// nullable, otherwise as `Failed` with an execution error. A non-null
    /// leaf value settles it as `Complete`. Any other value is an object or
    /// list whose children must be registered next.
    ///
    /// Returns the resulting status. Assigning to an item that already
    /// settled has no effect; assigning twice otherwise panics.
    pub fn assign_result(&self, value: Value) -> FieldResolutionStatus {
        let node = &self.node;
        let status = {
            let mut state = node.state.lock();
            match state.status {
                FieldResolutionStatus::NotStarted => (),
                status if status.is_terminal() => return status,
                status => panic!(
                    "Attempted to assign a second result to `{}` (status: {status:?})",
                    node.path,
                ),
            }
            state.status = FieldResolutionStatus::ResultAssigned;

            if value.is_null() {
                state.value = Some(Value::Null);
                if node.type_annotation.nullable() {
                    state.status = FieldResolutionStatus::Complete;
                } else {
                    let message = node.execution_error(format!(
                        "Cannot return null for non-nullable field `{}` of type `{}`",
                        node.path,
                        node.type_annotation,
                    ));
                    state.messages.push(message);
                    state.status = FieldResolutionStatus::Failed;
                }
            } else if node.is_leaf() {
                state.value = Some(value);
                state.status = FieldResolutionStatus::Complete;
            } else {
                state.status = FieldResolutionStatus::RequiresChildResolution;
            }
            state.status
        };

        tracing::trace!(path = %node.path, ?status, "assigned field result");
        if status.is_terminal() {
            node.notify_parent();
        }
        status
    }

    /// Settle an item that will never be resolved, leaving it out of the
    /// response.
    ///
    /// Panics if a result was already assigned.
    pub fn skip(&self) -> FieldResolutionStatus {
        let node = &self.node;
        {
            let mut state = node.state.lock();
            match state.status {
                FieldResolutionStatus::NotStarted => (),
                status if status.is_terminal() => return status,
                status => panic!(
                    "Attempted to skip `{}` after its result was assigned (status: {status:?})",
                    node.path,
                ),
            }
            state.status = FieldResolutionStatus::Skipped;
        }
        node.notify_parent();
        FieldResolutionStatus::Skipped
    }

    /// Settle the item as `Failed`, recording `reason` as an execution
    /// error. Has no effect on an item that already settled.
    pub fn fail(&self, reason: impl Into<String>) -> FieldResolutionStatus {
        let node = &self.node;
        {
            let mut state = node.state.lock();
            if state.status.is_terminal() {
                return state.status;
            }
            let message = node.execution_error(reason);
            state.messages.push(message);
            state.value = Some(Value::Null);
            state.status = FieldResolutionStatus::Failed;
        }
        tracing::trace!(path = %node.path, "field resolution failed");
        node.notify_parent();
        FieldResolutionStatus::Failed
    }

    /// Declare that every child of this item has been registered. The item
    /// settles as soon as this is called and all of its children settled,
    /// whichever happens last.
    pub fn seal_children(&self) {
        {
            let mut state = self.node.state.lock();
            if state.status != FieldResolutionStatus::RequiresChildResolution {
                return;
            }
            state.sealed = true;
        }
        self.node.try_join();
    }

    /// Settle everything that has not settled yet and assemble the response
    /// data for the tree below this item.
    ///
    /// Items that never received a value become `Failed`, exactly as if
    /// their resolver had failed, and pending parents are sealed. Call this
    /// once the executor stopped resolving items of this tree.
    pub fn finalize(&self) -> ResolutionResult {
        self.node.force_settle();

        let mut errors = MessageCollection::new();
        self.node.collect_messages(&mut errors);
        let data = self.node.output_value().unwrap_or(Value::Null);

        tracing::debug!(
            status = ?self.status(),
            errors = errors.len(),
            "finalized resolution tree",
        );
        ResolutionResult { data, errors }
    }

    pub fn children(&self) -> Vec<FieldResolutionItem> {
        self.node.state
            .lock()
            .children
            .iter()
            .map(|child| Self { node: child.clone() })
            .collect()
    }

    /// Where the item's value lives in the response, e.g.
    /// `user/friends[2]/name`. Empty for the root.
    pub fn path(&self) -> &str {
        self.node.path.as_str()
    }

    /// `None` for the root.
    pub fn response_key(&self) -> Option<&ResponseKey> {
        self.node.key.as_ref()
    }

    pub fn status(&self) -> FieldResolutionStatus {
        self.node.status()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.node.type_annotation
    }
}
impl std::fmt::Debug for FieldResolutionItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldResolutionItem")
            .field("path", &self.node.path)
            .field("status", &self.status())
            .field("type_annotation", &self.node.type_annotation)
            .finish()
    }
}

struct ItemNode {
    key: Option<ResponseKey>,
    named_type_is_leaf: bool,
    parent: Weak<ItemNode>,
    path: String,
    state: Mutex<ItemState>,
    type_annotation: TypeAnnotation,
}
impl ItemNode {
    fn is_leaf(&self) -> bool {
        !self.type_annotation.is_list() && self.named_type_is_leaf
    }

    fn status(&self) -> FieldResolutionStatus {
        self.state.lock().status
    }

    fn execution_error(&self, text: impl Into<String>) -> Message {
        Message::new(MessageSeverity::Error, codes::EXECUTION_ERROR, text)
            .with_path(self.path.as_str())
    }

    /// Must be called without holding this node's lock: joining locks the
    /// parent and then each of its children.
    fn notify_parent(&self) {
        if let Some(parent) = self.parent.upgrade() {
            parent.try_join();
        }
    }

    /// Settle a sealed parent once every child settled.
    fn try_join(&self) {
        let status = {
            let mut state = self.state.lock();
            if state.status != FieldResolutionStatus::RequiresChildResolution || !state.sealed {
                return;
            }

            let mut nulled_by_child = false;
            for child in state.children.iter() {
                let child_status = child.status();
                if !child_status.is_terminal() {
                    return;
                }
                if child_status.indicates_error() && !child.type_annotation.nullable() {
                    nulled_by_child = true;
                }
            }

            if !nulled_by_child {
                state.status = FieldResolutionStatus::Complete;
            } else {
                state.value = Some(Value::Null);
                state.status =
                    if self.type_annotation.nullable() {
                        FieldResolutionStatus::Complete
                    } else {
                        FieldResolutionStatus::Invalidated
                    };
            }
            state.status
        };

        tracing::trace!(path = %self.path, ?status, "joined child resolutions");
        self.notify_parent();
    }

    /// Settle this subtree bottom-up.
    fn force_settle(&self) {
        let (status, children) = {
            let state = self.state.lock();
            (state.status, state.children.clone())
        };
        if status.is_terminal() {
            for child in &children {
                child.settle_silently();
            }
            return;
        }
        for child in &children {
            child.force_settle();
        }

        let needs_join = {
            let mut state = self.state.lock();
            match state.status {
                FieldResolutionStatus::NotStarted | FieldResolutionStatus::ResultAssigned => {
                    let message = self.execution_error(format!(
                        "`{}` was not resolved before the result was finalized",
                        self.path,
                    ));
                    state.messages.push(message);
                    state.value = Some(Value::Null);
                    state.status = FieldResolutionStatus::Failed;
                    false
                },
                FieldResolutionStatus::RequiresChildResolution => {
                    state.sealed = true;
                    true
                },
                FieldResolutionStatus::Complete
                    | FieldResolutionStatus::Failed
                    | FieldResolutionStatus::Invalidated
                    | FieldResolutionStatus::Skipped => false,
            }
        };
        if needs_join {
            self.try_join();
        }
    }

    /// Settle whatever is still pending below an item that already settled.
    /// The settled ancestor decides the response, so nothing here adds a
    /// message.
    fn settle_silently(&self) {
        let children = {
            let mut state = self.state.lock();
            if !state.status.is_terminal() {
                state.sealed = true;
                state.value = Some(Value::Null);
                state.status = FieldResolutionStatus::Failed;
            }
            state.children.clone()
        };
        for child in &children {
            child.settle_silently();
        }
    }

    fn collect_messages(&self, messages: &mut MessageCollection) {
        let children = {
            let state = self.state.lock();
            for message in &state.messages {
                messages.add(message.clone());
            }
            state.children.clone()
        };
        for child in &children {
            child.collect_messages(messages);
        }
    }

    /// The settled value of this subtree. `None` for skipped items, which
    /// are left out of the response entirely.
    fn output_value(&self) -> Option<Value> {
        let state = self.state.lock();
        match state.status {
            FieldResolutionStatus::Skipped => return None,
            FieldResolutionStatus::Failed | FieldResolutionStatus::Invalidated =>
                return Some(Value::Null),
            _ => (),
        }
        if let Some(value) = &state.value {
            return Some(value.clone());
        }

        if self.type_annotation.is_list() {
            Some(Value::Array(
                state.children
                    .iter()
                    .filter_map(|child| child.output_value())
                    .collect(),
            ))
        } else {
            Some(Value::Object(
                state.children
                    .iter()
                    .filter_map(|child| {
                        let key = child.key.as_ref()?.to_string();
                        Some((key, child.output_value()?))
                    })
                    .collect(),
            ))
        }
    }
}

struct ItemState {
    children: Vec<Arc<ItemNode>>,
    messages: Vec<Message>,
    /// Set once every child has been registered.
    sealed: bool,
    status: FieldResolutionStatus,
    /// The settled value for leaves and nulls. Object and list values are
    /// assembled from the children instead.
    value: Option<Value>,
}
impl ItemState {
    fn new(status: FieldResolutionStatus) -> Self {
        Self {
            children: vec![],
            messages: vec![],
            sealed: false,
            status,
            value: None,
        }
    }
}
