use crate::loc::SourceLocation;

/// Well-known values for [`Message::code()`].
pub mod codes {
    /// The document violates one of the GraphQL validation rules.
    pub const INVALID_DOCUMENT: &str = "INVALID_DOCUMENT";

    /// The document text could not be parsed.
    pub const SYNTAX_ERROR: &str = "SYNTAX_ERROR";

    /// A field failed while being resolved.
    pub const EXECUTION_ERROR: &str = "EXECUTION_ERROR";

    /// An operation nests field selections deeper than allowed.
    pub const MAX_DEPTH_EXCEEDED: &str = "MAX_DEPTH_EXCEEDED";

    /// A selected field is marked `@deprecated` in the schema.
    pub const DEPRECATED_FIELD: &str = "DEPRECATED_FIELD";
}

/// Anchors for the validation rules of the
/// [October 2021 GraphQL specification](https://spec.graphql.org/October2021/).
pub mod anchors {
    use super::RuleAnchor;

    pub const EXECUTABLE_DEFINITIONS: RuleAnchor = RuleAnchor::new(
        "5.1.1",
        "https://spec.graphql.org/October2021/#sec-Executable-Definitions",
    );

    pub const OPERATION_NAME_UNIQUENESS: RuleAnchor = RuleAnchor::new(
        "5.2.1.1",
        "https://spec.graphql.org/October2021/#sec-Operation-Name-Uniqueness",
    );

    pub const LONE_ANONYMOUS_OPERATION: RuleAnchor = RuleAnchor::new(
        "5.2.2.1",
        "https://spec.graphql.org/October2021/#sec-Lone-Anonymous-Operation",
    );

    pub const SINGLE_ROOT_FIELD: RuleAnchor = RuleAnchor::new(
        "5.2.3.1",
        "https://spec.graphql.org/October2021/#sec-Single-root-field",
    );

    pub const FIELD_SELECTIONS: RuleAnchor = RuleAnchor::new(
        "5.3.1",
        "https://spec.graphql.org/October2021/#sec-Field-Selections",
    );

    pub const FIELD_SELECTION_MERGING: RuleAnchor = RuleAnchor::new(
        "5.3.2",
        "https://spec.graphql.org/October2021/#sec-Field-Selection-Merging",
    );

    pub const LEAF_FIELD_SELECTIONS: RuleAnchor = RuleAnchor::new(
        "5.3.3",
        "https://spec.graphql.org/October2021/#sec-Leaf-Field-Selections",
    );

    pub const ARGUMENT_NAMES: RuleAnchor = RuleAnchor::new(
        "5.4.1",
        "https://spec.graphql.org/October2021/#sec-Argument-Names",
    );

    pub const ARGUMENT_UNIQUENESS: RuleAnchor = RuleAnchor::new(
        "5.4.2",
        "https://spec.graphql.org/October2021/#sec-Argument-Uniqueness",
    );

    pub const REQUIRED_ARGUMENTS: RuleAnchor = RuleAnchor::new(
        "5.4.2.1",
        "https://spec.graphql.org/October2021/#sec-Required-Arguments",
    );

    pub const FRAGMENT_NAME_UNIQUENESS: RuleAnchor = RuleAnchor::new(
        "5.5.1.1",
        "https://spec.graphql.org/October2021/#sec-Fragment-Name-Uniqueness",
    );

    pub const FRAGMENT_SPREAD_TYPE_EXISTENCE: RuleAnchor = RuleAnchor::new(
        "5.5.1.2",
        "https://spec.graphql.org/October2021/#sec-Fragment-Spread-Type-Existence",
    );

    pub const FRAGMENTS_ON_COMPOSITE_TYPES: RuleAnchor = RuleAnchor::new(
        "5.5.1.3",
        "https://spec.graphql.org/October2021/#sec-Fragments-On-Composite-Types",
    );

    pub const FRAGMENTS_MUST_BE_USED: RuleAnchor = RuleAnchor::new(
        "5.5.1.4",
        "https://spec.graphql.org/October2021/#sec-Fragments-Must-Be-Used",
    );

    pub const FRAGMENT_SPREAD_TARGET_DEFINED: RuleAnchor = RuleAnchor::new(
        "5.5.2.1",
        "https://spec.graphql.org/October2021/#sec-Fragment-spread-target-defined",
    );

    pub const FRAGMENT_SPREADS_MUST_NOT_FORM_CYCLES: RuleAnchor = RuleAnchor::new(
        "5.5.2.2",
        "https://spec.graphql.org/October2021/#sec-Fragment-spreads-must-not-form-cycles",
    );

    pub const FRAGMENT_SPREAD_IS_POSSIBLE: RuleAnchor = RuleAnchor::new(
        "5.5.2.3",
        "https://spec.graphql.org/October2021/#sec-Fragment-spread-is-possible",
    );

    pub const VALUES_OF_CORRECT_TYPE: RuleAnchor = RuleAnchor::new(
        "5.6.1",
        "https://spec.graphql.org/October2021/#sec-Values-of-Correct-Type",
    );

    pub const INPUT_OBJECT_FIELD_NAMES: RuleAnchor = RuleAnchor::new(
        "5.6.2",
        "https://spec.graphql.org/October2021/#sec-Input-Object-Field-Names",
    );

    pub const INPUT_OBJECT_FIELD_UNIQUENESS: RuleAnchor = RuleAnchor::new(
        "5.6.3",
        "https://spec.graphql.org/October2021/#sec-Input-Object-Field-Uniqueness",
    );

    pub const INPUT_OBJECT_REQUIRED_FIELDS: RuleAnchor = RuleAnchor::new(
        "5.6.4",
        "https://spec.graphql.org/October2021/#sec-Input-Object-Required-Fields",
    );

    pub const DIRECTIVES_ARE_DEFINED: RuleAnchor = RuleAnchor::new(
        "5.7.1",
        "https://spec.graphql.org/October2021/#sec-Directives-Are-Defined",
    );

    pub const DIRECTIVES_ARE_IN_VALID_LOCATIONS: RuleAnchor = RuleAnchor::new(
        "5.7.2",
        "https://spec.graphql.org/October2021/#sec-Directives-Are-In-Valid-Locations",
    );

    pub const DIRECTIVES_ARE_UNIQUE_PER_LOCATION: RuleAnchor = RuleAnchor::new(
        "5.7.3",
        "https://spec.graphql.org/October2021/#sec-Directives-Are-Unique-Per-Location",
    );

    pub const VARIABLE_UNIQUENESS: RuleAnchor = RuleAnchor::new(
        "5.8.1",
        "https://spec.graphql.org/October2021/#sec-Variable-Uniqueness",
    );

    pub const VARIABLES_ARE_INPUT_TYPES: RuleAnchor = RuleAnchor::new(
        "5.8.2",
        "https://spec.graphql.org/October2021/#sec-Variables-Are-Input-Types",
    );

    pub const ALL_VARIABLE_USES_DEFINED: RuleAnchor = RuleAnchor::new(
        "5.8.3",
        "https://spec.graphql.org/October2021/#sec-All-Variable-Uses-Defined",
    );

    pub const ALL_VARIABLES_USED: RuleAnchor = RuleAnchor::new(
        "5.8.4",
        "https://spec.graphql.org/October2021/#sec-All-Variables-Used",
    );

    pub const ALL_VARIABLE_USAGES_ARE_ALLOWED: RuleAnchor = RuleAnchor::new(
        "5.8.5",
        "https://spec.graphql.org/October2021/#sec-All-Variable-Usages-are-Allowed",
    );
}

/// How serious a [`Message`] is. Ordered from least to most severe.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    serde::Deserialize,
    serde::Serialize,
)]
pub enum MessageSeverity {
    Info,
    Warning,
    Error,
    Critical,
}
impl MessageSeverity {
    /// Whether a message of this severity makes a document invalid.
    pub fn is_error(&self) -> bool {
        *self >= Self::Error
    }
}

/// Points a [`Message`] at the numbered rule of the
/// [GraphQL specification](https://spec.graphql.org/October2021/) that
/// produced it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub struct RuleAnchor {
    pub number: &'static str,
    pub url: &'static str,
}
impl RuleAnchor {
    pub const fn new(number: &'static str, url: &'static str) -> Self {
        Self { number, url }
    }
}
impl std::fmt::Display for RuleAnchor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.number, self.url)
    }
}

/// A user-facing note produced while constructing, validating or executing a
/// document.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    code: String,
    location: SourceLocation,
    path: String,
    rule_anchor: Option<RuleAnchor>,
    severity: MessageSeverity,
    text: String,
}
impl Message {
    pub fn new(
        severity: MessageSeverity,
        code: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            location: SourceLocation::default(),
            path: String::new(),
            rule_anchor: None,
            severity,
            text: text.into(),
        }
    }

    /// Shorthand for an [`MessageSeverity::Error`] message with the
    /// [`codes::INVALID_DOCUMENT`] code.
    pub fn invalid_document(text: impl Into<String>) -> Self {
        Self::new(MessageSeverity::Error, codes::INVALID_DOCUMENT, text)
    }

    pub fn at(mut self, location: SourceLocation) -> Self {
        self.location = location;
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_rule(mut self, anchor: RuleAnchor) -> Self {
        self.rule_anchor = Some(anchor);
        self
    }

    pub fn code(&self) -> &str {
        self.code.as_str()
    }

    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    pub fn path(&self) -> &str {
        self.path.as_str()
    }

    pub fn rule_anchor(&self) -> Option<&RuleAnchor> {
        self.rule_anchor.as_ref()
    }

    /// The GraphQL rule number this message cites, if any (e.g. `"5.4.2"`).
    pub fn rule_number(&self) -> Option<&'static str> {
        self.rule_anchor.map(|anchor| anchor.number)
    }

    pub fn severity(&self) -> MessageSeverity {
        self.severity
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }
}
impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{:?}] {} at {}: {}",
            self.severity,
            self.code,
            self.location,
            self.text,
        )?;
        if let Some(anchor) = &self.rule_anchor {
            write!(f, " (rule {})", anchor.number)?;
        }
        Ok(())
    }
}

/// An append-only, ordered collection of [`Message`]s.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct MessageCollection {
    messages: Vec<Message>,
}
impl MessageCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn append(&mut self, other: MessageCollection) {
        self.messages.extend(other.messages);
    }

    /// Whether any message is severe enough to make a document invalid.
    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(|msg| msg.severity().is_error())
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// The most severe [`MessageSeverity`] in the collection.
    pub fn severity(&self) -> Option<MessageSeverity> {
        self.messages.iter().map(Message::severity).max()
    }

    /// All messages citing the given GraphQL rule number.
    pub fn with_rule_number<'a>(
        &'a self,
        number: &'a str,
    ) -> impl Iterator<Item = &'a Message> + 'a {
        self.messages
            .iter()
            .filter(move |msg| msg.rule_number() == Some(number))
    }
}
impl<'a> IntoIterator for &'a MessageCollection {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}
impl IntoIterator for MessageCollection {
    type Item = Message;
    type IntoIter = std::vec::IntoIter<Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.into_iter()
    }
}
impl std::convert::From<Vec<Message>> for MessageCollection {
    fn from(messages: Vec<Message>) -> Self {
        Self { messages }
    }
}
