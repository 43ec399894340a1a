/// One step of a response path: a field's response key (its alias or
/// name) or the index of a list item.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum ResponseKey {
    Field(String),
    Index(usize),
}
impl std::fmt::Display for ResponseKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Field(name) => f.write_str(name),
            Self::Index(idx) => write!(f, "[{idx}]"),
        }
    }
}
impl std::convert::From<&str> for ResponseKey {
    fn from(name: &str) -> Self {
        Self::Field(name.to_string())
    }
}
impl std::convert::From<String> for ResponseKey {
    fn from(name: String) -> Self {
        Self::Field(name)
    }
}
impl std::convert::From<usize> for ResponseKey {
    fn from(idx: usize) -> Self {
        Self::Index(idx)
    }
}
