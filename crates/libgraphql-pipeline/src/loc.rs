use std::sync::Arc;

/// A position within a source document.
///
/// `line` and `column` are 1-based (matching what most editors display) and
/// `column` counts characters rather than bytes. `offset` is the 0-based byte
/// offset from the start of the document.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}
impl SourceLocation {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    /// The location of the very first character of a document.
    pub fn start_of_document() -> Self {
        Self::new(1, 1, 0)
    }
}
impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Maps byte offsets within a source document to [`SourceLocation`]s.
#[derive(Clone, Debug)]
pub struct LineIndex {
    line_starts: Vec<usize>,
    source: Arc<str>,
}
impl LineIndex {
    pub fn new(source: Arc<str>) -> Self {
        let mut line_starts = vec![0];
        let bytes = source.as_bytes();
        let mut idx = 0;
        while idx < bytes.len() {
            match bytes[idx] {
                b'\n' => line_starts.push(idx + 1),
                // A lone `\r` is a line terminator too; `\r\n` is handled
                // when we reach the `\n`.
                b'\r' if bytes.get(idx + 1) != Some(&b'\n') =>
                    line_starts.push(idx + 1),
                _ => (),
            }
            idx += 1;
        }

        Self {
            line_starts,
            source,
        }
    }

    /// Translate a byte offset into a [`SourceLocation`]. Offsets past the
    /// end of the document are clamped to the end.
    pub fn location(&self, offset: usize) -> SourceLocation {
        let offset = offset.min(self.source.len());
        let line_idx =
            self.line_starts.partition_point(|start| *start <= offset) - 1;
        let line_start = self.line_starts[line_idx];
        let column =
            self.source
                .get(line_start..offset)
                .map(|prefix| prefix.chars().count())
                .unwrap_or(offset - line_start);

        SourceLocation::new(line_idx + 1, column + 1, offset)
    }

    /// Like [`LineIndex::location()`], but first skips forward over any
    /// [ignored tokens](https://spec.graphql.org/October2021/#sec-Language.Source-Text.Ignored-Tokens)
    /// (whitespace, line terminators, commas, comments and the unicode BOM)
    /// so the location points at the first significant character.
    pub fn significant_location(&self, offset: usize) -> SourceLocation {
        self.location(self.skip_ignored(offset))
    }

    fn skip_ignored(&self, offset: usize) -> usize {
        let Some(rest) = self.source.get(offset..) else {
            return offset;
        };

        let mut in_comment = false;
        for (idx, ch) in rest.char_indices() {
            match ch {
                '\n' | '\r' => in_comment = false,
                _ if in_comment => (),
                '#' => in_comment = true,
                ' ' | '\t' | ',' | '\u{feff}' => (),
                _ => return offset + idx,
            }
        }
        self.source.len()
    }
}
