//! Byte-span edits collected by the rule passes.
//!
//! Every offset refers to the untouched input text, so the rules never
//! observe one another's output; the whole set is applied in a single
//! forward pass at the end.

/// One replacement of `start..end` with `text`. Pure insertions have
/// `start == end`.
struct Edit {
    start: usize,
    end: usize,
    text: String,
}

pub struct EditSet {
    edits: Vec<Edit>,
}

impl EditSet {
    pub fn new() -> Self {
        Self { edits: Vec::new() }
    }

    pub fn insert(&mut self, at: usize, text: impl Into<String>) {
        self.replace(at, at, text);
    }

    /// Insertion that wins ties against insertions queued earlier at the
    /// same offset (used for the import line, which must land above a
    /// decorator inserted at the very start of the file).
    pub fn insert_first(&mut self, at: usize, text: impl Into<String>) {
        self.edits.insert(
            0,
            Edit {
                start: at,
                end: at,
                text: text.into(),
            },
        );
    }

    pub fn replace(&mut self, start: usize, end: usize, text: impl Into<String>) {
        self.edits.push(Edit {
            start,
            end,
            text: text.into(),
        });
    }

    pub fn delete(&mut self, start: usize, end: usize) {
        self.replace(start, end, "");
    }

    /// Applies the set to `source` in one pass. Edits are ordered by
    /// start offset (stable, so same-offset insertions keep queue
    /// order); an edit overlapping an already-applied span is dropped.
    pub fn apply(mut self, source: &str) -> String {
        self.edits.sort_by_key(|edit| edit.start);

        let mut out = String::with_capacity(source.len() + 128);
        let mut cursor = 0usize;
        for edit in &self.edits {
            if edit.start < cursor {
                continue;
            }
            out.push_str(&source[cursor..edit.start]);
            out.push_str(&edit.text);
            cursor = edit.end;
        }
        out.push_str(&source[cursor..]);
        out
    }
}
