//! The atom interning table: a bidirectional `text <-> id` map shared by
//! every string, number lexeme, and object key in one tree.

use std::collections::HashMap;

/// Id 0 is reserved for "no atom" and is never returned by [`AtomTable::intern`].
pub const ABSENT_ATOM: u32 = 0;

/// Append-only interning table.
///
/// Ids are stable for the table's lifetime: once `text` is interned it keeps
/// the same id until the table itself is dropped. Two distinct texts never
/// share an id; two equal texts always do.
#[derive(Debug, Clone, Default)]
pub struct AtomTable {
    texts: Vec<Box<str>>,
    ids: HashMap<Box<str>, u32>,
}

impl AtomTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id for `text`, interning it first if this is the first
    /// time it has been seen.
    pub fn intern(&mut self, text: &str) -> u32 {
        if let Some(&id) = self.ids.get(text) {
            return id;
        }
        self.texts.push(text.into());
        let id = self.texts.len() as u32;
        self.ids.insert(text.into(), id);
        id
    }

    /// Returns the id for `text`, or [`ABSENT_ATOM`] if it was never interned.
    #[must_use]
    pub fn lookup(&self, text: &str) -> u32 {
        self.ids.get(text).copied().unwrap_or(ABSENT_ATOM)
    }

    /// Returns the text for `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` is `ABSENT_ATOM` or was never produced by this table's
    /// `intern` (every stored atom id must reference a live entry).
    #[must_use]
    pub fn get(&self, id: u32) -> &str {
        assert!(id != ABSENT_ATOM, "atom id 0 means absent, it has no text");
        &self.texts[(id - 1) as usize]
    }

    /// Number of distinct texts interned so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    /// `true` if no text has been interned yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}
