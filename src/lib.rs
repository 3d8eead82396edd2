#![doc = include_str!("../README.md")]

mod access;
mod atom;
mod error;
mod mutate;
mod node;
mod parser;
mod pointer;
mod serialize;
mod sort;
mod tree;

pub use atom::AtomTable;
pub use error::{AccessError, KindError, NumberError, PathError};
pub use node::Kind;
pub use parser::ParseError;
pub use sort::SortedJsonTree;
pub use tree::{JsonTree, NodeId};

impl JsonTree {
    /// Parses `input` as a JSON document into its packed tree representation.
    ///
    /// # Errors
    ///
    /// [`ParseError`] on the first syntactic problem: a malformed token, an
    /// unexpected end of input, a missing colon after an object key, or data
    /// left over after the root value.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        parser::parse(input)
    }

    /// Serializes this tree to canonical minified JSON.
    #[must_use]
    pub fn serialize(&self) -> String {
        serialize::serialize(self)
    }

    /// RFC 6902 `test`: does the subtree at `path` structurally equal `value`?
    /// Object comparison is order-sensitive; canonicalize both sides with
    /// [`JsonTree::sorted`] first if key order shouldn't matter.
    ///
    /// # Errors
    ///
    /// [`PathError`] if `path` does not resolve to an existing node.
    pub fn test(&self, path: &str, value: &JsonTree) -> Result<bool, PathError> {
        mutate::test(self, path, value)
    }

    /// RFC 6902 `replace`: overwrites the subtree at `path` with `value`.
    ///
    /// # Errors
    ///
    /// [`PathError`] if `path` does not resolve to an existing node.
    pub fn replace(&mut self, path: &str, value: &JsonTree) -> Result<(), PathError> {
        mutate::replace(self, path, value)
    }

    /// RFC 6902 `remove`: deletes the subtree at `path`. Removing the root
    /// (`path == ""`) leaves [`JsonTree::empty`].
    ///
    /// # Errors
    ///
    /// [`PathError`] if `path` does not resolve to an existing node.
    pub fn remove(&mut self, path: &str) -> Result<(), PathError> {
        mutate::remove(self, path)
    }

    /// RFC 6902 `add`: creates a new object key, inserts into an array, or
    /// (for an already-existing, non-array-indexed target) replaces it.
    ///
    /// # Errors
    ///
    /// [`PathError`] if an intermediate segment of `path` is missing.
    pub fn add(&mut self, path: &str, value: &JsonTree) -> Result<(), PathError> {
        mutate::add(self, path, value)
    }

    /// RFC 6902 `copy`: duplicates the subtree at `from` to `path`.
    ///
    /// # Errors
    ///
    /// [`PathError`] if `from` does not resolve, an intermediate segment of
    /// `path` is missing, or `from` is an ancestor of `path`.
    pub fn copy(&mut self, from: &str, path: &str) -> Result<(), PathError> {
        mutate::copy(self, from, path)
    }

    /// RFC 6902 `move`: relocates the subtree at `from` to `path`.
    ///
    /// # Errors
    ///
    /// Same as [`JsonTree::copy`].
    pub fn r#move(&mut self, from: &str, path: &str) -> Result<(), PathError> {
        mutate::r#move(self, from, path)
    }

    /// Produces a canonically-ordered copy: every object's direct children
    /// sorted by key text, recursively, with a fresh minimal atom table.
    #[must_use]
    pub fn sorted(&self) -> SortedJsonTree {
        sort::sorted(self)
    }

    /// The [`Kind`] of the node at `path`, or `None` if it doesn't resolve.
    #[must_use]
    pub fn kind_at(&self, path: &str) -> Option<Kind> {
        access::kind_at(self, path)
    }

    /// `true` if `path` resolves to any node.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        access::contains(self, path)
    }

    /// Reads `path` as a `Bool`, or `default` if it doesn't resolve to one.
    #[must_use]
    pub fn get_bool(&self, path: &str, default: bool) -> bool {
        access::get_bool(self, path, default)
    }

    /// Reads `path` as a `Bool`.
    ///
    /// # Errors
    ///
    /// [`AccessError`] if `path` doesn't resolve, or resolves to a non-`Bool`.
    pub fn try_bool(&self, path: &str) -> Result<bool, AccessError> {
        access::try_bool(self, path)
    }

    /// Reads `path` as an `Int`, parsed from its atom text, or `default` if
    /// it doesn't resolve to one.
    #[must_use]
    pub fn get_i64(&self, path: &str, default: i64) -> i64 {
        access::get_i64(self, path, default)
    }

    /// Reads `path` as an `Int`, parsed from its atom text.
    ///
    /// # Errors
    ///
    /// [`AccessError`] if `path` doesn't resolve, resolves to a non-`Int`, or
    /// the atom text doesn't parse as `i64`.
    pub fn try_i64(&self, path: &str) -> Result<i64, AccessError> {
        access::try_i64(self, path)
    }

    /// Reads `path` as a floating point number, accepting both `Int` and
    /// `Float` nodes, or `default` if it doesn't resolve to either.
    #[must_use]
    pub fn get_f64(&self, path: &str, default: f64) -> f64 {
        access::get_f64(self, path, default)
    }

    /// Reads `path` as a floating point number, accepting both `Int` and
    /// `Float` nodes.
    ///
    /// # Errors
    ///
    /// [`AccessError`] if `path` doesn't resolve or resolves to neither kind.
    pub fn try_f64(&self, path: &str) -> Result<f64, AccessError> {
        access::try_f64(self, path)
    }

    /// Reads `path` as a `String`, or `default` if it doesn't resolve to one.
    #[must_use]
    pub fn get_str<'a>(&'a self, path: &str, default: &'a str) -> &'a str {
        access::get_str(self, path, default)
    }

    /// Reads `path` as a `String`.
    ///
    /// # Errors
    ///
    /// [`AccessError`] if `path` doesn't resolve, or resolves to a
    /// non-`String`.
    pub fn try_str(&self, path: &str) -> Result<&str, AccessError> {
        access::try_str(self, path)
    }
}

impl SortedJsonTree {
    /// Collapses duplicate object keys: within each object, every run of
    /// equal adjacent keys (adjacent because the tree is sorted) is reduced
    /// to its first occurrence.
    #[must_use]
    pub fn deduplicate(self) -> Self {
        sort::deduplicate(self)
    }
}

/// Structural equality of two canonicalized trees: equal node-array length,
/// and at every index either both sides are containers of equal span or
/// atoms whose interned texts are equal.
#[must_use]
pub fn equal(a: &SortedJsonTree, b: &SortedJsonTree) -> bool {
    sort::equal(a, b)
}

// End-to-end scenarios exercising the public API as a whole live in
// `tests/scenarios_tests.rs`.
