//! Typed accessors: kind-checked reads with caller-supplied defaults, plus a
//! strict variant that surfaces the mismatch instead of falling back.
//!
//! The default-taking readers are implemented in terms of the strict ones,
//! so there is exactly one code path that resolves a pointer, checks a kind,
//! and parses an atom.

use crate::error::{AccessError, KindError, NumberError, PathError};
use crate::node::Kind;
use crate::pointer;
use crate::tree::{JsonTree, NIL};

/// Returns the [`Kind`] of the node at `path`, if it resolves.
#[must_use]
pub(crate) fn kind_at(tree: &JsonTree, path: &str) -> Option<Kind> {
    let pos = pointer::resolve(tree, path);
    if pos == NIL {
        None
    } else {
        Some(tree.kind(pos))
    }
}

/// `true` if `path` resolves to any node.
#[must_use]
pub(crate) fn contains(tree: &JsonTree, path: &str) -> bool {
    pointer::resolve(tree, path) != NIL
}

fn resolve_strict(tree: &JsonTree, path: &str) -> Result<usize, AccessError> {
    let pos = pointer::resolve(tree, path);
    if pos == NIL {
        return Err(AccessError::Path(PathError::new(path, "does not resolve")));
    }
    Ok(pos)
}

fn expect_kind(tree: &JsonTree, pos: usize, wanted: Kind) -> Result<(), AccessError> {
    let got = tree.kind(pos);
    if got == wanted {
        Ok(())
    } else {
        Err(AccessError::Kind(KindError { wanted, got }))
    }
}

pub(crate) fn try_bool(tree: &JsonTree, path: &str) -> Result<bool, AccessError> {
    let pos = resolve_strict(tree, path)?;
    expect_kind(tree, pos, Kind::Bool)?;
    Ok(tree.operand(pos) == 1)
}

#[must_use]
pub(crate) fn get_bool(tree: &JsonTree, path: &str, default: bool) -> bool {
    try_bool(tree, path).unwrap_or(default)
}

pub(crate) fn try_i64(tree: &JsonTree, path: &str) -> Result<i64, AccessError> {
    let pos = resolve_strict(tree, path)?;
    expect_kind(tree, pos, Kind::Int)?;
    let text = tree.atoms().get(tree.operand(pos));
    text.parse()
        .map_err(|_| AccessError::Number(NumberError { text: text.to_string(), target: "i64" }))
}

#[must_use]
pub(crate) fn get_i64(tree: &JsonTree, path: &str, default: i64) -> i64 {
    try_i64(tree, path).unwrap_or(default)
}

/// Accepts both `Int` and `Float` nodes, since every integer literal is also
/// a valid floating point value.
pub(crate) fn try_f64(tree: &JsonTree, path: &str) -> Result<f64, AccessError> {
    let pos = resolve_strict(tree, path)?;
    let got = tree.kind(pos);
    if got != Kind::Int && got != Kind::Float {
        return Err(AccessError::Kind(KindError { wanted: Kind::Float, got }));
    }
    let text = tree.atoms().get(tree.operand(pos));
    Ok(text.parse().expect("an Int/Float atom's lexeme was validated by the parser"))
}

#[must_use]
pub(crate) fn get_f64(tree: &JsonTree, path: &str, default: f64) -> f64 {
    try_f64(tree, path).unwrap_or(default)
}

pub(crate) fn try_str<'a>(tree: &'a JsonTree, path: &str) -> Result<&'a str, AccessError> {
    let pos = resolve_strict(tree, path)?;
    expect_kind(tree, pos, Kind::String)?;
    Ok(tree.atoms().get(tree.operand(pos)))
}

#[must_use]
pub(crate) fn get_str<'a>(tree: &'a JsonTree, path: &str, default: &'a str) -> &'a str {
    try_str(tree, path).unwrap_or(default)
}

// Tests exercising the public typed-accessor methods live in
// `tests/access_tests.rs`.
