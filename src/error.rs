//! Error types for pointer resolution and typed access.
//!
//! [`crate::parser::ParseError`] is defined alongside the parser it comes
//! from; the other two error categories — pointer resolution failures and
//! kind mismatches — live here, together with [`AccessError`], the thin enum
//! the strict typed accessors use to report either one.

use crate::node::Kind;
use thiserror::Error;

/// Raised by the pointer resolver and the mutation engine when a JSON
/// Pointer cannot be resolved: a required segment is missing, `from` is an
/// ancestor of `path` in `copy`/`move`, or an array index is out of range.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("cannot resolve JSON pointer {pointer:?}: {reason}")]
pub struct PathError {
    /// The pointer that failed to resolve.
    pub pointer: String,
    /// Human-readable detail; not part of the public contract for matching,
    /// only for display.
    pub reason: String,
}

impl PathError {
    pub(crate) fn new(pointer: impl Into<String>, reason: impl Into<String>) -> Self {
        Self { pointer: pointer.into(), reason: reason.into() }
    }
}

/// Raised by the typed accessors when a node exists but is not of the
/// requested kind.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("wanted a {wanted:?} node but found {got:?}")]
pub struct KindError {
    /// The kind the caller asked for.
    pub wanted: Kind,
    /// The kind actually found at the resolved position.
    pub got: Kind,
}

/// Raised by the numeric typed accessors when an atom's kind matches but its
/// lexeme doesn't fit the requested Rust numeric type, e.g. an `Int` whose
/// digits overflow `i64`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("atom text {text:?} does not parse as {target}")]
pub struct NumberError {
    /// The atom's textual lexeme.
    pub text: String,
    /// The Rust numeric type the caller requested (`"i64"`, `"f64"`, ...).
    pub target: &'static str,
}

/// Composes [`PathError`], [`KindError`], and [`NumberError`] for the strict
/// (`try_*`) typed accessors, the same way `scan_json::Error` composes
/// `rjiter::Error`: a thin enum that lets a sibling error wear another's
/// clothes without losing its original shape.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// The pointer itself did not resolve.
    #[error(transparent)]
    Path(#[from] PathError),
    /// The pointer resolved, but to a node of the wrong kind.
    #[error(transparent)]
    Kind(#[from] KindError),
    /// The pointer resolved to the right kind, but its lexeme doesn't fit the
    /// requested numeric type.
    #[error(transparent)]
    Number(#[from] NumberError),
}
