//! RFC 6901 JSON Pointer parsing and resolution against a packed tree.
//!
//! Two entry points are exposed: [`resolve`] for read-only lookups (never
//! fails, returns [`NIL`] for anything that doesn't resolve) and
//! [`resolve_mut`] for the mutation engine, which additionally reports the
//! ancestor chain a splice needs to repair and signals a [`PathError`] when
//! an *intermediate* segment is missing.

use crate::error::PathError;
use crate::node::Kind;
use crate::tree::{JsonTree, NodeId, NIL, ROOT};

/// One parsed JSON Pointer reference-token, already unescaped.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    /// An object property name. May look like a number (`"3"` is a valid
    /// object key); which interpretation applies is decided by the
    /// container kind encountered at resolution time, not here.
    Property(String),
    /// A non-negative array index written in base 10 without leading zeros.
    Index(usize),
    /// The `-` token: one past an array's last element. Only ever valid as
    /// the final token, and only against an array.
    NextIndex,
}

impl Token {
    fn parse(raw: &str) -> Token {
        let text = unescape(raw);
        if text == "-" {
            return Token::NextIndex;
        }
        let looks_like_index =
            text == "0" || (!text.is_empty() && !text.starts_with('0') && text.bytes().all(|b| b.is_ascii_digit()));
        if looks_like_index {
            if let Ok(index) = text.parse::<usize>() {
                return Token::Index(index);
            }
        }
        Token::Property(text)
    }
}

/// Unescapes `~1` to `/` and `~0` to `~` in one left-to-right pass so that
/// `~01` decodes to `~1`, not `/` (a naive two-pass global replace would
/// double-unescape it).
fn unescape(raw: &str) -> String {
    if !raw.as_bytes().contains(&b'~') {
        return raw.to_string();
    }
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '~' {
            match chars.peek() {
                Some('1') => {
                    out.push('/');
                    chars.next();
                }
                Some('0') => {
                    out.push('~');
                    chars.next();
                }
                _ => out.push('~'),
            }
        } else {
            out.push(c);
        }
    }
    out
}

fn token_key(token: &Token) -> String {
    match token {
        Token::Property(p) => p.clone(),
        Token::Index(i) => i.to_string(),
        Token::NextIndex => "-".to_string(),
    }
}

fn tokenize(pointer: &str) -> Result<Vec<Token>, ()> {
    if pointer.is_empty() {
        return Ok(Vec::new());
    }
    if !pointer.starts_with('/') {
        return Err(());
    }
    Ok(pointer.split('/').skip(1).map(Token::parse).collect())
}

fn find_kvp(tree: &JsonTree, object: NodeId, key: &str) -> Option<NodeId> {
    tree.keys(object).find(|&kvp| tree.key_text(kvp) == key)
}

/// Read-only resolution: returns the target position, or [`NIL`] if any
/// segment is missing, kind-mismatched, or out of range.
#[must_use]
pub(crate) fn resolve(tree: &JsonTree, pointer: &str) -> NodeId {
    resolve_mut(tree, pointer).map(|r| r.node).unwrap_or(NIL)
}

/// The result of resolving a JSON Pointer for a mutation.
pub(crate) struct Resolved {
    /// The resolved position, or [`NIL`] when the final token names an
    /// object key that doesn't exist yet, an array index one past the end,
    /// or `-`.
    pub(crate) node: NodeId,
    /// Every container ancestor of `node` (or, when `node` is [`NIL`], of
    /// the position it would occupy), from the root down to and including
    /// the immediate parent. For a value held by an `Object` this includes
    /// both the `Object` and the wrapping `KeyValuePair`.
    pub(crate) parents: Vec<NodeId>,
    /// The final token's text, unescaped. Used by `add` when creating a new
    /// object key, and carried along for array tokens for uniform handling.
    pub(crate) key: String,
}

/// Resolution for the mutation engine: also reports the ancestor chain and,
/// for a not-yet-existing target, the key/index that would create it.
///
/// # Errors
///
/// Returns [`PathError`] when an intermediate segment is missing or
/// kind-mismatched, when `-` appears anywhere but the final token, or when
/// an array index is out of range (strictly past one-past-the-end).
pub(crate) fn resolve_mut(tree: &JsonTree, pointer: &str) -> Result<Resolved, PathError> {
    let tokens =
        tokenize(pointer).map_err(|()| PathError::new(pointer, "pointer must be empty or start with '/'"))?;

    if tokens.is_empty() {
        if tree.is_empty() {
            return Err(PathError::new(pointer, "tree is empty"));
        }
        return Ok(Resolved { node: ROOT, parents: Vec::new(), key: String::new() });
    }
    if tree.is_empty() {
        return Err(PathError::new(pointer, "tree is empty"));
    }

    let mut parents = Vec::with_capacity(tokens.len());
    let mut pos = ROOT;
    let last = tokens.len() - 1;

    for (i, token) in tokens.iter().enumerate() {
        let is_last = i == last;
        match tree.kind(pos) {
            Kind::Object => {
                let key = token_key(token);
                match find_kvp(tree, pos, &key) {
                    Some(kvp) => {
                        parents.push(pos);
                        let value_pos = tree.value_node(kvp);
                        parents.push(kvp);
                        if is_last {
                            return Ok(Resolved { node: value_pos, parents, key });
                        }
                        pos = value_pos;
                    }
                    None => {
                        if is_last {
                            parents.push(pos);
                            return Ok(Resolved { node: NIL, parents, key });
                        }
                        return Err(PathError::new(pointer, format!("missing object key {key:?}")));
                    }
                }
            }
            Kind::Array => {
                let len = tree.sons(pos).count();
                match token {
                    Token::Property(p) => {
                        return Err(PathError::new(
                            pointer,
                            format!("array cannot be indexed by property {p:?}"),
                        ));
                    }
                    Token::NextIndex => {
                        if !is_last {
                            return Err(PathError::new(pointer, "'-' is only valid as the final pointer token"));
                        }
                        parents.push(pos);
                        return Ok(Resolved { node: NIL, parents, key: "-".to_string() });
                    }
                    Token::Index(index) => {
                        if *index < len {
                            let target = tree.sons(pos).nth(*index).expect("index already bounds-checked");
                            if is_last {
                                parents.push(pos);
                                return Ok(Resolved { node: target, parents, key: index.to_string() });
                            }
                            parents.push(pos);
                            pos = target;
                        } else if *index == len && is_last {
                            parents.push(pos);
                            return Ok(Resolved { node: NIL, parents, key: index.to_string() });
                        } else {
                            return Err(PathError::new(pointer, format!("array index {index} out of range")));
                        }
                    }
                }
            }
            _ => return Err(PathError::new(pointer, "cannot descend into a scalar value")),
        }
    }
    unreachable!("every branch above returns once the final token is processed")
}

// Tests exercising pointer resolution through the public `JsonTree` surface
// (`contains`, `kind_at`, `add`, `replace`, ...) live in
// `tests/pointer_tests.rs`. What's left here checks the `Resolved.parents`
// shape, which only the mutation engine inside this crate ever sees.
#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Kind;

    #[test]
    fn parents_include_the_wrapping_key_value_pair() {
        let tree = JsonTree::parse(r#"{"a":{"b":1}}"#).unwrap();
        let resolved = resolve_mut(&tree, "/a/b").unwrap();
        // root Object, "a"'s KeyValuePair, the nested Object, "b"'s KeyValuePair.
        assert_eq!(resolved.parents.len(), 4);
        assert_eq!(tree.kind(*resolved.parents.last().unwrap()), Kind::KeyValuePair);
    }

    #[test]
    fn dash_resolves_to_nil_only_as_final_array_token() {
        let tree = JsonTree::parse(r#"{"arr":[1,2,3]}"#).unwrap();
        let resolved = resolve_mut(&tree, "/arr/-").unwrap();
        assert_eq!(resolved.node, NIL);
        assert!(resolve_mut(&tree, "/arr/-/x").is_err());
    }

    #[test]
    fn out_of_range_array_index_is_a_path_error() {
        let tree = JsonTree::parse(r#"{"arr":[1,2,3]}"#).unwrap();
        assert!(resolve_mut(&tree, "/arr/9").is_err());
        assert_eq!(resolve_mut(&tree, "/arr/3").unwrap().node, NIL);
    }
}
