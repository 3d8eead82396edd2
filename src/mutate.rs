//! The six RFC 6902-style structural mutation primitives: `test`, `replace`,
//! `remove`, `add`, `copy`, `move`.
//!
//! Every mutation resolves its path(s) through [`pointer::resolve_mut`],
//! splices the node array, and repairs every ancestor's span via
//! [`update_parents`] — the one place allowed to write a container's
//! operand, per the design note in `DESIGN.md`.

use crate::atom::AtomTable;
use crate::error::PathError;
use crate::node::{self, Kind};
use crate::pointer::{self, Resolved};
use crate::tree::{JsonTree, NodeId, NIL};

/// Where the nodes being spliced in come from: another tree entirely (needs
/// its atom ids re-interned into this tree's table) or a slice already local
/// to this tree (already interned, just relocated).
enum Source<'a> {
    Foreign(&'a JsonTree),
    Local(Vec<u32>),
}

fn materialize(tree: &mut JsonTree, source: Source<'_>) -> Vec<u32> {
    match source {
        Source::Foreign(value) => remap_slice(value.nodes(), value.atoms(), tree.atoms_mut()),
        Source::Local(words) => words,
    }
}

/// Copies `nodes` into `dst`, re-interning every atom id they carry through
/// `dst`'s atom table so the copy never leaks an id from `src`'s table.
fn remap_slice(nodes: &[u32], src: &AtomTable, dst: &mut AtomTable) -> Vec<u32> {
    nodes
        .iter()
        .map(|&word| {
            let kind = node::kind_of(word);
            if matches!(kind, Kind::Int | Kind::Float | Kind::String) {
                let text = src.get(node::operand_of(word));
                node::pack(kind, dst.intern(text))
            } else {
                word
            }
        })
        .collect()
}

/// Clones the raw node words of the subtree at `from`, for a same-tree
/// relocation (`copy`/`move`): the atom ids are already valid in this
/// tree's table, so no re-interning is needed.
fn extract_subtree(tree: &JsonTree, from: NodeId) -> Vec<u32> {
    let span = tree.span(from);
    tree.nodes()[from..from + span].to_vec()
}

pub(crate) fn splice(tree: &mut JsonTree, at: NodeId, remove_len: usize, insert: Vec<u32>) {
    tree.nodes_mut().splice(at..at + remove_len, insert);
}

/// Adds the signed `delta` to the operand of every container in `parents`,
/// restoring each ancestor's span-equals-contents-sum invariant after a
/// splice. The only place in the crate allowed to overwrite a container's
/// stored span.
pub(crate) fn update_parents(tree: &mut JsonTree, parents: &[NodeId], delta: i64) {
    for &p in parents {
        let word = tree.nodes()[p];
        let kind = node::kind_of(word);
        let operand = node::operand_of(word) as i64 + delta;
        debug_assert!(operand > 0, "mutation would make an ancestor's span non-positive");
        tree.nodes_mut()[p] = node::pack(kind, operand as u32);
    }
}

/// RFC 6902 `replace`. Requires `path` to already resolve.
///
/// # Errors
///
/// [`PathError`] if `path` does not resolve to an existing node.
pub(crate) fn replace(tree: &mut JsonTree, path: &str, value: &JsonTree) -> Result<(), PathError> {
    let resolved = pointer::resolve_mut(tree, path)?;
    if resolved.node == NIL {
        return Err(PathError::new(path, "replace target does not exist"));
    }
    let old_span = tree.span(resolved.node);
    let new_nodes = materialize(tree, Source::Foreign(value));
    let delta = new_nodes.len() as i64 - old_span as i64;
    splice(tree, resolved.node, old_span, new_nodes);
    update_parents(tree, &resolved.parents, delta);
    Ok(())
}

/// RFC 6902 `remove`.
///
/// # Errors
///
/// [`PathError`] if `path` does not resolve to an existing node.
pub(crate) fn remove(tree: &mut JsonTree, path: &str) -> Result<(), PathError> {
    let resolved = pointer::resolve_mut(tree, path)?;
    if resolved.node == NIL {
        return Err(PathError::new(path, "remove target does not exist"));
    }
    remove_resolved(tree, resolved.node, &resolved.parents);
    Ok(())
}

/// The body of `remove`, reusable on positions that have already been
/// relocated past an earlier splice (as `move` needs to).
///
/// When the target is an object's value, the whole enclosing `KeyValuePair`
/// — marker, key, and value, `2 + span` words starting two positions before
/// `node` — is spliced out as one unit; leaving the marker behind would
/// strand a container word whose stored span no longer describes anything.
/// This is the exact inverse of how `add` creates a key (see `perform_add`),
/// which is what makes `add(path, v); remove(path)` a true no-op.
fn remove_resolved(tree: &mut JsonTree, node: NodeId, parents: &[NodeId]) {
    let span = tree.span(node);
    let is_object_value = parents.last().is_some_and(|&p| tree.kind(p) == Kind::KeyValuePair);

    if is_object_value {
        let kvp_pos = node - 2;
        splice(tree, kvp_pos, span + 2, Vec::new());
        update_parents(tree, &parents[..parents.len() - 1], -(span as i64 + 2));
    } else {
        splice(tree, node, span, Vec::new());
        update_parents(tree, parents, -(span as i64));
    }
}

/// Shared body of `add`/`copy`/`move`: creates a new object key, appends to
/// or inserts into an array, or falls back to `replace` semantics for an
/// existing non-array-indexed target (the Open Question resolution in
/// `SPEC_FULL.md`). Returns the position the new content starts at and the
/// signed length delta it introduced, which `move` needs to relocate the
/// source it is about to remove.
fn perform_add(
    tree: &mut JsonTree,
    path: &str,
    resolved: Resolved,
    source: Source<'_>,
) -> Result<(NodeId, i64), PathError> {
    if resolved.node == NIL {
        let &parent = resolved
            .parents
            .last()
            .ok_or_else(|| PathError::new(path, "cannot add at a path with no parent"))?;
        return match tree.kind(parent) {
            Kind::Object => {
                let end = tree.next_child(parent);
                let key_id = tree.atoms_mut().intern(&resolved.key);
                let value_nodes = materialize(tree, source);
                let kvp_span = (2 + value_nodes.len()) as u32;
                let mut insert = Vec::with_capacity(kvp_span as usize);
                insert.push(node::pack(Kind::KeyValuePair, kvp_span));
                insert.push(node::pack(Kind::String, key_id));
                insert.extend(value_nodes);
                let delta = insert.len() as i64;
                splice(tree, end, 0, insert);
                update_parents(tree, &resolved.parents, delta);
                Ok((end, delta))
            }
            Kind::Array => {
                let end = tree.next_child(parent);
                let value_nodes = materialize(tree, source);
                let delta = value_nodes.len() as i64;
                splice(tree, end, 0, value_nodes);
                update_parents(tree, &resolved.parents, delta);
                Ok((end, delta))
            }
            _ => unreachable!("the resolver only returns NIL under an Object or Array parent"),
        };
    }

    let parent_is_array = resolved.parents.last().is_some_and(|&p| tree.kind(p) == Kind::Array);
    if parent_is_array {
        let at = resolved.node;
        let value_nodes = materialize(tree, source);
        let delta = value_nodes.len() as i64;
        splice(tree, at, 0, value_nodes);
        update_parents(tree, &resolved.parents, delta);
        return Ok((at, delta));
    }

    // Target exists and is not an array-indexed insert: collapse to replace.
    let at = resolved.node;
    let old_span = tree.span(at);
    let value_nodes = materialize(tree, source);
    let delta = value_nodes.len() as i64 - old_span as i64;
    splice(tree, at, old_span, value_nodes);
    update_parents(tree, &resolved.parents, delta);
    Ok((at, delta))
}

/// RFC 6902 `add`.
///
/// # Errors
///
/// [`PathError`] if an intermediate segment of `path` is missing.
pub(crate) fn add(tree: &mut JsonTree, path: &str, value: &JsonTree) -> Result<(), PathError> {
    let resolved = pointer::resolve_mut(tree, path)?;
    perform_add(tree, path, resolved, Source::Foreign(value)).map(|_| ())
}

fn is_ancestor(candidate: NodeId, parents: &[NodeId]) -> bool {
    parents.contains(&candidate)
}

/// RFC 6902 `copy`.
///
/// # Errors
///
/// [`PathError`] if `from` does not resolve, if an intermediate segment of
/// `path` is missing, or if `from` is an ancestor of `path`.
pub(crate) fn copy(tree: &mut JsonTree, from: &str, path: &str) -> Result<(), PathError> {
    let from_resolved = pointer::resolve_mut(tree, from)?;
    if from_resolved.node == NIL {
        return Err(PathError::new(from, "copy source does not exist"));
    }
    let path_resolved = pointer::resolve_mut(tree, path)?;

    if from_resolved.node == path_resolved.node {
        return Ok(());
    }
    if is_ancestor(from_resolved.node, &path_resolved.parents) {
        return Err(PathError::new(path, "copy source is an ancestor of the destination"));
    }

    let subtree = extract_subtree(tree, from_resolved.node);
    perform_add(tree, path, path_resolved, Source::Local(subtree)).map(|_| ())
}

/// RFC 6902 `move`. Equivalent to `copy(from, path)` followed by
/// `remove(from)`, executed as one splice sequence because the copy shifts
/// every position at or after its insertion point — including, possibly,
/// `from` itself.
///
/// # Errors
///
/// Same as [`copy`].
pub(crate) fn r#move(tree: &mut JsonTree, from: &str, path: &str) -> Result<(), PathError> {
    let from_resolved = pointer::resolve_mut(tree, from)?;
    if from_resolved.node == NIL {
        return Err(PathError::new(from, "move source does not exist"));
    }
    let path_resolved = pointer::resolve_mut(tree, path)?;

    if from_resolved.node == path_resolved.node {
        return Ok(());
    }
    if is_ancestor(from_resolved.node, &path_resolved.parents) {
        return Err(PathError::new(path, "move source is an ancestor of the destination"));
    }

    let subtree = extract_subtree(tree, from_resolved.node);
    let subtree_len = subtree.len();
    let (insertion_point, delta) = perform_add(tree, path, path_resolved, Source::Local(subtree))?;

    let shift = |pos: NodeId| -> NodeId {
        if pos >= insertion_point {
            (pos as i64 + delta) as usize
        } else {
            pos
        }
    };

    let shifted_node = shift(from_resolved.node);

    // The copy landed on top of (or inside) the source: the move collapsed
    // into a replace and there is nothing left to remove.
    if shifted_node >= insertion_point && shifted_node < insertion_point + subtree_len {
        return Ok(());
    }

    let shifted_parents: Vec<NodeId> = from_resolved.parents.iter().map(|&p| shift(p)).collect();
    remove_resolved(tree, shifted_node, &shifted_parents);
    Ok(())
}

/// RFC 6902 `test`. Compares the subtree at `path` against `value`
/// structurally: kinds must match, atom kinds compare by text (the two
/// trees have different atom tables), containers compare by span and then
/// recurse element-wise. Object comparison is order-sensitive; canonicalize
/// both sides through [`crate::JsonTree::sorted`] first if that isn't
/// wanted.
///
/// # Errors
///
/// [`PathError`] if `path` does not resolve to an existing node.
pub(crate) fn test(tree: &JsonTree, path: &str, value: &JsonTree) -> Result<bool, PathError> {
    let resolved = pointer::resolve_mut(tree, path)?;
    if resolved.node == NIL {
        return Err(PathError::new(path, "test target does not exist"));
    }
    Ok(structurally_equal(tree, resolved.node, value, crate::tree::ROOT))
}

fn structurally_equal(a: &JsonTree, a_pos: NodeId, b: &JsonTree, b_pos: NodeId) -> bool {
    let a_kind = a.kind(a_pos);
    if a_kind != b.kind(b_pos) {
        return false;
    }
    if a_kind.is_atom() {
        return match a_kind {
            Kind::Null => true,
            Kind::Bool => a.operand(a_pos) == b.operand(b_pos),
            Kind::Int | Kind::Float | Kind::String => {
                a.atoms().get(a.operand(a_pos)) == b.atoms().get(b.operand(b_pos))
            }
            Kind::Object | Kind::Array | Kind::KeyValuePair => unreachable!("just checked is_atom"),
        };
    }
    if a.span(a_pos) != b.span(b_pos) {
        return false;
    }
    match a_kind {
        Kind::KeyValuePair => {
            a.key_text(a_pos) == b.key_text(b_pos)
                && structurally_equal(a, a.value_node(a_pos), b, b.value_node(b_pos))
        }
        Kind::Object | Kind::Array => {
            a.sons(a_pos).zip(b.sons(b_pos)).all(|(ac, bc)| structurally_equal(a, ac, b, bc))
        }
        _ => unreachable!("atoms handled above"),
    }
}

// Tests exercising the public `JsonTree` mutation methods live in
// `tests/mutation_tests.rs`; the splice/update_parents/perform_add helpers
// above aren't reachable from outside the crate, so there is nothing
// private left here worth a `#[cfg(test)] mod tests` block.
