//! Canonical ordering, structural equality, and duplicate-key collapsing.
//!
//! [`sorted`] rebuilds a tree pre-order, reordering each object's children by
//! key text with a stable sort and re-interning only the atoms it actually
//! emits; [`deduplicate`] then walks the result in place, splicing out
//! shadowed keys the same way the mutation engine splices out a `remove`
//! target.

use std::ops::Deref;

use crate::atom::AtomTable;
use crate::mutate::{splice, update_parents};
use crate::node::{self, Kind};
use crate::tree::{JsonTree, NodeId, ROOT};

/// A tree whose object children are in canonical (lexicographic-by-key)
/// order at every nesting level, produced by [`sorted`].
///
/// A distinct newtype rather than a flag on [`JsonTree`], so the type system
/// tracks canonical-sortedness instead of a runtime bit. Derefs to
/// `&JsonTree` for read access; mutating a sorted tree through that deref
/// would not invalidate the type, so [`deduplicate`] is the only sanctioned
/// way to change one in place.
#[derive(Debug, Clone)]
pub struct SortedJsonTree(JsonTree);

impl Deref for SortedJsonTree {
    type Target = JsonTree;

    fn deref(&self) -> &JsonTree {
        &self.0
    }
}

impl SortedJsonTree {
    /// Recovers the plain tree, discarding the canonical-ordering guarantee.
    #[must_use]
    pub fn into_inner(self) -> JsonTree {
        self.0
    }
}

struct Builder {
    nodes: Vec<u32>,
    atoms: AtomTable,
}

impl Builder {
    fn push_atom(&mut self, src: &JsonTree, pos: NodeId) {
        let kind = src.kind(pos);
        let word = match kind {
            Kind::Null => node::pack(Kind::Null, 0),
            Kind::Bool => node::pack(Kind::Bool, src.operand(pos)),
            Kind::Int | Kind::Float | Kind::String => {
                let text = src.atoms().get(src.operand(pos));
                node::pack(kind, self.atoms.intern(text))
            }
            Kind::Object | Kind::Array | Kind::KeyValuePair => {
                unreachable!("push_atom is only called on leaf kinds")
            }
        };
        self.nodes.push(word);
    }

    fn build(&mut self, src: &JsonTree, pos: NodeId) {
        match src.kind(pos) {
            Kind::Object => {
                let patch_at = self.nodes.len();
                self.nodes.push(node::pack(Kind::Object, 0));
                let mut children: Vec<NodeId> = src.keys(pos).collect();
                children.sort_by(|&a, &b| src.key_text(a).cmp(src.key_text(b)));
                for kvp in children {
                    self.build_kvp(src, kvp);
                }
                self.patch_span(patch_at, Kind::Object);
            }
            Kind::Array => {
                let patch_at = self.nodes.len();
                self.nodes.push(node::pack(Kind::Array, 0));
                for child in src.sons(pos) {
                    self.build(src, child);
                }
                self.patch_span(patch_at, Kind::Array);
            }
            _ => self.push_atom(src, pos),
        }
    }

    fn build_kvp(&mut self, src: &JsonTree, kvp: NodeId) {
        let patch_at = self.nodes.len();
        self.nodes.push(node::pack(Kind::KeyValuePair, 0));
        self.push_atom(src, src.key_node(kvp));
        self.build(src, src.value_node(kvp));
        self.patch_span(patch_at, Kind::KeyValuePair);
    }

    fn patch_span(&mut self, patch_at: usize, kind: Kind) {
        let span = (self.nodes.len() - patch_at) as u32;
        self.nodes[patch_at] = node::pack(kind, span);
    }
}

/// Produces a new tree with every object's direct children reordered by
/// lexicographic key text, recursively, using a stable sort so equal-key
/// runs keep their original relative order. Arrays preserve element order.
/// The output's atom table is built fresh, containing only the atoms
/// actually emitted, in emission order.
#[must_use]
pub(crate) fn sorted(tree: &JsonTree) -> SortedJsonTree {
    if tree.is_empty() {
        return SortedJsonTree(JsonTree::empty());
    }
    let mut builder = Builder { nodes: Vec::with_capacity(tree.len()), atoms: AtomTable::default() };
    builder.build(tree, ROOT);
    SortedJsonTree(JsonTree::from_parts(builder.nodes, builder.atoms))
}

/// Structural equality of two sorted trees: same length, and at every index
/// either both are containers with equal span, both are `Null`, both are
/// `Bool`s with equal operand, or both are `Int`/`Float`/`String` atoms whose
/// texts (looked up in their own atom tables) are equal. `Null` and `Bool`
/// don't store atom ids in their operand, so they can't go through the
/// atom-table lookup the other leaf kinds use.
///
/// Only meaningful when both sides are canonicalized: two trees denoting the
/// same document with differently-ordered object keys will not compare equal
/// unless both have gone through [`sorted`] first.
#[must_use]
pub(crate) fn equal(a: &SortedJsonTree, b: &SortedJsonTree) -> bool {
    if a.len() != b.len() {
        return false;
    }
    for i in 0..a.len() {
        let (ka, kb) = (a.kind(i), b.kind(i));
        if ka != kb {
            return false;
        }
        if ka.is_container() {
            if a.span(i) != b.span(i) {
                return false;
            }
        } else {
            match ka {
                Kind::Null => {}
                Kind::Bool => {
                    if a.operand(i) != b.operand(i) {
                        return false;
                    }
                }
                Kind::Int | Kind::Float | Kind::String => {
                    if a.atoms().get(a.operand(i)) != b.atoms().get(b.operand(i)) {
                        return false;
                    }
                }
                Kind::Object | Kind::Array | Kind::KeyValuePair => {
                    unreachable!("just checked is_container is false")
                }
            }
        }
    }
    true
}

/// Walks `tree` and, within each object, collapses every run of equal
/// adjacent keys (adjacency holds because the tree is already sorted) down
/// to its first occurrence, splicing out the shadowed `(marker, key, value)`
/// ranges and repairing ancestor spans.
pub(crate) fn deduplicate(mut tree: SortedJsonTree) -> SortedJsonTree {
    if !tree.is_empty() {
        dedup_subtree(&mut tree.0, ROOT, &[]);
    }
    tree
}

fn dedup_subtree(tree: &mut JsonTree, pos: NodeId, ancestors: &[NodeId]) {
    match tree.kind(pos) {
        Kind::Object => {
            let mut parents = ancestors.to_vec();
            parents.push(pos);
            let mut kvp = tree.first_son(pos);
            let end_of = |t: &JsonTree| pos + t.span(pos);
            while kvp < end_of(tree) {
                let key = tree.key_text(kvp).to_string();
                let mut dup_parents = parents.clone();
                dup_parents.push(kvp);
                let mut next = tree.next_child(kvp);
                while next < end_of(tree) && tree.key_text(next) == key {
                    let dup_span = tree.span(next);
                    splice(tree, next, dup_span, Vec::new());
                    update_parents(tree, &parents, -(dup_span as i64));
                    // `next` itself is gone; the following sibling (if any) slides into its place.
                }
                dedup_subtree(tree, tree.value_node(kvp), &dup_parents);
                kvp = tree.next_child(kvp);
            }
        }
        Kind::Array => {
            let mut parents = ancestors.to_vec();
            parents.push(pos);
            let mut child = tree.first_son(pos);
            let end = pos + tree.span(pos);
            while child < end {
                dedup_subtree(tree, child, &parents);
                child = tree.next_child(child);
            }
        }
        _ => {}
    }
}

// Tests exercising `sorted`/`deduplicate`/`equal` through the public
// `JsonTree`/`SortedJsonTree` surface live in `tests/sort_tests.rs`.
