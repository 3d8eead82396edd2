//! The packed node array and the navigation primitives over it.

use crate::atom::AtomTable;
use crate::node::{self, Kind};

/// Position of a node within a [`JsonTree`]'s node array.
///
/// Positions are **not** stable across mutations: every structural edit can
/// shift the positions of nodes that follow it. Callers that need to refer
/// to a node across a mutation should re-resolve a JSON Pointer instead of
/// holding on to a `NodeId`.
pub type NodeId = usize;

/// The root of every non-empty tree is always at this position.
pub const ROOT: NodeId = 0;

/// Sentinel meaning "no such node" — returned by the read resolver and used
/// internally wherever "not found" needs to be distinguished from a real
/// position. No tree built by this crate will ever reach this many nodes.
pub const NIL: NodeId = usize::MAX;

/// An in-memory JSON document stored as a flat, pre-order array of 32-bit
/// node words plus the atom table its string/number/key atoms are interned
/// into.
///
/// See the crate documentation for the packed representation this type
/// implements.
#[derive(Debug, Clone, Default)]
pub struct JsonTree {
    pub(crate) nodes: Vec<u32>,
    pub(crate) atoms: AtomTable,
}

impl JsonTree {
    pub(crate) fn from_parts(nodes: Vec<u32>, atoms: AtomTable) -> Self {
        Self { nodes, atoms }
    }

    /// Creates the empty tree (no root node at all). This is the state a
    /// tree reaches after `remove("")` removes the root.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// `true` if this tree has no nodes (the result of removing the root).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total number of node words in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Read-only access to the atom table.
    #[must_use]
    pub fn atoms(&self) -> &AtomTable {
        &self.atoms
    }

    pub(crate) fn atoms_mut(&mut self) -> &mut AtomTable {
        &mut self.atoms
    }

    pub(crate) fn nodes(&self) -> &[u32] {
        &self.nodes
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut Vec<u32> {
        &mut self.nodes
    }

    /// Returns the kind of the node at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    #[must_use]
    pub fn kind(&self, pos: NodeId) -> Kind {
        node::kind_of(self.nodes[pos])
    }

    pub(crate) fn operand(&self, pos: NodeId) -> u32 {
        node::operand_of(self.nodes[pos])
    }

    /// Returns the number of node words the subtree rooted at `pos` spans,
    /// counting `pos` itself: 1 for atoms, the stored operand for containers.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    #[must_use]
    pub fn span(&self, pos: NodeId) -> usize {
        let kind = self.kind(pos);
        if kind.is_atom() {
            1
        } else {
            self.operand(pos) as usize
        }
    }

    /// Position of the first direct child of the container at `pos`.
    ///
    /// Only meaningful when `pos` names a container with at least one child;
    /// callers normally reach children through [`JsonTree::sons`] instead.
    #[must_use]
    pub fn first_son(&self, pos: NodeId) -> NodeId {
        pos + 1
    }

    /// Position immediately following the subtree rooted at `pos`: the next
    /// sibling, or the end of the enclosing container.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    #[must_use]
    pub fn next_child(&self, pos: NodeId) -> NodeId {
        pos + self.span(pos)
    }

    /// Iterates the positions of the direct children of the container at
    /// `container`. For an `Object` these are its `KeyValuePair` markers; for
    /// an `Array` they are the element subtrees.
    #[must_use]
    pub fn sons(&self, container: NodeId) -> Sons<'_> {
        let end = container + self.span(container);
        Sons { tree: self, pos: container + 1, end }
    }

    /// Iterates the positions of an object's `KeyValuePair` markers. An alias
    /// for [`JsonTree::sons`] kept as a separate name because it only makes
    /// sense on an `Object` (an object's direct children are always
    /// `KeyValuePair`s).
    #[must_use]
    pub fn keys(&self, object: NodeId) -> Sons<'_> {
        self.sons(object)
    }

    /// Returns the position of the `String` node holding a `KeyValuePair`'s
    /// key.
    #[must_use]
    pub fn key_node(&self, key_value_pair: NodeId) -> NodeId {
        key_value_pair + 1
    }

    /// Returns the position of a `KeyValuePair`'s value subtree.
    #[must_use]
    pub fn value_node(&self, key_value_pair: NodeId) -> NodeId {
        key_value_pair + 2
    }

    /// Returns the interned text of a `KeyValuePair`'s key.
    ///
    /// # Panics
    ///
    /// Panics if `key_value_pair` is not a `KeyValuePair` node.
    #[must_use]
    pub fn key_text(&self, key_value_pair: NodeId) -> &str {
        assert_eq!(self.kind(key_value_pair), Kind::KeyValuePair);
        let key_pos = self.key_node(key_value_pair);
        self.atoms.get(self.operand(key_pos))
    }

    /// Finds the parent of `n` by scanning backwards for the nearest
    /// container whose span covers `n`.
    ///
    /// `O(n)`: acceptable because every mutation path obtains its ancestor
    /// chain from the pointer resolver instead of calling this in a loop
    /// (see `DESIGN.md`).
    ///
    /// Returns `None` for the root (it has no parent) and panics if `n` is
    /// out of bounds.
    #[must_use]
    pub fn parent(&self, n: NodeId) -> Option<NodeId> {
        assert!(n < self.nodes.len(), "position out of bounds");
        if n == ROOT {
            return None;
        }
        let mut p = n;
        loop {
            if p == 0 {
                return None;
            }
            p -= 1;
            let kind = self.kind(p);
            if kind.is_container() && p + self.span(p) > n {
                return Some(p);
            }
        }
    }
}

/// Iterator over the direct children of a container, produced by
/// [`JsonTree::sons`]/[`JsonTree::keys`].
pub struct Sons<'a> {
    tree: &'a JsonTree,
    pos: NodeId,
    end: NodeId,
}

impl Iterator for Sons<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if self.pos >= self.end {
            return None;
        }
        let current = self.pos;
        self.pos = self.tree.next_child(self.pos);
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use crate::JsonTree;

    #[test]
    fn navigates_a_nested_document() {
        let tree = JsonTree::parse(r#"{"a":[1,false,{"key":[4,5]},4]}"#).unwrap();
        assert_eq!(tree.atoms().len(), 5);
        assert_eq!(tree.kind(0), crate::node::Kind::Object);

        let a = tree.keys(0).next().unwrap();
        assert_eq!(tree.key_text(a), "a");
        let array = tree.value_node(a);
        let elements: Vec<_> = tree.sons(array).collect();
        assert_eq!(elements.len(), 4);
    }

    #[test]
    fn parent_of_root_is_none() {
        let tree = JsonTree::parse("1").unwrap();
        assert_eq!(tree.parent(0), None);
    }

    #[test]
    fn parent_of_array_element_is_the_array() {
        let tree = JsonTree::parse("[1,2,3]").unwrap();
        let array = 0;
        let first_element = tree.first_son(array);
        assert_eq!(tree.parent(first_element), Some(array));
    }
}
