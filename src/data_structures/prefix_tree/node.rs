// Copyright (c) 2025 Prefix Complete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the prefix tree.
//!
//! Each node owns its children by value, so the structure is a strict tree:
//! a node has exactly one parent and there is no way to express a cycle.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

/// A node in the prefix tree.
///
/// A node represents one character edge. Terminal nodes mark the end of a
/// word that was added to the tree.
#[derive(Default)]
pub struct TreeNode {
    /// Character this node represents (`None` for the root)
    character: Option<char>,

    /// Whether the path from the root to this node spells an added word
    is_terminal: bool,

    /// Child nodes keyed by character, kept in character order
    children: BTreeMap<char, TreeNode>,
}

impl TreeNode {
    /// Creates a node for `character` with no children.
    pub fn new(character: char) -> Self {
        Self {
            character: Some(character),
            is_terminal: false,
            children: BTreeMap::new(),
        }
    }

    /// Creates the sentinel root node.
    pub fn root() -> Self {
        Self::default()
    }

    /// The character this node represents, `None` for the root.
    pub fn character(&self) -> Option<char> {
        self.character
    }

    /// Whether this node terminates an added word.
    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    pub(crate) fn set_terminal(&mut self, terminal: bool) {
        self.is_terminal = terminal;
    }

    /// Returns the child for `character`, if one exists.
    ///
    /// Never creates a node.
    pub fn child(&self, character: char) -> Option<&TreeNode> {
        self.children.get(&character)
    }

    /// Inserts `node` as the child for `character`.
    ///
    /// An existing child for that character is replaced and returned.
    pub fn add_child(&mut self, character: char, node: TreeNode) -> Option<TreeNode> {
        self.children.insert(character, node)
    }

    /// Returns the child for `character`, creating an empty one if needed.
    pub fn child_or_insert(&mut self, character: char) -> &mut TreeNode {
        self.children
            .entry(character)
            .or_insert_with(|| TreeNode::new(character))
    }

    /// Iterates over the children in ascending character order.
    pub fn children(&self) -> btree_map::Iter<'_, char, TreeNode> {
        self.children.iter()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

impl TreeNode {
    /// Copies this node without its children.
    fn shallow_clone(&self) -> Self {
        Self {
            character: self.character,
            is_terminal: self.is_terminal,
            children: BTreeMap::new(),
        }
    }
}

impl Clone for TreeNode {
    // Copies nodes in pre-order into a flat list, then attaches them to their
    // parents from the back. A parent always precedes its children, so every
    // subtree is complete before it is moved into place.
    fn clone(&self) -> Self {
        let mut copies = vec![self.shallow_clone()];
        let mut links: Vec<(usize, char)> = vec![(0, '\0')];
        let mut pending = vec![(self, 0usize)];

        while let Some((node, index)) = pending.pop() {
            for (c, child) in node.children() {
                copies.push(child.shallow_clone());
                links.push((index, *c));
                pending.push((child, copies.len() - 1));
            }
        }

        while copies.len() > 1 {
            let (parent, c) = links[copies.len() - 1];
            if let Some(node) = copies.pop() {
                copies[parent].children.insert(c, node);
            }
        }
        copies.pop().unwrap_or_default()
    }
}

impl fmt::Debug for TreeNode {
    // Summarises instead of recursing, so deep trees format safely.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeNode")
            .field("character", &self.character)
            .field("is_terminal", &self.is_terminal)
            .field("children", &self.children.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Drop for TreeNode {
    // Flattens the subtree so dropping a long chain does not recurse per level.
    fn drop(&mut self) {
        let mut pending: Vec<TreeNode> = std::mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}
