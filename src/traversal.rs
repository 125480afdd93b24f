//! Ways of walking every item in a [`Tree`]. Everything here uses an explicit stack instead of
//! recursion because the tree's height is only bounded by its length.

use crate::tree::{Node, Tree};

/// Iterates over a tree's items in preorder (node, left subtree, right subtree) without
/// recursing. Created by [`Tree::iter`] or by iterating over `&Tree`.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes in first so the whole left subtree comes out before it.
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        Some(&node.value)
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Tree<T> {
    /// Lazily iterates over the items in preorder. This is the order `for item in &tree` uses.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    /// let items: Vec<_> = tree.iter().copied().collect();
    ///
    /// assert_eq!(items, vec![2, 1, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            stack: self.root.as_deref().into_iter().collect(),
        }
    }

    /// Every item with each node before its left subtree and its left subtree before its right
    /// subtree.
    pub fn preorder(&self) -> Vec<&T> {
        self.iter().collect()
    }

    /// Every item with each node between its left and right subtrees. For a valid tree this is
    /// sorted, equal items appearing in the order they were added.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let tree: Tree<_> = [5, 4, 6, 3, 8, 19].into_iter().collect();
    ///
    /// assert_eq!(tree.inorder(), vec![&3, &4, &5, &6, &8, &19]);
    /// ```
    pub fn inorder(&self) -> Vec<&T> {
        let mut items = Vec::with_capacity(self.len);
        let mut stack = Vec::new();
        let mut current = self.root.as_deref();
        loop {
            while let Some(node) = current {
                stack.push(node);
                current = node.left.as_deref();
            }
            let Some(node) = stack.pop() else {
                return items;
            };
            items.push(&node.value);
            current = node.right.as_deref();
        }
    }

    /// Every item with each node after both of its subtrees.
    pub fn postorder(&self) -> Vec<&T> {
        self.postorder_nodes()
            .into_iter()
            .map(|node| &node.value)
            .collect()
    }

    /// Every item sorted by depth, the root first, each level from left to right.
    ///
    /// Each level is found by walking down from the root again so this costs `O(N * height)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let tree: Tree<_> = [5, 4, 6, 3, 8, 19].into_iter().collect();
    ///
    /// assert_eq!(tree.levelorder(), vec![&5, &4, &6, &3, &8, &19]);
    /// ```
    pub fn levelorder(&self) -> Vec<&T> {
        let mut items = Vec::with_capacity(self.len);
        for depth in 0..=self.height() {
            self.collect_level(depth, &mut items);
        }
        items
    }

    /// Pushes the items found exactly `depth` edges below the root, left to right.
    fn collect_level<'a>(&'a self, depth: usize, items: &mut Vec<&'a T>) {
        let mut stack: Vec<(&Node<T>, usize)> =
            self.root.as_deref().map(|n| (n, 0)).into_iter().collect();
        while let Some((node, node_depth)) = stack.pop() {
            if node_depth == depth {
                items.push(&node.value);
                continue;
            }
            stack.extend(node.right.as_deref().map(|n| (n, node_depth + 1)));
            stack.extend(node.left.as_deref().map(|n| (n, node_depth + 1)));
        }
    }

    /// Every node, children before parents and left subtrees before right ones.
    pub(crate) fn postorder_nodes(&self) -> Vec<&Node<T>> {
        // Visiting node, right, left and reversing gives left, right, node.
        let mut nodes = Vec::with_capacity(self.len);
        let mut stack: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            nodes.push(node);
            stack.extend(node.left.as_deref());
            stack.extend(node.right.as_deref());
        }
        nodes.reverse();
        nodes
    }
}
