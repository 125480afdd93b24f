//! How tall the tree is, whether that's reasonable for how much it holds, and rebuilding it when
//! it isn't. Also home to [`Tree::range_find`] which, like the rest of this module, works off of
//! the sorted items.

use crate::tree::{Link, Node, Tree};

impl<T> Tree<T> {
    /// The number of edges on the longest path from the root down to a leaf. Both an empty tree
    /// and a tree of a single item have a height of 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), 0);
    ///
    /// tree.add(1);
    /// assert_eq!(tree.height(), 0);
    ///
    /// tree.add(2);
    /// assert_eq!(tree.height(), 1);
    /// ```
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node<T>, usize)> =
            self.root.as_deref().map(|n| (n, 0)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }
        height
    }

    /// Whether the tree is short enough for how many items it holds: `height < 2 * lg(2 * (N +
    /// 1)) - 1`.
    ///
    /// This only looks at the overall height. Individual subtrees may still be lopsided, unlike
    /// in an AVL tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let mut tree: Tree<_> = (0..16).collect();
    /// assert!(!tree.is_balanced());
    ///
    /// tree.rebalance();
    /// assert!(tree.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        let len = self.inorder().len();
        let bound = 2.0 * (2.0 * (len as f64 + 1.0)).log2() - 1.0;
        (self.height() as f64) < bound
    }
}

impl<T> Tree<T>
where
    T: Ord,
{
    /// Rebuilds the tree from its sorted items so that it is as short as possible. The middle
    /// item becomes the root, the items before it make up the left subtree (built the same way)
    /// and the items after it make up the right subtree.
    ///
    /// When the middle item has equal items right before it, the first of them becomes the root
    /// instead so that equal items still only ever sit to the right of each other.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let mut tree: Tree<_> = (1..=7).collect();
    /// assert_eq!(tree.height(), 6);
    ///
    /// tree.rebalance();
    /// assert_eq!(tree.height(), 2);
    /// assert_eq!(tree.preorder(), vec![&4, &2, &1, &3, &6, &5, &7]);
    /// ```
    pub fn rebalance(&mut self) {
        let height_before = self.height();
        let mut items: Vec<Option<T>> = into_sorted(self.root.take())
            .into_iter()
            .map(Some)
            .collect();
        self.root = build(&mut items);
        log::debug!(
            "rebalanced {} items from height {} to {}",
            items.len(),
            height_before,
            self.height()
        );
    }

    /// Every stored item `x` with `low <= x <= high`, sorted. `None` rather than an empty `Vec`
    /// when there are none.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let tree: Tree<_> = [5, 4, 6, 3, 8, 19].into_iter().collect();
    ///
    /// assert_eq!(tree.range_find(&4, &8), Some(vec![&4, &5, &6, &8]));
    /// assert_eq!(tree.range_find(&9, &18), None);
    /// ```
    pub fn range_find(&self, low: &T, high: &T) -> Option<Vec<&T>> {
        let found: Vec<&T> = self
            .inorder()
            .into_iter()
            .filter(|item| low <= *item && *item <= high)
            .collect();
        (!found.is_empty()).then_some(found)
    }
}

/// Takes the subtree apart, returning its items in order. Consumes the nodes as it goes without
/// recursing.
fn into_sorted<T>(root: Link<T>) -> Vec<T> {
    let mut items = Vec::new();
    let mut stack = Vec::new();
    let mut current = root;
    loop {
        while let Some(mut node) = current {
            current = node.left.take();
            stack.push(node);
        }
        let Some(node) = stack.pop() else {
            return items;
        };
        let Node { value, right, .. } = *node;
        items.push(value);
        current = right;
    }
}

/// Builds the shortest subtree out of sorted `items`, taking each one out as it is placed.
///
/// Subtrees down the right are built in a loop and only left subtrees recurse. A left subtree
/// never holds more than half of the items so the recursion is at most `lg(N)` deep, even when
/// runs of equal items make the tree itself tall.
fn build<T>(items: &mut [Option<T>]) -> Link<T>
where
    T: Ord,
{
    let mut root = None;
    let mut link = &mut root;
    let mut rest = items;
    while !rest.is_empty() {
        let mid = rest.len() / 2;
        // Back up to the first of a run of equal items so none of them end up on the left.
        let mid = rest[..mid].partition_point(|item| *item < rest[mid]);
        let (left, right) = rest.split_at_mut(mid);
        let (middle, right) = right.split_at_mut(1);
        let value = middle[0].take().expect("every item is placed once");
        let node = link.insert(Box::new(Node {
            value,
            left: build(left),
            right: None,
        }));
        link = &mut node.right;
        rest = right;
    }
    root
}
