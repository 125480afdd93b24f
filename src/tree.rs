//! The [`Tree`] itself plus the plumbing every container needs: counting, clearing, bulk
//! construction, cloning, formatting and dropping.

use std::fmt;

/// An owned, possibly empty, subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// One stored item and the subtrees hanging off of it. There is no parent pointer. Anything
/// that walks down the tree remembers where it came from itself.
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }
}

/// A Binary Search Tree holding items of type `T`. Items are ordered by `T`'s [`Ord`]
/// implementation, which every searching or mutating operation requires. Duplicates are kept as
/// separate nodes.
///
/// # Examples
///
/// ```
/// use linked_bst::Tree;
///
/// let mut tree = Tree::new();
/// tree.add(2);
/// tree.add(1);
/// tree.add(2);
///
/// assert_eq!(tree.len(), 3);
/// assert_eq!(tree.inorder(), vec![&1, &2, &2]);
/// ```
pub struct Tree<T> {
    pub(crate) root: Link<T>,
    pub(crate) len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        free(self.root.take());
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// How many items are stored, counting every duplicate.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no items at all.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every item.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let mut tree: Tree<_> = (0..10).collect();
    /// tree.clear();
    ///
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.find(&3), None);
    /// ```
    pub fn clear(&mut self) {
        log::debug!("clearing tree of {} items", self.len);
        free(self.root.take());
        self.len = 0;
    }
}

/// Drops a subtree one node at a time. Letting `Box` do it would recurse once per level which
/// overflows the stack on a tree built from sorted input.
pub(crate) fn free<T>(root: Link<T>) {
    let mut stack: Vec<Box<Node<T>>> = root.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        // Children are always finished before their parent so the parent can take its
        // subtrees off the top of `built` (right first, it was finished last).
        let mut built: Vec<Box<Node<T>>> = Vec::new();
        for node in self.postorder_nodes() {
            let right = node.right.as_ref().and_then(|_| built.pop());
            let left = node.left.as_ref().and_then(|_| built.pop());
            built.push(Box::new(Node {
                value: node.value.clone(),
                left,
                right,
            }));
        }

        Self {
            root: built.pop(),
            len: self.len,
        }
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("items", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

/// Draws the tree rotated 90 degrees counterclockwise: the root is in the left-most column,
/// larger items are above their parent and smaller ones below. Every level of depth adds a
/// `"| "` in front of the item.
///
/// ```
/// use linked_bst::Tree;
///
/// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
/// assert_eq!(tree.to_string(), "| 3\n2\n| 1\n");
/// ```
impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = Vec::new();
        let mut current = self.root.as_deref().map(|n| (n, 0));
        loop {
            while let Some((node, depth)) = current {
                stack.push((node, depth));
                current = node.right.as_deref().map(|n| (n, depth + 1));
            }
            let Some((node, depth)) = stack.pop() else {
                return Ok(());
            };
            writeln!(f, "{}{}", "| ".repeat(depth), node.value)?;
            current = node.left.as_deref().map(|n| (n, depth + 1));
        }
    }
}

/// Builds a tree by [`add`][Tree::add]ing the items in iteration order.
impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}
