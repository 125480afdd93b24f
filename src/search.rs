//! Looking items up: by equality with [`Tree::find`], or by their neighbors with
//! [`Tree::successor`] and [`Tree::predecessor`].

use std::cmp::Ordering;

use crate::tree::{Node, Tree};

impl<T> Tree<T>
where
    T: Ord,
{
    /// Potentially finds the stored item equal to `item`. If no node holds an equal item, `None`
    /// is returned. With duplicates, the one closest to the root is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let tree: Tree<_> = [5, 4, 6].into_iter().collect();
    ///
    /// assert_eq!(tree.find(&6), Some(&6));
    /// assert_eq!(tree.find(&7), None);
    /// ```
    pub fn find(&self, item: &T) -> Option<&T> {
        self.find_node(item).map(|node| &node.value)
    }

    /// Whether an item equal to `item` is stored.
    pub fn contains(&self, item: &T) -> bool {
        self.find_node(item).is_some()
    }

    /// The smallest stored item strictly greater than `item`, if any.
    ///
    /// This looks at every node rather than following the ordering down, so it costs `O(N)` but
    /// doesn't depend on how the tree is shaped.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let tree: Tree<_> = [5, 4, 6, 3, 8, 19].into_iter().collect();
    ///
    /// assert_eq!(tree.successor(&5), Some(&6));
    /// assert_eq!(tree.successor(&7), Some(&8));
    /// assert_eq!(tree.successor(&19), None);
    /// ```
    pub fn successor(&self, item: &T) -> Option<&T> {
        self.iter()
            .filter(|candidate| *candidate > item)
            .fold(None, |best, candidate| match best {
                Some(best) if best <= candidate => Some(best),
                _ => Some(candidate),
            })
    }

    /// The largest stored item strictly less than `item`, if any. Costs `O(N)`, see
    /// [`Tree::successor`].
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let tree: Tree<_> = [5, 4, 6, 3, 8, 19].into_iter().collect();
    ///
    /// assert_eq!(tree.predecessor(&5), Some(&4));
    /// assert_eq!(tree.predecessor(&3), None);
    /// ```
    pub fn predecessor(&self, item: &T) -> Option<&T> {
        self.iter()
            .filter(|candidate| *candidate < item)
            .fold(None, |best, candidate| match best {
                Some(best) if best >= candidate => Some(best),
                _ => Some(candidate),
            })
    }

    /// Walks down from the root to the first node holding an item equal to `item`.
    pub(crate) fn find_node(&self, item: &T) -> Option<&Node<T>> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match item.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use crate::Tree;

    #[test]
    fn find_in_empty_tree() {
        let tree: Tree<i32> = Tree::new();

        assert_eq!(tree.find(&1), None);
        assert!(!tree.contains(&1));
    }

    #[test]
    fn always_adding_left() {
        let items = [10, 9, 8, 7, 6, 5, 4, 3, 2, 1];
        let mut added = Vec::new();

        let mut tree = Tree::new();
        assert!(tree.find(&10).is_none());

        for item in items {
            tree.add(item);
            added.push(item);
            for added in &added {
                assert_eq!(tree.find(added), Some(added));
            }
        }
        assert!(!tree.contains(&0));
        assert!(!tree.contains(&11));
    }

    #[test]
    fn always_adding_right() {
        let items = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let mut added = Vec::new();

        let mut tree = Tree::new();
        assert!(tree.find(&1).is_none());

        for item in items {
            tree.add(item);
            added.push(item);
            for added in &added {
                assert_eq!(tree.find(added), Some(added));
            }
        }
    }

    #[test]
    fn successor_of_every_item() {
        let sorted = [1, 3, 5, 7, 9, 11, 13];
        let tree: Tree<_> = [7, 3, 11, 1, 5, 9, 13].into_iter().collect();

        for pair in sorted.windows(2) {
            assert_eq!(tree.successor(&pair[0]), Some(&pair[1]));
            assert_eq!(tree.predecessor(&pair[1]), Some(&pair[0]));
        }
        assert_eq!(tree.successor(&13), None);
        assert_eq!(tree.predecessor(&1), None);
    }

    #[test]
    fn neighbors_of_missing_items() {
        let tree: Tree<_> = [7, 3, 11].into_iter().collect();

        assert_eq!(tree.successor(&0), Some(&3));
        assert_eq!(tree.successor(&8), Some(&11));
        assert_eq!(tree.predecessor(&100), Some(&11));
        assert_eq!(tree.predecessor(&4), Some(&3));
    }

    #[test]
    fn neighbors_skip_duplicates() {
        let tree: Tree<_> = [5, 5, 5, 6, 4].into_iter().collect();

        assert_eq!(tree.successor(&5), Some(&6));
        assert_eq!(tree.predecessor(&5), Some(&4));
        assert_eq!(tree.successor(&4), Some(&5));
    }

    #[test]
    fn neighbors_in_empty_tree() {
        let tree: Tree<i32> = Tree::new();

        assert_eq!(tree.successor(&0), None);
        assert_eq!(tree.predecessor(&0), None);
    }

    #[test]
    fn neighbors_at_type_bounds() {
        // Nothing stands in for "no candidate yet" so the extremes of the type are fine.
        let tree: Tree<_> = [i64::MIN, 0, i64::MAX].into_iter().collect();

        assert_eq!(tree.successor(&0), Some(&i64::MAX));
        assert_eq!(tree.predecessor(&0), Some(&i64::MIN));
        assert_eq!(tree.successor(&i64::MAX), None);
        assert_eq!(tree.predecessor(&i64::MIN), None);
    }
}
