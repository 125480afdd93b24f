//! Adding, removing and replacing items.
//!
//! Nodes don't know their parents. Instead of tracking "parent and which side", the walks here
//! hold on to the [`Link`] that owns the node they're looking at. The root's link is just
//! another link, so taking out the root needs no special case.

use std::cmp::Ordering;
use std::mem;

use crate::error::{Error, Result};
use crate::tree::{Link, Node, Tree};

impl<T> Tree<T>
where
    T: Ord,
{
    /// Adds `item` to the tree. Items equal to one already stored are kept too and go to its
    /// right.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.add(1);
    /// tree.add(1);
    ///
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.find(&1), Some(&1));
    /// ```
    pub fn add(&mut self, item: T) {
        let mut link = &mut self.root;
        let mut depth = 0;
        while let Some(node) = link {
            link = if item < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
            depth += 1;
        }
        *link = Some(Node::new_boxed(item));
        self.len += 1;
        log::trace!("added item at depth {}, {} stored", depth, self.len);
    }

    /// Removes the stored item equal to `item` closest to the root and returns it.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if no stored item equals `item`. The tree is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::{Error, Tree};
    ///
    /// let mut tree: Tree<_> = [5, 3, 7].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&5), Ok(5));
    /// assert_eq!(tree.remove(&5), Err(Error::NotFound));
    /// assert_eq!(tree.inorder(), vec![&3, &7]);
    /// ```
    pub fn remove(&mut self, item: &T) -> Result<T> {
        if !self.contains(item) {
            log::debug!("nothing to remove among {} items", self.len);
            return Err(Error::NotFound);
        }

        let link = link_to(&mut self.root, item);
        let Some(mut node) = link.take() else {
            return Err(Error::NotFound);
        };
        // Only set when the node has two children.
        let max_repeated = match (node.left.as_deref(), node.right.as_deref()) {
            (Some(left), Some(_)) => Some(max_is_repeated(left)),
            _ => None,
        };
        let removed = if let Some(max_repeated) = max_repeated {
            // Lift the largest item on the left into this node and unlink that item's node
            // instead. It has no right child so its left child simply takes its place. When that
            // item is stored more than once, its other copies would be left of an equal item,
            // so the smallest item on the right is lifted instead.
            let lifted = if max_repeated {
                take_min(&mut node.right).expect("Two children => right subtree")
            } else {
                take_max(&mut node.left).expect("Two children => left subtree")
            };
            let removed = mem::replace(&mut node.value, lifted);
            *link = Some(node);
            removed
        } else {
            let Node { value, left, right } = *node;
            *link = left.or(right);
            value
        };

        self.len -= 1;
        log::debug!("removed item, {} left", self.len);
        Ok(removed)
    }

    /// Swaps the stored item equal to `item` (the one closest to the root) for `new_item` and
    /// returns the old one, or `None` if there is no such item.
    ///
    /// When `new_item` may legally sit where the old item was, it is written in place and the
    /// tree keeps its shape. Otherwise the old item is removed and `new_item` is added, so the
    /// ordering of the tree always holds afterwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let mut tree: Tree<_> = [5, 3, 8].into_iter().collect();
    ///
    /// // Still between 3 and 8, stays at the root.
    /// assert_eq!(tree.replace(&5, 6), Some(5));
    /// assert_eq!(tree.preorder(), vec![&6, &3, &8]);
    ///
    /// // Would be out of order at the root, so it's moved.
    /// assert_eq!(tree.replace(&6, 1), Some(6));
    /// assert_eq!(tree.inorder(), vec![&1, &3, &8]);
    ///
    /// assert_eq!(tree.replace(&42, 0), None);
    /// ```
    pub fn replace(&mut self, item: &T, new_item: T) -> Option<T> {
        if self.fits_in_place(item, &new_item)? {
            log::debug!("replacing item in place");
            let node = link_to(&mut self.root, item).as_mut()?;
            Some(mem::replace(&mut node.value, new_item))
        } else {
            log::debug!("replacing item by removing and adding");
            let old = self.remove(item).ok()?;
            self.add(new_item);
            Some(old)
        }
    }

    /// Whether `new_item` could take the place of the item `replace` would find for `item`
    /// without breaking the ordering of the tree. `None` when there is no such item.
    fn fits_in_place(&self, item: &T, new_item: &T) -> Option<bool> {
        // `new_item` must be at least `lower` and strictly less than `upper`.
        let mut lower: Option<&T> = None;
        let mut upper: Option<&T> = None;
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match item.cmp(&node.value) {
                Ordering::Less => {
                    upper = Some(&node.value);
                    node.left.as_deref()
                }
                Ordering::Equal => {
                    // Everything on the left must stay strictly smaller, everything on the
                    // right at least as large.
                    let left_max = node.left.as_deref().map(|left| &rightmost(left).value);
                    let right_min = node.right.as_deref().map(|right| &leftmost(right).value);
                    return Some(
                        lower.map_or(true, |lower| new_item >= lower)
                            && upper.map_or(true, |upper| new_item < upper)
                            && left_max.map_or(true, |max| new_item > max)
                            && right_min.map_or(true, |min| new_item <= min),
                    );
                }
                Ordering::Greater => {
                    lower = Some(&node.value);
                    node.right.as_deref()
                }
            };
        }
        None
    }
}

/// Walks down from `link` to the link owning the first node equal to `item`, or to the empty
/// link where `item` would have been.
fn link_to<'a, T>(mut link: &'a mut Link<T>, item: &T) -> &'a mut Link<T>
where
    T: Ord,
{
    // Deciding where to go with a shared borrow first lets us return `link` itself once found.
    while link.as_ref().map_or(false, |node| node.value != *item) {
        let Some(node) = link else {
            break;
        };
        link = if *item < node.value {
            &mut node.left
        } else {
            &mut node.right
        };
    }
    link
}

/// Unlinks the node holding the largest item in the subtree at `link` and returns its item.
/// That node has no right child so its left child takes its place.
fn take_max<T>(mut link: &mut Link<T>) -> Option<T> {
    while link.as_ref()?.right.is_some() {
        let Some(node) = link else {
            break;
        };
        link = &mut node.right;
    }
    let max = link.take()?;
    let Node { value, left, .. } = *max;
    *link = left;
    Some(value)
}

/// Unlinks the node holding the smallest item in the subtree at `link` and returns its item.
/// That node has no left child so its right child takes its place.
fn take_min<T>(mut link: &mut Link<T>) -> Option<T> {
    while link.as_ref()?.left.is_some() {
        let Some(node) = link else {
            break;
        };
        link = &mut node.left;
    }
    let min = link.take()?;
    let Node { value, right, .. } = *min;
    *link = right;
    Some(value)
}

/// Whether the largest item in the subtree under `node` is stored there more than once.
///
/// Equal items go right, so every copy of the largest item sits on the subtree's right spine and
/// the last two nodes of that spine are equal exactly when there is more than one.
fn max_is_repeated<T>(mut node: &Node<T>) -> bool
where
    T: Ord,
{
    while let Some(right) = node.right.as_deref() {
        if right.right.is_none() {
            return right.value == node.value;
        }
        node = right;
    }
    false
}

fn rightmost<T>(mut node: &Node<T>) -> &Node<T> {
    while let Some(right) = node.right.as_deref() {
        node = right;
    }
    node
}

fn leftmost<T>(mut node: &Node<T>) -> &Node<T> {
    while let Some(left) = node.left.as_deref() {
        node = left;
    }
    node
}


#[cfg(test)]
mod quicktests {
    use super::*;
    use crate::test::quick::{is_ordered, Op};

    /// Applies a set of operations to a tree and to a sorted `Vec`.
    /// This way we can ensure that after a random smattering of adds, removes and replaces we
    /// have the same items in both.
    fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, model: &mut Vec<T>)
    where
        T: Ord + Clone + std::fmt::Debug,
    {
        for op in ops {
            match op {
                Op::Add(x) => {
                    bst.add(x.clone());
                    let pos = model.partition_point(|y| y <= x);
                    model.insert(pos, x.clone());
                }
                Op::Remove(x) => match model.iter().position(|y| y == x) {
                    Some(pos) => assert_eq!(bst.remove(x), Ok(model.remove(pos))),
                    None => assert_eq!(bst.remove(x), Err(Error::NotFound)),
                },
                Op::Replace(x, y) => match model.iter().position(|z| z == x) {
                    Some(pos) => {
                        assert_eq!(bst.replace(x, y.clone()), Some(model.remove(pos)));
                        let pos = model.partition_point(|z| z <= y);
                        model.insert(pos, y.clone());
                    }
                    None => assert_eq!(bst.replace(x, y.clone()), None),
                },
                Op::Rebalance => bst.rebalance(),
                Op::Iter => {
                    assert_eq!(bst.inorder(), model.iter().collect::<Vec<_>>());
                }
            }
        }
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
            let mut tree = Tree::new();
            let mut model = Vec::new();

            do_ops(&ops, &mut tree, &mut model);
            tree.len() == model.len()
                && tree.inorder() == model.iter().collect::<Vec<_>>()
                && is_ordered(&tree)
        }
    }

    quickcheck::quickcheck! {
        fn contains(xs: Vec<i8>) -> bool {
            let tree: Tree<_> = xs.iter().copied().collect();

            xs.iter().all(|x| tree.find(x) == Some(x))
        }
    }

    quickcheck::quickcheck! {
        fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
            let mut tree: Tree<_> = xs.iter().copied().collect();
            let mut still_present = xs;
            for delete in &deletes {
                match still_present.iter().position(|x| x == delete) {
                    Some(pos) => {
                        still_present.swap_remove(pos);
                        assert_eq!(tree.remove(delete), Ok(*delete));
                    }
                    None => assert_eq!(tree.remove(delete), Err(Error::NotFound)),
                }
            }

            tree.len() == still_present.len()
                && still_present.iter().all(|x| tree.contains(x))
                && is_ordered(&tree)
        }
    }
}
