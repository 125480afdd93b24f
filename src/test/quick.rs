use quickcheck::{Arbitrary, Gen};

use crate::Tree;

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    /// Add the T to the data structure
    Add(T),
    /// Remove the T from the data structure
    Remove(T),
    /// Replace the first T with the second
    Replace(T, T),
    /// Rebuild the tree as short as possible
    Rebalance,
    /// Compare iterators
    Iter,
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation. Adds are weighted up so trees
    /// actually grow.
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 0, 1, 1, 2, 3, 4]).unwrap() {
            0 => Op::Add(T::arbitrary(g)),
            1 => Op::Remove(T::arbitrary(g)),
            2 => Op::Replace(T::arbitrary(g), T::arbitrary(g)),
            3 => Op::Rebalance,
            4 => Op::Iter,
            _ => unreachable!(),
        }
    }
}

/// Checks the ordering of every node against the bounds set by its ancestors: everything to the
/// left of a node is smaller, everything to the right is at least as large.
pub(crate) fn is_ordered<T>(tree: &Tree<T>) -> bool
where
    T: Ord,
{
    let mut stack: Vec<_> = tree
        .root
        .as_deref()
        .map(|root| (root, None, None))
        .into_iter()
        .collect();
    while let Some((node, lower, upper)) = stack.pop() {
        if lower.map_or(false, |lower| &node.value < lower)
            || upper.map_or(false, |upper| &node.value >= upper)
        {
            return false;
        }
        if let Some(left) = node.left.as_deref() {
            stack.push((left, lower, Some(&node.value)));
        }
        if let Some(right) = node.right.as_deref() {
            stack.push((right, Some(&node.value), upper));
        }
    }
    true
}
