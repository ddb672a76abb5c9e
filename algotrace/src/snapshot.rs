use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::Color;

/// A node of an owned tree snapshot. Children are exclusively owned by their parent.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeNode<V> {
    pub key: i64,
    pub value: V,
    /// Color of the link from the parent to this node.
    pub color: Color,
    pub left: Option<Box<TreeNode<V>>>,
    pub right: Option<Box<TreeNode<V>>>,
}

impl<V> TreeNode<V> {
    pub fn is_red(&self) -> bool {
        self.color.is_red()
    }
}

fn is_red<V>(node: Option<&TreeNode<V>>) -> bool {
    node.is_some_and(TreeNode::is_red)
}

/// A fully owned deep copy of a red-black tree at one instant.
///
/// Snapshots never alias the live tree: mutating the tree after taking a snapshot leaves the
/// snapshot unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeSnapshot<V> {
    pub root: Option<Box<TreeNode<V>>>,
}

impl<V> Default for TreeSnapshot<V> {
    fn default() -> Self {
        Self { root: None }
    }
}

/// A broken left-leaning red-black property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("root is red")]
    RedRoot,
    #[error("node {key} has a red right link")]
    RightLeaningRed { key: i64 },
    #[error("node {key} and its left child are both red")]
    DoubleRed { key: i64 },
    #[error("root-to-leaf paths have different black heights")]
    Unbalanced,
    #[error("key {key} is out of symmetric order")]
    NotOrdered { key: i64 },
}

impl<V> TreeSnapshot<V> {
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn root(&self) -> Option<&TreeNode<V>> {
        self.root.as_deref()
    }

    pub fn len(&self) -> usize {
        fn count<V>(node: Option<&TreeNode<V>>) -> usize {
            node.map_or(0, |n| 1 + count(n.left.as_deref()) + count(n.right.as_deref()))
        }
        count(self.root())
    }

    /// Number of levels; an empty tree has height 0.
    pub fn height(&self) -> usize {
        fn height<V>(node: Option<&TreeNode<V>>) -> usize {
            node.map_or(0, |n| {
                1 + height(n.left.as_deref()).max(height(n.right.as_deref()))
            })
        }
        height(self.root())
    }

    /// Keys in symmetric (ascending) order.
    pub fn keys(&self) -> Vec<i64> {
        fn walk<V>(node: Option<&TreeNode<V>>, out: &mut Vec<i64>) {
            if let Some(n) = node {
                walk(n.left.as_deref(), out);
                out.push(n.key);
                walk(n.right.as_deref(), out);
            }
        }
        let mut out = Vec::new();
        walk(self.root(), &mut out);
        out
    }

    pub fn find(&self, key: i64) -> Option<&TreeNode<V>> {
        let mut node = self.root();
        while let Some(n) = node {
            node = match key.cmp(&n.key) {
                core::cmp::Ordering::Less => n.left.as_deref(),
                core::cmp::Ordering::Greater => n.right.as_deref(),
                core::cmp::Ordering::Equal => return Some(n),
            };
        }
        None
    }

    pub fn root_is_black(&self) -> bool {
        !is_red(self.root())
    }

    /// Count of black links on every root-to-null path, or `None` if the paths disagree.
    pub fn black_height(&self) -> Option<usize> {
        fn black_height<V>(node: Option<&TreeNode<V>>) -> Option<usize> {
            let Some(n) = node else {
                return Some(0);
            };
            let left = black_height(n.left.as_deref())?;
            let right = black_height(n.right.as_deref())?;
            if left != right {
                return None;
            }
            Some(left + usize::from(!n.is_red()))
        }
        black_height(self.root())
    }

    pub fn is_balanced(&self) -> bool {
        self.black_height().is_some()
    }

    /// No red right links and no two red links in a row.
    pub fn is_23(&self) -> bool {
        self.check_23().is_ok()
    }

    pub fn is_bst(&self) -> bool {
        self.keys().windows(2).all(|w| w[0] < w[1])
    }

    fn check_23(&self) -> Result<(), InvariantViolation> {
        fn walk<V>(node: Option<&TreeNode<V>>) -> Result<(), InvariantViolation> {
            let Some(n) = node else {
                return Ok(());
            };
            if is_red(n.right.as_deref()) {
                return Err(InvariantViolation::RightLeaningRed { key: n.key });
            }
            if n.is_red() && is_red(n.left.as_deref()) {
                return Err(InvariantViolation::DoubleRed { key: n.key });
            }
            walk(n.left.as_deref())?;
            walk(n.right.as_deref())
        }
        walk(self.root())
    }

    /// Verifies every left-leaning red-black property, reporting the first violation found.
    pub fn check(&self) -> Result<(), InvariantViolation> {
        if !self.root_is_black() {
            return Err(InvariantViolation::RedRoot);
        }
        if let Some(w) = self.keys().windows(2).find(|w| w[0] >= w[1]) {
            return Err(InvariantViolation::NotOrdered { key: w[1] });
        }
        self.check_23()?;
        if !self.is_balanced() {
            return Err(InvariantViolation::Unbalanced);
        }
        Ok(())
    }
}
