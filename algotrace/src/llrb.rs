//! Left-leaning red-black tree whose `put`/`delete` return the step trace of that call.
//!
//! Nodes live in an arena and refer to each other by index. Each subtree also knows the
//! [`Link`] it hangs from, so a rotation re-attaches the new subtree root to its parent before
//! the step is recorded and every snapshot is a whole, consistent tree.

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::{Color, Recorder, Side, Step, StepKind, TreeNode, TreeSnapshot};

type NodeId = usize;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LlrbEvent {
    InsertStart { key: i64 },
    DeleteStart { key: i64 },
    NotFound { key: i64 },
    /// `key` was compared against node `against` and the search continues on `side`.
    Descend { key: i64, against: i64, side: Side },
    Create { key: i64 },
    Update { key: i64 },
    RotateLeft { key: i64, new_top: i64 },
    RotateRight { key: i64, new_top: i64 },
    FlipColors { key: i64 },
    SetRootRed { key: i64 },
    MoveRedLeft { key: i64 },
    MoveRedRight { key: i64 },
    Remove { key: i64 },
    ReplaceWithSuccessor { key: i64, successor: i64 },
    Balance { key: i64 },
    SetRootBlack { key: i64 },
    Emptied { key: i64 },
}

impl StepKind for LlrbEvent {
    fn tag(&self) -> &'static str {
        match self {
            Self::InsertStart { .. } => "insert",
            Self::DeleteStart { .. } => "delete",
            Self::NotFound { .. } => "not-found",
            Self::Descend { .. } => "descend",
            Self::Create { .. } => "create",
            Self::Update { .. } => "update",
            Self::RotateLeft { .. } => "rotate-left",
            Self::RotateRight { .. } => "rotate-right",
            Self::FlipColors { .. } => "flip-colors",
            Self::SetRootRed { .. } => "set-root-red",
            Self::MoveRedLeft { .. } => "move-red-left",
            Self::MoveRedRight { .. } => "move-red-right",
            Self::Remove { .. } => "remove",
            Self::ReplaceWithSuccessor { .. } => "replace-with-successor",
            Self::Balance { .. } => "balance",
            Self::SetRootBlack { .. } => "set-root-black",
            Self::Emptied { .. } => "emptied",
        }
    }
}

impl LlrbEvent {
    /// Key of the node the step highlights.
    pub fn key(&self) -> i64 {
        match *self {
            Self::InsertStart { key }
            | Self::DeleteStart { key }
            | Self::NotFound { key }
            | Self::Descend { against: key, .. }
            | Self::Create { key }
            | Self::Update { key }
            | Self::RotateLeft { key, .. }
            | Self::RotateRight { key, .. }
            | Self::FlipColors { key }
            | Self::SetRootRed { key }
            | Self::MoveRedLeft { key }
            | Self::MoveRedRight { key }
            | Self::Remove { key }
            | Self::ReplaceWithSuccessor { key, .. }
            | Self::Balance { key }
            | Self::SetRootBlack { key }
            | Self::Emptied { key } => key,
        }
    }
}

pub type LlrbStep<V> = Step<LlrbEvent, TreeSnapshot<V>>;

#[derive(Clone, Debug)]
struct Node<V> {
    key: i64,
    value: V,
    color: Color,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

/// Where a subtree is attached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Link {
    Root,
    Left(NodeId),
    Right(NodeId),
}

/// A persistent LLRB tree keyed by `i64`.
#[derive(Clone, Debug)]
pub struct RedBlackTree<V> {
    // Freed slots keep their stale node until reused; only ids reachable from `root` are live.
    nodes: Vec<Node<V>>,
    free: Vec<NodeId>,
    root: Option<NodeId>,
    len: usize,
}

impl<V> Default for RedBlackTree<V> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            root: None,
            len: 0,
        }
    }
}

impl<V: Clone> RedBlackTree<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn get(&self, key: i64) -> Option<&V> {
        let mut cur = self.root;
        while let Some(id) = cur {
            let node = &self.nodes[id];
            match key.cmp(&node.key) {
                Ordering::Less => cur = node.left,
                Ordering::Greater => cur = node.right,
                Ordering::Equal => return Some(&node.value),
            }
        }
        None
    }

    pub fn contains(&self, key: i64) -> bool {
        self.get(key).is_some()
    }

    pub fn min_key(&self) -> Option<i64> {
        self.root.map(|r| self.nodes[self.min_id(r)].key)
    }

    /// Keys in ascending order.
    pub fn keys(&self) -> Vec<i64> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack = Vec::new();
        let mut cur = self.root;
        while cur.is_some() || !stack.is_empty() {
            while let Some(id) = cur {
                stack.push(id);
                cur = self.nodes[id].left;
            }
            if let Some(id) = stack.pop() {
                out.push(self.nodes[id].key);
                cur = self.nodes[id].right;
            }
        }
        out
    }

    /// Deep copy of the current tree.
    pub fn snapshot(&self) -> TreeSnapshot<V> {
        TreeSnapshot {
            root: self.clone_subtree(self.root),
        }
    }

    /// Inserts `key`, or replaces its value if present.
    pub fn put(&mut self, key: i64, value: V) -> Vec<LlrbStep<V>> {
        let mut rec = Recorder::new();
        self.record(
            &mut rec,
            LlrbEvent::InsertStart { key },
            format!("Starting insertion of key {key}"),
        );

        let root = self.root;
        let top = self.put_at(root, Link::Root, key, value, &mut rec);
        self.root = Some(top);

        self.nodes[top].color = Color::Black;
        let root_key = self.nodes[top].key;
        self.record(
            &mut rec,
            LlrbEvent::SetRootBlack { key: root_key },
            format!("Insertion of key {key} completed. Root is set to BLACK."),
        );
        adebug!(key, len = self.len, steps = rec.len(), "RedBlackTree::put");
        rec.into_steps()
    }

    /// Removes `key`. An absent key yields a `not-found` step and leaves the tree untouched.
    pub fn delete(&mut self, key: i64) -> Vec<LlrbStep<V>> {
        let mut rec = Recorder::new();
        self.record(
            &mut rec,
            LlrbEvent::DeleteStart { key },
            format!("Starting deletion of key {key}"),
        );

        let Some(root) = self.root.filter(|_| self.contains(key)) else {
            self.record(
                &mut rec,
                LlrbEvent::NotFound { key },
                format!("Key {key} not found in the tree"),
            );
            return rec.into_steps();
        };

        if !self.is_red(self.nodes[root].left) && !self.is_red(self.nodes[root].right) {
            self.nodes[root].color = Color::Red;
            let root_key = self.nodes[root].key;
            self.record(
                &mut rec,
                LlrbEvent::SetRootRed { key: root_key },
                "Both children of root are BLACK, temporarily setting root to RED".into(),
            );
        }

        self.root = self.delete_at(root, Link::Root, key, &mut rec);

        match self.root {
            Some(top) => {
                self.nodes[top].color = Color::Black;
                let root_key = self.nodes[top].key;
                self.record(
                    &mut rec,
                    LlrbEvent::SetRootBlack { key: root_key },
                    "Deletion completed, setting root back to BLACK".into(),
                );
            }
            None => self.record(
                &mut rec,
                LlrbEvent::Emptied { key },
                format!("Tree is now empty after deleting {key}"),
            ),
        }
        adebug!(key, len = self.len, steps = rec.len(), "RedBlackTree::delete");
        rec.into_steps()
    }

    fn record(&self, rec: &mut Recorder<LlrbStep<V>>, event: LlrbEvent, message: String) {
        rec.record(event, self.snapshot(), message);
    }

    fn clone_subtree(&self, id: Option<NodeId>) -> Option<Box<TreeNode<V>>> {
        id.map(|id| {
            let node = &self.nodes[id];
            Box::new(TreeNode {
                key: node.key,
                value: node.value.clone(),
                color: node.color,
                left: self.clone_subtree(node.left),
                right: self.clone_subtree(node.right),
            })
        })
    }

    fn is_red(&self, id: Option<NodeId>) -> bool {
        id.is_some_and(|id| self.nodes[id].color.is_red())
    }

    fn left_of(&self, id: Option<NodeId>) -> Option<NodeId> {
        id.and_then(|id| self.nodes[id].left)
    }

    fn min_id(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.nodes[id].left {
            id = left;
        }
        id
    }

    fn alloc(&mut self, key: i64, value: V) -> NodeId {
        let node = Node {
            key,
            value,
            color: Color::Red,
            left: None,
            right: None,
        };
        self.len += 1;
        match self.free.pop() {
            Some(id) => {
                self.nodes[id] = node;
                id
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    fn release(&mut self, id: NodeId) {
        self.len -= 1;
        self.free.push(id);
    }

    fn attach(&mut self, link: Link, child: Option<NodeId>) {
        match link {
            Link::Root => self.root = child,
            Link::Left(parent) => self.nodes[parent].left = child,
            Link::Right(parent) => self.nodes[parent].right = child,
        }
    }

    fn put_at(
        &mut self,
        h: Option<NodeId>,
        link: Link,
        key: i64,
        value: V,
        rec: &mut Recorder<LlrbStep<V>>,
    ) -> NodeId {
        let Some(h) = h else {
            let id = self.alloc(key, value);
            self.attach(link, Some(id));
            self.record(
                rec,
                LlrbEvent::Create { key },
                format!("Creating new RED node with key {key}"),
            );
            return id;
        };

        let against = self.nodes[h].key;
        match key.cmp(&against) {
            Ordering::Less => {
                self.record(
                    rec,
                    LlrbEvent::Descend {
                        key,
                        against,
                        side: Side::Left,
                    },
                    format!("Key {key} is less than {against}, traversing left"),
                );
                let left = self.nodes[h].left;
                let child = self.put_at(left, Link::Left(h), key, value, rec);
                self.nodes[h].left = Some(child);
            }
            Ordering::Greater => {
                self.record(
                    rec,
                    LlrbEvent::Descend {
                        key,
                        against,
                        side: Side::Right,
                    },
                    format!("Key {key} is greater than {against}, traversing right"),
                );
                let right = self.nodes[h].right;
                let child = self.put_at(right, Link::Right(h), key, value, rec);
                self.nodes[h].right = Some(child);
            }
            Ordering::Equal => {
                self.nodes[h].value = value;
                self.record(
                    rec,
                    LlrbEvent::Update { key },
                    format!("Key {key} already exists, updating value"),
                );
            }
        }

        self.fix_up(h, link, rec)
    }

    /// The three local repairs, in order: lean left, split a left-left red pair, push a
    /// 4-node's red up.
    fn fix_up(&mut self, mut h: NodeId, link: Link, rec: &mut Recorder<LlrbStep<V>>) -> NodeId {
        if self.is_red(self.nodes[h].right) && !self.is_red(self.nodes[h].left) {
            h = self.rotate_left(h, link, rec);
        }
        let left = self.nodes[h].left;
        if self.is_red(left) && self.is_red(self.left_of(left)) {
            h = self.rotate_right(h, link, rec);
        }
        if self.is_red(self.nodes[h].left) && self.is_red(self.nodes[h].right) {
            self.flip_colors(h, rec);
        }
        h
    }

    fn rotate_left(&mut self, h: NodeId, link: Link, rec: &mut Recorder<LlrbStep<V>>) -> NodeId {
        let Some(x) = self.nodes[h].right else {
            return h;
        };
        self.nodes[h].right = self.nodes[x].left;
        self.nodes[x].left = Some(h);
        self.nodes[x].color = self.nodes[h].color;
        self.nodes[h].color = Color::Red;
        self.attach(link, Some(x));

        let (key, new_top) = (self.nodes[h].key, self.nodes[x].key);
        self.record(
            rec,
            LlrbEvent::RotateLeft { key, new_top },
            format!("Rotated left at node {key}: {new_top} moves up"),
        );
        x
    }

    fn rotate_right(&mut self, h: NodeId, link: Link, rec: &mut Recorder<LlrbStep<V>>) -> NodeId {
        let Some(x) = self.nodes[h].left else {
            return h;
        };
        self.nodes[h].left = self.nodes[x].right;
        self.nodes[x].right = Some(h);
        self.nodes[x].color = self.nodes[h].color;
        self.nodes[h].color = Color::Red;
        self.attach(link, Some(x));

        let (key, new_top) = (self.nodes[h].key, self.nodes[x].key);
        self.record(
            rec,
            LlrbEvent::RotateRight { key, new_top },
            format!("Rotated right at node {key}: {new_top} moves up"),
        );
        x
    }

    fn flip_colors(&mut self, h: NodeId, rec: &mut Recorder<LlrbStep<V>>) {
        self.nodes[h].color = self.nodes[h].color.flipped();
        for child in [self.nodes[h].left, self.nodes[h].right].into_iter().flatten() {
            self.nodes[child].color = self.nodes[child].color.flipped();
        }
        let key = self.nodes[h].key;
        self.record(
            rec,
            LlrbEvent::FlipColors { key },
            format!("Flipped colors at node {key} and its children"),
        );
    }

    /// Assuming `h` is red and both its children are black, makes `h.left` or one of its
    /// children red.
    fn move_red_left(
        &mut self,
        mut h: NodeId,
        link: Link,
        rec: &mut Recorder<LlrbStep<V>>,
    ) -> NodeId {
        self.flip_colors(h, rec);
        let right = self.nodes[h].right;
        if let Some(r) = right.filter(|_| self.is_red(self.left_of(right))) {
            self.rotate_right(r, Link::Right(h), rec);
            h = self.rotate_left(h, link, rec);
            self.flip_colors(h, rec);
        }
        let key = self.nodes[h].key;
        self.record(
            rec,
            LlrbEvent::MoveRedLeft { key },
            format!("Moved RED to the left at node {key} to continue down"),
        );
        h
    }

    /// Assuming `h` is red and both its children are black, makes `h.right` or one of its
    /// children red.
    fn move_red_right(
        &mut self,
        mut h: NodeId,
        link: Link,
        rec: &mut Recorder<LlrbStep<V>>,
    ) -> NodeId {
        self.flip_colors(h, rec);
        let left = self.nodes[h].left;
        if self.is_red(self.left_of(left)) {
            h = self.rotate_right(h, link, rec);
            self.flip_colors(h, rec);
        }
        let key = self.nodes[h].key;
        self.record(
            rec,
            LlrbEvent::MoveRedRight { key },
            format!("Moved RED to the right at node {key} to continue down"),
        );
        h
    }

    fn balance(&mut self, h: NodeId, link: Link, rec: &mut Recorder<LlrbStep<V>>) -> NodeId {
        let key = self.nodes[h].key;
        self.record(
            rec,
            LlrbEvent::Balance { key },
            format!("Balancing tree at node {key}"),
        );
        self.fix_up(h, link, rec)
    }

    fn delete_at(
        &mut self,
        mut h: NodeId,
        link: Link,
        key: i64,
        rec: &mut Recorder<LlrbStep<V>>,
    ) -> Option<NodeId> {
        if key < self.nodes[h].key {
            let left = self.nodes[h].left;
            if !self.is_red(left) && !self.is_red(self.left_of(left)) {
                h = self.move_red_left(h, link, rec);
            }
            let against = self.nodes[h].key;
            self.record(
                rec,
                LlrbEvent::Descend {
                    key,
                    against,
                    side: Side::Left,
                },
                format!("Key {key} is less than {against}, traversing left"),
            );
            if let Some(left) = self.nodes[h].left {
                let child = self.delete_at(left, Link::Left(h), key, rec);
                self.nodes[h].left = child;
            }
        } else {
            if self.is_red(self.nodes[h].left) {
                h = self.rotate_right(h, link, rec);
            }
            if key == self.nodes[h].key && self.nodes[h].right.is_none() {
                self.release(h);
                self.attach(link, None);
                self.record(
                    rec,
                    LlrbEvent::Remove { key },
                    format!("Found key {key} with no right child, removing node"),
                );
                return None;
            }
            let right = self.nodes[h].right;
            if !self.is_red(right) && !self.is_red(self.left_of(right)) {
                h = self.move_red_right(h, link, rec);
            }
            let Some(right) = self.nodes[h].right else {
                return Some(self.balance(h, link, rec));
            };
            if key == self.nodes[h].key {
                let successor = self.min_id(right);
                let (succ_key, succ_value) =
                    (self.nodes[successor].key, self.nodes[successor].value.clone());
                self.nodes[h].key = succ_key;
                self.nodes[h].value = succ_value;
                self.record(
                    rec,
                    LlrbEvent::ReplaceWithSuccessor {
                        key,
                        successor: succ_key,
                    },
                    format!(
                        "Found key {key} with right child, replacing with minimum key {succ_key} in right subtree"
                    ),
                );
                let child = self.delete_min_at(right, Link::Right(h), rec);
                self.nodes[h].right = child;
            } else {
                let against = self.nodes[h].key;
                self.record(
                    rec,
                    LlrbEvent::Descend {
                        key,
                        against,
                        side: Side::Right,
                    },
                    format!("Key {key} is greater than {against}, traversing right"),
                );
                let child = self.delete_at(right, Link::Right(h), key, rec);
                self.nodes[h].right = child;
            }
        }
        Some(self.balance(h, link, rec))
    }

    fn delete_min_at(
        &mut self,
        mut h: NodeId,
        link: Link,
        rec: &mut Recorder<LlrbStep<V>>,
    ) -> Option<NodeId> {
        let Some(left) = self.nodes[h].left else {
            let key = self.nodes[h].key;
            self.release(h);
            self.attach(link, None);
            self.record(
                rec,
                LlrbEvent::Remove { key },
                format!("Found minimum node {key}, removing it"),
            );
            return None;
        };
        if !self.is_red(Some(left)) && !self.is_red(self.nodes[left].left) {
            h = self.move_red_left(h, link, rec);
        }
        if let Some(left) = self.nodes[h].left {
            let child = self.delete_min_at(left, Link::Left(h), rec);
            self.nodes[h].left = child;
        }
        Some(self.balance(h, link, rec))
    }
}
