//! Disjoint sets with full path compression and size-based (weighted) union.
//!
//! [`DisjointSet`] is the bare structure; its mutating operations append steps to a recorder the
//! caller passes in. [`UnionFind`] pairs one with a persistent history that grows across every
//! call, which is what the union-find page scrubs through.

use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::{InputError, Recorder, Step, StepKind};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnionFindEvent {
    Initialized {
        elements: usize,
    },
    /// `node` was re-pointed from `old_parent` directly at its root.
    Compression {
        node: usize,
        old_parent: usize,
        new_parent: usize,
    },
    Find {
        element: usize,
        root: usize,
    },
    /// Root `child` (the smaller tree) now hangs under root `parent`.
    Union {
        child: usize,
        parent: usize,
        new_size: usize,
    },
    NoUnion {
        root: usize,
    },
}

impl StepKind for UnionFindEvent {
    fn tag(&self) -> &'static str {
        match self {
            Self::Initialized { .. } => "initialized",
            Self::Compression { .. } => "compression",
            Self::Find { .. } => "find",
            Self::Union { .. } => "union",
            Self::NoUnion { .. } => "no-union",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnionFindState {
    pub parent: Vec<usize>,
    /// Tree sizes; only meaningful at roots.
    pub size: Vec<usize>,
    pub selected: Vec<usize>,
}

pub type UnionFindStep = Step<UnionFindEvent, UnionFindState>;

/// A requested operation, as kept in [`UnionFind::operations`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operation {
    Union(usize, usize),
    Find(usize),
}

/// The scripted tour shown on the union-find page (10 elements).
pub const WALKTHROUGH: [Operation; 12] = [
    Operation::Union(0, 1),
    Operation::Union(2, 3),
    Operation::Union(4, 5),
    Operation::Union(6, 7),
    Operation::Union(0, 2),
    Operation::Union(4, 6),
    Operation::Union(0, 4),
    Operation::Find(7),
    Operation::Find(5),
    Operation::Union(8, 9),
    Operation::Union(0, 8),
    Operation::Find(9),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSet {
    pub fn new(elements: usize) -> Self {
        Self {
            parent: (0..elements).collect(),
            size: vec![1; elements],
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    pub fn parent(&self) -> &[usize] {
        &self.parent
    }

    pub fn size(&self) -> &[usize] {
        &self.size
    }

    fn check(&self, element: usize) -> Result<(), InputError> {
        if element < self.len() {
            Ok(())
        } else {
            Err(InputError::ElementOutOfRange {
                element,
                len: self.len(),
            })
        }
    }

    fn snapshot(&self, selected: Vec<usize>) -> UnionFindState {
        UnionFindState {
            parent: self.parent.clone(),
            size: self.size.clone(),
            selected,
        }
    }

    /// Root of `element` without compressing anything.
    pub fn root_of(&self, element: usize) -> Result<usize, InputError> {
        self.check(element)?;
        let mut cur = element;
        while self.parent[cur] != cur {
            cur = self.parent[cur];
        }
        Ok(cur)
    }

    /// Whether `x` and `y` are in the same set, without compressing anything.
    pub fn connected(&self, x: usize, y: usize) -> Result<bool, InputError> {
        Ok(self.root_of(x)? == self.root_of(y)?)
    }

    /// Finds the root of `element`, then re-points every node on the path at it.
    ///
    /// Records one `compression` step per node whose parent changed, then a `find` step.
    pub fn find(
        &mut self,
        element: usize,
        rec: &mut Recorder<UnionFindStep>,
    ) -> Result<usize, InputError> {
        self.check(element)?;

        let mut path = vec![element];
        let mut cur = element;
        while self.parent[cur] != cur {
            cur = self.parent[cur];
            path.push(cur);
        }
        let root = cur;

        for &node in &path[..path.len() - 1] {
            let old_parent = self.parent[node];
            if old_parent == root {
                continue;
            }
            self.parent[node] = root;
            rec.record(
                UnionFindEvent::Compression {
                    node,
                    old_parent,
                    new_parent: root,
                },
                self.snapshot(vec![node, root]),
                format!(
                    "Path compression: Element {node}'s parent changed from {old_parent} to {root}"
                ),
            );
        }

        rec.record(
            UnionFindEvent::Find { element, root },
            self.snapshot(vec![element, root]),
            format!("Find({element}) = {root}"),
        );
        Ok(root)
    }

    /// Merges the sets of `x` and `y`, hanging the smaller tree under the larger root (ties
    /// keep `x`'s root on top).
    ///
    /// Returns `false` (and records `no-union`) if they were already joined.
    pub fn union(
        &mut self,
        x: usize,
        y: usize,
        rec: &mut Recorder<UnionFindStep>,
    ) -> Result<bool, InputError> {
        self.check(x)?;
        self.check(y)?;

        let root_x = self.find(x, rec)?;
        let root_y = self.find(y, rec)?;

        if root_x == root_y {
            rec.record(
                UnionFindEvent::NoUnion { root: root_x },
                self.snapshot(vec![x, y, root_x]),
                format!(
                    "No union performed: {x} and {y} are already in the same set (root: {root_x})"
                ),
            );
            return Ok(false);
        }

        let (child, parent) = if self.size[root_x] < self.size[root_y] {
            (root_x, root_y)
        } else {
            (root_y, root_x)
        };
        self.parent[child] = parent;
        self.size[parent] += self.size[child];

        let new_size = self.size[parent];
        rec.record(
            UnionFindEvent::Union {
                child,
                parent,
                new_size,
            },
            self.snapshot(vec![root_x, root_y]),
            format!(
                "Union: Connected {child} under {parent} ({child} tree size: {}, {parent} tree size now: {new_size})",
                self.size[child]
            ),
        );
        Ok(true)
    }
}

/// A persistent disjoint-set structure with its full operation history.
#[derive(Clone, Debug)]
pub struct UnionFind {
    set: DisjointSet,
    history: Recorder<UnionFindStep>,
    operations: Vec<Operation>,
}

impl UnionFind {
    pub fn new(elements: usize) -> Self {
        let set = DisjointSet::new(elements);
        let mut history = Recorder::new();
        history.record(
            UnionFindEvent::Initialized { elements },
            set.snapshot(Vec::new()),
            format!("Initialized Union-Find with {elements} elements"),
        );
        adebug!(elements, "UnionFind::new");
        Self {
            set,
            history,
            operations: Vec::new(),
        }
    }

    /// Builds a structure and applies `script` in order.
    pub fn from_script(elements: usize, script: &[Operation]) -> Result<Self, InputError> {
        let mut uf = Self::new(elements);
        for &op in script {
            uf.apply(op)?;
        }
        Ok(uf)
    }

    /// The scripted tour over 10 elements.
    pub fn walkthrough() -> Result<Self, InputError> {
        Self::from_script(10, &WALKTHROUGH)
    }

    /// Discards all sets and history, starting over with `elements` singletons.
    pub fn reset(&mut self, elements: usize) {
        *self = Self::new(elements);
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    pub fn disjoint_set(&self) -> &DisjointSet {
        &self.set
    }

    pub fn parent(&self) -> &[usize] {
        self.set.parent()
    }

    pub fn size(&self) -> &[usize] {
        self.set.size()
    }

    pub fn root_of(&self, element: usize) -> Result<usize, InputError> {
        self.set.root_of(element)
    }

    pub fn connected(&self, x: usize, y: usize) -> Result<bool, InputError> {
        self.set.connected(x, y)
    }

    pub fn find(&mut self, element: usize) -> Result<usize, InputError> {
        let root = self.set.find(element, &mut self.history)?;
        self.operations.push(Operation::Find(element));
        Ok(root)
    }

    pub fn union(&mut self, x: usize, y: usize) -> Result<bool, InputError> {
        let merged = self.set.union(x, y, &mut self.history)?;
        self.operations.push(Operation::Union(x, y));
        Ok(merged)
    }

    pub fn apply(&mut self, op: Operation) -> Result<(), InputError> {
        match op {
            Operation::Union(x, y) => self.union(x, y).map(|_| ()),
            Operation::Find(x) => self.find(x).map(|_| ()),
        }
    }

    /// Every step recorded since construction (or the last reset), oldest first.
    pub fn operation_states(&self) -> &[UnionFindStep] {
        self.history.steps()
    }

    /// The operations applied so far.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Message of every recorded step, oldest first.
    pub fn log(&self) -> Vec<String> {
        self.history
            .steps()
            .iter()
            .map(|s| s.message.clone())
            .collect()
    }
}
