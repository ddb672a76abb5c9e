//! Single-source shortest paths with a list-based priority queue.
//!
//! The queue is a plain vector re-sorted (stably) by tentative distance before every pop, and a
//! better path updates the node's existing entry in place (or appends one). Pops of an
//! already-visited node are skipped without recording a step. Edges are relaxed in edge-list
//! order and only a strictly shorter path replaces the current one.

use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use crate::{Distance, Graph, InputError, NodeKey, Recorder, Step, StepKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeStatus {
    Unvisited,
    /// Start node before its visit, or a node whose distance was just improved.
    Current,
    Visited,
    /// Part of the final shortest-path tree.
    Path,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueueEntry<N> {
    pub node: N,
    pub distance: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Relaxation {
    Improved { old: Distance, new: u64 },
    AlreadyOptimal { current: Distance, candidate: u64 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DijkstraEvent<N> {
    Initialize {
        start: N,
    },
    Visit {
        node: N,
        distance: u64,
    },
    Relax {
        from: N,
        to: N,
        weight: u32,
        outcome: Relaxation,
    },
    Complete,
}

impl<N> StepKind for DijkstraEvent<N> {
    fn tag(&self) -> &'static str {
        match self {
            Self::Initialize { .. } => "initialize",
            Self::Visit { .. } => "visit",
            Self::Relax { .. } => "relax",
            Self::Complete => "complete",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DijkstraState<N> {
    pub distances: BTreeMap<N, Distance>,
    /// Predecessor on the best known path.
    pub previous: BTreeMap<N, N>,
    pub status: BTreeMap<N, NodeStatus>,
    pub current: Option<N>,
    pub queue: Vec<QueueEntry<N>>,
    /// Relaxed edges as `(source, target)`, in the order they were processed.
    pub processed: Vec<(N, N)>,
}

impl<N: NodeKey> DijkstraState<N> {
    pub fn distance(&self, node: &N) -> Distance {
        self.distances.get(node).copied().unwrap_or(Distance::Infinite)
    }

    /// Nodes from `start` to `node` along the `previous` pointers, or `None` if unreachable.
    pub fn path_to(&self, node: &N) -> Option<Vec<N>> {
        if !self.distance(node).is_finite() {
            return None;
        }
        let mut path = vec![node.clone()];
        let mut cur = node;
        while let Some(prev) = self.previous.get(cur) {
            path.push(prev.clone());
            cur = prev;
        }
        path.reverse();
        Some(path)
    }
}

pub type DijkstraStep<N> = Step<DijkstraEvent<N>, DijkstraState<N>>;

struct Dijkstra<'a, N: NodeKey> {
    graph: &'a Graph<N>,
    start: N,
    dist: BTreeMap<N, Distance>,
    previous: BTreeMap<N, N>,
    status: BTreeMap<N, NodeStatus>,
    queue: Vec<QueueEntry<N>>,
    processed: Vec<(N, N)>,
    rec: Recorder<DijkstraStep<N>>,
}

impl<N: NodeKey> Dijkstra<'_, N> {
    fn record(&mut self, event: DijkstraEvent<N>, current: Option<N>, message: String) {
        let state = DijkstraState {
            distances: self.dist.clone(),
            previous: self.previous.clone(),
            status: self.status.clone(),
            current,
            queue: self.queue.clone(),
            processed: self.processed.clone(),
        };
        self.rec.record(event, state, message);
    }

    fn run(&mut self) {
        let start = self.start.clone();
        for node in self.graph.nodes() {
            let (d, s) = if *node == start {
                (Distance::Finite(0), NodeStatus::Current)
            } else {
                (Distance::Infinite, NodeStatus::Unvisited)
            };
            self.dist.insert(node.clone(), d);
            self.status.insert(node.clone(), s);
        }
        self.queue.push(QueueEntry {
            node: start.clone(),
            distance: 0,
        });
        self.record(
            DijkstraEvent::Initialize {
                start: start.clone(),
            },
            Some(start.clone()),
            "Initialize: Set distance to start node as 0, all others as infinity. Add start node to priority queue.".into(),
        );

        while !self.queue.is_empty() {
            self.queue.sort_by_key(|e| e.distance);
            let QueueEntry { node, .. } = self.queue.remove(0);
            if self.status.get(&node) == Some(&NodeStatus::Visited) {
                continue;
            }
            self.visit(node);
        }

        for node in self.previous.keys() {
            let mut cur = node;
            while *cur != start {
                self.status.insert(cur.clone(), NodeStatus::Path);
                match self.previous.get(cur) {
                    Some(prev) => cur = prev,
                    None => break,
                }
            }
        }
        self.status.insert(start.clone(), NodeStatus::Path);
        self.queue.clear();
        self.record(
            DijkstraEvent::Complete,
            None,
            "Algorithm complete! Final shortest paths from start node are highlighted.".into(),
        );
    }

    fn visit(&mut self, node: N) {
        // Only reachable nodes are ever queued.
        let Some(base) = self.dist.get(&node).and_then(|d| d.finite()) else {
            awarn!(node = %node, "dijkstra: popped a node without a finite distance");
            return;
        };
        self.status.insert(node.clone(), NodeStatus::Visited);
        self.record(
            DijkstraEvent::Visit {
                node: node.clone(),
                distance: base,
            },
            Some(node.clone()),
            format!("Visiting node {node} with distance {base}. Removed from priority queue."),
        );

        let graph = self.graph;
        for edge in graph.outgoing(&node) {
            let target = edge.target.clone();
            let candidate = base + u64::from(edge.weight);
            let key = (node.clone(), target.clone());
            if !self.processed.contains(&key) {
                self.processed.push(key);
            }

            let current = self.dist.get(&target).copied().unwrap_or(Distance::Infinite);
            let (outcome, message) = if Distance::Finite(candidate) < current {
                self.dist.insert(target.clone(), Distance::Finite(candidate));
                self.previous.insert(target.clone(), node.clone());
                match self.queue.iter_mut().find(|e| e.node == target) {
                    Some(entry) => entry.distance = candidate,
                    None => self.queue.push(QueueEntry {
                        node: target.clone(),
                        distance: candidate,
                    }),
                }
                self.status.insert(target.clone(), NodeStatus::Current);
                (
                    Relaxation::Improved {
                        old: current,
                        new: candidate,
                    },
                    format!(
                        "Relaxing edge {node} → {target}: Found better path with distance {candidate} (was {current}). Updated priority queue."
                    ),
                )
            } else {
                (
                    Relaxation::AlreadyOptimal { current, candidate },
                    format!(
                        "Relaxing edge {node} → {target}: Current distance {current} is already optimal (new path would be {candidate})."
                    ),
                )
            };

            self.record(
                DijkstraEvent::Relax {
                    from: node.clone(),
                    to: target,
                    weight: edge.weight,
                    outcome,
                },
                Some(node.clone()),
                message,
            );
        }
    }
}

/// Runs Dijkstra from `start`, returning every recorded step.
///
/// Unreachable nodes keep [`Distance::Infinite`] and are never marked [`NodeStatus::Path`].
pub fn trace<N: NodeKey>(graph: &Graph<N>, start: &N) -> Result<Vec<DijkstraStep<N>>, InputError> {
    if !graph.contains(start) {
        return Err(InputError::UnknownNode {
            node: start.to_string(),
        });
    }

    let mut engine = Dijkstra {
        graph,
        start: start.clone(),
        dist: BTreeMap::new(),
        previous: BTreeMap::new(),
        status: BTreeMap::new(),
        queue: Vec::new(),
        processed: Vec::new(),
        rec: Recorder::new(),
    };
    engine.run();

    adebug!(
        nodes = graph.nodes().len(),
        steps = engine.rec.len(),
        "dijkstra::trace"
    );
    Ok(engine.rec.into_steps())
}
