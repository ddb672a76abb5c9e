//! Kruskal's minimum spanning tree with a disjoint-set forest for cycle detection.
//!
//! Edges are sorted by weight (stable, so ties keep edge-list order). `find` compresses paths
//! recursively; `union` always points `find(source)`'s root at `find(target)`'s root.

use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::{Edge, Graph, NodeKey, Recorder, Step, StepKind};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KruskalEvent<N> {
    Start,
    AddToMst { edge: Edge<N> },
    /// Both endpoints already share `root`.
    RejectCycle { edge: Edge<N>, root: N },
    Complete { total_weight: u64 },
}

impl<N> StepKind for KruskalEvent<N> {
    fn tag(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::AddToMst { .. } => "add-to-mst",
            Self::RejectCycle { .. } => "reject-cycle",
            Self::Complete { .. } => "complete",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KruskalState<N> {
    pub current: Option<Edge<N>>,
    /// Sorted edges not yet considered.
    pub pending: Vec<Edge<N>>,
    pub mst: Vec<Edge<N>>,
    pub total_weight: u64,
    /// Disjoint-set parent pointers; a node mapping to itself is a set representative.
    pub forest: BTreeMap<N, N>,
}

pub type KruskalStep<N> = Step<KruskalEvent<N>, KruskalState<N>>;

fn find<N: NodeKey>(forest: &mut BTreeMap<N, N>, node: &N) -> N {
    let parent = forest.get(node).cloned().unwrap_or_else(|| node.clone());
    if parent == *node {
        return parent;
    }
    let root = find(forest, &parent);
    forest.insert(node.clone(), root.clone());
    root
}

/// Builds a minimum spanning forest of `graph` (edges read as undirected), returning every
/// recorded step.
///
/// For a connected graph the final step's `mst` has `|V| - 1` edges.
pub fn trace<N: NodeKey>(graph: &Graph<N>) -> Vec<KruskalStep<N>> {
    let mut rec = Recorder::new();
    let mut pending = graph.edges().to_vec();
    pending.sort_by_key(|e| e.weight);
    pending.reverse();

    let mut forest: BTreeMap<N, N> = graph
        .nodes()
        .iter()
        .map(|n| (n.clone(), n.clone()))
        .collect();
    let mut mst: Vec<Edge<N>> = Vec::new();
    let mut total_weight = 0u64;

    let snapshot = |current: Option<Edge<N>>,
                    pending: &[Edge<N>],
                    mst: &[Edge<N>],
                    total_weight: u64,
                    forest: &BTreeMap<N, N>| KruskalState {
        current,
        pending: pending.iter().rev().cloned().collect(),
        mst: mst.to_vec(),
        total_weight,
        forest: forest.clone(),
    };

    rec.record(
        KruskalEvent::Start,
        snapshot(None, &pending, &mst, total_weight, &forest),
        "Start Kruskal's algorithm with all edges sorted by weight.".into(),
    );

    // `pending` is kept reversed so the lightest edge pops off the back.
    while let Some(edge) = pending.pop() {
        let source_root = find(&mut forest, &edge.source);
        let target_root = find(&mut forest, &edge.target);

        let (event, message): (_, String) = if source_root != target_root {
            forest.insert(source_root, target_root);
            mst.push(edge.clone());
            total_weight += u64::from(edge.weight);
            (
                KruskalEvent::AddToMst { edge: edge.clone() },
                format!(
                    "Add edge {}-{} (weight: {}) to MST as it doesn't create a cycle.",
                    edge.source, edge.target, edge.weight
                ),
            )
        } else {
            (
                KruskalEvent::RejectCycle {
                    edge: edge.clone(),
                    root: source_root,
                },
                format!(
                    "Skip edge {}-{} (weight: {}) as it would create a cycle.",
                    edge.source, edge.target, edge.weight
                ),
            )
        };
        rec.record(
            event,
            snapshot(Some(edge), &pending, &mst, total_weight, &forest),
            message,
        );
    }

    rec.record(
        KruskalEvent::Complete { total_weight },
        snapshot(None, &pending, &mst, total_weight, &forest),
        format!(
            "Algorithm complete! The Minimum Spanning Tree has been found (total weight {total_weight})."
        ),
    );

    adebug!(
        edges = graph.edges().len(),
        mst = mst.len(),
        steps = rec.len(),
        "kruskal::trace"
    );
    rec.into_steps()
}
