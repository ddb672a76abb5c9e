use alloc::string::ToString;
use alloc::vec;
use alloc::vec::Vec;

use crate::{InputError, NodeKey};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge<N> {
    pub source: N,
    pub target: N,
    pub weight: u32,
}

impl<N> Edge<N> {
    pub fn new(source: N, target: N, weight: u32) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }
}

/// A weighted graph given as an explicit node list plus an edge list.
///
/// Dijkstra reads edges as directed `source → target`; Kruskal reads them as undirected.
/// Edge order is significant: it is the relaxation order and the tie order when sorting.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "GraphParts<N>",
        bound(deserialize = "N: NodeKey + serde::Deserialize<'de>")
    )
)]
pub struct Graph<N> {
    nodes: Vec<N>,
    edges: Vec<Edge<N>>,
}

/// Unvalidated wire form of a [`Graph`]; deserialization goes through [`Graph::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GraphParts<N> {
    nodes: Vec<N>,
    edges: Vec<Edge<N>>,
}

#[cfg(feature = "serde")]
impl<N: NodeKey> TryFrom<GraphParts<N>> for Graph<N> {
    type Error = InputError;

    fn try_from(parts: GraphParts<N>) -> Result<Self, Self::Error> {
        Self::new(parts.nodes, parts.edges)
    }
}

impl<N: NodeKey> Graph<N> {
    /// Builds a graph, rejecting edges with unknown endpoints or a zero weight.
    pub fn new(nodes: Vec<N>, edges: Vec<Edge<N>>) -> Result<Self, InputError> {
        for edge in &edges {
            for end in [&edge.source, &edge.target] {
                if !nodes.contains(end) {
                    return Err(InputError::UnknownNode {
                        node: end.to_string(),
                    });
                }
            }
            if edge.weight == 0 {
                return Err(InputError::NonPositiveWeight {
                    from: edge.source.to_string(),
                    to: edge.target.to_string(),
                });
            }
        }
        Ok(Self { nodes, edges })
    }

    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge<N>] {
        &self.edges
    }

    pub fn contains(&self, node: &N) -> bool {
        self.nodes.contains(node)
    }

    /// Edges leaving `node`, in edge-list order.
    pub fn outgoing<'a>(&'a self, node: &'a N) -> impl Iterator<Item = &'a Edge<N>> + 'a {
        self.edges.iter().filter(move |e| &e.source == node)
    }
}

impl Graph<char> {
    /// The eight-node directed graph (A–H) shown on the shortest-path page.
    pub fn dijkstra_sample() -> Self {
        Self {
            nodes: vec!['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H'],
            edges: vec![
                Edge::new('A', 'B', 4),
                Edge::new('A', 'D', 7),
                Edge::new('A', 'G', 3),
                Edge::new('B', 'C', 3),
                Edge::new('B', 'E', 9),
                Edge::new('C', 'E', 2),
                Edge::new('C', 'H', 8),
                Edge::new('D', 'C', 5),
                Edge::new('D', 'F', 6),
                Edge::new('D', 'G', 2),
                Edge::new('E', 'H', 1),
                Edge::new('F', 'H', 4),
                Edge::new('G', 'F', 5),
            ],
        }
    }

    /// The six-node undirected graph (A–F) shown on the spanning-tree page.
    pub fn kruskal_sample() -> Self {
        Self {
            nodes: vec!['A', 'B', 'C', 'D', 'E', 'F'],
            edges: vec![
                Edge::new('A', 'B', 4),
                Edge::new('A', 'D', 3),
                Edge::new('B', 'C', 5),
                Edge::new('B', 'E', 9),
                Edge::new('C', 'F', 8),
                Edge::new('D', 'E', 7),
                Edge::new('E', 'F', 2),
                Edge::new('B', 'D', 6),
                Edge::new('C', 'E', 1),
            ],
        }
    }
}
