// Example: shortest paths, a spanning tree, union-find and N-Queens on the sample inputs.
use algotrace::{
    Graph, TraceLimits, TraceStep, UnionFind, dijkstra, element_count, kruskal, n_queens,
};

fn main() {
    let graph = Graph::dijkstra_sample();
    match dijkstra::trace(&graph, &'A') {
        Ok(steps) => {
            if let Some(last) = steps.last() {
                for node in graph.nodes() {
                    println!("A -> {node}: {} via {:?}", last.state.distance(node), last.state.path_to(node));
                }
            }
        }
        Err(err) => eprintln!("dijkstra: {err}"),
    }

    let steps = kruskal::trace(&Graph::kruskal_sample());
    for step in &steps {
        println!("{:<13} {}", step.kind(), step.message());
    }

    match UnionFind::walkthrough() {
        Ok(uf) => {
            for line in uf.log() {
                println!("{line}");
            }
            println!("parent={:?} size={:?}", uf.parent(), uf.size());
        }
        Err(err) => eprintln!("union-find: {err}"),
    }

    // A page asking for 30 elements gets the capped forest.
    let mut uf = UnionFind::new(element_count(30, &TraceLimits::default()));
    for (a, b) in [(0, 19), (19, 7), (7, 0)] {
        if let Err(err) = uf.union(a, b) {
            eprintln!("union-find: {err}");
        }
    }
    println!("{} elements, root of 7 = {:?}", uf.len(), uf.root_of(7));

    let steps = n_queens::trace(8);
    if let Some(last) = steps.last() {
        println!("8-queens: {} steps, board={:?}", steps.len(), last.state.board);
    }
}
